use std::{fmt, sync::Arc};

/// Separator placed between consecutive documents in the corpus.
pub const DOCUMENT_SEPARATOR: &str = "\n\n";

/// The concatenated text of every loaded book document.
///
/// Built once at startup and never mutated afterwards; clones share the same
/// allocation, so handing it to request handlers is cheap and lock free.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Corpus {
    text: Arc<str>,
}

impl Corpus {
    pub fn new(text: impl Into<Arc<str>>) -> Self {
        Self { text: text.into() }
    }

    pub fn empty() -> Self {
        Self::new("")
    }

    /// Joins document texts, in the given order, with a blank line.
    pub fn from_documents<I, S>(documents: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut text = String::new();
        for (index, document) in documents.into_iter().enumerate() {
            if index > 0 {
                text.push_str(DOCUMENT_SEPARATOR);
            }
            text.push_str(document.as_ref());
        }
        Self::new(text)
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    pub fn len(&self) -> usize {
        self.text.len()
    }
}

impl Default for Corpus {
    fn default() -> Self {
        Self::empty()
    }
}

impl fmt::Display for Corpus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_documents_joined_with_blank_line() {
        let corpus = Corpus::from_documents(["first", "second", "third"]);
        assert_eq!(corpus.as_str(), "first\n\nsecond\n\nthird");
        assert_eq!(corpus.len(), "first\n\nsecond\n\nthird".len());
    }

    #[test]
    fn test_no_documents_yields_empty_corpus() {
        let corpus = Corpus::from_documents(Vec::<String>::new());
        assert!(corpus.is_empty());
        assert_eq!(corpus, Corpus::empty());
        assert_eq!(corpus, Corpus::default());
    }

    #[test]
    fn test_clones_share_text() {
        let corpus = Corpus::new("The sky is blue.");
        let clone = corpus.clone();
        assert!(Arc::ptr_eq(&corpus.text, &clone.text));
        assert_eq!(clone.to_string(), "The sky is blue.");
    }
}
