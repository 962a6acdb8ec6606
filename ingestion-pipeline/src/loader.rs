use std::path::{Path, PathBuf};

use common::{corpus::Corpus, error::AppError};
use tracing::{debug, error, info, instrument, warn};
use walkdir::{DirEntry, WalkDir};

use crate::front_matter::strip_front_matter;

/// File extensions treated as book documents.
pub const DOCUMENT_EXTENSIONS: [&str; 2] = ["md", "mdx"];

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LoadSummary {
    pub loaded: usize,
    pub failed: usize,
}

pub fn is_book_document(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| DOCUMENT_EXTENSIONS.contains(&ext))
}

/// Dot-files and dot-directories below the root are not part of the book.
fn is_hidden(entry: &DirEntry) -> bool {
    entry.depth() > 0 && entry.file_name().to_string_lossy().starts_with('.')
}

/// Recursively lists every markdown document under `root`, sorted by path.
pub fn discover_documents(root: &Path) -> Vec<PathBuf> {
    let mut documents = Vec::new();

    let walker = WalkDir::new(root)
        .follow_links(true)
        .into_iter()
        .filter_entry(|entry| !is_hidden(entry));
    for entry in walker {
        match entry {
            Ok(entry) if entry.file_type().is_file() && is_book_document(entry.path()) => {
                documents.push(entry.into_path());
            }
            Ok(_) => {}
            Err(e) => warn!(error = %e, "Skipping unreadable directory entry"),
        }
    }

    documents.sort();
    documents
}

/// Loads the book corpus from `root`.
///
/// Never fails: a missing directory or unreadable files degrade to a smaller
/// (possibly empty) corpus, with the problems logged.
pub async fn load_corpus(root: &Path) -> Corpus {
    let (corpus, _summary) = load_corpus_with_summary(root).await;
    corpus
}

#[instrument(skip_all, fields(root = %root.display()))]
pub async fn load_corpus_with_summary(root: &Path) -> (Corpus, LoadSummary) {
    if !root.is_dir() {
        warn!("Book docs directory not found, starting with an empty corpus");
        return (Corpus::empty(), LoadSummary::default());
    }

    let paths = match discover(root.to_path_buf()).await {
        Ok(paths) => paths,
        Err(e) => {
            error!(error = %e, "Failed to scan book docs directory");
            return (Corpus::empty(), LoadSummary::default());
        }
    };
    debug!(documents = paths.len(), "Discovered book documents");

    let mut summary = LoadSummary::default();
    let mut documents = Vec::with_capacity(paths.len());
    for path in paths {
        match read_document(&path).await {
            Ok(text) => {
                documents.push(text);
                summary.loaded = summary.loaded.saturating_add(1);
            }
            Err(e) => {
                error!(path = %path.display(), error = %e, "Error reading book document");
                summary.failed = summary.failed.saturating_add(1);
            }
        }
    }

    let corpus = Corpus::from_documents(&documents);
    info!(
        loaded = summary.loaded,
        failed = summary.failed,
        bytes = corpus.len(),
        "Book corpus loaded"
    );

    (corpus, summary)
}

/// Runs the blocking directory walk off the async runtime.
async fn discover(root: PathBuf) -> Result<Vec<PathBuf>, AppError> {
    let paths = tokio::task::spawn_blocking(move || discover_documents(&root)).await?;
    Ok(paths)
}

/// Reads one document and drops its front matter.
async fn read_document(path: &Path) -> Result<String, AppError> {
    let content = tokio::fs::read_to_string(path).await?;
    Ok(strip_front_matter(&content).to_owned())
}
