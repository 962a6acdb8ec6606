pub const FRONT_MATTER_DELIMITER: &str = "---";

/// Removes a leading front-matter block from a document.
///
/// Content starting with `---` is split on the delimiter at most twice and
/// only the text after the second delimiter is kept. Anything without a
/// closing delimiter is returned untouched.
pub fn strip_front_matter(content: &str) -> &str {
    if !content.starts_with(FRONT_MATTER_DELIMITER) {
        return content;
    }

    content
        .splitn(3, FRONT_MATTER_DELIMITER)
        .nth(2)
        .unwrap_or(content)
}
