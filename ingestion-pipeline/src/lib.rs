//! Builds the book corpus from the markdown sources on disk.

pub mod front_matter;
pub mod loader;

pub use loader::{discover_documents, load_corpus, load_corpus_with_summary, LoadSummary};
