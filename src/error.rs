//! Error types for page assembly operations.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for assembly operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while extracting or assembling PDF pages.
#[derive(Error, Debug)]
pub enum Error {
    /// A file could not be loaded as a PDF.
    #[error("not a PDF: {}: {source}", path.display())]
    NotAPdf {
        path: PathBuf,
        #[source]
        source: lopdf::Error,
    },

    /// A page index resolved outside the document.
    #[error("page {index} is out of range for {} ({page_count} pages)", path.display())]
    PageOutOfRange {
        path: PathBuf,
        index: i64,
        page_count: u32,
    },

    /// A page span was empty or out of bounds after resolution.
    #[error(
        "invalid page range {start}..{end} for {} ({page_count} pages)",
        path.display()
    )]
    InvalidRange {
        path: PathBuf,
        start: i64,
        end: i64,
        page_count: u32,
    },

    /// A directory input contained no PDF files.
    #[error("no PDF files found in {}", path.display())]
    EmptyDirectory { path: PathBuf },

    /// An explicit input list contained no files.
    #[error("no input files given")]
    EmptyList,

    /// A signed copy has no page at the expected signature position.
    #[error("no signature page at index {index} in {}", path.display())]
    MissingSignaturePage { path: PathBuf, index: i64 },

    /// No document catalog found among the source documents.
    #[error("no document catalog found among the source documents")]
    MissingCatalog,

    /// No page tree root found among the source documents.
    #[error("no page tree root found among the source documents")]
    MissingPageTree,

    /// I/O error when reading or writing files.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Error from the underlying PDF library.
    #[error("PDF error: {0}")]
    Pdf(#[from] lopdf::Error),
}
