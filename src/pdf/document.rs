use crate::error::{Error, Result};
use lopdf::Document;
use std::path::{Path, PathBuf};

/// A source PDF opened for the duration of one assembly operation.
///
/// The underlying file handle is released as soon as `lopdf` finishes
/// loading; dropping the value releases everything else on every exit path.
pub struct SourceDocument {
    doc: Document,
    path: PathBuf,
    page_count: u32,
}

impl SourceDocument {
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let doc = Document::load(&path).map_err(|source| Error::NotAPdf {
            path: path.clone(),
            source,
        })?;
        let page_count = doc.get_pages().len() as u32;
        Ok(SourceDocument {
            doc,
            path,
            page_count,
        })
    }

    pub fn page_count(&self) -> u32 {
        self.page_count
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub(crate) fn into_document(self) -> Document {
        self.doc
    }
}
