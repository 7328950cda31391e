pub mod combine;
pub mod combine_list;
pub mod compile_final;
pub mod extract;
pub mod slice;

use crate::error::Result;
use std::path::{Path, PathBuf};

/// List the PDF files directly inside `dir`, sorted by filename.
///
/// OS enumeration order is not stable across platforms, so the listing is
/// always sorted before use. The extension check is ASCII case-insensitive
/// and the walk is non-recursive.
pub(crate) fn pdf_files_in(dir: &Path) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();

    for entry in std::fs::read_dir(dir)? {
        let entry = entry?;
        let path = entry.path();
        if !path.is_file() {
            continue;
        }
        let is_pdf = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|ext| ext.eq_ignore_ascii_case("pdf"))
            .unwrap_or(false);
        if is_pdf {
            files.push(path);
        }
    }

    files.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
    Ok(files)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pdf::testutil::write_pdf;

    #[test]
    fn test_listing_is_sorted_and_filtered() {
        let dir = tempfile::tempdir().unwrap();
        write_pdf(dir.path(), "b.pdf", "b", 1);
        write_pdf(dir.path(), "a.PDF", "a", 1);
        write_pdf(dir.path(), "c.pdf", "c", 1);
        std::fs::write(dir.path().join("notes.txt"), "not a pdf").unwrap();
        std::fs::create_dir(dir.path().join("sub.pdf")).unwrap();

        let files = pdf_files_in(dir.path()).unwrap();
        let names: Vec<_> = files
            .iter()
            .map(|p| p.file_name().unwrap().to_str().unwrap())
            .collect();
        assert_eq!(names, ["a.PDF", "b.pdf", "c.pdf"]);
    }

    #[test]
    fn test_empty_directory_lists_nothing() {
        let dir = tempfile::tempdir().unwrap();
        assert!(pdf_files_in(dir.path()).unwrap().is_empty());
    }
}
