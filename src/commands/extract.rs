use crate::error::Error;
use crate::page_index;
use crate::pdf::{Assembler, SourceDocument};
use anyhow::{Context, Result};
use std::path::Path;

/// Extract one page from each PDF in a directory.
///
/// Every source is opened and its page index resolved before any output is
/// written, so a failing batch leaves nothing behind.
pub fn run<P: AsRef<Path>, Q: AsRef<Path>>(
    input_dir: P,
    page_number: i64,
    output_dir: Q,
    output_prefix: &str,
) -> Result<()> {
    let input_dir = input_dir.as_ref();
    let output_dir = output_dir.as_ref();

    let files = crate::commands::pdf_files_in(input_dir)?;

    let mut sources = Vec::with_capacity(files.len());
    for path in files {
        let doc = SourceDocument::open(&path)?;
        let page = page_index::resolve(page_number, doc.page_count()).ok_or_else(|| {
            Error::PageOutOfRange {
                path: path.clone(),
                index: page_number,
                page_count: doc.page_count(),
            }
        })?;
        sources.push((doc, page));
    }

    std::fs::create_dir_all(output_dir)
        .with_context(|| format!("Failed to create directory: {}", output_dir.display()))?;

    let mut written = 0;
    for (doc, page) in sources {
        let name = doc
            .path()
            .file_name()
            .and_then(|s| s.to_str())
            .unwrap_or("source.pdf");
        let output_path = output_dir.join(format!("{}{}", output_prefix, name));

        let mut assembler = Assembler::new();
        let id = assembler.add_source(doc);
        assembler.select_page(id, page)?;
        assembler.write(&output_path)?;

        println!("Created: {}", output_path.display());
        written += 1;
    }

    println!(
        "Extracted page {} from {} file(s) into {}",
        page_number,
        written,
        output_dir.display()
    );

    Ok(())
}
