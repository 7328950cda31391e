use crate::error::Error;
use crate::page_index::PageSpan;
use crate::pdf::{Assembler, SourceDocument};
use anyhow::{Context, Result};
use std::path::Path;

/// Copy a contiguous page range of one PDF into a new document.
pub fn run<P: AsRef<Path>, Q: AsRef<Path>>(
    input_file: P,
    start_page: i64,
    end_page: i64,
    output_dir: Q,
    output_name: &str,
) -> Result<()> {
    let input_file = input_file.as_ref();
    let output_dir = output_dir.as_ref();

    let doc = SourceDocument::open(input_file)?;
    let range = PageSpan::new(start_page, end_page)
        .resolve(doc.page_count())
        .ok_or_else(|| Error::InvalidRange {
            path: input_file.to_path_buf(),
            start: start_page,
            end: end_page,
            page_count: doc.page_count(),
        })?;

    let mut assembler = Assembler::new();
    let id = assembler.add_source(doc);
    assembler.select_span(id, range.clone())?;

    std::fs::create_dir_all(output_dir)
        .with_context(|| format!("Failed to create directory: {}", output_dir.display()))?;

    let output_path = output_dir.join(output_name);
    assembler.write(&output_path)?;

    println!(
        "Sliced {} page(s) to {}",
        range.len(),
        output_path.display()
    );

    Ok(())
}
