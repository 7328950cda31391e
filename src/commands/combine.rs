use crate::error::Error;
use crate::pdf::{Assembler, SourceDocument};
use anyhow::{Context, Result};
use std::path::Path;

/// Combine every PDF in a directory, filename order, into one document.
pub fn run<P: AsRef<Path>, Q: AsRef<Path>>(
    input_dir: P,
    output_dir: Q,
    output_name: &str,
) -> Result<()> {
    let input_dir = input_dir.as_ref();
    let output_dir = output_dir.as_ref();

    let files = crate::commands::pdf_files_in(input_dir)?;
    if files.is_empty() {
        return Err(Error::EmptyDirectory {
            path: input_dir.to_path_buf(),
        }
        .into());
    }

    let mut assembler = Assembler::new();
    for path in &files {
        let doc = SourceDocument::open(path)?;
        let id = assembler.add_source(doc);
        assembler.select_all(id);
        println!("Added: {}", path.display());
    }

    std::fs::create_dir_all(output_dir)
        .with_context(|| format!("Failed to create directory: {}", output_dir.display()))?;

    let output_path = output_dir.join(output_name);
    let pages = assembler.selected_count();
    assembler.write(&output_path)?;

    println!(
        "Combined {} file(s) ({} pages) into {}",
        files.len(),
        pages,
        output_path.display()
    );

    Ok(())
}
