use crate::error::Error;
use crate::pdf::{Assembler, SourceDocument};
use anyhow::{Context, Result};
use std::path::Path;

/// Combine an explicit list of PDFs, in the order given, into one document.
pub fn run<P: AsRef<Path>, Q: AsRef<Path>>(
    inputs: &[P],
    output_dir: Q,
    output_name: &str,
) -> Result<()> {
    let output_dir = output_dir.as_ref();

    if inputs.is_empty() {
        return Err(Error::EmptyList.into());
    }

    let mut assembler = Assembler::new();
    for input in inputs {
        let doc = SourceDocument::open(input)?;
        let id = assembler.add_source(doc);
        assembler.select_all(id);
        println!("Added: {}", input.as_ref().display());
    }

    std::fs::create_dir_all(output_dir)
        .with_context(|| format!("Failed to create directory: {}", output_dir.display()))?;

    let output_path = output_dir.join(output_name);
    let pages = assembler.selected_count();
    assembler.write(&output_path)?;

    println!(
        "Combined {} file(s) ({} pages) into {}",
        inputs.len(),
        pages,
        output_path.display()
    );

    Ok(())
}
