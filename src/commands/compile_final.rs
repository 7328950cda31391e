use crate::error::Error;
use crate::page_index;
use crate::pdf::{Assembler, SourceDocument};
use anyhow::Result;
use std::path::Path;

/// Compile the final signed operating agreement.
///
/// The output is built from an ordered recipe of page selections:
///
/// 1. the clean OA's pages before the first signature page;
/// 2. the signature block — the clean OA's manager signature page and every
///    signed copy's investor signature page, kept in the order those pages
///    hold in the agreement itself (manager first when its page comes
///    first); signed copies contribute in filename order;
/// 3. the clean OA's pages after the last signature page.
///
/// Assembly happens in memory; only the final document is written, next to
/// the clean OA unless `output_name` says otherwise.
pub fn run<P: AsRef<Path>, Q: AsRef<Path>>(
    clean_oa: P,
    signed_dir: Q,
    investor_sig_page: i64,
    manager_sig_page: i64,
    output_name: Option<&str>,
) -> Result<()> {
    let clean_oa = clean_oa.as_ref();
    let signed_dir = signed_dir.as_ref();

    let clean = SourceDocument::open(clean_oa)?;
    let page_count = clean.page_count();

    let investor = page_index::resolve(investor_sig_page, page_count).ok_or_else(|| {
        Error::PageOutOfRange {
            path: clean_oa.to_path_buf(),
            index: investor_sig_page,
            page_count,
        }
    })?;
    let manager = page_index::resolve(manager_sig_page, page_count).ok_or_else(|| {
        Error::PageOutOfRange {
            path: clean_oa.to_path_buf(),
            index: manager_sig_page,
            page_count,
        }
    })?;

    let signed_files = crate::commands::pdf_files_in(signed_dir)?;
    if signed_files.is_empty() {
        return Err(Error::EmptyDirectory {
            path: signed_dir.to_path_buf(),
        }
        .into());
    }

    let mut assembler = Assembler::new();
    let clean_id = assembler.add_source(clean);

    // The signature page position is shared by every copy of the agreement,
    // so the investor index is resolved against each signed copy itself.
    let mut signed_pages = Vec::with_capacity(signed_files.len());
    for path in &signed_files {
        let doc = SourceDocument::open(path)?;
        let page = page_index::resolve(investor_sig_page, doc.page_count()).ok_or_else(|| {
            Error::MissingSignaturePage {
                path: path.clone(),
                index: investor_sig_page,
            }
        })?;
        let id = assembler.add_source(doc);
        signed_pages.push((id, page));
        println!("Added signed copy: {}", path.display());
    }

    let first_sig = investor.min(manager);
    let last_sig = investor.max(manager);

    if first_sig > 0 {
        assembler.select_span(clean_id, 0..first_sig)?;
    }
    if manager < investor {
        assembler.select_page(clean_id, manager)?;
        for (id, page) in &signed_pages {
            assembler.select_page(*id, *page)?;
        }
    } else {
        for (id, page) in &signed_pages {
            assembler.select_page(*id, *page)?;
        }
        assembler.select_page(clean_id, manager)?;
    }
    if last_sig + 1 < page_count {
        assembler.select_span(clean_id, last_sig + 1..page_count)?;
    }

    let output_name = match output_name {
        Some(name) => name.to_string(),
        None => {
            let stem = clean_oa
                .file_stem()
                .and_then(|s| s.to_str())
                .unwrap_or("Operating Agreement");
            format!("{} FINAL COMBINED.pdf", stem)
        }
    };
    let output_path = clean_oa
        .parent()
        .unwrap_or_else(|| Path::new(""))
        .join(output_name);

    let pages = assembler.selected_count();
    assembler.write(&output_path)?;

    println!(
        "Final combined PDF: {} ({} pages from {} signed copies)",
        output_path.display(),
        pages,
        signed_files.len()
    );

    Ok(())
}
