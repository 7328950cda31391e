//! Builders for small in-memory PDFs used across the assembly tests.
//!
//! Every generated page carries a `(<tag>-<index>)` text marker in its
//! content stream, so page identity and order remain observable after
//! pages have been copied into an assembled output.

use lopdf::{dictionary, Document, Object, ObjectId, Stream};
use std::path::{Path, PathBuf};

/// Build a PDF with `page_count` marker pages.
pub fn build_pdf(tag: &str, page_count: u32) -> Document {
    let mut doc = Document::with_version("1.5");
    let pages_id: ObjectId = doc.new_object_id();

    let mut kids: Vec<Object> = Vec::new();
    for i in 0..page_count {
        let marker = format!("BT /F1 12 Tf 72 720 Td ({}-{}) Tj ET", tag, i);
        let content_id = doc.add_object(Stream::new(dictionary! {}, marker.into_bytes()));
        let page_id = doc.add_object(dictionary! {
            "Type" => "Page",
            "Parent" => pages_id,
            "MediaBox" => vec![0.into(), 0.into(), 612.into(), 792.into()],
            "Contents" => content_id,
        });
        kids.push(page_id.into());
    }

    doc.objects.insert(
        pages_id,
        Object::Dictionary(dictionary! {
            "Type" => "Pages",
            "Kids" => kids,
            "Count" => page_count as i64,
        }),
    );

    let catalog_id = doc.add_object(dictionary! {
        "Type" => "Catalog",
        "Pages" => pages_id,
    });
    doc.trailer.set("Root", catalog_id);

    doc
}

/// Write a marker PDF into `dir` under `name` and return its path.
pub fn write_pdf(dir: &Path, name: &str, tag: &str, page_count: u32) -> PathBuf {
    let path = dir.join(name);
    let mut doc = build_pdf(tag, page_count);
    doc.save(&path).expect("failed to save test PDF");
    path
}

/// Read back the page markers of a saved PDF, in page order.
pub fn page_markers(path: &Path) -> Vec<String> {
    let doc = Document::load(path).expect("failed to load PDF");
    let mut pages: Vec<_> = doc.get_pages().into_iter().collect();
    pages.sort_by_key(|(num, _)| *num);

    pages
        .into_iter()
        .map(|(_, page_id)| {
            let content = doc.get_page_content(page_id).expect("page has no content");
            let text = String::from_utf8_lossy(&content);
            let start = text.find('(').expect("marker open paren not found");
            let end = start + text[start..].find(')').expect("marker close paren not found");
            text[start + 1..end].to_string()
        })
        .collect()
}
