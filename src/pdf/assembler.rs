use crate::error::{Error, Result};
use crate::pdf::SourceDocument;
use lopdf::{Document, Object, ObjectId};
use std::collections::BTreeMap;
use std::ops::Range;
use std::path::Path;
use tempfile::NamedTempFile;

/// Handle to a source registered with an [`Assembler`].
#[derive(Debug, Clone, Copy)]
pub struct SourceId(usize);

/// Builds one output PDF from an ordered selection of pages across any
/// number of source documents.
///
/// Pages appear in the output in exactly the order they were selected.
/// Every selection is validated against its source's page count when it is
/// made, so an `Assembler` that accepts all selections will assemble.
pub struct Assembler {
    sources: Vec<SourceDocument>,
    selections: Vec<(usize, u32)>,
}

impl Assembler {
    pub fn new() -> Self {
        Assembler {
            sources: Vec::new(),
            selections: Vec::new(),
        }
    }

    /// Register a source document for selection.
    pub fn add_source(&mut self, source: SourceDocument) -> SourceId {
        self.sources.push(source);
        SourceId(self.sources.len() - 1)
    }

    /// Select a single page (zero-based) of `source` as the next output page.
    pub fn select_page(&mut self, source: SourceId, page: u32) -> Result<()> {
        let doc = &self.sources[source.0];
        if page >= doc.page_count() {
            return Err(Error::PageOutOfRange {
                path: doc.path().to_path_buf(),
                index: i64::from(page),
                page_count: doc.page_count(),
            });
        }
        self.selections.push((source.0, page));
        Ok(())
    }

    /// Select a contiguous span of pages, preserving their order.
    pub fn select_span(&mut self, source: SourceId, span: Range<u32>) -> Result<()> {
        for page in span {
            self.select_page(source, page)?;
        }
        Ok(())
    }

    /// Select every page of `source`, in original order.
    pub fn select_all(&mut self, source: SourceId) {
        let count = self.sources[source.0].page_count();
        self.selections
            .extend((0..count).map(|page| (source.0, page)));
    }

    /// Number of pages selected so far.
    pub fn selected_count(&self) -> usize {
        self.selections.len()
    }

    /// Merge the selected pages into a single document.
    ///
    /// Each source's objects are renumbered into a disjoint id range, then a
    /// fresh Catalog/Pages pair is built whose Kids are the selected pages
    /// in selection order. Unreferenced objects are pruned afterwards, so
    /// unselected pages do not leak into the output.
    pub fn assemble(self) -> Result<Document> {
        let mut max_id = 1;
        let mut document = Document::with_version("1.5");

        // Pages of each source in page order, plus every object of every
        // source, all renumbered into disjoint id ranges.
        let mut source_pages: Vec<Vec<(ObjectId, Object)>> = Vec::new();
        let mut documents_objects: BTreeMap<ObjectId, Object> = BTreeMap::new();

        for source in self.sources {
            let mut doc = source.into_document();
            doc.renumber_objects_with(max_id);
            max_id = doc.max_id + 1;

            let mut pages = Vec::new();
            for (_, object_id) in doc.get_pages() {
                let page = doc.get_object(object_id)?.to_owned();
                pages.push((object_id, page));
            }
            source_pages.push(pages);
            documents_objects.extend(doc.objects);
        }

        // "Catalog" and "Pages" are mandatory; keep the first of each and
        // fold the remaining "Pages" dictionaries into it.
        let mut catalog_object: Option<(ObjectId, Object)> = None;
        let mut pages_object: Option<(ObjectId, Object)> = None;

        for (object_id, object) in documents_objects.iter() {
            match object.type_name().unwrap_or(b"") {
                b"Catalog" => {
                    catalog_object = Some((
                        if let Some((id, _)) = catalog_object {
                            id
                        } else {
                            *object_id
                        },
                        object.clone(),
                    ));
                }
                b"Pages" => {
                    if let Ok(dictionary) = object.as_dict() {
                        let mut dictionary = dictionary.clone();
                        if let Some((_, ref object)) = pages_object {
                            if let Ok(old_dictionary) = object.as_dict() {
                                dictionary.extend(old_dictionary);
                            }
                        }

                        pages_object = Some((
                            if let Some((id, _)) = pages_object {
                                id
                            } else {
                                *object_id
                            },
                            Object::Dictionary(dictionary),
                        ));
                    }
                }
                b"Page" => {}     // Re-inserted below, in selection order
                b"Outlines" => {} // Not carried into assembled output
                b"Outline" => {}
                _ => {
                    document.objects.insert(*object_id, object.clone());
                }
            }
        }

        let Some(pages_object) = pages_object else {
            return Err(Error::MissingPageTree);
        };
        let Some(catalog_object) = catalog_object else {
            return Err(Error::MissingCatalog);
        };

        // Insert the selected pages, reparented onto the merged "Pages".
        let mut kids = Vec::new();
        for (source_index, page_index) in &self.selections {
            let (object_id, object) = &source_pages[*source_index][*page_index as usize];
            if let Ok(dictionary) = object.as_dict() {
                let mut dictionary = dictionary.clone();
                dictionary.set("Parent", pages_object.0);

                kids.push(*object_id);
                document
                    .objects
                    .insert(*object_id, Object::Dictionary(dictionary));
            }
        }

        // Build the new "Pages" with the selected Kids.
        if let Ok(dictionary) = pages_object.1.as_dict() {
            let mut dictionary = dictionary.clone();
            dictionary.set("Count", kids.len() as u32);
            dictionary.set(
                "Kids",
                kids.into_iter().map(Object::Reference).collect::<Vec<_>>(),
            );

            document
                .objects
                .insert(pages_object.0, Object::Dictionary(dictionary));
        }

        // Build the new "Catalog" pointing at it.
        if let Ok(dictionary) = catalog_object.1.as_dict() {
            let mut dictionary = dictionary.clone();
            dictionary.set("Pages", pages_object.0);
            dictionary.remove(b"Outlines");

            document
                .objects
                .insert(catalog_object.0, Object::Dictionary(dictionary));
        }

        document.trailer.set("Root", catalog_object.0);
        document.max_id = document.objects.len() as u32;
        document.renumber_objects();
        document.prune_objects();
        document.compress();

        Ok(document)
    }

    /// Assemble and write to `path`.
    ///
    /// The document is saved to a temporary file in the destination
    /// directory and renamed into place, so a failure mid-write never
    /// leaves a truncated output behind.
    pub fn write<P: AsRef<Path>>(self, path: P) -> Result<()> {
        let path = path.as_ref();
        let mut document = self.assemble()?;

        let dir = match path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };
        let mut tmp = NamedTempFile::new_in(dir)?;
        document.save_to(tmp.as_file_mut())?;
        tmp.persist(path).map_err(|e| Error::Io(e.error))?;

        Ok(())
    }
}

impl Default for Assembler {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pdf::testutil::{page_markers, write_pdf};

    #[test]
    fn test_combine_full_documents() {
        let dir = tempfile::tempdir().unwrap();
        let a = write_pdf(dir.path(), "a.pdf", "a", 3);
        let b = write_pdf(dir.path(), "b.pdf", "b", 2);

        let mut assembler = Assembler::new();
        let a_id = assembler.add_source(SourceDocument::open(&a).unwrap());
        assembler.select_all(a_id);
        let b_id = assembler.add_source(SourceDocument::open(&b).unwrap());
        assembler.select_all(b_id);

        assert_eq!(assembler.selected_count(), 5);

        let out = dir.path().join("out.pdf");
        assembler.write(&out).unwrap();

        assert_eq!(page_markers(&out), ["a-0", "a-1", "a-2", "b-0", "b-1"]);
    }

    #[test]
    fn test_interleaved_selection_order() {
        let dir = tempfile::tempdir().unwrap();
        let a = write_pdf(dir.path(), "a.pdf", "a", 3);
        let b = write_pdf(dir.path(), "b.pdf", "b", 3);

        let mut assembler = Assembler::new();
        let a_id = assembler.add_source(SourceDocument::open(&a).unwrap());
        let b_id = assembler.add_source(SourceDocument::open(&b).unwrap());

        assembler.select_page(b_id, 2).unwrap();
        assembler.select_page(a_id, 0).unwrap();
        assembler.select_span(a_id, 1..3).unwrap();
        assembler.select_page(b_id, 0).unwrap();

        let out = dir.path().join("out.pdf");
        assembler.write(&out).unwrap();

        assert_eq!(page_markers(&out), ["b-2", "a-0", "a-1", "a-2", "b-0"]);
    }

    #[test]
    fn test_select_page_out_of_range() {
        let dir = tempfile::tempdir().unwrap();
        let a = write_pdf(dir.path(), "a.pdf", "a", 3);

        let mut assembler = Assembler::new();
        let a_id = assembler.add_source(SourceDocument::open(&a).unwrap());

        let err = assembler.select_page(a_id, 3).unwrap_err();
        assert!(matches!(err, Error::PageOutOfRange { page_count: 3, .. }));
    }

    #[test]
    fn test_same_source_selected_repeatedly() {
        let dir = tempfile::tempdir().unwrap();
        let a = write_pdf(dir.path(), "a.pdf", "a", 4);

        let mut assembler = Assembler::new();
        let a_id = assembler.add_source(SourceDocument::open(&a).unwrap());
        assembler.select_span(a_id, 0..2).unwrap();
        assembler.select_page(a_id, 3).unwrap();

        let out = dir.path().join("out.pdf");
        assembler.write(&out).unwrap();

        assert_eq!(page_markers(&out), ["a-0", "a-1", "a-3"]);
    }

    #[test]
    fn test_output_loads_as_pdf() {
        let dir = tempfile::tempdir().unwrap();
        let a = write_pdf(dir.path(), "a.pdf", "a", 2);

        let mut assembler = Assembler::new();
        let a_id = assembler.add_source(SourceDocument::open(&a).unwrap());
        assembler.select_all(a_id);

        let out = dir.path().join("nested").join("out.pdf");
        std::fs::create_dir_all(out.parent().unwrap()).unwrap();
        assembler.write(&out).unwrap();

        let reloaded = SourceDocument::open(&out).unwrap();
        assert_eq!(reloaded.page_count(), 2);
    }
}
