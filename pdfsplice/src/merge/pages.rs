//! Page extraction and page tree manipulation.
//!
//! Both merging and splitting end up re-homing page objects under a single
//! `Pages` root. A page that moves loses the attributes it inherited from
//! its old ancestors, so those are copied onto the page first.

use lopdf::{Document, Object, ObjectId};

use crate::error::{Result, SpliceError};
use crate::split::PageSpan;

/// Deepest page tree we are willing to walk.
pub const MAX_TREE_DEPTH: usize = 64;

/// Page attributes a page may inherit from its ancestors.
const INHERITABLE_KEYS: [&[u8]; 4] = [b"Resources", b"MediaBox", b"CropBox", b"Rotate"];

/// Catalog entries that refer to specific pages of the source document.
const PAGE_BOUND_CATALOG_KEYS: [&[u8]; 3] = [b"Outlines", b"PageLabels", b"OpenAction"];

/// Page extractor for manipulating pages in PDFs.
#[derive(Debug, Clone, Copy, Default)]
pub struct PageExtractor;

impl PageExtractor {
    /// Create a new page extractor.
    pub fn new() -> Self {
        Self
    }

    /// Build a new document holding only the pages of `span`.
    ///
    /// The source is left untouched. Outlines, page labels and the open
    /// action are dropped since they point at pages that may be gone.
    ///
    /// # Errors
    ///
    /// Returns an error if the span reaches past the last page or the page
    /// tree cannot be rewritten.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// # use pdfsplice::merge::pages::PageExtractor;
    /// # use pdfsplice::split::PageSpan;
    /// # use lopdf::Document;
    /// # fn example(doc: Document) -> Result<(), Box<dyn std::error::Error>> {
    /// let extractor = PageExtractor::new();
    /// let first_two = extractor.extract_span(&doc, PageSpan::new(0, 1))?;
    /// assert_eq!(extractor.page_count(&first_two), 2);
    /// # Ok(())
    /// # }
    /// ```
    pub fn extract_span(&self, doc: &Document, span: PageSpan) -> Result<Document> {
        let page_ids = self.page_ids(doc, span)?;

        let mut part = doc.clone();
        let pages_id = root_pages_id(&part)?;

        for &page_id in &page_ids {
            adopt_page(&mut part, page_id, pages_id)?;
        }

        self.update_page_tree(&mut part, &page_ids)?;

        let catalog = part
            .catalog_mut()
            .map_err(|e| SpliceError::split_failed(format!("Failed to get catalog: {e}")))?;
        for key in PAGE_BOUND_CATALOG_KEYS {
            catalog.remove(key);
        }

        part.prune_objects();

        Ok(part)
    }

    /// Object ids of the pages in `span`, in page order.
    pub fn page_ids(&self, doc: &Document, span: PageSpan) -> Result<Vec<ObjectId>> {
        let pages = doc.get_pages();

        span.page_numbers()
            .map(|number| {
                pages
                    .get(&number)
                    .copied()
                    .ok_or_else(|| SpliceError::InvalidPageRange {
                        path: Default::default(),
                        range: span.to_string(),
                        total_pages: pages.len(),
                    })
            })
            .collect()
    }

    /// Replace the root `Kids` array with `page_ids`.
    pub(crate) fn update_page_tree(&self, doc: &mut Document, page_ids: &[ObjectId]) -> Result<()> {
        let pages_id = root_pages_id(doc)?;

        let dict = doc
            .get_dictionary_mut(pages_id)
            .map_err(|e| SpliceError::other(format!("Failed to get pages object: {e}")))?;

        let kids: Vec<Object> = page_ids.iter().map(|&id| Object::Reference(id)).collect();
        dict.set("Kids", Object::Array(kids));
        dict.set("Count", Object::Integer(page_ids.len() as i64));

        Ok(())
    }

    /// Get the number of pages in a document.
    pub fn page_count(&self, doc: &Document) -> usize {
        doc.get_pages().len()
    }
}

/// The object id of the catalog's `Pages` root.
pub(crate) fn root_pages_id(doc: &Document) -> Result<ObjectId> {
    doc.catalog()
        .and_then(|catalog| catalog.get(b"Pages"))
        .and_then(|pages| pages.as_reference())
        .map_err(|e| SpliceError::other(format!("Failed to get pages reference: {e}")))
}

/// Re-parent `page_id` directly under `new_parent`.
///
/// Inheritable attributes found on the old ancestors are copied onto the
/// page unless the page already sets them.
pub(crate) fn adopt_page(doc: &mut Document, page_id: ObjectId, new_parent: ObjectId) -> Result<()> {
    let inherited = inherited_attributes(doc, page_id);

    let page = doc
        .get_dictionary_mut(page_id)
        .map_err(|e| SpliceError::other(format!("Failed to get page {page_id:?}: {e}")))?;

    for (key, value) in inherited {
        page.set(key, value);
    }
    page.set("Parent", Object::Reference(new_parent));

    Ok(())
}

fn inherited_attributes(doc: &Document, page_id: ObjectId) -> Vec<(Vec<u8>, Object)> {
    let mut found = Vec::new();

    let Ok(page) = doc.get_dictionary(page_id) else {
        return found;
    };

    let mut missing: Vec<&[u8]> = INHERITABLE_KEYS
        .into_iter()
        .filter(|key| !page.has(key))
        .collect();
    let mut parent = page.get(b"Parent").and_then(|p| p.as_reference()).ok();

    for _ in 0..MAX_TREE_DEPTH {
        if missing.is_empty() {
            break;
        }
        let Some(node_id) = parent else {
            break;
        };
        let Ok(node) = doc.get_dictionary(node_id) else {
            break;
        };

        missing.retain(|key| match node.get(key) {
            Ok(value) => {
                found.push((key.to_vec(), value.clone()));
                false
            }
            Err(_) => true,
        });

        parent = node.get(b"Parent").and_then(|p| p.as_reference()).ok();
    }

    found
}
