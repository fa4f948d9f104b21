//! Builders for small in-memory PDFs used by unit tests.
//!
//! Every page carries a `/Marker` name (`{label}{n}`, 1-based) so tests can
//! tell which source page ended up where.

use lopdf::{Document, Object, ObjectId, Stream, dictionary};
use std::path::{Path, PathBuf};

/// A flat document whose pages are marked `p1`, `p2`, ...
pub fn sample_document(pages: usize) -> Document {
    labeled_document("p", pages)
}

/// A flat document whose pages are marked `{label}1`, `{label}2`, ...
pub fn labeled_document(label: &str, pages: usize) -> Document {
    let mut doc = Document::with_version("1.5");
    let pages_id = doc.new_object_id();
    let resources_id = add_font_resources(&mut doc);

    let kids: Vec<Object> = (1..=pages)
        .map(|n| add_page(&mut doc, pages_id, label, n, true, Some(resources_id)).into())
        .collect();

    doc.objects.insert(
        pages_id,
        dictionary! {
            "Type" => "Pages",
            "Kids" => kids,
            "Count" => pages as i64,
        }
        .into(),
    );
    set_catalog(&mut doc, pages_id);

    doc
}

/// A document with an intermediate `Pages` node per pair of pages.
///
/// `MediaBox` and `Resources` live only on the intermediate nodes, so the
/// leaves depend on inheritance.
pub fn nested_document(label: &str, pages: usize) -> Document {
    let mut doc = Document::with_version("1.5");
    let root_id = doc.new_object_id();
    let resources_id = add_font_resources(&mut doc);

    let mut branches = Vec::new();
    let mut number = 1;
    while number <= pages {
        let branch_id = doc.new_object_id();
        let mut kids = Vec::new();
        for n in number..=(number + 1).min(pages) {
            kids.push(Object::from(add_page(&mut doc, branch_id, label, n, false, None)));
        }
        let count = kids.len() as i64;
        doc.objects.insert(
            branch_id,
            dictionary! {
                "Type" => "Pages",
                "Parent" => root_id,
                "Kids" => kids,
                "Count" => count,
                "MediaBox" => vec![0.into(), 0.into(), 420.into(), 595.into()],
                "Resources" => resources_id,
            }
            .into(),
        );
        branches.push(Object::from(branch_id));
        number += 2;
    }

    doc.objects.insert(
        root_id,
        dictionary! {
            "Type" => "Pages",
            "Kids" => branches,
            "Count" => pages as i64,
        }
        .into(),
    );
    set_catalog(&mut doc, root_id);

    doc
}

/// Write a [`sample_document`] to `dir/name` and return the path.
pub fn write_sample_pdf(dir: &Path, name: &str, pages: usize) -> PathBuf {
    write_document(dir, name, &mut sample_document(pages))
}

/// Write a [`labeled_document`] to `dir/name` and return the path.
pub fn write_labeled_pdf(dir: &Path, name: &str, label: &str, pages: usize) -> PathBuf {
    write_document(dir, name, &mut labeled_document(label, pages))
}

/// Write any document to `dir/name` and return the path.
pub fn write_document(dir: &Path, name: &str, doc: &mut Document) -> PathBuf {
    let path = dir.join(name);
    doc.save(&path).unwrap();
    path
}

/// Page markers in page order.
pub fn page_markers(doc: &Document) -> Vec<String> {
    doc.get_pages()
        .values()
        .map(|&page_id| {
            let page = doc.get_dictionary(page_id).unwrap();
            let marker = page.get(b"Marker").unwrap().as_name().unwrap();
            String::from_utf8_lossy(marker).into_owned()
        })
        .collect()
}

fn add_font_resources(doc: &mut Document) -> ObjectId {
    let font_id = doc.add_object(dictionary! {
        "Type" => "Font",
        "Subtype" => "Type1",
        "BaseFont" => "Helvetica",
    });

    doc.add_object(dictionary! {
        "Font" => dictionary! {
            "F1" => font_id,
        },
    })
}

fn add_page(
    doc: &mut Document,
    parent: ObjectId,
    label: &str,
    number: usize,
    own_attributes: bool,
    resources: Option<ObjectId>,
) -> ObjectId {
    let text = format!("BT /F1 24 Tf 72 720 Td ({label} page {number}) Tj ET");
    let content_id = doc.add_object(Stream::new(dictionary! {}, text.into_bytes()));

    let mut page = dictionary! {
        "Type" => "Page",
        "Parent" => parent,
        "Contents" => content_id,
        "Marker" => Object::Name(format!("{label}{number}").into_bytes()),
    };

    if own_attributes {
        page.set(
            "MediaBox",
            vec![0.into(), 0.into(), 612.into(), 792.into()],
        );
    }

    if let Some(resources_id) = resources {
        page.set("Resources", resources_id);
    }

    doc.add_object(page)
}

fn set_catalog(doc: &mut Document, pages_id: ObjectId) {
    let catalog_id = doc.add_object(dictionary! {
        "Type" => "Catalog",
        "Pages" => pages_id,
    });
    doc.trailer.set("Root", catalog_id);
}
