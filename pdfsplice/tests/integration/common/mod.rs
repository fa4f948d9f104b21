//! Shared helpers for the integration tests.
//!
//! Fixtures are generated on the fly: every page carries a `/Marker` name
//! (`{label}{n}`) so tests can check which source page landed where.

use lopdf::{Document, Object, Stream, dictionary};
use std::path::{Path, PathBuf};

use pdfsplice::io::PdfReader;

/// Write a `pages`-page PDF whose pages are marked `{label}1`, `{label}2`, ...
pub fn write_pdf(dir: &Path, name: &str, label: &str, pages: usize) -> PathBuf {
    let mut doc = Document::with_version("1.5");
    let pages_id = doc.new_object_id();

    let font_id = doc.add_object(dictionary! {
        "Type" => "Font",
        "Subtype" => "Type1",
        "BaseFont" => "Courier",
    });
    let resources_id = doc.add_object(dictionary! {
        "Font" => dictionary! { "F1" => font_id },
    });

    let kids: Vec<Object> = (1..=pages)
        .map(|n| {
            let text = format!("BT /F1 18 Tf 50 700 Td ({label} {n}) Tj ET");
            let content_id = doc.add_object(Stream::new(dictionary! {}, text.into_bytes()));
            doc.add_object(dictionary! {
                "Type" => "Page",
                "Parent" => pages_id,
                "Contents" => content_id,
                "Resources" => resources_id,
                "MediaBox" => vec![0.into(), 0.into(), 595.into(), 842.into()],
                "Marker" => Object::Name(format!("{label}{n}").into_bytes()),
            })
            .into()
        })
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

    let catalog_id = doc.add_object(dictionary! {
        "Type" => "Catalog",
        "Pages" => pages_id,
    });
    doc.trailer.set("Root", catalog_id);

    let path = dir.join(name);
    doc.save(&path).expect("Failed to write fixture");
    path
}

/// Write a file that is named like a PDF but isn't one.
pub fn write_garbage(dir: &Path, name: &str) -> PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, b"%PDF-1.4 this is not really a pdf").expect("Failed to write file");
    path
}

/// Page markers of the PDF at `path`, in page order.
pub async fn markers(path: &Path) -> Vec<String> {
    let loaded = PdfReader::new()
        .load(path)
        .await
        .expect("Failed to load output");

    loaded
        .document
        .get_pages()
        .values()
        .map(|&id| {
            let page = loaded.document.get_dictionary(id).expect("page dictionary");
            let marker = page
                .get(b"Marker")
                .and_then(Object::as_name)
                .expect("page marker");
            String::from_utf8_lossy(marker).into_owned()
        })
        .collect()
}

/// Number of pages in the PDF at `path`.
pub async fn page_count(path: &Path) -> usize {
    PdfReader::new()
        .page_count(path)
        .await
        .expect("Failed to count pages")
}

/// Sorted file names in `dir`.
pub fn file_names(dir: &Path) -> Vec<String> {
    let mut names: Vec<String> = std::fs::read_dir(dir)
        .expect("Failed to read directory")
        .map(|entry| {
            entry
                .expect("directory entry")
                .file_name()
                .to_string_lossy()
                .into_owned()
        })
        .collect();
    names.sort();
    names
}
