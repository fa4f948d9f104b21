//! Integration tests for merging.

use pdfsplice::config::{CompressionLevel, MergeConfig};
use pdfsplice::merge::merge_files;
use pdfsplice::session::{Mode, Session};
use rstest::rstest;
use std::path::Path;
use tempfile::TempDir;

use crate::common::{markers, page_count, write_pdf};

#[rstest]
#[case(1)]
#[case(3)]
#[case(7)]
#[tokio::test]
async fn test_merge_single_page_pdfs_in_order(#[case] count: usize) {
    let temp_dir = TempDir::new().unwrap();
    let inputs: Vec<_> = (0..count)
        .map(|i| write_pdf(temp_dir.path(), &format!("in{i}.pdf"), &format!("f{i}-"), 1))
        .collect();

    let config = MergeConfig::new(inputs, temp_dir.path().join("out"));
    let outcome = merge_files(&config).await.unwrap();

    let expected: Vec<String> = (0..count).map(|i| format!("f{i}-1")).collect();
    assert_eq!(markers(&outcome.output_path).await, expected);
    assert_eq!(outcome.statistics.total_pages, count);
}

#[rstest]
#[case(CompressionLevel::None)]
#[case(CompressionLevel::Standard)]
#[case(CompressionLevel::Maximum)]
#[tokio::test]
async fn test_merge_multi_page_pdfs(#[case] compression: CompressionLevel) {
    let temp_dir = TempDir::new().unwrap();
    let a = write_pdf(temp_dir.path(), "a.pdf", "a", 3);
    let b = write_pdf(temp_dir.path(), "b.pdf", "b", 2);

    let mut config = MergeConfig::new(vec![a, b], temp_dir.path().join("out"));
    config.compression = compression;

    let outcome = merge_files(&config).await.unwrap();
    let write = outcome.write.expect("merge was written");

    assert_eq!(write.compressed, compression != CompressionLevel::None);
    assert_eq!(
        markers(&outcome.output_path).await,
        vec!["a1", "a2", "a3", "b1", "b2"]
    );
}

#[tokio::test]
async fn test_merge_follows_session_order() {
    let temp_dir = TempDir::new().unwrap();
    let first = write_pdf(temp_dir.path(), "1.pdf", "one", 1);
    let second = write_pdf(temp_dir.path(), "2.pdf", "two", 1);
    let third = write_pdf(temp_dir.path(), "3.pdf", "three", 1);

    let mut session = Session::new(Mode::Merge);
    session.add_files([&first, &second, &third]).await.unwrap();
    session.reorder(&third, 0).unwrap();
    session.remove_file(&second);

    let mut config = MergeConfig::new(session.paths(), temp_dir.path().join("out"));
    config.file_name = "ordered.pdf".to_string();

    let outcome = merge_files(&config).await.unwrap();

    assert_eq!(markers(&outcome.output_path).await, vec!["three1", "one1"]);
}

#[tokio::test]
async fn test_merge_directory_input() {
    let temp_dir = TempDir::new().unwrap();
    let scans = temp_dir.path().join("scans");
    std::fs::create_dir(&scans).unwrap();
    write_pdf(&scans, "b.pdf", "b", 2);
    write_pdf(&scans, "a.pdf", "a", 1);
    std::fs::write(scans.join("readme.txt"), b"not a pdf").unwrap();

    let mut session = Session::new(Mode::Merge);
    session.add_files([&scans]).await.unwrap();
    assert_eq!(session.files().total_pages(), 3);

    let config = MergeConfig::new(session.paths(), temp_dir.path().join("out"));
    let outcome = merge_files(&config).await.unwrap();

    assert_eq!(markers(&outcome.output_path).await, vec!["a1", "b1", "b2"]);
}

#[tokio::test]
async fn test_merge_overwrites_existing_output() {
    let temp_dir = TempDir::new().unwrap();
    let out_dir = temp_dir.path().join("out");
    let a = write_pdf(temp_dir.path(), "a.pdf", "a", 1);
    let b = write_pdf(temp_dir.path(), "b.pdf", "b", 2);

    merge_files(&MergeConfig::new(vec![a.clone()], &out_dir))
        .await
        .unwrap();
    let outcome = merge_files(&MergeConfig::new(vec![a, b], &out_dir))
        .await
        .unwrap();

    assert_eq!(page_count(&outcome.output_path).await, 3);
    assert!(!Path::new(&format!("{}.tmp", outcome.output_path.display())).exists());
}

#[tokio::test]
async fn test_merged_output_can_be_merged_again() {
    let temp_dir = TempDir::new().unwrap();
    let a = write_pdf(temp_dir.path(), "a.pdf", "a", 2);
    let b = write_pdf(temp_dir.path(), "b.pdf", "b", 1);

    let mut first = MergeConfig::new(vec![a.clone(), b], temp_dir.path());
    first.file_name = "ab.pdf".to_string();
    let ab = merge_files(&first).await.unwrap().output_path;

    let mut second = MergeConfig::new(vec![ab, a], temp_dir.path());
    second.file_name = "aba.pdf".to_string();
    let aba = merge_files(&second).await.unwrap().output_path;

    assert_eq!(markers(&aba).await, vec!["a1", "a2", "b1", "a1", "a2"]);
}
