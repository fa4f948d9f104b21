//! Integration tests for failure handling.

use pdfsplice::SpliceError;
use pdfsplice::config::{MergeConfig, SplitConfig};
use pdfsplice::merge::merge_files;
use pdfsplice::settings::SettingsStore;
use pdfsplice::split::{SplitSpec, split_pdf};
use tempfile::TempDir;

use crate::common::{write_garbage, write_pdf};

#[tokio::test]
async fn test_merge_missing_input() {
    let temp_dir = TempDir::new().unwrap();
    let good = write_pdf(temp_dir.path(), "good.pdf", "g", 1);
    let missing = temp_dir.path().join("missing.pdf");
    let out_dir = temp_dir.path().join("out");

    let err = merge_files(&MergeConfig::new(vec![good, missing.clone()], &out_dir))
        .await
        .unwrap_err();

    match &err {
        SpliceError::FileNotFound { path } => assert_eq!(path, &missing),
        other => panic!("unexpected error: {other}"),
    }
    assert_eq!(err.exit_code(), 2);
    assert!(!out_dir.exists());
}

#[tokio::test]
async fn test_merge_garbage_input() {
    let temp_dir = TempDir::new().unwrap();
    let good = write_pdf(temp_dir.path(), "good.pdf", "g", 1);
    let bad = write_garbage(temp_dir.path(), "bad.pdf");
    let out_dir = temp_dir.path().join("out");

    let err = merge_files(&MergeConfig::new(vec![good, bad], &out_dir))
        .await
        .unwrap_err();

    assert!(matches!(err, SpliceError::FailedToLoadPdf { .. }));
    assert_eq!(err.exit_code(), 3);
    assert!(!out_dir.exists());
}

#[tokio::test]
async fn test_merge_nothing() {
    let temp_dir = TempDir::new().unwrap();

    let err = merge_files(&MergeConfig::new(Vec::new(), temp_dir.path()))
        .await
        .unwrap_err();

    assert!(matches!(err, SpliceError::NoFilesToMerge));
}

#[tokio::test]
async fn test_merge_output_cannot_replace_input() {
    let temp_dir = TempDir::new().unwrap();
    let input = write_pdf(temp_dir.path(), "merged.pdf", "m", 1);

    let err = merge_files(&MergeConfig::new(vec![input], temp_dir.path()))
        .await
        .unwrap_err();

    assert!(matches!(err, SpliceError::InvalidConfig { .. }));
}

#[tokio::test]
async fn test_split_garbage_input() {
    let temp_dir = TempDir::new().unwrap();
    let bad = write_garbage(temp_dir.path(), "bad.pdf");
    let out_dir = temp_dir.path().join("parts");

    let err = split_pdf(&SplitConfig::new(&bad, &out_dir, SplitSpec::EveryPage))
        .await
        .unwrap_err();

    assert_eq!(err.exit_code(), 3);
    assert!(!out_dir.exists());
}

#[tokio::test]
async fn test_split_zero_step() {
    let temp_dir = TempDir::new().unwrap();
    let input = write_pdf(temp_dir.path(), "doc.pdf", "p", 2);

    let err = split_pdf(&SplitConfig::new(&input, temp_dir.path(), SplitSpec::FixedStep(0)))
        .await
        .unwrap_err();

    assert!(matches!(err, SpliceError::InvalidConfig { .. }));
}

#[tokio::test]
async fn test_corrupt_settings_fall_back_to_defaults() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("settings.json");
    std::fs::write(&path, b"{ not json").unwrap();

    let settings = SettingsStore::load(Some(path.as_path())).await.unwrap();

    assert_eq!(settings.get::<String>("save_dir"), None);
}
