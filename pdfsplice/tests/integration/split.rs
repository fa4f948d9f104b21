//! Integration tests for splitting.

use pdfsplice::SpliceError;
use pdfsplice::config::SplitConfig;
use pdfsplice::split::{SplitSpec, split_pdf};
use rstest::rstest;
use tempfile::TempDir;

use crate::common::{file_names, markers, page_count, write_pdf};

#[rstest]
#[case(1)]
#[case(4)]
#[tokio::test]
async fn test_every_page_yields_one_file_per_page(#[case] pages: usize) {
    let temp_dir = TempDir::new().unwrap();
    let input = write_pdf(temp_dir.path(), "doc.pdf", "p", pages);
    let out_dir = temp_dir.path().join("parts");

    let result = split_pdf(&SplitConfig::new(&input, &out_dir, SplitSpec::EveryPage))
        .await
        .unwrap();

    assert_eq!(result.parts.len(), pages);
    let mut expected: Vec<String> = (1..=pages).map(|n| format!("page_{n}.pdf")).collect();
    expected.sort();
    assert_eq!(file_names(&out_dir), expected);

    for (n, part) in result.parts.iter().enumerate() {
        assert_eq!(markers(&part.path).await, vec![format!("p{}", n + 1)]);
    }
}

#[rstest]
#[case(10, 3)]
#[case(10, 5)]
#[case(7, 10)]
#[case(5, 1)]
#[tokio::test]
async fn test_fixed_step_chunks(#[case] pages: usize, #[case] step: u32) {
    let temp_dir = TempDir::new().unwrap();
    let input = write_pdf(temp_dir.path(), "doc.pdf", "p", pages);
    let out_dir = temp_dir.path().join("parts");

    let result = split_pdf(&SplitConfig::new(&input, &out_dir, SplitSpec::FixedStep(step)))
        .await
        .unwrap();

    let step = step as usize;
    assert_eq!(result.parts.len(), pages.div_ceil(step));

    let mut total = 0;
    for part in &result.parts {
        let count = page_count(&part.path).await;
        assert!(count <= step);
        total += count;
    }
    assert_eq!(total, pages);
}

#[tokio::test]
async fn test_custom_ranges() {
    let temp_dir = TempDir::new().unwrap();
    let input = write_pdf(temp_dir.path(), "doc.pdf", "p", 5);
    let out_dir = temp_dir.path().join("parts");

    let spec = SplitSpec::parse_ranges("1-2,4-4").unwrap();
    let result = split_pdf(&SplitConfig::new(&input, &out_dir, spec))
        .await
        .unwrap();

    assert_eq!(result.parts.len(), 2);
    assert_eq!(page_count(&result.parts[0].path).await, 2);
    assert_eq!(page_count(&result.parts[1].path).await, 1);
    assert_eq!(file_names(&out_dir), vec!["page_4.pdf", "pages_1-2.pdf"]);
    assert_eq!(markers(&result.parts[1].path).await, vec!["p4"]);
}

#[tokio::test]
async fn test_overlapping_ranges_in_given_order() {
    let temp_dir = TempDir::new().unwrap();
    let input = write_pdf(temp_dir.path(), "doc.pdf", "p", 4);

    let spec: SplitSpec = "3-4, 1-3".parse().unwrap();
    let result = split_pdf(&SplitConfig::new(&input, temp_dir.path(), spec))
        .await
        .unwrap();

    assert_eq!(markers(&result.parts[0].path).await, vec!["p3", "p4"]);
    assert_eq!(markers(&result.parts[1].path).await, vec!["p1", "p2", "p3"]);
    assert_eq!(result.statistics.pages_written, 5);
}

#[tokio::test]
async fn test_out_of_bounds_range_leaves_no_output() {
    let temp_dir = TempDir::new().unwrap();
    let input = write_pdf(temp_dir.path(), "doc.pdf", "p", 3);
    let out_dir = temp_dir.path().join("parts");

    let spec = SplitSpec::parse_ranges("1-2,3-6").unwrap();
    let err = split_pdf(&SplitConfig::new(&input, &out_dir, spec))
        .await
        .unwrap_err();

    assert!(matches!(err, SpliceError::InvalidPageRange { total_pages: 3, .. }));
    assert!(!out_dir.exists());
}

#[tokio::test]
async fn test_dry_run_writes_nothing() {
    let temp_dir = TempDir::new().unwrap();
    let input = write_pdf(temp_dir.path(), "doc.pdf", "p", 4);
    let out_dir = temp_dir.path().join("parts");

    let mut config = SplitConfig::new(&input, &out_dir, SplitSpec::FixedStep(2));
    config.dry_run = true;
    let result = split_pdf(&config).await.unwrap();

    assert_eq!(result.parts.len(), 2);
    assert_eq!(result.parts[1].path, out_dir.join("pages_3-4.pdf"));
    assert!(!out_dir.exists());
}

#[tokio::test]
async fn test_existing_parts_are_overwritten() {
    let temp_dir = TempDir::new().unwrap();
    let out_dir = temp_dir.path().join("parts");
    let first = write_pdf(temp_dir.path(), "first.pdf", "a", 1);
    let second = write_pdf(temp_dir.path(), "second.pdf", "b", 1);

    split_pdf(&SplitConfig::new(&first, &out_dir, SplitSpec::EveryPage))
        .await
        .unwrap();
    split_pdf(&SplitConfig::new(&second, &out_dir, SplitSpec::EveryPage))
        .await
        .unwrap();

    assert_eq!(markers(&out_dir.join("page_1.pdf")).await, vec!["b1"]);
}
