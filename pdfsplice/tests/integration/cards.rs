//! Integration tests for the selection session and its card ordering.

use pdfsplice::cards::{CardGrid, Point};
use pdfsplice::session::{Mode, Session};
use pdfsplice::settings::SettingsStore;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

use crate::common::write_pdf;

async fn session_with(dir: &Path, count: usize) -> (Session, Vec<PathBuf>) {
    let paths: Vec<_> = (0..count)
        .map(|i| write_pdf(dir, &format!("f{i}.pdf"), &format!("f{i}-"), i + 1))
        .collect();

    let mut session = Session::new(Mode::Merge);
    let added = session.add_files(&paths).await.unwrap();
    assert_eq!(added, count);

    (session, paths)
}

#[tokio::test]
async fn test_reorder_to_front_keeps_length() {
    let temp_dir = TempDir::new().unwrap();
    let (mut session, paths) = session_with(temp_dir.path(), 4).await;

    assert_eq!(session.reorder(&paths[2], 0), Some(0));

    assert_eq!(session.files().len(), 4);
    assert_eq!(
        session.paths(),
        vec![
            paths[2].clone(),
            paths[0].clone(),
            paths[1].clone(),
            paths[3].clone()
        ]
    );
}

#[tokio::test]
async fn test_adding_a_file_twice_is_a_noop() {
    let temp_dir = TempDir::new().unwrap();
    let (mut session, paths) = session_with(temp_dir.path(), 2).await;

    let added = session.add_files([&paths[0]]).await.unwrap();

    assert_eq!(added, 0);
    assert_eq!(session.paths(), paths);
}

#[tokio::test]
async fn test_probed_entries_report_pages() {
    let temp_dir = TempDir::new().unwrap();
    let (session, _) = session_with(temp_dir.path(), 3).await;

    let labels: Vec<String> = session.files().iter().map(|e| e.page_label()).collect();
    assert_eq!(labels, vec!["1 page", "2 pages", "3 pages"]);
    assert_eq!(session.files().total_pages(), 6);

    let first = session.files().get(0).unwrap();
    assert_eq!(first.page_size, Some((595.0, 842.0)));
    assert_eq!(first.display_name(), "f0.pdf");
}

#[tokio::test]
async fn test_drop_on_card_grid() {
    let temp_dir = TempDir::new().unwrap();
    let (mut session, paths) = session_with(temp_dir.path(), 5).await;
    let grid = CardGrid::default();

    // Above the first row's centre line: front of the list.
    let index = session.move_to_drop(&paths[4], Point::new(10.0, 50.0), &grid);
    assert_eq!(index, Some(0));
    assert_eq!(session.paths()[0], paths[4]);

    // Below every card: end of the list.
    let index = session.move_to_drop(&paths[4], Point::new(10.0, 2000.0), &grid);
    assert_eq!(index, Some(4));
    assert_eq!(session.paths()[4], paths[4]);
    assert_eq!(session.files().len(), 5);
}

#[tokio::test]
async fn test_split_mode_keeps_one_file() {
    let temp_dir = TempDir::new().unwrap();
    let a = write_pdf(temp_dir.path(), "a.pdf", "a", 2);
    let b = write_pdf(temp_dir.path(), "b.pdf", "b", 3);

    let mut session = Session::new(Mode::Split);
    session.add_files([&a, &b]).await.unwrap();
    assert_eq!(session.split_target(), Some(a.as_path()));

    session.add_files([&b]).await.unwrap();
    assert_eq!(session.split_target(), Some(b.as_path()));
    assert_eq!(session.files().len(), 1);

    session.set_mode(Mode::Merge);
    assert!(session.is_empty());
    assert_eq!(session.split_target(), None);
}

#[tokio::test]
async fn test_unreadable_file_is_listed_without_pages() {
    let temp_dir = TempDir::new().unwrap();
    let missing = temp_dir.path().join("missing.pdf");

    let mut session = Session::new(Mode::Merge);
    session.add_files([&missing]).await.unwrap();

    let entry = session.files().get(0).unwrap();
    assert_eq!(entry.page_count, None);
    assert_eq!(entry.page_label(), "? pages");
}

#[tokio::test]
async fn test_settings_round_trip() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("nested").join("settings.json");

    let mut settings = SettingsStore::load(Some(path.as_path())).await.unwrap();
    settings.set_save_dir(Path::new("/srv/out")).unwrap();
    settings.set("last_mode", Mode::Split).unwrap();
    settings.save().await.unwrap();

    let reloaded = SettingsStore::load(Some(path.as_path())).await.unwrap();
    assert_eq!(reloaded.save_dir(), PathBuf::from("/srv/out"));
    assert_eq!(reloaded.get::<Mode>("last_mode"), Some(Mode::Split));
}
