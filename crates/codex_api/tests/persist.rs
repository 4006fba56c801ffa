use std::fs;

use codex_api::{ensure_output_dir, AtomicFileWriter, DirectorySaveTrigger, SaveTrigger, StagedBlob};
use tempfile::TempDir;

#[test]
fn creates_missing_output_dir() {
    let temp = TempDir::new().unwrap();
    let new_dir = temp.path().join("downloads");
    assert!(!new_dir.exists());
    ensure_output_dir(&new_dir).unwrap();
    assert!(new_dir.is_dir());
}

#[test]
fn atomic_write_replaces_existing() {
    let temp = TempDir::new().unwrap();
    let writer = AtomicFileWriter::new(temp.path().to_path_buf());

    let first = writer.write("comic.cbz", b"hello").unwrap();
    assert_eq!(first.file_name().unwrap(), "comic.cbz");
    assert_eq!(fs::read(&first).unwrap(), b"hello");

    let second = writer.write("comic.cbz", b"world").unwrap();
    assert_eq!(first, second);
    assert_eq!(fs::read(&second).unwrap(), b"world");
}

#[test]
fn no_partial_file_on_error() {
    let temp = TempDir::new().unwrap();
    let file_path = temp.path().join("not_a_dir");
    fs::write(&file_path, "x").unwrap();

    let writer = AtomicFileWriter::new(file_path.clone());
    let result = writer.write("comic.cbz", b"data");
    assert!(result.is_err());
    assert!(!file_path.with_file_name("comic.cbz").exists());
}

#[test]
fn staged_blob_is_removed_on_drop() {
    let blob = StagedBlob::stage(b"\x00\x01binary").unwrap();
    let path = blob.path().to_path_buf();
    assert!(path.exists());
    assert_eq!(blob.len(), 8);
    assert_eq!(blob.local_url().unwrap().scheme(), "file");

    drop(blob);
    assert!(!path.exists());
}

#[test]
fn directory_trigger_saves_under_sanitized_name() {
    let temp = TempDir::new().unwrap();
    let trigger = DirectorySaveTrigger::new(temp.path().join("downloads"));
    assert_eq!(trigger.dir(), temp.path().join("downloads"));
    let blob = StagedBlob::stage(b"page data").unwrap();

    let saved = trigger.save(&blob, "../escape/Issue 1.cbz").unwrap();

    assert_eq!(saved, temp.path().join("downloads").join("Issue 1.cbz"));
    assert_eq!(fs::read(saved).unwrap(), b"page data");
}
