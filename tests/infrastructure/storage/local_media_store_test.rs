use futures::StreamExt;

use clipscribe::application::ports::{MediaStore, MediaStoreError};
use clipscribe::domain::MediaFolder;
use clipscribe::infrastructure::storage::LocalMediaStore;

fn create_test_store() -> (tempfile::TempDir, LocalMediaStore) {
    let dir = tempfile::TempDir::new().unwrap();
    let store = LocalMediaStore::new(dir.path().to_path_buf()).unwrap();
    (dir, store)
}

#[test]
fn given_new_store_when_created_then_media_folders_exist() {
    let (dir, _store) = create_test_store();

    assert!(dir.path().join("videos").is_dir());
    assert!(dir.path().join("audio").is_dir());
    assert!(dir.path().join("transcriptions").is_dir());
}

#[tokio::test]
async fn given_fresh_name_when_storing_then_plain_name_is_used() {
    let (dir, store) = create_test_store();

    let name = store
        .store_new(MediaFolder::Videos, "clip", "mp4", b"video-data")
        .await
        .unwrap();

    assert_eq!(name, "clip.mp4");
    let stored = std::fs::read(dir.path().join("videos").join("clip.mp4")).unwrap();
    assert_eq!(stored, b"video-data");
}

#[tokio::test]
async fn given_taken_name_when_storing_then_numeric_suffix_is_appended() {
    let (dir, store) = create_test_store();

    let first = store
        .store_new(MediaFolder::Videos, "clip", "mp4", b"one")
        .await
        .unwrap();
    let second = store
        .store_new(MediaFolder::Videos, "clip", "mp4", b"two")
        .await
        .unwrap();
    let third = store
        .store_new(MediaFolder::Videos, "clip", "mp4", b"three")
        .await
        .unwrap();

    assert_eq!(first, "clip.mp4");
    assert_eq!(second, "clip_1.mp4");
    assert_eq!(third, "clip_2.mp4");

    let stored = std::fs::read(dir.path().join("videos").join("clip_2.mp4")).unwrap();
    assert_eq!(stored, b"three");
}

#[tokio::test]
async fn given_unsafe_base_when_storing_then_invalid_name_is_returned() {
    let (_dir, store) = create_test_store();

    let err = store
        .store_new(MediaFolder::Videos, "../escape", "mp4", b"data")
        .await
        .unwrap_err();

    assert!(matches!(err, MediaStoreError::InvalidName(_)));
}

#[tokio::test]
async fn given_existing_name_when_putting_then_content_is_replaced() {
    let (dir, store) = create_test_store();

    store
        .put(MediaFolder::Transcriptions, "notes.txt", b"first version")
        .await
        .unwrap();
    store
        .put(MediaFolder::Transcriptions, "notes.txt", b"second version")
        .await
        .unwrap();

    let stored = std::fs::read(dir.path().join("transcriptions").join("notes.txt")).unwrap();
    assert_eq!(stored, b"second version");
}

#[tokio::test]
async fn given_unsafe_name_when_putting_then_invalid_name_is_returned() {
    let (_dir, store) = create_test_store();

    let err = store
        .put(MediaFolder::Transcriptions, "../notes.txt", b"data")
        .await
        .unwrap_err();

    assert!(matches!(err, MediaStoreError::InvalidName(_)));
}

#[tokio::test]
async fn given_stored_file_when_streaming_then_all_bytes_are_returned() {
    let (_dir, store) = create_test_store();
    store
        .put(MediaFolder::Audio, "track.mp3", b"streamed-bytes")
        .await
        .unwrap();

    let mut stream = store.stream(MediaFolder::Audio, "track.mp3").await.unwrap();
    let mut collected = Vec::new();
    while let Some(chunk) = stream.next().await {
        collected.extend_from_slice(&chunk.unwrap());
    }

    assert_eq!(collected, b"streamed-bytes");
}

#[tokio::test]
async fn given_missing_file_when_streaming_then_not_found_is_returned() {
    let (_dir, store) = create_test_store();

    let err = store
        .stream(MediaFolder::Audio, "never-stored.mp3")
        .await
        .err()
        .unwrap();

    assert!(matches!(err, MediaStoreError::NotFound(_)));
}

#[tokio::test]
async fn given_traversal_name_when_streaming_then_invalid_name_is_returned() {
    let (_dir, store) = create_test_store();

    let err = store
        .stream(MediaFolder::Audio, "../../etc/passwd")
        .await
        .err()
        .unwrap();

    assert!(matches!(err, MediaStoreError::InvalidName(_)));
}

#[tokio::test]
async fn given_files_when_listing_then_names_are_sorted_and_dirs_skipped() {
    let (dir, store) = create_test_store();
    store
        .put(MediaFolder::Audio, "b.mp3", b"2")
        .await
        .unwrap();
    store
        .put(MediaFolder::Audio, "a.mp3", b"1")
        .await
        .unwrap();
    store
        .put(MediaFolder::Audio, "c.mp3", b"3")
        .await
        .unwrap();
    std::fs::create_dir(dir.path().join("audio").join("nested")).unwrap();

    let names = store.list(MediaFolder::Audio).await.unwrap();

    assert_eq!(names, vec!["a.mp3", "b.mp3", "c.mp3"]);
}

#[tokio::test]
async fn given_empty_folder_when_listing_then_empty_list_is_returned() {
    let (_dir, store) = create_test_store();

    let names = store.list(MediaFolder::Videos).await.unwrap();

    assert!(names.is_empty());
}

#[test]
fn given_folder_and_name_when_resolving_then_path_is_under_folder_dir() {
    let (dir, store) = create_test_store();

    let path = store.resolve(MediaFolder::Transcriptions, "notes.txt");

    assert_eq!(path, dir.path().join("transcriptions").join("notes.txt"));
}
