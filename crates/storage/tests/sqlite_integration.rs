use neon_core::{ProgressRecord, Track};
use storage::progress_store::{PROGRESS_KEY, ProgressStore};
use storage::repository::{KeyValueRepository, Storage};
use storage::sqlite::SqliteRepository;

#[tokio::test]
async fn sqlite_kv_round_trips() {
    let storage = Storage::sqlite("sqlite:file:memdb_kv_roundtrip?mode=memory&cache=shared")
        .await
        .expect("connect");

    assert_eq!(storage.kv.get("missing").await.unwrap(), None);

    storage.kv.put("k", b"first").await.unwrap();
    assert_eq!(storage.kv.get("k").await.unwrap(), Some(b"first".to_vec()));

    storage.kv.put("k", b"second").await.unwrap();
    assert_eq!(storage.kv.get("k").await.unwrap(), Some(b"second".to_vec()));
}

#[tokio::test]
async fn migrations_are_idempotent() {
    let repo = SqliteRepository::connect("sqlite:file:memdb_migrate_twice?mode=memory&cache=shared")
        .await
        .expect("connect");
    repo.migrate().await.expect("migrate");
    repo.put("k", b"kept").await.unwrap();

    // A second migration pass must not touch existing data.
    repo.migrate().await.expect("re-migrate");
    assert_eq!(repo.get("k").await.unwrap(), Some(b"kept".to_vec()));
}

#[tokio::test]
async fn progress_store_persists_through_sqlite() {
    let storage = Storage::sqlite("sqlite:file:memdb_progress?mode=memory&cache=shared")
        .await
        .expect("connect");
    let store = ProgressStore::new(storage.kv.clone());

    assert_eq!(store.load().await, ProgressRecord::default());

    let record = ProgressRecord::new(Track::AppDesign).advance(0).advance(1);
    store.save(&record).await.unwrap();

    // A second store over the same backend sees the saved record.
    let other = ProgressStore::new(storage.kv.clone());
    assert_eq!(other.load().await, record);
}

#[tokio::test]
async fn progress_store_survives_garbage_in_sqlite() {
    let storage = Storage::sqlite("sqlite:file:memdb_garbage?mode=memory&cache=shared")
        .await
        .expect("connect");
    storage
        .kv
        .put(PROGRESS_KEY, b"\xff\xfe garbage")
        .await
        .unwrap();

    let store = ProgressStore::new(storage.kv.clone());
    assert_eq!(store.load().await, ProgressRecord::default());
}
