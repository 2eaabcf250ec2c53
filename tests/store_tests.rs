mod common;

use chrono::{Local, TimeZone};
use common::memory_store;
use guruhadir::core::store::PLACEHOLDER_PHOTO_URL;
use guruhadir::core::{AppendOutcome, RecordStore, StoreOptions};
use guruhadir::errors::AppError;
use guruhadir::models::{Record, RecordKind};
use guruhadir::storage::initialize::init_db;
use guruhadir::storage::keys;
use guruhadir::storage::{DbPool, KeyValueStore, MemoryKv, SqliteKv};

const BASE_TS: i64 = 1_736_130_000_000;

fn check_in(i: i64) -> Record {
    Record::new(RecordKind::CheckIn, "Budi", "123").with_timestamp(BASE_TS + i)
}

/// Bytes taken by a list of `n` records of the same serialized size.
fn list_bytes(sample: &Record, n: usize) -> usize {
    let one = serde_json::to_string(sample).unwrap().len();
    keys::RECORDS.len() + 2 + n * one + n.saturating_sub(1)
}

#[test]
fn append_prepends_and_list_is_newest_first() {
    let mut store = memory_store(1024 * 1024, 5);
    let first = check_in(1);
    let second = Record::new(RecordKind::CheckOut, "Budi", "123").with_timestamp(BASE_TS + 2);

    assert_eq!(store.append(&first), AppendOutcome::Stored);
    assert_eq!(store.append(&second), AppendOutcome::Stored);

    let list = store.list().unwrap();
    assert_eq!(list.len(), 2);
    assert_eq!(list[0], second);
    assert_eq!(list[1], first);
}

#[test]
fn list_is_empty_for_missing_or_corrupt_data() {
    let store = memory_store(1024, 5);
    assert!(store.list().unwrap().is_empty());

    let mut kv = MemoryKv::default();
    kv.set(keys::RECORDS, "{not json").unwrap();
    let store = RecordStore::new(kv, StoreOptions::default());
    assert!(store.list().unwrap().is_empty());
}

#[test]
fn overflow_trims_history_to_most_recent_records() {
    let quota = list_bytes(&check_in(0), 8);
    let mut store = memory_store(quota, 5);

    for i in 0..8 {
        assert_eq!(store.append(&check_in(i)), AppendOutcome::Stored);
    }
    assert_eq!(store.list().unwrap().len(), 8);

    let newest = check_in(8);
    assert_eq!(store.append(&newest), AppendOutcome::Trimmed { kept: 5 });

    let list = store.list().unwrap();
    assert_eq!(list.len(), 6);
    assert_eq!(list[0], newest);
    // the five most recent older records survive, still newest first
    let kept: Vec<i64> = list[1..].iter().map(|r| r.timestamp - BASE_TS).collect();
    assert_eq!(kept, vec![7, 6, 5, 4, 3]);
}

#[test]
fn overflow_collapses_to_new_record_when_trim_is_not_enough() {
    let quota = list_bytes(&check_in(0), 1) + 10;
    let mut store = memory_store(quota, 5);

    assert_eq!(store.append(&check_in(1)), AppendOutcome::Stored);

    let newest = check_in(2);
    assert_eq!(store.append(&newest), AppendOutcome::Collapsed);
    assert_eq!(store.list().unwrap(), vec![newest]);
}

#[test]
fn record_too_large_for_quota_fails_without_panicking() {
    let mut store = memory_store(16, 5);
    let outcome = store.append(&check_in(1));

    assert!(matches!(outcome, AppendOutcome::Failed(_)));
    assert!(!outcome.is_persisted());
    assert!(store.list().unwrap().is_empty());
}

#[test]
fn stripping_replaces_inline_photo_in_local_copy() {
    let mut store = RecordStore::new(
        MemoryKv::default(),
        StoreOptions {
            keep_on_overflow: 5,
            strip_local_photos: true,
        },
    );
    let photo = format!("data:image/jpeg;base64,{}", "A".repeat(500));
    let record = check_in(1).with_photo(Some(photo));

    store.append(&record);

    let stored = &store.list().unwrap()[0];
    assert_eq!(stored.photo_url.as_deref(), Some(PLACEHOLDER_PHOTO_URL));
    assert_eq!(stored.notes.as_deref(), Some("(Foto tersimpan di Server)"));
    assert_eq!(stored.id, record.id);
}

#[test]
fn photos_are_kept_when_stripping_is_off() {
    let mut store = memory_store(1024 * 1024, 5);
    let photo = format!("data:image/jpeg;base64,{}", "A".repeat(500));
    let record = check_in(1).with_photo(Some(photo));

    store.append(&record);
    assert_eq!(store.list().unwrap()[0], record);
}

#[test]
fn today_status_only_counts_the_current_day() {
    let mut store = memory_store(1024 * 1024, 5);

    let in_at = Local.with_ymd_and_hms(2025, 1, 6, 7, 15, 0).unwrap();
    let yesterday_out = Local.with_ymd_and_hms(2025, 1, 5, 15, 0, 0).unwrap();
    let now = Local.with_ymd_and_hms(2025, 1, 6, 12, 0, 0).unwrap();

    store.append(
        &Record::new(RecordKind::CheckOut, "Budi", "123")
            .with_timestamp(yesterday_out.timestamp_millis()),
    );
    store.append(
        &Record::new(RecordKind::CheckIn, "Budi", "123").with_timestamp(in_at.timestamp_millis()),
    );

    let status = store.today_status(now).unwrap();
    assert!(status.has_checked_in_today);
    assert!(!status.has_checked_out_today);
    assert_eq!(status.last_check_in_time, Some(in_at.timestamp_millis()));

    let next_day = Local.with_ymd_and_hms(2025, 1, 7, 8, 0, 0).unwrap();
    let status = store.today_status(next_day).unwrap();
    assert!(!status.has_checked_in_today);
    assert_eq!(status.last_check_in_time, None);
}

#[test]
fn profile_update_keeps_photo_and_role_when_not_supplied() {
    let mut store = memory_store(1024 * 1024, 5);
    assert!(store.profile().unwrap().is_none());

    store
        .save_profile("Budi", "123", Some("https://x/budi.png"), Some("Guru Kelas"))
        .unwrap();
    let updated = store.save_profile("Budi Santoso", "456", None, None).unwrap();

    assert_eq!(updated.name, "Budi Santoso");
    assert_eq!(updated.nip, "456");
    assert_eq!(updated.photo_url.as_deref(), Some("https://x/budi.png"));
    assert_eq!(updated.role.as_deref(), Some("Guru Kelas"));
    assert_eq!(store.profile().unwrap(), Some(updated));
}

#[test]
fn blank_endpoint_is_ignored() {
    let mut store = memory_store(1024 * 1024, 5);
    let default = "https://script.google.com/macros/s/default/exec";

    assert!(!store.set_endpoint("   ").unwrap());
    assert_eq!(store.resolve_endpoint(default), default);

    assert!(store.set_endpoint(" https://script.google.com/macros/s/mine/exec ").unwrap());
    assert_eq!(
        store.resolve_endpoint(default),
        "https://script.google.com/macros/s/mine/exec"
    );
}

#[test]
fn clear_removes_records_profile_and_endpoint() {
    let mut store = memory_store(1024 * 1024, 5);
    store.append(&check_in(1));
    store.save_profile("Budi", "123", None, None).unwrap();
    store.set_endpoint("https://script.google.com/x/exec").unwrap();
    store.set_authenticated(true).unwrap();

    store.clear().unwrap();

    assert!(store.list().unwrap().is_empty());
    assert!(store.profile().unwrap().is_none());
    assert!(store.endpoint_override().unwrap().is_none());
    assert!(store.is_authenticated());
}

#[test]
fn sqlite_backend_rejects_writes_past_quota_and_keeps_old_value() {
    let pool = DbPool::in_memory().unwrap();
    init_db(&pool.conn).unwrap();
    let mut kv = SqliteKv::new(pool, 64);

    kv.set("k", "small").unwrap();
    let err = kv.set("k", &"x".repeat(100)).unwrap_err();

    assert!(matches!(err, AppError::QuotaExceeded { .. }));
    assert_eq!(kv.get("k").unwrap().as_deref(), Some("small"));
    assert_eq!(kv.used_bytes().unwrap(), 1 + 5);

    kv.remove("k").unwrap();
    assert_eq!(kv.get("k").unwrap(), None);
}

#[test]
fn sqlite_store_trims_like_memory_store() {
    let pool = DbPool::in_memory().unwrap();
    init_db(&pool.conn).unwrap();
    let quota = list_bytes(&check_in(0), 3);
    let mut store = RecordStore::new(
        SqliteKv::new(pool, quota),
        StoreOptions {
            keep_on_overflow: 1,
            strip_local_photos: false,
        },
    );

    for i in 0..3 {
        assert_eq!(store.append(&check_in(i)), AppendOutcome::Stored);
    }
    assert_eq!(store.append(&check_in(3)), AppendOutcome::Trimmed { kept: 1 });
    assert_eq!(store.list().unwrap().len(), 2);
}

#[test]
fn profile_and_session_writes_trim_history_on_a_full_store() {
    let quota = list_bytes(&check_in(0), 3);
    let mut store = memory_store(quota, 5);

    for i in 0..6 {
        assert!(store.append(&check_in(i)).is_persisted());
    }
    assert_eq!(store.list().unwrap().len(), 3);

    let profile = store.save_profile("Budi", "123", None, Some("Guru Kelas")).unwrap();
    store.set_authenticated(true).unwrap();
    assert!(store.set_endpoint("https://script.google.com/macros/s/x/exec").unwrap());

    assert_eq!(store.profile().unwrap(), Some(profile));
    assert!(store.is_authenticated());

    // the newest record always survives
    let list = store.list().unwrap();
    assert_eq!(list.len(), 1);
    assert_eq!(list[0].timestamp, BASE_TS + 5);
}

#[test]
fn value_larger_than_quota_still_reports_quota_exceeded() {
    let mut store = memory_store(64, 5);
    let err = store
        .save_profile(&"x".repeat(100), "123", None, None)
        .unwrap_err();
    assert!(matches!(err, AppError::QuotaExceeded { .. }));
}
