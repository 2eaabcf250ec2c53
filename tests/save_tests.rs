mod common;

use chrono::NaiveDate;
use common::{FakeTransport, memory_store, png_data_uri};
use guruhadir::core::compress::image_dimensions;
use guruhadir::core::{AppendOutcome, CompressOptions, SaveLogic};
use guruhadir::errors::AppError;
use guruhadir::models::{LeaveDetails, LeaveType, Record, RecordKind, SppdDetails};
use guruhadir::sync::client::build_save_payload;
use guruhadir::sync::{SyncClient, SyncStatus};
use serde_json::json;

const URL: &str = "https://script.google.com/macros/s/test/exec";

fn date(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
}

#[test]
fn save_stores_locally_and_reports_sync() {
    let mut store = memory_store(1024 * 1024, 5);
    let sync = SyncClient::new(FakeTransport::replying(json!({ "result": "success" })));
    let record = Record::new(RecordKind::CheckIn, "Budi", "123").with_location(Some(-6.2), Some(106.8));

    let report = SaveLogic::save(&mut store, &sync, URL, record.clone(), CompressOptions::default())
        .unwrap();

    assert!(report.success());
    assert_eq!(report.local, AppendOutcome::Stored);
    assert_eq!(report.sync, SyncStatus::Synced);
    assert_eq!(store.list().unwrap(), vec![record]);

    let profile = store.profile().unwrap().unwrap();
    assert_eq!((profile.name.as_str(), profile.nip.as_str()), ("Budi", "123"));
}

#[test]
fn network_failure_does_not_fail_the_save() {
    let mut store = memory_store(1024 * 1024, 5);
    let sync = SyncClient::new(FakeTransport::failing());
    let record = Record::new(RecordKind::CheckOut, "Budi", "123");

    let report = SaveLogic::save(&mut store, &sync, URL, record, CompressOptions::default()).unwrap();

    assert!(report.success());
    assert!(matches!(report.sync, SyncStatus::Offline(_)));
    assert_eq!(store.list().unwrap().len(), 1);
}

#[test]
fn empty_endpoint_skips_sync() {
    let mut store = memory_store(1024 * 1024, 5);
    let sync = SyncClient::new(FakeTransport::default());
    let record = Record::new(RecordKind::CheckIn, "Budi", "123");

    let report = SaveLogic::save(&mut store, &sync, "", record, CompressOptions::default()).unwrap();

    assert_eq!(report.sync, SyncStatus::Skipped);
    assert!(sync.transport().sent.borrow().is_empty());
}

#[test]
fn server_rejection_and_unreadable_reply_are_reported() {
    let record = Record::new(RecordKind::CheckIn, "Budi", "123");

    let sync = SyncClient::new(FakeTransport::replying(
        json!({ "result": "error", "message": "Sheet penuh" }),
    ));
    assert_eq!(
        sync.push_record(URL, &record),
        SyncStatus::Rejected("Sheet penuh".to_string())
    );

    let sync = SyncClient::new(FakeTransport::replying(json!([1, 2, 3])));
    assert!(matches!(sync.push_record(URL, &record), SyncStatus::Unconfirmed(_)));
}

#[test]
fn invalid_record_is_rejected_before_anything_is_stored() {
    let mut store = memory_store(1024 * 1024, 5);
    let sync = SyncClient::new(FakeTransport::default());
    let record = Record::new(RecordKind::CheckIn, "", "123");

    let err = SaveLogic::save(&mut store, &sync, URL, record, CompressOptions::default()).unwrap_err();

    assert!(matches!(err, AppError::Validation(_)));
    assert!(store.list().unwrap().is_empty());
    assert!(sync.transport().sent.borrow().is_empty());
}

#[test]
fn photos_and_attachments_are_compressed_before_saving() {
    let mut store = memory_store(16 * 1024 * 1024, 5);
    let sync = SyncClient::new(FakeTransport::replying(json!({ "result": "success" })));

    let details = SppdDetails {
        destination: "Dinas Pendidikan".to_string(),
        activity_type: "Rapat".to_string(),
        start_date: date("2025-01-06"),
        end_date: date("2025-01-07"),
        report_summary: "Rapat koordinasi".to_string(),
        attachments: vec![
            png_data_uri(1600, 800, [0, 128, 0, 255]),
            png_data_uri(100, 100, [0, 0, 0, 255]),
        ],
    };
    let record = Record::new(RecordKind::Sppd(details), "Budi", "123")
        .with_photo(Some(png_data_uri(2000, 1000, [255, 0, 0, 255])));

    SaveLogic::save(&mut store, &sync, URL, record, CompressOptions::default()).unwrap();

    let stored = &store.list().unwrap()[0];
    assert_eq!(image_dimensions(stored.photo_url.as_deref().unwrap()), Some((800, 400)));

    let RecordKind::Sppd(d) = &stored.kind else {
        panic!("expected SPPD record");
    };
    assert_eq!(image_dimensions(&d.attachments[0]), Some((800, 400)));
    assert_eq!(d.attachments[1], png_data_uri(100, 100, [0, 0, 0, 255]));

    // the server receives the same compressed photo
    let sent = sync.transport().sent.borrow();
    assert_eq!(sent[0].1["photoUrl"], json!(stored.photo_url));
}

#[test]
fn save_payload_is_flat_with_action_and_formatted_columns() {
    let details = LeaveDetails {
        leave_type: LeaveType::Sakit,
        reason: "Demam".to_string(),
        start_date: date("2025-01-06"),
        end_date: date("2025-01-07"),
    };
    let record = Record::leave("Budi", "123", details);

    let payload = build_save_payload(&record).unwrap();

    assert_eq!(payload["action"], "save_record");
    assert_eq!(payload["type"], "IJIN");
    assert_eq!(payload["leaveType"], "SAKIT");
    assert_eq!(payload["startDate"], "2025-01-06");
    assert_eq!(payload["name"], "Budi");
    assert_eq!(payload["notes"], "[SAKIT] Demam (2025-01-06 s/d 2025-01-07)");
    assert_eq!(payload["locationName"], "Laporan Ijin/Sakit");
    assert_eq!(payload["formattedDate"], json!(record.date_str()));
    assert_eq!(payload["formattedTime"], json!(record.time_str()));
}

#[test]
fn fetch_today_parses_rows_and_is_empty_on_failure() {
    let sync = SyncClient::new(FakeTransport::replying(json!({
        "result": "success",
        "data": [
            { "timestamp": "2025-01-06T00:15:00Z", "time": "07:15:02", "name": "Budi", "type": "DATANG", "location": "" },
            { "time": "07:30:00", "name": "Siti", "type": "DATANG", "location": "Ruang Guru" }
        ]
    })));

    let rows = sync.fetch_today(URL);
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0].short_time(), "07:15");
    assert_eq!(rows[0].location_or_default(), "Lokasi GPS");
    assert_eq!(rows[1].location_or_default(), "Ruang Guru");
    assert_eq!(sync.transport().sent.borrow()[0].1, json!({ "action": "get_today_data" }));

    let offline = SyncClient::new(FakeTransport::failing());
    assert!(offline.fetch_today(URL).is_empty());

    let refused = SyncClient::new(FakeTransport::replying(json!({ "result": "error" })));
    assert!(refused.fetch_today(URL).is_empty());
}
