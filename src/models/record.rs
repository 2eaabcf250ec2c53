use super::{leave_type::LeaveType, record_type::RecordType};
use crate::errors::{AppError, AppResult};
use chrono::{DateTime, Local, NaiveDate, TimeZone};
use serde::{Deserialize, Serialize};

/// Maximum number of photo attachments on an SPPD report.
pub const MAX_ATTACHMENTS: usize = 4;

/// A single attendance or report entry.
///
/// The common header is shared by every variant; variant-specific payload
/// lives in [`RecordKind`], discriminated on the wire by the `type` field.
/// The JSON form is flat with camelCase keys, which is also the column
/// naming used by the remote sheet.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Record {
    pub id: String,
    /// Capture time, epoch milliseconds.
    pub timestamp: i64,
    pub name: String,
    pub nip: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub latitude: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub longitude: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub photo_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location_name: Option<String>,
    #[serde(flatten)]
    pub kind: RecordKind,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum RecordKind {
    #[serde(rename = "DATANG")]
    CheckIn,
    #[serde(rename = "PULANG")]
    CheckOut,
    #[serde(rename = "SPPD")]
    Sppd(SppdDetails),
    #[serde(rename = "IJIN")]
    Leave(LeaveDetails),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SppdDetails {
    pub destination: String,
    pub activity_type: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub report_summary: String,
    #[serde(default)]
    pub attachments: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeaveDetails {
    pub leave_type: LeaveType,
    pub reason: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
}

impl RecordKind {
    pub fn record_type(&self) -> RecordType {
        match self {
            RecordKind::CheckIn => RecordType::CheckIn,
            RecordKind::CheckOut => RecordType::CheckOut,
            RecordKind::Sppd(_) => RecordType::Sppd,
            RecordKind::Leave(_) => RecordType::Leave,
        }
    }
}

impl Record {
    /// New record captured now, with a fresh device-unique id.
    pub fn new(kind: RecordKind, name: &str, nip: &str) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            timestamp: Local::now().timestamp_millis(),
            name: name.trim().to_string(),
            nip: nip.trim().to_string(),
            latitude: None,
            longitude: None,
            photo_url: None,
            notes: None,
            location_name: None,
            kind,
        }
    }

    /// Leave report. Notes carry a one-line summary for the sheet, e.g.
    /// `[SAKIT] Demam (2025-01-06 s/d 2025-01-07)`.
    pub fn leave(name: &str, nip: &str, details: LeaveDetails) -> Self {
        let notes = format!(
            "[{}] {} ({} s/d {})",
            details.leave_type, details.reason, details.start_date, details.end_date
        );
        Self::new(RecordKind::Leave(details), name, nip)
            .with_notes(Some(notes))
            .with_location_name(Some("Laporan Ijin/Sakit".to_string()))
    }

    pub fn with_timestamp(mut self, timestamp: i64) -> Self {
        self.timestamp = timestamp;
        self
    }

    pub fn with_location(mut self, latitude: Option<f64>, longitude: Option<f64>) -> Self {
        self.latitude = latitude;
        self.longitude = longitude;
        self
    }

    pub fn with_photo(mut self, photo_url: Option<String>) -> Self {
        self.photo_url = photo_url.filter(|p| !p.trim().is_empty());
        self
    }

    pub fn with_notes(mut self, notes: Option<String>) -> Self {
        self.notes = notes.filter(|n| !n.trim().is_empty());
        self
    }

    pub fn with_location_name(mut self, location_name: Option<String>) -> Self {
        self.location_name = location_name.filter(|l| !l.trim().is_empty());
        self
    }

    pub fn record_type(&self) -> RecordType {
        self.kind.record_type()
    }

    pub fn local_datetime(&self) -> Option<DateTime<Local>> {
        Local.timestamp_millis_opt(self.timestamp).single()
    }

    pub fn date_str(&self) -> String {
        self.local_datetime()
            .map(|dt| dt.format("%Y-%m-%d").to_string())
            .unwrap_or_default()
    }

    pub fn time_str(&self) -> String {
        self.local_datetime()
            .map(|dt| dt.format("%H:%M:%S").to_string())
            .unwrap_or_default()
    }

    /// Reject malformed input before any persistence is attempted.
    pub fn validate(&self) -> AppResult<()> {
        if self.name.trim().is_empty() || self.nip.trim().is_empty() {
            return Err(AppError::Validation(
                "Mohon lengkapi Nama dan NIP.".to_string(),
            ));
        }

        if let Some(lat) = self.latitude
            && !(-90.0..=90.0).contains(&lat)
        {
            return Err(AppError::Validation(format!("Latitude out of range: {lat}")));
        }
        if let Some(lon) = self.longitude
            && !(-180.0..=180.0).contains(&lon)
        {
            return Err(AppError::Validation(format!(
                "Longitude out of range: {lon}"
            )));
        }

        match &self.kind {
            RecordKind::CheckIn | RecordKind::CheckOut => Ok(()),
            RecordKind::Sppd(d) => {
                if d.destination.trim().is_empty() || d.activity_type.trim().is_empty() {
                    return Err(AppError::Validation(
                        "Mohon lengkapi Tujuan dan Jenis Kegiatan.".to_string(),
                    ));
                }
                if d.attachments.len() > MAX_ATTACHMENTS {
                    return Err(AppError::Validation(format!(
                        "Maksimal {MAX_ATTACHMENTS} foto lampiran (got {}).",
                        d.attachments.len()
                    )));
                }
                check_range(d.start_date, d.end_date)
            }
            RecordKind::Leave(d) => {
                if d.reason.trim().is_empty() {
                    return Err(AppError::Validation(
                        "Mohon lengkapi Nama, NIP, dan Alasan.".to_string(),
                    ));
                }
                check_range(d.start_date, d.end_date)
            }
        }
    }
}

fn check_range(start: NaiveDate, end: NaiveDate) -> AppResult<()> {
    if end < start {
        return Err(AppError::Validation(format!(
            "End date {end} is before start date {start}."
        )));
    }
    Ok(())
}
