use crate::errors::{AppError, AppResult};
use crate::models::{CloudAttendance, Record};
use crate::sync::transport::Transport;
use serde::Deserialize;
use serde::de::DeserializeOwned;
use serde_json::{Value, json};

/// What happened to the remote copy of a record. Never affects the local save.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SyncStatus {
    /// Server acknowledged the record.
    Synced,
    /// Sent, but the reply could not be read.
    Unconfirmed(String),
    /// Server answered with a non-success result.
    Rejected(String),
    /// Transport failure or error status.
    Offline(String),
    /// No endpoint configured.
    Skipped,
}

impl SyncStatus {
    pub fn describe(&self) -> String {
        match self {
            SyncStatus::Synced => "Data berhasil dikirim ke server.".to_string(),
            SyncStatus::Unconfirmed(why) => format!("Terkirim, balasan server tidak terbaca ({why})."),
            SyncStatus::Rejected(why) => format!("Server menolak data: {why}"),
            SyncStatus::Offline(why) => format!("Offline, data hanya tersimpan di perangkat ({why})."),
            SyncStatus::Skipped => "Server belum diatur, data hanya tersimpan di perangkat.".to_string(),
        }
    }
}

/// Identity returned by a successful remote login.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RemoteUser {
    pub name: String,
    #[serde(default)]
    pub nip: String,
    #[serde(default)]
    pub photo_url: Option<String>,
}

#[derive(Debug, Deserialize)]
struct Envelope<T> {
    #[serde(default)]
    result: String,
    #[serde(default)]
    message: Option<String>,
    #[serde(default = "Option::default")]
    data: Option<T>,
}

fn parse_envelope<T: DeserializeOwned>(value: Value) -> AppResult<Envelope<T>> {
    Ok(serde_json::from_value(value)?)
}

pub struct SyncClient<T: Transport> {
    transport: T,
}

impl<T: Transport> SyncClient<T> {
    pub fn new(transport: T) -> Self {
        Self { transport }
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Single fire-and-forget push of one record. No retry.
    pub fn push_record(&self, url: &str, record: &Record) -> SyncStatus {
        if url.trim().is_empty() {
            return SyncStatus::Skipped;
        }

        let payload = match build_save_payload(record) {
            Ok(p) => p,
            Err(e) => return SyncStatus::Offline(e.to_string()),
        };

        tracing::info!(kind = %record.record_type(), id = %record.id, "sending record to server");

        let status = match self.transport.post_json(url, &payload) {
            Ok(reply) => match parse_envelope::<Value>(reply) {
                Ok(env) if env.result == "success" => SyncStatus::Synced,
                Ok(env) => SyncStatus::Rejected(
                    env.message
                        .unwrap_or_else(|| format!("result={}", env.result)),
                ),
                Err(e) => SyncStatus::Unconfirmed(e.to_string()),
            },
            Err(e @ AppError::Json(_)) => SyncStatus::Unconfirmed(e.to_string()),
            Err(e) => SyncStatus::Offline(e.to_string()),
        };

        match &status {
            SyncStatus::Synced => tracing::info!(id = %record.id, "record synced"),
            other => tracing::warn!(id = %record.id, status = ?other, "record not synced"),
        }
        status
    }

    /// Today's school-wide recap. Empty on any failure.
    pub fn fetch_today(&self, url: &str) -> Vec<CloudAttendance> {
        if url.trim().is_empty() {
            return Vec::new();
        }

        let body = json!({ "action": "get_today_data" });
        let reply = match self.transport.post_json(url, &body) {
            Ok(r) => r,
            Err(e) => {
                tracing::warn!(error = %e, "cannot fetch today's data");
                return Vec::new();
            }
        };

        match parse_envelope::<Vec<CloudAttendance>>(reply) {
            Ok(env) if env.result == "success" => env.data.unwrap_or_default(),
            Ok(env) => {
                tracing::warn!(result = %env.result, "server refused today's data");
                Vec::new()
            }
            Err(e) => {
                tracing::warn!(error = %e, "unreadable today's data");
                Vec::new()
            }
        }
    }

    /// Remote credential check. `Ok(None)` means the server rejected them.
    pub fn login(&self, url: &str, username: &str, password: &str) -> AppResult<Option<RemoteUser>> {
        let body = json!({
            "action": "login",
            "username": username,
            "password": password,
        });

        let env = parse_envelope::<RemoteUser>(self.transport.post_json(url, &body)?)?;
        if env.result == "success" {
            env.data
                .map(Some)
                .ok_or_else(|| AppError::Other("login reply has no user data".to_string()))
        } else {
            Ok(None)
        }
    }
}

/// Flat `save_record` payload: the record's own fields plus the action
/// discriminator and sheet-friendly date/time columns.
pub fn build_save_payload(record: &Record) -> AppResult<Value> {
    let mut value = serde_json::to_value(record)?;
    let map = value
        .as_object_mut()
        .ok_or_else(|| AppError::Other("record did not serialize to an object".to_string()))?;

    map.insert("action".to_string(), json!("save_record"));
    map.insert("formattedDate".to_string(), json!(record.date_str()));
    map.insert("formattedTime".to_string(), json!(record.time_str()));

    Ok(value)
}
