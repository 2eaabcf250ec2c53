//! Local-first record store on top of a size-bounded key-value area.

use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::models::{Record, RecordKind, RecordType, TodayStatus, UserProfile};
use crate::storage::keys;
use crate::storage::kv::KeyValueStore;
use chrono::{DateTime, Local};

/// Stand-in shown in local history when the photo itself only lives on the server.
pub const PLACEHOLDER_PHOTO_URL: &str = "https://cdn-icons-png.flaticon.com/512/2965/2965327.png";

/// Photos longer than this are considered inline data and stripped from the local copy.
const INLINE_PHOTO_THRESHOLD: usize = 200;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StoreOptions {
    /// How many of the most recent records survive a capacity overflow.
    pub keep_on_overflow: usize,
    /// Replace inline photos with a placeholder in the local copy.
    pub strip_local_photos: bool,
}

impl Default for StoreOptions {
    fn default() -> Self {
        Self {
            keep_on_overflow: 5,
            strip_local_photos: false,
        }
    }
}

impl From<&Config> for StoreOptions {
    fn from(cfg: &Config) -> Self {
        Self {
            keep_on_overflow: cfg.keep_on_overflow,
            strip_local_photos: cfg.strip_local_photos,
        }
    }
}

/// Result of [`RecordStore::append`]. Appending never fails outright; the
/// outcome says how much history survived.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppendOutcome {
    /// Prepended to the full history.
    Stored,
    /// Capacity exceeded; only the `kept` most recent older records were kept.
    Trimmed { kept: usize },
    /// Capacity exceeded even after trimming; only the new record is stored.
    Collapsed,
    /// Nothing could be written.
    Failed(String),
}

impl AppendOutcome {
    pub fn is_persisted(&self) -> bool {
        !matches!(self, AppendOutcome::Failed(_))
    }
}

pub struct RecordStore<S: KeyValueStore> {
    kv: S,
    options: StoreOptions,
}

impl<S: KeyValueStore> RecordStore<S> {
    pub fn new(kv: S, options: StoreOptions) -> Self {
        Self { kv, options }
    }

    pub fn kv(&self) -> &S {
        &self.kv
    }

    // ------------------------------------------------
    // Records
    // ------------------------------------------------

    /// All records, newest first. A corrupt list reads as empty.
    pub fn list(&self) -> AppResult<Vec<Record>> {
        let Some(raw) = self.kv.get(keys::RECORDS)? else {
            return Ok(Vec::new());
        };

        match serde_json::from_str(&raw) {
            Ok(records) => Ok(records),
            Err(e) => {
                tracing::warn!(error = %e, "local record list is unreadable, treating as empty");
                Ok(Vec::new())
            }
        }
    }

    /// Prepend `record` to the persisted list.
    ///
    /// On capacity overflow the history is cut to the most recent
    /// `keep_on_overflow` records, then to the new record alone. Errors are
    /// never propagated.
    pub fn append(&mut self, record: &Record) -> AppendOutcome {
        let local = self.local_copy(record);

        let mut history = match self.list() {
            Ok(h) => h,
            Err(e) => {
                tracing::error!(error = %e, "cannot read local records");
                return AppendOutcome::Failed(e.to_string());
            }
        };

        match self.write_records(&local, &history) {
            Ok(()) => {
                self.kv.audit("append", record.record_type().as_tag(), &record.id);
                return AppendOutcome::Stored;
            }
            Err(AppError::QuotaExceeded { .. }) => {
                tracing::warn!(
                    total = history.len(),
                    keep = self.options.keep_on_overflow,
                    "storage quota exceeded, trimming old records"
                );
            }
            Err(e) => {
                tracing::error!(error = %e, "failed to store record locally");
                return AppendOutcome::Failed(e.to_string());
            }
        }

        history.truncate(self.options.keep_on_overflow);
        let kept = history.len();

        match self.write_records(&local, &history) {
            Ok(()) => {
                self.kv.audit(
                    "trim",
                    record.record_type().as_tag(),
                    &format!("quota exceeded, kept {kept} older records"),
                );
                return AppendOutcome::Trimmed { kept };
            }
            Err(e) => tracing::warn!(error = %e, "trimmed write failed, keeping only the new record"),
        }

        match self.write_records(&local, &[]) {
            Ok(()) => {
                self.kv.audit(
                    "trim",
                    record.record_type().as_tag(),
                    "quota exceeded, history dropped",
                );
                AppendOutcome::Collapsed
            }
            Err(e) => {
                tracing::error!(error = %e, "record does not fit in local storage");
                AppendOutcome::Failed(e.to_string())
            }
        }
    }

    fn write_records(&mut self, first: &Record, rest: &[Record]) -> AppResult<()> {
        let mut all = Vec::with_capacity(rest.len() + 1);
        all.push(first);
        all.extend(rest.iter());
        let json = serde_json::to_string(&all)?;
        self.kv.set(keys::RECORDS, &json)
    }

    /// Write a non-record key. On a full store the history is cut the same
    /// way `append` does it (keep `keep_on_overflow`, then only the newest)
    /// until the value fits.
    fn set_reclaiming(&mut self, key: &str, value: &str) -> AppResult<()> {
        let err = match self.kv.set(key, value) {
            Err(e @ AppError::QuotaExceeded { .. }) => e,
            other => return other,
        };

        let history = self.list()?;
        let mut last = err;

        for keep in [self.options.keep_on_overflow, 1] {
            if keep >= history.len() {
                continue;
            }
            match history.split_first() {
                Some((first, rest)) if keep > 0 => {
                    self.write_records(first, &rest[..keep - 1])?
                }
                _ => self.kv.remove(keys::RECORDS)?,
            }
            tracing::warn!(key, kept = keep, "storage quota exceeded, trimmed history");
            self.kv.audit("trim", key, &format!("quota exceeded, kept {keep} records"));

            match self.kv.set(key, value) {
                Err(e @ AppError::QuotaExceeded { .. }) => last = e,
                other => return other,
            }
        }

        Err(last)
    }

    fn local_copy(&self, record: &Record) -> Record {
        let mut local = record.clone();
        if !self.options.strip_local_photos {
            return local;
        }

        if local
            .photo_url
            .as_ref()
            .is_some_and(|p| p.len() > INLINE_PHOTO_THRESHOLD)
        {
            local.photo_url = Some(PLACEHOLDER_PHOTO_URL.to_string());
            local.notes = Some(match local.notes.take() {
                Some(n) => format!("{n} (Foto tersimpan di Server)"),
                None => "(Foto tersimpan di Server)".to_string(),
            });
        }

        if let RecordKind::Sppd(details) = &mut local.kind {
            details.attachments = details
                .attachments
                .iter()
                .filter(|a| !a.is_empty())
                .map(|a| {
                    if a.len() > INLINE_PHOTO_THRESHOLD {
                        PLACEHOLDER_PHOTO_URL.to_string()
                    } else {
                        a.clone()
                    }
                })
                .collect();
        }

        local
    }

    /// Check-in / check-out state for the local calendar day of `now`.
    pub fn today_status(&self, now: DateTime<Local>) -> AppResult<TodayStatus> {
        let today = now.date_naive();
        let records = self.list()?;

        let todays: Vec<&Record> = records
            .iter()
            .filter(|r| r.local_datetime().is_some_and(|dt| dt.date_naive() == today))
            .collect();

        let check_in = todays
            .iter()
            .find(|r| r.record_type() == RecordType::CheckIn);
        let check_out = todays
            .iter()
            .find(|r| r.record_type() == RecordType::CheckOut);

        Ok(TodayStatus {
            has_checked_in_today: check_in.is_some(),
            has_checked_out_today: check_out.is_some(),
            last_check_in_time: check_in.map(|r| r.timestamp),
        })
    }

    // ------------------------------------------------
    // Profile
    // ------------------------------------------------

    pub fn profile(&self) -> AppResult<Option<UserProfile>> {
        let Some(raw) = self.kv.get(keys::PROFILE)? else {
            return Ok(None);
        };
        match serde_json::from_str(&raw) {
            Ok(p) => Ok(Some(p)),
            Err(e) => {
                tracing::warn!(error = %e, "stored profile is unreadable");
                Ok(None)
            }
        }
    }

    pub fn save_profile(
        &mut self,
        name: &str,
        nip: &str,
        photo_url: Option<&str>,
        role: Option<&str>,
    ) -> AppResult<UserProfile> {
        let profile = UserProfile::merged(self.profile()?, name, nip, photo_url, role);
        self.set_reclaiming(keys::PROFILE, &serde_json::to_string(&profile)?)?;
        Ok(profile)
    }

    // ------------------------------------------------
    // Endpoint
    // ------------------------------------------------

    pub fn endpoint_override(&self) -> AppResult<Option<String>> {
        Ok(self
            .kv
            .get(keys::SCRIPT_URL)?
            .filter(|u| !u.trim().is_empty()))
    }

    /// Store a user-supplied endpoint. Blank input is ignored (returns false).
    pub fn set_endpoint(&mut self, url: &str) -> AppResult<bool> {
        let url = url.trim();
        if url.is_empty() {
            return Ok(false);
        }
        self.set_reclaiming(keys::SCRIPT_URL, url)?;
        self.kv.audit("endpoint", url, "Remote endpoint updated");
        Ok(true)
    }

    /// The user override if any, otherwise `default`.
    pub fn resolve_endpoint(&self, default: &str) -> String {
        match self.endpoint_override() {
            Ok(Some(url)) => url,
            Ok(None) => default.trim().to_string(),
            Err(e) => {
                tracing::warn!(error = %e, "cannot read endpoint override");
                default.trim().to_string()
            }
        }
    }

    // ------------------------------------------------
    // Session
    // ------------------------------------------------

    pub fn set_authenticated(&mut self, value: bool) -> AppResult<()> {
        if value {
            self.set_reclaiming(keys::AUTHENTICATED, "true")
        } else {
            self.kv.remove(keys::AUTHENTICATED)
        }
    }

    pub fn is_authenticated(&self) -> bool {
        matches!(self.kv.get(keys::AUTHENTICATED), Ok(Some(v)) if v == "true")
    }

    /// Full reset: records, profile and endpoint override.
    pub fn clear(&mut self) -> AppResult<()> {
        self.kv.remove(keys::RECORDS)?;
        self.kv.remove(keys::PROFILE)?;
        self.kv.remove(keys::SCRIPT_URL)?;
        self.kv.audit("reset", "", "Local data cleared");
        Ok(())
    }
}
