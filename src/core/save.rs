//! The save pipeline: validate → compress → persist locally → sync → report.

use crate::config::Config;
use crate::core::compress::{DEFAULT_JPEG_QUALITY, DEFAULT_MAX_WIDTH, compress_image_with_quality, is_inline_image};
use crate::core::store::{AppendOutcome, RecordStore};
use crate::errors::AppResult;
use crate::models::{Record, RecordKind};
use crate::storage::kv::KeyValueStore;
use crate::sync::{SyncClient, SyncStatus, Transport};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CompressOptions {
    pub max_width: u32,
    pub quality: u8,
}

impl Default for CompressOptions {
    fn default() -> Self {
        Self {
            max_width: DEFAULT_MAX_WIDTH,
            quality: DEFAULT_JPEG_QUALITY,
        }
    }
}

impl From<&Config> for CompressOptions {
    fn from(cfg: &Config) -> Self {
        Self {
            max_width: cfg.compress_max_width,
            quality: cfg.jpeg_quality,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SaveReport {
    pub local: AppendOutcome,
    pub sync: SyncStatus,
}

impl SaveReport {
    /// Success is decided by the local write alone.
    pub fn success(&self) -> bool {
        self.local.is_persisted()
    }
}

pub struct SaveLogic;

impl SaveLogic {
    /// Store `record` locally, then mirror it to `endpoint` (empty = no sync).
    ///
    /// Only validation errors are returned; storage and network problems are
    /// reported through [`SaveReport`].
    pub fn save<S: KeyValueStore, T: Transport>(
        store: &mut RecordStore<S>,
        sync: &SyncClient<T>,
        endpoint: &str,
        record: Record,
        compress: CompressOptions,
    ) -> AppResult<SaveReport> {
        record.validate()?;

        let record = compress_photos(record, compress);

        let local = store.append(&record);
        if local.is_persisted() {
            // remembered for auto-fill on the next form
            if let Err(e) = store.save_profile(&record.name, &record.nip, None, None) {
                tracing::warn!(error = %e, "cannot update profile after save");
            }
        }

        let sync = sync.push_record(endpoint, &record);

        Ok(SaveReport { local, sync })
    }
}

fn compress_photos(mut record: Record, opts: CompressOptions) -> Record {
    let shrink = |s: String| {
        if is_inline_image(&s) {
            compress_image_with_quality(&s, opts.max_width, opts.quality)
        } else {
            s
        }
    };

    record.photo_url = record.photo_url.map(&shrink);
    if let RecordKind::Sppd(details) = &mut record.kind {
        details.attachments = std::mem::take(&mut details.attachments)
            .into_iter()
            .map(&shrink)
            .collect();
    }
    record
}
