use super::{ExportFormat, fs_utils::ensure_writable, notify_export_success};
use crate::core::store::RecordStore;
use crate::errors::AppResult;
use crate::models::RecordType;
use crate::storage::kv::KeyValueStore;
use std::path::Path;

pub struct ExportLogic;

impl ExportLogic {
    /// Export local history (newest first), optionally only one record type.
    pub fn export<S: KeyValueStore>(
        store: &RecordStore<S>,
        format: ExportFormat,
        file: &str,
        only: Option<RecordType>,
        force: bool,
    ) -> AppResult<usize> {
        let path = Path::new(file);
        ensure_writable(path, force)?;

        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            std::fs::create_dir_all(parent)?;
        }

        let records: Vec<_> = store
            .list()?
            .into_iter()
            .filter(|r| only.is_none_or(|t| r.record_type() == t))
            .collect();

        match format {
            ExportFormat::Csv => super::csv_export::write_csv(path, &records)?,
            ExportFormat::Json => super::json_export::write_json(path, &records)?,
        }

        notify_export_success(&format.as_str().to_uppercase(), records.len(), path);
        store
            .kv()
            .audit("export", file, &format!("{} records", records.len()));
        Ok(records.len())
    }
}
