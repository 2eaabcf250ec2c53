pub mod attend;
pub mod config;
pub mod endpoint;
pub mod export;
pub mod history;
pub mod init;
pub mod leave;
pub mod log;
pub mod login;
pub mod profile;
pub mod recap;
pub mod reset;
pub mod sppd;
pub mod status;

use crate::cli::parser::Cli;
use crate::config::Config;
use crate::core::compress::encode_file_as_data_uri;
use crate::core::{AppendOutcome, RecordStore, SaveReport, StoreOptions};
use crate::errors::{AppError, AppResult};
use crate::storage::initialize::init_db;
use crate::storage::{DbPool, SqliteKv};
use crate::sync::{HttpTransport, SyncClient};
use crate::ui::messages::{info, success, warning};
use std::path::Path;

pub(crate) type Store = RecordStore<SqliteKv>;

/// Open (and migrate) the configured database as a record store.
pub(crate) fn open_store(cfg: &Config) -> AppResult<Store> {
    if let Some(parent) = Path::new(&cfg.database).parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent)?;
    }

    let pool = DbPool::new(&cfg.database)?;
    init_db(&pool.conn)?;

    Ok(RecordStore::new(
        SqliteKv::new(pool, cfg.storage_quota_bytes),
        StoreOptions::from(cfg),
    ))
}

/// `--endpoint` wins, then the stored override, then the config default.
pub(crate) fn resolve_endpoint(cli: &Cli, cfg: &Config, store: &Store) -> String {
    match &cli.endpoint {
        Some(url) => url.trim().to_string(),
        None => store.resolve_endpoint(&cfg.default_endpoint),
    }
}

pub(crate) fn sync_client() -> SyncClient<HttpTransport> {
    SyncClient::new(HttpTransport::new())
}

pub(crate) fn require_login(store: &Store) -> AppResult<()> {
    if store.is_authenticated() {
        Ok(())
    } else {
        Err(AppError::NotAuthenticated)
    }
}

/// Name and NIP from the flags, falling back to the saved profile.
pub(crate) fn identity(
    store: &Store,
    name: Option<&String>,
    nip: Option<&String>,
) -> AppResult<(String, String)> {
    let profile = store.profile()?;
    let name = name
        .cloned()
        .or_else(|| profile.as_ref().map(|p| p.name.clone()))
        .unwrap_or_default();
    let nip = nip
        .cloned()
        .or_else(|| profile.as_ref().map(|p| p.nip.clone()))
        .unwrap_or_default();
    Ok((name, nip))
}

pub(crate) fn load_photo(path: Option<&String>) -> AppResult<Option<String>> {
    path.map(|p| encode_file_as_data_uri(Path::new(p)))
        .transpose()
}

/// Print the outcome of a save. Fails only when nothing was stored locally.
pub(crate) fn report_save(label: &str, report: &SaveReport) -> AppResult<()> {
    match &report.local {
        AppendOutcome::Stored => {}
        AppendOutcome::Trimmed { kept } => warning(format!(
            "Penyimpanan penuh: riwayat lama dipangkas, {kept} data terakhir disimpan."
        )),
        AppendOutcome::Collapsed => {
            warning("Penyimpanan penuh: hanya data terbaru yang disimpan.")
        }
        AppendOutcome::Failed(why) => {
            return Err(AppError::Other(format!("{label} gagal disimpan: {why}")));
        }
    }

    success(format!("{label} berhasil disimpan."));
    info(report.sync.describe());
    Ok(())
}
