use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::export::ExportLogic;
use crate::models::RecordType;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Export {
        format,
        file,
        kind,
        force,
    } = cmd
    {
        let only = kind
            .as_ref()
            .map(|k| RecordType::from_tag(k).ok_or_else(|| AppError::InvalidRecordType(k.clone())))
            .transpose()?;

        let store = super::open_store(cfg)?;
        super::require_login(&store)?;
        ExportLogic::export(&store, *format, file, only, *force)?;
    }
    Ok(())
}
