use crate::cli::parser::{Cli, Commands};
use crate::config::Config;
use crate::core::{CompressOptions, SaveLogic};
use crate::errors::{AppError, AppResult};
use crate::models::{LeaveDetails, LeaveType, Record};
use crate::utils::date;

pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    if let Commands::Leave {
        name,
        nip,
        kind,
        reason,
        start,
        end,
        photo,
    } = &cli.command
    {
        let leave_type =
            LeaveType::from_code(kind).ok_or_else(|| AppError::InvalidLeaveType(kind.clone()))?;
        let start_date = date::parse_or_today(start.as_ref()).map_err(AppError::InvalidDate)?;
        let end_date = match end {
            Some(e) => date::parse_date(e).ok_or_else(|| AppError::InvalidDate(e.clone()))?,
            None => start_date,
        };

        let mut store = super::open_store(cfg)?;
        super::require_login(&store)?;

        let (name, nip) = super::identity(&store, name.as_ref(), nip.as_ref())?;
        let photo = super::load_photo(photo.as_ref())?;

        let record = Record::leave(
            &name,
            &nip,
            LeaveDetails {
                leave_type,
                reason: reason.trim().to_string(),
                start_date,
                end_date,
            },
        )
        .with_photo(photo);

        let endpoint = super::resolve_endpoint(cli, cfg, &store);
        let sync = super::sync_client();
        let report = SaveLogic::save(
            &mut store,
            &sync,
            &endpoint,
            record,
            CompressOptions::from(cfg),
        )?;

        super::report_save("Laporan Ijin/Sakit", &report)?;
    }

    Ok(())
}
