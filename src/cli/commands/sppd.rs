use crate::cli::parser::{Cli, Commands};
use crate::config::Config;
use crate::core::{CompressOptions, SaveLogic};
use crate::errors::{AppError, AppResult};
use crate::models::{Record, RecordKind, SppdDetails};
use crate::utils::date;

pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    if let Commands::Sppd {
        name,
        nip,
        destination,
        activity,
        start,
        end,
        summary,
        attachments,
        latitude,
        longitude,
    } = &cli.command
    {
        let start_date = date::parse_or_today(start.as_ref()).map_err(AppError::InvalidDate)?;
        let end_date = match end {
            Some(e) => date::parse_date(e).ok_or_else(|| AppError::InvalidDate(e.clone()))?,
            None => start_date,
        };

        let mut store = super::open_store(cfg)?;
        super::require_login(&store)?;

        let (name, nip) = super::identity(&store, name.as_ref(), nip.as_ref())?;

        let mut photos = Vec::with_capacity(attachments.len());
        for path in attachments {
            if let Some(p) = super::load_photo(Some(path))? {
                photos.push(p);
            }
        }

        let details = SppdDetails {
            destination: destination.trim().to_string(),
            activity_type: activity.trim().to_string(),
            start_date,
            end_date,
            report_summary: summary.trim().to_string(),
            attachments: photos,
        };

        let record = Record::new(RecordKind::Sppd(details), &name, &nip)
            .with_location(*latitude, *longitude)
            .with_location_name(Some(destination.trim().to_string()));

        let endpoint = super::resolve_endpoint(cli, cfg, &store);
        let sync = super::sync_client();
        let report = SaveLogic::save(
            &mut store,
            &sync,
            &endpoint,
            record,
            CompressOptions::from(cfg),
        )?;

        super::report_save("Laporan SPPD", &report)?;
    }

    Ok(())
}
