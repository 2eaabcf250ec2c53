use crate::cli::parser::{AttendArgs, Cli, Commands};
use crate::config::Config;
use crate::core::{CompressOptions, SaveLogic};
use crate::errors::AppResult;
use crate::models::{Record, RecordKind};
use crate::ui::messages::warning;
use crate::utils::time::format_clock;
use chrono::Local;

/// Check-in and check-out.
pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    let (kind, args): (RecordKind, &AttendArgs) = match &cli.command {
        Commands::Checkin(args) => (RecordKind::CheckIn, args),
        Commands::Checkout(args) => (RecordKind::CheckOut, args),
        _ => return Ok(()),
    };

    let mut store = super::open_store(cfg)?;
    super::require_login(&store)?;

    let status = store.today_status(Local::now())?;
    match &kind {
        RecordKind::CheckIn if status.has_checked_in_today => warning(format!(
            "Sudah absen datang hari ini ({}).",
            status.last_check_in_time.map(format_clock).unwrap_or_default()
        )),
        RecordKind::CheckOut if !status.has_checked_in_today => {
            warning("Belum ada absen datang hari ini.")
        }
        _ => {}
    }

    let (name, nip) = super::identity(&store, args.name.as_ref(), args.nip.as_ref())?;
    let photo = super::load_photo(args.photo.as_ref())?;

    let label = kind.record_type().label();
    let record = Record::new(kind, &name, &nip)
        .with_location(args.latitude, args.longitude)
        .with_location_name(args.location_name.clone())
        .with_photo(photo)
        .with_notes(args.notes.clone());

    let endpoint = super::resolve_endpoint(cli, cfg, &store);
    let sync = super::sync_client();
    let report = SaveLogic::save(
        &mut store,
        &sync,
        &endpoint,
        record,
        CompressOptions::from(cfg),
    )?;

    super::report_save(label, &report)
}
