use crate::cli::parser::Cli;
use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages::{header, warning};
use crate::utils::table::{Column, Table};

/// Today's attendance of every teacher, read from the sheet.
pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    let store = super::open_store(cfg)?;
    super::require_login(&store)?;

    let endpoint = super::resolve_endpoint(cli, cfg, &store);
    if endpoint.is_empty() {
        warning("Server belum diatur; rekap sekolah tidak tersedia.");
        return Ok(());
    }

    let sync = super::sync_client();
    let rows = sync.fetch_today(&endpoint);

    header("Kehadiran Hari Ini");

    if rows.is_empty() {
        println!("Belum ada data absensi dari rekan guru hari ini.");
        return Ok(());
    }

    let mut table = Table::new(vec![
        Column::new("Jam", 5),
        Column::new("Jenis", 6),
        Column::new("Nama", 28),
        Column::new("Lokasi", 30),
    ]);
    for row in &rows {
        table.add_row(vec![
            row.short_time().to_string(),
            row.kind.clone(),
            row.name.clone(),
            row.location_or_default().to_string(),
        ]);
    }
    print!("{}", table.render());

    Ok(())
}
