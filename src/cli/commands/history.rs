use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::models::{Record, RecordKind, RecordType};
use crate::utils::table::{Column, Table};
use crate::utils::time::format_millis;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::History {
        limit,
        kind,
        details,
    } = cmd
    {
        let only = kind
            .as_ref()
            .map(|k| RecordType::from_tag(k).ok_or_else(|| AppError::InvalidRecordType(k.clone())))
            .transpose()?;

        let store = super::open_store(cfg)?;
        super::require_login(&store)?;

        let records: Vec<Record> = store
            .list()?
            .into_iter()
            .filter(|r| only.is_none_or(|t| r.record_type() == t))
            .take(limit.unwrap_or(usize::MAX))
            .collect();

        if records.is_empty() {
            println!("Belum ada riwayat.");
            return Ok(());
        }

        if *details {
            for r in &records {
                print_details(r);
            }
        } else {
            print_table(&records);
        }
    }
    Ok(())
}

fn print_table(records: &[Record]) {
    let mut table = Table::new(vec![
        Column::new("Waktu", 16),
        Column::new("Jenis", 6),
        Column::new("Nama", 20),
        Column::new("Keterangan", 36),
    ]);

    for r in records {
        table.add_row(vec![
            format_millis(r.timestamp),
            r.record_type().as_tag().to_string(),
            r.name.clone(),
            summary(r),
        ]);
    }

    print!("{}", table.render());
}

fn summary(r: &Record) -> String {
    match &r.kind {
        RecordKind::Sppd(d) => format!("{} – {}", d.activity_type, d.destination),
        RecordKind::Leave(d) => format!("[{}] {}", d.leave_type, d.reason),
        RecordKind::CheckIn | RecordKind::CheckOut => r
            .location_name
            .clone()
            .or_else(|| match (r.latitude, r.longitude) {
                (Some(lat), Some(lon)) => Some(format!("{lat:.5}, {lon:.5}")),
                _ => None,
            })
            .unwrap_or_default(),
    }
}

fn print_details(r: &Record) {
    println!("\n=== {} · {} ===", r.record_type().label(), format_millis(r.timestamp));
    println!("ID       : {}", r.id);
    println!("Nama     : {} ({})", r.name, r.nip);

    if let (Some(lat), Some(lon)) = (r.latitude, r.longitude) {
        println!("Koordinat: {lat:.6}, {lon:.6}");
    }
    if let Some(loc) = &r.location_name {
        println!("Lokasi   : {loc}");
    }
    if let Some(photo) = &r.photo_url {
        let shown = if photo.starts_with("data:") {
            format!("(inline, {} bytes)", photo.len())
        } else {
            photo.clone()
        };
        println!("Foto     : {shown}");
    }

    match &r.kind {
        RecordKind::Sppd(d) => {
            println!("Tujuan   : {}", d.destination);
            println!("Kegiatan : {}", d.activity_type);
            println!("Tanggal  : {} s/d {}", d.start_date, d.end_date);
            println!("Lampiran : {}", d.attachments.len());
            if !d.report_summary.is_empty() {
                println!("Laporan  :");
                for line in textwrap::wrap(&d.report_summary, 72) {
                    println!("  {line}");
                }
            }
        }
        RecordKind::Leave(d) => {
            println!("Jenis    : {}", d.leave_type);
            println!("Tanggal  : {} s/d {}", d.start_date, d.end_date);
            println!("Alasan   :");
            for line in textwrap::wrap(&d.reason, 72) {
                println!("  {line}");
            }
        }
        RecordKind::CheckIn | RecordKind::CheckOut => {}
    }

    if let Some(notes) = &r.notes {
        println!("Catatan  : {notes}");
    }
}
