use crate::errors::AppResult;
use crate::models::Record;
use csv::Writer;
use std::path::Path;

pub const HEADER: [&str; 10] = [
    "id",
    "type",
    "date",
    "time",
    "name",
    "nip",
    "location",
    "latitude",
    "longitude",
    "notes",
];

/// Writes one row per record. Variant-specific fields are folded into `notes`.
pub fn write_csv(path: &Path, records: &[Record]) -> AppResult<()> {
    let mut wtr = Writer::from_path(path)?;

    wtr.write_record(HEADER)?;

    for r in records {
        wtr.write_record(&[
            r.id.clone(),
            r.record_type().as_tag().to_string(),
            r.date_str(),
            r.time_str(),
            r.name.clone(),
            r.nip.clone(),
            r.location_name.clone().unwrap_or_default(),
            r.latitude.map(|v| v.to_string()).unwrap_or_default(),
            r.longitude.map(|v| v.to_string()).unwrap_or_default(),
            r.notes.clone().unwrap_or_default(),
        ])?;
    }

    wtr.flush()?;
    Ok(())
}
