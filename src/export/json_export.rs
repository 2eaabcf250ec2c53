use crate::errors::AppResult;
use crate::models::Record;
use std::path::Path;

/// Writes records as pretty JSON, in the same flat shape used for storage.
pub fn write_json(path: &Path, records: &[Record]) -> AppResult<()> {
    let json = serde_json::to_string_pretty(records)?;
    std::fs::write(path, json)?;
    Ok(())
}
