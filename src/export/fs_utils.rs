use crate::errors::{AppError, AppResult};
use crate::ui::messages::{info, warning};
use std::io::{self, Write};
use std::path::Path;

/// An existing target is only replaced with `force` or an explicit "y".
pub(crate) fn ensure_writable(path: &Path, force: bool) -> AppResult<()> {
    if force || !path.exists() {
        return Ok(());
    }

    warning(format!("File '{}' sudah ada.", path.display()));
    print!("Timpa file? [y/N]: ");
    io::stdout().flush().ok();

    let mut answer = String::new();
    io::stdin().read_line(&mut answer)?;

    match answer.trim().to_ascii_lowercase().as_str() {
        "y" | "ya" | "yes" => {
            info("File lama akan ditimpa.");
            Ok(())
        }
        _ => Err(AppError::Export(format!(
            "dibatalkan, '{}' tidak ditimpa",
            path.display()
        ))),
    }
}
