use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages::{success, warning};
use std::io::{Write, stdin, stdout};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Reset { yes } = cmd {
        if !*yes {
            warning("Semua riwayat, profil dan URL server di perangkat ini akan dihapus.");
            print!("Lanjutkan? [y/N]: ");
            stdout().flush().ok();

            let mut answer = String::new();
            stdin().read_line(&mut answer)?;
            let answer = answer.trim().to_lowercase();

            if !(answer == "y" || answer == "yes") {
                println!("❌ Reset dibatalkan.");
                return Ok(());
            }
        }

        let mut store = super::open_store(cfg)?;
        store.clear()?;
        success("Data lokal telah dihapus.");
    }
    Ok(())
}
