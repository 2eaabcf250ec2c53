use crate::cli::parser::{Cli, Commands};
use crate::config::Config;
use crate::core::AuthLogic;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{error, info, success};

pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    match &cli.command {
        Commands::Login { username, password } => {
            let mut store = super::open_store(cfg)?;
            let endpoint = super::resolve_endpoint(cli, cfg, &store);
            let sync = super::sync_client();

            if endpoint.is_empty() {
                info("Server belum diatur: login dalam Mode Offline/Demo.");
            }

            match AuthLogic::login(&mut store, &sync, &endpoint, cfg, username, password) {
                Ok(profile) => {
                    success(format!("Login berhasil. Selamat datang, {}!", profile.name));
                    if let Some(role) = &profile.role {
                        info(format!("Jabatan: {role}"));
                    }
                    Ok(())
                }
                Err(e) => {
                    error(&e);
                    Err(AppError::Other("login ditolak".to_string()))
                }
            }
        }
        Commands::Logout => {
            let mut store = super::open_store(cfg)?;
            AuthLogic::logout(&mut store)?;
            success("Anda telah keluar.");
            Ok(())
        }
        _ => Ok(()),
    }
}
