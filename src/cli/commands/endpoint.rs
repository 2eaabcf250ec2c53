use crate::cli::parser::{Cli, Commands};
use crate::config::Config;
use crate::core::auth::validate_endpoint;
use crate::errors::AppResult;
use crate::ui::messages::{info, success, warning};

pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    if let Commands::Endpoint { url } = &cli.command {
        let mut store = super::open_store(cfg)?;

        match url {
            Some(u) => {
                if store.set_endpoint(u)? {
                    if let Err(e) = validate_endpoint(u.trim()) {
                        warning(e);
                    }
                    success(format!("Endpoint disimpan: {}", u.trim()));
                } else {
                    warning("URL kosong diabaikan.");
                }
            }
            None => {
                let current = super::resolve_endpoint(cli, cfg, &store);
                let source = if cli.endpoint.is_some() {
                    "--endpoint"
                } else if store.endpoint_override()?.is_some() {
                    "tersimpan"
                } else {
                    "default"
                };

                if current.is_empty() {
                    info(format!("Endpoint: (kosong, Mode Offline) [{source}]"));
                } else {
                    info(format!("Endpoint: {current} [{source}]"));
                }
            }
        }
    }
    Ok(())
}
