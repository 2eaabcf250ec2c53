//! Login against the sheet backend, with an offline demo mode.

use crate::config::Config;
use crate::core::store::RecordStore;
use crate::errors::{AppError, LoginError};
use crate::models::UserProfile;
use crate::storage::kv::KeyValueStore;
use crate::sync::{SyncClient, Transport};

/// Password accepted when no endpoint is configured.
pub const DEMO_PASSWORD: &str = "123456";
pub const DEMO_NIP: &str = "198501012010011001";
pub const DEMO_FALLBACK_NAME: &str = "Guru (Demo Mode)";
pub const DEFAULT_ROLE: &str = "Guru Kelas";

pub struct AuthLogic;

impl AuthLogic {
    /// Check credentials and, on success, store the profile and session flag.
    pub fn login<S: KeyValueStore, T: Transport>(
        store: &mut RecordStore<S>,
        sync: &SyncClient<T>,
        endpoint: &str,
        cfg: &Config,
        username: &str,
        password: &str,
    ) -> Result<UserProfile, LoginError> {
        if username.trim().is_empty() || password.is_empty() {
            return Err(LoginError::MissingCredentials);
        }

        let endpoint = endpoint.trim();

        // 1. Offline / demo mode
        if endpoint.is_empty() {
            if password != DEMO_PASSWORD {
                return Err(LoginError::BadCredentials(
                    "Mode Offline: Password salah (Default: 123456). Atau masukkan URL Server di pengaturan.".to_string(),
                ));
            }

            let display_name = demo_display_name(username);
            let (photo, role) = staff_details(cfg, &display_name);
            let profile = Self::establish(store, &display_name, DEMO_NIP, photo.as_deref(), &role)?;
            tracing::info!(name = %profile.name, "demo login");
            store.kv().audit("login", &profile.name, "Demo mode login");
            return Ok(profile);
        }

        // 2. Endpoint sanity
        validate_endpoint(endpoint)?;

        // 3. Remote check
        let user = match sync.login(endpoint, username.trim(), password) {
            Ok(Some(user)) => user,
            Ok(None) => {
                return Err(LoginError::BadCredentials(
                    "Username atau Password salah (Cek sheet 'Users').".to_string(),
                ));
            }
            Err(AppError::HttpStatus(code, reason)) => return Err(LoginError::Server(code, reason)),
            Err(e) => {
                tracing::error!(error = %e, "login request failed");
                return Err(LoginError::Unreachable(e.to_string()));
            }
        };

        let (dir_photo, role) = staff_details(cfg, &user.name);
        let photo = user.photo_url.clone().filter(|p| !p.is_empty()).or(dir_photo);
        let profile = Self::establish(store, &user.name, &user.nip, photo.as_deref(), &role)?;
        tracing::info!(name = %profile.name, "remote login");
        store.kv().audit("login", &profile.name, "Remote login");
        Ok(profile)
    }

    fn establish<S: KeyValueStore>(
        store: &mut RecordStore<S>,
        name: &str,
        nip: &str,
        photo: Option<&str>,
        role: &str,
    ) -> Result<UserProfile, LoginError> {
        let profile = store
            .save_profile(name, nip, photo, Some(role))
            .map_err(|e| LoginError::LocalStorage(format!("profil: {e}")))?;
        store
            .set_authenticated(true)
            .map_err(|e| LoginError::LocalStorage(format!("sesi: {e}")))?;
        Ok(profile)
    }

    pub fn logout<S: KeyValueStore>(store: &mut RecordStore<S>) -> crate::errors::AppResult<()> {
        store.set_authenticated(false)?;
        store.kv().audit("logout", "", "Session closed");
        Ok(())
    }
}

/// `budi.santoso` → `Budi Santoso`.
pub fn demo_display_name(username: &str) -> String {
    let name = username
        .trim()
        .split('.')
        .filter(|w| !w.is_empty())
        .map(capitalize)
        .collect::<Vec<_>>()
        .join(" ");

    if name.is_empty() {
        DEMO_FALLBACK_NAME.to_string()
    } else {
        name
    }
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

fn staff_details(cfg: &Config, name: &str) -> (Option<String>, String) {
    match cfg.find_staff(name) {
        Some(entry) => (
            entry.photo.clone(),
            entry.role.clone().unwrap_or_else(|| DEFAULT_ROLE.to_string()),
        ),
        None => (None, DEFAULT_ROLE.to_string()),
    }
}

/// The backend is an Apps Script web app: `https://script.google.com/.../exec`.
pub fn validate_endpoint(url: &str) -> Result<(), LoginError> {
    if !url.contains("script.google.com") {
        return Err(LoginError::MisconfiguredEndpoint(
            "URL tidak valid. Harap gunakan URL Google Apps Script.".to_string(),
        ));
    }
    if !url.ends_with("/exec") {
        return Err(LoginError::MisconfiguredEndpoint(
            "URL salah. Gunakan URL 'Web App' yang berakhiran '/exec' (Bukan /dev atau /edit)."
                .to_string(),
        ));
    }
    Ok(())
}
