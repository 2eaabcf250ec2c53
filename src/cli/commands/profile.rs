use crate::config::Config;
use crate::errors::AppResult;

pub fn handle(cfg: &Config) -> AppResult<()> {
    let store = super::open_store(cfg)?;
    super::require_login(&store)?;

    match store.profile()? {
        Some(p) => {
            println!("Nama    : {}", p.name);
            println!("NIP     : {}", p.nip);
            println!("Jabatan : {}", p.role.as_deref().unwrap_or("-"));
            println!("Foto    : {}", p.photo_url.as_deref().unwrap_or("-"));
        }
        None => println!("Profil belum tersimpan."),
    }
    Ok(())
}
