use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages::badge;
use crate::utils::date::greeting;
use crate::utils::time::format_clock;
use chrono::{Local, Timelike};

/// Dashboard: greeting plus today's check-in state.
pub fn handle(cfg: &Config) -> AppResult<()> {
    let store = super::open_store(cfg)?;
    super::require_login(&store)?;

    let now = Local::now();
    let name = store
        .profile()?
        .map(|p| p.name)
        .unwrap_or_else(|| "Pak Guru".to_string());
    let status = store.today_status(now)?;

    println!("{}", now.format("%A, %d %B %Y  %H:%M:%S"));
    println!("{}, {}!", greeting(now.hour()), name);

    if status.has_checked_in_today {
        let at = status.last_check_in_time.map(format_clock).unwrap_or_default();
        println!("{} datang {at}", badge("Sudah Absen", true));
    } else {
        println!("{} Jangan lupa isi kehadiran hari ini.", badge("Belum Absen", false));
    }

    if status.has_checked_out_today {
        println!("{}", badge("Sudah Pulang", true));
    }

    Ok(())
}
