use chrono::NaiveDate;

pub fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

pub fn parse_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d").ok()
}

/// Parse an optional CLI date, defaulting to today.
pub fn parse_or_today(s: Option<&String>) -> Result<NaiveDate, String> {
    match s {
        Some(v) => parse_date(v).ok_or_else(|| v.to_string()),
        None => Ok(today()),
    }
}

/// Greeting for the hour of the day, as shown on the dashboard.
pub fn greeting(hour: u32) -> &'static str {
    match hour {
        0..=10 => "Selamat Pagi",
        11..=14 => "Selamat Siang",
        15..=17 => "Selamat Sore",
        _ => "Selamat Malam",
    }
}
