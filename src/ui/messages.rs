//! User-facing status lines.

use ansi_term::{Colour, Style};
use std::fmt;

const ICON_INFO: &str = "ℹ️";
const ICON_OK: &str = "✅";
const ICON_WARN: &str = "⚠️";
const ICON_ERR: &str = "❌";

/// Colours are dropped when `NO_COLOR` is set.
fn paint(style: Style, s: &str) -> String {
    if std::env::var_os("NO_COLOR").is_some() {
        s.to_string()
    } else {
        style.paint(s).to_string()
    }
}

pub fn info<T: fmt::Display>(msg: T) {
    println!("{} {}", paint(Colour::Blue.bold(), ICON_INFO), msg);
}

pub fn success<T: fmt::Display>(msg: T) {
    println!("{} {}", paint(Colour::Green.bold(), ICON_OK), msg);
}

pub fn warning<T: fmt::Display>(msg: T) {
    println!("{} {}", paint(Colour::Yellow.bold(), ICON_WARN), msg);
}

pub fn error<T: fmt::Display>(msg: T) {
    eprintln!("{} {}", paint(Colour::Red.bold(), ICON_ERR), msg);
}

/// Formatted section header
pub fn header<T: fmt::Display>(msg: T) {
    println!(
        "{}",
        paint(Colour::Blue.bold(), &format!("====================== {msg}"))
    );
}

/// Green or amber badge, e.g. `Sudah Absen` / `Belum Absen`.
pub fn badge(label: &str, ok: bool) -> String {
    let colour = if ok { Colour::Green } else { Colour::Yellow };
    paint(colour.bold(), &format!("[{label}]"))
}
