use crate::errors::AppResult;
use crate::storage::log::load_log;
use ansi_term::Colour;
use regex::Regex;
use rusqlite::Connection;
use std::sync::OnceLock;

const MAX_OP_WIDTH: usize = 48;

fn strip_ansi(s: &str) -> String {
    static ANSI: OnceLock<Regex> = OnceLock::new();
    let re = ANSI.get_or_init(|| Regex::new(r"\x1B\[[0-9;]*[mK]").expect("static regex"));
    re.replace_all(s, "").into_owned()
}

/// Colour of an audit operation.
fn color_for_operation(op: &str) -> Colour {
    match op {
        "append" => Colour::Green,
        "trim" => Colour::Yellow,
        "reset" => Colour::Red,
        "login" | "logout" => Colour::Cyan,
        "endpoint" => Colour::Purple,
        "export" => Colour::Blue,
        "init" => Colour::RGB(255, 153, 51),
        _ => Colour::White,
    }
}

pub struct LogLogic;

impl LogLogic {
    pub fn print_log(conn: &Connection) -> AppResult<()> {
        let entries: Vec<_> = load_log(conn)?
            .into_iter()
            .map(|(id, date, op, target, msg)| {
                let date = chrono::DateTime::parse_from_rfc3339(&date)
                    .map(|dt| dt.format("%FT%T%:z").to_string())
                    .unwrap_or(date);
                (id, date, op, target, msg)
            })
            .collect();

        if entries.is_empty() {
            println!("📜 Internal log is empty.");
            return Ok(());
        }

        let id_w = entries
            .iter()
            .map(|(id, ..)| id.to_string().len())
            .max()
            .unwrap_or(1);
        let date_w = entries.iter().map(|(_, d, ..)| d.len()).max().unwrap_or(10);

        println!("📜 Internal log:\n");

        for (id, date, operation, target, message) in entries {
            let plain = if target.is_empty() {
                operation.clone()
            } else {
                format!("{operation} ({target})")
            };
            let plain = if plain.chars().count() > MAX_OP_WIDTH {
                let mut s: String = plain.chars().take(MAX_OP_WIDTH - 3).collect();
                s.push_str("...");
                s
            } else {
                plain
            };

            // only the operation word is coloured
            let colour = color_for_operation(&operation);
            let coloured = match plain.split_once(' ') {
                Some((op, rest)) => format!("{} {rest}", colour.paint(op)),
                None => colour.paint(plain.as_str()).to_string(),
            };
            let padding = " ".repeat(MAX_OP_WIDTH.saturating_sub(strip_ansi(&coloured).chars().count()));

            println!("{id:>id_w$}: {date:<date_w$} | {coloured}{padding} => {message}");
        }

        Ok(())
    }
}
