use crate::config::Config;
use crate::errors::AppResult;
use crate::store::log::read_log;
use crate::ui::messages::info;
use ansi_term::Colour;
use regex::Regex;
use unicode_width::UnicodeWidthStr;

fn strip_ansi(s: &str) -> String {
    match Regex::new(r"\x1B\[[0-9;]*[mK]") {
        Ok(re) => re.replace_all(s, "").into_owned(),
        Err(_) => s.to_string(),
    }
}

/// Colour per operation
fn color_for_operation(op: &str) -> Colour {
    match op {
        "add" => Colour::Green,
        "export" => Colour::Cyan,
        "backup" => Colour::Blue,
        "init" => Colour::RGB(179, 43, 105), // brand pink
        _ => Colour::White,
    }
}

pub struct LogLogic;

impl LogLogic {
    pub fn print_log(cfg: &Config) -> AppResult<()> {
        let entries = read_log(&cfg.log_path())?;

        if entries.is_empty() {
            info("The audit log is empty.");
            return Ok(());
        }

        let rows: Vec<(String, String, String)> = entries
            .into_iter()
            .map(|e| {
                let date = chrono::DateTime::parse_from_rfc3339(&e.date)
                    .map(|dt| dt.format("%FT%T%:z").to_string())
                    .unwrap_or(e.date);

                let op_target = if e.target.is_empty() {
                    e.operation.clone()
                } else {
                    format!("{} ({})", e.operation, e.target)
                };

                let painted = color_for_operation(&e.operation)
                    .paint(op_target)
                    .to_string();

                (date, painted, e.message)
            })
            .collect();

        // widest op+target, capped to 60
        let op_w = rows
            .iter()
            .map(|(_, op, _)| UnicodeWidthStr::width(strip_ansi(op).as_str()))
            .max()
            .unwrap_or(0)
            .min(60);

        for (i, (date, op, message)) in rows.iter().enumerate() {
            let visible = UnicodeWidthStr::width(strip_ansi(op).as_str());
            let pad = " ".repeat(op_w.saturating_sub(visible));
            println!("{:>3}: {} | {}{} | {}", i + 1, date, op, pad, message);
        }

        Ok(())
    }
}
