use crate::config::Config;
use crate::core::filter::available_months;
use crate::errors::AppResult;
use crate::store::csv_store;
use crate::ui::messages::info;

pub fn handle(cfg: &Config) -> AppResult<()> {
    let rows = csv_store::load(&cfg.data_path())?;
    let months = available_months(&rows);

    if months.is_empty() {
        info("No data available to filter.");
        return Ok(());
    }

    println!("📅 Available months:");
    let last = months.len() - 1;
    for (i, m) in months.iter().enumerate() {
        let count = rows.iter().filter(|o| m.contains(&o.date)).count();
        let marker = if i == last { " (default)" } else { "" };
        println!("  {}  {:>3} observation(s){}", m, count, marker);
    }

    Ok(())
}
