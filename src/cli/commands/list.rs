use crate::cli::commands::parse_month_arg;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::filter::{filter_by_month, resolve_month};
use crate::errors::AppResult;
use crate::models::observation::Observation;
use crate::store::csv_store;
use crate::ui::messages::{header, info};
use crate::utils::colors::colorize_optional;
use crate::utils::formatting::truncate;
use crate::utils::table::{Column, Table};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::List { month } = cmd {
        let rows = csv_store::load(&cfg.data_path())?;
        let requested = parse_month_arg(month)?;

        let Some(m) = resolve_month(&rows, requested) else {
            info("No data available to filter.");
            return Ok(());
        };

        let filtered = filter_by_month(&rows, m);

        header(format!("Observations for {}", m));

        if filtered.is_empty() {
            info(format!("No observations for {}.", m));
            return Ok(());
        }

        print!("{}", build_table(&filtered).render());
        println!("\n{} observation(s)", filtered.len());
    }

    Ok(())
}

fn build_table(rows: &[Observation]) -> Table {
    let mut table = Table::new(vec![
        Column::new("Date", 10),
        Column::new("Moment", 7),
        Column::new("Fat", 3),
        Column::new("Pain", 3),
        Column::new("Naus", 3),
        Column::new("Head", 3),
        Column::new("Refl", 3),
        Column::new("Sleep", 3),
        Column::new("Mood", 3),
        Column::new("Contr.", 7),
        Column::new("Notes", 30),
    ]);

    for o in rows {
        let notes = truncate(o.notes.as_deref().unwrap_or(""), 30);
        table.add_row(vec![
            o.date_str(),
            o.moment.label().to_string(),
            o.fatigue.to_string(),
            o.pain.to_string(),
            o.nausea.to_string(),
            o.headache.to_string(),
            o.reflux.to_string(),
            o.sleep.to_string(),
            o.mood.to_string(),
            o.contractions.label().to_string(),
            colorize_optional(&notes),
        ]);
    }

    table
}
