use crate::cli::commands::parse_month_arg;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::chart;
use crate::core::filter::{chart_series, filter_by_month, resolve_month};
use crate::errors::AppResult;
use crate::store::csv_store;
use crate::ui::messages::info;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Chart { month } = cmd {
        let rows = csv_store::load(&cfg.data_path())?;

        let Some(m) = resolve_month(&rows, parse_month_arg(month)?) else {
            info("No data available to chart.");
            return Ok(());
        };

        let series = chart_series(&filter_by_month(&rows, m));
        print!("{}", chart::render(m, &series, cfg.chart_width, true));
    }

    Ok(())
}
