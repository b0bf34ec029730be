use crate::cli::commands::parse_month_arg;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::export::ExportLogic;
use crate::store::{csv_store, log::ttlog};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Export {
        format,
        file,
        month,
        force,
    } = cmd
    {
        let rows = csv_store::load(&cfg.data_path())?;
        let month = parse_month_arg(month)?;

        let n = ExportLogic::export(&rows, *format, file, month, *force)?;

        if n > 0 {
            ttlog(
                &cfg.log_path(),
                "export",
                file,
                &format!("{} row(s) exported as {}", n, format.as_str()),
            )?;
        }
    }
    Ok(())
}
