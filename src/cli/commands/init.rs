use crate::cli::parser::Cli;
use crate::config::Config;
use crate::errors::AppResult;
use crate::store::{csv_store, log::ttlog};
use crate::ui::messages::{info, success};

/// Handle the `init` command
///
/// This initializes:
///  - the config directory (if missing)
///  - the configuration file (skipped in test mode)
///  - an empty data file carrying the column header
pub fn handle(cli: &Cli) -> AppResult<()> {
    let cfg = Config::init_all(cli.data.as_deref(), cli.test)?;
    let data = cfg.data_path();

    println!("⚙️  Initializing pregtrack…");
    if !cli.test {
        println!("📄 Config file : {}", Config::config_file().display());
    }
    println!("🗂️  Data file   : {}", data.display());

    if csv_store::init_file(&data)? {
        ttlog(&cfg.log_path(), "init", &data.to_string_lossy(), "Data file created")?;
        success(format!("Data file initialized at {}", data.display()));
    } else {
        info(format!("Data file already present at {}", data.display()));
    }

    Ok(())
}
