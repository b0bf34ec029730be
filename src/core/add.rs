use crate::config::Config;
use crate::core::summary::{advise, wellness};
use crate::errors::AppResult;
use crate::models::observation::Observation;
use crate::store::{csv_store, log::ttlog};
use crate::ui::messages::{advisory, success};

/// High-level business logic for the `add` command.
pub struct AddLogic;

impl AddLogic {
    /// Append one observation to the table and report the resulting advice.
    /// Returns the number of rows now stored.
    pub fn apply(cfg: &Config, obs: Observation) -> AppResult<usize> {
        let date_str = obs.date_str();
        let moment = obs.moment.label();
        let score = wellness(&obs);
        let advice = advise(&obs);

        let rows = csv_store::append(&cfg.data_path(), obs)?;

        ttlog(
            &cfg.log_path(),
            "add",
            &date_str,
            &format!("{} observation saved (wellness {:.1})", moment, score),
        )?;

        success(format!(
            "Observation saved for {} ({}). Wellness index: {:.1}/10",
            date_str, moment, score
        ));
        advisory(&advice);

        Ok(rows.len())
    }
}
