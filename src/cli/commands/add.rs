use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::add::AddLogic;
use crate::errors::{AppError, AppResult};
use crate::models::moment::Moment;
use crate::models::observation::Observation;
use crate::models::score::Score;
use crate::utils::date;

/// Record a new observation.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Add {
        date: date_arg,
        moment,
        fatigue,
        pain,
        nausea,
        headache,
        reflux,
        sleep,
        mood,
        contractions,
        notes,
    } = cmd
    {
        //
        // 1. Date (default = today)
        //
        let d = match date_arg {
            Some(s) => date::parse_date(s).ok_or_else(|| AppError::InvalidDate(s.to_string()))?,
            None => date::today(),
        };

        //
        // 2. Moment (default from config)
        //
        let m = match moment {
            Some(m) => *m,
            None => Moment::from_code(&cfg.default_moment)
                .ok_or_else(|| AppError::InvalidMoment(cfg.default_moment.clone()))?,
        };

        //
        // 3. Remarks: blank means none
        //
        let notes = notes
            .as_ref()
            .map(|n| n.trim().to_string())
            .filter(|n| !n.is_empty());

        let obs = Observation {
            date: d,
            moment: m,
            fatigue: Score::new(*fatigue)?,
            pain: Score::new(*pain)?,
            nausea: Score::new(*nausea)?,
            headache: Score::new(*headache)?,
            reflux: Score::new(*reflux)?,
            sleep: Score::new(*sleep)?,
            mood: Score::new(*mood)?,
            contractions: *contractions,
            notes,
        };

        AddLogic::apply(cfg, obs)?;
    }

    Ok(())
}
