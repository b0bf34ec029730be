use crate::config::Config;
use crate::core::summary::{advise, summarize};
use crate::errors::AppResult;
use crate::store::csv_store;
use crate::ui::messages::{advisory, header, info};
use crate::utils::colors::{RESET, color_for_severity, color_for_wellness};
use crate::utils::formatting::score_str;

/// Show the latest observation: key scores, wellness index and advice.
pub fn handle(cfg: &Config) -> AppResult<()> {
    let rows = csv_store::load(&cfg.data_path())?;

    let Some(last) = rows.last() else {
        info("No observations recorded yet. Add one with `pregtrack add`.");
        return Ok(());
    };

    let s = summarize(last);

    header(format!("Summary for {} ({})", last.date_str(), last.moment.label()));

    for (label, value) in [
        ("Fatigue", s.fatigue),
        ("Pain", s.pain),
        ("Nausea", s.nausea),
    ] {
        println!(
            "{:<10} {}{}{}",
            label,
            color_for_severity(value),
            score_str(value),
            RESET
        );
    }

    println!(
        "\nWellness index: {}{:.1}/10{}\n",
        color_for_wellness(s.wellness),
        s.wellness,
        RESET
    );

    advisory(&advise(last));

    Ok(())
}
