use crate::cli::commands::{summary as summary_cmd, tidy as tidy_cmd};
use crate::config::Config;
use crate::core::pipeline::Pipeline;
use crate::core::summary as stats;
use crate::errors::AppResult;
use crate::ui::messages::{header, info};
use std::path::Path;

/// Full notebook-style report: the tidy table followed by the overall and
/// per-event statistics blocks.
pub fn handle(cfg: &Config) -> AppResult<()> {
    let analysis = Pipeline::run(Path::new(&cfg.input_file), cfg)?;

    info(format!(
        "Timesheet: {} ({} days)",
        cfg.input_file,
        analysis.days.len()
    ));
    println!();

    header("Day records");
    tidy_cmd::print_tidy_table(&analysis.tidy);

    let grouped = stats::summarize_by_category(&analysis.tidy);

    header("Overall statistics");
    summary_cmd::print_overall(&grouped.overall);
    println!();

    header("Statistics by event");
    summary_cmd::print_by_category(&grouped);

    Ok(())
}
