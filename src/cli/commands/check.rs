use crate::config::Config;
use crate::core::pipeline::Pipeline;
use crate::errors::AppResult;
use crate::ui::messages::{info, success, warning};
use crate::utils::colors::{CYAN, RESET};
use crate::utils::date::iso;
use std::path::Path;

/// Parse and validate only: row counts, date range, and any tokens that
/// match no known category. Unknown tokens are reported, never fatal.
pub fn handle(cfg: &Config) -> AppResult<()> {
    let analysis = Pipeline::run(Path::new(&cfg.input_file), cfg)?;

    success(format!(
        "{} day records parsed from {}",
        analysis.days.len(),
        cfg.input_file
    ));

    let first = analysis.days.iter().map(|d| d.date).min();
    let last = analysis.days.iter().map(|d| d.date).max();
    if let (Some(first), Some(last)) = (first, last) {
        println!("{}• Date range:{}", CYAN, RESET);
        println!("    from: {}", iso(first));
        println!("    to:   {}", iso(last));
    }

    println!(
        "{}• Event tokens:{} {}",
        CYAN,
        RESET,
        analysis.exploded.len()
    );

    let unknown = analysis.unknown_tokens();
    if unknown.is_empty() {
        info("All event tokens match known categories");
    } else {
        warning(format!(
            "{} unknown event token(s): {}",
            unknown.len(),
            unknown.join(", ")
        ));
    }

    Ok(())
}
