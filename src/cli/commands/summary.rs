use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::pipeline::Pipeline;
use crate::core::summary as stats;
use crate::errors::AppResult;
use crate::models::time_summary::{CategorySummary, DurationSummary, GroupedSummary, TimeSummary};
use crate::utils::colors::{CYAN, GREY, RESET};
use crate::utils::formatting::mins_pretty;
use crate::utils::table::{Column, Table};
use crate::utils::time::format_time;
use std::path::Path;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Summary { by_event } = cmd {
        let analysis = Pipeline::run(Path::new(&cfg.input_file), cfg)?;

        if *by_event {
            print_by_category(&stats::summarize_by_category(&analysis.tidy));
        } else {
            print_overall(&stats::summarize_records(&analysis.tidy));
        }
    }
    Ok(())
}

pub(crate) fn print_overall(summary: &CategorySummary) {
    println!("{}• Days:{} {}", CYAN, RESET, summary.days);
    print_time_line("Clock in", &summary.clock_in);
    print_time_line("Clock out", &summary.clock_out);
    print_office_line(&summary.office);
}

fn print_time_line(label: &str, summary: &Option<TimeSummary>) {
    match summary {
        Some(s) => println!(
            "{}• {}:{} count {} | min {} | max {} | median {} | mode {} | mean {}",
            CYAN,
            label,
            RESET,
            s.count,
            format_time(s.min),
            format_time(s.max),
            format_time(s.median),
            format_time(s.mode),
            format_time(s.mean)
        ),
        None => println!("{}• {}: no data{}", GREY, label, RESET),
    }
}

fn print_office_line(summary: &Option<DurationSummary>) {
    match summary {
        Some(s) => println!(
            "{}• Office hours:{} count {} | min {} | max {} | median {} | mean {}",
            CYAN,
            RESET,
            s.count,
            mins_pretty(s.min, false),
            mins_pretty(s.max, false),
            mins_pretty(s.median, false),
            mins_pretty(s.mean, false)
        ),
        None => println!("{}• Office hours: no data{}", GREY, RESET),
    }
}

pub(crate) fn print_by_category(grouped: &GroupedSummary) {
    let mut table = Table::new(vec![
        Column::left("Event"),
        Column::right("Days"),
        Column::right("In median"),
        Column::right("In mean"),
        Column::right("Out median"),
        Column::right("Out mean"),
        Column::right("Office mean"),
    ]);

    table.add_row(category_row("(overall)", &grouped.overall));
    for (cat, summary) in &grouped.per_category {
        table.add_row(category_row(cat.token(), summary));
    }

    println!("{}", table.render());
}

fn category_row(label: &str, s: &CategorySummary) -> Vec<String> {
    let time_cell = |t: &Option<TimeSummary>, pick: fn(&TimeSummary) -> chrono::NaiveTime| {
        t.as_ref()
            .map(|s| format_time(pick(s)))
            .unwrap_or_else(|| "-".to_string())
    };

    vec![
        label.to_string(),
        s.days.to_string(),
        time_cell(&s.clock_in, |s| s.median),
        time_cell(&s.clock_in, |s| s.mean),
        time_cell(&s.clock_out, |s| s.median),
        time_cell(&s.clock_out, |s| s.mean),
        s.office
            .as_ref()
            .map(|o| mins_pretty(o.mean, false))
            .unwrap_or_else(|| "-".to_string()),
    ]
}
