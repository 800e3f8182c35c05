use crate::config::Config;
use crate::core::pipeline::Pipeline;
use crate::errors::AppResult;
use crate::models::tidy_record::TidyDayRecord;
use crate::utils::table::{Column, Table};
use crate::utils::time::format_minutes;
use std::path::Path;

pub fn handle(cfg: &Config) -> AppResult<()> {
    let analysis = Pipeline::run(Path::new(&cfg.input_file), cfg)?;
    print_tidy_table(&analysis.tidy);
    Ok(())
}

/// One line per day: scalars plus the names of the categories whose
/// indicator is set. The full boolean matrix is the export's job; the
/// terminal view lists only the active flags.
pub(crate) fn print_tidy_table(records: &[TidyDayRecord]) {
    let mut table = Table::new(vec![
        Column::right("Id"),
        Column::left("Date"),
        Column::right("In"),
        Column::right("Out"),
        Column::right("Office"),
        Column::left("Events"),
    ]);

    for rec in records {
        let events: Vec<&str> = rec.flags.active().map(|c| c.token()).collect();
        table.add_row(vec![
            rec.id.to_string(),
            rec.date_str(),
            clock_cell(rec.clock_in),
            clock_cell(rec.clock_out),
            rec.office_minutes()
                .map(format_minutes)
                .unwrap_or_else(|| "-".to_string()),
            events.join(", "),
        ]);
    }

    println!("{}", table.render());
}

fn clock_cell(t: Option<chrono::NaiveTime>) -> String {
    t.map(|t| t.format("%H:%M").to_string())
        .unwrap_or_else(|| "-".to_string())
}
