use crate::config::Config;
use crate::core::pipeline::Pipeline;
use crate::errors::AppResult;
use crate::models::event_category::EventCategory;
use crate::utils::table::{Column, Table};
use std::collections::BTreeMap;
use std::path::Path;

/// Long per-(day, token) listing, the shape used for per-event plotting.
pub fn handle(cfg: &Config) -> AppResult<()> {
    let analysis = Pipeline::run(Path::new(&cfg.input_file), cfg)?;

    let date_by_id: BTreeMap<u32, String> = analysis
        .days
        .iter()
        .map(|d| (d.id, d.date_str()))
        .collect();

    let mut table = Table::new(vec![
        Column::right("Id"),
        Column::left("Date"),
        Column::left("Event"),
        Column::left("Indicator"),
    ]);

    for row in &analysis.exploded {
        let indicator = match EventCategory::from_token(&row.event_token) {
            Some(cat) => cat.column(),
            None => "(none)".to_string(),
        };
        table.add_row(vec![
            row.id.to_string(),
            date_by_id.get(&row.id).cloned().unwrap_or_default(),
            row.event_token.clone(),
            indicator,
        ]);
    }

    println!("{}", table.render());
    Ok(())
}
