use crate::config::Config;
use crate::core::{expand, loader, normalizer};
use crate::core::expand::ExplodedRow;
use crate::errors::{AppError, AppResult};
use crate::models::day_record::DayRecord;
use crate::models::event_category::EventCategory;
use crate::models::tidy_record::TidyDayRecord;
use std::collections::BTreeSet;
use std::path::Path;

/// Everything downstream consumers need: the normalized day records, the
/// long per-(day, token) form, and the collapsed tidy table.
#[derive(Debug)]
pub struct Analysis {
    pub days: Vec<DayRecord>,
    pub exploded: Vec<ExplodedRow>,
    pub tidy: Vec<TidyDayRecord>,
}

impl Analysis {
    /// Distinct tokens that matched no known category, in sorted order.
    /// These silently contribute to no indicator; `check` surfaces them.
    pub fn unknown_tokens(&self) -> Vec<String> {
        let mut unknown = BTreeSet::new();
        for row in &self.exploded {
            if EventCategory::from_token(&row.event_token).is_none() {
                unknown.insert(row.event_token.clone());
            }
        }
        unknown.into_iter().collect()
    }
}

pub struct Pipeline;

impl Pipeline {
    /// Run the whole load → normalize → explode/collapse pipeline on one
    /// input file. Fails outright on the first error; never yields a
    /// partial result.
    pub fn run(path: &Path, cfg: &Config) -> AppResult<Analysis> {
        let raw = loader::load_records(path)?;
        if raw.is_empty() {
            return Err(AppError::EmptyDataset);
        }

        let days = normalizer::normalize(&raw, &cfg.date_format)?;
        let exploded = expand::explode(&days);
        let tidy = expand::collapse(&exploded, &days)?;

        Ok(Analysis {
            days,
            exploded,
            tidy,
        })
    }
}
