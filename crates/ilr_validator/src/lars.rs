//! LARS reference data lookups.
//!
//! An in-memory index over the Learning Aims Reference Service records,
//! keyed by aim reference. Rules consume it through the [`LarsLookups`]
//! trait so tests can substitute counting doubles.

use std::collections::HashMap;

use chrono::NaiveDate;

use ilr_core::{LarsLearningDelivery, ReferenceDataError, Result};

/// Read-only LARS queries a rule can depend on.
pub trait LarsLookups: Send + Sync {
    /// True when the aim's notional NVQ level is one of `levels`.
    fn notional_level_in(&self, learn_aim_ref: &str, levels: &[&str]) -> bool;

    /// True when the aim holds the category, effective at `date`.
    fn has_category_on(&self, learn_aim_ref: &str, category_ref: i32, date: NaiveDate) -> bool;

    /// True when the aim's basic-skills type at `date` is one of `types`.
    fn is_basic_skills_on(&self, learn_aim_ref: &str, types: &[i32], date: NaiveDate) -> bool;

    /// The aim's full-level-2 percentage effective at `date`, if recorded.
    fn full_level_2_percent_on(&self, learn_aim_ref: &str, date: NaiveDate) -> Option<f64>;
}

/// In-memory [`LarsLookups`] backed by a reference pack.
#[derive(Debug)]
pub struct LarsDataService {
    by_aim_ref: HashMap<String, LarsLearningDelivery>,
}

impl LarsDataService {
    /// Indexes the records by aim reference.
    ///
    /// Fails when two records claim the same aim reference: a pack that
    /// ambiguous cannot back a run.
    pub fn new(records: Vec<LarsLearningDelivery>) -> Result<Self> {
        let mut by_aim_ref = HashMap::with_capacity(records.len());
        for record in records {
            let key = record.learn_aim_ref.clone();
            if by_aim_ref.insert(key.clone(), record).is_some() {
                return Err(ReferenceDataError::DuplicateAimRef(key));
            }
        }
        Ok(Self { by_aim_ref })
    }

    /// The record for an aim reference, where one exists.
    pub fn get(&self, learn_aim_ref: &str) -> Option<&LarsLearningDelivery> {
        self.by_aim_ref.get(learn_aim_ref)
    }
}

fn in_window(date: NaiveDate, from: NaiveDate, to: Option<NaiveDate>) -> bool {
    date >= from && to.is_none_or(|end| date <= end)
}

impl LarsLookups for LarsDataService {
    fn notional_level_in(&self, learn_aim_ref: &str, levels: &[&str]) -> bool {
        self.get(learn_aim_ref)
            .and_then(|record| record.notional_nvq_level.as_deref())
            .is_some_and(|level| levels.contains(&level))
    }

    fn has_category_on(&self, learn_aim_ref: &str, category_ref: i32, date: NaiveDate) -> bool {
        self.get(learn_aim_ref).is_some_and(|record| {
            record.categories.iter().any(|category| {
                category.category_ref == category_ref
                    && in_window(date, category.effective_from, category.effective_to)
            })
        })
    }

    fn is_basic_skills_on(&self, learn_aim_ref: &str, types: &[i32], date: NaiveDate) -> bool {
        self.get(learn_aim_ref).is_some_and(|record| {
            record.annual_values.iter().any(|value| {
                value
                    .basic_skills_type
                    .is_some_and(|skills_type| types.contains(&skills_type))
                    && in_window(date, value.effective_from, value.effective_to)
            })
        })
    }

    fn full_level_2_percent_on(&self, learn_aim_ref: &str, date: NaiveDate) -> Option<f64> {
        self.get(learn_aim_ref).and_then(|record| {
            record
                .annual_values
                .iter()
                .filter(|value| in_window(date, value.effective_from, value.effective_to))
                .find_map(|value| value.full_level_2_percent)
        })
    }
}
