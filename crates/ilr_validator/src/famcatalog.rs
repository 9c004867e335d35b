//! FAM type/code catalog lookups.
//!
//! Answers whether a funding-and-monitoring type/code combination is a
//! valid return at a given date, from the reference pack's entries.

use std::collections::HashMap;

use chrono::NaiveDate;

use ilr_core::{FamCodeEntry, ReferenceDataError, Result};

/// In-memory index of the valid FAM type/code combinations.
#[derive(Debug)]
pub struct FamCodeCatalog {
    entries: HashMap<(String, String), FamCodeEntry>,
}

impl FamCodeCatalog {
    /// Indexes the entries by type and code, rejecting duplicates.
    pub fn new(entries: Vec<FamCodeEntry>) -> Result<Self> {
        let mut indexed = HashMap::with_capacity(entries.len());
        for entry in entries {
            let key = (entry.fam_type.clone(), entry.fam_code.clone());
            if indexed.contains_key(&key) {
                return Err(ReferenceDataError::DuplicateFamCode {
                    fam_type: key.0,
                    fam_code: key.1,
                });
            }
            indexed.insert(key, entry);
        }
        Ok(Self { entries: indexed })
    }

    /// True when the type/code combination is a valid return at `date`.
    pub fn is_valid_on(&self, fam_type: &str, fam_code: &str, date: NaiveDate) -> bool {
        self.entries
            .get(&(fam_type.to_string(), fam_code.to_string()))
            .is_some_and(|entry| {
                date >= entry.valid_from && entry.valid_to.is_none_or(|end| date <= end)
            })
    }
}
