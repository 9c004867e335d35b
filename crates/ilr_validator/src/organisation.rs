//! Organisation reference data lookups.

use std::collections::HashMap;

use chrono::NaiveDate;

use ilr_core::{Organisation, ReferenceDataError, Result};

/// Read-only organisation queries a rule can depend on.
pub trait OrganisationLookups: Send + Sync {
    /// True when the provider's legal organisation type is one of `types`.
    fn legal_org_type_matches(&self, ukprn: i64, types: &[&str]) -> bool;

    /// True when the provider has any short-term funding initiative in
    /// effect at `date`.
    fn has_short_term_funding_initiative_on(&self, ukprn: i64, date: NaiveDate) -> bool;
}

/// In-memory [`OrganisationLookups`] backed by a reference pack.
#[derive(Debug)]
pub struct OrganisationDataService {
    by_ukprn: HashMap<i64, Organisation>,
}

impl OrganisationDataService {
    /// Indexes the records by UKPRN, rejecting duplicates.
    pub fn new(records: Vec<Organisation>) -> Result<Self> {
        let mut by_ukprn = HashMap::with_capacity(records.len());
        for record in records {
            let key = record.ukprn;
            if by_ukprn.insert(key, record).is_some() {
                return Err(ReferenceDataError::DuplicateUkprn(key));
            }
        }
        Ok(Self { by_ukprn })
    }

    /// The record for a UKPRN, where one exists.
    pub fn get(&self, ukprn: i64) -> Option<&Organisation> {
        self.by_ukprn.get(&ukprn)
    }
}

impl OrganisationLookups for OrganisationDataService {
    fn legal_org_type_matches(&self, ukprn: i64, types: &[&str]) -> bool {
        self.get(ukprn)
            .is_some_and(|org| types.contains(&org.legal_org_type.as_str()))
    }

    fn has_short_term_funding_initiative_on(&self, ukprn: i64, date: NaiveDate) -> bool {
        self.get(ukprn).is_some_and(|org| {
            org.short_term_funding_initiatives.iter().any(|initiative| {
                date >= initiative.effective_from
                    && initiative.effective_to.is_none_or(|end| date <= end)
            })
        })
    }
}
