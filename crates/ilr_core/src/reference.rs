//! Reference data entities.
//!
//! Externally supplied, read-only lookup tables consumed by rules via the
//! query services in `ilr_validator`: LARS qualification metadata keyed by
//! aim reference, organisation details keyed by UKPRN, the valid FAM
//! type/code catalog, and the academic-year boundary for the return being
//! validated. Nothing in here is mutated by a validation run.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// The full reference pack loaded once per validation run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReferenceData {
    /// LARS learning delivery records, one per aim reference
    pub lars: Vec<LarsLearningDelivery>,

    /// Organisation records, one per UKPRN
    pub organisations: Vec<Organisation>,

    /// Valid FAM type/code combinations
    pub fam_codes: Vec<FamCodeEntry>,

    /// First day of the academic year under validation (1 August)
    pub academic_year_start: NaiveDate,
}

/// LARS metadata for a single qualification aim.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LarsLearningDelivery {
    /// Aim reference this record describes
    pub learn_aim_ref: String,

    /// Notional NVQ level, e.g. `"2"`, `"3"`, `"H"`
    pub notional_nvq_level: Option<String>,

    /// Category memberships with their effective windows
    #[serde(default)]
    pub categories: Vec<LarsCategory>,

    /// Year-by-year attributes (basic skills, full-level percentages)
    #[serde(default)]
    pub annual_values: Vec<LarsAnnualValue>,
}

/// A LARS category membership, effective over a date window.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LarsCategory {
    /// Category reference code
    pub category_ref: i32,

    /// First date the membership applies
    pub effective_from: NaiveDate,

    /// Last date the membership applies, open-ended when absent
    pub effective_to: Option<NaiveDate>,
}

/// A LARS annual value record, effective over a date window.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LarsAnnualValue {
    /// Basic skills classification code, where the aim is a basic skills aim
    pub basic_skills_type: Option<i32>,

    /// Percentage contribution towards a full level 2 qualification
    pub full_level_2_percent: Option<f64>,

    /// Percentage contribution towards a full level 3 qualification
    pub full_level_3_percent: Option<f64>,

    /// First date the record applies
    pub effective_from: NaiveDate,

    /// Last date the record applies, open-ended when absent
    pub effective_to: Option<NaiveDate>,
}

/// Organisation reference record for a training provider.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Organisation {
    /// UK Provider Reference Number
    pub ukprn: i64,

    /// Legal organisation type code
    pub legal_org_type: String,

    /// Short-term funding initiatives the provider participates in
    #[serde(default)]
    pub short_term_funding_initiatives: Vec<ShortTermFundingInitiative>,
}

/// A short-term funding initiative membership, effective over a date window.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShortTermFundingInitiative {
    /// Initiative code
    pub code: String,

    /// First date the membership applies
    pub effective_from: NaiveDate,

    /// Last date the membership applies, open-ended when absent
    pub effective_to: Option<NaiveDate>,
}

/// A valid FAM type/code combination with its validity window.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FamCodeEntry {
    /// FAM type, e.g. `"SOF"`
    pub fam_type: String,

    /// FAM code, e.g. `"105"`
    pub fam_code: String,

    /// First date the combination is a valid return
    pub valid_from: NaiveDate,

    /// Last date the combination is a valid return, open-ended when absent
    pub valid_to: Option<NaiveDate>,
}
