//! Learner record types.
//!
//! This module contains the core types of an ILR submission: the learner,
//! their learning deliveries (one per aim/course), the funding-and-monitoring
//! tags attached to each delivery, and the learner's employment-status
//! history. All of these are constructed once per validation run and
//! traversed read-only by rules.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One provider's ILR return: the unit a validation run operates on.
///
/// # Example
///
/// ```rust
/// use ilr_core::{Submission, Learner};
///
/// let submission = Submission {
///     ukprn: 10001234,
///     learners: vec![Learner {
///         learn_ref_number: "LRN001".to_string(),
///         date_of_birth: None,
///         prior_attain: None,
///         learning_deliveries: vec![],
///         employment_statuses: vec![],
///     }],
/// };
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Submission {
    /// UK Provider Reference Number of the submitting organisation
    pub ukprn: i64,

    /// Learners included in the return
    pub learners: Vec<Learner>,
}

/// A single learner and everything validated about them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Learner {
    /// Provider-assigned learner reference number
    pub learn_ref_number: String,

    /// Date of birth, where collected
    pub date_of_birth: Option<NaiveDate>,

    /// Prior attainment code (highest qualification level on entry)
    pub prior_attain: Option<i32>,

    /// One record per aim the learner is enrolled on
    #[serde(default)]
    pub learning_deliveries: Vec<LearningDelivery>,

    /// Employment-status history, most recent record governs a delivery
    #[serde(default)]
    pub employment_statuses: Vec<LearnerEmploymentStatus>,
}

/// One aim/course a learner is enrolled on.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LearningDelivery {
    /// Qualification reference into the LARS reference data
    pub learn_aim_ref: String,

    /// Aim type code
    pub aim_type: i32,

    /// Sequence number of this delivery within the learner's record
    pub aim_seq_number: i32,

    /// Funding model code identifying which funding stream pays for the aim
    pub fund_model: i32,

    /// Programme type code (e.g. apprenticeship variants), where applicable
    pub prog_type: Option<i32>,

    /// Learning start date
    pub learn_start_date: NaiveDate,

    /// Actual end date, once the aim has finished
    pub learn_actual_end_date: Option<NaiveDate>,

    /// Funding and monitoring tags attached to this delivery
    #[serde(default)]
    pub fams: Vec<LearningDeliveryFam>,
}

/// A Funding and Monitoring ("FAM") tag on a learning delivery.
///
/// Type+code lookups are exact-match; type-only lookups check presence of
/// the type regardless of code. Multiple tags of the same type can attach
/// to one delivery for the repeatable types.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LearningDeliveryFam {
    /// FAM type, e.g. `"SOF"`, `"LDM"`
    pub fam_type: String,

    /// FAM code, e.g. `"105"`, `"376"`
    pub fam_code: String,
}

impl LearningDeliveryFam {
    /// Creates a FAM tag from a type and code pair.
    pub fn new(fam_type: impl Into<String>, fam_code: impl Into<String>) -> Self {
        Self {
            fam_type: fam_type.into(),
            fam_code: fam_code.into(),
        }
    }
}

/// A point-in-time employment status record for a learner.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LearnerEmploymentStatus {
    /// Employment status code
    pub emp_stat: i32,

    /// Date the status applies from
    pub date_emp_stat_app: NaiveDate,

    /// Monitoring codes attached to the status (benefit indicators etc.)
    #[serde(default)]
    pub monitorings: Vec<EmploymentStatusMonitoring>,
}

/// A monitoring code on an employment status record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmploymentStatusMonitoring {
    /// Monitoring type, e.g. `"BSI"`
    pub esm_type: String,

    /// Monitoring code
    pub esm_code: i32,
}

impl Learner {
    /// Returns the employment status in effect at `date`: the latest record
    /// dated on or before it.
    pub fn employment_status_on(&self, date: NaiveDate) -> Option<&LearnerEmploymentStatus> {
        self.employment_statuses
            .iter()
            .filter(|status| status.date_emp_stat_app <= date)
            .max_by_key(|status| status.date_emp_stat_app)
    }
}
