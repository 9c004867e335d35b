//! Error types for reference data handling.
//!
//! Rule violations are not errors; they are the product of validation and
//! flow through [`crate::ErrorHandler`]. The errors here signal a reference
//! pack that cannot back a validation run at all.

use thiserror::Error;

/// Result type for reference data operations.
pub type Result<T> = std::result::Result<T, ReferenceDataError>;

/// Problems detected while indexing a reference pack.
#[derive(Debug, Error)]
pub enum ReferenceDataError {
    /// Two LARS records claim the same aim reference
    #[error("Duplicate LARS record for aim reference '{0}'")]
    DuplicateAimRef(String),

    /// Two organisation records claim the same UKPRN
    #[error("Duplicate organisation record for UKPRN {0}")]
    DuplicateUkprn(i64),

    /// The same FAM type/code combination is listed twice
    #[error("Duplicate FAM code entry for '{fam_type}' code '{fam_code}'")]
    DuplicateFamCode {
        /// FAM type of the duplicated entry
        fam_type: String,
        /// FAM code of the duplicated entry
        fam_code: String,
    },
}
