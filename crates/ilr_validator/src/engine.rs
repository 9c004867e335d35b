//! Rule set executor.
//!
//! Assembles the rule catalog with its shared collaborators and runs every
//! rule over every learner of a submission. Rules are independent and
//! order-free: each is a pure predicate over one learner plus read-only
//! reference data, so no rule observes another's outcome.

use std::sync::Arc;
use std::time::Instant;

use tracing::{debug, info};

use ilr_core::{
    ErrorCollector, ErrorHandler, Learner, ReferenceData, Rule, Submission, ValidationReport,
    ValidationStats,
};

use crate::dates::AcademicYearService;
use crate::famcatalog::FamCodeCatalog;
use crate::lars::LarsDataService;
use crate::organisation::OrganisationDataService;
use crate::rules;
use crate::structure::StructureValidator;

/// An executable catalog of validation rules.
///
/// # Example
///
/// ```rust
/// use ilr_core::{ReferenceData, Submission};
/// use ilr_validator::RuleSet;
///
/// let reference = ReferenceData {
///     lars: vec![],
///     organisations: vec![],
///     fam_codes: vec![],
///     academic_year_start: "2017-08-01".parse().unwrap(),
/// };
/// let submission = Submission {
///     ukprn: 10001234,
///     learners: vec![],
/// };
///
/// let rule_set = RuleSet::standard(submission.ukprn, reference).unwrap();
/// let report = rule_set.validate_submission(&submission);
/// assert!(report.passed);
/// ```
pub struct RuleSet {
    rules: Vec<Box<dyn Rule>>,
}

impl RuleSet {
    /// Assembles the standard catalog against a reference pack.
    ///
    /// Fails when the pack cannot be indexed (duplicate aim references,
    /// UKPRNs or FAM code entries).
    pub fn standard(ukprn: i64, reference: ReferenceData) -> ilr_core::Result<Self> {
        let lars: Arc<LarsDataService> = Arc::new(LarsDataService::new(reference.lars)?);
        let organisations = Arc::new(OrganisationDataService::new(reference.organisations)?);
        let fam_codes = Arc::new(FamCodeCatalog::new(reference.fam_codes)?);
        let academic_year = AcademicYearService::new(reference.academic_year_start);

        let rules: Vec<Box<dyn Rule>> = vec![
            Box::new(rules::CommunityLearningSourceOfFunding::new(
                ukprn,
                organisations.clone(),
            )),
            Box::new(rules::KnownFamType::new()),
            Box::new(rules::ValidFamCode::new(fam_codes)),
            Box::new(rules::NonRepeatableFamTypes::new()),
            Box::new(rules::AdultSkillsSourceOfFunding::new()),
            Box::new(rules::FullFundingLevelThree2016::new(lars.clone())),
            Box::new(rules::FullFundingLevelThreeOngoing::new(
                lars.clone(),
                academic_year,
            )),
            Box::new(rules::CoFundedFullEntitlement::new(lars.clone())),
            Box::new(rules::DevolvedAreaMonitoring::new()),
            Box::new(rules::OffenderLearningSourceOfFunding::new()),
            Box::new(rules::YoungAdultFullFundingLevelTwo::new(lars.clone())),
            Box::new(rules::SkillsOfferEligibility::new(lars)),
        ];

        Ok(Self { rules })
    }

    /// Builds a catalog from an explicit rule list.
    pub fn from_rules(rules: Vec<Box<dyn Rule>>) -> Self {
        Self { rules }
    }

    /// Keeps only the rules whose published name is in `rule_names`.
    pub fn retain(&mut self, rule_names: &[String]) {
        self.rules
            .retain(|rule| rule_names.iter().any(|name| name == rule.rule_name()));
    }

    /// Published names of the registered rules.
    pub fn rule_names(&self) -> Vec<&'static str> {
        self.rules.iter().map(|rule| rule.rule_name()).collect()
    }

    /// Number of registered rules.
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// True when no rules are registered.
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Runs every rule over one learner.
    pub fn validate_learner(&self, learner: &Learner, handler: &mut dyn ErrorHandler) {
        for rule in &self.rules {
            debug!(rule = rule.rule_name(), learner = %learner.learn_ref_number, "evaluating");
            rule.validate(learner, handler);
        }
    }

    /// Runs the structural checks and the full catalog over a submission.
    pub fn validate_submission(&self, submission: &Submission) -> ValidationReport {
        let start = Instant::now();
        let mut collector = ErrorCollector::new();

        StructureValidator::new().validate(submission, &mut collector);

        for learner in &submission.learners {
            self.validate_learner(learner, &mut collector);
        }

        let stats = ValidationStats {
            learners_validated: submission.learners.len(),
            rules_evaluated: self.rules.len(),
            duration_ms: start.elapsed().as_millis() as u64,
        };

        let report = ValidationReport::from_violations(collector.into_violations(), stats);
        info!(
            learners = report.stats.learners_validated,
            violations = report.violations.len(),
            "validation complete"
        );
        report
    }
}
