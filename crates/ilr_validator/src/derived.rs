//! Derived composite flags.
//!
//! Single-purpose predicates over learner and delivery data, shared by the
//! rules that gate or exclude on them. Each takes its inputs explicitly and
//! holds no state, so a flag computed for one rule means the same thing for
//! every other rule that consults it.

use ilr_core::constants::{emp_stat, esm, fam_type, fund_model, prog_type, res};
use ilr_core::{Learner, LearningDelivery, LearningDeliveryFam};

use crate::famquery;

/// True when the programme type marks the delivery as an apprenticeship.
pub fn is_apprenticeship(delivery_prog_type: Option<i32>) -> bool {
    delivery_prog_type.is_some_and(|code| prog_type::APPRENTICESHIPS.contains(&code))
}

/// True when the programme type marks the delivery as a traineeship.
pub fn is_traineeship(delivery_prog_type: Option<i32>) -> bool {
    delivery_prog_type == Some(prog_type::TRAINEESHIP)
}

/// True when the delivery is a restart of a previously reported aim.
pub fn is_restart(fams: &[LearningDeliveryFam]) -> bool {
    famquery::has_fam(fams, fam_type::RES, res::RESTART)
}

/// True when the delivery is adult-skills funded and the learner was
/// unemployed and in receipt of benefits when it started.
///
/// The employment status in effect is the latest record dated on or before
/// the delivery start.
pub fn is_adult_funded_unemployed_with_benefits(
    delivery: &LearningDelivery,
    learner: &Learner,
) -> bool {
    if delivery.fund_model != fund_model::ADULT_SKILLS {
        return false;
    }

    learner
        .employment_status_on(delivery.learn_start_date)
        .is_some_and(|status| {
            emp_stat::UNEMPLOYED.contains(&status.emp_stat)
                && status.monitorings.iter().any(|monitoring| {
                    monitoring.esm_type == esm::BENEFIT_STATUS_INDICATOR
                        && esm::IN_RECEIPT.contains(&monitoring.esm_code)
                })
        })
}
