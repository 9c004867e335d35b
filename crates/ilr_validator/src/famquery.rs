//! FAM collection queries.
//!
//! Lookup helpers over a delivery's funding-and-monitoring tags. Type+code
//! queries are exact-match; type-only queries ignore the code.

use ilr_core::LearningDeliveryFam;

/// True when any tag has the given type, regardless of code.
pub fn has_fam_type(fams: &[LearningDeliveryFam], fam_type: &str) -> bool {
    fams.iter().any(|fam| fam.fam_type == fam_type)
}

/// True when any tag matches the given type and code exactly.
pub fn has_fam(fams: &[LearningDeliveryFam], fam_type: &str, fam_code: &str) -> bool {
    fams.iter()
        .any(|fam| fam.fam_type == fam_type && fam.fam_code == fam_code)
}

/// All tags of the given type.
pub fn fams_of_type<'a>(
    fams: &'a [LearningDeliveryFam],
    fam_type: &'a str,
) -> impl Iterator<Item = &'a LearningDeliveryFam> {
    fams.iter().filter(move |fam| fam.fam_type == fam_type)
}

/// True when any tag of the given type carries a code in `codes`.
pub fn has_any_fam_code(fams: &[LearningDeliveryFam], fam_type: &str, codes: &[&str]) -> bool {
    fams_of_type(fams, fam_type).any(|fam| codes.contains(&fam.fam_code.as_str()))
}
