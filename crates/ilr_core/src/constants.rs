//! Published code catalogs.
//!
//! FAM types, FAM codes, funding models, programme types, prior attainment
//! bands and LARS classifications referenced by the rules. These values are
//! data, not behavior: rule outcomes depend on them matching the published
//! specification exactly.

/// Funding and Monitoring types.
pub mod fam_type {
    /// Apprenticeship contract type
    pub const ACT: &str = "ACT";
    /// Advanced learner loan indicator
    pub const ADL: &str = "ADL";
    /// Community learning provision type
    pub const ASL: &str = "ASL";
    /// Devolved area monitoring
    pub const DAM: &str = "DAM";
    /// Eligibility for enhanced funding
    pub const EEF: &str = "EEF";
    /// Full or co-funding indicator
    pub const FFI: &str = "FFI";
    /// Household situation
    pub const HHS: &str = "HHS";
    /// Learning delivery monitoring
    pub const LDM: &str = "LDM";
    /// Learning support funding
    pub const LSF: &str = "LSF";
    /// Restart indicator
    pub const RES: &str = "RES";
    /// Source of funding
    pub const SOF: &str = "SOF";

    /// Every published FAM type.
    pub const ALL: &[&str] = &[ACT, ADL, ASL, DAM, EEF, FFI, HHS, LDM, LSF, RES, SOF];

    /// Types that may legitimately occur more than once on one delivery.
    pub const REPEATABLE: &[&str] = &[DAM, LDM];
}

/// Source of funding (SOF) codes.
pub mod sof {
    /// Higher Education Funding Council for England
    pub const HEFCE: &str = "1";
    /// ESFA adult funding
    pub const ESFA_ADULT: &str = "105";
    /// ESFA 16-19 funding
    pub const ESFA_16_19: &str = "107";
    /// Greater Manchester Combined Authority
    pub const GMCA: &str = "110";
    /// Liverpool City Region Combined Authority
    pub const LCRCA: &str = "111";
    /// West Midlands Combined Authority
    pub const WMCA: &str = "112";
    /// West of England Combined Authority
    pub const WECA: &str = "113";
    /// Tees Valley Combined Authority
    pub const TVCA: &str = "114";
    /// Cambridgeshire and Peterborough Combined Authority
    pub const CPCA: &str = "115";
    /// Greater London Authority
    pub const GLA: &str = "116";

    /// Codes operated by a devolved authority.
    pub const DEVOLVED: &[&str] = &[GMCA, LCRCA, WMCA, WECA, TVCA, CPCA, GLA];
}

/// Learning delivery monitoring (LDM) codes.
pub mod ldm {
    /// Offender learning in the community
    pub const OLASS_COMMUNITY: &str = "034";
    /// Solent City Deal
    pub const SOLENT_CITY_DEAL: &str = "328";
    /// Steel industry redundancy support
    pub const STEEL_REDUNDANCY: &str = "347";
    /// Military ethos alternative provision
    pub const MILITARY_ETHOS: &str = "339";
    /// Level 3 adult skills offer
    pub const SKILLS_OFFER: &str = "376";

    /// Monitoring codes that take a delivery out of the full-funding rules.
    pub const FULL_FUNDING_EXCLUSIONS: &[&str] = &[
        OLASS_COMMUNITY,
        SOLENT_CITY_DEAL,
        STEEL_REDUNDANCY,
        MILITARY_ETHOS,
    ];
}

/// Full or co-funding indicator (FFI) codes.
pub mod ffi {
    /// Fully funded
    pub const FULLY_FUNDED: &str = "1";
    /// Co-funded
    pub const CO_FUNDED: &str = "2";
}

/// Restart indicator (RES) codes.
pub mod res {
    /// Restart of a previously reported aim
    pub const RESTART: &str = "1";
}

/// Funding model codes.
pub mod fund_model {
    pub const COMMUNITY_LEARNING: i32 = 10;
    pub const SIXTEEN_TO_NINETEEN: i32 = 25;
    pub const ADULT_SKILLS: i32 = 35;
    pub const APPRENTICESHIPS: i32 = 36;
    pub const EUROPEAN_SOCIAL_FUND: i32 = 70;
    pub const OTHER_ADULT: i32 = 81;
    pub const NON_FUNDED: i32 = 99;
}

/// Programme type codes.
pub mod prog_type {
    pub const ADVANCED_APPRENTICESHIP: i32 = 2;
    pub const INTERMEDIATE_APPRENTICESHIP: i32 = 3;
    pub const HIGHER_APPRENTICESHIP_4: i32 = 20;
    pub const HIGHER_APPRENTICESHIP_5: i32 = 21;
    pub const HIGHER_APPRENTICESHIP_6: i32 = 22;
    pub const HIGHER_APPRENTICESHIP_7_PLUS: i32 = 23;
    pub const TRAINEESHIP: i32 = 24;
    pub const APPRENTICESHIP_STANDARD: i32 = 25;

    /// Programme types that mark a delivery as an apprenticeship.
    pub const APPRENTICESHIPS: &[i32] = &[
        ADVANCED_APPRENTICESHIP,
        INTERMEDIATE_APPRENTICESHIP,
        HIGHER_APPRENTICESHIP_4,
        HIGHER_APPRENTICESHIP_5,
        HIGHER_APPRENTICESHIP_6,
        HIGHER_APPRENTICESHIP_7_PLUS,
        APPRENTICESHIP_STANDARD,
    ];
}

/// Employment status codes.
pub mod emp_stat {
    pub const IN_PAID_EMPLOYMENT: i32 = 10;
    pub const NOT_EMPLOYED_SEEKING: i32 = 11;
    pub const NOT_EMPLOYED_NOT_SEEKING: i32 = 12;
    pub const NOT_KNOWN: i32 = 98;

    /// Codes counting as unemployed for derived funding flags.
    pub const UNEMPLOYED: &[i32] = &[NOT_EMPLOYED_SEEKING, NOT_EMPLOYED_NOT_SEEKING];
}

/// Employment status monitoring codes.
pub mod esm {
    /// Benefit status indicator type
    pub const BENEFIT_STATUS_INDICATOR: &str = "BSI";

    pub const JSA: i32 = 1;
    pub const ESA_WRAG: i32 = 2;
    pub const OTHER_STATE_BENEFIT: i32 = 3;
    pub const UNIVERSAL_CREDIT: i32 = 4;

    /// Benefit codes qualifying a learner as in receipt of benefits.
    pub const IN_RECEIPT: &[i32] = &[JSA, ESA_WRAG, OTHER_STATE_BENEFIT, UNIVERSAL_CREDIT];
}

/// Prior attainment codes.
pub mod prior_attain {
    /// Codes indicating a full level 2 or higher on entry.
    pub const FULL_LEVEL_2_AND_ABOVE: &[i32] = &[3, 4, 5, 9, 10, 11, 12, 13];

    /// Codes indicating a full level 3 or higher on entry.
    pub const FULL_LEVEL_3_AND_ABOVE: &[i32] = &[4, 5, 10, 11, 12, 13];
}

/// LARS classifications.
pub mod lars {
    /// Notional NVQ levels counting as level 3 or above.
    pub const LEVEL_3_AND_ABOVE: &[&str] = &["3", "4", "5", "6", "7", "8", "H"];

    /// Notional NVQ level 2.
    pub const LEVEL_2: &str = "2";

    /// Category marking an aim as on the level 3 adult skills offer list.
    pub const CATEGORY_SKILLS_OFFER: i32 = 37;

    /// Basic skills types counting as English or maths provision.
    pub const ENGLISH_MATHS_BASIC_SKILLS: &[i32] = &[
        1, 2, 11, 12, 13, 14, 19, 20, 21, 23, 24, 25, 29, 30, 31, 32, 33, 34, 35,
    ];

    /// Threshold a level 2 aim must reach to count as a full level 2.
    pub const FULL_LEVEL_2_PERCENT: f64 = 100.0;
}
