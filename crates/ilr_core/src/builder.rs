//! Builders for learner records.
//!
//! Fluent constructors for learners and deliveries. Used pervasively by
//! tests to assemble scenarios, and by the CLI's scaffolding command.

use chrono::NaiveDate;

use crate::{
    EmploymentStatusMonitoring, Learner, LearnerEmploymentStatus, LearningDelivery,
    LearningDeliveryFam,
};

/// Builder for creating a [`Learner`].
///
/// # Example
///
/// ```rust
/// use ilr_core::{LearnerBuilder, LearningDeliveryBuilder};
///
/// let learner = LearnerBuilder::new("LRN001")
///     .date_of_birth("1990-05-01".parse().unwrap())
///     .delivery(
///         LearningDeliveryBuilder::new("50086832")
///             .fund_model(35)
///             .learn_start_date("2016-09-01".parse().unwrap())
///             .build(),
///     )
///     .build();
///
/// assert_eq!(learner.learning_deliveries.len(), 1);
/// ```
#[derive(Debug, Default)]
pub struct LearnerBuilder {
    learn_ref_number: Option<String>,
    date_of_birth: Option<NaiveDate>,
    prior_attain: Option<i32>,
    learning_deliveries: Vec<LearningDelivery>,
    employment_statuses: Vec<LearnerEmploymentStatus>,
}

impl LearnerBuilder {
    /// Creates a new learner builder with the required reference number.
    pub fn new(learn_ref_number: impl Into<String>) -> Self {
        Self {
            learn_ref_number: Some(learn_ref_number.into()),
            ..Default::default()
        }
    }

    /// Sets the date of birth.
    pub fn date_of_birth(mut self, date_of_birth: NaiveDate) -> Self {
        self.date_of_birth = Some(date_of_birth);
        self
    }

    /// Sets the prior attainment code.
    pub fn prior_attain(mut self, prior_attain: i32) -> Self {
        self.prior_attain = Some(prior_attain);
        self
    }

    /// Adds a learning delivery.
    pub fn delivery(mut self, delivery: LearningDelivery) -> Self {
        self.learning_deliveries.push(delivery);
        self
    }

    /// Adds multiple learning deliveries.
    pub fn deliveries(mut self, deliveries: Vec<LearningDelivery>) -> Self {
        self.learning_deliveries.extend(deliveries);
        self
    }

    /// Adds an employment status record.
    pub fn employment_status(mut self, status: LearnerEmploymentStatus) -> Self {
        self.employment_statuses.push(status);
        self
    }

    /// Builds the learner.
    ///
    /// # Panics
    ///
    /// Panics if the learner reference number is not set.
    pub fn build(self) -> Learner {
        Learner {
            learn_ref_number: self.learn_ref_number.expect("learn_ref_number is required"),
            date_of_birth: self.date_of_birth,
            prior_attain: self.prior_attain,
            learning_deliveries: self.learning_deliveries,
            employment_statuses: self.employment_statuses,
        }
    }
}

/// Builder for creating a [`LearningDelivery`].
///
/// Aim type defaults to 3 (component aim) and the sequence number to 1;
/// fund model and start date must be set explicitly.
#[derive(Debug, Default)]
pub struct LearningDeliveryBuilder {
    learn_aim_ref: Option<String>,
    aim_type: Option<i32>,
    aim_seq_number: Option<i32>,
    fund_model: Option<i32>,
    prog_type: Option<i32>,
    learn_start_date: Option<NaiveDate>,
    learn_actual_end_date: Option<NaiveDate>,
    fams: Vec<LearningDeliveryFam>,
}

impl LearningDeliveryBuilder {
    /// Creates a new delivery builder with the required aim reference.
    pub fn new(learn_aim_ref: impl Into<String>) -> Self {
        Self {
            learn_aim_ref: Some(learn_aim_ref.into()),
            aim_type: Some(3),
            aim_seq_number: Some(1),
            ..Default::default()
        }
    }

    /// Sets the aim type.
    pub fn aim_type(mut self, aim_type: i32) -> Self {
        self.aim_type = Some(aim_type);
        self
    }

    /// Sets the aim sequence number.
    pub fn aim_seq_number(mut self, aim_seq_number: i32) -> Self {
        self.aim_seq_number = Some(aim_seq_number);
        self
    }

    /// Sets the funding model.
    pub fn fund_model(mut self, fund_model: i32) -> Self {
        self.fund_model = Some(fund_model);
        self
    }

    /// Sets the programme type.
    pub fn prog_type(mut self, prog_type: i32) -> Self {
        self.prog_type = Some(prog_type);
        self
    }

    /// Sets the learning start date.
    pub fn learn_start_date(mut self, learn_start_date: NaiveDate) -> Self {
        self.learn_start_date = Some(learn_start_date);
        self
    }

    /// Sets the actual end date.
    pub fn learn_actual_end_date(mut self, learn_actual_end_date: NaiveDate) -> Self {
        self.learn_actual_end_date = Some(learn_actual_end_date);
        self
    }

    /// Adds a FAM tag from a type and code pair.
    pub fn fam(mut self, fam_type: &str, fam_code: &str) -> Self {
        self.fams.push(LearningDeliveryFam::new(fam_type, fam_code));
        self
    }

    /// Adds multiple FAM tags.
    pub fn fams(mut self, fams: Vec<LearningDeliveryFam>) -> Self {
        self.fams.extend(fams);
        self
    }

    /// Builds the delivery.
    ///
    /// # Panics
    ///
    /// Panics if the aim reference, fund model or start date are not set.
    pub fn build(self) -> LearningDelivery {
        LearningDelivery {
            learn_aim_ref: self.learn_aim_ref.expect("learn_aim_ref is required"),
            aim_type: self.aim_type.expect("aim_type is required"),
            aim_seq_number: self.aim_seq_number.expect("aim_seq_number is required"),
            fund_model: self.fund_model.expect("fund_model is required"),
            prog_type: self.prog_type,
            learn_start_date: self.learn_start_date.expect("learn_start_date is required"),
            learn_actual_end_date: self.learn_actual_end_date,
            fams: self.fams,
        }
    }
}

/// Builder for creating a [`LearnerEmploymentStatus`].
#[derive(Debug)]
pub struct EmploymentStatusBuilder {
    emp_stat: i32,
    date_emp_stat_app: NaiveDate,
    monitorings: Vec<EmploymentStatusMonitoring>,
}

impl EmploymentStatusBuilder {
    /// Creates a new employment status builder.
    pub fn new(emp_stat: i32, date_emp_stat_app: NaiveDate) -> Self {
        Self {
            emp_stat,
            date_emp_stat_app,
            monitorings: Vec::new(),
        }
    }

    /// Adds a monitoring code.
    pub fn monitoring(mut self, esm_type: &str, esm_code: i32) -> Self {
        self.monitorings.push(EmploymentStatusMonitoring {
            esm_type: esm_type.to_string(),
            esm_code,
        });
        self
    }

    /// Builds the employment status record.
    pub fn build(self) -> LearnerEmploymentStatus {
        LearnerEmploymentStatus {
            emp_stat: self.emp_stat,
            date_emp_stat_app: self.date_emp_stat_app,
            monitorings: self.monitorings,
        }
    }
}
