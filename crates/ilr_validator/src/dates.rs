//! Date arithmetic helpers.
//!
//! Whole-year differences for age calculations, inclusive window checks for
//! viable-date rules, and the academic-year boundary service.

use chrono::{Datelike, NaiveDate};

/// Builds a date from a known-good calendar triple.
///
/// Only for fixed constants such as rule window boundaries; the components
/// must form a real calendar date.
pub fn ymd(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("valid calendar date")
}

/// Number of whole years elapsed between two dates.
///
/// This is the age calculation: a learner born 1992-09-02 is 23, not 24, on
/// 2016-09-01. Negative when `to` precedes `from`.
pub fn whole_years_between(from: NaiveDate, to: NaiveDate) -> i32 {
    let mut years = to.year() - from.year();
    if (to.month(), to.day()) < (from.month(), from.day()) {
        years -= 1;
    }
    years
}

/// True when `date` falls within `start..=end`, inclusive at both ends.
pub fn is_between_inclusive(date: NaiveDate, start: NaiveDate, end: NaiveDate) -> bool {
    date >= start && date <= end
}

/// Adds whole years to a date, clamping 29 February to 28 February in
/// non-leap years.
pub fn add_years(date: NaiveDate, years: i32) -> NaiveDate {
    NaiveDate::from_ymd_opt(date.year() + years, date.month(), date.day())
        .unwrap_or_else(|| ymd(date.year() + years, 2, 28))
}

/// Supplies the academic-year boundary for the return under validation.
#[derive(Debug, Clone, Copy)]
pub struct AcademicYearService {
    start: NaiveDate,
}

impl AcademicYearService {
    /// Creates the service for an academic year starting on the given date.
    pub fn new(start: NaiveDate) -> Self {
        Self { start }
    }

    /// First day of the academic year under validation.
    pub fn start(&self) -> NaiveDate {
        self.start
    }

    /// First day (1 August) of the academic year containing `date`.
    pub fn year_start_containing(date: NaiveDate) -> NaiveDate {
        if date.month() >= 8 {
            ymd(date.year(), 8, 1)
        } else {
            ymd(date.year() - 1, 8, 1)
        }
    }
}
