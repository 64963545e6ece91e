//! Per-request booking context.
//!
//! Carries the calendar date and the booking limits that date validation depends on, so
//! services never read the wall clock or global configuration themselves.

use chrono::NaiveDate;

use crate::server::{
    config::BookingPolicy, error::booking::BookingError, model::reservation::StayDates,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BookingContext {
    /// Date treated as "today" for past-date checks and dashboard queries.
    pub today: NaiveDate,
    pub policy: BookingPolicy,
}

impl BookingContext {
    pub fn new(today: NaiveDate, policy: BookingPolicy) -> Self {
        Self { today, policy }
    }

    /// Validates the interval of a new booking.
    ///
    /// # Returns
    /// - `Ok(StayDates)` - Interval is non-empty, starts today or later and, when a
    ///   maximum stay is configured, is not longer than it
    /// - `Err(BookingError::InvalidDateRange)` - Otherwise
    pub fn validate_new_stay(
        &self,
        check_in: NaiveDate,
        check_out: NaiveDate,
    ) -> Result<StayDates, BookingError> {
        let stay = self.validate_search(check_in, check_out)?;
        self.check_length(&stay)?;
        Ok(stay)
    }

    /// Validates the interval of an existing booking being changed.
    ///
    /// A reservation already checked in keeps its past check-in date, so only the
    /// interval shape and its length are checked.
    pub fn validate_stay(
        &self,
        check_in: NaiveDate,
        check_out: NaiveDate,
    ) -> Result<StayDates, BookingError> {
        let stay = StayDates::new(check_in, check_out)?;
        self.check_length(&stay)?;
        Ok(stay)
    }

    /// Validates the interval of an availability search.
    pub fn validate_search(
        &self,
        check_in: NaiveDate,
        check_out: NaiveDate,
    ) -> Result<StayDates, BookingError> {
        let stay = StayDates::new(check_in, check_out)?;

        if check_in < self.today {
            return Err(BookingError::InvalidDateRange(format!(
                "check-in {} is in the past",
                check_in
            )));
        }

        Ok(stay)
    }

    /// # Returns
    /// - `Ok(())` - Party size is at least 1 and within the configured maximum, if any
    /// - `Err(BookingError::Validation)` - Otherwise
    pub fn validate_party_size(&self, party_size: i32) -> Result<(), BookingError> {
        if party_size < 1 {
            return Err(BookingError::Validation(
                "party size must be at least 1".to_string(),
            ));
        }

        match self.policy.max_party_size {
            Some(max) if party_size > max => Err(BookingError::Validation(format!(
                "party size must be between 1 and {}",
                max
            ))),
            _ => Ok(()),
        }
    }

    fn check_length(&self, stay: &StayDates) -> Result<(), BookingError> {
        match self.policy.max_stay_nights {
            Some(max) if stay.nights() > max => Err(BookingError::InvalidDateRange(format!(
                "stays are limited to {} nights",
                max
            ))),
            _ => Ok(()),
        }
    }
}
