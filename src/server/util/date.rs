use chrono::{Local, NaiveDate};

/// Current calendar date in the server's local time zone.
///
/// Only the controller layer calls this; everything below receives the date through
/// `BookingContext` so it can be fixed in tests.
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}
