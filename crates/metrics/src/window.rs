use chrono::{Datelike, Duration, NaiveDate};
use serde::{Deserialize, Serialize};

/// A daybook membership test anchored to an explicit reference date.
///
/// The reference date is always supplied by the caller; this type never looks
/// at the system clock.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DaybookWindow {
    /// Exactly the reference calendar date.
    Day(NaiveDate),
    /// The Sunday-through-Saturday week containing the reference date,
    /// inclusive on both ends.
    Week(NaiveDate),
    /// The calendar month and year of the reference date.
    Month(NaiveDate),
}

impl DaybookWindow {
    /// Tests whether `date` falls inside this window.
    pub fn contains(&self, date: NaiveDate) -> bool {
        match *self {
            DaybookWindow::Day(reference) => date == reference,
            DaybookWindow::Week(reference) => {
                let start = week_start(reference);
                date >= start && date <= start + Duration::days(6)
            }
            DaybookWindow::Month(reference) => {
                date.year() == reference.year() && date.month() == reference.month()
            }
        }
    }
}

/// The Sunday that opens the week containing `date`.
fn week_start(date: NaiveDate) -> NaiveDate {
    date - Duration::days(date.weekday().num_days_from_sunday() as i64)
}
