//! Due dates and the grouping key of the by-deadline view.

use super::TaskDomainError;
use chrono::NaiveDate;
use std::fmt;

/// `chrono` pattern for due dates entered and displayed as `DD-MM-YYYY`.
pub const DUE_DATE_FORMAT: &str = "%d-%m-%Y";

/// Parses a `DD-MM-YYYY` due date.
///
/// # Errors
///
/// Returns [`TaskDomainError::InvalidDueDate`] when the value does not match
/// the format or names a day that does not exist.
pub fn parse_due_date(raw: &str) -> Result<NaiveDate, TaskDomainError> {
    NaiveDate::parse_from_str(raw.trim(), DUE_DATE_FORMAT)
        .map_err(|_| TaskDomainError::InvalidDueDate(raw.to_owned()))
}

/// Formats a due date as `DD-MM-YYYY`.
#[must_use]
pub fn format_due_date(date: NaiveDate) -> String {
    date.format(DUE_DATE_FORMAT).to_string()
}

/// Key of one group in the by-deadline view.
///
/// Variant order drives the derived [`Ord`]: every dated key sorts before
/// [`Deadline::Unscheduled`], and dated keys compare chronologically.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Deadline {
    /// Tasks due on the given day.
    Due(NaiveDate),
    /// Tasks without a due date.
    Unscheduled,
}

impl Deadline {
    /// Returns the due date, or `None` for the unscheduled group.
    #[must_use]
    pub const fn date(self) -> Option<NaiveDate> {
        match self {
            Self::Due(date) => Some(date),
            Self::Unscheduled => None,
        }
    }
}

impl From<Option<NaiveDate>> for Deadline {
    fn from(value: Option<NaiveDate>) -> Self {
        value.map_or(Self::Unscheduled, Self::Due)
    }
}

impl fmt::Display for Deadline {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Due(date) => f.write_str(&format_due_date(*date)),
            Self::Unscheduled => f.write_str("No deadline"),
        }
    }
}
