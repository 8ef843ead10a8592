use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::consts::DAY_OF_YEAR_END;
use crate::prelude::*;
use crate::{CalendarDate, DateError, Month};

/// How the end-date default is derived from the current date.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum EndDatePolicy {
    /// Day 365 of the current year, counted from January 1 with overflow
    /// into later months: December 31, or December 30 in a leap year.
    #[display(fmt = "day-of-year")]
    DayOfYear,
    /// First day of the month after the current one. December rolls over
    /// to January 1 of the next year.
    #[default]
    #[display(fmt = "next-month")]
    NextMonth,
}

impl EndDatePolicy {
    /// Computes the end date for `today`.
    ///
    /// # Errors
    /// Returns `DateError::OutOfRange` when the result would fall after `MAX_YEAR`.
    pub fn end_date(self, today: CalendarDate) -> Result<CalendarDate, DateError> {
        match self {
            Self::DayOfYear => {
                CalendarDate::from_overflowing(today.year(), Month::JANUARY, DAY_OF_YEAR_END)
            },
            Self::NextMonth => today
                .first_of_next_month()
                .ok_or_else(|| DateError::OutOfRange(format!("month after {today}"))),
        }
    }
}

impl FromStr for EndDatePolicy {
    type Err = DateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "day-of-year" => Ok(Self::DayOfYear),
            "next-month" => Ok(Self::NextMonth),
            other => Err(DateError::InvalidFormat(format!("unknown end date policy: {other}"))),
        }
    }
}
