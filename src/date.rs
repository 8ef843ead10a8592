use std::str::FromStr;

use crate::consts::{DATE_SEPARATOR, TIME_SEPARATOR};
use crate::prelude::*;
use crate::types::{Day, Month, Year, days_in_month};
use crate::DateError;

/// A fully specified Gregorian calendar date.
/// Displays, parses and serializes as `YYYY-MM-DD`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display)]
#[display(fmt = "{year}-{month}-{day}")]
pub struct CalendarDate {
    year:  Year,
    month: Month,
    day:   Day,
}

impl CalendarDate {
    /// Creates a date from raw components
    ///
    /// # Errors
    /// Returns `DateError` if any component is out of range.
    pub fn new(year: u16, month: u8, day: u8) -> Result<Self, DateError> {
        let year = Year::new(year)?;
        let month = Month::new(month)?;
        let day = Day::new(day, year, month)?;
        Ok(Self { year, month, day })
    }

    /// First day of the given month
    pub const fn first_of(year: Year, month: Month) -> Self {
        Self {
            year,
            month,
            day: Day::FIRST,
        }
    }

    pub const fn year(&self) -> Year {
        self.year
    }

    pub const fn month(&self) -> Month {
        self.month
    }

    pub const fn day(&self) -> Day {
        self.day
    }

    /// Builds a date the way an overflowing `(year, month, day)` constructor does:
    /// days past the end of `month` roll forward into the following months and years.
    ///
    /// # Errors
    /// Returns `DateError::InvalidDay` for day 0 and `DateError::OutOfRange`
    /// when the result falls after `MAX_YEAR`.
    pub fn from_overflowing(year: Year, month: Month, day: u16) -> Result<Self, DateError> {
        if day == 0 {
            return Err(DateError::InvalidDay {
                year:  year.get(),
                month: month.get(),
                day:   0,
            });
        }
        Self::first_of(year, month)
            .add_days(u32::from(day - 1))
            .ok_or_else(|| DateError::OutOfRange(format!("{year}-{month} day {day}")))
    }

    /// Moves forward by `days`, rolling over months and years.
    /// Returns `None` past the last representable date.
    pub fn add_days(self, days: u32) -> Option<Self> {
        let mut remaining = days;
        let mut current = self;
        loop {
            let left_in_month = u32::from(days_in_month(current.year.get(), current.month.get()) - current.day.get());
            if remaining <= left_in_month {
                let day = current.day.get() + u8::try_from(remaining).ok()?;
                return Self::new(current.year.get(), current.month.get(), day).ok();
            }
            remaining -= left_in_month + 1;
            current = current.first_of_next_month()?;
        }
    }

    /// First day of the month after this date's month, rolling December into
    /// January of the next year. Returns `None` past `MAX_YEAR`.
    pub fn first_of_next_month(&self) -> Option<Self> {
        match self.month.successor() {
            Some(month) => Some(Self::first_of(self.year, month)),
            None => self.year.next().map(|year| Self::first_of(year, Month::JANUARY)),
        }
    }

    /// January 1 of the year before this date's year.
    /// Returns `None` when this date is already in the first representable year.
    pub fn start_of_previous_year(&self) -> Option<Self> {
        self.year
            .previous()
            .map(|year| Self::first_of(year, Month::JANUARY))
    }

    /// Parses the date portion of a full ISO 8601 timestamp such as
    /// `2024-06-15T10:30:00.000Z`. A bare `YYYY-MM-DD` is accepted too.
    ///
    /// # Errors
    /// Returns `DateError` if the portion before the time separator is not a valid date.
    pub fn parse_date_portion(timestamp: &str) -> Result<Self, DateError> {
        let trimmed = timestamp.trim();
        let date_part = trimmed
            .split_once(TIME_SEPARATOR)
            .map_or(trimmed, |(date, _)| date);
        date_part.parse()
    }

    fn parse_component<T: FromStr>(part: &str, width: usize) -> Result<T, DateError> {
        if part.len() != width || !part.bytes().all(|b| b.is_ascii_digit()) {
            return Err(DateError::InvalidFormat(part.to_owned()));
        }
        part.parse::<T>()
            .map_err(|_| DateError::InvalidFormat(part.to_owned()))
    }
}

impl FromStr for CalendarDate {
    type Err = DateError;

    /// Accepts exactly `YYYY-MM-DD`, ignoring surrounding whitespace
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(DateError::EmptyInput);
        }

        let parts: Vec<&str> = trimmed.split(DATE_SEPARATOR).collect();
        let [year, month, day] = parts.as_slice() else {
            return Err(DateError::InvalidFormat(format!(
                "expected YYYY{DATE_SEPARATOR}MM{DATE_SEPARATOR}DD, got {trimmed}"
            )));
        };

        Self::new(
            Self::parse_component(year, 4)?,
            Self::parse_component(month, 2)?,
            Self::parse_component(day, 2)?,
        )
    }
}

impl TryFrom<chrono::NaiveDate> for CalendarDate {
    type Error = DateError;

    fn try_from(date: chrono::NaiveDate) -> Result<Self, Self::Error> {
        use chrono::Datelike;

        let year = u16::try_from(date.year())
            .map_err(|_| DateError::OutOfRange(format!("year {}", date.year())))?;
        let month = u8::try_from(date.month()).map_err(|_| DateError::InvalidFormat(date.to_string()))?;
        let day = u8::try_from(date.day()).map_err(|_| DateError::InvalidFormat(date.to_string()))?;
        Self::new(year, month, day)
    }
}

impl serde::Serialize for CalendarDate {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> serde::Deserialize<'de> for CalendarDate {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
