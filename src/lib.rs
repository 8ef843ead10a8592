//! Default start/end dates for report forms.
//!
//! A form carries two date inputs, `start-date` and `end-date`. On load they
//! are pre-filled with January 1 of the previous year and an end date chosen
//! by an [`EndDatePolicy`]. The current date and the two controls are
//! injected, so the whole operation runs without a live page or wall clock:
//!
//! ```
//! use form_date_defaults::{CalendarDate, DefaultDateInitializer, FormFields, InitializerConfig};
//!
//! let today: CalendarDate = "2024-06-15".parse()?;
//! let initializer = DefaultDateInitializer::with_clock(today, InitializerConfig::default());
//!
//! let mut form = FormFields::report_form();
//! initializer.apply_to(&mut form)?;
//!
//! assert_eq!(form.value("start-date"), Some("2023-01-01"));
//! assert_eq!(form.value("end-date"), Some("2024-07-01"));
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

mod clock;
mod config;
mod consts;
mod control;
mod date;
mod initializer;
mod policy;
mod prelude;
mod range;
mod types;

#[cfg(test)]
mod test_utils;

pub use clock::{DateSource, SystemClock};
pub use config::{ConfigError, InitializerConfig};
pub use consts::*;
pub use control::{ControlLookup, FormFields, InputField, ValueSink};
pub use date::CalendarDate;
pub use initializer::{DefaultDateInitializer, InitError, set_default_dates};
pub use policy::EndDatePolicy;
pub use range::{DateRange, RangeError};
pub use types::{Day, Month, Year, days_in_month, is_leap_year};

use crate::prelude::*;

/// Errors produced while validating, parsing or computing calendar dates.
#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum DateError {
    #[display(fmt = "Invalid date format: {_0}")]
    InvalidFormat(String),
    #[display(fmt = "Invalid year: {} (must be {}-{})", "_0", MIN_YEAR, MAX_YEAR)]
    InvalidYear(u16),
    #[display(fmt = "Invalid month: {} (must be 1-{})", "_0", MAX_MONTH)]
    InvalidMonth(u8),
    #[display(fmt = "Invalid day {day} for month {year:04}-{month:02}")]
    InvalidDay { year: u16, month: u8, day: u8 },
    #[display(fmt = "Empty date string")]
    EmptyInput,
    #[display(fmt = "Date out of supported range: {_0}")]
    OutOfRange(String),
}

impl std::error::Error for DateError {}
