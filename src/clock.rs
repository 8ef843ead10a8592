use crate::{CalendarDate, DateError};

/// Supplies the current calendar date.
pub trait DateSource {
    /// # Errors
    /// Returns `DateError` if the current date cannot be represented.
    fn today(&self) -> Result<CalendarDate, DateError>;
}

/// Reads today's date from the local wall clock.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SystemClock;

impl DateSource for SystemClock {
    fn today(&self) -> Result<CalendarDate, DateError> {
        CalendarDate::try_from(chrono::Local::now().date_naive())
    }
}

/// A fixed date is its own source.
impl DateSource for CalendarDate {
    fn today(&self) -> Result<CalendarDate, DateError> {
        Ok(*self)
    }
}

impl<F> DateSource for F
where
    F: Fn() -> CalendarDate,
{
    fn today(&self) -> Result<CalendarDate, DateError> {
        Ok(self())
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use super::*;
    use crate::test_utils::date;

    #[test]
    fn test_fixed_date_source() {
        let fixed = date(2024, 6, 15);
        assert_eq!(fixed.today().unwrap(), fixed);
        assert_eq!(fixed.today().unwrap(), fixed);
    }

    #[test]
    fn test_closure_source_is_called_each_time() {
        let calls = Cell::new(0_u8);
        let source = || {
            calls.set(calls.get() + 1);
            date(2024, 12, 20)
        };

        assert_eq!(source.today().unwrap(), date(2024, 12, 20));
        assert_eq!(source.today().unwrap(), date(2024, 12, 20));
        assert_eq!(calls.get(), 2);
    }

    #[test]
    fn test_system_clock_matches_local_date() {
        let before = chrono::Local::now().date_naive();
        let today = SystemClock.today().unwrap();
        let after = chrono::Local::now().date_naive();

        let expected = [before, after].map(|d| CalendarDate::try_from(d).unwrap());
        assert!(expected.contains(&today));
    }
}
