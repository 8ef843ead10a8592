//! Pre-fills a form's start and end date inputs.
//!
//! The start input always receives January 1 of the previous year. The end
//! input receives whatever the configured [`EndDatePolicy`] computes. The
//! start value is written before the end control is touched, so a missing
//! end control leaves the start input filled.

use crate::{
    CalendarDate, ControlLookup, DateError, DateRange, DateSource, InitializerConfig, SystemClock,
    ValueSink,
};

/// Error type for applying default dates to a form.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InitError {
    /// No control with this identifier exists in the form.
    #[error("Element not found: {id}")]
    ElementNotFound { id: String },

    #[error(transparent)]
    Date(#[from] DateError),
}

/// Computes default dates from a [`DateSource`] and writes them into form controls.
#[derive(Debug, Clone, Default)]
pub struct DefaultDateInitializer<C = SystemClock> {
    clock:  C,
    config: InitializerConfig,
}

impl DefaultDateInitializer<SystemClock> {
    /// Uses the local wall clock
    pub fn new(config: InitializerConfig) -> Self {
        Self::with_clock(SystemClock, config)
    }
}

impl<C: DateSource> DefaultDateInitializer<C> {
    pub const fn with_clock(clock: C, config: InitializerConfig) -> Self {
        Self { clock, config }
    }

    pub const fn config(&self) -> &InitializerConfig {
        &self.config
    }

    /// Computes the default range without writing anything.
    ///
    /// # Errors
    /// Returns `InitError::Date` if today's date is unavailable or a default
    /// falls outside the supported years.
    pub fn compute(&self) -> Result<DateRange, InitError> {
        let today = self.clock.today()?;
        let start = today
            .start_of_previous_year()
            .ok_or_else(|| DateError::OutOfRange(format!("year before {}", today.year())))?;
        let end = self.config.policy.end_date(today)?;

        tracing::debug!(%today, %start, %end, policy = %self.config.policy, "Computed default dates");
        // start is in an earlier year than either policy's end
        Ok(DateRange::ordered(start, end))
    }

    /// Writes the defaults into the given controls, start first.
    /// `None` stands for a control that does not exist on the page.
    ///
    /// # Errors
    /// Returns `InitError::ElementNotFound` for the first missing control,
    /// after any earlier control has been written.
    pub fn apply(
        &self,
        start: Option<&mut dyn ValueSink>,
        end: Option<&mut dyn ValueSink>,
    ) -> Result<DateRange, InitError> {
        let range = self.compute()?;
        write_control(start, &self.config.start_control, range.start())?;
        write_control(end, &self.config.end_control, range.end())?;
        Ok(range)
    }

    /// Looks up the configured controls in `form` and writes the defaults,
    /// start first.
    ///
    /// # Errors
    /// Same as [`apply`](Self::apply).
    pub fn apply_to<F>(&self, form: &mut F) -> Result<DateRange, InitError>
    where
        F: ControlLookup + ?Sized,
    {
        let range = self.compute()?;
        write_control(
            form.find_control(&self.config.start_control),
            &self.config.start_control,
            range.start(),
        )?;
        write_control(
            form.find_control(&self.config.end_control),
            &self.config.end_control,
            range.end(),
        )?;
        Ok(range)
    }
}

fn write_control(control: Option<&mut dyn ValueSink>, id: &str, date: CalendarDate) -> Result<(), InitError> {
    let Some(control) = control else {
        tracing::warn!(id, "Form control not found");
        return Err(InitError::ElementNotFound { id: id.to_owned() });
    };
    control.set_value(&date.to_string());
    tracing::debug!(id, %date, "Wrote default date");
    Ok(())
}

/// Fills the `start-date` and `end-date` inputs of `form` from the local clock
/// using the default policy.
///
/// # Errors
/// Returns `InitError::ElementNotFound` if either input is missing.
pub fn set_default_dates<F>(form: &mut F) -> Result<DateRange, InitError>
where
    F: ControlLookup + ?Sized,
{
    DefaultDateInitializer::new(InitializerConfig::default()).apply_to(form)
}
