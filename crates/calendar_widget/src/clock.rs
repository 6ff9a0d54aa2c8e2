use chrono::NaiveDate;

/// Where the calendar gets "today" from.
///
/// The widget asks the clock when it is created (for the default selection and
/// the year range) and whenever a deselect has to be coerced back to today.
pub trait Clock {
    /// The current local date.
    fn today(&self) -> NaiveDate;
}

/// The local wall clock.
#[derive(Clone, Copy, Debug, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        chrono::Local::now().date_naive()
    }
}

/// Always reports the same day. Useful for tests and screenshots.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FixedClock(pub NaiveDate);

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.0
    }
}
