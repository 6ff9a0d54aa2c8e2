/// Errors from constructing or changing the displayed month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum CalendarError {
    /// Months are 0-based, so only `0..=11` is valid.
    #[error("month index {0} is out of range 0..=11")]
    InvalidMonth(u32),

    /// The year cannot be represented by [`chrono::NaiveDate`].
    #[error("year {0} is outside the supported calendar range")]
    YearOutOfRange(i32),

    /// A year list with a negative length, or one running past `i32::MAX`.
    #[error("year range starting at {first} with length {len} is invalid")]
    InvalidYearRange { first: i32, len: i32 },
}
