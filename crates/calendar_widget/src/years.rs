use std::ops::RangeInclusive;

use crate::CalendarError;

/// How many years the year picker offers.
pub const YEAR_SPAN: i32 = 100;

/// How many of those lie before the current year.
pub const YEARS_BEFORE: i32 = 50;

/// The fixed, ordered list of years offered by the year picker.
///
/// Computed once from the year the calendar was created in. It does not follow
/// the clock afterwards.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Deserialize, serde::Serialize),
    serde(try_from = "RawYearRange")
)]
pub struct YearRange {
    first: i32,
    len: i32,
}

#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct RawYearRange {
    first: i32,
    len: i32,
}

#[cfg(feature = "serde")]
impl TryFrom<RawYearRange> for YearRange {
    type Error = CalendarError;

    fn try_from(raw: RawYearRange) -> Result<Self, Self::Error> {
        Self::new(raw.first, raw.len)
    }
}

impl YearRange {
    /// [`YEAR_SPAN`] years, starting [`YEARS_BEFORE`] years before `current_year`.
    pub fn around(current_year: i32) -> Self {
        Self {
            first: current_year
                .saturating_sub(YEARS_BEFORE)
                .min(i32::MAX - YEAR_SPAN),
            len: YEAR_SPAN,
        }
    }

    /// `len` years starting at `first`.
    ///
    /// # Errors
    /// If `len` is negative or `first + len` overflows an `i32`.
    pub fn new(first: i32, len: i32) -> Result<Self, CalendarError> {
        if len < 0 || first.checked_add(len).is_none() {
            return Err(CalendarError::InvalidYearRange { first, len });
        }
        Ok(Self { first, len })
    }

    #[inline]
    pub fn first(&self) -> i32 {
        self.first
    }

    #[inline]
    pub fn last(&self) -> i32 {
        self.first.saturating_add(self.len - 1)
    }

    #[inline]
    pub fn len(&self) -> usize {
        usize::try_from(self.len).unwrap_or_default()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Is `year` offered by the picker?
    pub fn contains(&self, year: i32) -> bool {
        self.as_range().contains(&year)
    }

    pub fn as_range(&self) -> RangeInclusive<i32> {
        self.first..=self.last()
    }

    /// The years in ascending order.
    pub fn iter(&self) -> RangeInclusive<i32> {
        self.as_range()
    }
}

impl IntoIterator for &YearRange {
    type Item = i32;
    type IntoIter = RangeInclusive<i32>;

    fn into_iter(self) -> Self::IntoIter {
        self.as_range()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hundred_years_around_current() {
        let years = YearRange::around(2026);
        assert_eq!(years.len(), 100);
        assert_eq!(years.first(), 1976);
        assert_eq!(years.last(), 2075);

        let listed: Vec<i32> = years.iter().collect();
        assert_eq!(listed.len(), 100);
        assert!(listed.windows(2).all(|w| w[1] == w[0] + 1));
    }

    #[test]
    fn containment() {
        let years = YearRange::around(2024);
        assert!(years.contains(1974));
        assert!(years.contains(2073));
        assert!(!years.contains(1973));
        assert!(!years.contains(2074));
    }

    #[test]
    fn rejects_negative_or_overflowing_lengths() {
        assert_eq!(YearRange::new(2000, 10).map(|y| y.last()), Ok(2009));
        assert_eq!(
            YearRange::new(2000, -1),
            Err(CalendarError::InvalidYearRange {
                first: 2000,
                len: -1
            })
        );
        assert!(YearRange::new(i32::MAX, 1).is_err());
    }

    #[cfg(feature = "serde")]
    #[test]
    fn deserialize_validates_length() {
        let parsed: YearRange = ron::from_str("(first: 1974, len: 100)").unwrap();
        assert_eq!(parsed, YearRange::around(2024));
        assert!(ron::from_str::<YearRange>("(first: 1974, len: -5)").is_err());
    }
}
