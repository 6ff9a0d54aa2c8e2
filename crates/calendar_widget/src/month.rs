use chrono::{Datelike as _, NaiveDate};

use crate::CalendarError;

/// Full English month names, indexed by 0-based month.
pub const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// The first three letters of each entry in [`MONTH_NAMES`].
pub fn month_abbreviations() -> [&'static str; 12] {
    MONTH_NAMES.map(|name| &name[..3])
}

/// `"Jun"` for `5`. Panics on an index outside `0..=11`.
pub fn month_abbreviation(month0: u32) -> &'static str {
    &MONTH_NAMES[month0 as usize][..3]
}

/// The long human readable form used for the selection line, e.g. `Sat Jun 15 2024`.
pub fn long_date(date: NaiveDate) -> String {
    date.format("%a %b %d %Y").to_string()
}

/// Which way to step through the calendar.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Towards earlier months.
    Backward,

    /// Towards later months.
    Forward,
}

impl Direction {
    /// `-1` or `1`.
    #[inline]
    pub fn offset(self) -> i32 {
        match self {
            Self::Backward => -1,
            Self::Forward => 1,
        }
    }
}

/// A year plus a 0-based month: what the calendar grid is showing.
///
/// Always representable as a [`NaiveDate`], so [`Self::first_day`] cannot fail.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Deserialize, serde::Serialize),
    serde(try_from = "RawYearMonth")
)]
pub struct YearMonth {
    year: i32,
    month0: u32,
}

/// Unchecked fields, validated by [`YearMonth::new`] before use.
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct RawYearMonth {
    year: i32,
    month0: u32,
}

#[cfg(feature = "serde")]
impl TryFrom<RawYearMonth> for YearMonth {
    type Error = CalendarError;

    fn try_from(raw: RawYearMonth) -> Result<Self, Self::Error> {
        Self::new(raw.year, raw.month0)
    }
}

impl YearMonth {
    /// # Errors
    /// If `month0` is not in `0..=11`, or chrono cannot represent the year.
    pub fn new(year: i32, month0: u32) -> Result<Self, CalendarError> {
        if month0 > 11 {
            return Err(CalendarError::InvalidMonth(month0));
        }
        if NaiveDate::from_ymd_opt(year, month0 + 1, 1).is_none() {
            return Err(CalendarError::YearOutOfRange(year));
        }
        Ok(Self { year, month0 })
    }

    /// The month `date` falls in.
    pub fn from_date(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month0: date.month0(),
        }
    }

    #[inline]
    pub fn year(self) -> i32 {
        self.year
    }

    /// 0-based month, `0` is January.
    #[inline]
    pub fn month0(self) -> u32 {
        self.month0
    }

    /// The 1st of the month.
    pub fn first_day(self) -> NaiveDate {
        NaiveDate::from_ymd_opt(self.year, self.month0 + 1, 1).unwrap_or(NaiveDate::MIN)
    }

    /// Is `date` in this month?
    pub fn contains(self, date: NaiveDate) -> bool {
        date.year() == self.year && date.month0() == self.month0
    }

    /// Step `months` forward (or backward if negative), rolling over year boundaries.
    ///
    /// Returns `None` if the result would leave the range chrono can represent.
    pub fn offset_months(self, months: i32) -> Option<Self> {
        let total = i64::from(self.year) * 12 + i64::from(self.month0) + i64::from(months);
        let year = i32::try_from(total.div_euclid(12)).ok()?;
        let month0 = u32::try_from(total.rem_euclid(12)).ok()?;
        Self::new(year, month0).ok()
    }

    /// Step `years` forward (or backward if negative), keeping the month.
    pub fn offset_years(self, years: i32) -> Option<Self> {
        let year = self.year.checked_add(years)?;
        Self::new(year, self.month0).ok()
    }

    /// # Errors
    /// If `month0` is not in `0..=11`.
    pub fn with_month(self, month0: u32) -> Result<Self, CalendarError> {
        Self::new(self.year, month0)
    }

    /// # Errors
    /// If chrono cannot represent `year`.
    pub fn with_year(self, year: i32) -> Result<Self, CalendarError> {
        Self::new(year, self.month0)
    }
}

impl std::fmt::Display for YearMonth {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", MONTH_NAMES[self.month0 as usize], self.year)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ym(year: i32, month0: u32) -> YearMonth {
        YearMonth::new(year, month0).unwrap()
    }

    #[test]
    fn abbreviations_are_three_letters() {
        let abbreviations = month_abbreviations();
        assert_eq!(abbreviations[0], "Jan");
        assert_eq!(abbreviations[5], "Jun");
        assert_eq!(abbreviations[11], "Dec");
        assert!(abbreviations.iter().all(|a| a.len() == 3));
        assert_eq!(month_abbreviation(8), "Sep");
    }

    #[test]
    fn rejects_bad_months() {
        assert_eq!(YearMonth::new(2024, 12), Err(CalendarError::InvalidMonth(12)));
        assert_eq!(
            YearMonth::new(i32::MAX, 0),
            Err(CalendarError::YearOutOfRange(i32::MAX))
        );
    }

    #[test]
    fn month_offsets_roll_over_years() {
        assert_eq!(ym(2024, 11).offset_months(1), Some(ym(2025, 0)));
        assert_eq!(ym(2024, 0).offset_months(-1), Some(ym(2023, 11)));
        assert_eq!(ym(2024, 5).offset_months(1), Some(ym(2024, 6)));
        assert_eq!(ym(2024, 5).offset_months(-18), Some(ym(2022, 11)));
        assert_eq!(ym(2024, 5).offset_months(i32::MAX), None);
    }

    #[test]
    fn year_offsets_keep_month() {
        assert_eq!(ym(2024, 1).offset_years(1), Some(ym(2025, 1)));
        assert_eq!(ym(2024, 1).offset_years(-1), Some(ym(2023, 1)));
    }

    #[test]
    fn long_form_matches_browser_date_string() {
        let date = NaiveDate::from_ymd_opt(2024, 6, 5).unwrap();
        assert_eq!(long_date(date), "Wed Jun 05 2024");
        assert_eq!(ym(2024, 5).to_string(), "June 2024");
    }

    #[cfg(feature = "serde")]
    #[test]
    fn deserialize_validates_month() {
        let parsed: YearMonth = ron::from_str("(year: 2024, month0: 11)").unwrap();
        assert_eq!(parsed, ym(2024, 11));

        let err = ron::from_str::<YearMonth>("(year: 2024, month0: 12)").unwrap_err();
        assert!(err.to_string().contains("month index 12"), "{err}");

        assert!(ron::from_str::<YearMonth>("(year: 2147483647, month0: 0)").is_err());
    }
}
