use chrono::{Datelike as _, NaiveDate};

use crate::{CalendarError, Clock, Direction, YearMonth, YearRange};

/// One of the two popovers in the calendar header.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Picker {
    Month,
    Year,
}

/// Everything a [`crate::Calendar`] remembers between frames.
///
/// All changes go through the methods below so that the pickers get a scroll
/// request whenever they open, or the displayed month moves while they are open.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
pub struct CalendarState {
    selected: Option<NaiveDate>,
    displayed: YearMonth,
    month_picker_open: bool,
    year_picker_open: bool,
    years: YearRange,

    #[cfg_attr(feature = "serde", serde(skip))]
    month_scroll_pending: bool,

    #[cfg_attr(feature = "serde", serde(skip))]
    year_scroll_pending: bool,
}

impl CalendarState {
    /// Selects and displays today. The year range is fixed from here on.
    pub fn new(clock: &dyn Clock) -> Self {
        let today = clock.today();
        Self {
            selected: Some(today),
            displayed: YearMonth::from_date(today),
            month_picker_open: false,
            year_picker_open: false,
            years: YearRange::around(today.year()),
            month_scroll_pending: false,
            year_scroll_pending: false,
        }
    }

    #[inline]
    pub fn selected(&self) -> Option<NaiveDate> {
        self.selected
    }

    #[inline]
    pub fn displayed(&self) -> YearMonth {
        self.displayed
    }

    #[inline]
    pub fn years(&self) -> &YearRange {
        &self.years
    }

    /// Is the popover of `picker` showing?
    pub fn is_open(&self, picker: Picker) -> bool {
        match picker {
            Picker::Month => self.month_picker_open,
            Picker::Year => self.year_picker_open,
        }
    }

    #[inline]
    pub fn month_picker_open(&self) -> bool {
        self.month_picker_open
    }

    #[inline]
    pub fn year_picker_open(&self) -> bool {
        self.year_picker_open
    }

    /// Select a day. A deselect (`None`) falls back to today.
    pub fn select_date(&mut self, day: Option<NaiveDate>, clock: &dyn Clock) {
        let day = day.unwrap_or_else(|| clock.today());
        log::debug!("Selected {day}");
        self.selected = Some(day);
    }

    /// Show the previous or next month.
    pub fn navigate_month(&mut self, direction: Direction) {
        if let Some(displayed) = self.displayed.offset_months(direction.offset()) {
            self.set_displayed(displayed);
        } else {
            log::warn!("Cannot move {direction:?} from {}", self.displayed);
        }
    }

    /// Show the same month in the previous or next year.
    pub fn navigate_year(&mut self, direction: Direction) {
        if let Some(displayed) = self.displayed.offset_years(direction.offset()) {
            self.set_displayed(displayed);
        } else {
            log::warn!("Cannot move a year {direction:?} from {}", self.displayed);
        }
    }

    /// Pick a month (0-based) from the month popover, keeping the year.
    ///
    /// Closes the month popover.
    ///
    /// # Errors
    /// If `month0` is not in `0..=11`. Nothing changes in that case.
    pub fn select_month(&mut self, month0: u32) -> Result<(), CalendarError> {
        let displayed = self.displayed.with_month(month0)?;
        self.set_displayed(displayed);
        self.set_open(Picker::Month, false);
        Ok(())
    }

    /// Pick a year from the year popover, keeping the month.
    ///
    /// Closes the year popover.
    ///
    /// # Errors
    /// If chrono cannot represent `year`. Nothing changes in that case.
    pub fn select_year(&mut self, year: i32) -> Result<(), CalendarError> {
        let displayed = self.displayed.with_year(year)?;
        self.set_displayed(displayed);
        self.set_open(Picker::Year, false);
        Ok(())
    }

    /// The grid moved to another month on its own, e.g. a click on a greyed out day.
    pub fn change_month(&mut self, displayed: YearMonth) {
        self.set_displayed(displayed);
    }

    pub fn set_month_picker_open(&mut self, open: bool) {
        self.set_open(Picker::Month, open);
    }

    pub fn set_year_picker_open(&mut self, open: bool) {
        self.set_open(Picker::Year, open);
    }

    /// Open `picker` if closed, close it if open.
    pub fn toggle(&mut self, picker: Picker) {
        self.set_open(picker, !self.is_open(picker));
    }

    /// Opening one picker leaves the other one alone.
    pub fn set_open(&mut self, picker: Picker, open: bool) {
        let (flag, pending) = match picker {
            Picker::Month => (&mut self.month_picker_open, &mut self.month_scroll_pending),
            Picker::Year => (&mut self.year_picker_open, &mut self.year_scroll_pending),
        };
        if *flag == open {
            return;
        }
        log::debug!("{picker:?} picker open: {open}");
        *flag = open;
        // Opening scrolls to the displayed entry, closing drops any stale request.
        *pending = open;
        if open {
            log::trace!("Scroll requested for {picker:?} picker");
        }
    }

    /// Is there a scroll request waiting for the next render of this picker?
    pub fn scroll_pending(&self, picker: Picker) -> bool {
        match picker {
            Picker::Month => self.month_scroll_pending,
            Picker::Year => self.year_scroll_pending,
        }
    }

    /// Consume the scroll request for `picker`, if any.
    pub(crate) fn take_scroll_request(&mut self, picker: Picker) -> bool {
        let pending = match picker {
            Picker::Month => &mut self.month_scroll_pending,
            Picker::Year => &mut self.year_scroll_pending,
        };
        std::mem::take(pending)
    }

    fn set_displayed(&mut self, displayed: YearMonth) {
        if self.displayed == displayed {
            return;
        }
        log::debug!("Displaying {displayed}");
        self.displayed = displayed;

        if self.month_picker_open {
            self.month_scroll_pending = true;
        }
        if self.year_picker_open {
            self.year_scroll_pending = true;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::FixedClock;

    fn clock() -> FixedClock {
        FixedClock(NaiveDate::from_ymd_opt(2024, 6, 15).unwrap())
    }

    fn ym(year: i32, month0: u32) -> YearMonth {
        YearMonth::new(year, month0).unwrap()
    }

    #[test]
    fn starts_on_today() {
        let state = CalendarState::new(&clock());
        assert_eq!(state.selected(), Some(clock().0));
        assert_eq!(state.displayed(), ym(2024, 5));
        assert!(!state.month_picker_open());
        assert!(!state.year_picker_open());
        assert_eq!(state.years().first(), 1974);
        assert_eq!(state.years().last(), 2073);
    }

    #[test]
    fn deselect_falls_back_to_today() {
        let mut state = CalendarState::new(&clock());
        let day = NaiveDate::from_ymd_opt(2024, 6, 3).unwrap();
        state.select_date(Some(day), &clock());
        assert_eq!(state.selected(), Some(day));

        state.select_date(None, &clock());
        assert_eq!(state.selected(), Some(clock().0));
    }

    #[test]
    fn selection_does_not_move_the_display() {
        let mut state = CalendarState::new(&clock());
        let day = NaiveDate::from_ymd_opt(2019, 2, 3).unwrap();
        state.select_date(Some(day), &clock());
        assert_eq!(state.displayed(), ym(2024, 5));
    }

    #[test]
    fn month_navigation_rolls_years() {
        let mut state = CalendarState::new(&clock());
        state.change_month(ym(2024, 11));
        state.navigate_month(Direction::Forward);
        assert_eq!(state.displayed(), ym(2025, 0));
        state.navigate_month(Direction::Backward);
        state.navigate_month(Direction::Backward);
        assert_eq!(state.displayed(), ym(2024, 10));

        state.change_month(ym(2024, 0));
        state.navigate_month(Direction::Backward);
        assert_eq!(state.displayed(), ym(2023, 11));
    }

    #[test]
    fn year_navigation_keeps_month() {
        let mut state = CalendarState::new(&clock());
        state.navigate_year(Direction::Forward);
        assert_eq!(state.displayed(), ym(2025, 5));
        state.navigate_year(Direction::Backward);
        state.navigate_year(Direction::Backward);
        assert_eq!(state.displayed(), ym(2023, 5));
    }

    #[test]
    fn selecting_a_month_closes_its_picker() {
        let mut state = CalendarState::new(&clock());
        state.set_month_picker_open(true);
        state.select_month(2).unwrap();
        assert_eq!(state.displayed(), ym(2024, 2));
        assert!(!state.month_picker_open());
        assert!(!state.scroll_pending(Picker::Month));
    }

    #[test]
    fn invalid_month_changes_nothing() {
        let mut state = CalendarState::new(&clock());
        state.set_month_picker_open(true);
        assert_eq!(state.select_month(12), Err(CalendarError::InvalidMonth(12)));
        assert_eq!(state.displayed(), ym(2024, 5));
        assert!(state.month_picker_open());
    }

    #[test]
    fn selecting_a_year_closes_its_picker() {
        let mut state = CalendarState::new(&clock());
        state.set_year_picker_open(true);
        state.select_year(1999).unwrap();
        assert_eq!(state.displayed(), ym(1999, 5));
        assert!(!state.year_picker_open());
    }

    #[test]
    fn pickers_are_independent() {
        let mut state = CalendarState::new(&clock());
        state.set_month_picker_open(true);
        state.set_year_picker_open(true);
        assert!(state.month_picker_open());
        assert!(state.year_picker_open());

        state.toggle(Picker::Month);
        assert!(!state.month_picker_open());
        assert!(state.year_picker_open());
    }

    #[test]
    fn opening_requests_a_scroll() {
        let mut state = CalendarState::new(&clock());
        assert!(!state.scroll_pending(Picker::Year));

        state.set_year_picker_open(true);
        assert!(state.scroll_pending(Picker::Year));
        assert!(!state.scroll_pending(Picker::Month));

        assert!(state.take_scroll_request(Picker::Year));
        assert!(!state.take_scroll_request(Picker::Year));

        // Re-opening an open picker is not a transition.
        state.set_year_picker_open(true);
        assert!(!state.scroll_pending(Picker::Year));
    }

    #[test]
    fn moving_while_open_requests_a_scroll() {
        let mut state = CalendarState::new(&clock());
        state.set_month_picker_open(true);
        state.set_year_picker_open(true);
        state.take_scroll_request(Picker::Month);
        state.take_scroll_request(Picker::Year);

        state.navigate_month(Direction::Forward);
        assert!(state.scroll_pending(Picker::Month));
        assert!(state.scroll_pending(Picker::Year));

        // Picking a month closes its own picker, but the year list follows along.
        state.take_scroll_request(Picker::Year);
        state.select_month(11).unwrap();
        assert!(!state.month_picker_open());
        assert!(!state.scroll_pending(Picker::Month));
        assert!(state.scroll_pending(Picker::Year));
    }

    #[test]
    fn closed_pickers_get_no_scroll() {
        let mut state = CalendarState::new(&clock());
        state.navigate_month(Direction::Forward);
        assert!(!state.scroll_pending(Picker::Month));
        assert!(!state.scroll_pending(Picker::Year));
    }
}
