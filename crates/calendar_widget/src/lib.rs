//! A date picker calendar for [`egui`](https://github.com/emilk/egui).
//!
//! The header has previous/next month buttons and two buttons that open a
//! scrollable month picker and a scrollable year picker. The header is a
//! replaceable [`Caption`], the day grid is a [`DayGrid`].
//!
//! All state lives in a [`CalendarState`] that you own:
//!
//! ```
//! use calendar_widget::{Calendar, CalendarState, FixedClock};
//!
//! let clock = FixedClock(chrono::NaiveDate::from_ymd_opt(2024, 6, 15).unwrap());
//! let state = CalendarState::new(&clock);
//! assert_eq!(state.displayed().to_string(), "June 2024");
//!
//! fn ui(ui: &mut egui::Ui, state: &mut CalendarState, clock: &FixedClock) {
//!     ui.add(Calendar::new(state).clock(clock));
//! }
//! ```
//!
//! ## Feature flags
#![cfg_attr(feature = "document-features", doc = document_features::document_features!())]
//!

#![forbid(unsafe_code)]

mod calendar;
mod caption;
mod clock;
mod error;
mod grid;
mod month;
mod options;
mod popover;
mod state;
mod years;

pub use crate::{
    calendar::{selection_text, Calendar},
    caption::{ArrowCaption, Caption, CaptionContext, PickerCaption},
    clock::{Clock, FixedClock, SystemClock},
    error::CalendarError,
    grid::{month_weeks, DayGrid, DayGridEvent, Week},
    month::{long_date, month_abbreviation, month_abbreviations, Direction, YearMonth, MONTH_NAMES},
    options::CalendarOptions,
    popover::{PickerPopover, PopoverOutput},
    state::{CalendarState, Picker},
    years::{YearRange, YEARS_BEFORE, YEAR_SPAN},
};
