use chrono::Weekday;

/// Look and behavior of a [`crate::Calendar`].
///
/// Usually set through the builder methods on [`crate::Calendar`].
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct CalendarOptions {
    /// First column of the day grid.
    pub week_start: Weekday,

    /// Fill the first and last week with greyed out days of the adjacent months.
    pub show_outside_days: bool,

    /// The popover lists scroll once they are taller than this.
    pub popover_max_height: f32,

    /// Show the `Selected date: …` line under the grid.
    pub show_selection_text: bool,

    /// Size of one day cell, and the height of a popover entry.
    pub cell_size: f32,
}

impl Default for CalendarOptions {
    fn default() -> Self {
        Self {
            week_start: Weekday::Sun,
            show_outside_days: true,
            popover_max_height: 256.0,
            show_selection_text: true,
            cell_size: 32.0,
        }
    }
}
