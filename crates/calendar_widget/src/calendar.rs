use std::hash::Hash;

use chrono::{NaiveDate, Weekday};
use egui::{Frame, Id, Response, Ui, Widget};

use crate::{
    long_date, CalendarOptions, CalendarState, Caption, CaptionContext, Clock, DayGrid,
    DayGridEvent, PickerCaption, SystemClock,
};

/// `Selected date: Sat Jun 15 2024`, or `Selected date: None`.
pub fn selection_text(selected: Option<NaiveDate>) -> String {
    match selected {
        Some(date) => format!("Selected date: {}", long_date(date)),
        None => "Selected date: None".to_owned(),
    }
}

/// A date picker calendar: a header with navigation, a grid of days, and the
/// selected date underneath.
///
/// ```
/// use calendar_widget::{Calendar, CalendarState, SystemClock};
///
/// struct MyApp {
///     calendar: CalendarState,
/// }
///
/// impl MyApp {
///     fn new() -> Self {
///         Self {
///             calendar: CalendarState::new(&SystemClock),
///         }
///     }
///
///     fn ui(&mut self, ui: &mut egui::Ui) {
///         if ui.add(Calendar::new(&mut self.calendar)).changed() {
///             println!("Picked {:?}", self.calendar.selected());
///         }
///     }
/// }
/// ```
///
/// The response is marked as changed when the selected date changes.
pub struct Calendar<'a> {
    state: &'a mut CalendarState,
    clock: &'a dyn Clock,
    caption: Box<dyn Caption + 'a>,
    options: CalendarOptions,
    id_salt: Option<Id>,
}

impl<'a> Calendar<'a> {
    /// A calendar editing `state`, with the default header and options.
    pub fn new(state: &'a mut CalendarState) -> Self {
        Self {
            state,
            clock: &SystemClock,
            caption: Box::new(PickerCaption),
            options: CalendarOptions::default(),
            id_salt: None,
        }
    }

    /// Must be set if multiple calendars are in the same Ui.
    #[inline]
    pub fn id_salt(mut self, id_salt: impl Hash) -> Self {
        self.id_salt = Some(Id::new(id_salt));
        self
    }

    /// Where "today" comes from. (Default: [`SystemClock`])
    #[inline]
    pub fn clock(mut self, clock: &'a dyn Clock) -> Self {
        self.clock = clock;
        self
    }

    /// Replace the header above the day grid. (Default: [`PickerCaption`])
    #[inline]
    pub fn caption(mut self, caption: impl Caption + 'a) -> Self {
        self.caption = Box::new(caption);
        self
    }

    #[inline]
    pub fn options(mut self, options: CalendarOptions) -> Self {
        self.options = options;
        self
    }

    /// First column of the day grid. (Default: Sunday)
    #[inline]
    pub fn week_start(mut self, week_start: Weekday) -> Self {
        self.options.week_start = week_start;
        self
    }

    /// Show greyed out days of the adjacent months. (Default: true)
    #[inline]
    pub fn show_outside_days(mut self, show_outside_days: bool) -> Self {
        self.options.show_outside_days = show_outside_days;
        self
    }

    /// Show the `Selected date: …` line. (Default: true)
    #[inline]
    pub fn show_selection_text(mut self, show_selection_text: bool) -> Self {
        self.options.show_selection_text = show_selection_text;
        self
    }
}

impl Widget for Calendar<'_> {
    fn ui(self, ui: &mut Ui) -> Response {
        let Self {
            state,
            clock,
            mut caption,
            options,
            id_salt,
        } = self;

        let id = ui.make_persistent_id(id_salt.unwrap_or_else(|| Id::new("calendar")));
        let width = 7.0 * options.cell_size + 6.0 * 2.0;
        let selected_before = state.selected();

        let mut response = ui
            .vertical(|ui| {
                Frame::group(ui.style()).show(ui, |ui| {
                    ui.set_width(width);

                    let ctx = CaptionContext {
                        id: id.with("caption"),
                        options: options.clone(),
                        width,
                    };
                    caption.ui(ui, state, &ctx);
                    ui.add_space(4.0);

                    let (_, events) = DayGrid::new(
                        id.with("grid"),
                        state.displayed(),
                        state.selected(),
                        clock.today(),
                        &options,
                    )
                    .show(ui);

                    for event in events {
                        match event {
                            DayGridEvent::Selected(day) => state.select_date(day, clock),
                            DayGridEvent::MonthChanged(month) => state.change_month(month),
                        }
                    }
                });

                if options.show_selection_text {
                    ui.add_space(8.0);
                    ui.label(selection_text(state.selected()));
                }
            })
            .response;

        if state.selected() != selected_before {
            response.mark_changed();
        }
        response
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn selection_line() {
        let date = NaiveDate::from_ymd_opt(2024, 6, 15).unwrap();
        assert_eq!(selection_text(Some(date)), "Selected date: Sat Jun 15 2024");
        assert_eq!(selection_text(None), "Selected date: None");
    }
}
