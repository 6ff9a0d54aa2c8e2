//! The day grid under the calendar header.

use chrono::{Datelike as _, Days, NaiveDate, Weekday};
use egui::{Button, Grid, Id, Key, Response, RichText, Ui, Vec2};

use crate::{CalendarOptions, YearMonth};

/// One row of the day grid, always seven days long.
#[derive(Debug, PartialEq, Eq)]
pub struct Week {
    pub days: Vec<NaiveDate>,
}

/// The weeks covering `displayed`, each starting on `week_start`.
///
/// The first and last week are padded with days of the adjacent months.
pub fn month_weeks(displayed: YearMonth, week_start: Weekday) -> Vec<Week> {
    let first = displayed.first_day();
    let lead = (first.weekday().num_days_from_monday() + 7 - week_start.num_days_from_monday()) % 7;
    let Some(start) = first.checked_sub_days(Days::new(lead.into())) else {
        return vec![];
    };

    let mut weeks = vec![];
    let mut week = Vec::with_capacity(7);
    for day in start.iter_days() {
        if week.is_empty() && day > first && !displayed.contains(day) {
            break;
        }
        week.push(day);
        if week.len() == 7 {
            weeks.push(Week {
                days: std::mem::take(&mut week),
            });
        }
    }
    weeks
}

fn weekday_label(weekday: Weekday) -> &'static str {
    match weekday {
        Weekday::Mon => "Mo",
        Weekday::Tue => "Tu",
        Weekday::Wed => "We",
        Weekday::Thu => "Th",
        Weekday::Fri => "Fr",
        Weekday::Sat => "Sa",
        Weekday::Sun => "Su",
    }
}

/// What happened in the day grid this frame.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DayGridEvent {
    /// A day was clicked. `None` means the selected day was clicked again.
    Selected(Option<NaiveDate>),

    /// The grid wants to show another month.
    MonthChanged(YearMonth),
}

/// A month of clickable days.
///
/// Owns its own layout and input; everything it wants changed is reported as
/// [`DayGridEvent`]s.
pub struct DayGrid<'a> {
    id: Id,
    displayed: YearMonth,
    selected: Option<NaiveDate>,
    today: NaiveDate,
    options: &'a CalendarOptions,
}

impl<'a> DayGrid<'a> {
    /// `id` must be unique within the parent [`Ui`].
    pub fn new(
        id: Id,
        displayed: YearMonth,
        selected: Option<NaiveDate>,
        today: NaiveDate,
        options: &'a CalendarOptions,
    ) -> Self {
        Self {
            id,
            displayed,
            selected,
            today,
            options,
        }
    }

    /// Draws the grid. Events are in the order they happened.
    pub fn show(self, ui: &mut Ui) -> (Response, Vec<DayGridEvent>) {
        let Self {
            id,
            displayed,
            selected,
            today,
            options,
        } = self;

        let mut events = vec![];
        let cell = Vec2::splat(options.cell_size);

        let response = Grid::new(id)
            .num_columns(7)
            .spacing(Vec2::splat(2.0))
            .min_col_width(options.cell_size)
            .show(ui, |ui| {
                let weekdays = std::iter::successors(Some(options.week_start), |w| Some(w.succ()));
                for weekday in weekdays.take(7) {
                    ui.vertical_centered(|ui| {
                        ui.weak(weekday_label(weekday));
                    });
                }
                ui.end_row();

                for week in month_weeks(displayed, options.week_start) {
                    for day in week.days {
                        let outside = !displayed.contains(day);
                        if outside && !options.show_outside_days {
                            ui.allocate_space(cell);
                            continue;
                        }

                        let mut text = RichText::new(day.day().to_string());
                        if outside {
                            text = text.color(ui.visuals().weak_text_color());
                        }
                        let is_selected = selected == Some(day);
                        let response = ui.add(
                            Button::new(text)
                                .selected(is_selected)
                                .frame(is_selected)
                                .min_size(cell),
                        );

                        if day == today {
                            // Encircle today's date
                            let stroke = ui.visuals().widgets.inactive.fg_stroke;
                            ui.painter().circle_stroke(
                                response.rect.center(),
                                options.cell_size * 0.45,
                                stroke,
                            );
                        }

                        if response.clicked() {
                            events.push(DayGridEvent::Selected((!is_selected).then_some(day)));
                            if outside {
                                events.push(DayGridEvent::MonthChanged(YearMonth::from_date(day)));
                            }
                        }
                    }
                    ui.end_row();
                }
            })
            .response;

        if response.contains_pointer() {
            let (back, forward) =
                ui.input(|i| (i.key_pressed(Key::PageUp), i.key_pressed(Key::PageDown)));
            let step = i32::from(forward) - i32::from(back);
            if step != 0 {
                if let Some(month) = displayed.offset_months(step) {
                    events.push(DayGridEvent::MonthChanged(month));
                }
            }
        }

        (response, events)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ym(year: i32, month0: u32) -> YearMonth {
        YearMonth::new(year, month0).unwrap()
    }

    fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    #[test]
    fn june_2024_starting_sunday() {
        let weeks = month_weeks(ym(2024, 5), Weekday::Sun);
        assert_eq!(weeks.len(), 6);
        assert!(weeks.iter().all(|w| w.days.len() == 7));
        assert_eq!(weeks[0].days[0], date(2024, 5, 26));
        assert_eq!(weeks[0].days[6], date(2024, 6, 1));
        assert_eq!(weeks[5].days[6], date(2024, 7, 6));
    }

    #[test]
    fn month_starting_on_week_start_has_no_lead() {
        // September 2024 starts on a Sunday.
        let weeks = month_weeks(ym(2024, 8), Weekday::Sun);
        assert_eq!(weeks[0].days[0], date(2024, 9, 1));
        assert_eq!(weeks.len(), 5);
    }

    #[test]
    fn monday_start() {
        let weeks = month_weeks(ym(2024, 5), Weekday::Mon);
        assert_eq!(weeks[0].days[0], date(2024, 5, 27));
        assert!(weeks.iter().all(|w| w.days[0].weekday() == Weekday::Mon));
        assert!(weeks.last().unwrap().days.contains(&date(2024, 6, 30)));
    }

    #[test]
    fn february_fits_in_four_weeks() {
        // February 2015 starts on a Sunday and has 28 days.
        let weeks = month_weeks(ym(2015, 1), Weekday::Sun);
        assert_eq!(weeks.len(), 4);
    }
}
