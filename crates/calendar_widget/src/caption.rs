//! The header ("caption") slot of the calendar.
//!
//! [`crate::Calendar`] draws whatever [`Caption`] it is given above the day grid.
//! [`PickerCaption`] is the default.

use egui::{Button, Id, Response, RichText, Ui, Vec2};

use crate::{
    CalendarOptions, CalendarState, Direction, Picker, PickerPopover, month_abbreviation,
    month_abbreviations,
};

/// What a caption gets to know about the calendar it sits in.
pub struct CaptionContext {
    /// Unique per calendar, salt child ids with it.
    pub id: Id,

    pub options: CalendarOptions,

    /// Width of the day grid below.
    pub width: f32,
}

/// Draws the header of a [`crate::Calendar`].
///
/// Implemented for closures, so a one-off header needs no new type:
///
/// ```
/// use calendar_widget::{Calendar, CalendarState, CaptionContext, Direction};
///
/// fn calendar_ui(ui: &mut egui::Ui, state: &mut CalendarState) {
///     let calendar = Calendar::new(state).caption(
///         |ui: &mut egui::Ui, state: &mut CalendarState, _: &CaptionContext| {
///             if ui.button("Next").clicked() {
///                 state.navigate_month(Direction::Forward);
///             }
///         },
///     );
///     ui.add(calendar);
/// }
/// ```
pub trait Caption {
    /// Draw the header. Navigation goes straight into `state`.
    fn ui(&mut self, ui: &mut Ui, state: &mut CalendarState, ctx: &CaptionContext);
}

impl<F> Caption for F
where
    F: FnMut(&mut Ui, &mut CalendarState, &CaptionContext),
{
    fn ui(&mut self, ui: &mut Ui, state: &mut CalendarState, ctx: &CaptionContext) {
        self(ui, state, ctx);
    }
}

const ARROW_SIZE: f32 = 28.0;
const MONTH_BUTTON_WIDTH: f32 = 44.0;
const YEAR_BUTTON_WIDTH: f32 = 56.0;

fn arrow_button(ui: &mut Ui, direction: Direction) -> Response {
    let (icon, hover) = match direction {
        Direction::Backward => ("⏴", "Previous month"),
        Direction::Forward => ("⏵", "Next month"),
    };
    ui.add(Button::new(icon).min_size(Vec2::splat(ARROW_SIZE)))
        .on_hover_text(hover)
}

/// Lays out `prev`, a centered middle part `middle_width` wide, and `next`.
fn arrows_around(
    ui: &mut Ui,
    state: &mut CalendarState,
    ctx: &CaptionContext,
    middle_width: f32,
    middle: impl FnOnce(&mut Ui, &mut CalendarState),
) {
    ui.horizontal(|ui| {
        let spacing = ui.spacing().item_spacing.x;
        let gap = ((ctx.width - 2.0 * ARROW_SIZE - middle_width) / 2.0 - 2.0 * spacing).max(0.0);

        if arrow_button(ui, Direction::Backward).clicked() {
            state.navigate_month(Direction::Backward);
        }
        ui.add_space(gap);
        middle(ui, state);
        ui.add_space(gap);
        if arrow_button(ui, Direction::Forward).clicked() {
            state.navigate_month(Direction::Forward);
        }
    });
}

/// Previous and next month buttons around two buttons that open a month
/// and a year picker.
#[derive(Clone, Copy, Debug, Default)]
pub struct PickerCaption;

impl PickerCaption {
    fn month_picker(ui: &mut Ui, state: &mut CalendarState, ctx: &CaptionContext) {
        let displayed = state.displayed();
        let trigger = ui.add(
            Button::new(RichText::new(month_abbreviation(displayed.month0())).strong())
                .selected(state.month_picker_open())
                .min_size(Vec2::new(MONTH_BUTTON_WIDTH, ARROW_SIZE)),
        );
        if trigger.clicked() {
            state.toggle(Picker::Month);
        }
        if !state.month_picker_open() {
            return;
        }

        let months = (0..).zip(month_abbreviations().map(str::to_owned));
        let output = PickerPopover::new(ctx.id, Picker::Month, months, displayed.month0())
            .width(MONTH_BUTTON_WIDTH + 20.0)
            .show(ui, &trigger, state, &ctx.options);
        if let Some(month0) = output.picked {
            if let Err(err) = state.select_month(month0) {
                log::warn!("{err}");
            }
        } else if output.dismissed {
            state.set_month_picker_open(false);
        }
    }

    fn year_picker(ui: &mut Ui, state: &mut CalendarState, ctx: &CaptionContext) {
        let displayed = state.displayed();
        let trigger = ui.add(
            Button::new(RichText::new(displayed.year().to_string()).strong())
                .selected(state.year_picker_open())
                .min_size(Vec2::new(YEAR_BUTTON_WIDTH, ARROW_SIZE)),
        );
        if trigger.clicked() {
            state.toggle(Picker::Year);
        }
        if !state.year_picker_open() {
            return;
        }

        let years = state.years().iter().map(|year| (year, year.to_string()));
        let output = PickerPopover::new(ctx.id, Picker::Year, years, displayed.year())
            .width(YEAR_BUTTON_WIDTH + 20.0)
            .show(ui, &trigger, state, &ctx.options);
        if let Some(year) = output.picked {
            if let Err(err) = state.select_year(year) {
                log::warn!("{err}");
            }
        } else if output.dismissed {
            state.set_year_picker_open(false);
        }
    }
}

impl Caption for PickerCaption {
    fn ui(&mut self, ui: &mut Ui, state: &mut CalendarState, ctx: &CaptionContext) {
        let middle_width = MONTH_BUTTON_WIDTH + ui.spacing().item_spacing.x + YEAR_BUTTON_WIDTH;
        arrows_around(ui, state, ctx, middle_width, |ui, state| {
            Self::month_picker(ui, state, ctx);
            Self::year_picker(ui, state, ctx);
        });
    }
}

/// Previous and next month buttons around a plain `June 2024` label.
#[derive(Clone, Copy, Debug, Default)]
pub struct ArrowCaption;

impl Caption for ArrowCaption {
    fn ui(&mut self, ui: &mut Ui, state: &mut CalendarState, ctx: &CaptionContext) {
        let text = state.displayed().to_string();
        let galley_width = ui
            .painter()
            .layout_no_wrap(
                text.clone(),
                egui::TextStyle::Button.resolve(ui.style()),
                ui.visuals().text_color(),
            )
            .size()
            .x;
        arrows_around(ui, state, ctx, galley_width, |ui, _| {
            ui.strong(text);
        });
    }
}
