//! The page around the calendar: a full window with the calendar in the middle.

use calendar_widget::{Calendar, CalendarState, Clock, SystemClock};

/// An [`eframe::App`] that shows one [`Calendar`] centered in the window.
pub struct PageShell {
    calendar: CalendarState,
    clock: Box<dyn Clock>,
}

impl Default for PageShell {
    fn default() -> Self {
        Self::new(Box::new(SystemClock))
    }
}

impl PageShell {
    /// A fresh calendar, selecting and showing today according to `clock`.
    pub fn new(clock: Box<dyn Clock>) -> Self {
        let calendar = CalendarState::new(clock.as_ref());
        log::debug!("Calendar mounted on {}", calendar.displayed());
        Self { calendar, clock }
    }

    /// The calendar state, as the last frame left it.
    pub fn calendar(&self) -> &CalendarState {
        &self.calendar
    }

    /// Everything but the window: handy for tests.
    pub fn show(&mut self, ctx: &egui::Context) {
        egui::CentralPanel::default().show(ctx, |_ui| {});

        egui::Area::new(egui::Id::new("page_shell"))
            .anchor(egui::Align2::CENTER_CENTER, egui::Vec2::ZERO)
            .show(ctx, |ui| {
                ui.add(Calendar::new(&mut self.calendar).clock(self.clock.as_ref()));
            });
    }
}

impl eframe::App for PageShell {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.show(ctx);
    }

    // Required by eframe 0.34; all drawing happens in `update`, which eframe still calls first.
    fn ui(&mut self, _ui: &mut egui::Ui, _frame: &mut eframe::Frame) {}
}
