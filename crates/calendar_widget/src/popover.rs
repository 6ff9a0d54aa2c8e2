use egui::{
    Align, Align2, Area, Button, Frame, Id, InnerResponse, Key, Layout, Modifiers, Order,
    Response, ScrollArea, Ui, UiKind, Vec2, scroll_area::ScrollBarVisibility,
};

use crate::{CalendarOptions, CalendarState, Picker};

/// What the user did with an open popover this frame.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PopoverOutput<T> {
    /// An entry was clicked.
    pub picked: Option<T>,

    /// Clicked outside, or pressed Escape.
    pub dismissed: bool,
}

/// A scrollable list of buttons shown under a trigger button.
///
/// The entry equal to `current` is highlighted. If the state holds a scroll
/// request for `picker`, that entry is scrolled to the middle of the list.
pub struct PickerPopover<T> {
    id: Id,
    picker: Picker,
    entries: Vec<(T, String)>,
    current: T,
    width: f32,
}

impl<T: Copy + PartialEq> PickerPopover<T> {
    /// `id` must be unique per calendar, e.g. [`crate::CaptionContext::id`].
    pub fn new(
        id: Id,
        picker: Picker,
        entries: impl IntoIterator<Item = (T, String)>,
        current: T,
    ) -> Self {
        Self {
            id: id.with(picker),
            picker,
            entries: entries.into_iter().collect(),
            current,
            width: 80.0,
        }
    }

    #[inline]
    pub fn width(mut self, width: f32) -> Self {
        self.width = width;
        self
    }

    /// Shows the list below `trigger` and reports what happened.
    ///
    /// Escape is consumed, so it closes only one popover per press.
    pub fn show(
        self,
        ui: &Ui,
        trigger: &Response,
        state: &mut CalendarState,
        options: &CalendarOptions,
    ) -> PopoverOutput<T> {
        let Self {
            id,
            picker,
            entries,
            current,
            width,
        } = self;

        let InnerResponse {
            inner: picked,
            response: area_response,
        } = Area::new(id)
            .kind(UiKind::Picker)
            .order(Order::Foreground)
            .pivot(Align2::CENTER_TOP)
            .fixed_pos(trigger.rect.center_bottom() + Vec2::new(0.0, 4.0))
            .show(ui.ctx(), |ui| {
                Frame::popup(ui.style())
                    .show(ui, |ui| {
                        ui.set_width(width);

                        // The first frame of a new area only measures it, scrolling then would be lost.
                        let scroll_to_current =
                            !ui.is_sizing_pass() && state.take_scroll_request(picker);

                        ScrollArea::vertical()
                            .id_salt(id.with("list"))
                            .max_height(options.popover_max_height)
                            .scroll_bar_visibility(ScrollBarVisibility::AlwaysHidden)
                            .show(ui, |ui| {
                                ui.with_layout(Layout::top_down_justified(Align::Center), |ui| {
                                    list_ui(ui, entries, current, scroll_to_current, options)
                                })
                                .inner
                            })
                            .inner
                    })
                    .inner
            });

        let dismissed = picked.is_none()
            && !trigger.clicked()
            && (area_response.clicked_elsewhere()
                || ui
                    .ctx()
                    .input_mut(|i| i.consume_key(Modifiers::NONE, Key::Escape)));

        PopoverOutput { picked, dismissed }
    }
}

fn list_ui<T: Copy + PartialEq>(
    ui: &mut Ui,
    entries: Vec<(T, String)>,
    current: T,
    scroll_to_current: bool,
    options: &CalendarOptions,
) -> Option<T> {
    let mut picked = None;
    let mut found = false;
    for (value, label) in entries {
        let is_current = value == current;
        let response = ui.add(
            Button::new(label)
                .selected(is_current)
                .frame(is_current)
                .min_size(Vec2::new(0.0, options.cell_size)),
        );
        if is_current && scroll_to_current {
            response.scroll_to_me(Some(Align::Center));
            found = true;
        }
        if response.clicked() {
            picked = Some(value);
        }
    }
    if scroll_to_current && !found {
        log::trace!("No entry to scroll to");
    }
    picked
}
