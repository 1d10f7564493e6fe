use eframe::egui::{self, Button, Color32, RichText, TextEdit, Ui};

use crate::state::{AppState, SearchTrigger};

const HEADING: &str = "Search IPL Players by Name";
const HEADING_FILL: Color32 = Color32::from_rgb(0x4C, 0xAF, 0x50);

// ---------------------------------------------------------------------------
// Heading band
// ---------------------------------------------------------------------------

/// White bold title on a green band across the top of the window.
pub fn heading(ui: &mut Ui) {
    egui::Frame::default()
        .fill(HEADING_FILL)
        .inner_margin(10.0)
        .corner_radius(5.0)
        .show(ui, |ui: &mut Ui| {
            ui.vertical_centered(|ui: &mut Ui| {
                ui.label(
                    RichText::new(HEADING)
                        .size(24.0)
                        .strong()
                        .color(Color32::WHITE),
                );
            });
        });
}

// ---------------------------------------------------------------------------
// Name field + Search button
// ---------------------------------------------------------------------------

/// Render the query field and the Search button. Returns a trigger when
/// the button was clicked this frame.
pub fn search_bar(ui: &mut Ui, state: &mut AppState) -> Option<SearchTrigger> {
    let field = ui.add(
        TextEdit::singleline(&mut state.query)
            .hint_text("Player name")
            .desired_width(f32::INFINITY),
    );
    if state.focus_query {
        field.request_focus();
        state.focus_query = false;
    }

    let button = Button::new(RichText::new("Search").strong());
    let clicked = ui
        .add_sized([ui.available_width(), 28.0], button)
        .clicked();

    clicked.then_some(SearchTrigger::Button)
}
