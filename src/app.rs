use eframe::egui;

use crate::data::adapter::TableModel;
use crate::state::{AppState, SearchTrigger};
use crate::ui::splash::Splash;
use crate::ui::{grid, notice, panels};

// ---------------------------------------------------------------------------
// eframe App implementation
// ---------------------------------------------------------------------------

pub struct PlayerSearchApp {
    pub state: AppState,
    splash: Option<Splash>,
}

impl PlayerSearchApp {
    pub fn new(state: AppState, splash: Option<Splash>) -> Self {
        Self { state, splash }
    }

    /// Paint the splash while it lasts. Returns `true` if it covered this
    /// frame.
    fn splash_frame(&mut self, ctx: &egui::Context) -> bool {
        let Some(splash) = &self.splash else {
            return false;
        };
        match splash.remaining() {
            Some(remaining) => {
                splash.show(ctx);
                ctx.request_repaint_after(remaining);
                true
            }
            None => {
                self.splash = None;
                false
            }
        }
    }
}

impl eframe::App for PlayerSearchApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if self.splash_frame(ctx) {
            return;
        }

        let mut trigger = None;

        // ---- Notice or confirm key ----
        // egui reports both Return and keypad Enter as `Key::Enter`.
        if let Some(open) = &self.state.notice {
            if notice::show_notice(ctx, open) {
                self.state.dismiss_notice();
            }
        } else if ctx.input(|i| i.key_pressed(egui::Key::Enter)) {
            trigger = Some(SearchTrigger::ConfirmKey);
        }

        // ---- Top panel: heading ----
        egui::TopBottomPanel::top("heading")
            .show_separator_line(false)
            .show(ctx, |ui| {
                ui.add_space(6.0);
                panels::heading(ui);
                ui.add_space(6.0);
            });

        // ---- Central panel: query + results ----
        egui::CentralPanel::default().show(ctx, |ui| {
            if let Some(clicked) = panels::search_bar(ui, &mut self.state) {
                trigger = Some(clicked);
            }
            ui.separator();

            let model = self.state.results.as_ref().map(|m| m as &dyn TableModel);
            grid::results_grid(ui, model, self.state.results_generation);
        });

        if let Some(trigger) = trigger {
            self.state.submit_search(trigger);
        }
    }
}
