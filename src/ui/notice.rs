use eframe::egui::{self, Color32, Id, RichText, Ui};

use crate::state::Notice;

/// Show `notice` as a modal dialog. Returns `true` once the user dismisses
/// it (OK, Enter, Escape or a click on the backdrop).
pub fn show_notice(ctx: &egui::Context, notice: &Notice) -> bool {
    let modal = egui::Modal::new(Id::new("notice")).show(ctx, |ui: &mut Ui| {
        ui.set_width(300.0);

        let title = RichText::new(notice.title()).strong().size(18.0);
        ui.label(if notice.is_warning() {
            title.color(Color32::from_rgb(0xE0, 0x8E, 0x0B))
        } else {
            title
        });
        ui.add_space(6.0);
        ui.label(notice.message());
        ui.add_space(10.0);

        ui.vertical_centered(|ui: &mut Ui| ui.button("OK").clicked())
            .inner
    });

    let enter = ctx.input(|i| i.key_pressed(egui::Key::Enter));
    modal.inner || modal.should_close() || enter
}
