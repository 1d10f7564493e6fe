use eframe::egui::{Align, Layout, TextStyle, Ui};
use egui_extras::{Column, TableBuilder};

use crate::data::adapter::{Alignment, TableModel};

// ---------------------------------------------------------------------------
// Results grid (central panel)
// ---------------------------------------------------------------------------

/// Paint any [`TableModel`] as a grid with a row-number column.
///
/// `generation` identifies the binding; a new value drops remembered column
/// widths so every new result is sized to its own content.
pub fn results_grid(ui: &mut Ui, model: Option<&dyn TableModel>, generation: u64) {
    let Some(model) = model else {
        ui.centered_and_justified(|ui: &mut Ui| {
            ui.weak("Enter a player name and press Search.");
        });
        return;
    };

    let columns = model.column_count();
    let row_height = TextStyle::Body
        .resolve(ui.style())
        .size
        .max(ui.spacing().interact_size.y);

    ui.push_id(("results", generation), |ui: &mut Ui| {
        let mut table = TableBuilder::new(ui)
            .striped(true)
            .resizable(true)
            .cell_layout(Layout::left_to_right(Align::Center))
            .column(Column::auto());

        for col in 0..columns {
            // Last column takes whatever width is left.
            table = if col + 1 == columns {
                table.column(Column::remainder().at_least(40.0))
            } else {
                table.column(Column::auto())
            };
        }

        table
            .header(row_height, |mut header| {
                header.col(|_ui| {});
                for col in 0..columns {
                    header.col(|ui| {
                        ui.strong(model.column_header(col).unwrap_or_default());
                    });
                }
            })
            .body(|body| {
                body.rows(row_height, model.row_count(), |mut row| {
                    let index = row.index();
                    row.col(|ui| {
                        ui.weak(model.row_header(index));
                    });
                    for col in 0..columns {
                        row.col(|ui| {
                            let text = model.cell_text(index, col).unwrap_or_default();
                            aligned_label(ui, text, model.cell_alignment(index, col));
                        });
                    }
                });
            });
    });
}

fn aligned_label(ui: &mut Ui, text: String, alignment: Alignment) {
    let layout = match alignment {
        Alignment::Center => Layout::top_down(Align::Center),
    };
    ui.with_layout(layout, |ui: &mut Ui| {
        ui.label(text);
    });
}
