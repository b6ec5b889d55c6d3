// src/gui/components/data_table.rs
//
// Draws the live table for the current page. Purely a view; before the
// first run it shows the page's canonical headers over an empty body.

use eframe::egui::{self, Align, Layout, RichText, TextWrapMode};
use egui_extras::{Column, TableBuilder};
use crate::gui::app::App;

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    let page = app.current_page();

    let headers: Vec<String> = match &app.output {
        Some(output) => page.dataset(output).headers.clone(),
        None => page.default_headers().iter().map(|h| s!(*h)).collect(),
    };
    let rows: &[Vec<String>] = match &app.output {
        Some(output) => &page.dataset(output).rows,
        None => &[],
    };
    let cols = headers.len();

    let non_numeric = page.non_numeric_columns();
    let numeric_cols: Vec<bool> = (0..cols)
        .map(|ci| !non_numeric.contains(&ci))
        .collect();

    let avail_h = ui.available_height();
    egui::ScrollArea::new([true, false])
        .id_salt("table_hscroll")
        .min_scrolled_height(avail_h)
        .max_height(avail_h)
        .show(ui, |ui| {
            let mut table = TableBuilder::new(ui)
                .striped(true)
                .min_scrolled_height(0.0)
                .id_salt(("table_state", page.kind()));
            for ci in 0..cols {
                let w = if ci == 0 { 90.0 } else { 80.0 };
                table = table.column(Column::initial(w).resizable(true).clip(true).at_least(20.0));
            }

            table
                .header(24.0, |mut header| {
                    for ci in 0..cols {
                        header.col(|ui| {
                            ui.scope(|ui| {
                                ui.style_mut().wrap_mode = Some(TextWrapMode::Extend);
                                let label = headers.get(ci).cloned()
                                    .unwrap_or_else(|| format!("Col {}", ci + 1));
                                let widget = egui::Label::new(RichText::new(label).strong())
                                    .selectable(false);
                                if numeric_cols.get(ci).copied().unwrap_or(false) {
                                    ui.centered_and_justified(|ui| { ui.add(widget); });
                                } else {
                                    ui.with_layout(Layout::left_to_right(Align::Center), |ui| {
                                        ui.add(widget);
                                    });
                                }
                            });
                        });
                    }
                })
                .body(|body| {
                    body.rows(20.0, rows.len(), |mut row| {
                        let row_idx = row.index();
                        if let Some(data) = rows.get(row_idx) {
                            for ci in 0..cols {
                                let cell_opt = data.get(ci);
                                row.col(|ui| {
                                    ui.scope(|ui| {
                                        ui.style_mut().wrap_mode = Some(TextWrapMode::Extend);
                                        if let Some(cell) = cell_opt {
                                            let rt = RichText::new(cell);
                                            if numeric_cols.get(ci).copied().unwrap_or(false) {
                                                ui.centered_and_justified(|ui| { ui.label(rt); });
                                            } else {
                                                ui.with_layout(
                                                    Layout::left_to_right(Align::Center),
                                                    |ui| { ui.label(rt); },
                                                );
                                            }
                                        }
                                    });
                                });
                            }
                        }
                    });
                });
        });
}
