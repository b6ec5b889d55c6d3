// src/gui/components/export_bar.rs

use std::{sync::mpsc, thread};

use eframe::egui;
use crate::{
    config::options::ExportFormat,
    csv, file, pipeline,
    gui::app::App,
};

#[derive(Clone, Copy, PartialEq, Eq)]
enum UiFormat { Csv, Tsv }

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    {
        let export = &mut app.state.options.export;

        // --- Format + Include headers ---
        let prev_fmt = match export.format {
            ExportFormat::Csv => UiFormat::Csv,
            ExportFormat::Tsv => UiFormat::Tsv,
        };
        let mut fmt = prev_fmt;

        ui.horizontal(|ui| {
            ui.label("Format:");
            ui.selectable_value(&mut fmt, UiFormat::Csv, "CSV");
            ui.selectable_value(&mut fmt, UiFormat::Tsv, "TSV");
        });

        if fmt != prev_fmt {
            export.format = match fmt {
                UiFormat::Csv => ExportFormat::Csv,
                UiFormat::Tsv => ExportFormat::Tsv,
            };
            logf!("UI: Export format → {:?}", export.format);
            if !app.out_path_dirty {
                app.out_path_text = export.out_path().to_string_lossy().into_owned();
            }
        }

        let before_headers = export.include_headers;
        ui.checkbox(&mut export.include_headers, "Include headers");
        if export.include_headers != before_headers {
            logf!("UI: include_headers → {}", export.include_headers);
        }

        ui.horizontal(|ui| {
            ui.label("Output:");
            if ui
                .add(egui::TextEdit::singleline(&mut app.out_path_text)
                    .font(egui::TextStyle::Monospace))
                .changed()
            {
                app.out_path_dirty = true;
                logd!("UI: out_path_text changed (dirty=true) → {}", app.out_path_text);
            }
        });
    }

    // --- Actions (Copy / Export / FETCH) ---
    ui.horizontal(|ui| {
        let page = app.current_page();

        // Copy
        if ui.button("Copy").clicked() {
            match &app.output {
                Some(output) => {
                    let ds = page.dataset(output);
                    let export = &app.state.options.export;
                    let txt = csv::table_to_string(ds, export.include_headers, export.delim());
                    logf!("Copy: page={:?}, rows={}", page.kind(), ds.row_count());
                    ui.ctx().copy_text(txt);
                    app.status("Copied to clipboard");
                }
                None => {
                    app.status("Nothing to copy — fetch first");
                    logd!("Copy: Clicked, but no pipeline output yet");
                }
            }
        }

        // Export
        if ui.button("Export").clicked() {
            match &app.output {
                Some(output) => {
                    if app.out_path_dirty {
                        app.state.options.export.set_path(&app.out_path_text);
                        logf!(
                            "Export: Out path set → {}",
                            app.state.options.export.out_path().display()
                        );
                        app.out_path_dirty = false;
                    }

                    let ds = page.dataset(output);
                    match file::write_export_single(&app.state.options.export, ds) {
                        Ok(path) => {
                            logf!("Export: OK rows={} → {}", ds.row_count(), path.display());
                            app.status(format!("Exported {}", path.display()));
                        }
                        Err(e) => {
                            loge!("Export: Error: {}", e);
                            app.status(format!("Export error: {e}"));
                        }
                    }
                }
                None => {
                    app.status("Nothing to export — fetch first");
                    logd!("Export: Clicked, but no pipeline output yet");
                }
            }
        }

        // FETCH — runs on a worker thread so the window keeps painting;
        // App::update polls the channel for the result.
        let red = egui::Color32::from_rgb(220, 30, 30);
        let black = egui::Color32::BLACK;
        let fetch_btn = egui::Button::new(
            egui::RichText::new("FETCH").color(black).strong(),
        )
        .fill(red);
        if ui.add_enabled(!app.fetch_in_flight(), fetch_btn).clicked() {
            logf!("Fetch: Begin (ignore_cache={})", app.state.options.fetch.ignore_cache);

            let fetch = app.state.options.fetch.clone();
            let mut prog =
                crate::gui::progress::GuiProgress::new(app.status.clone(), ui.ctx().clone());
            let ctx = ui.ctx().clone();
            let (tx, rx) = mpsc::channel();
            app.fetch_rx = Some(rx);

            thread::spawn(move || {
                let result = pipeline::run(&fetch, Some(&mut prog));
                let _ = tx.send(result);
                ctx.request_repaint();
            });
        }

        let status = app.status.lock().unwrap().clone();
        ui.label(format!("Status: {status}"));
    });
}
