// src/gui/components/tabs.rs
//
// Renders the top tabs and performs the tab switch itself. Display is
// literal: every tab reads straight from the last pipeline output.
// On switch, the export stem follows the tab unless the user has typed
// their own path.

use eframe::egui;
use crate::gui::{app::App, router};

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    ui.horizontal_wrapped(|ui| {
        ui.spacing_mut().item_spacing.x = 8.0;

        let pages = router::all_pages();
        let cur = app.current_index();

        for (idx, page) in pages.iter().enumerate() {
            let selected = idx == cur;

            if ui.selectable_label(selected, page.title()).clicked() && !selected {
                let prev = app.current_page().kind();
                app.set_current_index(idx);
                let new_kind = page.kind();
                logf!("UI: Tab switch {:?} → {:?}", prev, new_kind);

                if !app.out_path_dirty {
                    let export = &mut app.state.options.export;
                    export.set_default_stem_for(new_kind);
                    app.out_path_text = export.out_path().to_string_lossy().into_owned();
                }
            }
        }
    });
}
