// src/gui/app.rs
use std::{
    error::Error,
    sync::{mpsc, Arc, Mutex},
};

use eframe::egui;

use crate::config::state::AppState;
use crate::pipeline::{PipelineError, PipelineOutput};

use super::{pages::Page, router};

pub fn run(options: eframe::NativeOptions) -> Result<(), Box<dyn Error>> {
    eframe::run_native(
        "Ações Mensais — Fundamentus",
        options,
        Box::new(|_cc| Ok(Box::new(App::new(AppState::default())))),
    )?;
    Ok(())
}

pub struct App {
    // single source of truth (UI thread only)
    pub state: AppState,

    // pipeline output of the last successful run
    pub output: Option<PipelineOutput>,

    // output text field UX (we map this <-> ExportOptions)
    pub out_path_text: String,
    pub out_path_dirty: bool,

    // status line
    pub status: Arc<Mutex<String>>,

    // pending fetch, if a worker thread is running one
    pub fetch_rx: Option<mpsc::Receiver<Result<PipelineOutput, PipelineError>>>,
}

impl App {
    pub fn new(mut state: AppState) -> Self {
        // The ranking tab owns the canonical download name; start there.
        state.gui.current_page_index = router::all_pages()
            .iter()
            .position(|p| p.kind() == crate::config::options::PageKind::Ranking)
            .unwrap_or(0);

        let initial_kind = router::all_pages()[state.gui.current_page_index].kind();
        state.options.export.set_default_stem_for(initial_kind);
        let out_path_text = state.options.export.out_path().to_string_lossy().into_owned();

        logf!("Init: default page={:?}", initial_kind);

        Self {
            state,
            output: None,
            out_path_text,
            out_path_dirty: false,
            status: Arc::new(Mutex::new(s!("Idle"))),
            fetch_rx: None,
        }
    }

    /* ---------- tiny helpers ---------- */

    #[inline]
    pub fn current_index(&self) -> usize { self.state.gui.current_page_index }

    #[inline]
    pub fn set_current_index(&mut self, idx: usize) { self.state.gui.current_page_index = idx; }

    #[inline]
    pub fn current_page(&self) -> &'static dyn Page { router::all_pages()[self.current_index()] }

    #[inline]
    pub fn status<T: Into<String>>(&self, msg: T) {
        *self.status.lock().unwrap() = msg.into();
    }

    #[inline]
    pub fn fetch_in_flight(&self) -> bool {
        self.fetch_rx.is_some()
    }

    /// Collect a finished fetch from the worker thread, if any.
    fn poll_fetch(&mut self) {
        let Some(rx) = &self.fetch_rx else { return };

        match rx.try_recv() {
            Ok(Ok(output)) => {
                logf!(
                    "Fetch: OK filtered={} ranking={}",
                    output.filtered.row_count(),
                    output.ranking.row_count()
                );
                self.status(format!(
                    "Ready — {} filtered, {} ranked",
                    output.filtered.row_count(),
                    output.ranking.row_count()
                ));
                self.output = Some(output);
                self.fetch_rx = None;
            }
            Ok(Err(e)) => {
                loge!("Fetch: Error: {}", e);
                self.status(format!("Error: {e}"));
                self.fetch_rx = None;
            }
            Err(mpsc::TryRecvError::Empty) => {}
            Err(mpsc::TryRecvError::Disconnected) => {
                loge!("Fetch: worker thread died before sending a result");
                self.status("Error: fetch aborted");
                self.fetch_rx = None;
            }
        }
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.poll_fetch();

        eframe::egui::CentralPanel::default().show(ctx, |ui| {
            crate::gui::components::tabs::draw(ui, self);

            ui.separator();

            crate::gui::components::export_bar::draw(ui, self);

            ui.separator();

            crate::gui::components::data_table::draw(ui, self);
        });
    }
}
