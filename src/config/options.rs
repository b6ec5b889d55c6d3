// src/config/options.rs
use std::ffi::OsString;
use std::path::{Path, PathBuf};
use super::consts::*;

#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct AppOptions {
    pub fetch: FetchOptions,
    pub export: ExportOptions,
}

/// Which derived table a view or an export refers to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PageKind {
    Filtered,
    Ranking,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FetchOptions {
    /// Skip the `.store` raw-table cache and always hit the network.
    pub ignore_cache: bool,
}

impl Default for FetchOptions {
    fn default() -> Self {
        Self { ignore_cache: false }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ExportFormat {
    Csv,
    Tsv,
}

impl ExportFormat {
    pub fn ext(&self) -> &'static str {
        match self { ExportFormat::Csv => "csv", ExportFormat::Tsv => "tsv" }
    }
    pub fn delim(&self) -> char {
        match self { ExportFormat::Csv => ',', ExportFormat::Tsv => '\t' }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExportOptions {
    pub format: ExportFormat,
    out_path: OutputPath,
    pub include_headers: bool,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            format: ExportFormat::Csv,
            out_path: OutputPath::default(),
            include_headers: true,
        }
    }
}

impl ExportOptions {
    pub fn out_path(&self) -> PathBuf {
        let mut path = self.out_path.dir.clone();
        let stem = self.out_path.file_stem.to_string_lossy();
        path.push(format!("{stem}.{}", self.format.ext()));
        path
    }

    /// Parse UI/CLI text into dir + stem. Ignores a pasted extension; the
    /// format setting controls it.
    pub fn set_path(&mut self, text: &str) {
        let s = text.trim();
        let p = Path::new(s);
        if let Some(parent) = p.parent() {
            self.out_path.dir = parent.to_path_buf();
        }
        if let Some(stem) = p.file_stem() {
            self.out_path.file_stem = stem.to_os_string();
        }
    }

    /// Default stem for a page, used when the user hasn't typed a path.
    pub fn set_default_stem_for(&mut self, kind: PageKind) {
        self.out_path.file_stem = OsString::from(match kind {
            PageKind::Filtered => DEFAULT_FILTERED_FILE,
            PageKind::Ranking => DEFAULT_RANKING_FILE,
        });
    }

    pub fn delim(&self) -> char {
        self.format.delim()
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OutputPath {
    dir: PathBuf,
    file_stem: OsString, // without extension
}

impl Default for OutputPath {
    fn default() -> Self {
        Self {
            dir: PathBuf::from(DEFAULT_OUT_DIR),
            file_stem: OsString::from(DEFAULT_RANKING_FILE),
        }
    }
}
