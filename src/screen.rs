// src/screen.rs
//
// Multi-criterion screen over the normalized table. The screen is an
// explicit ordered list of named threshold entries so every declared
// bound is visible, including the ones not currently applied.

use crate::data::{self, DataSet};

#[derive(Clone, Debug)]
pub struct Threshold {
    pub label: &'static str,
    pub column: usize,
    pub min: Option<f64>,
    pub max: Option<f64>,
    /// Disabled entries are declared bounds that do not filter.
    pub enabled: bool,
}

impl Threshold {
    /// Inclusive on both ends. A missing value never passes.
    pub fn passes(&self, value: Option<f64>) -> bool {
        if !self.enabled {
            return true;
        }
        let Some(v) = value else { return false };
        if let Some(min) = self.min {
            if v < min { return false; }
        }
        if let Some(max) = self.max {
            if v > max { return false; }
        }
        true
    }
}

/// The fixed monthly screen. ROIC has a declared minimum that the source
/// screen never applied to the conjunction; it ships disabled so the bound
/// stays visible and can be turned on as a product decision.
pub fn default_screen() -> Vec<Threshold> {
    vec![
        Threshold { label: "P/L",           column: data::COL_PL,      min: Some(3.0),          max: Some(12.0), enabled: true },
        Threshold { label: "ROE",           column: data::COL_ROE,     min: Some(15.0),         max: Some(50.0), enabled: true },
        Threshold { label: "Div.Yield",     column: data::COL_DY,      min: Some(5.0),          max: Some(20.0), enabled: true },
        Threshold { label: "Liq.2meses",    column: data::COL_LIQ2M,   min: Some(60_000_000.0), max: None,       enabled: true },
        Threshold { label: "Cresc. Rec.5a", column: data::COL_CRESC5A, min: Some(5.0),          max: None,       enabled: true },
        Threshold { label: "ROIC",          column: data::COL_ROIC,    min: Some(8.0),          max: None,       enabled: false },
    ]
}

/// Conjunction of all enabled thresholds. Same schema, input row order.
pub fn apply(screen: &[Threshold], ds: &DataSet) -> DataSet {
    let rows = ds
        .rows
        .iter()
        .filter(|row| {
            screen.iter().all(|t| {
                let value = row.get(t.column).and_then(|c| data::parse_cell(c));
                t.passes(value)
            })
        })
        .cloned()
        .collect();

    DataSet { headers: ds.headers.clone(), rows }
}
