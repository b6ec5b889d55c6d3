// src/data.rs
//
// Tabular shape shared by every pipeline stage, plus the canonical schema
// of the Fundamentus result table and the numeric cell cleanup.

use crate::pipeline::PipelineError;

/// Headers + rows of plain text cells. Numeric columns hold cleaned text
/// ("12.5", "0"); a cell that does not parse as f64 is the missing value.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DataSet {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl DataSet {
    pub fn row_count(&self) -> usize { self.rows.len() }
    pub fn header_count(&self) -> usize { self.headers.len() }

    /// Numeric view of one cell. `None` = missing.
    pub fn numeric(&self, row: usize, col: usize) -> Option<f64> {
        parse_cell(self.rows.get(row)?.get(col)?)
    }
}

/// Canonical column labels of `/resultado.php`, in site order (v1 schema).
/// Renaming is positional; the count is validated before it is applied.
pub const COLUMNS: [&str; 21] = [
    "Papel", "Cotação", "P/L", "P/VP", "PSR", "Div.Yield", "P/Ativo", "P/Cap.Giro",
    "P/EBIT", "P/Ativ Circ.Liq", "EV/EBIT", "EV/EBITDA", "Mrg Ebit", "Mrg. Líq.",
    "Liq. Corr.", "ROIC", "ROE", "Liq.2meses", "Patrim. Líq", "Div.Brut/ Patrim.",
    "Cresc. Rec.5a",
];

pub const COL_PAPEL: usize = 0;
pub const COL_PL: usize = 2;
pub const COL_PVP: usize = 3;
pub const COL_DY: usize = 5;
pub const COL_ROIC: usize = 15;
pub const COL_ROE: usize = 16;
pub const COL_LIQ2M: usize = 17;
pub const COL_CRESC5A: usize = 20;

/// Columns run through the numeric cleanup.
pub const NUMERIC_COLUMNS: [usize; 7] =
    [COL_PL, COL_PVP, COL_DY, COL_ROIC, COL_ROE, COL_LIQ2M, COL_CRESC5A];

/// Clean one numeric cell as the site formats it:
/// percent sign off, thousands dots off, decimal comma → point,
/// whole-cell "-" placeholder → "0".
pub fn clean_numeric(raw: &str) -> String {
    let t = raw.trim();
    if t == "-" {
        return s!("0");
    }
    t.chars()
        .filter_map(|c| match c {
            '%' | '.' => None,
            ',' => Some('.'),
            c => Some(c),
        })
        .collect()
}

/// Parse a cleaned cell. Unparseable → missing, never an error.
pub fn parse_cell(cell: &str) -> Option<f64> {
    cell.trim().parse::<f64>().ok()
}

/// Normalizer: validate the raw column count against the canonical schema,
/// apply the positional rename, and clean the numeric columns in place.
/// A count mismatch aborts the run instead of silently mis-labeling.
pub fn normalize(raw: DataSet) -> Result<DataSet, PipelineError> {
    if raw.headers.len() != COLUMNS.len() {
        return Err(PipelineError::Schema(format!(
            "expected {} columns, source has {}",
            COLUMNS.len(),
            raw.headers.len()
        )));
    }
    if let Some((i, row)) = raw
        .rows
        .iter()
        .enumerate()
        .find(|(_, r)| r.len() != COLUMNS.len())
    {
        return Err(PipelineError::Schema(format!(
            "row {} has {} cells, expected {}",
            i,
            row.len(),
            COLUMNS.len()
        )));
    }

    let headers = COLUMNS.iter().map(|h| s!(*h)).collect();
    let mut rows = raw.rows;
    for row in &mut rows {
        for &ci in &NUMERIC_COLUMNS {
            row[ci] = clean_numeric(&row[ci]);
        }
    }

    Ok(DataSet { headers, rows })
}
