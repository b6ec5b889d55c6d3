// src/rank.rs
//
// Top-5 extraction per criterion, cross-criterion frequency aggregation,
// and enrichment with reference indicator values from the filtered table.

use std::collections::HashMap;

use crate::config::consts::TOP_N;
use crate::data::{self, DataSet};
use crate::pipeline::PipelineError;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    Asc,
    Desc,
}

#[derive(Clone, Copy, Debug)]
pub struct Criterion {
    pub label: &'static str,
    pub column: usize,
    pub direction: Direction,
}

/// The six ranking criteria, in aggregation order.
pub const CRITERIA: [Criterion; 6] = [
    Criterion { label: "P/L",           column: data::COL_PL,      direction: Direction::Asc },
    Criterion { label: "P/VP",          column: data::COL_PVP,     direction: Direction::Asc },
    Criterion { label: "Div.Yield",     column: data::COL_DY,      direction: Direction::Desc },
    Criterion { label: "ROE",           column: data::COL_ROE,     direction: Direction::Desc },
    Criterion { label: "Liq.2meses",    column: data::COL_LIQ2M,   direction: Direction::Desc },
    Criterion { label: "Cresc. Rec.5a", column: data::COL_CRESC5A, direction: Direction::Desc },
];

/// Best-N tickers under one criterion: `(ticker, value)` pairs sorted per
/// the criterion's direction, rows with a missing value left out.
#[derive(Clone, Debug)]
pub struct CriterionResult {
    pub label: &'static str,
    pub entries: Vec<(String, f64)>,
}

/// Headers of the final ranking table.
pub const RANKING_HEADERS: [&str; 8] = [
    "Papel", "Ranking", "P/L", "P/VP", "Div.Yield", "ROE", "Liq.2meses", "Cresc. Rec.5a",
];

/// Reference columns pulled from the filtered table for display.
const REF_COLUMNS: [usize; 6] = [
    data::COL_PL, data::COL_PVP, data::COL_DY,
    data::COL_ROE, data::COL_LIQ2M, data::COL_CRESC5A,
];

pub fn top_n(ds: &DataSet, criterion: &Criterion, n: usize) -> CriterionResult {
    let mut entries: Vec<(String, f64)> = ds
        .rows
        .iter()
        .filter_map(|row| {
            let ticker = row.get(data::COL_PAPEL)?;
            let value = data::parse_cell(row.get(criterion.column)?)?;
            Some((ticker.clone(), value))
        })
        .collect();

    // Stable sort: ties keep input order.
    match criterion.direction {
        Direction::Asc => entries.sort_by(|a, b| a.1.total_cmp(&b.1)),
        Direction::Desc => entries.sort_by(|a, b| b.1.total_cmp(&a.1)),
    }
    entries.truncate(n);

    CriterionResult { label: criterion.label, entries }
}

/// All six Top-5 lists from the filtered table.
pub fn criterion_results(filtered: &DataSet) -> Vec<CriterionResult> {
    CRITERIA.iter().map(|c| top_n(filtered, c, TOP_N)).collect()
}

/// Frequency ranking: one row per ticker that appears in at least one
/// Top-5, scored by how many distinct criteria list it, enriched with the
/// reference indicator values of its filtered-table row.
///
/// Order: score descending, ties broken by ticker ascending.
pub fn build_ranking(filtered: &DataSet) -> Result<DataSet, PipelineError> {
    build_ranking_from(filtered, &criterion_results(filtered))
}

pub fn build_ranking_from(
    filtered: &DataSet,
    results: &[CriterionResult],
) -> Result<DataSet, PipelineError> {
    // A ticker cannot repeat inside one criterion's list, so counting
    // appearances counts distinct criteria.
    let mut scores: HashMap<String, usize> = HashMap::new();
    for result in results {
        for (ticker, _) in &result.entries {
            *scores.entry(ticker.clone()).or_insert(0) += 1;
        }
    }

    let mut ordered: Vec<(String, usize)> = scores.into_iter().collect();
    ordered.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));

    let mut rows = Vec::with_capacity(ordered.len());
    for (ticker, score) in ordered {
        // Every ranked ticker came out of the filtered table; a failed
        // lookup means the inputs went inconsistent mid-run.
        let src = filtered
            .rows
            .iter()
            .find(|r| r.get(data::COL_PAPEL).map(String::as_str) == Some(ticker.as_str()))
            .ok_or_else(|| {
                PipelineError::Consistency(format!(
                    "ranked ticker {} not present in the filtered table",
                    ticker
                ))
            })?;

        let mut row = Vec::with_capacity(RANKING_HEADERS.len());
        row.push(ticker);
        row.push(score.to_string());
        for &ci in &REF_COLUMNS {
            row.push(src[ci].clone());
        }
        rows.push(row);
    }

    Ok(DataSet {
        headers: RANKING_HEADERS.iter().map(|h| s!(*h)).collect(),
        rows,
    })
}
