// src/pipeline.rs
//
// Fetch → Normalize → Screen → Rank, handed forward as explicit DataSets.
// One run, one network call at most; everything after the fetch is pure.

use std::error::Error;
use std::fmt;

use crate::config::options::FetchOptions;
use crate::data::{self, DataSet};
use crate::progress::Progress;
use crate::{rank, screen, specs, store};

#[derive(Debug)]
pub enum PipelineError {
    /// Network failure or non-success HTTP status. Fatal, no retry.
    Fetch(String),
    /// No extractable table, or the column shape does not match the
    /// canonical schema. Fatal instead of silently mis-labeling.
    Schema(String),
    /// A derived table references a row the filtered table lacks.
    Consistency(String),
}

impl fmt::Display for PipelineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PipelineError::Fetch(msg) => write!(f, "fetch failed: {msg}"),
            PipelineError::Schema(msg) => write!(f, "source table mismatch: {msg}"),
            PipelineError::Consistency(msg) => write!(f, "inconsistent data: {msg}"),
        }
    }
}

impl Error for PipelineError {}

/// The two read-only tables the presentation layer consumes.
#[derive(Clone, Debug)]
pub struct PipelineOutput {
    pub filtered: DataSet,
    pub ranking: DataSet,
}

/// Full run: raw table from cache or network, then the pure stages.
pub fn run(
    fetch: &FetchOptions,
    mut progress: Option<&mut dyn Progress>,
) -> Result<PipelineOutput, PipelineError> {
    if let Some(p) = progress.as_deref_mut() {
        p.begin(2);
        p.log("Fetching indicator table…");
    }

    let raw = collect_raw(fetch)?;
    logf!("Pipeline: raw rows={} cols={}", raw.row_count(), raw.header_count());

    if let Some(p) = progress.as_deref_mut() {
        p.log("Screening and ranking…");
    }

    let out = run_on_raw(raw)?;

    if let Some(p) = progress.as_deref_mut() {
        p.finish();
    }
    Ok(out)
}

/// The pure tail of the pipeline. Deterministic: the same raw table always
/// yields byte-identical filtered and ranking tables.
pub fn run_on_raw(raw: DataSet) -> Result<PipelineOutput, PipelineError> {
    let normalized = data::normalize(raw)?;
    let filtered = screen::apply(&screen::default_screen(), &normalized);
    logf!(
        "Pipeline: screen kept {}/{} rows",
        filtered.row_count(),
        normalized.row_count()
    );
    let ranking = rank::build_ranking(&filtered)?;
    logf!("Pipeline: ranking rows={}", ranking.row_count());

    Ok(PipelineOutput { filtered, ranking })
}

/// Raw table acquisition: fresh `.store` cache if allowed, network
/// otherwise. Caching the fetch never changes pipeline results.
fn collect_raw(fetch: &FetchOptions) -> Result<DataSet, PipelineError> {
    if !fetch.ignore_cache {
        if let Some(ds) = store::load_raw_fresh() {
            logf!("Cache: raw table hit (rows={})", ds.row_count());
            return Ok(ds);
        }
        logd!("Cache: raw table miss or stale");
    }

    let bundle = specs::resultado::fetch().map_err(|e| PipelineError::Fetch(e.to_string()))?;
    let ds = DataSet { headers: bundle.headers, rows: bundle.rows };

    // Best-effort; a failed save is not a failed run.
    match store::save_raw(&ds) {
        Ok(p) => logf!("Cache: saved raw table → {}", p.display()),
        Err(e) => loge!("Cache: save failed: {}", e),
    }

    Ok(ds)
}
