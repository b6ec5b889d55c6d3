// src/specs/mod.rs
//! # Page spec module
//!
//! Page-specific extraction for the source site lives here. Each spec
//! focuses on a single page/endpoint and encodes *where the ground truth
//! lives in the HTML* and *how to extract it robustly*.
//!
//! ## What lives here
//! - **Pure HTML parsing** for remote pages (`/resultado.php`).
//! - **Tolerant extraction** using `core::html` helpers (case-insensitive
//!   tag blocks, tag stripping, whitespace/entity normalization).
//! - **Light shaping** of results into a headers + rows bundle.
//!
//! ## What does **not** live here
//! - **Caching** (`store`) — handled by the pipeline.
//! - **Normalization, screening, ranking, export** — the pipeline reads
//!   the bundle and applies those stages elsewhere.
//!
//! ## Conventions & invariants
//! - Case-insensitive tag detection; no full-document regexes.
//! - Prefer local scanning within known blocks (`<table>…</table>`).
//! - Return a stable column shape per page so the rest of the pipeline
//!   can rely on it (resultado = 21 columns, validated downstream).
//!
//! ## Testing notes
//! - Specs are testable offline against captured or inline HTML fixtures.

pub mod resultado;
