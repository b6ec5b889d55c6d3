// src/gui/pages/mod.rs

use crate::config::options::PageKind;
use crate::data::DataSet;
use crate::pipeline::PipelineOutput;

pub mod filtered;
pub mod ranking;

/// One tab of the GUI: a read-only view over one pipeline table.
pub trait Page: Send + Sync + 'static {
    fn title(&self) -> &'static str;
    fn kind(&self) -> PageKind;

    /// Headers shown before the first run produces data.
    fn default_headers(&self) -> &'static [&'static str];

    /// Columns rendered left-aligned; everything else is numeric.
    fn non_numeric_columns(&self) -> &'static [usize] {
        &[0]
    }

    /// The table this page displays and exports.
    fn dataset<'a>(&self, output: &'a PipelineOutput) -> &'a DataSet;
}
