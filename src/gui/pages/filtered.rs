// src/gui/pages/filtered.rs

use crate::config::options::PageKind;
use crate::data::{self, DataSet};
use crate::pipeline::PipelineOutput;
use super::Page;

pub static PAGE: FilteredPage = FilteredPage;

pub struct FilteredPage;

impl Page for FilteredPage {
    fn title(&self) -> &'static str { "Ações filtradas" }
    fn kind(&self) -> PageKind { PageKind::Filtered }

    fn default_headers(&self) -> &'static [&'static str] {
        &data::COLUMNS
    }

    fn dataset<'a>(&self, output: &'a PipelineOutput) -> &'a DataSet {
        &output.filtered
    }
}
