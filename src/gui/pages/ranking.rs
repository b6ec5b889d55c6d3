// src/gui/pages/ranking.rs

use crate::config::options::PageKind;
use crate::data::DataSet;
use crate::pipeline::PipelineOutput;
use crate::rank;
use super::Page;

pub static PAGE: RankingPage = RankingPage;

pub struct RankingPage;

impl Page for RankingPage {
    fn title(&self) -> &'static str { "Ranking Top 5" }
    fn kind(&self) -> PageKind { PageKind::Ranking }

    fn default_headers(&self) -> &'static [&'static str] {
        &rank::RANKING_HEADERS
    }

    fn dataset<'a>(&self, output: &'a PipelineOutput) -> &'a DataSet {
        &output.ranking
    }
}
