// tests/pipeline.rs
//
// The pure pipeline tail against captured-style HTML, end to end.

use fundarank::csv::table_to_string;
use fundarank::data::{self, DataSet};
use fundarank::pipeline::{self, PipelineError};
use fundarank::specs::resultado;

/// Site-format cells for one row, indicator subset; the rest defaults.
struct Stock<'a> {
    ticker: &'a str,
    pl: &'a str,
    pvp: &'a str,
    dy: &'a str,
    roic: &'a str,
    roe: &'a str,
    liq: &'a str,
    cresc: &'a str,
}

fn site_row(s: &Stock) -> Vec<String> {
    let mut r = vec!["0,00".to_string(); data::COLUMNS.len()];
    r[data::COL_PAPEL] = s.ticker.into();
    r[data::COL_PL] = s.pl.into();
    r[data::COL_PVP] = s.pvp.into();
    r[data::COL_DY] = s.dy.into();
    r[data::COL_ROIC] = s.roic.into();
    r[data::COL_ROE] = s.roe.into();
    r[data::COL_LIQ2M] = s.liq.into();
    r[data::COL_CRESC5A] = s.cresc.into();
    r
}

fn page_html(rows: &[Vec<String>]) -> String {
    let mut html = String::from("<html><body><table id=\"resultado\"><thead><tr>");
    for h in data::COLUMNS.iter() {
        html.push_str(&format!("<th><a href=\"#\">{h}</a></th>"));
    }
    html.push_str("</tr></thead><tbody>");
    for row in rows {
        html.push_str("<tr>");
        for cell in row {
            html.push_str(&format!("<td><span>{cell}</span></td>"));
        }
        html.push_str("</tr>");
    }
    html.push_str("</tbody></table></body></html>");
    html
}

fn raw_from_html(html: &str) -> DataSet {
    let bundle = resultado::extract_table(html).unwrap();
    DataSet { headers: bundle.headers, rows: bundle.rows }
}

fn sample_rows() -> Vec<Vec<String>> {
    vec![
        // passes everything
        site_row(&Stock { ticker: "GOOD3", pl: "8,00", pvp: "1,10", dy: "6,5%",
                          roic: "12,0%", roe: "20,0%", liq: "80.000.000,00", cresc: "10,0%" }),
        // ROE is the site's "no data" dash → 0 → fails the ROE minimum
        site_row(&Stock { ticker: "AAAA", pl: "10,00", pvp: "1,00", dy: "6,0%",
                          roic: "10,0%", roe: "-", liq: "70.000.000,00", cresc: "8,0%" }),
        // passes everything, better P/L
        site_row(&Stock { ticker: "NICE4", pl: "4,50", pvp: "0,80", dy: "7,2%",
                          roic: "9,0%", roe: "30,0%", liq: "61.000.000,00", cresc: "6,1%" }),
        // fails liquidity
        site_row(&Stock { ticker: "THIN3", pl: "5,00", pvp: "0,50", dy: "9,9%",
                          roic: "15,0%", roe: "25,0%", liq: "1.000.000,00", cresc: "9,0%" }),
    ]
}

#[test]
fn html_to_ranking_end_to_end() {
    let raw = raw_from_html(&page_html(&sample_rows()));
    let out = pipeline::run_on_raw(raw).unwrap();

    let filtered: Vec<_> = out.filtered.rows.iter()
        .map(|r| r[data::COL_PAPEL].as_str())
        .collect();
    assert_eq!(filtered, ["GOOD3", "NICE4"]);

    // Both survivors appear in all six Top-5s.
    let tickers: Vec<_> = out.ranking.rows.iter().map(|r| r[0].as_str()).collect();
    assert_eq!(tickers, ["GOOD3", "NICE4"]);
    assert!(out.ranking.rows.iter().all(|r| r[1] == "6"));
}

#[test]
fn dash_placeholder_row_is_screened_out() {
    let raw = raw_from_html(&page_html(&sample_rows()));
    let out = pipeline::run_on_raw(raw).unwrap();
    assert!(out.filtered.rows.iter().all(|r| r[data::COL_PAPEL] != "AAAA"));
}

#[test]
fn rerun_on_identical_raw_table_is_byte_identical() {
    let raw = raw_from_html(&page_html(&sample_rows()));
    let a = pipeline::run_on_raw(raw.clone()).unwrap();
    let b = pipeline::run_on_raw(raw).unwrap();

    assert_eq!(a.filtered, b.filtered);
    assert_eq!(a.ranking, b.ranking);
    assert_eq!(
        table_to_string(&a.ranking, true, ','),
        table_to_string(&b.ranking, true, ',')
    );
}

#[test]
fn nothing_passes_yields_header_only_export() {
    let rows = vec![site_row(&Stock {
        ticker: "BADB3", pl: "99,00", pvp: "9,00", dy: "0,1%",
        roic: "1,0%", roe: "1,0%", liq: "1,00", cresc: "0,0%",
    })];
    let out = pipeline::run_on_raw(raw_from_html(&page_html(&rows))).unwrap();

    assert!(out.filtered.rows.is_empty());
    assert!(out.ranking.rows.is_empty());

    let text = table_to_string(&out.ranking, true, ',');
    assert_eq!(text.lines().count(), 1);
    assert!(text.starts_with("Papel,Ranking"));
}

#[test]
fn column_count_mismatch_aborts_the_run() {
    // A 20-column page (schema drift upstream) must not be mis-labeled.
    let mut html = String::from("<html><body><table id=\"resultado\"><tr>");
    for h in data::COLUMNS.iter().take(20) {
        html.push_str(&format!("<th>{h}</th>"));
    }
    html.push_str("</tr><tr>");
    for _ in 0..20 {
        html.push_str("<td>0,00</td>");
    }
    html.push_str("</tr></table></body></html>");

    let raw = raw_from_html(&html);
    let err = pipeline::run_on_raw(raw).unwrap_err();
    assert!(matches!(err, PipelineError::Schema(_)));
}
