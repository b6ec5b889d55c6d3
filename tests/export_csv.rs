// tests/export_csv.rs
//
// Export surface: file writing through ExportOptions, CSV round-trip.

use std::fs;
use std::path::PathBuf;

use fundarank::config::options::{AppOptions, ExportFormat, PageKind};
use fundarank::csv::{parse_rows, table_to_string};
use fundarank::data::DataSet;
use fundarank::file;

fn tmp_dir(name: &str) -> PathBuf {
    let mut p = std::env::temp_dir();
    p.push(format!("fundarank_{}", name));
    let _ = fs::remove_dir_all(&p);
    fs::create_dir_all(&p).unwrap();
    p
}

fn ranking_fixture() -> DataSet {
    DataSet {
        headers: ["Papel", "Ranking", "P/L", "P/VP", "Div.Yield", "ROE", "Liq.2meses", "Cresc. Rec.5a"]
            .iter().map(|h| h.to_string()).collect(),
        rows: vec![
            vec!["VALE3".into(), "3".into(), "5.41".into(), "1.2".into(), "8.2".into(),
                 "22.5".into(), "80000000".into(), "11.3".into()],
            vec!["PETR4".into(), "1".into(), "3.12".into(), "0.9".into(), "18.1".into(),
                 "35.0".into(), "95000000".into(), "6.0".into()],
        ],
    }
}

#[test]
fn default_export_name_is_the_ranking_csv() {
    let mut opts = AppOptions::default();
    opts.export.set_default_stem_for(PageKind::Ranking);
    let out = opts.export.out_path();
    assert!(out.to_string_lossy().ends_with("ranking_top5_frequencia.csv"));
}

#[test]
fn format_flip_changes_extension() {
    let mut opts = AppOptions::default();
    opts.export.set_default_stem_for(PageKind::Ranking);
    opts.export.format = ExportFormat::Tsv;
    assert!(opts.export.out_path().to_string_lossy().ends_with("ranking_top5_frequencia.tsv"));
}

#[test]
fn writes_header_row_and_all_rows() {
    let mut opts = AppOptions::default();
    let dir = tmp_dir("single");
    let mut path = dir.clone();
    path.push("ranking.csv");
    opts.export.set_path(path.to_str().unwrap());
    opts.export.include_headers = true;

    let ds = ranking_fixture();
    let written = file::write_export_single(&opts.export, &ds).unwrap();
    let content = fs::read_to_string(&written).unwrap();

    let mut lines = content.lines();
    assert_eq!(
        lines.next().unwrap(),
        "Papel,Ranking,P/L,P/VP,Div.Yield,ROE,Liq.2meses,Cresc. Rec.5a"
    );
    assert_eq!(content.lines().count(), 3);
    assert!(content.contains("VALE3,3,5.41"));
}

#[test]
fn round_trip_preserves_every_tuple() {
    let ds = ranking_fixture();
    let text = table_to_string(&ds, true, ',');
    let mut parsed = parse_rows(&text, ',');

    assert_eq!(parsed.remove(0), ds.headers);
    assert_eq!(parsed, ds.rows);
}

#[test]
fn empty_table_exports_header_row_only() {
    let ds = DataSet { headers: ranking_fixture().headers, rows: vec![] };
    let text = table_to_string(&ds, true, ',');
    assert_eq!(text.lines().count(), 1);
    assert!(text.starts_with("Papel,Ranking"));
}

#[test]
fn tsv_uses_tab_delimiter() {
    let ds = ranking_fixture();
    let text = table_to_string(&ds, true, '\t');
    assert!(text.lines().next().unwrap().contains("Papel\tRanking"));
}
