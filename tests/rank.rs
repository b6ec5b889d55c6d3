// tests/rank.rs
//
// Ranker: Top-5 per criterion, frequency aggregation, enrichment.

use fundarank::data::{self, DataSet};
use fundarank::rank::{self, Direction};

fn headers() -> Vec<String> {
    data::COLUMNS.iter().map(|h| h.to_string()).collect()
}

fn row(
    ticker: &str, pl: &str, pvp: &str, dy: &str, roe: &str, liq: &str, cresc: &str,
) -> Vec<String> {
    let mut r = vec!["0".to_string(); data::COLUMNS.len()];
    r[data::COL_PAPEL] = ticker.into();
    r[data::COL_PL] = pl.into();
    r[data::COL_PVP] = pvp.into();
    r[data::COL_DY] = dy.into();
    r[data::COL_ROE] = roe.into();
    r[data::COL_LIQ2M] = liq.into();
    r[data::COL_CRESC5A] = cresc.into();
    r
}

#[test]
fn every_criterion_result_is_capped_and_directed() {
    let mut rows = Vec::new();
    for i in 0..8 {
        let v = format!("{}", i + 1);
        rows.push(row(&format!("TCK{i}"), &v, &v, &v, &v, &v, &v));
    }
    let filtered = DataSet { headers: headers(), rows };

    for (result, criterion) in rank::criterion_results(&filtered)
        .iter()
        .zip(rank::CRITERIA.iter())
    {
        assert!(result.entries.len() <= 5);
        for pair in result.entries.windows(2) {
            match criterion.direction {
                Direction::Asc => assert!(pair[0].1 <= pair[1].1),
                Direction::Desc => assert!(pair[0].1 >= pair[1].1),
            }
        }
    }
}

#[test]
fn missing_values_never_enter_a_top_list() {
    let mut bad = row("MISS3", "1", "1", "1", "1", "1", "1");
    bad[data::COL_PVP] = "n/d".into();
    let filtered = DataSet {
        headers: headers(),
        rows: vec![bad, row("GOOD3", "2", "2", "2", "2", "2", "2")],
    };

    let results = rank::criterion_results(&filtered);
    let pvp = results.iter().find(|r| r.label == "P/VP").unwrap();
    assert_eq!(pvp.entries.len(), 1);
    assert_eq!(pvp.entries[0].0, "GOOD3");

    // MISS3 still ranks through the other five criteria.
    let pl = results.iter().find(|r| r.label == "P/L").unwrap();
    assert!(pl.entries.iter().any(|(t, _)| t == "MISS3"));
}

#[test]
fn score_counts_distinct_criteria() {
    // X is best by P/L (lowest) and ROE (highest); Y and Z lead one each.
    // With three rows everyone lands in every Top-5, so all scores are 6.
    // Use 7 rows so Top-5 membership actually differentiates.
    let mut rows = Vec::new();
    for i in 0..6 {
        // middling on everything
        let v = format!("{}", 10 + i);
        rows.push(row(&format!("MID{i}"), &v, &v, "5", "5", "5", "5"));
    }
    rows.push(row("X", "1", "99", "99", "99", "1", "1")); // best P/L, DY, ROE
    let filtered = DataSet { headers: headers(), rows };

    let ranking = rank::build_ranking(&filtered).unwrap();
    let x = ranking.rows.iter().find(|r| r[0] == "X").unwrap();
    assert_eq!(x[1], "3"); // P/L + Div.Yield + ROE
}

#[test]
fn two_list_overlap_scores_two() {
    let filtered = DataSet {
        headers: headers(),
        rows: vec![
            row("X", "1", "9", "1", "99", "1", "1"),
            row("A", "2", "1", "2", "1", "2", "2"),
            row("B", "3", "2", "3", "2", "3", "3"),
        ],
    };
    // Only 3 rows: everyone is in every Top-5. Restrict to two criteria by
    // blanking the rest for X.
    let mut rows = filtered.rows;
    rows[0][data::COL_PVP] = "n/d".into();
    rows[0][data::COL_DY] = "n/d".into();
    rows[0][data::COL_LIQ2M] = "n/d".into();
    rows[0][data::COL_CRESC5A] = "n/d".into();
    let filtered = DataSet { headers: headers(), rows };

    let ranking = rank::build_ranking(&filtered).unwrap();
    let score_of = |t: &str| {
        ranking.rows.iter().find(|r| r[0] == t).unwrap()[1].clone()
    };
    assert_eq!(score_of("X"), "2"); // P/L + ROE only
    assert_eq!(score_of("A"), "6");
    assert_eq!(score_of("B"), "6");
}

#[test]
fn sorted_by_score_desc_then_ticker_asc() {
    let filtered = DataSet {
        headers: headers(),
        rows: vec![
            row("ZZZZ3", "1", "1", "9", "9", "9", "9"),
            row("AAAA3", "2", "2", "8", "8", "8", "8"),
            row("MMMM3", "3", "3", "7", "7", "7", "7"),
        ],
    };
    let ranking = rank::build_ranking(&filtered).unwrap();

    let scores: Vec<usize> = ranking.rows.iter().map(|r| r[1].parse().unwrap()).collect();
    for pair in scores.windows(2) {
        assert!(pair[0] >= pair[1]);
    }
    // All three score 6 here; order falls back to ticker ascending.
    let tickers: Vec<_> = ranking.rows.iter().map(|r| r[0].as_str()).collect();
    assert_eq!(tickers, ["AAAA3", "MMMM3", "ZZZZ3"]);
}

#[test]
fn enriches_with_reference_values_from_the_filtered_table() {
    let filtered = DataSet {
        headers: headers(),
        rows: vec![row("VALE3", "5.41", "1.2", "8.2", "22.5", "80000000", "11.3")],
    };
    let ranking = rank::build_ranking(&filtered).unwrap();
    assert_eq!(
        ranking.headers,
        vec!["Papel", "Ranking", "P/L", "P/VP", "Div.Yield", "ROE", "Liq.2meses", "Cresc. Rec.5a"]
    );
    assert_eq!(
        ranking.rows[0],
        vec!["VALE3", "6", "5.41", "1.2", "8.2", "22.5", "80000000", "11.3"]
    );
}

#[test]
fn empty_filtered_table_yields_empty_everything() {
    let filtered = DataSet { headers: headers(), rows: vec![] };

    let results = rank::criterion_results(&filtered);
    assert_eq!(results.len(), 6);
    assert!(results.iter().all(|r| r.entries.is_empty()));

    let ranking = rank::build_ranking(&filtered).unwrap();
    assert!(ranking.rows.is_empty());
    assert_eq!(ranking.header_count(), 8);
}
