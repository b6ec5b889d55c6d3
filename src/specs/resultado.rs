// src/specs/resultado.rs

use std::error::Error;

use crate::config::consts::RESULT_PATH;
use crate::core::{html, net};

pub struct ResultBundle {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

/// Fetch `/resultado.php` and extract the indicator table.
pub fn fetch() -> Result<ResultBundle, Box<dyn Error>> {
    let html_doc = net::http_get(RESULT_PATH)?; // see core/net.rs
    extract_table(&html_doc).ok_or_else(|| "resultado table not found".into())
}

/// Pull headers and data rows out of the page. `None` when the document
/// carries no recognizable table.
pub fn extract_table(doc: &str) -> Option<ResultBundle> {
    // The indicator table is id="resultado"; fall back to the first table
    // for captured fixtures.
    let table = html::element_inner(doc, "<table id=\"resultado\"", "</table>")
        .or_else(|| html::element_inner(doc, "<table", "</table>"))?;

    let headers: Vec<String> = html::tag_blocks(table, "<th", "</th>")
        .map(html::cell_text)
        .collect();
    if headers.is_empty() {
        return None;
    }

    let mut rows = Vec::new();
    for tr in html::tag_blocks(table, "<tr", "</tr>") {
        // <td> cells; the header row has none and falls through.
        let cells: Vec<String> = html::tag_blocks(tr, "<td", "</td>")
            .map(html::cell_text)
            .collect();
        if cells.is_empty() {
            continue;
        }
        rows.push(cells);
    }

    Some(ResultBundle { headers, rows })
}
