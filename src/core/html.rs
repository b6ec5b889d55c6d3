// src/core/html.rs
//
// Just enough markup scanning to pull the indicator table out of one page.
// Tag names on the site vary in case, so matching runs over an ASCII-lowered
// shadow of the document; ASCII lowering is length-preserving, which keeps
// the shadow's byte offsets valid in the original.

use super::sanitize;

fn ascii_lower(s: &str) -> String {
    s.chars()
        .map(|c| if c.is_ascii() { c.to_ascii_lowercase() } else { c })
        .collect()
}

/// Inner content of the first `open_pat`…`close_pat` element, sliced after
/// the opening tag's `>`. `open_pat` may be a tag prefix with attributes,
/// e.g. `<table id="resultado"`.
pub fn element_inner<'a>(doc: &'a str, open_pat: &str, close_pat: &str) -> Option<&'a str> {
    let shadow = ascii_lower(doc);
    let open = shadow.find(&ascii_lower(open_pat))?;
    let body = doc[open..].find('>')? + open + 1;
    let close = shadow[body..].find(&ascii_lower(close_pat))?;
    Some(&doc[body..body + close])
}

/// Iterator over whole `<tag …>…</tag>` blocks, opening tag included.
/// Unterminated trailing blocks are dropped.
pub fn tag_blocks<'a>(doc: &'a str, open_tag: &str, close_tag: &str) -> TagBlocks<'a> {
    TagBlocks {
        doc,
        shadow: ascii_lower(doc),
        open: ascii_lower(open_tag),
        close: ascii_lower(close_tag),
        pos: 0,
    }
}

pub struct TagBlocks<'a> {
    doc: &'a str,
    shadow: String,
    open: String,
    close: String,
    pos: usize,
}

impl<'a> Iterator for TagBlocks<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<&'a str> {
        let start = self.shadow.get(self.pos..)?.find(&self.open)? + self.pos;
        let body = self.doc[start..].find('>')? + start + 1;
        let end = self.shadow[body..].find(&self.close)? + body + self.close.len();
        self.pos = end;
        Some(&self.doc[start..end])
    }
}

/// Visible text of one cell block: the content between the opening and
/// closing tags, nested markup removed, entities and whitespace normalized.
/// The site wraps tickers in `<a>` and values in `<span>`; both melt away.
pub fn cell_text(block: &str) -> String {
    let inner = match (block.find('>'), block.rfind('<')) {
        (Some(open_end), Some(close_start)) if close_start > open_end => {
            &block[open_end + 1..close_start]
        }
        _ => "",
    };

    let mut text = String::with_capacity(inner.len());
    let mut in_tag = false;
    for ch in inner.chars() {
        match ch {
            '<' => in_tag = true,
            '>' => in_tag = false,
            _ if !in_tag => text.push(ch),
            _ => {}
        }
    }
    sanitize::normalize_ws(&sanitize::normalize_entities(&text))
}
