// src/store.rs
//
// Short-TTL cache of the raw fetched table under `.store/`. Best-effort:
// a refresh inside the TTL skips the network, nothing more. Derived
// tables (filtered, ranking) are never persisted.

use std::{fs, io, path::PathBuf, time::{Duration, SystemTime}};

use crate::config::consts::{RAW_CACHE_FILE, RAW_CACHE_TTL_SECS, STORE_DIR, STORE_SEP};
use crate::csv::{parse_rows, table_to_string};
use crate::data::DataSet;

fn cache_path() -> PathBuf {
    PathBuf::from(STORE_DIR).join(RAW_CACHE_FILE)
}

pub fn save_raw(ds: &DataSet) -> io::Result<PathBuf> {
    let p = cache_path();
    if let Some(parent) = p.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    fs::write(&p, table_to_string(ds, true, STORE_SEP))?;
    Ok(p)
}

/// Cached raw table, only while younger than the TTL.
pub fn load_raw_fresh() -> Option<DataSet> {
    load_raw_within(Duration::from_secs(RAW_CACHE_TTL_SECS))
}

pub fn load_raw_within(ttl: Duration) -> Option<DataSet> {
    let p = cache_path();
    let modified = fs::metadata(&p).ok()?.modified().ok()?;
    let age = SystemTime::now().duration_since(modified).ok()?;
    if age > ttl {
        return None;
    }

    let text = fs::read_to_string(&p).ok()?;
    let mut rows = parse_rows(&text, STORE_SEP);
    if rows.is_empty() {
        return None;
    }
    let headers = rows.remove(0);
    Some(DataSet { headers, rows })
}
