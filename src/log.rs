// src/log.rs
//
// Append-only run log next to the raw-table cache under `.store/`.
// Best-effort: the pipeline never fails because the log can't be written.

use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::PathBuf;
use std::sync::{Mutex, OnceLock};
use std::time::Instant;

use crate::config::consts::{LOG_FILE, STORE_DIR};

static LOG_LOCK: Mutex<()> = Mutex::new(());
static START: OnceLock<Instant> = OnceLock::new();

fn log_path() -> PathBuf {
    PathBuf::from(STORE_DIR).join(LOG_FILE)
}

/// Seconds since the first log call, millisecond precision. Runs are a
/// single fetch long; wall-clock dates would be noise.
fn uptime() -> String {
    let ms = START.get_or_init(Instant::now).elapsed().as_millis() as u64;
    format!("{:>4}.{:03}", ms / 1_000, ms % 1_000)
}

pub fn write_log(level: &str, msg: &str) {
    let line = format!("[{}][{level}] {msg}\n", uptime());

    if let Ok(_guard) = LOG_LOCK.lock() {
        let path = log_path();
        if let Some(dir) = path.parent() {
            let _ = fs::create_dir_all(dir);
        }
        if let Ok(mut file) = OpenOptions::new().create(true).append(true).open(&path) {
            let _ = file.write_all(line.as_bytes());
        }
    }
}

/// Info-level logging
#[macro_export]
macro_rules! logf {
    ($($arg:tt)*) => {
        $crate::log::write_log("INFO", &format!($($arg)*))
    };
}

/// Debug-level logging
#[macro_export]
macro_rules! logd {
    ($($arg:tt)*) => {
        $crate::log::write_log("DEBUG", &format!($($arg)*))
    };
}

/// Error-level logging
#[macro_export]
macro_rules! loge {
    ($($arg:tt)*) => {
        $crate::log::write_log("ERROR", &format!($($arg)*))
    };
}
