// src/config/consts.rs

// Net config
pub const HOST: &str = "www.fundamentus.com.br";
pub const RESULT_PATH: &str = "/resultado.php";
pub const USER_AGENT: &str = "Mozilla/5.0";
pub const NET_TIMEOUT_SECS: u64 = 10;

// Local cache
pub const STORE_DIR: &str = ".store";
pub const STORE_SEP: char = ',';
pub const RAW_CACHE_FILE: &str = "resultado.csv";
pub const RAW_CACHE_TTL_SECS: u64 = 15 * 60;
pub const LOG_FILE: &str = "debug.log";

// Ranking
pub const TOP_N: usize = 5;

// Export
pub const DEFAULT_OUT_DIR: &str = "out";
pub const DEFAULT_RANKING_FILE: &str = "ranking_top5_frequencia";
pub const DEFAULT_FILTERED_FILE: &str = "acoes_filtradas";
