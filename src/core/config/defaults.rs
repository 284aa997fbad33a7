use serde_json::{json, Value};

pub const DEFAULT_CHUNK_SIZE: usize = 300;
pub const DEFAULT_CHUNK_OVERLAP: usize = 50;
pub const DEFAULT_TOP_K: usize = 5;
pub const DEFAULT_MAX_LINKS: usize = 5;
pub const DEFAULT_CURRENT_PAGE_BOOST: f64 = 0.15;
pub const DEFAULT_MIN_SIMILARITY: f64 = 0.05;

pub const DEFAULT_FETCH_TIMEOUT_SECS: u64 = 15;
pub const DEFAULT_FETCH_MAX_BYTES: u64 = 2_000_000;
pub const DEFAULT_USER_AGENT: &str = concat!("pagewise/", env!("CARGO_PKG_VERSION"));

pub const DEFAULT_CONTEXT_HEADER: &str = "Relevant information:";
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Baseline config document that file values are merged over.
pub fn generate_default_config() -> Value {
    json!({
        "rag": {
            "chunk_size": DEFAULT_CHUNK_SIZE,
            "chunk_overlap": DEFAULT_CHUNK_OVERLAP,
            "top_k": DEFAULT_TOP_K,
            "max_links": DEFAULT_MAX_LINKS,
            "current_page_boost": DEFAULT_CURRENT_PAGE_BOOST,
            "min_similarity": DEFAULT_MIN_SIMILARITY,
            "revectorize_on_idf_change": false
        },
        "fetch": {
            "timeout_secs": DEFAULT_FETCH_TIMEOUT_SECS,
            "max_bytes": DEFAULT_FETCH_MAX_BYTES,
            "user_agent": DEFAULT_USER_AGENT
        },
        "context": {
            "header": DEFAULT_CONTEXT_HEADER,
            "max_context_chars": null
        },
        "url_scorer": {
            "extra_categories": []
        },
        "logging": {
            "level": DEFAULT_LOG_LEVEL,
            "log_dir": null
        }
    })
}
