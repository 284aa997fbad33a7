//! Typed view of the merged config document.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use super::defaults::*;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct RagSettings {
    pub rag: IndexSettings,
    pub fetch: FetchSettings,
    pub context: ContextSettings,
    pub url_scorer: UrlScorerSettings,
    pub logging: LoggingSettings,
}

/// Chunking, scoring and retrieval knobs.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct IndexSettings {
    /// Maximum words per chunk
    pub chunk_size: usize,
    /// Words carried over from the previous chunk
    pub chunk_overlap: usize,
    pub top_k: usize,
    pub max_links: usize,
    /// Added to the ranking score of chunks from the current page
    pub current_page_boost: f64,
    /// Hybrid scores at or below this are dropped
    pub min_similarity: f64,
    /// Rebuild every stored vector when the IDF table changes
    pub revectorize_on_idf_change: bool,
}

impl Default for IndexSettings {
    fn default() -> Self {
        Self {
            chunk_size: DEFAULT_CHUNK_SIZE,
            chunk_overlap: DEFAULT_CHUNK_OVERLAP,
            top_k: DEFAULT_TOP_K,
            max_links: DEFAULT_MAX_LINKS,
            current_page_boost: DEFAULT_CURRENT_PAGE_BOOST,
            min_similarity: DEFAULT_MIN_SIMILARITY,
            revectorize_on_idf_change: false,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FetchSettings {
    pub timeout_secs: u64,
    pub max_bytes: u64,
    pub user_agent: String,
}

impl Default for FetchSettings {
    fn default() -> Self {
        Self {
            timeout_secs: DEFAULT_FETCH_TIMEOUT_SECS,
            max_bytes: DEFAULT_FETCH_MAX_BYTES,
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ContextSettings {
    pub header: String,
    /// Upper bound on the rendered context, `None` for unlimited
    pub max_context_chars: Option<usize>,
}

impl Default for ContextSettings {
    fn default() -> Self {
        Self {
            header: DEFAULT_CONTEXT_HEADER.to_string(),
            max_context_chars: None,
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct UrlScorerSettings {
    pub extra_categories: Vec<CategoryPattern>,
}

/// A named regex appended to the built-in URL category table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryPattern {
    pub name: String,
    pub pattern: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingSettings {
    pub level: String,
    pub log_dir: Option<PathBuf>,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: DEFAULT_LOG_LEVEL.to_string(),
            log_dir: None,
        }
    }
}
