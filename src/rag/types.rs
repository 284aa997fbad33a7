//! Data types shared by the chunker, the engine and the context builder.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::vector_math::SparseVector;

/// Where a chunk's text came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContentSource {
    #[default]
    CurrentPage,
    Pdf,
    LinkedPage,
}

impl ContentSource {
    pub fn as_str(&self) -> &'static str {
        match self {
            ContentSource::CurrentPage => "current_page",
            ContentSource::Pdf => "pdf",
            ContentSource::LinkedPage => "linked_page",
        }
    }
}

impl fmt::Display for ContentSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Metadata supplied by the caller when indexing a document.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PageMetadata {
    pub title: String,
    pub url: String,
    /// Defaults to the current page when absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<ContentSource>,
    /// Page count, for PDFs
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pages: Option<u32>,
}

impl PageMetadata {
    pub fn new(title: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            url: url.into(),
            source: None,
            pages: None,
        }
    }

    pub fn with_source(mut self, source: ContentSource) -> Self {
        self.source = Some(source);
        self
    }

    pub fn with_pages(mut self, pages: u32) -> Self {
        self.pages = Some(pages);
        self
    }

    pub fn source_or_default(&self) -> ContentSource {
        self.source.unwrap_or_default()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChunkMetadata {
    pub source: ContentSource,
    pub title: String,
    pub url: String,
    /// Position of the chunk within its document
    pub chunk_index: usize,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pages: Option<u32>,
}

impl ChunkMetadata {
    pub fn from_page(page: &PageMetadata, chunk_index: usize) -> Self {
        Self {
            source: page.source_or_default(),
            title: page.title.clone(),
            url: page.url.clone(),
            chunk_index,
            pages: page.pages,
        }
    }
}

/// A sentence-aligned slice of a document, the unit of retrieval.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Chunk {
    pub text: String,
    pub metadata: ChunkMetadata,
    pub word_count: usize,
    /// Filled in when the chunk enters the index
    #[serde(default)]
    pub tokens: Vec<String>,
    #[serde(default)]
    pub vector: SparseVector,
}

/// A chunk returned by retrieval, with the scores that ranked it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RankedChunk {
    pub chunk: Chunk,
    /// Hybrid score: `0.6 * semantic + 0.4 * keyword`
    pub similarity: f64,
    pub semantic_score: f64,
    pub keyword_score: f64,
    /// Hybrid score plus the source boost, used for ordering
    pub boosted_score: f64,
}

impl RankedChunk {
    pub fn text(&self) -> &str {
        &self.chunk.text
    }

    pub fn source(&self) -> ContentSource {
        self.chunk.metadata.source
    }
}

/// Snapshot of what the index currently holds.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IndexStats {
    pub total_chunks: usize,
    pub current_page_chunks: usize,
    pub pdf_chunks: usize,
    pub linked_page_chunks: usize,
    pub vocabulary_size: usize,
    /// Distinct URLs of indexed linked pages, in indexing order
    pub linked_urls: Vec<String>,
}

/// Outcome of an `index_links` batch.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LinkIndexReport {
    /// URLs picked by the ranker, best first
    pub selected: Vec<String>,
    /// URLs whose text made it into the index
    pub indexed: Vec<String>,
    /// URLs that failed, with the reason
    pub failed: Vec<(String, String)>,
    pub chunks_added: usize,
}
