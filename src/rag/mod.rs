//! RAG (Retrieval-Augmented Generation) module.
//!
//! This module provides:
//! - `RagEngine`: Indexes page, PDF and linked-page text and retrieves chunks
//! - `ContextBuilder`: Renders retrieved chunks into a prompt context string
//! - `UrlScorer`: Picks which same-site links are worth fetching for a question

pub mod chunker;
pub mod context_builder;
pub mod engine;
pub mod fetch;
pub mod html;
pub mod instance;
pub mod stopwords;
pub mod tokenizer;
pub mod types;
pub mod url_scorer;

pub use context_builder::ContextBuilder;
pub use engine::RagEngine;
pub use fetch::{FetchedPage, HttpPageFetcher, PageFetcher};
pub use instance::{get_instance, init_instance, reset_instance, SharedRagEngine};
pub use types::{
    Chunk, ChunkMetadata, ContentSource, IndexStats, LinkIndexReport, PageMetadata, RankedChunk,
};
pub use url_scorer::UrlScorer;
