//! Retrieval engine for answering questions about the page a user is reading.
//!
//! Page or PDF text is split into sentence-aligned chunks, weighted with
//! TF-IDF and ranked against a question with a hybrid semantic and keyword
//! score. Same-site links can be scored, fetched and folded into the index.

pub mod core;
pub mod rag;
pub mod vector_math;
