//! Sentence-aware chunking with word overlap.
//!
//! Sentences are accumulated greedily until the next one would push the chunk
//! past `chunk_size` words. Each following chunk starts with the trailing
//! `overlap` words of the one before it, so context carries across chunk
//! boundaries. Sentences are never split: a sentence longer than
//! `chunk_size` becomes its own oversized chunk.

use std::sync::OnceLock;

use regex::Regex;

use super::types::{Chunk, ChunkMetadata, PageMetadata};
use crate::core::config::defaults::{DEFAULT_CHUNK_OVERLAP, DEFAULT_CHUNK_SIZE};
use crate::core::config::IndexSettings;

static SENTENCE_BREAK: OnceLock<Regex> = OnceLock::new();

fn sentence_break() -> &'static Regex {
    SENTENCE_BREAK.get_or_init(|| Regex::new(r"[.!?]+\s+").expect("static sentence pattern"))
}

/// Splits after every run of `.`, `!` or `?` that is followed by whitespace.
///
/// The punctuation stays with its sentence; empty pieces are dropped.
pub fn split_into_sentences(text: &str) -> Vec<String> {
    let mut sentences = Vec::new();
    let mut start = 0;

    for found in sentence_break().find_iter(text) {
        let punctuation_len = found.as_str().trim_end().len();
        push_trimmed(&mut sentences, &text[start..found.start() + punctuation_len]);
        start = found.end();
    }
    push_trimmed(&mut sentences, &text[start..]);

    sentences
}

fn push_trimmed(sentences: &mut Vec<String>, piece: &str) {
    let trimmed = piece.trim();
    if !trimmed.is_empty() {
        sentences.push(trimmed.to_string());
    }
}

pub fn word_count(text: &str) -> usize {
    text.split_whitespace().count()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Chunker {
    chunk_size: usize,
    overlap: usize,
}

impl Default for Chunker {
    fn default() -> Self {
        Self::new(DEFAULT_CHUNK_SIZE, DEFAULT_CHUNK_OVERLAP)
    }
}

impl Chunker {
    /// Sizes are in words. A zero `chunk_size` is treated as one.
    pub fn new(chunk_size: usize, overlap: usize) -> Self {
        Self {
            chunk_size: chunk_size.max(1),
            overlap,
        }
    }

    pub fn from_settings(settings: &IndexSettings) -> Self {
        Self::new(settings.chunk_size, settings.chunk_overlap)
    }

    pub fn chunk_size(&self) -> usize {
        self.chunk_size
    }

    pub fn overlap(&self) -> usize {
        self.overlap
    }

    /// Splits `text` into chunks carrying `metadata`.
    ///
    /// The returned chunks have empty `tokens` and `vector`; the engine fills
    /// them when the chunks enter the index.
    pub fn create_chunks(&self, text: &str, metadata: &PageMetadata) -> Vec<Chunk> {
        let mut chunks = Vec::new();
        let mut current: Vec<String> = Vec::new();
        let mut current_words = 0;

        for sentence in split_into_sentences(text) {
            let words = word_count(&sentence);

            if current_words + words > self.chunk_size && !current.is_empty() {
                let flushed = current.join(" ");
                current = self.overlap_seed(&flushed, words);
                current_words = current.iter().map(|s| word_count(s)).sum();
                push_chunk(&mut chunks, flushed, metadata);
            }

            current.push(sentence);
            current_words += words;
        }

        if !current.is_empty() {
            push_chunk(&mut chunks, current.join(" "), metadata);
        }

        chunks
    }

    /// Trailing `overlap` words of `flushed`, re-split into sentences.
    ///
    /// Leading seed sentences are dropped while the seed plus the incoming
    /// sentence would exceed `chunk_size`.
    fn overlap_seed(&self, flushed: &str, incoming_words: usize) -> Vec<String> {
        if self.overlap == 0 {
            return Vec::new();
        }

        let words: Vec<&str> = flushed.split_whitespace().collect();
        let tail = words[words.len().saturating_sub(self.overlap)..].join(" ");
        let mut seed = split_into_sentences(&tail);

        let mut seed_words: usize = seed.iter().map(|s| word_count(s)).sum();
        while !seed.is_empty() && seed_words + incoming_words > self.chunk_size {
            seed_words -= word_count(&seed.remove(0));
        }
        seed
    }
}

fn push_chunk(chunks: &mut Vec<Chunk>, text: String, metadata: &PageMetadata) {
    let chunk_index = chunks.len();
    chunks.push(Chunk {
        word_count: word_count(&text),
        text,
        metadata: ChunkMetadata::from_page(metadata, chunk_index),
        tokens: Vec::new(),
        vector: Default::default(),
    });
}
