//! Tokenization and TF-IDF weighting.
//!
//! Tokens are lowercased words longer than two characters that are not in the
//! merged stop-word set. No stemming is attempted.

use std::collections::{HashMap, HashSet};
use std::sync::OnceLock;

use regex::Regex;

use super::stopwords::is_stop_word;
use crate::vector_math::{self, SparseVector};

/// Characters outside ASCII word chars, whitespace and this accented-Latin
/// allow-list are treated as separators.
const ACCENTED_LATIN: &str = "áéíóúàèìòùâêîôûäëïöüÿñçãõœæß";

const MIN_TOKEN_CHARS: usize = 3;

static NON_WORD: OnceLock<Regex> = OnceLock::new();

fn non_word_pattern() -> &'static Regex {
    NON_WORD.get_or_init(|| {
        let class = format!(r"[^a-z0-9_\s{}]", ACCENTED_LATIN);
        Regex::new(&class).expect("static character class")
    })
}

pub fn tokenize(text: &str) -> Vec<String> {
    let lowered = text.to_lowercase();
    let cleaned = non_word_pattern().replace_all(&lowered, " ");

    cleaned
        .split_whitespace()
        .filter(|token| token.chars().count() >= MIN_TOKEN_CHARS)
        .filter(|token| !is_stop_word(token))
        .map(str::to_string)
        .collect()
}

/// Term frequency normalised by document length.
pub fn compute_tf(tokens: &[String]) -> SparseVector {
    let mut tf = SparseVector::new();
    if tokens.is_empty() {
        return tf;
    }

    for token in tokens {
        *tf.entry(token.clone()).or_insert(0.0) += 1.0;
    }

    let total = tokens.len() as f64;
    for weight in tf.values_mut() {
        *weight /= total;
    }
    tf
}

/// Running IDF table plus the helpers that turn token lists into vectors.
#[derive(Debug, Clone, Default)]
pub struct TfIdfVectorizer {
    idf: HashMap<String, f64>,
    document_count: usize,
}

impl TfIdfVectorizer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Recomputes IDF over `documents`.
    ///
    /// Entries for tokens present in `documents` are overwritten; entries for
    /// tokens that only appeared in an earlier corpus are left as they were.
    pub fn compute_idf(&mut self, documents: &[Vec<String>]) {
        if documents.is_empty() {
            return;
        }

        let mut document_frequency: HashMap<&str, usize> = HashMap::new();
        for document in documents {
            let unique: HashSet<&str> = document.iter().map(String::as_str).collect();
            for token in unique {
                *document_frequency.entry(token).or_insert(0) += 1;
            }
        }

        let total = documents.len() as f64;
        for (token, df) in document_frequency {
            self.idf.insert(token.to_string(), (total / df as f64).ln());
        }
        self.document_count = documents.len();
    }

    /// `tf * idf` for each distinct token; unseen tokens weigh zero.
    pub fn vectorize(&self, tokens: &[String], tf: &SparseVector) -> SparseVector {
        let mut vector = SparseVector::with_capacity(tf.len());
        for token in tokens {
            if vector.contains_key(token) {
                continue;
            }
            let term_frequency = tf.get(token).copied().unwrap_or(0.0);
            let idf = self.idf.get(token).copied().unwrap_or(0.0);
            vector.insert(token.clone(), term_frequency * idf);
        }
        vector
    }

    /// Tokens → TF → TF-IDF in one step.
    pub fn vectorize_tokens(&self, tokens: &[String]) -> SparseVector {
        let tf = compute_tf(tokens);
        self.vectorize(tokens, &tf)
    }

    pub fn cosine_similarity(&self, a: &SparseVector, b: &SparseVector) -> f64 {
        vector_math::cosine_similarity(a, b)
    }

    pub fn idf(&self, token: &str) -> Option<f64> {
        self.idf.get(token).copied()
    }

    pub fn vocabulary_size(&self) -> usize {
        self.idf.len()
    }

    /// Number of documents the last IDF pass was computed over.
    pub fn document_count(&self) -> usize {
        self.document_count
    }
}
