//! RAG Engine for indexing page content and retrieving relevant chunks.
//!
//! Collects chunks from:
//! - The current page or an extracted PDF (caller-supplied text)
//! - Same-site linked pages (fetched and extracted here)
//!
//! Retrieval blends TF-IDF cosine similarity with literal keyword hits and
//! favours chunks from the page the user is looking at.

use std::collections::HashSet;
use std::sync::Arc;

use futures_util::future::join_all;

use super::chunker::Chunker;
use super::context_builder::ContextBuilder;
use super::fetch::{FetchedPage, HttpPageFetcher, PageFetcher};
use super::html::extract_page;
use super::tokenizer::{tokenize, TfIdfVectorizer};
use super::types::{
    Chunk, ContentSource, IndexStats, LinkIndexReport, PageMetadata, RankedChunk,
};
use super::url_scorer::UrlScorer;
use crate::core::config::RagSettings;
use crate::core::errors::RagError;

const SEMANTIC_WEIGHT: f64 = 0.6;
const KEYWORD_WEIGHT: f64 = 0.4;
const KEYWORD_TOKEN_SCORE: f64 = 0.3;
const KEYWORD_PHRASE_SCORE: f64 = 1.0;

/// In-memory retrieval index over one browsing context.
pub struct RagEngine {
    settings: RagSettings,
    chunker: Chunker,
    vectorizer: TfIdfVectorizer,
    url_scorer: UrlScorer,
    context_builder: ContextBuilder,
    fetcher: Arc<dyn PageFetcher>,
    index: Vec<Chunk>,
    is_indexed: bool,
    current_source: Option<ContentSource>,
}

impl RagEngine {
    /// Engine that fetches linked pages over HTTP.
    pub fn new(settings: RagSettings) -> Result<Self, RagError> {
        let fetcher = Arc::new(HttpPageFetcher::new(&settings.fetch));
        Self::with_fetcher(settings, fetcher)
    }

    /// Engine with a caller-provided fetcher.
    ///
    /// Fails only when an extra URL category pattern does not compile.
    pub fn with_fetcher(
        settings: RagSettings,
        fetcher: Arc<dyn PageFetcher>,
    ) -> Result<Self, RagError> {
        let url_scorer = UrlScorer::from_settings(&settings.url_scorer)?;

        Ok(Self {
            chunker: Chunker::from_settings(&settings.rag),
            vectorizer: TfIdfVectorizer::new(),
            url_scorer,
            context_builder: ContextBuilder::new(settings.context.clone()),
            fetcher,
            index: Vec::new(),
            is_indexed: false,
            current_source: None,
            settings,
        })
    }

    /// Engine built from default settings. Cannot fail.
    pub fn with_defaults() -> Self {
        let settings = RagSettings::default();
        Self {
            chunker: Chunker::from_settings(&settings.rag),
            vectorizer: TfIdfVectorizer::new(),
            url_scorer: UrlScorer::new(),
            context_builder: ContextBuilder::new(settings.context.clone()),
            fetcher: Arc::new(HttpPageFetcher::new(&settings.fetch)),
            index: Vec::new(),
            is_indexed: false,
            current_source: None,
            settings,
        }
    }

    pub fn settings(&self) -> &RagSettings {
        &self.settings
    }

    /// Chunks `text` and appends it to the index.
    ///
    /// The page's source (default: current page) becomes the engine's current
    /// source. Returns the number of chunks added.
    pub fn index_page(&mut self, text: &str, metadata: PageMetadata) -> usize {
        let source = metadata.source_or_default();
        self.current_source = Some(source);

        let chunks = self.chunker.create_chunks(text, &metadata);
        if chunks.is_empty() {
            tracing::warn!("No indexable text for {} ({})", metadata.url, source);
        }

        let added = self.ingest(chunks);
        self.is_indexed = true;

        tracing::info!(
            "Indexed {} chunks from {} ({}), {} total",
            added,
            metadata.url,
            source,
            self.index.len()
        );
        added
    }

    /// Ranks `urls` against `question`, fetches the best `max_links` of them
    /// concurrently and indexes their main text as linked pages.
    ///
    /// A URL that fails to fetch or yields no text is logged and reported in
    /// `failed`; the rest of the batch still goes in.
    pub async fn index_links(
        &mut self,
        urls: &[String],
        question: &str,
        max_links: Option<usize>,
    ) -> LinkIndexReport {
        let limit = max_links.unwrap_or(self.settings.rag.max_links);

        let mut seen: HashSet<&str> = HashSet::new();
        let unique: Vec<String> = urls
            .iter()
            .filter(|url| seen.insert(url.as_str()))
            .cloned()
            .collect();

        let selected = self.url_scorer.rank_urls(&unique, question, limit);
        let mut report = LinkIndexReport {
            selected: selected.clone(),
            ..Default::default()
        };
        if selected.is_empty() {
            tracing::debug!("No links selected for indexing");
            return report;
        }

        tracing::info!("Fetching {} linked pages", selected.len());
        let fetcher = Arc::clone(&self.fetcher);
        let results = join_all(selected.iter().map(|url| fetcher.fetch(url))).await;

        let mut new_chunks = Vec::new();
        for (url, result) in selected.iter().zip(results) {
            match result.and_then(|page| self.chunk_linked_page(url, page)) {
                Ok(chunks) => {
                    tracing::debug!("Linked page {} produced {} chunks", url, chunks.len());
                    report.indexed.push(url.clone());
                    new_chunks.extend(chunks);
                }
                Err(e) => {
                    tracing::warn!("Failed to index linked page {}: {}", url, e);
                    report.failed.push((url.clone(), e.to_string()));
                }
            }
        }

        report.chunks_added = self.ingest(new_chunks);
        if report.chunks_added > 0 {
            self.is_indexed = true;
        }

        tracing::info!(
            "Indexed {} of {} linked pages ({} chunks)",
            report.indexed.len(),
            report.selected.len(),
            report.chunks_added
        );
        report
    }

    fn chunk_linked_page(&self, url: &str, page: FetchedPage) -> Result<Vec<Chunk>, RagError> {
        let extracted = extract_page(&page.html);
        if extracted.text.is_empty() {
            return Err(RagError::EmptyPage(url.to_string()));
        }

        let title = extracted.title.unwrap_or_else(|| url.to_string());
        let metadata = PageMetadata::new(title, url).with_source(ContentSource::LinkedPage);
        Ok(self.chunker.create_chunks(&extracted.text, &metadata))
    }

    /// Tokenizes `chunks`, refreshes IDF over the whole corpus and appends
    /// them with fresh vectors.
    ///
    /// Vectors already in the index keep the weights they were built with
    /// unless `revectorize_on_idf_change` is set.
    fn ingest(&mut self, mut chunks: Vec<Chunk>) -> usize {
        if chunks.is_empty() {
            return 0;
        }

        for chunk in &mut chunks {
            chunk.tokens = tokenize(&chunk.text);
        }

        let documents: Vec<Vec<String>> = self
            .index
            .iter()
            .chain(chunks.iter())
            .map(|chunk| chunk.tokens.clone())
            .collect();
        self.vectorizer.compute_idf(&documents);

        if self.settings.rag.revectorize_on_idf_change {
            for chunk in &mut self.index {
                chunk.vector = self.vectorizer.vectorize_tokens(&chunk.tokens);
            }
        }

        for chunk in &mut chunks {
            chunk.vector = self.vectorizer.vectorize_tokens(&chunk.tokens);
        }

        let added = chunks.len();
        self.index.extend(chunks);
        added
    }

    /// Best chunks for `query`, most relevant first.
    ///
    /// `top_k` defaults to the configured value. An empty index yields an
    /// empty result.
    pub fn retrieve(&self, query: &str, top_k: Option<usize>) -> Vec<RankedChunk> {
        if self.index.is_empty() {
            tracing::warn!("Retrieve called on an empty index");
            return Vec::new();
        }

        let top_k = top_k.unwrap_or(self.settings.rag.top_k);
        let query_tokens = tokenize(query);
        let query_vector = self.vectorizer.vectorize_tokens(&query_tokens);
        let distinct_tokens: HashSet<&str> = query_tokens.iter().map(String::as_str).collect();
        let phrase = query.trim().to_lowercase();

        let mut scored: Vec<(usize, f64, f64, f64, f64)> = self
            .index
            .iter()
            .enumerate()
            .map(|(i, chunk)| {
                let semantic = self
                    .vectorizer
                    .cosine_similarity(&query_vector, &chunk.vector);

                let text_lower = chunk.text.to_lowercase();
                let hits = distinct_tokens
                    .iter()
                    .filter(|token| text_lower.contains(*token))
                    .count();
                let mut keyword = KEYWORD_TOKEN_SCORE * hits as f64;
                if !phrase.is_empty() && text_lower.contains(&phrase) {
                    keyword += KEYWORD_PHRASE_SCORE;
                }

                let hybrid = SEMANTIC_WEIGHT * semantic + KEYWORD_WEIGHT * keyword;
                let boosted = hybrid + self.source_boost(chunk.metadata.source);
                (i, semantic, keyword, hybrid, boosted)
            })
            .filter(|(_, _, _, hybrid, _)| *hybrid > self.settings.rag.min_similarity)
            .collect();

        scored.sort_by(|a, b| b.4.total_cmp(&a.4));
        scored.truncate(top_k);

        tracing::debug!(
            "Retrieved {} of {} chunks for query",
            scored.len(),
            self.index.len()
        );

        scored
            .into_iter()
            .map(|(i, semantic, keyword, hybrid, boosted)| RankedChunk {
                chunk: self.index[i].clone(),
                similarity: hybrid,
                semantic_score: semantic,
                keyword_score: keyword,
                boosted_score: boosted,
            })
            .collect()
    }

    fn source_boost(&self, source: ContentSource) -> f64 {
        match source {
            ContentSource::CurrentPage => self.settings.rag.current_page_boost,
            _ => 0.0,
        }
    }

    pub fn build_context(&self, chunks: &[RankedChunk]) -> String {
        self.context_builder.build_context(chunks)
    }

    /// Distinct source labels of `chunks`, for citations.
    pub fn sources(&self, chunks: &[RankedChunk]) -> Vec<String> {
        self.context_builder.sources(chunks)
    }

    /// Drops every chunk and the IDF table. Safe to call repeatedly.
    pub fn clear(&mut self) {
        self.index.clear();
        self.vectorizer = TfIdfVectorizer::new();
        self.is_indexed = false;
        self.current_source = None;
        tracing::debug!("RAG index cleared");
    }

    pub fn reset(&mut self) {
        self.clear();
    }

    pub fn current_source(&self) -> Option<ContentSource> {
        self.current_source
    }

    pub fn is_pdf_content(&self) -> bool {
        self.current_source == Some(ContentSource::Pdf)
    }

    pub fn is_indexed(&self) -> bool {
        self.is_indexed
    }

    pub fn len(&self) -> usize {
        self.index.len()
    }

    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }

    pub fn chunks(&self) -> &[Chunk] {
        &self.index
    }

    pub fn stats(&self) -> IndexStats {
        let mut stats = IndexStats {
            total_chunks: self.index.len(),
            vocabulary_size: self.vectorizer.vocabulary_size(),
            ..Default::default()
        };

        for chunk in &self.index {
            match chunk.metadata.source {
                ContentSource::CurrentPage => stats.current_page_chunks += 1,
                ContentSource::Pdf => stats.pdf_chunks += 1,
                ContentSource::LinkedPage => {
                    stats.linked_page_chunks += 1;
                    if !stats.linked_urls.contains(&chunk.metadata.url) {
                        stats.linked_urls.push(chunk.metadata.url.clone());
                    }
                }
            }
        }

        stats
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use async_trait::async_trait;

    use super::*;

    /// Serves canned HTML; unknown URLs answer 404.
    struct StubFetcher {
        pages: HashMap<String, String>,
    }

    impl StubFetcher {
        fn new(pages: &[(&str, &str)]) -> Arc<Self> {
            Arc::new(Self {
                pages: pages
                    .iter()
                    .map(|(url, html)| (url.to_string(), html.to_string()))
                    .collect(),
            })
        }
    }

    #[async_trait]
    impl PageFetcher for StubFetcher {
        async fn fetch(&self, url: &str) -> Result<FetchedPage, RagError> {
            match self.pages.get(url) {
                Some(html) => Ok(FetchedPage {
                    url: url.to_string(),
                    html: html.clone(),
                }),
                None => Err(RagError::HttpStatus {
                    url: url.to_string(),
                    status: 404,
                }),
            }
        }
    }

    fn settings(chunk_size: usize, overlap: usize) -> RagSettings {
        let mut settings = RagSettings::default();
        settings.rag.chunk_size = chunk_size;
        settings.rag.chunk_overlap = overlap;
        settings
    }

    fn engine(settings: RagSettings) -> RagEngine {
        RagEngine::with_fetcher(settings, StubFetcher::new(&[])).unwrap()
    }

    fn urls(items: &[&str]) -> Vec<String> {
        items.iter().map(|u| u.to_string()).collect()
    }

    const PAGE_TEXT: &str = "Our pricing starts at ten dollars every month. \
        Contact us by email for support. \
        The company was founded in Berlin.";

    #[test]
    fn test_new_engine_is_empty() {
        let engine = RagEngine::with_defaults();
        assert!(engine.is_empty());
        assert!(!engine.is_indexed());
        assert_eq!(engine.current_source(), None);
        assert!(engine.retrieve("anything", None).is_empty());
        assert_eq!(engine.stats(), IndexStats::default());
    }

    #[test]
    fn test_invalid_extra_category_fails_construction() {
        let mut settings = RagSettings::default();
        settings.url_scorer.extra_categories.push(crate::core::config::CategoryPattern {
            name: "broken".to_string(),
            pattern: "[".to_string(),
        });
        assert!(matches!(
            RagEngine::with_fetcher(settings, StubFetcher::new(&[])),
            Err(RagError::Config(_))
        ));
    }

    #[test]
    fn test_index_and_retrieve_relevant_chunk() {
        let mut engine = engine(settings(8, 0));
        let added = engine.index_page(PAGE_TEXT, PageMetadata::new("Acme", "https://acme.test/"));

        assert_eq!(added, 3);
        assert!(engine.is_indexed());
        assert_eq!(engine.current_source(), Some(ContentSource::CurrentPage));
        assert!(!engine.is_pdf_content());

        let results = engine.retrieve("What is the pricing?", Some(5));
        assert_eq!(results.len(), 1);
        assert!(results[0].text().contains("pricing"));
        assert!(results[0].semantic_score > 0.0);
        assert!((results[0].keyword_score - 0.3).abs() < 1e-9);
        assert!((results[0].boosted_score - results[0].similarity - 0.15).abs() < 1e-9);
    }

    #[test]
    fn test_single_chunk_scores_on_keywords_only() {
        let mut engine = engine(RagSettings::default());
        engine.index_page(PAGE_TEXT, PageMetadata::new("Acme", "https://acme.test/"));
        assert_eq!(engine.len(), 1);

        // One document means every IDF is ln(1) = 0.
        let results = engine.retrieve("  Pricing  ", None);
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].semantic_score, 0.0);
        assert!((results[0].keyword_score - 1.3).abs() < 1e-9);
        assert!((results[0].similarity - 0.52).abs() < 1e-9);
    }

    const STORE_TEXT: &str =
        "Contact us at contact@example.com. We sell premium widgets. Our pricing starts at $10.";

    #[test]
    fn test_store_page_pricing_query_single_chunk() {
        let mut engine = engine(RagSettings::default());
        engine.index_page(STORE_TEXT, PageMetadata::new("Store", "https://store.test/"));
        assert_eq!(engine.len(), 1);

        let results = engine.retrieve("pricing", None);
        assert_eq!(results.len(), 1);
        assert!(results[0].text().contains("Our pricing starts at $10."));
        assert!((results[0].similarity - 0.52).abs() < 1e-9);
    }

    #[test]
    fn test_store_page_pricing_chunk_ranks_above_contact() {
        let mut engine = engine(settings(5, 0));
        engine.index_page(STORE_TEXT, PageMetadata::new("Store", "https://store.test/"));

        let texts: Vec<&str> = engine.chunks().iter().map(|c| c.text.as_str()).collect();
        assert_eq!(
            texts,
            vec![
                "Contact us at contact@example.com.",
                "We sell premium widgets.",
                "Our pricing starts at $10.",
            ]
        );

        let results = engine.retrieve("pricing", None);
        assert_eq!(results[0].text(), "Our pricing starts at $10.");
        // cosine 1/sqrt(2) against {pricing, starts}, keyword 0.3 + 1.0 for the phrase
        let expected = 0.6 / 2.0f64.sqrt() + 0.4 * 1.3;
        assert!((results[0].similarity - expected).abs() < 1e-9);

        let contact_rank = results.iter().position(|r| r.text().starts_with("Contact us"));
        assert!(contact_rank.map_or(true, |rank| rank > 0));
    }

    #[test]
    fn test_results_sorted_by_boosted_score() {
        let mut engine = engine(RagSettings::default());
        engine.index_page(
            "Shipping takes three days.",
            PageMetadata::new("Help", "https://acme.test/help")
                .with_source(ContentSource::LinkedPage),
        );
        engine.index_page("Shipping is quick.", PageMetadata::new("Acme", "https://acme.test/"));

        // Linked chunk leads on hybrid score by 0.12, less than the boost.
        let results = engine.retrieve("takes shipping", None);
        assert_eq!(results.len(), 2);
        assert_eq!(results[0].source(), ContentSource::CurrentPage);
        assert_eq!(results[1].source(), ContentSource::LinkedPage);
        assert!(results[1].similarity > results[0].similarity);
        assert!((results[1].similarity - results[0].similarity - 0.12).abs() < 1e-9);
        assert!(results[0].boosted_score > results[1].boosted_score);

        // A lead of 0.24 outweighs the boost.
        let results = engine.retrieve("takes three shipping", None);
        assert_eq!(results[0].source(), ContentSource::LinkedPage);
        for pair in results.windows(2) {
            assert!(pair[0].boosted_score >= pair[1].boosted_score);
        }
    }

    #[test]
    fn test_hybrid_score_equal_to_threshold_is_dropped() {
        let keyword_only = 0.6 * 0.0 + 0.4 * (0.3 * 1.0);

        let mut at_threshold = settings(300, 50);
        at_threshold.rag.min_similarity = keyword_only;
        let mut engine = engine(at_threshold);
        engine.index_page("Shipping is quick.", PageMetadata::new("Acme", "https://acme.test/"));
        assert!(engine.retrieve("shipping rates", None).is_empty());

        let mut below = settings(300, 50);
        below.rag.min_similarity = keyword_only - 1e-6;
        let mut engine = self::engine(below);
        engine.index_page("Shipping is quick.", PageMetadata::new("Acme", "https://acme.test/"));
        let results = engine.retrieve("shipping rates", None);
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].similarity, keyword_only);
    }

    #[test]
    fn test_unrelated_query_returns_nothing() {
        let mut engine = engine(settings(8, 0));
        engine.index_page(PAGE_TEXT, PageMetadata::new("Acme", "https://acme.test/"));
        assert!(engine.retrieve("quantum chromodynamics", None).is_empty());
    }

    #[test]
    fn test_top_k_limits_results() {
        let mut engine = engine(settings(5, 0));
        engine.index_page(
            "Shipping is free. Shipping takes days. Shipping uses couriers. Shipping is tracked.",
            PageMetadata::new("Acme", "https://acme.test/"),
        );
        assert_eq!(engine.len(), 4);
        assert_eq!(engine.retrieve("shipping", Some(2)).len(), 2);
        assert_eq!(engine.retrieve("shipping", None).len(), 4);
    }

    #[test]
    fn test_current_page_boost_breaks_ties() {
        let mut engine = engine(RagSettings::default());
        engine.index_page(
            "Shipping takes three days.",
            PageMetadata::new("Catalog", "https://acme.test/catalog.pdf")
                .with_source(ContentSource::Pdf)
                .with_pages(4),
        );
        assert!(engine.is_pdf_content());

        engine.index_page(
            "Shipping takes three days.",
            PageMetadata::new("Acme", "https://acme.test/"),
        );
        assert!(!engine.is_pdf_content());

        let results = engine.retrieve("shipping", None);
        assert_eq!(results.len(), 2);
        assert_eq!(results[0].similarity, results[1].similarity);
        assert_eq!(results[0].source(), ContentSource::CurrentPage);
        assert_eq!(results[1].source(), ContentSource::Pdf);
        assert_eq!(results[1].chunk.metadata.pages, Some(4));
    }

    #[test]
    fn test_existing_vectors_keep_stale_weights_by_default() {
        let mut engine = engine(RagSettings::default());
        engine.index_page("Alpha beta gamma.", PageMetadata::new("A", "https://a.test/"));
        engine.index_page("Delta epsilon zeta.", PageMetadata::new("B", "https://b.test/"));

        assert!((engine.vectorizer.idf("alpha").unwrap() - 2.0f64.ln()).abs() < 1e-12);
        assert_eq!(engine.chunks()[0].vector.get("alpha"), Some(&0.0));
        assert!(engine.chunks()[1].vector["delta"] > 0.0);

        let results = engine.retrieve("alpha", None);
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].semantic_score, 0.0);
    }

    #[test]
    fn test_revectorize_refreshes_existing_vectors() {
        let mut settings = RagSettings::default();
        settings.rag.revectorize_on_idf_change = true;
        let mut engine = engine(settings);
        engine.index_page("Alpha beta gamma.", PageMetadata::new("A", "https://a.test/"));
        engine.index_page("Delta epsilon zeta.", PageMetadata::new("B", "https://b.test/"));

        let alpha = engine.chunks()[0].vector["alpha"];
        assert!((alpha - 2.0f64.ln() / 3.0).abs() < 1e-12);

        let results = engine.retrieve("alpha", None);
        assert_eq!(results.len(), 1);
        assert!((results[0].semantic_score - 1.0 / 3.0f64.sqrt()).abs() < 1e-9);
    }

    #[test]
    fn test_clear_is_idempotent() {
        let mut engine = engine(RagSettings::default());
        engine.index_page(PAGE_TEXT, PageMetadata::new("Acme", "https://acme.test/"));

        engine.clear();
        engine.reset();

        assert!(engine.is_empty());
        assert!(!engine.is_indexed());
        assert_eq!(engine.current_source(), None);
        assert_eq!(engine.stats().vocabulary_size, 0);
        assert!(engine.retrieve("pricing", None).is_empty());
    }

    #[test]
    fn test_empty_page_still_marks_indexed() {
        let mut engine = engine(RagSettings::default());
        assert_eq!(engine.index_page("   ", PageMetadata::new("Blank", "https://blank.test/")), 0);
        assert!(engine.is_indexed());
        assert!(engine.is_empty());
    }

    #[test]
    fn test_build_context_from_retrieval() {
        let mut engine = engine(settings(8, 0));
        engine.index_page(PAGE_TEXT, PageMetadata::new("Acme", "https://acme.test/"));

        let results = engine.retrieve("pricing", None);
        let context = engine.build_context(&results);
        assert!(context.starts_with("Relevant information:\n\n[1] Current page\n"));
        assert!(context.contains("ten dollars"));
        assert_eq!(engine.sources(&results), vec!["Current page".to_string()]);
        assert_eq!(engine.build_context(&[]), "");
    }

    #[tokio::test]
    async fn test_index_links_skips_failures() {
        let fetcher = StubFetcher::new(&[
            (
                "https://acme.test/pricing",
                "<html><head><title>Pricing</title></head><body><main>Plans cost twenty euros.</main></body></html>",
            ),
            (
                "https://acme.test/contact",
                "<html><body><nav>Menu</nav><div>Write to sales anytime.</div></body></html>",
            ),
            (
                "https://acme.test/empty",
                "<html><body><script>var x = 1;</script></body></html>",
            ),
        ]);
        let mut engine = RagEngine::with_fetcher(RagSettings::default(), fetcher).unwrap();
        engine.index_page("Welcome to Acme widgets.", PageMetadata::new("Acme", "https://acme.test/"));

        let candidates = urls(&[
            "https://acme.test/pricing",
            "https://acme.test/contact",
            "https://acme.test/missing",
            "https://acme.test/pricing",
            "https://acme.test/empty",
        ]);
        let report = engine.index_links(&candidates, "pricing", Some(4)).await;

        assert_eq!(
            report.selected,
            urls(&[
                "https://acme.test/pricing",
                "https://acme.test/contact",
                "https://acme.test/missing",
                "https://acme.test/empty",
            ])
        );
        assert_eq!(
            report.indexed,
            urls(&["https://acme.test/pricing", "https://acme.test/contact"])
        );
        assert_eq!(report.failed.len(), 2);
        assert_eq!(report.failed[0].0, "https://acme.test/missing");
        assert_eq!(report.failed[1].0, "https://acme.test/empty");
        assert_eq!(report.chunks_added, 2);

        // Linked pages do not change what the user is looking at.
        assert_eq!(engine.current_source(), Some(ContentSource::CurrentPage));

        let stats = engine.stats();
        assert_eq!(stats.total_chunks, 3);
        assert_eq!(stats.current_page_chunks, 1);
        assert_eq!(stats.linked_page_chunks, 2);
        assert_eq!(
            stats.linked_urls,
            urls(&["https://acme.test/pricing", "https://acme.test/contact"])
        );

        let titles: Vec<&str> = engine.chunks()[1..]
            .iter()
            .map(|c| c.metadata.title.as_str())
            .collect();
        assert_eq!(titles, vec!["Pricing", "https://acme.test/contact"]);

        let results = engine.retrieve("twenty euros", None);
        assert_eq!(results[0].source(), ContentSource::LinkedPage);
        assert!(engine
            .build_context(&results)
            .contains("[1] Linked page: https://acme.test/pricing\n"));
    }

    #[tokio::test]
    async fn test_index_links_respects_limit_and_empty_input() {
        let fetcher = StubFetcher::new(&[(
            "https://acme.test/contact",
            "<body><article>Call us today.</article></body>",
        )]);
        let mut engine = RagEngine::with_fetcher(RagSettings::default(), fetcher).unwrap();

        let report = engine.index_links(&[], "anything", None).await;
        assert_eq!(report, LinkIndexReport::default());
        assert!(!engine.is_indexed());

        let candidates = urls(&["https://acme.test/blog/a/b", "https://acme.test/contact"]);
        let report = engine.index_links(&candidates, "contact phone", Some(1)).await;
        assert_eq!(report.selected, urls(&["https://acme.test/contact"]));
        assert_eq!(report.chunks_added, 1);
        assert!(engine.is_indexed());
    }
}
