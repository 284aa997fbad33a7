//! Heuristic ranking of same-site URLs against a user question.
//!
//! Scores combine literal keyword hits in the URL, multilingual category
//! matches shared by the question and the URL, a penalty for deep paths and a
//! small bonus for document-like extensions. The category table is plain data
//! and can be extended from config.

use regex::{Regex, RegexBuilder};
use reqwest::Url;

use super::tokenizer::tokenize;
use crate::core::config::{CategoryPattern, UrlScorerSettings};
use crate::core::errors::RagError;

const KEYWORD_HIT_SCORE: f64 = 5.0;
const CATEGORY_MATCH_SCORE: f64 = 10.0;
const DEPTH_PENALTY: f64 = 0.5;
const DOCUMENT_EXTENSION_BONUS: f64 = 2.0;
const DOCUMENT_EXTENSIONS: [&str; 3] = [".html", ".htm", ".php"];

/// Built-in categories with EN/ES/FR/DE/IT/PT keyword variants.
pub const DEFAULT_CATEGORIES: &[(&str, &str)] = &[
    (
        "contact",
        r"contact|contacto|contactanos|contáctanos|contatto|contato|kontakt|contactez|get-in-touch|reach-us",
    ),
    (
        "products",
        r"product|producto|produit|prodotto|produto|produkt|shop|tienda|store|catalog|catálogo|catalogo|catalogue|katalog|boutique|negozio|loja",
    ),
    (
        "services",
        r"service|servicio|servizio|serviço|servico|dienstleistung|leistungen",
    ),
    (
        "pricing",
        r"pricing|price|precio|tarifa|tarif|prix|prezz|preço|preco|preis|plans|cost|coste|costo|custo|kosten|subscription|suscripci",
    ),
    (
        "about",
        r"about|acerca|nosotros|quienes-somos|qui-sommes|a-propos|à-propos|chi-siamo|sobre|über-uns|ueber-uns|company|empresa|entreprise|azienda|unternehmen|team|equipo",
    ),
    (
        "help",
        r"help|ayuda|aide|aiuto|ajuda|hilfe|support|soporte|suporte|faq|preguntas|assistance|assistenza",
    ),
    (
        "blog",
        r"blog|news|noticias|actualit|notizie|notícias|nachrichten|article|artículo|articulo",
    ),
    (
        "careers",
        r"career|jobs|empleo|trabajo|emploi|carrière|carriere|lavoro|carriera|vagas|carreira|karriere|stellen",
    ),
    (
        "features",
        r"feature|características|caracteristicas|fonctionnalit|funzionalit|funcionalidades|funktionen",
    ),
    (
        "documentation",
        r"docs|documentation|documentación|documentacion|documentazione|documentação|dokumentation|guide|guía|tutorial|manual|reference",
    ),
    (
        "download",
        r"download|descarga|télécharg|telecharg|scarica|baixar|herunterladen",
    ),
    (
        "account",
        r"account|cuenta|compte|conto|conta|konto|login|signin|sign-in|signup|register|registro|profile|perfil|profil",
    ),
    (
        "legal",
        r"legal|privacy|privacidad|privacidade|confidentialit|terms|términos|terminos|conditions|condiciones|cookies|impressum|mentions-legales|aviso-legal|datenschutz",
    ),
    (
        "portfolio",
        r"portfolio|portafolio|portefeuille|portfólio|projects|proyectos|projets|progetti|projetos|projekte|case-stud",
    ),
    (
        "reviews",
        r"review|testimonial|opiniones|reseñas|avis|recensioni|avaliações|avaliacoes|bewertungen|rating",
    ),
    (
        "partners",
        r"partner|socios|partenaires|parceiros|affiliate|alliances",
    ),
    (
        "events",
        r"event|eventos|événements|evenements|eventi|veranstaltungen|webinar|conference|conferencia|agenda|calendar",
    ),
];

/// A named, case-insensitive pattern matched against both question and URL.
#[derive(Debug, Clone)]
pub struct UrlCategory {
    pub name: String,
    pub pattern: Regex,
}

impl UrlCategory {
    pub fn new(name: &str, pattern: &str) -> Result<Self, RagError> {
        let pattern = RegexBuilder::new(pattern)
            .case_insensitive(true)
            .build()
            .map_err(|err| RagError::Config(format!("url category '{}': {}", name, err)))?;
        Ok(Self {
            name: name.to_string(),
            pattern,
        })
    }

    pub fn matches_both(&self, question: &str, url: &str) -> bool {
        self.pattern.is_match(question) && self.pattern.is_match(url)
    }
}

/// A URL with the score it received for one question.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoredUrl {
    pub url: String,
    pub score: f64,
}

#[derive(Debug, Clone)]
pub struct UrlScorer {
    categories: Vec<UrlCategory>,
}

impl UrlScorer {
    /// Scorer with the built-in category table.
    pub fn new() -> Self {
        let categories = DEFAULT_CATEGORIES
            .iter()
            .filter_map(|(name, pattern)| UrlCategory::new(name, pattern).ok())
            .collect();
        Self { categories }
    }

    /// Built-in table followed by the configured extra categories.
    pub fn from_settings(settings: &UrlScorerSettings) -> Result<Self, RagError> {
        let mut scorer = Self::new();
        for extra in &settings.extra_categories {
            scorer.add_category(extra)?;
        }
        Ok(scorer)
    }

    pub fn add_category(&mut self, category: &CategoryPattern) -> Result<(), RagError> {
        self.categories
            .push(UrlCategory::new(&category.name, &category.pattern)?);
        Ok(())
    }

    pub fn categories(&self) -> &[UrlCategory] {
        &self.categories
    }

    pub fn score_url(&self, url: &str, question: &str) -> f64 {
        let url_lower = url.to_lowercase();
        let mut score = 0.0;

        for token in tokenize(question) {
            if url_lower.contains(&token) {
                score += KEYWORD_HIT_SCORE;
            }
        }

        for category in &self.categories {
            if category.matches_both(question, &url_lower) {
                score += CATEGORY_MATCH_SCORE;
            }
        }

        let (depth, path) = path_depth_and_path(url);
        score -= DEPTH_PENALTY * depth as f64;

        let path_lower = path.to_lowercase();
        if DOCUMENT_EXTENSIONS
            .iter()
            .any(|ext| path_lower.ends_with(ext))
        {
            score += DOCUMENT_EXTENSION_BONUS;
        }

        f64::max(0.0, score)
    }

    /// Every candidate with its score, best first; ties keep input order.
    pub fn score_all(&self, urls: &[String], question: &str) -> Vec<ScoredUrl> {
        let mut scored: Vec<ScoredUrl> = urls
            .iter()
            .map(|url| ScoredUrl {
                url: url.clone(),
                score: self.score_url(url, question),
            })
            .collect();

        scored.sort_by(|a, b| b.score.total_cmp(&a.score));
        scored
    }

    pub fn rank_urls(&self, urls: &[String], question: &str, limit: usize) -> Vec<String> {
        self.score_all(urls, question)
            .into_iter()
            .take(limit)
            .map(|scored| scored.url)
            .collect()
    }
}

impl Default for UrlScorer {
    fn default() -> Self {
        Self::new()
    }
}

/// Number of non-empty path segments, and the path itself.
fn path_depth_and_path(url: &str) -> (usize, String) {
    match Url::parse(url) {
        Ok(parsed) => {
            let depth = parsed
                .path_segments()
                .map(|segments| segments.filter(|s| !s.is_empty()).count())
                .unwrap_or(0);
            (depth, parsed.path().to_string())
        }
        Err(_) => {
            // Relative or malformed: strip query/fragment and count raw segments.
            let path = url.split(['?', '#']).next().unwrap_or_default();
            let depth = path.split('/').filter(|s| !s.is_empty()).count();
            (depth, path.to_string())
        }
    }
}
