//! Readable-text extraction and same-site link discovery for fetched pages.

use std::collections::HashSet;
use std::sync::OnceLock;

use reqwest::Url;
use scraper::{ElementRef, Html, Node, Selector};

/// Subtrees whose text never reaches the index.
const SKIPPED_TAGS: [&str; 10] = [
    "script", "style", "nav", "footer", "header", "aside", "noscript", "template", "svg",
    "iframe",
];

const BINARY_EXTENSIONS: [&str; 14] = [
    ".pdf", ".jpg", ".jpeg", ".png", ".gif", ".webp", ".svg", ".zip", ".gz", ".mp3", ".mp4",
    ".css", ".js", ".ico",
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractedPage {
    pub title: Option<String>,
    pub text: String,
}

struct PageSelectors {
    article: Selector,
    main: Selector,
    role_main: Selector,
    body: Selector,
    title: Selector,
    h1: Selector,
    anchor: Selector,
}

static SELECTORS: OnceLock<PageSelectors> = OnceLock::new();

fn selectors() -> &'static PageSelectors {
    SELECTORS.get_or_init(|| PageSelectors {
        article: Selector::parse("article").expect("article selector"),
        main: Selector::parse("main").expect("main selector"),
        role_main: Selector::parse(r#"[role="main"]"#).expect("role selector"),
        body: Selector::parse("body").expect("body selector"),
        title: Selector::parse("title").expect("title selector"),
        h1: Selector::parse("h1").expect("h1 selector"),
        anchor: Selector::parse("a[href]").expect("anchor selector"),
    })
}

/// Main text of an HTML document plus its title.
///
/// Text is taken from the first `article`, `main` or `[role=main]` element
/// that is not itself inside skipped boilerplate, falling back to `body`.
/// Navigation, headers, footers, asides, scripts and styles are skipped.
pub fn extract_page(html: &str) -> ExtractedPage {
    let document = Html::parse_document(html);
    let selectors = selectors();
    let root = pick_root(&document, selectors);

    let title = first_text(&document, &selectors.title)
        .or_else(|| first_text(&document, &selectors.h1));

    ExtractedPage {
        title,
        text: collect_text(root),
    }
}

fn pick_root<'a>(document: &'a Html, selectors: &PageSelectors) -> ElementRef<'a> {
    [
        &selectors.article,
        &selectors.main,
        &selectors.role_main,
        &selectors.body,
    ]
    .into_iter()
    .find_map(|selector| {
        document
            .select(selector)
            .find(|candidate| !inside_skipped(candidate))
    })
    .unwrap_or_else(|| document.root_element())
}

/// True when an ancestor of `element` is one of `SKIPPED_TAGS`.
fn inside_skipped(element: &ElementRef<'_>) -> bool {
    element
        .ancestors()
        .filter_map(ElementRef::wrap)
        .any(|ancestor| SKIPPED_TAGS.contains(&ancestor.value().name()))
}

fn first_text(document: &Html, selector: &Selector) -> Option<String> {
    document
        .select(selector)
        .next()
        .map(|element| collapse_whitespace(&element.text().collect::<Vec<_>>().join(" ")))
        .filter(|text| !text.is_empty())
}

fn collect_text(root: ElementRef<'_>) -> String {
    let mut pieces: Vec<&str> = Vec::new();

    for node in root.descendants() {
        let Node::Text(text) = node.value() else {
            continue;
        };
        let skipped = node
            .ancestors()
            .filter_map(ElementRef::wrap)
            .any(|element| SKIPPED_TAGS.contains(&element.value().name()));
        if skipped {
            continue;
        }

        let trimmed = text.trim();
        if !trimmed.is_empty() {
            pieces.push(trimmed);
        }
    }

    collapse_whitespace(&pieces.join(" "))
}

fn collapse_whitespace(input: &str) -> String {
    input.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Absolute http(s) links in `html` that stay on `base_url`'s host.
///
/// Fragments are dropped, `www.` is ignored when comparing hosts, binary
/// resources and the base page itself are skipped, and order of first
/// appearance is kept.
pub fn same_site_links(html: &str, base_url: &str) -> Vec<String> {
    let Ok(mut base) = Url::parse(base_url) else {
        return Vec::new();
    };
    base.set_fragment(None);
    let base_host = base.host_str().map(strip_www).unwrap_or_default().to_string();

    let document = Html::parse_document(html);
    let mut seen: HashSet<String> = HashSet::new();
    seen.insert(base.to_string());
    let mut links = Vec::new();

    for anchor in document.select(&selectors().anchor) {
        let Some(href) = anchor.value().attr("href").map(str::trim) else {
            continue;
        };
        if href.is_empty() || href.starts_with('#') {
            continue;
        }

        let Ok(mut resolved) = base.join(href) else {
            continue;
        };
        if !matches!(resolved.scheme(), "http" | "https") {
            continue;
        }
        if resolved.host_str().map(strip_www) != Some(base_host.as_str()) {
            continue;
        }
        resolved.set_fragment(None);

        let path = resolved.path().to_lowercase();
        if BINARY_EXTENSIONS.iter().any(|ext| path.ends_with(ext)) {
            continue;
        }

        let link = resolved.to_string();
        if seen.insert(link.clone()) {
            links.push(link);
        }
    }

    links
}

fn strip_www(host: &str) -> &str {
    host.strip_prefix("www.").unwrap_or(host)
}

#[cfg(test)]
mod tests {
    use super::*;

    const PAGE: &str = r#"
        <html>
          <head><title> Acme  Pricing </title><style>.x { color: red; }</style></head>
          <body>
            <header>Acme header menu</header>
            <nav><a href="/about">About</a></nav>
            <article>
              <h1>Plans</h1>
              <p>Our pricing starts at $10.</p>
              <aside>Related: newsletter signup</aside>
              <script>var tracking = 1;</script>
              <p>Enterprise plans are custom.</p>
            </article>
            <footer>Copyright Acme</footer>
          </body>
        </html>
    "#;

    #[test]
    fn extracts_article_text_without_boilerplate() {
        let page = extract_page(PAGE);

        assert_eq!(page.title.as_deref(), Some("Acme Pricing"));
        assert_eq!(
            page.text,
            "Plans Our pricing starts at $10. Enterprise plans are custom."
        );
        assert!(!page.text.contains("tracking"));
        assert!(!page.text.contains("newsletter"));
    }

    #[test]
    fn falls_back_to_role_main_then_body() {
        let role = extract_page(
            r#"<body><div role="main">Main area text.</div><footer>Foot</footer></body>"#,
        );
        assert_eq!(role.text, "Main area text.");

        let body = extract_page(
            "<html><body><header>Top</header><div>Body text here.</div><nav>Menu</nav></body></html>",
        );
        assert_eq!(body.text, "Body text here.");
        assert_eq!(body.title, None);
    }

    #[test]
    fn article_inside_aside_is_not_the_root() {
        let page = extract_page(
            "<body><aside><article>Related story teaser.</article></aside>\
             <main><p>Our pricing starts at ten dollars.</p></main></body>",
        );
        assert_eq!(page.text, "Our pricing starts at ten dollars.");
    }

    #[test]
    fn article_inside_header_falls_through_to_body() {
        let page = extract_page(
            "<body><header><article>Breaking banner.</article></header>\
             <div>Shipping takes three days.</div></body>",
        );
        assert_eq!(page.text, "Shipping takes three days.");
    }

    #[test]
    fn title_falls_back_to_first_heading() {
        let page = extract_page("<body><main><h1>Careers</h1><p>Join us.</p></main></body>");
        assert_eq!(page.title.as_deref(), Some("Careers"));
    }

    #[test]
    fn same_site_links_resolve_and_filter() {
        let html = r##"
            <a href="/pricing">Pricing</a>
            <a href="https://www.acme.test/contact#form">Contact</a>
            <a href="https://other.test/pricing">Elsewhere</a>
            <a href="mailto:sales@acme.test">Mail</a>
            <a href="#top">Top</a>
            <a href="/brochure.pdf">Brochure</a>
            <a href="/pricing#faq">Pricing FAQ</a>
            <a href="https://acme.test/products/">Products</a>
            <a href="https://acme.test/">Home</a>
        "##;

        let links = same_site_links(html, "https://acme.test/");
        assert_eq!(
            links,
            vec![
                "https://acme.test/pricing".to_string(),
                "https://www.acme.test/contact".to_string(),
                "https://acme.test/products/".to_string(),
            ]
        );
    }

    #[test]
    fn invalid_base_url_yields_no_links() {
        assert!(same_site_links(r#"<a href="/x">x</a>"#, "not a url").is_empty());
    }
}
