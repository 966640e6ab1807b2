use htmd::HtmlToMarkdown;
use scraper::{Html, Selector};

/// Tags whose content never ends up in converted text
const SKIPPED_TAGS: [&str; 4] = ["script", "style", "noscript", "template"];

/// Title and `<body>` markup taken from a single parse of a document
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    /// Trimmed `<title>` text, if present and non-empty
    pub title: Option<String>,
    /// Markup inside `<body>`, or the whole document when there is none
    pub body: String,
}

/// Parses `html` once and pulls out its title and body markup
pub fn parse_document(html: &str) -> Document {
    let doc = Html::parse_document(html);

    let title = Selector::parse("title").ok().and_then(|selector| {
        doc.select(&selector)
            .next()
            .map(|el| el.text().collect::<String>().trim().to_string())
            .filter(|t| !t.is_empty())
    });

    let body = Selector::parse("body")
        .ok()
        .and_then(|selector| doc.select(&selector).next().map(|body| body.inner_html()));

    let body = match body {
        Some(inner) => inner,
        None => {
            ::log::debug!("No <body> element found, using whole document");
            doc.root_element().html()
        }
    };

    Document { title, body }
}

/// Converts an HTML fragment or document to markdown, dropping script-like tags
pub fn to_markdown(html: &str) -> std::io::Result<String> {
    HtmlToMarkdown::builder()
        .skip_tags(SKIPPED_TAGS.to_vec())
        .build()
        .convert(html)
}
