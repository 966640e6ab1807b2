pub mod html;
pub mod text;

#[cfg(test)]
mod tests;

/// Kind of document a fetched body holds
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentKind {
    /// HTML or XHTML markup
    Html,
    /// Anything else, treated as plain text
    Text,
}

impl ContentKind {
    /// Classifies a body from its Content-Type header, falling back to a markup check
    pub fn detect(content_type: Option<&str>, body: &str) -> Self {
        match content_type {
            Some(ct) => {
                let mime = ct.split(';').next().unwrap_or_default().trim().to_ascii_lowercase();
                if mime == "text/html" || mime == "application/xhtml+xml" {
                    ::log::debug!("Classifying as HTML from content type: {}", ct);
                    ContentKind::Html
                } else {
                    ::log::debug!("Classifying as Text from content type: {}", ct);
                    ContentKind::Text
                }
            }
            None if body.trim_start().starts_with('<') => {
                ::log::debug!("Classifying as HTML from markup (no content type)");
                ContentKind::Html
            }
            None => {
                ::log::debug!("Classifying as Text (no content type)");
                ContentKind::Text
            }
        }
    }

    /// Returns if the body should go through an HTML engine
    pub fn is_html(&self) -> bool {
        matches!(self, ContentKind::Html)
    }
}
