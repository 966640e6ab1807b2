use url::Url;

/// Schemes accepted by the extractor, checked as literal prefixes
const ALLOWED_PREFIXES: [&str; 2] = ["http://", "https://"];

/// Check if a value is blank (absent, empty, or whitespace-only)
pub fn is_blank(value: Option<&str>) -> bool {
    value.is_none_or(|v| v.trim().is_empty())
}

/// Validate that a value is a well-formed HTTP/HTTPS URL with a host
///
/// Never fails: any rejected input simply yields `false`.
pub fn is_valid_url(value: Option<&str>) -> bool {
    let Some(value) = value else {
        return false;
    };

    if is_blank(Some(value)) {
        return false;
    }

    if value.chars().any(char::is_whitespace) {
        return false;
    }

    let Some(rest) = ALLOWED_PREFIXES
        .iter()
        .find_map(|prefix| value.strip_prefix(*prefix))
    else {
        return false;
    };

    // The WHATWG parser skips extra slashes ("http:///path" becomes host "path"),
    // so the raw authority has to be checked before parsing.
    if authority(rest).is_empty() {
        return false;
    }

    match Url::parse(value) {
        Ok(url) => !url.scheme().is_empty() && url.host_str().is_some_and(|h| !h.is_empty()),
        Err(e) => {
            ::log::debug!("URL parse failed for {}: {}", value, e);
            false
        }
    }
}

/// Returns the authority component of the text following `scheme://`
fn authority(rest: &str) -> &str {
    let end = rest.find(['/', '?', '#']).unwrap_or(rest.len());
    &rest[..end]
}
