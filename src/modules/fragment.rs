// Location fragment helpers - pure logic, no Tauri imports.

use url::Url;

/// Turns a raw `location.hash` value into a page token.
///
/// The leading `#` is optional. Percent-escapes are decoded so that ids
/// containing spaces or non-ASCII characters round-trip through the browser.
/// Returns `None` when nothing is left.
pub fn token_from_hash(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    let stripped = trimmed.strip_prefix('#').unwrap_or(trimmed);
    if stripped.is_empty() {
        return None;
    }

    let token = match urlencoding::decode(stripped) {
        Ok(decoded) => decoded.into_owned(),
        // Invalid UTF-8 after decoding: keep the raw token
        Err(_) => stripped.to_string(),
    };

    if token.is_empty() {
        None
    } else {
        Some(token)
    }
}

/// Builds a shareable link by replacing the fragment of `base` with `token`.
pub fn share_link(base: &str, token: &str) -> Result<String, url::ParseError> {
    let mut url = Url::parse(base)?;
    url.set_fragment(Some(token));
    Ok(url.to_string())
}
