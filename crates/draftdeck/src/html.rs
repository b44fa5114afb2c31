//! HTML email bodies reduced to readable text.

/// Converts an HTML email body to readable plain text.
///
/// Bodies without markup pass through unchanged; conversion failures fall
/// back to the raw body rather than showing nothing.
#[must_use]
pub fn body_to_text(body: &str) -> String {
    if body.contains('<') {
        htmd::convert(body).unwrap_or_else(|_| body.to_string())
    } else {
        body.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_text_passes_through() {
        assert_eq!(body_to_text("Hi there,\nthanks!"), "Hi there,\nthanks!");
    }

    #[test]
    fn test_markup_is_stripped() {
        let text = body_to_text("<p>Hello <b>world</b></p>");
        assert!(text.contains("Hello"));
        assert!(text.contains("world"));
        assert!(!text.contains("<p>"));
    }
}
