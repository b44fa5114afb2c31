//! Sign-in helpers for the session-provider collaborator.

/// Opens the sign-in URL in the system browser.
///
/// # Errors
///
/// Returns a display-ready message when the browser cannot be launched.
pub fn open_in_browser(url: &str) -> Result<(), String> {
    opener::open(url).map_err(|e| format!("Could not open browser: {e}"))
}

/// Maps session-provider error codes to human-readable messages.
///
/// The provider reports failures as short codes; anything else is already a
/// sentence and passes through unchanged.
#[must_use]
pub fn friendly_auth_error(raw: &str) -> String {
    match raw {
        "missing_code" => "Sign-in was cancelled or no code was received.".to_string(),
        "config_incomplete" => "Server OAuth is not configured.".to_string(),
        "exchange_failed" => "Token exchange failed. Try again.".to_string(),
        "unexpected" => "Something went wrong. Try again.".to_string(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_codes_map_to_sentences() {
        assert_eq!(
            friendly_auth_error("config_incomplete"),
            "Server OAuth is not configured."
        );
        assert_eq!(
            friendly_auth_error("missing_code"),
            "Sign-in was cancelled or no code was received."
        );
    }

    #[test]
    fn test_sentences_pass_through() {
        assert_eq!(
            friendly_auth_error("Could not get sign-in URL"),
            "Could not get sign-in URL"
        );
    }
}
