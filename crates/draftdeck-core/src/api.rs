//! HTTP repository client for the draft review backend.

use reqwest::StatusCode;
use serde::Deserialize;
use tracing::debug;

use crate::error::{ApiError, Result};
use crate::model::{DraftDetail, DraftPatch, DraftSummary, IgnoredEmailSummary};

/// Typed client for the review backend.
///
/// All operations are single request/response - no retries and no
/// client-side idempotency keys. Every call is user-triggered and
/// user-visible on failure, so at-most-once delivery is adequate.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    api_base: String,
    oauth_base: String,
}

/// Response body of `GET {OAUTH_BASE}/authorize`.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
struct AuthorizeResponse {
    auth_url: Option<String>,
    error: Option<String>,
}

impl ApiClient {
    /// Creates a client for the given data and session base URLs.
    ///
    /// Trailing slashes are trimmed so path joining stays predictable.
    #[must_use]
    pub fn new(api_base: impl Into<String>, oauth_base: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            api_base: api_base.into().trim_end_matches('/').to_string(),
            oauth_base: oauth_base.into().trim_end_matches('/').to_string(),
        }
    }

    /// URL for a single draft; the identifier is opaque and percent-encoded.
    fn draft_url(&self, email_id: &str) -> String {
        format!("{}/drafts/{}", self.api_base, urlencoding::encode(email_id))
    }

    /// Lists every draft summary known to the backend.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Fetch`] on a non-2xx response.
    pub async fn list_drafts(&self) -> Result<Vec<DraftSummary>> {
        let resp = self
            .http
            .get(format!("{}/drafts", self.api_base))
            .send()
            .await?;
        if !resp.status().is_success() {
            return Err(ApiError::Fetch("drafts"));
        }
        resp.json().await.map_err(|_| ApiError::Fetch("drafts"))
    }

    /// Fetches the full record for one draft.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::NotFound`] on 404, [`ApiError::Fetch`] on any
    /// other non-2xx response.
    pub async fn draft_detail(&self, email_id: &str) -> Result<DraftDetail> {
        let resp = self.http.get(self.draft_url(email_id)).send().await?;
        match resp.status() {
            StatusCode::NOT_FOUND => Err(ApiError::NotFound),
            s if s.is_success() => resp.json().await.map_err(|_| ApiError::Fetch("draft")),
            _ => Err(ApiError::Fetch("draft")),
        }
    }

    /// Applies a partial update to a draft.
    ///
    /// Fields present in the payload are set; a no-op patch is legal.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::NotFound`] on 404, [`ApiError::Update`] on any
    /// other non-2xx response.
    pub async fn update_draft(&self, email_id: &str, patch: &DraftPatch) -> Result<()> {
        let resp = self
            .http
            .patch(self.draft_url(email_id))
            .json(patch)
            .send()
            .await?;
        match resp.status() {
            StatusCode::NOT_FOUND => Err(ApiError::NotFound),
            s if s.is_success() => Ok(()),
            _ => Err(ApiError::Update("draft")),
        }
    }

    /// Marks a draft rejected.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::NotFound`] on 404, [`ApiError::Transition`]
    /// otherwise.
    pub async fn reject_draft(&self, email_id: &str) -> Result<()> {
        self.transition(email_id, "reject").await
    }

    /// Marks a draft skipped.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::NotFound`] on 404, [`ApiError::Transition`]
    /// otherwise.
    pub async fn skip_draft(&self, email_id: &str) -> Result<()> {
        self.transition(email_id, "skip").await
    }

    async fn transition(&self, email_id: &str, action: &'static str) -> Result<()> {
        let resp = self
            .http
            .patch(format!("{}/{action}", self.draft_url(email_id)))
            .send()
            .await?;
        match resp.status() {
            StatusCode::NOT_FOUND => Err(ApiError::NotFound),
            s if s.is_success() => Ok(()),
            _ => Err(ApiError::Transition(action)),
        }
    }

    /// Triggers delivery of the current draft content server-side.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::NotFound`] on 404. Any other failure surfaces the
    /// server-provided message text verbatim when present
    /// ([`ApiError::Send`]); the cause is often actionable (quota, invalid
    /// recipient).
    pub async fn send_draft(&self, email_id: &str) -> Result<()> {
        let resp = self
            .http
            .post(format!("{}/send", self.draft_url(email_id)))
            .send()
            .await?;
        match resp.status() {
            StatusCode::NOT_FOUND => Err(ApiError::NotFound),
            s if s.is_success() => Ok(()),
            _ => {
                let text = resp.text().await.unwrap_or_default();
                if text.is_empty() {
                    Err(ApiError::Send("Failed to send email".to_string()))
                } else {
                    Err(ApiError::Send(text))
                }
            }
        }
    }

    /// Lists emails excluded from draft generation.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Fetch`] on a non-2xx response.
    pub async fn ignored_emails(&self) -> Result<Vec<IgnoredEmailSummary>> {
        let resp = self
            .http
            .get(format!("{}/emails/ignored", self.api_base))
            .send()
            .await?;
        if !resp.status().is_success() {
            return Err(ApiError::Fetch("ignored emails"));
        }
        resp.json()
            .await
            .map_err(|_| ApiError::Fetch("ignored emails"))
    }

    /// Fetches the ignore-phrase list.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Fetch`] on a non-2xx response.
    pub async fn ignore_phrases(&self) -> Result<Vec<String>> {
        let resp = self
            .http
            .get(format!("{}/preferences/ignores", self.api_base))
            .send()
            .await?;
        if !resp.status().is_success() {
            return Err(ApiError::Fetch("ignore preferences"));
        }
        resp.json()
            .await
            .map_err(|_| ApiError::Fetch("ignore preferences"))
    }

    /// Replaces the ignore-phrase list.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Update`] on a non-2xx response.
    pub async fn set_ignore_phrases(&self, phrases: &[String]) -> Result<()> {
        let resp = self
            .http
            .put(format!("{}/preferences/ignores", self.api_base))
            .json(&phrases)
            .send()
            .await?;
        if !resp.status().is_success() {
            return Err(ApiError::Update("ignore preferences"));
        }
        Ok(())
    }

    /// Fetches the default sign-off string.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Fetch`] on a non-2xx response.
    pub async fn signoff(&self) -> Result<String> {
        let resp = self
            .http
            .get(format!("{}/preferences/signoff", self.api_base))
            .send()
            .await?;
        if !resp.status().is_success() {
            return Err(ApiError::Fetch("sign-off preference"));
        }
        resp.json()
            .await
            .map_err(|_| ApiError::Fetch("sign-off preference"))
    }

    /// Replaces the default sign-off string.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Update`] on a non-2xx response.
    pub async fn set_signoff(&self, signoff: &str) -> Result<()> {
        let resp = self
            .http
            .put(format!("{}/preferences/signoff", self.api_base))
            .json(&signoff)
            .send()
            .await?;
        if !resp.status().is_success() {
            return Err(ApiError::Update("sign-off preference"));
        }
        Ok(())
    }

    /// Triggers an inbound mail poll on the backend.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Poll`] on a non-2xx response; callers surface it
    /// as a transient notice and still schedule a deferred list refresh.
    pub async fn trigger_poll(&self) -> Result<()> {
        let resp = self
            .http
            .get(format!("{}/gmail/poll", self.api_base))
            .send()
            .await?;
        if !resp.status().is_success() {
            return Err(ApiError::Poll);
        }
        Ok(())
    }

    /// Checks whether the backend session is authenticated.
    ///
    /// A non-2xx answer means unauthenticated, not an error.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Network`] when the server is unreachable; callers
    /// treat that as signed out.
    pub async fn session_active(&self) -> Result<bool> {
        let resp = self
            .http
            .get(format!("{}/status", self.oauth_base))
            .send()
            .await?;
        Ok(resp.status().is_success())
    }

    /// Fetches the URL the user must visit to sign in.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Auth`] with the server-provided message when the
    /// response carries an `error` instead of a URL.
    pub async fn authorize_url(&self) -> Result<String> {
        let resp = self
            .http
            .get(format!("{}/authorize", self.oauth_base))
            .send()
            .await?;
        let body: AuthorizeResponse = resp
            .json()
            .await
            .map_err(|_| ApiError::Auth("Could not get sign-in URL".to_string()))?;
        match (body.auth_url, body.error) {
            (Some(url), _) => Ok(url),
            (None, Some(error)) => Err(ApiError::Auth(error)),
            (None, None) => Err(ApiError::Auth("Could not get sign-in URL".to_string())),
        }
    }

    /// Ends the backend session, best effort.
    ///
    /// Failures are logged and swallowed by design; the caller clears its
    /// local session perception and navigates regardless of the server
    /// outcome.
    pub async fn logout(&self) {
        let result = self
            .http
            .post(format!("{}/logout", self.oauth_base))
            .send()
            .await;
        if let Err(e) = result {
            debug!("logout request failed: {e}");
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn client(server: &mockito::Server) -> ApiClient {
        ApiClient::new(server.url(), format!("{}/oauth2", server.url()))
    }

    #[tokio::test]
    async fn test_list_drafts() {
        let mut server = mockito::Server::new_async().await;
        let _m = server
            .mock("GET", "/drafts")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"[{"emailId":"a1","status":"Pending"},{"emailId":"a2","status":"ACCEPTED"}]"#)
            .create_async()
            .await;

        let drafts = client(&server).list_drafts().await.unwrap();
        assert_eq!(drafts.len(), 2);
        assert_eq!(drafts[0].email_id, "a1");
        assert_eq!(drafts[1].state(), crate::DraftStatus::Accepted);
    }

    #[tokio::test]
    async fn test_list_drafts_server_error() {
        let mut server = mockito::Server::new_async().await;
        let _m = server
            .mock("GET", "/drafts")
            .with_status(500)
            .create_async()
            .await;

        let err = client(&server).list_drafts().await.unwrap_err();
        assert_eq!(err.to_string(), "Failed to load drafts");
    }

    #[tokio::test]
    async fn test_draft_detail_not_found() {
        let mut server = mockito::Server::new_async().await;
        let _m = server
            .mock("GET", "/drafts/missing")
            .with_status(404)
            .create_async()
            .await;

        let err = client(&server).draft_detail("missing").await.unwrap_err();
        assert!(matches!(err, ApiError::NotFound));
        assert_eq!(err.to_string(), "Draft not found");
    }

    #[tokio::test]
    async fn test_identifier_is_percent_encoded() {
        let mut server = mockito::Server::new_async().await;
        let _m = server
            .mock("GET", "/drafts/a%2Fb%20c")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body("{}")
            .create_async()
            .await;

        let detail = client(&server).draft_detail("a/b c").await.unwrap();
        assert!(detail.email.is_none());
        assert!(detail.draft.is_none());
    }

    #[tokio::test]
    async fn test_update_draft_sends_camel_case_body() {
        let mut server = mockito::Server::new_async().await;
        let m = server
            .mock("PATCH", "/drafts/a1")
            .match_body(mockito::Matcher::Json(serde_json::json!({
                "draftText": "body",
                "draftSubject": "subject",
            })))
            .with_status(200)
            .create_async()
            .await;

        let patch = DraftPatch {
            draft_text: Some("body".to_string()),
            draft_subject: Some("subject".to_string()),
        };
        client(&server).update_draft("a1", &patch).await.unwrap();
        m.assert_async().await;
    }

    #[tokio::test]
    async fn test_transitions_use_patch() {
        let mut server = mockito::Server::new_async().await;
        let reject = server
            .mock("PATCH", "/drafts/a1/reject")
            .with_status(200)
            .create_async()
            .await;
        let skip = server
            .mock("PATCH", "/drafts/a2/skip")
            .with_status(200)
            .create_async()
            .await;

        let api = client(&server);
        api.reject_draft("a1").await.unwrap();
        api.skip_draft("a2").await.unwrap();
        reject.assert_async().await;
        skip.assert_async().await;
    }

    #[tokio::test]
    async fn test_transition_failure_message() {
        let mut server = mockito::Server::new_async().await;
        let _m = server
            .mock("PATCH", "/drafts/a1/skip")
            .with_status(409)
            .create_async()
            .await;

        let err = client(&server).skip_draft("a1").await.unwrap_err();
        assert_eq!(err.to_string(), "Failed to skip draft");
    }

    #[tokio::test]
    async fn test_send_surfaces_server_text_verbatim() {
        let mut server = mockito::Server::new_async().await;
        let _m = server
            .mock("POST", "/drafts/a1/send")
            .with_status(500)
            .with_body("quota exceeded")
            .create_async()
            .await;

        let err = client(&server).send_draft("a1").await.unwrap_err();
        assert_eq!(err.to_string(), "quota exceeded");
    }

    #[tokio::test]
    async fn test_send_empty_body_falls_back_to_generic() {
        let mut server = mockito::Server::new_async().await;
        let _m = server
            .mock("POST", "/drafts/a1/send")
            .with_status(500)
            .create_async()
            .await;

        let err = client(&server).send_draft("a1").await.unwrap_err();
        assert_eq!(err.to_string(), "Failed to send email");
    }

    #[tokio::test]
    async fn test_signoff_roundtrip() {
        let mut server = mockito::Server::new_async().await;
        let _get = server
            .mock("GET", "/preferences/signoff")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#""Cheers, Ada""#)
            .create_async()
            .await;
        let put = server
            .mock("PUT", "/preferences/signoff")
            .match_body(mockito::Matcher::Json(serde_json::json!("Cheers, Ada")))
            .with_status(200)
            .create_async()
            .await;

        let api = client(&server);
        assert_eq!(api.signoff().await.unwrap(), "Cheers, Ada");
        api.set_signoff("Cheers, Ada").await.unwrap();
        put.assert_async().await;
    }

    #[tokio::test]
    async fn test_set_ignore_phrases_puts_full_list() {
        let mut server = mockito::Server::new_async().await;
        let m = server
            .mock("PUT", "/preferences/ignores")
            .match_body(mockito::Matcher::Json(serde_json::json!([
                "github emails",
                "newsletters",
            ])))
            .with_status(200)
            .create_async()
            .await;

        let phrases = vec!["github emails".to_string(), "newsletters".to_string()];
        client(&server).set_ignore_phrases(&phrases).await.unwrap();
        m.assert_async().await;
    }

    #[tokio::test]
    async fn test_session_active_maps_status() {
        let mut server = mockito::Server::new_async().await;
        let _m = server
            .mock("GET", "/oauth2/status")
            .with_status(401)
            .create_async()
            .await;

        assert!(!client(&server).session_active().await.unwrap());
    }

    #[tokio::test]
    async fn test_authorize_url_error_payload() {
        let mut server = mockito::Server::new_async().await;
        let _m = server
            .mock("GET", "/oauth2/authorize")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{"error":"OAuth is not configured"}"#)
            .create_async()
            .await;

        let err = client(&server).authorize_url().await.unwrap_err();
        assert_eq!(err.to_string(), "OAuth is not configured");
    }

    #[tokio::test]
    async fn test_logout_swallows_failure() {
        let mut server = mockito::Server::new_async().await;
        let _m = server
            .mock("POST", "/oauth2/logout")
            .with_status(500)
            .create_async()
            .await;

        // Must not panic or return anything.
        client(&server).logout().await;
    }
}
