//! Wire data model for the draft review backend.

use serde::{Deserialize, Serialize};

use crate::status::DraftStatus;

/// Summary item from `GET /drafts` - one per email known to the system.
///
/// Created server-side when a draft is generated and mutated server-side on
/// status transitions; the client never deletes one, only requests
/// transitions.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DraftSummary {
    /// Stable identifier of the inbound email (unique key, opaque).
    pub email_id: String,
    /// Subject of the inbound email.
    pub subject: Option<String>,
    /// Sender of the inbound email (`"Name <addr>"` or a bare address).
    pub from: Option<String>,
    /// Subject of the generated reply.
    pub draft_subject: Option<String>,
    /// Preview text of the inbound email.
    pub snippet: Option<String>,
    /// Raw lifecycle status string; canonicalize via [`DraftSummary::state`].
    pub status: Option<String>,
    /// When the draft was generated.
    pub generated_at: Option<String>,
    /// Backend-assigned category label (opaque, never matched on).
    pub category: Option<String>,
}

impl DraftSummary {
    /// Canonical lifecycle state of this draft.
    #[must_use]
    pub fn state(&self) -> DraftStatus {
        DraftStatus::parse(self.status.as_deref().unwrap_or(""))
    }

    /// Whether skipping is still offered for this draft.
    ///
    /// Terminal drafts cannot transition again, so the skip action is hidden
    /// for them.
    #[must_use]
    pub fn can_skip(&self) -> bool {
        !self.state().is_terminal()
    }
}

/// Email facet inside a draft detail.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EmailPart {
    /// Identifier of the inbound email.
    pub id: Option<String>,
    /// Sender.
    pub from: Option<String>,
    /// Subject line.
    pub subject: Option<String>,
    /// Body, possibly HTML.
    pub body: Option<String>,
    /// Receive date.
    pub date: Option<String>,
}

/// Draft facet inside a draft detail.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DraftPart {
    /// Generated reply body.
    pub draft_text: Option<String>,
    /// Generated reply subject.
    pub draft_subject: Option<String>,
    /// Raw lifecycle status string.
    pub status: Option<String>,
    /// When the draft was generated.
    pub generated_at: Option<String>,
    /// Backend-assigned category label.
    pub category: Option<String>,
}

/// Full record from `GET /drafts/:id`.
///
/// The `draft` facet may be absent even when `email` is present - the draft
/// has not been generated yet.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct DraftDetail {
    /// The inbound email under review.
    pub email: Option<EmailPart>,
    /// The generated reply, if any.
    pub draft: Option<DraftPart>,
}

impl DraftDetail {
    /// Merges a saved edit buffer into the draft facet.
    ///
    /// Only `draft_subject` and `draft_text` change; every other field keeps
    /// its value. The facet is created when the draft had not been generated.
    pub fn apply_edit(&mut self, subject: &str, text: &str) {
        let draft = self.draft.get_or_insert_with(DraftPart::default);
        draft.draft_subject = Some(subject.to_string());
        draft.draft_text = Some(text.to_string());
    }
}

/// Partial update payload for `PATCH /drafts/:id`.
///
/// Absent fields are left out of the request body; a no-op patch is legal.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DraftPatch {
    /// New reply body, if changed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub draft_text: Option<String>,
    /// New reply subject, if changed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub draft_subject: Option<String>,
}

/// Email excluded from draft generation by a user ignore rule.
///
/// There is no status field - membership in this collection is itself the
/// state.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct IgnoredEmailSummary {
    /// Stable identifier of the inbound email.
    pub email_id: String,
    /// Sender.
    pub from: Option<String>,
    /// Subject line.
    pub subject: Option<String>,
    /// Receive date.
    pub date: Option<String>,
    /// Preview text.
    pub snippet: Option<String>,
}

/// Extracts the display name from a `"Name <addr>"` sender string.
///
/// Falls back to the raw string when there is no angle-bracket form and to
/// `"Unknown"` when the value is missing or blank.
#[must_use]
pub fn sender_display_name(from: Option<&str>) -> String {
    let Some(trimmed) = from.map(str::trim).filter(|s| !s.is_empty()) else {
        return "Unknown".to_string();
    };
    if let Some((name, rest)) = trimmed.rsplit_once('<') {
        let name = name.trim();
        if rest.ends_with('>') && !name.is_empty() {
            return name.to_string();
        }
    }
    trimmed.to_string()
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_summary_state_canonicalizes() {
        let draft = DraftSummary {
            email_id: "a1".to_string(),
            status: Some("ACCEPTED".to_string()),
            ..Default::default()
        };
        assert_eq!(draft.state(), DraftStatus::Accepted);

        let missing = DraftSummary {
            email_id: "a2".to_string(),
            ..Default::default()
        };
        assert_eq!(missing.state(), DraftStatus::Pending);
    }

    #[test]
    fn test_can_skip_only_while_pending() {
        let mut draft = DraftSummary {
            email_id: "a1".to_string(),
            ..Default::default()
        };
        assert!(draft.can_skip());

        for terminal in ["accepted", "rejected", "skipped"] {
            draft.status = Some(terminal.to_string());
            assert!(!draft.can_skip(), "{terminal} should not be skippable");
        }
    }

    #[test]
    fn test_apply_edit_touches_only_subject_and_text() {
        let mut detail = DraftDetail {
            email: Some(EmailPart {
                from: Some("a@example.com".to_string()),
                ..Default::default()
            }),
            draft: Some(DraftPart {
                draft_text: Some("old body".to_string()),
                draft_subject: Some("old subject".to_string()),
                status: Some("pending".to_string()),
                generated_at: Some("2026-02-01T14:00:00".to_string()),
                category: Some("billing".to_string()),
            }),
        };
        let email_before = detail.email.clone();

        detail.apply_edit("new subject", "new body");

        let draft = detail.draft.as_ref().unwrap();
        assert_eq!(draft.draft_subject.as_deref(), Some("new subject"));
        assert_eq!(draft.draft_text.as_deref(), Some("new body"));
        assert_eq!(draft.status.as_deref(), Some("pending"));
        assert_eq!(draft.generated_at.as_deref(), Some("2026-02-01T14:00:00"));
        assert_eq!(draft.category.as_deref(), Some("billing"));
        assert_eq!(detail.email, email_before);
    }

    #[test]
    fn test_apply_edit_creates_missing_facet() {
        let mut detail = DraftDetail::default();
        detail.apply_edit("subject", "body");

        let draft = detail.draft.as_ref().unwrap();
        assert_eq!(draft.draft_subject.as_deref(), Some("subject"));
        assert_eq!(draft.draft_text.as_deref(), Some("body"));
        assert!(draft.status.is_none());
    }

    #[test]
    fn test_wire_field_names_are_camel_case() {
        let draft: DraftSummary = serde_json::from_str(
            r#"{"emailId":"a1","draftSubject":"Re: hi","generatedAt":"2026-02-01T14:00:00"}"#,
        )
        .unwrap();
        assert_eq!(draft.email_id, "a1");
        assert_eq!(draft.draft_subject.as_deref(), Some("Re: hi"));
        assert_eq!(draft.generated_at.as_deref(), Some("2026-02-01T14:00:00"));
    }

    #[test]
    fn test_patch_skips_absent_fields() {
        let patch = DraftPatch {
            draft_text: Some("body".to_string()),
            draft_subject: None,
        };
        let json = serde_json::to_string(&patch).unwrap();
        assert_eq!(json, r#"{"draftText":"body"}"#);
    }

    #[test]
    fn test_sender_display_name() {
        assert_eq!(
            sender_display_name(Some("Ada Lovelace <ada@example.com>")),
            "Ada Lovelace"
        );
        assert_eq!(
            sender_display_name(Some("ada@example.com")),
            "ada@example.com"
        );
        assert_eq!(
            sender_display_name(Some("<ada@example.com>")),
            "<ada@example.com>"
        );
        assert_eq!(sender_display_name(Some("   ")), "Unknown");
        assert_eq!(sender_display_name(None), "Unknown");
    }
}
