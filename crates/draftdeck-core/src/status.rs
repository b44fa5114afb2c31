//! Draft lifecycle status classification.

/// Canonical review lifecycle state of a draft.
///
/// Derived case-insensitively from the raw status string the backend stores.
/// Anything unrecognized, including an absent or empty status, counts as
/// still pending review, so classification is total and never fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DraftStatus {
    /// Awaiting review - no decision recorded yet.
    #[default]
    Pending,
    /// Approved and sent.
    Accepted,
    /// Rejected by the reviewer.
    Rejected,
    /// Skipped without a decision.
    Skipped,
}

/// Visual tone for rendering a status.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusTone {
    /// Needs the user's attention.
    Attention,
    /// Completed successfully.
    Positive,
    /// Settled, de-emphasized.
    Muted,
}

impl DraftStatus {
    /// Parse from a raw backend status string.
    #[must_use]
    pub fn parse(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "accepted" => Self::Accepted,
            "rejected" => Self::Rejected,
            "skipped" => Self::Skipped,
            _ => Self::Pending,
        }
    }

    /// Canonical lowercase string form.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Accepted => "accepted",
            Self::Rejected => "rejected",
            Self::Skipped => "skipped",
        }
    }

    /// Human-readable display label.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Pending => "Review required",
            Self::Accepted => "Accepted",
            Self::Rejected => "Rejected",
            Self::Skipped => "Skipped",
        }
    }

    /// Glyph shown next to the label.
    #[must_use]
    pub const fn icon(&self) -> &'static str {
        match self {
            Self::Pending => "\u{25cb}",  // ○
            Self::Accepted => "\u{2713}", // ✓
            Self::Rejected => "\u{2715}", // ✕
            Self::Skipped => "\u{2014}",  // —
        }
    }

    /// Display tone for the label and glyph.
    #[must_use]
    pub const fn tone(&self) -> StatusTone {
        match self {
            Self::Pending => StatusTone::Attention,
            Self::Accepted => StatusTone::Positive,
            Self::Rejected | Self::Skipped => StatusTone::Muted,
        }
    }

    /// Whether the state is terminal for this client.
    ///
    /// No transition back to pending is exposed once a draft is accepted,
    /// rejected, or skipped.
    #[must_use]
    pub const fn is_terminal(&self) -> bool {
        !matches!(self, Self::Pending)
    }
}

impl std::str::FromStr for DraftStatus {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(Self::parse(s))
    }
}
