//! Message types for application events.
//!
//! In the Elm architecture, Messages are events that trigger state changes.

use draftdeck_core::{DraftDetail, DraftFilter, DraftSummary, IgnoredEmailSummary};

/// Application messages (events).
#[derive(Debug, Clone)]
pub enum Message {
    // Session
    /// Session status probe completed.
    SessionChecked(Result<bool, String>),
    /// Re-probe the session (after completing sign-in in the browser).
    CheckSession,
    /// Start the sign-in flow.
    SignIn,
    /// Sign-in URL fetched.
    AuthUrlLoaded(Result<String, String>),
    /// End the session (best effort).
    LogOut,
    /// Logout request finished; local session perception is cleared
    /// regardless of the server outcome.
    LoggedOut,

    // Navigation
    /// Navigate to a top-level screen.
    NavigateTo(Screen),
    /// Open the review screen for one draft.
    OpenDraft(String),

    // Draft list
    /// Select a filter tab.
    FilterSelected(DraftFilter),
    /// Force a re-fetch of the draft list.
    RefreshDrafts,
    /// Trigger an inbound mail poll on the backend.
    TriggerPoll,
    /// Poll trigger finished.
    PollFinished(Result<(), String>),
    /// Deferred forced refresh of the draft list.
    DeferredDraftsRefresh,
    /// Draft collection fetched.
    DraftsLoaded(Result<Vec<DraftSummary>, String>),
    /// Ignored-email collection fetched.
    IgnoredLoaded(Result<Vec<IgnoredEmailSummary>, String>),
    /// Request a skip transition for one draft.
    SkipDraft(String),
    /// Skip transition finished.
    SkipFinished(Result<(), String>),

    // Screens
    /// Review screen messages.
    Review(ReviewMessage),
    /// Preferences screen messages.
    Prefs(PrefsMessage),

    /// Dismiss the current transient notice.
    DismissNotice,
}

/// Messages for the review screen.
#[derive(Debug, Clone)]
pub enum ReviewMessage {
    /// Detail fetch finished; `seq` ties it to the request.
    DetailLoaded {
        /// Fetch sequence at request time.
        seq: u64,
        /// Fetched detail or failure message.
        result: Result<DraftDetail, String>,
    },
    /// Enter edit mode.
    StartEditing,
    /// Edited subject changed.
    SubjectChanged(String),
    /// Edit action on the body editor.
    BodyEdited(iced::widget::text_editor::Action),
    /// Discard the edit buffer.
    CancelEditing,
    /// Commit the edit buffer.
    Save,
    /// Save finished.
    SaveFinished(Result<(), String>),
    /// Reject the draft.
    Reject,
    /// Reject finished.
    RejectFinished(Result<(), String>),
    /// Approve and send the draft.
    Send,
    /// Send finished.
    SendFinished(Result<(), String>),
}

/// Messages for the preferences screen.
#[derive(Debug, Clone)]
pub enum PrefsMessage {
    /// Ignore-phrase list fetched.
    PhrasesLoaded(Result<Vec<String>, String>),
    /// Sign-off fetched.
    SignoffLoaded(Result<String, String>),
    /// Phrase input changed.
    NewPhraseChanged(String),
    /// Add the buffered phrase.
    AddPhrase,
    /// Remove the phrase at an index.
    RemovePhrase(usize),
    /// Phrase-list write finished.
    PhrasesSaved(Result<(), String>),
    /// Sign-off input changed.
    SignoffChanged(String),
    /// Persist the sign-off buffer.
    SaveSignoff,
    /// Sign-off write finished.
    SignoffSaved(Result<(), String>),
}

/// Top-level screens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Screen {
    /// Draft list with filter tabs.
    #[default]
    Drafts,
    /// Review one draft.
    Review,
    /// Ignore rules and sign-off.
    Preferences,
}

/// Session phase of the shell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionPhase {
    /// Startup probe in flight.
    Checking,
    /// Not authenticated; the login screen is shown.
    SignedOut {
        /// Sign-in failure to display, if any.
        error: Option<String>,
    },
    /// Authenticated.
    SignedIn,
}

/// A transient, dismissible notice.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    /// Message text.
    pub text: String,
    /// Visual kind.
    pub kind: NoticeKind,
}

/// Visual kind of a notice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    /// Operation succeeded.
    Success,
    /// Operation failed.
    Error,
    /// Informational.
    Info,
}

impl Notice {
    /// Success notice.
    #[must_use]
    pub fn success(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            kind: NoticeKind::Success,
        }
    }

    /// Error notice.
    #[must_use]
    pub fn error(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            kind: NoticeKind::Error,
        }
    }

    /// Informational notice.
    #[must_use]
    pub fn info(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            kind: NoticeKind::Info,
        }
    }
}
