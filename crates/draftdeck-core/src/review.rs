//! Review/edit view-model for a single draft.
//!
//! Per-draft state machine: `Loading -> {Loaded, Failed}`; from `Loaded` an
//! edit buffer can be opened, saved, or cancelled, and the terminal actions
//! (reject, send) close the screen while the draft list cache is
//! invalidated. Detail fetches are guarded by a sequence number so a slow
//! response for a superseded target can never overwrite state belonging to
//! the current one.

use std::time::Duration;

use crate::model::{DraftDetail, DraftPatch};

/// Load-error message used when the screen is opened without a target.
pub const MISSING_ID_ERROR: &str = "Missing draft ID";

/// Delay before the compensating list re-fetch after a reject.
///
/// The upstream store settles asynchronously, so the list is invalidated
/// once immediately and once more after this delay. Whether a fixed delay
/// holds up under load is untested.
pub const REJECT_SETTLE_DELAY: Duration = Duration::from_secs(1);

/// Load phase of the review screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReviewPhase {
    /// Detail fetch in flight.
    Loading,
    /// Detail available.
    Loaded,
    /// Load failed; terminal for this view, rendered inline.
    Failed(String),
}

/// Local edit buffer for the draft facet.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EditBuffer {
    /// Draft subject being edited.
    pub subject: String,
    /// Draft body being edited.
    pub body: String,
}

/// Mutation currently in flight for this draft.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PendingAction {
    /// Committing the edit buffer.
    Saving,
    /// Rejecting the draft.
    Rejecting,
    /// Sending the draft.
    Sending,
}

/// A detail fetch the shell must run.
///
/// The sequence number ties the eventual response back to the request; the
/// state machine discards responses whose sequence is no longer current.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchTicket {
    /// Target draft.
    pub email_id: String,
    /// Fetch sequence at request time.
    pub seq: u64,
}

/// Outcome of a save attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SaveOutcome {
    /// Buffer merged into the detail; edit mode exited. The shell should
    /// refresh the draft list, which displays the draft subject.
    Saved,
    /// Save failed; the buffer and edit mode are untouched so no input is
    /// lost.
    Failed(String),
}

/// What the shell does after a reject/send response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AfterAction {
    /// Leave the review screen. The draft list is refreshed immediately
    /// and, when `settle_delay` is set, once more after that delay.
    Close {
        /// Success notice to show.
        notice: String,
        /// Optional compensating refresh delay.
        settle_delay: Option<Duration>,
    },
    /// Stay on the review screen and surface the failure. No navigation and
    /// no status change is assumed.
    Stay {
        /// Failure notice to show.
        notice: String,
    },
}

/// State machine for reviewing one draft.
#[derive(Debug)]
pub struct ReviewState {
    email_id: Option<String>,
    seq: u64,
    phase: ReviewPhase,
    detail: Option<DraftDetail>,
    edit: Option<EditBuffer>,
    action: Option<PendingAction>,
}

impl ReviewState {
    /// Opens the review screen for the given target.
    ///
    /// A missing identifier is an immediate load error with no network
    /// call; otherwise the returned ticket is the fetch the shell must run.
    #[must_use]
    pub fn open(email_id: Option<String>) -> (Self, Option<FetchTicket>) {
        let mut state = Self {
            email_id: None,
            seq: 0,
            phase: ReviewPhase::Failed(MISSING_ID_ERROR.to_string()),
            detail: None,
            edit: None,
            action: None,
        };
        let ticket = state.retarget(email_id);
        (state, ticket)
    }

    /// Switches to a different target, superseding any in-flight fetch.
    ///
    /// Bumping the sequence makes the previous fetch's eventual response
    /// stale; all local state for the old target is dropped.
    pub fn retarget(&mut self, email_id: Option<String>) -> Option<FetchTicket> {
        self.seq += 1;
        self.detail = None;
        self.edit = None;
        self.action = None;
        match email_id {
            None => {
                self.email_id = None;
                self.phase = ReviewPhase::Failed(MISSING_ID_ERROR.to_string());
                None
            }
            Some(id) => {
                self.email_id = Some(id.clone());
                self.phase = ReviewPhase::Loading;
                Some(FetchTicket {
                    email_id: id,
                    seq: self.seq,
                })
            }
        }
    }

    /// Applies a detail response; responses from a superseded fetch are
    /// discarded.
    pub fn detail_loaded(&mut self, seq: u64, result: Result<DraftDetail, String>) {
        if seq != self.seq {
            return;
        }
        match result {
            Ok(detail) => {
                self.detail = Some(detail);
                self.phase = ReviewPhase::Loaded;
            }
            Err(message) => {
                self.detail = None;
                self.phase = ReviewPhase::Failed(message);
            }
        }
    }

    /// Enters edit mode, seeding the buffer from the loaded detail.
    ///
    /// Absent draft fields seed as empty strings. No-op unless loaded.
    pub fn start_editing(&mut self) {
        if self.phase != ReviewPhase::Loaded {
            return;
        }
        let draft = self.detail.as_ref().and_then(|d| d.draft.as_ref());
        self.edit = Some(EditBuffer {
            subject: draft
                .and_then(|d| d.draft_subject.clone())
                .unwrap_or_default(),
            body: draft.and_then(|d| d.draft_text.clone()).unwrap_or_default(),
        });
    }

    /// Updates the buffered subject.
    pub fn edit_subject(&mut self, subject: String) {
        if let Some(edit) = &mut self.edit {
            edit.subject = subject;
        }
    }

    /// Updates the buffered body.
    pub fn edit_body(&mut self, body: String) {
        if let Some(edit) = &mut self.edit {
            edit.body = body;
        }
    }

    /// Discards the buffer unconditionally and leaves edit mode.
    pub fn cancel_editing(&mut self) {
        self.edit = None;
    }

    /// Starts committing the buffer; returns the target and payload.
    ///
    /// `None` when there is nothing to save or a mutation is already in
    /// flight.
    pub fn save_request(&mut self) -> Option<(String, DraftPatch)> {
        if self.action.is_some() {
            return None;
        }
        let id = self.email_id.clone()?;
        let edit = self.edit.as_ref()?;
        self.action = Some(PendingAction::Saving);
        Some((
            id,
            DraftPatch {
                draft_text: Some(edit.body.clone()),
                draft_subject: Some(edit.subject.clone()),
            },
        ))
    }

    /// Applies the save response.
    ///
    /// Success merges the new subject/body into the local detail (no other
    /// field changes) and exits edit mode. Failure keeps the buffer and
    /// edit mode so the user does not lose input.
    pub fn save_finished(&mut self, result: Result<(), String>) -> SaveOutcome {
        self.action = None;
        match result {
            Ok(()) => {
                if let Some(edit) = self.edit.take() {
                    if let Some(detail) = &mut self.detail {
                        detail.apply_edit(&edit.subject, &edit.body);
                    }
                }
                SaveOutcome::Saved
            }
            Err(message) => SaveOutcome::Failed(message),
        }
    }

    /// Starts a reject; returns the target identifier.
    ///
    /// `None` when the identifier is missing or a mutation is already in
    /// flight.
    pub fn reject_request(&mut self) -> Option<String> {
        if self.action.is_some() {
            return None;
        }
        let id = self.email_id.clone()?;
        self.action = Some(PendingAction::Rejecting);
        Some(id)
    }

    /// Starts a send; returns the target identifier.
    pub fn send_request(&mut self) -> Option<String> {
        if self.action.is_some() {
            return None;
        }
        let id = self.email_id.clone()?;
        self.action = Some(PendingAction::Sending);
        Some(id)
    }

    /// Applies the reject response.
    ///
    /// Success closes the screen; the list refreshes immediately and once
    /// more after [`REJECT_SETTLE_DELAY`].
    pub fn reject_finished(&mut self, result: Result<(), String>) -> AfterAction {
        self.action = None;
        match result {
            Ok(()) => AfterAction::Close {
                notice: "Draft rejected".to_string(),
                settle_delay: Some(REJECT_SETTLE_DELAY),
            },
            Err(message) => AfterAction::Stay { notice: message },
        }
    }

    /// Applies the send response.
    ///
    /// On failure the draft is not assumed sent and the server-provided
    /// message is surfaced untouched.
    pub fn send_finished(&mut self, result: Result<(), String>) -> AfterAction {
        self.action = None;
        match result {
            Ok(()) => AfterAction::Close {
                notice: "Email sent".to_string(),
                settle_delay: None,
            },
            Err(message) => AfterAction::Stay { notice: message },
        }
    }

    /// Current load phase.
    #[must_use]
    pub const fn phase(&self) -> &ReviewPhase {
        &self.phase
    }

    /// The loaded detail, if any.
    #[must_use]
    pub const fn detail(&self) -> Option<&DraftDetail> {
        self.detail.as_ref()
    }

    /// The edit buffer while in edit mode.
    #[must_use]
    pub const fn edit(&self) -> Option<&EditBuffer> {
        self.edit.as_ref()
    }

    /// Whether edit mode is active.
    #[must_use]
    pub const fn is_editing(&self) -> bool {
        self.edit.is_some()
    }

    /// The mutation currently in flight, if any.
    #[must_use]
    pub const fn action(&self) -> Option<PendingAction> {
        self.action
    }

    /// The current target identifier.
    #[must_use]
    pub fn email_id(&self) -> Option<&str> {
        self.email_id.as_deref()
    }
}
