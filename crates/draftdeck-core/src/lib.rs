//! # draftdeck-core
//!
//! Core review-workflow logic for the `DraftDeck` draft review console.
//!
//! This crate provides:
//! - Status classification for the draft review lifecycle
//! - A typed HTTP client for the draft/preferences backend
//! - The keyed query cache shared by the list and preference screens
//! - View-model state machines for the list, review, and preferences screens
//! - Display formatting helpers

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![forbid(unsafe_code)]

pub mod api;
pub mod cache;
pub mod display;
mod error;
pub mod list;
pub mod model;
pub mod prefs;
pub mod review;
pub mod status;

pub use api::ApiClient;
pub use cache::{QueryCache, QueryKey, QueryState};
pub use display::format_timestamp;
pub use error::{ApiError, Result};
pub use list::{DraftFilter, TabCounts, filter_drafts};
pub use model::{
    DraftDetail, DraftPart, DraftPatch, DraftSummary, EmailPart, IgnoredEmailSummary,
    sender_display_name,
};
pub use prefs::{PhraseEdit, PreferencesState, remove_phrase};
pub use review::{
    AfterAction, EditBuffer, FetchTicket, PendingAction, ReviewPhase, ReviewState, SaveOutcome,
};
pub use status::{DraftStatus, StatusTone};
