//! Client-side query cache.
//!
//! The draft collection and the ignored-email collection (plus the two
//! preference values) are the only shared mutable resources in the client.
//! Each lives in its own keyed entry: invalidating one never touches
//! another, and reads never invalidate. Cross-component coordination happens
//! through invalidate-then-refetch, never direct handoff.

use chrono::{DateTime, Utc};

use crate::model::{DraftSummary, IgnoredEmailSummary};

/// Logical identity of a cached query.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QueryKey {
    /// `GET /drafts`.
    Drafts,
    /// `GET /emails/ignored`.
    IgnoredEmails,
    /// `GET /preferences/ignores`.
    IgnorePhrases,
    /// `GET /preferences/signoff`.
    Signoff,
}

/// One cached query result.
///
/// Load failures are terminal for the entry - `needs_fetch` stays false
/// until an explicit [`QueryState::invalidate`] (a successful mutation or a
/// manual refresh), so a failing backend is not polled in a loop.
#[derive(Debug, Clone)]
pub struct QueryState<T> {
    data: Option<T>,
    fetched_at: Option<DateTime<Utc>>,
    stale: bool,
    loading: bool,
    error: Option<String>,
    epoch: u64,
}

impl<T> Default for QueryState<T> {
    fn default() -> Self {
        Self {
            data: None,
            fetched_at: None,
            stale: false,
            loading: false,
            error: None,
            epoch: 0,
        }
    }
}

impl<T> QueryState<T> {
    /// Whether the next read must go to the source of truth.
    #[must_use]
    pub const fn needs_fetch(&self) -> bool {
        !self.loading && self.error.is_none() && (self.data.is_none() || self.stale)
    }

    /// Marks a fetch as in flight.
    pub fn begin_fetch(&mut self) {
        self.loading = true;
    }

    /// Stores a fresh result, bumping the identity epoch.
    pub fn resolve(&mut self, data: T) {
        self.data = Some(data);
        self.fetched_at = Some(Utc::now());
        self.stale = false;
        self.loading = false;
        self.error = None;
        self.epoch += 1;
    }

    /// Records a failed fetch; existing data is kept for display.
    pub fn fail(&mut self, message: String) {
        self.loading = false;
        self.error = Some(message);
    }

    /// Marks the entry stale so the next read re-fetches.
    ///
    /// Existing data stays visible until the re-fetch lands. Clears a
    /// previous load error, since the caller is explicitly asking for a
    /// fresh read.
    pub fn invalidate(&mut self) {
        self.stale = true;
        self.error = None;
    }

    /// The cached value, if any.
    #[must_use]
    pub const fn data(&self) -> Option<&T> {
        self.data.as_ref()
    }

    /// Whether a fetch is currently in flight.
    #[must_use]
    pub const fn is_loading(&self) -> bool {
        self.loading
    }

    /// The last load failure, if the entry is in the failed state.
    #[must_use]
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Identity counter, bumped on every successful resolve.
    ///
    /// Lets consumers detect that the persisted value itself changed (as
    /// opposed to merely being re-fetched), and recompute derived state.
    #[must_use]
    pub const fn epoch(&self) -> u64 {
        self.epoch
    }

    /// When the entry last resolved.
    #[must_use]
    pub const fn fetched_at(&self) -> Option<DateTime<Utc>> {
        self.fetched_at
    }
}

/// The set of shared cache entries, keyed by [`QueryKey`].
#[derive(Debug, Default)]
pub struct QueryCache {
    /// Draft summaries.
    pub drafts: QueryState<Vec<DraftSummary>>,
    /// Ignored-email summaries.
    pub ignored: QueryState<Vec<IgnoredEmailSummary>>,
    /// Ignore phrases.
    pub phrases: QueryState<Vec<String>>,
    /// Default sign-off.
    pub signoff: QueryState<String>,
}

impl QueryCache {
    /// Marks a single entry stale. Never cascades to other entries.
    pub fn invalidate(&mut self, key: QueryKey) {
        match key {
            QueryKey::Drafts => self.drafts.invalidate(),
            QueryKey::IgnoredEmails => self.ignored.invalidate(),
            QueryKey::IgnorePhrases => self.phrases.invalidate(),
            QueryKey::Signoff => self.signoff.invalidate(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fresh_entry_needs_fetch() {
        let state = QueryState::<Vec<String>>::default();
        assert!(state.needs_fetch());
        assert!(state.data().is_none());
    }

    #[test]
    fn test_resolve_bumps_epoch_and_clears_staleness() {
        let mut state = QueryState::default();
        state.begin_fetch();
        assert!(!state.needs_fetch());

        state.resolve(vec!["a".to_string()]);
        assert_eq!(state.epoch(), 1);
        assert!(!state.needs_fetch());
        assert!(state.fetched_at().is_some());

        state.invalidate();
        assert!(state.needs_fetch());
        // Data stays visible while stale.
        assert_eq!(state.data().map(Vec::len), Some(1));

        state.begin_fetch();
        state.resolve(vec!["a".to_string(), "b".to_string()]);
        assert_eq!(state.epoch(), 2);
    }

    #[test]
    fn test_failure_is_terminal_until_invalidated() {
        let mut state = QueryState::<String>::default();
        state.begin_fetch();
        state.fail("Failed to load drafts".to_string());

        assert_eq!(state.error(), Some("Failed to load drafts"));
        // No automatic retry loop.
        assert!(!state.needs_fetch());

        state.invalidate();
        assert!(state.error().is_none());
        assert!(state.needs_fetch());
    }

    #[test]
    fn test_invalidation_never_cascades() {
        let mut cache = QueryCache::default();
        cache.drafts.resolve(Vec::new());
        cache.ignored.resolve(Vec::new());

        cache.invalidate(QueryKey::Drafts);

        assert!(cache.drafts.needs_fetch());
        assert!(!cache.ignored.needs_fetch());
        assert!(!cache.phrases.is_loading());
    }
}
