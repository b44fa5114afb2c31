//! Preferences view-model: ignore phrases and default sign-off.
//!
//! Phrase edits persist the full resulting list immediately and the local
//! view is then reconciled from the re-fetched response. The sign-off is
//! buffered locally and only persisted on an explicit save.

/// Result of attempting to add an ignore phrase.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PhraseEdit {
    /// Persist this full list.
    Persist(Vec<String>),
    /// Exact phrase already present; nothing written, user notified.
    AlreadyListed,
    /// Input was empty after trimming; nothing to do.
    Empty,
}

/// Edit-buffer state for the preferences screen.
///
/// The persisted phrase list and sign-off live in the query cache; this
/// struct holds only the local input buffers layered on top.
#[derive(Debug, Clone, Default)]
pub struct PreferencesState {
    /// Phrase input buffer.
    pub new_phrase: String,
    /// Sign-off input buffer.
    pub signoff: String,
    /// Whether a phrase-list write is in flight.
    pub saving_phrases: bool,
    /// Whether a sign-off write is in flight.
    pub saving_signoff: bool,
    seen_signoff: Option<String>,
}

impl PreferencesState {
    /// Attempts to add the buffered phrase to the persisted list.
    ///
    /// The phrase is trimmed. A case-sensitive exact duplicate is a no-op
    /// with a user-visible notice, not an error, and produces no write. On
    /// acceptance the buffer clears and the full resulting list is handed
    /// back for an immediate write.
    pub fn add_phrase(&mut self, persisted: &[String]) -> PhraseEdit {
        let trimmed = self.new_phrase.trim();
        if trimmed.is_empty() {
            return PhraseEdit::Empty;
        }
        if persisted.iter().any(|p| p == trimmed) {
            return PhraseEdit::AlreadyListed;
        }
        let mut list = persisted.to_vec();
        list.push(trimmed.to_string());
        self.new_phrase.clear();
        PhraseEdit::Persist(list)
    }

    /// Reconciles the sign-off buffer with the persisted value.
    ///
    /// The buffer re-seeds only when the persisted value itself changed
    /// since it was last seen; a background re-fetch of an unchanged value
    /// never clobbers in-progress edits.
    pub fn sync_signoff(&mut self, persisted: &str) {
        if self.seen_signoff.as_deref() == Some(persisted) {
            return;
        }
        self.seen_signoff = Some(persisted.to_string());
        self.signoff = persisted.to_string();
    }

    /// The trimmed sign-off to persist on an explicit save.
    #[must_use]
    pub fn signoff_to_save(&self) -> String {
        self.signoff.trim().to_string()
    }
}

/// The list with the phrase at `index` removed, or `None` when out of range.
#[must_use]
pub fn remove_phrase(persisted: &[String], index: usize) -> Option<Vec<String>> {
    if index >= persisted.len() {
        return None;
    }
    let mut list = persisted.to_vec();
    list.remove(index);
    Some(list)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn phrases(items: &[&str]) -> Vec<String> {
        items.iter().map(ToString::to_string).collect()
    }

    #[test]
    fn test_add_phrase_trims_and_clears_buffer() {
        let mut state = PreferencesState {
            new_phrase: "  newsletters  ".to_string(),
            ..Default::default()
        };
        let edit = state.add_phrase(&phrases(&["github emails"]));
        assert_eq!(
            edit,
            PhraseEdit::Persist(phrases(&["github emails", "newsletters"]))
        );
        assert!(state.new_phrase.is_empty());
    }

    #[test]
    fn test_duplicate_add_produces_no_write() {
        let mut state = PreferencesState {
            new_phrase: "newsletters".to_string(),
            ..Default::default()
        };
        let edit = state.add_phrase(&phrases(&["newsletters"]));
        assert_eq!(edit, PhraseEdit::AlreadyListed);
        // Buffer kept so the user can amend it.
        assert_eq!(state.new_phrase, "newsletters");
    }

    #[test]
    fn test_duplicate_match_is_case_sensitive() {
        let mut state = PreferencesState {
            new_phrase: "Newsletters".to_string(),
            ..Default::default()
        };
        let edit = state.add_phrase(&phrases(&["newsletters"]));
        assert_eq!(
            edit,
            PhraseEdit::Persist(phrases(&["newsletters", "Newsletters"]))
        );
    }

    #[test]
    fn test_empty_add_is_a_no_op() {
        let mut state = PreferencesState {
            new_phrase: "   ".to_string(),
            ..Default::default()
        };
        assert_eq!(state.add_phrase(&[]), PhraseEdit::Empty);
    }

    #[test]
    fn test_remove_phrase_by_position() {
        let list = phrases(&["a", "b", "c"]);
        assert_eq!(remove_phrase(&list, 1), Some(phrases(&["a", "c"])));
        assert_eq!(remove_phrase(&list, 3), None);
    }

    #[test]
    fn test_signoff_reseed_is_keyed_to_value_identity() {
        let mut state = PreferencesState::default();

        state.sync_signoff("Cheers, Ada");
        assert_eq!(state.signoff, "Cheers, Ada");

        // User edits, then an unrelated background refresh returns the same
        // persisted value: the buffer must not be clobbered.
        state.signoff = "Cheers, Ada L.".to_string();
        state.sync_signoff("Cheers, Ada");
        assert_eq!(state.signoff, "Cheers, Ada L.");

        // The persisted value actually changed (e.g. after a successful
        // save): re-seed.
        state.sync_signoff("Best, Ada");
        assert_eq!(state.signoff, "Best, Ada");
    }

    #[test]
    fn test_signoff_save_trims() {
        let state = PreferencesState {
            signoff: "  Sincerely, Ada \n".to_string(),
            ..Default::default()
        };
        assert_eq!(state.signoff_to_save(), "Sincerely, Ada");
    }
}
