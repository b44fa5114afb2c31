//! List view-model: filter tabs, badge counts, empty states.

use crate::model::DraftSummary;
use crate::status::DraftStatus;

/// Filter tabs for the draft list.
///
/// The first four partition the draft collection by canonical state (with
/// `All` as the whole collection and skipped drafts visible only there);
/// `Ignored` shows the separate ignored-email collection instead and does
/// not require the draft collection to have loaded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DraftFilter {
    /// Drafts still awaiting review (default tab).
    #[default]
    Pending,
    /// Entire draft collection, unfiltered.
    All,
    /// Accepted (sent) drafts.
    Accepted,
    /// Rejected drafts.
    Rejected,
    /// Ignored emails.
    Ignored,
}

impl DraftFilter {
    /// Tabs in rendering order.
    pub const TABS: [Self; 5] = [
        Self::Pending,
        Self::All,
        Self::Accepted,
        Self::Rejected,
        Self::Ignored,
    ];

    /// Tab label.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Pending => "Review pending",
            Self::All => "All",
            Self::Accepted => "Accepted",
            Self::Rejected => "Rejected",
            Self::Ignored => "Ignored",
        }
    }

    /// Whether a draft with the given canonical state belongs to this tab.
    ///
    /// `Ignored` matches no draft - that tab renders the ignored-email
    /// collection.
    #[must_use]
    pub const fn matches(&self, state: DraftStatus) -> bool {
        match self {
            Self::All => true,
            Self::Pending => matches!(state, DraftStatus::Pending),
            Self::Accepted => matches!(state, DraftStatus::Accepted),
            Self::Rejected => matches!(state, DraftStatus::Rejected),
            Self::Ignored => false,
        }
    }

    /// Message shown when the tab has nothing to display.
    #[must_use]
    pub const fn empty_state(&self) -> &'static str {
        match self {
            Self::Pending => "No drafts pending review.",
            Self::All => "No drafts yet. Trigger an inbox poll to generate some.",
            Self::Accepted => "No accepted drafts.",
            Self::Rejected => "No rejected drafts.",
            Self::Ignored => "No ignored emails.",
        }
    }
}

/// Drafts belonging to a tab, in collection order.
#[must_use]
pub fn filter_drafts(drafts: &[DraftSummary], filter: DraftFilter) -> Vec<&DraftSummary> {
    drafts
        .iter()
        .filter(|d| filter.matches(d.state()))
        .collect()
}

/// Badge counts for every tab.
///
/// Always tallied from the whole collections so badges reflect the full
/// state, independent of the currently active filter.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TabCounts {
    /// All drafts.
    pub all: usize,
    /// Drafts pending review.
    pub pending: usize,
    /// Accepted drafts.
    pub accepted: usize,
    /// Rejected drafts.
    pub rejected: usize,
    /// Ignored emails.
    pub ignored: usize,
}

impl TabCounts {
    /// Tallies badges from the full draft and ignored-email collections.
    #[must_use]
    pub fn tally(drafts: &[DraftSummary], ignored_count: usize) -> Self {
        let mut counts = Self {
            all: drafts.len(),
            ignored: ignored_count,
            ..Self::default()
        };
        for draft in drafts {
            match draft.state() {
                DraftStatus::Pending => counts.pending += 1,
                DraftStatus::Accepted => counts.accepted += 1,
                DraftStatus::Rejected => counts.rejected += 1,
                DraftStatus::Skipped => {}
            }
        }
        counts
    }

    /// Badge value for one tab.
    #[must_use]
    pub const fn badge(&self, filter: DraftFilter) -> usize {
        match filter {
            DraftFilter::Pending => self.pending,
            DraftFilter::All => self.all,
            DraftFilter::Accepted => self.accepted,
            DraftFilter::Rejected => self.rejected,
            DraftFilter::Ignored => self.ignored,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft(id: &str, status: Option<&str>) -> DraftSummary {
        DraftSummary {
            email_id: id.to_string(),
            status: status.map(ToString::to_string),
            ..Default::default()
        }
    }

    #[test]
    fn test_filtering_canonicalizes_status() {
        let drafts = vec![draft("a1", Some("Pending")), draft("a2", Some("ACCEPTED"))];

        let pending = filter_drafts(&drafts, DraftFilter::Pending);
        assert_eq!(pending.len(), 1);
        assert_eq!(pending[0].email_id, "a1");

        let accepted = filter_drafts(&drafts, DraftFilter::Accepted);
        assert_eq!(accepted.len(), 1);
        assert_eq!(accepted[0].email_id, "a2");

        let counts = TabCounts::tally(&drafts, 0);
        assert_eq!(counts.all, 2);
        assert_eq!(counts.pending, 1);
        assert_eq!(counts.accepted, 1);
        assert_eq!(counts.rejected, 0);
    }

    #[test]
    fn test_unrecognized_status_lands_in_pending() {
        let drafts = vec![draft("a1", Some("archived")), draft("a2", None)];
        assert_eq!(filter_drafts(&drafts, DraftFilter::Pending).len(), 2);
    }

    #[test]
    fn test_skipped_appears_only_under_all() {
        let drafts = vec![draft("a1", Some("skipped"))];
        assert_eq!(filter_drafts(&drafts, DraftFilter::All).len(), 1);
        assert!(filter_drafts(&drafts, DraftFilter::Pending).is_empty());
        assert!(filter_drafts(&drafts, DraftFilter::Accepted).is_empty());
        assert!(filter_drafts(&drafts, DraftFilter::Rejected).is_empty());
        assert!(filter_drafts(&drafts, DraftFilter::Ignored).is_empty());
    }

    #[test]
    fn test_ignored_tab_matches_no_draft() {
        let drafts = vec![draft("a1", Some("pending")), draft("a2", Some("accepted"))];
        assert!(filter_drafts(&drafts, DraftFilter::Ignored).is_empty());

        let counts = TabCounts::tally(&drafts, 3);
        assert_eq!(counts.ignored, 3);
        assert_eq!(counts.badge(DraftFilter::Ignored), 3);
    }

    #[test]
    fn test_counts_match_filter_cardinality_per_tab() {
        let drafts = vec![
            draft("a1", Some("pending")),
            draft("a2", Some("accepted")),
            draft("a3", Some("rejected")),
            draft("a4", Some("skipped")),
            draft("a5", None),
        ];
        let counts = TabCounts::tally(&drafts, 0);
        for tab in [
            DraftFilter::Pending,
            DraftFilter::All,
            DraftFilter::Accepted,
            DraftFilter::Rejected,
        ] {
            assert_eq!(counts.badge(tab), filter_drafts(&drafts, tab).len());
        }
    }

    mod properties {
        use super::*;
        use proptest::prelude::*;

        fn arb_status() -> impl Strategy<Value = Option<String>> {
            prop_oneof![
                Just(None),
                Just(Some(String::new())),
                "[a-zA-Z]{0,10}".prop_map(Some),
                prop_oneof![
                    Just("pending"),
                    Just("accepted"),
                    Just("REJECTED"),
                    Just("Skipped"),
                ]
                .prop_map(|s| Some(s.to_string())),
            ]
        }

        proptest! {
            #[test]
            fn filters_partition_the_collection(statuses in prop::collection::vec(arb_status(), 0..40)) {
                let drafts: Vec<DraftSummary> = statuses
                    .into_iter()
                    .enumerate()
                    .map(|(i, status)| DraftSummary {
                        email_id: format!("e{i}"),
                        status,
                        ..Default::default()
                    })
                    .collect();

                let pending = filter_drafts(&drafts, DraftFilter::Pending).len();
                let accepted = filter_drafts(&drafts, DraftFilter::Accepted).len();
                let rejected = filter_drafts(&drafts, DraftFilter::Rejected).len();
                let skipped = drafts
                    .iter()
                    .filter(|d| d.state() == DraftStatus::Skipped)
                    .count();
                let all = filter_drafts(&drafts, DraftFilter::All).len();

                // Each filtered set is a subset; together (plus skipped,
                // which only All shows) they cover the collection exactly.
                prop_assert_eq!(all, drafts.len());
                prop_assert_eq!(pending + accepted + rejected + skipped, all);

                let counts = TabCounts::tally(&drafts, 0);
                prop_assert_eq!(counts.pending, pending);
                prop_assert_eq!(counts.accepted, accepted);
                prop_assert_eq!(counts.rejected, rejected);
            }
        }
    }
}
