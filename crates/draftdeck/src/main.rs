//! `DraftDeck` - desktop review console for AI-generated email reply drafts.
//!
//! Built on the core view-model state machines in `draftdeck-core`; this
//! crate is the iced shell that renders them and runs their network effects.

#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![forbid(unsafe_code)]

mod config;
mod html;
mod message;
mod session;
mod style;
mod view;

use std::time::Duration;

use iced::widget::{column, container, row, text_editor};
use iced::{Element, Fill, Task};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use draftdeck_core::{
    AfterAction, ApiClient, DraftDetail, DraftFilter, DraftPatch, DraftSummary,
    IgnoredEmailSummary, PhraseEdit, PreferencesState, QueryCache, QueryKey, ReviewState,
    SaveOutcome, TabCounts, remove_phrase,
};

use config::AppConfig;
use message::{Message, Notice, PrefsMessage, ReviewMessage, Screen, SessionPhase};

/// Deferred forced list refresh after a poll trigger, fired regardless of
/// the poll outcome.
const POLL_SETTLE_DELAY: Duration = Duration::from_secs(5);

fn main() -> iced::Result {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "draftdeck=debug,draftdeck_core=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting DraftDeck");

    iced::application(DraftDeck::new, DraftDeck::update, DraftDeck::view)
        .title("DraftDeck")
        .run()
}

/// Main application state.
struct DraftDeck {
    /// Backend client, cheap to clone into tasks.
    client: ApiClient,
    /// Session gate.
    session: SessionPhase,
    /// Current screen.
    screen: Screen,
    /// Shared query cache (drafts, ignored emails, preferences).
    cache: QueryCache,
    /// Active list filter.
    filter: DraftFilter,
    /// Review state machine while the review screen is open.
    review: Option<ReviewState>,
    /// Editor widget state for the draft body; mirrors the core edit buffer.
    body_editor: text_editor::Content,
    /// Preference edit buffers.
    prefs: PreferencesState,
    /// Current transient notice.
    notice: Option<Notice>,
    /// Whether a poll trigger is in flight.
    polling: bool,
}

impl DraftDeck {
    /// Create new application instance.
    fn new() -> (Self, Task<Message>) {
        let config = AppConfig::load().unwrap_or_else(|e| {
            warn!("Failed to load settings, using defaults: {e:#}");
            AppConfig::default()
        });
        let client = ApiClient::new(config.api_base, config.oauth_base);
        let app = Self {
            client: client.clone(),
            session: SessionPhase::Checking,
            screen: Screen::Drafts,
            cache: QueryCache::default(),
            filter: DraftFilter::default(),
            review: None,
            body_editor: text_editor::Content::new(),
            prefs: PreferencesState::default(),
            notice: None,
            polling: false,
        };
        (
            app,
            Task::perform(check_session(client), Message::SessionChecked),
        )
    }

    /// Update state based on message.
    #[allow(clippy::needless_pass_by_value)]
    #[allow(clippy::too_many_lines)] // Large match is idiomatic for Elm architecture
    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::SessionChecked(result) => match result {
                Ok(true) => {
                    self.session = SessionPhase::SignedIn;
                    return self.screen_loads();
                }
                Ok(false) => {
                    self.session = SessionPhase::SignedOut { error: None };
                }
                Err(e) => {
                    warn!("Session check failed: {e}");
                    self.session = SessionPhase::SignedOut { error: None };
                }
            },
            Message::CheckSession => {
                self.session = SessionPhase::Checking;
                return Task::perform(check_session(self.client.clone()), Message::SessionChecked);
            }
            Message::SignIn => {
                if let SessionPhase::SignedOut { error } = &mut self.session {
                    *error = None;
                }
                return Task::perform(fetch_auth_url(self.client.clone()), Message::AuthUrlLoaded);
            }
            Message::AuthUrlLoaded(result) => match result {
                Ok(url) => {
                    if let Err(e) = session::open_in_browser(&url) {
                        self.session = SessionPhase::SignedOut { error: Some(e) };
                    }
                }
                Err(e) => {
                    self.session = SessionPhase::SignedOut {
                        error: Some(session::friendly_auth_error(&e)),
                    };
                }
            },
            Message::LogOut => {
                return Task::perform(logout(self.client.clone()), |()| Message::LoggedOut);
            }
            Message::LoggedOut => {
                // Local session perception clears regardless of the server
                // outcome.
                self.session = SessionPhase::SignedOut { error: None };
                self.screen = Screen::Drafts;
                self.review = None;
                self.cache = QueryCache::default();
                self.notice = None;
            }
            Message::NavigateTo(screen) => {
                self.screen = screen;
                if screen != Screen::Review {
                    self.review = None;
                }
                return self.screen_loads();
            }
            Message::OpenDraft(email_id) => {
                self.screen = Screen::Review;
                let (review, ticket) = ReviewState::open(Some(email_id));
                self.review = Some(review);
                if let Some(ticket) = ticket {
                    return Task::perform(
                        load_detail(self.client.clone(), ticket.email_id, ticket.seq),
                        |(seq, result)| Message::Review(ReviewMessage::DetailLoaded { seq, result }),
                    );
                }
            }
            Message::FilterSelected(filter) => {
                self.filter = filter;
                return self.screen_loads();
            }
            Message::RefreshDrafts => {
                self.cache.invalidate(QueryKey::Drafts);
                return self.fetch_drafts();
            }
            Message::TriggerPoll => {
                if self.polling {
                    return Task::none();
                }
                self.polling = true;
                // The deferred refresh fires regardless of the poll outcome.
                return Task::batch([
                    Task::perform(poll_inbox(self.client.clone()), Message::PollFinished),
                    after_delay(POLL_SETTLE_DELAY, Message::DeferredDraftsRefresh),
                ]);
            }
            Message::PollFinished(result) => {
                self.polling = false;
                match result {
                    Ok(()) => {
                        self.notice = Some(Notice::success("Polling retriggered"));
                        self.cache.invalidate(QueryKey::Drafts);
                        return self.fetch_drafts();
                    }
                    Err(e) => {
                        self.notice = Some(Notice::error(e));
                    }
                }
            }
            Message::DeferredDraftsRefresh => {
                self.cache.invalidate(QueryKey::Drafts);
                return self.fetch_drafts();
            }
            Message::DraftsLoaded(result) => match result {
                Ok(drafts) => self.cache.drafts.resolve(drafts),
                Err(e) => self.cache.drafts.fail(e),
            },
            Message::IgnoredLoaded(result) => match result {
                Ok(emails) => self.cache.ignored.resolve(emails),
                Err(e) => self.cache.ignored.fail(e),
            },
            Message::SkipDraft(email_id) => {
                return Task::perform(
                    skip_draft(self.client.clone(), email_id),
                    Message::SkipFinished,
                );
            }
            Message::SkipFinished(result) => match result {
                Ok(()) => {
                    // No optimistic removal; the re-fetched list drops the
                    // item from the pending view.
                    self.cache.invalidate(QueryKey::Drafts);
                    return self.fetch_drafts();
                }
                Err(e) => {
                    self.notice = Some(Notice::error(e));
                }
            },
            Message::Review(msg) => return self.handle_review(msg),
            Message::Prefs(msg) => return self.handle_prefs(msg),
            Message::DismissNotice => {
                self.notice = None;
            }
        }
        Task::none()
    }

    /// Handle review screen messages.
    fn handle_review(&mut self, msg: ReviewMessage) -> Task<Message> {
        // Results for a review screen the user already left are dropped.
        let Some(review) = &mut self.review else {
            return Task::none();
        };
        match msg {
            ReviewMessage::DetailLoaded { seq, result } => {
                review.detail_loaded(seq, result);
            }
            ReviewMessage::StartEditing => {
                review.start_editing();
                if let Some(edit) = review.edit() {
                    self.body_editor = text_editor::Content::with_text(&edit.body);
                }
            }
            ReviewMessage::SubjectChanged(subject) => review.edit_subject(subject),
            ReviewMessage::BodyEdited(action) => {
                self.body_editor.perform(action);
                review.edit_body(self.body_editor.text());
            }
            ReviewMessage::CancelEditing => review.cancel_editing(),
            ReviewMessage::Save => {
                if let Some((email_id, patch)) = review.save_request() {
                    return Task::perform(
                        patch_draft(self.client.clone(), email_id, patch),
                        |r| Message::Review(ReviewMessage::SaveFinished(r)),
                    );
                }
            }
            ReviewMessage::SaveFinished(result) => match review.save_finished(result) {
                SaveOutcome::Saved => {
                    self.notice = Some(Notice::success("Draft saved"));
                    // The list row shows the draft subject.
                    self.cache.invalidate(QueryKey::Drafts);
                    return self.fetch_drafts();
                }
                SaveOutcome::Failed(message) => {
                    self.notice = Some(Notice::error(message));
                }
            },
            ReviewMessage::Reject => {
                if let Some(email_id) = review.reject_request() {
                    return Task::perform(reject_draft(self.client.clone(), email_id), |r| {
                        Message::Review(ReviewMessage::RejectFinished(r))
                    });
                }
            }
            ReviewMessage::RejectFinished(result) => {
                let after = review.reject_finished(result);
                return self.apply_after_action(after);
            }
            ReviewMessage::Send => {
                if let Some(email_id) = review.send_request() {
                    return Task::perform(send_draft(self.client.clone(), email_id), |r| {
                        Message::Review(ReviewMessage::SendFinished(r))
                    });
                }
            }
            ReviewMessage::SendFinished(result) => {
                let after = review.send_finished(result);
                return self.apply_after_action(after);
            }
        }
        Task::none()
    }

    /// Navigate and refresh per a reject/send outcome.
    fn apply_after_action(&mut self, after: AfterAction) -> Task<Message> {
        match after {
            AfterAction::Close {
                notice,
                settle_delay,
            } => {
                self.notice = Some(Notice::success(notice));
                self.screen = Screen::Drafts;
                self.review = None;
                self.cache.invalidate(QueryKey::Drafts);
                let mut tasks = vec![self.fetch_drafts()];
                if let Some(delay) = settle_delay {
                    tasks.push(after_delay(delay, Message::DeferredDraftsRefresh));
                }
                Task::batch(tasks)
            }
            AfterAction::Stay { notice } => {
                self.notice = Some(Notice::error(notice));
                Task::none()
            }
        }
    }

    /// Handle preferences screen messages.
    fn handle_prefs(&mut self, msg: PrefsMessage) -> Task<Message> {
        match msg {
            PrefsMessage::PhrasesLoaded(result) => match result {
                Ok(phrases) => self.cache.phrases.resolve(phrases),
                Err(e) => self.cache.phrases.fail(e),
            },
            PrefsMessage::SignoffLoaded(result) => match result {
                Ok(signoff) => {
                    // Re-seed is keyed to the value's identity; an unchanged
                    // refresh never clobbers in-progress edits.
                    self.prefs.sync_signoff(&signoff);
                    self.cache.signoff.resolve(signoff);
                }
                Err(e) => self.cache.signoff.fail(e),
            },
            PrefsMessage::NewPhraseChanged(value) => self.prefs.new_phrase = value,
            PrefsMessage::AddPhrase => {
                let persisted = self.cache.phrases.data().cloned().unwrap_or_default();
                match self.prefs.add_phrase(&persisted) {
                    PhraseEdit::Persist(list) => return self.persist_phrases(list),
                    PhraseEdit::AlreadyListed => {
                        self.notice = Some(Notice::info("Already in list"));
                    }
                    PhraseEdit::Empty => {}
                }
            }
            PrefsMessage::RemovePhrase(index) => {
                let persisted = self.cache.phrases.data().cloned().unwrap_or_default();
                if let Some(list) = remove_phrase(&persisted, index) {
                    return self.persist_phrases(list);
                }
            }
            PrefsMessage::PhrasesSaved(result) => {
                self.prefs.saving_phrases = false;
                match result {
                    Ok(()) => {
                        self.notice = Some(Notice::success("Saved"));
                        self.cache.invalidate(QueryKey::IgnorePhrases);
                        return self.fetch_phrases();
                    }
                    Err(e) => {
                        self.notice = Some(Notice::error(e));
                    }
                }
            }
            PrefsMessage::SignoffChanged(value) => self.prefs.signoff = value,
            PrefsMessage::SaveSignoff => {
                if self.prefs.saving_signoff {
                    return Task::none();
                }
                self.prefs.saving_signoff = true;
                let signoff = self.prefs.signoff_to_save();
                return Task::perform(put_signoff(self.client.clone(), signoff), |r| {
                    Message::Prefs(PrefsMessage::SignoffSaved(r))
                });
            }
            PrefsMessage::SignoffSaved(result) => {
                self.prefs.saving_signoff = false;
                match result {
                    Ok(()) => {
                        self.notice = Some(Notice::success("Sign-off saved"));
                        self.cache.invalidate(QueryKey::Signoff);
                        return self.fetch_signoff();
                    }
                    Err(e) => {
                        self.notice = Some(Notice::error(e));
                    }
                }
            }
        }
        Task::none()
    }

    /// Starts a phrase-list write.
    fn persist_phrases(&mut self, list: Vec<String>) -> Task<Message> {
        self.prefs.saving_phrases = true;
        Task::perform(put_phrases(self.client.clone(), list), |r| {
            Message::Prefs(PrefsMessage::PhrasesSaved(r))
        })
    }

    /// Fetches whatever the current screen reads, if stale.
    fn screen_loads(&mut self) -> Task<Message> {
        match self.screen {
            Screen::Drafts => Task::batch([self.fetch_drafts(), self.fetch_ignored()]),
            Screen::Review => Task::none(),
            Screen::Preferences => Task::batch([self.fetch_phrases(), self.fetch_signoff()]),
        }
    }

    fn fetch_drafts(&mut self) -> Task<Message> {
        if self.session != SessionPhase::SignedIn || !self.cache.drafts.needs_fetch() {
            return Task::none();
        }
        self.cache.drafts.begin_fetch();
        Task::perform(load_drafts(self.client.clone()), Message::DraftsLoaded)
    }

    fn fetch_ignored(&mut self) -> Task<Message> {
        if self.session != SessionPhase::SignedIn || !self.cache.ignored.needs_fetch() {
            return Task::none();
        }
        self.cache.ignored.begin_fetch();
        Task::perform(load_ignored(self.client.clone()), Message::IgnoredLoaded)
    }

    fn fetch_phrases(&mut self) -> Task<Message> {
        if self.session != SessionPhase::SignedIn || !self.cache.phrases.needs_fetch() {
            return Task::none();
        }
        self.cache.phrases.begin_fetch();
        Task::perform(load_phrases(self.client.clone()), |r| {
            Message::Prefs(PrefsMessage::PhrasesLoaded(r))
        })
    }

    fn fetch_signoff(&mut self) -> Task<Message> {
        if self.session != SessionPhase::SignedIn || !self.cache.signoff.needs_fetch() {
            return Task::none();
        }
        self.cache.signoff.begin_fetch();
        Task::perform(load_signoff(self.client.clone()), |r| {
            Message::Prefs(PrefsMessage::SignoffLoaded(r))
        })
    }

    /// Render current state as UI.
    fn view(&self) -> Element<'_, Message> {
        match &self.session {
            SessionPhase::Checking => return view::view_checking(),
            SessionPhase::SignedOut { error } => return view::view_login(error.as_deref()),
            SessionPhase::SignedIn => {}
        }

        let pending_count = self
            .cache
            .drafts
            .data()
            .map_or(0, |drafts| TabCounts::tally(drafts, 0).pending);

        let content: Element<'_, Message> = match self.screen {
            Screen::Drafts => view::view_drafts(&self.cache, self.filter, self.polling),
            Screen::Review => self.review.as_ref().map_or_else(
                || view::view_drafts(&self.cache, self.filter, self.polling),
                |review| view::view_review(review, &self.body_editor),
            ),
            Screen::Preferences => view::view_preferences(&self.prefs, &self.cache),
        };

        let mut main = column![].spacing(12).padding(20).height(Fill);
        if let Some(notice) = &self.notice {
            main = main.push(view::view_notice(notice));
        }
        main = main.push(content);

        container(row![
            view::view_sidebar(self.screen, pending_count),
            container(main).width(Fill).height(Fill),
        ])
        .width(Fill)
        .height(Fill)
        .style(style::app_background)
        .into()
    }
}

/// Probes the session provider.
async fn check_session(client: ApiClient) -> Result<bool, String> {
    client.session_active().await.map_err(|e| e.to_string())
}

/// Fetches the sign-in URL.
async fn fetch_auth_url(client: ApiClient) -> Result<String, String> {
    client.authorize_url().await.map_err(|e| e.to_string())
}

/// Ends the session, best effort.
async fn logout(client: ApiClient) {
    client.logout().await;
}

/// Loads the draft collection.
async fn load_drafts(client: ApiClient) -> Result<Vec<DraftSummary>, String> {
    client.list_drafts().await.map_err(|e| e.to_string())
}

/// Loads the ignored-email collection.
async fn load_ignored(client: ApiClient) -> Result<Vec<IgnoredEmailSummary>, String> {
    client.ignored_emails().await.map_err(|e| e.to_string())
}

/// Loads one draft detail, tagged with the fetch sequence that requested it.
async fn load_detail(
    client: ApiClient,
    email_id: String,
    seq: u64,
) -> (u64, Result<DraftDetail, String>) {
    let result = client
        .draft_detail(&email_id)
        .await
        .map_err(|e| e.to_string());
    (seq, result)
}

/// Commits an edit buffer.
async fn patch_draft(client: ApiClient, email_id: String, patch: DraftPatch) -> Result<(), String> {
    client
        .update_draft(&email_id, &patch)
        .await
        .map_err(|e| e.to_string())
}

/// Requests a reject transition.
async fn reject_draft(client: ApiClient, email_id: String) -> Result<(), String> {
    client.reject_draft(&email_id).await.map_err(|e| e.to_string())
}

/// Requests a skip transition.
async fn skip_draft(client: ApiClient, email_id: String) -> Result<(), String> {
    client.skip_draft(&email_id).await.map_err(|e| e.to_string())
}

/// Sends the draft.
async fn send_draft(client: ApiClient, email_id: String) -> Result<(), String> {
    client.send_draft(&email_id).await.map_err(|e| e.to_string())
}

/// Triggers an inbound mail poll.
async fn poll_inbox(client: ApiClient) -> Result<(), String> {
    client.trigger_poll().await.map_err(|e| e.to_string())
}

/// Loads the ignore-phrase list.
async fn load_phrases(client: ApiClient) -> Result<Vec<String>, String> {
    client.ignore_phrases().await.map_err(|e| e.to_string())
}

/// Replaces the ignore-phrase list.
async fn put_phrases(client: ApiClient, phrases: Vec<String>) -> Result<(), String> {
    client
        .set_ignore_phrases(&phrases)
        .await
        .map_err(|e| e.to_string())
}

/// Loads the sign-off.
async fn load_signoff(client: ApiClient) -> Result<String, String> {
    client.signoff().await.map_err(|e| e.to_string())
}

/// Replaces the sign-off.
async fn put_signoff(client: ApiClient, signoff: String) -> Result<(), String> {
    client.set_signoff(&signoff).await.map_err(|e| e.to_string())
}

/// Resolves to `message` after a fixed delay.
fn after_delay(delay: Duration, message: Message) -> Task<Message> {
    Task::perform(tokio::time::sleep(delay), move |()| message.clone())
}
