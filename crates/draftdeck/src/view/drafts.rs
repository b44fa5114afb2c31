//! Draft list screen: filter tabs, cards, poll/refresh controls.

use draftdeck_core::{
    DraftFilter, DraftSummary, IgnoredEmailSummary, QueryCache, TabCounts, filter_drafts,
    format_timestamp,
};
use iced::widget::{Space, button, column, container, row, scrollable, text};
use iced::{Color, Element, Fill};

use crate::message::Message;
use crate::style;

/// Renders the drafts screen.
pub fn view_drafts(cache: &QueryCache, filter: DraftFilter, polling: bool) -> Element<'_, Message> {
    let drafts: &[DraftSummary] = cache.drafts.data().map_or(&[], Vec::as_slice);
    let ignored: &[IgnoredEmailSummary] = cache.ignored.data().map_or(&[], Vec::as_slice);
    let counts = TabCounts::tally(drafts, ignored.len());

    // The ignored tab reads its own collection and does not need the draft
    // collection to have loaded.
    let showing_ignored = filter == DraftFilter::Ignored;
    let (loading, error) = if showing_ignored {
        (
            cache.ignored.is_loading() && cache.ignored.data().is_none(),
            cache.ignored.error(),
        )
    } else {
        (
            cache.drafts.is_loading() && cache.drafts.data().is_none(),
            cache.drafts.error(),
        )
    };

    let body: Element<'_, Message> = if let Some(error) = error {
        text(error).size(14).color(style::RED).into()
    } else if loading {
        let label = if showing_ignored {
            "Loading ignored emails\u{2026}"
        } else {
            "Loading drafts\u{2026}"
        };
        text(label).size(14).color(style::TEXT_MUTED).into()
    } else if showing_ignored {
        if ignored.is_empty() {
            text(filter.empty_state())
                .size(14)
                .color(style::TEXT_MUTED)
                .into()
        } else {
            let cards: Vec<Element<'_, Message>> = ignored.iter().map(ignored_card).collect();
            scrollable(column(cards).spacing(8)).height(Fill).into()
        }
    } else {
        let visible = filter_drafts(drafts, filter);
        if visible.is_empty() {
            text(filter.empty_state())
                .size(14)
                .color(style::TEXT_MUTED)
                .into()
        } else {
            let cards: Vec<Element<'_, Message>> = visible.into_iter().map(draft_card).collect();
            scrollable(column(cards).spacing(8)).height(Fill).into()
        }
    };

    column![view_header(polling), view_tabs(filter, counts), body]
        .spacing(12)
        .width(Fill)
        .height(Fill)
        .into()
}

fn view_header(polling: bool) -> Element<'static, Message> {
    let poll_label = if polling {
        "Polling\u{2026}"
    } else {
        "Poll inbox"
    };
    let poll = button(text(poll_label).size(14))
        .style(style::primary_button)
        .padding([8, 16])
        .on_press_maybe((!polling).then_some(Message::TriggerPoll));

    row![
        column![
            text("Drafts").size(20).color(style::TEXT_PRIMARY),
            text("AI-generated replies waiting for your review.")
                .size(13)
                .color(style::TEXT_MUTED),
        ]
        .spacing(2),
        Space::new().width(Fill),
        button(text("Refresh").size(14))
            .style(style::secondary_button)
            .padding([8, 12])
            .on_press(Message::RefreshDrafts),
        poll,
    ]
    .spacing(8)
    .align_y(iced::Alignment::Center)
    .into()
}

fn view_tabs(active: DraftFilter, counts: TabCounts) -> Element<'static, Message> {
    let mut tabs = row![].spacing(6);
    for tab in DraftFilter::TABS {
        let is_active = tab == active;
        let count_color = if is_active {
            Color {
                a: 0.8,
                ..Color::WHITE
            }
        } else {
            style::TEXT_MUTED
        };
        tabs = tabs.push(
            button(
                row![
                    text(tab.label()).size(13),
                    text(counts.badge(tab).to_string())
                        .size(12)
                        .color(count_color),
                ]
                .spacing(6)
                .align_y(iced::Alignment::Center),
            )
            .style(style::tab_button(is_active))
            .padding([6, 12])
            .on_press(Message::FilterSelected(tab)),
        );
    }
    tabs.into()
}

fn draft_card(draft: &DraftSummary) -> Element<'_, Message> {
    let state = draft.state();
    let tone = style::tone_color(state.tone());

    let mut meta = row![].spacing(8).align_y(iced::Alignment::Center);
    if let Some(category) = &draft.category {
        meta = meta.push(text(category).size(11).color(style::TEXT_SECONDARY));
    }
    meta = meta.push(
        text(format_timestamp(draft.generated_at.as_deref()))
            .size(11)
            .color(style::TEXT_MUTED),
    );

    let mut info = column![
        meta,
        text(draft.from.as_deref().unwrap_or("\u{2014}"))
            .size(14)
            .color(style::TEXT_PRIMARY),
        text(draft.subject.as_deref().unwrap_or(""))
            .size(13)
            .color(style::TEXT_SECONDARY),
    ]
    .spacing(2);
    if let Some(snippet) = &draft.snippet {
        info = info.push(text(snippet).size(12).color(style::TEXT_MUTED));
    }
    info = info.push(
        row![
            text(state.icon()).size(12).color(tone),
            text(state.label()).size(12).color(tone),
        ]
        .spacing(4),
    );

    let open = button(info)
        .style(style::row_button)
        .width(Fill)
        .padding(12)
        .on_press(Message::OpenDraft(draft.email_id.clone()));

    let mut card_row = row![open].align_y(iced::Alignment::Center);
    if draft.can_skip() {
        card_row = card_row.push(
            button(text("Skip").size(13))
                .style(style::secondary_button)
                .padding([8, 14])
                .on_press(Message::SkipDraft(draft.email_id.clone())),
        );
        card_row = card_row.push(Space::new().width(8));
    }

    container(card_row)
        .width(Fill)
        .padding(4)
        .style(style::card)
        .into()
}

fn ignored_card(email: &IgnoredEmailSummary) -> Element<'_, Message> {
    let mut info = column![
        text(format_timestamp(email.date.as_deref()))
            .size(11)
            .color(style::TEXT_MUTED),
        text(email.from.as_deref().unwrap_or("\u{2014}"))
            .size(14)
            .color(style::TEXT_PRIMARY),
        text(email.subject.as_deref().unwrap_or(""))
            .size(13)
            .color(style::TEXT_SECONDARY),
    ]
    .spacing(2);
    if let Some(snippet) = &email.snippet {
        info = info.push(text(snippet).size(12).color(style::TEXT_MUTED));
    }
    info = info.push(
        text("Ignored (no draft)")
            .size(11)
            .color(style::TEXT_MUTED),
    );

    container(info)
        .width(Fill)
        .padding(12)
        .style(style::card)
        .into()
}
