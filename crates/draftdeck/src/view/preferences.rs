//! Preferences screen: ignore rules and default sign-off.

use draftdeck_core::{PreferencesState, QueryCache};
use iced::widget::{Space, button, column, container, row, text, text_input};
use iced::{Element, Fill};

use crate::message::{Message, PrefsMessage};
use crate::style;

/// Renders the preferences screen.
pub fn view_preferences<'a>(
    prefs: &'a PreferencesState,
    cache: &'a QueryCache,
) -> Element<'a, Message> {
    if cache.phrases.data().is_none() && cache.phrases.is_loading() {
        return text("Loading preferences\u{2026}")
            .size(14)
            .color(style::TEXT_MUTED)
            .into();
    }
    if let Some(error) = cache.phrases.error() {
        return text(error).size(14).color(style::RED).into();
    }

    let heading = column![
        text("Preferences").size(20).color(style::TEXT_PRIMARY),
        text("Email ignore rules and default sign-off for drafts.")
            .size(13)
            .color(style::TEXT_MUTED),
    ]
    .spacing(2);

    column![
        heading,
        ignore_rules_card(prefs, cache),
        signoff_card(prefs, cache),
    ]
    .spacing(16)
    .width(Fill)
    .into()
}

fn ignore_rules_card<'a>(
    prefs: &'a PreferencesState,
    cache: &'a QueryCache,
) -> Element<'a, Message> {
    let phrases: &[String] = cache.phrases.data().map_or(&[], Vec::as_slice);

    let input_row = row![
        text_input("e.g. github emails, newsletters", &prefs.new_phrase)
            .on_input(|s| Message::Prefs(PrefsMessage::NewPhraseChanged(s)))
            .on_submit(Message::Prefs(PrefsMessage::AddPhrase))
            .size(13)
            .padding(8),
        button(text("Add").size(13))
            .style(style::primary_button)
            .padding([8, 14])
            .on_press_maybe((!prefs.saving_phrases).then_some(Message::Prefs(PrefsMessage::AddPhrase))),
    ]
    .spacing(8);

    let mut body = column![
        text("Email Ignore Rules").size(14).color(style::TEXT_PRIMARY),
        text("Emails matching these plain-language rules are ignored and never sent to draft generation.")
            .size(12)
            .color(style::TEXT_MUTED),
        input_row,
    ]
    .spacing(8);

    if prefs.saving_phrases {
        body = body.push(text("Saving\u{2026}").size(12).color(style::TEXT_MUTED));
    }

    if phrases.is_empty() {
        body = body.push(
            text("No ignore rules yet. Add one above.")
                .size(13)
                .color(style::TEXT_MUTED),
        );
    } else {
        let rows: Vec<Element<'a, Message>> = phrases
            .iter()
            .enumerate()
            .map(|(index, phrase)| phrase_row(index, phrase, prefs.saving_phrases))
            .collect();
        body = body.push(column(rows).spacing(6));
    }

    container(body)
        .padding(16)
        .width(Fill)
        .style(style::card)
        .into()
}

fn phrase_row(index: usize, phrase: &str, saving: bool) -> Element<'_, Message> {
    container(
        row![
            text(phrase).size(13).color(style::TEXT_PRIMARY),
            Space::new().width(Fill),
            button(text("Remove").size(12))
                .style(style::secondary_button)
                .padding([4, 10])
                .on_press_maybe((!saving).then_some(Message::Prefs(PrefsMessage::RemovePhrase(index)))),
        ]
        .align_y(iced::Alignment::Center),
    )
    .padding([6, 10])
    .width(Fill)
    .style(style::chip)
    .into()
}

fn signoff_card<'a>(prefs: &'a PreferencesState, cache: &'a QueryCache) -> Element<'a, Message> {
    let loading = cache.signoff.data().is_none() && cache.signoff.is_loading();
    let saving = prefs.saving_signoff;

    let mut input = text_input("e.g. Sincerely, Your Name", &prefs.signoff)
        .size(13)
        .padding(8);
    if !loading {
        input = input
            .on_input(|s| Message::Prefs(PrefsMessage::SignoffChanged(s)))
            .on_submit(Message::Prefs(PrefsMessage::SaveSignoff));
    }

    let save = button(text(if saving { "Saving\u{2026}" } else { "Save" }).size(13))
        .style(style::primary_button)
        .padding([8, 14])
        .on_press_maybe((!saving && !loading).then_some(Message::Prefs(PrefsMessage::SaveSignoff)));

    container(
        column![
            text("Email sign-off").size(14).color(style::TEXT_PRIMARY),
            text("Default closing line(s) appended to generated drafts.")
                .size(12)
                .color(style::TEXT_MUTED),
            row![input, save].spacing(8),
        ]
        .spacing(8),
    )
    .padding(16)
    .width(Fill)
    .style(style::card)
    .into()
}
