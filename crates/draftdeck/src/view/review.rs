//! Review screen: the original email beside the generated draft.

use draftdeck_core::{
    DraftPart, EmailPart, PendingAction, ReviewPhase, ReviewState, sender_display_name,
};
use iced::widget::{Space, button, column, container, row, scrollable, text, text_editor, text_input};
use iced::{Element, Fill};

use crate::html::body_to_text;
use crate::message::{Message, ReviewMessage, Screen};
use crate::style;

/// Renders the review screen.
pub fn view_review<'a>(
    review: &'a ReviewState,
    body_editor: &'a text_editor::Content,
) -> Element<'a, Message> {
    let back = button(text("\u{2190} Back to Drafts").size(13))
        .style(style::link_button)
        .padding([4, 0])
        .on_press(Message::NavigateTo(Screen::Drafts));

    match review.phase() {
        ReviewPhase::Loading => column![
            back,
            container(
                text("Loading draft\u{2026}")
                    .size(14)
                    .color(style::TEXT_MUTED)
            )
            .padding(24),
        ]
        .spacing(8)
        .into(),
        ReviewPhase::Failed(message) => column![back, text(message).size(14).color(style::RED)]
            .spacing(12)
            .into(),
        ReviewPhase::Loaded => {
            let detail = review.detail();
            let email = detail.and_then(|d| d.email.as_ref());
            let draft = detail.and_then(|d| d.draft.as_ref());
            let sender = sender_display_name(email.and_then(|e| e.from.as_deref()));

            let heading = column![
                text("Review Draft").size(20).color(style::TEXT_PRIMARY),
                text(format!("Analyzing email from {sender}"))
                    .size(13)
                    .color(style::TEXT_MUTED),
            ]
            .spacing(2);

            column![
                back,
                heading,
                row![
                    email_pane(email, draft.and_then(|d| d.category.as_deref())),
                    draft_pane(review, draft, body_editor),
                ]
                .spacing(16)
                .height(Fill),
            ]
            .spacing(12)
            .width(Fill)
            .height(Fill)
            .into()
        }
    }
}

fn email_pane<'a>(email: Option<&'a EmailPart>, category: Option<&'a str>) -> Element<'a, Message> {
    let mut header = row![text("ORIGINAL EMAIL").size(12).color(style::TEXT_MUTED)]
        .align_y(iced::Alignment::Center);
    if let Some(category) = category {
        header = header.push(Space::new().width(Fill));
        header = header.push(text(category).size(11).color(style::TEXT_SECONDARY));
    }

    let from = email.and_then(|e| e.from.as_deref()).unwrap_or("\u{2014}");
    let subject = email.and_then(|e| e.subject.as_deref()).unwrap_or("\u{2014}");
    let body = email
        .and_then(|e| e.body.as_deref())
        .map(body_to_text)
        .filter(|b| !b.is_empty())
        .unwrap_or_else(|| "\u{2014}".to_string());

    container(
        column![
            header,
            text(format!("FROM: {from}"))
                .size(13)
                .color(style::TEXT_SECONDARY),
            text(format!("SUB: {subject}"))
                .size(13)
                .color(style::TEXT_SECONDARY),
            scrollable(text(body).size(13).color(style::TEXT_SECONDARY)).height(Fill),
        ]
        .spacing(8),
    )
    .padding(16)
    .width(Fill)
    .height(Fill)
    .style(style::card)
    .into()
}

fn draft_pane<'a>(
    review: &'a ReviewState,
    draft: Option<&'a DraftPart>,
    body_editor: &'a text_editor::Content,
) -> Element<'a, Message> {
    let busy = review.action();
    let mut header = row![
        text("AI GENERATED DRAFT").size(12).color(style::TEXT_MUTED),
        Space::new().width(Fill),
    ]
    .spacing(8)
    .align_y(iced::Alignment::Center);

    let content: Element<'a, Message> = if let Some(edit) = review.edit() {
        let saving = matches!(busy, Some(PendingAction::Saving));
        header = header.push(
            button(text("Cancel").size(13))
                .style(style::secondary_button)
                .padding([6, 12])
                .on_press(Message::Review(ReviewMessage::CancelEditing)),
        );
        header = header.push(
            button(text(if saving { "Saving\u{2026}" } else { "Save" }).size(13))
                .style(style::primary_button)
                .padding([6, 12])
                .on_press_maybe((!saving).then_some(Message::Review(ReviewMessage::Save))),
        );

        column![
            text("Subject").size(12).color(style::TEXT_SECONDARY),
            text_input("Draft subject", &edit.subject)
                .on_input(|s| Message::Review(ReviewMessage::SubjectChanged(s)))
                .size(13)
                .padding(8),
            text("Body").size(12).color(style::TEXT_SECONDARY),
            text_editor(body_editor)
                .on_action(|a| Message::Review(ReviewMessage::BodyEdited(a)))
                .height(Fill),
        ]
        .spacing(6)
        .height(Fill)
        .into()
    } else {
        header = header.push(
            button(text("Edit Draft").size(13))
                .style(style::secondary_button)
                .padding([6, 12])
                .on_press(Message::Review(ReviewMessage::StartEditing)),
        );

        let subject = draft
            .and_then(|d| d.draft_subject.as_deref())
            .unwrap_or("\u{2014}");
        let body = draft
            .and_then(|d| d.draft_text.as_deref())
            .filter(|b| !b.is_empty())
            .unwrap_or("\u{2014}");
        let rejecting = matches!(busy, Some(PendingAction::Rejecting));
        let sending = matches!(busy, Some(PendingAction::Sending));

        let actions = row![
            button(
                text(if rejecting {
                    "Rejecting\u{2026}"
                } else {
                    "Reject Draft"
                })
                .size(13)
            )
            .style(style::secondary_button)
            .padding([8, 16])
            .on_press_maybe(busy.is_none().then_some(Message::Review(ReviewMessage::Reject))),
            button(
                text(if sending {
                    "Sending\u{2026}"
                } else {
                    "Approve & Send"
                })
                .size(13)
            )
            .style(style::primary_button)
            .padding([8, 16])
            .on_press_maybe(busy.is_none().then_some(Message::Review(ReviewMessage::Send))),
        ]
        .spacing(8);

        column![
            text(format!("Subject: {subject}"))
                .size(13)
                .color(style::TEXT_SECONDARY),
            scrollable(text(body).size(13).color(style::TEXT_SECONDARY)).height(Fill),
            actions,
        ]
        .spacing(8)
        .height(Fill)
        .into()
    };

    container(column![header, content].spacing(10))
        .padding(16)
        .width(Fill)
        .height(Fill)
        .style(style::card)
        .into()
}
