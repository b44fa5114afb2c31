//! Sign-in gate screens.

use iced::widget::{Space, button, column, container, text};
use iced::{Element, Fill};

use crate::message::Message;
use crate::style;

/// Renders the startup session-probe screen.
pub fn view_checking() -> Element<'static, Message> {
    container(
        text("Checking sign-in\u{2026}")
            .size(14)
            .color(style::TEXT_MUTED),
    )
    .width(Fill)
    .height(Fill)
    .center_x(Fill)
    .center_y(Fill)
    .style(style::app_background)
    .into()
}

/// Renders the login screen.
pub fn view_login(error: Option<&str>) -> Element<'_, Message> {
    let mut card = column![
        text("DraftDeck").size(22).color(style::TEXT_PRIMARY),
        Space::new().height(8),
        text("Sign in with your Google account to continue.")
            .size(14)
            .color(style::TEXT_SECONDARY),
        Space::new().height(20),
        button(text("Sign in").size(14))
            .style(style::primary_button)
            .padding([10, 24])
            .on_press(Message::SignIn),
        Space::new().height(8),
        button(text("I signed in - check again").size(12))
            .style(style::link_button)
            .padding([4, 8])
            .on_press(Message::CheckSession),
    ]
    .align_x(iced::Alignment::Center)
    .spacing(2);

    if let Some(error) = error {
        card = card.push(Space::new().height(12));
        card = card.push(text(error).size(13).color(style::RED));
    }

    container(container(card).padding(32).style(style::card))
        .width(Fill)
        .height(Fill)
        .center_x(Fill)
        .center_y(Fill)
        .style(style::app_background)
        .into()
}
