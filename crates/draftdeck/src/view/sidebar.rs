//! Navigation sidebar.

use iced::widget::{Space, button, column, container, row, text};
use iced::{Color, Element, Fill, Length};

use crate::message::{Message, Screen};
use crate::style;

/// Renders the navigation sidebar with the pending-count badge.
pub fn view_sidebar(screen: Screen, pending_count: usize) -> Element<'static, Message> {
    let drafts_active = matches!(screen, Screen::Drafts | Screen::Review);

    container(
        column![
            text("DraftDeck").size(18).color(style::TEXT_PRIMARY),
            Space::new().height(16),
            nav_item("Drafts", Screen::Drafts, drafts_active, pending_count),
            nav_item(
                "Preferences",
                Screen::Preferences,
                screen == Screen::Preferences,
                0
            ),
            Space::new().height(Fill),
            button(text("Log out").size(13))
                .style(style::row_button)
                .width(Fill)
                .padding([8, 12])
                .on_press(Message::LogOut),
        ]
        .spacing(4),
    )
    .width(Length::Fixed(200.0))
    .height(Fill)
    .padding(16)
    .style(style::sidebar)
    .into()
}

fn nav_item(
    label: &'static str,
    target: Screen,
    active: bool,
    badge: usize,
) -> Element<'static, Message> {
    let mut content = row![text(label).size(14)]
        .spacing(8)
        .align_y(iced::Alignment::Center);
    if badge > 0 {
        let badge_color = if active { Color::WHITE } else { style::PRIMARY };
        content = content.push(Space::new().width(Fill));
        content = content.push(text(badge.to_string()).size(12).color(badge_color));
    }
    button(content)
        .style(style::tab_button(active))
        .width(Fill)
        .padding([8, 12])
        .on_press(Message::NavigateTo(target))
        .into()
}
