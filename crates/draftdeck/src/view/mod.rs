//! View components for the application.

mod drafts;
mod login;
mod preferences;
mod review;
mod sidebar;

pub use drafts::view_drafts;
pub use login::{view_checking, view_login};
pub use preferences::view_preferences;
pub use review::view_review;
pub use sidebar::view_sidebar;

use iced::widget::{Space, button, container, row, text};
use iced::{Element, Fill};

use crate::message::{Message, Notice, NoticeKind};
use crate::style;

/// Renders the transient notice banner.
pub fn view_notice(notice: &Notice) -> Element<'_, Message> {
    let accent = match notice.kind {
        NoticeKind::Success => style::GREEN,
        NoticeKind::Error => style::RED,
        NoticeKind::Info => style::TEXT_SECONDARY,
    };
    container(
        row![
            text(&notice.text).size(14),
            Space::new().width(Fill),
            button(text("Dismiss").size(12))
                .style(style::secondary_button)
                .padding([4, 10])
                .on_press(Message::DismissNotice),
        ]
        .align_y(iced::Alignment::Center),
    )
    .padding([8, 12])
    .width(Fill)
    .style(style::notice_banner(accent))
    .into()
}
