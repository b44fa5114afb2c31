//! Shared colors and widget styles.

use draftdeck_core::StatusTone;
use iced::widget::{button, container};
use iced::{Background, Border, Color, Theme};

/// Brand orange for primary actions and the active tab.
pub const PRIMARY: Color = Color::from_rgb(0.92, 0.35, 0.05);
/// Hover shade of the brand orange.
pub const PRIMARY_DARK: Color = Color::from_rgb(0.76, 0.28, 0.04);
/// Window background.
pub const BACKGROUND: Color = Color::from_rgb(0.976, 0.98, 0.984);
/// Card and sidebar background.
pub const SURFACE: Color = Color::from_rgb(1.0, 1.0, 1.0);
/// Subtle border.
pub const BORDER: Color = Color::from_rgb(0.898, 0.906, 0.922);
/// Primary text.
pub const TEXT_PRIMARY: Color = Color::from_rgb(0.122, 0.161, 0.216);
/// Secondary text.
pub const TEXT_SECONDARY: Color = Color::from_rgb(0.294, 0.333, 0.388);
/// De-emphasized text.
pub const TEXT_MUTED: Color = Color::from_rgb(0.61, 0.639, 0.686);
/// Success green.
pub const GREEN: Color = Color::from_rgb(0.086, 0.639, 0.29);
/// Error red.
pub const RED: Color = Color::from_rgb(0.863, 0.149, 0.149);
/// Faint gray fill for secondary buttons and chips.
pub const FILL: Color = Color::from_rgb(0.953, 0.957, 0.965);

/// Corner radius used across the app.
pub const RADIUS: f32 = 8.0;

/// Color for a status display tone.
#[must_use]
pub const fn tone_color(tone: StatusTone) -> Color {
    match tone {
        StatusTone::Attention => PRIMARY,
        StatusTone::Positive => GREEN,
        StatusTone::Muted => TEXT_MUTED,
    }
}

/// Solid orange action button.
pub fn primary_button(_theme: &Theme, status: button::Status) -> button::Style {
    let background = match status {
        button::Status::Hovered | button::Status::Pressed => PRIMARY_DARK,
        button::Status::Disabled => Color { a: 0.5, ..PRIMARY },
        button::Status::Active => PRIMARY,
    };
    button::Style {
        background: Some(Background::Color(background)),
        text_color: Color::WHITE,
        border: Border {
            radius: RADIUS.into(),
            ..Border::default()
        },
        ..button::Style::default()
    }
}

/// Quiet gray button.
pub fn secondary_button(_theme: &Theme, status: button::Status) -> button::Style {
    let background = match status {
        button::Status::Hovered | button::Status::Pressed => BORDER,
        _ => FILL,
    };
    button::Style {
        background: Some(Background::Color(background)),
        text_color: TEXT_SECONDARY,
        border: Border {
            radius: RADIUS.into(),
            ..Border::default()
        },
        ..button::Style::default()
    }
}

/// Borderless button rendered as an orange text link.
pub fn link_button(_theme: &Theme, status: button::Status) -> button::Style {
    let text_color = match status {
        button::Status::Hovered | button::Status::Pressed => PRIMARY_DARK,
        _ => PRIMARY,
    };
    button::Style {
        background: None,
        text_color,
        ..button::Style::default()
    }
}

/// Filter tab button; the active tab is filled with the brand color.
pub fn tab_button(active: bool) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |_theme, status| {
        let background = if active {
            match status {
                button::Status::Hovered | button::Status::Pressed => PRIMARY_DARK,
                _ => PRIMARY,
            }
        } else {
            match status {
                button::Status::Hovered | button::Status::Pressed => BORDER,
                _ => FILL,
            }
        };
        button::Style {
            background: Some(Background::Color(background)),
            text_color: if active { Color::WHITE } else { TEXT_SECONDARY },
            border: Border {
                radius: RADIUS.into(),
                ..Border::default()
            },
            ..button::Style::default()
        }
    }
}

/// Transparent row button that highlights on hover (list rows, nav items).
pub fn row_button(_theme: &Theme, status: button::Status) -> button::Style {
    let background = match status {
        button::Status::Hovered | button::Status::Pressed => FILL,
        _ => Color::TRANSPARENT,
    };
    button::Style {
        background: Some(Background::Color(background)),
        text_color: TEXT_PRIMARY,
        border: Border {
            radius: RADIUS.into(),
            ..Border::default()
        },
        ..button::Style::default()
    }
}

/// Window background container.
pub fn app_background(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(BACKGROUND)),
        text_color: Some(TEXT_PRIMARY),
        ..container::Style::default()
    }
}

/// White card with a subtle border.
pub fn card(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(SURFACE)),
        border: Border {
            color: BORDER,
            width: 1.0,
            radius: RADIUS.into(),
        },
        ..container::Style::default()
    }
}

/// Faint gray chip row (phrase list entries).
pub fn chip(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(FILL)),
        border: Border {
            radius: RADIUS.into(),
            ..Border::default()
        },
        ..container::Style::default()
    }
}

/// Sidebar container.
pub fn sidebar(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(SURFACE)),
        border: Border {
            color: BORDER,
            width: 1.0,
            radius: 0.0.into(),
        },
        ..container::Style::default()
    }
}

/// Notice banner tinted by severity.
pub fn notice_banner(accent: Color) -> impl Fn(&Theme) -> container::Style {
    move |_theme| container::Style {
        background: Some(Background::Color(Color { a: 0.12, ..accent })),
        text_color: Some(TEXT_PRIMARY),
        border: Border {
            color: Color { a: 0.5, ..accent },
            width: 1.0,
            radius: RADIUS.into(),
        },
        ..container::Style::default()
    }
}
