//! UI style functions for iced widgets.

use iced::widget::container;
use iced::{Border, Theme};

pub mod palette {
    use iced::Color;

    pub const BG_PANEL: Color = Color::from_rgb(0.93, 0.93, 0.94);
    pub const BORDER: Color = Color::from_rgb(0.75, 0.75, 0.78);
    pub const TEXT_PRIMARY: Color = Color::from_rgb(0.10, 0.10, 0.12);
    pub const TEXT_SECONDARY: Color = Color::from_rgb(0.40, 0.40, 0.45);
}

/// Style for the canvas container.
pub fn canvas_container_style(background: iced::Color) -> impl Fn(&Theme) -> container::Style {
    move |_theme| container::Style {
        background: Some(iced::Background::Color(background)),
        border: Border {
            color: palette::BORDER,
            width: 1.0,
            radius: 4.0.into(),
        },
        ..Default::default()
    }
}

/// Style for the status bar.
pub fn status_bar_style(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(iced::Background::Color(palette::BG_PANEL)),
        border: Border {
            color: palette::BORDER,
            width: 1.0,
            radius: 3.0.into(),
        },
        ..Default::default()
    }
}
