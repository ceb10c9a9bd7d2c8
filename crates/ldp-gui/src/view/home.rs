//! Intake and loading views.

use iced::widget::{button, column, container, text};
use iced::{Alignment, Border, Element, Length, Theme};
use iced_fonts::lucide;

use crate::message::Message;
use crate::state::{ALLOWED_EXTENSIONS, Session};

/// Drop zone shown until an analysis is underway.
///
/// Dropping a file anywhere in the window also works; the zone itself is
/// a button that opens the native picker.
pub fn view_intake(session: &Session) -> Element<'_, Message> {
    let hint = match session.selected_file() {
        Some(file) => format!("{} staged. Run Analyze to parse it.", file.name),
        None => format!(
            "Drop a spreadsheet here, or click to browse ({}).",
            ALLOWED_EXTENSIONS.join(", ")
        ),
    };

    let zone = button(
        column![
            lucide::layers().size(40),
            text("INITIALIZE DATA INGESTION").size(16),
            text(hint).size(13),
        ]
        .spacing(12)
        .align_x(Alignment::Center),
    )
    .on_press(Message::OpenFilePicker)
    .padding(48)
    .width(Length::Fill)
    .style(|theme: &Theme, _status| {
        let palette = theme.extended_palette();
        button::Style {
            background: Some(palette.background.weak.color.into()),
            text_color: palette.background.base.text,
            border: Border {
                color: palette.background.strong.color,
                width: 1.0,
                radius: 8.0.into(),
            },
            ..Default::default()
        }
    });

    container(zone)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_y(Alignment::Center)
        .into()
}

/// Shown while an upload is in flight.
pub fn view_loading<'a>() -> Element<'a, Message> {
    container(
        column![
            lucide::loader().size(32),
            text("ANALYZING SPREADSHEET…").size(14),
            text("Uploading and mapping columns.").size(12),
        ]
        .spacing(12)
        .align_x(Alignment::Center),
    )
    .width(Length::Fill)
    .height(Length::Fill)
    .align_x(Alignment::Center)
    .align_y(Alignment::Center)
    .into()
}
