//! View functions.
//!
//! Views are pure: they read session state and produce widgets; every
//! state change goes back through a [`Message`].

mod home;
mod results;

use iced::widget::{Space, button, column, container, row, text};
use iced::{Alignment, Element, Length, Theme};
use iced_fonts::lucide;

use crate::message::Message;
use crate::state::{AnalysisState, Session};

pub use home::{view_intake, view_loading};
pub use results::view_results;

/// Root view: header, content area, command bar.
pub fn view_root(session: &Session) -> Element<'_, Message> {
    let content: Element<'_, Message> = match session.analysis() {
        AnalysisState::Loading => view_loading(),
        AnalysisState::Success(report) => view_results(report),
        AnalysisState::Error(message) => {
            column![view_error_banner(message), view_intake(session)]
                .spacing(12)
                .into()
        }
        AnalysisState::Idle => view_intake(session),
    };

    column![
        view_header(session),
        container(content)
            .width(Length::Fill)
            .height(Length::Fill)
            .padding(16),
        view_command_bar(session),
    ]
    .width(Length::Fill)
    .height(Length::Fill)
    .into()
}

/// Title bar with a live status indicator.
fn view_header(session: &Session) -> Element<'_, Message> {
    let status = if session.is_loading() {
        "ANALYZING…"
    } else {
        "READY"
    };

    container(
        row![
            text("LATSPACE DATA PARSER").size(20),
            Space::new().width(Length::Fill),
            text(status).size(12).style(|theme: &Theme| {
                let palette = theme.extended_palette();
                text::Style {
                    color: Some(palette.primary.strong.color),
                }
            }),
        ]
        .align_y(Alignment::Center),
    )
    .padding([12.0, 16.0])
    .width(Length::Fill)
    .into()
}

/// Single error surface; all failures arrive here as one message.
fn view_error_banner(message: &str) -> Element<'_, Message> {
    container(
        row![
            lucide::triangle_alert().size(14),
            text(format!("ERROR: {message}")).size(13),
        ]
        .spacing(8)
        .align_y(Alignment::Center),
    )
    .padding(12)
    .width(Length::Fill)
    .style(|theme: &Theme| {
        let palette = theme.extended_palette();
        container::Style {
            background: Some(palette.danger.weak.color.into()),
            text_color: Some(palette.danger.strong.color),
            ..Default::default()
        }
    })
    .into()
}

/// Bottom command bar: file slot plus the action buttons.
fn view_command_bar(session: &Session) -> Element<'_, Message> {
    let file_label = match session.selected_file() {
        Some(file) => format!("TARGET: {}", file.name),
        None => "AWAITING SPREADSHEET INPUT…".to_string(),
    };

    let file_slot = row![lucide::upload().size(16), text(file_label).size(13)]
        .spacing(10)
        .align_y(Alignment::Center);

    let analyze = button(text("Analyze").size(13))
        .on_press_maybe(session.can_analyze().then_some(Message::AnalyzeRequested))
        .style(button::primary);

    let reset = button(text("Reset").size(13))
        .on_press(Message::ResetRequested)
        .style(button::secondary);

    let mut actions = row![reset, analyze].spacing(8);
    if session.report().is_some() {
        actions = actions.push(
            button(text("Download JSON").size(13))
                .on_press(Message::ExportRequested)
                .style(button::success),
        );
    }

    container(
        row![file_slot, Space::new().width(Length::Fill), actions].align_y(Alignment::Center),
    )
    .padding([12.0, 16.0])
    .width(Length::Fill)
    .style(|theme: &Theme| {
        let palette = theme.extended_palette();
        container::Style {
            background: Some(palette.background.weak.color.into()),
            ..Default::default()
        }
    })
    .into()
}
