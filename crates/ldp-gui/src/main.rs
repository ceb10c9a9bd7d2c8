//! Latspace Data Parser - Desktop GUI Application
//!
//! A desktop client for submitting spreadsheet files to the Latspace
//! parsing service and inspecting the structured result.
//!
//! Built with Iced 0.14 using the Elm architecture (State, Message,
//! Update, View).

use iced::Size;
use iced::window;

use ldp_gui::app::App;

/// Application entry point.
pub fn main() -> iced::Result {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();

    tracing::info!("Starting Latspace Data Parser");

    // Run the Iced application using the builder pattern
    iced::application(App::new, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .subscription(App::subscription)
        .font(iced_fonts::LUCIDE_FONT_BYTES)
        .window(window::Settings {
            size: Size::new(1080.0, 760.0),
            min_size: Some(Size::new(860.0, 560.0)),
            ..Default::default()
        })
        .run()
}
