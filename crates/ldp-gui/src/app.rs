//! Application root: state, update loop, subscriptions.

use std::path::PathBuf;

use iced::{Element, Subscription, Task, Theme, window};

use ldp_client::ClientConfig;

use crate::message::Message;
use crate::state::{ALLOWED_EXTENSIONS, Session};
use crate::{service, view};

/// Top-level application state.
pub struct App {
    session: Session,
    config: ClientConfig,
}

impl App {
    pub fn new() -> (Self, Task<Message>) {
        let config = ClientConfig::from_env();
        tracing::info!(backend = %config.base_url, "client configured");

        (
            Self {
                session: Session::default(),
                config,
            },
            Task::none(),
        )
    }

    pub fn theme(&self) -> Theme {
        Theme::Light
    }

    pub fn title(&self) -> String {
        match self.session.selected_file() {
            Some(file) => format!("Latspace Data Parser - {}", file.name),
            None => "Latspace Data Parser".to_string(),
        }
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::OpenFilePicker => Task::perform(pick_file(), Message::FileSelected),
            Message::FileSelected(Some(path)) | Message::FileDropped(path) => {
                if !self.session.accept(std::slice::from_ref(&path)) {
                    tracing::debug!(path = %path.display(), "ignored file with unsupported extension");
                }
                Task::none()
            }
            Message::FileSelected(None) => Task::none(),
            Message::AnalyzeRequested => match self.session.begin_analysis() {
                Some(job) => {
                    tracing::info!(file = %job.file_name, generation = job.generation, "analysis started");
                    service::analysis::run(self.config.clone(), job)
                }
                None => Task::none(),
            },
            Message::AnalysisFinished {
                generation,
                outcome,
            } => {
                if !self.session.finish_analysis(generation, outcome) {
                    tracing::debug!(generation, "discarded stale analysis result");
                }
                Task::none()
            }
            Message::ResetRequested => {
                self.session.reset();
                Task::none()
            }
            Message::ExportRequested => match self.session.report() {
                Some(report) => service::export::run(report.clone()),
                None => Task::none(),
            },
            Message::ExportFinished(Some(path)) => {
                tracing::info!(path = %path.display(), "report exported");
                Task::none()
            }
            Message::ExportFinished(None) => Task::none(),
            Message::Noop => Task::none(),
        }
    }

    pub fn view(&self) -> Element<'_, Message> {
        view::view_root(&self.session)
    }

    /// Files dropped anywhere on the window feed the same intake path as
    /// the picker.
    pub fn subscription(&self) -> Subscription<Message> {
        window::events().map(|(_id, event)| match event {
            window::Event::FileDropped(path) => Message::FileDropped(path),
            _ => Message::Noop,
        })
    }
}

/// Native open dialog, filtered to the supported spreadsheet types.
async fn pick_file() -> Option<PathBuf> {
    rfd::AsyncFileDialog::new()
        .set_title("Select Spreadsheet")
        .add_filter("Spreadsheets", &ALLOWED_EXTENSIONS)
        .pick_file()
        .await
        .map(|handle| handle.path().to_path_buf())
}
