use iced::widget::{button, column, container, text, Column};
use iced::{event, window, Alignment, Element, Event, Length, Subscription, Task, Theme};
use reqwest::Url;
use std::path::PathBuf;

mod ui;

use secure_file_guard::scan::ScanResult;
use secure_file_guard::{config, logging, notify, upload};

/// Main application state
///
/// One controller object per session; the candidate file and the dragging
/// flag live here as explicit fields rather than as ambient UI state.
struct FileGuard {
    /// Last-known picker selection, re-sent by the Upload button
    selected: Option<PathBuf>,
    /// Whether a drag is currently hovering the window
    dragging: bool,
    /// Verdict currently shown in the results panel
    result: Option<ScanResult>,
    /// One-line lifecycle status shown below the panel
    status: String,
    /// Validated upload endpoint
    endpoint: Url,
    /// Blocking alert hook; the real modal in production, swapped out in tests
    notify: fn(&str),
}

/// Application messages (events)
#[derive(Debug, Clone)]
pub enum Message {
    /// User clicked the drop zone; open the native file picker
    BrowseFile,
    /// The file picker closed, possibly without a selection
    FilePicked(Option<PathBuf>),
    /// User clicked the "Upload" button
    UploadPressed,
    /// A runtime event; the file drag lifecycle arrives here
    Event(Event),
    /// A background upload attempt finished
    UploadFinished(Result<ScanResult, &'static str>),
}

impl FileGuard {
    fn new(endpoint: Url) -> (Self, Task<Message>) {
        tracing::info!(endpoint = %endpoint, "SecureFileGuard client initialized");

        (
            FileGuard {
                selected: None,
                dragging: false,
                result: None,
                status: String::from("Ready."),
                endpoint,
                notify: notify::alert,
            },
            Task::none(),
        )
    }

    /// Handle application messages and update state
    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::BrowseFile => Task::perform(
                async {
                    rfd::AsyncFileDialog::new()
                        .set_title("Select a file to scan")
                        .pick_file()
                        .await
                        .map(|handle| handle.path().to_path_buf())
                },
                Message::FilePicked,
            ),
            Message::FilePicked(file) => {
                // The selection is forwarded even when empty; the pipeline
                // guard owns the "no file" decision.
                self.selected = file.clone();
                self.submit(file)
            }
            Message::UploadPressed => {
                // Re-sends the last-known selection. No debouncing: rapid
                // presses each start an independent attempt.
                self.submit(self.selected.clone())
            }
            Message::Event(Event::Window(window::Event::FileHovered(_))) => {
                self.dragging = true;
                Task::none()
            }
            Message::Event(Event::Window(window::Event::FilesHoveredLeft)) => {
                self.dragging = false;
                Task::none()
            }
            Message::Event(Event::Window(window::Event::FileDropped(path))) => {
                self.dragging = false;
                self.dropped_file(Some(path))
            }
            Message::Event(_) => Task::none(),
            Message::UploadFinished(Ok(result)) => {
                if let Some(detail) = result.message.as_deref() {
                    tracing::debug!(detail, "gateway detail");
                }

                // Last write wins: whichever in-flight attempt resolves
                // last owns the panel.
                self.result = Some(result);
                self.status = String::from("Scan complete.");
                Task::none()
            }
            Message::UploadFinished(Err(user_message)) => {
                self.status = String::from("Upload failed.");
                (self.notify)(user_message);
                Task::none()
            }
        }
    }

    /// Handle the drop gesture. A drop carrying no file is recoverable:
    /// it notifies the user and performs no transfer.
    fn dropped_file(&mut self, file: Option<PathBuf>) -> Task<Message> {
        match file {
            Some(path) => {
                tracing::info!(file = %path.display(), "file dropped");
                self.submit(Some(path))
            }
            None => {
                (self.notify)("No file detected. Please try again.");
                Task::none()
            }
        }
    }

    /// Start one independent upload attempt for `file`.
    fn submit(&mut self, file: Option<PathBuf>) -> Task<Message> {
        if let Some(path) = &file {
            self.status = format!("Uploading {}...", path.display());
        }

        let endpoint = self.endpoint.clone();

        Task::perform(
            async move {
                upload::submit(file, endpoint).await.map_err(|error| {
                    tracing::error!(%error, "upload attempt failed");
                    error.user_message()
                })
            },
            Message::UploadFinished,
        )
    }

    /// Build the user interface
    fn view(&self) -> Element<Message> {
        let content: Column<Message> = column![
            text("SecureFileGuard").size(32),
            ui::drop_zone::view(self.dragging),
            button("Upload").on_press(Message::UploadPressed).padding(10),
            ui::results::view(self.result.as_ref()),
            text(&self.status).size(14),
        ]
        .spacing(20)
        .padding(40)
        .align_x(Alignment::Center);

        container(content)
            .width(Length::Fill)
            .height(Length::Fill)
            .center_x(Length::Fill)
            .center_y(Length::Fill)
            .into()
    }

    /// Listen for runtime events to catch the file drag lifecycle
    fn subscription(&self) -> Subscription<Message> {
        event::listen().map(Message::Event)
    }

    /// Set the application theme
    fn theme(&self) -> Theme {
        Theme::Dark
    }
}

fn main() -> iced::Result {
    logging::init();

    let config = config::Config::from_env();
    let endpoint = match config.endpoint_url() {
        Ok(url) => url,
        Err(error) => {
            // An unusable endpoint is fatal: log it and refuse to wire up
            // any event handling.
            tracing::error!(endpoint = %config.endpoint, %error, "invalid upload endpoint");
            std::process::exit(1);
        }
    };

    iced::application("SecureFileGuard", FileGuard::update, FileGuard::view)
        .subscription(FileGuard::subscription)
        .theme(FileGuard::theme)
        .centered()
        .run_with(move || FileGuard::new(endpoint))
}
