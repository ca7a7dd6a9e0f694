use iced::widget::{column, container, row, scrollable};
use iced::{window, Element, Length, Subscription, Task, Theme};
use rfd::FileDialog;
use std::path::PathBuf;

mod config;
mod intake;
mod net;
mod state;
mod ui;

use config::Config;
use intake::encode::{self, AcceptedImage, EncodeError};
use intake::validate::{self, Candidate};
use net::predict::{self, PredictError};
use state::guide::GuideState;
use state::prediction::{PredictionResult, PredictionState};
use state::upload::Intake;

/// Main application state
struct DermaLens {
    /// Prediction service endpoints, resolved once at startup
    config: Config,
    /// The current photo selection and drag/zoom flags
    intake: Intake,
    /// Lifecycle of the current classification attempt
    prediction: PredictionState,
    /// Expand/collapse flags for the reference guide
    guide: GuideState,
    /// Status message to display to the user
    status: String,
}

/// Application messages (events)
#[derive(Debug, Clone)]
enum Message {
    /// Header button: scroll down to the upload section
    JumpToUpload,
    /// A file is hovering over the window
    DragEntered,
    /// The hovering file left without being dropped
    DragLeft,
    /// A file was dropped onto the window
    FileDropped(PathBuf),
    /// User clicked "Choose Image"
    BrowseImage,
    /// Background encoding finished
    ImageEncoded(Result<AcceptedImage, EncodeError>),
    /// User opened or closed the full-size preview
    ToggleZoom(bool),
    /// User discarded the current photo (also the reupload action)
    RemoveImage,
    /// User asked for a classification of the current photo
    Predict,
    /// The classification request resolved for the photo with this generation
    PredictionFinished {
        generation: u64,
        outcome: Result<PredictionResult, PredictError>,
    },
    /// User expanded or collapsed a reference guide entry
    GuideToggled(usize),
}

fn main_scroll_id() -> scrollable::Id {
    scrollable::Id::new("main-scroll")
}

impl DermaLens {
    /// Create a new instance of the application
    fn new() -> (Self, Task<Message>) {
        // Without a reachable endpoint the app cannot do its one job, so a
        // broken configuration fails loudly at startup.
        let config = Config::from_env().expect(
            "Failed to read prediction service configuration. \
             Set DERMALENS_API_URL to the classifier's base URL.",
        );

        println!("🔬 DermaLens initialized. Predictions via {}", config.base_url());

        (
            DermaLens {
                config,
                intake: Intake::default(),
                prediction: PredictionState::Idle,
                guide: GuideState::default(),
                status: String::from("Upload a facial photo to begin."),
            },
            Task::none(),
        )
    }

    /// Handle application messages and update state
    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::JumpToUpload => scrollable::snap_to(
                main_scroll_id(),
                scrollable::RelativeOffset { x: 0.0, y: 0.35 },
            ),

            Message::DragEntered => {
                self.intake.begin_drag();
                Task::none()
            }

            Message::DragLeft => {
                self.intake.end_drag();
                Task::none()
            }

            Message::FileDropped(path) => {
                self.intake.end_drag();
                self.upload(path)
            }

            Message::BrowseImage => {
                // Show the native file picker dialog
                let file = FileDialog::new()
                    .set_title("Select a Facial Photo")
                    .add_filter("Images (JPEG, PNG)", &["jpg", "jpeg", "png"])
                    .pick_file();

                match file {
                    Some(path) => self.upload(path),
                    None => Task::none(),
                }
            }

            Message::ImageEncoded(outcome) => {
                match outcome {
                    Ok(image) => {
                        if self.intake.select(image) {
                            // A fresh selection invalidates any previous result
                            self.prediction = PredictionState::Idle;
                            self.status =
                                String::from("✅ Image uploaded successfully. Ready for analysis.");
                        }
                    }
                    Err(e) => {
                        // Nothing was installed, the previous selection stands
                        eprintln!("⚠️ Encoding failed: {}", e);
                        self.status = format!("⚠️ {}", e);
                    }
                }
                Task::none()
            }

            Message::ToggleZoom(zoom) => {
                self.intake.set_zoom(zoom);
                Task::none()
            }

            Message::RemoveImage => {
                self.intake.remove();
                self.prediction = PredictionState::Idle;
                self.status = String::from("Photo removed. Upload another to start over.");
                Task::none()
            }

            Message::Predict => self.predict(),

            Message::PredictionFinished { generation, outcome } => {
                // Staleness guard: the selection changed (or was removed)
                // while the request was out, so this response no longer
                // belongs to the photo on screen.
                if self.intake.current_generation() != Some(generation) {
                    println!("🗑️ Discarding stale prediction (generation {})", generation);
                    return Task::none();
                }

                match outcome {
                    Ok(result) => {
                        println!(
                            "🔬 Classified as {} ({:.2} confidence)",
                            result.acne_type(),
                            result.confidence()
                        );
                        self.status = String::from("✅ Analysis complete.");
                        self.prediction = PredictionState::Succeeded(result);
                    }
                    Err(error) => {
                        eprintln!("⚠️ Prediction failed: {}", error);
                        self.status = format!("⚠️ {}", error);
                        self.prediction = PredictionState::Failed(error);
                    }
                }
                Task::none()
            }

            Message::GuideToggled(index) => {
                self.guide.toggle(index);
                Task::none()
            }
        }
    }

    /// Validate a dropped or browsed file and launch background encoding.
    /// Rejections surface in the status line and change nothing else.
    fn upload(&mut self, path: PathBuf) -> Task<Message> {
        let candidate = match Candidate::from_path(&path) {
            Ok(candidate) => candidate,
            Err(e) => {
                self.status = format!("⚠️ Could not read file: {}", e);
                return Task::none();
            }
        };

        match validate::validate(&candidate) {
            Ok(kind) => {
                let generation = self.intake.reserve_generation();
                self.status = String::from("⏳ Loading image...");
                Task::perform(encode::encode(path, kind, generation), Message::ImageEncoded)
            }
            Err(reason) => {
                println!("🚫 Rejected upload: {}", reason);
                self.status = format!("⚠️ {}", reason);
                Task::none()
            }
        }
    }

    /// Launch a classification request for the current photo
    fn predict(&mut self) -> Task<Message> {
        // Guard: predicting with no photo selected is a caller bug, not a
        // user-facing error. Nothing happens.
        let Some(image) = self.intake.current() else {
            return Task::none();
        };

        // One request at a time; terminal states may start a fresh one
        if !self.prediction.can_start() {
            return Task::none();
        }

        let generation = image.generation;
        let snapshot = image.clone();
        let endpoint = self.config.predict_url();

        self.prediction = PredictionState::InFlight { generation };

        Task::perform(predict::classify(endpoint, snapshot), move |outcome| {
            Message::PredictionFinished { generation, outcome }
        })
    }

    /// Build the user interface
    fn view(&self) -> Element<'_, Message> {
        // The zoom view takes over the whole window until dismissed
        if self.intake.zoomed() {
            if let Some(image) = self.intake.current() {
                return ui::upload::zoom_view(image);
            }
        }

        let mut left = column![ui::upload::panel(&self.intake, &self.prediction, &self.status)]
            .spacing(16);
        if let Some(card) = ui::result::card(&self.prediction) {
            left = left.push(card);
        }

        let columns = row![
            container(left).width(Length::FillPortion(1)),
            container(ui::guide::panel(&self.guide)).width(Length::FillPortion(1)),
        ]
        .spacing(24);

        let content = column![ui::header(), columns, ui::disclaimer()]
            .spacing(32)
            .padding(32)
            .width(Length::Fill);

        scrollable(content)
            .id(main_scroll_id())
            .height(Length::Fill)
            .into()
    }

    /// Listen for files dragged over and dropped onto the window
    fn subscription(&self) -> Subscription<Message> {
        iced::event::listen_with(handle_window_event)
    }

    /// Set the application theme
    fn theme(&self) -> Theme {
        Theme::Light
    }
}

/// Map window-level drag and drop events to intake messages
fn handle_window_event(
    event: iced::Event,
    _status: iced::event::Status,
    _window: window::Id,
) -> Option<Message> {
    match event {
        iced::Event::Window(window::Event::FileHovered(_)) => Some(Message::DragEntered),
        iced::Event::Window(window::Event::FilesHoveredLeft) => Some(Message::DragLeft),
        iced::Event::Window(window::Event::FileDropped(path)) => Some(Message::FileDropped(path)),
        _ => None,
    }
}

fn main() -> iced::Result {
    iced::application("DermaLens", DermaLens::update, DermaLens::view)
        .subscription(DermaLens::subscription)
        .theme(DermaLens::theme)
        .centered()
        .run_with(DermaLens::new)
}
