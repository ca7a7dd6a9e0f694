/// Prediction outcome card
///
/// Only terminal states render a card; Idle and InFlight draw nothing here
/// (the analyze button itself shows the loading label).

use iced::widget::{button, column, container, text};
use iced::Element;

use crate::net::predict::PredictError;
use crate::state::prediction::{PredictionResult, PredictionState};
use crate::Message;

pub fn card(prediction: &PredictionState) -> Option<Element<'_, Message>> {
    match prediction {
        PredictionState::Idle | PredictionState::InFlight { .. } => None,
        PredictionState::Succeeded(result) => Some(success_card(result)),
        PredictionState::Failed(error) => Some(failure_card(error)),
    }
}

fn success_card(result: &PredictionResult) -> Element<'_, Message> {
    container(
        column![
            text("🔬 Analysis Result").size(22),
            text(format!("Detected: {}", result.acne_type())).size(18),
            text(format!("Confidence: {}%", result.confidence_percent())).size(14),
            text(result.description()).size(14),
            button("📷 Upload Another Photo")
                .on_press(Message::RemoveImage)
                .padding(10),
        ]
        .spacing(10),
    )
    .padding(20)
    .style(container::bordered_box)
    .into()
}

fn failure_card(error: &PredictError) -> Element<'_, Message> {
    container(
        column![
            text("⚠️ Prediction failed").size(18),
            text(error.to_string()).size(14),
            text("Your photo is still loaded, so you can simply try again.").size(13),
            button("Try Again").on_press(Message::Predict).padding(10),
        ]
        .spacing(10),
    )
    .padding(20)
    .style(container::bordered_box)
    .into()
}
