/// View construction
///
/// Read-only rendering of core state. Every interaction routes back through
/// a Message handled in main.rs; nothing in here mutates anything.

use iced::widget::{button, column, container, text};
use iced::{Alignment, Element, Length};

use crate::Message;

pub mod guide;
pub mod result;
pub mod upload;

/// Hero header with the jump-to-upload action
pub fn header() -> Element<'static, Message> {
    column![
        text("👩‍⚕️ DermaLens").size(48),
        text("🔬 Your Smart Acne Classifier ✨").size(22),
        text("\"Upload a skin photo and let AI help you identify acne types instantly.\"")
            .size(16),
        button(text("🚀 Start Analysis Now").size(16))
            .on_press(Message::JumpToUpload)
            .padding(14),
    ]
    .spacing(12)
    .align_x(Alignment::Center)
    .width(Length::Fill)
    .into()
}

/// Static disclaimer block under the main columns
pub fn disclaimer() -> Element<'static, Message> {
    container(
        column![
            text("⚕️ Medical Disclaimer").size(16),
            text(
                "This tool provides preliminary guidance and educational information \
                 about acne types using artificial intelligence. It does not replace \
                 professional medical advice, diagnosis, or treatment. Always consult \
                 with a qualified dermatologist or healthcare provider for proper \
                 medical evaluation and personalized treatment plans."
            )
            .size(13),
        ]
        .spacing(8),
    )
    .padding(16)
    .width(Length::Fill)
    .style(container::bordered_box)
    .into()
}
