/// Upload panel: drop zone, preview card, analyze button
///
/// Renders the intake state and the loading flag; the drop zone highlights
/// while a file hovers over the window.

use iced::widget::{button, column, container, image as picture, row, text, Space};
use iced::{Alignment, Border, Element, Length, Theme};

use crate::intake::encode::{self, AcceptedImage};
use crate::state::prediction::PredictionState;
use crate::state::upload::{Intake, UploadState};
use crate::Message;

pub fn panel<'a>(
    intake: &'a Intake,
    prediction: &'a PredictionState,
    status: &'a str,
) -> Element<'a, Message> {
    let body: Element<'a, Message> = match intake.state() {
        UploadState::Empty => drop_zone(intake.drag_active()),
        UploadState::Selected(image) => preview_card(image, prediction),
    };

    container(
        column![
            row![text("📸").size(24), text("Upload Your Image").size(24)].spacing(8),
            body,
            text(status).size(14),
        ]
        .spacing(16),
    )
    .padding(20)
    .style(container::bordered_box)
    .into()
}

/// What the interface renders is the self-contained preview representation;
/// it decodes back to the exact bytes that will be uploaded.
fn preview_handle(image: &AcceptedImage) -> picture::Handle {
    match encode::preview_bytes(&image.preview) {
        Some(bytes) => picture::Handle::from_bytes(bytes),
        None => picture::Handle::from_bytes(image.bytes.clone()),
    }
}

/// Full-size preview shown when the user zooms the selected photo
pub fn zoom_view(image: &AcceptedImage) -> Element<'_, Message> {
    let handle = preview_handle(image);

    column![
        row![
            Space::with_width(Length::Fill),
            button("✕ Close").on_press(Message::ToggleZoom(false)).padding(8),
        ],
        container(
            picture::Viewer::new(handle)
                .width(Length::Fill)
                .height(Length::Fill),
        )
        .height(Length::Fill)
        .center_x(Length::Fill)
        .center_y(Length::Fill),
    ]
    .spacing(8)
    .padding(16)
    .into()
}

fn drop_zone<'a>(drag_active: bool) -> Element<'a, Message> {
    let prompt = column![
        text("📱 Upload Your Facial Image").size(20),
        text("Drag and drop or click to browse").size(14),
        text("Supports JPEG, JPG, and PNG files up to 10MB").size(12),
        button("Choose Image").on_press(Message::BrowseImage).padding(12),
    ]
    .spacing(10)
    .align_x(Alignment::Center);

    container(prompt)
        .width(Length::Fill)
        .padding(32)
        .style(move |theme: &Theme| drop_zone_style(theme, drag_active))
        .into()
}

/// Dashed-border stand-in: the zone brightens while a file hovers
fn drop_zone_style(theme: &Theme, drag_active: bool) -> container::Style {
    let palette = theme.extended_palette();
    let accent = if drag_active {
        palette.primary.strong.color
    } else {
        palette.background.strong.color
    };

    container::Style {
        background: Some(palette.background.weak.color.into()),
        border: Border {
            color: accent,
            width: 2.0,
            radius: 12.0.into(),
        },
        ..container::Style::default()
    }
}

fn preview_card<'a>(
    image: &'a AcceptedImage,
    prediction: &'a PredictionState,
) -> Element<'a, Message> {
    let handle = preview_handle(image);
    let caption = format!("{}×{} · {}", image.width, image.height, image.size_label());

    // The button goes inert while a request is out; on_press is simply
    // withheld so iced renders it disabled.
    let analyze: Element<'a, Message> = if prediction.is_in_flight() {
        button(text("🤖 Analyzing Image...").size(16))
            .width(Length::Fill)
            .padding(14)
            .into()
    } else {
        button(text("🔍 Predict Acne Type").size(16))
            .on_press(Message::Predict)
            .width(Length::Fill)
            .padding(14)
            .into()
    };

    column![
        picture(handle).width(Length::Fill),
        row![
            text("✅ Image uploaded successfully").size(14),
            Space::with_width(Length::Fill),
            text(caption).size(12),
        ]
        .align_y(Alignment::Center),
        row![
            button("🔍 Zoom").on_press(Message::ToggleZoom(true)).padding(8),
            button("✕ Remove")
                .on_press(Message::RemoveImage)
                .padding(8)
                .style(button::danger),
        ]
        .spacing(8),
        analyze,
    ]
    .spacing(12)
    .into()
}
