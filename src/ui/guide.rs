/// "Learn About Acne Types" reference panel
///
/// Renders the static catalogue with per-entry expand/collapse headers and
/// the general-care footer.

use iced::widget::{button, column, container, row, text, Space};
use iced::{Alignment, Element, Length};

use crate::state::guide::{GuideEntry, GuideState, CATALOG, GENERAL_TIPS};
use crate::Message;

pub fn panel(guide: &GuideState) -> Element<'_, Message> {
    let mut entries = column![].spacing(8);
    for (index, entry) in CATALOG.iter().enumerate() {
        entries = entries.push(entry_view(index, entry, guide.is_expanded(index)));
    }

    let mut tips = column![text("📋 General Treatment Recommendations").size(15)].spacing(6);
    for tip in GENERAL_TIPS {
        tips = tips.push(text(format!("🔸 {}", tip)).size(13));
    }

    container(
        column![
            row![text("ℹ️").size(22), text("Learn About Acne Types").size(24)].spacing(8),
            entries,
            container(tips).padding(12).width(Length::Fill).style(container::bordered_box),
        ]
        .spacing(16),
    )
    .padding(20)
    .style(container::bordered_box)
    .into()
}

fn entry_view<'a>(
    index: usize,
    entry: &'static GuideEntry,
    expanded: bool,
) -> Element<'a, Message> {
    let chevron = if expanded { "▲" } else { "▼" };

    let header = button(
        row![
            text(entry.marker).size(20),
            text(entry.name).size(16),
            Space::with_width(Length::Fill),
            text(chevron).size(12),
        ]
        .spacing(10)
        .align_y(Alignment::Center),
    )
    .on_press(Message::GuideToggled(index))
    .width(Length::Fill)
    .padding(12)
    .style(button::secondary);

    if !expanded {
        return header.into();
    }

    let mut details = column![text(entry.description).size(14)].spacing(6);
    for characteristic in entry.characteristics.iter() {
        details = details.push(text(format!("• {}", characteristic)).size(13));
    }
    details = details.push(text(format!("💡 Tip: {}", entry.tip)).size(13));

    column![
        header,
        container(details)
            .padding(12)
            .width(Length::Fill)
            .style(container::bordered_box),
    ]
    .spacing(4)
    .into()
}
