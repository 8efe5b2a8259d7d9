/// Drag-and-drop target
///
/// A bordered zone that highlights while a file is hovering and opens the
/// native file picker when clicked. The actual drop events arrive through
/// the window event subscription, not through this widget.

use iced::widget::{container, mouse_area, text};
use iced::{Border, Element, Length, Theme};

use crate::Message;

/// Build the drop target. `dragging` drives the highlight style.
pub fn view(dragging: bool) -> Element<'static, Message> {
    let prompt = if dragging {
        "Release to scan the file"
    } else {
        "Drag & drop a file here, or click to browse"
    };

    let zone = container(text(prompt).size(16))
        .width(Length::Fill)
        .height(Length::Fixed(140.0))
        .center_x(Length::Fill)
        .center_y(Length::Fill)
        .style(move |theme: &Theme| style(theme, dragging));

    mouse_area(zone).on_press(Message::BrowseFile).into()
}

fn style(theme: &Theme, dragging: bool) -> container::Style {
    let palette = theme.extended_palette();

    let border_color = if dragging {
        palette.primary.strong.color
    } else {
        palette.background.strong.color
    };

    container::Style {
        background: dragging.then(|| palette.primary.weak.color.into()),
        border: Border {
            color: border_color,
            width: 2.0,
            radius: 8.0.into(),
        },
        ..container::Style::default()
    }
}
