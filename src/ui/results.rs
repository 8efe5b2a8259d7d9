/// Scan results panel
///
/// Rebuilt from scratch on every view pass, so rendering the same verdict
/// twice yields identical content. The verdict fields are inserted as plain
/// text widgets and never interpreted as markup, so a hostile or corrupted
/// gateway response cannot inject anything into the UI.

use iced::widget::{column, text, Column};
use iced::Element;

use secure_file_guard::scan::ScanResult;

use crate::Message;

/// Build the results panel for the current verdict, if any.
pub fn view(result: Option<&ScanResult>) -> Element<'static, Message> {
    let panel: Column<Message> = match result {
        Some(result) => column![
            text("Scan Results").size(24),
            text(result.status_line()).size(16),
            text(result.threat_line()).size(16),
        ],
        None => column![text("No scans yet.").size(16)],
    };

    panel.spacing(8).into()
}
