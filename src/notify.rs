use rfd::{MessageButtons, MessageDialog, MessageLevel};

/// Show a blocking modal alert.
///
/// Used for every user-visible failure: no file selected, drop without a
/// file, a non-success gateway status, and transport errors. The dialog
/// blocks until dismissed; no error state survives it.
pub fn alert(message: &str) {
    tracing::warn!(%message, "user notification");

    let _ = MessageDialog::new()
        .set_level(MessageLevel::Warning)
        .set_title("SecureFileGuard")
        .set_description(message)
        .set_buttons(MessageButtons::Ok)
        .show();
}
