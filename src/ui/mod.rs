/// UI building blocks
///
/// This module holds the widget subtrees composed by the main view:
/// - The drag-and-drop target (drop_zone.rs)
/// - The scan results panel (results.rs)

pub mod drop_zone;
pub mod results;
