/// State management module
///
/// This module handles all application state, including:
/// - The current photo selection and drag/zoom flags (upload.rs)
/// - The classification attempt lifecycle (prediction.rs)
/// - The static acne reference catalogue and its view flags (guide.rs)

pub mod guide;
pub mod prediction;
pub mod upload;
