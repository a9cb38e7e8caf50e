//! Utility helpers shared by the UI.

pub mod text_processing;
