//! UI components.

pub mod code_background;
