#![allow(clippy::module_name_repetitions)]
//! Small output helpers.

pub mod text_lines;

pub use text_lines::TextLines;
