//! Shared helpers

pub mod encoding;

pub use encoding::{decode_text, read_text_file};
