//! Rendering module for serializing and writing résumé records.

mod json;
mod output;

pub use json::{to_json, JsonFormat};
pub use output::{write_outputs, OutputPaths, RAW_FILE, RECORD_FILE};
