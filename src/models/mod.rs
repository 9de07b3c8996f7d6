// src/models/mod.rs

//! Domain models for the grab application.

mod config;
mod poem;

// Re-export all public types
pub use config::{BatchConfig, Config, FetchConfig, TextConfig};
pub use poem::{CATEGORY, ErrorRecord, FORMAT, PoemFields, PoemRecord, SourceRef, date_stamp};
