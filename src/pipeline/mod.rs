// src/pipeline/mod.rs

//! Batch processing pipeline.

mod grab;

pub use grab::{BatchEntry, extract_record, run_batch};
