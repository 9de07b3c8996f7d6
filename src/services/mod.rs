// src/services/mod.rs

//! Extraction services shared by the site strategies.

pub mod extractor;
