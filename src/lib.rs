// src/lib.rs

//! versegrab library
//!
//! Resolves poem page URLs to per-site extraction strategies, pulls
//! title, author and body out of the page, and emits normalized records
//! with provenance metadata.

pub mod error;
pub mod models;
pub mod output;
pub mod pipeline;
pub mod services;
pub mod sites;
pub mod text;
pub mod utils;
