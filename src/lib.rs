//! Scrawl - handwriting generation API server.
//!
//! Accepts JSON render requests and returns handwritten-style SVG documents.
//! This library exposes modules for integration testing.

pub mod api;
pub mod error;
pub mod models;
pub mod server;
pub mod services;
