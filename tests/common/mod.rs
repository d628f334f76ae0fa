//! Common test infrastructure for Scrawl integration tests.
//!
//! Each test file compiles its own copy of this module, so items may appear
//! unused from the perspective of a single test file even though they're
//! used elsewhere.

#![allow(dead_code)]
#![allow(unused_imports)]

pub mod app;
pub mod engines;

pub use app::TestApp;
pub use assertions::*;
pub use engines::*;
