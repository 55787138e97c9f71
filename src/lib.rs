//! Lost-and-found locator core - item extraction and location matching
//!
//! This module turns a free-text description of a lost item into a single
//! keyword and matches it against the campus lost-and-found directory,
//! producing an area-prioritized list of locations to contact.

pub mod catalog;
pub mod extractor;
pub mod matcher;
pub mod types;

pub use catalog::*;
pub use extractor::*;
pub use matcher::*;
pub use types::*;

// HTTP boundary
#[cfg(feature = "server")]
pub mod http;
