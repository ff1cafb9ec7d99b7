//! Core module - Contains the fundamental data structures and operations
//!
//! This module provides:
//! - Summing the integers found in a file (aggregate, tokenizer)
//! - Loading a file's raw content (loader)
//! - Typed errors for both operations
//! - File reading strategies
//! - Unified result model and renderers
//! - Path input handling

pub mod aggregate;
pub mod error;
pub mod file_reader;
pub mod loader;
pub mod model;
pub mod paths;
pub mod render;
pub mod tokenizer;
pub mod util;

pub use aggregate::{parse_and_sum, AggregateResult};
pub use error::{LoadError, ParseError};
pub use loader::load_content;
