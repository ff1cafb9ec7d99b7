//! filesum - Sum the integers in a text file, or view its raw content
//!
//! The two core operations are plain functions over a path:
//!
//! ```no_run
//! let result = filesum::core::parse_and_sum("numbers.txt")?;
//! println!("{} = {}", result.display_sum_expr, result.total);
//!
//! let text = filesum::core::load_content("numbers.txt")?;
//! print!("{}", text);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! The `cli` module is the command-line front end built on top of them.

pub mod cli;
pub mod commands;
pub mod core;
pub mod logging;
