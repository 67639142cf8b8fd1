//! Parsers for task definition files.
//!
//! A file is a list of items, each either a task or a plan:
//!
//! ```text
//! # comment
//! task fetch
//! task build < fetch configure
//! task deploy < {
//!     build
//!     upload
//! }
//!
//! plan release {
//!     reach build, deploy
//! }
//! ```

#[macro_use]
mod macros;
mod parse;
pub use parse::{parse, Error};
pub mod ast;
