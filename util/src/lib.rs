#![deny(missing_docs)]
//! This lib provide several utilities for use in the `sipwire` project.

pub mod macros;
pub mod scanner;
pub mod text;

pub use scanner::*;
pub use text::*;
