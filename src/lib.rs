pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod io;
pub mod report;

pub use crate::core::escaper::{Escaped, LiteralNewlineEscaper};
pub use crate::error::{EscapeError, Result};
pub use crate::report::Report;
