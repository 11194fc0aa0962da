#![doc = include_str!("../README.md")]

mod color;
mod error;
mod printer;

pub use color::{Color, ColorName};
pub use error::{Error, Param, Result};
pub use printer::{colorize, print_colored, printc, PrintOptions, Printer, Target};

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
