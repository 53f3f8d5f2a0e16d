//! Delimited tabular input.

mod read;

pub use read::*;
