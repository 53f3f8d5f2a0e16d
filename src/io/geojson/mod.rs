//! GeoJSON input and output over `serde_json::Value`.

mod read;
mod write;

pub use read::*;
pub use write::*;
