mod aggregate;
mod features;
mod filter;
mod sanitize;

pub use aggregate::union_features;
pub use features::Features;
pub use filter::filter_by_region;
pub use sanitize::{sanitize, sanitize_all};
