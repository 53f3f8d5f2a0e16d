pub mod curve;
pub mod ops;
pub mod region;
pub mod relate;

pub use curve::{Circle, Curve, PolylineParams};
pub use ops::{difference, fill_rings, union};
pub use region::{Region, RegionError};
pub use relate::{boundary_distance, contains_point, inside_or_intersecting, is_inside, relationship, Containment, PointContainment};

/// Spatial tolerance used by every containment and sanitization test unless
/// the caller supplies its own.
pub const DEFAULT_TOLERANCE: f64 = 0.1;
