mod attributes;
mod classify;
mod estimate;
mod populate;
mod sidewalk;

pub use classify::{classify, stencil_area, Classification};
pub use estimate::{estimate_capacity, estimate_population, pedestrian_area, PI_APPROX};
pub use populate::{place_pedestrians, Pedestrian};
pub use sidewalk::{Sidewalk, SidewalkKind};
