#![doc = "Sidewalk capacity and population evaluation public API"]
mod config;
mod evaluate;
mod geom;
mod sidewalk;
pub mod io;
pub mod trees;

#[doc(inline)]
pub use config::{EvaluationConfig, DEFAULT_SOCIAL_RADIUS, DEFAULT_SUBWAY_INFLUENCE, DEFAULT_UTILIZATION_PERCENT};

#[doc(inline)]
pub use evaluate::{
    clean_sidewalks, correlate, evaluate, evaluate_sidewalks, populate, prepare_sidewalks, BuildingGroup,
    CleanedSidewalks, EvaluationInput, EvaluationResult, PreparedSidewalks,
};

#[doc(inline)]
pub use geom::{filter_by_region, sanitize, sanitize_all, union_features, Features};

#[doc(inline)]
pub use sidewalk::{
    classify, estimate_capacity, estimate_population, pedestrian_area, place_pedestrians, stencil_area,
    Classification, Pedestrian, Sidewalk, SidewalkKind, PI_APPROX,
};

#[doc(inline)]
pub use planar::{Circle, Containment, Curve, Region};
