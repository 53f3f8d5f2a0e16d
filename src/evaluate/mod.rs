mod correlate;
mod pipeline;
mod prepare;

pub use correlate::{correlate, BuildingGroup, EvaluationResult};
pub use pipeline::{evaluate, evaluate_sidewalks, populate, EvaluationInput};
pub use prepare::{clean_sidewalks, prepare_sidewalks, CleanedSidewalks, PreparedSidewalks};
