pub mod statistics;
pub mod tracker;

pub use statistics::Statistics;
pub use tracker::{StepReport, TrainingLog};
