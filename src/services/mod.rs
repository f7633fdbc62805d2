pub mod preferences;
pub mod recommendations;
pub mod scoring;
pub mod telemetry;

pub use recommendations::{Recommender, DEFAULT_LIMIT};
pub use telemetry::{NoopObserver, ScoringObserver, TracingObserver};
