pub mod activity;
pub mod activity_id;
pub mod recommendation;

pub use activity::{Activity, RawActivity};
pub use activity_id::{ActivityId, BookedIds, RawId};
pub use recommendation::{DebugInfo, RecommendationInput, RecommendationRequest, RecommendationResponse};
