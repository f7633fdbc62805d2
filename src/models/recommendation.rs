use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::ActivityError;

use super::{activity_id::RawId, Activity, BookedIds};

/// Raw recommendation request as posted by the booking backend
///
/// Every field is optional. Activities stay as raw JSON until
/// [`RecommendationRequest::validate`] so that errors can name the record.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RecommendationRequest {
    #[serde(default)]
    pub booked_ids: Vec<Option<RawId>>,
    #[serde(default)]
    pub all_activities: Vec<Value>,
    #[serde(default)]
    pub activity_history: Vec<String>,
}

/// Typed scorer input produced by validating a [`RecommendationRequest`]
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RecommendationInput {
    pub booked: BookedIds,
    pub activities: Vec<Activity>,
    pub history: Vec<String>,
}

impl RecommendationRequest {
    /// Normalizes booked ids and validates every activity. The first invalid
    /// record fails the whole request.
    pub fn validate(self) -> Result<RecommendationInput, ActivityError> {
        let activities = self
            .all_activities
            .iter()
            .enumerate()
            .map(|(index, raw)| Activity::from_value(index, raw))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(RecommendationInput {
            booked: BookedIds::from_raw(&self.booked_ids),
            activities,
            history: self.activity_history,
        })
    }
}

/// Ranked titles plus the numbers that produced them
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecommendationResponse {
    pub recommendations: Vec<String>,
    pub debug_info: DebugInfo,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DebugInfo {
    pub total_activities: usize,
    pub unbooked_activities: usize,
    pub favorite_category: Option<String>,
    pub top_scores: Vec<u32>,
}
