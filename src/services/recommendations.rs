use crate::models::{Activity, BookedIds, DebugInfo, RecommendationInput, RecommendationResponse};

use super::{preferences::favorite_category, scoring::score_activity, ScoringObserver};

/// Number of titles returned when no limit is configured
pub const DEFAULT_LIMIT: usize = 3;

/// An activity paired with its score for the duration of one invocation
#[derive(Debug, Clone, Copy, PartialEq)]
struct ScoredCandidate<'a> {
    activity: &'a Activity,
    score: u32,
}

/// Ranks activities for a single user and picks the best few
///
/// Scoring is deterministic: the same input always yields the same titles in
/// the same order, and equal scores keep their input order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Recommender {
    limit: usize,
}

impl Default for Recommender {
    fn default() -> Self {
        Self::new(DEFAULT_LIMIT)
    }
}

impl Recommender {
    /// Creates a recommender returning at most `limit` titles (at least one)
    pub fn new(limit: usize) -> Self {
        Self {
            limit: limit.max(1),
        }
    }

    pub fn limit(&self) -> usize {
        self.limit
    }

    /// Runs the recommender over an already validated request
    pub fn recommend(
        &self,
        input: &RecommendationInput,
        observer: &dyn ScoringObserver,
    ) -> RecommendationResponse {
        self.score_and_rank(&input.booked, &input.activities, &input.history, observer)
    }

    /// Scores every candidate and returns the top titles with debug figures
    ///
    /// Candidates are the activities the user has not booked yet. When every
    /// activity is already booked the whole list is ranked instead, so the
    /// result is only empty when there are no activities at all.
    pub fn score_and_rank(
        &self,
        booked: &BookedIds,
        activities: &[Activity],
        history: &[String],
        observer: &dyn ScoringObserver,
    ) -> RecommendationResponse {
        observer.request_received(activities.len(), booked.len(), history.len());

        let favorite = favorite_category(history);
        if let Some(category) = favorite {
            observer.favorite_category(category);
        }

        let unbooked: Vec<&Activity> = activities
            .iter()
            .filter(|activity| !is_booked(activity, booked))
            .collect();
        let unbooked_count = unbooked.len();

        let fallback = unbooked.is_empty() && !activities.is_empty();
        let candidates: Vec<&Activity> = if fallback {
            activities.iter().collect()
        } else {
            unbooked
        };
        observer.candidates_selected(unbooked_count, fallback);

        let mut scored: Vec<ScoredCandidate<'_>> = candidates
            .into_iter()
            .map(|activity| ScoredCandidate {
                activity,
                score: score_activity(activity, favorite),
            })
            .collect();

        // sort_by is stable, ties keep input order
        scored.sort_by(|a, b| b.score.cmp(&a.score));
        scored.truncate(self.limit);

        let recommendations: Vec<String> = scored
            .iter()
            .map(|candidate| candidate.activity.title.clone())
            .collect();
        let top_scores: Vec<u32> = scored.iter().map(|candidate| candidate.score).collect();

        observer.recommendations_generated(&recommendations, &top_scores);

        RecommendationResponse {
            recommendations,
            debug_info: DebugInfo {
                total_activities: activities.len(),
                unbooked_activities: unbooked_count,
                favorite_category: favorite.map(str::to_string),
                top_scores,
            },
        }
    }
}

/// Activities without an id can never match a booking
fn is_booked(activity: &Activity, booked: &BookedIds) -> bool {
    activity
        .id
        .as_ref()
        .is_some_and(|id| booked.contains(id))
}
