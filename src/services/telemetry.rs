/// Hooks the recommender calls while it works
///
/// The recommender never logs on its own; callers pass in an observer so the
/// scoring path stays free of global state and can be checked in tests.
#[cfg_attr(test, mockall::automock)]
pub trait ScoringObserver: Send + Sync {
    /// Called once per invocation with the raw input sizes
    fn request_received(&self, activities: usize, booked: usize, history: usize);

    /// Called when the history produced a favorite category
    fn favorite_category(&self, category: &str);

    /// `fallback` is set when every activity was booked and all of them became candidates
    fn candidates_selected(&self, unbooked: usize, fallback: bool);

    /// Called with the final ranked titles and their scores
    fn recommendations_generated(&self, titles: &[String], scores: &[u32]);
}

/// Observer that emits structured `tracing` events tagged with a request id
#[derive(Debug, Clone)]
pub struct TracingObserver {
    request_id: String,
}

impl TracingObserver {
    pub fn new(request_id: impl Into<String>) -> Self {
        Self {
            request_id: request_id.into(),
        }
    }
}

impl ScoringObserver for TracingObserver {
    fn request_received(&self, activities: usize, booked: usize, history: usize) {
        tracing::info!(
            request_id = %self.request_id,
            activities,
            booked,
            history,
            "Received recommendation request"
        );
    }

    fn favorite_category(&self, category: &str) {
        tracing::info!(request_id = %self.request_id, category, "Favorite category");
    }

    fn candidates_selected(&self, unbooked: usize, fallback: bool) {
        if fallback {
            tracing::info!(
                request_id = %self.request_id,
                unbooked,
                "All activities booked, ranking the full list"
            );
        } else {
            tracing::info!(request_id = %self.request_id, unbooked, "Unbooked activities");
        }
    }

    fn recommendations_generated(&self, titles: &[String], scores: &[u32]) {
        tracing::info!(
            request_id = %self.request_id,
            recommendations = ?titles,
            scores = ?scores,
            "Generated recommendations"
        );
    }
}

/// Observer that ignores every event
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopObserver;

impl ScoringObserver for NoopObserver {
    fn request_received(&self, _activities: usize, _booked: usize, _history: usize) {}
    fn favorite_category(&self, _category: &str) {}
    fn candidates_selected(&self, _unbooked: usize, _fallback: bool) {}
    fn recommendations_generated(&self, _titles: &[String], _scores: &[u32]) {}
}
