use crate::{config::Config, services::Recommender};

/// Shared application state, immutable after startup
#[derive(Debug, Clone, Default)]
pub struct AppState {
    pub recommender: Recommender,
}

impl AppState {
    pub fn new(recommender: Recommender) -> Self {
        Self { recommender }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(Recommender::new(config.recommendation_limit))
    }
}
