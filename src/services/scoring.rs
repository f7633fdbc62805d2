use crate::models::Activity;

/// Points per unit of popularity
const POPULARITY_WEIGHT: f64 = 5.0;
const POPULARITY_CAP: u32 = 50;
const CATEGORY_MATCH: u32 = 30;
const DURATION_IDEAL: u32 = 10;
const DURATION_ACCEPTABLE: u32 = 5;
const SLOTS_PLENTY: u32 = 10;
const SLOTS_SOME: u32 = 5;

/// Highest score any activity can reach
pub const MAX_SCORE: u32 = POPULARITY_CAP + CATEGORY_MATCH + DURATION_IDEAL + SLOTS_PLENTY;

/// Individual contributions making up an activity's score
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ScoreBreakdown {
    pub popularity: u32,
    pub category: u32,
    pub duration: u32,
    pub availability: u32,
}

impl ScoreBreakdown {
    /// Scores one activity against the user's favorite category
    pub fn for_activity(activity: &Activity, favorite_category: Option<&str>) -> Self {
        Self {
            popularity: popularity_points(activity.popularity),
            category: category_points(activity.category.as_deref(), favorite_category),
            duration: duration_points(activity.duration),
            availability: availability_points(activity.slots),
        }
    }

    pub fn total(&self) -> u32 {
        self.popularity + self.category + self.duration + self.availability
    }
}

/// Total score of one activity, always within `0..=MAX_SCORE`
pub fn score_activity(activity: &Activity, favorite_category: Option<&str>) -> u32 {
    ScoreBreakdown::for_activity(activity, favorite_category).total()
}

fn popularity_points(popularity: f64) -> u32 {
    // Validated popularity is non-negative; NaN falls through to 0
    let points = (popularity * POPULARITY_WEIGHT).floor();
    if points >= POPULARITY_CAP as f64 {
        POPULARITY_CAP
    } else if points > 0.0 {
        points as u32
    } else {
        0
    }
}

fn category_points(category: Option<&str>, favorite: Option<&str>) -> u32 {
    match (category, favorite) {
        (Some(category), Some(favorite)) if !favorite.is_empty() && category == favorite => {
            CATEGORY_MATCH
        }
        _ => 0,
    }
}

fn duration_points(minutes: f64) -> u32 {
    if (30.0..=120.0).contains(&minutes) {
        DURATION_IDEAL
    } else if (15.0..=180.0).contains(&minutes) {
        DURATION_ACCEPTABLE
    } else {
        0
    }
}

fn availability_points(slots: u64) -> u32 {
    if slots > 5 {
        SLOTS_PLENTY
    } else if slots > 2 {
        SLOTS_SOME
    } else {
        0
    }
}
