use serde::Deserialize;
use serde_json::Value;

use crate::error::ActivityError;

use super::{activity_id::RawId, ActivityId};

/// Popularity assumed when the record does not carry one
pub const DEFAULT_POPULARITY: f64 = 0.0;
/// Duration in minutes assumed when the record does not carry one
pub const DEFAULT_DURATION: f64 = 60.0;
/// Open slots assumed when the record does not carry them
pub const DEFAULT_SLOTS: u64 = 10;

/// A validated activity record, ready for scoring
#[derive(Debug, Clone, PartialEq)]
pub struct Activity {
    /// Normalized `_id`; `None` when the record carries no id
    pub id: Option<ActivityId>,
    pub title: String,
    pub category: Option<String>,
    /// Number of bookings so far, never negative
    pub popularity: f64,
    /// Length in minutes
    pub duration: f64,
    /// Remaining capacity
    pub slots: u64,
}

#[cfg(test)]
impl Activity {
    /// Creates an activity with default popularity, duration and slots
    pub fn new(id: &str, title: &str) -> Self {
        Self {
            id: Some(ActivityId::from(id)),
            title: title.to_string(),
            category: None,
            popularity: DEFAULT_POPULARITY,
            duration: DEFAULT_DURATION,
            slots: DEFAULT_SLOTS,
        }
    }

    pub fn with_category(mut self, category: &str) -> Self {
        self.category = Some(category.to_string());
        self
    }

    pub fn with_popularity(mut self, popularity: f64) -> Self {
        self.popularity = popularity;
        self
    }

    pub fn with_duration(mut self, duration: f64) -> Self {
        self.duration = duration;
        self
    }

    pub fn with_slots(mut self, slots: u64) -> Self {
        self.slots = slots;
        self
    }
}

impl Activity {
    /// Validates the record at position `index` of the incoming activity list
    pub fn from_value(index: usize, raw: &Value) -> Result<Self, ActivityError> {
        if !raw.is_object() {
            return Err(ActivityError::MalformedActivity {
                index,
                field: "activity",
                reason: format!("expected an object, got {}", kind(raw)),
            });
        }

        let record = RawActivity::deserialize(raw).map_err(|e| ActivityError::MalformedActivity {
            index,
            field: "activity",
            reason: e.to_string(),
        })?;

        record.into_activity(index)
    }
}

/// A field that either has the expected type or is kept as-is for reporting
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum Lenient<T> {
    Valid(T),
    Invalid(Value),
}

/// Activity record as stored by the booking backend
///
/// Unknown fields (description, date, imageUrl, eventId, fee, ...) are
/// ignored. `null` is treated like an absent field.
#[derive(Debug, Clone, Deserialize)]
pub struct RawActivity {
    #[serde(rename = "_id", default)]
    pub id: Option<RawId>,
    #[serde(default)]
    pub title: Option<Lenient<String>>,
    #[serde(default)]
    pub category: Option<Lenient<String>>,
    #[serde(default)]
    pub popularity: Option<Lenient<f64>>,
    #[serde(default)]
    pub duration: Option<Lenient<f64>>,
    #[serde(default)]
    pub slots: Option<Lenient<f64>>,
}

impl RawActivity {
    /// Applies defaults and range checks; `index` is only used in errors
    pub fn into_activity(self, index: usize) -> Result<Activity, ActivityError> {
        let malformed = |field: &'static str, reason: String| ActivityError::MalformedActivity {
            index,
            field,
            reason,
        };

        let id = match self.id {
            None => None,
            Some(raw) => Some(raw.normalize().ok_or_else(|| {
                malformed(
                    "_id",
                    "expected a string, number or {\"$oid\": ..}".to_string(),
                )
            })?),
        };

        let title = match self.title {
            None => {
                return Err(ActivityError::MissingField {
                    index,
                    field: "title",
                })
            }
            Some(Lenient::Valid(title)) => title,
            Some(Lenient::Invalid(other)) => {
                return Err(malformed("title", expected("a string", &other)))
            }
        };

        let category = match self.category {
            None => None,
            Some(Lenient::Valid(category)) => Some(category),
            Some(Lenient::Invalid(other)) => {
                return Err(malformed("category", expected("a string", &other)))
            }
        };

        let popularity = match self.popularity {
            None => DEFAULT_POPULARITY,
            Some(Lenient::Valid(p)) if p < 0.0 => {
                return Err(malformed("popularity", format!("must not be negative, got {}", p)))
            }
            Some(Lenient::Valid(p)) => p,
            Some(Lenient::Invalid(other)) => {
                return Err(malformed("popularity", expected("a number", &other)))
            }
        };

        let duration = match self.duration {
            None => DEFAULT_DURATION,
            Some(Lenient::Valid(d)) => d,
            Some(Lenient::Invalid(other)) => {
                return Err(malformed("duration", expected("a number", &other)))
            }
        };

        let slots = match self.slots {
            None => DEFAULT_SLOTS,
            Some(Lenient::Valid(s)) if s >= 0.0 && s.fract() == 0.0 => s as u64,
            Some(Lenient::Valid(s)) => {
                return Err(malformed(
                    "slots",
                    format!("expected a non-negative integer, got {}", s),
                ))
            }
            Some(Lenient::Invalid(other)) => {
                return Err(malformed("slots", expected("a non-negative integer", &other)))
            }
        };

        Ok(Activity {
            id,
            title,
            category,
            popularity,
            duration,
            slots,
        })
    }
}

fn expected(what: &str, got: &Value) -> String {
    format!("expected {}, got {}", what, kind(got))
}

fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
