use serde::Deserialize;
use serde_json::{Map, Value};
use std::{collections::HashSet, fmt::Display};

/// Canonical string identity of an activity, used only for booked-status checks
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ActivityId(String);

impl Display for ActivityId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
impl From<&str> for ActivityId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

/// Scalar id value, kept in its JSON form
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum ScalarId {
    Text(String),
    Number(serde_json::Number),
    Bool(bool),
}

impl From<&ScalarId> for ActivityId {
    fn from(scalar: &ScalarId) -> Self {
        match scalar {
            ScalarId::Text(s) => ActivityId(s.clone()),
            ScalarId::Number(n) => ActivityId(n.to_string()),
            ScalarId::Bool(b) => ActivityId(b.to_string()),
        }
    }
}

/// An id as it arrives on the wire
///
/// Either a plain scalar (`"abc123"`, `42`) or the extended JSON form
/// `{ "$oid": "abc123" }`; both normalize to the same [`ActivityId`].
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum RawId {
    Scalar(ScalarId),
    Object(Map<String, Value>),
    Other(Value),
}

impl RawId {
    /// Returns `None` for shapes with no string form (arrays, objects
    /// without a scalar `$oid`)
    pub fn normalize(&self) -> Option<ActivityId> {
        match self {
            RawId::Scalar(scalar) => Some(scalar.into()),
            RawId::Object(fields) => fields
                .get("$oid")
                .and_then(|oid| ScalarId::deserialize(oid).ok())
                .map(|scalar| ActivityId::from(&scalar)),
            RawId::Other(_) => None,
        }
    }
}

/// Set of normalized ids the user has already booked
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BookedIds(HashSet<ActivityId>);

impl BookedIds {
    /// Builds the set from caller-supplied ids. `null` entries and ids that
    /// do not normalize are dropped.
    pub fn from_raw(raw: &[Option<RawId>]) -> Self {
        Self(
            raw.iter()
                .filter_map(|id| id.as_ref().and_then(RawId::normalize))
                .collect(),
        )
    }

    pub fn contains(&self, id: &ActivityId) -> bool {
        self.0.contains(id)
    }

    pub(crate) fn len(&self) -> usize {
        self.0.len()
    }

    #[cfg(test)]
    pub(crate) fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

#[cfg(test)]
impl<'a> FromIterator<&'a str> for BookedIds {
    fn from_iter<I: IntoIterator<Item = &'a str>>(iter: I) -> Self {
        Self(iter.into_iter().map(ActivityId::from).collect())
    }
}
