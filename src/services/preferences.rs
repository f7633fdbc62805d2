use std::collections::HashMap;

/// Returns the most frequent label in the user's activity history
///
/// Ties go to the label that appears first in the history. An empty history
/// yields `None`.
pub fn favorite_category(history: &[String]) -> Option<&str> {
    let mut counts: HashMap<&str, usize> = HashMap::new();
    let mut first_seen: Vec<&str> = Vec::new();

    for label in history {
        let count = counts.entry(label.as_str()).or_insert(0);
        if *count == 0 {
            first_seen.push(label.as_str());
        }
        *count += 1;
    }

    let mut favorite: Option<(&str, usize)> = None;
    for label in first_seen {
        let count = counts[label];
        if favorite.map_or(true, |(_, best)| count > best) {
            favorite = Some((label, count));
        }
    }

    favorite.map(|(label, _)| label)
}
