use billfeed_common::Topic;

/// Ordered topic table. Order is load-bearing: classification walks this top
/// to bottom and the first topic with a matching keyword wins.
pub const TOPIC_KEYWORDS: &[(Topic, &[&str])] = &[
    (
        Topic::Education,
        &["education", "school", "student", "college", "university"],
    ),
    (
        Topic::Healthcare,
        &["health", "medical", "medicare", "medicaid"],
    ),
    (
        Topic::Economy,
        &["tax", "budget", "economic", "trade", "tariff"],
    ),
    (
        Topic::Defense,
        &["defense", "military", "armed forces", "veteran"],
    ),
    (Topic::Judiciary, &["court", "judge", "judicial", "law"]),
    (Topic::Energy, &["energy", "oil", "gas", "electric", "climate"]),
    (
        Topic::ForeignPolicy,
        &["foreign", "international", "treaty", "alliance"],
    ),
];

/// Assign a topic by case-insensitive substring search over the title.
///
/// Pure containment, no word boundaries: "lawsuit" matches Judiciary via
/// "law". Empty or absent titles classify as [`Topic::Other`].
pub fn classify(title: Option<&str>) -> Topic {
    let Some(title) = title else {
        return Topic::Other;
    };
    if title.is_empty() {
        return Topic::Other;
    }

    let title_lower = title.to_lowercase();
    for (topic, keywords) in TOPIC_KEYWORDS {
        if keywords.iter().any(|kw| title_lower.contains(kw)) {
            return *topic;
        }
    }

    Topic::Other
}
