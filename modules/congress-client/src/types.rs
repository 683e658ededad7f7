use serde::{Deserialize, Serialize};

/// A single bill from the Congress.gov listing payload.
///
/// The schema is owned by the API; every field is optional and absence is
/// never an error. Fields the pipeline does not use are ignored.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Bill {
    pub number: Option<String>,
    pub title: Option<String>,
    #[serde(rename = "introducedDate")]
    pub introduced_date: Option<String>,
    pub congress: Option<i64>,
    #[serde(rename = "type")]
    pub bill_type: Option<String>,
    #[serde(rename = "originChamber")]
    pub origin_chamber: Option<String>,
    #[serde(rename = "updateDate")]
    pub update_date: Option<String>,
}

/// Extract the `bills` array from a listing payload.
///
/// Returns an empty list when the key is missing or not an array. Elements
/// that do not deserialize as objects degrade to an all-default [`Bill`].
pub fn bills_from_payload(payload: &serde_json::Value) -> Vec<Bill> {
    match payload.get("bills").and_then(|v| v.as_array()) {
        Some(items) => items
            .iter()
            .map(|item| serde_json::from_value(item.clone()).unwrap_or_default())
            .collect(),
        None => Vec::new(),
    }
}
