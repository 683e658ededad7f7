use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Source label stamped into every raw artifact.
pub const SOURCE_LABEL: &str = "Congress.gov";

// --- Topics ---

/// Policy topic assigned to a bill by keyword classification.
///
/// The JSON representation is the human-readable label, space included.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Topic {
    Education,
    Healthcare,
    Economy,
    Defense,
    Judiciary,
    Energy,
    #[serde(rename = "Foreign Policy")]
    ForeignPolicy,
    Other,
}

impl std::fmt::Display for Topic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Topic::Education => write!(f, "Education"),
            Topic::Healthcare => write!(f, "Healthcare"),
            Topic::Economy => write!(f, "Economy"),
            Topic::Defense => write!(f, "Defense"),
            Topic::Judiciary => write!(f, "Judiciary"),
            Topic::Energy => write!(f, "Energy"),
            Topic::ForeignPolicy => write!(f, "Foreign Policy"),
            Topic::Other => write!(f, "Other"),
        }
    }
}

// --- Stage artifacts ---

/// Raw API response wrapped with provenance. Written by the ingest stage,
/// read only by the clean stage. `data` is the listing payload as received.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawBillEnvelope {
    pub fetched_at: DateTime<Utc>,
    pub source: String,
    pub data: serde_json::Value,
}

/// A bill after field normalization and topic classification.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CleanBill {
    pub bill_number: Option<String>,
    pub title: Option<String>,
    pub introduced_date: Option<String>,
    pub congress: Option<i64>,
    pub bill_type: Option<String>,
    pub origin_chamber: Option<String>,
    pub topic: Option<Topic>,
    pub last_updated: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CleanBillEnvelope {
    pub cleaned_at: DateTime<Utc>,
    pub count: usize,
    pub bills: Vec<CleanBill>,
}

/// One plain-English summary. Display-only; never re-parsed downstream.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SummaryItem {
    pub bill_number: Option<String>,
    pub topic: Option<Topic>,
    pub summary: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SummaryEnvelope {
    pub generated_at: DateTime<Utc>,
    pub count: usize,
    pub summaries: Vec<SummaryItem>,
}

/// One post-ready string, length-capped for social publishing.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PostItem {
    pub bill_number: Option<String>,
    pub topic: Option<Topic>,
    pub post: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PostEnvelope {
    pub generated_at: DateTime<Utc>,
    pub count: usize,
    pub posts: Vec<PostItem>,
}
