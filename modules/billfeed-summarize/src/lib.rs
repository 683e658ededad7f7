//! Summarize stage: turn each clean bill into a neutral three-sentence
//! plain-English blurb suitable for public posting.

use chrono::{DateTime, Utc};
use tracing::info;

use billfeed_common::{
    ArtifactStore, BillFeedError, CleanBill, CleanBillEnvelope, SummaryEnvelope, SummaryItem,
};

const CLOSING_SENTENCE: &str =
    "The bill has been introduced and is awaiting further legislative action.";

/// Build the templated summary for one bill.
///
/// Three parts joined by single spaces: an intro sentence (with placeholder
/// defaults for missing fields), an issue sentence emitted only when the
/// title is non-empty after trimming, and a fixed closing sentence.
pub fn summarize(bill: &CleanBill) -> String {
    let bill_number = bill.bill_number.as_deref().unwrap_or("This bill");
    let title = bill.title.as_deref().unwrap_or("").trim();
    let topic = match bill.topic {
        Some(topic) => topic.to_string().to_lowercase(),
        None => "policy".to_string(),
    };
    let introduced = bill.introduced_date.as_deref().unwrap_or("an unknown date");

    let mut lines = Vec::with_capacity(3);
    lines.push(format!(
        "{bill_number} is a {topic} bill introduced on {introduced}."
    ));
    if !title.is_empty() {
        lines.push(format!("It focuses on the following issue: {title}"));
    }
    lines.push(CLOSING_SENTENCE.to_string());

    lines.join(" ")
}

/// Load the clean artifact, summarize every bill, and overwrite the summary
/// artifact.
pub fn run(store: &ArtifactStore, now: DateTime<Utc>) -> Result<SummaryEnvelope, BillFeedError> {
    let clean: CleanBillEnvelope = store.read_json(&store.clean_bills_path())?;

    let summaries: Vec<SummaryItem> = clean
        .bills
        .iter()
        .map(|bill| SummaryItem {
            bill_number: bill.bill_number.clone(),
            topic: bill.topic,
            summary: summarize(bill),
        })
        .collect();

    let envelope = SummaryEnvelope {
        generated_at: now,
        count: summaries.len(),
        summaries,
    };
    store.write_json(&store.summaries_path(), &envelope)?;
    info!(
        count = envelope.count,
        path = %store.summaries_path().display(),
        "Saved summaries"
    );

    for item in &envelope.summaries {
        info!(
            bill = item.bill_number.as_deref().unwrap_or("This bill"),
            summary = item.summary.as_str(),
            "Summarized bill"
        );
    }

    Ok(envelope)
}
