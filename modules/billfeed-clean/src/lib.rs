//! Clean stage: normalize raw API bills into snake_case records and assign
//! each a policy topic by keyword classification.

pub mod classify;

use chrono::{DateTime, Utc};
use tracing::info;

use billfeed_common::{ArtifactStore, BillFeedError, CleanBill, CleanBillEnvelope};
use congress_client::{bills_from_payload, Bill};

pub use classify::{classify, TOPIC_KEYWORDS};

/// Rename API-native fields to the pipeline's schema and classify the title.
pub fn normalize(bill: &Bill) -> CleanBill {
    CleanBill {
        bill_number: bill.number.clone(),
        title: bill.title.clone(),
        introduced_date: bill.introduced_date.clone(),
        congress: bill.congress,
        bill_type: bill.bill_type.clone(),
        origin_chamber: bill.origin_chamber.clone(),
        topic: Some(classify(bill.title.as_deref())),
        last_updated: bill.update_date.clone(),
    }
}

/// Load the raw artifact, clean every bill, and overwrite the clean artifact.
///
/// A missing raw artifact is fatal; a raw artifact without `data.bills` is
/// not and produces an empty envelope.
pub fn run(store: &ArtifactStore, now: DateTime<Utc>) -> Result<CleanBillEnvelope, BillFeedError> {
    let raw: serde_json::Value = store.read_json(&store.raw_bills_path())?;
    let bills = raw.get("data").map(bills_from_payload).unwrap_or_default();

    let cleaned: Vec<CleanBill> = bills.iter().map(normalize).collect();

    let envelope = CleanBillEnvelope {
        cleaned_at: now,
        count: cleaned.len(),
        bills: cleaned,
    };
    store.write_json(&store.clean_bills_path(), &envelope)?;
    info!(
        count = envelope.count,
        path = %store.clean_bills_path().display(),
        "Saved classified bills"
    );

    Ok(envelope)
}
