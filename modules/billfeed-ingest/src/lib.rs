//! Ingest stage: pull recent House bills from Congress.gov and persist the
//! raw response with provenance. First stage of the pipeline; everything
//! downstream works from the artifact this writes.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use tracing::info;

use billfeed_common::{ArtifactStore, BillFeedError, RawBillEnvelope, SOURCE_LABEL};
use congress_client::{bills_from_payload, CongressClient, CongressError};

/// Anything that can supply a bill listing payload. Lets tests swap the live
/// client for a canned response.
#[async_trait]
pub trait BillSource {
    async fn recent_house_bills(&self, limit: u32) -> Result<serde_json::Value, CongressError>;
}

#[async_trait]
impl BillSource for CongressClient {
    async fn recent_house_bills(&self, limit: u32) -> Result<serde_json::Value, CongressError> {
        CongressClient::recent_house_bills(self, limit).await
    }
}

/// Fetch the listing, wrap it with `fetched_at`/`source`, and overwrite the
/// raw artifact. Fails before writing anything if the fetch fails.
pub async fn run(
    source: &dyn BillSource,
    store: &ArtifactStore,
    limit: u32,
    now: DateTime<Utc>,
) -> Result<RawBillEnvelope, BillFeedError> {
    let data = source.recent_house_bills(limit).await?;

    let bills = bills_from_payload(&data);
    info!(count = bills.len(), "Retrieved bills");

    let envelope = RawBillEnvelope {
        fetched_at: now,
        source: SOURCE_LABEL.to_string(),
        data,
    };
    store.write_json(&store.raw_bills_path(), &envelope)?;
    info!(path = %store.raw_bills_path().display(), "Raw data saved");

    for bill in &bills {
        info!(
            bill = bill.number.as_deref().unwrap_or("N/A"),
            title = bill.title.as_deref().unwrap_or("No title available"),
            introduced = bill.introduced_date.as_deref().unwrap_or("Unknown date"),
            "Fetched bill"
        );
    }

    Ok(envelope)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    struct CannedSource(serde_json::Value);

    #[async_trait]
    impl BillSource for CannedSource {
        async fn recent_house_bills(
            &self,
            _limit: u32,
        ) -> Result<serde_json::Value, CongressError> {
            Ok(self.0.clone())
        }
    }

    struct FailingSource;

    #[async_trait]
    impl BillSource for FailingSource {
        async fn recent_house_bills(
            &self,
            _limit: u32,
        ) -> Result<serde_json::Value, CongressError> {
            Err(CongressError::Api {
                status: 503,
                message: "unavailable".to_string(),
            })
        }
    }

    fn fixed_now() -> DateTime<Utc> {
        "2024-03-05T12:00:00Z".parse().unwrap()
    }

    #[tokio::test]
    async fn wraps_payload_with_provenance_and_persists() {
        let dir = tempfile::tempdir().unwrap();
        let store = ArtifactStore::new(dir.path());
        let source = CannedSource(json!({ "bills": [{ "number": "HR42" }] }));

        let envelope = run(&source, &store, 5, fixed_now()).await.unwrap();
        assert_eq!(envelope.source, "Congress.gov");
        assert_eq!(envelope.fetched_at, fixed_now());

        let on_disk: RawBillEnvelope = store.read_json(&store.raw_bills_path()).unwrap();
        assert_eq!(on_disk.data, json!({ "bills": [{ "number": "HR42" }] }));
    }

    #[tokio::test]
    async fn payload_persisted_unmodified_even_without_bills_key() {
        let dir = tempfile::tempdir().unwrap();
        let store = ArtifactStore::new(dir.path());
        let source = CannedSource(json!({ "pagination": { "count": 0 } }));

        run(&source, &store, 5, fixed_now()).await.unwrap();
        let on_disk: RawBillEnvelope = store.read_json(&store.raw_bills_path()).unwrap();
        assert_eq!(on_disk.data, json!({ "pagination": { "count": 0 } }));
    }

    #[tokio::test]
    async fn upstream_failure_writes_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let store = ArtifactStore::new(dir.path());

        let err = run(&FailingSource, &store, 5, fixed_now()).await.unwrap_err();
        assert!(matches!(err, BillFeedError::Upstream(_)));
        assert!(!store.raw_bills_path().exists());
    }
}
