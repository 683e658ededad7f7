//! End-to-end flow over the on-disk artifacts: a raw listing fixture run
//! through clean, summarize, and publish with a fixed clock.

use std::fs;

use chrono::{DateTime, Utc};
use serde_json::json;

use billfeed_common::{ArtifactStore, BillFeedError, PostEnvelope, Topic};

fn fixed_now() -> DateTime<Utc> {
    "2024-03-05T12:00:00Z".parse().unwrap()
}

fn seed_raw_artifact(store: &ArtifactStore) {
    store
        .write_json(
            &store.raw_bills_path(),
            &json!({
                "fetched_at": "2024-03-05T00:00:00Z",
                "source": "Congress.gov",
                "data": { "bills": [{
                    "number": "HR42",
                    "title": "Affordable College Act",
                    "introducedDate": "2024-03-01",
                    "congress": 118,
                    "type": "HR",
                    "originChamber": "House",
                    "updateDate": "2024-03-02"
                }]}
            }),
        )
        .unwrap();
}

#[test]
fn raw_listing_becomes_a_capped_post() {
    let dir = tempfile::tempdir().unwrap();
    let store = ArtifactStore::new(dir.path());
    seed_raw_artifact(&store);

    let clean = billfeed_clean::run(&store, fixed_now()).unwrap();
    assert_eq!(clean.bills[0].topic, Some(Topic::Education));

    let summaries = billfeed_summarize::run(&store, fixed_now()).unwrap();
    let summary = &summaries.summaries[0].summary;
    assert!(summary.contains("HR42 is a education bill introduced on 2024-03-01."));
    assert!(summary.contains("It focuses on the following issue: Affordable College Act"));

    let posts = billfeed_publish::run(&store, fixed_now()).unwrap();
    assert_eq!(posts.count, 1);
    let post = &posts.posts[0].post;
    assert!(post.starts_with("HR42 | Education\n\n"));
    assert!(post.chars().count() <= billfeed_publish::MAX_POST_LEN);

    let on_disk: PostEnvelope = store.read_json(&store.posts_path()).unwrap();
    assert_eq!(on_disk.count, on_disk.posts.len());
}

#[test]
fn reruns_with_same_clock_are_byte_identical() {
    let dir = tempfile::tempdir().unwrap();
    let store = ArtifactStore::new(dir.path());
    seed_raw_artifact(&store);

    billfeed_clean::run(&store, fixed_now()).unwrap();
    let first = fs::read(store.clean_bills_path()).unwrap();
    billfeed_clean::run(&store, fixed_now()).unwrap();
    let second = fs::read(store.clean_bills_path()).unwrap();
    assert_eq!(first, second);
}

#[test]
fn publish_before_summarize_fails_without_writing() {
    let dir = tempfile::tempdir().unwrap();
    let store = ArtifactStore::new(dir.path());

    let err = billfeed_publish::run(&store, fixed_now()).unwrap_err();
    match err {
        BillFeedError::ArtifactMissing { path } => assert!(path.ends_with("summaries.json")),
        other => panic!("expected ArtifactMissing, got {other}"),
    }
    assert!(!store.posts_path().exists());
}
