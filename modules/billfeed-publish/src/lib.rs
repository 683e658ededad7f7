//! Publish-prep stage: reshape each summary into a short post and cap it at
//! the platform character budget. Nothing is actually posted; this stage
//! only writes the post artifact.

use chrono::{DateTime, Utc};
use tracing::info;

use billfeed_common::{
    ArtifactStore, BillFeedError, PostEnvelope, PostItem, SummaryEnvelope, SummaryItem,
};

/// Character budget per post. Below the platform's hard cap on purpose,
/// leaving headroom for link previews and attribution.
pub const MAX_POST_LEN: usize = 260;

/// Cap `text` at `max_len` characters (code points, not bytes).
///
/// Within budget the text passes through unchanged. Over budget it is cut to
/// `max_len - 3` characters, trailing whitespace at the cut point is
/// stripped, and `"..."` is appended, so the result never exceeds `max_len`
/// but may fall a few characters short of it.
pub fn truncate(text: &str, max_len: usize) -> String {
    if text.chars().count() <= max_len {
        return text.to_string();
    }
    let cut: String = text.chars().take(max_len - 3).collect();
    format!("{}...", cut.trim_end())
}

/// Compose the post body: a `<bill_number> | <topic>` header, a blank line,
/// then the summary, truncated to [`MAX_POST_LEN`].
pub fn format_post(item: &SummaryItem) -> String {
    let bill_number = item.bill_number.as_deref().unwrap_or("This bill");
    let topic = match item.topic {
        Some(topic) => topic.to_string(),
        None => "Policy".to_string(),
    };

    let post = format!("{bill_number} | {topic}\n\n{}", item.summary);
    truncate(&post, MAX_POST_LEN)
}

/// Load the summary artifact, format every item, and overwrite the post
/// artifact.
pub fn run(store: &ArtifactStore, now: DateTime<Utc>) -> Result<PostEnvelope, BillFeedError> {
    let summary_env: SummaryEnvelope = store.read_json(&store.summaries_path())?;

    let posts: Vec<PostItem> = summary_env
        .summaries
        .iter()
        .map(|item| PostItem {
            bill_number: item.bill_number.clone(),
            topic: item.topic,
            post: format_post(item),
        })
        .collect();

    let envelope = PostEnvelope {
        generated_at: now,
        count: posts.len(),
        posts,
    };
    store.write_json(&store.posts_path(), &envelope)?;
    info!(
        count = envelope.count,
        path = %store.posts_path().display(),
        "Saved post-ready texts"
    );

    for item in &envelope.posts {
        info!(
            bill = item.bill_number.as_deref().unwrap_or("This bill"),
            chars = item.post.chars().count(),
            "Formatted post"
        );
    }

    Ok(envelope)
}
