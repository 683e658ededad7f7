pub mod error;
pub mod types;

pub use error::{CongressError, Result};
pub use types::{bills_from_payload, Bill};

const BASE_URL: &str = "https://api.congress.gov/v3";

pub struct CongressClient {
    client: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl CongressClient {
    pub fn new(api_key: String) -> Self {
        Self::with_base_url(BASE_URL.to_string(), api_key)
    }

    /// Point the client at a different base URL (test servers, proxies).
    pub fn with_base_url(base_url: String, api_key: String) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url,
            api_key,
        }
    }

    /// Fetch the most recent House bills. Returns the full JSON body
    /// unmodified; the listing schema belongs to the API, not to us.
    pub async fn recent_house_bills(&self, limit: u32) -> Result<serde_json::Value> {
        let url = format!("{}/bill", self.base_url);
        let resp = self
            .client
            .get(&url)
            .query(&[
                ("chamber", "house"),
                ("limit", &limit.to_string()),
                ("format", "json"),
                ("api_key", &self.api_key),
            ])
            .send()
            .await?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(CongressError::Api {
                status: status.as_u16(),
                message: body,
            });
        }

        tracing::debug!(%url, limit, "Bill listing fetched");
        let payload: serde_json::Value = resp.json().await?;
        Ok(payload)
    }
}
