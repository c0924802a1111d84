use std::time::Duration;

use reqwest::Client;
use serde::de::DeserializeOwned;
use tokio::sync::Mutex;
use tokio::time::{Instant, sleep_until};

use crate::scraper::{Result, ScraperError};

/// HTTP client wrapper shared by the source clients.
///
/// Requests through one instance are spaced at least `min_interval`
/// apart; both upstream APIs throttle aggressively.
pub struct HttpClient {
    client: Client,
    base_url: String,
    min_interval: Duration,
    next_slot: Mutex<Instant>,
}

impl HttpClient {
    /// Create a new HTTP client
    pub fn new(base_url: impl Into<String>, min_interval: Duration) -> Self {
        let client = Client::builder()
            .user_agent("kisetsu/0.1.0")
            .timeout(Duration::from_secs(30))
            .build()
            .expect("Failed to build HTTP client");

        Self {
            client,
            base_url: base_url.into(),
            min_interval,
            next_slot: Mutex::new(Instant::now()),
        }
    }

    /// Build full URL from endpoint
    #[must_use]
    pub fn url(&self, endpoint: &str) -> String {
        format!("{}{}", self.base_url, endpoint)
    }

    /// Execute GET request with query parameters
    pub async fn get_with_params<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        params: &[(&str, &str)],
    ) -> Result<T> {
        self.throttle().await;

        let url = self.url(endpoint);
        let response = self
            .client
            .get(&url)
            .query(params)
            .send()
            .await
            .map_err(ScraperError::Network)?;

        Self::handle_response(response).await
    }

    /// Execute POST request with JSON body
    pub async fn post_json<T: DeserializeOwned, B: serde::Serialize>(
        &self,
        endpoint: &str,
        body: &B,
    ) -> Result<T> {
        self.throttle().await;

        let url = self.url(endpoint);
        let response = self
            .client
            .post(&url)
            .header("Content-Type", "application/json")
            .header("Accept", "application/json")
            .json(body)
            .send()
            .await
            .map_err(ScraperError::Network)?;

        Self::handle_response(response).await
    }

    /// Wait until this client's next request slot.
    async fn throttle(&self) {
        let mut next_slot = self.next_slot.lock().await;

        let now = Instant::now();
        let slot = if *next_slot > now { *next_slot } else { now };

        sleep_until(slot).await;
        *next_slot = slot + self.min_interval;
    }

    /// Handle response and parse JSON
    async fn handle_response<T: DeserializeOwned>(response: reqwest::Response) -> Result<T> {
        let status = response.status();

        if !status.is_success() {
            let status_code = status.as_u16();
            let message = response.text().await.unwrap_or_default();

            return Err(ScraperError::Api {
                status: status_code,
                message,
            });
        }

        response
            .json::<T>()
            .await
            .map_err(|e| ScraperError::Parse(format!("JSON parse error: {e}")))
    }
}
