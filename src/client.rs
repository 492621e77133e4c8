use std::time::Duration;

use once_cell::sync::Lazy;
use reqwest::{Client, ClientBuilder};

use crate::api::models::{Answer, AskRequest, ProcessReply};
use crate::error::Result;

// Create a static client to reuse connections
static CLIENT: Lazy<Client> = Lazy::new(|| {
    ClientBuilder::new()
        .timeout(Duration::from_secs(60))
        .connect_timeout(Duration::from_secs(5))
        .pool_max_idle_per_host(10)
        .build()
        .expect("Failed to build HTTP client")
});

/// Client for the `/process` endpoint.
pub struct QaClient {
    endpoint: String,
}

impl QaClient {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
        }
    }

    /// One submission cycle: POST the question, parse the reply, classify
    /// it as an answer or an error. A body that fails to parse as JSON is
    /// a transport error, same as a request that never settled.
    pub async fn ask(&self, req: &AskRequest) -> Result<Answer> {
        let response = CLIENT.post(&self.endpoint).json(req).send().await?;
        let reply: ProcessReply = response.json().await?;
        reply.into_result()
    }
}
