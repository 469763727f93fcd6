/// Push backend client
///
/// Fire-and-forget delivery of a composed push event: the payload is
/// POSTed as JSON to the configured backend, the response body is
/// discarded and only the status code is returned for logging. Transport
/// errors propagate to the caller; a non-2xx status does not.
use async_trait::async_trait;
use tracing::{debug, info};

use crate::error::Result;
use crate::models::PushEvent;

#[async_trait]
pub trait Notifier: Send + Sync {
    /// Deliver one push event, returning the backend's HTTP status code.
    async fn send(&self, event: &PushEvent) -> Result<u16>;
}

pub struct HttpPushClient {
    http_client: reqwest::Client,
    backend_url: String,
}

impl HttpPushClient {
    pub fn new(backend_url: String) -> Self {
        Self {
            http_client: reqwest::Client::new(),
            backend_url,
        }
    }
}

#[async_trait]
impl Notifier for HttpPushClient {
    async fn send(&self, event: &PushEvent) -> Result<u16> {
        debug!(
            "sending push event to backend: {}",
            serde_json::to_string(event)?
        );

        let response = self
            .http_client
            .post(&self.backend_url)
            .json(event)
            .send()
            .await?;

        let status = response.status().as_u16();
        info!("received status code {} from push backend", status);
        Ok(status)
    }
}
