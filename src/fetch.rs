//! HTTP execution of panel fetch requests.

use crate::bindings::Payload;
use crate::config::HttpConfig;
use crate::panel::{FetchCompletion, FetchRequest};
use crate::resource::FetchError;
use anyhow::{Context, Result};
use std::time::Duration;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

const USER_AGENT: &str = concat!("apinexus/", env!("CARGO_PKG_VERSION"));

/// Build the shared client. All panels go through one client so connections
/// are pooled.
pub fn build_client(config: &HttpConfig) -> Result<reqwest::Client> {
    reqwest::Client::builder()
        .user_agent(USER_AGENT)
        .timeout(Duration::from_secs(config.timeout_secs))
        .connect_timeout(Duration::from_secs(config.connect_timeout_secs))
        .pool_max_idle_per_host(2)
        .build()
        .context("Failed to create HTTP client")
}

/// Perform one GET and decode the body with the request's binding.
pub async fn execute(client: &reqwest::Client, request: &FetchRequest) -> Result<Payload, FetchError> {
    let response = client
        .get(&request.url)
        .send()
        .await
        .map_err(transport_error)?;

    let status = response.status();
    if !status.is_success() {
        return Err(FetchError::Status(status.as_u16()));
    }

    let body = response.bytes().await.map_err(transport_error)?;
    (request.decode)(&body)
}

/// Run `request` on the runtime and deliver its completion to `tx`.
pub fn spawn(
    client: reqwest::Client,
    request: FetchRequest,
    tx: mpsc::Sender<FetchCompletion>,
) -> JoinHandle<()> {
    tokio::spawn(async move {
        let outcome = execute(&client, &request).await;
        if let Err(e) = &outcome {
            tracing::warn!("Fetch for {} failed: {}", request.integration, e);
        }
        crate::util::send_or_log(&tx, request.complete(outcome), "fetch completion").await;
    })
}

fn transport_error(e: reqwest::Error) -> FetchError {
    if e.is_timeout() {
        FetchError::Transport("request timed out".to_string())
    } else if e.is_decode() {
        FetchError::Malformed(e.to_string())
    } else {
        FetchError::Transport(e.to_string())
    }
}
