use async_trait::async_trait;
use reqwest::{StatusCode, Url};
use std::time::Duration;
use tracing::{debug, info};

use crate::config::{Credentials, RunConfig};
use crate::{ProbeError, Result};

/// Anything that can answer a render query with a raw response body.
#[async_trait]
pub trait MetricsSource {
    async fn fetch(&self, target: &str, window: &str) -> Result<String>;
}

/// Builds `<endpoint>?target=..&from=-<window>&format=json`.
///
/// Any query already on the endpoint is replaced. Target and window are
/// form-encoded here, exactly once.
pub fn render_url(endpoint: &Url, target: &str, window: &str) -> Url {
    let mut url = endpoint.clone();
    url.set_query(None);
    url.query_pairs_mut()
        .append_pair("target", target)
        .append_pair("from", &format!("-{}", window))
        .append_pair("format", "json");
    url
}

/// Graphite render API client. One GET per fetch, no retries.
pub struct MetricsClient {
    http: reqwest::Client,
    endpoint: Url,
    credentials: Option<Credentials>,
}

impl MetricsClient {
    pub fn new(endpoint: Url, credentials: Option<Credentials>, timeout: Duration) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .redirect(reqwest::redirect::Policy::none())
            .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| ProbeError::Transport(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            http,
            endpoint,
            credentials,
        })
    }

    pub fn from_config(config: &RunConfig) -> Result<Self> {
        Self::new(
            config.endpoint.clone(),
            config.credentials.clone(),
            config.timeout,
        )
    }
}

#[async_trait]
impl MetricsSource for MetricsClient {
    async fn fetch(&self, target: &str, window: &str) -> Result<String> {
        let url = render_url(&self.endpoint, target, window);
        info!("Querying {}", url);

        let mut request = self.http.get(url);
        if let Some(creds) = &self.credentials {
            debug!("Using basic auth as {}", creds.username);
            request = request.basic_auth(&creds.username, Some(&creds.password));
        }

        let response = request.send().await?;
        let status = response.status();
        if status != StatusCode::OK {
            return Err(ProbeError::HttpStatus(status.as_u16()));
        }

        let body = response.text().await?;
        debug!("Received {} bytes", body.len());
        Ok(body)
    }
}
