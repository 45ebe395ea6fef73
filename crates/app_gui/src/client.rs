//! Blocking HTTP client for the test-case generation backend.

use anyhow::Context;
use casegen_core::{BackendStatus, GenerateRequest, GenerateResponse, RequirementSource};
use reqwest::blocking::{Client, multipart};
use std::time::Duration;

const GENERATE_PATH: &str = "generate-test-cases";
const STATUS_PATH: &str = "api-status";
const GENERATE_TIMEOUT: Duration = Duration::from_secs(300);

/// Thin wrapper that knows the backend base URL.
pub(crate) struct BackendClient {
    client: Client,
    base_url: String,
}

impl BackendClient {
    pub(crate) fn new(base_url: &str) -> anyhow::Result<Self> {
        let base_url = base_url.trim();
        if base_url.is_empty() {
            anyhow::bail!("Backend URL is not configured");
        }
        let client = Client::builder()
            .timeout(GENERATE_TIMEOUT)
            .build()
            .context("building HTTP client")?;
        Ok(Self {
            client,
            base_url: base_url.to_string(),
        })
    }

    /// Posts the requirement and returns the raw generated text.
    pub(crate) fn generate(&self, request: &GenerateRequest) -> anyhow::Result<String> {
        let mut form = multipart::Form::new();
        for (name, value) in request.form_fields() {
            form = form.text(name, value);
        }
        if let RequirementSource::File(path) = &request.source {
            form = form
                .file("file", path)
                .with_context(|| format!("Could not attach {}", path.display()))?;
        }

        let url = endpoint_url(&self.base_url, GENERATE_PATH);
        tracing::info!("requesting test cases from {url}");
        let response = self
            .client
            .post(&url)
            .multipart(form)
            .send()
            .with_context(|| format!("Request to {url} failed"))?;
        let status = response.status();
        let body: GenerateResponse = response
            .json()
            .with_context(|| format!("Backend answered {status} without a readable body"))?;
        if !status.is_success() {
            tracing::warn!("generation endpoint returned {status}");
        }
        body.into_output()
    }

    /// Fetches which generation method the backend will use.
    pub(crate) fn status(&self) -> anyhow::Result<BackendStatus> {
        let url = endpoint_url(&self.base_url, STATUS_PATH);
        let response = self
            .client
            .get(&url)
            .timeout(Duration::from_secs(10))
            .send()
            .with_context(|| format!("Request to {url} failed"))?;
        let status = response.status();
        if !status.is_success() {
            anyhow::bail!("Backend status check returned {status}");
        }
        response
            .json()
            .context("Backend status could not be read")
    }
}

/// Joins the base URL and an endpoint path with exactly one slash.
pub(crate) fn endpoint_url(base_url: &str, path: &str) -> String {
    format!(
        "{}/{}",
        base_url.trim().trim_end_matches('/'),
        path.trim_start_matches('/')
    )
}
