//! Request and response shapes exchanged with the generation backend.

use anyhow::{Result, bail};
use serde::Deserialize;
use std::fmt;
use std::path::PathBuf;

/// Operation name sent when the user leaves the field empty.
pub const DEFAULT_OPERATION: &str = "Test";

/// Where the requirement text comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RequirementSource {
    Text(String),
    File(PathBuf),
}

impl Default for RequirementSource {
    fn default() -> Self {
        RequirementSource::Text(String::new())
    }
}

/// HTTP method of the API under test.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ApiMethod {
    #[default]
    Get,
    Post,
    Put,
    Patch,
    Delete,
}

impl ApiMethod {
    pub const ALL: [ApiMethod; 5] = [
        ApiMethod::Get,
        ApiMethod::Post,
        ApiMethod::Put,
        ApiMethod::Patch,
        ApiMethod::Delete,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            ApiMethod::Get => "GET",
            ApiMethod::Post => "POST",
            ApiMethod::Put => "PUT",
            ApiMethod::Patch => "PATCH",
            ApiMethod::Delete => "DELETE",
        }
    }

    /// Methods that carry a request body.
    pub fn needs_payload(self) -> bool {
        matches!(self, ApiMethod::Post | ApiMethod::Put | ApiMethod::Patch)
    }

    /// Methods that address a single resource by id.
    pub fn needs_resource_id(self) -> bool {
        matches!(self, ApiMethod::Delete)
    }
}

impl fmt::Display for ApiMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Form submitted to `/generate-test-cases`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GenerateRequest {
    pub source: RequirementSource,
    pub operation: String,
    pub api_endpoint: String,
    pub api_method: ApiMethod,
    pub payload: String,
    pub resource_id: String,
}

impl GenerateRequest {
    /// Rejects a blank requirement or a missing file before anything is sent.
    ///
    /// # Errors
    ///
    /// Returns the message that should be shown to the user.
    pub fn validate(&self) -> Result<()> {
        match &self.source {
            RequirementSource::Text(text) if text.trim().is_empty() => {
                bail!("Please enter a requirement")
            }
            RequirementSource::File(path) if path.as_os_str().is_empty() => {
                bail!("Please select a file")
            }
            _ => Ok(()),
        }
    }

    /// Operation to send, falling back to [`DEFAULT_OPERATION`].
    pub fn operation_or_default(&self) -> &str {
        let trimmed = self.operation.trim();
        if trimmed.is_empty() {
            DEFAULT_OPERATION
        } else {
            trimmed
        }
    }

    /// Plain text fields of the multipart form, in submission order.
    ///
    /// The requirement file, when present, is attached separately as `file`.
    pub fn form_fields(&self) -> Vec<(&'static str, String)> {
        let mut fields = Vec::new();
        if let RequirementSource::Text(text) = &self.source {
            fields.push(("requirement", text.trim().to_string()));
        }
        fields.push(("apiEndpoint", self.api_endpoint.trim().to_string()));
        fields.push(("apiMethod", self.api_method.as_str().to_string()));
        if self.api_method.needs_payload() {
            fields.push(("payload", self.payload.clone()));
        }
        if self.api_method.needs_resource_id() {
            fields.push(("resourceId", self.resource_id.trim().to_string()));
        }
        fields.push(("operation", self.operation_or_default().to_string()));
        fields
    }
}

/// Body returned by `/generate-test-cases`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct GenerateResponse {
    #[serde(default)]
    pub output: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
}

impl GenerateResponse {
    /// Yields the raw output or the backend's error message.
    ///
    /// An empty `output` string is a failed generation; whitespace-only output
    /// is still returned.
    ///
    /// # Errors
    ///
    /// Fails when the body carries no non-empty `output`.
    pub fn into_output(self) -> Result<String> {
        match (self.output, self.error) {
            (Some(output), _) if !output.is_empty() => Ok(output),
            (_, Some(error)) if !error.trim().is_empty() => bail!(error),
            _ => bail!("Unknown error occurred"),
        }
    }
}

/// Body returned by `/api-status`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct BackendStatus {
    pub primary_method: String,
    pub fallback_info: Option<String>,
    pub token_warning: Option<String>,
}

impl BackendStatus {
    /// One-line summary for the status bar.
    pub fn summary(&self) -> String {
        let mut text = if self.primary_method.is_empty() {
            "Backend reachable".to_string()
        } else {
            self.primary_method.clone()
        };
        if let Some(fallback) = self.fallback_info.as_deref().filter(|f| !f.is_empty()) {
            text.push_str(" (");
            text.push_str(fallback);
            text.push(')');
        }
        if let Some(warning) = self.token_warning.as_deref().filter(|w| !w.is_empty()) {
            text.push_str(" - ");
            text.push_str(warning);
        }
        text
    }
}
