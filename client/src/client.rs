//! HTTP dispatcher for catalog queries.
//!
//! [`CongressClient`] issues exactly one GET per call and never raises a
//! transport error to the caller: every failure is folded into an
//! [`ErrorEnvelope`] so each operation returns a structured result either
//! way. The upstream JSON body is passed through verbatim on success; this
//! client does not validate or reshape the upstream schema.

use serde::Serialize;
use thiserror::Error;

use crate::catalog::ResourceDescriptor;
use crate::config::Config;
use crate::query::{self, QueryRequest};

/// Normalized failure value returned in place of a successful payload.
///
/// Serializes to `{"error": "...", "statusCode": 404}`, with `statusCode`
/// absent when the failure never produced an HTTP status (connect errors,
/// body read failures).
#[derive(Debug, Clone, Error, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
#[error("{error}")]
pub struct ErrorEnvelope {
    /// Human-readable message naming the resource and the underlying cause.
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status_code: Option<u16>,
}

/// Outcome of one query: the verbatim upstream JSON body, or an envelope.
/// Exactly one of the two, never a blend.
pub type QueryResult = Result<serde_json::Value, ErrorEnvelope>;

/// HTTP client for the Congress.gov API.
///
/// Holds the API key injected at construction time; credentials are
/// validated once at startup via [`Config::validate`] and never reloaded.
/// The client is cheap to clone and safe to share across tasks.
#[derive(Clone)]
pub struct CongressClient {
    http: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl CongressClient {
    /// Create a new client with the given base URL and API key.
    pub fn new(base_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self::with_client(reqwest::Client::new(), base_url, api_key)
    }

    /// Create a client with a custom `reqwest::Client` (for testing with custom config).
    pub fn with_client(
        http: reqwest::Client,
        base_url: impl Into<String>,
        api_key: impl Into<String>,
    ) -> Self {
        Self {
            http,
            base_url: base_url.into(),
            api_key: api_key.into(),
        }
    }

    /// Build a client from validated configuration, applying the configured
    /// request timeout to the underlying `reqwest::Client`.
    ///
    /// # Errors
    /// Returns a `reqwest::Error` if the HTTP client cannot be constructed.
    pub fn from_config(config: &Config) -> Result<Self, reqwest::Error> {
        let http = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(config.api.timeout_secs))
            .build()?;
        Ok(Self::with_client(
            http,
            config.api.base_url.clone(),
            config.api.key.clone(),
        ))
    }

    /// Dispatch one query against a catalog resource.
    ///
    /// One attempt, no retry. Non-2xx statuses and transport failures both
    /// come back as an [`ErrorEnvelope`]; only a 2xx response with a
    /// decodable JSON body counts as success.
    pub async fn execute(
        &self,
        resource: &'static ResourceDescriptor,
        request: &QueryRequest,
    ) -> QueryResult {
        let (path, params) = query::build(resource, request);
        let url = format!("{}{}", self.base_url, path);
        tracing::debug!(resource = resource.name, %url, ?params, "dispatching upstream query");

        let sent = self
            .http
            .get(&url)
            .query(&[("api_key", self.api_key.as_str()), ("format", "json")])
            .query(&params)
            .send()
            .await;

        let response = match sent {
            Ok(response) => response,
            Err(err) => {
                tracing::warn!(resource = resource.name, error = %err, "upstream request failed");
                return Err(failure_envelope(resource, err.status().map(|s| s.as_u16()), &err));
            }
        };

        let status = response.status();
        if !status.is_success() {
            tracing::warn!(
                resource = resource.name,
                status = status.as_u16(),
                "upstream returned error status"
            );
            return Err(ErrorEnvelope {
                error: format!(
                    "Failed to retrieve {}: upstream returned HTTP {} for {}",
                    resource.action_label, status, path
                ),
                status_code: Some(status.as_u16()),
            });
        }

        match response.json::<serde_json::Value>().await {
            Ok(body) => Ok(body),
            Err(err) => {
                tracing::warn!(resource = resource.name, error = %err, "upstream body was not JSON");
                Err(failure_envelope(resource, err.status().map(|s| s.as_u16()), &err))
            }
        }
    }
}

fn failure_envelope(
    resource: &ResourceDescriptor,
    status_code: Option<u16>,
    cause: &dyn std::fmt::Display,
) -> ErrorEnvelope {
    ErrorEnvelope {
        error: format!("Failed to retrieve {}: {cause}", resource.action_label),
        status_code,
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    #[test]
    fn envelope_serializes_to_the_wire_shape() {
        let envelope = ErrorEnvelope {
            error: "Failed to retrieve bills: upstream returned HTTP 404".into(),
            status_code: Some(404),
        };
        let json = serde_json::to_value(&envelope).expect("envelope should serialize");
        assert_eq!(json["error"], "Failed to retrieve bills: upstream returned HTTP 404");
        assert_eq!(json["statusCode"], 404);
    }

    #[test]
    fn envelope_omits_status_code_when_unknown() {
        let envelope = ErrorEnvelope {
            error: "Failed to retrieve members: connection refused".into(),
            status_code: None,
        };
        let json = serde_json::to_value(&envelope).expect("envelope should serialize");
        assert!(json.get("statusCode").is_none());
    }
}
