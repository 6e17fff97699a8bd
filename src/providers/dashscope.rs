// src/providers/dashscope.rs

use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::time::Instant;

use crate::errors::{ProbeError, Result};
use crate::providers::{ApplicationClient, ApplicationOutput, ApplicationRequest, TokenUsage};

/// Invokes Model Studio (DashScope) applications over HTTP.
pub struct DashScopeClient {
    client: Client,
    api_base: String,
}

#[derive(Serialize)]
struct CompletionRequest<'a> {
    input: Input<'a>,
    parameters: Value,
    debug: Value,
}

#[derive(Serialize)]
struct Input<'a> {
    prompt: &'a str,
}

#[derive(Deserialize)]
struct ErrorBody {
    code: Option<String>,
    message: Option<String>,
    request_id: Option<String>,
}

impl DashScopeClient {
    /// Creates a new `DashScopeClient` rooted at `api_base`.
    pub fn new(client: Client, api_base: impl Into<String>) -> Self {
        Self {
            client,
            api_base: api_base.into(),
        }
    }

    fn completion_url(&self, app_id: &str) -> String {
        format!(
            "{}/api/v1/apps/{}/completion",
            self.api_base.trim_end_matches('/'),
            app_id
        )
    }
}

impl ApplicationClient for DashScopeClient {
    /// Submits the prompt to the application and returns its output text.
    async fn call(
        &self,
        api_key: &str,
        request: &ApplicationRequest<'_>,
    ) -> Result<ApplicationOutput> {
        let url = self.completion_url(request.app_id);

        log::debug!("Calling application endpoint: {}", url);

        let body = CompletionRequest {
            input: Input {
                prompt: request.prompt,
            },
            parameters: Value::Object(Default::default()),
            debug: Value::Object(Default::default()),
        };

        let start = Instant::now();

        let resp = self
            .client
            .post(&url)
            .header("Authorization", format!("Bearer {}", api_key))
            .header("Content-Type", "application/json")
            .json(&body)
            .send()
            .await?;

        let status = resp.status();
        let latency_ms = start.elapsed().as_millis() as u64;

        log::debug!("Application response status: {} ({}ms)", status, latency_ms);

        if status != StatusCode::OK {
            let error_body = resp
                .text()
                .await
                .unwrap_or_else(|_| "Could not read error body".to_string());
            return Err(api_error(status.as_u16(), &error_body));
        }

        let response_json: Value = serde_json::from_str(&resp.text().await?)?;
        parse_output(status.as_u16(), &response_json)
    }
}

/// Builds a `ProbeError::Api` from a non-OK body. Unstructured bodies become the message verbatim;
/// an empty message falls back to the status' canonical reason.
fn api_error(status: u16, body: &str) -> ProbeError {
    let (code, message, request_id) = match serde_json::from_str::<ErrorBody>(body) {
        Ok(parsed) => (
            parsed.code,
            parsed.message.unwrap_or_else(|| body.to_string()),
            parsed.request_id,
        ),
        Err(_) => (None, body.to_string(), None),
    };

    let message = if message.trim().is_empty() {
        StatusCode::from_u16(status)
            .ok()
            .and_then(|s| s.canonical_reason())
            .map(str::to_string)
            .unwrap_or_else(|| format!("HTTP status {}", status))
    } else {
        message
    };

    ProbeError::Api {
        status,
        code,
        message,
        request_id,
    }
}

/// Pulls the output text out of a success body.
///
/// The native shape is `output.text`; the OpenAI-compatible `choices[0].message.content`
/// and `choices[0].text` are accepted as well.
fn parse_output(status: u16, body: &Value) -> Result<ApplicationOutput> {
    let choice = body.get("choices").and_then(|c| c.get(0));

    let text = body
        .get("output")
        .and_then(|o| o.get("text"))
        .and_then(|t| t.as_str())
        .or_else(|| {
            choice
                .and_then(|c| c.get("message"))
                .and_then(|m| m.get("content"))
                .and_then(|t| t.as_str())
        })
        .or_else(|| choice.and_then(|c| c.get("text")).and_then(|t| t.as_str()))
        .ok_or_else(|| ProbeError::UnexpectedResponse(body.to_string()))?;

    let request_id = body
        .get("request_id")
        .or_else(|| body.get("id"))
        .and_then(|r| r.as_str())
        .map(str::to_string);

    let session_id = body
        .get("output")
        .and_then(|o| o.get("session_id"))
        .and_then(|s| s.as_str())
        .map(str::to_string);

    Ok(ApplicationOutput {
        status_code: status,
        request_id,
        text: text.to_string(),
        session_id,
        usage: parse_usage(body),
    })
}

/// Application calls report usage per model under `usage.models`; compatible-mode bodies
/// use `prompt_tokens` / `completion_tokens`.
fn parse_usage(body: &Value) -> TokenUsage {
    let Some(usage) = body.get("usage") else {
        return TokenUsage::default();
    };

    let count = |v: &Value, key: &str| v.get(key).and_then(|n| n.as_u64());

    if let Some(models) = usage.get("models").and_then(|m| m.as_array()) {
        let sum = |key: &str| {
            models
                .iter()
                .filter_map(|m| count(m, key))
                .reduce(|a, b| a.saturating_add(b))
        };
        return TokenUsage {
            input_tokens: sum("input_tokens"),
            output_tokens: sum("output_tokens"),
        };
    }

    TokenUsage {
        input_tokens: count(usage, "input_tokens").or_else(|| count(usage, "prompt_tokens")),
        output_tokens: count(usage, "output_tokens").or_else(|| count(usage, "completion_tokens")),
    }
}
