// src/runner.rs
use crate::config::ProbeConfig;
use crate::errors::ProbeError;
use crate::models::ProbeResult;
use crate::providers::{ApplicationClient, ApplicationRequest};
use std::time::Instant;

/// Run a single probe: one call, no retries, and always a result.
pub async fn run_probe<C: ApplicationClient>(client: &C, config: &ProbeConfig) -> ProbeResult {
    let request = ApplicationRequest {
        app_id: &config.app_id,
        prompt: &config.prompt,
    };

    let start = Instant::now();
    let response = client.call(&config.api_key, &request).await;
    let latency_ms = start.elapsed().as_millis() as u64;

    match response {
        Ok(output) => {
            log::info!(
                "Application {} answered with status {} in {}ms",
                config.app_id,
                output.status_code,
                latency_ms
            );
            ProbeResult::succeeded(
                output.status_code,
                output.request_id,
                output.text,
                output.session_id,
                output.usage,
                latency_ms,
            )
        }
        Err(e) => {
            log::warn!("Probe of application {} failed: {}", config.app_id, e);
            failure_result(e, latency_ms)
        }
    }
}

/// Turns any probe error into a failed result. Only remote errors carry status and request id.
pub fn failure_result(error: ProbeError, latency_ms: u64) -> ProbeResult {
    let kind = error.kind();
    match error {
        ProbeError::Api {
            status,
            code,
            message,
            request_id,
        } => ProbeResult::failed(kind, Some(status), request_id, code, message, latency_ms),
        other => ProbeResult::failed(kind, None, None, None, other.to_string(), latency_ms),
    }
}
