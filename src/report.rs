// src/report.rs
//! Human-readable output for a probe run.

use crate::config::ProbeConfig;
use crate::models::{FailureKind, ProbeOutcome, ProbeResult};

pub const ERROR_CODE_DOCS: &str =
    "https://help.aliyun.com/zh/model-studio/developer-reference/error-code";

const KEY_PREFIX_LEN: usize = 10;

/// Masks a secret down to a short prefix followed by `...`.
///
/// At most `KEY_PREFIX_LEN` characters survive, and never more than half the secret, so
/// short keys are not printed whole either.
pub fn mask_secret(secret: &str) -> String {
    let len = secret.chars().count();
    let keep = KEY_PREFIX_LEN.min(len / 2);
    let prefix: String = secret.chars().take(keep).collect();
    format!("{}...", prefix)
}

pub fn format_parameters(config: &ProbeConfig) -> String {
    format!(
        "📋 Parameters:\n- API Key: {}\n- App ID: {}\n- Prompt: {}\n",
        mask_secret(&config.api_key),
        config.app_id,
        config.prompt
    )
}

/// A suggestion matched to how the probe failed, if there is one.
pub fn failure_hint(result: &ProbeResult) -> Option<&'static str> {
    match (result.failure?, result.status_code) {
        (FailureKind::Remote, Some(401)) => Some("Check that the API key is correct"),
        (FailureKind::Remote, Some(403)) => Some("Check the API key's permissions and remaining quota"),
        (FailureKind::Remote, Some(404)) => Some("Check the application id and API base URL"),
        (FailureKind::Remote, Some(429)) => Some("Requests are being rate limited, try again later"),
        (FailureKind::Remote, Some(status)) if status >= 500 => {
            Some("The service reported an internal error, try again later")
        }
        (FailureKind::Transport, _) => Some("Check network connectivity and the API base URL"),
        (FailureKind::Config, _) => {
            Some("Set DASHSCOPE_API_KEY and DASHSCOPE_APP_ID, or point PROBE_CONFIG at a TOML file")
        }
        _ => None,
    }
}

pub fn format_result(result: &ProbeResult) -> String {
    let mut out = String::new();
    let na = "n/a".to_string();

    match result.outcome {
        ProbeOutcome::Succeeded => {
            out.push_str(&format!(
                "📊 Response status: {}\n",
                result.status_code.map_or(na.clone(), |s| s.to_string())
            ));
            out.push_str("✅ Connection test succeeded!\n");
            out.push_str(&format!(
                "- request_id: {}\n",
                result.request_id.as_ref().unwrap_or(&na)
            ));
            if let Some(session_id) = &result.session_id {
                out.push_str(&format!("- session_id: {}\n", session_id));
            }
            if let (Some(input), Some(output)) =
                (result.usage.input_tokens, result.usage.output_tokens)
            {
                out.push_str(&format!("- tokens: {} in / {} out\n", input, output));
            }
            out.push_str(&format!("- latency: {}ms\n", result.latency_ms));
            out.push_str(&format!("- finished at: {}\n", result.timestamp));
            out.push_str(&format!("- output: {}\n", result.message_or_output));
        }
        ProbeOutcome::Failed => {
            if let Some(status) = result.status_code {
                out.push_str(&format!("📊 Response status: {}\n", status));
            }
            out.push_str("❌ Connection test failed\n");
            if let Some(request_id) = &result.request_id {
                out.push_str(&format!("- request_id: {}\n", request_id));
            }
            if let Some(status) = result.status_code {
                out.push_str(&format!("- status code: {}\n", status));
            }
            if let Some(code) = &result.error_code {
                out.push_str(&format!("- error code: {}\n", code));
            }
            out.push_str(&format!("- error message: {}\n", result.message_or_output));
            if let Some(hint) = failure_hint(result) {
                out.push_str(&format!("💡 {}\n", hint));
            }
            out.push_str(&format!("- finished at: {}\n", result.timestamp));
            out.push_str(&format!("💡 See the error code reference: {}\n", ERROR_CODE_DOCS));
        }
    }

    out
}

pub fn print_parameters(config: &ProbeConfig) {
    println!("{}", format_parameters(config));
}

pub fn print_result(result: &ProbeResult) {
    print!("{}", format_result(result));
}
