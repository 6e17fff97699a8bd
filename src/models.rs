// src/models.rs
use crate::providers::TokenUsage;

/// Terminal state of a probe. There is no state in between.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ProbeOutcome {
    Succeeded,
    Failed,
}

impl std::fmt::Display for ProbeOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ProbeOutcome::Succeeded => write!(f, "Succeeded"),
            ProbeOutcome::Failed => write!(f, "Failed"),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FailureKind {
    /// The service answered with a non-OK status.
    Remote,
    /// The call itself failed: network, TLS, unreadable body.
    Transport,
    /// The probe never got far enough to make a call.
    Config,
}

#[derive(Clone, Debug)]
pub struct ProbeResult {
    pub outcome: ProbeOutcome,
    pub success: bool,
    pub status_code: Option<u16>,
    pub request_id: Option<String>,
    pub error_code: Option<String>,
    /// Output text on success, error message on failure.
    pub message_or_output: String,
    pub failure: Option<FailureKind>,
    pub session_id: Option<String>,
    pub usage: TokenUsage,
    pub latency_ms: u64,
    pub timestamp: String,
}

impl ProbeResult {
    pub fn succeeded(
        status_code: u16,
        request_id: Option<String>,
        output: String,
        session_id: Option<String>,
        usage: TokenUsage,
        latency_ms: u64,
    ) -> Self {
        Self {
            outcome: ProbeOutcome::Succeeded,
            success: true,
            status_code: Some(status_code),
            request_id,
            error_code: None,
            message_or_output: output,
            failure: None,
            session_id,
            usage,
            latency_ms,
            timestamp: chrono::Utc::now().to_rfc3339(),
        }
    }

    pub fn failed(
        kind: FailureKind,
        status_code: Option<u16>,
        request_id: Option<String>,
        error_code: Option<String>,
        message: String,
        latency_ms: u64,
    ) -> Self {
        Self {
            outcome: ProbeOutcome::Failed,
            success: false,
            status_code,
            request_id,
            error_code,
            message_or_output: message,
            failure: Some(kind),
            session_id: None,
            usage: TokenUsage::default(),
            latency_ms,
            timestamp: chrono::Utc::now().to_rfc3339(),
        }
    }

    /// Process exit status for this result: 0 on success, 1 otherwise.
    pub fn exit_status(&self) -> u8 {
        match self.outcome {
            ProbeOutcome::Succeeded => 0,
            ProbeOutcome::Failed => 1,
        }
    }
}
