// src/providers/mod.rs

use crate::errors::Result;

pub mod dashscope;

/// Token counts reported by the service, when it reports them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TokenUsage {
    pub input_tokens: Option<u64>,
    pub output_tokens: Option<u64>,
}

/// One application invocation: which app, and what to ask it.
#[derive(Debug, Clone)]
pub struct ApplicationRequest<'a> {
    pub app_id: &'a str,
    pub prompt: &'a str,
}

/// What a successful invocation hands back.
#[derive(Debug, Clone)]
pub struct ApplicationOutput {
    pub status_code: u16,
    pub request_id: Option<String>,
    pub text: String,
    pub session_id: Option<String>,
    pub usage: TokenUsage,
}

/// The seam between the probe and whatever actually talks to the hosted application.
///
/// Implementations return `Ok` only for an OK status. A non-OK status that the service
/// explains is `ProbeError::Api`; anything else that goes wrong on the way is a
/// transport-side error variant.
pub trait ApplicationClient: Send + Sync {
    fn call(
        &self,
        api_key: &str,
        request: &ApplicationRequest<'_>,
    ) -> impl std::future::Future<Output = Result<ApplicationOutput>> + Send;
}
