use crate::llm_client::LlmClient;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// LLM client, present only when a model credential was configured at
    /// startup. Handlers treat `None` as a per-request configuration failure.
    pub llm: Option<LlmClient>,
}
