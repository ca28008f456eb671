use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum UiState {
    #[default]
    Idle,
    Loading,
    Success,
    Error(String),
}

impl UiState {
    pub fn label(&self) -> &'static str {
        match self {
            UiState::Idle => "Idle",
            UiState::Loading => "Loading",
            UiState::Success => "Success",
            UiState::Error(_) => "Error",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RewriteRequest {
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RewriteResponse {
    pub simplified: String,
    /// Seconds spent generating, as reported by the service.
    pub duration: f64,
    #[serde(default)]
    pub original: Option<String>,
}

impl RewriteResponse {
    pub fn duration_tag(&self) -> String {
        format!("Generated in {:.1}s", self.duration)
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub detail: Option<String>,
}

/// Status, content type and body of a response, as read off the wire.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawResponse {
    pub status: u16,
    pub content_type: Option<String>,
    pub body: String,
}

impl RawResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    pub fn is_json(&self) -> bool {
        self.content_type
            .as_deref()
            .is_some_and(|ct| ct.contains("application/json"))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthStatus {
    pub status: String,
    pub api_key_configured: bool,
}
