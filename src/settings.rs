use std::time::Duration;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientSettings {
    pub base_url: String,
    pub rewrite_path: String,
    pub health_path: String,
    pub toast_delay_ms: u64,
    pub default_label: String,
    pub loading_label: String,
    pub shortcut: String,
}

impl ClientSettings {
    pub fn toast_delay(&self) -> Duration {
        Duration::from_millis(self.toast_delay_ms)
    }
}

impl Default for ClientSettings {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:8000".to_string(),
            rewrite_path: "/rewrite".to_string(),
            health_path: "/health".to_string(),
            toast_delay_ms: 3_000,
            default_label: "Rewrite for a Child".to_string(),
            loading_label: "Simplifying...".to_string(),
            shortcut: "Ctrl+Enter".to_string(),
        }
    }
}
