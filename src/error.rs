use thiserror::Error;

/// Longest slice of an unstructured error body shown to the user.
pub const SERVER_TEXT_LIMIT: usize = 50;

pub const GENERIC_FAILURE: &str = "Something went wrong";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RewriteError {
    #[error("Please paste some text first!")]
    EmptyInput,
    #[error("{0}")]
    Detail(String),
    #[error("{0}...")]
    ServerText(String),
    #[error("Server returned a non-JSON response")]
    NonJson,
    #[error("invalid response body: {0}")]
    InvalidBody(String),
    #[error("{0}")]
    Transport(String),
}

impl RewriteError {
    pub fn server_text(body: &str) -> Self {
        RewriteError::ServerText(body.chars().take(SERVER_TEXT_LIMIT).collect())
    }

    /// Text shown in the notification for a failed lifecycle.
    pub fn notification(&self) -> String {
        match self {
            RewriteError::EmptyInput => self.to_string(),
            _ => format!("Error: {self}"),
        }
    }
}

impl From<serde_json::Error> for RewriteError {
    fn from(err: serde_json::Error) -> Self {
        RewriteError::InvalidBody(err.to_string())
    }
}

impl From<reqwest::Error> for RewriteError {
    fn from(err: reqwest::Error) -> Self {
        RewriteError::Transport(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn server_text_truncates_on_char_boundaries() {
        let body = "é".repeat(80);
        let err = RewriteError::server_text(&body);
        assert_eq!(err.to_string(), format!("{}...", "é".repeat(50)));
    }

    #[test]
    fn notification_prefixes_errors_but_not_empty_input() {
        assert_eq!(
            RewriteError::Detail("quota exceeded".into()).notification(),
            "Error: quota exceeded"
        );
        assert_eq!(
            RewriteError::EmptyInput.notification(),
            "Please paste some text first!"
        );
    }
}
