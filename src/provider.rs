use async_trait::async_trait;
use reqwest::header::CONTENT_TYPE;

use crate::{
    error::{RewriteError, GENERIC_FAILURE},
    model::{ErrorBody, HealthStatus, RawResponse, RewriteRequest, RewriteResponse},
    settings::ClientSettings,
};

#[async_trait]
pub trait RewriteTransport: Send + Sync {
    fn display_name(&self) -> String;
    async fn post_rewrite(&self, request: &RewriteRequest) -> Result<RawResponse, RewriteError>;
}

pub struct HttpTransport {
    client: reqwest::Client,
    base_url: String,
    rewrite_path: String,
    health_path: String,
}

impl HttpTransport {
    pub fn new(
        base_url: impl Into<String>,
        rewrite_path: impl Into<String>,
        health_path: impl Into<String>,
    ) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.into(),
            rewrite_path: rewrite_path.into(),
            health_path: health_path.into(),
        }
    }

    pub fn from_settings(settings: &ClientSettings) -> Self {
        Self::new(
            settings.base_url.clone(),
            settings.rewrite_path.clone(),
            settings.health_path.clone(),
        )
    }

    pub fn rewrite_url(&self) -> String {
        join_url(&self.base_url, &self.rewrite_path)
    }

    pub fn health_url(&self) -> String {
        join_url(&self.base_url, &self.health_path)
    }

    pub async fn health(&self) -> Result<HealthStatus, RewriteError> {
        let response = self.client.get(self.health_url()).send().await?;
        let raw = read_raw(response).await?;
        if !raw.is_success() {
            return Err(failure_from(&raw));
        }
        Ok(serde_json::from_str(&raw.body)?)
    }
}

#[async_trait]
impl RewriteTransport for HttpTransport {
    fn display_name(&self) -> String {
        self.rewrite_url()
    }

    async fn post_rewrite(&self, request: &RewriteRequest) -> Result<RawResponse, RewriteError> {
        // `.json()` sets `Content-Type: application/json`.
        let response = self
            .client
            .post(self.rewrite_url())
            .json(request)
            .send()
            .await?;
        read_raw(response).await
    }
}

async fn read_raw(response: reqwest::Response) -> Result<RawResponse, RewriteError> {
    let status = response.status().as_u16();
    let content_type = response
        .headers()
        .get(CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .map(str::to_owned);
    let body = response.text().await?;
    Ok(RawResponse {
        status,
        content_type,
        body,
    })
}

fn join_url(base: &str, path: &str) -> String {
    format!(
        "{}/{}",
        base.trim_end_matches('/'),
        path.trim_start_matches('/')
    )
}

/// Turns a raw response into the rendered payload or the error to surface.
pub fn decode_rewrite(raw: &RawResponse) -> Result<RewriteResponse, RewriteError> {
    if !raw.is_success() {
        return Err(failure_from(raw));
    }
    if !raw.is_json() {
        return Err(RewriteError::NonJson);
    }

    let response: RewriteResponse = serde_json::from_str(&raw.body)?;
    if response.duration < 0.0 {
        return Err(RewriteError::InvalidBody(format!(
            "duration must be non-negative, got {}",
            response.duration
        )));
    }
    Ok(response)
}

fn failure_from(raw: &RawResponse) -> RewriteError {
    if !raw.is_json() {
        return RewriteError::server_text(&raw.body);
    }
    match serde_json::from_str::<ErrorBody>(&raw.body) {
        Ok(ErrorBody {
            detail: Some(detail),
        }) => RewriteError::Detail(detail),
        Ok(_) => RewriteError::Detail(GENERIC_FAILURE.to_string()),
        Err(err) => err.into(),
    }
}
