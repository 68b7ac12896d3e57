//! Render-request client for realistic bouquet photos
//!
//! Hands a chosen scheme to the external image-generation service. Any
//! transport failure, non-success status, or malformed response surfaces
//! as one [`PhotoError`]; the scheme itself stays valid and the request
//! can simply be triggered again. No retries happen here.

use std::time::Duration;

use reqwest::blocking::Client;
use serde::Deserialize;
use serde_json::json;
use thiserror::Error;

use crate::layout::Scheme;

/// Errors that can occur during a render request
#[derive(Error, Debug)]
pub enum PhotoError {
    #[error("Render request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("Render service returned {status}: {message}")]
    Service { status: u16, message: String },
    #[error("Render service response carries no image URL")]
    MissingImageUrl,
}

impl PhotoError {
    pub fn service(status: u16, message: impl Into<String>) -> Self {
        PhotoError::Service {
            status,
            message: message.into(),
        }
    }
}

/// Build the prompt describing a scheme.
///
/// Deterministic: entries appear in snapshot order as
/// `"<count>x <display_name>"` joined by `", "`.
pub fn build_prompt(scheme: &Scheme) -> String {
    let list = scheme
        .entries
        .iter()
        .map(|e| format!("{}x {}", e.count, e.display_name))
        .collect::<Vec<_>>()
        .join(", ");
    format!(
        "A professional studio photograph of a flower bouquet containing {list}, \
         arranged in a {} arrangement, soft natural lighting, high detail",
        scheme.pattern
    )
}

/// Outcome of a completed render request
#[derive(Debug, Clone, PartialEq)]
pub struct PhotoResult {
    /// Id of the scheme the request was made for
    pub scheme_id: u32,
    pub image_url: String,
}

#[derive(Deserialize)]
struct PhotoResponse {
    #[serde(rename = "imageUrl")]
    image_url: Option<String>,
    error: Option<String>,
}

/// Blocking HTTP client for the render service
#[derive(Debug)]
pub struct PhotoClient {
    client: Client,
    endpoint: String,
}

impl PhotoClient {
    pub fn new(endpoint: impl Into<String>) -> Result<Self, PhotoError> {
        let client = Client::builder()
            .connect_timeout(Duration::from_secs(5))
            .timeout(Duration::from_secs(60))
            .build()?;
        Ok(Self {
            client,
            endpoint: endpoint.into(),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// POST the scheme and its prompt, returning the image URL on success.
    ///
    /// The service answers `{"imageUrl": ...}` on 200 and `{"error": ...}`
    /// otherwise.
    pub fn generate(&self, scheme: &Scheme) -> Result<PhotoResult, PhotoError> {
        let payload = json!({
            "prompt": build_prompt(scheme),
            "scheme": scheme,
        });

        let response = self
            .client
            .post(&self.endpoint)
            .header("Content-Type", "application/json")
            .json(&payload)
            .send()?;

        let status = response.status();
        if !status.is_success() {
            let text = response.text().unwrap_or_default();
            let message = match serde_json::from_str::<PhotoResponse>(&text) {
                Ok(PhotoResponse {
                    error: Some(error), ..
                }) => error,
                _ if text.is_empty() => "render request failed".to_string(),
                _ => text,
            };
            return Err(PhotoError::service(status.as_u16(), message));
        }

        let body: PhotoResponse = response.json()?;
        match body.image_url {
            Some(image_url) => Ok(PhotoResult {
                scheme_id: scheme.id,
                image_url,
            }),
            None => Err(PhotoError::MissingImageUrl),
        }
    }
}
