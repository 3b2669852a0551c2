//! PMS image upload client
//!
//! Same bearer-token pattern as the main client but pointed at the PMS
//! service. Any non-2xx response is an upload failure; the caller reverts
//! to its prior image.

use async_trait::async_trait;
use reqwest::multipart;
use serde::Deserialize;
use std::sync::RwLock;

use crate::api::UploadApi;
use crate::{ClientConfig, ClientResult};
use shared::error::UploadError;

#[derive(Debug, Deserialize)]
struct UploadedImage {
    url: String,
}

#[derive(Debug, Deserialize)]
struct UploadResponse {
    #[serde(default)]
    images: Vec<UploadedImage>,
}

/// Client for `POST /upload/images` on the PMS service.
#[derive(Debug)]
pub struct PmsClient {
    client: reqwest::Client,
    base_url: String,
    token: RwLock<Option<String>>,
}

impl PmsClient {
    pub fn new(config: &ClientConfig) -> ClientResult<Self> {
        let client = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout))
            .build()?;

        Ok(Self {
            client,
            base_url: config.pms_url.trim_end_matches('/').to_string(),
            token: RwLock::new(None),
        })
    }

    pub fn set_token(&self, token: Option<String>) {
        *self.token.write().expect("token lock poisoned") = token;
    }
}

#[async_trait]
impl UploadApi for PmsClient {
    async fn upload_image(&self, filename: &str, bytes: Vec<u8>) -> Result<String, UploadError> {
        let part = multipart::Part::bytes(bytes).file_name(filename.to_string());
        let form = multipart::Form::new().part("files", part);

        let mut request = self
            .client
            .post(format!("{}/upload/images", self.base_url))
            .multipart(form);

        if let Some(token) = self.token.read().expect("token lock poisoned").clone() {
            request = request.header(
                reqwest::header::AUTHORIZATION,
                format!("Bearer {}", token),
            );
        }

        let response = request
            .send()
            .await
            .map_err(|e| UploadError::Failed(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            tracing::warn!(status = %status, "Image upload rejected");
            return Err(UploadError::Failed(format!("HTTP {}", status)));
        }

        let data: UploadResponse = response
            .json()
            .await
            .map_err(|e| UploadError::Failed(e.to_string()))?;

        data.images
            .into_iter()
            .next()
            .map(|img| img.url)
            .ok_or(UploadError::MissingUrl)
    }
}
