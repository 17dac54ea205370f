use std::time::Duration;

use bookey_logging::{bookey_debug, bookey_warn};
use futures_util::StreamExt;
use reqwest::header::{ACCEPT, CONTENT_TYPE};
use reqwest::Url;
use serde::de::DeserializeOwned;

use crate::{CreatePreviewRequest, FailureKind, PreviewPayload, ServiceError};

pub const DEFAULT_BASE_URL: &str = "http://localhost:3000";

const LIST_PATH: &str = "data";
const CREATE_PATH: &str = "link-preview";

#[derive(Debug, Clone)]
pub struct ServiceSettings {
    pub base_url: Url,
    pub connect_timeout: Duration,
    pub request_timeout: Duration,
    pub max_bytes: u64,
}

impl ServiceSettings {
    pub fn new(base_url: &str) -> Result<Self, ServiceError> {
        let base_url = Url::parse(base_url)
            .map_err(|err| ServiceError::new(FailureKind::InvalidUrl, err.to_string()))?;
        if base_url.cannot_be_a_base() {
            return Err(ServiceError::new(
                FailureKind::InvalidUrl,
                format!("{base_url} cannot be used as a base url"),
            ));
        }
        Ok(Self {
            base_url,
            ..Self::default()
        })
    }

    /// Joins `path` onto the base url, keeping any path prefix the base has.
    fn endpoint(&self, path: &str) -> Result<Url, ServiceError> {
        let mut base = self.base_url.clone();
        if !base.path().ends_with('/') {
            let with_slash = format!("{}/", base.path());
            base.set_path(&with_slash);
        }
        base.join(path)
            .map_err(|err| ServiceError::new(FailureKind::InvalidUrl, err.to_string()))
    }
}

impl Default for ServiceSettings {
    fn default() -> Self {
        Self {
            base_url: Url::parse(DEFAULT_BASE_URL).expect("default base url is valid"),
            connect_timeout: Duration::from_secs(10),
            request_timeout: Duration::from_secs(30),
            max_bytes: 8 * 1024 * 1024,
        }
    }
}

/// The remote preview service.
#[async_trait::async_trait]
pub trait PreviewService: Send + Sync {
    /// `GET /data`: every saved preview, in service order.
    async fn list_previews(&self) -> Result<Vec<PreviewPayload>, ServiceError>;

    /// `POST /link-preview`: builds and stores a preview for `url`.
    async fn create_preview(&self, url: &str) -> Result<PreviewPayload, ServiceError>;
}

#[derive(Debug, Clone)]
pub struct ReqwestPreviewService {
    settings: ServiceSettings,
    client: reqwest::Client,
}

impl ReqwestPreviewService {
    pub fn new(settings: ServiceSettings) -> Result<Self, ServiceError> {
        let client = reqwest::Client::builder()
            .connect_timeout(settings.connect_timeout)
            .timeout(settings.request_timeout)
            .build()
            .map_err(|err| ServiceError::new(FailureKind::Network, err.to_string()))?;
        Ok(Self { settings, client })
    }

    pub fn settings(&self) -> &ServiceSettings {
        &self.settings
    }

    async fn read_json<T: DeserializeOwned>(
        &self,
        response: reqwest::Response,
    ) -> Result<T, ServiceError> {
        let status = response.status();
        if !status.is_success() {
            // The error body is not inspected.
            return Err(ServiceError::new(
                FailureKind::HttpStatus(status.as_u16()),
                status.to_string(),
            ));
        }

        let max_bytes = self.settings.max_bytes;
        if let Some(content_len) = response.content_length() {
            if content_len > max_bytes {
                return Err(too_large(max_bytes, Some(content_len)));
            }
        }

        let mut bytes = Vec::new();
        let mut stream = response.bytes_stream();
        while let Some(chunk) = stream.next().await {
            let chunk = chunk.map_err(map_reqwest_error)?;
            let next_len = bytes.len() as u64 + chunk.len() as u64;
            if next_len > max_bytes {
                return Err(too_large(max_bytes, Some(next_len)));
            }
            bytes.extend_from_slice(&chunk);
        }

        serde_json::from_slice(&bytes).map_err(|err| {
            bookey_warn!("Undecodable response body ({} bytes): {}", bytes.len(), err);
            ServiceError::new(FailureKind::Decode, err.to_string())
        })
    }
}

#[async_trait::async_trait]
impl PreviewService for ReqwestPreviewService {
    async fn list_previews(&self) -> Result<Vec<PreviewPayload>, ServiceError> {
        let endpoint = self.settings.endpoint(LIST_PATH)?;
        bookey_debug!("GET {}", endpoint);
        let response = self
            .client
            .get(endpoint)
            .header(ACCEPT, "application/json")
            .send()
            .await
            .map_err(map_reqwest_error)?;
        self.read_json(response).await
    }

    async fn create_preview(&self, url: &str) -> Result<PreviewPayload, ServiceError> {
        let endpoint = self.settings.endpoint(CREATE_PATH)?;
        let body = serde_json::to_vec(&CreatePreviewRequest { url })
            .map_err(|err| ServiceError::new(FailureKind::Decode, err.to_string()))?;
        bookey_debug!("POST {} url_len={}", endpoint, url.len());
        let response = self
            .client
            .post(endpoint)
            .header(CONTENT_TYPE, "application/json")
            .header(ACCEPT, "application/json")
            .body(body)
            .send()
            .await
            .map_err(map_reqwest_error)?;
        self.read_json(response).await
    }
}

fn too_large(max_bytes: u64, actual: Option<u64>) -> ServiceError {
    ServiceError::new(
        FailureKind::TooLarge { max_bytes, actual },
        "response too large",
    )
}

fn map_reqwest_error(err: reqwest::Error) -> ServiceError {
    if err.is_timeout() {
        return ServiceError::new(FailureKind::Timeout, err.to_string());
    }
    if err.is_decode() {
        return ServiceError::new(FailureKind::Decode, err.to_string());
    }
    ServiceError::new(FailureKind::Network, err.to_string())
}
