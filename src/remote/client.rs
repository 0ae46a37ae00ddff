//! HTTP client for the remote PII detection service

use crate::config::RemoteConfig;
use crate::domain::{RemoteError, Result, VeilError};
use crate::remote::models::{RemoteDetection, VoiceDetection};
use async_trait::async_trait;
use reqwest::{Client, ClientBuilder};
use secrecy::ExposeSecret;
use std::time::Duration;

/// Default remote call timeout; a slow detector must not stall message
/// delivery
pub const DEFAULT_TIMEOUT_SECS: u64 = 3;

/// Trait for remote PII detection implementations
///
/// The detection engine talks to the remote service through this seam so
/// tests and alternative transports can substitute their own detector.
#[async_trait]
pub trait RemoteDetector: Send + Sync {
    /// Submit text for detection
    async fn detect_text(&self, text: &str) -> Result<RemoteDetection>;

    /// Upper bound the engine applies to one detection call
    fn timeout(&self) -> Duration {
        Duration::from_secs(DEFAULT_TIMEOUT_SECS)
    }
}

/// Remote detector over HTTP
///
/// Calls `POST {base}/detect_pii` for text and `POST {base}/api/process_voice`
/// for voice payloads. All failures map onto [`RemoteError`]; third-party
/// client types never cross this boundary.
pub struct HttpDetector {
    base_url: String,
    client: Client,
    config: RemoteConfig,
}

impl HttpDetector {
    /// Create a new HTTP detector from configuration
    pub fn new(config: &RemoteConfig) -> Result<Self> {
        url::Url::parse(&config.base_url).map_err(|e| {
            VeilError::Configuration(format!(
                "Invalid remote base_url '{}': {e}",
                config.base_url
            ))
        })?;

        let client = ClientBuilder::new()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .connect_timeout(Duration::from_secs(config.timeout_seconds))
            .build()
            .map_err(|e| RemoteError::ConnectionFailed(e.to_string()))?;

        Ok(Self {
            base_url: config.base_url.trim_end_matches('/').to_string(),
            client,
            config: config.clone(),
        })
    }

    /// Submit a voice payload for transcription and detection
    ///
    /// This endpoint serves the voice pipeline collaborator; the detection
    /// engine itself only consumes the returned transcript and embedded
    /// detection payload.
    pub async fn process_voice(
        &self,
        audio: Vec<u8>,
        file_name: &str,
    ) -> Result<VoiceDetection> {
        let part = reqwest::multipart::Part::bytes(audio).file_name(file_name.to_string());
        let form = reqwest::multipart::Form::new().part("audio", part);

        let mut request = self
            .client
            .post(format!("{}/api/process_voice", self.base_url))
            .multipart(form);
        if let Some(ref key) = self.config.api_key {
            request = request.bearer_auth(key.expose_secret().as_ref());
        }

        let response = request.send().await.map_err(|e| self.map_send_error(e))?;
        let status = response.status();

        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(self.status_error(status.as_u16(), message).into());
        }

        let voice = response
            .json::<VoiceDetection>()
            .await
            .map_err(|e| RemoteError::InvalidResponse(e.to_string()))?;

        Ok(voice)
    }

    fn map_send_error(&self, error: reqwest::Error) -> RemoteError {
        if error.is_timeout() {
            RemoteError::Timeout(self.config.timeout_seconds)
        } else {
            RemoteError::ConnectionFailed(error.to_string())
        }
    }

    fn status_error(&self, status: u16, message: String) -> RemoteError {
        if status >= 500 {
            RemoteError::ServerError { status, message }
        } else {
            RemoteError::ClientError { status, message }
        }
    }
}

#[async_trait]
impl RemoteDetector for HttpDetector {
    async fn detect_text(&self, text: &str) -> Result<RemoteDetection> {
        tracing::debug!(text_len = text.len(), "Submitting text to remote detector");

        let mut request = self
            .client
            .post(format!("{}/detect_pii", self.base_url))
            .json(&serde_json::json!({ "text": text }));
        if let Some(ref key) = self.config.api_key {
            request = request.bearer_auth(key.expose_secret().as_ref());
        }

        let response = request.send().await.map_err(|e| self.map_send_error(e))?;
        let status = response.status();

        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(self.status_error(status.as_u16(), message).into());
        }

        let detection = response
            .json::<RemoteDetection>()
            .await
            .map_err(|e| RemoteError::InvalidResponse(e.to_string()))?;

        Ok(detection)
    }

    fn timeout(&self) -> Duration {
        Duration::from_secs(self.config.timeout_seconds)
    }
}
