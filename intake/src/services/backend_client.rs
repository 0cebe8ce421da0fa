//! HTTP implementation of the scoring backend boundary

use async_trait::async_trait;
use reqwest::multipart::{Form, Part};
use tracing::{debug, warn};

use crate::config::ClientConfig;
use crate::error::{IntakeError, IntakeResult};
use crate::traits::BackendApi;
use crate::types::TranscriptFile;
use shared::{
    CourseGroup, ParseTranscriptResponse, RecommendationRequest, RecommendationResponse,
    COMPLETED_COURSES_FIELD, DEPARTMENT_FIELD, PARSE_TRANSCRIPT_PATH, PDF_MIME, PREFERENCES_FIELD,
    RECOMMENDATIONS_PATH, TRANSCRIPT_FIELD,
};

/// Real backend client over reqwest. The base URL and timeout come from
/// injected configuration; a request that exceeds the timeout fails as a
/// connection error instead of loading forever.
pub struct HttpBackendClient {
    client: reqwest::Client,
    base_url: String,
}

impl HttpBackendClient {
    pub fn new(config: &ClientConfig) -> IntakeResult<Self> {
        let client = reqwest::Client::builder()
            .timeout(config.request_timeout)
            .build()
            .map_err(|e| IntakeError::Config {
                message: format!("failed to build HTTP client: {e}"),
            })?;

        Ok(Self {
            client,
            base_url: config.api_base_url.trim_end_matches('/').to_string(),
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn post_form<T>(&self, path: &str, form: Form) -> IntakeResult<(bool, T)>
    where
        T: serde::de::DeserializeOwned,
    {
        let response = self
            .client
            .post(self.url(path))
            .multipart(form)
            .send()
            .await
            .map_err(connection_error)?;

        let status = response.status();
        debug!(%status, path, "backend responded");

        let body = response.bytes().await.map_err(connection_error)?;
        match serde_json::from_slice(&body) {
            Ok(payload) => Ok((status.is_success(), payload)),
            Err(e) => {
                warn!(path, "unparseable backend response: {e}");
                Err(IntakeError::malformed_response())
            }
        }
    }
}

#[async_trait]
impl BackendApi for HttpBackendClient {
    async fn parse_transcript(&self, transcript: &TranscriptFile) -> IntakeResult<Vec<String>> {
        let part = Part::bytes(transcript.bytes.clone())
            .file_name(transcript.name.clone())
            .mime_str(PDF_MIME)
            .map_err(|e| IntakeError::InvalidFile {
                message: e.to_string(),
            })?;
        let form = Form::new().part(TRANSCRIPT_FIELD, part);

        let (ok, payload): (bool, ParseTranscriptResponse) =
            self.post_form(PARSE_TRANSCRIPT_PATH, form).await?;

        match payload.courses {
            Some(courses) if ok => Ok(courses),
            _ => Err(backend_error(payload.error)),
        }
    }

    async fn recommendations(
        &self,
        request: &RecommendationRequest,
    ) -> IntakeResult<Vec<CourseGroup>> {
        let form = Form::new()
            .text(COMPLETED_COURSES_FIELD, request.completed_courses_json()?)
            .text(DEPARTMENT_FIELD, request.department.as_str())
            .text(PREFERENCES_FIELD, request.preferences_json()?);

        let (ok, payload): (bool, RecommendationResponse) =
            self.post_form(RECOMMENDATIONS_PATH, form).await?;

        if !ok || !payload.success {
            return Err(backend_error(payload.error));
        }
        Ok(payload.recommendations)
    }
}

fn connection_error(e: reqwest::Error) -> IntakeError {
    IntakeError::Connection {
        message: e.to_string(),
    }
}

/// Backend-reported failure, surfaced verbatim when a message exists
fn backend_error(error: Option<String>) -> IntakeError {
    match error {
        Some(message) => IntakeError::Backend { message },
        None => IntakeError::malformed_response(),
    }
}
