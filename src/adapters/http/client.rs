//! reqwest implementation of the assessment backend port.

use async_trait::async_trait;
use reqwest::{Client, Response};
use tracing::{debug, error};

use crate::config::BackendConfig;
use crate::domain::assessment::ResultsPayload;
use crate::domain::foundation::AssessmentSessionId;
use crate::ports::{
    AssessmentClient, ClientError, IntakeRecord, ResponseOutcome, SessionStarted,
    StartSessionRequest, SubmitResponseRequest,
};

use super::dto::{RespondResponseDto, StartResponseDto};

/// HTTP client for the GründerAI assessment backend.
pub struct HttpAssessmentClient {
    config: BackendConfig,
    client: Client,
}

impl HttpAssessmentClient {
    /// Creates a client from the backend configuration.
    pub fn new(config: BackendConfig) -> Self {
        let client = Client::builder()
            .timeout(config.timeout())
            .build()
            .expect("Failed to create HTTP client");

        Self { config, client }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.config.base_url, path)
    }

    fn map_send_error(&self, e: reqwest::Error) -> ClientError {
        if e.is_timeout() {
            ClientError::timeout(self.config.timeout_secs)
        } else if e.is_connect() {
            ClientError::connection(format!("Connection failed: {}", e))
        } else {
            ClientError::connection(e.to_string())
        }
    }

    /// Maps non-success statuses to the error taxonomy. 4xx bodies are
    /// scanned for a `detail`/`message` field so the backend's own text
    /// can be surfaced verbatim.
    async fn check_status(response: Response) -> Result<Response, ClientError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let body = response.text().await.unwrap_or_default();
        if status.is_server_error() {
            error!(status = status.as_u16(), "assessment backend unavailable");
            return Err(ClientError::unavailable(status.as_u16()));
        }

        error!(status = status.as_u16(), "assessment backend rejected request");
        Err(ClientError::backend(
            status.as_u16(),
            extract_message(&body),
        ))
    }

    async fn parse_json<T: serde::de::DeserializeOwned>(
        response: Response,
    ) -> Result<T, ClientError> {
        response
            .json::<T>()
            .await
            .map_err(|e| ClientError::parse(e.to_string()))
    }
}

/// Pulls the human-readable message out of a 4xx error body, if present.
fn extract_message(body: &str) -> String {
    serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|v| {
            v.get("detail")
                .or_else(|| v.get("message"))
                .and_then(|m| m.as_str())
                .map(str::to_string)
        })
        .unwrap_or_default()
}

#[async_trait]
impl AssessmentClient for HttpAssessmentClient {
    async fn save_intake(&self, record: &IntakeRecord) -> Result<(), ClientError> {
        debug!(intake_id = %record.intake_id, "saving intake record");
        let response = self
            .client
            .post(self.url("/api/v1/intake"))
            .json(record)
            .send()
            .await
            .map_err(|e| self.map_send_error(e))?;

        Self::check_status(response).await?;
        Ok(())
    }

    async fn start_session(
        &self,
        request: &StartSessionRequest,
    ) -> Result<SessionStarted, ClientError> {
        debug!(category = %request.business_context.category, "starting assessment session");
        let response = self
            .client
            .post(self.url("/api/v1/assessment/start"))
            .json(request)
            .send()
            .await
            .map_err(|e| self.map_send_error(e))?;

        let response = Self::check_status(response).await?;
        let dto: StartResponseDto = Self::parse_json(response).await?;

        Ok(SessionStarted {
            session_id: AssessmentSessionId::new(dto.session_id)
                .map_err(|e| ClientError::parse(format!("session_id: {}", e)))?,
            question: dto.scenario.try_into()?,
            progress: dto.progress.map(Into::into).unwrap_or_default(),
        })
    }

    async fn submit_response(
        &self,
        request: &SubmitResponseRequest,
    ) -> Result<ResponseOutcome, ClientError> {
        debug!(
            session_id = %request.session_id,
            question_id = %request.question_id,
            "submitting assessment response"
        );
        let response = self
            .client
            .post(self.url("/api/v1/assessment/respond"))
            .json(request)
            .send()
            .await
            .map_err(|e| self.map_send_error(e))?;

        let response = Self::check_status(response).await?;
        let dto: RespondResponseDto = Self::parse_json(response).await?;

        let question = if dto.complete {
            None
        } else {
            dto.scenario.map(TryInto::try_into).transpose()?
        };

        Ok(ResponseOutcome {
            question,
            progress: dto.progress.map(Into::into).unwrap_or_default(),
        })
    }

    async fn fetch_results(
        &self,
        session_id: &AssessmentSessionId,
    ) -> Result<ResultsPayload, ClientError> {
        debug!(session_id = %session_id, "fetching assessment results");
        let response = self
            .client
            .get(self.url(&format!("/api/v1/assessment/{}/results", session_id)))
            .send()
            .await
            .map_err(|e| self.map_send_error(e))?;

        let response = Self::check_status(response).await?;
        Self::parse_json(response).await
    }
}
