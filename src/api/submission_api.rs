//! Submission endpoint

use std::time::Instant;

use async_trait::async_trait;
use reqwest::multipart::{Form, Part};
use tracing::{debug, info, warn};

use crate::{
    config::ApiConfig,
    constants::{endpoints, form_fields},
    error::SubmitError,
    models::{SubmissionOutcome, SubmissionPayload, SubmissionRequest},
};

/// Anything that can grade a submission
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait GradingBackend: Send + Sync {
    /// Send one submission and wait for its graded outcome
    async fn submit(&self, request: SubmissionRequest) -> Result<SubmissionOutcome, SubmitError>;
}

/// Grading backend reached over HTTP
#[derive(Debug, Clone)]
pub struct HttpGradingBackend {
    client: reqwest::Client,
    submit_url: String,
}

impl HttpGradingBackend {
    pub fn new(client: reqwest::Client, config: &ApiConfig) -> Self {
        Self {
            client,
            submit_url: config.endpoint(endpoints::SUBMIT),
        }
    }

    /// Multipart body: ids as strings plus exactly one of `code` / `codeFile`
    fn form(request: SubmissionRequest) -> Form {
        let form = Form::new()
            .text(form_fields::PROBLEM_ID, request.problem_id)
            .text(form_fields::LANGUAGE_ID, request.language_id.to_string());

        match request.payload {
            SubmissionPayload::Code(code) => form.text(form_fields::CODE, code),
            SubmissionPayload::File(file) => form.part(
                form_fields::CODE_FILE,
                Part::bytes(file.content).file_name(file.name),
            ),
        }
    }
}

#[async_trait]
impl GradingBackend for HttpGradingBackend {
    async fn submit(&self, request: SubmissionRequest) -> Result<SubmissionOutcome, SubmitError> {
        let start = Instant::now();
        let problem_id = request.problem_id.clone();

        let response = self
            .client
            .post(&self.submit_url)
            .multipart(Self::form(request))
            .send()
            .await
            .map_err(|e| {
                warn!(problem_id = %problem_id, error = %e, "Submission request failed");
                SubmitError::from(e)
            })?;

        let status = response.status();
        let duration_ms = start.elapsed().as_secs_f64() * 1000.0;

        if !status.is_success() {
            warn!(
                problem_id = %problem_id,
                status = %status.as_u16(),
                duration_ms = %format!("{:.2}", duration_ms),
                "Submission rejected by grading server"
            );
            let body = match response.text().await {
                Ok(body) => body,
                Err(e) => {
                    debug!(problem_id = %problem_id, error = %e, "Failed to read error body");
                    String::new()
                }
            };
            let message = if body.trim().is_empty() {
                status
                    .canonical_reason()
                    .unwrap_or("Unknown error")
                    .to_string()
            } else {
                body
            };
            return Err(SubmitError::Rejected {
                status: status.as_u16(),
                message,
            });
        }

        info!(
            problem_id = %problem_id,
            status = %status.as_u16(),
            duration_ms = %format!("{:.2}", duration_ms),
            "Submission graded"
        );

        let body = response.text().await?;
        SubmissionOutcome::from_json(&body).map_err(|e| SubmitError::MalformedResponse(e.to_string()))
    }
}
