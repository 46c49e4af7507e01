use crate::ports::outbound::{QuestionReply, QuestionService, ScanService, SourceFile};
use crate::shared::error::ScanError;
use crate::shared::Result;
use anyhow::Context;
use async_trait::async_trait;
use reqwest::multipart::{Form, Part};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Error body the backend sends with non-2xx statuses
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct ErrorBody {
    error: Option<String>,
    message: Option<String>,
}

impl ErrorBody {
    /// `error` wins over `message`; unparseable bodies fall back to a fixed text
    fn message_from(body: &str) -> String {
        let parsed: ErrorBody = serde_json::from_str(body).unwrap_or_default();
        parsed
            .error
            .or(parsed.message)
            .unwrap_or_else(|| "Unknown error".to_string())
    }
}

#[derive(Serialize)]
struct DeepAnalysisRequest<'a> {
    code: &'a str,
}

#[derive(Serialize)]
struct QuestionRequest<'a> {
    query: &'a str,
}

/// ScannerClient adapter for the vulnerability scanner backend
///
/// Implements both the ScanService and QuestionService ports over HTTP/JSON.
/// Only the connection phase is bounded; scans and answers can take as long
/// as the backend's model needs.
pub struct ScannerClient {
    client: reqwest::Client,
    base_url: String,
}

impl ScannerClient {
    const CONNECT_TIMEOUT_SECONDS: u64 = 10;

    pub fn new(base_url: &str) -> Result<Self> {
        let version = env!("CARGO_PKG_VERSION");
        let user_agent = format!("vulnscope/{}", version);
        let client = reqwest::Client::builder()
            .connect_timeout(Duration::from_secs(Self::CONNECT_TIMEOUT_SECONDS))
            .user_agent(user_agent)
            .build()?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn unreachable(&self, error: reqwest::Error) -> anyhow::Error {
        ScanError::ServerUnreachable {
            url: self.base_url.clone(),
            details: error.to_string(),
        }
        .into()
    }

    /// Reads the body of a response, turning non-2xx statuses into `ServerError`
    async fn success_body(&self, response: reqwest::Response) -> Result<String> {
        let status = response.status();
        let body = response.text().await.map_err(|e| self.unreachable(e))?;

        if !status.is_success() {
            tracing::debug!(%status, body = %body, "scanner returned an error status");
            return Err(ScanError::ServerError {
                status: status.as_u16(),
                message: ErrorBody::message_from(&body),
            }
            .into());
        }
        Ok(body)
    }
}

#[async_trait]
impl ScanService for ScannerClient {
    async fn check_connection(&self) -> bool {
        match self.client.get(self.endpoint("/test")).send().await {
            Ok(response) => response.status().is_success(),
            Err(e) => {
                tracing::debug!(error = %e, "liveness probe could not reach the scanner");
                false
            }
        }
    }

    async fn upload(&self, file: &SourceFile) -> Result<String> {
        let part = Part::bytes(file.content.clone()).file_name(file.file_name.clone());
        let form = Form::new().part("file", part);

        tracing::debug!(file = %file.file_name, "uploading file to scanner");
        let response = self
            .client
            .post(self.endpoint("/upload"))
            .multipart(form)
            .send()
            .await
            .map_err(|e| self.unreachable(e))?;

        self.success_body(response).await
    }

    async fn deep_analysis(&self, code: &str) -> Result<serde_json::Value> {
        let response = self
            .client
            .post(self.endpoint("/deep_analysis"))
            .json(&DeepAnalysisRequest { code })
            .send()
            .await
            .map_err(|e| self.unreachable(e))?;

        let body = self.success_body(response).await?;
        serde_json::from_str(&body).context("Scanner returned an unreadable deep analysis result")
    }
}

#[async_trait]
impl QuestionService for ScannerClient {
    /// Error statuses whose body still carries an `error` field count as
    /// backend-reported errors; every other non-2xx reply is a failure.
    async fn ask(&self, query: &str) -> Result<QuestionReply> {
        let response = self
            .client
            .post(self.endpoint("/rag_explanation"))
            .json(&QuestionRequest { query })
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;
        let reply: Option<QuestionReply> = serde_json::from_str(&body).ok();

        match reply {
            Some(reply) if status.is_success() => Ok(reply),
            Some(reply @ QuestionReply { error: Some(_), .. }) => Ok(reply),
            _ if status.is_success() => {
                anyhow::bail!("Question service returned an unreadable reply")
            }
            _ => anyhow::bail!("Question service returned status code {}", status),
        }
    }
}
