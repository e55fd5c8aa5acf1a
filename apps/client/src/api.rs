use async_trait::async_trait;
use serde_json::Value;
use thiserror::Error;
use uuid::Uuid;

use crate::types::{NewProject, Profile, Project, ProjectPatch, Skill};

#[derive(Debug, Error)]
pub enum ClientError {
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("api error ({status}): {message}")]
    Api { status: u16, message: String },
}

/// Everything the views need from the backend. A trait so the state
/// machine can be exercised against an in-memory implementation.
#[async_trait]
pub trait PortfolioApi: Send + Sync {
    async fn list_projects(
        &self,
        q: Option<&str>,
        skills: Option<&str>,
    ) -> Result<Vec<Project>, ClientError>;

    async fn create_project(&self, project: &NewProject) -> Result<Project, ClientError>;

    /// `None` means the identity was unknown server-side; the API responds
    /// with a JSON `null` body, not an error.
    async fn update_project(
        &self,
        id: Uuid,
        patch: &ProjectPatch,
    ) -> Result<Option<Project>, ClientError>;

    /// Idempotent; deleting an unknown identity succeeds.
    async fn delete_project(&self, id: Uuid) -> Result<(), ClientError>;

    async fn list_skills(&self) -> Result<Vec<Skill>, ClientError>;

    async fn get_profile(&self) -> Result<Option<Profile>, ClientError>;
}

/// HTTP transport backed by reqwest.
pub struct HttpPortfolioApi {
    http: reqwest::Client,
    base_url: String,
}

impl HttpPortfolioApi {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            http: reqwest::Client::new(),
            base_url,
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Maps non-success responses to `ClientError::Api`, pulling the
    /// message out of the server's `{"error":{code,message}}` body.
    async fn check(response: reqwest::Response) -> Result<reqwest::Response, ClientError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        let message = match response.json::<Value>().await {
            Ok(body) => body
                .pointer("/error/message")
                .and_then(Value::as_str)
                .unwrap_or("unknown error")
                .to_string(),
            Err(_) => "unknown error".to_string(),
        };
        Err(ClientError::Api {
            status: status.as_u16(),
            message,
        })
    }
}

#[async_trait]
impl PortfolioApi for HttpPortfolioApi {
    async fn list_projects(
        &self,
        q: Option<&str>,
        skills: Option<&str>,
    ) -> Result<Vec<Project>, ClientError> {
        let mut request = self.http.get(self.url("/api/projects"));
        if let Some(term) = q {
            request = request.query(&[("q", term)]);
        }
        if let Some(term) = skills {
            request = request.query(&[("skills", term)]);
        }
        let response = Self::check(request.send().await?).await?;
        Ok(response.json().await?)
    }

    async fn create_project(&self, project: &NewProject) -> Result<Project, ClientError> {
        let response = self
            .http
            .post(self.url("/api/projects"))
            .json(project)
            .send()
            .await?;
        Ok(Self::check(response).await?.json().await?)
    }

    async fn update_project(
        &self,
        id: Uuid,
        patch: &ProjectPatch,
    ) -> Result<Option<Project>, ClientError> {
        let response = self
            .http
            .put(self.url(&format!("/api/projects/{id}")))
            .json(patch)
            .send()
            .await?;
        Ok(Self::check(response).await?.json().await?)
    }

    async fn delete_project(&self, id: Uuid) -> Result<(), ClientError> {
        let response = self
            .http
            .delete(self.url(&format!("/api/projects/{id}")))
            .send()
            .await?;
        Self::check(response).await?;
        Ok(())
    }

    async fn list_skills(&self) -> Result<Vec<Skill>, ClientError> {
        let response = self.http.get(self.url("/api/skills")).send().await?;
        Ok(Self::check(response).await?.json().await?)
    }

    async fn get_profile(&self) -> Result<Option<Profile>, ClientError> {
        let response = self.http.get(self.url("/api/profile")).send().await?;
        Ok(Self::check(response).await?.json().await?)
    }
}
