//! Blocking client for the dbdraw web service.

use eyre::{Context, Result, eyre};
use reqwest::blocking::{Client, Response};
use serde::{Deserialize, de::DeserializeOwned};
use serde_json::{Value, json};

/// Service used when neither `--api-url` nor `DBDRAW_API_URL` is set.
pub const DEFAULT_API_URL: &str = "https://dbdraw.vercel.app";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct User {
    pub username: String,
}

/// A project as listed for the signed-in user.
#[derive(Debug, Clone, Deserialize)]
pub struct ProjectSummary {
    #[serde(rename = "_id")]
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub flow: Option<Value>,
}

impl ProjectSummary {
    /// Label shown in the project picker.
    pub fn label(&self) -> String {
        format!("{} (ID: {})", self.title, self.id)
    }
}

/// A project with its schema graph.
#[derive(Debug, Clone, Deserialize)]
pub struct Project {
    pub title: String,
    pub flow: Value,
}

#[derive(Debug, Deserialize)]
struct TokenResponse {
    valid: bool,
    #[serde(default)]
    user: Option<User>,
}

#[derive(Debug, Deserialize)]
struct ProjectsResponse {
    valid: bool,
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    projects: Vec<ProjectSummary>,
}

#[derive(Debug, Deserialize)]
struct ProjectResponse {
    valid: bool,
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    project: Option<Project>,
}

pub struct ApiClient {
    client: Client,
    base_url: String,
}

impl ApiClient {
    pub fn new(base_url: &str) -> Result<Self> {
        let client = Client::builder()
            .user_agent(concat!("dbdraw/", env!("CARGO_PKG_VERSION")))
            .build()
            .wrap_err("Failed to create HTTP client")?;
        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Checks an access token.
    ///
    /// Returns `None` when the service rejects the token.
    pub fn validate_token(&self, token: &str) -> Result<Option<User>> {
        let url = self.url("/api/token/validate");
        tracing::debug!(%url, "validating token");

        let response = self
            .client
            .post(&url)
            .json(&json!({ "token": token }))
            .send()
            .wrap_err("Could not reach the dbdraw service")?;

        if !response.status().is_success() {
            tracing::debug!(status = %response.status(), "token rejected");
            return Ok(None);
        }

        let body: TokenResponse = decode(response)?;
        Ok(body.valid.then_some(body.user).flatten())
    }

    /// Projects owned by the token's user.
    pub fn list_projects(&self, token: &str) -> Result<Vec<ProjectSummary>> {
        let url = self.url("/api/token/validate/projects");
        tracing::debug!(%url, "listing projects");

        let response = self
            .client
            .get(&url)
            .bearer_auth(token)
            .send()
            .wrap_err("Failed to fetch projects")?;
        let body: ProjectsResponse = decode(response)?;

        if !body.valid {
            return Err(rejected(body.message, "Failed to fetch projects"));
        }
        Ok(body.projects)
    }

    /// A single project with its graph, by prefixed project id.
    pub fn fetch_project(&self, token: &str, project_id: &str) -> Result<Project> {
        let url = self.url("/api/token/validate/projects");
        tracing::debug!(%url, project = project_id, "fetching project");

        let response = self
            .client
            .post(&url)
            .bearer_auth(token)
            .json(&json!({ "project": project_id }))
            .send()
            .wrap_err("Failed to sync the project")?;
        let body: ProjectResponse = decode(response)?;

        match body {
            ProjectResponse {
                valid: true,
                project: Some(project),
                ..
            } => Ok(project),
            ProjectResponse { message, .. } => Err(rejected(message, "Failed to sync the project")),
        }
    }
}

/// Decodes a JSON body; error bodies still carry a `message`.
fn decode<T: DeserializeOwned>(response: Response) -> Result<T> {
    let status = response.status();
    response
        .json()
        .wrap_err_with(|| format!("Unexpected response from the dbdraw service ({})", status))
}

fn rejected(message: Option<String>, fallback: &str) -> eyre::Report {
    eyre!(message.unwrap_or_else(|| fallback.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_url_without_trailing_slash() {
        let api = ApiClient::new("http://localhost:3000/").unwrap();
        assert_eq!(
            api.url("/api/token/validate"),
            "http://localhost:3000/api/token/validate"
        );
    }

    #[test]
    fn test_decode_projects_listing() {
        let body: ProjectsResponse = serde_json::from_value(json!({
            "valid": true,
            "projects": [
                { "_id": "65f1c2d3e4a5b6c7d8e9f001", "title": "Shop", "flow": { "nodes": [], "edges": [] } },
                { "_id": "65f1c2d3e4a5b6c7d8e9f002", "title": "Blog" }
            ]
        }))
        .unwrap();

        assert!(body.valid);
        assert_eq!(body.projects.len(), 2);
        assert_eq!(body.projects[0].label(), "Shop (ID: 65f1c2d3e4a5b6c7d8e9f001)");
        assert!(body.projects[1].flow.is_none());
    }

    #[test]
    fn test_rejection_uses_service_message() {
        let body: ProjectResponse =
            serde_json::from_value(json!({ "valid": false, "message": "Project not found" }))
                .unwrap();

        assert!(!body.valid);
        assert_eq!(
            rejected(body.message, "fallback").to_string(),
            "Project not found"
        );
        assert_eq!(rejected(None, "fallback").to_string(), "fallback");
    }
}
