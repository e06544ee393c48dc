//! Project Calls
//!
//! Project CRUD, the derived task summary and the two natural-language
//! endpoints, which answer with plain text.

use reqwest::Method;

use super::{encode_component as enc, ApiClient};
use crate::error::ApiResult;
use crate::models::{NewProject, Project, ProjectSummary, Question};

impl ApiClient {
    pub async fn create_project(
        &self,
        name: &str,
        description: &str,
        organization_id: Option<&str>,
    ) -> ApiResult<Project> {
        let body = NewProject {
            name: name.to_string(),
            description: description.to_string(),
            organization_id: organization_id.map(str::to_string),
        };
        let request = self.request(Method::POST, "/projects")?.json(&body);
        self.fetch_json(request, "Failed to create project").await
    }

    pub async fn get_projects(&self) -> ApiResult<Vec<Project>> {
        let request = self.request(Method::GET, "/projects")?;
        self.fetch_json(request, "Failed to fetch projects").await
    }

    pub async fn get_project(&self, project_id: &str) -> ApiResult<Project> {
        let path = format!("/projects/{}", enc(project_id));
        let request = self.request(Method::GET, &path)?;
        self.fetch_json(request, "Failed to fetch project").await
    }

    pub async fn delete_project(&self, project_id: &str) -> ApiResult<()> {
        let path = format!("/projects/{}", enc(project_id));
        let request = self.request(Method::DELETE, &path)?;
        self.fetch_empty(request, "Failed to delete project").await
    }

    pub async fn get_project_summary(&self, project_id: &str) -> ApiResult<ProjectSummary> {
        let path = format!("/projects/{}/summary", enc(project_id));
        let request = self.request(Method::GET, &path)?;
        self.fetch_json(request, "Failed to fetch project summary").await
    }

    /// AI-written status summary, returned as-is
    pub async fn get_ai_summary(&self, project_id: &str) -> ApiResult<String> {
        let path = format!("/projects/{}/ai_summary", enc(project_id));
        let request = self.request(Method::GET, &path)?;
        self.fetch_text(request, "Failed to fetch AI summary").await
    }

    /// Ask a free-form question about the project
    pub async fn ask_question(&self, project_id: &str, question: &str) -> ApiResult<String> {
        let path = format!("/projects/{}/ask", enc(project_id));
        let body = Question {
            question: question.to_string(),
        };
        let request = self.request(Method::POST, &path)?.json(&body);
        self.fetch_text(request, "Failed to get answer").await
    }
}
