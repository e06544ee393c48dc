//! Comment Calls

use reqwest::Method;

use super::{encode_component as enc, ApiClient};
use crate::error::ApiResult;
use crate::models::{Comment, NewComment};

fn comments_path(project_id: &str, task_id: &str) -> String {
    format!("/projects/{}/tasks/{}/comments", enc(project_id), enc(task_id))
}

impl ApiClient {
    /// Comments on a task, oldest first
    pub async fn get_comments(&self, project_id: &str, task_id: &str) -> ApiResult<Vec<Comment>> {
        let request = self.request(Method::GET, &comments_path(project_id, task_id))?;
        self.fetch_json(request, "Failed to fetch comments").await
    }

    pub async fn create_comment(
        &self,
        project_id: &str,
        task_id: &str,
        content: &str,
    ) -> ApiResult<Comment> {
        let body = NewComment {
            content: content.to_string(),
        };
        let request = self
            .request(Method::POST, &comments_path(project_id, task_id))?
            .json(&body);
        self.fetch_json(request, "Failed to create comment").await
    }
}
