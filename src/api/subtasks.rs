//! Subtask Calls

use reqwest::Method;

use super::{encode_component as enc, with_query, ApiClient};
use crate::error::ApiResult;
use crate::models::{Subtask, SubtaskInput};

fn subtasks_path(project_id: &str, task_id: &str) -> String {
    format!("/projects/{}/tasks/{}/subtasks", enc(project_id), enc(task_id))
}

impl ApiClient {
    pub async fn get_subtasks(&self, project_id: &str, task_id: &str) -> ApiResult<Vec<Subtask>> {
        let request = self.request(Method::GET, &subtasks_path(project_id, task_id))?;
        self.fetch_json(request, "Failed to fetch subtasks").await
    }

    pub async fn create_subtask(
        &self,
        project_id: &str,
        task_id: &str,
        subtask: &SubtaskInput,
    ) -> ApiResult<Subtask> {
        let request = self
            .request(Method::POST, &subtasks_path(project_id, task_id))?
            .json(subtask);
        self.fetch_json(request, "Failed to create subtask").await
    }

    pub async fn generate_subtasks(
        &self,
        project_id: &str,
        task_id: &str,
        objective: &str,
    ) -> ApiResult<Vec<Subtask>> {
        let path = with_query(
            format!("{}/generate", subtasks_path(project_id, task_id)),
            &[("objective", Some(objective))],
        );
        let request = self.request(Method::POST, &path)?;
        self.fetch_json(request, "Failed to generate subtasks").await
    }

    pub async fn update_subtask(
        &self,
        project_id: &str,
        task_id: &str,
        subtask_id: &str,
        subtask: &SubtaskInput,
    ) -> ApiResult<Subtask> {
        let path = format!("{}/{}", subtasks_path(project_id, task_id), enc(subtask_id));
        let request = self.request(Method::PUT, &path)?.json(subtask);
        self.fetch_json(request, "Failed to update subtask").await
    }
}
