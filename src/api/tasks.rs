//! Task Calls

use reqwest::Method;

use super::{encode_component as enc, with_query, ApiClient};
use crate::error::ApiResult;
use crate::models::{NewTask, Task, TaskUpdate};

fn tasks_path(project_id: &str) -> String {
    format!("/projects/{}/tasks", enc(project_id))
}

fn task_path(project_id: &str, task_id: &str) -> String {
    format!("{}/{}", tasks_path(project_id), enc(task_id))
}

impl ApiClient {
    /// Have the backend break an objective down into new tasks
    pub async fn generate_tasks(
        &self,
        project_id: &str,
        objective: &str,
        due_date: Option<&str>,
    ) -> ApiResult<Vec<Task>> {
        let path = with_query(
            format!("{}/generate", tasks_path(project_id)),
            &[("objective", Some(objective)), ("due_date", due_date)],
        );
        let request = self.request(Method::POST, &path)?;
        self.fetch_json(request, "Failed to generate tasks").await
    }

    /// Tasks of a project, optionally filtered by a title/description search
    pub async fn get_tasks(&self, project_id: &str, search: Option<&str>) -> ApiResult<Vec<Task>> {
        let path = with_query(tasks_path(project_id), &[("search_query", search)]);
        let request = self.request(Method::GET, &path)?;
        self.fetch_json(request, "Failed to fetch tasks").await
    }

    pub async fn create_task(&self, project_id: &str, task: &NewTask) -> ApiResult<Task> {
        let request = self
            .request(Method::POST, &tasks_path(project_id))?
            .json(task);
        self.fetch_json(request, "Failed to create task").await
    }

    pub async fn get_task(&self, project_id: &str, task_id: &str) -> ApiResult<Task> {
        let request = self.request(Method::GET, &task_path(project_id, task_id))?;
        self.fetch_json(request, "Failed to fetch task").await
    }

    pub async fn update_task(
        &self,
        project_id: &str,
        task_id: &str,
        update: &TaskUpdate,
    ) -> ApiResult<Task> {
        let request = self
            .request(Method::PUT, &task_path(project_id, task_id))?
            .json(update);
        self.fetch_json(request, "Failed to update task").await
    }

    pub async fn delete_task(&self, project_id: &str, task_id: &str) -> ApiResult<()> {
        let request = self.request(Method::DELETE, &task_path(project_id, task_id))?;
        self.fetch_empty(request, "Failed to delete task").await
    }

    /// Assign the task to the signed-in user
    pub async fn assign_task(&self, project_id: &str, task_id: &str) -> ApiResult<Task> {
        let path = format!("{}/assign", task_path(project_id, task_id));
        let request = self.request(Method::POST, &path)?;
        self.fetch_json(request, "Failed to assign task").await
    }
}
