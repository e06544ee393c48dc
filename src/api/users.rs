//! User Calls

use reqwest::Method;

use super::ApiClient;
use crate::error::ApiResult;
use crate::models::User;

impl ApiClient {
    pub async fn get_users(&self) -> ApiResult<Vec<User>> {
        let request = self.request(Method::GET, "/users")?;
        self.fetch_json(request, "Failed to fetch users").await
    }
}
