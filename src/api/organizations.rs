//! Organization Calls
//!
//! Organization CRUD plus membership management.

use reqwest::Method;

use super::{encode_component as enc, ApiClient};
use crate::error::ApiResult;
use crate::models::{NewOrganization, Organization};

impl ApiClient {
    pub async fn create_organization(
        &self,
        name: &str,
        description: Option<&str>,
    ) -> ApiResult<Organization> {
        let body = NewOrganization {
            name: name.to_string(),
            description: description.map(str::to_string),
        };
        let request = self.request(Method::POST, "/organizations")?.json(&body);
        self.fetch_json(request, "Failed to create organization").await
    }

    /// Organizations the current user belongs to
    pub async fn get_organizations(&self) -> ApiResult<Vec<Organization>> {
        let request = self.request(Method::GET, "/organizations")?;
        self.fetch_json(request, "Failed to fetch organizations").await
    }

    pub async fn get_organization(&self, org_id: &str) -> ApiResult<Organization> {
        let path = format!("/organizations/{}", enc(org_id));
        let request = self.request(Method::GET, &path)?;
        self.fetch_json(request, "Failed to fetch organization").await
    }

    pub async fn delete_organization(&self, org_id: &str) -> ApiResult<()> {
        let path = format!("/organizations/{}", enc(org_id));
        let request = self.request(Method::DELETE, &path)?;
        self.fetch_empty(request, "Failed to delete organization").await
    }

    pub async fn add_user_to_organization(
        &self,
        org_id: &str,
        user_id: &str,
    ) -> ApiResult<Organization> {
        let path = format!("/organizations/{}/add_user/{}", enc(org_id), enc(user_id));
        let request = self.request(Method::POST, &path)?;
        self.fetch_json(request, "Failed to add user to organization").await
    }

    pub async fn remove_user_from_organization(
        &self,
        org_id: &str,
        user_id: &str,
    ) -> ApiResult<Organization> {
        let path = format!("/organizations/{}/remove_user/{}", enc(org_id), enc(user_id));
        let request = self.request(Method::DELETE, &path)?;
        self.fetch_json(request, "Failed to remove user from organization")
            .await
    }
}
