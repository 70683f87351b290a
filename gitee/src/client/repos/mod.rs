use crate::{
    client::{Client, Response, Result},
    Branch, Repository,
};
use serde::Serialize;

mod collaborators;

pub use collaborators::ListCollaboratorsOptions;

#[derive(Debug, Default, Serialize)]
pub struct CreateRepositoryRequest {
    /// The name of the repository
    pub name: String,

    /// A short description of the repository
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Either true to create a private repository or false to create a
    /// public one
    pub private: bool,

    /// Pass true to create an initial commit with an empty README
    pub auto_init: bool,

    /// Desired language or platform .gitignore template to apply,
    /// e.g. "Python"
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gitignore_template: Option<String>,

    /// Open source license template to apply, e.g. "MIT"
    #[serde(skip_serializing_if = "Option::is_none")]
    pub license_template: Option<String>,
}

// Fields left unset are not sent, leaving the corresponding repository
// settings untouched
#[derive(Debug, Default, Serialize)]
pub struct UpdateRepositoryRequest {
    /// A new name for the repository
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// A new short description of the repository
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Either true to enable issues for the repository or false to disable
    /// them
    #[serde(skip_serializing_if = "Option::is_none")]
    pub has_issues: Option<bool>,

    /// Either true to enable the wiki for the repository or false to disable
    /// it
    #[serde(skip_serializing_if = "Option::is_none")]
    pub has_wiki: Option<bool>,
}

/// `RepositoryClient` handles communication with the repository related
/// methods of the Gitee API.
///
/// Gitee API docs: https://gitee.com/api/v5/swagger#/
pub struct RepositoryClient<'a> {
    inner: &'a Client,
}

impl<'a> RepositoryClient<'a> {
    pub(super) fn new(client: &'a Client) -> Self {
        Self { inner: client }
    }

    /// Create a repository for the authenticated user
    ///
    /// Gitee API docs: https://gitee.com/api/v5/swagger#/postV5UserRepos
    pub async fn create(&self, repository: CreateRepositoryRequest) -> Result<Response<Repository>> {
        let response = self
            .inner
            .post("user/repos")
            .json(&repository)
            .send()
            .await?;

        self.inner.json(response).await
    }

    /// Get a repository
    ///
    /// Gitee API docs: https://gitee.com/api/v5/swagger#/getV5ReposOwnerRepo
    pub async fn get(&self, owner: &str, repo: &str) -> Result<Response<Repository>> {
        let url = format!("repos/{}/{}", owner, repo);
        let response = self.inner.get(&url).send().await?;

        self.inner.json(response).await
    }

    /// Update a repository's settings
    ///
    /// Gitee API docs: https://gitee.com/api/v5/swagger#/patchV5ReposOwnerRepo
    pub async fn update(
        &self,
        owner: &str,
        repo: &str,
        repository: UpdateRepositoryRequest,
    ) -> Result<Response<Repository>> {
        let url = format!("repos/{}/{}", owner, repo);
        let response = self.inner.patch(&url).json(&repository).send().await?;

        self.inner.json(response).await
    }

    /// Delete a repository
    ///
    /// Gitee API docs: https://gitee.com/api/v5/swagger#/deleteV5ReposOwnerRepo
    pub async fn delete(&self, owner: &str, repo: &str) -> Result<Response<()>> {
        let url = format!("repos/{}/{}", owner, repo);
        let response = self.inner.delete(&url).send().await?;

        self.inner.empty(response).await
    }

    /// List the branches of a repository
    ///
    /// Gitee API docs: https://gitee.com/api/v5/swagger#/getV5ReposOwnerRepoBranches
    pub async fn list_branches(&self, owner: &str, repo: &str) -> Result<Response<Vec<Branch>>> {
        let url = format!("repos/{}/{}/branches", owner, repo);
        let response = self.inner.get(&url).send().await?;

        self.inner.json(response).await
    }
}

#[cfg(test)]
mod test {
    use super::UpdateRepositoryRequest;

    #[test]
    fn unset_update_fields_are_not_sent() {
        let request = UpdateRepositoryRequest {
            description: Some("这是更新后的仓库描述".to_owned()),
            ..UpdateRepositoryRequest::default()
        };

        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "description": "这是更新后的仓库描述" })
        );
    }
}
