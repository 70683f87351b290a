use super::RepositoryClient;
use crate::{
    client::{PaginationOptions, Response, Result},
    Collaborator,
};
use serde::Serialize;

#[derive(Debug, Default, Serialize)]
pub struct ListCollaboratorsOptions {
    #[serde(flatten)]
    pub pagination_options: PaginationOptions,
}

// Implementation of the collaborators endpoints
// https://gitee.com/api/v5/swagger#/getV5ReposOwnerRepoCollaborators
impl RepositoryClient<'_> {
    /// List the collaborators of a repository
    ///
    /// Gitee API docs: https://gitee.com/api/v5/swagger#/getV5ReposOwnerRepoCollaborators
    pub async fn list_collaborators(
        &self,
        owner: &str,
        repo: &str,
        options: ListCollaboratorsOptions,
    ) -> Result<Response<Vec<Collaborator>>> {
        let url = format!("repos/{}/{}/collaborators", owner, repo);
        let response = self.inner.get(&url).query(&options).send().await?;

        self.inner.json(response).await
    }

    /// Check if a user is a collaborator
    ///
    /// Gitee API docs: https://gitee.com/api/v5/swagger#/getV5ReposOwnerRepoCollaboratorsUsername
    pub async fn is_collaborator(
        &self,
        owner: &str,
        repo: &str,
        user: &str,
    ) -> Result<Response<bool>> {
        let url = format!("repos/{}/{}/collaborators/{}", owner, repo, user);
        let response = self.inner.get(&url).send().await?;

        self.inner.boolean(response).await
    }

    /// Add a user as a collaborator. The permission can be one of pull, push
    /// or admin, defaulting to push when not given.
    ///
    /// Gitee API docs: https://gitee.com/api/v5/swagger#/putV5ReposOwnerRepoCollaboratorsUsername
    pub async fn add_collaborator(
        &self,
        owner: &str,
        repo: &str,
        user: &str,
        permission: Option<&str>,
    ) -> Result<Response<()>> {
        #[derive(Debug, Serialize)]
        struct AddCollaboratorRequest<'a> {
            #[serde(skip_serializing_if = "Option::is_none")]
            permission: Option<&'a str>,
        }

        let request = AddCollaboratorRequest { permission };
        let url = format!("repos/{}/{}/collaborators/{}", owner, repo, user);
        let response = self.inner.put(&url).json(&request).send().await?;

        self.inner.empty(response).await
    }

    /// Remove a collaborator
    ///
    /// Gitee API docs: https://gitee.com/api/v5/swagger#/deleteV5ReposOwnerRepoCollaboratorsUsername
    pub async fn remove_collaborator(
        &self,
        owner: &str,
        repo: &str,
        user: &str,
    ) -> Result<Response<()>> {
        let url = format!("repos/{}/{}/collaborators/{}", owner, repo, user);
        let response = self.inner.delete(&url).send().await?;

        self.inner.empty(response).await
    }
}
