use gitee::{
    client::{
        CreateRepositoryRequest, ListCollaboratorsOptions, Result, UpdateRepositoryRequest,
    },
    Branch, Collaborator, Repository,
};

/// The surface of the repository hosting service the lifecycle drives. The
/// real implementation delegates to the Gitee client; tests substitute a
/// scripted double.
#[async_trait::async_trait]
pub trait RepoHost {
    async fn create_repo(&self, repository: CreateRepositoryRequest) -> Result<Repository>;

    async fn get_repo(&self, owner: &str, repo: &str) -> Result<Repository>;

    async fn update_repo(
        &self,
        owner: &str,
        repo: &str,
        repository: UpdateRepositoryRequest,
    ) -> Result<Repository>;

    async fn list_branches(&self, owner: &str, repo: &str) -> Result<Vec<Branch>>;

    async fn list_collaborators(&self, owner: &str, repo: &str) -> Result<Vec<Collaborator>>;

    async fn delete_repo(&self, owner: &str, repo: &str) -> Result<()>;
}

#[async_trait::async_trait]
impl RepoHost for gitee::Client {
    async fn create_repo(&self, repository: CreateRepositoryRequest) -> Result<Repository> {
        Ok(self.repos().create(repository).await?.into_inner())
    }

    async fn get_repo(&self, owner: &str, repo: &str) -> Result<Repository> {
        Ok(self.repos().get(owner, repo).await?.into_inner())
    }

    async fn update_repo(
        &self,
        owner: &str,
        repo: &str,
        repository: UpdateRepositoryRequest,
    ) -> Result<Repository> {
        Ok(self.repos().update(owner, repo, repository).await?.into_inner())
    }

    async fn list_branches(&self, owner: &str, repo: &str) -> Result<Vec<Branch>> {
        Ok(self.repos().list_branches(owner, repo).await?.into_inner())
    }

    async fn list_collaborators(&self, owner: &str, repo: &str) -> Result<Vec<Collaborator>> {
        Ok(self
            .repos()
            .list_collaborators(owner, repo, ListCollaboratorsOptions::default())
            .await?
            .into_inner())
    }

    async fn delete_repo(&self, owner: &str, repo: &str) -> Result<()> {
        Ok(self.repos().delete(owner, repo).await?.into_inner())
    }
}
