use crate::{host::RepoHost, Result};
use gitee::client::{CreateRepositoryRequest, UpdateRepositoryRequest};
use log::info;

const REPO_NAME: &str = "test-repo";
const REPO_DESCRIPTION: &str = "这是一个测试仓库";
const UPDATED_DESCRIPTION: &str = "这是更新后的仓库描述";
const GITIGNORE_TEMPLATE: &str = "Python";
const LICENSE_TEMPLATE: &str = "MIT";

/// Run the whole repository lifecycle against `host`: create, read back,
/// update, list branches, list collaborators, delete. Steps run strictly in
/// sequence and the first failure aborts the rest; steps that already
/// completed are not rolled back.
pub async fn run<H: RepoHost + Sync>(host: &H) -> Result<()> {
    info!("creating repository");
    println!("creating repository...");
    let new_repo = host
        .create_repo(CreateRepositoryRequest {
            name: REPO_NAME.to_owned(),
            description: Some(REPO_DESCRIPTION.to_owned()),
            private: true,
            auto_init: true,
            gitignore_template: Some(GITIGNORE_TEMPLATE.to_owned()),
            license_template: Some(LICENSE_TEMPLATE.to_owned()),
        })
        .await?;
    info!("repository created: {}", new_repo.full_name);
    println!("repository created: {}\n", new_repo.full_name);

    // Every remaining call addresses the repository with the identifiers
    // returned by the create call. The update below renames the repository,
    // and the calls after it still use the original name.
    let repo_owner = &new_repo.owner.login;
    let repo_name = &new_repo.name;

    println!("fetching repository {}/{}...", repo_owner, repo_name);
    let repo_info = host.get_repo(repo_owner, repo_name).await?;
    let description = repo_info.description.unwrap_or_default();
    let visibility = if repo_info.private { "private" } else { "public" };
    info!(
        "repository info - description: {}, visibility: {}",
        description, visibility
    );
    println!("repository description: {}", description);
    println!("repository visibility: {}\n", visibility);

    println!("updating repository settings...");
    let updated_repo = host
        .update_repo(
            repo_owner,
            repo_name,
            UpdateRepositoryRequest {
                name: Some(format!("new_{}", repo_name)),
                description: Some(UPDATED_DESCRIPTION.to_owned()),
                has_issues: Some(true),
                has_wiki: Some(true),
            },
        )
        .await?;
    let updated_description = updated_repo.description.unwrap_or_default();
    info!("repository updated: {}", updated_description);
    println!("repository updated: {}\n", updated_description);

    println!("fetching branches...");
    let branches = host.list_branches(repo_owner, repo_name).await?;
    let branch_names = quoted_list(branches.iter().map(|branch| branch.name.as_str()));
    info!("branches: {}", branch_names);
    println!("branch list: {}\n", branch_names);

    println!("fetching collaborators...");
    let collaborators = host.list_collaborators(repo_owner, repo_name).await?;
    let logins = quoted_list(
        collaborators
            .iter()
            .map(|collaborator| collaborator.user.login.as_str()),
    );
    info!("collaborators: {}", logins);
    println!("collaborators: {}\n", logins);

    println!("deleting repository...");
    host.delete_repo(repo_owner, repo_name).await?;
    info!("repository deleted");
    println!("repository deleted");

    Ok(())
}

/// Render names the way a list of strings prints, e.g. `["master", "dev"]`
fn quoted_list<'a>(items: impl Iterator<Item = &'a str>) -> String {
    let quoted: Vec<String> = items.map(|item| format!("\"{}\"", item)).collect();
    format!("[{}]", quoted.join(", "))
}
