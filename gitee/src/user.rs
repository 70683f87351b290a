use serde::Deserialize;

#[derive(Clone, Debug, Deserialize)]
pub struct User {
    pub id: u64,
    pub login: String,
    pub name: String,
    pub avatar_url: String,
    pub url: String,
    pub html_url: String,
}

/// Permissions granted to a collaborator on a repository
#[derive(Clone, Debug, Deserialize)]
pub struct Permissions {
    pub pull: bool,
    pub push: bool,
    pub admin: bool,
}

/// An entry from the repository collaborators listing: the user along with
/// the permissions they hold on the repository
#[derive(Clone, Debug, Deserialize)]
pub struct Collaborator {
    #[serde(flatten)]
    pub user: User,
    pub permissions: Permissions,
}
