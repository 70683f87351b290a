use super::{DateTime, User};
use serde::Deserialize;

#[derive(Clone, Debug, Deserialize)]
pub struct Repository {
    pub id: u64,
    pub full_name: String,
    pub human_name: String,
    pub path: String,
    pub name: String,
    pub owner: User,
    pub description: Option<String>,
    pub private: bool,
    pub public: bool,
    pub internal: bool,
    pub fork: bool,
    pub html_url: String,
    pub ssh_url: String,
    pub forks_count: u64,
    pub stargazers_count: u64,
    pub watchers_count: u64,
    pub open_issues_count: u64,
    pub has_issues: bool,
    pub has_wiki: bool,
    pub has_page: bool,
    pub license: Option<String>,
    // null until the repository has an initial commit
    pub default_branch: Option<String>,
    pub pushed_at: Option<DateTime>,
    pub created_at: DateTime,
    pub updated_at: DateTime,
}
