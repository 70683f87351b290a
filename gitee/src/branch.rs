use super::Oid;
use serde::Deserialize;

#[derive(Clone, Debug, Deserialize)]
pub struct BranchCommit {
    pub sha: Oid,
    pub url: String,
}

#[derive(Clone, Debug, Deserialize)]
pub struct Branch {
    pub name: String,
    pub commit: BranchCommit,
    pub protected: bool,
    pub protection_url: Option<String>,
}
