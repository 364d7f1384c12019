pub mod client;

pub use client::GitHubClient;

use async_trait::async_trait;

use crate::config::RepoId;
use crate::error::NotifierError;
use crate::models::{ChangedFile, ExistingNotification};

/// Remote service holding pull requests and their comments
#[async_trait]
pub trait PullRequestHost: Send + Sync {
    /// List files changed in a pull request
    async fn changed_files(
        &self,
        repo: &RepoId,
        pr_number: u64,
    ) -> Result<Vec<ChangedFile>, NotifierError>;

    /// List comments already attached to a pull request
    async fn existing_notifications(
        &self,
        repo: &RepoId,
        pr_number: u64,
    ) -> Result<Vec<ExistingNotification>, NotifierError>;

    /// Post a comment on a pull request, returning its ID
    async fn post_notification(
        &self,
        repo: &RepoId,
        pr_number: u64,
        body: &str,
    ) -> Result<u64, NotifierError>;
}
