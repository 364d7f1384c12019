use async_trait::async_trait;
use octocrab::service::middleware::retry::RetryConfig;
use octocrab::{FromResponse, Octocrab};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use super::PullRequestHost;
use crate::config::RepoId;
use crate::error::NotifierError;
use crate::models::{ChangedFile, ExistingNotification};

/// Largest page size the GitHub REST API accepts. Only the first page is read.
const PER_PAGE: u8 = 100;

/// GitHub API client for PR interactions
pub struct GitHubClient {
    client: Octocrab,
}

#[derive(Serialize)]
struct CommentRequest<'a> {
    body: &'a str,
}

#[derive(Deserialize)]
struct IssueComment {
    id: u64,
    #[serde(default)]
    body: Option<String>,
}

impl GitHubClient {
    /// Create a new GitHub client with the given token and API base URL
    pub fn new(token: &str, api_url: &str) -> Result<Self, NotifierError> {
        let client = Octocrab::builder()
            .personal_token(token.to_string())
            .base_uri(api_url)
            .map_err(|e| {
                NotifierError::Configuration(format!("Invalid GitHub API URL {}: {}", api_url, e))
            })?
            .add_retry_config(RetryConfig::None)
            .build()
            .map_err(|e| NotifierError::from_github("create GitHub client", e))?;

        Ok(Self { client })
    }

    /// Send a request and decode a successful response. The status is checked
    /// before the body is read, so error pages that are not JSON keep their status.
    async fn send<R, P>(
        &self,
        operation: &'static str,
        route: String,
        body: Option<&P>,
    ) -> Result<R, NotifierError>
    where
        R: FromResponse + Send,
        P: Serialize + ?Sized + Sync,
    {
        let response = match body {
            Some(body) => self.client._post(route, Some(body)).await,
            None => self.client._get(route).await,
        }
        .map_err(|e| NotifierError::from_github(operation, e))?;

        let status = response.status();
        if !status.is_success() {
            let message = match octocrab::map_github_error(response).await {
                Err(octocrab::Error::GitHub { source, .. }) => source.message.clone(),
                _ => status
                    .canonical_reason()
                    .unwrap_or("unexpected response")
                    .to_string(),
            };
            warn!(status = status.as_u16(), %message, operation, "GitHub request failed");
            return Err(NotifierError::from_status(
                operation,
                status.as_u16(),
                message,
            ));
        }

        R::from_response(response)
            .await
            .map_err(|e| NotifierError::from_github(operation, e))
    }
}

#[async_trait]
impl PullRequestHost for GitHubClient {
    async fn changed_files(
        &self,
        repo: &RepoId,
        pr_number: u64,
    ) -> Result<Vec<ChangedFile>, NotifierError> {
        info!(%repo, pr_number, "Fetching changed files");

        let route = format!(
            "/repos/{}/{}/pulls/{}/files?per_page={}",
            repo.owner, repo.name, pr_number, PER_PAGE
        );
        let files: Vec<ChangedFile> = self
            .send("list changed files", route, None::<&()>)
            .await?;

        debug!(count = files.len(), "Fetched changed files");

        Ok(files)
    }

    async fn existing_notifications(
        &self,
        repo: &RepoId,
        pr_number: u64,
    ) -> Result<Vec<ExistingNotification>, NotifierError> {
        info!(%repo, pr_number, "Fetching existing comments");

        let route = format!(
            "/repos/{}/{}/issues/{}/comments?per_page={}",
            repo.owner, repo.name, pr_number, PER_PAGE
        );
        let comments: Vec<IssueComment> =
            self.send("list comments", route, None::<&()>).await?;

        debug!(count = comments.len(), "Fetched existing comments");

        Ok(comments
            .into_iter()
            .map(|c| ExistingNotification {
                id: c.id,
                body: c.body.unwrap_or_default(),
            })
            .collect())
    }

    async fn post_notification(
        &self,
        repo: &RepoId,
        pr_number: u64,
        body: &str,
    ) -> Result<u64, NotifierError> {
        info!(%repo, pr_number, "Posting PR comment");

        let route = format!(
            "/repos/{}/{}/issues/{}/comments",
            repo.owner, repo.name, pr_number
        );
        let comment: IssueComment = self
            .send("post comment", route, Some(&CommentRequest { body }))
            .await?;

        debug!(comment_id = comment.id, "Comment posted");

        Ok(comment.id)
    }
}
