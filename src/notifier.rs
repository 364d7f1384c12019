use tracing::info;

use crate::classify::is_relevant;
use crate::config::RepoId;
use crate::error::NotifierError;
use crate::github::PullRequestHost;
use crate::models::Outcome;
use crate::notice::{already_notified, build_body};

/// Warns on pull requests that touch build configuration, at most once per PR
pub struct ChangeNotifier<H: PullRequestHost> {
    host: H,
    dry_run: bool,
}

impl<H: PullRequestHost> ChangeNotifier<H> {
    pub fn new(host: H) -> Self {
        Self {
            host,
            dry_run: false,
        }
    }

    /// Skip the final post and only report what would have happened
    pub fn with_dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    /// Check the pull request's changes and post the warning if needed
    pub async fn check_and_notify(
        &self,
        repo: &RepoId,
        pr_number: u64,
    ) -> Result<Outcome, NotifierError> {
        info!(%repo, pr_number, "Checking pull request changes");

        let files = self.host.changed_files(repo, pr_number).await?;

        if !is_relevant(&files) {
            info!(files = files.len(), "No relevant changes");
            return Ok(Outcome::NoRelevantChanges);
        }

        let existing = self.host.existing_notifications(repo, pr_number).await?;

        if already_notified(&existing) {
            info!(comments = existing.len(), "Already notified");
            return Ok(Outcome::AlreadyNotified);
        }

        let body = build_body();

        if self.dry_run {
            info!(%body, "Dry run, not posting warning comment");
            return Ok(Outcome::DryRun);
        }

        let comment_id = self.host.post_notification(repo, pr_number, &body).await?;

        info!(comment_id, "Posted warning comment");

        Ok(Outcome::Posted { comment_id })
    }

    /// Get the host for direct access
    pub fn host(&self) -> &H {
        &self.host
    }
}
