use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use change_notifier::{ChangeNotifier, Config, GitHubClient, Inputs};

#[derive(Parser)]
#[command(name = "change-notifier")]
#[command(about = "Warn on pull requests that touch CMake or BitBake build configuration")]
struct Cli {
    /// Repository (owner/repo)
    #[arg(long, env = "GITHUB_REPOSITORY")]
    repo: Option<String>,

    /// Pull request number
    #[arg(long = "pr", env = "GITHUB_PULL_REQUEST_NUMBER")]
    pr_number: Option<String>,

    /// GitHub token
    #[arg(long, env = "GITHUB_TOKEN", hide_env_values = true)]
    token: Option<String>,

    /// GitHub API base URL
    #[arg(long, env = "GITHUB_API_URL")]
    api_url: Option<String>,

    /// Check everything but do not post the comment
    #[arg(long)]
    dry_run: bool,
}

impl From<Cli> for Inputs {
    fn from(cli: Cli) -> Self {
        Inputs {
            repo: cli.repo,
            pr_number: cli.pr_number,
            token: cli.token,
            api_url: cli.api_url,
            dry_run: cli.dry_run,
        }
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env().add_directive("change_notifier=info".parse()?),
        )
        .init();

    let cli = Cli::parse();

    // Validate inputs before touching the network
    let config = Config::from_inputs(cli.into()).context("Invalid invocation inputs")?;

    info!(repo = %config.repo, pr = config.pr_number, dry_run = config.dry_run, "Starting");

    let github = GitHubClient::new(&config.token, &config.api_url)?;
    let notifier = ChangeNotifier::new(github).with_dry_run(config.dry_run);

    let outcome = notifier
        .check_and_notify(&config.repo, config.pr_number)
        .await
        .with_context(|| {
            format!(
                "Failed to check PR #{} in {}",
                config.pr_number, config.repo
            )
        })?;

    println!("{}", outcome);

    Ok(())
}
