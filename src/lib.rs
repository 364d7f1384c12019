pub mod classify;
pub mod config;
pub mod error;
pub mod github;
pub mod models;
pub mod notice;
pub mod notifier;

pub use classify::{is_relevant, TARGET_PATTERNS};
pub use config::{Config, Inputs, RepoId};
pub use error::NotifierError;
pub use github::{GitHubClient, PullRequestHost};
pub use models::*;
pub use notice::{already_notified, build_body, NOTIFICATION_MARKER};
pub use notifier::ChangeNotifier;
