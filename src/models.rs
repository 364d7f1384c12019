use std::fmt;

use serde::{Deserialize, Serialize};

/// Change status GitHub reports for a file in a pull request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChangeStatus {
    Added,
    Modified,
    Removed,
    Renamed,
    Copied,
    Changed,
    Unchanged,
    #[serde(other)]
    Unknown,
}

/// A file changed in a pull request
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChangedFile {
    #[serde(rename = "filename")]
    pub path: String,
    pub status: ChangeStatus,
}

impl ChangedFile {
    pub fn new(path: impl Into<String>, status: ChangeStatus) -> Self {
        Self {
            path: path.into(),
            status,
        }
    }
}

/// A comment already attached to a pull request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExistingNotification {
    pub id: u64,
    pub body: String,
}

/// What a single run ended up doing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// No changed file matched a target pattern and none was renamed
    NoRelevantChanges,
    /// A comment carrying the marker is already on the pull request
    AlreadyNotified,
    /// A warning comment was posted
    Posted { comment_id: u64 },
    /// A warning would have been posted, but posting was disabled
    DryRun,
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::NoRelevantChanges => write!(f, "No relevant changes found."),
            Outcome::AlreadyNotified => write!(f, "Warning comment already exists."),
            Outcome::Posted { comment_id } => {
                write!(f, "Posted warning comment (ID: {})", comment_id)
            }
            Outcome::DryRun => write!(f, "Dry run: warning comment not posted."),
        }
    }
}
