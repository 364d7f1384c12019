use crate::models::ExistingNotification;

/// Hidden marker placed at the start of every warning comment. GitHub does not
/// render HTML comments, so it only shows up in the raw body.
pub const NOTIFICATION_MARKER: &str = "<!-- change-notifier:build-config-warning -->";

const HEADING: &str = "## ⚠️ Build configuration changes detected";

const EXPLANATION: &str = "This pull request changes CMake configuration \
(`.cmake`, `CMakeLists.txt`), BitBake recipes (`.bb`), or renames files.\n\n\
Please make sure these changes get additional validation before merging. \
This comment has to be resolved by a reviewer.";

/// Build the warning comment body. The output never varies between calls, so
/// later runs can find it again by the marker.
pub fn build_body() -> String {
    format!("{}\n\n{}\n\n{}\n", NOTIFICATION_MARKER, HEADING, EXPLANATION)
}

/// Check if any existing comment already carries the marker
pub fn already_notified(notifications: &[ExistingNotification]) -> bool {
    notifications
        .iter()
        .any(|n| n.body.contains(NOTIFICATION_MARKER))
}
