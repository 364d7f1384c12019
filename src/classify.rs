use crate::models::{ChangeStatus, ChangedFile};

/// Path suffixes that mark a file as build configuration
pub const TARGET_PATTERNS: &[&str] = &[".cmake", "CMakeLists.txt", ".bb"];

/// Check whether a single path ends with one of the target patterns
pub fn matches_target(path: &str) -> bool {
    TARGET_PATTERNS.iter().any(|pattern| path.ends_with(pattern))
}

/// Check if any changed file needs extra review: a build configuration
/// file was touched, or a file was renamed
pub fn is_relevant(files: &[ChangedFile]) -> bool {
    files
        .iter()
        .any(|f| f.status == ChangeStatus::Renamed || matches_target(&f.path))
}
