use std::path::{Path, PathBuf};

/// `parent(working_dir) / manual_dir / manual_file`
///
/// At the filesystem root there is no parent, so the root itself is used.
/// Existence is not checked here; a missing manual surfaces when it is read.
pub fn resolve_manual_path(working_dir: &Path, manual_dir: &str, manual_file: &str) -> PathBuf {
    let parent = working_dir.parent().unwrap_or(working_dir);
    parent.join(manual_dir).join(manual_file)
}
