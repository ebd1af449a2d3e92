use std::path::Path;

/// Path of `path` relative to `root`, falling back to the full path when it lies elsewhere
pub fn display_path(root: &Path, path: &Path) -> String {
    path.strip_prefix(root)
        .unwrap_or(path)
        .to_string_lossy()
        .into_owned()
}
