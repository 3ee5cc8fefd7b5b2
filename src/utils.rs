/*!
 * Fixed filters and small helpers for srcdump
 */

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use once_cell::sync::Lazy;

/// Fixed name of the output artifact, created in the working directory
pub const OUTPUT_FILE_NAME: &str = "codigo_compilado.txt";

/// File name suffixes that qualify a file for inclusion, checked in order
pub const ALLOWED_EXTENSIONS: [&str; 4] = [".js", ".jsx", ".css", ".py"];

/// Directory names whose whole subtree is skipped
pub static EXCLUDED_DIRS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    [
        // Version Control
        ".git",
        // Dependencies
        "node_modules",
        // Python
        "venv",
        "__pycache__",
        // IDEs & Editors
        ".vscode",
        // Build & Dist
        "dist",
        "build",
    ]
    .into_iter()
    .collect()
});

/// Check whether a file name ends with one of the allowed suffixes.
///
/// Exact, case-sensitive suffix match: `App.JSX` does not match and neither
/// does a file literally named `js`.
pub fn has_allowed_extension(file_name: &str) -> bool {
    ALLOWED_EXTENSIONS
        .iter()
        .any(|ext| file_name.ends_with(ext))
}

/// Check whether a directory name is in the exclusion set
pub fn is_excluded_dir(dir_name: &str) -> bool {
    EXCLUDED_DIRS.contains(dir_name)
}

/// Path of `path` relative to `root`, as the host path API renders it.
///
/// Falls back to the full path when `path` does not live under `root`.
pub fn relative_path(root: &Path, path: &Path) -> PathBuf {
    path.strip_prefix(root)
        .map(Path::to_path_buf)
        .unwrap_or_else(|_| path.to_path_buf())
}

/// Format a human-readable file size
pub fn format_file_size(size: u64) -> String {
    const KB: u64 = 1024;
    const MB: u64 = KB * 1024;
    const GB: u64 = MB * 1024;

    if size >= GB {
        format!("{:.2} GB", size as f64 / GB as f64)
    } else if size >= MB {
        format!("{:.2} MB", size as f64 / MB as f64)
    } else if size >= KB {
        format!("{:.2} KB", size as f64 / KB as f64)
    } else {
        format!("{} bytes", size)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_allowed_extensions() {
        assert!(has_allowed_extension("main.py"));
        assert!(has_allowed_extension("App.jsx"));
        assert!(has_allowed_extension("index.js"));
        assert!(has_allowed_extension("styles.min.css"));
        // Suffix match only, no dot handling beyond the list itself
        assert!(has_allowed_extension(".py"));

        assert!(!has_allowed_extension("App.JSX"));
        assert!(!has_allowed_extension("notes.txt"));
        assert!(!has_allowed_extension("script.pyc"));
        assert!(!has_allowed_extension("types.ts"));
        assert!(!has_allowed_extension("js"));
    }

    #[test]
    fn test_excluded_dirs() {
        for name in ["node_modules", ".git", "venv", "__pycache__", ".vscode", "dist", "build"] {
            assert!(is_excluded_dir(name), "{name} should be excluded");
        }
        assert!(!is_excluded_dir("src"));
        assert!(!is_excluded_dir("Build"));
        assert!(!is_excluded_dir(".venv"));
    }

    #[test]
    fn test_relative_path() {
        let root = Path::new("/tmp/project");
        assert_eq!(
            relative_path(root, Path::new("/tmp/project/src/app.js")),
            PathBuf::from("src").join("app.js")
        );
        assert_eq!(
            relative_path(root, Path::new("/elsewhere/x.py")),
            PathBuf::from("/elsewhere/x.py")
        );
    }

    #[test]
    fn test_format_file_size() {
        assert_eq!(format_file_size(12), "12 bytes");
        assert_eq!(format_file_size(2048), "2.00 KB");
        assert_eq!(format_file_size(3 * 1024 * 1024), "3.00 MB");
    }
}
