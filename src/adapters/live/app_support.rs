//! Application-support directory resolution.

use std::path::{Component, Path, PathBuf};

use tracing::error;

use super::files::ensure_directory;
use crate::error::FilesError;
use crate::ports::{SupportDir, UnavailableReason};

/// Resolves `<root>/<app_name>`, creating it when absent.
///
/// A missing root or an app name that is empty or not a single plain path
/// component makes the directory unavailable rather than an error.
pub(crate) fn resolve(
    root: Option<PathBuf>,
    app_name: Option<&str>,
) -> Result<SupportDir, FilesError> {
    let Some(root) = root else {
        error!("unable to access application support directory");
        return Ok(SupportDir::Unavailable(UnavailableReason::NoPlatformRoot));
    };

    let Some(app_name) = app_name.filter(|name| is_plain_name(name)) else {
        error!("unable to determine application name");
        return Ok(SupportDir::Unavailable(UnavailableReason::UnknownAppName));
    };

    let dir = root.join(app_name);
    ensure_directory(&dir)?;
    Ok(SupportDir::Resolved(dir))
}

/// Whether `name` is exactly one ordinary path component.
pub(crate) fn is_plain_name(name: &str) -> bool {
    let mut components = Path::new(name).components();
    matches!(
        (components.next(), components.next()),
        (Some(Component::Normal(_)), None)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn creates_app_folder_under_root() {
        let root = tempfile::tempdir().unwrap();
        let resolved = resolve(Some(root.path().to_path_buf()), Some("Notes")).unwrap();

        assert_eq!(resolved, SupportDir::Resolved(root.path().join("Notes")));
        assert!(root.path().join("Notes").is_dir());
    }

    #[test]
    fn repeated_resolution_returns_same_folder() {
        let root = tempfile::tempdir().unwrap();
        let first = resolve(Some(root.path().to_path_buf()), Some("Notes")).unwrap();
        let second = resolve(Some(root.path().to_path_buf()), Some("Notes")).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn missing_root_is_unavailable() {
        let resolved = resolve(None, Some("Notes")).unwrap();
        assert_eq!(resolved, SupportDir::Unavailable(UnavailableReason::NoPlatformRoot));
    }

    #[test]
    fn missing_or_odd_app_name_is_unavailable() {
        let root = tempfile::tempdir().unwrap();
        for name in [None, Some(""), Some("../escape"), Some("a/b"), Some("..")] {
            let resolved = resolve(Some(root.path().to_path_buf()), name).unwrap();
            assert_eq!(
                resolved,
                SupportDir::Unavailable(UnavailableReason::UnknownAppName),
                "name {name:?}"
            );
        }
    }

    #[test]
    fn root_blocked_by_file_is_error() {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path().join("root-file");
        std::fs::write(&root, "x").unwrap();

        let err = resolve(Some(root), Some("Notes")).unwrap_err();
        assert!(matches!(err, FilesError::DirectoryCreation { .. }));
    }
}
