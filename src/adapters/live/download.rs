//! Streaming download into a staging file followed by a move into place.

use std::io;
use std::path::{Path, PathBuf};

use reqwest::{Client, Url};
use tokio::io::AsyncWriteExt;
use tracing::{debug, warn};
use uuid::Uuid;

use crate::error::FilesError;
use crate::ports::DownloadReport;

/// Downloads `source` into `staging`, then moves it to `destination`.
///
/// The staging file is removed on every failure path.
pub(crate) async fn fetch_into(
    client: Client,
    source: Url,
    staging: PathBuf,
    destination: PathBuf,
) -> Result<DownloadReport, FilesError> {
    let bytes = match transfer(&client, source, &staging).await {
        Ok(bytes) => bytes,
        Err(e) => {
            discard(&staging).await;
            return Err(e);
        }
    };

    match move_into_place(&staging, &destination).await {
        Ok(replaced) => Ok(DownloadReport { destination, bytes, replaced }),
        Err(e) => {
            discard(&staging).await;
            Err(e)
        }
    }
}

async fn transfer(client: &Client, source: Url, staging: &Path) -> Result<u64, FilesError> {
    let url = source.to_string();
    let request_err = |source: reqwest::Error| FilesError::Request { url: url.clone(), source };
    let write_err =
        |source: io::Error| FilesError::DownloadWrite { path: staging.to_path_buf(), source };

    let mut response = client.get(source).send().await.map_err(request_err)?;
    let status = response.status();
    if !status.is_success() {
        return Err(FilesError::HttpStatus { url: url.clone(), status: status.as_u16() });
    }

    let mut file = tokio::fs::File::create(staging).await.map_err(write_err)?;
    let mut written = 0u64;
    while let Some(chunk) = response.chunk().await.map_err(request_err)? {
        file.write_all(&chunk).await.map_err(write_err)?;
        written += chunk.len() as u64;
    }
    file.flush().await.map_err(write_err)?;
    debug!(%url, bytes = written, "payload received");
    Ok(written)
}

/// Moves `staging` to `destination`, replacing any existing file. Returns
/// whether something was replaced.
///
/// Falls back to [`copy_into_place`] when a rename is refused, as it is
/// across filesystems.
async fn move_into_place(staging: &Path, destination: &Path) -> Result<bool, FilesError> {
    let replaced = tokio::fs::try_exists(destination).await.unwrap_or(false);

    match tokio::fs::rename(staging, destination).await {
        Ok(()) => Ok(replaced),
        Err(rename_err) => {
            debug!(error = %rename_err, "rename failed, copying instead");
            copy_into_place(staging, destination).await
        }
    }
}

/// Copies `staging` to a sibling of `destination`, renames that over
/// `destination`, then removes `staging`. Returns whether something was
/// replaced.
///
/// An interrupted copy leaves any existing `destination` untouched. On
/// failure `staging` is kept for the caller to discard.
async fn copy_into_place(staging: &Path, destination: &Path) -> Result<bool, FilesError> {
    let move_err = |source: io::Error| FilesError::Move { path: destination.to_path_buf(), source };
    let replaced = tokio::fs::try_exists(destination).await.unwrap_or(false);

    let file_name = destination
        .file_name()
        .map_or_else(|| "download".into(), |name| name.to_string_lossy());
    let sibling =
        destination.with_file_name(format!(".{file_name}.{}.partial", Uuid::new_v4().simple()));

    if let Err(e) = tokio::fs::copy(staging, &sibling).await {
        discard(&sibling).await;
        return Err(move_err(e));
    }
    if let Err(e) = tokio::fs::rename(&sibling, destination).await {
        discard(&sibling).await;
        return Err(move_err(e));
    }

    discard(staging).await;
    Ok(replaced)
}

async fn discard(path: &Path) {
    match tokio::fs::remove_file(path).await {
        Ok(()) => {}
        Err(e) if e.kind() == io::ErrorKind::NotFound => {}
        Err(e) => warn!(path = %path.display(), error = %e, "failed to remove staging file"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn move_into_place_replaces_existing_file() {
        let dir = tempfile::tempdir().unwrap();
        let staging = dir.path().join("staged.download");
        let destination = dir.path().join("final.bin");
        std::fs::write(&staging, b"new").unwrap();
        std::fs::write(&destination, b"old").unwrap();

        let replaced = move_into_place(&staging, &destination).await.unwrap();

        assert!(replaced);
        assert_eq!(std::fs::read(&destination).unwrap(), b"new");
        assert!(!staging.exists());
    }

    #[tokio::test]
    async fn move_into_missing_parent_fails_and_keeps_staging() {
        let dir = tempfile::tempdir().unwrap();
        let staging = dir.path().join("staged.download");
        let destination = dir.path().join("no-such-dir").join("final.bin");
        std::fs::write(&staging, b"payload").unwrap();

        let err = move_into_place(&staging, &destination).await.unwrap_err();

        assert!(matches!(err, FilesError::Move { .. }));
        assert!(staging.exists());
    }

    fn entries(dir: &Path) -> Vec<String> {
        let mut names: Vec<String> = std::fs::read_dir(dir)
            .unwrap()
            .map(|entry| entry.unwrap().file_name().to_string_lossy().into_owned())
            .collect();
        names.sort();
        names
    }

    #[tokio::test]
    async fn copy_into_place_replaces_and_removes_staging() {
        let staging_dir = tempfile::tempdir().unwrap();
        let target_dir = tempfile::tempdir().unwrap();
        let staging = staging_dir.path().join("staged.download");
        let destination = target_dir.path().join("final.bin");
        std::fs::write(&staging, b"copied").unwrap();
        std::fs::write(&destination, b"old").unwrap();

        let replaced = copy_into_place(&staging, &destination).await.unwrap();

        assert!(replaced);
        assert_eq!(std::fs::read(&destination).unwrap(), b"copied");
        assert!(!staging.exists());
        assert_eq!(entries(target_dir.path()), ["final.bin"]);
    }

    #[tokio::test]
    async fn copy_into_place_into_fresh_destination() {
        let staging_dir = tempfile::tempdir().unwrap();
        let target_dir = tempfile::tempdir().unwrap();
        let staging = staging_dir.path().join("staged.download");
        let destination = target_dir.path().join("fresh.bin");
        std::fs::write(&staging, b"payload").unwrap();

        let replaced = copy_into_place(&staging, &destination).await.unwrap();

        assert!(!replaced);
        assert_eq!(std::fs::read(&destination).unwrap(), b"payload");
        assert!(!staging.exists());
    }

    #[tokio::test]
    async fn failed_copy_leaves_destination_intact() {
        let staging_dir = tempfile::tempdir().unwrap();
        let target_dir = tempfile::tempdir().unwrap();
        let staging = staging_dir.path().join("never-written.download");
        let destination = target_dir.path().join("final.bin");
        std::fs::write(&destination, b"old").unwrap();

        let err = copy_into_place(&staging, &destination).await.unwrap_err();

        assert!(matches!(err, FilesError::Move { .. }));
        assert_eq!(std::fs::read(&destination).unwrap(), b"old");
        assert_eq!(entries(target_dir.path()), ["final.bin"]);
    }

    #[tokio::test]
    async fn discard_ignores_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        discard(&dir.path().join("never-created")).await;
    }
}
