//! Record-replay round-trip integration test.
//!
//! 1. Run a session against live adapters through `ServiceContext::recording_at`.
//! 2. Replay the per-port cassettes with `ServiceContext::replaying_from`.
//! 3. Assert the replay returns the recorded outputs, errors included.

use std::path::{Path, PathBuf};

use files_client::cassette::config::CassetteConfig;
use files_client::context::ServiceContext;
use files_client::{FilesConfig, FilesErrorKind};

/// Everything observable from one pass over the files port.
#[derive(Debug, PartialEq)]
struct Snapshot {
    text: String,
    missing_kind: FilesErrorKind,
    temp_dir: PathBuf,
    temp_file: PathBuf,
    support_dir: Option<PathBuf>,
    id: String,
}

async fn exercise(ctx: &ServiceContext, workdir: &Path) -> Snapshot {
    let text = ctx.files.read(&workdir.join("readme.txt")).await.unwrap();
    let missing_kind = ctx.files.read(&workdir.join("absent.txt")).await.unwrap_err().kind();
    ctx.files.create_directory(&workdir.join("out").join("nested")).unwrap();
    Snapshot {
        text,
        missing_kind,
        temp_dir: ctx.files.temporary_directory(),
        temp_file: ctx.files.temporary_file("log"),
        support_dir: ctx.files.application_support_directory(),
        id: ctx.id_gen.generate_id(),
    }
}

#[tokio::test]
async fn replay_reproduces_recorded_session() {
    let workdir = tempfile::tempdir().unwrap();
    std::fs::write(workdir.path().join("readme.txt"), "hello from disk").unwrap();
    let cassettes = workdir.path().join("cassettes");

    let config = FilesConfig::default()
        .with_temp_dir(workdir.path())
        .with_support_root(workdir.path().join("support"))
        .with_app_name("Recorder");

    let (ctx, session) = ServiceContext::recording_at(&cassettes, config).unwrap();
    let recorded = exercise(&ctx, workdir.path()).await;
    drop(ctx);
    session.finish().unwrap();

    assert_eq!(recorded.text, "hello from disk");
    assert_eq!(recorded.missing_kind, FilesErrorKind::Read);
    assert_eq!(recorded.support_dir, Some(workdir.path().join("support").join("Recorder")));
    assert!(workdir.path().join("out").join("nested").is_dir());

    // Replay against a directory that holds none of the recorded files.
    std::fs::remove_file(workdir.path().join("readme.txt")).unwrap();
    let replay = ServiceContext::replaying_from(&CassetteConfig::from_dir(&cassettes)).unwrap();
    let replayed = exercise(&replay, workdir.path()).await;

    assert_eq!(replayed, recorded);
}

#[tokio::test]
async fn replay_twice_is_deterministic() {
    let workdir = tempfile::tempdir().unwrap();
    std::fs::write(workdir.path().join("readme.txt"), "stable").unwrap();
    let cassettes = workdir.path().join("cassettes");

    let config = FilesConfig::default()
        .with_temp_dir(workdir.path())
        .with_support_root(workdir.path().join("support"))
        .with_app_name("Twice");
    let (ctx, session) = ServiceContext::recording_at(&cassettes, config).unwrap();
    let _ = exercise(&ctx, workdir.path()).await;
    drop(ctx);
    session.finish().unwrap();

    let first = exercise(
        &ServiceContext::replaying_from(&CassetteConfig::from_dir(&cassettes)).unwrap(),
        workdir.path(),
    )
    .await;
    let second = exercise(
        &ServiceContext::replaying_from(&CassetteConfig::from_dir(&cassettes)).unwrap(),
        workdir.path(),
    )
    .await;

    assert_eq!(first, second);
}
