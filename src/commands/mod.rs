//! Command dispatch and handlers.

use std::env;
use std::path::Path;

use reqwest::Url;
use tracing::info;

use crate::cli::Command;
use crate::config::FilesConfig;
use crate::context::ServiceContext;
use crate::ports::SupportDir;

/// Environment variable naming a directory to record cassettes into.
pub const RECORD_VAR: &str = "FILES_CLIENT_RECORD";

/// Dispatch a parsed command to its handler.
///
/// When `FILES_CLIENT_RECORD` is set to a directory path, every port
/// interaction is recorded to per-port cassette files in that directory.
///
/// # Errors
///
/// Returns an error string if configuration is invalid or the command fails.
pub fn dispatch(command: &Command, app_name: Option<&str>) -> Result<(), String> {
    let mut config = FilesConfig::from_env()?;
    if let Some(name) = app_name {
        config = config.with_app_name(name);
    }

    let (ctx, session) = if let Ok(dir) = env::var(RECORD_VAR) {
        let (ctx, session) = ServiceContext::recording_at(dir, config)?;
        (ctx, Some(session))
    } else {
        (ServiceContext::live(config)?, None)
    };

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .map_err(|e| format!("Failed to start async runtime: {e}"))?;
    let result = runtime.block_on(dispatch_with_context(command, &ctx));

    // Finish recording after command completes (even on error)
    if let Some(session) = session {
        drop(ctx);
        let output_dir = session.finish()?;
        eprintln!("Recording saved to: {}", output_dir.display());
    }

    result
}

/// Run a command against the given service context.
async fn dispatch_with_context(command: &Command, ctx: &ServiceContext) -> Result<(), String> {
    let files = &ctx.files;
    match command {
        Command::Read { path } => {
            let text = files.read(path).await.map_err(|e| e.to_string())?;
            print!("{text}");
        }
        Command::TempDir => println!("{}", files.temporary_directory().display()),
        Command::TempFile { extension } => {
            println!("{}", files.temporary_file(extension).display());
        }
        Command::Mkdir { path } => {
            files.create_directory(path).map_err(|e| e.to_string())?;
            println!("{}", path.display());
        }
        Command::AppSupport => {
            match files.resolve_application_support_directory().map_err(|e| e.to_string())? {
                SupportDir::Resolved(dir) => println!("{}", dir.display()),
                SupportDir::Unavailable(reason) => {
                    return Err(format!("Application support directory unavailable: {reason:?}"));
                }
            }
        }
        Command::Download { url, destination } => download(ctx, url, destination).await?,
    }
    Ok(())
}

async fn download(ctx: &ServiceContext, url: &str, destination: &Path) -> Result<(), String> {
    let source = Url::parse(url).map_err(|e| format!("Invalid URL '{url}': {e}"))?;
    let report = ctx.files.download(&source, destination).await.map_err(|e| e.to_string())?;
    info!(bytes = report.bytes, replaced = report.replaced, "download complete");
    println!("{}", report.destination.display());
    Ok(())
}
