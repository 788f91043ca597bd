//! Configuration for the live files adapter.

use std::env;
use std::path::PathBuf;
use std::time::Duration;

/// Environment variable naming the application's display name.
pub const APP_NAME_VAR: &str = "FILES_CLIENT_APP_NAME";
/// Environment variable overriding the application-support root.
pub const SUPPORT_ROOT_VAR: &str = "FILES_CLIENT_SUPPORT_ROOT";
/// Environment variable overriding the temporary directory.
pub const TEMP_DIR_VAR: &str = "FILES_CLIENT_TEMP_DIR";
/// Environment variable holding a download timeout in whole seconds.
pub const TIMEOUT_VAR: &str = "FILES_CLIENT_TIMEOUT_SECS";

/// Settings for [`LiveFiles`](crate::adapters::live::files::LiveFiles).
///
/// Every field is optional; `None` means "use the platform default".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilesConfig {
    /// Name of the per-application support subdirectory.
    pub app_name: Option<String>,
    /// Root under which the application-support directory is created.
    pub support_root: Option<PathBuf>,
    /// Directory used for temporary files.
    pub temp_dir: Option<PathBuf>,
    /// Overall timeout for a download request. No timeout when `None`.
    pub request_timeout: Option<Duration>,
    /// User-Agent header sent with downloads.
    pub user_agent: Option<String>,
}

impl FilesConfig {
    /// Builds a config from the process environment.
    ///
    /// A `.env` file in the working directory is loaded first if present.
    /// When no app name is configured the executable's file stem is used.
    ///
    /// # Errors
    ///
    /// Returns an error if `FILES_CLIENT_TIMEOUT_SECS` is set but is not a
    /// positive whole number of seconds.
    pub fn from_env() -> Result<Self, String> {
        let _ = dotenvy::dotenv();

        let request_timeout =
            non_empty_var(TIMEOUT_VAR).as_deref().map(parse_timeout).transpose()?;

        Ok(Self {
            app_name: non_empty_var(APP_NAME_VAR).or_else(executable_name),
            support_root: non_empty_var(SUPPORT_ROOT_VAR).map(PathBuf::from),
            temp_dir: non_empty_var(TEMP_DIR_VAR).map(PathBuf::from),
            request_timeout,
            user_agent: None,
        })
    }

    /// Sets the application name.
    #[must_use]
    pub fn with_app_name(mut self, name: impl Into<String>) -> Self {
        self.app_name = Some(name.into());
        self
    }

    /// Sets the application-support root.
    #[must_use]
    pub fn with_support_root(mut self, root: impl Into<PathBuf>) -> Self {
        self.support_root = Some(root.into());
        self
    }

    /// Sets the temporary directory.
    #[must_use]
    pub fn with_temp_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.temp_dir = Some(dir.into());
        self
    }

    /// Sets the download timeout.
    #[must_use]
    pub fn with_request_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = Some(timeout);
        self
    }
}

fn non_empty_var(name: &str) -> Option<String> {
    env::var(name).ok().filter(|v| !v.trim().is_empty())
}

/// Parses a positive timeout in whole seconds.
fn parse_timeout(raw: &str) -> Result<Duration, String> {
    match raw.trim().parse::<u64>() {
        Ok(0) => Err(format!("Invalid {TIMEOUT_VAR} '{raw}': must be at least 1 second")),
        Ok(secs) => Ok(Duration::from_secs(secs)),
        Err(e) => Err(format!("Invalid {TIMEOUT_VAR} '{raw}': {e}")),
    }
}

fn executable_name() -> Option<String> {
    let exe = env::current_exe().ok()?;
    exe.file_stem().and_then(|s| s.to_str()).map(String::from)
}
