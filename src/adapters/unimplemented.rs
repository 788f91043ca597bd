//! Doubles that fail loudly when a test touches a port it did not configure.

use std::path::{Path, PathBuf};

use reqwest::Url;

use crate::error::FilesError;
use crate::ports::{DownloadFuture, Files, IdGenerator, ReadFuture, SupportDir};

/// `Files` double that panics on every call.
///
/// Pair with [`OverridingFiles`](super::overriding::OverridingFiles) to supply
/// only the operations a test expects to hit.
#[derive(Debug, Default, Clone, Copy)]
pub struct UnimplementedFiles;

fn unimplemented_files(method: &str) -> ! {
    panic!("Files::{method} is not configured for this context: no cassette or override supplied");
}

impl Files for UnimplementedFiles {
    fn read(&self, _path: &Path) -> ReadFuture<'_> {
        unimplemented_files("read")
    }

    fn temporary_directory(&self) -> PathBuf {
        unimplemented_files("temporary_directory")
    }

    fn temporary_file(&self, _extension: &str) -> PathBuf {
        unimplemented_files("temporary_file")
    }

    fn create_directory(&self, _path: &Path) -> Result<(), FilesError> {
        unimplemented_files("create_directory")
    }

    fn resolve_application_support_directory(&self) -> Result<SupportDir, FilesError> {
        unimplemented_files("application_support_directory")
    }

    fn download(&self, _source: &Url, _destination: &Path) -> DownloadFuture {
        unimplemented_files("download")
    }
}

/// `IdGenerator` double that panics on every call.
#[derive(Debug, Default, Clone, Copy)]
pub struct UnimplementedIdGenerator;

impl IdGenerator for UnimplementedIdGenerator {
    fn generate_id(&self) -> String {
        panic!("IdGenerator::generate_id is not configured for this context: no cassette supplied");
    }
}
