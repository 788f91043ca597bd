//! Live adapters backed by the host filesystem and network.

mod app_support;
mod download;
pub mod files;
pub mod id_gen;

pub use files::LiveFiles;
pub use id_gen::LiveIdGenerator;
