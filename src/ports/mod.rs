//! Port traits defining external boundaries.
//!
//! `Files` is the boundary between calling code and the host filesystem and
//! network; `IdGenerator` supplies the unique names it hands out.
//! Implementations live in `src/adapters/`.

pub mod files;
pub mod id_gen;

pub use files::{
    spawn_detached, DownloadFuture, DownloadReport, Files, ReadFuture, SupportDir,
    UnavailableReason,
};
pub use id_gen::IdGenerator;
