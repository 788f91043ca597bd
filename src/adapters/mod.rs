//! Implementations of the port traits.
//!
//! `live` talks to the real host; `recording` and `replaying` capture and
//! serve cassettes; `overriding` and `unimplemented` build hand-made doubles.

pub mod live;
pub mod overriding;
pub mod recording;
pub mod replaying;
pub mod unimplemented;
