//! Commands that manage the workspace on disk.
//!
//! Analysis commands live in [`crate::analysis`] and run against an
//! in-memory [`crate::network::Network`]; the modules here are the ones
//! that create or touch files.

pub mod init;
