//! Library side of the `nova` CLI.
//!
//! [`workspace::DirectoryModule`] adapts a module directory on disk to the
//! `nova-framework-quarkus` host traits; [`report`] turns inspector answers into
//! serializable reports for the binary (`src/main.rs`).

pub mod report;
pub mod workspace;
