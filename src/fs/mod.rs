//! Filesystem metadata types and adapter operations.

pub(crate) mod entry;
mod operations;

pub use entry::{Entry, EntryKind, Visibility};
