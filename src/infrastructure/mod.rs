//! Infrastructure layer for filesystem and environment interactions.
//!
//! Zellij plugins run in a WASI sandbox where the host filesystem is mounted
//! under `/host`. Everything that builds host paths or touches files outside the
//! key-value store lives here.

pub mod files;
pub mod paths;

pub use files::{read_import_file, write_export_file};
pub use paths::{expand_tilde, get_data_dir, get_export_dir, strip_host_prefix};
