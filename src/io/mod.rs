//! Obtaining archive bytes from outside the extraction core.

mod local;

pub use local::read_archive_file;
