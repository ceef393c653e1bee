//! Filename collector.
//!
//! Walks a directory tree and hands back every regular file as a path string.
//! No name filtering happens here; deciding which names take part in gap
//! detection is left to `gaps`.

mod scan;

pub use scan::*;
