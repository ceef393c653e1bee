//! Gap detection over audio filenames.
//!
//! Filenames follow the `Artist - Album - Track# - Title.ext` convention. The
//! detector walks them once, comparing each record to the one before it, and
//! reports the track numbers that appear to be missing. Only names are
//! inspected; file contents and tags are never read.

mod detect;
mod diagnostic;
mod record;
mod transition;

pub use detect::*;
pub use diagnostic::Diagnostic;
