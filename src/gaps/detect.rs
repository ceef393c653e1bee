use thiserror::Error;
use tracing::{debug, info};

use super::diagnostic::Diagnostic;
use super::record::{FileRecord, Parsed};
use super::transition::{Gap, Transition, size_gap};

pub const DEFAULT_DELIMITER: &str = " - ";
pub const DEFAULT_EXTENSION: &str = "m4a";

#[derive(Debug, Error)]
pub enum DetectError {
    #[error("no filenames to compare")]
    EmptyInput,
}

/// How filenames are split and which of them take part in comparisons.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetectOptions {
    pub delimiter: String,
    /// Suffix the current filename must end with; stored without a leading dot.
    pub extension: String,
}

impl Default for DetectOptions {
    fn default() -> Self {
        Self::new(DEFAULT_DELIMITER, DEFAULT_EXTENSION)
    }
}

impl DetectOptions {
    pub fn new(delimiter: impl Into<String>, extension: &str) -> Self {
        Self {
            delimiter: delimiter.into(),
            extension: extension.trim().trim_start_matches('.').to_string(),
        }
    }

    fn matches_extension(&self, raw: &str) -> bool {
        raw.ends_with(&self.extension)
    }
}

/// Scan `filenames` in order and report probable gaps in track numbering.
///
/// Each name is compared to the one immediately before it, so the input must
/// already be in (artist, album, track) order. A name that does not parse still
/// becomes the previous entry and suppresses the next comparison.
pub fn detect_gaps<S: AsRef<str>>(
    filenames: &[S],
    options: &DetectOptions,
) -> Result<Vec<Diagnostic>, DetectError> {
    let (first, rest) = filenames.split_first().ok_or(DetectError::EmptyInput)?;
    let first = first.as_ref();

    debug!(files = filenames.len(), delimiter = %options.delimiter, "detecting gaps");

    let seed = (first, Parsed::parse(first, &options.delimiter), Vec::new());
    let (_, _, diagnostics) = rest.iter().map(|s| s.as_ref()).fold(
        seed,
        |(previous_raw, previous, mut diagnostics), raw| {
            let current = Parsed::parse(raw, &options.delimiter);
            match (previous.record(), current.record()) {
                (Some(prev), Some(cur)) if options.matches_extension(raw) => {
                    compare(prev, cur, previous_raw, raw, &mut diagnostics);
                }
                _ => debug!(file = raw, "skipping comparison"),
            }
            (raw, current, diagnostics)
        },
    );

    Ok(diagnostics)
}

fn compare(
    previous: &FileRecord,
    current: &FileRecord,
    previous_raw: &str,
    raw: &str,
    out: &mut Vec<Diagnostic>,
) {
    // Nothing can be missing before track 1.
    if current.track <= 1 {
        return;
    }

    let transition = Transition::classify(previous, current);
    if transition == Transition::SameAlbumGap {
        info!(
            title = %current.title,
            "\"{raw}\" does NOT come immediately after \"{previous_raw}\""
        );
    }

    let missing = |track| Diagnostic::MissingSingle {
        artist: current.artist.clone(),
        album: current.album.clone(),
        track,
    };

    match size_gap(transition.baseline(previous), current.track) {
        Gap::None => {}
        Gap::Singles(tracks) => out.extend(tracks.map(missing)),
        Gap::Range(from, to) => out.push(Diagnostic::MissingRange {
            artist: current.artist.clone(),
            album: current.album.clone(),
            from,
            to,
        }),
        Gap::Duplicate => out.push(Diagnostic::Duplicate {
            file: raw.to_string(),
            previous: previous_raw.to_string(),
        }),
        Gap::Backwards => out.push(Diagnostic::Unclassified {
            file: raw.to_string(),
        }),
    }
}
