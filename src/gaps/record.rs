use std::path::Path;

/// One filename split into its four fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileRecord {
    pub artist: String,
    pub album: String,
    pub track: u32,
    /// Everything after the track number, extension included.
    pub title: String,
}

/// Result of parsing a single filename.
///
/// `Invalid` is an ordinary outcome, not an error: it still takes the place of
/// the previous record in the comparison pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Parsed {
    Record(FileRecord),
    Invalid,
}

impl Parsed {
    /// Parse the final path component of `raw`.
    ///
    /// A record needs exactly four delimiter-separated fields and a track field
    /// that parses as an unsigned integer.
    pub fn parse(raw: &str, delimiter: &str) -> Self {
        if delimiter.is_empty() {
            return Parsed::Invalid;
        }

        let segments: Vec<&str> = file_name(raw).split(delimiter).collect();
        let [artist, album, track, title] = segments.as_slice() else {
            return Parsed::Invalid;
        };

        match track.parse::<u32>() {
            Ok(track) => Parsed::Record(FileRecord {
                artist: artist.to_string(),
                album: album.to_string(),
                track,
                title: title.to_string(),
            }),
            Err(_) => Parsed::Invalid,
        }
    }

    pub fn record(&self) -> Option<&FileRecord> {
        match self {
            Parsed::Record(r) => Some(r),
            Parsed::Invalid => None,
        }
    }
}

/// Last path component, or the whole string when there is none.
fn file_name(raw: &str) -> &str {
    Path::new(raw)
        .file_name()
        .and_then(|s| s.to_str())
        .unwrap_or(raw)
}
