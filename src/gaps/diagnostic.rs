/// One finding of the gap scan, in the order it was discovered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Diagnostic {
    /// A single track number that should exist between two neighbours.
    MissingSingle {
        artist: String,
        album: String,
        track: u32,
    },
    /// A run of missing track numbers, `from..=to`.
    MissingRange {
        artist: String,
        album: String,
        from: u32,
        to: u32,
    },
    /// Two files of the same album carry the same track number.
    Duplicate { file: String, previous: String },
    /// The track number went backwards within an album.
    Unclassified { file: String },
}

impl Diagnostic {
    /// Human-readable line(s) for this finding, joining fields with `delimiter`.
    pub fn render(&self, delimiter: &str) -> String {
        match self {
            Diagnostic::MissingSingle {
                artist,
                album,
                track,
            } => format!("{artist}{delimiter}{album}{delimiter}{track}"),
            Diagnostic::MissingRange {
                artist,
                album,
                from,
                to,
            } => format!("{artist}{delimiter}{album} - (tracks {from} to {to})"),
            Diagnostic::Duplicate { file, previous } => {
                format!("Possible duplicates:\n\t{file}\n\t{previous}")
            }
            Diagnostic::Unclassified { file } => format!("\tPlease check {file}"),
        }
    }
}
