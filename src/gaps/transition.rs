use std::ops::RangeInclusive;

use super::record::FileRecord;

/// How a record relates to the record before it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Transition {
    /// Same album, next track number.
    Contiguous,
    /// Same album, anything other than the next track number.
    SameAlbumGap,
    /// Same artist, different album.
    NewAlbumUnderflow,
    /// Different artist.
    NewArtistUnderflow,
}

impl Transition {
    pub(crate) fn classify(previous: &FileRecord, current: &FileRecord) -> Self {
        if current.artist != previous.artist {
            Transition::NewArtistUnderflow
        } else if current.album != previous.album {
            Transition::NewAlbumUnderflow
        } else if previous.track.checked_add(1) == Some(current.track) {
            Transition::Contiguous
        } else {
            Transition::SameAlbumGap
        }
    }

    /// Track number the current record should be compared against.
    ///
    /// Albums are assumed to start at track 1, so a new album counts from 0.
    pub(crate) fn baseline(self, previous: &FileRecord) -> u32 {
        match self {
            Transition::Contiguous | Transition::SameAlbumGap => previous.track,
            Transition::NewAlbumUnderflow | Transition::NewArtistUnderflow => 0,
        }
    }
}

/// Size of the hole between a baseline track number and the current one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Gap {
    None,
    /// One or two missing tracks, reported individually.
    Singles(RangeInclusive<u32>),
    /// Three or more missing tracks, reported as one span.
    Range(u32, u32),
    Duplicate,
    Backwards,
}

pub(crate) fn size_gap(baseline: u32, current: u32) -> Gap {
    let delta = i64::from(current) - i64::from(baseline);
    match delta {
        1 => Gap::None,
        0 => Gap::Duplicate,
        2 | 3 => Gap::Singles(baseline + 1..=current - 1),
        d if d > 3 => Gap::Range(baseline + 1, current - 1),
        _ => Gap::Backwards,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rec(artist: &str, album: &str, track: u32) -> FileRecord {
        FileRecord {
            artist: artist.into(),
            album: album.into(),
            track,
            title: "t.m4a".into(),
        }
    }

    #[test]
    fn classify_orders_artist_before_album_before_track() {
        let prev = rec("A", "X", 4);
        assert_eq!(Transition::classify(&prev, &rec("A", "X", 5)), Transition::Contiguous);
        assert_eq!(Transition::classify(&prev, &rec("A", "X", 7)), Transition::SameAlbumGap);
        assert_eq!(Transition::classify(&prev, &rec("A", "X", 4)), Transition::SameAlbumGap);
        assert_eq!(Transition::classify(&prev, &rec("A", "Y", 5)), Transition::NewAlbumUnderflow);
        assert_eq!(Transition::classify(&prev, &rec("B", "X", 5)), Transition::NewArtistUnderflow);
    }

    #[test]
    fn classify_does_not_overflow_on_max_track() {
        let prev = rec("A", "X", u32::MAX);
        assert_eq!(Transition::classify(&prev, &rec("A", "X", 2)), Transition::SameAlbumGap);
    }

    #[test]
    fn baseline_is_zero_across_album_boundaries() {
        let prev = rec("A", "X", 9);
        assert_eq!(Transition::SameAlbumGap.baseline(&prev), 9);
        assert_eq!(Transition::NewAlbumUnderflow.baseline(&prev), 0);
        assert_eq!(Transition::NewArtistUnderflow.baseline(&prev), 0);
    }

    #[test]
    fn size_gap_tiers() {
        assert_eq!(size_gap(4, 5), Gap::None);
        assert_eq!(size_gap(4, 4), Gap::Duplicate);
        assert_eq!(size_gap(4, 6), Gap::Singles(5..=5));
        assert_eq!(size_gap(4, 7), Gap::Singles(5..=6));
        assert_eq!(size_gap(4, 8), Gap::Range(5, 7));
        assert_eq!(size_gap(4, 2), Gap::Backwards);
        assert_eq!(size_gap(0, 2), Gap::Singles(1..=1));
        assert_eq!(size_gap(0, 12), Gap::Range(1, 11));
    }
}
