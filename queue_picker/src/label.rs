// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use crate::STRIPPED_SUFFIXES;

/// Make a human readable label from a raw identifier (usually a file name).
///
/// 1. Each of `.mp4`, `.mp3`, `.ogg` is removed wherever it occurs in the string, not
///    only at the end. Each suffix gets one replacement pass, in that order, so
///    removing one suffix can't "reveal" another one that gets removed later in the
///    same pass.
/// 1. Every `_` becomes a space.
#[must_use]
pub fn format_label(identifier: &str) -> String {
    let without_suffixes = STRIPPED_SUFFIXES
        .iter()
        .fold(identifier.to_string(), |acc, suffix| acc.replace(suffix, ""));
    without_suffixes.replace('_', " ")
}

#[cfg(test)]
mod tests {
    use test_case::test_case;

    use super::*;
    use crate::assert_eq2;

    #[test_case("song.mp3", "song")]
    #[test_case("Some_Great_Song.mp4", "Some Great Song")]
    #[test_case("track_01.ogg", "track 01")]
    #[test_case("no_extension", "no extension")]
    #[test_case("song.flac", "song.flac")]
    #[test_case("", "")]
    fn test_format_label(identifier: &str, expected: &str) {
        assert_eq2!(format_label(identifier), expected);
    }

    #[test]
    fn test_suffix_is_removed_anywhere_in_the_string() {
        assert_eq2!(format_label("a.mp3.backup"), "a.backup");
        assert_eq2!(format_label("mix.ogg_and_more.mp4"), "mix and more");
    }

    #[test]
    fn test_single_pass_per_suffix() {
        // Removing ".mp3" from ".mp.mp33" leaves ".mp3", which is not removed again.
        assert_eq2!(format_label("x.mp.mp33"), "x.mp3");
    }

    #[test]
    fn test_is_deterministic() {
        let identifier = "The_Same_Song.mp3";
        assert_eq2!(format_label(identifier), format_label(identifier));
    }
}
