// Copyright (c) 2025 Hemashushu <hippospark@gmail.com>, All rights reserved.
//
// This Source Code Form is subject to the terms of
// the Mozilla Public License version 2.0 and additional exceptions.
// For more details, see the LICENSE, LICENSE.additional, and CONTRIBUTING files.

use std::fmt::Display;

/// Anchors, or atomic zero-width assertions, specify a position in the
/// string where a match must occur.
#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy)]
pub enum Anchor {
    // `^`, the beginning of the string, or of the line in multiline mode.
    StartOfStringOrLine,

    // `$`, the end of the string or before `\n` at the end of the string,
    // or of the line in multiline mode.
    EndOfStringOrLine,

    // `\A`, the beginning of the string only.
    StartOfStringOnly,

    // `\Z`, the end of the string, or before `\n` at the end of the string.
    EndOfStringOrBeforeEndingNewline,

    // `\z`, the end of the string only.
    EndOfStringOnly,

    // `\G`, the position where the previous match ended.
    ContiguousMatches,

    // `\b`
    WordBoundary,

    // `\B`
    NonWordBoundary,
}

impl Anchor {
    pub const ALL: [Anchor; 8] = [
        Anchor::StartOfStringOrLine,
        Anchor::EndOfStringOrLine,
        Anchor::StartOfStringOnly,
        Anchor::EndOfStringOrBeforeEndingNewline,
        Anchor::EndOfStringOnly,
        Anchor::ContiguousMatches,
        Anchor::WordBoundary,
        Anchor::NonWordBoundary,
    ];

    pub const fn as_str(self) -> &'static str {
        match self {
            Anchor::StartOfStringOrLine => "^",
            Anchor::EndOfStringOrLine => "$",
            Anchor::StartOfStringOnly => "\\A",
            Anchor::EndOfStringOrBeforeEndingNewline => "\\Z",
            Anchor::EndOfStringOnly => "\\z",
            Anchor::ContiguousMatches => "\\G",
            Anchor::WordBoundary => "\\b",
            Anchor::NonWordBoundary => "\\B",
        }
    }
}

impl Display for Anchor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
