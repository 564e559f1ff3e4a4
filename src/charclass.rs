// Copyright (c) 2025 Hemashushu <hippospark@gmail.com>, All rights reserved.
//
// This Source Code Form is subject to the terms of
// the Mozilla Public License version 2.0 and additional exceptions.
// For more details, see the LICENSE, LICENSE.additional, and CONTRIBUTING files.

use std::fmt::Display;

use crate::chargroup::Subtractable;

/// The matching behavior for a sub-term of the expression,
/// independent of the options the whole expression is compiled with.
#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy, Default)]
pub enum MatchingBehavior {
    #[default]
    Default,
    ECMAScript,
    Unicode,
}

impl MatchingBehavior {
    pub const CANONICAL: MatchingBehavior = MatchingBehavior::Unicode;
}

#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy)]
pub enum ClassName {
    Word,
    NonWord,
    WhiteSpace,
    NonWhiteSpace,
    Digit,
    NonDigit,
}

/// A predefined set of characters.
#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy)]
pub struct CharacterClass {
    set: &'static str,
    bracketed: bool,
}

impl CharacterClass {
    const fn bracketed(set: &'static str) -> Self {
        Self {
            set,
            bracketed: true,
        }
    }

    const fn bare(set: &'static str) -> Self {
        Self {
            set,
            bracketed: false,
        }
    }

    // Wildcard, any single UTF-16 code unit.
    pub const ANY: CharacterClass = CharacterClass::bracketed("\\u0000-\\uFFFF");

    pub const WORD: CharacterClass = CharacterClass::bare("\\w");
    pub const ECMASCRIPT_WORD: CharacterClass = CharacterClass::bracketed("a-zA-Z_0-9");
    // Letter | NonspacingMark | DecimalNumber | ConnectorPunctuation
    pub const UNICODE_WORD: CharacterClass =
        CharacterClass::bracketed("\\p{L}\\p{Mn}\\p{Nd}\\p{Pc}");

    pub const NON_WORD: CharacterClass = CharacterClass::bare("\\W");
    pub const ECMASCRIPT_NON_WORD: CharacterClass = CharacterClass::bracketed("^a-zA-Z_0-9");
    pub const UNICODE_NON_WORD: CharacterClass =
        CharacterClass::bracketed("^\\p{L}\\p{Mn}\\p{Nd}\\p{Pc}");

    pub const WHITE_SPACE: CharacterClass = CharacterClass::bare("\\s");
    pub const ECMASCRIPT_WHITE_SPACE: CharacterClass =
        CharacterClass::bracketed(" \\f\\n\\r\\t\\v");
    pub const UNICODE_WHITE_SPACE: CharacterClass =
        CharacterClass::bracketed("\\f\\n\\r\\t\\v\\x85\\p{Z}");

    pub const NON_WHITE_SPACE: CharacterClass = CharacterClass::bare("\\S");
    pub const ECMASCRIPT_NON_WHITE_SPACE: CharacterClass =
        CharacterClass::bracketed("^ \\f\\n\\r\\t\\v");
    pub const UNICODE_NON_WHITE_SPACE: CharacterClass =
        CharacterClass::bracketed("^\\f\\n\\r\\t\\v\\x85\\p{Z}");

    pub const DIGIT: CharacterClass = CharacterClass::bare("\\d");
    pub const ECMASCRIPT_DIGIT: CharacterClass = CharacterClass::bracketed("0-9");
    pub const UNICODE_DIGIT: CharacterClass = CharacterClass::bare("\\p{Nd}");

    pub const NON_DIGIT: CharacterClass = CharacterClass::bare("\\D");
    pub const ECMASCRIPT_NON_DIGIT: CharacterClass = CharacterClass::bracketed("^0-9");
    pub const UNICODE_NON_DIGIT: CharacterClass = CharacterClass::bare("\\P{Nd}");

    /// Picks the class `name` rendered for the given matching behavior.
    pub const fn select(name: ClassName, behavior: MatchingBehavior) -> CharacterClass {
        use MatchingBehavior::{Default, ECMAScript, Unicode};

        match (name, behavior) {
            (ClassName::Word, Default) => Self::WORD,
            (ClassName::Word, ECMAScript) => Self::ECMASCRIPT_WORD,
            (ClassName::Word, Unicode) => Self::UNICODE_WORD,
            (ClassName::NonWord, Default) => Self::NON_WORD,
            (ClassName::NonWord, ECMAScript) => Self::ECMASCRIPT_NON_WORD,
            (ClassName::NonWord, Unicode) => Self::UNICODE_NON_WORD,
            (ClassName::WhiteSpace, Default) => Self::WHITE_SPACE,
            (ClassName::WhiteSpace, ECMAScript) => Self::ECMASCRIPT_WHITE_SPACE,
            (ClassName::WhiteSpace, Unicode) => Self::UNICODE_WHITE_SPACE,
            (ClassName::NonWhiteSpace, Default) => Self::NON_WHITE_SPACE,
            (ClassName::NonWhiteSpace, ECMAScript) => Self::ECMASCRIPT_NON_WHITE_SPACE,
            (ClassName::NonWhiteSpace, Unicode) => Self::UNICODE_NON_WHITE_SPACE,
            (ClassName::Digit, Default) => Self::DIGIT,
            (ClassName::Digit, ECMAScript) => Self::ECMASCRIPT_DIGIT,
            (ClassName::Digit, Unicode) => Self::UNICODE_DIGIT,
            (ClassName::NonDigit, Default) => Self::NON_DIGIT,
            (ClassName::NonDigit, ECMAScript) => Self::ECMASCRIPT_NON_DIGIT,
            (ClassName::NonDigit, Unicode) => Self::UNICODE_NON_DIGIT,
        }
    }

    pub fn is_bracketed(&self) -> bool {
        self.bracketed
    }
}

impl Subtractable for CharacterClass {
    fn set(&self) -> &str {
        self.set
    }
}

impl Display for CharacterClass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.bracketed {
            write!(f, "[{}]", self.set)
        } else {
            f.write_str(self.set)
        }
    }
}
