// Copyright (c) 2025 Hemashushu <hippospark@gmail.com>, All rights reserved.
//
// This Source Code Form is subject to the terms of
// the Mozilla Public License version 2.0 and additional exceptions.
// For more details, see the LICENSE, LICENSE.additional, and CONTRIBUTING files.

use std::fmt::Display;

use crate::{
    error::PatternError,
    escapes::{escape, hex_unicode},
};

/// A set of characters from which another set can be subtracted,
/// e.g. `[a-z-[aeiou]]`.
pub trait Subtractable {
    /// The characters of the set, without the surrounding brackets.
    fn set(&self) -> &str;
}

#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy, Default)]
pub enum Sign {
    #[default]
    Positive,
    Negative,
}

impl Sign {
    /// The prefix a charset carries to indicate whether it is negative.
    pub const fn prefix(self) -> &'static str {
        match self {
            Sign::Positive => "",
            Sign::Negative => "^",
        }
    }
}

/// A bracket expression `[...]`.
///
/// A positive group matches any one of its characters, a negative group
/// (`[^...]`) matches any character that is not in the set.
#[derive(Debug, PartialEq, Eq, Hash, Clone)]
pub struct CharacterGroup {
    sign: Sign,
    // includes the sign prefix
    set: String,
}

impl CharacterGroup {
    fn with_sign(sign: Sign, term: &str) -> Self {
        Self {
            sign,
            set: format!("{}{}", sign.prefix(), term),
        }
    }

    /// A group of the characters in `set`.
    ///
    /// When `escape` is true the meta characters in `set` are replaced
    /// with their escape codes.
    pub fn from_set<'a>(
        sign: Sign,
        set: impl Into<Option<&'a str>>,
        escape_set: bool,
    ) -> Result<Self, PatternError> {
        let set = set
            .into()
            .ok_or(PatternError::MissingArgument { argument: "set" })?;

        if set.is_empty() {
            return Err(PatternError::OutOfRange {
                argument: "set",
                message: "is empty.".to_owned(),
            });
        }

        if escape_set {
            Ok(Self::with_sign(sign, &escape(set)))
        } else {
            Ok(Self::with_sign(sign, set))
        }
    }

    /// A group of individual characters, always escaped.
    pub fn from_chars(sign: Sign, set: &[char]) -> Result<Self, PatternError> {
        let set: String = set.iter().collect();
        Self::from_set(sign, set.as_str(), true)
    }

    /// A group of the characters from `first` to `last` (both included).
    ///
    /// When the range is not case-sensitive, the lower case range is followed
    /// by the upper case range.
    pub fn from_range(
        sign: Sign,
        first: char,
        last: char,
        case_sensitive: bool,
    ) -> Result<Self, PatternError> {
        let term = if case_sensitive {
            format_range(first, last)?
        } else {
            check_order(first, last)?;

            // the case mapping may reverse the order, e.g. `Z-a` becomes `z-a`
            let lower_range = format_range(simple_lowercase(first), simple_lowercase(last))?;
            let upper_range = format_range(simple_uppercase(first), simple_uppercase(last))?;
            format!("{}{}", lower_range, upper_range)
        };

        Ok(Self::with_sign(sign, &term))
    }

    /// A group of the decimal digits from `first` to `last` (both included).
    pub fn from_digits(sign: Sign, first: u32, last: u32) -> Result<Self, PatternError> {
        if first > last {
            return Err(PatternError::ReversedRange {
                first: first.to_string(),
                last: last.to_string(),
            });
        }

        if first > 9 {
            return Err(PatternError::OutOfRange {
                argument: "first",
                message: format!("must not be greater than 9, got {}.", first),
            });
        }

        if last > 9 {
            return Err(PatternError::OutOfRange {
                argument: "last",
                message: format!("must not be greater than 9, got {}.", last),
            });
        }

        Ok(Self::with_sign(sign, &format!("{}-{}", first, last)))
    }

    /// The positive group of every UTF-16 code unit.
    pub fn any() -> Self {
        Self::with_sign(
            Sign::Positive,
            &format!("{}-{}", hex_unicode('\0'), hex_unicode('\u{FFFF}')),
        )
    }

    pub fn positive<'a>(
        set: impl Into<Option<&'a str>>,
        escape_set: bool,
    ) -> Result<Self, PatternError> {
        Self::from_set(Sign::Positive, set, escape_set)
    }

    pub fn negative<'a>(
        set: impl Into<Option<&'a str>>,
        escape_set: bool,
    ) -> Result<Self, PatternError> {
        Self::from_set(Sign::Negative, set, escape_set)
    }

    pub fn positive_chars(set: &[char]) -> Result<Self, PatternError> {
        Self::from_chars(Sign::Positive, set)
    }

    pub fn negative_chars(set: &[char]) -> Result<Self, PatternError> {
        Self::from_chars(Sign::Negative, set)
    }

    pub fn positive_range(
        first: char,
        last: char,
        case_sensitive: bool,
    ) -> Result<Self, PatternError> {
        Self::from_range(Sign::Positive, first, last, case_sensitive)
    }

    pub fn negative_range(
        first: char,
        last: char,
        case_sensitive: bool,
    ) -> Result<Self, PatternError> {
        Self::from_range(Sign::Negative, first, last, case_sensitive)
    }

    pub fn positive_digits(first: u32, last: u32) -> Result<Self, PatternError> {
        Self::from_digits(Sign::Positive, first, last)
    }

    pub fn negative_digits(first: u32, last: u32) -> Result<Self, PatternError> {
        Self::from_digits(Sign::Negative, first, last)
    }

    pub fn sign(&self) -> Sign {
        self.sign
    }
}

impl Subtractable for CharacterGroup {
    fn set(&self) -> &str {
        &self.set
    }
}

impl Display for CharacterGroup {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}]", self.set)
    }
}

// the `\uXXXX` escape can not express a character above U+FFFF
fn range_endpoint(argument: &'static str, c: char) -> Result<String, PatternError> {
    if c > '\u{FFFF}' {
        return Err(PatternError::OutOfRange {
            argument,
            message: format!(
                "U+{:X} is outside the Basic Multilingual Plane.",
                c as u32
            ),
        });
    }

    Ok(hex_unicode(c))
}

fn check_order(first: char, last: char) -> Result<(), PatternError> {
    if first > last {
        return Err(PatternError::ReversedRange {
            first: first.to_string(),
            last: last.to_string(),
        });
    }

    Ok(())
}

fn format_range(first: char, last: char) -> Result<String, PatternError> {
    check_order(first, last)?;

    Ok(format!(
        "{}-{}",
        range_endpoint("first", first)?,
        range_endpoint("last", last)?
    ))
}

// Simple (one-to-one) case mapping.
//
// The standard library only provides the full mapping, which expands a few
// characters to several ones. Those with a simple mapping of their own are
// listed here, the others have no simple mapping and are kept as is.
fn simple_lowercase(c: char) -> char {
    match c {
        '\u{0130}' => 'i',
        _ => {
            let mut mapped = c.to_lowercase();
            match (mapped.next(), mapped.next()) {
                (Some(lower), None) => lower,
                _ => c,
            }
        }
    }
}

fn simple_uppercase(c: char) -> char {
    match c {
        // Greek with ypogegrammeni, mapped to the prosgegrammeni forms
        '\u{1F80}'..='\u{1F87}' | '\u{1F90}'..='\u{1F97}' | '\u{1FA0}'..='\u{1FA7}' => {
            char::from_u32(c as u32 + 8).unwrap_or(c)
        }
        '\u{1FB3}' => '\u{1FBC}',
        '\u{1FC3}' => '\u{1FCC}',
        '\u{1FF3}' => '\u{1FFC}',
        _ => {
            let mut mapped = c.to_uppercase();
            match (mapped.next(), mapped.next()) {
                (Some(upper), None) => upper,
                _ => c,
            }
        }
    }
}
