// Copyright (c) 2025 Hemashushu <hippospark@gmail.com>, All rights reserved.
//
// This Source Code Form is subject to the terms of
// the Mozilla Public License version 2.0 and additional exceptions.
// For more details, see the LICENSE, LICENSE.additional, and CONTRIBUTING files.

// character escapes of the target dialect
//
// - \u0007        bell (alarm)
// - \u0008        backspace (only inside a charset)
// - \u0009        horizontal tab
// - \u000D        carriage return
// - \u000B        vertical tab
// - \u000C        form feed
// - \u000A        new line
// - \u001B        escape
// - \nnn          octal character code, 2 or 3 digits
// - \xnn          hexadecimal character code, exactly 2 digits
// - \unnnn        UTF-16 code unit, exactly 4 digits
// - \cX           ASCII control character
//
// meta characters `\ * + ? | { [ ( ) ^ $ . #` and white space need to be
// escaped when they are used as literal characters.

use std::{borrow::Cow, fmt::Display};

use crate::error::PatternError;

#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy)]
pub enum ControlEscape {
    Bell,
    Backspace,
    Tab,
    CarriageReturn,
    VerticalTab,
    FormFeed,
    NewLine,
    Escape,

    // A new line optionally preceded by a carriage return.
    WindowsNewLine,
}

impl ControlEscape {
    pub const ALARM: ControlEscape = ControlEscape::Bell;

    pub const ALL: [ControlEscape; 9] = [
        ControlEscape::Bell,
        ControlEscape::Backspace,
        ControlEscape::Tab,
        ControlEscape::CarriageReturn,
        ControlEscape::VerticalTab,
        ControlEscape::FormFeed,
        ControlEscape::NewLine,
        ControlEscape::Escape,
        ControlEscape::WindowsNewLine,
    ];

    pub const fn as_str(self) -> &'static str {
        match self {
            ControlEscape::Bell => "\\u0007",
            ControlEscape::Backspace => "\\u0008",
            ControlEscape::Tab => "\\u0009",
            ControlEscape::CarriageReturn => "\\u000D",
            ControlEscape::VerticalTab => "\\u000B",
            ControlEscape::FormFeed => "\\u000C",
            ControlEscape::NewLine => "\\u000A",
            ControlEscape::Escape => "\\u001B",
            ControlEscape::WindowsNewLine => "\\u000D?\\u000A",
        }
    }
}

impl Display for ControlEscape {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

fn is_meta_char(c: char) -> bool {
    matches!(
        c,
        '\\' | '*'
            | '+'
            | '?'
            | '|'
            | '{'
            | '['
            | '('
            | ')'
            | '^'
            | '$'
            | '.'
            | '#'
            | ' '
            | '\t'
            | '\n'
            | '\r'
            | '\x0C'
    )
}

/// Replaces the meta characters `\ * + ? | { [ ( ) ^ $ . #` and white space
/// (space, tab, new line, carriage return and form feed) with their escape
/// codes, so that the text matches literally.
///
/// The text is returned as is when there is nothing to escape.
pub fn escape(text: &str) -> Cow<'_, str> {
    if !text.chars().any(is_meta_char) {
        return Cow::Borrowed(text);
    }

    let mut out = String::with_capacity(text.len() * 2);
    for c in text.chars() {
        match c {
            '\t' => out.push_str("\\t"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\x0C' => out.push_str("\\f"),
            _ if is_meta_char(c) => {
                out.push('\\');
                out.push(c);
            }
            _ => out.push(c),
        }
    }

    Cow::Owned(out)
}

/// The `\uXXXX` representation of a character.
///
/// Characters outside the Basic Multilingual Plane are written as
/// their UTF-16 surrogate pair, e.g. U+1F600 becomes two escapes.
pub fn hex_unicode(c: char) -> String {
    let mut units = [0u16; 2];
    c.encode_utf16(&mut units)
        .iter()
        .map(|unit| format!("\\u{:04X}", unit))
        .collect()
}

struct NumericEscape {
    argument: &'static str,
    length_argument: &'static str,
    prefix: &'static str,
    radix: u32,
    lengths: &'static [usize],
    expected_length: &'static str,
}

const OCTAL: NumericEscape = NumericEscape {
    argument: "octal_number",
    length_argument: "octal_number.length",
    prefix: "\\",
    radix: 8,
    lengths: &[2, 3],
    expected_length: "must be 2 or 3",
};

const HEXADECIMAL: NumericEscape = NumericEscape {
    argument: "hexadecimal_number",
    length_argument: "hexadecimal_number.length",
    prefix: "\\x",
    radix: 16,
    lengths: &[2],
    expected_length: "must be 2",
};

const UNICODE: NumericEscape = NumericEscape {
    argument: "hexadecimal",
    length_argument: "hexadecimal.length",
    prefix: "\\u",
    radix: 16,
    lengths: &[4],
    expected_length: "must be 4",
};

impl NumericEscape {
    // checks, in order: presence, emptiness, sign, digits and length.
    fn format(&self, code: Option<&str>) -> Result<String, PatternError> {
        let code = code.ok_or(PatternError::MissingArgument {
            argument: self.argument,
        })?;

        if code.is_empty() {
            return Err(PatternError::OutOfRange {
                argument: self.argument,
                message: "is empty.".to_owned(),
            });
        }

        if code.starts_with('-') {
            return Err(PatternError::InvalidArgument {
                argument: self.argument,
                message: format!("\"{}\" is prefixed with a negative sign.", code),
            });
        }

        if !code.chars().all(|c| c.is_digit(self.radix)) {
            return Err(PatternError::InvalidFormat {
                argument: self.argument,
                value: code.to_owned(),
                radix: self.radix,
            });
        }

        let length = code.chars().count();
        if !self.lengths.contains(&length) {
            return Err(PatternError::OutOfRange {
                argument: self.length_argument,
                message: format!("{}, got {}.", self.expected_length, length),
            });
        }

        Ok(format!("{}{}", self.prefix, code))
    }
}

/// An ASCII character by its octal code of two or three digits, e.g. `\40`
/// is a space.
pub fn octal<'a>(octal_number: impl Into<Option<&'a str>>) -> Result<String, PatternError> {
    OCTAL.format(octal_number.into())
}

/// An ASCII character by its hexadecimal code of exactly two digits, e.g. `\x20`.
pub fn hexadecimal<'a>(
    hexadecimal_number: impl Into<Option<&'a str>>,
) -> Result<String, PatternError> {
    HEXADECIMAL.format(hexadecimal_number.into())
}

/// A UTF-16 code unit by its hexadecimal code of exactly four digits.
pub fn unicode<'a>(hexadecimal: impl Into<Option<&'a str>>) -> Result<String, PatternError> {
    UNICODE.format(hexadecimal.into())
}

/// The ASCII control character named by a letter, e.g. `\cC` for Ctrl-C.
pub fn ascii_control(control_character: char) -> String {
    format!("\\c{}", control_character)
}

/// A character written as its code, so that it never acts as a meta character.
pub fn literal(character: char) -> String {
    hex_unicode(character)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use crate::error::PatternError;

    use super::{ascii_control, escape, hex_unicode, hexadecimal, literal, octal, unicode, ControlEscape};

    #[test]
    fn test_control_escapes() {
        assert_eq!(ControlEscape::Bell.to_string(), "\\u0007");
        assert_eq!(ControlEscape::ALARM.to_string(), "\\u0007");
        assert_eq!(ControlEscape::Backspace.to_string(), "\\u0008");
        assert_eq!(ControlEscape::Tab.to_string(), "\\u0009");
        assert_eq!(ControlEscape::CarriageReturn.to_string(), "\\u000D");
        assert_eq!(ControlEscape::VerticalTab.to_string(), "\\u000B");
        assert_eq!(ControlEscape::FormFeed.to_string(), "\\u000C");
        assert_eq!(ControlEscape::NewLine.to_string(), "\\u000A");
        assert_eq!(ControlEscape::Escape.to_string(), "\\u001B");
        assert_eq!(
            ControlEscape::WindowsNewLine.to_string(),
            "\\u000D?\\u000A"
        );
    }

    #[test]
    fn test_control_escapes_parse() {
        for item in ControlEscape::ALL {
            assert!(
                regex_syntax::parse(item.as_str()).is_ok(),
                "{:?} does not parse",
                item
            );
        }
    }

    #[test]
    fn test_escape() {
        assert_eq!(escape("abc"), "abc");
        assert!(matches!(escape("abc"), std::borrow::Cow::Borrowed(_)));

        assert_eq!(
            escape("\\*+?|{[()^$.# "),
            "\\\\\\*\\+\\?\\|\\{\\[\\(\\)\\^\\$\\.\\#\\ "
        );
        assert_eq!(escape("initial term"), "initial\\ term");
        assert_eq!(escape("a\tb\nc\rd\x0Ce"), "a\\tb\\nc\\rd\\fe");

        // closing brackets are left alone
        assert_eq!(escape("]}"), "]}");
        assert_eq!(escape("-"), "-");
    }

    #[test]
    fn test_hex_unicode() {
        assert_eq!(hex_unicode('\x01'), "\\u0001");
        assert_eq!(hex_unicode('a'), "\\u0061");
        assert_eq!(hex_unicode('Z'), "\\u005A");
        assert_eq!(hex_unicode('\u{FFFF}'), "\\uFFFF");
        assert_eq!(hex_unicode('\u{1F600}'), "\\uD83D\\uDE00");
    }

    #[test]
    fn test_octal() {
        assert_eq!(octal("40"), Ok("\\40".to_owned()));
        assert_eq!(octal("177"), Ok("\\177".to_owned()));

        assert_eq!(
            octal(None),
            Err(PatternError::MissingArgument {
                argument: "octal_number"
            })
        );
        assert!(matches!(octal(""), Err(PatternError::OutOfRange { .. })));
        assert!(matches!(
            octal("-10"),
            Err(PatternError::InvalidArgument { .. })
        ));
        assert_eq!(
            octal("80"),
            Err(PatternError::InvalidFormat {
                argument: "octal_number",
                value: "80".to_owned(),
                radix: 8
            })
        );
        assert_eq!(
            octal("0"),
            Err(PatternError::OutOfRange {
                argument: "octal_number.length",
                message: "must be 2 or 3, got 1.".to_owned()
            })
        );
        assert!(matches!(octal("1234"), Err(PatternError::OutOfRange { .. })));
    }

    #[test]
    fn test_hexadecimal() {
        assert_eq!(hexadecimal("20"), Ok("\\x20".to_owned()));
        assert_eq!(hexadecimal("fF"), Ok("\\xfF".to_owned()));

        assert!(matches!(
            hexadecimal(None),
            Err(PatternError::MissingArgument { .. })
        ));
        assert!(matches!(
            hexadecimal(""),
            Err(PatternError::OutOfRange { .. })
        ));
        assert!(matches!(
            hexadecimal("-10"),
            Err(PatternError::InvalidArgument { .. })
        ));
        assert!(matches!(
            hexadecimal("GF"),
            Err(PatternError::InvalidFormat { radix: 16, .. })
        ));
        assert!(matches!(
            hexadecimal("0"),
            Err(PatternError::OutOfRange {
                argument: "hexadecimal_number.length",
                ..
            })
        ));
    }

    #[test]
    fn test_unicode() {
        assert_eq!(unicode("0020"), Ok("\\u0020".to_owned()));

        assert!(matches!(
            unicode(None),
            Err(PatternError::MissingArgument { .. })
        ));
        assert!(matches!(unicode(""), Err(PatternError::OutOfRange { .. })));
        assert!(matches!(
            unicode("-10"),
            Err(PatternError::InvalidArgument { .. })
        ));
        assert!(matches!(
            unicode("GF"),
            Err(PatternError::InvalidFormat { .. })
        ));
        assert!(matches!(
            unicode("0"),
            Err(PatternError::OutOfRange {
                argument: "hexadecimal.length",
                ..
            })
        ));
    }

    #[test]
    fn test_ascii_control_and_literal() {
        assert_eq!(ascii_control('C'), "\\cC");
        assert_eq!(literal('*'), "\\u002A");
        assert_eq!(literal('.'), "\\u002E");
    }
}
