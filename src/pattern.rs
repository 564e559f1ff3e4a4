// Copyright (c) 2025 Hemashushu <hippospark@gmail.com>, All rights reserved.
//
// This Source Code Form is subject to the terms of
// the Mozilla Public License version 2.0 and additional exceptions.
// For more details, see the LICENSE, LICENSE.additional, and CONTRIBUTING files.

use std::fmt::Display;

use crate::{
    anchors::Anchor,
    charclass::{CharacterClass, ClassName, MatchingBehavior},
    chargroup::{CharacterGroup, Sign, Subtractable},
    error::PatternError,
    escapes::{self, ControlEscape},
    unicode::{UnicodeBlock, UnicodeCategory},
};

/// Builds a regular expression pattern term by term.
///
/// Every term is appended as a capturing group, e.g.
///
/// ```
/// use regex_fluent::{MatchingBehavior, Pattern};
///
/// let mut pattern = Pattern::new();
/// pattern
///     .start_of_line()
///     .digit(MatchingBehavior::Default)
///     .any_in("ae", true)
///     .unwrap()
///     .end_of_line();
///
/// assert_eq!(pattern.to_string(), "(^)(\\d)([ae])($)");
/// ```
///
/// The methods that validate their arguments return `Result`, the pattern
/// is left untouched when they fail.
#[derive(Debug, PartialEq, Eq, Clone, Default)]
pub struct Pattern {
    buffer: String,
}

impl Pattern {
    pub fn new() -> Self {
        Self::default()
    }

    /// A pattern that starts with `term`, see [`Pattern::add`].
    pub fn with_term<'a>(term: impl Into<Option<&'a str>>, escape: bool) -> Self {
        let mut pattern = Self::new();
        pattern.add(term, escape);
        pattern
    }

    fn push(&mut self, term: &str) -> &mut Self {
        trace!("append term: ({})", term);

        self.buffer.push('(');
        self.buffer.push_str(term);
        self.buffer.push(')');
        self
    }

    fn try_push<T: Display>(
        &mut self,
        term: Result<T, PatternError>,
    ) -> Result<&mut Self, PatternError> {
        match term {
            Ok(term) => Ok(self.push(&term.to_string())),
            Err(e) => {
                debug!("term rejected: {}", e);
                Err(e)
            }
        }
    }

    /// Adds a trivial term.
    ///
    /// `None` adds an empty group. When `escape` is true the characters
    /// `\ * + ? | { [ ( ) ^ $ . #` and white space are replaced with their
    /// escape codes.
    pub fn add<'a>(&mut self, term: impl Into<Option<&'a str>>, escape: bool) -> &mut Self {
        match term.into() {
            None => self.push(""),
            Some(term) if escape => self.push(&escapes::escape(term)),
            Some(term) => self.push(term),
        }
    }

    /// Adds the rendering of a group, a class, an anchor or any other term,
    /// without escaping.
    pub fn add_term<T: Display + ?Sized>(&mut self, term: &T) -> &mut Self {
        self.push(&term.to_string())
    }

    // anchors

    /// `^`
    pub fn start_of_line(&mut self) -> &mut Self {
        self.anchor(Anchor::StartOfStringOrLine)
    }

    /// `$`
    pub fn end_of_line(&mut self) -> &mut Self {
        self.anchor(Anchor::EndOfStringOrLine)
    }

    /// `\A`
    pub fn start_of_string(&mut self) -> &mut Self {
        self.anchor(Anchor::StartOfStringOnly)
    }

    /// The end of the string.
    ///
    /// In perl mode (`\Z`) the match may also occur before `\n` at the end
    /// of the string, otherwise (`\z`) only at the very end.
    pub fn end_of_string(&mut self, perl_mode: bool) -> &mut Self {
        if perl_mode {
            self.anchor(Anchor::EndOfStringOrBeforeEndingNewline)
        } else {
            self.anchor(Anchor::EndOfStringOnly)
        }
    }

    /// `\G`
    pub fn contiguous_match(&mut self) -> &mut Self {
        self.anchor(Anchor::ContiguousMatches)
    }

    pub fn word_boundary(&mut self) -> &mut Self {
        self.anchor(Anchor::WordBoundary)
    }

    pub fn non_word_boundary(&mut self) -> &mut Self {
        self.anchor(Anchor::NonWordBoundary)
    }

    pub fn anchor(&mut self, anchor: Anchor) -> &mut Self {
        self.push(anchor.as_str())
    }

    // character classes

    fn class(&mut self, name: ClassName, behavior: MatchingBehavior) -> &mut Self {
        self.add_term(&CharacterClass::select(name, behavior))
    }

    pub fn word(&mut self, behavior: MatchingBehavior) -> &mut Self {
        self.class(ClassName::Word, behavior)
    }

    pub fn ecmascript_word(&mut self) -> &mut Self {
        self.word(MatchingBehavior::ECMAScript)
    }

    pub fn unicode_word(&mut self) -> &mut Self {
        self.word(MatchingBehavior::Unicode)
    }

    pub fn non_word(&mut self, behavior: MatchingBehavior) -> &mut Self {
        self.class(ClassName::NonWord, behavior)
    }

    pub fn ecmascript_non_word(&mut self) -> &mut Self {
        self.non_word(MatchingBehavior::ECMAScript)
    }

    pub fn unicode_non_word(&mut self) -> &mut Self {
        self.non_word(MatchingBehavior::Unicode)
    }

    pub fn white_space(&mut self, behavior: MatchingBehavior) -> &mut Self {
        self.class(ClassName::WhiteSpace, behavior)
    }

    pub fn ecmascript_white_space(&mut self) -> &mut Self {
        self.white_space(MatchingBehavior::ECMAScript)
    }

    pub fn unicode_white_space(&mut self) -> &mut Self {
        self.white_space(MatchingBehavior::Unicode)
    }

    pub fn non_white_space(&mut self, behavior: MatchingBehavior) -> &mut Self {
        self.class(ClassName::NonWhiteSpace, behavior)
    }

    pub fn ecmascript_non_white_space(&mut self) -> &mut Self {
        self.non_white_space(MatchingBehavior::ECMAScript)
    }

    pub fn unicode_non_white_space(&mut self) -> &mut Self {
        self.non_white_space(MatchingBehavior::Unicode)
    }

    pub fn digit(&mut self, behavior: MatchingBehavior) -> &mut Self {
        self.class(ClassName::Digit, behavior)
    }

    pub fn ecmascript_digit(&mut self) -> &mut Self {
        self.digit(MatchingBehavior::ECMAScript)
    }

    pub fn unicode_digit(&mut self) -> &mut Self {
        self.digit(MatchingBehavior::Unicode)
    }

    pub fn non_digit(&mut self, behavior: MatchingBehavior) -> &mut Self {
        self.class(ClassName::NonDigit, behavior)
    }

    pub fn ecmascript_non_digit(&mut self) -> &mut Self {
        self.non_digit(MatchingBehavior::ECMAScript)
    }

    pub fn unicode_non_digit(&mut self) -> &mut Self {
        self.non_digit(MatchingBehavior::Unicode)
    }

    /// Any single character, including `\n`.
    pub fn any(&mut self) -> &mut Self {
        self.add_term(&CharacterClass::ANY)
    }

    // character groups

    pub fn any_in<'a>(
        &mut self,
        set: impl Into<Option<&'a str>>,
        escape: bool,
    ) -> Result<&mut Self, PatternError> {
        self.try_push(CharacterGroup::from_set(Sign::Positive, set, escape))
    }

    pub fn any_in_chars(&mut self, set: &[char]) -> Result<&mut Self, PatternError> {
        self.try_push(CharacterGroup::from_chars(Sign::Positive, set))
    }

    pub fn range(
        &mut self,
        first: char,
        last: char,
        case_sensitive: bool,
    ) -> Result<&mut Self, PatternError> {
        self.try_push(CharacterGroup::from_range(
            Sign::Positive,
            first,
            last,
            case_sensitive,
        ))
    }

    pub fn digit_range(&mut self, first: u32, last: u32) -> Result<&mut Self, PatternError> {
        self.try_push(CharacterGroup::from_digits(Sign::Positive, first, last))
    }

    pub fn any_not_in<'a>(
        &mut self,
        set: impl Into<Option<&'a str>>,
        escape: bool,
    ) -> Result<&mut Self, PatternError> {
        self.try_push(CharacterGroup::from_set(Sign::Negative, set, escape))
    }

    pub fn any_not_in_chars(&mut self, set: &[char]) -> Result<&mut Self, PatternError> {
        self.try_push(CharacterGroup::from_chars(Sign::Negative, set))
    }

    pub fn not_in_range(
        &mut self,
        first: char,
        last: char,
        case_sensitive: bool,
    ) -> Result<&mut Self, PatternError> {
        self.try_push(CharacterGroup::from_range(
            Sign::Negative,
            first,
            last,
            case_sensitive,
        ))
    }

    pub fn not_in_digit_range(&mut self, first: u32, last: u32) -> Result<&mut Self, PatternError> {
        self.try_push(CharacterGroup::from_digits(Sign::Negative, first, last))
    }

    /// Excludes the characters of one group from another set,
    /// e.g. `[a-z-[aeiou]]`.
    pub fn subtraction<B: Subtractable + ?Sized>(
        &mut self,
        base: &B,
        excluded: &CharacterGroup,
    ) -> &mut Self {
        self.push(&format!("[{}-{}]", base.set(), excluded))
    }

    // unicode groups

    pub fn unicode_block(&mut self, block: UnicodeBlock) -> &mut Self {
        self.add_term(&block.positive())
    }

    pub fn not_unicode_block(&mut self, block: UnicodeBlock) -> &mut Self {
        self.add_term(&block.negative())
    }

    pub fn unicode_category(&mut self, category: UnicodeCategory) -> &mut Self {
        self.add_term(&category.positive())
    }

    pub fn not_unicode_category(&mut self, category: UnicodeCategory) -> &mut Self {
        self.add_term(&category.negative())
    }

    // character escapes

    fn control(&mut self, control: ControlEscape) -> &mut Self {
        self.push(control.as_str())
    }

    pub fn bell(&mut self) -> &mut Self {
        self.control(ControlEscape::Bell)
    }

    pub fn backspace(&mut self) -> &mut Self {
        self.control(ControlEscape::Backspace)
    }

    pub fn tab(&mut self) -> &mut Self {
        self.control(ControlEscape::Tab)
    }

    pub fn carriage_return(&mut self) -> &mut Self {
        self.control(ControlEscape::CarriageReturn)
    }

    pub fn vertical_tab(&mut self) -> &mut Self {
        self.control(ControlEscape::VerticalTab)
    }

    pub fn form_feed(&mut self) -> &mut Self {
        self.control(ControlEscape::FormFeed)
    }

    /// A line feed, or in windows mode an optional carriage return
    /// followed by a line feed.
    pub fn new_line(&mut self, windows_mode: bool) -> &mut Self {
        if windows_mode {
            self.control(ControlEscape::WindowsNewLine)
        } else {
            self.control(ControlEscape::NewLine)
        }
    }

    /// The escape character `\u001B`.
    pub fn escape(&mut self) -> &mut Self {
        self.control(ControlEscape::Escape)
    }

    /// A character by its 2 or 3 digit octal code, e.g. `\040`.
    pub fn octal<'a>(
        &mut self,
        octal_number: impl Into<Option<&'a str>>,
    ) -> Result<&mut Self, PatternError> {
        self.try_push(escapes::octal(octal_number))
    }

    /// A character by its 2 digit hexadecimal code, e.g. `\x20`.
    pub fn hexadecimal<'a>(
        &mut self,
        hexadecimal_number: impl Into<Option<&'a str>>,
    ) -> Result<&mut Self, PatternError> {
        self.try_push(escapes::hexadecimal(hexadecimal_number))
    }

    /// A UTF-16 code unit by its 4 digit hexadecimal code, e.g. `\u0020`.
    pub fn unicode<'a>(
        &mut self,
        hexadecimal: impl Into<Option<&'a str>>,
    ) -> Result<&mut Self, PatternError> {
        self.try_push(escapes::unicode(hexadecimal))
    }

    /// The ASCII control character `\cX`, where X is the letter of the
    /// control character, e.g. `\cC` for CTRL-C.
    pub fn ascii_control(&mut self, control_character: char) -> &mut Self {
        self.push(&escapes::ascii_control(control_character))
    }

    pub fn literal(&mut self, character: char) -> &mut Self {
        self.push(&escapes::literal(character))
    }

    // buffer

    pub fn as_str(&self) -> &str {
        &self.buffer
    }

    pub fn len(&self) -> usize {
        self.buffer.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    pub fn clear(&mut self) {
        self.buffer.clear();
    }
}

impl Display for Pattern {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.buffer)
    }
}

impl From<Pattern> for String {
    fn from(value: Pattern) -> Self {
        value.buffer
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use crate::{
        anchors::Anchor,
        charclass::{CharacterClass, MatchingBehavior},
        chargroup::CharacterGroup,
        error::PatternError,
        escapes::ControlEscape,
        unicode::{UnicodeBlock, UnicodeCategory},
    };

    use super::Pattern;

    #[test]
    fn test_pattern_new() {
        let pattern = Pattern::new();
        assert_eq!(pattern.to_string(), "");
        assert!(pattern.is_empty());
        assert_eq!(pattern.len(), 0);

        assert_eq!(Pattern::with_term("a.b", true).to_string(), "(a\\.b)");
        assert_eq!(Pattern::with_term("a.b", false).to_string(), "(a.b)");
        assert_eq!(Pattern::with_term(None, true).to_string(), "()");
    }

    #[test]
    fn test_pattern_add() {
        let mut pattern = Pattern::new();
        pattern
            .add("1+1=2", true)
            .add(None, true)
            .add("(x)", false)
            .add("tab\there", true);

        assert_eq!(pattern.as_str(), "(1\\+1=2)()((x))(tab\\there)");
        assert_eq!(pattern.len(), pattern.as_str().len());

        pattern.clear();
        assert!(pattern.is_empty());
    }

    #[test]
    fn test_pattern_add_term() {
        let mut pattern = Pattern::new();
        pattern
            .add_term(&CharacterGroup::negative_chars(&['x', 'y']).unwrap())
            .add_term(&CharacterClass::ECMASCRIPT_DIGIT)
            .add_term(&UnicodeBlock::Thai.negative())
            .add_term(&Anchor::WordBoundary)
            .add_term(&ControlEscape::Tab)
            .add_term("a+");

        assert_eq!(
            pattern.to_string(),
            "([^xy])([0-9])(\\P{IsThai})(\\b)(\\u0009)(a+)"
        );
    }

    #[test]
    fn test_pattern_anchors() {
        let mut pattern = Pattern::new();
        pattern
            .start_of_line()
            .end_of_line()
            .start_of_string()
            .end_of_string(true)
            .end_of_string(false)
            .contiguous_match()
            .word_boundary()
            .non_word_boundary()
            .anchor(Anchor::EndOfStringOnly);

        assert_eq!(
            pattern.to_string(),
            "(^)($)(\\A)(\\Z)(\\z)(\\G)(\\b)(\\B)(\\z)"
        );
    }

    #[test]
    fn test_pattern_classes() {
        let mut pattern = Pattern::new();
        pattern.digit(MatchingBehavior::Default);
        assert_eq!(pattern.to_string(), "(\\d)");

        let mut pattern = Pattern::new();
        pattern.word(MatchingBehavior::ECMAScript);
        assert_eq!(pattern.to_string(), "([a-zA-Z_0-9])");

        let mut pattern = Pattern::new();
        pattern
            .word(MatchingBehavior::Default)
            .non_word(MatchingBehavior::Default)
            .white_space(MatchingBehavior::Default)
            .non_white_space(MatchingBehavior::Default)
            .digit(MatchingBehavior::Default)
            .non_digit(MatchingBehavior::Default);
        assert_eq!(pattern.to_string(), "(\\w)(\\W)(\\s)(\\S)(\\d)(\\D)");

        let mut pattern = Pattern::new();
        pattern
            .ecmascript_word()
            .ecmascript_non_word()
            .ecmascript_white_space()
            .ecmascript_non_white_space()
            .ecmascript_digit()
            .ecmascript_non_digit();
        assert_eq!(
            pattern.to_string(),
            "([a-zA-Z_0-9])([^a-zA-Z_0-9])([ \\f\\n\\r\\t\\v])([^ \\f\\n\\r\\t\\v])([0-9])([^0-9])"
        );

        let mut pattern = Pattern::new();
        pattern
            .unicode_word()
            .unicode_non_word()
            .unicode_white_space()
            .unicode_non_white_space()
            .unicode_digit()
            .unicode_non_digit();
        assert_eq!(
            pattern.to_string(),
            "([\\p{L}\\p{Mn}\\p{Nd}\\p{Pc}])([^\\p{L}\\p{Mn}\\p{Nd}\\p{Pc}])\
            ([\\f\\n\\r\\t\\v\\x85\\p{Z}])([^\\f\\n\\r\\t\\v\\x85\\p{Z}])\
            (\\p{Nd})(\\P{Nd})"
        );

        let mut pattern = Pattern::new();
        pattern.any();
        assert_eq!(pattern.to_string(), "([\\u0000-\\uFFFF])");
    }

    #[test]
    fn test_pattern_groups() {
        let mut pattern = Pattern::new();
        pattern.any_in("ae", true).unwrap();
        assert_eq!(pattern.to_string(), "([ae])");

        let mut pattern = Pattern::new();
        pattern.range('a', 'z', true).unwrap();
        assert_eq!(pattern.to_string(), "([\\u0061-\\u007A])");

        let mut pattern = Pattern::new();
        pattern
            .any_in_chars(&['$', '1'])
            .unwrap()
            .any_not_in("a.", false)
            .unwrap()
            .any_not_in_chars(&['#'])
            .unwrap()
            .not_in_range('a', 'b', false)
            .unwrap()
            .digit_range(0, 5)
            .unwrap()
            .not_in_digit_range(6, 9)
            .unwrap();
        assert_eq!(
            pattern.to_string(),
            "([\\$1])([^a.])([^\\#])([^\\u0061-\\u0062\\u0041-\\u0042])([0-5])([^6-9])"
        );
    }

    #[test]
    fn test_pattern_groups_errors() {
        let mut pattern = Pattern::with_term("x", false);

        assert_eq!(
            pattern.any_in(None, true).err(),
            Some(PatternError::MissingArgument { argument: "set" })
        );
        assert!(matches!(
            pattern.any_not_in("", true),
            Err(PatternError::OutOfRange { .. })
        ));
        assert!(matches!(
            pattern.range('z', 'a', true),
            Err(PatternError::ReversedRange { .. })
        ));
        assert_eq!(
            pattern.range('Z', 'a', false).err(),
            Some(PatternError::ReversedRange {
                first: "z".to_owned(),
                last: "a".to_owned()
            })
        );
        assert!(matches!(
            pattern.not_in_digit_range(8, 10),
            Err(PatternError::OutOfRange { argument: "last", .. })
        ));

        // failed calls leave the pattern untouched
        assert_eq!(pattern.to_string(), "(x)");
    }

    #[test]
    fn test_pattern_subtraction() {
        let mut pattern = Pattern::new();
        pattern.subtraction(
            &CharacterGroup::positive_range('a', 'z', true).unwrap(),
            &CharacterGroup::positive("aeiou", true).unwrap(),
        );
        assert_eq!(
            pattern.to_string(),
            "([\\u0061-\\u007A-[aeiou]])"
        );

        let mut pattern = Pattern::new();
        pattern.subtraction(
            &CharacterClass::ECMASCRIPT_WORD,
            &CharacterGroup::positive_digits(0, 9).unwrap(),
        );
        assert_eq!(pattern.to_string(), "([a-zA-Z_0-9-[0-9]])");
    }

    #[test]
    fn test_pattern_unicode() {
        let mut pattern = Pattern::new();
        pattern
            .unicode_block(UnicodeBlock::BasicLatin)
            .not_unicode_block(UnicodeBlock::Cyrillic)
            .unicode_category(UnicodeCategory::UppercaseLetter)
            .not_unicode_category(UnicodeCategory::Control);

        assert_eq!(
            pattern.to_string(),
            "(\\p{IsBasicLatin})(\\P{IsCyrillic})(\\p{Lu})(\\P{Cc})"
        );
    }

    #[test]
    fn test_pattern_escapes() {
        let mut pattern = Pattern::new();
        pattern
            .bell()
            .backspace()
            .tab()
            .carriage_return()
            .vertical_tab()
            .form_feed()
            .new_line(false)
            .new_line(true)
            .escape();

        assert_eq!(
            pattern.to_string(),
            "(\\u0007)(\\u0008)(\\u0009)(\\u000D)(\\u000B)(\\u000C)(\\u000A)(\\u000D?\\u000A)(\\u001B)"
        );
    }

    #[test]
    fn test_pattern_numeric_escapes() {
        let mut pattern = Pattern::new();
        pattern
            .octal("40")
            .unwrap()
            .octal("040")
            .unwrap()
            .hexadecimal("2F")
            .unwrap()
            .unicode("00e9")
            .unwrap()
            .ascii_control('C')
            .literal('a');

        assert_eq!(
            pattern.to_string(),
            "(\\40)(\\040)(\\x2F)(\\u00e9)(\\cC)(\\u0061)"
        );

        assert!(matches!(
            pattern.octal("8"),
            Err(PatternError::InvalidFormat { .. })
        ));
        assert!(matches!(
            pattern.hexadecimal("-1"),
            Err(PatternError::InvalidArgument { .. })
        ));
        assert!(matches!(
            pattern.unicode(None),
            Err(PatternError::MissingArgument { .. })
        ));
        assert!(matches!(
            pattern.unicode("123"),
            Err(PatternError::OutOfRange { .. })
        ));
    }

    #[test]
    fn test_pattern_into_string() {
        let mut pattern = Pattern::new();
        pattern.start_of_string().add("ok", true).end_of_string(false);

        let text: String = pattern.into();
        assert_eq!(text, "(\\A)(ok)(\\z)");
    }

    #[test]
    fn test_pattern_parse() {
        let mut pattern = Pattern::new();
        pattern
            .start_of_string()
            .word_boundary()
            .range('a', 'z', false)
            .unwrap()
            .add("-", true)
            .digit_range(0, 9)
            .unwrap()
            .white_space(MatchingBehavior::Unicode)
            .unicode_category(UnicodeCategory::DecimalNumber)
            .hexadecimal("41")
            .unwrap()
            .literal('\u{E9}')
            .new_line(true)
            .any()
            .end_of_string(false);

        assert!(
            regex_syntax::parse(pattern.as_str()).is_ok(),
            "{} does not parse",
            pattern
        );
    }
}
