// Copyright (c) 2025 Hemashushu <hippospark@gmail.com>, All rights reserved.
//
// This Source Code Form is subject to the terms of
// the Mozilla Public License version 2.0 and additional exceptions.
// For more details, see the LICENSE, LICENSE.additional, and CONTRIBUTING files.

// Unicode named groups:
//
// - `\p{name}`, matches any single character in the named block or category.
// - `\P{name}`, matches any single character that is not in it.
//
// Block names are prefixed with `Is`, e.g. `\p{IsCyrillic}`,
// category names are the two-letter abbreviations, e.g. `\p{Lu}`.

use std::{
    borrow::Cow,
    collections::HashMap,
    fmt::Display,
    ops::RangeInclusive,
    sync::OnceLock,
};

use crate::{chargroup::Sign, error::PatternError};

#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy)]
pub enum UnicodeGroupKind {
    Block,
    Category,
}

#[derive(Debug, PartialEq, Eq, Hash, Clone)]
pub struct UnicodeGroup {
    sign: Sign,
    kind: UnicodeGroupKind,
    name: Cow<'static, str>,
}

impl UnicodeGroup {
    /// A group of an arbitrary block or category name.
    ///
    /// The name is not checked against the catalogs, so names added
    /// by newer engines can be used as well.
    pub fn new<'a>(
        sign: Sign,
        kind: UnicodeGroupKind,
        name: impl Into<Option<&'a str>>,
    ) -> Result<Self, PatternError> {
        let name = name
            .into()
            .ok_or(PatternError::MissingArgument { argument: "name" })?;

        if name.trim().is_empty() {
            return Err(PatternError::InvalidArgument {
                argument: "name",
                message: "is empty or consists only of white-space characters.".to_owned(),
            });
        }

        Ok(Self {
            sign,
            kind,
            name: Cow::Owned(name.to_owned()),
        })
    }

    const fn from_static(sign: Sign, kind: UnicodeGroupKind, name: &'static str) -> Self {
        Self {
            sign,
            kind,
            name: Cow::Borrowed(name),
        }
    }

    pub fn sign(&self) -> Sign {
        self.sign
    }

    pub fn kind(&self) -> UnicodeGroupKind {
        self.kind
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

impl Display for UnicodeGroup {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.sign {
            Sign::Positive => write!(f, "\\p{{{}}}", self.name),
            Sign::Negative => write!(f, "\\P{{{}}}", self.name),
        }
    }
}

macro_rules! unicode_blocks {
    ($($variant:ident => $name:literal, $first:literal ..= $last:literal;)*) => {
        /// The named blocks, see
        /// <https://learn.microsoft.com/en-us/dotnet/standard/base-types/character-classes-in-regular-expressions#supported-named-blocks>
        ///
        /// Only the blocks of Unicode 4.0 are available, later blocks
        /// such as `IsCJKStrokes` are not supported by the engine.
        #[derive(Debug, PartialEq, Eq, Hash, Clone, Copy)]
        pub enum UnicodeBlock {
            $($variant,)*
        }

        impl UnicodeBlock {
            pub const ALL: &'static [UnicodeBlock] = &[$(UnicodeBlock::$variant,)*];

            pub const fn name(self) -> &'static str {
                match self {
                    $(UnicodeBlock::$variant => $name,)*
                }
            }

            /// The code points covered by the block, both ends included.
            pub const fn range(self) -> RangeInclusive<u32> {
                match self {
                    $(UnicodeBlock::$variant => RangeInclusive::new($first, $last),)*
                }
            }
        }
    };
}

unicode_blocks! {
    BasicLatin => "IsBasicLatin", 0x0000..=0x007F;
    Latin1Supplement => "IsLatin-1Supplement", 0x0080..=0x00FF;
    LatinExtendedA => "IsLatinExtended-A", 0x0100..=0x017F;
    LatinExtendedB => "IsLatinExtended-B", 0x0180..=0x024F;
    IPAExtensions => "IsIPAExtensions", 0x0250..=0x02AF;
    SpacingModifierLetters => "IsSpacingModifierLetters", 0x02B0..=0x02FF;
    CombiningDiacriticalMarks => "IsCombiningDiacriticalMarks", 0x0300..=0x036F;
    Greek => "IsGreek", 0x0370..=0x03FF;
    GreekAndCoptic => "IsGreekandCoptic", 0x0370..=0x03FF;
    Cyrillic => "IsCyrillic", 0x0400..=0x04FF;
    CyrillicSupplement => "IsCyrillicSupplement", 0x0500..=0x052F;
    Armenian => "IsArmenian", 0x0530..=0x058F;
    Hebrew => "IsHebrew", 0x0590..=0x05FF;
    Arabic => "IsArabic", 0x0600..=0x06FF;
    Syriac => "IsSyriac", 0x0700..=0x074F;
    Thaana => "IsThaana", 0x0780..=0x07BF;
    Devanagari => "IsDevanagari", 0x0900..=0x097F;
    Bengali => "IsBengali", 0x0980..=0x09FF;
    Gurmukhi => "IsGurmukhi", 0x0A00..=0x0A7F;
    Gujarati => "IsGujarati", 0x0A80..=0x0AFF;
    Oriya => "IsOriya", 0x0B00..=0x0B7F;
    Tamil => "IsTamil", 0x0B80..=0x0BFF;
    Telugu => "IsTelugu", 0x0C00..=0x0C7F;
    Kannada => "IsKannada", 0x0C80..=0x0CFF;
    Malayalam => "IsMalayalam", 0x0D00..=0x0D7F;
    Sinhala => "IsSinhala", 0x0D80..=0x0DFF;
    Thai => "IsThai", 0x0E00..=0x0E7F;
    Lao => "IsLao", 0x0E80..=0x0EFF;
    Tibetan => "IsTibetan", 0x0F00..=0x0FFF;
    Myanmar => "IsMyanmar", 0x1000..=0x109F;
    Georgian => "IsGeorgian", 0x10A0..=0x10FF;
    HangulJamo => "IsHangulJamo", 0x1100..=0x11FF;
    Ethiopic => "IsEthiopic", 0x1200..=0x137F;
    Cherokee => "IsCherokee", 0x13A0..=0x13FF;
    UnifiedCanadianAboriginalSyllabics => "IsUnifiedCanadianAboriginalSyllabics", 0x1400..=0x167F;
    Ogham => "IsOgham", 0x1680..=0x169F;
    Runic => "IsRunic", 0x16A0..=0x16FF;
    Tagalog => "IsTagalog", 0x1700..=0x171F;
    Hanunoo => "IsHanunoo", 0x1720..=0x173F;
    Buhid => "IsBuhid", 0x1740..=0x175F;
    Tagbanwa => "IsTagbanwa", 0x1760..=0x177F;
    Khmer => "IsKhmer", 0x1780..=0x17FF;
    Mongolian => "IsMongolian", 0x1800..=0x18AF;
    Limbu => "IsLimbu", 0x1900..=0x194F;
    TaiLe => "IsTaiLe", 0x1950..=0x197F;
    KhmerSymbols => "IsKhmerSymbols", 0x19E0..=0x19FF;
    PhoneticExtensions => "IsPhoneticExtensions", 0x1D00..=0x1D7F;
    LatinExtendedAdditional => "IsLatinExtendedAdditional", 0x1E00..=0x1EFF;
    GreekExtended => "IsGreekExtended", 0x1F00..=0x1FFF;
    GeneralPunctuation => "IsGeneralPunctuation", 0x2000..=0x206F;
    SuperscriptsAndSubscripts => "IsSuperscriptsandSubscripts", 0x2070..=0x209F;
    CurrencySymbols => "IsCurrencySymbols", 0x20A0..=0x20CF;
    CombiningDiacriticalMarksForSymbols => "IsCombiningDiacriticalMarksforSymbols", 0x20D0..=0x20FF;
    CombiningMarksForSymbols => "IsCombiningMarksforSymbols", 0x20D0..=0x20FF;
    LetterlikeSymbols => "IsLetterlikeSymbols", 0x2100..=0x214F;
    NumberForms => "IsNumberForms", 0x2150..=0x218F;
    Arrows => "IsArrows", 0x2190..=0x21FF;
    MathematicalOperators => "IsMathematicalOperators", 0x2200..=0x22FF;
    MiscellaneousTechnical => "IsMiscellaneousTechnical", 0x2300..=0x23FF;
    ControlPictures => "IsControlPictures", 0x2400..=0x243F;
    OpticalCharacterRecognition => "IsOpticalCharacterRecognition", 0x2440..=0x245F;
    EnclosedAlphanumerics => "IsEnclosedAlphanumerics", 0x2460..=0x24FF;
    BoxDrawing => "IsBoxDrawing", 0x2500..=0x257F;
    BlockElements => "IsBlockElements", 0x2580..=0x259F;
    GeometricShapes => "IsGeometricShapes", 0x25A0..=0x25FF;
    MiscellaneousSymbols => "IsMiscellaneousSymbols", 0x2600..=0x26FF;
    Dingbats => "IsDingbats", 0x2700..=0x27BF;
    MiscellaneousMathematicalSymbolsA => "IsMiscellaneousMathematicalSymbols-A", 0x27C0..=0x27EF;
    SupplementalArrowsA => "IsSupplementalArrows-A", 0x27F0..=0x27FF;
    BraillePatterns => "IsBraillePatterns", 0x2800..=0x28FF;
    SupplementalArrowsB => "IsSupplementalArrows-B", 0x2900..=0x297F;
    MiscellaneousMathematicalSymbolsB => "IsMiscellaneousMathematicalSymbols-B", 0x2980..=0x29FF;
    SupplementalMathematicalOperators => "IsSupplementalMathematicalOperators", 0x2A00..=0x2AFF;
    MiscellaneousSymbolsAndArrows => "IsMiscellaneousSymbolsandArrows", 0x2B00..=0x2BFF;
    CJKRadicalsSupplement => "IsCJKRadicalsSupplement", 0x2E80..=0x2EFF;
    KangxiRadicals => "IsKangxiRadicals", 0x2F00..=0x2FDF;
    IdeographicDescriptionCharacters => "IsIdeographicDescriptionCharacters", 0x2FF0..=0x2FFF;
    CJKSymbolsAndPunctuation => "IsCJKSymbolsandPunctuation", 0x3000..=0x303F;
    Hiragana => "IsHiragana", 0x3040..=0x309F;
    Katakana => "IsKatakana", 0x30A0..=0x30FF;
    Bopomofo => "IsBopomofo", 0x3100..=0x312F;
    HangulCompatibilityJamo => "IsHangulCompatibilityJamo", 0x3130..=0x318F;
    Kanbun => "IsKanbun", 0x3190..=0x319F;
    BopomofoExtended => "IsBopomofoExtended", 0x31A0..=0x31BF;
    KatakanaPhoneticExtensions => "IsKatakanaPhoneticExtensions", 0x31F0..=0x31FF;
    EnclosedCJKLettersAndMonths => "IsEnclosedCJKLettersandMonths", 0x3200..=0x32FF;
    CJKCompatibility => "IsCJKCompatibility", 0x3300..=0x33FF;
    CJKUnifiedIdeographsExtensionA => "IsCJKUnifiedIdeographsExtensionA", 0x3400..=0x4DBF;
    YijingHexagramSymbols => "IsYijingHexagramSymbols", 0x4DC0..=0x4DFF;
    CJKUnifiedIdeographs => "IsCJKUnifiedIdeographs", 0x4E00..=0x9FFF;
    YiSyllables => "IsYiSyllables", 0xA000..=0xA48F;
    YiRadicals => "IsYiRadicals", 0xA490..=0xA4CF;
    HangulSyllables => "IsHangulSyllables", 0xAC00..=0xD7AF;
    HighSurrogates => "IsHighSurrogates", 0xD800..=0xDB7F;
    HighPrivateUseSurrogates => "IsHighPrivateUseSurrogates", 0xDB80..=0xDBFF;
    LowSurrogates => "IsLowSurrogates", 0xDC00..=0xDFFF;
    PrivateUse => "IsPrivateUse", 0xE000..=0xF8FF;
    PrivateUseArea => "IsPrivateUseArea", 0xE000..=0xF8FF;
    CJKCompatibilityIdeographs => "IsCJKCompatibilityIdeographs", 0xF900..=0xFAFF;
    AlphabeticPresentationForms => "IsAlphabeticPresentationForms", 0xFB00..=0xFB4F;
    ArabicPresentationFormsA => "IsArabicPresentationForms-A", 0xFB50..=0xFDFF;
    VariationSelectors => "IsVariationSelectors", 0xFE00..=0xFE0F;
    CombiningHalfMarks => "IsCombiningHalfMarks", 0xFE20..=0xFE2F;
    CJKCompatibilityForms => "IsCJKCompatibilityForms", 0xFE30..=0xFE4F;
    SmallFormVariants => "IsSmallFormVariants", 0xFE50..=0xFE6F;
    ArabicPresentationFormsB => "IsArabicPresentationForms-B", 0xFE70..=0xFEFF;
    HalfwidthAndFullwidthForms => "IsHalfwidthandFullwidthForms", 0xFF00..=0xFFEF;
    Specials => "IsSpecials", 0xFFF0..=0xFFFF;
}

impl UnicodeBlock {
    pub const fn positive(self) -> UnicodeGroup {
        UnicodeGroup::from_static(Sign::Positive, UnicodeGroupKind::Block, self.name())
    }

    pub const fn negative(self) -> UnicodeGroup {
        UnicodeGroup::from_static(Sign::Negative, UnicodeGroupKind::Block, self.name())
    }

    /// Looks up a block by its engine name, e.g. `IsBasicLatin`.
    pub fn from_name(name: &str) -> Option<UnicodeBlock> {
        static NAMES: OnceLock<HashMap<&'static str, UnicodeBlock>> = OnceLock::new();

        NAMES
            .get_or_init(|| {
                UnicodeBlock::ALL
                    .iter()
                    .map(|block| (block.name(), *block))
                    .collect()
            })
            .get(name)
            .copied()
    }
}

macro_rules! unicode_categories {
    ($($(#[$meta:meta])* $variant:ident => $name:literal;)*) => {
        /// The general categories, see
        /// <https://www.unicode.org/reports/tr44/#General_Category_Values>
        #[derive(Debug, PartialEq, Eq, Hash, Clone, Copy)]
        pub enum UnicodeCategory {
            $($(#[$meta])* $variant,)*
        }

        impl UnicodeCategory {
            pub const ALL: &'static [UnicodeCategory] = &[$(UnicodeCategory::$variant,)*];

            pub const fn name(self) -> &'static str {
                match self {
                    $(UnicodeCategory::$variant => $name,)*
                }
            }
        }
    };
}

// `LC` (cased letter) is not supported by the engine.
unicode_categories! {
    UppercaseLetter => "Lu";
    LowercaseLetter => "Ll";
    /// A digraphic character, with first part uppercase.
    TitlecaseLetter => "Lt";
    ModifierLetter => "Lm";
    /// Other letters, including syllables and ideographs.
    OtherLetter => "Lo";
    /// `Lu | Ll | Lt | Lm | Lo`
    Letter => "L";

    /// A nonspacing combining mark (zero advance width).
    NonspacingMark => "Mn";
    /// A spacing combining mark (positive advance width).
    SpacingMark => "Mc";
    EnclosingMark => "Me";
    /// `Mn | Mc | Me`
    Mark => "M";

    DecimalNumber => "Nd";
    /// A letterlike numeric character.
    LetterNumber => "Nl";
    OtherNumber => "No";
    /// `Nd | Nl | No`
    Number => "N";

    /// A connecting punctuation mark, like a tie.
    ConnectorPunctuation => "Pc";
    DashPunctuation => "Pd";
    OpenPunctuation => "Ps";
    ClosePunctuation => "Pe";
    /// An initial quotation mark.
    InitialPunctuation => "Pi";
    /// A final quotation mark.
    FinalPunctuation => "Pf";
    OtherPunctuation => "Po";
    /// `Pc | Pd | Ps | Pe | Pi | Pf | Po`
    Punctuation => "P";

    MathSymbol => "Sm";
    CurrencySymbol => "Sc";
    /// A non-letterlike modifier symbol.
    ModifierSymbol => "Sk";
    OtherSymbol => "So";
    /// `Sm | Sc | Sk | So`
    Symbol => "S";

    /// A space character (of various non-zero widths).
    SpaceSeparator => "Zs";
    /// U+2028 LINE SEPARATOR only.
    LineSeparator => "Zl";
    /// U+2029 PARAGRAPH SEPARATOR only.
    ParagraphSeparator => "Zp";
    /// `Zs | Zl | Zp`
    Separator => "Z";

    /// A C0 or C1 control code.
    Control => "Cc";
    Format => "Cf";
    Surrogate => "Cs";
    PrivateUse => "Co";
    /// A reserved unassigned code point or a noncharacter.
    Unassigned => "Cn";
    /// `Cc | Cf | Cs | Co | Cn`
    Other => "C";
}

impl UnicodeCategory {
    pub const fn positive(self) -> UnicodeGroup {
        UnicodeGroup::from_static(Sign::Positive, UnicodeGroupKind::Category, self.name())
    }

    pub const fn negative(self) -> UnicodeGroup {
        UnicodeGroup::from_static(Sign::Negative, UnicodeGroupKind::Category, self.name())
    }

    /// Looks up a category by its abbreviation, e.g. `Lu`.
    pub fn from_name(name: &str) -> Option<UnicodeCategory> {
        static NAMES: OnceLock<HashMap<&'static str, UnicodeCategory>> = OnceLock::new();

        NAMES
            .get_or_init(|| {
                UnicodeCategory::ALL
                    .iter()
                    .map(|category| (category.name(), *category))
                    .collect()
            })
            .get(name)
            .copied()
    }
}
