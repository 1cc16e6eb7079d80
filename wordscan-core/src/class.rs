//! Character classification for word boundary detection

use unicode_general_category::{get_general_category, GeneralCategory};

/// Classification of a single character
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CharClass {
    /// Any Unicode letter (Lu, Ll, Lt, Lm, Lo)
    Letter,
    /// Any Unicode punctuation (Pc, Pd, Ps, Pe, Pi, Pf, Po)
    Punctuation,
    /// Space separators and characters with the `White_Space` property
    Whitespace,
    /// Digits, symbols, marks, controls and unassigned code points
    Other,
}

impl CharClass {
    /// Classify a character
    pub fn of(ch: char) -> Self {
        match get_general_category(ch) {
            GeneralCategory::UppercaseLetter
            | GeneralCategory::LowercaseLetter
            | GeneralCategory::TitlecaseLetter
            | GeneralCategory::ModifierLetter
            | GeneralCategory::OtherLetter => CharClass::Letter,

            GeneralCategory::ConnectorPunctuation
            | GeneralCategory::DashPunctuation
            | GeneralCategory::OpenPunctuation
            | GeneralCategory::ClosePunctuation
            | GeneralCategory::InitialPunctuation
            | GeneralCategory::FinalPunctuation
            | GeneralCategory::OtherPunctuation => CharClass::Punctuation,

            GeneralCategory::SpaceSeparator
            | GeneralCategory::LineSeparator
            | GeneralCategory::ParagraphSeparator => CharClass::Whitespace,

            // TAB, LF, CR and friends are controls (Cc) in the category tables
            _ if ch.is_whitespace() => CharClass::Whitespace,

            _ => CharClass::Other,
        }
    }

    /// Punctuation or whitespace
    pub fn is_separator(self) -> bool {
        matches!(self, CharClass::Punctuation | CharClass::Whitespace)
    }
}

/// Check if character is a letter
#[inline]
pub fn is_letter(ch: char) -> bool {
    CharClass::of(ch) == CharClass::Letter
}

/// Check if character is punctuation
#[inline]
pub fn is_punctuation(ch: char) -> bool {
    CharClass::of(ch) == CharClass::Punctuation
}

/// Check if character is whitespace
#[inline]
pub fn is_whitespace(ch: char) -> bool {
    CharClass::of(ch) == CharClass::Whitespace
}
