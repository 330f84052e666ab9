use std::fmt;

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TokenKind {
    Compound,
    Consonant,
    Vowel,
    /// A modifier mark that no base glyph absorbed.
    Modifier,
}

impl TokenKind {
    /// Lowercase name, matching the serialized form.
    pub fn name(self) -> &'static str {
        match self {
            TokenKind::Compound => "compound",
            TokenKind::Consonant => "consonant",
            TokenKind::Vowel => "vowel",
            TokenKind::Modifier => "modifier",
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// One replacement unit of the input, carrying the text it contributes to
/// `key2`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Token {
    pub kind: TokenKind,
    /// Odia glyphs consumed, including an absorbed modifier mark.
    pub source: String,
    pub code: String,
    /// True when the base glyph absorbed a following modifier mark.
    pub attached: bool,
    #[serde(skip)]
    pub(crate) width: usize,
}

impl Token {
    pub(crate) fn bare(kind: TokenKind, source: String, code: &str, width: usize) -> Self {
        Self {
            kind,
            source,
            code: code.to_string(),
            attached: false,
            width,
        }
    }

    pub(crate) fn attached(kind: TokenKind, source: String, code: String, width: usize) -> Self {
        Self {
            kind,
            source,
            code,
            attached: true,
            width,
        }
    }

    pub(crate) fn standalone_modifier(mark: char, code: &str) -> Self {
        Self {
            kind: TokenKind::Modifier,
            source: mark.to_string(),
            code: code.to_string(),
            attached: false,
            width: 1,
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}→{}", self.source, self.code)
    }
}
