//! Odia word to phonetic keys.
//!
//! Input is filtered to the Oriya block, then tokenized left to right. At each
//! position the base matchers are tried in priority order (compound, then
//! consonant, then vowel), each taking the longest table key and absorbing a
//! directly following modifier mark. A modifier that no base glyph absorbed
//! becomes a standalone token. Tokens are flattened into `key2`, and `key1` /
//! `key0` are derived from it by deleting digit classes.

mod explain;
mod keys;
#[cfg(test)]
mod tests;
mod token;

use std::collections::{BTreeMap, HashMap};
use std::sync::OnceLock;

use crate::reduce::KeyReduction;
use crate::script::{retain_key_chars, strip_non_odia};
use crate::tables::{parse_tables_toml, PhoneTables, TableError};
use crate::trie::GlyphTrie;

pub use explain::ExplainResult;
pub use keys::{MatchLevel, PhoneticKeys};
pub use token::{Token, TokenKind};

static INSTANCE: OnceLock<Encoder> = OnceLock::new();

/// Install the global encoder from custom tables TOML. Fails with
/// `AlreadyInitialized` once `global()` or another `init_custom` has won.
pub fn init_custom(toml_content: &str) -> Result<(), TableError> {
    let tables = parse_tables_toml(toml_content)?;
    INSTANCE
        .set(Encoder::with_tables(&tables))
        .map_err(|_| TableError::AlreadyInitialized)
}

/// Get or initialize the global encoder.
pub fn global() -> &'static Encoder {
    INSTANCE.get_or_init(Encoder::new)
}

/// Encode a word with the global encoder.
pub fn encode(word: &str) -> PhoneticKeys {
    global().encode(word)
}

/// Matches "any key of one base table, optionally followed by a modifier".
#[derive(Debug)]
struct BaseMatcher {
    kind: TokenKind,
    glyphs: GlyphTrie,
}

/// Table-driven phonetic encoder. Immutable once built, so a single instance
/// can be shared across threads.
#[derive(Debug)]
pub struct Encoder {
    /// Compound, consonant, vowel: the order they are tried in.
    matchers: [BaseMatcher; 3],
    modifiers: HashMap<char, String>,
    attached: HashMap<String, String>,
    reduction: KeyReduction,
}

impl Encoder {
    /// Encoder over the embedded default tables.
    pub fn new() -> Self {
        Self::with_tables(PhoneTables::builtin())
    }

    pub fn with_tables(tables: &PhoneTables) -> Self {
        let matchers = [
            BaseMatcher::new(TokenKind::Compound, &tables.compounds),
            BaseMatcher::new(TokenKind::Consonant, &tables.consonants),
            BaseMatcher::new(TokenKind::Vowel, &tables.vowels),
        ];
        // Modifier keys are validated as single chars.
        let modifiers = tables
            .modifiers
            .iter()
            .filter_map(|(mark, code)| mark.chars().next().map(|c| (c, code.clone())))
            .collect();
        let attached = tables
            .attached
            .iter()
            .map(|(pair, code)| (pair.clone(), code.clone()))
            .collect();
        #[cfg(feature = "trace")]
        tracing::debug!(
            compounds = matchers[0].glyphs.len(),
            consonants = matchers[1].glyphs.len(),
            vowels = matchers[2].glyphs.len(),
            "encoder built"
        );
        Self {
            matchers,
            modifiers,
            attached,
            reduction: tables.reduction.clone(),
        }
    }

    pub fn from_toml(toml_str: &str) -> Result<Self, TableError> {
        Ok(Self::with_tables(&parse_tables_toml(toml_str)?))
    }

    /// Encode an Odia word into its three phonetic keys. Never fails: input
    /// with no recognizable Odia glyphs yields three empty keys.
    pub fn encode(&self, word: &str) -> PhoneticKeys {
        #[cfg(feature = "trace")]
        let _span = tracing::debug_span!("encode", word).entered();
        let tokens = self.tokenize(&strip_non_odia(word));
        let keys = self.keys_from_tokens(&tokens);
        #[cfg(feature = "trace")]
        tracing::debug!(tokens = tokens.len(), key2 = %keys.key2);
        keys
    }

    pub fn encode_all<I, S>(&self, words: I) -> Vec<PhoneticKeys>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        words
            .into_iter()
            .map(|w| self.encode(w.as_ref()))
            .collect()
    }

    /// Token sequence and keys for a word, for diagnostics.
    pub fn explain(&self, word: &str) -> ExplainResult {
        let filtered = strip_non_odia(word);
        let tokens = self.tokenize(&filtered);
        let keys = self.keys_from_tokens(&tokens);
        ExplainResult {
            word: word.to_string(),
            filtered,
            tokens,
            keys,
        }
    }

    fn keys_from_tokens(&self, tokens: &[Token]) -> PhoneticKeys {
        let flat: String = tokens.iter().map(|t| t.code.as_str()).collect();
        let key2 = retain_key_chars(&flat);
        PhoneticKeys {
            key0: self.reduction.key0(&key2),
            key1: self.reduction.key1(&key2),
            key2,
        }
    }

    /// Split filtered Odia text into tagged tokens. Characters that match no
    /// table are dropped.
    pub(crate) fn tokenize(&self, text: &str) -> Vec<Token> {
        let chars: Vec<char> = text.chars().collect();
        let mut tokens = Vec::new();
        let mut pos = 0;

        while pos < chars.len() {
            if let Some(token) = self.match_base(&chars[pos..]) {
                pos += token.width;
                tokens.push(token);
                continue;
            }
            let c = chars[pos];
            if let Some(code) = self.modifiers.get(&c) {
                tokens.push(Token::standalone_modifier(c, code));
            }
            pos += 1;
        }

        tokens
    }

    fn match_base(&self, rest: &[char]) -> Option<Token> {
        self.matchers.iter().find_map(|m| {
            let (len, code) = m.glyphs.longest_match(rest)?;
            let base: String = rest[..len].iter().collect();
            let attached_mark = rest
                .get(len)
                .and_then(|&c| self.modifiers.get(&c).map(|code| (c, code)));
            Some(match attached_mark {
                Some((mark, mark_code)) => {
                    let mut source = base;
                    source.push(mark);
                    let code = match self.attached.get(&source) {
                        Some(dedicated) => dedicated.clone(),
                        None => format!("{code}{mark_code}"),
                    };
                    Token::attached(m.kind, source, code, len + 1)
                }
                None => Token::bare(m.kind, base, code, len),
            })
        })
    }
}

impl Default for Encoder {
    fn default() -> Self {
        Self::new()
    }
}

impl BaseMatcher {
    fn new(kind: TokenKind, table: &BTreeMap<String, String>) -> Self {
        Self {
            kind,
            glyphs: GlyphTrie::from_entries(table),
        }
    }
}
