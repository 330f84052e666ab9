use serde::Serialize;

use super::keys::PhoneticKeys;
use super::token::Token;

/// Diagnostic breakdown of one encoding.
#[derive(Debug, Clone, Serialize)]
pub struct ExplainResult {
    pub word: String,
    /// Input after dropping non-Odia characters.
    pub filtered: String,
    pub tokens: Vec<Token>,
    pub keys: PhoneticKeys,
}

impl ExplainResult {
    /// Tokens rendered as `source→code`, space separated.
    pub fn token_line(&self) -> String {
        self.tokens
            .iter()
            .map(|t| t.to_string())
            .collect::<Vec<_>>()
            .join(" ")
    }
}
