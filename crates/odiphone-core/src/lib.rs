//! Phonetic keys for Odia words.
//!
//! Encodes an Odia word into three Romanized keys of increasing phonetic
//! specificity so that words that sound alike collapse to the same key:
//!
//! - `key0`: broad key, no modifier digits at all
//! - `key1`: keeps vowel-sign and virama digits, drops nasalization/visarga
//! - `key2`: every modifier digit retained
//!
//! ```
//! let keys = odiphone_core::encode("ଅଂଶ");
//! assert_eq!(keys.key2, "A7SH");
//! assert_eq!(keys.key0, "ASH");
//! ```

pub mod encoder;
pub mod reduce;
pub mod script;
pub mod tables;
mod trie;

pub use encoder::{
    encode, global, init_custom, Encoder, ExplainResult, MatchLevel, PhoneticKeys, Token,
    TokenKind,
};
pub use tables::{parse_tables_toml, PhoneTables, TableError, TableKind, TableVariant};
