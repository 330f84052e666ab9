use serde::Serialize;

/// The three keys of one word, from broadest (`key0`) to most specific
/// (`key2`). `key0` and `key1` are `key2` with some digits deleted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize)]
pub struct PhoneticKeys {
    pub key0: String,
    pub key1: String,
    pub key2: String,
}

/// Most specific key on which two encodings agree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum MatchLevel {
    Key0,
    Key1,
    Key2,
}

impl PhoneticKeys {
    pub fn is_empty(&self) -> bool {
        self.key2.is_empty()
    }

    pub fn key(&self, level: MatchLevel) -> &str {
        match level {
            MatchLevel::Key0 => &self.key0,
            MatchLevel::Key1 => &self.key1,
            MatchLevel::Key2 => &self.key2,
        }
    }

    /// Empty keys never match.
    pub fn match_level(&self, other: &PhoneticKeys) -> Option<MatchLevel> {
        [MatchLevel::Key2, MatchLevel::Key1, MatchLevel::Key0]
            .into_iter()
            .find(|&level| {
                let key = self.key(level);
                !key.is_empty() && key == other.key(level)
            })
    }
}

impl From<PhoneticKeys> for (String, String, String) {
    fn from(k: PhoneticKeys) -> Self {
        (k.key0, k.key1, k.key2)
    }
}
