//! Derivation of `key1` and `key0` from `key2` by deleting modifier digits.

/// Digit classes removed from `key2`. `narrow` is always a subset of `broad`,
/// enforced when tables are parsed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyReduction {
    broad: Vec<char>,
    narrow: Vec<char>,
}

impl KeyReduction {
    /// Build from already-validated digit strings.
    pub(crate) fn new(broad: &str, narrow: &str) -> Self {
        let mut broad: Vec<char> = broad.chars().collect();
        broad.sort_unstable();
        broad.dedup();
        let mut narrow: Vec<char> = narrow.chars().collect();
        narrow.sort_unstable();
        narrow.dedup();
        Self { broad, narrow }
    }

    pub fn broad(&self) -> &[char] {
        &self.broad
    }

    pub fn narrow(&self) -> &[char] {
        &self.narrow
    }

    /// `key2` with the narrow digit class deleted.
    pub fn key1(&self, key2: &str) -> String {
        strip_digits(key2, &self.narrow)
    }

    /// `key2` with the broad digit class deleted.
    pub fn key0(&self, key2: &str) -> String {
        strip_digits(key2, &self.broad)
    }
}

fn strip_digits(key: &str, class: &[char]) -> String {
    key.chars().filter(|c| !class.contains(c)).collect()
}
