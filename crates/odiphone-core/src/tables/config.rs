use std::collections::{BTreeMap, HashMap};
use std::path::PathBuf;

use serde::Deserialize;

use super::{PhoneTables, TableKind};
use crate::reduce::KeyReduction;
use crate::script::is_odia_text;

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct TablesConfig {
    vowels: BTreeMap<String, String>,
    consonants: BTreeMap<String, String>,
    #[serde(default)]
    compounds: BTreeMap<String, String>,
    modifiers: BTreeMap<String, String>,
    #[serde(default)]
    attached: BTreeMap<String, String>,
    reduction: ReductionConfig,
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct ReductionConfig {
    broad: String,
    narrow: String,
}

#[derive(Debug, thiserror::Error)]
pub enum TableError {
    #[error("TOML parse error: {0}")]
    Parse(String),
    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("[{table}] table is empty")]
    Empty { table: TableKind },
    #[error("non-Odia key in [{table}]: {key:?}")]
    NonOdiaKey { table: TableKind, key: String },
    #[error("key {key:?} in [{table}] must be {expected}")]
    KeyLength {
        table: TableKind,
        key: String,
        expected: &'static str,
    },
    #[error("invalid code {code:?} for key {key:?} in [{table}]")]
    InvalidCode {
        table: TableKind,
        key: String,
        code: String,
    },
    #[error("key {key:?} appears in both [{first}] and [{second}]")]
    DuplicateKey {
        key: String,
        first: TableKind,
        second: TableKind,
    },
    #[error("attached key {key:?} is not a base glyph followed by a modifier")]
    InvalidAttached { key: String },
    #[error("[reduction] {class} contains non-digit {digit:?}")]
    InvalidClassDigit { class: &'static str, digit: char },
    #[error("[reduction] narrow digit {digit:?} is missing from broad")]
    NarrowNotSubset { digit: char },
    #[error("encoder already initialized")]
    AlreadyInitialized,
    #[error("unknown table variant {0:?} (expected odiphone or odphone)")]
    UnknownVariant(String),
}

/// Parse and validate tables TOML.
pub fn parse_tables_toml(toml_str: &str) -> Result<PhoneTables, TableError> {
    let config: TablesConfig =
        toml::from_str(toml_str).map_err(|e| TableError::Parse(e.to_string()))?;

    for (kind, table) in [
        (TableKind::Vowels, &config.vowels),
        (TableKind::Consonants, &config.consonants),
        (TableKind::Modifiers, &config.modifiers),
    ] {
        if table.is_empty() {
            return Err(TableError::Empty { table: kind });
        }
    }

    check_keys(TableKind::Vowels, &config.vowels, KeyShape::Single)?;
    check_keys(TableKind::Consonants, &config.consonants, KeyShape::Single)?;
    check_keys(TableKind::Compounds, &config.compounds, KeyShape::Cluster)?;
    check_keys(TableKind::Modifiers, &config.modifiers, KeyShape::Single)?;
    check_keys(TableKind::Attached, &config.attached, KeyShape::Cluster)?;

    check_codes(TableKind::Vowels, &config.vowels, is_base_code)?;
    check_codes(TableKind::Consonants, &config.consonants, is_base_code)?;
    check_codes(TableKind::Compounds, &config.compounds, is_base_code)?;
    check_codes(TableKind::Modifiers, &config.modifiers, is_modifier_code)?;
    check_codes(TableKind::Attached, &config.attached, is_base_code)?;

    let mut owner: HashMap<&str, TableKind> = HashMap::new();
    for (kind, table) in [
        (TableKind::Compounds, &config.compounds),
        (TableKind::Consonants, &config.consonants),
        (TableKind::Vowels, &config.vowels),
        (TableKind::Modifiers, &config.modifiers),
    ] {
        for key in table.keys() {
            if let Some(&first) = owner.get(key.as_str()) {
                return Err(TableError::DuplicateKey {
                    key: key.clone(),
                    first,
                    second: kind,
                });
            }
            owner.insert(key, kind);
        }
    }

    for key in config.attached.keys() {
        if !is_attached_pair(key, &owner) {
            return Err(TableError::InvalidAttached { key: key.clone() });
        }
    }

    let reduction = &config.reduction;
    check_class("broad", &reduction.broad)?;
    check_class("narrow", &reduction.narrow)?;
    if let Some(digit) = reduction
        .narrow
        .chars()
        .find(|d| !reduction.broad.contains(*d))
    {
        return Err(TableError::NarrowNotSubset { digit });
    }

    Ok(PhoneTables {
        reduction: KeyReduction::new(&reduction.broad, &reduction.narrow),
        vowels: config.vowels,
        consonants: config.consonants,
        compounds: config.compounds,
        modifiers: config.modifiers,
        attached: config.attached,
    })
}

#[derive(Clone, Copy)]
enum KeyShape {
    Single,
    Cluster,
}

fn check_keys(
    table: TableKind,
    entries: &BTreeMap<String, String>,
    shape: KeyShape,
) -> Result<(), TableError> {
    for key in entries.keys() {
        if !is_odia_text(key) {
            return Err(TableError::NonOdiaKey {
                table,
                key: key.clone(),
            });
        }
        let len = key.chars().count();
        let (ok, expected) = match shape {
            KeyShape::Single => (len == 1, "a single character"),
            KeyShape::Cluster => (len >= 2, "at least two characters"),
        };
        if !ok {
            return Err(TableError::KeyLength {
                table,
                key: key.clone(),
                expected,
            });
        }
    }
    Ok(())
}

fn check_codes(
    table: TableKind,
    entries: &BTreeMap<String, String>,
    valid: fn(&str) -> bool,
) -> Result<(), TableError> {
    match entries.iter().find(|(_, code)| !valid(code)) {
        Some((key, code)) => Err(TableError::InvalidCode {
            table,
            key: key.clone(),
            code: code.clone(),
        }),
        None => Ok(()),
    }
}

/// Uppercase letter, then uppercase letters or digits.
fn is_base_code(code: &str) -> bool {
    let mut chars = code.chars();
    match chars.next() {
        Some(first) if first.is_ascii_uppercase() => {
            chars.all(|c| c.is_ascii_uppercase() || c.is_ascii_digit())
        }
        _ => false,
    }
}

/// Digits only; empty is allowed and drops the mark from the key.
fn is_modifier_code(code: &str) -> bool {
    code.chars().all(|c| c.is_ascii_digit())
}

fn is_attached_pair(key: &str, owner: &HashMap<&str, TableKind>) -> bool {
    let Some((split, _)) = key.char_indices().last() else {
        return false;
    };
    let (base, modifier) = key.split_at(split);
    matches!(owner.get(modifier), Some(TableKind::Modifiers))
        && matches!(
            owner.get(base),
            Some(TableKind::Vowels | TableKind::Consonants | TableKind::Compounds)
        )
}

fn check_class(class: &'static str, digits: &str) -> Result<(), TableError> {
    match digits.chars().find(|c| !c.is_ascii_digit()) {
        Some(digit) => Err(TableError::InvalidClassDigit { class, digit }),
        None => Ok(()),
    }
}
