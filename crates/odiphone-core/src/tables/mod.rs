//! Classification tables: vowels, consonants, compound clusters, modifier
//! marks, attached-form overrides and the key reduction classes.
//!
//! Two table variants are embedded via `include_str!` (`default_tables.toml`
//! and `odphone_tables.toml`) and checked by the build script. Custom tables go through the same
//! validation in [`parse_tables_toml`].

mod config;

use std::collections::BTreeMap;
use std::fmt;
use std::fs;
use std::path::Path;
use std::str::FromStr;
use std::sync::OnceLock;

use crate::reduce::KeyReduction;

pub use config::{parse_tables_toml, TableError};

pub const DEFAULT_TABLES_TOML: &str = include_str!("default_tables.toml");
pub const ODPHONE_TABLES_TOML: &str = include_str!("odphone_tables.toml");

/// Returns the embedded default tables TOML content.
pub fn default_toml() -> &'static str {
    DEFAULT_TABLES_TOML
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TableKind {
    Vowels,
    Consonants,
    Compounds,
    Modifiers,
    Attached,
}

impl TableKind {
    pub fn name(self) -> &'static str {
        match self {
            TableKind::Vowels => "vowels",
            TableKind::Consonants => "consonants",
            TableKind::Compounds => "compounds",
            TableKind::Modifiers => "modifiers",
            TableKind::Attached => "attached",
        }
    }
}

impl fmt::Display for TableKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// The embedded table sets. `Odiphone` is the default and the one
/// [`PhoneTables::builtin`] returns.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum TableVariant {
    #[default]
    Odiphone,
    /// `ଫ` -> `F`, `ଭ` -> `V`, `ୱ` -> `W`, `ଣ` -> `N`, `ଇ`/`ଈ` -> `E`.
    Odphone,
}

impl TableVariant {
    pub const ALL: [TableVariant; 2] = [TableVariant::Odiphone, TableVariant::Odphone];

    pub fn name(self) -> &'static str {
        match self {
            TableVariant::Odiphone => "odiphone",
            TableVariant::Odphone => "odphone",
        }
    }

    /// Embedded TOML source for this variant.
    pub fn toml(self) -> &'static str {
        match self {
            TableVariant::Odiphone => default_toml(),
            TableVariant::Odphone => ODPHONE_TABLES_TOML,
        }
    }
}

impl fmt::Display for TableVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for TableVariant {
    type Err = TableError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|v| v.name() == s)
            .ok_or_else(|| TableError::UnknownVariant(s.to_string()))
    }
}

/// A validated set of tables. Construct with [`parse_tables_toml`],
/// [`PhoneTables::from_path`] or [`PhoneTables::builtin`].
#[derive(Debug, Clone)]
pub struct PhoneTables {
    pub(crate) vowels: BTreeMap<String, String>,
    pub(crate) consonants: BTreeMap<String, String>,
    pub(crate) compounds: BTreeMap<String, String>,
    pub(crate) modifiers: BTreeMap<String, String>,
    pub(crate) attached: BTreeMap<String, String>,
    pub(crate) reduction: KeyReduction,
}

impl PhoneTables {
    /// The embedded default tables, parsed once per process.
    pub fn builtin() -> &'static PhoneTables {
        Self::variant(TableVariant::Odiphone)
    }

    /// An embedded table variant, parsed once per process.
    pub fn variant(variant: TableVariant) -> &'static PhoneTables {
        static ODIPHONE: OnceLock<PhoneTables> = OnceLock::new();
        static ODPHONE: OnceLock<PhoneTables> = OnceLock::new();
        let cell = match variant {
            TableVariant::Odiphone => &ODIPHONE,
            TableVariant::Odphone => &ODPHONE,
        };
        cell.get_or_init(|| {
            parse_tables_toml(variant.toml()).expect("embedded tables TOML must be valid")
        })
    }

    /// Read and validate a tables TOML file.
    pub fn from_path(path: &Path) -> Result<Self, TableError> {
        let content = fs::read_to_string(path).map_err(|source| TableError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let tables = parse_tables_toml(&content)?;
        #[cfg(feature = "trace")]
        tracing::debug!(
            path = %path.display(),
            entries = tables.entry_count(),
            "loaded tables"
        );
        Ok(tables)
    }

    pub fn table(&self, kind: TableKind) -> &BTreeMap<String, String> {
        match kind {
            TableKind::Vowels => &self.vowels,
            TableKind::Consonants => &self.consonants,
            TableKind::Compounds => &self.compounds,
            TableKind::Modifiers => &self.modifiers,
            TableKind::Attached => &self.attached,
        }
    }

    pub fn reduction(&self) -> &KeyReduction {
        &self.reduction
    }

    /// Total number of entries across all glyph tables.
    pub fn entry_count(&self) -> usize {
        self.vowels.len()
            + self.consonants.len()
            + self.compounds.len()
            + self.modifiers.len()
            + self.attached.len()
    }
}

impl Default for PhoneTables {
    fn default() -> Self {
        Self::builtin().clone()
    }
}
