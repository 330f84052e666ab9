use std::fs;
use std::io::Write;

use odiphone_core::{parse_tables_toml, TableKind, TableVariant};

use crate::CliError;

pub fn tables_export<W: Write>(variant: TableVariant, out: &mut W) -> Result<(), CliError> {
    write!(out, "{}", variant.toml())?;
    Ok(())
}

pub fn tables_validate<W: Write>(file: &str, out: &mut W) -> Result<(), CliError> {
    let content = fs::read_to_string(file).map_err(|source| CliError::Read {
        path: file.to_string(),
        source,
    })?;
    let tables = parse_tables_toml(&content)?;
    let counts: Vec<String> = [
        TableKind::Vowels,
        TableKind::Consonants,
        TableKind::Compounds,
        TableKind::Modifiers,
        TableKind::Attached,
    ]
    .iter()
    .map(|&kind| format!("{kind}={}", tables.table(kind).len()))
    .collect();
    let reduction = tables.reduction();
    writeln!(
        out,
        "OK: {} entries ({}), broad={}, narrow={}",
        tables.entry_count(),
        counts.join(", "),
        reduction.broad().iter().collect::<String>(),
        reduction.narrow().iter().collect::<String>(),
    )?;
    Ok(())
}
