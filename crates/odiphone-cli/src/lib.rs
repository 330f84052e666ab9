pub mod commands;
pub mod trace_init;

use std::io;
use std::path::Path;

use odiphone_core::{Encoder, PhoneTables, TableError, TableVariant};

#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error(transparent)]
    Tables(#[from] TableError),
    #[error("failed to read {path}: {source}")]
    Read { path: String, source: io::Error },
    #[error("failed to write {path}: {source}")]
    Write { path: String, source: io::Error },
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Encoder over a tables file, or over an embedded variant when none given.
pub fn load_encoder(tables: Option<&str>, variant: TableVariant) -> Result<Encoder, CliError> {
    match tables {
        Some(path) => Ok(Encoder::with_tables(&PhoneTables::from_path(Path::new(
            path,
        ))?)),
        None => Ok(Encoder::with_tables(PhoneTables::variant(variant))),
    }
}
