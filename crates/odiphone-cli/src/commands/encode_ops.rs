use std::fs;
use std::io::{BufWriter, Write};

use serde::Serialize;

use odiphone_core::{Encoder, PhoneticKeys};

use crate::CliError;

/// One encoded word, as written by `--json` and `batch`.
#[derive(Debug, Serialize)]
struct EncodedWord<'a> {
    word: &'a str,
    #[serde(flatten)]
    keys: &'a PhoneticKeys,
}

pub fn encode_cmd<W: Write>(
    enc: &Encoder,
    words: &[String],
    json: bool,
    out: &mut W,
) -> Result<(), CliError> {
    for word in words {
        let keys = enc.encode(word);
        if json {
            serde_json::to_writer(&mut *out, &EncodedWord { word, keys: &keys })?;
            writeln!(out)?;
        } else {
            writeln!(out, "{} {} {}", keys.key0, keys.key1, keys.key2)?;
        }
    }
    Ok(())
}

pub fn explain_cmd<W: Write>(
    enc: &Encoder,
    word: &str,
    json: bool,
    out: &mut W,
) -> Result<(), CliError> {
    let result = enc.explain(word);
    if json {
        serde_json::to_writer_pretty(&mut *out, &result)?;
        writeln!(out)?;
        return Ok(());
    }

    writeln!(out, "word:     {}", result.word)?;
    writeln!(out, "filtered: {}", result.filtered)?;
    writeln!(out, "tokens:")?;
    for token in &result.tokens {
        let attached = if token.attached { " (attached)" } else { "" };
        writeln!(
            out,
            "  {:<10} {:<6} {}{attached}",
            token.kind.name(),
            token.source,
            token.code
        )?;
    }
    writeln!(out, "key0: {}", result.keys.key0)?;
    writeln!(out, "key1: {}", result.keys.key1)?;
    writeln!(out, "key2: {}", result.keys.key2)?;
    Ok(())
}

/// Encode one word per line of `input_file` into JSONL at `output_file`.
/// Blank lines are skipped. Returns the number of words written.
pub fn batch_cmd(enc: &Encoder, input_file: &str, output_file: &str) -> Result<usize, CliError> {
    let content = fs::read_to_string(input_file).map_err(|source| CliError::Read {
        path: input_file.to_string(),
        source,
    })?;
    let file = fs::File::create(output_file).map_err(|source| CliError::Write {
        path: output_file.to_string(),
        source,
    })?;
    let mut writer = BufWriter::new(file);

    let mut count = 0;
    for line in content.lines() {
        let word = line.trim();
        if word.is_empty() {
            continue;
        }
        let keys = enc.encode(word);
        serde_json::to_writer(&mut writer, &EncodedWord { word, keys: &keys })?;
        writeln!(writer)?;
        count += 1;
    }
    writer.flush()?;

    #[cfg(feature = "trace")]
    tracing::debug!(input_file, output_file, count, "batch encoded");
    Ok(count)
}
