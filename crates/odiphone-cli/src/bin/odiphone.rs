use std::io;
use std::process;

use clap::{Parser, Subcommand};

use odiphone_cli::commands::{encode_ops, table_ops};
use odiphone_cli::{load_encoder, trace_init};
use odiphone_core::TableVariant;

macro_rules! die {
    ($result:expr, $($arg:tt)*) => {
        $result.unwrap_or_else(|e| {
            eprintln!($($arg)*, e);
            process::exit(1);
        })
    };
}

#[derive(Parser)]
#[command(name = "odiphone", about = "Phonetic keys for Odia words")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print key0, key1 and key2 for each word
    Encode {
        /// Odia words to encode
        #[arg(required = true)]
        words: Vec<String>,
        /// Tables TOML file (defaults to the embedded tables)
        #[arg(long)]
        tables: Option<String>,
        /// Embedded table variant: odiphone or odphone
        #[arg(long, default_value = "odiphone", conflicts_with = "tables")]
        variant: TableVariant,
        /// Output one JSON object per word
        #[arg(long)]
        json: bool,
    },
    /// Show the token breakdown behind a word's keys
    Explain {
        /// Odia word to explain
        word: String,
        /// Tables TOML file (defaults to the embedded tables)
        #[arg(long)]
        tables: Option<String>,
        /// Embedded table variant: odiphone or odphone
        #[arg(long, default_value = "odiphone", conflicts_with = "tables")]
        variant: TableVariant,
        /// Output as JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Encode a file with one word per line into JSONL
    Batch {
        /// Path to the input file (one word per line)
        input_file: String,
        /// Path to the output JSONL file
        output_file: String,
        /// Tables TOML file (defaults to the embedded tables)
        #[arg(long)]
        tables: Option<String>,
        /// Embedded table variant: odiphone or odphone
        #[arg(long, default_value = "odiphone", conflicts_with = "tables")]
        variant: TableVariant,
    },
    /// Print an embedded table variant as TOML
    TablesExport {
        /// Embedded table variant: odiphone or odphone
        #[arg(long, default_value = "odiphone")]
        variant: TableVariant,
    },
    /// Validate a tables TOML file
    TablesValidate {
        /// Tables TOML file
        file: String,
    },
}

fn main() {
    trace_init::init_tracing();
    let cli = Cli::parse();
    let mut stdout = io::stdout().lock();

    match cli.command {
        Command::Encode {
            words,
            tables,
            variant,
            json,
        } => {
            let enc = die!(
                load_encoder(tables.as_deref(), variant),
                "Error loading tables: {}"
            );
            die!(
                encode_ops::encode_cmd(&enc, &words, json, &mut stdout),
                "Error: {}"
            );
        }
        Command::Explain {
            word,
            tables,
            variant,
            json,
        } => {
            let enc = die!(
                load_encoder(tables.as_deref(), variant),
                "Error loading tables: {}"
            );
            die!(
                encode_ops::explain_cmd(&enc, &word, json, &mut stdout),
                "Error: {}"
            );
        }
        Command::Batch {
            input_file,
            output_file,
            tables,
            variant,
        } => {
            let enc = die!(
                load_encoder(tables.as_deref(), variant),
                "Error loading tables: {}"
            );
            let count = die!(
                encode_ops::batch_cmd(&enc, &input_file, &output_file),
                "Error: {}"
            );
            eprintln!("Encoded {count} words -> {output_file}");
        }
        Command::TablesExport { variant } => {
            die!(table_ops::tables_export(variant, &mut stdout), "Error: {}");
        }
        Command::TablesValidate { file } => {
            die!(table_ops::tables_validate(&file, &mut stdout), "Error: {}");
        }
    }
}
