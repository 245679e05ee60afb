//! Argument handling and output formatting for the `k3sum` command.

use std::fs;
use std::io::{self, Read, Write};
use std::path::PathBuf;

use clap::Parser;
use k3_sha3::Sha3Variant;
use tracing::{debug, debug_span};

pub mod error;
pub mod parsers;

use crate::error::{CliError, CliResult};
use crate::parsers::AlgorithmOptions;

#[derive(Parser, Debug)]
#[command(name = "k3sum", version, about, long_about = None)]
pub struct Args {
    /// The hash function to apply.
    #[arg(short, long, ignore_case = true, value_enum, default_value_t = AlgorithmOptions::Sha3_256)]
    pub algorithm: AlgorithmOptions,

    /// Hash the bytes encoded by this hexadecimal string.
    #[arg(long, conflicts_with_all = ["text", "files"])]
    pub hex: Option<String>,

    /// Hash the UTF-8 bytes of this string.
    #[arg(long, conflicts_with = "files")]
    pub text: Option<String>,

    /// Files to hash. Standard input is hashed when no input is given.
    pub files: Vec<PathBuf>,
}

/// Where the bytes of one digest come from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Source {
    Hex(String),
    Text(String),
    File(PathBuf),
    Stdin,
}

impl Source {
    /// The name printed next to the digest.
    #[must_use]
    pub fn label(&self) -> String {
        match self {
            Source::Hex(_) => "<hex>".to_string(),
            Source::Text(_) => "<text>".to_string(),
            Source::File(path) => path.display().to_string(),
            Source::Stdin => "-".to_string(),
        }
    }

    pub fn read(&self) -> CliResult<Vec<u8>> {
        match self {
            Source::Hex(encoded) => Ok(hex::decode(encoded.trim())?),
            Source::Text(text) => Ok(text.as_bytes().to_vec()),
            Source::File(path) => fs::read(path).map_err(|source| CliError::Read {
                path: path.clone(),
                source,
            }),
            Source::Stdin => {
                let mut buf = Vec::new();
                io::stdin()
                    .lock()
                    .read_to_end(&mut buf)
                    .map_err(CliError::Stdin)?;
                Ok(buf)
            }
        }
    }
}

impl Args {
    #[must_use]
    pub fn variant(&self) -> Sha3Variant {
        self.algorithm.into()
    }

    /// The inputs to hash, in command line order.
    #[must_use]
    pub fn sources(&self) -> Vec<Source> {
        if let Some(encoded) = &self.hex {
            vec![Source::Hex(encoded.clone())]
        } else if let Some(text) = &self.text {
            vec![Source::Text(text.clone())]
        } else if self.files.is_empty() {
            vec![Source::Stdin]
        } else {
            self.files.iter().cloned().map(Source::File).collect()
        }
    }
}

/// Formats one output line: the lowercase hex digest, two spaces, then the source label.
#[must_use]
pub fn format_line(digest: &[u8], label: &str) -> String {
    format!("{}  {label}", hex::encode(digest))
}

/// Hashes every source and writes one line per digest to `out`.
///
/// Stops at the first input that cannot be read.
pub fn run<W: Write>(args: &Args, out: &mut W) -> CliResult<()> {
    let variant = args.variant();
    for source in args.sources() {
        let label = source.label();
        let _span = debug_span!("hash input", %variant, source = %label).entered();

        let input = source.read()?;
        debug!(bytes = input.len(), "read input");

        let digest = variant.digest(&input);
        writeln!(out, "{}", format_line(&digest, &label))?;
    }
    Ok(())
}
