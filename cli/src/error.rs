use std::io;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CliError {
    #[error("invalid hex input: {0}")]
    Hex(#[from] hex::FromHexError),

    #[error("{}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("standard input: {0}")]
    Stdin(#[source] io::Error),

    #[error("failed to write digest: {0}")]
    Write(#[from] io::Error),
}

pub type CliResult<T> = Result<T, CliError>;
