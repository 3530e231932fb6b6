// src/error.rs
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CliError {
    #[error("root is not a directory: {}", .0.display())]
    NotADirectory(PathBuf),

    #[error("could not determine the application directory: {0}")]
    NoDefaultRoot(#[from] std::io::Error),

    #[error("no fonts were registered")]
    NothingRegistered,
}

pub type CliResult<T> = Result<T, CliError>;
