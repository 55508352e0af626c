use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum InputError {
    #[error("Path '{}' does not exist.", .0.display())]
    PathNotFound(PathBuf),

    #[error("No .fasta or .faa files found in '{}'.", .0.display())]
    NoInputFiles(PathBuf),
}
