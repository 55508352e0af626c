use anyhow::Result;
use log::{debug, info};
use std::{
    cmp::Ordering,
    path::{Path, PathBuf},
};
use walkdir::{DirEntry, WalkDir};

use crate::error::InputError;

const SEQUENCE_EXTENSIONS: [&str; 2] = [".fasta", ".faa"];

/// Files to scan and the directory the reports are written to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputSet {
    pub files: Vec<PathBuf>,
    pub base_dir: PathBuf,
}

/// Resolves the command line path into the list of files to scan.
///
/// A regular file is taken as is, whatever its extension, and its parent
/// becomes the base directory. Anything else is walked recursively for
/// `.fasta`/`.faa` files (case-insensitive) and is itself the base directory.
pub fn discover_input_files(path: &Path) -> Result<InputSet> {
    if !path.exists() {
        return Err(InputError::PathNotFound(path.to_path_buf()).into());
    }

    let input = if path.is_file() {
        let base_dir = match path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
            _ => PathBuf::from("."),
        };
        InputSet {
            files: vec![path.to_path_buf()],
            base_dir,
        }
    } else {
        InputSet {
            files: walk_sequence_files(path),
            base_dir: path.to_path_buf(),
        }
    };

    if input.files.is_empty() {
        return Err(InputError::NoInputFiles(path.to_path_buf()).into());
    }

    info!(
        "Found {} sequence file(s). Reports will be written to '{}'",
        input.files.len(),
        input.base_dir.display()
    );

    Ok(input)
}

fn walk_sequence_files(dir: &Path) -> Vec<PathBuf> {
    WalkDir::new(dir)
        .follow_links(false)
        .sort_by(files_before_dirs)
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|entry| entry.path().is_file() && is_sequence_file(entry.path()))
        .map(|entry| {
            debug!("Discovered {}", entry.path().display());
            entry.into_path()
        })
        .collect()
}

// Top-down order: the files of a directory, then each subdirectory in turn.
fn files_before_dirs(a: &DirEntry, b: &DirEntry) -> Ordering {
    a.file_type()
        .is_dir()
        .cmp(&b.file_type().is_dir())
        .then_with(|| a.file_name().cmp(b.file_name()))
}

pub fn is_sequence_file(path: &Path) -> bool {
    match path.file_name() {
        Some(name) => {
            let name = name.to_string_lossy().to_lowercase();
            SEQUENCE_EXTENSIONS.iter().any(|ext| name.ends_with(ext))
        }
        None => false,
    }
}
