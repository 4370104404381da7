//! mibtab-std: filesystem loading and CLI collaborators for mibtab.
//!
//! The core crate is IO-free; this crate layers directory scanning and
//! file parsing on top of it for native use.

use std::error::Error;
use std::fmt;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

pub use mibtab_core;

use mibtab_core::{Module, ParseError};

/// Failure reading or parsing a MIB file.
#[derive(Debug)]
pub enum LoadError {
    /// The file could not be read.
    Io(io::Error),
    /// The file did not parse as a MIB module.
    Parse(ParseError),
}

impl fmt::Display for LoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(err) => write!(f, "{err}"),
            Self::Parse(err) => write!(f, "{err}"),
        }
    }
}

impl Error for LoadError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io(err) => Some(err),
            Self::Parse(err) => Some(err),
        }
    }
}

impl From<io::Error> for LoadError {
    fn from(err: io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<ParseError> for LoadError {
    fn from(err: ParseError) -> Self {
        Self::Parse(err)
    }
}

/// Read and parse a single MIB file.
pub fn parse_file(path: &Path) -> Result<Module, LoadError> {
    let source = fs::read(path)?;
    log::debug!("parsing {} ({} bytes)", path.display(), source.len());
    Ok(mibtab_core::parse(&source)?)
}

/// Recursively collect MIB files under `dir`, sorted by path.
///
/// Keeps files with no extension or a `.mib`, `.txt`, or `.my` extension.
#[must_use]
pub fn collect_mib_files(dir: &Path) -> Vec<PathBuf> {
    let mut files = Vec::new();
    let mut stack = vec![dir.to_path_buf()];
    while let Some(dir) = stack.pop() {
        let Ok(entries) = fs::read_dir(&dir) else {
            continue;
        };
        for entry in entries.flatten() {
            let path = entry.path();
            if path.is_dir() {
                stack.push(path);
            } else if is_mib_file(&path) {
                files.push(path);
            }
        }
    }
    files.sort();
    files
}

fn is_mib_file(path: &Path) -> bool {
    match path.extension().and_then(|ext| ext.to_str()) {
        None => true,
        Some(ext) => {
            ext.eq_ignore_ascii_case("mib")
                || ext.eq_ignore_ascii_case("txt")
                || ext.eq_ignore_ascii_case("my")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_mib_file() {
        assert!(is_mib_file(Path::new("IF-MIB")));
        assert!(is_mib_file(Path::new("if.mib")));
        assert!(is_mib_file(Path::new("if.MIB")));
        assert!(is_mib_file(Path::new("if.txt")));
        assert!(is_mib_file(Path::new("if.my")));
        assert!(!is_mib_file(Path::new("if.rs")));
        assert!(!is_mib_file(Path::new("archive.tar.gz")));
    }
}
