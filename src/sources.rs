//! Input source resolution and lifecycle

use crate::error::{CatContext, CatError, CatResult};
use std::fmt;
use std::fs::File;
use std::io::{self, BufRead, BufReader};

/// One input to concatenate: a named file or standard input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Source {
    Stdin,
    Path(String),
}

impl Source {
    /// Open this source for reading.
    ///
    /// Named files are opened fresh each time and rejected up front when
    /// they are directories; standard input is handed out as a locked
    /// handle and is never closed by this crate.
    pub fn open(&self) -> CatResult<Box<dyn BufRead>> {
        match self {
            Source::Stdin => Ok(Box::new(io::stdin().lock())),
            Source::Path(path) => {
                let file = File::open(path).with_file_context(path)?;
                if file.metadata().with_file_context(path)?.is_dir() {
                    return Err(CatError::is_directory(path));
                }
                Ok(Box::new(BufReader::new(file)))
            }
        }
    }
}

impl fmt::Display for Source {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Source::Stdin => write!(f, "-"),
            Source::Path(path) => write!(f, "{}", path),
        }
    }
}

/// Map the positional arguments to input sources, in argument order.
///
/// No arguments means a single implicit standard-input source; the `-`
/// sentinel names standard input explicitly and may appear more than once.
pub fn resolve(files: &[String]) -> Vec<Source> {
    if files.is_empty() {
        return vec![Source::Stdin];
    }
    files
        .iter()
        .map(|file| {
            if file == "-" {
                Source::Stdin
            } else {
                Source::Path(file.clone())
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_resolve_empty_defaults_to_stdin() {
        assert_eq!(resolve(&[]), vec![Source::Stdin]);
    }

    #[test]
    fn test_resolve_keeps_argument_order() {
        let files = vec!["a.txt".to_string(), "-".to_string(), "b.txt".to_string()];
        assert_eq!(
            resolve(&files),
            vec![
                Source::Path("a.txt".to_string()),
                Source::Stdin,
                Source::Path("b.txt".to_string()),
            ]
        );
    }

    #[test]
    fn test_open_missing_file() {
        let source = Source::Path("/nonexistent/missing.txt".to_string());
        match source.open() {
            Err(CatError::FileNotFound { file }) => {
                assert_eq!(file, "/nonexistent/missing.txt")
            }
            other => panic!("expected FileNotFound, got {:?}", other.map(|_| ())),
        }
    }

    #[test]
    fn test_open_directory_is_rejected() {
        let temp_dir = TempDir::new().expect("failed to create temp dir");
        let source = Source::Path(temp_dir.path().to_string_lossy().to_string());
        assert!(matches!(source.open(), Err(CatError::IsDirectory { .. })));
    }

    #[test]
    fn test_open_regular_file() -> CatResult<()> {
        let temp_dir = TempDir::new().expect("failed to create temp dir");
        let path = temp_dir.path().join("input.txt");
        fs::write(&path, "hello\n").expect("failed to write fixture");

        let source = Source::Path(path.to_string_lossy().to_string());
        let mut reader = source.open()?;
        let mut line = String::new();
        reader.read_line(&mut line)?;
        assert_eq!(line, "hello\n");
        Ok(())
    }
}
