use std::{error::Error, fmt, io::ErrorKind, path::Path};

/// A module for reading word lists with one word per line.
pub mod words;

/// An I/O error annotated with the file it came from.
#[derive(Debug)]
struct RecordError {
    description: String,
    source:      Box<dyn Error + Send + Sync>,
}

impl fmt::Display for RecordError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.description)
    }
}

impl Error for RecordError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        Some(self.source.as_ref())
    }
}

/// Context shared by the record readers for building I/O errors that name the
/// record type and the offending file.
trait RecordReader {
    const RECORD_NAME: &str;

    fn new_kind(description: &str, path: &Path, kind: ErrorKind) -> std::io::Error {
        std::io::Error::new(kind, format!("{description} for {}: '{}'", Self::RECORD_NAME, path.display()))
    }

    fn new_wrapped(description: &str, path: &Path, err: std::io::Error) -> std::io::Error {
        std::io::Error::other(RecordError {
            description: format!("{description} for {}: '{}'", Self::RECORD_NAME, path.display()),
            source:      Box::new(err),
        })
    }
}
