use super::RecordReader;
use std::{
    fs::File,
    io::{BufRead, BufReader, Error as IOError, ErrorKind, Read},
    path::Path,
};

/// Structure for buffered reading of word lists.
///
/// Each line holds one word. Surrounding whitespace is trimmed and blank lines
/// are skipped; no other formatting is assumed. Words are yielded as
/// [`std::io::Result<String>`], failing on I/O errors or on lines that are not
/// valid UTF-8.
///
/// ## Example
///
/// ```
/// # use wordalign::data::records::words::WordReader;
/// let data: &[u8] = b"humble\n  bumble \r\n\nfirefly\n";
/// let words = WordReader::new(data).collect::<std::io::Result<Vec<_>>>().unwrap();
/// assert_eq!(words, ["humble", "bumble", "firefly"]);
/// ```
#[derive(Debug)]
pub struct WordReader<R: Read> {
    reader: BufReader<R>,
    buffer: String,
    line:   usize,
}

impl<R: Read> WordReader<R> {
    /// Creates an iterator over a word list, wrapping the input in a buffered
    /// reader. Empty input yields no words.
    pub fn new(inner: R) -> Self {
        WordReader::from_bufreader(BufReader::new(inner))
    }

    /// Creates an iterator over a word list from a `BufReader`.
    pub fn from_bufreader(reader: BufReader<R>) -> Self {
        WordReader {
            reader,
            buffer: String::new(),
            line: 0,
        }
    }
}

impl WordReader<File> {
    /// Opens a word list file.
    ///
    /// ## Errors
    ///
    /// Will return `Err` if the file cannot be opened or is empty. The error
    /// names the file.
    pub fn from_filename<P>(filename: P) -> std::io::Result<WordReader<File>>
    where
        P: AsRef<Path>, {
        let path = filename.as_ref();

        let file = File::open(path).map_err(|err| Self::new_wrapped("file open error", path, err))?;
        let metadata = file
            .metadata()
            .map_err(|err| Self::new_wrapped("metadata error", path, err))?;
        if metadata.len() == 0 {
            return Err(Self::new_kind("file empty", path, ErrorKind::InvalidInput));
        }

        Ok(WordReader::new(file))
    }
}

impl<R: Read> RecordReader for WordReader<R> {
    const RECORD_NAME: &str = "word list";
}

impl<R: Read> Iterator for WordReader<R> {
    type Item = std::io::Result<String>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            self.buffer.clear();
            self.line += 1;

            match self.reader.read_line(&mut self.buffer) {
                Ok(0) => return None,
                Ok(_) => {}
                Err(err) if err.kind() == ErrorKind::InvalidData => {
                    return Some(Err(IOError::new(
                        ErrorKind::InvalidData,
                        format!("Line {line} of the word list is not valid UTF-8", line = self.line),
                    )));
                }
                Err(err) => return Some(Err(err)),
            }

            let word = self.buffer.trim();
            if !word.is_empty() {
                return Some(Ok(word.to_string()));
            }
        }
    }
}

/// Reads every word in the file at `filename` into memory.
///
/// ## Errors
///
/// Any error from [`WordReader::from_filename`] or from reading a line.
pub fn read_words<P: AsRef<Path>>(filename: P) -> std::io::Result<Vec<String>> {
    WordReader::from_filename(filename)?.collect()
}
