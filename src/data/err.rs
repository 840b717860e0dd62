use std::fmt::Display;

/// The process exit status that reporting an error should end with. Errors
/// without a more specific status exit with 1.
pub trait GetCode {
    fn get_code(&self) -> i32 {
        1
    }
}

impl GetCode for std::io::Error {
    #[must_use]
    #[inline]
    fn get_code(&self) -> i32 {
        self.raw_os_error().unwrap_or(1)
    }
}

/// Ends a command line tool on an error, printing it to standard error and
/// exiting with its [`GetCode`] status instead of panicking.
pub trait OrFail<T> {
    /// Prints `Error: <error>` on failure.
    fn unwrap_or_fail(self) -> T;
    /// Prints `msg` followed by the error on failure.
    fn unwrap_or_die(self, msg: &str) -> T;
}

impl<T, E> OrFail<T> for Result<T, E>
where
    E: GetCode + Display,
{
    fn unwrap_or_fail(self) -> T {
        match self {
            Ok(result) => result,
            Err(e) => {
                eprintln!("Error: {e}");
                std::process::exit(e.get_code());
            }
        }
    }

    fn unwrap_or_die(self, msg: &str) -> T {
        match self {
            Ok(result) => result,
            Err(e) => {
                eprintln!("Error: {msg}\n\n{e}");
                std::process::exit(e.get_code());
            }
        }
    }
}

/// Errors raised when configuring a spell-check search.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum SearchError {
    /// The maximum edit distance was negative
    NegativeThreshold(i64),
}

impl Display for SearchError {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            SearchError::NegativeThreshold(threshold) => {
                write!(f, "The maximum edit distance must be non-negative, but {threshold} was given")
            }
        }
    }
}

impl std::error::Error for SearchError {}

impl GetCode for SearchError {
    #[inline]
    fn get_code(&self) -> i32 {
        2
    }
}
