//! ## Data import and error handling
//!
//! Word lists are read with [`WordReader`], which yields one trimmed word per
//! line as a [`std::io::Result`]. Errors opening a file name the file.
//!
//! Error types across the crate implement [`GetCode`], so command line tools
//! can use [`unwrap_or_fail`] or [`unwrap_or_die`] to print the error and exit
//! with a meaningful status code.
//!
//! [`WordReader`]: records::words::WordReader
//! [`GetCode`]: err::GetCode
//! [`unwrap_or_fail`]: err::OrFail::unwrap_or_fail
//! [`unwrap_or_die`]: err::OrFail::unwrap_or_die

/// A module with error types and convenience traits for handling [`Result`].
pub mod err;
/// A module for records types, usually for I/O.
pub mod records;
