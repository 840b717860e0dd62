use crate::data::err::GetCode;
use std::{error::Error, fmt};

/// An enum representing errors that can happen when reconstructing an
/// alignment from an [`AlignmentMatrix`].
///
/// [`AlignmentMatrix`]: super::AlignmentMatrix
#[derive(Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum AlignmentError {
    /// The matrix was not built from sequences of these lengths. Both values
    /// are `(rows, cols)` pairs.
    DimensionMismatch {
        expected: (usize, usize),
        found:    (usize, usize),
    },
}

impl fmt::Display for AlignmentError {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            AlignmentError::DimensionMismatch { expected, found } => write!(
                f,
                "The sequences require a {}x{} matrix but the matrix is {}x{}",
                expected.0, expected.1, found.0, found.1
            ),
        }
    }
}

impl fmt::Debug for AlignmentError {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{self}")
    }
}

impl Error for AlignmentError {}
impl GetCode for AlignmentError {}

/// An enum representing errors when parsing a [`PenaltyScheme`] from text.
///
/// [`PenaltyScheme`]: super::PenaltyScheme
#[derive(Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum PenaltySchemeError {
    /// A field was not an integer
    InvalidValue(String),
    /// The scheme did not have exactly three fields
    WrongFieldCount(usize),
}

impl fmt::Display for PenaltySchemeError {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            PenaltySchemeError::InvalidValue(value) => {
                write!(f, "The penalty '{value}' is not an integer")
            }
            PenaltySchemeError::WrongFieldCount(count) => write!(
                f,
                "Expected 'distance', 'similarity', or three values 'gap,mismatch,match' but found {count} values"
            ),
        }
    }
}

impl fmt::Debug for PenaltySchemeError {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{self}")
    }
}

impl Error for PenaltySchemeError {}
impl GetCode for PenaltySchemeError {}
