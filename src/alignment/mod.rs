//! ## Functions for aligning sequence data.
//!
//! *wordalign* aligns any two byte sequences over a shared alphabet, such as
//! words, DNA, or protein.
//!
//! - Build the dynamic programming table with [`AlignmentMatrix::build`],
//!   choosing a [`PenaltyScheme`] and an [`AlignmentVariant`].
//! - Reconstruct one optimal alignment with [`AlignmentMatrix::traceback`],
//!   or do both steps at once with [`align`].
//! - When only the optimal global score is needed, [`global_score`] avoids
//!   allocating the full table.
//!
//! ### Scoring Convention
//!
//! All schemes are *minimized*: the gap and mismatch values are penalties
//! and the match value is usually negative, acting as a reward. A local
//! alignment therefore ends at the most negative cell of its table, and every
//! positive value in a local table is clamped to zero.
//!
//! ```
//! # use wordalign::alignment::{AlignmentMatrix, AlignmentVariant, PenaltyScheme};
//! let x = b"HELLOWORLD";
//! let y = b"XXLOWOXX";
//!
//! let matrix = AlignmentMatrix::build(x, y, PenaltyScheme::DISTANCE, AlignmentVariant::Local);
//! let alignment = matrix.traceback(x, y).unwrap();
//!
//! assert_eq!(alignment.score, -8);
//! assert_eq!(alignment.aligned_x, b"LOWO");
//! assert_eq!(alignment.x_range, 3..7);
//! ```

mod errors;
mod matrix;
mod scheme;
mod traceback;

#[cfg(test)]
mod test;

pub use errors::*;
pub use matrix::*;
pub use scheme::*;
pub use traceback::*;
