//! ## Distances derived from alignment scores
//!
//! The optimal global alignment score of `x` and `y` turns into a distance by
//! adding back both sequence lengths:
//!
//! $$ d(x, y) = |x| + |y| + \text{score}(x, y) $$
//!
//! With [`PenaltyScheme::SIMILARITY`] (gap 0, mismatch -1, match -2), an
//! alignment with $M$ matches, $S$ substitutions, and $G$ gap columns has
//! $|x| + |y| = 2M + 2S + G$ and a score of $-2M - S$, so $d = S + G$. The
//! minimum over all alignments is the Levenshtein distance.

use crate::alignment::{PenaltyScheme, global_score};

/// The scheme under which [`alignment_distance`] equals the edit distance.
pub const EDIT_DISTANCE_SCHEME: PenaltyScheme = PenaltyScheme::SIMILARITY;

/// Computes `|x| + |y| + score`, where `score` is the optimal global alignment
/// score of `x` and `y` under `scheme`.
///
/// Only [`EDIT_DISTANCE_SCHEME`] gives the edit distance; other schemes give
/// other (possibly negative) values.
#[must_use]
#[allow(clippy::cast_possible_wrap)]
pub fn alignment_distance(x: &[u8], y: &[u8], scheme: PenaltyScheme) -> i64 {
    x.len() as i64 + y.len() as i64 + global_score(x, y, scheme)
}

/// Calculates the minimum number of single-symbol insertions, deletions, and
/// substitutions needed to turn `x` into `y`.
///
/// ## Example
///
/// ```
/// # use wordalign::distance::edit_distance;
/// assert_eq!(edit_distance(b"kitten", b"sitting"), 3);
/// assert_eq!(edit_distance(b"humble", b"humble"), 0);
/// assert_eq!(edit_distance(b"", b"abc"), 3);
/// ```
#[must_use]
pub fn edit_distance(x: &[u8], y: &[u8]) -> usize {
    // Every column scores at least -2 while consuming two symbols, so the
    // distance is never negative and is at most max(|x|, |y|)
    usize::try_from(alignment_distance(x, y, EDIT_DISTANCE_SCHEME)).unwrap_or_default()
}
