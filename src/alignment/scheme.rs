use super::PenaltySchemeError;
use std::{fmt, str::FromStr};

/// The linear penalties used to fill an alignment matrix.
///
/// Values are *minimized*: `gap` is charged for each symbol aligned against a
/// gap, `mismatch` for each pair of differing symbols, and `match_bonus` for
/// each pair of equal symbols. The match bonus is usually negative, making it
/// a reward.
///
/// Only one scheme is active per computation, and it is carried by the
/// [`AlignmentMatrix`] it was used to build so that the traceback recomputes
/// candidates with the same values.
///
/// [`AlignmentMatrix`]: super::AlignmentMatrix
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "fuzzing", derive(arbitrary::Arbitrary))]
pub struct PenaltyScheme {
    pub gap:         i32,
    pub mismatch:    i32,
    pub match_bonus: i32,
}

impl PenaltyScheme {
    /// Gap 1, mismatch 1, match -2. Gaps and mismatches both cost something,
    /// which is the scheme used for ordinary global and local alignment.
    pub const DISTANCE: PenaltyScheme = PenaltyScheme::new(1, 1, -2);

    /// Gap 0, mismatch -1, match -2. With this scheme `|x| + |y| + score`
    /// equals the Levenshtein distance between `x` and `y`, so it drives
    /// [`edit_distance`](crate::distance::edit_distance).
    ///
    /// No computed cell is ever positive under this scheme, so the local
    /// clamp never fires.
    pub const SIMILARITY: PenaltyScheme = PenaltyScheme::new(0, -1, -2);

    /// Creates a new scheme from a gap penalty, mismatch penalty, and match
    /// bonus. Any values are accepted.
    #[inline]
    #[must_use]
    pub const fn new(gap: i32, mismatch: i32, match_bonus: i32) -> Self {
        PenaltyScheme {
            gap,
            mismatch,
            match_bonus,
        }
    }

    /// The contribution of aligning symbol `a` with symbol `b`, widened to
    /// the cell type.
    #[inline]
    #[must_use]
    pub fn substitution(&self, a: u8, b: u8) -> i64 {
        i64::from(if a == b { self.match_bonus } else { self.mismatch })
    }

    /// The contribution of aligning one symbol against a gap, widened to the
    /// cell type.
    #[inline]
    #[must_use]
    pub fn indel(&self) -> i64 {
        i64::from(self.gap)
    }
}

impl Default for PenaltyScheme {
    #[inline]
    fn default() -> Self {
        PenaltyScheme::DISTANCE
    }
}

impl fmt::Display for PenaltyScheme {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{},{},{}", self.gap, self.mismatch, self.match_bonus)
    }
}

impl FromStr for PenaltyScheme {
    type Err = PenaltySchemeError;

    /// Parses either a preset name (`distance` or `similarity`) or three
    /// comma-separated integers in the order `gap,mismatch,match`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.eq_ignore_ascii_case("distance") {
            return Ok(PenaltyScheme::DISTANCE);
        } else if s.eq_ignore_ascii_case("similarity") {
            return Ok(PenaltyScheme::SIMILARITY);
        }

        let fields = s
            .split(',')
            .map(|field| {
                field
                    .trim()
                    .parse::<i32>()
                    .map_err(|_| PenaltySchemeError::InvalidValue(field.trim().to_string()))
            })
            .collect::<Result<Vec<_>, _>>()?;

        match fields[..] {
            [gap, mismatch, match_bonus] => Ok(PenaltyScheme::new(gap, mismatch, match_bonus)),
            _ => Err(PenaltySchemeError::WrongFieldCount(fields.len())),
        }
    }
}

/// Selects between aligning sequences end to end or aligning only their best
/// matching substrings.
///
/// The variant decides how row 0 and column 0 are seeded, whether computed
/// cells are clamped, and where the traceback starts and stops.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "fuzzing", derive(arbitrary::Arbitrary))]
pub enum AlignmentVariant {
    /// Needleman-Wunsch style alignment of the full sequences.
    #[default]
    Global,
    /// Smith-Waterman style alignment of the best substrings.
    Local,
}

impl AlignmentVariant {
    /// The border value for a prefix of `len` symbols aligned entirely against
    /// gaps.
    ///
    /// Cells are `i64` while penalties are `i32`, so a path through a table
    /// of fewer than $2^{32}$ rows and columns cannot overflow. Larger borders
    /// saturate.
    #[inline]
    #[must_use]
    pub fn seed(self, len: usize, scheme: &PenaltyScheme) -> i64 {
        match self {
            AlignmentVariant::Global => i64::try_from(len)
                .unwrap_or(i64::MAX)
                .saturating_mul(scheme.indel()),
            AlignmentVariant::Local => 0,
        }
    }

    /// Applies the variant's floor to a computed cell value. Local tables
    /// never hold a positive value.
    #[inline]
    #[must_use]
    pub fn clamp(self, value: i64) -> i64 {
        match self {
            AlignmentVariant::Global => value,
            AlignmentVariant::Local => value.min(0),
        }
    }
}

impl fmt::Display for AlignmentVariant {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            AlignmentVariant::Global => write!(f, "global"),
            AlignmentVariant::Local => write!(f, "local"),
        }
    }
}
