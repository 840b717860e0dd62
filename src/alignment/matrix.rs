use super::{AlignmentVariant, PenaltyScheme};
use std::{fmt, ops::Index};

/// A dense `(|x| + 1) × (|y| + 1)` table of alignment scores.
///
/// Row `i` and column `j` hold the optimal score for aligning the prefixes
/// `x[..i]` and `y[..j]`, so row 0 and column 0 represent the empty prefix.
/// The table is stored row-major in a single allocation sized up front, and
/// remembers the [`PenaltyScheme`] and [`AlignmentVariant`] used to fill it so
/// that [`traceback`](AlignmentMatrix::traceback) can recompute each cell's
/// candidates.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AlignmentMatrix {
    data:    Vec<i64>,
    rows:    usize,
    cols:    usize,
    scheme:  PenaltyScheme,
    variant: AlignmentVariant,
}

impl AlignmentMatrix {
    /// Fills the alignment matrix for `x` and `y`.
    ///
    /// The borders are seeded with `k * gap` for a [`Global`] alignment and
    /// with zero for a [`Local`] one. Every interior cell is the minimum of
    /// three candidates:
    ///
    /// - the diagonal neighbor plus the substitution score of `x[i-1]` and
    ///   `y[j-1]`,
    /// - the cell above plus the gap penalty (`x[i-1]` against a gap),
    /// - the cell to the left plus the gap penalty (`y[j-1]` against a gap).
    ///
    /// A [`Local`] matrix replaces any positive value with zero. Either
    /// sequence may be empty.
    ///
    /// ## Complexity
    ///
    /// For lengths $m$ and $n$:
    ///
    /// - Time: $O(mn)$
    /// - Space: $O(mn)$
    ///
    /// Cells are `i64`, so any `i32` penalties are accepted without overflow.
    ///
    /// ## Example
    ///
    /// ```
    /// # use wordalign::alignment::{AlignmentMatrix, AlignmentVariant, PenaltyScheme};
    /// let matrix = AlignmentMatrix::build(b"AGTA", b"ATA", PenaltyScheme::DISTANCE, AlignmentVariant::Global);
    /// assert_eq!(matrix.rows(), 5);
    /// assert_eq!(matrix.cols(), 4);
    /// assert_eq!(matrix.final_score(), -5);
    /// ```
    ///
    /// [`Global`]: AlignmentVariant::Global
    /// [`Local`]: AlignmentVariant::Local
    #[must_use]
    pub fn build(x: &[u8], y: &[u8], scheme: PenaltyScheme, variant: AlignmentVariant) -> Self {
        let rows = x.len() + 1;
        let cols = y.len() + 1;
        let gap = scheme.indel();
        let mut data = vec![0; rows * cols];

        for (j, cell) in data[..cols].iter_mut().enumerate() {
            *cell = variant.seed(j, &scheme);
        }
        for i in 1..rows {
            data[i * cols] = variant.seed(i, &scheme);
        }

        for (i, x_base) in x.iter().copied().enumerate() {
            // Row i is complete; row i + 1 is filled left to right
            let (above, current) = data[i * cols..(i + 2) * cols].split_at_mut(cols);

            for (j, y_base) in y.iter().copied().enumerate() {
                let diagonal = above[j] + scheme.substitution(x_base, y_base);
                let up = above[j + 1] + gap;
                let left = current[j] + gap;
                current[j + 1] = variant.clamp(diagonal.min(up).min(left));
            }
        }

        AlignmentMatrix {
            data,
            rows,
            cols,
            scheme,
            variant,
        }
    }

    /// The number of rows, which is one more than the length of `x`.
    #[inline]
    #[must_use]
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// The number of columns, which is one more than the length of `y`.
    #[inline]
    #[must_use]
    pub fn cols(&self) -> usize {
        self.cols
    }

    #[inline]
    #[must_use]
    pub fn scheme(&self) -> PenaltyScheme {
        self.scheme
    }

    #[inline]
    #[must_use]
    pub fn variant(&self) -> AlignmentVariant {
        self.variant
    }

    /// Gets the score in row `i` and column `j`.
    ///
    /// ## Panics
    ///
    /// Panics if `i >= rows` or `j >= cols`.
    #[inline]
    #[must_use]
    pub fn get(&self, i: usize, j: usize) -> i64 {
        assert!(i < self.rows && j < self.cols, "Cell ({i}, {j}) is outside the matrix");
        self.data[i * self.cols + j]
    }

    /// Gets row `i` as a slice.
    ///
    /// ## Panics
    ///
    /// Panics if `i >= rows`.
    #[inline]
    #[must_use]
    pub fn row(&self, i: usize) -> &[i64] {
        &self.data[i * self.cols..(i + 1) * self.cols]
    }

    /// The bottom-right cell, which holds the optimal global score for the
    /// full sequences.
    #[inline]
    #[must_use]
    pub fn final_score(&self) -> i64 {
        self.data[self.data.len() - 1]
    }

    /// Finds the smallest value in the matrix, returning `(row, col, value)`.
    /// Ties are broken by the first occurrence in row-major order.
    ///
    /// For a local matrix this is where the best local alignment ends. A
    /// matrix without any negative cell yields `(0, 0, 0)`.
    #[must_use]
    pub fn min_cell(&self) -> (usize, usize, i64) {
        let mut best = (0, self.data[0]);
        for (index, value) in self.data.iter().copied().enumerate().skip(1) {
            if value < best.1 {
                best = (index, value);
            }
        }
        (best.0 / self.cols, best.0 % self.cols, best.1)
    }

    /// Recomputes the diagonal, up, and left candidates for interior cell
    /// `(i, j)`. The caller guarantees `i > 0`, `j > 0`, and that `x` and `y`
    /// match the matrix dimensions.
    #[inline]
    pub(crate) fn candidates(&self, x: &[u8], y: &[u8], i: usize, j: usize) -> [i64; 3] {
        let scheme = &self.scheme;
        [
            self.get(i - 1, j - 1) + scheme.substitution(x[i - 1], y[j - 1]),
            self.get(i - 1, j) + scheme.indel(),
            self.get(i, j - 1) + scheme.indel(),
        ]
    }
}

impl Index<(usize, usize)> for AlignmentMatrix {
    type Output = i64;

    #[inline]
    fn index(&self, (i, j): (usize, usize)) -> &Self::Output {
        assert!(i < self.rows && j < self.cols, "Cell ({i}, {j}) is outside the matrix");
        &self.data[i * self.cols + j]
    }
}

impl fmt::Display for AlignmentMatrix {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let mut buff = itoa::Buffer::new();
        let width = self.data.iter().map(|v| buff.format(*v).len()).max().unwrap_or(1);

        for i in 0..self.rows {
            for (j, value) in self.row(i).iter().enumerate() {
                if j > 0 {
                    f.write_str(" ")?;
                }
                write!(f, "{:>width$}", buff.format(*value))?;
            }
            f.write_str("\n")?;
        }
        Ok(())
    }
}

/// Computes only the optimal global score of `x` and `y`, equal to
/// [`AlignmentMatrix::final_score`] for a [`Global`] matrix.
///
/// Two rolling rows replace the full table, so this is the kernel used when
/// scanning many candidates for their edit distance.
///
/// ## Complexity
///
/// For lengths $m$ and $n$:
///
/// - Time: $O(mn)$
/// - Space: $O(n)$
///
/// ## Example
///
/// ```
/// # use wordalign::alignment::{PenaltyScheme, global_score};
/// assert_eq!(global_score(b"kitten", b"sitting", PenaltyScheme::SIMILARITY), -10);
/// ```
///
/// [`Global`]: AlignmentVariant::Global
#[must_use]
#[cfg_attr(feature = "multiversion", multiversion::multiversion(targets = "simd"))]
pub fn global_score(x: &[u8], y: &[u8], scheme: PenaltyScheme) -> i64 {
    let global = AlignmentVariant::Global;
    let gap = scheme.indel();

    // Row i - 1 of the table, seeded as row 0
    let mut above: Vec<i64> = (0..=y.len()).map(|j| global.seed(j, &scheme)).collect();
    // Row i of the table
    let mut current = vec![0; y.len() + 1];

    for (i, x_base) in x.iter().copied().enumerate() {
        current[0] = global.seed(i + 1, &scheme);

        for (j, y_base) in y.iter().copied().enumerate() {
            let diagonal = above[j] + scheme.substitution(x_base, y_base);
            let up = above[j + 1] + gap;
            let left = current[j] + gap;
            current[j + 1] = diagonal.min(up).min(left);
        }

        std::mem::swap(&mut above, &mut current);
    }

    above[y.len()]
}
