use super::{AlignmentError, AlignmentMatrix, AlignmentVariant, PenaltyScheme};
use std::{fmt, ops::Range};

/// The byte inserted into an aligned sequence opposite a symbol of the other
/// sequence.
///
/// Aligned sequences do not record gap columns separately, so inputs should
/// not contain this byte. An input `-` aligns like any other symbol, but
/// [`Alignment::rescore`] counts it as a gap and stripping gaps from an
/// aligned sequence removes it.
pub const GAP: u8 = b'-';

/// One optimal alignment of two sequences, produced by
/// [`AlignmentMatrix::traceback`].
///
/// `aligned_x` and `aligned_y` always have equal length and hold [`GAP`]
/// opposite unpaired symbols, which assumes neither input contains that byte.
/// The ranges give the portion of each input sequence covered by the
/// alignment; for a global alignment they start at zero unless the traceback
/// reached the first row or column early (see [`Alignment::padded`]).
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Alignment {
    /// The score of the cell where the traceback started
    pub score:     i64,
    pub aligned_x: Vec<u8>,
    pub aligned_y: Vec<u8>,
    pub x_range:   Range<usize>,
    pub y_range:   Range<usize>,
    pub variant:   AlignmentVariant,
}

impl AlignmentMatrix {
    /// Reconstructs one optimal alignment by walking the matrix backwards.
    ///
    /// A [`Global`] traceback starts at the bottom-right cell. A [`Local`]
    /// traceback starts at the smallest cell (see [`min_cell`]) and also stops
    /// at the first cell holding zero. Both stop once the first row or column
    /// is reached; the remaining prefix is not flushed as gaps.
    ///
    /// At each cell the candidates are checked in a fixed order, which decides
    /// between equally optimal alignments:
    ///
    /// 1. the diagonal, pairing `x[i-1]` with `y[j-1]`,
    /// 2. up, pairing `x[i-1]` with a gap,
    /// 3. left, pairing a gap with `y[j-1]`.
    ///
    /// ## Errors
    ///
    /// [`AlignmentError::DimensionMismatch`] if the matrix was not built from
    /// sequences with the lengths of `x` and `y`.
    ///
    /// ## Example
    ///
    /// ```
    /// # use wordalign::alignment::{AlignmentMatrix, AlignmentVariant, PenaltyScheme};
    /// let (x, y) = (b"AGTA", b"ATA");
    /// let matrix = AlignmentMatrix::build(x, y, PenaltyScheme::DISTANCE, AlignmentVariant::Global);
    /// let alignment = matrix.traceback(x, y).unwrap();
    ///
    /// assert_eq!(alignment.aligned_x, b"AGTA");
    /// assert_eq!(alignment.aligned_y, b"A-TA");
    /// assert_eq!(alignment.score, -5);
    /// ```
    ///
    /// [`Global`]: AlignmentVariant::Global
    /// [`Local`]: AlignmentVariant::Local
    /// [`min_cell`]: AlignmentMatrix::min_cell
    pub fn traceback(&self, x: &[u8], y: &[u8]) -> Result<Alignment, AlignmentError> {
        let expected = (x.len() + 1, y.len() + 1);
        let found = (self.rows(), self.cols());
        if expected != found {
            return Err(AlignmentError::DimensionMismatch { expected, found });
        }

        Ok(self.walk(x, y))
    }

    /// The traceback itself. Dimensions are checked by the caller.
    fn walk(&self, x: &[u8], y: &[u8]) -> Alignment {
        let variant = self.variant();
        let (mut row, mut col, score) = match variant {
            AlignmentVariant::Global => (x.len(), y.len(), self.final_score()),
            AlignmentVariant::Local => self.min_cell(),
        };
        let (row_end, col_end) = (row, col);

        let mut aligned_x = Vec::with_capacity(row + col);
        let mut aligned_y = Vec::with_capacity(row + col);

        while row > 0 && col > 0 {
            let value = self.get(row, col);
            if variant == AlignmentVariant::Local && value == 0 {
                break;
            }

            let [diagonal, up, _] = self.candidates(x, y, row, col);

            if value == diagonal {
                aligned_x.push(x[row - 1]);
                aligned_y.push(y[col - 1]);
                row -= 1;
                col -= 1;
            } else if value == up {
                aligned_x.push(x[row - 1]);
                aligned_y.push(GAP);
                row -= 1;
            } else {
                aligned_x.push(GAP);
                aligned_y.push(y[col - 1]);
                col -= 1;
            }
        }

        // Emitted from the end towards the start
        aligned_x.reverse();
        aligned_y.reverse();

        Alignment {
            score,
            aligned_x,
            aligned_y,
            x_range: row..row_end,
            y_range: col..col_end,
            variant,
        }
    }
}

/// Reconstructs one optimal alignment from a completed matrix. Equivalent to
/// [`AlignmentMatrix::traceback`].
///
/// ## Errors
///
/// [`AlignmentError::DimensionMismatch`] if the matrix does not match the
/// lengths of `x` and `y`.
#[inline]
pub fn reconstruct(matrix: &AlignmentMatrix, x: &[u8], y: &[u8]) -> Result<Alignment, AlignmentError> {
    matrix.traceback(x, y)
}

/// Builds the alignment matrix for `x` and `y` and reconstructs one optimal
/// alignment from it.
///
/// ## Example
///
/// ```
/// # use wordalign::alignment::{AlignmentVariant, PenaltyScheme, align};
/// let alignment = align(b"kitten", b"sitting", PenaltyScheme::DISTANCE, AlignmentVariant::Local);
/// assert_eq!(alignment.aligned_x, b"itten");
/// assert_eq!(alignment.aligned_y, b"ittin");
/// assert_eq!(alignment.score, -7);
/// ```
#[must_use]
pub fn align(x: &[u8], y: &[u8], scheme: PenaltyScheme, variant: AlignmentVariant) -> Alignment {
    AlignmentMatrix::build(x, y, scheme, variant).walk(x, y)
}

impl Alignment {
    /// The number of aligned columns, including gaps.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.aligned_x.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.aligned_x.is_empty()
    }

    /// Extends the alignment to cover all of `x` and `y`, aligning every
    /// uncovered symbol against a gap. Leading symbols of `x` come before
    /// leading symbols of `y`, and likewise for trailing symbols.
    ///
    /// For a global alignment this flushes the prefix left over when the
    /// traceback reached the first row or column, giving an alignment of the
    /// full sequences whose length lies between `max(|x|, |y|)` and
    /// `|x| + |y|`. The score is left unchanged.
    ///
    /// ## Panics
    ///
    /// `x` and `y` must be the sequences that were aligned, or at least as long
    /// as the ends of [`x_range`] and [`y_range`].
    ///
    /// ## Example
    ///
    /// ```
    /// # use wordalign::alignment::{AlignmentVariant, PenaltyScheme, align};
    /// let (x, y) = (b"GGACTTA", b"ACT");
    /// let alignment = align(x, y, PenaltyScheme::DISTANCE, AlignmentVariant::Global);
    /// assert_eq!(alignment.aligned_x, b"ACTTA");
    ///
    /// let padded = alignment.padded(x, y);
    /// assert_eq!(padded.aligned_x, b"GGACTTA");
    /// assert_eq!(padded.aligned_y, b"--AC-T-");
    /// ```
    ///
    /// [`x_range`]: Alignment::x_range
    /// [`y_range`]: Alignment::y_range
    #[must_use]
    pub fn padded(&self, x: &[u8], y: &[u8]) -> Alignment {
        let x_lead = &x[..self.x_range.start];
        let y_lead = &y[..self.y_range.start];
        let x_tail = &x[self.x_range.end..];
        let y_tail = &y[self.y_range.end..];

        let capacity = self.len() + x_lead.len() + y_lead.len() + x_tail.len() + y_tail.len();
        let mut aligned_x = Vec::with_capacity(capacity);
        let mut aligned_y = Vec::with_capacity(capacity);

        against_gaps(&mut aligned_x, &mut aligned_y, x_lead);
        against_gaps(&mut aligned_y, &mut aligned_x, y_lead);
        aligned_x.extend_from_slice(&self.aligned_x);
        aligned_y.extend_from_slice(&self.aligned_y);
        against_gaps(&mut aligned_x, &mut aligned_y, x_tail);
        against_gaps(&mut aligned_y, &mut aligned_x, y_tail);

        Alignment {
            score: self.score,
            aligned_x,
            aligned_y,
            x_range: 0..x.len(),
            y_range: 0..y.len(),
            variant: self.variant,
        }
    }

    /// Scores the aligned columns with `scheme`. A column holding a gap costs
    /// the gap penalty, and any other column its substitution score. A `-` in
    /// either input is indistinguishable from [`GAP`] here.
    ///
    /// Rescoring a traceback with the scheme of its matrix reproduces
    /// [`score`](Alignment::score), except that a global alignment must first
    /// be [`padded`](Alignment::padded) to include the flushed prefix.
    #[must_use]
    pub fn rescore(&self, scheme: &PenaltyScheme) -> i64 {
        self.aligned_x
            .iter()
            .zip(&self.aligned_y)
            .map(|(&a, &b)| {
                if a == GAP || b == GAP {
                    scheme.indel()
                } else {
                    scheme.substitution(a, b)
                }
            })
            .sum()
    }
}

/// Appends `symbols` to `own` and the same number of gaps to `other`.
#[inline]
fn against_gaps(own: &mut Vec<u8>, other: &mut Vec<u8>, symbols: &[u8]) {
    own.extend_from_slice(symbols);
    other.extend(std::iter::repeat_n(GAP, symbols.len()));
}

impl fmt::Display for Alignment {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "{}", String::from_utf8_lossy(&self.aligned_x))?;
        write!(f, "{}", String::from_utf8_lossy(&self.aligned_y))
    }
}
