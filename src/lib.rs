#![doc = include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/README.md"))]
#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions, clippy::similar_names)]

/// Alignment functions
pub mod alignment;
/// Data import and error handling.
pub mod data;
/// Distance functions derived from alignment scores.
pub mod distance;
/// Exhaustive spell-check search over a word list.
pub mod search;

/// Generate sequences and other data.
#[cfg(feature = "rand")]
pub mod generate;

/// Common structures and traits re-exported
pub mod prelude {
    pub use crate::alignment::{Alignment, AlignmentMatrix, AlignmentVariant, PenaltyScheme, align};
    pub use crate::data::{err::OrFail, records::words::WordReader};
    pub use crate::distance::edit_distance;
    pub use crate::search::{ScanOutcome, SpellCheck, check_spelling};

    #[cfg(feature = "rand")]
    pub use crate::generate::rand_sequence;
}
