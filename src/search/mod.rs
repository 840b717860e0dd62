//! ## Spell-check search
//!
//! Every word in the corpus is compared with the query by
//! [`edit_distance`], and the words within a maximum distance are collected
//! into a set. The scan is exhaustive: each comparison fills an alignment
//! table, so a query costs $O(N \cdot mn)$ for a corpus of $N$ words.
//!
//! Comparisons share no state, so [`SpellCheck::par_scan`] spreads them over
//! rayon's thread pool and [`SpellCheck::par_scan_until`] additionally stops
//! starting new comparisons once a deadline passes.
//!
//! ```
//! # use wordalign::search::SpellCheck;
//! let corpus = ["cat", "bat", "cats", "dog", "cat"];
//! let spell = SpellCheck::new("cat", 1).unwrap();
//!
//! let matches = spell.par_scan(&corpus);
//! assert_eq!(matches.len(), 3);
//! assert_eq!(matches, spell.scan(&corpus));
//! ```
//!
//! A [`PenaltyScheme`] other than the default can be supplied with
//! [`SpellCheck::with_scheme`].
//!
//! [`edit_distance`]: crate::distance::edit_distance

use crate::{
    alignment::PenaltyScheme,
    data::err::SearchError,
    distance::{EDIT_DISTANCE_SCHEME, alignment_distance},
};
use log::{debug, trace, warn};
use rayon::prelude::*;
use std::{
    collections::HashSet,
    sync::atomic::{AtomicBool, AtomicUsize, Ordering},
    time::Instant,
};


/// Returns the set of words in `corpus` within edit distance `max_distance`
/// of `query`. Duplicate corpus entries appear once.
///
/// ## Example
///
/// ```
/// # use wordalign::search::check_spelling;
/// let corpus = vec!["humble".to_string(), "bumble".to_string(), "tumbler".to_string()];
/// let matches = check_spelling("humble", 1, &corpus);
/// assert!(matches.contains("humble"));
/// assert!(matches.contains("bumble"));
/// assert!(!matches.contains("tumbler"));
/// ```
#[must_use]
pub fn check_spelling<S: AsRef<str>>(query: &str, max_distance: usize, corpus: &[S]) -> HashSet<String> {
    SpellCheck::with_max_distance(query, max_distance).scan(corpus)
}

/// A query word, the largest distance a corpus word may have from it to be
/// reported, and the [`PenaltyScheme`] the distance is computed under.
///
/// The scheme defaults to [`EDIT_DISTANCE_SCHEME`], for which the distance is
/// the edit distance. Other schemes give `|x| + |y| + score` directly, which
/// may be negative; such words are never reported.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SpellCheck<'a> {
    query:        &'a str,
    max_distance: usize,
    scheme:       PenaltyScheme,
}

/// The result of a deadline-bounded scan.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct ScanOutcome {
    /// Distinct corpus words within the maximum distance, among those compared
    pub matches:  HashSet<String>,
    /// The number of corpus entries that were compared with the query
    pub compared: usize,
    /// Whether every corpus entry was compared before the deadline
    pub complete: bool,
}

impl<'a> SpellCheck<'a> {
    /// Creates a spell check for `query`.
    ///
    /// ## Errors
    ///
    /// [`SearchError::NegativeThreshold`] if `max_distance` is negative.
    pub fn new(query: &'a str, max_distance: i64) -> Result<Self, SearchError> {
        if max_distance < 0 {
            return Err(SearchError::NegativeThreshold(max_distance));
        }

        // Thresholds beyond the address space cannot be exceeded by any word
        let max_distance = usize::try_from(max_distance).unwrap_or(usize::MAX);
        Ok(SpellCheck::with_max_distance(query, max_distance))
    }

    /// Creates a spell check from a threshold that is already known to be
    /// valid.
    #[inline]
    #[must_use]
    pub fn with_max_distance(query: &'a str, max_distance: usize) -> Self {
        SpellCheck {
            query,
            max_distance,
            scheme: EDIT_DISTANCE_SCHEME,
        }
    }

    /// Computes distances under `scheme` instead of [`EDIT_DISTANCE_SCHEME`].
    ///
    /// ```
    /// # use wordalign::{alignment::PenaltyScheme, search::SpellCheck};
    /// let spell = SpellCheck::new("cat", 1).unwrap().with_scheme(PenaltyScheme::DISTANCE);
    /// assert_eq!(spell.matches("cat"), Some(0));
    /// assert_eq!(spell.matches("bat"), None);
    /// ```
    #[inline]
    #[must_use]
    pub fn with_scheme(self, scheme: PenaltyScheme) -> Self {
        SpellCheck { scheme, ..self }
    }

    #[inline]
    #[must_use]
    pub fn query(&self) -> &'a str {
        self.query
    }

    #[inline]
    #[must_use]
    pub fn max_distance(&self) -> usize {
        self.max_distance
    }

    #[inline]
    #[must_use]
    pub fn scheme(&self) -> PenaltyScheme {
        self.scheme
    }

    /// The distance from `word` to the query, if it lies between zero and
    /// the maximum distance.
    #[inline]
    #[must_use]
    pub fn matches(&self, word: &str) -> Option<usize> {
        let distance = alignment_distance(word.as_bytes(), self.query.as_bytes(), self.scheme);
        if distance < 0 {
            return None;
        }

        let distance = usize::try_from(distance).ok()?;
        (distance <= self.max_distance).then_some(distance)
    }

    #[inline]
    fn accept(&self, word: &str) -> Option<String> {
        let distance = self.matches(word)?;
        trace!("'{word}' is {distance} edits from '{query}'", query = self.query);
        Some(word.to_string())
    }

    /// Compares every corpus word with the query on the current thread.
    #[must_use]
    pub fn scan<S: AsRef<str>>(&self, corpus: &[S]) -> HashSet<String> {
        let start = Instant::now();
        let matches: HashSet<String> = corpus.iter().filter_map(|word| self.accept(word.as_ref())).collect();
        self.log_summary(corpus.len(), &matches, start);
        matches
    }

    /// Compares every corpus word with the query using rayon's global thread
    /// pool. The result is the same set as [`scan`](SpellCheck::scan).
    #[must_use]
    pub fn par_scan<S: AsRef<str> + Sync>(&self, corpus: &[S]) -> HashSet<String> {
        let start = Instant::now();
        let matches: HashSet<String> = corpus
            .par_iter()
            .filter_map(|word| self.accept(word.as_ref()))
            .collect();
        self.log_summary(corpus.len(), &matches, start);
        matches
    }

    /// Like [`par_scan`](SpellCheck::par_scan), but no comparison starts after
    /// `deadline`. Comparisons already running are allowed to finish and
    /// their matches are kept.
    ///
    /// Which words were compared before the deadline depends on scheduling,
    /// so an incomplete outcome may differ between runs.
    #[must_use]
    pub fn par_scan_until<S: AsRef<str> + Sync>(&self, corpus: &[S], deadline: Instant) -> ScanOutcome {
        let start = Instant::now();
        let expired = AtomicBool::new(false);
        let compared = AtomicUsize::new(0);

        let matches: HashSet<String> = corpus
            .par_iter()
            .filter_map(|word| {
                if expired.load(Ordering::Relaxed) {
                    return None;
                }
                if Instant::now() >= deadline {
                    expired.store(true, Ordering::Relaxed);
                    return None;
                }

                compared.fetch_add(1, Ordering::Relaxed);
                self.accept(word.as_ref())
            })
            .collect();

        let compared = compared.into_inner();
        let complete = compared == corpus.len();
        if complete {
            self.log_summary(corpus.len(), &matches, start);
        } else {
            warn!(
                "Deadline reached for '{query}' after comparing {compared} of {total} words",
                query = self.query,
                total = corpus.len()
            );
        }

        ScanOutcome {
            matches,
            compared,
            complete,
        }
    }

    fn log_summary(&self, total: usize, matches: &HashSet<String>, start: Instant) {
        debug!(
            "Compared '{query}' with {total} words in {elapsed:?}: {found} within distance {max} under {scheme}",
            query = self.query,
            scheme = self.scheme,
            elapsed = start.elapsed(),
            found = matches.len(),
            max = self.max_distance
        );
    }
}
