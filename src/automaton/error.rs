use std::collections::TryReserveError;

use thiserror::Error;

/// Errors that can occur while building an automaton.
///
/// Construction errors are fatal: the builder is consumed and no partially
/// built automaton is returned.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum BuildError {
    /// A zero-length pattern was given while empty patterns are rejected.
    ///
    /// `index` is the position of the pattern in insertion order.
    #[error("pattern #{index} is empty")]
    EmptyPattern {
        /// Insertion index of the offending pattern.
        index: usize,
    },
    /// Growing the state storage, an output set or the construction queue failed.
    #[error("out of memory while building automaton: {0}")]
    Allocation(#[from] TryReserveError),
    /// The trie needs more states than a state id can address.
    #[error("automaton exceeds {max} states", max = u32::MAX)]
    StateOverflow,
}
