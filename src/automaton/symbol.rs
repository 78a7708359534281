use std::fmt::Debug;
use std::hash::Hash;

/// Trait for types that can serve as symbols of the automaton's alphabet.
///
/// This trait is automatically implemented for any type satisfying all the
/// required bounds (`u8`, `char`, `u16`, `u32`, etc.).
///
/// - `Copy`: transitions store symbols by value
/// - `Eq + Ord`: transitions of a state are kept sorted by symbol
/// - `Hash`: alphabet deduplication during construction
/// - `Debug`: diagnostic dumps
pub trait Symbol: Copy + Eq + Ord + Hash + Debug {}

impl<T: Copy + Eq + Ord + Hash + Debug> Symbol for T {}
