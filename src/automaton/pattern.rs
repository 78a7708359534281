use std::iter::Copied;
use std::slice;
use std::str::{Bytes, Chars};

use smallvec::SmallVec;

use super::symbol::Symbol;

/// Trait for types that can be read as a sequence of symbols.
///
/// Used both for patterns passed to the [`Builder`](super::builder::Builder)
/// and for texts scanned by an [`Automaton`](super::machine::Automaton).
/// Implemented for common string and sequence types so that callers never
/// have to convert by hand.
pub trait IntoSymbols<C: Symbol> {
    /// Iterator over the symbols, in order.
    type Iter: Iterator<Item = C>;

    /// Returns the symbols as a lazy iterator.
    fn into_symbols(self) -> Self::Iter;

    /// Collects the symbols into a buffer.
    fn collect_symbols(self) -> SmallVec<[C; 32]>
    where
        Self: Sized,
    {
        self.into_symbols().collect()
    }
}

// String types → UTF-8 bytes, so offsets slice the original `str`

impl<'a> IntoSymbols<u8> for &'a str {
    type Iter = Bytes<'a>;

    fn into_symbols(self) -> Bytes<'a> {
        self.bytes()
    }
}

impl<'b> IntoSymbols<u8> for &&'b str {
    type Iter = Bytes<'b>;

    fn into_symbols(self) -> Bytes<'b> {
        (*self).bytes()
    }
}

impl<'a> IntoSymbols<u8> for &'a String {
    type Iter = Bytes<'a>;

    fn into_symbols(self) -> Bytes<'a> {
        self.bytes()
    }
}

impl IntoSymbols<u8> for String {
    type Iter = std::vec::IntoIter<u8>;

    fn into_symbols(self) -> Self::Iter {
        self.into_bytes().into_iter()
    }
}

// Explicit `chars()` for automata over Unicode scalar values

impl<'a> IntoSymbols<char> for Chars<'a> {
    type Iter = Chars<'a>;

    fn into_symbols(self) -> Chars<'a> {
        self
    }
}

// Generic sequence types → C

impl<'a, C: Symbol> IntoSymbols<C> for &'a [C] {
    type Iter = Copied<slice::Iter<'a, C>>;

    fn into_symbols(self) -> Self::Iter {
        self.iter().copied()
    }
}

impl<C: Symbol> IntoSymbols<C> for Vec<C> {
    type Iter = std::vec::IntoIter<C>;

    fn into_symbols(self) -> Self::Iter {
        self.into_iter()
    }
}

impl<'a, C: Symbol> IntoSymbols<C> for &'a Vec<C> {
    type Iter = Copied<slice::Iter<'a, C>>;

    fn into_symbols(self) -> Self::Iter {
        self.iter().copied()
    }
}

impl<C: Symbol, const N: usize> IntoSymbols<C> for [C; N] {
    type Iter = std::array::IntoIter<C, N>;

    fn into_symbols(self) -> Self::Iter {
        self.into_iter()
    }
}

impl<'a, C: Symbol, const N: usize> IntoSymbols<C> for &'a [C; N] {
    type Iter = Copied<slice::Iter<'a, C>>;

    fn into_symbols(self) -> Self::Iter {
        self.iter().copied()
    }
}
