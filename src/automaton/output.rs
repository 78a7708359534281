//! Output descriptors attached to accepting states, and the matches built from them.

use std::ops::Range;
use std::sync::Arc;

use super::symbol::Symbol;

/// Describes one pattern that ends at a state.
///
/// With [`OutputPolicy::Length`](super::config::OutputPolicy::Length) only the
/// pattern length is stored and the matched symbols are recovered from the
/// scanned text. With [`OutputPolicy::Literal`](super::config::OutputPolicy::Literal)
/// a shared copy of the pattern is kept, so matches are self-contained.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Output<C: Symbol> {
    /// Length of the pattern, in symbols.
    Length(usize),
    /// The pattern itself.
    Literal(Arc<[C]>),
}

impl<C: Symbol> Output<C> {
    /// Returns the pattern length in symbols.
    #[inline]
    pub fn len(&self) -> usize {
        match self {
            Output::Length(len) => *len,
            Output::Literal(pattern) => pattern.len(),
        }
    }

    /// Returns true for the zero-length pattern.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the stored pattern, if the literal was retained.
    #[inline]
    pub fn literal(&self) -> Option<&[C]> {
        match self {
            Output::Length(_) => None,
            Output::Literal(pattern) => Some(&pattern[..]),
        }
    }
}

/// An occurrence of a pattern in a scanned text.
///
/// `offset` is the index of the first matched symbol. The occurrence covers
/// `text[offset..offset + len]`.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Match<C: Symbol> {
    offset: usize,
    output: Output<C>,
}

impl<C: Symbol> Match<C> {
    pub(crate) fn new(offset: usize, output: Output<C>) -> Self {
        Match { offset, output }
    }

    /// Index of the first matched symbol.
    #[inline]
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// Number of matched symbols.
    #[inline]
    pub fn len(&self) -> usize {
        self.output.len()
    }

    /// True for a match of the zero-length pattern.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.output.is_empty()
    }

    /// Index one past the last matched symbol.
    #[inline]
    pub fn end(&self) -> usize {
        self.offset + self.len()
    }

    /// The matched range of the text.
    #[inline]
    pub fn range(&self) -> Range<usize> {
        self.offset..self.end()
    }

    /// The `(offset, length)` pair of this match.
    #[inline]
    pub fn span(&self) -> (usize, usize) {
        (self.offset, self.len())
    }

    /// The output descriptor that produced this match.
    #[inline]
    pub fn output(&self) -> &Output<C> {
        &self.output
    }

    /// The matched pattern, if the automaton retains literals.
    #[inline]
    pub fn pattern(&self) -> Option<&[C]> {
        self.output.literal()
    }

    /// Slices the matched symbols out of the scanned text.
    ///
    /// # Panics
    ///
    /// Panics if `text` is shorter than [`end`](Match::end), which means it is
    /// not the text this match was found in.
    #[inline]
    pub fn extract<'t>(&self, text: &'t [C]) -> &'t [C] {
        &text[self.range()]
    }
}
