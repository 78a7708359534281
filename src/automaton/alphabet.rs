//! Registry of the distinct symbols used by the patterns.

use hashbrown::HashSet;

use super::symbol::Symbol;

/// The set of distinct symbols seen across all patterns.
///
/// Symbols are kept in first-seen order so that construction, and the
/// diagnostic dump, are deterministic. The alphabet is only consulted while
/// computing failure links; scanning looks up the symbol actually read.
#[derive(Clone, Debug)]
pub struct Alphabet<C: Symbol> {
    symbols: Vec<C>,
    seen: HashSet<C>,
}

impl<C: Symbol> Alphabet<C> {
    pub(crate) fn new() -> Self {
        Alphabet {
            symbols: Vec::new(),
            seen: HashSet::new(),
        }
    }

    /// Records `symbol`. Returns `true` the first time it is seen.
    pub(crate) fn insert(&mut self, symbol: C) -> bool {
        let added = self.seen.insert(symbol);
        if added {
            self.symbols.push(symbol);
        }
        added
    }

    /// Returns true if `symbol` occurs in some pattern.
    #[inline]
    pub fn contains(&self, symbol: C) -> bool {
        self.seen.contains(&symbol)
    }

    /// Returns an iterator over the symbols in first-seen order.
    pub fn iter(&self) -> impl ExactSizeIterator<Item = C> + '_ {
        self.symbols.iter().copied()
    }

    /// Returns the number of distinct symbols.
    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    /// Returns true if no symbol has been recorded.
    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn insertion_is_idempotent() {
        let mut alphabet = Alphabet::new();
        assert!(alphabet.insert('b'));
        assert!(alphabet.insert('a'));
        assert!(!alphabet.insert('b'));
        assert_eq!(alphabet.len(), 2);
        assert_eq!(alphabet.iter().collect::<Vec<_>>(), vec!['b', 'a']);
    }

    #[test]
    fn empty_alphabet() {
        let alphabet = Alphabet::<u8>::new();
        assert!(alphabet.is_empty());
        assert!(!alphabet.contains(b'x'));
        assert_eq!(alphabet.iter().next(), None);
    }
}
