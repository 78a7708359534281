//! Driving a text through an automaton.
//!
//! A [`Scanner`] is the whole per-scan state: the current automaton state
//! and the number of symbols consumed. The automaton itself is only read,
//! so any number of scanners can run against it at the same time.

use super::machine::Automaton;
use super::output::{Match, Output};
use super::pattern::IntoSymbols;
use super::state::StateId;
use super::symbol::Symbol;

/// A cursor that feeds symbols through an [`Automaton`] one at a time.
///
/// Useful when the text arrives in pieces: matches may span piece
/// boundaries, and offsets keep counting from the first symbol fed.
///
/// ```
/// use libaho::automaton::builder::build_automaton;
///
/// let ac = build_automaton(["hers"]).unwrap();
/// let mut scanner = ac.scanner();
/// let mut found = Vec::new();
/// for piece in ["ush", "ers"] {
///     found.extend(scanner.feed(piece).map(|m| m.span()));
/// }
/// assert_eq!(found, vec![(2, 4)]);
/// ```
#[derive(Clone, Debug)]
pub struct Scanner<'a, C: Symbol> {
    automaton: &'a Automaton<C>,
    state: StateId,
    position: usize,
}

impl<'a, C: Symbol> Scanner<'a, C> {
    pub(crate) fn new(automaton: &'a Automaton<C>) -> Self {
        Scanner {
            automaton,
            state: StateId::ROOT,
            position: 0,
        }
    }

    /// Consumes one symbol and returns the outputs of the state reached.
    ///
    /// Every returned output is a pattern ending at the symbol just consumed,
    /// i.e. at index [`position()`](Scanner::position)` - 1`.
    #[inline]
    pub fn step(&mut self, symbol: C) -> &'a [Output<C>] {
        self.state = self.automaton.transition(self.state, symbol);
        self.position += 1;
        self.automaton.outputs(self.state)
    }

    /// Consumes `text` lazily, yielding the matches it completes.
    ///
    /// Symbols are consumed only as the iterator is advanced.
    pub fn feed<'s, T: IntoSymbols<C>>(&'s mut self, text: T) -> Feed<'s, 'a, C, T::Iter> {
        Feed {
            scanner: self,
            text: text.into_symbols(),
            pending: &[],
        }
    }

    /// The automaton state reached so far.
    #[inline]
    pub fn state(&self) -> StateId {
        self.state
    }

    /// The number of symbols consumed.
    #[inline]
    pub fn position(&self) -> usize {
        self.position
    }

    /// Returns to the root, as if no symbol had been consumed.
    pub fn reset(&mut self) {
        self.state = StateId::ROOT;
        self.position = 0;
    }

    fn match_for(&self, output: &Output<C>) -> Match<C> {
        let len = output.len();
        debug_assert!(len <= self.position, "output longer than the consumed text");
        Match::new(self.position - len, output.clone())
    }

    /// Yields the next pending match, consuming symbols from `text` until
    /// one is found or the text runs out.
    fn next_match<I: Iterator<Item = C>>(
        &mut self,
        text: &mut I,
        pending: &mut &'a [Output<C>],
    ) -> Option<Match<C>> {
        loop {
            let outputs: &'a [Output<C>] = *pending;
            if let Some((output, rest)) = outputs.split_first() {
                *pending = rest;
                return Some(self.match_for(output));
            }
            *pending = self.step(text.next()?);
        }
    }
}

/// An iterator over the matches in a text, in order of end position.
///
/// Matches ending at the same symbol are yielded together, longest first.
/// Created by [`Automaton::find_iter`].
#[derive(Clone, Debug)]
pub struct Matches<'a, C: Symbol, I> {
    scanner: Scanner<'a, C>,
    text: I,
    pending: &'a [Output<C>],
}

impl<'a, C: Symbol, I: Iterator<Item = C>> Matches<'a, C, I> {
    pub(crate) fn new(scanner: Scanner<'a, C>, text: I) -> Self {
        Matches {
            scanner,
            text,
            pending: &[],
        }
    }
}

impl<C: Symbol, I: Iterator<Item = C>> Iterator for Matches<'_, C, I> {
    type Item = Match<C>;

    #[inline]
    fn next(&mut self) -> Option<Match<C>> {
        self.scanner.next_match(&mut self.text, &mut self.pending)
    }
}

/// An iterator over the matches completed by one piece of text.
///
/// Created by [`Scanner::feed`]. The scanner advances as the iterator does;
/// matches not yet yielded when the iterator is dropped are lost.
#[derive(Debug)]
pub struct Feed<'s, 'a, C: Symbol, I> {
    scanner: &'s mut Scanner<'a, C>,
    text: I,
    pending: &'a [Output<C>],
}

impl<C: Symbol, I: Iterator<Item = C>> Iterator for Feed<'_, '_, C, I> {
    type Item = Match<C>;

    #[inline]
    fn next(&mut self) -> Option<Match<C>> {
        self.scanner.next_match(&mut self.text, &mut self.pending)
    }
}

#[cfg(test)]
mod test {
    use crate::automaton::builder::build_automaton;

    #[test]
    fn empty_text_has_no_matches() {
        let ac = build_automaton(["a"]).unwrap();
        assert!(ac.find_all("").is_empty());
    }

    #[test]
    fn matches_come_in_end_order() {
        let ac = build_automaton(["he", "she", "his", "hers"]).unwrap();
        let ends: Vec<usize> = ac.find_iter("ushers").map(|m| m.end()).collect();
        assert!(ends.windows(2).all(|w| w[0] <= w[1]));
    }

    #[test]
    fn same_end_longest_first() {
        let ac = build_automaton(["he", "she"]).unwrap();
        let spans: Vec<_> = ac.find_iter("she").map(|m| m.span()).collect();
        assert_eq!(spans, vec![(0, 3), (1, 2)]);
    }

    #[test]
    fn step_reports_outputs_at_position() {
        let ac = build_automaton(["ab"]).unwrap();
        let mut scanner = ac.scanner();
        assert!(scanner.step(b'a').is_empty());
        let outputs = scanner.step(b'b');
        assert_eq!(outputs.len(), 1);
        assert_eq!(outputs[0].len(), 2);
        assert_eq!(scanner.position(), 2);
        scanner.reset();
        assert_eq!(scanner.position(), 0);
        assert!(scanner.state().is_root());
    }

    #[test]
    fn feed_keeps_state_across_pieces() {
        let ac = build_automaton(["abc", "cd"]).unwrap();
        let mut scanner = ac.scanner();
        let first: Vec<_> = scanner.feed("xa").map(|m| m.span()).collect();
        assert!(first.is_empty());
        assert_eq!(scanner.position(), 2);
        let second: Vec<_> = scanner.feed("bcd").map(|m| m.span()).collect();
        assert_eq!(second, vec![(1, 3), (3, 2)]);
        assert_eq!(scanner.position(), 5);
    }

    #[test]
    fn str_offsets_are_byte_indices() {
        let ac = build_automaton(["ü"]).unwrap();
        let spans: Vec<_> = ac.find_iter("aüb").map(|m| m.span()).collect();
        assert_eq!(spans, vec![(1, 2)]);
    }

    #[test]
    fn char_offsets_are_scalar_indices() {
        let ac = build_automaton(["ü".chars()]).unwrap();
        let spans: Vec<_> = ac.find_iter("aüb".chars()).map(|m| m.span()).collect();
        assert_eq!(spans, vec![(1, 1)]);
    }

    #[test]
    fn ranges_slice_non_ascii_text() {
        let text = "héllo wörld, ça va? wörld";
        let ac = build_automaton(["wörld", "ça", "é"]).unwrap();
        let found: Vec<&str> = ac.find_iter(text).map(|m| &text[m.range()]).collect();
        assert_eq!(found, vec!["é", "wörld", "ça", "wörld"]);
        let first = ac.find_iter(text).find(|m| m.len() == "wörld".len()).unwrap();
        assert_eq!(Some(first.offset()), text.find("wörld"));
    }

    #[test]
    fn feed_ranges_slice_the_whole_text() {
        let pieces = ["añ", "o ñ", "oño"];
        let text: String = pieces.concat();
        let ac = build_automaton(["ño"]).unwrap();
        let mut scanner = ac.scanner();
        let mut found = Vec::new();
        for piece in pieces {
            found.extend(scanner.feed(piece).map(|m| m.range()));
        }
        assert!(found.iter().all(|r| &text[r.clone()] == "ño"), "{found:?}");
        assert_eq!(found.len(), 3);
    }

    #[test]
    fn byte_automaton() {
        let ac = build_automaton([&b"\x00\xff"[..], &b"\xff"[..]]).unwrap();
        let text = b"\x01\x00\xff\xff";
        let matches = ac.find_all(&text[..]);
        let found: Vec<&[u8]> = matches.iter().map(|m| m.extract(text)).collect();
        assert_eq!(found, vec![&b"\x00\xff"[..], &b"\xff"[..], &b"\xff"[..]]);
    }
}
