use super::alphabet::Alphabet;
use super::config::Config;
use super::dump::Dump;
use super::matcher::{Matches, Scanner};
use super::output::{Match, Output};
use super::pattern::IntoSymbols;
use super::state::{StateArena, StateId};
use super::symbol::Symbol;
use super::transitions::Transitions;

/// A finalized Aho-Corasick automaton.
///
/// Built once by a [`Builder`](super::builder::Builder) (or
/// [`build_automaton`](super::builder::build_automaton)) and immutable
/// afterwards. Scanning only reads the automaton, so one instance can serve
/// any number of concurrent scans through shared references.
///
/// # Examples
///
/// ```
/// use libaho::automaton::builder::build_automaton;
///
/// let ac = build_automaton(["he", "she", "his", "hers"]).unwrap();
/// let spans: Vec<_> = ac.find_iter("ushers").map(|m| m.span()).collect();
/// assert_eq!(spans, vec![(1, 3), (2, 2), (2, 4)]);
/// ```
#[derive(Clone, Debug)]
pub struct Automaton<C: Symbol> {
    states: StateArena<C>,
    alphabet: Alphabet<C>,
    config: Config,
    pattern_count: usize,
}

impl<C: Symbol> Automaton<C> {
    pub(crate) fn new(
        states: StateArena<C>,
        alphabet: Alphabet<C>,
        config: Config,
        pattern_count: usize,
    ) -> Self {
        Automaton {
            states,
            alphabet,
            config,
            pattern_count,
        }
    }

    /// The root state.
    #[inline]
    pub fn root(&self) -> StateId {
        StateId::ROOT
    }

    /// Returns the number of states, root included.
    pub fn state_count(&self) -> usize {
        self.states.len()
    }

    /// Returns the number of distinct patterns the automaton recognizes.
    pub fn pattern_count(&self) -> usize {
        self.pattern_count
    }

    /// Returns the configuration the automaton was built with.
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Returns the distinct symbols used by the patterns.
    pub fn alphabet(&self) -> &Alphabet<C> {
        &self.alphabet
    }

    /// Returns an iterator over every state id, root first.
    pub fn states(&self) -> impl ExactSizeIterator<Item = StateId> {
        self.states.ids()
    }

    /// Returns true if `state` was created by this automaton.
    pub fn contains_state(&self, state: StateId) -> bool {
        self.states.get(state).is_some()
    }

    /// The goto function: the explicit edge of `state` on `symbol`.
    ///
    /// The root answers every symbol, falling back to itself; any other state
    /// without an edge returns `None`, meaning the scan must take the
    /// failure link.
    ///
    /// # Panics
    ///
    /// Panics if `state` does not belong to this automaton.
    #[inline]
    pub fn goto(&self, state: StateId, symbol: C) -> Option<StateId> {
        match self.states[state].transitions.get(symbol) {
            Some(next) => Some(next),
            None if state.is_root() => Some(StateId::ROOT),
            None => None,
        }
    }

    /// The total transition function: where the automaton moves from `state`
    /// when it reads `symbol`, following failure links as needed.
    ///
    /// # Panics
    ///
    /// Panics if `state` does not belong to this automaton.
    #[inline]
    pub fn transition(&self, mut state: StateId, symbol: C) -> StateId {
        loop {
            if let Some(next) = self.goto(state, symbol) {
                return next;
            }
            state = self.states[state].failure;
        }
    }

    /// The failure link of `state`. The root fails to itself.
    ///
    /// # Panics
    ///
    /// Panics if `state` does not belong to this automaton.
    #[inline]
    pub fn failure(&self, state: StateId) -> StateId {
        self.states[state].failure
    }

    /// Every pattern recognized on reaching `state`, including those inherited
    /// along its failure chain. Longer patterns come first.
    ///
    /// # Panics
    ///
    /// Panics if `state` does not belong to this automaton.
    #[inline]
    pub fn outputs(&self, state: StateId) -> &[Output<C>] {
        &self.states[state].outputs
    }

    /// The lengths of [`outputs`](Automaton::outputs).
    ///
    /// # Panics
    ///
    /// Panics if `state` does not belong to this automaton.
    pub fn output_lengths(&self, state: StateId) -> impl Iterator<Item = usize> + '_ {
        self.outputs(state).iter().map(Output::len)
    }

    /// The explicit edges of `state`, before any failure fallback.
    ///
    /// # Panics
    ///
    /// Panics if `state` does not belong to this automaton.
    pub fn transitions(&self, state: StateId) -> &Transitions<C> {
        &self.states[state].transitions
    }

    /// Length of the trie path from the root to `state`.
    ///
    /// # Panics
    ///
    /// Panics if `state` does not belong to this automaton.
    pub fn depth(&self, state: StateId) -> usize {
        self.states[state].depth
    }

    /// Returns a scanner positioned at the root, for feeding a text piecewise.
    pub fn scanner(&self) -> Scanner<'_, C> {
        Scanner::new(self)
    }

    /// Returns an iterator over every match in `text`, overlapping ones
    /// included, ordered by end position.
    pub fn find_iter<T: IntoSymbols<C>>(&self, text: T) -> Matches<'_, C, T::Iter> {
        Matches::new(self.scanner(), text.into_symbols())
    }

    /// Collects every match in `text`.
    pub fn find_all(&self, text: impl IntoSymbols<C>) -> Vec<Match<C>> {
        self.find_iter(text).collect()
    }

    /// Returns true if any pattern occurs in `text`. Stops at the first match.
    pub fn is_match(&self, text: impl IntoSymbols<C>) -> bool {
        self.find_iter(text).next().is_some()
    }

    /// Returns a `Display` adapter listing every state's edges, failure link
    /// and outputs. Meant for debugging; the format is not stable.
    pub fn dump(&self) -> Dump<'_, C> {
        Dump::new(self)
    }
}
