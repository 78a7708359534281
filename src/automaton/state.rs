//! State identifiers and the arena that stores every state of an automaton.
//!
//! States live in one growable vector and are addressed by index. They are
//! never freed individually; the whole arena is dropped with the automaton.

use std::fmt;
use std::ops::{Index, IndexMut};

use super::error::BuildError;
use super::output::Output;
use super::symbol::Symbol;
use super::transitions::Transitions;

/// Identifier of a state in an [`Automaton`](super::machine::Automaton).
///
/// Ids are only handed out by the automaton itself; state `0` is the root.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct StateId(u32);

impl StateId {
    /// The root state, created before any other.
    pub const ROOT: StateId = StateId::new(0);

    pub(crate) const fn new(id: u32) -> Self {
        StateId(id)
    }

    /// Returns true if this is the root state.
    #[inline]
    pub fn is_root(self) -> bool {
        self == StateId::ROOT
    }

    /// Returns the id as an index.
    #[inline]
    pub fn as_usize(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for StateId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// A single state: its explicit edges, failure link and output set.
#[derive(Clone, Debug)]
pub(crate) struct State<C: Symbol> {
    pub(crate) transitions: Transitions<C>,
    pub(crate) failure: StateId,
    pub(crate) outputs: Vec<Output<C>>,
    /// Length of the path from the root.
    pub(crate) depth: usize,
}

impl<C: Symbol> State<C> {
    fn new(depth: usize) -> Self {
        State {
            transitions: Transitions::None,
            failure: StateId::ROOT,
            outputs: Vec::new(),
            depth,
        }
    }
}

/// Append-only storage for states, indexed by [`StateId`].
#[derive(Clone, Debug)]
pub(crate) struct StateArena<C: Symbol> {
    states: Vec<State<C>>,
}

impl<C: Symbol> StateArena<C> {
    /// Creates an arena holding only the root state.
    pub(crate) fn new() -> Self {
        StateArena {
            states: vec![State::new(0)],
        }
    }

    /// Allocates a fresh state at `depth` and returns its id.
    pub(crate) fn push(&mut self, depth: usize) -> Result<StateId, BuildError> {
        let id = u32::try_from(self.states.len()).map_err(|_| BuildError::StateOverflow)?;
        self.states.try_reserve(1)?;
        self.states.push(State::new(depth));
        Ok(StateId::new(id))
    }

    /// Returns the state, or None if `id` was not allocated by this arena.
    #[inline]
    pub(crate) fn get(&self, id: StateId) -> Option<&State<C>> {
        self.states.get(id.as_usize())
    }

    /// Returns the number of allocated states.
    #[inline]
    pub(crate) fn len(&self) -> usize {
        self.states.len()
    }

    /// Returns an iterator over all ids, in allocation order.
    pub(crate) fn ids(&self) -> impl ExactSizeIterator<Item = StateId> {
        // `push` guarantees every index fits in a u32.
        (0..self.states.len() as u32).map(StateId::new)
    }
}

impl<C: Symbol> Index<StateId> for StateArena<C> {
    type Output = State<C>;

    #[inline]
    fn index(&self, id: StateId) -> &State<C> {
        match self.states.get(id.as_usize()) {
            Some(state) => state,
            None => panic!("state {id} does not belong to this automaton"),
        }
    }
}

impl<C: Symbol> IndexMut<StateId> for StateArena<C> {
    #[inline]
    fn index_mut(&mut self, id: StateId) -> &mut State<C> {
        match self.states.get_mut(id.as_usize()) {
            Some(state) => state,
            None => panic!("state {id} does not belong to this automaton"),
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn arena_starts_with_root() {
        let arena = StateArena::<u8>::new();
        assert_eq!(arena.len(), 1);
        let root = &arena[StateId::ROOT];
        assert_eq!(root.depth, 0);
        assert_eq!(root.failure, StateId::ROOT);
        assert!(root.outputs.is_empty());
    }

    #[test]
    fn ids_are_sequential() {
        let mut arena = StateArena::<u8>::new();
        let a = arena.push(1).unwrap();
        let b = arena.push(2).unwrap();
        assert_eq!(a, StateId::new(1));
        assert_eq!(b, StateId::new(2));
        assert_eq!(arena[b].depth, 2);
        assert_eq!(arena.ids().collect::<Vec<_>>(), vec![StateId::ROOT, a, b]);
    }

    #[test]
    fn unknown_id_is_absent() {
        let arena = StateArena::<u8>::new();
        assert!(arena.get(StateId::new(7)).is_none());
    }

    #[test]
    #[should_panic(expected = "state 7 does not belong to this automaton")]
    fn indexing_unknown_id_panics() {
        let arena = StateArena::<u8>::new();
        let _ = &arena[StateId::new(7)];
    }
}
