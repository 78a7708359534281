use super::state::StateId;
use super::symbol::Symbol;

/// The explicit outgoing edges of one state, sorted by symbol.
///
/// Most trie states have one or two edges, so those cases are stored inline
/// and a vector is only allocated from the third edge onwards.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Transitions<C: Symbol> {
    /// No edges.
    None,
    /// Exactly one edge (symbol, target).
    One((C, StateId)),
    /// Exactly two edges (symbol1, target1, symbol2, target2), `symbol1 < symbol2`.
    Two((C, StateId, C, StateId)),
    /// Three or more edges, sorted by symbol.
    Many(Vec<(C, StateId)>),
}

impl<C: Symbol> Transitions<C> {
    /// Returns the target of the edge labeled `symbol`, or None if there is no such edge.
    #[inline]
    pub fn get(&self, symbol: C) -> Option<StateId> {
        match self {
            Transitions::None => None,
            Transitions::One((c, s)) => (*c == symbol).then_some(*s),
            Transitions::Two((c1, s1, c2, s2)) => {
                if symbol == *c1 {
                    Some(*s1)
                } else if symbol == *c2 {
                    Some(*s2)
                } else {
                    None
                }
            }
            Transitions::Many(edges) => edges
                .binary_search_by_key(&symbol, |&(c, _)| c)
                .ok()
                .map(|i| edges[i].1),
        }
    }

    /// The `index`-th edge counting in ascending symbol order, or `None` once
    /// `index` reaches [`len`](Transitions::len).
    #[inline]
    pub fn at(&self, index: usize) -> Option<(C, StateId)> {
        match self {
            Transitions::None => None,
            Transitions::One(edge) => (index == 0).then_some(*edge),
            Transitions::Two((c1, s1, c2, s2)) => match index {
                0 => Some((*c1, *s1)),
                1 => Some((*c2, *s2)),
                _ => None,
            },
            Transitions::Many(edges) => edges.get(index).copied(),
        }
    }

    /// Adds an edge, keeping the edges sorted.
    ///
    /// The symbol must not already have an edge.
    pub(crate) fn insert(&mut self, symbol: C, target: StateId) {
        debug_assert!(self.get(symbol).is_none(), "insert: symbol already has an edge");
        *self = match std::mem::take(self) {
            Transitions::None => Transitions::One((symbol, target)),
            Transitions::One((c1, s1)) => {
                if symbol < c1 {
                    Transitions::Two((symbol, target, c1, s1))
                } else {
                    Transitions::Two((c1, s1, symbol, target))
                }
            }
            Transitions::Two((c1, s1, c2, s2)) => {
                let mut edges = vec![(c1, s1), (c2, s2), (symbol, target)];
                edges.sort_by_key(|&(c, _)| c);
                Transitions::Many(edges)
            }
            Transitions::Many(mut edges) => {
                let pos = edges.partition_point(|&(c, _)| c < symbol);
                edges.insert(pos, (symbol, target));
                Transitions::Many(edges)
            }
        };
    }

    /// Returns an iterator over the edges in symbol order.
    #[inline]
    pub fn iter(&self) -> TransitionIter<'_, C> {
        TransitionIter {
            transitions: self,
            index: 0,
        }
    }

    /// Returns the number of edges.
    #[inline]
    pub fn len(&self) -> usize {
        match self {
            Transitions::None => 0,
            Transitions::One(_) => 1,
            Transitions::Two(_) => 2,
            Transitions::Many(edges) => edges.len(),
        }
    }

    /// Returns true if the state has no explicit edges.
    #[inline]
    pub fn is_empty(&self) -> bool {
        matches!(self, Transitions::None)
    }
}

// Derived `Default` would require `C: Default`.
impl<C: Symbol> Default for Transitions<C> {
    fn default() -> Self {
        Transitions::None
    }
}

/// An iterator over the edges of a state.
#[derive(Clone)]
pub struct TransitionIter<'a, C: Symbol> {
    transitions: &'a Transitions<C>,
    index: usize,
}

impl<C: Symbol> Iterator for TransitionIter<'_, C> {
    type Item = (C, StateId);

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        let edge = self.transitions.at(self.index)?;
        self.index += 1;
        Some(edge)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.transitions.len().saturating_sub(self.index);
        (remaining, Some(remaining))
    }
}

impl<C: Symbol> ExactSizeIterator for TransitionIter<'_, C> {}
