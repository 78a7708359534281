//! Failure-link construction.
//!
//! Turns the trie produced by the [`Builder`](super::builder::Builder) into a
//! complete automaton. States are visited breadth-first, so when a state at
//! depth `d` is processed every state of depth `< d` already has its final
//! failure link and output set.

use std::collections::VecDeque;

use super::alphabet::Alphabet;
use super::error::BuildError;
use super::state::{StateArena, StateId};
use super::symbol::Symbol;

/// Computes the failure link of every state and closes the output sets
/// under failure links.
///
/// For a state `s` reached from `r` on `symbol`, `failure(s)` is the target
/// of `symbol` from the deepest state on `r`'s failure chain that has an
/// explicit edge on it, or the root if none does. `s` then inherits every
/// output of `failure(s)`, which already holds the outputs of its own chain.
pub(crate) fn build_failure_links<C: Symbol>(
    states: &mut StateArena<C>,
    alphabet: &Alphabet<C>,
) -> Result<(), BuildError> {
    let mut queue = VecDeque::new();

    // Depth 1: the only proper suffix is the empty one.
    for symbol in alphabet.iter() {
        if let Some(s) = states[StateId::ROOT].transitions.get(symbol) {
            states[s].failure = StateId::ROOT;
            inherit_outputs(states, s, StateId::ROOT)?;
            enqueue(&mut queue, s)?;
        }
    }

    while let Some(r) = queue.pop_front() {
        for symbol in alphabet.iter() {
            let Some(s) = states[r].transitions.get(symbol) else {
                continue;
            };
            enqueue(&mut queue, s)?;

            let fail = fallback(states, states[r].failure, symbol);
            debug_assert!(states[fail].depth < states[s].depth);
            states[s].failure = fail;
            tracing::trace!(state = %s, failure = %fail, "failure link");

            inherit_outputs(states, s, fail)?;
        }
    }
    Ok(())
}

/// Follows failure links from `state` until an explicit edge on `symbol`
/// is found and returns its target. The root answers itself for any symbol
/// it has no edge on.
fn fallback<C: Symbol>(states: &StateArena<C>, mut state: StateId, symbol: C) -> StateId {
    loop {
        if let Some(next) = states[state].transitions.get(symbol) {
            return next;
        }
        if state.is_root() {
            return StateId::ROOT;
        }
        state = states[state].failure;
    }
}

/// Appends the outputs of `from` to those of `state`.
fn inherit_outputs<C: Symbol>(
    states: &mut StateArena<C>,
    state: StateId,
    from: StateId,
) -> Result<(), BuildError> {
    let count = states[from].outputs.len();
    if count == 0 {
        return Ok(());
    }
    states[state].outputs.try_reserve(count)?;
    for i in 0..count {
        let output = states[from].outputs[i].clone();
        states[state].outputs.push(output);
    }
    Ok(())
}

fn enqueue(queue: &mut VecDeque<StateId>, state: StateId) -> Result<(), BuildError> {
    queue.try_reserve(1)?;
    queue.push_back(state);
    Ok(())
}
