use std::fmt;

use super::machine::Automaton;
use super::output::Output;
use super::symbol::Symbol;

/// Human-readable listing of an automaton's tables.
///
/// One line per explicit edge, then the failure link, then one line per
/// output, for every state in id order. Created by [`Automaton::dump`].
pub struct Dump<'a, C: Symbol> {
    automaton: &'a Automaton<C>,
}

impl<'a, C: Symbol> Dump<'a, C> {
    pub(crate) fn new(automaton: &'a Automaton<C>) -> Self {
        Dump { automaton }
    }
}

impl<C: Symbol> fmt::Display for Dump<'_, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let ac = self.automaton;
        writeln!(f, "** automaton [BEGIN] **")?;
        for state in ac.states() {
            for (symbol, target) in ac.transitions(state).iter() {
                // Debug output of symbols ignores width, so pad the rendered label.
                let label = format!("{symbol:?}");
                writeln!(f, "{state:>4}\t {label:>4} -> {target}")?;
            }
            writeln!(f, "{state:>4}\t fail -> {}", ac.failure(state))?;
            for output in ac.outputs(state) {
                match output {
                    Output::Length(len) => writeln!(f, "{state:>4}\t out  -> {len}")?,
                    Output::Literal(pattern) => writeln!(f, "{state:>4}\t out  -> {pattern:?}")?,
                }
            }
        }
        writeln!(f, "** automaton [END] **")
    }
}
