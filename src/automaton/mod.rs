/// Trie construction and the `build_automaton` entry points.
pub mod builder;
/// Trait for types that can serve as automaton symbols.
pub mod symbol;
/// Conversion of patterns and texts into symbol sequences.
pub mod pattern;
/// Distinct symbols used by the patterns.
pub mod alphabet;
/// Compact per-state transition tables.
pub mod transitions;
/// State ids and state storage.
pub mod state;
/// Output descriptors and matches.
pub mod output;
/// Construction options.
pub mod config;
/// Construction errors.
pub mod error;
/// Failure links and output propagation.
pub(crate) mod failure;
/// The finalized automaton.
pub mod machine;
/// Scanning texts.
pub mod matcher;
/// Diagnostic dump of the automaton tables.
pub mod dump;

pub use alphabet::Alphabet;
pub use builder::{build_automaton, build_automaton_with, Builder};
pub use config::{Config, EmptyPatterns, OutputPolicy};
pub use error::BuildError;
pub use machine::Automaton;
pub use matcher::{Feed, Matches, Scanner};
pub use output::{Match, Output};
pub use pattern::IntoSymbols;
pub use state::StateId;
pub use symbol::Symbol;
pub use transitions::Transitions;
