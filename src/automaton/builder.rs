use std::sync::Arc;

use super::alphabet::Alphabet;
use super::config::{Config, EmptyPatterns, OutputPolicy};
use super::error::BuildError;
use super::failure::build_failure_links;
use super::machine::Automaton;
use super::output::Output;
use super::pattern::IntoSymbols;
use super::state::{StateArena, StateId};
use super::symbol::Symbol;

/// A builder for constructing an [`Automaton`] from a set of patterns.
///
/// Patterns are inserted into a trie one at a time, in any order; patterns
/// sharing a prefix share the corresponding path. [`build`](Builder::build)
/// then computes failure links and hands out the finished automaton.
///
/// ```
/// use libaho::automaton::builder::Builder;
///
/// let mut builder = Builder::new();
/// builder.add_pattern("abc").unwrap();
/// builder.add_pattern("bc").unwrap();
/// let ac = builder.build().unwrap();
/// assert_eq!(ac.find_all("abc").len(), 2);
/// ```
#[derive(Clone, Debug)]
pub struct Builder<C: Symbol> {
    config: Config,
    states: StateArena<C>,
    alphabet: Alphabet<C>,
    /// Every `add_pattern` call, including rejected and duplicate ones.
    inserted: usize,
    /// Distinct patterns recorded.
    patterns: usize,
}

impl<C: Symbol> Builder<C> {
    /// Creates a builder with the default [`Config`].
    pub fn new() -> Self {
        Builder::with_config(Config::default())
    }

    /// Creates a builder with the given configuration.
    pub fn with_config(config: Config) -> Self {
        Builder {
            config,
            states: StateArena::new(),
            alphabet: Alphabet::new(),
            inserted: 0,
            patterns: 0,
        }
    }

    /// Adds a pattern to the trie.
    ///
    /// The pattern can be any type that implements [`IntoSymbols`], including
    /// `&str`, `String`, `&[u8]`, `Vec<u8>`, or fixed-size arrays like `[u8; 3]`.
    /// Strings are stored as their UTF-8 bytes; pass `str::chars()` to build
    /// over `char`s instead.
    /// Adding a pattern that is already present has no effect.
    ///
    /// # Errors
    ///
    /// Returns [`BuildError::EmptyPattern`] for a zero-length pattern unless the
    /// configuration accepts them, and [`BuildError::Allocation`] or
    /// [`BuildError::StateOverflow`] if the trie cannot grow.
    pub fn add_pattern(&mut self, pattern: impl IntoSymbols<C>) -> Result<(), BuildError> {
        let pattern = pattern.collect_symbols();
        let index = self.inserted;
        self.inserted += 1;

        if pattern.is_empty() && self.config.empty_patterns == EmptyPatterns::Reject {
            return Err(BuildError::EmptyPattern { index });
        }

        let (mut state, prefix_len) = self.longest_prefix(&pattern);
        for &symbol in &pattern[prefix_len..] {
            state = self.add_transition(state, symbol)?;
        }

        let output = match self.config.output {
            OutputPolicy::Length => Output::Length(pattern.len()),
            OutputPolicy::Literal => Output::Literal(Arc::from(pattern.as_slice())),
        };
        self.add_output(state, output, index)
    }

    /// Returns the number of distinct patterns added so far.
    pub fn pattern_count(&self) -> usize {
        self.patterns
    }

    /// Returns the number of trie states created so far, root included.
    pub fn state_count(&self) -> usize {
        self.states.len()
    }

    /// Computes failure links and returns the finished automaton.
    ///
    /// # Errors
    ///
    /// Returns [`BuildError::Allocation`] if the output sets or the traversal
    /// queue cannot grow. The partially built automaton is discarded.
    pub fn build(self) -> Result<Automaton<C>, BuildError> {
        let Builder {
            config,
            mut states,
            alphabet,
            patterns,
            ..
        } = self;
        build_failure_links(&mut states, &alphabet)?;
        tracing::debug!(
            states = states.len(),
            alphabet = alphabet.len(),
            patterns,
            "automaton built"
        );
        Ok(Automaton::new(states, alphabet, config, patterns))
    }

    /// Follows existing edges as far as `pattern` allows. Returns the state
    /// reached and the number of symbols consumed.
    fn longest_prefix(&self, pattern: &[C]) -> (StateId, usize) {
        let mut state = StateId::ROOT;
        for (i, &symbol) in pattern.iter().enumerate() {
            match self.states[state].transitions.get(symbol) {
                Some(next) => state = next,
                None => return (state, i),
            }
        }
        (state, pattern.len())
    }

    fn add_transition(&mut self, from: StateId, symbol: C) -> Result<StateId, BuildError> {
        let depth = self.states[from].depth + 1;
        let to = self.states.push(depth)?;
        self.states[from].transitions.insert(symbol, to);
        self.alphabet.insert(symbol);
        Ok(to)
    }

    fn add_output(
        &mut self,
        state: StateId,
        output: Output<C>,
        index: usize,
    ) -> Result<(), BuildError> {
        let outputs = &mut self.states[state].outputs;
        if outputs.contains(&output) {
            tracing::debug!(index, "ignoring duplicate pattern");
            return Ok(());
        }
        outputs.try_reserve(1)?;
        outputs.push(output);
        self.patterns += 1;
        Ok(())
    }
}

impl<C: Symbol> Default for Builder<C> {
    fn default() -> Self {
        Builder::new()
    }
}

/// Builds an automaton from an iterator of patterns with the default [`Config`].
///
/// Each pattern must implement [`IntoSymbols`], allowing this function to
/// accept `&str`, `String`, slices, vectors, arrays, or any other supported
/// pattern type. Patterns may be given in any order.
///
/// # Examples
///
/// Building from strings:
///
/// ```
/// use libaho::automaton::builder::build_automaton;
///
/// let ac = build_automaton(["he", "she", "his", "hers"]).unwrap();
/// assert!(ac.is_match("ushers"));
/// assert!(!ac.is_match("hi"));
/// ```
///
/// Building from byte sequences:
///
/// ```
/// use libaho::automaton::builder::build_automaton;
///
/// let ac = build_automaton([&b"\x00\x01"[..], &b"\x01\x02"[..]]).unwrap();
/// let spans: Vec<_> = ac.find_iter(&b"\x00\x01\x02"[..]).map(|m| m.span()).collect();
/// assert_eq!(spans, vec![(0, 2), (1, 2)]);
/// ```
///
/// # Errors
///
/// See [`Builder::add_pattern`] and [`Builder::build`].
pub fn build_automaton<C, P>(
    patterns: impl IntoIterator<Item = P>,
) -> Result<Automaton<C>, BuildError>
where
    C: Symbol,
    P: IntoSymbols<C>,
{
    build_automaton_with(Config::default(), patterns)
}

/// Builds an automaton from an iterator of patterns with the given [`Config`].
///
/// ```
/// use libaho::automaton::builder::build_automaton_with;
/// use libaho::automaton::{Config, OutputPolicy};
///
/// let config = Config::new().output(OutputPolicy::Literal);
/// let ac = build_automaton_with(config, ["she", "he"]).unwrap();
/// let found: Vec<String> = ac
///     .find_iter("she")
///     .map(|m| String::from_utf8_lossy(m.pattern().unwrap()).into_owned())
///     .collect();
/// assert_eq!(found, vec!["she", "he"]);
/// ```
///
/// # Errors
///
/// See [`Builder::add_pattern`] and [`Builder::build`].
pub fn build_automaton_with<C, P>(
    config: Config,
    patterns: impl IntoIterator<Item = P>,
) -> Result<Automaton<C>, BuildError>
where
    C: Symbol,
    P: IntoSymbols<C>,
{
    let mut builder = Builder::with_config(config);
    for pattern in patterns {
        builder.add_pattern(pattern)?;
    }
    builder.build()
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn single_pattern_is_a_path() {
        let ac = build_automaton(["ABCDEF"]).unwrap();
        assert_eq!(ac.state_count(), "ABCDEF".len() + 1);
    }

    #[test]
    fn trie_shares_prefixes() {
        let ac = build_automaton(["ABCDEF", "ABCXY", "AB", "ABC"]).unwrap();
        // ABCDEF: 6 states, XY: 2 more, AB and ABC end on existing states.
        assert_eq!(ac.state_count(), 1 + 6 + 2);
        assert_eq!(ac.pattern_count(), 4);
    }

    #[test]
    fn trie_shares_prefixes_unicode() {
        let one = build_automaton(["授人以鱼不如授人以渔"]).unwrap();
        let two = build_automaton(["授人以鱼", "授人以鱼不如授人以渔"]).unwrap();
        assert_eq!(one.state_count(), two.state_count());
    }

    #[test]
    fn output_sits_at_pattern_end() {
        let ac = build_automaton(["abc"]).unwrap();
        let end = "abc".bytes().fold(ac.root(), |s, b| ac.transition(s, b));
        assert_eq!(ac.depth(end), 3);
        assert_eq!(ac.output_lengths(end).collect::<Vec<_>>(), vec![3]);
    }

    #[test]
    fn empty_pattern_set_never_matches() {
        let ac = build_automaton::<u8, &str>([]).unwrap();
        assert_eq!(ac.state_count(), 1);
        assert_eq!(ac.pattern_count(), 0);
        assert!(ac.alphabet().is_empty());
        assert!(ac.find_all("anything at all").is_empty());
    }

    #[test]
    fn empty_pattern_is_rejected_by_default() {
        let err = build_automaton(["a", "", "b"]).unwrap_err();
        assert_eq!(err, BuildError::EmptyPattern { index: 1 });
        assert_eq!(err.to_string(), "pattern #1 is empty");
    }

    #[test]
    fn empty_pattern_can_match_everywhere() {
        let config = Config::new().empty_patterns(EmptyPatterns::MatchEverywhere);
        let ac = build_automaton_with(config, ["", "b"]).unwrap();
        assert_eq!(ac.output_lengths(ac.root()).collect::<Vec<_>>(), vec![0]);
        let spans: Vec<_> = ac.find_iter("ab").map(|m| m.span()).collect();
        assert_eq!(spans, vec![(1, 0), (1, 1), (2, 0)]);
    }

    #[test]
    fn duplicate_patterns_are_recorded_once() {
        let ac = build_automaton(["abc", "abc", "bc"]).unwrap();
        assert_eq!(ac.pattern_count(), 2);
        let spans: Vec<_> = ac.find_iter("abc").map(|m| m.span()).collect();
        assert_eq!(spans, vec![(0, 3), (1, 2)]);
    }

    #[test]
    fn builder_rejects_then_continues() {
        let mut builder = Builder::<u8>::new();
        builder.add_pattern("x").unwrap();
        assert!(builder.add_pattern("").is_err());
        builder.add_pattern("y").unwrap();
        assert_eq!(builder.pattern_count(), 2);
        assert_eq!(builder.state_count(), 3);
        let ac = builder.build().unwrap();
        assert_eq!(ac.find_all("xy").len(), 2);
    }

    #[test]
    fn alphabet_is_collected_from_patterns() {
        let ac = build_automaton(["ba", "ab"]).unwrap();
        assert_eq!(ac.alphabet().iter().collect::<Vec<_>>(), vec![b'b', b'a']);
        assert!(!ac.alphabet().contains(b'c'));
    }

    #[test]
    fn literal_policy_keeps_patterns() {
        let config = Config::new().output(OutputPolicy::Literal);
        let ac = build_automaton_with(config, [vec![1u8, 2], vec![2]]).unwrap();
        let matches = ac.find_all(&[0u8, 1, 2][..]);
        let patterns: Vec<&[u8]> = matches.iter().filter_map(|m| m.pattern()).collect();
        assert_eq!(patterns, vec![&[1u8, 2][..], &[2u8][..]]);
        assert_eq!(ac.config().output, OutputPolicy::Literal);
    }

    #[test]
    fn generic_automaton_with_u16() {
        let mut builder = Builder::<u16>::new();
        builder.add_pattern([1, 2, 3]).unwrap();
        builder.add_pattern([2, 3]).unwrap();
        let ac = builder.build().unwrap();
        let spans: Vec<_> = ac.find_iter([9u16, 1, 2, 3]).map(|m| m.span()).collect();
        assert_eq!(spans, vec![(1, 3), (2, 2)]);
    }
}
