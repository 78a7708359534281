//! Construction options.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// How accepting states describe the patterns that end there.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum OutputPolicy {
    /// Store only the pattern length; the match is sliced out of the text.
    #[default]
    Length,
    /// Store a shared copy of each pattern alongside its length.
    Literal,
}

/// What to do with a zero-length pattern.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum EmptyPatterns {
    /// Fail construction with [`BuildError::EmptyPattern`](super::error::BuildError::EmptyPattern).
    #[default]
    Reject,
    /// Accept it at the root. After every scanned symbol at index `i`, a
    /// zero-length match at offset `i + 1` is reported.
    MatchEverywhere,
}

/// Options for building an [`Automaton`](super::machine::Automaton).
///
/// ```
/// use libaho::automaton::{Config, OutputPolicy};
///
/// let config = Config::new().output(OutputPolicy::Literal);
/// assert_eq!(config.output, OutputPolicy::Literal);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default, rename_all = "kebab-case"))]
pub struct Config {
    /// Output representation.
    pub output: OutputPolicy,
    /// Handling of zero-length patterns.
    pub empty_patterns: EmptyPatterns,
}

impl Config {
    /// Returns the default configuration.
    pub fn new() -> Self {
        Config::default()
    }

    /// Sets the output representation.
    pub fn output(mut self, output: OutputPolicy) -> Self {
        self.output = output;
        self
    }

    /// Sets the handling of zero-length patterns.
    pub fn empty_patterns(mut self, empty_patterns: EmptyPatterns) -> Self {
        self.empty_patterns = empty_patterns;
        self
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn defaults() {
        let config = Config::new();
        assert_eq!(config.output, OutputPolicy::Length);
        assert_eq!(config.empty_patterns, EmptyPatterns::Reject);
    }

    #[test]
    fn setters_chain() {
        let config = Config::new()
            .output(OutputPolicy::Literal)
            .empty_patterns(EmptyPatterns::MatchEverywhere);
        assert_eq!(config.output, OutputPolicy::Literal);
        assert_eq!(config.empty_patterns, EmptyPatterns::MatchEverywhere);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn deserializes_kebab_case_with_defaults() {
        let config: Config = serde_json::from_str(r#"{"output": "literal"}"#).unwrap();
        assert_eq!(config, Config::new().output(OutputPolicy::Literal));

        let config: Config = serde_json::from_str(r#"{"empty-patterns": "match-everywhere"}"#).unwrap();
        assert_eq!(config.empty_patterns, EmptyPatterns::MatchEverywhere);
    }
}
