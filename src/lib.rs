//! # libaho
//!
//! Multi-pattern exact string matching with the
//! [Aho-Corasick](https://en.wikipedia.org/wiki/Aho%E2%80%93Corasick_algorithm) automaton.
//!
//! Given a dictionary of patterns, the automaton scans a text once, symbol by
//! symbol, and reports every occurrence of every pattern, overlapping ones
//! included. This implementation follows the construction described in
//! Aho & Corasick, *Efficient String Matching: An Aid to Bibliographic Search* (1975):
//! a trie of the patterns (the goto function), failure links computed
//! breadth-first, and output sets merged along the failure links.
//!
//! ## Features
//!
//! - **Generic over symbol type**: works with `char`, `u8`, `u16`, or any type implementing
//!   [`Symbol`](automaton::Symbol)
//! - **Linear scans**: one transition per text symbol, plus the failure links taken
//! - **Compact**: states live in one arena and most carry their edges inline
//! - **Thread-safe**: a built [`Automaton`](automaton::Automaton) is immutable and can be
//!   shared across threads for concurrent scans
//!
//! ## Quick Start
//!
//! ```
//! use libaho::automaton::builder::build_automaton;
//!
//! let ac = build_automaton(["he", "she", "his", "hers"]).unwrap();
//! let spans: Vec<(usize, usize)> = ac.find_iter("ushers").map(|m| m.span()).collect();
//! assert_eq!(spans, vec![(1, 3), (2, 2), (2, 4)]);
//! ```
//!
//! Offsets and lengths count symbols. Strings are scanned as UTF-8 bytes, so
//! [`Match::range`](automaton::Match::range) slices the scanned `&str`
//! directly; feed `str::chars()` instead to count `char`s. Only the length is
//! stored by default; the matched text is sliced out of the haystack:
//!
//! ```
//! use libaho::automaton::builder::build_automaton;
//!
//! let text = b"aabcbaa";
//! let ac = build_automaton([&b"abc"[..], &b"aa"[..]]).unwrap();
//! let found: Vec<&[u8]> = ac.find_iter(&text[..]).map(|m| m.extract(text)).collect();
//! assert_eq!(found, vec![&b"aa"[..], &b"abc"[..], &b"aa"[..]]);
//! ```
//!
//! ## Configuration
//!
//! A [`Config`](automaton::Config) chooses whether each match carries a copy of its
//! pattern and whether zero-length patterns are accepted:
//!
//! ```
//! use libaho::automaton::builder::build_automaton_with;
//! use libaho::automaton::{Config, OutputPolicy};
//!
//! let config = Config::new().output(OutputPolicy::Literal);
//! let ac = build_automaton_with(config, [[1u8, 2], [2, 3]]).unwrap();
//! let first = ac.find_iter([1u8, 2, 3]).next().unwrap();
//! assert_eq!(first.pattern(), Some(&[1u8, 2][..]));
//! ```

#![warn(missing_docs)]

/// Automaton construction and scanning.
pub mod automaton;

#[cfg(test)]
mod test {
    use super::automaton::builder::build_automaton;
    use super::automaton::Automaton;

    fn spans(ac: &Automaton<u8>, text: &str) -> Vec<(usize, usize)> {
        let mut spans: Vec<_> = ac.find_iter(text).map(|m| m.span()).collect();
        spans.sort_unstable();
        spans
    }

    #[test]
    fn overlapping_dictionary() {
        let ac = build_automaton(["bb", "abc", "bcb", "aabc", "bca", "aa"]).unwrap();
        assert_eq!(
            spans(&ac, "aabcbaa"),
            vec![(0, 2), (0, 4), (1, 3), (2, 3), (5, 2)]
        );
    }

    #[test]
    fn ushers() {
        let ac = build_automaton(["he", "she", "his", "hers"]).unwrap();
        assert_eq!(spans(&ac, "ushers"), vec![(1, 3), (2, 2), (2, 4)]);
    }

    #[test]
    fn every_pattern_matches_itself() {
        let patterns = ["bb", "abc", "bcb", "aabc", "bca", "aa"];
        let ac = build_automaton(patterns).unwrap();
        for pattern in patterns {
            let len = pattern.len();
            assert!(spans(&ac, pattern).contains(&(0, len)), "{pattern}");
        }
    }

    #[test]
    fn suffix_patterns_end_together() {
        let ac = build_automaton(["cde", "abcde", "e"]).unwrap();
        let ends: Vec<usize> = ac.find_iter("xxabcdexx").map(|m| m.end()).collect();
        assert_eq!(ends, vec![7, 7, 7]);
    }

    #[test]
    fn match_range_slices_non_ascii_text() {
        let text = "héllo wörld";
        let ac = build_automaton(["wörld"]).unwrap();
        let m = ac.find_iter(text).next().unwrap();
        assert_eq!(Some(m.offset()), text.find("wörld"));
        assert_eq!(text.get(m.range()), Some("wörld"));
    }
}
