//! Label selector subsystem.
//!
//! # Data Flow
//! ```text
//! "role=client,loadtest=lt-1"
//!     → parser.rs (split terms, validate keys/values)
//!     → Vec<Requirement> (requirement.rs)
//!     → Selector (AND of requirements)
//!     → Selector::matches(labels)
//! ```
//!
//! # Design Decisions
//! - Parsed once, before any polling, so a typo fails fast
//! - Empty selector = always matches (wildcard)
//! - No regex; matching is a linear scan over the terms

pub mod parser;
pub mod requirement;

use std::fmt;
use std::str::FromStr;

pub use parser::SelectorError;
pub use requirement::{LabelMatcher, Labels, Requirement};

/// A parsed label selector: every requirement must hold (AND).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selector {
    requirements: Vec<Requirement>,
}

impl Selector {
    /// Parse a selector string.
    pub fn parse(input: &str) -> Result<Self, SelectorError> {
        Ok(Self {
            requirements: parser::parse_requirements(input)?,
        })
    }

    /// Parse an ordered list of selector strings, failing on the first bad one.
    pub fn parse_all<S: AsRef<str>>(inputs: &[S]) -> Result<Vec<Self>, SelectorError> {
        inputs.iter().map(|s| Self::parse(s.as_ref())).collect()
    }

    /// True if this selector has no terms and therefore matches everything.
    pub fn is_empty(&self) -> bool {
        self.requirements.is_empty()
    }
}

impl LabelMatcher for Selector {
    fn matches(&self, labels: &Labels) -> bool {
        self.requirements.iter().all(|r| r.matches(labels))
    }
}

impl FromStr for Selector {
    type Err = SelectorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for Selector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, req) in self.requirements.iter().enumerate() {
            if i > 0 {
                write!(f, ",")?;
            }
            write!(f, "{}", req)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn labels(pairs: &[(&str, &str)]) -> Labels {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_and_semantics() {
        let selector: Selector = "role=driver,loadtest=loadtest-1".parse().unwrap();

        assert!(selector.matches(&labels(&[("role", "driver"), ("loadtest", "loadtest-1")])));
        assert!(!selector.matches(&labels(&[("role", "driver")])));
        assert!(!selector.matches(&Labels::new()));
    }

    #[test]
    fn test_empty_matches_everything() {
        let selector = Selector::parse("").unwrap();
        assert!(selector.is_empty());
        assert!(selector.matches(&Labels::new()));
        assert!(selector.matches(&labels(&[("role", "server")])));
    }

    #[test]
    fn test_unlabelled_pod_only_matches_negative_terms() {
        let unlabelled = Labels::new();
        assert!(Selector::parse("role!=driver,!gpu").unwrap().matches(&unlabelled));
        assert!(!Selector::parse("hello=anyone-out-there").unwrap().matches(&unlabelled));
        assert!(!Selector::parse("example").unwrap().matches(&unlabelled));
    }

    #[test]
    fn test_display_is_canonical() {
        let selector = Selector::parse(" role == client ,  tier in (a, b) ").unwrap();
        assert_eq!(selector.to_string(), "role=client,tier in (a,b)");
        assert_eq!(Selector::parse(&selector.to_string()).unwrap(), selector);
    }

    #[test]
    fn test_parse_all_reports_first_error() {
        let err = Selector::parse_all(&["role=driver", "role in (", "x"]).unwrap_err();
        assert_eq!(err.input, "role in (");
    }
}
