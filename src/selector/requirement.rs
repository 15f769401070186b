//! Single label requirements.
//!
//! # Responsibilities
//! - Represent one term of a label selector
//! - Evaluate the term against a label set
//!
//! # Design Decisions
//! - Keys and values compare exactly (case-sensitive)
//! - An absent label satisfies the negative terms (`!=`, `notin`, `!key`)

use std::collections::BTreeMap;
use std::fmt;

/// Label set as carried by Kubernetes object metadata.
pub type Labels = BTreeMap<String, String>;

/// Trait for matching a label set against a condition.
pub trait LabelMatcher: Send + Sync + fmt::Debug {
    /// Returns true if the labels satisfy this condition.
    fn matches(&self, labels: &Labels) -> bool;
}

/// One term of a label selector.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Requirement {
    /// `key=value` or `key==value`
    Equals { key: String, value: String },
    /// `key!=value`
    NotEquals { key: String, value: String },
    /// `key in (a,b)`
    In { key: String, values: Vec<String> },
    /// `key notin (a,b)`
    NotIn { key: String, values: Vec<String> },
    /// `key`
    Exists(String),
    /// `!key`
    DoesNotExist(String),
}

impl Requirement {
    /// The label key this term constrains.
    pub fn key(&self) -> &str {
        match self {
            Requirement::Equals { key, .. }
            | Requirement::NotEquals { key, .. }
            | Requirement::In { key, .. }
            | Requirement::NotIn { key, .. }
            | Requirement::Exists(key)
            | Requirement::DoesNotExist(key) => key,
        }
    }
}

impl LabelMatcher for Requirement {
    fn matches(&self, labels: &Labels) -> bool {
        match self {
            Requirement::Equals { key, value } => labels.get(key) == Some(value),
            Requirement::NotEquals { key, value } => labels.get(key) != Some(value),
            Requirement::In { key, values } => labels
                .get(key)
                .map(|v| values.contains(v))
                .unwrap_or(false),
            Requirement::NotIn { key, values } => labels
                .get(key)
                .map(|v| !values.contains(v))
                .unwrap_or(true),
            Requirement::Exists(key) => labels.contains_key(key),
            Requirement::DoesNotExist(key) => !labels.contains_key(key),
        }
    }
}

impl fmt::Display for Requirement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Requirement::Equals { key, value } => write!(f, "{}={}", key, value),
            Requirement::NotEquals { key, value } => write!(f, "{}!={}", key, value),
            Requirement::In { key, values } => write!(f, "{} in ({})", key, values.join(",")),
            Requirement::NotIn { key, values } => {
                write!(f, "{} notin ({})", key, values.join(","))
            }
            Requirement::Exists(key) => write!(f, "{}", key),
            Requirement::DoesNotExist(key) => write!(f, "!{}", key),
        }
    }
}
