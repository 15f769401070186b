//! Label selector parsing.
//!
//! # Grammar
//! ```text
//! selector    := "" | term ("," term)*
//! term        := key ("=" | "==" | "!=") value
//!              | key ("in" | "notin") "(" value ("," value)* ")"
//!              | key
//!              | "!" key
//! ```
//!
//! # Design Decisions
//! - Whitespace around terms and operators is ignored
//! - Commas inside parentheses belong to the value set, not the term list
//! - Values may be empty (`key=` matches a label with an empty value)

use thiserror::Error;

use crate::selector::requirement::Requirement;

/// Error returned for a malformed selector string.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid label selector {input:?}: {reason}")]
pub struct SelectorError {
    /// The full selector string as given.
    pub input: String,
    /// What was wrong with it.
    pub reason: String,
}

/// Parse a selector string into its requirements.
///
/// An empty (or all-whitespace) string yields no requirements.
pub fn parse_requirements(input: &str) -> Result<Vec<Requirement>, SelectorError> {
    let fail = |reason: String| SelectorError {
        input: input.to_string(),
        reason,
    };

    if input.trim().is_empty() {
        return Ok(Vec::new());
    }

    split_terms(input)
        .map_err(fail)?
        .into_iter()
        .map(|term| parse_term(term).map_err(fail))
        .collect()
}

/// Split on top-level commas, keeping `in (...)` value lists intact.
fn split_terms(input: &str) -> Result<Vec<&str>, String> {
    let mut terms = Vec::new();
    let mut depth = 0usize;
    let mut start = 0;

    for (i, c) in input.char_indices() {
        match c {
            '(' => {
                if depth > 0 {
                    return Err("nested parentheses".to_string());
                }
                depth += 1;
            }
            ')' => {
                if depth == 0 {
                    return Err("unbalanced ')'".to_string());
                }
                depth -= 1;
            }
            ',' if depth == 0 => {
                terms.push(&input[start..i]);
                start = i + 1;
            }
            _ => {}
        }
    }

    if depth != 0 {
        return Err("unclosed '('".to_string());
    }
    terms.push(&input[start..]);
    Ok(terms)
}

fn parse_term(raw: &str) -> Result<Requirement, String> {
    let term = raw.trim();
    if term.is_empty() {
        return Err("empty term".to_string());
    }

    if let Some(key) = term.strip_prefix('!') {
        if !key.contains('=') {
            return Ok(Requirement::DoesNotExist(checked_key(key)?));
        }
    }

    if term.contains('(') {
        return parse_set_term(term);
    }

    if let Some((key, value)) = term.split_once("!=") {
        return Ok(Requirement::NotEquals {
            key: checked_key(key)?,
            value: checked_value(value)?,
        });
    }

    if let Some((key, value)) = term.split_once("==").or_else(|| term.split_once('=')) {
        return Ok(Requirement::Equals {
            key: checked_key(key)?,
            value: checked_value(value)?,
        });
    }

    Ok(Requirement::Exists(checked_key(term)?))
}

fn parse_set_term(term: &str) -> Result<Requirement, String> {
    let (key, rest) = term
        .split_once(char::is_whitespace)
        .ok_or_else(|| format!("expected 'in' or 'notin' in {:?}", term))?;
    let rest = rest.trim_start();

    let (negated, list) = if let Some(list) = rest.strip_prefix("notin") {
        (true, list)
    } else if let Some(list) = rest.strip_prefix("in") {
        (false, list)
    } else {
        return Err(format!("expected 'in' or 'notin' in {:?}", term));
    };

    let inner = list
        .trim()
        .strip_prefix('(')
        .and_then(|l| l.strip_suffix(')'))
        .ok_or_else(|| format!("expected parenthesized values in {:?}", term))?;

    let values = inner
        .split(',')
        .map(checked_value)
        .collect::<Result<Vec<_>, _>>()?;
    if values.iter().all(|v| v.is_empty()) {
        return Err(format!("empty value set in {:?}", term));
    }

    let key = checked_key(key)?;
    Ok(if negated {
        Requirement::NotIn { key, values }
    } else {
        Requirement::In { key, values }
    })
}

fn checked_key(raw: &str) -> Result<String, String> {
    let key = raw.trim();
    if key.is_empty() {
        return Err("empty label key".to_string());
    }
    if !key
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.' | '/'))
    {
        return Err(format!("invalid label key {:?}", key));
    }
    Ok(key.to_string())
}

fn checked_value(raw: &str) -> Result<String, String> {
    let value = raw.trim();
    if !value
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.'))
    {
        return Err(format!("invalid label value {:?}", value));
    }
    Ok(value.to_string())
}
