//! Attribute predicate battery
//!
//! Fixed set of independent matchers for the predicate shapes that can
//! carry an attribute literal:
//! - `@attr='x'`
//! - `normalize-space(@attr)='x'`
//! - `f(@attr, 'x')` and `f(normalize-space(@attr), 'x')` for
//!   `contains`, `starts-with`, `ends-with` and `matches`
//!
//! Attribute and function names match case-insensitively. Literals may
//! use either quote character.

use regex::{Captures, Regex};

use crate::error::Result;

const FUNCTIONS: [&str; 4] = ["contains", "starts-with", "ends-with", "matches"];

/// Single- or double-quoted literal; group 1 or group 2 holds the body
const QUOTED: &str = r#"(?:'([^']*)'|"([^"]*)")"#;

#[derive(Debug)]
pub struct PredicatePatterns {
    attribute: String,
    patterns: Vec<Regex>,
}

impl PredicatePatterns {
    /// Compile the battery for one attribute name
    pub fn for_attribute(attribute: &str) -> Result<Self> {
        let attr = regex::escape(attribute);
        let normalized = format!(r"normalize-space\(\s*@{}\s*\)", attr);

        let mut sources = vec![
            format!(r"(?i)@{}\s*=\s*{}", attr, QUOTED),
            format!(r"(?i){}\s*=\s*{}", normalized, QUOTED),
        ];
        for function in FUNCTIONS {
            let function = regex::escape(function);
            sources.push(format!(r"(?i){}\(\s*@{}\s*,\s*{}\s*\)", function, attr, QUOTED));
            sources.push(format!(r"(?i){}\(\s*{}\s*,\s*{}\s*\)", function, normalized, QUOTED));
        }

        let patterns = sources
            .iter()
            .map(|source| Regex::new(source))
            .collect::<std::result::Result<Vec<_>, _>>()?;

        Ok(PredicatePatterns {
            attribute: attribute.to_string(),
            patterns,
        })
    }

    pub fn attribute(&self) -> &str {
        &self.attribute
    }

    pub fn len(&self) -> usize {
        self.patterns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }

    /// Run every matcher over `predicates`, replacing each captured literal
    /// with `lookup(literal)` when it yields a value
    ///
    /// Only the literal's bytes change; function names, spacing and quotes
    /// stay as written.
    pub fn substitute<'m, F>(&self, predicates: &str, lookup: F) -> String
    where
        F: Fn(&str) -> Option<&'m str>,
    {
        let mut out = predicates.to_string();
        for pattern in &self.patterns {
            out = pattern
                .replace_all(&out, |caps: &Captures<'_>| rewrite_literal(caps, &lookup))
                .into_owned();
        }
        out
    }
}

fn rewrite_literal<'m, F>(caps: &Captures<'_>, lookup: &F) -> String
where
    F: Fn(&str) -> Option<&'m str>,
{
    let whole = &caps[0];
    let (Some(full), Some(literal)) = (caps.get(0), caps.get(1).or_else(|| caps.get(2))) else {
        return whole.to_string();
    };
    match lookup(literal.as_str()) {
        Some(original) => {
            tracing::trace!(token = literal.as_str(), original, "restored literal");
            let start = literal.start() - full.start();
            let end = literal.end() - full.start();
            format!("{}{}{}", &whole[..start], original, &whole[end..])
        }
        None => whole.to_string(),
    }
}
