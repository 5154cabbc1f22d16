//! Minimal CSS selector support for container lookup.
//!
//! Supported: `tag`, `*`, `#id`, `.class` (any number), combined into compound
//! selectors and separated by commas. Combinators are rejected.

use thiserror::Error;

/// Errors raised while parsing a selector string.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SelectorError {
    #[error("empty selector")]
    Empty,

    #[error("unsupported combinator in selector '{0}'")]
    Combinator(String),

    #[error("invalid selector '{selector}': {reason}")]
    Invalid { selector: String, reason: String },
}

/// One compound selector, e.g. `div#total.highlight`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
struct Compound {
    tag: Option<String>,
    id: Option<String>,
    classes: Vec<String>,
}

impl Compound {
    fn matches(&self, tag: &str, id: Option<&str>, classes: &[String]) -> bool {
        if let Some(expected) = &self.tag
            && !expected.eq_ignore_ascii_case(tag)
        {
            return false;
        }
        if let Some(expected) = &self.id
            && id != Some(expected.as_str())
        {
            return false;
        }
        self.classes.iter().all(|class| classes.contains(class))
    }
}

/// A parsed comma-separated selector list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selector {
    alternatives: Vec<Compound>,
}

impl Selector {
    /// Parses a selector list such as `.brace, #total, section`.
    pub fn parse(input: &str) -> Result<Self, SelectorError> {
        if input.trim().is_empty() {
            return Err(SelectorError::Empty);
        }

        let alternatives = input
            .split(',')
            .map(|part| parse_compound(part.trim(), input))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self { alternatives })
    }

    /// Selector matching elements that carry `class`.
    pub fn class(class: &str) -> Self {
        Self {
            alternatives: vec![Compound {
                classes: vec![class.to_string()],
                ..Compound::default()
            }],
        }
    }

    /// Whether an element with the given tag, id, and classes matches.
    pub fn matches(&self, tag: &str, id: Option<&str>, classes: &[String]) -> bool {
        self.alternatives
            .iter()
            .any(|compound| compound.matches(tag, id, classes))
    }
}

fn is_ident_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '-' || c == '_'
}

fn invalid(selector: &str, reason: &str) -> SelectorError {
    SelectorError::Invalid {
        selector: selector.to_string(),
        reason: reason.to_string(),
    }
}

fn parse_compound(part: &str, selector: &str) -> Result<Compound, SelectorError> {
    if part.is_empty() {
        return Err(invalid(selector, "empty alternative"));
    }
    if part.contains(|c: char| c.is_whitespace() || matches!(c, '>' | '+' | '~')) {
        return Err(SelectorError::Combinator(selector.to_string()));
    }

    let mut compound = Compound::default();
    let mut rest = part;

    if let Some(after) = rest.strip_prefix('*') {
        rest = after;
    } else {
        let end = rest.find(|c: char| !is_ident_char(c)).unwrap_or(rest.len());
        if end > 0 {
            compound.tag = Some(rest[..end].to_string());
            rest = &rest[end..];
        }
    }

    while let Some(prefix) = rest.chars().next() {
        let body = &rest[prefix.len_utf8()..];
        let end = body.find(|c: char| !is_ident_char(c)).unwrap_or(body.len());
        if end == 0 {
            return Err(invalid(selector, "expected a name"));
        }
        let name = body[..end].to_string();
        match prefix {
            '#' if compound.id.is_none() => compound.id = Some(name),
            '#' => return Err(invalid(selector, "more than one id")),
            '.' => compound.classes.push(name),
            _ => return Err(invalid(selector, "unexpected character")),
        }
        rest = &body[end..];
    }

    Ok(compound)
}
