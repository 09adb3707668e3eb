use regex_automata::meta::{BuildError, Regex};
use std::fmt;
use std::sync::Arc;
use thiserror::Error;

pub type OriginPredicateFn = dyn Fn(&str) -> bool + Send + Sync;

const WILDCARD: &str = "*";
const MAX_PATTERN_LENGTH: usize = 50_000;

/// Policy used to compute the `Access-Control-Allow-Origin` value.
#[derive(Clone, Default)]
pub enum Origin {
    /// Emit `*` for every request.
    #[default]
    Any,
    /// Emit a fixed value regardless of the request origin.
    Exact(String),
    /// Reflect the request origin back.
    Mirror,
    /// Turn CORS off entirely.
    Disabled,
    /// Reflect the request origin when the expression finds a match.
    Pattern(Regex),
    /// Reflect the request origin when any matcher accepts it.
    List(Vec<OriginMatcher>),
    /// Reflect the request origin when the predicate returns `true`.
    Predicate(Arc<OriginPredicateFn>),
}

/// Outcome of resolving an [`Origin`] against a concrete request origin.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OriginDecision {
    Any,
    Exact(String),
    Mirror,
    Disallow,
    Skip,
}

impl OriginDecision {
    pub fn any() -> Self {
        Self::Any
    }

    pub fn exact<S: Into<String>>(value: S) -> Self {
        Self::Exact(value.into())
    }

    pub fn mirror() -> Self {
        Self::Mirror
    }

    pub fn disallow() -> Self {
        Self::Disallow
    }

    pub fn skip() -> Self {
        Self::Skip
    }
}

impl From<bool> for OriginDecision {
    fn from(value: bool) -> Self {
        if value {
            OriginDecision::Mirror
        } else {
            OriginDecision::Disallow
        }
    }
}

#[derive(Debug, Error)]
pub enum PatternError {
    #[error("failed to compile origin pattern")]
    Build(#[source] Box<BuildError>),
    #[error("origin pattern length {length} exceeds maximum allowed {max}")]
    TooLong { length: usize, max: usize },
}

/// Single entry of an [`Origin::List`].
#[derive(Clone)]
pub enum OriginMatcher {
    Exact(String),
    Pattern(Regex),
    Bool(bool),
    List(Vec<OriginMatcher>),
}

impl OriginMatcher {
    pub fn exact<S: Into<String>>(value: S) -> Self {
        Self::Exact(value.into())
    }

    pub fn pattern(regex: Regex) -> Self {
        Self::Pattern(regex)
    }

    pub fn pattern_str(pattern: &str) -> Result<Self, PatternError> {
        compile_pattern(pattern).map(Self::Pattern)
    }

    pub fn list<I, T>(values: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<OriginMatcher>,
    {
        Self::List(values.into_iter().map(Into::into).collect())
    }

    /// Exact entries compare byte-for-byte; patterns search anywhere in the
    /// candidate unless the expression anchors itself.
    pub fn matches(&self, candidate: &str) -> bool {
        match self {
            OriginMatcher::Exact(value) => value == candidate,
            OriginMatcher::Pattern(regex) => regex.is_match(candidate),
            OriginMatcher::Bool(value) => *value,
            OriginMatcher::List(matchers) => {
                matchers.iter().any(|matcher| matcher.matches(candidate))
            }
        }
    }
}

impl fmt::Debug for OriginMatcher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OriginMatcher::Exact(value) => f.debug_tuple("Exact").field(value).finish(),
            OriginMatcher::Pattern(_) => f.write_str("Pattern(..)"),
            OriginMatcher::Bool(value) => f.debug_tuple("Bool").field(value).finish(),
            OriginMatcher::List(matchers) => f.debug_tuple("List").field(matchers).finish(),
        }
    }
}

impl From<String> for OriginMatcher {
    fn from(value: String) -> Self {
        OriginMatcher::Exact(value)
    }
}

impl From<&str> for OriginMatcher {
    fn from(value: &str) -> Self {
        OriginMatcher::Exact(value.to_owned())
    }
}

impl From<bool> for OriginMatcher {
    fn from(value: bool) -> Self {
        OriginMatcher::Bool(value)
    }
}

impl From<Regex> for OriginMatcher {
    fn from(value: Regex) -> Self {
        OriginMatcher::Pattern(value)
    }
}

fn compile_pattern(pattern: &str) -> Result<Regex, PatternError> {
    if pattern.len() > MAX_PATTERN_LENGTH {
        return Err(PatternError::TooLong {
            length: pattern.len(),
            max: MAX_PATTERN_LENGTH,
        });
    }

    Regex::new(pattern).map_err(|err| PatternError::Build(Box::new(err)))
}

impl Origin {
    pub fn any() -> Self {
        Self::Any
    }

    pub fn exact<S: Into<String>>(value: S) -> Self {
        Self::Exact(value.into())
    }

    pub fn mirror() -> Self {
        Self::Mirror
    }

    pub fn disabled() -> Self {
        Self::Disabled
    }

    pub fn pattern(regex: Regex) -> Self {
        Self::Pattern(regex)
    }

    pub fn pattern_str(pattern: &str) -> Result<Self, PatternError> {
        compile_pattern(pattern).map(Self::Pattern)
    }

    pub fn list<I, T>(values: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<OriginMatcher>,
    {
        Self::List(values.into_iter().map(Into::into).collect())
    }

    pub fn predicate<F>(predicate: F) -> Self
    where
        F: Fn(&str) -> bool + Send + Sync + 'static,
    {
        Self::Predicate(Arc::new(predicate))
    }

    pub fn resolve(&self, request_origin: &str) -> OriginDecision {
        match self {
            Origin::Any => OriginDecision::Any,
            Origin::Exact(value) if value == WILDCARD => OriginDecision::Any,
            Origin::Exact(value) => OriginDecision::Exact(value.clone()),
            Origin::Mirror => OriginDecision::Mirror,
            Origin::Disabled => OriginDecision::Skip,
            Origin::Pattern(regex) => regex.is_match(request_origin).into(),
            Origin::List(matchers) => matchers
                .iter()
                .any(|matcher| matcher.matches(request_origin))
                .into(),
            Origin::Predicate(predicate) => predicate(request_origin).into(),
        }
    }

    /// Whether the emitted headers depend on the request origin, which
    /// requires `Vary: Origin` for caches.
    pub fn varies_on_origin(&self) -> bool {
        match self {
            Origin::Any | Origin::Disabled => false,
            Origin::Exact(value) => value != WILDCARD,
            Origin::Mirror | Origin::Pattern(_) | Origin::List(_) | Origin::Predicate(_) => true,
        }
    }
}

impl fmt::Debug for Origin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Origin::Any => f.write_str("Any"),
            Origin::Exact(value) => f.debug_tuple("Exact").field(value).finish(),
            Origin::Mirror => f.write_str("Mirror"),
            Origin::Disabled => f.write_str("Disabled"),
            Origin::Pattern(_) => f.write_str("Pattern(..)"),
            Origin::List(matchers) => f.debug_tuple("List").field(matchers).finish(),
            Origin::Predicate(_) => f.write_str("Predicate(..)"),
        }
    }
}

impl From<&str> for Origin {
    fn from(value: &str) -> Self {
        if value == WILDCARD {
            Origin::Any
        } else {
            Origin::Exact(value.to_owned())
        }
    }
}

impl From<String> for Origin {
    fn from(value: String) -> Self {
        if value == WILDCARD {
            Origin::Any
        } else {
            Origin::Exact(value)
        }
    }
}

impl From<bool> for Origin {
    fn from(value: bool) -> Self {
        if value {
            Origin::Mirror
        } else {
            Origin::Disabled
        }
    }
}

impl From<Regex> for Origin {
    fn from(value: Regex) -> Self {
        Origin::Pattern(value)
    }
}

impl From<Vec<OriginMatcher>> for Origin {
    fn from(value: Vec<OriginMatcher>) -> Self {
        Origin::List(value)
    }
}

#[cfg(test)]
#[path = "origin_test.rs"]
mod origin_test;
