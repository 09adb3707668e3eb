use crate::constants::defaults;
use std::time::Duration;

/// Configuration for the `Access-Control-Max-Age` response header.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum MaxAge {
    /// Number of seconds a preflight response may be cached.
    Seconds(u64),
    /// Opaque value emitted verbatim.
    Raw(String),
}

impl MaxAge {
    pub fn seconds(value: u64) -> Self {
        Self::Seconds(value)
    }

    pub fn raw<S: Into<String>>(value: S) -> Self {
        Self::Raw(value.into())
    }

    /// Return the header value representation, if any.
    pub fn header_value(&self) -> Option<String> {
        match self {
            MaxAge::Seconds(value) => Some(value.to_string()),
            MaxAge::Raw(value) if value.is_empty() => None,
            MaxAge::Raw(value) => Some(value.clone()),
        }
    }
}

impl Default for MaxAge {
    fn default() -> Self {
        Self::Seconds(defaults::MAX_AGE_SECONDS)
    }
}

impl From<u64> for MaxAge {
    fn from(value: u64) -> Self {
        Self::Seconds(value)
    }
}

impl From<Duration> for MaxAge {
    fn from(value: Duration) -> Self {
        Self::Seconds(value.as_secs())
    }
}

impl From<&str> for MaxAge {
    fn from(value: &str) -> Self {
        Self::Raw(value.to_owned())
    }
}

impl From<String> for MaxAge {
    fn from(value: String) -> Self {
        Self::Raw(value)
    }
}

#[cfg(test)]
#[path = "max_age_test.rs"]
mod max_age_test;
