use crate::constants::header;
use http::{HeaderMap, HeaderName, HeaderValue};
use indexmap::IndexMap;

/// Header name/value pairs in emission order.
pub type Headers = IndexMap<String, String>;

/// Write access to a response's headers.
pub trait HeaderWriter {
    /// Case-insensitive lookup of the current value.
    fn header(&self, name: &str) -> Option<&str>;

    /// Replace any existing value for `name`.
    fn set_header(&mut self, name: &str, value: &str);

    /// Extend the current `Vary` as `existing,value`, or set it to `value`
    /// when nothing non-blank is present. Entries are never deduplicated.
    fn append_vary(&mut self, value: &str) {
        let merged = match self.header(header::VARY) {
            Some(existing) if !existing.trim().is_empty() => format!("{existing},{value}"),
            _ => value.to_string(),
        };
        self.set_header(header::VARY, &merged);
    }
}

impl HeaderWriter for Headers {
    fn header(&self, name: &str) -> Option<&str> {
        self.iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }

    fn set_header(&mut self, name: &str, value: &str) {
        match self.iter_mut().find(|(key, _)| key.eq_ignore_ascii_case(name)) {
            Some((_, existing)) => *existing = value.to_owned(),
            None => {
                self.insert(name.to_owned(), value.to_owned());
            }
        }
    }
}

/// Only the first value of a multi-valued header is visible through
/// [`HeaderWriter::header`]; [`HeaderWriter::set_header`] replaces all of them.
/// [`HeaderWriter::append_vary`] folds every existing `Vary` entry, byte for
/// byte, into a single value.
impl HeaderWriter for HeaderMap {
    fn header(&self, name: &str) -> Option<&str> {
        self.get(name).and_then(|value| value.to_str().ok())
    }

    fn set_header(&mut self, name: &str, value: &str) {
        let header_name = match HeaderName::from_bytes(name.as_bytes()) {
            Ok(header_name) => header_name,
            Err(_) => {
                tracing::warn!(name, "skipping header with invalid name");
                return;
            }
        };

        match HeaderValue::from_str(value) {
            Ok(header_value) => {
                self.insert(header_name, header_value);
            }
            Err(_) => {
                tracing::warn!(name, value, "skipping header with invalid value");
            }
        }
    }

    fn append_vary(&mut self, value: &str) {
        let mut merged = Vec::new();
        for existing in self.get_all(http::header::VARY) {
            let bytes = existing.as_bytes().trim_ascii();
            if bytes.is_empty() {
                continue;
            }
            if !merged.is_empty() {
                merged.push(b',');
            }
            merged.extend_from_slice(bytes);
        }
        if !merged.is_empty() {
            merged.push(b',');
        }
        merged.extend_from_slice(value.as_bytes());

        match HeaderValue::from_bytes(&merged) {
            Ok(header_value) => {
                self.insert(http::header::VARY, header_value);
            }
            Err(_) => {
                tracing::warn!(value, "skipping vary with invalid value");
            }
        }
    }
}

#[derive(Debug, Default, Clone)]
pub(crate) struct HeaderCollection {
    headers: Headers,
}

impl HeaderCollection {
    pub(crate) fn new() -> Self {
        Self::with_estimate(0)
    }

    pub(crate) fn with_estimate(estimate: usize) -> Self {
        Self {
            headers: IndexMap::with_capacity(estimate),
        }
    }

    pub(crate) fn push(&mut self, name: &str, value: String) {
        if name.eq_ignore_ascii_case(header::VARY) {
            self.add_vary(value);
        } else {
            self.headers.insert(name.to_owned(), value);
        }
    }

    pub(crate) fn add_vary<S: Into<String>>(&mut self, value: S) {
        let incoming = value.into().trim().to_string();
        if incoming.is_empty() {
            return;
        }

        let merged = match self.headers.get(header::VARY) {
            Some(existing) => format!("{existing},{incoming}"),
            None => incoming,
        };

        self.headers.insert(header::VARY.to_string(), merged);
    }

    pub(crate) fn extend(&mut self, other: HeaderCollection) {
        for (name, value) in other.headers {
            self.push(&name, value);
        }
    }

    pub(crate) fn into_headers(self) -> Headers {
        self.headers
    }
}

#[cfg(test)]
#[path = "headers_test.rs"]
mod headers_test;
