use crate::constants::header;
use crate::headers::{HeaderWriter, Headers};

/// Headers and response metadata emitted for a preflight (`OPTIONS`) request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreflightResult {
    pub headers: Headers,
    pub status: u16,
    /// Finalize the response right away instead of running the wrapped handler.
    pub halt_response: bool,
}

/// Headers emitted for any non-preflight request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SimpleResult {
    pub headers: Headers,
}

/// Overall decision returned by the policy engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CorsDecision {
    Preflight(PreflightResult),
    Simple(SimpleResult),
    /// No CORS headers; pass the request through unmodified.
    NotApplicable,
}

impl CorsDecision {
    pub fn headers(&self) -> Option<&Headers> {
        match self {
            CorsDecision::Preflight(result) => Some(&result.headers),
            CorsDecision::Simple(result) => Some(&result.headers),
            CorsDecision::NotApplicable => None,
        }
    }

    pub fn halts(&self) -> bool {
        matches!(
            self,
            CorsDecision::Preflight(PreflightResult {
                halt_response: true,
                ..
            })
        )
    }

    /// Write the decided headers through `writer`.
    ///
    /// `Vary` is appended to a value already present on the writer
    /// (`existing,Origin`); every other header replaces what is there.
    pub fn apply<W>(&self, writer: &mut W)
    where
        W: HeaderWriter + ?Sized,
    {
        let Some(headers) = self.headers() else {
            return;
        };

        for (name, value) in headers {
            if name.eq_ignore_ascii_case(header::VARY) {
                writer.append_vary(value);
            } else {
                writer.set_header(name, value);
            }
        }
    }
}

#[cfg(test)]
#[path = "result_test.rs"]
mod result_test;
