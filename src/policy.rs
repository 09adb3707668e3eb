use crate::constants::method;
use crate::context::RequestContext;
use crate::header_builder::{HeaderBuilder, OriginOutcome};
use crate::headers::HeaderCollection;
use crate::options::CorsOptions;
use crate::result::{CorsDecision, PreflightResult, SimpleResult};

/// Evaluates requests against a fixed set of [`CorsOptions`].
///
/// The options are fixed at construction, so a single policy can be shared
/// between threads and evaluated concurrently.
#[derive(Debug, Clone)]
pub struct CorsPolicy {
    options: CorsOptions,
}

impl CorsPolicy {
    pub fn new(options: CorsOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &CorsOptions {
        &self.options
    }

    pub fn evaluate(&self, request: &RequestContext<'_>) -> CorsDecision {
        let Some(origin) = request.present_origin() else {
            tracing::trace!(method = request.method, "no origin on request; skipping CORS");
            return CorsDecision::NotApplicable;
        };

        let builder = HeaderBuilder::new(&self.options);
        let mut headers = match builder.build_origin_headers(origin) {
            OriginOutcome::Skip => {
                tracing::trace!(origin, "CORS disabled; skipping");
                return CorsDecision::NotApplicable;
            }
            OriginOutcome::Disallow(headers) => {
                tracing::debug!(origin, "origin not allowed; omitting allow-origin");
                headers
            }
            OriginOutcome::Allow(headers) => headers,
        };

        headers.extend(builder.build_credentials_header());
        headers.extend(builder.build_exposed_headers());

        if request.method == method::OPTIONS {
            CorsDecision::Preflight(self.preflight(&builder, headers))
        } else {
            CorsDecision::Simple(SimpleResult {
                headers: headers.into_headers(),
            })
        }
    }

    fn preflight(
        &self,
        builder: &HeaderBuilder<'_>,
        mut headers: HeaderCollection,
    ) -> PreflightResult {
        headers.extend(builder.build_methods_header());
        headers.extend(builder.build_allowed_headers());
        headers.extend(builder.build_max_age_header());

        let halt_response = !self.options.run_handler_on_preflight;
        if halt_response {
            tracing::debug!(
                status = self.options.options_success_status,
                "answering preflight without running handler"
            );
        }

        PreflightResult {
            headers: headers.into_headers(),
            status: self.options.options_success_status,
            halt_response,
        }
    }
}

impl From<CorsOptions> for CorsPolicy {
    fn from(options: CorsOptions) -> Self {
        Self::new(options)
    }
}

impl Default for CorsPolicy {
    fn default() -> Self {
        Self::new(CorsOptions::default())
    }
}

#[cfg(test)]
#[path = "policy_test.rs"]
mod policy_test;
