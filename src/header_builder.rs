use crate::constants::header;
use crate::headers::HeaderCollection;
use crate::options::CorsOptions;
use crate::origin::OriginDecision;

pub(crate) enum OriginOutcome {
    /// CORS does not apply to this request.
    Skip,
    /// Origin rejected; only caching hints are emitted.
    Disallow(HeaderCollection),
    Allow(HeaderCollection),
}

pub(crate) struct HeaderBuilder<'a> {
    options: &'a CorsOptions,
}

impl<'a> HeaderBuilder<'a> {
    pub(crate) fn new(options: &'a CorsOptions) -> Self {
        Self { options }
    }

    pub(crate) fn build_origin_headers(&self, request_origin: &str) -> OriginOutcome {
        let origin = &self.options.origin;
        let mut headers = HeaderCollection::with_estimate(2);

        match origin.resolve(request_origin) {
            OriginDecision::Skip => return OriginOutcome::Skip,
            OriginDecision::Any => {
                headers.push(header::ACCESS_CONTROL_ALLOW_ORIGIN, "*".to_string());
            }
            OriginDecision::Exact(value) => {
                headers.push(header::ACCESS_CONTROL_ALLOW_ORIGIN, value);
            }
            OriginDecision::Mirror => {
                headers.push(
                    header::ACCESS_CONTROL_ALLOW_ORIGIN,
                    request_origin.to_string(),
                );
            }
            OriginDecision::Disallow => {
                if origin.varies_on_origin() {
                    headers.add_vary(header::ORIGIN);
                }
                return OriginOutcome::Disallow(headers);
            }
        }

        if origin.varies_on_origin() {
            headers.add_vary(header::ORIGIN);
        }

        OriginOutcome::Allow(headers)
    }

    pub(crate) fn build_credentials_header(&self) -> HeaderCollection {
        if self.options.allow_credentials {
            let mut headers = HeaderCollection::with_estimate(1);
            headers.push(
                header::ACCESS_CONTROL_ALLOW_CREDENTIALS,
                "true".to_string(),
            );
            headers
        } else {
            HeaderCollection::new()
        }
    }

    pub(crate) fn build_exposed_headers(&self) -> HeaderCollection {
        Self::joined(
            header::ACCESS_CONTROL_EXPOSE_HEADERS,
            &self.options.expose_headers,
        )
    }

    pub(crate) fn build_methods_header(&self) -> HeaderCollection {
        Self::joined(
            header::ACCESS_CONTROL_ALLOW_METHODS,
            &self.options.allow_methods,
        )
    }

    pub(crate) fn build_allowed_headers(&self) -> HeaderCollection {
        Self::joined(
            header::ACCESS_CONTROL_ALLOW_HEADERS,
            &self.options.allow_headers,
        )
    }

    pub(crate) fn build_max_age_header(&self) -> HeaderCollection {
        match self.options.max_age.header_value() {
            Some(value) => {
                let mut headers = HeaderCollection::with_estimate(1);
                headers.push(header::ACCESS_CONTROL_MAX_AGE, value);
                headers
            }
            None => HeaderCollection::new(),
        }
    }

    fn joined(name: &str, values: &[String]) -> HeaderCollection {
        if values.is_empty() {
            return HeaderCollection::new();
        }

        let mut headers = HeaderCollection::with_estimate(1);
        headers.push(name, values.join(","));
        headers
    }
}

#[cfg(test)]
#[path = "header_builder_test.rs"]
mod header_builder_test;
