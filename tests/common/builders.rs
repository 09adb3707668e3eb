use wrap_cors::constants::method;
use wrap_cors::{CorsDecision, CorsOptions, CorsPolicy, MaxAge, Origin, RequestContext};

#[derive(Default)]
pub struct PolicyBuilder {
    origin: Option<Origin>,
    allow_methods: Option<Vec<String>>,
    allow_headers: Option<Vec<String>>,
    expose_headers: Option<Vec<String>>,
    credentials: Option<bool>,
    max_age: Option<MaxAge>,
    run_handler_on_preflight: Option<bool>,
}

impl PolicyBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn origin(mut self, origin: impl Into<Origin>) -> Self {
        self.origin = Some(origin.into());
        self
    }

    pub fn allow_methods<I, S>(mut self, methods: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.allow_methods = Some(methods.into_iter().map(Into::into).collect());
        self
    }

    pub fn allow_headers<I, S>(mut self, headers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.allow_headers = Some(headers.into_iter().map(Into::into).collect());
        self
    }

    pub fn expose_headers<I, S>(mut self, headers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.expose_headers = Some(headers.into_iter().map(Into::into).collect());
        self
    }

    pub fn credentials(mut self, enabled: bool) -> Self {
        self.credentials = Some(enabled);
        self
    }

    pub fn max_age(mut self, value: impl Into<MaxAge>) -> Self {
        self.max_age = Some(value.into());
        self
    }

    pub fn run_handler_on_preflight(mut self, enabled: bool) -> Self {
        self.run_handler_on_preflight = Some(enabled);
        self
    }

    pub fn build(self) -> CorsPolicy {
        let defaults = CorsOptions::default();

        CorsPolicy::new(CorsOptions {
            origin: self.origin.unwrap_or(defaults.origin),
            allow_methods: self.allow_methods.unwrap_or(defaults.allow_methods),
            allow_headers: self.allow_headers.unwrap_or(defaults.allow_headers),
            expose_headers: self.expose_headers.unwrap_or(defaults.expose_headers),
            max_age: self.max_age.unwrap_or(defaults.max_age),
            allow_credentials: self.credentials.unwrap_or(defaults.allow_credentials),
            run_handler_on_preflight: self
                .run_handler_on_preflight
                .unwrap_or(defaults.run_handler_on_preflight),
            options_success_status: defaults.options_success_status,
        })
    }
}

pub struct RequestBuilder {
    method: String,
    origin: Option<String>,
}

impl RequestBuilder {
    fn with_method(method: &str) -> Self {
        Self {
            method: method.into(),
            origin: None,
        }
    }

    pub fn method(mut self, method: impl Into<String>) -> Self {
        self.method = method.into();
        self
    }

    pub fn origin(mut self, origin: impl Into<String>) -> Self {
        self.origin = Some(origin.into());
        self
    }

    pub fn evaluate(self, policy: &CorsPolicy) -> CorsDecision {
        policy.evaluate(&RequestContext::new(&self.method, self.origin.as_deref()))
    }
}

pub fn policy() -> PolicyBuilder {
    PolicyBuilder::new()
}

pub fn simple_request() -> RequestBuilder {
    RequestBuilder::with_method(method::GET)
}

pub fn preflight_request() -> RequestBuilder {
    RequestBuilder::with_method(method::OPTIONS)
}
