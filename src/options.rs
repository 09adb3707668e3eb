use crate::constants::defaults;
use crate::max_age::MaxAge;
use crate::origin::Origin;

#[derive(Clone, Debug)]
pub struct CorsOptions {
    pub origin: Origin,
    pub allow_methods: Vec<String>,
    pub allow_headers: Vec<String>,
    pub expose_headers: Vec<String>,
    pub max_age: MaxAge,
    pub allow_credentials: bool,
    pub run_handler_on_preflight: bool,
    pub options_success_status: u16,
}

impl Default for CorsOptions {
    fn default() -> Self {
        Self {
            origin: Origin::Any,
            allow_methods: defaults::ALLOW_METHODS.iter().map(|m| m.to_string()).collect(),
            allow_headers: defaults::ALLOW_HEADERS.iter().map(|h| h.to_string()).collect(),
            expose_headers: Vec::new(),
            max_age: MaxAge::default(),
            allow_credentials: true,
            run_handler_on_preflight: false,
            options_success_status: defaults::OPTIONS_SUCCESS_STATUS,
        }
    }
}

#[cfg(test)]
#[path = "options_test.rs"]
mod options_test;
