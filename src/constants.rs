pub mod header {
    pub const ACCESS_CONTROL_ALLOW_ORIGIN: &str = "Access-Control-Allow-Origin";
    pub const ACCESS_CONTROL_ALLOW_METHODS: &str = "Access-Control-Allow-Methods";
    pub const ACCESS_CONTROL_ALLOW_HEADERS: &str = "Access-Control-Allow-Headers";
    pub const ACCESS_CONTROL_ALLOW_CREDENTIALS: &str = "Access-Control-Allow-Credentials";
    pub const ACCESS_CONTROL_EXPOSE_HEADERS: &str = "Access-Control-Expose-Headers";
    pub const ACCESS_CONTROL_MAX_AGE: &str = "Access-Control-Max-Age";
    pub const AUTHORIZATION: &str = "Authorization";
    pub const ACCEPT: &str = "Accept";
    pub const CONTENT_TYPE: &str = "Content-Type";
    pub const ORIGIN: &str = "Origin";
    pub const VARY: &str = "Vary";
    pub const X_HTTP_METHOD_OVERRIDE: &str = "X-HTTP-Method-Override";
    pub const X_REQUESTED_WITH: &str = "X-Requested-With";
}

pub mod method {
    pub const DELETE: &str = "DELETE";
    pub const GET: &str = "GET";
    pub const HEAD: &str = "HEAD";
    pub const OPTIONS: &str = "OPTIONS";
    pub const PATCH: &str = "PATCH";
    pub const POST: &str = "POST";
    pub const PUT: &str = "PUT";
}

pub mod defaults {
    use super::{header, method};

    /// 24 hours.
    pub const MAX_AGE_SECONDS: u64 = 60 * 60 * 24;

    pub const ALLOW_METHODS: [&str; 6] = [
        method::POST,
        method::GET,
        method::PUT,
        method::PATCH,
        method::DELETE,
        method::OPTIONS,
    ];

    pub const ALLOW_HEADERS: [&str; 6] = [
        header::X_REQUESTED_WITH,
        header::ACCESS_CONTROL_ALLOW_ORIGIN,
        header::X_HTTP_METHOD_OVERRIDE,
        header::CONTENT_TYPE,
        header::AUTHORIZATION,
        header::ACCEPT,
    ];

    pub const OPTIONS_SUCCESS_STATUS: u16 = 200;
}
