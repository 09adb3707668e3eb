/// Per-request facts the policy needs. `origin` is `None` when the client
/// sent no `Origin` header.
#[derive(Debug, Clone, Copy)]
pub struct RequestContext<'a> {
    pub method: &'a str,
    pub origin: Option<&'a str>,
}

impl<'a> RequestContext<'a> {
    pub fn new(method: &'a str, origin: Option<&'a str>) -> Self {
        Self { method, origin }
    }

    /// The request origin, treating an empty header value as absent.
    pub(crate) fn present_origin(&self) -> Option<&'a str> {
        self.origin.filter(|origin| !origin.is_empty())
    }
}
