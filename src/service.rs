//! Tower middleware that decorates an inner service with CORS headers.
//!
//! ```
//! use http::{Request, Response, header};
//! use std::convert::Infallible;
//! use tower::{ServiceBuilder, ServiceExt};
//! use wrap_cors::{CorsLayer, CorsOptions, Origin};
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Infallible> {
//! let service = ServiceBuilder::new()
//!     .layer(CorsLayer::new(CorsOptions {
//!         origin: Origin::mirror(),
//!         ..CorsOptions::default()
//!     }))
//!     .service_fn(|_: Request<String>| async {
//!         Ok::<_, Infallible>(Response::new(String::from("hello")))
//!     });
//!
//! let request = Request::builder()
//!     .header(header::ORIGIN, "https://app.example")
//!     .body(String::new())
//!     .unwrap();
//!
//! let response = service.oneshot(request).await?;
//! assert_eq!(
//!     response.headers()[header::ACCESS_CONTROL_ALLOW_ORIGIN],
//!     "https://app.example",
//! );
//! # Ok(())
//! # }
//! ```

use crate::context::RequestContext;
use crate::options::CorsOptions;
use crate::policy::CorsPolicy;
use crate::result::CorsDecision;
use http::{Request, Response, StatusCode, header};
use pin_project_lite::pin_project;
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;
use std::task::{Context, Poll, ready};
use tower_layer::Layer;
use tower_service::Service;

/// Layer that applies [`Cors`] to an inner service.
#[derive(Debug, Clone, Default)]
pub struct CorsLayer {
    policy: Arc<CorsPolicy>,
}

impl CorsLayer {
    pub fn new(options: CorsOptions) -> Self {
        Self::from_policy(Arc::new(CorsPolicy::new(options)))
    }

    pub fn from_policy(policy: Arc<CorsPolicy>) -> Self {
        Self { policy }
    }

    pub fn policy(&self) -> &CorsPolicy {
        &self.policy
    }
}

impl From<CorsPolicy> for CorsLayer {
    fn from(policy: CorsPolicy) -> Self {
        Self::from_policy(Arc::new(policy))
    }
}

impl<S> Layer<S> for CorsLayer {
    type Service = Cors<S>;

    fn layer(&self, inner: S) -> Self::Service {
        Cors {
            inner,
            policy: Arc::clone(&self.policy),
        }
    }
}

/// Middleware that evaluates a [`CorsPolicy`] for every request.
///
/// Preflight requests are answered directly with an empty body unless the
/// policy asks for the handler to run; all other requests reach the inner
/// service and get the CORS headers added to its response. Errors from the
/// inner service are returned untouched.
#[derive(Debug, Clone)]
pub struct Cors<S> {
    inner: S,
    policy: Arc<CorsPolicy>,
}

impl<S> Cors<S> {
    pub fn new(inner: S, options: CorsOptions) -> Self {
        CorsLayer::new(options).layer(inner)
    }

    pub fn layer(options: CorsOptions) -> CorsLayer {
        CorsLayer::new(options)
    }

    pub fn get_ref(&self) -> &S {
        &self.inner
    }

    pub fn get_mut(&mut self) -> &mut S {
        &mut self.inner
    }

    pub fn into_inner(self) -> S {
        self.inner
    }
}

impl<S, ReqBody, ResBody> Service<Request<ReqBody>> for Cors<S>
where
    S: Service<Request<ReqBody>, Response = Response<ResBody>>,
    ResBody: Default,
{
    type Response = S::Response;
    type Error = S::Error;
    type Future = ResponseFuture<S::Future, ResBody>;

    fn poll_ready(&mut self, cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.inner.poll_ready(cx)
    }

    fn call(&mut self, req: Request<ReqBody>) -> Self::Future {
        let decision = {
            let origin = req
                .headers()
                .get(header::ORIGIN)
                .and_then(|value| value.to_str().ok());
            self.policy
                .evaluate(&RequestContext::new(req.method().as_str(), origin))
        };

        let kind = match decision {
            CorsDecision::NotApplicable => Kind::Passthrough {
                future: self.inner.call(req),
            },
            CorsDecision::Preflight(result) if result.halt_response => {
                let status = StatusCode::from_u16(result.status).unwrap_or(StatusCode::OK);
                let mut response = Response::new(ResBody::default());
                *response.status_mut() = status;
                CorsDecision::Preflight(result).apply(response.headers_mut());
                Kind::Preflight {
                    response: Some(response),
                }
            }
            decision => Kind::CorsCall {
                future: self.inner.call(req),
                decision: Some(decision),
            },
        };

        ResponseFuture { inner: kind }
    }
}

pin_project! {
    /// Response future for [`Cors`].
    pub struct ResponseFuture<F, B> {
        #[pin]
        inner: Kind<F, B>,
    }
}

pin_project! {
    #[project = KindProj]
    enum Kind<F, B> {
        Passthrough {
            #[pin]
            future: F,
        },
        CorsCall {
            #[pin]
            future: F,
            decision: Option<CorsDecision>,
        },
        Preflight {
            response: Option<Response<B>>,
        },
    }
}

impl<F, B, E> Future for ResponseFuture<F, B>
where
    F: Future<Output = Result<Response<B>, E>>,
{
    type Output = Result<Response<B>, E>;

    fn poll(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        match self.project().inner.project() {
            KindProj::Passthrough { future } => future.poll(cx),
            KindProj::CorsCall { future, decision } => {
                let mut response = ready!(future.poll(cx))?;
                if let Some(decision) = decision.take() {
                    decision.apply(response.headers_mut());
                }
                Poll::Ready(Ok(response))
            }
            KindProj::Preflight { response } => Poll::Ready(Ok(response
                .take()
                .expect("ResponseFuture polled after completion"))),
        }
    }
}

#[cfg(test)]
#[path = "service_test.rs"]
mod service_test;
