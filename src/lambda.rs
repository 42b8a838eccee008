//! AWS Lambda adapter
//!
//! Feeds API Gateway events through the axum router and hands the router's
//! response back to the Lambda runtime with the CORS allow-origin header set.

use axum::{
    body::Body as AxumBody,
    http::{header::ACCESS_CONTROL_ALLOW_ORIGIN, Uri},
    Router,
};
use lambda_http::{http::HeaderValue, service_fn, Body, Error, Request, RequestExt, Response};
use tower::ServiceExt;

/// Dispatches one Lambda invocation to the router
#[derive(Clone)]
pub struct LambdaHandler {
    router: Router,
    allow_origin: HeaderValue,
}

impl LambdaHandler {
    pub fn new(router: Router, allow_origin: HeaderValue) -> Self {
        Self {
            router,
            allow_origin,
        }
    }

    /// Runs `request` through the router and buffers the response
    pub async fn handle(&self, request: Request) -> Result<Response<Body>, Error> {
        let uri = route_uri(&request);
        let mut request = request.map(|body| AxumBody::from(body.to_vec()));
        if let Some(uri) = uri {
            *request.uri_mut() = uri;
        }

        let response = self.router.clone().oneshot(request).await?;

        let (mut parts, body) = response.into_parts();
        let bytes = axum::body::to_bytes(body, usize::MAX).await?;

        let body = if bytes.is_empty() {
            Body::Empty
        } else {
            match String::from_utf8(bytes.to_vec()) {
                Ok(text) => Body::Text(text),
                Err(err) => Body::Binary(err.into_bytes()),
            }
        };

        parts
            .headers
            .insert(ACCESS_CONTROL_ALLOW_ORIGIN, self.allow_origin.clone());

        Ok(Response::from_parts(parts, body))
    }
}

/// Rebuilds the request target from the event path, which excludes the
/// API Gateway stage that `lambda_http` prefixes onto the URI path.
///
/// Returns `None` when the event carried no path or it is not a valid URI.
fn route_uri(request: &Request) -> Option<Uri> {
    let path = request.raw_http_path();
    if path.is_empty() {
        return None;
    }

    let target = match request.uri().query() {
        Some(query) => format!("{}?{}", path, query),
        None => path.to_string(),
    };

    target.parse().ok()
}

/// Starts the Lambda runtime loop, serving every invocation with `handler`
pub async fn run(handler: LambdaHandler) -> Result<(), Error> {
    let handler = &handler;

    lambda_http::run(service_fn(move |request: Request| async move {
        handler.handle(request).await
    }))
    .await
}
