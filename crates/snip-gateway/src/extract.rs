use axum::extract::{ConnectInfo, FromRequest, FromRequestParts, Request};
use axum::http::header::{CONTENT_TYPE, REFERER, USER_AGENT};
use axum::http::request::Parts;
use axum::http::HeaderMap;
use axum::{Form, Json};
use snip_core::VisitMetadata;
use std::convert::Infallible;
use std::net::{IpAddr, SocketAddr};

use crate::error::AppError;
use crate::model::CreateLinkRequest;

/// A create request sent either as JSON or as an
/// `application/x-www-form-urlencoded` form.
#[derive(Debug)]
pub struct CreateLinkBody(pub CreateLinkRequest);

impl<S> FromRequest<S> for CreateLinkBody
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(request: Request, state: &S) -> Result<Self, Self::Rejection> {
        if is_form(request.headers()) {
            let Form(body) = Form::<CreateLinkRequest>::from_request(request, state).await?;
            Ok(Self(body))
        } else {
            let Json(body) = Json::<CreateLinkRequest>::from_request(request, state).await?;
            Ok(Self(body))
        }
    }
}

fn is_form(headers: &HeaderMap) -> bool {
    headers
        .get(CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .is_some_and(|value| value.starts_with("application/x-www-form-urlencoded"))
}

/// The peer address of the connection, when the server was started with
/// connect info. Never rejects.
#[derive(Debug, Clone, Copy)]
pub struct ClientAddr(pub Option<IpAddr>);

impl<S> FromRequestParts<S> for ClientAddr
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let addr = parts
            .extensions
            .get::<ConnectInfo<SocketAddr>>()
            .map(|ConnectInfo(addr)| addr.ip().to_canonical());
        Ok(Self(addr))
    }
}

/// Everything about a visitor that the registry records.
#[derive(Debug, Clone)]
pub struct Visitor(pub VisitMetadata);

impl<S> FromRequestParts<S> for Visitor
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let ClientAddr(source_address) = ClientAddr::from_request_parts(parts, state).await?;

        Ok(Self(VisitMetadata {
            referrer: header_value(&parts.headers, REFERER),
            user_agent: header_value(&parts.headers, USER_AGENT),
            source_address,
        }))
    }
}

fn header_value(headers: &HeaderMap, name: axum::http::HeaderName) -> Option<String> {
    headers
        .get(name)
        .and_then(|value| value.to_str().ok())
        .filter(|value| !value.is_empty())
        .map(str::to_owned)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::Request;

    async fn visitor(request: Request<()>) -> VisitMetadata {
        let (mut parts, _) = request.into_parts();
        let Visitor(metadata) = Visitor::from_request_parts(&mut parts, &()).await.unwrap();
        metadata
    }

    #[tokio::test]
    async fn reads_headers_and_peer() {
        let mut request = Request::builder()
            .header(REFERER, "https://news.example/")
            .header(USER_AGENT, "curl/8.0")
            .body(())
            .unwrap();
        request
            .extensions_mut()
            .insert(ConnectInfo(SocketAddr::from(([192, 168, 1, 9], 40000))));

        let metadata = visitor(request).await;
        assert_eq!(metadata.referrer.as_deref(), Some("https://news.example/"));
        assert_eq!(metadata.user_agent.as_deref(), Some("curl/8.0"));
        assert_eq!(metadata.source_address, Some(IpAddr::from([192, 168, 1, 9])));
    }

    #[tokio::test]
    async fn everything_optional() {
        let metadata = visitor(Request::builder().body(()).unwrap()).await;
        assert_eq!(metadata, VisitMetadata::default());
    }

    #[tokio::test]
    async fn ipv4_mapped_addresses_are_unwrapped() {
        let mapped: IpAddr = "::ffff:10.0.0.1".parse().unwrap();
        let mut request = Request::builder().body(()).unwrap();
        request
            .extensions_mut()
            .insert(ConnectInfo(SocketAddr::new(mapped, 1234)));

        let metadata = visitor(request).await;
        assert_eq!(metadata.source_address, Some(IpAddr::from([10, 0, 0, 1])));
    }

    async fn create_body(content_type: &str, body: &str) -> Result<CreateLinkRequest, AppError> {
        let request = Request::builder()
            .method("POST")
            .header(CONTENT_TYPE, content_type)
            .body(axum::body::Body::from(body.to_owned()))
            .unwrap();
        CreateLinkBody::from_request(request, &())
            .await
            .map(|CreateLinkBody(body)| body)
    }

    #[tokio::test]
    async fn form_bodies_are_accepted() {
        let body = create_body(
            "application/x-www-form-urlencoded",
            "url=https%3A%2F%2Fexample.com%2Fa%3Fb%3Dc&shortcode=form1&validity=5",
        )
        .await
        .unwrap();
        assert_eq!(body.url.as_deref(), Some("https://example.com/a?b=c"));
        assert_eq!(body.shortcode.as_deref(), Some("form1"));

        let params = body.into_params().unwrap();
        assert_eq!(params.validity.unwrap().minutes(), 5);
    }

    #[tokio::test]
    async fn json_is_the_fallback() {
        let body = create_body("application/json", r#"{"url":"https://example.com"}"#)
            .await
            .unwrap();
        assert_eq!(body.url.as_deref(), Some("https://example.com"));

        let err = create_body("text/plain", "url=https://example.com").await.unwrap_err();
        assert!(matches!(err, AppError::MalformedBody(_)));
    }
}
