use crate::error::Result;
use crate::extract::{CreateLinkBody, Visitor};
use crate::model::{CreateLinkResponse, LinkStatsResponse};
use crate::state::AppState;
use axum::extract::{Path, State};
use axum::http::header::{HOST, LOCATION};
use axum::http::{HeaderMap, StatusCode, Uri};
use axum::response::{IntoResponse, Response};
use axum::Json;
use snip_core::{RegistryError, ShortCode};

pub async fn create_link_handler(
    State(state): State<AppState>,
    headers: HeaderMap,
    uri: Uri,
    CreateLinkBody(request): CreateLinkBody,
) -> Result<(StatusCode, Json<CreateLinkResponse>)> {
    let params = request.into_params()?;

    let created = state.registry().create(params)?;

    let base_url = base_url(&state, &headers, &uri);
    Ok((
        StatusCode::CREATED,
        Json(CreateLinkResponse {
            short_link: created.short_code.to_url(&base_url),
            expiry: created.expires_at,
        }),
    ))
}

pub async fn resolve_link_handler(
    Path(short_code): Path<String>,
    State(state): State<AppState>,
    Visitor(metadata): Visitor,
) -> Result<Response> {
    let code = path_code(short_code)?;
    let original_url = state.registry().resolve(&code, metadata)?;

    Ok((StatusCode::FOUND, [(LOCATION, original_url)]).into_response())
}

pub async fn link_stats_handler(
    Path(short_code): Path<String>,
    State(state): State<AppState>,
) -> Result<Json<LinkStatsResponse>> {
    let code = path_code(short_code)?;
    let stats = state.registry().stats(&code)?;

    Ok(Json(stats.into()))
}

/// A path segment that is not a well-formed code cannot name a link.
fn path_code(raw: String) -> std::result::Result<ShortCode, RegistryError> {
    ShortCode::new(&raw).map_err(|_| RegistryError::NotFound(raw))
}

/// Picks the configured public base URL, else `http://` plus the request's host.
fn base_url(state: &AppState, headers: &HeaderMap, uri: &Uri) -> String {
    if let Some(base_url) = state.public_base_url() {
        return base_url.to_owned();
    }

    let host = headers
        .get(HOST)
        .and_then(|value| value.to_str().ok())
        .or_else(|| uri.authority().map(|authority| authority.as_str()))
        .unwrap_or("localhost");

    format!("http://{}", host)
}
