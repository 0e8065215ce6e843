//! Documentation page endpoints.
//!
//! Every route renders a full HTML page. Missing pages get the same chrome
//! with a 404 status.

use std::sync::Arc;
use std::time::{Duration, UNIX_EPOCH};

use axum::extract::{Path, State};
use axum::http::{HeaderMap, HeaderValue, StatusCode, header};
use axum::response::{Html, IntoResponse, Response};
use atomdocs_site::{PageRequest, RenderPayload};
use chrono::{DateTime, Utc};
use md5::{Digest, Md5};
use serde::Deserialize;

use crate::error::ServerError;
use crate::state::AppState;
use crate::template::render_page;

/// Path parameters of `/docs/{version}/{page1}/{page2}` and its prefixes.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub(crate) struct DocsParams {
    version: Option<String>,
    page1: Option<String>,
    page2: Option<String>,
}

/// Path parameters of legacy `/{resource}` and `/{resource}/{version}`.
#[derive(Debug, Deserialize)]
pub(crate) struct LegacyParams {
    resource: String,
    #[serde(default)]
    version: Option<String>,
}

/// Handle `GET /` and `GET /docs`.
pub(crate) async fn get_home(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
) -> Result<Response, ServerError> {
    let request = state.site.request();
    render(&state, &request, &headers)
}

/// Handle `GET /docs/{version}[/{page1}[/{page2}]]`.
pub(crate) async fn get_docs_page(
    State(state): State<Arc<AppState>>,
    Path(params): Path<DocsParams>,
    headers: HeaderMap,
) -> Result<Response, ServerError> {
    let mut request = state.site.request();
    if let Some(version) = params.version {
        request = request.with_version(version);
    }
    if let Some(page1) = params.page1 {
        request = request.with_page1(page1);
    }
    if let Some(page2) = params.page2 {
        request = request.with_page2(page2);
    }
    render(&state, &request, &headers)
}

/// Handle legacy `GET /{resource}` and `GET /{resource}/{version}`.
pub(crate) async fn get_legacy_page(
    State(state): State<Arc<AppState>>,
    Path(params): Path<LegacyParams>,
    headers: HeaderMap,
) -> Result<Response, ServerError> {
    let mut request = state.site.request().with_resource(params.resource);
    if let Some(version) = params.version {
        request = request.with_version(version);
    }
    render(&state, &request, &headers)
}

/// Fallback for URLs matching no route.
pub(crate) async fn not_found(State(state): State<Arc<AppState>>) -> Response {
    let payload = state.site.not_found_default();
    let html = render_page(&payload, &state.site_name);
    (
        StatusCode::NOT_FOUND,
        [(header::CACHE_CONTROL, "no-cache")],
        Html(html),
    )
        .into_response()
}

fn render(
    state: &AppState,
    request: &PageRequest,
    headers: &HeaderMap,
) -> Result<Response, ServerError> {
    let payload = state.site.render(request)?;
    let html = render_page(&payload, &state.site_name);

    if !payload.is_found() {
        return Ok((
            StatusCode::NOT_FOUND,
            [(header::CACHE_CONTROL, "no-cache")],
            Html(html),
        )
            .into_response());
    }

    let etag = compute_etag(&state.version, &html);

    // Check If-None-Match header for conditional request
    if let Some(if_none_match) = headers.get(header::IF_NONE_MATCH)
        && if_none_match.as_bytes() == etag.as_bytes()
    {
        return Ok(StatusCode::NOT_MODIFIED.into_response());
    }

    let mut response = (
        [
            (header::ETAG, etag),
            (header::CACHE_CONTROL, "private, max-age=60".to_owned()),
        ],
        Html(html),
    )
        .into_response();
    if let Some(last_modified) = last_modified(&payload)
        && let Ok(value) = HeaderValue::from_str(&last_modified)
    {
        response.headers_mut().insert(header::LAST_MODIFIED, value);
    }
    Ok(response)
}

/// HTTP date of the page source modification time.
fn last_modified(payload: &RenderPayload) -> Option<String> {
    let mtime = payload.source_mtime?;
    let time = UNIX_EPOCH.checked_add(Duration::try_from_secs_f64(mtime).ok()?)?;
    let time: DateTime<Utc> = time.into();
    Some(time.format("%a, %d %b %Y %H:%M:%S GMT").to_string())
}

/// Compute `ETag` from application version and page HTML.
///
/// Uses MD5 hash truncated to 64 bits (16 hex chars).
fn compute_etag(version: &str, content: &str) -> String {
    let hash = Md5::digest(format!("{version}:{content}").as_bytes());
    format!("\"{}\"", &hex::encode(hash)[..16])
}

#[cfg(test)]
mod tests {
    use atomdocs_site::PageStatus;
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_compute_etag_includes_version() {
        assert_ne!(compute_etag("0.1.0", "content"), compute_etag("0.1.1", "content"));
    }

    #[test]
    fn test_compute_etag_includes_content() {
        assert_ne!(compute_etag("0.1.0", "content1"), compute_etag("0.1.0", "content2"));
    }

    #[test]
    fn test_compute_etag_format() {
        let etag = compute_etag("0.1.0", "content");

        assert!(etag.starts_with('"'));
        assert!(etag.ends_with('"'));
        // 16 hex chars + 2 quotes = 18 total
        assert_eq!(etag.len(), 18);
    }

    #[test]
    fn test_last_modified_format() {
        let payload = RenderPayload {
            status: PageStatus::Found,
            title: "Index".to_owned(),
            version: "beta".to_owned(),
            versions: vec!["beta".to_owned()],
            page: "index".to_owned(),
            navigation: None,
            content: String::new(),
            previous_page_url: None,
            next_page_url: None,
            source_mtime: Some(1_700_000_000.0),
        };

        assert_eq!(
            last_modified(&payload).as_deref(),
            Some("Tue, 14 Nov 2023 22:13:20 GMT")
        );
        assert_eq!(
            last_modified(&RenderPayload {
                source_mtime: None,
                ..payload
            }),
            None
        );
    }
}
