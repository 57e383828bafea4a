use std::sync::Arc;

use axum::{
    body::Bytes,
    extract::State,
    http::{header, HeaderMap, Method, StatusCode, Uri},
    response::{Html, IntoResponse, Response},
};
use frontcontroller::{templates, DispatchError};
use shared::{error::ErrorCode, protocol::ParamMap};
use tracing::{debug, error, warn};
use url::form_urlencoded;

use crate::app_state::AppState;

const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded";

/// Fallback route: every path the router does not know goes through the
/// front controller.
pub(crate) async fn front_controller(
    State(state): State<Arc<AppState>>,
    method: Method,
    uri: Uri,
    headers: HeaderMap,
    body: Bytes,
) -> Response {
    let params = request_params(uri.query(), &headers, &body);
    debug!(%method, path = uri.path(), params = params.len(), "front controller request");

    match state.front.serve(uri.path(), &params) {
        Ok(rendered) => Html(rendered.body).into_response(),
        Err(err) => error_response(&err),
    }
}

/// Query parameters first, then form fields. The first value of a name wins.
pub(crate) fn request_params(query: Option<&str>, headers: &HeaderMap, body: &[u8]) -> ParamMap {
    let mut params = ParamMap::new();
    if let Some(query) = query {
        collect_pairs(&mut params, query.as_bytes());
    }
    if is_form(headers) {
        collect_pairs(&mut params, body);
    }
    params
}

fn collect_pairs(params: &mut ParamMap, raw: &[u8]) {
    for (name, value) in form_urlencoded::parse(raw) {
        params
            .entry(name.into_owned())
            .or_insert_with(|| value.into_owned());
    }
}

fn is_form(headers: &HeaderMap) -> bool {
    headers
        .get(header::CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.split(';').next())
        .is_some_and(|mime| mime.trim().eq_ignore_ascii_case(FORM_CONTENT_TYPE))
}

pub(crate) fn status_for(code: ErrorCode) -> StatusCode {
    match code {
        ErrorCode::NotFound => StatusCode::NOT_FOUND,
        ErrorCode::Internal => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

pub(crate) fn error_response(err: &DispatchError) -> Response {
    let api_error = err.to_api_error();
    let status = status_for(api_error.code);
    if status.is_server_error() {
        error!(%status, error = %err, "request failed");
    } else {
        warn!(%status, error = %err, "request rejected");
    }
    (
        status,
        Html(templates::error_page(&api_error).into_string()),
    )
        .into_response()
}
