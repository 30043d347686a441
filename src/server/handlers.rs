//! HTTP handlers for the tracking endpoint and the operator API.

use axum::extract::{Path, Query, Request, State};
use axum::http::{header, HeaderMap, HeaderValue, StatusCode};
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};
use axum::Json;

use super::types::{
    AppState, GeoResponse, UpdateCredentialsRequest, VisitorsQuery, VisitorsResponse,
};
use crate::config::{ADMIN_PASS_HEADER, ADMIN_USER_HEADER, SESSION_COOKIE};
use crate::dashboard::{filter_visitors, geo_points};
use crate::ingest::new_session_id;

/// Ingestion entry point, called by site pages on load.
///
/// Reads the client signature from the User-Agent header and the browsing
/// session from the session cookie, issuing a fresh cookie when absent.
/// Responds immediately; resolution and the ledger append run as a spawned
/// task so a slow lookup never delays the page that triggered it.
pub async fn track_handler(State(state): State<AppState>, headers: HeaderMap) -> Response {
    let signature = header_str(&headers, header::USER_AGENT.as_str()).to_string();

    let (session_id, is_new_session) = match session_from_cookies(&headers) {
        Some(id) => (id, false),
        None => (new_session_id(), true),
    };

    let tracker = state.tracker.clone();
    let task_session = session_id.clone();
    tokio::spawn(async move {
        tracker.track_visit(&task_session, &signature).await;
    });

    let mut response = StatusCode::NO_CONTENT.into_response();
    if is_new_session {
        let cookie = format!("{SESSION_COOKIE}={session_id}; Path=/; HttpOnly; SameSite=Lax");
        if let Ok(value) = HeaderValue::from_str(&cookie) {
            response.headers_mut().insert(header::SET_COOKIE, value);
        }
    }
    response
}

/// Requires the operator credential headers on `/api` routes.
pub async fn require_admin(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Response {
    let username = header_str(request.headers(), ADMIN_USER_HEADER);
    let password = header_str(request.headers(), ADMIN_PASS_HEADER);
    if state.credentials.verify(username, password) {
        next.run(request).await
    } else {
        StatusCode::UNAUTHORIZED.into_response()
    }
}

/// Current stats snapshot.
pub async fn stats_handler(State(state): State<AppState>) -> Response {
    Json(state.dashboard.snapshot()).into_response()
}

/// Manual refresh trigger: recompute now instead of waiting for the timer.
pub async fn refresh_handler(State(state): State<AppState>) -> Response {
    match state.dashboard.refresh().await {
        Ok(stats) => Json(stats).into_response(),
        Err(e) => {
            log::error!("manual refresh failed: {e}");
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}

/// Table view: filtered, most-recent-first rows.
pub async fn visitors_handler(
    State(state): State<AppState>,
    Query(query): Query<VisitorsQuery>,
) -> Response {
    match state.ledger.list().await {
        Ok(visitors) => {
            let rows = filter_visitors(&visitors, &query.filter);
            let total = rows.len();
            Json(VisitorsResponse {
                visitors: rows,
                total,
            })
            .into_response()
        }
        Err(e) => {
            log::error!("failed to list visitors: {e}");
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}

/// Map view: points plus the viewport-fitting bounds.
pub async fn geo_handler(State(state): State<AppState>) -> Response {
    match state.ledger.list().await {
        Ok(visitors) => {
            let (points, bounds) = geo_points(&visitors);
            Json(GeoResponse { points, bounds }).into_response()
        }
        Err(e) => {
            log::error!("failed to list visitors for map: {e}");
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}

pub async fn block_handler(State(state): State<AppState>, Path(id): Path<String>) -> Response {
    set_blocked(&state, &id, true).await
}

pub async fn unblock_handler(State(state): State<AppState>, Path(id): Path<String>) -> Response {
    set_blocked(&state, &id, false).await
}

/// Mutates then refreshes. An unknown id is a logged no-op in the ledger,
/// so the operator sees success and simply no change in the table.
async fn set_blocked(state: &AppState, id: &str, blocked: bool) -> Response {
    match state.dashboard.set_blocked(id, blocked).await {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(e) => {
            log::error!("failed to set blocked={blocked} for '{id}': {e}");
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}

/// Updates the operator credential pair.
pub async fn credentials_handler(
    State(state): State<AppState>,
    Json(body): Json<UpdateCredentialsRequest>,
) -> Response {
    if body.username.trim().is_empty() || body.password.trim().is_empty() {
        return StatusCode::UNPROCESSABLE_ENTITY.into_response();
    }
    state.credentials.update(body.username, body.password);
    StatusCode::NO_CONTENT.into_response()
}

fn header_str<'a>(headers: &'a HeaderMap, name: &str) -> &'a str {
    headers
        .get(name)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("")
}

/// Extracts the session id from the Cookie header, if present.
fn session_from_cookies(headers: &HeaderMap) -> Option<String> {
    let cookies = header_str(headers, header::COOKIE.as_str());
    cookies.split(';').find_map(|part| {
        let (name, value) = part.trim().split_once('=')?;
        if name == SESSION_COOKIE && !value.is_empty() {
            Some(value.to_string())
        } else {
            None
        }
    })
}
