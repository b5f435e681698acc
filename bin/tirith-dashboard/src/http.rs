// SPDX-License-Identifier: AGPL-3.0-only
use anyhow::Result;
use axum::{
    extract::{RawQuery, State},
    http::StatusCode,
    response::{Html, IntoResponse},
    routing::get,
    Json, Router,
};
use std::collections::HashMap;
use std::sync::Arc;
use tirith::{build_report, FilterSelection, Question, SheetSource};
use tracing::{info, warn};
use url::form_urlencoded;

use crate::config::DashboardConfig;
use crate::view;

#[derive(Clone)]
pub struct AppState {
    pub source: Arc<SheetSource>,
    pub refresh_secs: u64,
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(dashboard_page))
        .route("/api/report", get(report_json))
        .route("/healthz", get(health))
        .with_state(state)
}

pub async fn run_server(config: DashboardConfig) -> Result<()> {
    let state = AppState {
        source: Arc::new(SheetSource::new(config.sheet_url.clone())),
        refresh_secs: config.refresh.as_secs(),
    };
    let app = build_router(state);
    let listener = match tokio::net::TcpListener::bind(config.http_addr).await {
        Ok(l) => l,
        Err(e) => {
            warn!(error = %e, addr = %config.http_addr, "bind failed, using ephemeral");
            tokio::net::TcpListener::bind("127.0.0.1:0").await?
        }
    };
    let local = listener.local_addr()?;
    info!(%local, source = %config.sheet_url, "dashboard listening");
    tokio::select! { _ = axum::serve(listener, app) => {} _ = tokio::signal::ctrl_c() => {} }
    info!("tirith-dashboard shutting down");
    Ok(())
}

async fn health() -> &'static str {
    "ok"
}

async fn dashboard_page(
    State(state): State<AppState>,
    RawQuery(query): RawQuery,
) -> impl IntoResponse {
    let selection = selection_from_query(query.as_deref());
    match state.source.fetch().await {
        Ok(table) => {
            let report = build_report(&table, &selection);
            Html(view::render_page(&report, state.refresh_secs)).into_response()
        }
        Err(e) => {
            warn!(error = %e, "refresh cycle aborted");
            (
                StatusCode::BAD_GATEWAY,
                Html(view::render_error_page(e.user_message(), state.refresh_secs)),
            )
                .into_response()
        }
    }
}

async fn report_json(
    State(state): State<AppState>,
    RawQuery(query): RawQuery,
) -> impl IntoResponse {
    let selection = selection_from_query(query.as_deref());
    match state.source.fetch().await {
        Ok(table) => Json(build_report(&table, &selection)).into_response(),
        Err(e) => {
            warn!(error = %e, "refresh cycle aborted");
            (
                StatusCode::BAD_GATEWAY,
                Json(serde_json::json!({ "error": e.to_string() })),
            )
                .into_response()
        }
    }
}

/// Repeated query keys accumulate into one accepted set per filterable
/// question, so the multi-select form round-trips through the 10 s reload
/// with the viewer's selection intact.
pub fn selection_from_query(query: Option<&str>) -> FilterSelection {
    let mut accepted: HashMap<Question, Vec<String>> = HashMap::new();
    if let Some(query) = query {
        for (key, value) in form_urlencoded::parse(query.as_bytes()) {
            if value.is_empty() {
                continue;
            }
            let question = match Question::from_key(&key) {
                Some(question) if Question::FILTERABLE.contains(&question) => question,
                _ => continue,
            };
            accepted.entry(question).or_default().push(value.into_owned());
        }
    }
    let mut selection = FilterSelection::new();
    for (question, values) in accepted {
        selection.set_accepted(question, values);
    }
    selection
}
