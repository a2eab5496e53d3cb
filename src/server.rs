//! HTTP front-end.
//!
//! Every route answers 200. Failures are reported as a plain-text
//! `ERROR::…` body, which existing clients of this API expect.

use std::sync::Arc;

use axum::{
    extract::{Query, State},
    http::header,
    response::{IntoResponse, Response},
    routing::{get, post},
    Router,
};
use serde::{Deserialize, Serialize};
use tower_http::trace::TraceLayer;

use crate::app::{AppContext, Result};
use crate::domain::{Platform, SubscriptionSet};
use crate::store::json::to_indented_json;

pub fn router(ctx: Arc<AppContext>) -> Router {
    Router::new()
        .route("/subs", post(subs))
        .route("/videos", get(videos))
        .route("/subsFile", get(subs_file))
        .route("/rumbleEmbed", get(rumble_embed))
        .with_state(ctx)
        .layer(TraceLayer::new_for_http())
}

pub async fn serve(ctx: Arc<AppContext>, port: u16) -> Result<()> {
    let addr = format!("0.0.0.0:{}", port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("vidfeed serving on http://{addr}");

    axum::serve(listener, router(ctx)).await?;
    Ok(())
}

/// Body of `POST /subs`.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct SubsRequest {
    #[serde(rename = "Action")]
    action: String,
    #[serde(rename = "Value")]
    value: String,
    #[serde(rename = "Service")]
    service: String,
}

#[derive(Deserialize)]
struct EmbedQuery {
    #[serde(default)]
    data: String,
}

fn json_response<T: Serialize>(value: &T) -> Response {
    match to_indented_json(value) {
        Ok(body) => ([(header::CONTENT_TYPE, "application/json")], body).into_response(),
        Err(e) => error_response(e),
    }
}

fn error_response(err: impl std::fmt::Display) -> Response {
    format!("ERROR::{}\n", err).into_response()
}

async fn subs(State(ctx): State<Arc<AppContext>>, body: String) -> Response {
    let request: SubsRequest = serde_json::from_str(&body).unwrap_or_else(|e| {
        tracing::warn!(error = %e, "Unreadable /subs request, listing instead");
        SubsRequest::default()
    });

    match handle_subs(&ctx, &request).await {
        Ok(subs) => json_response(&subs),
        Err(e) => {
            tracing::warn!(action = %request.action, value = %request.value, error = %e, "Subscription request failed");
            error_response(e)
        }
    }
}

async fn handle_subs(
    ctx: &AppContext,
    request: &SubsRequest,
) -> std::result::Result<SubscriptionSet, String> {
    match request.action.as_str() {
        "add" => {
            let platform: Platform = request.service.parse()?;
            ctx.subscriptions
                .add(&request.value, platform)
                .await
                .map(|outcome| outcome.subscriptions)
                .map_err(|e| e.to_string())
        }
        "remove" => ctx
            .subscriptions
            .remove(&request.value)
            .map_err(|e| e.to_string()),
        _ => ctx.subscriptions.list().map_err(|e| e.to_string()),
    }
}

async fn videos(State(ctx): State<Arc<AppContext>>) -> Response {
    match ctx.aggregate().await {
        Ok(result) => json_response(&result),
        Err(e) => {
            tracing::warn!(error = %e, "Aggregation failed");
            error_response(e)
        }
    }
}

async fn subs_file(State(ctx): State<Arc<AppContext>>) -> Response {
    match ctx.store().read_raw() {
        Ok(body) => ([(header::CONTENT_TYPE, "application/json")], body).into_response(),
        Err(e) => error_response(e),
    }
}

async fn rumble_embed(
    State(ctx): State<Arc<AppContext>>,
    Query(query): Query<EmbedQuery>,
) -> Response {
    match ctx.lookup_embed(&query.data).await {
        Ok(url) => url.into_response(),
        Err(e) => {
            tracing::warn!(url = %query.data, error = %e, "Embed lookup failed");
            String::new().into_response()
        }
    }
}
