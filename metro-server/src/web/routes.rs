//! HTTP route handlers.

use axum::{
    Json, Router,
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
};
use tower_http::trace::TraceLayer;
use tracing::{error, warn};

use crate::cache::RouteKind;
use crate::network::NetworkSnapshot;
use crate::planner::SearchError;

use super::dto::*;
use super::state::AppState;

/// Create the application router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/network", get(network))
        .route("/route/fewest-transfers", get(fewest_transfers_route))
        .route("/route/fastest", get(fastest_route))
        .route("/route/plan", get(plan_route))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Health check endpoint.
async fn health() -> &'static str {
    "ok"
}

/// The whole network, for drawing.
async fn network(State(state): State<AppState>) -> Json<NetworkSnapshot> {
    Json(state.planner.snapshot())
}

/// Route with the fewest connections.
async fn fewest_transfers_route(
    State(state): State<AppState>,
    Query(query): Query<RouteQuery>,
) -> Result<Json<RouteResponse>, AppError> {
    route_of_kind(&state, RouteKind::FewestTransfers, &query)
        .await
        .map(Json)
}

/// Route with the lowest total time.
async fn fastest_route(
    State(state): State<AppState>,
    Query(query): Query<RouteQuery>,
) -> Result<Json<RouteResponse>, AppError> {
    route_of_kind(&state, RouteKind::Fastest, &query)
        .await
        .map(Json)
}

/// Both routes. A missing route is `null`, not an error.
async fn plan_route(
    State(state): State<AppState>,
    Query(query): Query<RouteQuery>,
) -> Result<Json<PlanResponse>, AppError> {
    let request = query.to_request();
    let (fewest, fastest) = state.planner.plan(&request).await?;

    Ok(Json(PlanResponse {
        from: query.from,
        to: query.to,
        fewest_transfers: (*fewest).as_ref().map(RouteResult::from_summary),
        fastest: (*fastest).as_ref().map(RouteResult::from_summary),
    }))
}

/// Look up one route, turning "no route" into a 404.
async fn route_of_kind(
    state: &AppState,
    kind: RouteKind,
    query: &RouteQuery,
) -> Result<RouteResponse, AppError> {
    let request = query.to_request();
    let entry = state.planner.route(kind, &request).await?;

    let summary = (*entry).as_ref().ok_or_else(|| {
        AppError::from(SearchError::NoRouteFound {
            start: request.start.clone(),
            goal: request.goal.clone(),
        })
    })?;

    Ok(RouteResponse {
        kind,
        from: query.from.clone(),
        to: query.to.clone(),
        route: RouteResult::from_summary(summary),
    })
}

/// Application error type.
#[derive(Debug)]
pub enum AppError {
    BadRequest { message: String },
    NotFound { message: String },
    Internal { message: String },
}

impl From<SearchError> for AppError {
    fn from(e: SearchError) -> Self {
        match e {
            SearchError::InvalidRequest(message) => AppError::BadRequest { message },
            SearchError::StationNotFound(_) | SearchError::NoRouteFound { .. } => {
                AppError::NotFound {
                    message: e.to_string(),
                }
            }
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        let (status, message) = match self {
            AppError::BadRequest { message } => (StatusCode::BAD_REQUEST, message),
            AppError::NotFound { message } => (StatusCode::NOT_FOUND, message),
            AppError::Internal { message } => (StatusCode::INTERNAL_SERVER_ERROR, message),
        };

        if status.is_server_error() {
            error!(%status, %message, "Request failed");
        } else {
            warn!(%status, %message, "Request rejected");
        }

        let body = Json(ErrorResponse { error: message });
        (status, body).into_response()
    }
}
