//! HTTP route handlers.

use axum::{
    Json, Router,
    extract::State,
    http::{HeaderValue, StatusCode, header},
    response::{IntoResponse, Response},
    routing::get,
};
use chrono::Utc;
use tower_http::set_header::SetResponseHeaderLayer;
use tracing::{error, warn};

use crate::board::fetch_boards;
use crate::config::ConfigError;
use crate::ptv::FeedError;
use crate::switch::{Planner, SwitchError};

use super::assets::static_asset;
use super::dto::*;
use super::state::AppState;

/// Create the application router.
///
/// Every response, including static assets and errors, carries the CORS
/// headers.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/api/departures", get(departures).options(preflight))
        .route("/api/switch", get(switch).options(preflight))
        .fallback(static_asset)
        .with_state(state)
        .layer(SetResponseHeaderLayer::overriding(
            header::ACCESS_CONTROL_ALLOW_ORIGIN,
            HeaderValue::from_static("*"),
        ))
        .layer(SetResponseHeaderLayer::overriding(
            header::ACCESS_CONTROL_ALLOW_METHODS,
            HeaderValue::from_static("GET, OPTIONS"),
        ))
        .layer(SetResponseHeaderLayer::overriding(
            header::ACCESS_CONTROL_ALLOW_HEADERS,
            HeaderValue::from_static("Content-Type"),
        ))
}

/// Health check endpoint.
async fn health() -> &'static str {
    "ok"
}

/// CORS preflight. The headers themselves come from the router layers.
async fn preflight() -> StatusCode {
    StatusCode::OK
}

/// Train and bus departure boards.
async fn departures(State(state): State<AppState>) -> Result<Json<BoardsResponse>, AppError> {
    let client = state.ptv()?;
    let now = Utc::now();

    let boards = fetch_boards(client, &state.boards).await?;

    Ok(Json(BoardsResponse::from_boards(&boards, &state.boards, now)))
}

/// Best train-to-bus switch for the next outbound train.
async fn switch(State(state): State<AppState>) -> Result<Json<SwitchResponse>, AppError> {
    let client = state.ptv()?;

    // One clock reading for filtering, minutesFromNow and the timestamp.
    let now = Utc::now();

    match Planner::new(client, &state.switch).plan(now).await {
        Ok(plan) => Ok(Json(SwitchResponse::from_plan(
            &plan,
            &state.switch.destination,
            now,
        ))),
        Err(SwitchError::NoUpcomingService) => Ok(Json(SwitchResponse::no_service(now))),
        Err(e) => Err(e.into()),
    }
}

// Error handling

/// Application error type.
#[derive(Debug)]
pub enum AppError {
    /// The server is missing required configuration
    Configuration(ConfigError),
    /// Departure data could not be fetched
    Upstream { message: String },
    Internal { message: String },
}

impl From<ConfigError> for AppError {
    fn from(e: ConfigError) -> Self {
        AppError::Configuration(e)
    }
}

impl From<FeedError> for AppError {
    fn from(e: FeedError) -> Self {
        AppError::Upstream {
            message: e.to_string(),
        }
    }
}

impl From<SwitchError> for AppError {
    fn from(e: SwitchError) -> Self {
        match e {
            SwitchError::Feed(feed) => feed.into(),
            _ => AppError::Internal {
                message: e.to_string(),
            },
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let body = match self {
            AppError::Configuration(e) => {
                warn!(error = %e, "Rejecting API request");
                ErrorResponse {
                    error: "PTV API credentials not configured".to_string(),
                    message: None,
                }
            }
            AppError::Upstream { message } => {
                error!(%message, "Departure fetch failed");
                ErrorResponse {
                    error: "Failed to fetch departure data".to_string(),
                    message: Some(message),
                }
            }
            AppError::Internal { message } => {
                error!(%message, "Internal error");
                ErrorResponse {
                    error: "Internal server error".to_string(),
                    message: Some(message),
                }
            }
        };

        (StatusCode::INTERNAL_SERVER_ERROR, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::BoardConfig;
    use crate::switch::SwitchConfig;
    use axum::body::{Body, to_bytes};
    use axum::http::{Method, Request};
    use tower::ServiceExt;

    fn unconfigured() -> Router {
        let dir = std::env::temp_dir().join("switch-server-routes-test-missing");
        create_router(AppState::new(
            Err(ConfigError::Missing("PTV_DEVID")),
            SwitchConfig::default(),
            BoardConfig::default(),
            dir,
        ))
    }

    async fn send(router: Router, method: Method, uri: &str) -> Response {
        router
            .oneshot(
                Request::builder()
                    .method(method)
                    .uri(uri)
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap()
    }

    async fn body_json(response: Response) -> serde_json::Value {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    fn assert_cors(response: &Response) {
        let headers = response.headers();
        assert_eq!(headers[header::ACCESS_CONTROL_ALLOW_ORIGIN], "*");
        assert_eq!(headers[header::ACCESS_CONTROL_ALLOW_METHODS], "GET, OPTIONS");
        assert_eq!(headers[header::ACCESS_CONTROL_ALLOW_HEADERS], "Content-Type");
    }

    #[tokio::test]
    async fn health_is_ok() {
        let response = send(unconfigured(), Method::GET, "/health").await;
        assert_eq!(response.status(), StatusCode::OK);
        assert_cors(&response);
    }

    #[tokio::test]
    async fn preflight_has_cors_headers() {
        for path in ["/api/switch", "/api/departures"] {
            let response = send(unconfigured(), Method::OPTIONS, path).await;
            assert_eq!(response.status(), StatusCode::OK);
            assert_cors(&response);
        }
    }

    #[tokio::test]
    async fn missing_credentials_is_500() {
        for path in ["/api/switch", "/api/departures"] {
            let response = send(unconfigured(), Method::GET, path).await;
            assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
            assert_cors(&response);
            assert_eq!(
                body_json(response).await,
                serde_json::json!({"error": "PTV API credentials not configured"})
            );
        }
    }

    #[tokio::test]
    async fn missing_asset_is_404() {
        let response = send(unconfigured(), Method::GET, "/nothing-here.js").await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_cors(&response);
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        assert_eq!(&bytes[..], b"Not found");
    }

    #[test]
    fn feed_errors_become_upstream() {
        let err = AppError::from(SwitchError::Feed(FeedError::Unauthorized));
        assert!(matches!(err, AppError::Upstream { .. }));

        let err = AppError::from(SwitchError::InvalidConfig("x".into()));
        assert!(matches!(err, AppError::Internal { .. }));
    }
}
