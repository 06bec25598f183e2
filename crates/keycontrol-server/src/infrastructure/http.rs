//! HTTP surface: routes, auth layer, handlers and error mapping.
//!
//! | Route          | Method | Auth | Success             |
//! |----------------|--------|------|---------------------|
//! | `/health`      | GET    | no   | 200, empty body     |
//! | `/press`       | POST   | yes  | 200, summary line   |
//! | `/press/multi` | POST   | yes  | 200, summary line   |
//!
//! The auth check is a route layer on the two `/press` routes.  It runs before
//! the query string is parsed, so an unauthenticated caller never learns
//! whether its key names were valid.  Requests with the wrong method get 405
//! and never reach the auth check.  `/health` answers GET only; HEAD gets 405
//! like every other method.
//!
//! A query parameter given more than once keeps its first value.

use std::sync::Arc;

use axum::{
    extract::{Query, Request, State},
    http::{
        header::{ALLOW, AUTHORIZATION},
        StatusCode,
    },
    middleware::{self, Next},
    response::{IntoResponse, Response},
    routing::{get, post},
    Router,
};
use keycontrol_core::{AuthToken, ModifierSet, PressRequest, ValidationError};
use thiserror::Error;
use tokio::sync::mpsc;
use tower_http::trace::TraceLayer;
use tracing::{error, info, warn};

use crate::application::{InjectionDispatcher, InjectionError, KeyInjector};
use crate::domain::{InjectionFailurePolicy, ServerConfig};

/// Receives injection errors that must stop the server.
///
/// Only fed when the failure policy is [`InjectionFailurePolicy::FailFast`].
pub type FatalErrors = mpsc::UnboundedReceiver<InjectionError>;

// ── State ─────────────────────────────────────────────────────────────────────

/// Shared state for every handler.  Cheap to clone.
#[derive(Clone)]
pub struct AppState {
    auth_token: Arc<AuthToken>,
    dispatcher: Arc<InjectionDispatcher>,
    failure_policy: InjectionFailurePolicy,
    fatal_tx: mpsc::UnboundedSender<InjectionError>,
}

impl AppState {
    /// Builds the state from the server configuration and an injection
    /// backend.  The returned receiver yields fatal injection errors.
    pub fn new(config: &ServerConfig, injector: Arc<dyn KeyInjector>) -> (Self, FatalErrors) {
        let (fatal_tx, fatal_rx) = mpsc::unbounded_channel();
        let state = Self {
            auth_token: Arc::new(config.auth_token.clone()),
            dispatcher: Arc::new(InjectionDispatcher::new(injector, config.timing)),
            failure_policy: config.failure_policy,
            fatal_tx,
        };
        (state, fatal_rx)
    }

    /// Dispatches a validated request and returns its summary line.
    async fn press(&self, request: PressRequest) -> Result<String, ApiError> {
        let summary = request.summary();
        match self.dispatcher.dispatch(request).await {
            Ok(()) => {
                info!("{summary}");
                Ok(summary)
            }
            Err(e) => {
                error!("key injection failed: {e}");
                if self.failure_policy == InjectionFailurePolicy::FailFast {
                    // The receiver is gone only when the server is already stopping.
                    let _ = self.fatal_tx.send(e.clone());
                }
                Err(ApiError::Injection(e))
            }
        }
    }
}

// ── Errors ────────────────────────────────────────────────────────────────────

/// Every way a request can fail after routing.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Unauthorized")]
    Unauthorized,
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error(transparent)]
    Injection(#[from] InjectionError),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Unauthorized => StatusCode::UNAUTHORIZED,
            ApiError::Validation(_) => StatusCode::BAD_REQUEST,
            ApiError::Injection(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status(), self.to_string()).into_response()
    }
}

// ── Query parameters ──────────────────────────────────────────────────────────

/// Raw query string of both `/press` routes.  Values stay untyped here;
/// [`PressRequest`] does the validation.
#[derive(Debug, Default)]
pub struct PressQuery {
    pub key_code: Option<String>,
    pub key_codes: Option<String>,
    pub shift: Option<String>,
    pub ctrl: Option<String>,
    pub alt: Option<String>,
    /// The `super` parameter.
    pub meta: Option<String>,
}

impl PressQuery {
    /// Collects the known parameters from decoded `(name, value)` pairs in
    /// request order.  A repeated parameter keeps its first value; unknown
    /// names are ignored.
    pub fn from_pairs<I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (String, String)>,
    {
        let mut query = Self::default();
        for (name, value) in pairs {
            let slot = match name.as_str() {
                "keyCode" => &mut query.key_code,
                "keyCodes" => &mut query.key_codes,
                "shift" => &mut query.shift,
                "ctrl" => &mut query.ctrl,
                "alt" => &mut query.alt,
                "super" => &mut query.meta,
                _ => continue,
            };
            slot.get_or_insert(value);
        }
        query
    }

    pub fn modifiers(&self) -> ModifierSet {
        ModifierSet::from_query(
            self.shift.as_deref(),
            self.ctrl.as_deref(),
            self.alt.as_deref(),
            self.meta.as_deref(),
        )
    }
}

// ── Router ────────────────────────────────────────────────────────────────────

/// Creates the router with all three endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/press", post(press_single))
        .route("/press/multi", post(press_multi))
        .route_layer(middleware::from_fn_with_state(state.clone(), require_auth))
        .route(
            "/health",
            get(health)
                .head(method_not_allowed)
                .fallback(method_not_allowed),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Rejects requests whose `Authorization` header is not the configured token.
///
/// The header value is compared as-is; there is no scheme prefix.
async fn require_auth(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let provided = request
        .headers()
        .get(AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .unwrap_or_default();

    if !state.auth_token.verify(provided) {
        warn!(path = %request.uri().path(), "rejected request with missing or wrong token");
        return Err(ApiError::Unauthorized);
    }
    Ok(next.run(request).await)
}

async fn health() -> StatusCode {
    StatusCode::OK
}

/// 405 for every non-GET request to `/health`, HEAD included.
async fn method_not_allowed() -> impl IntoResponse {
    (StatusCode::METHOD_NOT_ALLOWED, [(ALLOW, "GET")])
}

async fn press_single(
    State(state): State<AppState>,
    Query(pairs): Query<Vec<(String, String)>>,
) -> Result<String, ApiError> {
    let query = PressQuery::from_pairs(pairs);
    let request = PressRequest::single(query.key_code.as_deref(), query.modifiers())
        .inspect_err(|e| warn!("rejected /press: {e}"))?;
    state.press(request).await
}

async fn press_multi(
    State(state): State<AppState>,
    Query(pairs): Query<Vec<(String, String)>>,
) -> Result<String, ApiError> {
    let query = PressQuery::from_pairs(pairs);
    let request = PressRequest::chord(query.key_codes.as_deref(), query.modifiers())
        .inspect_err(|e| warn!("rejected /press/multi: {e}"))?;
    state.press(request).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_status_codes() {
        assert_eq!(ApiError::Unauthorized.status(), StatusCode::UNAUTHORIZED);
        assert_eq!(
            ApiError::from(ValidationError::MissingParameter("keyCode")).status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ApiError::from(InjectionError::Launch("x".into())).status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_unauthorized_body_text() {
        assert_eq!(ApiError::Unauthorized.to_string(), "Unauthorized");
    }

    #[test]
    fn test_validation_body_is_validator_message() {
        let err = ApiError::from(ValidationError::MissingParameter("keyCodes"));
        assert_eq!(err.to_string(), "keyCodes parameter is required");
    }

    #[test]
    fn test_query_modifiers_use_literal_true_only() {
        // Arrange
        let query = PressQuery {
            shift: Some("true".into()),
            ctrl: Some("TRUE".into()),
            alt: Some("1".into()),
            meta: Some("true".into()),
            ..PressQuery::default()
        };

        // Act
        let modifiers = query.modifiers();

        // Assert
        assert!(modifiers.shift);
        assert!(!modifiers.ctrl);
        assert!(!modifiers.alt);
        assert!(modifiers.meta);
    }

    #[test]
    fn test_repeated_parameters_keep_their_first_value() {
        // Arrange
        let pairs = [
            ("keyCode", "A"),
            ("shift", "true"),
            ("keyCode", "B"),
            ("shift", "false"),
            ("unknown", "x"),
            ("super", "true"),
        ]
        .map(|(name, value)| (name.to_string(), value.to_string()));

        // Act
        let query = PressQuery::from_pairs(pairs);

        // Assert
        assert_eq!(query.key_code.as_deref(), Some("A"));
        assert_eq!(query.shift.as_deref(), Some("true"));
        assert_eq!(query.meta.as_deref(), Some("true"));
        assert!(query.key_codes.is_none());
        assert!(query.modifiers().shift);
    }
}
