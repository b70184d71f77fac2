//! HTTP Handlers

use axum::{
    Json,
    body::Bytes,
    extract::State,
    http::{HeaderMap, StatusCode, header::AUTHORIZATION},
};
use serde::{Deserialize, Serialize, de::DeserializeOwned};
use serde_json::Value;

use smartvestor_accounts::{
    AccountError, RecommendationRecord, Session, Store, UserProfile, bearer_token,
};
use smartvestor_advisor::{AdviceRequest, assemble};

use crate::state::AppState;

// ============================================================================
// Request / Response Types
// ============================================================================

#[derive(Serialize)]
pub struct HealthResponse {
    pub ok: bool,
    pub name: &'static str,
    pub version: &'static str,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct RegisterRequest {
    pub name: String,
    pub email: String,
    pub password: String,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Serialize)]
pub struct MeResponse {
    pub user: UserProfile,
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub code: String,
}

pub type ApiError = (StatusCode, Json<ErrorResponse>);

fn api_error(status: StatusCode, error: impl Into<String>, code: &str) -> ApiError {
    (
        status,
        Json(ErrorResponse {
            error: error.into(),
            code: code.into(),
        }),
    )
}

fn account_error(err: &AccountError) -> ApiError {
    let (status, code) = match err {
        AccountError::MissingCredentials => (StatusCode::BAD_REQUEST, "MISSING_CREDENTIALS"),
        AccountError::UserExists(_) => (StatusCode::CONFLICT, "USER_EXISTS"),
        AccountError::InvalidCredentials => (StatusCode::UNAUTHORIZED, "INVALID_CREDENTIALS"),
        AccountError::InvalidToken(_) | AccountError::TokenExpired => {
            (StatusCode::UNAUTHORIZED, "INVALID_TOKEN")
        }
        _ => {
            tracing::error!("Account error: {}", err);
            (StatusCode::INTERNAL_SERVER_ERROR, "ACCOUNT_ERROR")
        }
    };
    api_error(status, err.user_message(), code)
}

/// Run blocking account or storage work (file I/O, bcrypt) off the runtime
async fn blocking<T, F>(work: F) -> Result<T, ApiError>
where
    F: FnOnce() -> Result<T, ApiError> + Send + 'static,
    T: Send + 'static,
{
    tokio::task::spawn_blocking(work).await.map_err(|e| {
        tracing::error!("Blocking task failed: {}", e);
        api_error(
            StatusCode::INTERNAL_SERVER_ERROR,
            "Internal server error",
            "INTERNAL_ERROR",
        )
    })?
}

/// Parse an optional JSON body. An empty body is `T::default()`.
fn parse_body<T: DeserializeOwned + Default>(body: &Bytes) -> Result<T, ApiError> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Ok(T::default());
    }
    serde_json::from_slice(body).map_err(|e| {
        tracing::debug!("Rejected request body: {}", e);
        api_error(StatusCode::BAD_REQUEST, "Invalid JSON body", "INVALID_BODY")
    })
}

// ============================================================================
// Handlers
// ============================================================================

/// Health check endpoint
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        ok: true,
        name: "SmartVestor",
        version: env!("CARGO_PKG_VERSION"),
    })
}

/// Register a new account
pub async fn register(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<Session>, ApiError> {
    let payload: RegisterRequest = parse_body(&body)?;
    let accounts = state.accounts;
    blocking(move || {
        accounts
            .register(&payload.name, &payload.email, &payload.password)
            .map_err(|e| account_error(&e))
    })
    .await
    .map(Json)
}

/// Email/password sign-in
pub async fn login(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<Session>, ApiError> {
    let payload: LoginRequest = parse_body(&body)?;
    let accounts = state.accounts;
    blocking(move || {
        accounts
            .login(&payload.email, &payload.password)
            .map_err(|e| account_error(&e))
    })
    .await
    .map(Json)
}

/// Current user from the bearer token
pub async fn me(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<Json<MeResponse>, ApiError> {
    let token = headers
        .get(AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .and_then(bearer_token)
        .ok_or_else(|| api_error(StatusCode::UNAUTHORIZED, "Unauthorized", "UNAUTHORIZED"))?;

    let claims = state.accounts.authenticate(token).map_err(|e| {
        tracing::debug!("Token rejected: {}", e);
        account_error(&e)
    })?;

    Ok(Json(MeResponse {
        user: claims.profile(),
    }))
}

/// Demo sign-in without OAuth
pub async fn google_demo(State(state): State<AppState>) -> Result<Json<Session>, ApiError> {
    let accounts = state.accounts;
    blocking(move || accounts.demo_login().map_err(|e| account_error(&e)))
        .await
        .map(Json)
}

/// Generate advice and persist the request/response pair
pub async fn recommend(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<RecommendationRecord>, ApiError> {
    let failed = |message: &str| {
        api_error(StatusCode::INTERNAL_SERVER_ERROR, message, "ADVICE_ERROR")
    };

    let input: Value = parse_body(&body)?;
    let request = AdviceRequest::from_json(&input).map_err(|e| {
        tracing::warn!("Advice request rejected: {}", e);
        failed(e.user_message())
    })?;

    let advice = assemble(&request);
    let record = RecommendationRecord::new(input, advice);

    let store = state.store;
    let record = blocking(move || {
        store.append_record(&record).map_err(|e| {
            tracing::error!("Failed to persist recommendation: {}", e);
            failed("Failed to generate advice")
        })?;
        Ok(record)
    })
    .await?;

    tracing::info!(
        record_id = %record.id,
        risk = %record.advice.inputs.risk,
        currency = %record.advice.currency,
        allocated = %record.advice.total_allocated(),
        "Generated recommendation"
    );

    Ok(Json(record))
}
