use super::types::{
    API_VERSION, DOCS_PATH, ErrorResponse, HealthResponse, RootResponse, SERVICE_NAME,
};
use crate::{
    Error,
    config::ApiVariant,
    predict::{self, PredictionResponse, UrlRequest, VoiceRequest},
};
use axum::{
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::any::Any;
use tracing::{error, info, warn};
use uuid::Uuid;

#[derive(Debug, Clone)]
pub struct AppState {
    pub variant: ApiVariant,
}

type ApiResult<T> = Result<Json<T>, (StatusCode, Json<ErrorResponse>)>;

pub async fn predict_audio(
    State(state): State<AppState>,
    payload: Result<Json<Value>, JsonRejection>,
) -> ApiResult<PredictionResponse> {
    let request_id = Uuid::new_v4();

    let Json(body) = payload.map_err(|rejection| {
        warn!("Rejected prediction request {}: {}", request_id, rejection.body_text());
        (
            rejection.status(),
            Json(ErrorResponse::new(rejection.body_text())),
        )
    })?;

    info!(
        "Received prediction request {} for variant: {}",
        request_id, state.variant
    );

    let result = match state.variant {
        ApiVariant::Voice => parse::<VoiceRequest>(body).and_then(|r| predict::predict(&r)),
        ApiVariant::Url => parse::<UrlRequest>(body).and_then(|r| predict::predict(&r)),
    };

    match result {
        Ok(response) => {
            info!(
                "Prediction request {} classified as {:?}",
                request_id, response.prediction
            );
            Ok(Json(response))
        }
        Err(e) => {
            if e.is_client_error() {
                warn!("Prediction request {} failed validation: {}", request_id, e);
            } else {
                error!("Prediction request {} failed: {}", request_id, e);
            }
            Err(error_response(e))
        }
    }
}

fn parse<T: DeserializeOwned>(body: Value) -> crate::Result<T> {
    serde_json::from_value(body).map_err(|e| {
        Error::Validation(vec![predict::FieldError::new("body", e.to_string())])
    })
}

/// Maps a crate error onto its HTTP status and wire body.
///
/// Anything that is not a client error is reported with a fixed detail.
pub fn error_response(error: Error) -> (StatusCode, Json<ErrorResponse>) {
    let detail = error.to_string();
    match error {
        Error::BadRequest(_) => (StatusCode::BAD_REQUEST, Json(ErrorResponse::new(detail))),
        Error::Validation(errors) => (
            StatusCode::UNPROCESSABLE_ENTITY,
            Json(ErrorResponse::with_errors(detail, errors)),
        ),
        _ => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorResponse::internal()),
        ),
    }
}

pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        service: SERVICE_NAME.to_string(),
    })
}

pub async fn root() -> Json<RootResponse> {
    Json(RootResponse {
        message: format!("Welcome to {}", SERVICE_NAME),
        docs: DOCS_PATH.to_string(),
        version: API_VERSION.to_string(),
    })
}

pub async fn not_found() -> Response {
    (StatusCode::NOT_FOUND, Json(ErrorResponse::new("Not Found"))).into_response()
}

pub async fn method_not_allowed() -> Response {
    (
        StatusCode::METHOD_NOT_ALLOWED,
        Json(ErrorResponse::new("Method Not Allowed")),
    )
        .into_response()
}

pub fn handle_panic(err: Box<dyn Any + Send + 'static>) -> Response {
    let message = if let Some(s) = err.downcast_ref::<String>() {
        s.as_str()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        s
    } else {
        "unknown panic payload"
    };
    error!("Handler panicked: {}", message);

    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(ErrorResponse::internal()),
    )
        .into_response()
}
