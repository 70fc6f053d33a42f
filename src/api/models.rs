use axum::{Json, http::StatusCode, response::IntoResponse};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::core::{
    errors::CashoutError,
    models::settlement::{Balance, Transfer},
};

// Request structs for JSON payloads
#[derive(Deserialize, ToSchema)]
pub struct AddPlayerRequest {
    pub name: String,
    pub buy_in: f64,
    pub cash_out: f64,
}

#[derive(Deserialize, ToSchema)]
pub struct SettleRequest {
    pub balances: Vec<Balance>,
}

#[derive(Serialize, Deserialize, ToSchema)]
pub struct SettleResponse {
    pub transfers: Vec<Transfer>,
    pub residual: Vec<Balance>,
    pub lines: Vec<String>,
}

// Error response struct
#[derive(Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    pub error: String,
}

// Newtype wrapper for CashoutError to implement IntoResponse
pub struct ApiError(pub CashoutError);

impl From<CashoutError> for ApiError {
    fn from(err: CashoutError) -> Self {
        ApiError(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        let status = match &self.0 {
            CashoutError::InvalidInput(..) => StatusCode::BAD_REQUEST,
            CashoutError::DuplicatePlayer(_) | CashoutError::TooManyPlayers(_) => StatusCode::CONFLICT,
            CashoutError::PlayerNotFound(_) => StatusCode::NOT_FOUND,
            CashoutError::UnbalancedLedger(_) => StatusCode::UNPROCESSABLE_ENTITY,
            CashoutError::StorageError(_) | CashoutError::LoggingError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };
        let error = match &self.0 {
            CashoutError::InvalidInput(_, field_error) => field_error.description.clone(),
            other => other.to_string(),
        };
        (status, Json(ErrorResponse { error })).into_response()
    }
}
