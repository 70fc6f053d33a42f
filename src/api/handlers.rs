use crate::{
    api::models::*,
    core::{
        errors::CashoutError,
        models::{audit::AppLog, player::Player, settlement::SettlementSummary},
        report,
        services::CashoutService,
    },
    infrastructure::{logging::in_memory::InMemoryLogging, storage::in_memory::InMemoryStorage},
    visualization::Visualization,
};
use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    routing::{get, post},
};
use serde_json::Value;
use std::sync::Arc;

pub type AppService = CashoutService<InMemoryLogging, InMemoryStorage>;

// Define API routes
pub fn api_routes(service: Arc<AppService>) -> Router {
    Router::new()
        .route("/players", post(add_player).get(list_players).delete(clear_players))
        .route("/players/chart", get(net_gain_chart))
        .route("/players/{player_id}", get(get_player).delete(remove_player))
        .route("/settlement", post(calculate_settlement))
        .route("/settle", post(settle))
        .route("/logs", get(get_app_logs))
        .with_state(service)
}

#[utoipa::path(
    post,
    path = "/api/players",
    request_body = AddPlayerRequest,
    responses(
        (status = 201, description = "Player added", body = Player),
        (status = 400, description = "Bad request", body = ErrorResponse),
        (status = 409, description = "Name already taken or ledger full", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
async fn add_player(
    State(service): State<Arc<AppService>>,
    Json(req): Json<AddPlayerRequest>,
) -> Result<(StatusCode, Json<Player>), ApiError> {
    let player = service.add_player(req.name, req.buy_in, req.cash_out).await?;
    Ok((StatusCode::CREATED, Json(player)))
}

#[utoipa::path(
    get,
    path = "/api/players",
    responses(
        (status = 200, description = "Players in the order they joined", body = Vec<Player>),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
async fn list_players(State(service): State<Arc<AppService>>) -> Result<Json<Vec<Player>>, ApiError> {
    Ok(Json(service.list_players().await?))
}

#[utoipa::path(
    get,
    path = "/api/players/{player_id}",
    params(
        ("player_id" = String, Path, description = "ID of the player to retrieve")
    ),
    responses(
        (status = 200, description = "Player retrieved", body = Player),
        (status = 404, description = "Player not found", body = ErrorResponse)
    )
)]
async fn get_player(
    State(service): State<Arc<AppService>>,
    Path(player_id): Path<String>,
) -> Result<Json<Player>, ApiError> {
    let player = service
        .get_player(&player_id)
        .await?
        .ok_or_else(|| CashoutError::PlayerNotFound(player_id))?;
    Ok(Json(player))
}

#[utoipa::path(
    delete,
    path = "/api/players/{player_id}",
    params(
        ("player_id" = String, Path, description = "ID of the player to remove")
    ),
    responses(
        (status = 204, description = "Player removed"),
        (status = 404, description = "Player not found", body = ErrorResponse)
    )
)]
async fn remove_player(
    State(service): State<Arc<AppService>>,
    Path(player_id): Path<String>,
) -> Result<StatusCode, ApiError> {
    service.remove_player(&player_id).await?;
    Ok(StatusCode::NO_CONTENT)
}

#[utoipa::path(
    delete,
    path = "/api/players",
    responses(
        (status = 204, description = "Ledger cleared"),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
async fn clear_players(State(service): State<Arc<AppService>>) -> Result<StatusCode, ApiError> {
    service.clear().await?;
    Ok(StatusCode::NO_CONTENT)
}

#[utoipa::path(
    post,
    path = "/api/settlement",
    responses(
        (status = 200, description = "Transfers that settle the table", body = SettlementSummary),
        (status = 422, description = "Cash-out total does not match buy-in total", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
async fn calculate_settlement(
    State(service): State<Arc<AppService>>,
) -> Result<Json<SettlementSummary>, ApiError> {
    Ok(Json(service.calculate_settlement().await?))
}

#[utoipa::path(
    post,
    path = "/api/settle",
    request_body = SettleRequest,
    responses(
        (status = 200, description = "Transfers for the supplied balances", body = SettleResponse),
        (status = 400, description = "Bad request", body = ErrorResponse),
        (status = 409, description = "Duplicate player", body = ErrorResponse)
    )
)]
async fn settle(
    State(service): State<Arc<AppService>>,
    Json(req): Json<SettleRequest>,
) -> Result<Json<SettleResponse>, ApiError> {
    let outcome = service.settle_balances(&req.balances)?;
    Ok(Json(SettleResponse {
        lines: report::transfer_lines(&outcome.transfers),
        transfers: outcome.transfers,
        residual: outcome.residual,
    }))
}

#[utoipa::path(
    get,
    path = "/api/players/chart",
    responses(
        (status = 200, description = "Chart.js configuration of net gains", body = Value),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
async fn net_gain_chart(State(service): State<Arc<AppService>>) -> Result<Json<Value>, ApiError> {
    let players = service.list_players().await?;
    Ok(Json(Visualization::net_gain_chart(&players)))
}

#[utoipa::path(
    get,
    path = "/api/logs",
    responses(
        (status = 200, description = "Activity log retrieved", body = Vec<AppLog>),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
async fn get_app_logs(State(service): State<Arc<AppService>>) -> Result<Json<Vec<AppLog>>, ApiError> {
    Ok(Json(service.get_app_logs().await?))
}
