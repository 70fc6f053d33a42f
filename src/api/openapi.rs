use utoipa::OpenApi;

use crate::{
    api::models::{AddPlayerRequest, ErrorResponse, SettleRequest, SettleResponse},
    core::models::{
        audit::AppLog,
        player::Player,
        settlement::{Balance, SettlementSummary, Transfer},
    },
};

#[derive(OpenApi)]
#[openapi(
    paths(
        super::handlers::add_player,
        super::handlers::list_players,
        super::handlers::get_player,
        super::handlers::remove_player,
        super::handlers::clear_players,
        super::handlers::calculate_settlement,
        super::handlers::settle,
        super::handlers::net_gain_chart,
        super::handlers::get_app_logs
    ),
    components(schemas(
        AddPlayerRequest,
        SettleRequest,
        SettleResponse,
        ErrorResponse,
        Player,
        Balance,
        Transfer,
        SettlementSummary,
        AppLog
    )),
    info(
        title = "Cashout API",
        description = "API for tracking a poker session and settling who pays whom",
        version = "0.1.0"
    )
)]
pub struct ApiDoc;
