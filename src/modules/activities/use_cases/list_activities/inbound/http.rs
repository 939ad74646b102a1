use axum::{
    Json,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};

use crate::modules::activities::adapters::inbound::http::{
    INTERNAL_SERVER_ERROR_DETAIL, error_response,
};
use crate::shell::state::AppState;

pub async fn handle(State(state): State<AppState>) -> Response {
    match state.queries.list_activities().await {
        Ok(roster) => Json(roster).into_response(),
        Err(e) => {
            tracing::warn!(error = %e, "listing activities failed");
            error_response(StatusCode::INTERNAL_SERVER_ERROR, INTERNAL_SERVER_ERROR_DETAIL)
        }
    }
}
