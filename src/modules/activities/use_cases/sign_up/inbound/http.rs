use axum::{
    Json,
    extract::{Path, Query, State, rejection::QueryRejection},
    response::{IntoResponse, Response},
};
use serde::Deserialize;

use crate::modules::activities::adapters::inbound::http::{
    MessageResponse, query_rejection_response,
};
use crate::modules::activities::use_cases::sign_up::command::SignUp;
use crate::shell::state::AppState;

#[derive(Deserialize)]
pub struct SignUpParams {
    pub email: String,
}

pub async fn handle(
    State(state): State<AppState>,
    Path(activity_name): Path<String>,
    params: Result<Query<SignUpParams>, QueryRejection>,
) -> Response {
    let Query(params) = match params {
        Ok(p) => p,
        Err(rejection) => return query_rejection_response(rejection),
    };

    let command = SignUp::new(activity_name, params.email);
    match state.sign_up_handler.handle(&command).await {
        Ok(_) => Json(MessageResponse {
            message: command.confirmation(),
        })
        .into_response(),
        Err(e) => e.into_response(),
    }
}
