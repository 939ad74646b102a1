use axum::{
    Json,
    extract::{Path, Query, State, rejection::QueryRejection},
    response::{IntoResponse, Response},
};
use serde::Deserialize;

use crate::modules::activities::adapters::inbound::http::{
    MessageResponse, query_rejection_response,
};
use crate::modules::activities::use_cases::unregister::command::Unregister;
use crate::shell::state::AppState;

#[derive(Deserialize)]
pub struct UnregisterParams {
    pub email: String,
}

pub async fn handle(
    State(state): State<AppState>,
    Path(activity_name): Path<String>,
    params: Result<Query<UnregisterParams>, QueryRejection>,
) -> Response {
    let Query(params) = match params {
        Ok(p) => p,
        Err(rejection) => return query_rejection_response(rejection),
    };

    let command = Unregister::new(activity_name, params.email);
    match state.unregister_handler.handle(&command).await {
        Ok(_) => Json(MessageResponse {
            message: command.confirmation(),
        })
        .into_response(),
        Err(e) => e.into_response(),
    }
}

#[cfg(test)]
mod unregister_http_inbound_tests {
    use axum::{
        Router,
        body::Body,
        http::{Request, StatusCode},
        routing::delete,
    };
    use http_body_util::BodyExt;
    use std::sync::Arc;
    use tower::ServiceExt;

    use crate::modules::activities::adapters::outbound::activity_store_in_memory::InMemoryActivityStore;
    use crate::modules::activities::core::seed::mergington_roster;
    use crate::shell::state::AppState;

    use super::handle;

    fn make_test_state() -> AppState {
        AppState::in_memory(Arc::new(InMemoryActivityStore::new(mergington_roster())))
    }

    fn app(state: AppState) -> Router {
        Router::new()
            .route("/activities/{activity_name}/signup", delete(handle))
            .with_state(state)
    }

    async fn json_body(response: axum::response::Response) -> serde_json::Value {
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn it_should_return_200_with_a_confirmation_message() {
        let response = app(make_test_state())
            .oneshot(
                Request::delete("/activities/Chess%20Club/signup?email=michael@mergington.edu")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            json_body(response).await["message"],
            "Unregistered michael@mergington.edu from Chess Club"
        );
    }

    #[tokio::test]
    async fn it_should_return_404_for_an_unknown_activity() {
        let response = app(make_test_state())
            .oneshot(
                Request::delete("/activities/Nonexistent%20Club/signup?email=x@mergington.edu")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(json_body(response).await["detail"], "Activity not found");
    }

    #[tokio::test]
    async fn it_should_return_400_when_the_student_is_not_signed_up() {
        let response = app(make_test_state())
            .oneshot(
                Request::delete(
                    "/activities/Chess%20Club/signup?email=notregistered@mergington.edu",
                )
                .body(Body::empty())
                .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let json = json_body(response).await;
        assert!(json["detail"].as_str().unwrap().contains("not signed up"));
    }

    #[tokio::test]
    async fn it_should_return_422_when_email_is_missing() {
        let response = app(make_test_state())
            .oneshot(
                Request::delete("/activities/Chess%20Club/signup")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    }
}
