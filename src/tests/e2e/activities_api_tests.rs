use axum::{
    Router,
    body::Body,
    http::{Method, Request, StatusCode},
    response::Response,
};
use http_body_util::BodyExt;
use rstest::{fixture, rstest};
use std::sync::Arc;
use tower::ServiceExt;

use crate::modules::activities::adapters::outbound::activity_store_in_memory::InMemoryActivityStore;
use crate::modules::activities::core::seed::mergington_roster;
use crate::shell::http::router;
use crate::shell::state::AppState;

// Each test gets its own freshly seeded store.
fn fresh_client() -> Router {
    let state = AppState::in_memory(Arc::new(InMemoryActivityStore::new(mergington_roster())));
    router(state, concat!(env!("CARGO_MANIFEST_DIR"), "/static"))
}

#[fixture]
fn client() -> Router {
    fresh_client()
}

async fn send(client: &Router, method: Method, uri: &str) -> Response {
    client
        .clone()
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

async fn json(response: Response) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

async fn participants(client: &Router, activity_name: &str) -> Vec<String> {
    let data = json(send(client, Method::GET, "/activities").await).await;
    serde_json::from_value(data[activity_name]["participants"].clone()).unwrap()
}

#[rstest]
#[tokio::test]
async fn signup_adds_the_participant_to_the_listing(client: Router) {
    let response = send(
        &client,
        Method::POST,
        "/activities/Chess%20Club/signup?email=newstudent@mergington.edu",
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let data = json(response).await;
    assert!(
        data["message"]
            .as_str()
            .unwrap()
            .contains("newstudent@mergington.edu")
    );

    assert!(
        participants(&client, "Chess Club")
            .await
            .contains(&"newstudent@mergington.edu".to_string())
    );
}

#[rstest]
#[tokio::test]
async fn signing_up_twice_is_rejected(client: Router) {
    let uri = "/activities/Chess%20Club/signup?email=newstudent@mergington.edu";
    assert_eq!(send(&client, Method::POST, uri).await.status(), StatusCode::OK);

    let response = send(&client, Method::POST, uri).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(json(response).await["detail"], "Student already signed up");
}

#[rstest]
#[tokio::test]
async fn unregister_removes_the_participant_from_the_listing(client: Router) {
    let response = send(
        &client,
        Method::DELETE,
        "/activities/Chess%20Club/signup?email=michael@mergington.edu",
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    assert_eq!(
        participants(&client, "Chess Club").await,
        vec!["daniel@mergington.edu"]
    );
}

#[rstest]
#[tokio::test]
async fn a_student_can_sign_up_again_after_unregistering(client: Router) {
    let uri = "/activities/Chess%20Club/signup?email=michael@mergington.edu";
    assert_eq!(send(&client, Method::DELETE, uri).await.status(), StatusCode::OK);
    assert_eq!(send(&client, Method::POST, uri).await.status(), StatusCode::OK);

    assert_eq!(
        participants(&client, "Chess Club").await,
        vec!["daniel@mergington.edu", "michael@mergington.edu"]
    );
}

#[rstest]
#[case(Method::POST)]
#[case(Method::DELETE)]
#[tokio::test]
async fn unknown_activities_are_not_found(client: Router, #[case] method: Method) {
    let response = send(
        &client,
        method,
        "/activities/Nonexistent%20Club/signup?email=student@mergington.edu",
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(json(response).await["detail"], "Activity not found");
}

#[rstest]
#[tokio::test]
async fn listing_does_not_change_the_roster(client: Router) {
    let first = json(send(&client, Method::GET, "/activities").await).await;
    let second = json(send(&client, Method::GET, "/activities").await).await;
    assert_eq!(first, second);
    assert_eq!(
        first["Chess Club"]["participants"],
        serde_json::json!(["michael@mergington.edu", "daniel@mergington.edu"])
    );
}

#[rstest]
#[tokio::test]
async fn stores_are_isolated_between_routers(client: Router) {
    send(
        &client,
        Method::POST,
        "/activities/Gym%20Class/signup?email=newstudent@mergington.edu",
    )
    .await;

    let other = fresh_client();
    assert_eq!(
        participants(&other, "Gym Class").await,
        vec!["john@mergington.edu", "olivia@mergington.edu"]
    );
}
