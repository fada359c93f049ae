//! End-to-end API integration tests
//!
//! The full router runs over an in-memory repository while the
//! championship service is stubbed with wiremock:
//! - Bet placement against scheduled, played and unknown matches
//! - Lazy settlement on read, and no further upstream calls once settled
//! - Error translation to HTTP status codes

use std::sync::Arc;
use std::time::Duration;

use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use betting_api::api::{build_router, AppState};
use betting_api::infrastructure::clients::HttpMatchClient;
use betting_api::infrastructure::repositories::InMemoryBetRepository;
use serde_json::{json, Value};
use tower::util::ServiceExt; // for oneshot
use uuid::Uuid;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Setup test application pointed at a stub championship service
fn setup_app(server: &MockServer) -> Router {
    let client = HttpMatchClient::new(server.uri(), Duration::from_secs(2)).unwrap();
    let state = AppState::new(Arc::new(InMemoryBetRepository::new()), Arc::new(client));
    build_router(state)
}

/// Send a request and decode the JSON body (Null for empty bodies)
async fn send(app: &Router, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(body) => builder
            .header("content-type", "application/json")
            .body(Body::from(serde_json::to_string(&body).unwrap()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json = serde_json::from_slice(&bytes).unwrap_or(Value::Null);

    (status, json)
}

fn match_body(match_id: Uuid, status: &str, home: Option<i32>, away: Option<i32>) -> Value {
    json!({
        "id": match_id,
        "home_team_name": "Time 1",
        "home_team_code": "time-1",
        "away_team_name": "Time 2",
        "away_team_code": "time-2",
        "home_score": home,
        "away_score": away,
        "status": status
    })
}

async fn stub_match(server: &MockServer, match_id: Uuid, body: Value) {
    Mock::given(method("GET"))
        .and(path(format!("/api/matches/{}", match_id)))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .mount(server)
        .await;
}

async fn place_bet(app: &Router, match_id: Uuid, predicted: &str) -> (StatusCode, Value) {
    send(
        app,
        "POST",
        "/api/bets",
        Some(json!({ "match_id": match_id, "predicted": predicted })),
    )
    .await
}

#[tokio::test]
async fn test_health_check() {
    let server = MockServer::start().await;
    let app = setup_app(&server);

    let response = app
        .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_place_bet_on_scheduled_match() {
    let server = MockServer::start().await;
    let match_id = Uuid::new_v4();
    stub_match(&server, match_id, match_body(match_id, "SCHEDULED", None, None)).await;
    let app = setup_app(&server);

    let (status, json) = place_bet(&app, match_id, "HOME_WIN").await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(json["match_id"], match_id.to_string());
    assert_eq!(json["predicted"], "HOME_WIN");
    assert_eq!(json["match_status"], "SCHEDULED");
    assert_eq!(json["status"], "PENDING");
    assert!(json["settled_at"].is_null());
}

#[tokio::test]
async fn test_place_bet_on_unknown_match_returns_404() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;
    let app = setup_app(&server);

    let (status, json) = place_bet(&app, Uuid::new_v4(), "DRAW").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(json["error"].as_str().unwrap().contains("Match not found"));

    let (_, bets) = send(&app, "GET", "/api/bets", None).await;
    assert_eq!(bets.as_array().unwrap().len(), 0);
}

#[tokio::test]
async fn test_place_bet_with_unknown_outcome_is_rejected() {
    let server = MockServer::start().await;
    let app = setup_app(&server);

    let (status, _) = place_bet(&app, Uuid::new_v4(), "PUSH").await;

    assert!(status.is_client_error());
}

#[tokio::test]
async fn test_place_bet_when_championship_fails_returns_502() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;
    let app = setup_app(&server);

    let (status, json) = place_bet(&app, Uuid::new_v4(), "DRAW").await;

    assert_eq!(status, StatusCode::BAD_GATEWAY);
    assert!(json["error"].is_string());
}

#[tokio::test]
async fn test_get_unknown_bet_returns_404() {
    let server = MockServer::start().await;
    let app = setup_app(&server);

    let (status, json) = send(&app, "GET", &format!("/api/bets/{}", Uuid::new_v4()), None).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(json["error"].as_str().unwrap().contains("Bet not found"));
}

#[tokio::test]
async fn test_get_bet_before_match_is_played_returns_409() {
    let server = MockServer::start().await;
    let match_id = Uuid::new_v4();
    stub_match(&server, match_id, match_body(match_id, "SCHEDULED", None, None)).await;
    let app = setup_app(&server);

    let (_, bet) = place_bet(&app, match_id, "AWAY_WIN").await;
    let id = bet["id"].as_str().unwrap();

    let (status, json) = send(&app, "GET", &format!("/api/bets/{}", id), None).await;

    assert_eq!(status, StatusCode::CONFLICT);
    assert!(json["error"].as_str().unwrap().contains(&match_id.to_string()));
}

#[tokio::test]
async fn test_bet_settles_once_match_is_played() {
    let server = MockServer::start().await;
    let match_id = Uuid::new_v4();
    // One call for placement and one for settlement; later reads stay local
    Mock::given(method("GET"))
        .and(path(format!("/api/matches/{}", match_id)))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(match_body(match_id, "PLAYED", Some(1), Some(1))),
        )
        .expect(2)
        .mount(&server)
        .await;
    let app = setup_app(&server);

    let (_, bet) = place_bet(&app, match_id, "DRAW").await;
    assert_eq!(bet["status"], "PENDING");
    assert_eq!(bet["match_status"], "PLAYED");
    let uri = format!("/api/bets/{}", bet["id"].as_str().unwrap());

    let (status, settled) = send(&app, "GET", &uri, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(settled["status"], "WON");
    assert!(settled["settled_at"].is_string());

    let (status, again) = send(&app, "GET", &uri, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(again, settled);

    let (_, bets) = send(&app, "GET", "/api/bets", None).await;
    assert_eq!(bets.as_array().unwrap().len(), 1);
    assert_eq!(bets[0]["status"], "WON");
}

#[tokio::test]
async fn test_losing_prediction_settles_as_lost() {
    let server = MockServer::start().await;
    let match_id = Uuid::new_v4();
    stub_match(&server, match_id, match_body(match_id, "PLAYED", Some(2), Some(1))).await;
    let app = setup_app(&server);

    let (_, bet) = place_bet(&app, match_id, "DRAW").await;
    let (status, json) = send(
        &app,
        "GET",
        &format!("/api/bets/{}", bet["id"].as_str().unwrap()),
        None,
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["status"], "LOST");
}

#[tokio::test]
async fn test_list_bets_does_not_settle() {
    let server = MockServer::start().await;
    let match_id = Uuid::new_v4();
    // Placement only
    Mock::given(method("GET"))
        .and(path(format!("/api/matches/{}", match_id)))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(match_body(match_id, "PLAYED", Some(0), Some(3))),
        )
        .expect(2)
        .mount(&server)
        .await;
    let app = setup_app(&server);

    place_bet(&app, match_id, "AWAY_WIN").await;
    place_bet(&app, match_id, "HOME_WIN").await;

    let (status, json) = send(&app, "GET", "/api/bets", None).await;

    assert_eq!(status, StatusCode::OK);
    let bets = json.as_array().unwrap();
    assert_eq!(bets.len(), 2);
    assert!(bets.iter().all(|b| b["status"] == "PENDING"));
}
