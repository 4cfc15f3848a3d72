//! End-to-end tests: a real server on an ephemeral port, driven over HTTP

use player_directory::{
    client::PlayerApiClient,
    server::{PlayerServer, ServerConfig},
    NewPlayer, PlayerError, PlayerId, PlayerUpdate,
};
use serde_json::{json, Value};
use tempfile::TempDir;
use tokio::net::TcpListener;

async fn spawn_server() -> (TempDir, String) {
    let temp_dir = TempDir::new().unwrap();
    let config = ServerConfig::with_db_path(temp_dir.path().join("players.db"));
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    let server = PlayerServer::new(config);
    tokio::spawn(server.serve(listener, std::future::pending()));

    (temp_dir, format!("http://{}", addr))
}

fn expect_api_status(err: PlayerError, expected: u16) {
    match err {
        PlayerError::Api { status, .. } => assert_eq!(status, expected),
        other => panic!("Expected Api error with {expected}, got {other:?}"),
    }
}

#[tokio::test]
async fn test_scenario_create_update_delete() {
    let (_dir, base) = spawn_server().await;
    let http = reqwest::Client::new();

    let res = http
        .post(format!("{base}/players/"))
        .json(&json!({"name": "Ana", "age": 22, "team": "Falcons"}))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status().as_u16(), 201);
    let body: Value = res.json().await.unwrap();
    assert_eq!(body, json!({"id": 1, "name": "Ana", "age": 22, "team": "Falcons"}));

    let res = http
        .put(format!("{base}/players/1"))
        .json(&json!({"age": 23}))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status().as_u16(), 200);
    let body: Value = res.json().await.unwrap();
    assert_eq!(body, json!({"id": 1, "name": "Ana", "age": 23, "team": "Falcons"}));

    let res = http.delete(format!("{base}/players/1")).send().await.unwrap();
    assert_eq!(res.status().as_u16(), 200);
    let body: Value = res.json().await.unwrap();
    assert_eq!(body, json!({"message": "Player 1 deleted successfully"}));

    let res = http.get(format!("{base}/players/1")).send().await.unwrap();
    assert_eq!(res.status().as_u16(), 404);
    let body: Value = res.json().await.unwrap();
    assert_eq!(body, json!({"error": "Player 1 not found", "code": 404}));
}

#[tokio::test]
async fn test_list_empty_returns_array() {
    let (_dir, base) = spawn_server().await;

    for path in ["/players/", "/players"] {
        let res = reqwest::get(format!("{base}{path}")).await.unwrap();
        assert_eq!(res.status().as_u16(), 200);
        let body: Value = res.json().await.unwrap();
        assert_eq!(body, json!([]));
    }
}

#[tokio::test]
async fn test_health() {
    let (_dir, base) = spawn_server().await;

    let body: Value = reqwest::get(format!("{base}/health"))
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(body, json!({"status": "ok"}));
}

#[tokio::test]
async fn test_create_validation_errors() {
    let (_dir, base) = spawn_server().await;
    let http = reqwest::Client::new();

    let bodies = [
        json!({"name": "Ana", "team": "Falcons"}),
        json!({"name": "Ana", "age": "old", "team": "Falcons"}),
        json!({"age": 22, "team": "Falcons"}),
        // Ages must be JSON integers; floats are not coerced
        json!({"name": "Ana", "age": 22.0, "team": "Falcons"}),
    ];
    for body in bodies {
        let res = http
            .post(format!("{base}/players/"))
            .json(&body)
            .send()
            .await
            .unwrap();
        assert_eq!(res.status().as_u16(), 422, "body: {body}");
    }

    // Nothing reached storage
    let listed: Value = reqwest::get(format!("{base}/players/"))
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(listed, json!([]));
}

#[tokio::test]
async fn test_malformed_json_bodies_are_rejected() {
    let (_dir, base) = spawn_server().await;
    let http = reqwest::Client::new();

    let res = http
        .post(format!("{base}/players/"))
        .header(reqwest::header::CONTENT_TYPE, "application/json")
        .body("{bad")
        .send()
        .await
        .unwrap();
    assert_eq!(res.status().as_u16(), 422);
    let body: Value = res.json().await.unwrap();
    assert_eq!(body["code"], json!(422));

    let api = PlayerApiClient::new(&format!("{base}/players/")).unwrap();
    let created = api
        .create_player(&NewPlayer::new("Ana", 22, "Falcons"))
        .await
        .unwrap();

    let res = http
        .put(format!("{base}/players/{}", created.id))
        .json(&json!({"age": "x"}))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status().as_u16(), 422);

    let res = http
        .put(format!("{base}/players/{}", created.id))
        .header(reqwest::header::CONTENT_TYPE, "application/json")
        .body("{\"age\": ")
        .send()
        .await
        .unwrap();
    assert_eq!(res.status().as_u16(), 422);

    // The stored player is untouched
    assert_eq!(api.get_player(created.id).await.unwrap(), created);
}

#[tokio::test]
async fn test_storage_failure_returns_500_without_details() {
    let (dir, base) = spawn_server().await;

    // One successful request so the server has finished its startup
    let res = reqwest::get(format!("{base}/players/")).await.unwrap();
    assert_eq!(res.status().as_u16(), 200);

    // Replace the database file with a directory; the next open fails
    let db_path = dir.path().join("players.db");
    std::fs::remove_file(&db_path).unwrap();
    std::fs::create_dir(&db_path).unwrap();

    let res = reqwest::get(format!("{base}/players/")).await.unwrap();
    assert_eq!(res.status().as_u16(), 500);
    let body: Value = res.json().await.unwrap();
    assert_eq!(body, json!({"error": "Internal server error", "code": 500}));
}

#[tokio::test]
async fn test_non_integer_id_is_rejected() {
    let (_dir, base) = spawn_server().await;
    let http = reqwest::Client::new();

    let res = http.get(format!("{base}/players/abc")).send().await.unwrap();
    assert_eq!(res.status().as_u16(), 422);

    let res = http
        .put(format!("{base}/players/abc"))
        .json(&json!({"age": 1}))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status().as_u16(), 422);

    let res = http.delete(format!("{base}/players/1.5")).send().await.unwrap();
    assert_eq!(res.status().as_u16(), 422);
}

#[tokio::test]
async fn test_client_roundtrip() {
    let (_dir, base) = spawn_server().await;
    let api = PlayerApiClient::new(&format!("{base}/players/")).unwrap();

    let created = api
        .create_player(&NewPlayer::new("Ana", 22, "Falcons"))
        .await
        .unwrap();
    let fetched = api.get_player(created.id).await.unwrap();
    assert_eq!(fetched, created);

    assert_eq!(api.list_players().await.unwrap(), vec![created]);
}

#[tokio::test]
async fn test_client_update_single_field() {
    let (_dir, base) = spawn_server().await;
    let api = PlayerApiClient::new(&format!("{base}/players")).unwrap();

    let created = api
        .create_player(&NewPlayer::new("Ana", 22, "Falcons"))
        .await
        .unwrap();

    let updated = api
        .update_player(created.id, &PlayerUpdate::team("Hawks"))
        .await
        .unwrap();
    assert_eq!(updated.team, "Hawks");

    let fetched = api.get_player(created.id).await.unwrap();
    assert_eq!(fetched.name, "Ana");
    assert_eq!(fetched.age, 22);
    assert_eq!(fetched.team, "Hawks");
}

#[tokio::test]
async fn test_update_supplied_zero_and_empty_overwrite() {
    let (_dir, base) = spawn_server().await;
    let api = PlayerApiClient::new(&format!("{base}/players/")).unwrap();

    let created = api
        .create_player(&NewPlayer::new("Ana", 22, "Falcons"))
        .await
        .unwrap();

    let update = PlayerUpdate {
        name: Some(String::new()),
        age: Some(0),
        team: None,
    };
    let updated = api.update_player(created.id, &update).await.unwrap();
    assert_eq!(updated.name, "");
    assert_eq!(updated.age, 0);
    assert_eq!(updated.team, "Falcons");
}

#[tokio::test]
async fn test_update_missing_player_leaves_list_unchanged() {
    let (_dir, base) = spawn_server().await;
    let api = PlayerApiClient::new(&format!("{base}/players/")).unwrap();

    api.create_player(&NewPlayer::new("Ana", 22, "Falcons"))
        .await
        .unwrap();
    let before = api.list_players().await.unwrap();

    let err = api
        .update_player(PlayerId::new(99), &PlayerUpdate::age(40))
        .await
        .unwrap_err();
    expect_api_status(err, 404);

    assert_eq!(api.list_players().await.unwrap(), before);
}

#[tokio::test]
async fn test_delete_missing_player() {
    let (_dir, base) = spawn_server().await;
    let api = PlayerApiClient::new(&format!("{base}/players/")).unwrap();

    let err = api.delete_player(PlayerId::new(5)).await.unwrap_err();
    match err {
        PlayerError::Api { status, message } => {
            assert_eq!(status, 404);
            assert_eq!(message, "Player 5 not found");
        }
        other => panic!("Expected Api error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_team_filter() {
    let (_dir, base) = spawn_server().await;
    let api = PlayerApiClient::new(&format!("{base}/players/")).unwrap();

    for (name, team) in [
        ("Ana", "São Paulo"),
        ("Bia", "Hawks"),
        ("Caio", "São Paulo"),
        ("Duda", "são paulo"),
    ] {
        api.create_player(&NewPlayer::new(name, 21, team))
            .await
            .unwrap();
    }

    let members = api.get_players_by_team("São Paulo").await.unwrap();
    assert_eq!(members.len(), 2);
    assert!(members.iter().all(|p| p.team == "São Paulo"));

    let err = api.get_players_by_team("Eagles").await.unwrap_err();
    assert!(err.is_not_found());
    expect_api_status(err, 404);
}
