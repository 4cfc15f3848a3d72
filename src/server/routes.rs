//! Player HTTP routes
//!
//! | Method | Path | Handler |
//! |---|---|---|
//! | GET | `/players/` | list every player |
//! | POST | `/players/` | create a player |
//! | GET | `/players/{id}` | fetch one player |
//! | PUT | `/players/{id}` | partial update |
//! | DELETE | `/players/{id}` | delete |
//! | GET | `/players/team/{team}` | players on a team |
//!
//! Malformed IDs and bodies are rejected with 422 before storage is touched.

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use serde_json::{json, Value};

use crate::service::PlayerService;
use crate::storage::{DeleteConfirmation, NewPlayer, Player, PlayerUpdate};
use crate::{PlayerError, PlayerId, Result};

/// Create player routes
pub fn player_routes(service: PlayerService) -> Router {
    Router::new()
        .route("/players", get(list_players_handler).post(create_player_handler))
        .route("/players/", get(list_players_handler).post(create_player_handler))
        .route(
            "/players/:id",
            get(get_player_handler)
                .put(update_player_handler)
                .delete(delete_player_handler),
        )
        .route("/players/team/:team", get(get_players_by_team_handler))
        .with_state(service)
}

/// Liveness probe
pub fn health_routes() -> Router {
    Router::new().route("/health", get(health_handler))
}

async fn health_handler() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}

fn parse_id(raw: &str) -> Result<PlayerId> {
    raw.parse()
}

fn body<T>(payload: std::result::Result<Json<T>, JsonRejection>) -> Result<T> {
    payload
        .map(|Json(value)| value)
        .map_err(|rejection| PlayerError::validation(rejection.body_text()))
}

async fn list_players_handler(State(service): State<PlayerService>) -> Result<Json<Vec<Player>>> {
    Ok(Json(service.list_players().await?))
}

async fn get_player_handler(
    State(service): State<PlayerService>,
    Path(id): Path<String>,
) -> Result<Json<Player>> {
    let id = parse_id(&id)?;
    Ok(Json(service.get_player(id).await?))
}

async fn get_players_by_team_handler(
    State(service): State<PlayerService>,
    Path(team): Path<String>,
) -> Result<Json<Vec<Player>>> {
    Ok(Json(service.get_players_by_team(&team).await?))
}

async fn create_player_handler(
    State(service): State<PlayerService>,
    payload: std::result::Result<Json<NewPlayer>, JsonRejection>,
) -> Result<(StatusCode, Json<Player>)> {
    let player = body(payload)?;
    let created = service.create_player(player).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

async fn update_player_handler(
    State(service): State<PlayerService>,
    Path(id): Path<String>,
    payload: std::result::Result<Json<PlayerUpdate>, JsonRejection>,
) -> Result<Json<Player>> {
    let id = parse_id(&id)?;
    let update = body(payload)?;
    Ok(Json(service.update_player(id, update).await?))
}

async fn delete_player_handler(
    State(service): State<PlayerService>,
    Path(id): Path<String>,
) -> Result<Json<DeleteConfirmation>> {
    let id = parse_id(&id)?;
    Ok(Json(service.delete_player(id).await?))
}
