use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection},
        Path, State,
    },
    Json,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::api::errors::ApiError;
use crate::api::state::AppState;
use crate::domain::player::value_objects::PlayerId;
use crate::domain::player::Player;
use crate::domain::roster::{RosterEvent, RosterResult};
use crate::domain::session::{PlayerDraft, Session};

/// Request body carrying the entry form values
#[derive(Debug, Deserialize)]
pub struct PlayerRequest {
    pub name: String,
    pub rating: i64,
}

/// A rostered player with its current position
#[derive(Debug, Serialize)]
pub struct PlayerResponse {
    pub id: Uuid,
    pub index: usize,
    pub name: String,
    pub rating: u8,
}

impl PlayerResponse {
    fn new(index: usize, player: &Player) -> Self {
        Self {
            id: player.id().as_uuid(),
            index,
            name: player.name().to_string(),
            rating: player.rating().value(),
        }
    }
}

/// Entry form values
#[derive(Debug, Serialize)]
pub struct DraftResponse {
    pub name: String,
    pub rating: i64,
}

impl From<&PlayerDraft> for DraftResponse {
    fn from(draft: &PlayerDraft) -> Self {
        Self {
            name: draft.name.clone(),
            rating: draft.rating,
        }
    }
}

/// Roster state returned by every roster route
///
/// `rejected` is set when the requested operation was ignored; the rest
/// of the body is then the unchanged state.
#[derive(Debug, Serialize)]
pub struct RosterResponse {
    pub players: Vec<PlayerResponse>,
    pub editing: Option<usize>,
    pub draft: DraftResponse,
    pub rejected: Option<String>,
}

impl RosterResponse {
    fn new(session: &Session, rejected: Option<String>) -> Self {
        let roster = session.roster();
        Self {
            players: roster
                .players()
                .iter()
                .enumerate()
                .map(|(index, player)| PlayerResponse::new(index, player))
                .collect(),
            editing: roster.editing_index(),
            draft: DraftResponse::from(session.draft()),
            rejected,
        }
    }
}

fn respond(session: &Session, outcome: RosterResult<RosterEvent>) -> Json<RosterResponse> {
    let rejected = match outcome {
        Ok(event) => {
            log_event(&event);
            None
        }
        Err(e) => {
            tracing::debug!("Roster operation ignored: {}", e);
            Some(e.to_string())
        }
    };

    Json(RosterResponse::new(session, rejected))
}

fn log_event(event: &RosterEvent) {
    match event {
        RosterEvent::PlayerAdded { player_id, index } => {
            tracing::info!("Player {} added at position {}", player_id, index)
        }
        RosterEvent::PlayerUpdated { player_id, index } => {
            tracing::info!("Player {} updated at position {}", player_id, index)
        }
        RosterEvent::PlayerRemoved { player_id, index } => {
            tracing::info!("Player {} removed from position {}", player_id, index)
        }
        RosterEvent::EditStarted { player_id, index } => {
            tracing::debug!("Editing player {} at position {}", player_id, index)
        }
        RosterEvent::RosterCleared { removed } => {
            tracing::info!("Roster cleared ({} players removed)", removed)
        }
    }
}

/// Current roster, edit target and entry form
///
/// GET /api/players
pub async fn list_players(State(state): State<AppState>) -> Result<Json<RosterResponse>, ApiError> {
    let session = state.sessions.snapshot().await;
    Ok(Json(RosterResponse::new(&session, None)))
}

/// Add a player, or update the one under edit
///
/// POST /api/players
pub async fn submit_player(
    State(state): State<AppState>,
    payload: Result<Json<PlayerRequest>, JsonRejection>,
) -> Result<Json<RosterResponse>, ApiError> {
    let Json(req) = payload?;
    let mut session = state.sessions.acquire().await;
    let outcome = session.submit_player(&req.name, req.rating);
    Ok(respond(&session, outcome))
}

/// Replace the player at a position
///
/// PUT /api/players/:index
pub async fn update_player(
    State(state): State<AppState>,
    index: Result<Path<usize>, PathRejection>,
    payload: Result<Json<PlayerRequest>, JsonRejection>,
) -> Result<Json<RosterResponse>, ApiError> {
    let Path(index) = index?;
    let Json(req) = payload?;
    let mut session = state.sessions.acquire().await;
    let outcome = session.update_player(index, &req.name, req.rating);
    Ok(respond(&session, outcome))
}

/// Load the player at a position into the entry form
///
/// POST /api/players/:index/edit
pub async fn edit_player(
    State(state): State<AppState>,
    index: Result<Path<usize>, PathRejection>,
) -> Result<Json<RosterResponse>, ApiError> {
    let Path(index) = index?;
    let mut session = state.sessions.acquire().await;
    let outcome = session.edit_player(index);
    Ok(respond(&session, outcome))
}

/// Remove the player at a position
///
/// DELETE /api/players/:index
pub async fn delete_player(
    State(state): State<AppState>,
    index: Result<Path<usize>, PathRejection>,
) -> Result<Json<RosterResponse>, ApiError> {
    let Path(index) = index?;
    let mut session = state.sessions.acquire().await;
    let outcome = session.delete_player(index);
    Ok(respond(&session, outcome))
}

/// Remove a player by its stable id
///
/// DELETE /api/players/id/:id
pub async fn delete_player_by_id(
    State(state): State<AppState>,
    id: Result<Path<Uuid>, PathRejection>,
) -> Result<Json<RosterResponse>, ApiError> {
    let Path(id) = id?;
    let mut session = state.sessions.acquire().await;
    let outcome = session.delete_player_by_id(PlayerId::from_uuid(id));
    Ok(respond(&session, outcome))
}

/// Empty the roster, the teams and the entry form
///
/// DELETE /api/players
pub async fn clear_players(State(state): State<AppState>) -> Result<Json<RosterResponse>, ApiError> {
    let mut session = state.sessions.acquire().await;
    let event = session.clear_players();
    Ok(respond(&session, Ok(event)))
}
