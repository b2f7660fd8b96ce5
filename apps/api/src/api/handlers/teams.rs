use axum::{extract::State, Json};
use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use crate::api::errors::ApiError;
use crate::api::state::AppState;
use crate::domain::player::Player;
use crate::domain::session::Session;

/// A player as placed on a team
#[derive(Debug, Serialize)]
pub struct TeamMemberResponse {
    pub id: Uuid,
    pub name: String,
    pub rating: u8,
}

impl From<&Player> for TeamMemberResponse {
    fn from(player: &Player) -> Self {
        Self {
            id: player.id().as_uuid(),
            name: player.name().to_string(),
            rating: player.rating().value(),
        }
    }
}

/// The last computed split
#[derive(Debug, Serialize)]
pub struct TeamSplitResponse {
    pub team_a: Vec<TeamMemberResponse>,
    pub team_b: Vec<TeamMemberResponse>,
    pub sum_a: u32,
    pub sum_b: u32,
    pub divided_at: Option<DateTime<Utc>>,
}

impl From<&Session> for TeamSplitResponse {
    fn from(session: &Session) -> Self {
        let teams = session.teams();
        Self {
            team_a: teams.team_a().iter().map(TeamMemberResponse::from).collect(),
            team_b: teams.team_b().iter().map(TeamMemberResponse::from).collect(),
            sum_a: teams.sum_a(),
            sum_b: teams.sum_b(),
            divided_at: session.divided_at(),
        }
    }
}

/// Get the last computed split
///
/// GET /api/teams
pub async fn get_teams(State(state): State<AppState>) -> Result<Json<TeamSplitResponse>, ApiError> {
    let session = state.sessions.snapshot().await;
    Ok(Json(TeamSplitResponse::from(&session)))
}

/// Divide the current roster into two teams
///
/// POST /api/teams/divide
pub async fn divide_teams(
    State(state): State<AppState>,
) -> Result<Json<TeamSplitResponse>, ApiError> {
    let mut session = state.sessions.acquire().await;
    let split = session.divide_teams();
    tracing::info!(
        "Divided {} players: team A {} ({} pts), team B {} ({} pts)",
        split.len(),
        split.team_a().len(),
        split.sum_a(),
        split.team_b().len(),
        split.sum_b()
    );

    Ok(Json(TeamSplitResponse::from(&**session)))
}

/// Reset the split, leaving the roster alone
///
/// DELETE /api/teams
pub async fn clear_teams(State(state): State<AppState>) -> Result<Json<TeamSplitResponse>, ApiError> {
    let mut session = state.sessions.acquire().await;
    session.clear_teams();
    tracing::info!("Teams cleared");

    Ok(Json(TeamSplitResponse::from(&**session)))
}
