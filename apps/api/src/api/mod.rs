// API layer module (adapters for controllers)
// Follows Hexagonal Architecture - API is an adapter

pub mod errors;
pub mod handlers;
pub mod state;

use axum::{
    routing::{delete, get, post},
    Router,
};

use handlers::{health, players, teams};
pub use state::AppState;

/// Builds the application router without transport middleware
pub fn router(state: AppState) -> Router {
    Router::new()
        // Health check
        .route("/health", get(health::health_check))
        // Roster routes
        .route(
            "/api/players",
            get(players::list_players)
                .post(players::submit_player)
                .delete(players::clear_players),
        )
        .route(
            "/api/players/:index",
            delete(players::delete_player).put(players::update_player),
        )
        .route("/api/players/:index/edit", post(players::edit_player))
        .route("/api/players/id/:id", delete(players::delete_player_by_id))
        // Team routes
        .route("/api/teams", get(teams::get_teams).delete(teams::clear_teams))
        .route("/api/teams/divide", post(teams::divide_teams))
        .fallback(health::not_found)
        .with_state(state)
}
