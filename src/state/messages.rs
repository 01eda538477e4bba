use crate::state::network::LoadingState;
use crossterm::event::KeyEvent;
use tournament_api::{Fetched, TournamentId};

#[derive(Debug, Clone)]
pub enum NetworkRequest {
    LoadTournament { id: TournamentId },
}

#[derive(Debug)]
pub enum NetworkResponse {
    LoadingStateChanged { loading_state: LoadingState },
    TournamentLoaded { id: TournamentId, fetched: Fetched },
    Error { id: TournamentId, message: String },
}

#[derive(Debug, Clone)]
pub enum UiEvent {
    KeyPressed(KeyEvent),
    Resize,
    AppStarted,
}
