use crate::routes::Route;
use tournament_api::{Fetched, TournamentId};

// ---------------------------------------------------------------------------
// Tournament view state
// ---------------------------------------------------------------------------

#[derive(Debug, Default)]
pub struct TournamentState {
    /// The tournament currently routed to.
    pub id: Option<TournamentId>,
    /// Last payload received for `id`. Kept across a failed reload.
    pub fetched: Option<Fetched>,
    /// Local wall-clock time of the last successful load, `HH:MM:SS`.
    pub last_updated: Option<String>,
    pub scroll_offset: u16,
    /// Show the payload as pretty-printed JSON instead of field rows.
    pub raw_view: bool,
}

impl TournamentState {
    pub fn switch_to(&mut self, id: TournamentId) {
        let raw_view = self.raw_view;
        *self = Self { id: Some(id), raw_view, ..Self::default() };
    }

    pub fn is_current(&self, id: &TournamentId) -> bool {
        self.id.as_ref() == Some(id)
    }
}

// ---------------------------------------------------------------------------
// Top-level state
// ---------------------------------------------------------------------------

#[derive(Debug)]
pub struct AppState {
    pub route: Route,
    pub tournament: TournamentState,
    /// `Some` while the route prompt is open, holding the typed text.
    pub route_prompt: Option<String>,
    pub show_logs: bool,
    pub last_error: Option<String>,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            route: Route::Index,
            tournament: TournamentState::default(),
            route_prompt: None,
            show_logs: false,
            last_error: None,
        }
    }
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }
}
