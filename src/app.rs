use crate::routes::{self, Route};
use crate::state::app_settings::AppSettings;
use crate::state::app_state::AppState;
use chrono::Local;
use log::{info, warn};
use tournament_api::{Fetched, TournamentId};

pub struct App {
    pub settings: AppSettings,
    pub state: AppState,
}

impl App {
    pub fn new(settings: AppSettings) -> Self {
        Self { settings, state: AppState::new() }
    }

    // -----------------------------------------------------------------------
    // Routing
    // -----------------------------------------------------------------------

    /// Resolve `input` through the route table. Returns the tournament to
    /// load when the route lands on the tournament view.
    pub fn navigate(&mut self, input: &str) -> Option<TournamentId> {
        let route = routes::resolve(input);
        self.state.route = route.clone();
        match route {
            Route::Tournament { id } => {
                info!("navigating to {}", self.state.route.to_path());
                self.state.last_error = None;
                self.state.tournament.switch_to(id.clone());
                Some(id)
            }
            Route::Index | Route::NotFound => {
                warn!("no route matches {input:?}");
                self.state.tournament = Default::default();
                self.state.last_error = Some(format!("No page found for {input:?}"));
                None
            }
        }
    }

    pub fn current_tournament(&self) -> Option<TournamentId> {
        self.state.tournament.id.clone()
    }

    pub fn open_route_prompt(&mut self) {
        self.state.route_prompt = Some(String::new());
    }

    pub fn route_prompt_push(&mut self, c: char) {
        if let Some(prompt) = self.state.route_prompt.as_mut() {
            prompt.push(c);
        }
    }

    pub fn route_prompt_backspace(&mut self) {
        if let Some(prompt) = self.state.route_prompt.as_mut() {
            prompt.pop();
        }
    }

    pub fn cancel_route_prompt(&mut self) {
        self.state.route_prompt = None;
    }

    /// Close the prompt and navigate to whatever was typed.
    pub fn submit_route_prompt(&mut self) -> Option<TournamentId> {
        let input = self.state.route_prompt.take()?;
        self.navigate(&input)
    }

    // -----------------------------------------------------------------------
    // Network response handlers — called from main_ui_loop
    // -----------------------------------------------------------------------

    /// Responses for a tournament the user already navigated away from are
    /// dropped.
    pub fn on_tournament_loaded(&mut self, id: TournamentId, fetched: Fetched) {
        if !self.state.tournament.is_current(&id) {
            return;
        }
        self.state.last_error = None;
        self.state.tournament.fetched = Some(fetched);
        self.state.tournament.last_updated = Some(Local::now().format("%H:%M:%S").to_string());
    }

    pub fn on_error(&mut self, id: TournamentId, message: String) {
        if !self.state.tournament.is_current(&id) {
            return;
        }
        self.state.last_error = Some(message);
    }

    // -----------------------------------------------------------------------
    // View toggles
    // -----------------------------------------------------------------------

    pub fn scroll_down(&mut self) {
        self.state.tournament.scroll_offset = self.state.tournament.scroll_offset.saturating_add(1);
    }

    pub fn scroll_up(&mut self) {
        self.state.tournament.scroll_offset = self.state.tournament.scroll_offset.saturating_sub(1);
    }

    /// Clamp scrolling once the renderer knows how many lines fit.
    pub fn clamp_scroll(&mut self, max_offset: u16) {
        self.state.tournament.scroll_offset = self.state.tournament.scroll_offset.min(max_offset);
    }

    pub fn toggle_raw_view(&mut self) {
        self.state.tournament.raw_view = !self.state.tournament.raw_view;
        self.state.tournament.scroll_offset = 0;
    }

    pub fn toggle_show_logs(&mut self) {
        self.state.show_logs = !self.state.show_logs;
    }

    pub fn toggle_full_screen(&mut self) {
        self.settings.full_screen = !self.settings.full_screen;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use tournament_api::{EndpointKind, TournamentData};

    fn fetched(name: &str) -> Fetched {
        Fetched {
            endpoint: EndpointKind::Screen,
            data: TournamentData::new(json!({ "name": name })),
        }
    }

    #[test]
    fn test_navigate_index_lands_on_default_tournament() {
        let mut app = App::new(AppSettings::default());
        assert_eq!(app.navigate("/"), Some(TournamentId::from(2u32)));
        assert_eq!(app.state.route.to_path(), "/tournament/2");
    }

    #[test]
    fn test_navigate_unknown_path_sets_error() {
        let mut app = App::new(AppSettings::default());
        assert_eq!(app.navigate("/players/1"), None);
        assert_eq!(app.state.route, Route::NotFound);
        assert!(app.state.last_error.is_some());
        assert!(app.current_tournament().is_none());
    }

    #[test]
    fn test_stale_responses_are_ignored() {
        let mut app = App::new(AppSettings::default());
        app.navigate("/tournament/1");
        app.navigate("/tournament/4");

        app.on_tournament_loaded(TournamentId::from(1u32), fetched("Old"));
        assert!(app.state.tournament.fetched.is_none());

        app.on_tournament_loaded(TournamentId::from(4u32), fetched("Spring Open"));
        let data = &app.state.tournament.fetched.as_ref().unwrap().data;
        assert_eq!(data.title(), Some("Spring Open"));
        assert!(app.state.tournament.last_updated.is_some());
    }

    #[test]
    fn test_error_keeps_previous_payload() {
        let mut app = App::new(AppSettings::default());
        let id = app.navigate("7").unwrap();
        app.on_tournament_loaded(id.clone(), fetched("Winter Cup"));
        app.on_error(id, "Failed to fetch tournament data. HTTP error 500".into());

        assert!(app.state.tournament.fetched.is_some());
        assert_eq!(
            app.state.last_error.as_deref(),
            Some("Failed to fetch tournament data. HTTP error 500")
        );
    }

    #[test]
    fn test_route_prompt_flow() {
        let mut app = App::new(AppSettings::default());
        app.open_route_prompt();
        for c in "/tournament/99x".chars() {
            app.route_prompt_push(c);
        }
        app.route_prompt_backspace();

        assert_eq!(app.submit_route_prompt(), Some(TournamentId::from(99u32)));
        assert!(app.state.route_prompt.is_none());

        app.open_route_prompt();
        app.cancel_route_prompt();
        assert_eq!(app.submit_route_prompt(), None);
    }

    #[test]
    fn test_scroll_is_clamped() {
        let mut app = App::new(AppSettings::default());
        for _ in 0..10 {
            app.scroll_down();
        }
        app.clamp_scroll(4);
        assert_eq!(app.state.tournament.scroll_offset, 4);
        app.toggle_raw_view();
        assert_eq!(app.state.tournament.scroll_offset, 0);
    }
}
