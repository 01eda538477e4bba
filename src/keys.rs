use crate::app::App;
use crate::state::messages::NetworkRequest;
use crossterm::event::KeyCode::Char;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::sync::Arc;
use tokio::sync::{Mutex, mpsc};

pub async fn handle_key_bindings(
    key_event: KeyEvent,
    app: &Arc<Mutex<App>>,
    network_requests: &mpsc::Sender<NetworkRequest>,
) {
    let mut guard = app.lock().await;

    if guard.state.route_prompt.is_some() {
        match (key_event.code, key_event.modifiers) {
            (Char('c'), KeyModifiers::CONTROL) => {
                crate::cleanup_terminal();
                std::process::exit(0);
            }
            (KeyCode::Esc, _) => guard.cancel_route_prompt(),
            (KeyCode::Backspace, _) => guard.route_prompt_backspace(),
            (KeyCode::Enter, _) => {
                if let Some(id) = guard.submit_route_prompt() {
                    drop(guard);
                    let _ = network_requests
                        .send(NetworkRequest::LoadTournament { id })
                        .await;
                }
            }
            (Char(c), _) => guard.route_prompt_push(c),
            _ => {}
        }
        return;
    }

    match (key_event.code, key_event.modifiers) {
        // Quit
        (Char('q'), _) | (Char('c'), KeyModifiers::CONTROL) => {
            crate::cleanup_terminal();
            std::process::exit(0);
        }

        // Reload the current tournament
        (Char('r'), _) => {
            if let Some(id) = guard.current_tournament() {
                drop(guard);
                let _ = network_requests
                    .send(NetworkRequest::LoadTournament { id })
                    .await;
            }
        }

        // Scrolling
        (Char('j') | KeyCode::Down, _) => guard.scroll_down(),
        (Char('k') | KeyCode::Up, _) => guard.scroll_up(),

        // Global
        (Char('g'), _) => guard.open_route_prompt(),
        (Char('v'), _) => guard.toggle_raw_view(),
        (Char('f'), _) => guard.toggle_full_screen(),
        (Char('"'), _) => guard.toggle_show_logs(),

        _ => {}
    }
}
