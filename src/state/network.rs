use crate::state::messages::{NetworkRequest, NetworkResponse};
use log::{debug, error};
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;
use tokio::sync::mpsc;
use tournament_api::TournamentId;
use tournament_api::client::TournamentFetcher;

const SPINNER_CHARS: [char; 10] = ['⠋', '⠙', '⠹', '⠸', '⠼', '⠴', '⠦', '⠧', '⠇', '⠏'];
pub const ERROR_CHAR: char = '!';

#[derive(Debug, Copy, Clone)]
pub struct LoadingState {
    pub is_loading: bool,
    pub spinner_char: char,
}

impl Default for LoadingState {
    fn default() -> Self {
        Self { is_loading: false, spinner_char: ' ' }
    }
}

pub struct NetworkWorker {
    fetcher: TournamentFetcher,
    requests: mpsc::Receiver<NetworkRequest>,
    responses: mpsc::Sender<NetworkResponse>,
    is_loading: Arc<AtomicBool>,
}

impl NetworkWorker {
    pub fn new(
        fetcher: TournamentFetcher,
        requests: mpsc::Receiver<NetworkRequest>,
        responses: mpsc::Sender<NetworkResponse>,
    ) -> Self {
        Self {
            fetcher,
            requests,
            responses,
            is_loading: Arc::new(AtomicBool::new(false)),
        }
    }

    pub async fn run(mut self) {
        while let Some(request) = self.requests.recv().await {
            self.start_loading_animation().await;

            let response = match request {
                NetworkRequest::LoadTournament { id } => self.handle_load_tournament(id).await,
            };

            debug!("network request complete");
            let is_ok = !matches!(response, NetworkResponse::Error { .. });
            self.stop_loading_animation(is_ok).await;

            if let Err(e) = self.responses.send(response).await {
                error!("Failed to send network response: {e}");
                break;
            }
        }
    }

    async fn handle_load_tournament(&self, id: TournamentId) -> NetworkResponse {
        debug!("loading tournament {id}");
        match self.fetcher.fetch_sourced(id.clone()).await {
            Ok(fetched) => NetworkResponse::TournamentLoaded { id, fetched },
            Err(err) => NetworkResponse::Error { id, message: err.to_string() },
        }
    }

    async fn start_loading_animation(&self) {
        self.is_loading.store(true, Ordering::Relaxed);

        let mut loading_state =
            LoadingState { is_loading: true, spinner_char: SPINNER_CHARS[0] };
        let _ = self
            .responses
            .send(NetworkResponse::LoadingStateChanged { loading_state })
            .await;

        let responses = self.responses.clone();
        let is_loading = self.is_loading.clone();

        tokio::spawn(async move {
            let mut spinner_index = 1;
            let mut interval = tokio::time::interval(Duration::from_millis(33));
            loop {
                interval.tick().await;
                if !is_loading.load(Ordering::Relaxed) {
                    break;
                }
                loading_state.spinner_char = SPINNER_CHARS[spinner_index];
                spinner_index = (spinner_index + 1) % SPINNER_CHARS.len();
                let _ = responses
                    .send(NetworkResponse::LoadingStateChanged { loading_state })
                    .await;
            }
        });
    }

    async fn stop_loading_animation(&self, is_ok: bool) {
        self.is_loading.store(false, Ordering::Relaxed);
        tokio::time::sleep(Duration::from_millis(15)).await;

        let spinner_char = if is_ok { ' ' } else { ERROR_CHAR };
        let _ = self
            .responses
            .send(NetworkResponse::LoadingStateChanged {
                loading_state: LoadingState { is_loading: false, spinner_char },
            })
            .await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_worker_reports_failure_as_error_response() {
        let (req_tx, req_rx) = mpsc::channel(4);
        let (resp_tx, mut resp_rx) = mpsc::channel(64);
        let worker = NetworkWorker::new(TournamentFetcher::new("http://127.0.0.1:1"), req_rx, resp_tx);
        let task = tokio::spawn(worker.run());

        req_tx
            .send(NetworkRequest::LoadTournament { id: TournamentId::from(3u32) })
            .await
            .unwrap();

        let mut last_loading = None;
        loop {
            match resp_rx.recv().await.unwrap() {
                NetworkResponse::LoadingStateChanged { loading_state } => {
                    last_loading = Some(loading_state);
                }
                NetworkResponse::Error { id, message } => {
                    assert_eq!(id.as_str(), "3");
                    assert!(!message.is_empty());
                    break;
                }
                other => panic!("unexpected response: {other:?}"),
            }
        }

        let loading = last_loading.unwrap();
        assert!(!loading.is_loading);
        assert_eq!(loading.spinner_char, ERROR_CHAR);
        task.abort();
    }
}
