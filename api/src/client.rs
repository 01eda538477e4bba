use crate::envelope::{self, ApiEnvelope, Decoded};
use crate::{EndpointKind, Fetched, TournamentData, TournamentId};
use log::{error, info, warn};
use reqwest::{Client, StatusCode};
use thiserror::Error;

pub type ApiResult<T> = Result<T, ApiError>;

pub const DEFAULT_API_HOST: &str = "https://new.buscoffeeandtea.com.vn";
const API_PREFIX: &str = "/api/v1";

/// Longest raw body excerpt carried in an HTTP status diagnostic.
const EXCERPT_LIMIT: usize = 200;
/// A bare JSON string error body is only used verbatim below this length.
const TEXT_BODY_LIMIT: usize = 500;

#[derive(Debug, Error)]
pub enum ApiError {
    /// Transport failure (DNS, refused connection, timeout, broken body).
    #[error(transparent)]
    Network(#[from] reqwest::Error),
    /// The clock endpoint answered with a non-success status.
    #[error("Failed to fetch tournament data. {details}")]
    HttpStatus { status: u16, details: String },
    /// Success status, but the body was not JSON at all.
    #[error("Malformed API response from {url}: {source}")]
    Malformed {
        url: String,
        #[source]
        source: serde_json::Error,
    },
    /// Success status, no data, but the API explained why.
    #[error("{0}")]
    Api(String),
    #[error("Malformed API response or no data field.")]
    NoData,
}

/// One candidate request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoint {
    pub kind: EndpointKind,
    pub url: String,
}

/// Fetches tournament data from the screen endpoint, falling back to the
/// clock endpoint when the screen endpoint yields nothing usable.
#[derive(Debug, Clone)]
pub struct TournamentFetcher {
    client: Client,
    base_url: String,
}

impl Default for TournamentFetcher {
    fn default() -> Self {
        Self::new(DEFAULT_API_HOST)
    }
}

impl TournamentFetcher {
    pub fn new(host: &str) -> Self {
        Self::with_client(host, Client::new())
    }

    /// Use a preconfigured client. Timeouts and headers are the client's
    /// business; the fetcher imposes none.
    pub fn with_client(host: &str, client: Client) -> Self {
        let base_url = format!("{}{API_PREFIX}", host.trim_end_matches('/'));
        Self { client, base_url }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Candidate endpoints in the order they are tried.
    pub fn endpoints(&self, id: &TournamentId) -> [Endpoint; 2] {
        [EndpointKind::Screen, EndpointKind::Clock].map(|kind| Endpoint {
            kind,
            url: format!("{}/tournaments/{id}/{}", self.base_url, kind.path_segment()),
        })
    }

    pub async fn fetch(&self, id: impl Into<TournamentId>) -> ApiResult<TournamentData> {
        self.fetch_sourced(id).await.map(|fetched| fetched.data)
    }

    /// Like [`fetch`](Self::fetch), also reporting which endpoint served the data.
    ///
    /// The screen endpoint wins whenever it returns a success status with a
    /// non-null `data` field, even an empty one. Anything else on the screen
    /// endpoint is logged and swallowed; failures on the clock endpoint are
    /// returned to the caller.
    pub async fn fetch_sourced(&self, id: impl Into<TournamentId>) -> ApiResult<Fetched> {
        let id = id.into();
        let [primary, secondary] = self.endpoints(&id);

        info!("Attempting to fetch from: {}", primary.url);
        if let Some(data) = self.try_primary(&primary).await {
            info!("Successfully fetched data from {}", primary.kind.label());
            return Ok(Fetched { endpoint: primary.kind, data });
        }

        info!(
            "{} unusable, trying {}: {}",
            primary.kind.label(),
            secondary.kind.label(),
            secondary.url
        );
        match self.fetch_secondary(&secondary).await {
            Ok(data) => {
                info!("Successfully fetched data from {}", secondary.kind.label());
                Ok(Fetched { endpoint: secondary.kind, data })
            }
            Err(e) => {
                error!("Error fetching tournament {id} from both endpoints: {e}");
                Err(e)
            }
        }
    }

    async fn try_primary(&self, endpoint: &Endpoint) -> Option<TournamentData> {
        let label = endpoint.kind.label();
        let response = match self.client.get(&endpoint.url).send().await {
            Ok(response) => response,
            Err(e) => {
                warn!("{label} request failed: {e}");
                return None;
            }
        };

        let status = response.status();
        if !status.is_success() {
            warn!("{label} returned HTTP {status}");
            return None;
        }

        let body = match response.text().await {
            Ok(body) => body,
            Err(e) => {
                warn!("{label} body could not be read: {e}");
                return None;
            }
        };

        match envelope::decode(&body) {
            Ok(Decoded::Envelope(ApiEnvelope { data: Some(data), .. })) => {
                Some(TournamentData::new(data))
            }
            Ok(_) => {
                warn!("{label} response has no data field");
                None
            }
            Err(e) => {
                warn!("{label} returned malformed JSON: {e}");
                None
            }
        }
    }

    async fn fetch_secondary(&self, endpoint: &Endpoint) -> ApiResult<TournamentData> {
        let response = self.client.get(&endpoint.url).send().await?;

        let status = response.status();
        if !status.is_success() {
            // An unreadable body only costs the excerpt.
            let body = response.text().await.ok();
            return Err(ApiError::HttpStatus {
                status: status.as_u16(),
                details: status_failure_details(status, body.as_deref()),
            });
        }

        let body = response.text().await?;
        let decoded = envelope::decode(&body).map_err(|source| ApiError::Malformed {
            url: endpoint.url.clone(),
            source,
        })?;

        match decoded.into_envelope() {
            Some(ApiEnvelope { data: Some(data), .. }) => Ok(TournamentData::new(data)),
            Some(envelope) => Err(envelope.message().map_or(ApiError::NoData, ApiError::Api)),
            None => Err(ApiError::NoData),
        }
    }
}

/// Diagnostic for a non-success status, preferring whatever the API said
/// over the raw body.
fn status_failure_details(status: StatusCode, body: Option<&str>) -> String {
    let base = format!(
        "HTTP error {}: {}",
        status.as_u16(),
        status.canonical_reason().unwrap_or_default()
    );
    let Some(body) = body else {
        return base;
    };

    match envelope::decode(body) {
        Ok(Decoded::Envelope(envelope)) => {
            if let Some(message) = envelope.message() {
                return format!("API Error: {message}");
            }
        }
        Ok(Decoded::Text(text)) => {
            if (1..TEXT_BODY_LIMIT).contains(&text.chars().count()) {
                return format!("API Error: {text}");
            }
        }
        Ok(Decoded::Other(_)) | Err(_) => {}
    }

    format!("{base}. Response: {}", excerpt(body))
}

fn excerpt(text: &str) -> String {
    match text.char_indices().nth(EXCERPT_LIMIT) {
        Some((cut, _)) => format!("{}...", &text[..cut]),
        None => text.to_owned(),
    }
}
