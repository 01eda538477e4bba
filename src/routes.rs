use tournament_api::TournamentId;

/// Where `/` lands.
pub const DEFAULT_TOURNAMENT_PATH: &str = "/tournament/2";

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Route {
    Index,
    Tournament { id: TournamentId },
    NotFound,
}

impl Route {
    /// Match a path against the route table without following redirects.
    pub fn from_path(path: &str) -> Self {
        let mut segments = path.split('/').filter(|s| !s.is_empty());
        match (segments.next(), segments.next(), segments.next()) {
            (None, _, _) => Self::Index,
            (Some("tournament"), Some(id), None) => Self::Tournament { id: TournamentId::from(id) },
            _ => Self::NotFound,
        }
    }

    pub fn to_path(&self) -> String {
        match self {
            Self::Index => String::from("/"),
            Self::Tournament { id } => format!("/tournament/{id}"),
            Self::NotFound => String::from("/404"),
        }
    }

    pub fn redirect(&self) -> Option<&'static str> {
        match self {
            Self::Index => Some(DEFAULT_TOURNAMENT_PATH),
            _ => None,
        }
    }
}

/// Resolve user input to a route, following the index redirect.
///
/// Input without a leading `/` is taken as a bare tournament id.
pub fn resolve(input: &str) -> Route {
    let input = input.trim();
    if !input.is_empty() && !input.starts_with('/') {
        return Route::Tournament { id: TournamentId::from(input) };
    }

    let route = Route::from_path(input);
    match route.redirect() {
        Some(target) => Route::from_path(target),
        None => route,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tournament(id: &str) -> Route {
        Route::Tournament { id: TournamentId::from(id) }
    }

    #[test]
    fn test_index_redirects_to_default_tournament() {
        assert_eq!(Route::from_path("/"), Route::Index);
        assert_eq!(resolve("/"), tournament("2"));
        assert_eq!(resolve(""), tournament("2"));
    }

    #[test]
    fn test_tournament_path() {
        assert_eq!(resolve("/tournament/17"), tournament("17"));
        assert_eq!(resolve("/tournament/17/"), tournament("17"));
        assert_eq!(resolve("/tournament/spring-open"), tournament("spring-open"));
    }

    #[test]
    fn test_bare_id() {
        assert_eq!(resolve("5"), tournament("5"));
        assert_eq!(resolve("  5 "), tournament("5"));
    }

    #[test]
    fn test_unknown_paths() {
        assert_eq!(resolve("/tournament"), Route::NotFound);
        assert_eq!(resolve("/tournament/1/extra"), Route::NotFound);
        assert_eq!(resolve("/teams/1"), Route::NotFound);
    }

    #[test]
    fn test_to_path_round_trips_through_table() {
        let route = tournament("9");
        assert_eq!(route.to_path(), "/tournament/9");
        assert_eq!(Route::from_path(&route.to_path()), route);
        assert_eq!(Route::NotFound.to_path(), "/404");
    }
}
