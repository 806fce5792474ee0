//! Route handling.
//!
//! A route signal is a page name plus an optional parameter, usually taken
//! from a URL hash such as `#board/<id>`. [`Navigator`] turns it into the
//! store's current-board pointer and clears the search filter whenever the
//! shown board changes.

use crate::{
    domain::BoardId,
    error::{KanbanError, Result},
    store::Store,
};
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Route {
    #[default]
    Boards,
    Board(BoardId),
    Settings,
}

impl Route {
    /// Interprets a page name and optional parameter
    pub fn parse(page: &str, param: Option<&str>) -> Result<Self> {
        let param = param.map(str::trim).filter(|p| !p.is_empty());
        match (page.trim(), param) {
            ("" | "boards", _) => Ok(Self::Boards),
            ("settings", _) => Ok(Self::Settings),
            ("board", Some(id)) => Ok(Self::Board(BoardId::from(id))),
            ("board", None) => Err(KanbanError::InvalidRoute(
                "board page requires an id".to_string(),
            )),
            (other, _) => Err(KanbanError::InvalidRoute(other.to_string())),
        }
    }

    /// Interprets a URL hash (`#page/param`). Empty or unusable hashes lead
    /// to the boards list.
    pub fn from_hash(hash: &str) -> Self {
        let hash = hash.strip_prefix('#').unwrap_or(hash);
        let mut parts = hash.split('/');
        let page = parts.next().unwrap_or_default();
        let param = parts.next();

        Self::parse(page, param).unwrap_or_else(|err| {
            tracing::warn!(%hash, error = %err, "Unusable route, showing boards list");
            Self::Boards
        })
    }

    pub fn page(&self) -> &'static str {
        match self {
            Self::Boards => "boards",
            Self::Board(_) => "board",
            Self::Settings => "settings",
        }
    }

    pub fn board_id(&self) -> Option<&BoardId> {
        match self {
            Self::Board(id) => Some(id),
            _ => None,
        }
    }

    /// URL hash for this route, without the leading `#`
    pub fn to_hash(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Board(id) => write!(f, "board/{}", id),
            other => write!(f, "{}", other.page()),
        }
    }
}

/// Result of applying a route
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavigationOutcome {
    /// The route is now shown
    Shown(Route),
    /// The requested board does not exist; the boards list is shown instead
    BoardNotFound { requested: BoardId },
}

/// Keeps the shown route and the store's current board in step
#[derive(Debug, Clone, Default)]
pub struct Navigator {
    current: Route,
}

impl Navigator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current_route(&self) -> &Route {
        &self.current
    }

    /// Resets the store and applies the initial route (the boards list when
    /// there is none)
    pub fn start(&mut self, store: &mut Store, initial_hash: Option<&str>) -> NavigationOutcome {
        store.reset();
        self.current = Route::Boards;
        let route = initial_hash.map(Route::from_hash).unwrap_or_default();
        self.navigate(store, route)
    }

    /// Applies a route signal
    pub fn navigate(&mut self, store: &mut Store, route: Route) -> NavigationOutcome {
        let same_board = matches!(
            (&self.current, &route),
            (Route::Board(shown), Route::Board(requested)) if shown == requested
        );
        if !same_board {
            store.set_filter_query("");
        }

        match route {
            Route::Board(board_id) if store.board(&board_id).is_none() => {
                tracing::warn!(%board_id, "Board not found, showing boards list");
                store.set_current_board(None);
                self.current = Route::Boards;
                NavigationOutcome::BoardNotFound {
                    requested: board_id,
                }
            }
            Route::Board(board_id) => {
                store.set_current_board(Some(board_id.clone()));
                self.current = Route::Board(board_id);
                NavigationOutcome::Shown(self.current.clone())
            }
            other => {
                store.set_current_board(None);
                self.current = other;
                NavigationOutcome::Shown(self.current.clone())
            }
        }
    }

    /// Applies a raw URL hash
    pub fn hash_changed(&mut self, store: &mut Store, hash: &str) -> NavigationOutcome {
        self.navigate(store, Route::from_hash(hash))
    }

    /// Deletes a board and follows the store's reassignment of the current
    /// board. Returns the new route when the shown route changed.
    pub fn delete_board(&mut self, store: &mut Store, board_id: &BoardId) -> Option<Route> {
        if !store.delete_board(board_id) {
            return None;
        }
        if self.current.board_id() != Some(board_id) {
            return None;
        }

        let route = match store.current_board_id() {
            Some(next) => Route::Board(next.clone()),
            None => Route::Boards,
        };
        self.navigate(store, route.clone());
        Some(route)
    }
}
