//! Game sessions: terminal states and serialized access.
//!
//! A [`GameSession`] wraps one [`BoardState`] with a [`RuleSet`] and tracks
//! whether the game has ended. [`SessionManager`] keeps many sessions behind
//! one lock so that concurrent callers cannot interleave a turn.

use crate::board::{BoardSnapshot, BoardState, Placement};
use crate::cell::Cell;
use crate::error::{PlacementError, SessionError};
use crate::rules::{RuleSet, check_winner, is_full};
use crate::types::PlayerKind;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use tracing::{debug, info, instrument, warn};

/// Unique identifier for a game session.
pub type SessionId = String;

/// Current status of a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    /// Moves are accepted.
    InProgress,
    /// A player completed a line.
    Won {
        /// Player holding the line.
        winner: PlayerKind,
        /// The completed line.
        line: [Cell; 3],
    },
    /// The board filled with no completed line.
    Draw,
}

impl GameStatus {
    /// Returns true for `Won` and `Draw`.
    pub fn is_over(&self) -> bool {
        !matches!(self, GameStatus::InProgress)
    }
}

impl std::fmt::Display for GameStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GameStatus::InProgress => write!(f, "In progress"),
            GameStatus::Won { winner, line } => {
                write!(f, "{} wins with {}, {}, {}", winner, line[0], line[1], line[2])
            }
            GameStatus::Draw => write!(f, "Draw"),
        }
    }
}

/// One game: a board, the rules applied to it, and its status.
#[derive(Debug, Clone)]
pub struct GameSession {
    board: BoardState,
    rules: RuleSet,
    status: GameStatus,
}

impl GameSession {
    /// Creates a fresh session.
    #[instrument]
    pub fn new(rules: RuleSet) -> Self {
        Self {
            board: BoardState::new(),
            rules,
            status: GameStatus::InProgress,
        }
    }

    /// Places the current player's piece, then applies the rules.
    ///
    /// # Errors
    ///
    /// [`PlacementError::GameAlreadyOver`] once the session is terminal,
    /// otherwise whatever [`BoardState::place_at`] reports. No state changes on
    /// any error.
    #[instrument(skip(self), fields(rules = %self.rules))]
    pub fn place_at(&mut self, cell: Cell) -> Result<Placement, PlacementError> {
        if self.status.is_over() {
            warn!(%cell, status = %self.status, "Placement after game over");
            return Err(PlacementError::GameAlreadyOver);
        }

        let placement = self.board.place_at(cell)?;
        self.update_status();
        Ok(placement)
    }

    fn update_status(&mut self) {
        if !self.rules.detects_lines() {
            return;
        }
        if let Some((winner, line)) = check_winner(&self.board) {
            info!(%winner, "Game won");
            self.status = GameStatus::Won { winner, line };
        } else if is_full(&self.board) {
            info!("Game drawn");
            self.status = GameStatus::Draw;
        }
    }

    /// Starts over with an empty board and the same rules.
    #[instrument(skip(self))]
    pub fn restart(&mut self) {
        info!(rules = %self.rules, "Restarting session");
        self.board.reset();
        self.status = GameStatus::InProgress;
    }

    /// Returns the board.
    pub fn board(&self) -> &BoardState {
        &self.board
    }

    /// Returns the active rules.
    pub fn rules(&self) -> RuleSet {
        self.rules
    }

    /// Returns the status.
    pub fn status(&self) -> GameStatus {
        self.status
    }
}

impl Default for GameSession {
    fn default() -> Self {
        Self::new(RuleSet::default())
    }
}

/// Manages many sessions behind one lock.
///
/// Every placement runs while the lock is held, so reading the player to move
/// and recording the piece happen as one step.
#[derive(Debug, Clone, Default)]
pub struct SessionManager {
    sessions: Arc<Mutex<HashMap<SessionId, GameSession>>>,
}

impl SessionManager {
    /// Creates an empty manager.
    #[instrument]
    pub fn new() -> Self {
        info!("Creating session manager");
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, HashMap<SessionId, GameSession>> {
        // place_at mutates only after every check passes, so a poisoned map
        // still holds consistent boards.
        self.sessions.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Creates a new session.
    ///
    /// # Errors
    ///
    /// [`SessionError::AlreadyExists`] if the ID is taken.
    #[instrument(skip(self))]
    pub fn create_session(&self, id: SessionId, rules: RuleSet) -> Result<SessionId, SessionError> {
        let mut sessions = self.lock();

        if sessions.contains_key(&id) {
            warn!(session_id = %id, "Session already exists");
            return Err(SessionError::AlreadyExists(id));
        }

        sessions.insert(id.clone(), GameSession::new(rules));
        info!(session_id = %id, "Created new session");
        Ok(id)
    }

    /// Places a piece in the given session while holding the lock.
    ///
    /// # Errors
    ///
    /// [`SessionError::NotFound`] for an unknown ID, or
    /// [`SessionError::Placement`] if the placement is rejected.
    #[instrument(skip(self))]
    pub fn place_at(&self, session_id: &str, cell: Cell) -> Result<Placement, SessionError> {
        let mut sessions = self.lock();
        let session = sessions
            .get_mut(session_id)
            .ok_or_else(|| SessionError::NotFound(session_id.to_string()))?;

        Ok(session.place_at(cell)?)
    }

    /// Returns a copy of the session's board state.
    #[instrument(skip(self))]
    pub fn snapshot(&self, session_id: &str) -> Result<BoardSnapshot, SessionError> {
        let sessions = self.lock();
        sessions
            .get(session_id)
            .map(|s| s.board().snapshot())
            .ok_or_else(|| {
                debug!(session_id, "Session not found");
                SessionError::NotFound(session_id.to_string())
            })
    }

    /// Returns the session's status.
    #[instrument(skip(self))]
    pub fn status(&self, session_id: &str) -> Result<GameStatus, SessionError> {
        self.lock()
            .get(session_id)
            .map(GameSession::status)
            .ok_or_else(|| SessionError::NotFound(session_id.to_string()))
    }

    /// Restarts the session with an empty board.
    #[instrument(skip(self))]
    pub fn restart(&self, session_id: &str) -> Result<(), SessionError> {
        let mut sessions = self.lock();
        let session = sessions
            .get_mut(session_id)
            .ok_or_else(|| SessionError::NotFound(session_id.to_string()))?;
        session.restart();
        Ok(())
    }

    /// Removes a session, returning its final state.
    #[instrument(skip(self))]
    pub fn remove_session(&self, session_id: &str) -> Result<GameSession, SessionError> {
        let removed = self.lock().remove(session_id);
        match removed {
            Some(session) => {
                info!(session_id, "Removed session");
                Ok(session)
            }
            None => Err(SessionError::NotFound(session_id.to_string())),
        }
    }

    /// Lists all session IDs, sorted.
    #[instrument(skip(self))]
    pub fn list_sessions(&self) -> Vec<SessionId> {
        let mut ids: Vec<_> = self.lock().keys().cloned().collect();
        ids.sort();
        debug!(count = ids.len(), "Listed sessions");
        ids
    }
}
