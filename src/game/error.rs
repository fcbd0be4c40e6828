//! Typed game errors returned to callers
//!
//! Every failure carries a stable `code` so clients can branch without
//! parsing messages: validation errors leave state untouched, state
//! conflicts mean the caller should resync, permission and not-found
//! errors are rejected before any mutation.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GameError {
    #[error("word must be {0} letters")]
    WrongLength(usize),

    #[error("not in word list")]
    NotInWordList,

    #[error("alias \"{0}\" is already taken")]
    AliasTaken(String),

    #[error("guess number {client} is out of sync with server ({server}), rejecting guess")]
    GuessOutOfSync { client: usize, server: usize },

    #[error("board is already complete")]
    BoardComplete,

    #[error("{0}")]
    InvalidState(String),

    #[error("admin rights required")]
    PermissionDenied,

    #[error("room {0} does not exist")]
    RoomNotFound(String),

    #[error("no player registered on this connection")]
    NotRegistered,

    #[error("no player with alias \"{0}\"")]
    UnknownAlias(String),
}

impl GameError {
    pub fn code(&self) -> &'static str {
        match self {
            GameError::WrongLength(_)
            | GameError::NotInWordList
            | GameError::AliasTaken(_) => "validation",
            GameError::GuessOutOfSync { .. }
            | GameError::BoardComplete
            | GameError::InvalidState(_) => "state_conflict",
            GameError::PermissionDenied => "permission_denied",
            GameError::RoomNotFound(_)
            | GameError::NotRegistered
            | GameError::UnknownAlias(_) => "not_found",
        }
    }
}
