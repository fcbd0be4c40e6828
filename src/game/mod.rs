//! Game engine modules

pub mod board;
pub mod bot;
pub mod error;
pub mod registry;
pub mod room;
pub mod round;
pub mod scoring;

use serde::Serialize;

use crate::words::AnswerListType;

pub use error::GameError;

/// Per-room game configuration, passed down into rounds and boards
#[derive(Debug, Clone, Copy, Serialize)]
pub struct GameParameters {
    pub answer_list: AnswerListType,
    pub max_guesses: usize,
    pub guess_time_limit_secs: u64,
}

impl Default for GameParameters {
    fn default() -> Self {
        Self {
            answer_list: AnswerListType::FiveLetter,
            max_guesses: 6,
            guess_time_limit_secs: 30,
        }
    }
}

impl GameParameters {
    /// Grid width implied by the answer list (5 when the list mixes lengths)
    pub fn word_length(&self) -> usize {
        self.answer_list.word_length().unwrap_or(5)
    }

    pub fn guess_time_limit_ms(&self) -> u64 {
        self.guess_time_limit_secs * 1000
    }
}
