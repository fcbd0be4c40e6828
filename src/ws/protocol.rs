//! WebSocket protocol message definitions
//! These are the wire types for client-server communication, including the
//! masked and unmasked projections of game state.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::game::board::{BoardStatus, LetterSlot, PointAdjustmentReason, TileStatus};
use crate::game::round::RoundStatus;
use crate::game::scoring::PointSchedule;
use crate::game::GameParameters;
use crate::words::AnswerListType;

/// Messages sent from client to server (named remote calls)
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ClientMsg {
    CreateRoom,

    /// Subscribe this connection to a room's push feed
    JoinRoom { room_code: String },

    RegisterAlias { room_code: String, alias: String },

    /// Elevate this connection to admin rights (token from server config)
    RegisterAdmin { room_code: String, token: String },

    /// Watch-only connection; receives masked state and chat
    RegisterSpectator { room_code: String },

    ToggleReady { room_code: String, ready: bool },

    VoteToStart { room_code: String },

    PlayGuess {
        room_code: String,
        guess: String,
        /// Client's expected 1-based guess number, rejected when stale
        guess_number: usize,
    },

    SuggestGuess { room_code: String },

    GiveUp { room_code: String },

    RevealAbsentLetter { room_code: String },

    RevealPresentLetter { room_code: String },

    LogOut { room_code: String },

    SendChat { room_code: String, message: String },

    Typing { room_code: String },

    StopTyping { room_code: String },

    // Admin-gated operations
    KickPlayer { room_code: String, alias: String },

    DisconnectPlayer { room_code: String, alias: String },

    HardReset { room_code: String },

    UpdateGuessTimeLimit { room_code: String, seconds: u64 },

    UpdateMaxGuesses { room_code: String, max_guesses: usize },

    UpdateAnswerList {
        room_code: String,
        list_type: AnswerListType,
    },

    AddBot {
        room_code: String,
        personality: Option<String>,
    },

    // Read-only queries
    GetRoomList,

    GetRoundState { room_code: String },

    GetGameParameters { room_code: String },

    GetPointSchedule,

    GetPlayerBoard { room_code: String },

    GetChatHistory { room_code: String },

    /// Ping for latency measurement
    Ping { t: u64 },
}

/// Messages pushed from server to client
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ServerMsg {
    /// Welcome message after connection
    Welcome {
        connection_id: Uuid,
        server_time: u64,
    },

    RoomCreated { room_code: String },

    AliasRegistered { player: PlayerView },

    AdminRegistered { room_code: String },

    /// Full projection: answer and letters included. Sent to players whose
    /// board is finished, to admins, and to everyone once the round ends.
    RoundState { state: RoundStateView },

    /// Reduced projection for everyone still guessing (and spectators)
    MaskedRoundState { state: MaskedRoundStateView },

    /// The caller's own (unmasked) board after a play
    BoardUpdated { board: BoardView },

    NewRoundStarted { room_code: String },

    GameParametersUpdated { params: GameParameters },

    SuggestedGuess { word: Option<String> },

    PlayerBoard { board: Option<BoardView> },

    PointSchedule { schedule: PointSchedule },

    ChatMessage { message: ChatMessage },

    ChatHistory { messages: Vec<ChatMessage> },

    Typing { alias: String },

    StoppedTyping { alias: String },

    RoomList { rooms: Vec<RoomSummary> },

    Error { code: String, message: String },

    Pong { t: u64 },
}

// ============================================================================
// State projections
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TileView {
    pub letter: char,
    pub position: usize,
    pub status: TileStatus,
    pub status_hash: String,
}

/// Tile with the letter withheld; the hash lets clients recognize tiles
/// they have already been shown
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MaskedTileView {
    pub position: usize,
    pub status: TileStatus,
    pub status_hash: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PointAdjustmentView {
    pub reason: PointAdjustmentReason,
    pub points: i32,
    pub description: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RowView {
    pub tiles: Vec<TileView>,
    pub is_correct: bool,
    pub errors: Vec<String>,
    pub played_at: u64,
    pub guess_number: usize,
    pub played_order: Option<usize>,
    pub points_awarded: i32,
    pub adjustments: Vec<PointAdjustmentView>,
    pub was_forced: bool,
    pub word_hash: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MaskedRowView {
    pub tiles: Vec<MaskedTileView>,
    pub is_correct: bool,
    pub played_at: u64,
    pub guess_number: usize,
    pub played_order: Option<usize>,
    pub points_awarded: i32,
    pub adjustments: Vec<PointAdjustmentView>,
    pub was_forced: bool,
    pub word_hash: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BoardView {
    pub rows: Vec<RowView>,
    pub status: BoardStatus,
    pub solved_order: Option<usize>,
    pub points: i32,
    pub current_row_points: i32,
    pub rank: usize,
    pub is_joint_rank: bool,
    pub completion_ms: Option<u64>,
    pub correct_letters: Vec<LetterSlot>,
    pub present_letters: Vec<LetterSlot>,
    pub absent_letters: Vec<char>,
    pub present_letter_counts: HashMap<char, usize>,
    pub letter_statuses: HashMap<char, TileStatus>,
    pub deadlines: Vec<u64>,
    pub next_guess_deadline: Option<u64>,
    pub current_expected_guess_count: usize,
    pub guess_time_limit_ms: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MaskedBoardView {
    pub rows: Vec<MaskedRowView>,
    pub status: BoardStatus,
    pub solved_order: Option<usize>,
    pub points: i32,
    pub current_row_points: i32,
    pub rank: usize,
    pub is_joint_rank: bool,
    pub completion_ms: Option<u64>,
    pub deadlines: Vec<u64>,
    pub next_guess_deadline: Option<u64>,
    pub current_expected_guess_count: usize,
    pub guess_time_limit_ms: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlayerView {
    pub alias: String,
    pub is_bot: bool,
    pub points: i32,
    pub rank: usize,
    pub is_joint_rank: bool,
    pub is_connected: bool,
    pub ready: bool,
    pub board: Option<BoardView>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MaskedPlayerView {
    pub alias: String,
    pub is_bot: bool,
    pub points: i32,
    pub rank: usize,
    pub is_joint_rank: bool,
    pub is_connected: bool,
    pub ready: bool,
    pub board: Option<MaskedBoardView>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RoundStateView {
    pub status: RoundStatus,
    pub players: Vec<PlayerView>,
    pub word_length: usize,
    pub max_guesses: usize,
    pub answer: Option<String>,
    pub start_time: Option<u64>,
    pub end_time: Option<u64>,
    pub round_number: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MaskedRoundStateView {
    pub status: RoundStatus,
    pub players: Vec<MaskedPlayerView>,
    pub word_length: usize,
    pub max_guesses: usize,
    pub start_time: Option<u64>,
    pub end_time: Option<u64>,
    pub round_number: u32,
}

// ============================================================================
// Room listing and chat
// ============================================================================

#[derive(Debug, Clone, Serialize)]
pub struct RoomSummary {
    pub room_code: String,
    pub created_on: DateTime<Utc>,
    pub round_number: u32,
    pub current_round_status: RoundStatus,
    pub players: Vec<String>,
    pub admin_alias: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ChatMessage {
    pub alias: String,
    pub message: String,
    pub sent_at: u64,
    pub is_bot: bool,
}
