//! Room orchestration: connections, timers, broadcasts
//!
//! Every mutating call takes the room's single exclusive lock around the
//! read-modify-project sequence. Outbound messages are assembled under the
//! lock and handed to per-connection outboxes only after it is released,
//! so a slow client can never stall the room. Timers and bot loops are
//! plain spawned tasks carrying the round epoch; a stale task observes a
//! mismatched epoch under the lock and does nothing.

use std::collections::{HashMap, HashSet, VecDeque};
use std::sync::Arc;
use std::time::Duration;

use chrono::{DateTime, Utc};
use parking_lot::Mutex;
use rand::Rng;
use tokio::sync::mpsc;
use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::game::bot::{self, BotBrain};
use crate::game::error::GameError;
use crate::game::round::{RoundState, RoundStatus};
use crate::game::scoring::PointSchedule;
use crate::game::GameParameters;
use crate::util::time::{sleep_until_millis, unix_millis};
use crate::words::{AnswerListType, WordCatalog};
use crate::ws::protocol::{BoardView, ChatMessage, PlayerView, RoomSummary, ServerMsg};

const START_COUNTDOWN_SECS: u64 = 5;
const CHAT_HISTORY_LIMIT: usize = 200;
const CHAT_MESSAGE_MAX_CHARS: usize = 500;

/// A connection's outbox. Sends never block: the WS session drains the
/// channel onto the socket.
#[derive(Clone)]
pub struct ConnectionHandle {
    pub id: Uuid,
    pub tx: mpsc::UnboundedSender<ServerMsg>,
}

/// Messages addressed while holding the lock, delivered after release
type Outbound = Vec<(mpsc::UnboundedSender<ServerMsg>, ServerMsg)>;

fn deliver(outbound: Outbound) {
    for (tx, msg) in outbound {
        let _ = tx.send(msg);
    }
}

pub struct Room {
    code: String,
    created_on: DateTime<Utc>,
    words: Arc<WordCatalog>,
    schedule: Arc<PointSchedule>,
    admin_token: Option<String>,
    /// Pokes the registry to rebroadcast room summaries
    summary_tx: mpsc::UnboundedSender<()>,
    inner: Mutex<RoomInner>,
}

struct RoomInner {
    round: RoundState,
    previous_rounds: Vec<RoundState>,
    params: GameParameters,
    connections: HashMap<Uuid, ConnectionHandle>,
    alias_by_connection: HashMap<Uuid, String>,
    /// First registrant; reassigned when that connection departs
    admin_connection: Option<Uuid>,
    /// Token-elevated connections; receive unmasked state
    elevated_admins: HashSet<Uuid>,
    spectators: HashSet<Uuid>,
    chat: VecDeque<ChatMessage>,
    /// Bumped on round start and hard reset; stale tasks check it
    epoch: u64,
    /// Marks the single live deadline-sweep chain
    sweep_generation: u64,
}

impl Room {
    pub fn new(
        code: String,
        params: GameParameters,
        words: Arc<WordCatalog>,
        schedule: Arc<PointSchedule>,
        admin_token: Option<String>,
        summary_tx: mpsc::UnboundedSender<()>,
    ) -> Arc<Self> {
        Arc::new(Self {
            code,
            created_on: Utc::now(),
            words,
            schedule,
            admin_token,
            summary_tx,
            inner: Mutex::new(RoomInner {
                round: RoundState::new(&params, rand::random()),
                previous_rounds: Vec::new(),
                params,
                connections: HashMap::new(),
                alias_by_connection: HashMap::new(),
                admin_connection: None,
                elevated_admins: HashSet::new(),
                spectators: HashSet::new(),
                chat: VecDeque::new(),
                epoch: 0,
                sweep_generation: 0,
            }),
        })
    }

    pub fn code(&self) -> &str {
        &self.code
    }

    pub fn summary(&self) -> RoomSummary {
        let inner = self.inner.lock();
        RoomSummary {
            room_code: self.code.clone(),
            created_on: self.created_on,
            round_number: inner.round.round_number(),
            current_round_status: inner.round.status(),
            players: inner
                .round
                .players()
                .iter()
                .map(|p| p.alias.clone())
                .collect(),
            admin_alias: inner
                .admin_connection
                .and_then(|id| inner.alias_by_connection.get(&id))
                .cloned(),
        }
    }

    pub fn player_count(&self) -> usize {
        self.inner.lock().round.players().len()
    }

    fn notify_summary(&self) {
        let _ = self.summary_tx.send(());
    }

    // Connections ------------------------------------------------------------

    /// Subscribe a connection to this room's push feed and bring it up to
    /// date with the current state.
    pub fn subscribe(&self, handle: ConnectionHandle) {
        let now = unix_millis();
        let outbound = {
            let mut inner = self.inner.lock();
            inner.connections.insert(handle.id, handle.clone());
            let params = inner.params;
            vec![
                (handle.tx.clone(), state_msg_for(&inner, handle.id, now)),
                (
                    handle.tx.clone(),
                    ServerMsg::GameParametersUpdated { params },
                ),
                (
                    handle.tx.clone(),
                    ServerMsg::ChatHistory {
                        messages: inner.chat.iter().cloned().collect(),
                    },
                ),
            ]
        };
        deliver(outbound);
    }

    pub fn register_alias(
        self: &Arc<Self>,
        handle: ConnectionHandle,
        alias: &str,
    ) -> Result<PlayerView, GameError> {
        let alias = alias.trim().to_string();
        if alias.is_empty() {
            return Err(GameError::InvalidState("alias cannot be empty".to_string()));
        }
        let now = unix_millis();

        let (view, outbound) = {
            let mut inner = self.inner.lock();
            inner.connections.insert(handle.id, handle.clone());
            inner.round.register_player(&alias, handle.id, now)?;

            // This connection speaks for this alias now; drop stale mappings.
            inner.alias_by_connection.retain(|_, a| a != &alias);
            inner.alias_by_connection.insert(handle.id, alias.clone());
            if inner.admin_connection.is_none() {
                inner.admin_connection = Some(handle.id);
            }

            // A late joiner's staggered deadlines become new sweep targets.
            if inner.round.status() == RoundStatus::Playing {
                self.arm_guess_sweep(&mut inner);
            }

            let view = inner
                .round
                .player(&alias)
                .map(|p| p.view(now))
                .ok_or_else(|| GameError::UnknownAlias(alias.clone()))?;
            (view, round_state_outbound(&inner, now))
        };

        info!(room_code = %self.code, alias = %view.alias, "player registered");
        deliver(outbound);
        self.notify_summary();
        Ok(view)
    }

    pub fn register_admin(
        &self,
        handle: ConnectionHandle,
        token: &str,
    ) -> Result<(), GameError> {
        match &self.admin_token {
            Some(expected) if expected == token => {}
            _ => return Err(GameError::PermissionDenied),
        }
        let now = unix_millis();
        let outbound = {
            let mut inner = self.inner.lock();
            inner.connections.insert(handle.id, handle.clone());
            inner.elevated_admins.insert(handle.id);
            vec![
                (
                    handle.tx.clone(),
                    ServerMsg::AdminRegistered {
                        room_code: self.code.clone(),
                    },
                ),
                (
                    handle.tx.clone(),
                    ServerMsg::RoundState {
                        state: inner.round.view(now),
                    },
                ),
            ]
        };
        deliver(outbound);
        Ok(())
    }

    pub fn register_spectator(&self, handle: ConnectionHandle) {
        {
            let mut inner = self.inner.lock();
            inner.spectators.insert(handle.id);
        }
        self.subscribe(handle);
    }

    /// Transport-level disconnect: mark the player away and free the admin
    /// seat if it was theirs. In Ready this also regresses to Waiting.
    pub fn connection_closed(&self, connection_id: Uuid) {
        let now = unix_millis();
        let (changed, outbound) = {
            let mut inner = self.inner.lock();
            inner.connections.remove(&connection_id);
            inner.spectators.remove(&connection_id);
            inner.elevated_admins.remove(&connection_id);

            let mut changed = false;
            if let Some(alias) = inner.alias_by_connection.remove(&connection_id) {
                inner.round.mark_disconnected(&alias);
                changed = true;
            }
            if inner.admin_connection == Some(connection_id) {
                inner.admin_connection = inner.alias_by_connection.keys().next().copied();
            }
            let outbound = if changed {
                round_state_outbound(&inner, now)
            } else {
                Vec::new()
            };
            (changed, outbound)
        };
        deliver(outbound);
        if changed {
            self.notify_summary();
        }
    }

    // Ready / start ----------------------------------------------------------

    pub fn toggle_ready(&self, connection_id: Uuid, ready: bool) -> Result<(), GameError> {
        let now = unix_millis();
        let outbound = {
            let mut inner = self.inner.lock();
            let alias = alias_of(&inner, connection_id)?;
            inner.round.toggle_ready(&alias, ready)?;
            round_state_outbound(&inner, now)
        };
        deliver(outbound);
        self.notify_summary();
        Ok(())
    }

    /// Start vote: archives a finished round, enters Starting and arms the
    /// countdown. Fails while Waiting (not everyone ready) or mid-round.
    pub fn vote_to_start(self: &Arc<Self>, connection_id: Uuid) -> Result<(), GameError> {
        let now = unix_millis();
        let start_time = now + START_COUNTDOWN_SECS * 1000;

        let outbound = {
            let mut inner = self.inner.lock();
            alias_of(&inner, connection_id)?;

            if inner.round.status() == RoundStatus::Finished {
                let params = inner.params;
                let next = inner.round.next_round(&params, rand::random());
                let finished = std::mem::replace(&mut inner.round, next);
                inner.previous_rounds.push(finished);
            }

            let params = inner.params;
            inner.round.start_new(&self.words, &params, start_time)?;

            inner.epoch += 1;
            let epoch = inner.epoch;
            let room = Arc::clone(self);
            tokio::spawn(async move {
                sleep_until_millis(start_time).await;
                room.start_playing(epoch);
            });

            let mut outbound = round_state_outbound(&inner, now);
            for handle in inner.connections.values() {
                outbound.push((
                    handle.tx.clone(),
                    ServerMsg::NewRoundStarted {
                        room_code: self.code.clone(),
                    },
                ));
            }
            outbound
        };

        info!(room_code = %self.code, "round starting");
        deliver(outbound);
        self.notify_summary();
        Ok(())
    }

    /// Countdown elapsed: Starting -> Playing, arm the deadline sweep and
    /// wake the bots. No-op for a stale epoch.
    fn start_playing(self: &Arc<Self>, epoch: u64) {
        let now = unix_millis();
        let (outbound, bots) = {
            let mut inner = self.inner.lock();
            if inner.epoch != epoch || !inner.round.begin_playing() {
                return;
            }
            self.arm_guess_sweep(&mut inner);
            let bots: Vec<String> = inner
                .round
                .players()
                .iter()
                .filter(|p| p.is_bot())
                .map(|p| p.alias.clone())
                .collect();
            (round_state_outbound(&inner, now), bots)
        };

        info!(room_code = %self.code, "round playing");
        deliver(outbound);
        self.notify_summary();
        for alias in bots {
            self.spawn_bot_loop(alias, epoch);
        }
    }

    // Deadline enforcement ---------------------------------------------------

    /// Arm (or re-arm) the sweep for the earliest future deadline across
    /// all boards. Bumping the generation supersedes any armed sweep, so
    /// exactly one chain is live.
    fn arm_guess_sweep(self: &Arc<Self>, inner: &mut RoomInner) {
        let Some(at) = inner.round.next_deadline_after(unix_millis()) else {
            return;
        };
        inner.sweep_generation += 1;
        let generation = inner.sweep_generation;
        let epoch = inner.epoch;
        let room = Arc::clone(self);
        tokio::spawn(async move {
            sleep_until_millis(at).await;
            room.on_guess_deadline(epoch, generation);
        });
    }

    fn on_guess_deadline(self: &Arc<Self>, epoch: u64, generation: u64) {
        let now = unix_millis();
        let (board_updates, outbound) = {
            let mut inner = self.inner.lock();
            if inner.epoch != epoch
                || inner.sweep_generation != generation
                || inner.round.status() != RoundStatus::Playing
            {
                return;
            }

            let impacted = inner.round.force_overdue_guesses(&self.words, &self.schedule, now);
            if !impacted.is_empty() {
                info!(
                    room_code = %self.code,
                    count = impacted.len(),
                    "deadline reached, forced moves applied"
                );
            }

            let mut board_updates: Outbound = Vec::new();
            for alias in &impacted {
                if let Some((tx, board)) = owner_board(&inner, alias, now) {
                    board_updates.push((tx, ServerMsg::BoardUpdated { board }));
                }
            }

            self.arm_guess_sweep(&mut inner);
            (board_updates, round_state_outbound(&inner, now))
        };
        deliver(board_updates);
        deliver(outbound);
    }

    // Play -------------------------------------------------------------------

    pub fn play_guess(
        &self,
        connection_id: Uuid,
        guess: &str,
        guess_number: usize,
    ) -> Result<BoardView, GameError> {
        let guess = guess.trim().to_uppercase();
        let now = unix_millis();

        let (view, outbound, finished) = {
            let mut inner = self.inner.lock();
            let alias = alias_of(&inner, connection_id)?;

            // Validate before touching board state.
            let word_length = inner.round.word_length();
            if guess.chars().count() != word_length {
                return Err(GameError::WrongLength(word_length));
            }
            if !self.words.is_accepted(&guess) {
                return Err(GameError::NotInWordList);
            }

            inner
                .round
                .play_guess(&alias, &guess, guess_number, &self.schedule, now)?;

            let view = board_view_of(&inner, &alias, now)?;
            let finished = inner.round.status() == RoundStatus::Finished;
            (view, round_state_outbound(&inner, now), finished)
        };

        deliver(outbound);
        if finished {
            self.notify_summary();
        }
        Ok(view)
    }

    pub fn give_up(&self, connection_id: Uuid) -> Result<BoardView, GameError> {
        let now = unix_millis();
        let (view, outbound, finished) = {
            let mut inner = self.inner.lock();
            let alias = alias_of(&inner, connection_id)?;
            inner.round.give_up(&alias, now)?;
            let view = board_view_of(&inner, &alias, now)?;
            let finished = inner.round.status() == RoundStatus::Finished;
            (view, round_state_outbound(&inner, now), finished)
        };
        deliver(outbound);
        if finished {
            self.notify_summary();
        }
        Ok(view)
    }

    pub fn suggest_guess(&self, connection_id: Uuid) -> Result<Option<String>, GameError> {
        let now = unix_millis();
        let (word, outbound) = {
            let mut inner = self.inner.lock();
            let alias = alias_of(&inner, connection_id)?;
            let word = inner.round.suggest_guess(&self.words, &alias, &self.schedule)?;
            (word, round_state_outbound(&inner, now))
        };
        deliver(outbound);
        Ok(word)
    }

    pub fn reveal_absent_letter(&self, connection_id: Uuid) -> Result<BoardView, GameError> {
        let now = unix_millis();
        let (view, outbound) = {
            let mut inner = self.inner.lock();
            let alias = alias_of(&inner, connection_id)?;
            inner.round.reveal_absent_letter(&alias, &self.schedule)?;
            let view = board_view_of(&inner, &alias, now)?;
            (view, round_state_outbound(&inner, now))
        };
        deliver(outbound);
        Ok(view)
    }

    pub fn reveal_present_letter(&self, connection_id: Uuid) -> Result<BoardView, GameError> {
        let now = unix_millis();
        let (view, outbound) = {
            let mut inner = self.inner.lock();
            let alias = alias_of(&inner, connection_id)?;
            inner.round.reveal_present_letter(&alias, &self.schedule)?;
            let view = board_view_of(&inner, &alias, now)?;
            (view, round_state_outbound(&inner, now))
        };
        deliver(outbound);
        Ok(view)
    }

    // Membership -------------------------------------------------------------

    pub fn log_out(&self, connection_id: Uuid) {
        let alias = {
            let inner = self.inner.lock();
            inner.alias_by_connection.get(&connection_id).cloned()
        };
        if let Some(alias) = alias {
            if let Err(error) = self.remove_player(&alias) {
                debug!(room_code = %self.code, alias = %alias, error = %error, "logout cleanup");
            }
        }
        {
            let mut inner = self.inner.lock();
            inner.connections.remove(&connection_id);
            inner.spectators.remove(&connection_id);
            inner.elevated_admins.remove(&connection_id);
            inner.alias_by_connection.remove(&connection_id);
            if inner.admin_connection == Some(connection_id) {
                inner.admin_connection = inner.alias_by_connection.keys().next().copied();
            }
        }
    }

    pub fn kick_player(&self, connection_id: Uuid, alias: &str) -> Result<(), GameError> {
        self.require_admin(connection_id)?;
        self.remove_player(alias)
    }

    fn remove_player(&self, alias: &str) -> Result<(), GameError> {
        let now = unix_millis();
        let outbound = {
            let mut inner = self.inner.lock();
            let player = inner.round.remove_player(alias, now)?;

            inner.alias_by_connection.retain(|_, a| a != alias);
            if let Some(connection_id) = player.connection_id {
                if inner.admin_connection == Some(connection_id) {
                    inner.admin_connection = inner.alias_by_connection.keys().next().copied();
                }
            }
            round_state_outbound(&inner, now)
        };
        info!(room_code = %self.code, alias = %alias, "player removed");
        deliver(outbound);
        self.notify_summary();
        Ok(())
    }

    /// Admin soft-disconnect: flags the player as away without dropping
    /// their socket
    pub fn disconnect_player(&self, connection_id: Uuid, alias: &str) -> Result<(), GameError> {
        self.require_admin(connection_id)?;
        let now = unix_millis();
        let outbound = {
            let mut inner = self.inner.lock();
            inner.round.mark_disconnected(alias);
            round_state_outbound(&inner, now)
        };
        deliver(outbound);
        self.notify_summary();
        Ok(())
    }

    pub fn hard_reset(&self, connection_id: Uuid) -> Result<(), GameError> {
        self.require_admin(connection_id)?;
        let now = unix_millis();
        let outbound = {
            let mut inner = self.inner.lock();
            let params = inner.params;
            inner.round = RoundState::new(&params, rand::random());
            inner.previous_rounds.clear();
            inner.alias_by_connection.clear();
            inner.chat.clear();
            inner.epoch += 1;
            round_state_outbound(&inner, now)
        };
        info!(room_code = %self.code, "hard reset");
        deliver(outbound);
        self.notify_summary();
        Ok(())
    }

    // Parameters -------------------------------------------------------------

    pub fn update_guess_time_limit(
        self: &Arc<Self>,
        connection_id: Uuid,
        seconds: u64,
    ) -> Result<(), GameError> {
        self.require_admin(connection_id)?;
        if seconds == 0 {
            return Err(GameError::InvalidState(
                "guess time limit must be positive".to_string(),
            ));
        }
        let now = unix_millis();
        let outbound = {
            let mut inner = self.inner.lock();
            inner.params.guess_time_limit_secs = seconds;
            if matches!(
                inner.round.status(),
                RoundStatus::Starting | RoundStatus::Playing
            ) {
                inner.round.reanchor_deadlines(seconds * 1000, now);
                self.arm_guess_sweep(&mut inner);
            }
            params_outbound(&inner, now)
        };
        deliver(outbound);
        Ok(())
    }

    /// Applies from the next round; shrinking the ceiling mid-round could
    /// retroactively fail boards.
    pub fn update_max_guesses(
        &self,
        connection_id: Uuid,
        max_guesses: usize,
    ) -> Result<(), GameError> {
        self.require_admin(connection_id)?;
        if max_guesses == 0 {
            return Err(GameError::InvalidState(
                "max guesses must be positive".to_string(),
            ));
        }
        let now = unix_millis();
        let outbound = {
            let mut inner = self.inner.lock();
            inner.params.max_guesses = max_guesses;
            params_outbound(&inner, now)
        };
        deliver(outbound);
        Ok(())
    }

    /// Applies from the next round's answer draw
    pub fn update_answer_list(
        &self,
        connection_id: Uuid,
        list_type: AnswerListType,
    ) -> Result<(), GameError> {
        self.require_admin(connection_id)?;
        let now = unix_millis();
        let outbound = {
            let mut inner = self.inner.lock();
            inner.params.answer_list = list_type;
            params_outbound(&inner, now)
        };
        deliver(outbound);
        Ok(())
    }

    // Bots -------------------------------------------------------------------

    pub fn add_bot(
        self: &Arc<Self>,
        connection_id: Uuid,
        personality: Option<String>,
    ) -> Result<(), GameError> {
        self.require_admin(connection_id)?;
        let now = unix_millis();
        let (alias, playing, epoch, outbound) = {
            let mut inner = self.inner.lock();
            let mut rng = rand::thread_rng();
            let taken: Vec<String> = inner
                .round
                .players()
                .iter()
                .map(|p| p.alias.clone())
                .collect();
            let alias = bot::pick_alias(&taken, personality.as_deref(), &mut rng);
            let brain = BotBrain::new(personality, &mut rng);
            inner.round.register_bot(alias.clone(), brain, now);

            let playing = inner.round.status() == RoundStatus::Playing;
            if playing {
                self.arm_guess_sweep(&mut inner);
            }
            (alias, playing, inner.epoch, round_state_outbound(&inner, now))
        };

        info!(room_code = %self.code, alias = %alias, "bot added");
        deliver(outbound);
        self.notify_summary();
        if playing {
            self.spawn_bot_loop(alias, epoch);
        }
        Ok(())
    }

    /// Autonomous play: plan a move under the lock, sleep the think delay
    /// without it, then submit if the round hasn't moved on. Any failure
    /// stops this bot only; deadline forcing remains the backstop.
    fn spawn_bot_loop(self: &Arc<Self>, alias: String, epoch: u64) {
        let room = Arc::clone(self);
        tokio::spawn(async move {
            loop {
                let (word, guess_number, delay) = {
                    let mut inner = room.inner.lock();
                    if inner.epoch != epoch {
                        return;
                    }
                    match inner.round.bot_next_move(&room.words, &alias) {
                        Ok(plan) => plan,
                        Err(error) => {
                            debug!(alias = %alias, error = %error, "bot loop stopped");
                            return;
                        }
                    }
                };

                tokio::time::sleep(delay).await;

                let (board_finished, round_finished, outbound) = {
                    let mut inner = room.inner.lock();
                    if inner.epoch != epoch || inner.round.status() != RoundStatus::Playing {
                        return;
                    }
                    let now = unix_millis();
                    match inner
                        .round
                        .play_guess(&alias, &word, guess_number, &room.schedule, now)
                    {
                        Ok(()) => {}
                        Err(GameError::GuessOutOfSync { .. }) => {
                            // A forced move landed during the think delay;
                            // replan from the new row count.
                            continue;
                        }
                        Err(error) => {
                            warn!(alias = %alias, error = %error, "bot guess rejected, stopping bot");
                            return;
                        }
                    }
                    let board_finished = inner
                        .round
                        .player(&alias)
                        .and_then(|p| p.board.as_ref())
                        .map(|b| b.is_finished())
                        .unwrap_or(true);
                    let round_finished = inner.round.status() == RoundStatus::Finished;
                    (board_finished, round_finished, round_state_outbound(&inner, now))
                };

                deliver(outbound);
                if round_finished {
                    room.notify_summary();
                }
                if board_finished {
                    return;
                }
            }
        });
    }

    // Chat -------------------------------------------------------------------

    pub fn send_chat(self: &Arc<Self>, connection_id: Uuid, message: &str) -> Result<(), GameError> {
        let trimmed: String = message.trim().chars().take(CHAT_MESSAGE_MAX_CHARS).collect();
        if trimmed.is_empty() {
            return Ok(());
        }
        let now = unix_millis();

        let (mentioned_bots, epoch, outbound) = {
            let mut inner = self.inner.lock();
            let alias = alias_of(&inner, connection_id)?;

            let chat_message = ChatMessage {
                alias: alias.clone(),
                message: trimmed,
                sent_at: now,
                is_bot: false,
            };
            push_chat(&mut inner, chat_message.clone());

            let lowered = chat_message.message.to_lowercase();
            let mentioned: Vec<String> = inner
                .round
                .players()
                .iter()
                .filter(|p| p.is_bot())
                .filter(|p| lowered.contains(&format!("@{}", p.alias.to_lowercase())))
                .map(|p| p.alias.clone())
                .collect();

            let mut outbound: Outbound = Vec::new();
            for handle in inner.connections.values() {
                outbound.push((
                    handle.tx.clone(),
                    ServerMsg::ChatMessage {
                        message: chat_message.clone(),
                    },
                ));
                outbound.push((
                    handle.tx.clone(),
                    ServerMsg::StoppedTyping {
                        alias: alias.clone(),
                    },
                ));
            }
            (mentioned, inner.epoch, outbound)
        };

        deliver(outbound);
        for bot_alias in mentioned_bots {
            self.spawn_bot_reply(bot_alias, epoch);
        }
        Ok(())
    }

    /// An @mentioned bot answers with a canned line after a human-ish pause
    fn spawn_bot_reply(self: &Arc<Self>, alias: String, epoch: u64) {
        let room = Arc::clone(self);
        tokio::spawn(async move {
            let delay_ms = rand::thread_rng().gen_range(1_500..4_000);
            tokio::time::sleep(Duration::from_millis(delay_ms)).await;

            let outbound = {
                let mut inner = room.inner.lock();
                if inner.epoch != epoch {
                    return;
                }
                let Some(brain) = inner
                    .round
                    .player(&alias)
                    .and_then(|p| p.bot.clone())
                else {
                    return;
                };
                let chat_message = ChatMessage {
                    alias: alias.clone(),
                    message: brain.smack_talk(&mut rand::thread_rng()),
                    sent_at: unix_millis(),
                    is_bot: true,
                };
                push_chat(&mut inner, chat_message.clone());

                inner
                    .connections
                    .values()
                    .map(|handle| {
                        (
                            handle.tx.clone(),
                            ServerMsg::ChatMessage {
                                message: chat_message.clone(),
                            },
                        )
                    })
                    .collect::<Outbound>()
            };
            deliver(outbound);
        });
    }

    pub fn typing(&self, connection_id: Uuid) -> Result<(), GameError> {
        self.relay_typing(connection_id, true)
    }

    pub fn stop_typing(&self, connection_id: Uuid) -> Result<(), GameError> {
        self.relay_typing(connection_id, false)
    }

    fn relay_typing(&self, connection_id: Uuid, typing: bool) -> Result<(), GameError> {
        let outbound = {
            let inner = self.inner.lock();
            let alias = alias_of(&inner, connection_id)?;
            inner
                .connections
                .values()
                .filter(|handle| handle.id != connection_id)
                .map(|handle| {
                    let msg = if typing {
                        ServerMsg::Typing {
                            alias: alias.clone(),
                        }
                    } else {
                        ServerMsg::StoppedTyping {
                            alias: alias.clone(),
                        }
                    };
                    (handle.tx.clone(), msg)
                })
                .collect::<Outbound>()
        };
        deliver(outbound);
        Ok(())
    }

    // Queries ----------------------------------------------------------------

    /// Current state, masked or not depending on who is asking
    pub fn round_state_for(&self, connection_id: Uuid) -> ServerMsg {
        let inner = self.inner.lock();
        state_msg_for(&inner, connection_id, unix_millis())
    }

    pub fn game_parameters(&self) -> GameParameters {
        self.inner.lock().params
    }

    pub fn player_board(&self, connection_id: Uuid) -> Option<BoardView> {
        let now = unix_millis();
        let inner = self.inner.lock();
        let alias = inner.alias_by_connection.get(&connection_id)?;
        inner
            .round
            .player(alias)
            .and_then(|p| p.board.as_ref())
            .map(|b| b.view(now))
    }

    pub fn chat_history(&self) -> Vec<ChatMessage> {
        self.inner.lock().chat.iter().cloned().collect()
    }

    // Helpers ----------------------------------------------------------------

    fn require_admin(&self, connection_id: Uuid) -> Result<(), GameError> {
        let inner = self.inner.lock();
        if inner.admin_connection == Some(connection_id)
            || inner.elevated_admins.contains(&connection_id)
        {
            Ok(())
        } else {
            Err(GameError::PermissionDenied)
        }
    }
}

fn alias_of(inner: &RoomInner, connection_id: Uuid) -> Result<String, GameError> {
    inner
        .alias_by_connection
        .get(&connection_id)
        .cloned()
        .ok_or(GameError::NotRegistered)
}

fn board_view_of(inner: &RoomInner, alias: &str, now: u64) -> Result<BoardView, GameError> {
    inner
        .round
        .player(alias)
        .and_then(|p| p.board.as_ref())
        .map(|b| b.view(now))
        .ok_or_else(|| GameError::InvalidState("player has no board yet".to_string()))
}

fn owner_board(
    inner: &RoomInner,
    alias: &str,
    now: u64,
) -> Option<(mpsc::UnboundedSender<ServerMsg>, BoardView)> {
    let player = inner.round.player(alias)?;
    let connection_id = player.connection_id?;
    let handle = inner.connections.get(&connection_id)?;
    let board = player.board.as_ref()?.view(now);
    Some((handle.tx.clone(), board))
}

fn push_chat(inner: &mut RoomInner, message: ChatMessage) {
    inner.chat.push_back(message);
    while inner.chat.len() > CHAT_HISTORY_LIMIT {
        inner.chat.pop_front();
    }
}

/// The state message one specific connection should see right now
fn state_msg_for(inner: &RoomInner, connection_id: Uuid, now: u64) -> ServerMsg {
    if unmasked_audience(inner, connection_id) {
        ServerMsg::RoundState {
            state: inner.round.view(now),
        }
    } else {
        ServerMsg::MaskedRoundState {
            state: inner.round.mask(now),
        }
    }
}

/// Unmasked state goes to finished-board players and elevated admins, and
/// to everyone once the round is over.
fn unmasked_audience(inner: &RoomInner, connection_id: Uuid) -> bool {
    if inner.round.status() == RoundStatus::Finished {
        return true;
    }
    if inner.elevated_admins.contains(&connection_id) {
        return true;
    }
    inner
        .alias_by_connection
        .get(&connection_id)
        .and_then(|alias| inner.round.player(alias))
        .and_then(|p| p.board.as_ref())
        .map(|b| b.is_finished())
        .unwrap_or(false)
}

/// One state push per connection, each at its own masking level
fn round_state_outbound(inner: &RoomInner, now: u64) -> Outbound {
    inner
        .connections
        .values()
        .map(|handle| (handle.tx.clone(), state_msg_for(inner, handle.id, now)))
        .collect()
}

fn params_outbound(inner: &RoomInner, now: u64) -> Outbound {
    let mut outbound = round_state_outbound(inner, now);
    for handle in inner.connections.values() {
        outbound.push((
            handle.tx.clone(),
            ServerMsg::GameParametersUpdated {
                params: inner.params,
            },
        ));
    }
    outbound
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::sync::mpsc::unbounded_channel;

    fn room() -> Arc<Room> {
        let (summary_tx, _summary_rx) = unbounded_channel();
        Room::new(
            "TESTS".to_string(),
            GameParameters::default(),
            Arc::new(WordCatalog::new()),
            Arc::new(PointSchedule::default()),
            Some("secret".to_string()),
            summary_tx,
        )
    }

    fn connect() -> (ConnectionHandle, mpsc::UnboundedReceiver<ServerMsg>) {
        let (tx, rx) = unbounded_channel();
        (
            ConnectionHandle {
                id: Uuid::new_v4(),
                tx,
            },
            rx,
        )
    }

    #[tokio::test]
    async fn first_registrant_becomes_admin() {
        let room = room();
        let (ann, _ann_rx) = connect();
        let (ben, _ben_rx) = connect();
        room.register_alias(ann.clone(), "ann").unwrap();
        room.register_alias(ben.clone(), "ben").unwrap();

        assert!(room.kick_player(ben.id, "ann").is_err());
        room.kick_player(ann.id, "ben").unwrap();
        assert_eq!(room.player_count(), 1);
    }

    #[tokio::test]
    async fn admin_token_elevates_a_connection() {
        let room = room();
        let (ann, _ann_rx) = connect();
        room.register_alias(ann.clone(), "ann").unwrap();

        let (watcher, _watcher_rx) = connect();
        assert_eq!(
            room.register_admin(watcher.clone(), "wrong"),
            Err(GameError::PermissionDenied)
        );
        room.register_admin(watcher.clone(), "secret").unwrap();
        room.update_max_guesses(watcher.id, 8).unwrap();
        assert_eq!(room.game_parameters().max_guesses, 8);
    }

    #[tokio::test]
    async fn admin_moves_on_when_holder_logs_out() {
        let room = room();
        let (ann, _ann_rx) = connect();
        let (ben, _ben_rx) = connect();
        room.register_alias(ann.clone(), "ann").unwrap();
        room.register_alias(ben.clone(), "ben").unwrap();

        room.log_out(ann.id);
        // ben inherits admin rights.
        room.update_max_guesses(ben.id, 7).unwrap();
    }

    #[tokio::test]
    async fn guess_validation_happens_before_board_state() {
        let room = room();
        let (ann, _ann_rx) = connect();
        room.register_alias(ann.clone(), "ann").unwrap();
        room.toggle_ready(ann.id, true).unwrap();
        room.vote_to_start(ann.id).unwrap();

        assert_eq!(
            room.play_guess(ann.id, "TOO", 1),
            Err(GameError::WrongLength(5))
        );
        assert_eq!(
            room.play_guess(ann.id, "QZXWV", 1),
            Err(GameError::NotInWordList)
        );
        // Round is still Starting; a real word is a state conflict, not a
        // board mutation.
        assert!(matches!(
            room.play_guess(ann.id, "CRANE", 1),
            Err(GameError::InvalidState(_))
        ));
    }

    #[tokio::test]
    async fn unregistered_connections_cannot_act() {
        let room = room();
        let (ghost, _ghost_rx) = connect();
        assert_eq!(
            room.toggle_ready(ghost.id, true),
            Err(GameError::NotRegistered)
        );
        assert_eq!(
            room.play_guess(ghost.id, "CRANE", 1),
            Err(GameError::NotRegistered)
        );
    }

    #[tokio::test]
    async fn spectators_receive_masked_state_only() {
        let room = room();
        let (ann, _ann_rx) = connect();
        room.register_alias(ann.clone(), "ann").unwrap();

        let (tv, mut tv_rx) = connect();
        room.register_spectator(tv.clone());

        let mut saw_masked = false;
        while let Ok(msg) = tv_rx.try_recv() {
            match msg {
                ServerMsg::MaskedRoundState { .. } => saw_masked = true,
                ServerMsg::RoundState { .. } => panic!("spectator got unmasked state"),
                _ => {}
            }
        }
        assert!(saw_masked);
    }

    #[tokio::test]
    async fn chat_reaches_all_connections_and_caps_history() {
        let room = room();
        let (ann, _ann_rx) = connect();
        let (tv, mut tv_rx) = connect();
        room.register_alias(ann.clone(), "ann").unwrap();
        room.register_spectator(tv.clone());

        room.send_chat(ann.id, "hello there").unwrap();
        let mut saw_chat = false;
        while let Ok(msg) = tv_rx.try_recv() {
            if let ServerMsg::ChatMessage { message } = msg {
                assert_eq!(message.alias, "ann");
                assert_eq!(message.message, "hello there");
                saw_chat = true;
            }
        }
        assert!(saw_chat);

        for i in 0..(CHAT_HISTORY_LIMIT + 10) {
            room.send_chat(ann.id, &format!("spam {i}")).unwrap();
        }
        assert_eq!(room.chat_history().len(), CHAT_HISTORY_LIMIT);
    }

    #[tokio::test]
    async fn vote_to_start_requires_everyone_ready() {
        let room = room();
        let (ann, _ann_rx) = connect();
        let (ben, _ben_rx) = connect();
        room.register_alias(ann.clone(), "ann").unwrap();
        room.register_alias(ben.clone(), "ben").unwrap();

        room.toggle_ready(ann.id, true).unwrap();
        assert!(matches!(
            room.vote_to_start(ann.id),
            Err(GameError::InvalidState(_))
        ));

        room.toggle_ready(ben.id, true).unwrap();
        room.vote_to_start(ann.id).unwrap();
        // Double start vote while counting down is rejected.
        assert!(matches!(
            room.vote_to_start(ben.id),
            Err(GameError::InvalidState(_))
        ));
    }

    #[tokio::test]
    async fn hard_reset_clears_players_and_chat() {
        let room = room();
        let (ann, _ann_rx) = connect();
        room.register_alias(ann.clone(), "ann").unwrap();
        room.send_chat(ann.id, "hi").unwrap();

        room.hard_reset(ann.id).unwrap();
        assert_eq!(room.player_count(), 0);
        assert!(room.chat_history().is_empty());
    }
}
