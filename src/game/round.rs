//! Round state machine: Waiting -> Ready -> Starting -> Playing -> Finished
//!
//! Status only moves forward, with one sanctioned regression: Ready drops
//! back to Waiting when a player joins, un-readies or disconnects before
//! the start vote lands.

use std::time::Duration;

use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use serde::Serialize;
use uuid::Uuid;

use crate::game::board::{
    Board, BoardStatus, PointAdjustment, PointAdjustmentReason, ALPHABET,
};
use crate::game::bot::{self, BotBrain};
use crate::game::error::GameError;
use crate::game::scoring::PointSchedule;
use crate::game::GameParameters;
use crate::words::WordCatalog;
use crate::ws::protocol::{MaskedPlayerView, MaskedRoundStateView, PlayerView, RoundStateView};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RoundStatus {
    /// Waiting for players to be ready
    Waiting,
    /// Everyone ready, waiting for a start vote
    Ready,
    /// Counting down to start
    Starting,
    Playing,
    /// Finished, waiting for the next round
    Finished,
}

/// Identity within a room. Persists across rounds; the board is per-round.
#[derive(Debug, Clone)]
pub struct Player {
    pub alias: String,
    /// Autonomous-play capability; `Some` marks a bot
    pub bot: Option<BotBrain>,
    /// Cumulative points across rounds
    pub points: i32,
    pub rank: usize,
    pub is_joint_rank: bool,
    pub connection_id: Option<Uuid>,
    pub is_connected: bool,
    pub registered_at: u64,
    pub ready: bool,
    pub board: Option<Board>,
}

impl Player {
    fn new_human(alias: String, connection_id: Uuid, now: u64) -> Self {
        Self {
            alias,
            bot: None,
            points: 0,
            rank: 1,
            is_joint_rank: true,
            connection_id: Some(connection_id),
            is_connected: true,
            registered_at: now,
            ready: false,
            board: None,
        }
    }

    fn new_bot(alias: String, brain: BotBrain, now: u64) -> Self {
        Self {
            alias,
            bot: Some(brain),
            points: 0,
            rank: 1,
            is_joint_rank: true,
            connection_id: None,
            is_connected: true,
            registered_at: now,
            ready: true,
            board: None,
        }
    }

    pub fn is_bot(&self) -> bool {
        self.bot.is_some()
    }

    fn copy_for_new_round(&self) -> Self {
        Self {
            alias: self.alias.clone(),
            bot: self.bot.clone(),
            points: self.points,
            rank: self.rank,
            is_joint_rank: self.is_joint_rank,
            connection_id: self.connection_id,
            is_connected: self.is_connected,
            registered_at: self.registered_at,
            ready: self.is_bot(),
            board: None,
        }
    }

    pub fn view(&self, now: u64) -> PlayerView {
        PlayerView {
            alias: self.alias.clone(),
            is_bot: self.is_bot(),
            points: self.points,
            rank: self.rank,
            is_joint_rank: self.is_joint_rank,
            is_connected: self.is_connected,
            ready: self.ready,
            board: self.board.as_ref().map(|b| b.view(now)),
        }
    }

    pub fn mask(&self, now: u64) -> MaskedPlayerView {
        MaskedPlayerView {
            alias: self.alias.clone(),
            is_bot: self.is_bot(),
            points: self.points,
            rank: self.rank,
            is_joint_rank: self.is_joint_rank,
            is_connected: self.is_connected,
            ready: self.ready,
            board: self.board.as_ref().map(|b| b.mask(now)),
        }
    }
}

/// One round's aggregate state for one room
pub struct RoundState {
    players: Vec<Player>,
    /// Fixed on entry to Starting; None while gathering players
    answer: Option<String>,
    word_length: usize,
    max_guesses: usize,
    guess_time_limit_ms: u64,
    status: RoundStatus,
    start_time: Option<u64>,
    end_time: Option<u64>,
    round_number: u32,
    rng: ChaCha8Rng,
}

impl RoundState {
    pub fn new(params: &GameParameters, seed: u64) -> Self {
        Self {
            players: Vec::new(),
            answer: None,
            word_length: params.word_length(),
            max_guesses: params.max_guesses,
            guess_time_limit_ms: params.guess_time_limit_ms(),
            status: RoundStatus::Waiting,
            start_time: None,
            end_time: None,
            round_number: 1,
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    /// Carry players (and their cumulative points) into the next round.
    /// The new round starts Ready: everyone who just finished is assumed
    /// in for another one, and a start vote follows immediately.
    pub fn next_round(&self, params: &GameParameters, seed: u64) -> Self {
        Self {
            players: self.players.iter().map(Player::copy_for_new_round).collect(),
            answer: None,
            word_length: params.word_length(),
            max_guesses: params.max_guesses,
            guess_time_limit_ms: params.guess_time_limit_ms(),
            status: RoundStatus::Ready,
            start_time: None,
            end_time: None,
            round_number: self.round_number + 1,
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    pub fn status(&self) -> RoundStatus {
        self.status
    }

    pub fn players(&self) -> &[Player] {
        &self.players
    }

    pub fn player(&self, alias: &str) -> Option<&Player> {
        self.players.iter().find(|p| p.alias == alias)
    }

    pub fn round_number(&self) -> u32 {
        self.round_number
    }

    pub fn word_length(&self) -> usize {
        self.word_length
    }

    pub fn guess_time_limit_ms(&self) -> u64 {
        self.guess_time_limit_ms
    }

    pub fn answer(&self) -> Option<&str> {
        self.answer.as_deref()
    }

    fn player_index(&self, alias: &str) -> Result<usize, GameError> {
        self.players
            .iter()
            .position(|p| p.alias == alias)
            .ok_or_else(|| GameError::UnknownAlias(alias.to_string()))
    }

    fn board_mut(&mut self, index: usize) -> Result<&mut Board, GameError> {
        self.players[index]
            .board
            .as_mut()
            .ok_or_else(|| GameError::InvalidState("player has no board yet".to_string()))
    }

    // Membership ------------------------------------------------------------

    /// Register or reconnect a player. Fails with AliasTaken only when the
    /// alias is held by a currently connected different session.
    pub fn register_player(
        &mut self,
        alias: &str,
        connection_id: Uuid,
        now: u64,
    ) -> Result<(), GameError> {
        if let Some(player) = self.players.iter_mut().find(|p| p.alias == alias) {
            if player.is_connected && player.connection_id != Some(connection_id) {
                return Err(GameError::AliasTaken(alias.to_string()));
            }
            player.connection_id = Some(connection_id);
            player.is_connected = true;
            return Ok(());
        }

        let mut player = Player::new_human(alias.to_string(), connection_id, now);
        match self.status {
            RoundStatus::Ready => self.status = RoundStatus::Waiting,
            RoundStatus::Playing | RoundStatus::Finished => {
                // Late joiner: fresh board with deadlines anchored at now.
                player.board = Some(Board::new(self.guess_time_limit_ms, self.max_guesses, now));
            }
            _ => {}
        }
        self.players.push(player);
        self.recalculate_ranking();
        Ok(())
    }

    pub fn register_bot(&mut self, alias: String, brain: BotBrain, now: u64) {
        let mut player = Player::new_bot(alias, brain, now);
        if matches!(self.status, RoundStatus::Playing | RoundStatus::Finished) {
            player.board = Some(Board::new(self.guess_time_limit_ms, self.max_guesses, now));
        }
        self.players.push(player);
        self.recalculate_ranking();
    }

    pub fn remove_player(&mut self, alias: &str, now: u64) -> Result<Player, GameError> {
        let index = self.player_index(alias)?;
        let player = self.players.remove(index);

        if self.status == RoundStatus::Playing
            && !self.players.is_empty()
            && self.all_boards_finished()
        {
            self.finish(now);
        }
        self.refresh_ready();

        Ok(player)
    }

    pub fn mark_disconnected(&mut self, alias: &str) {
        if let Some(player) = self.players.iter_mut().find(|p| p.alias == alias) {
            player.is_connected = false;
            if self.status == RoundStatus::Ready {
                player.ready = false;
                self.status = RoundStatus::Waiting;
            }
        }
    }

    pub fn mark_connected(&mut self, alias: &str) {
        if let Some(player) = self.players.iter_mut().find(|p| p.alias == alias) {
            player.is_connected = true;
        }
    }

    // Ready / start ----------------------------------------------------------

    fn all_ready(&self) -> bool {
        !self.players.is_empty()
            && self
                .players
                .iter()
                .filter(|p| !p.is_bot() && p.is_connected)
                .all(|p| p.ready)
    }

    /// Settle Waiting vs Ready after membership or ready-flag changes.
    /// Never touches an active or finished round.
    pub fn refresh_ready(&mut self) {
        if matches!(self.status, RoundStatus::Waiting | RoundStatus::Ready) {
            self.status = if self.all_ready() {
                RoundStatus::Ready
            } else {
                RoundStatus::Waiting
            };
        }
    }

    pub fn toggle_ready(&mut self, alias: &str, ready: bool) -> Result<(), GameError> {
        if !matches!(self.status, RoundStatus::Waiting | RoundStatus::Ready) {
            return Err(GameError::InvalidState(
                "cannot change ready state while a round is active".to_string(),
            ));
        }
        let index = self.player_index(alias)?;
        self.players[index].ready = ready;
        self.refresh_ready();
        Ok(())
    }

    /// Enter Starting: draw the answer and allocate boards anchored at
    /// `start_time` (the end of the countdown).
    pub fn start_new(
        &mut self,
        words: &WordCatalog,
        params: &GameParameters,
        start_time: u64,
    ) -> Result<(), GameError> {
        let answer = match self.status {
            RoundStatus::Waiting => {
                return Err(GameError::InvalidState(
                    "cannot start a round when not everyone is ready".to_string(),
                ))
            }
            RoundStatus::Playing => {
                return Err(GameError::InvalidState(
                    "cannot start a round while one is still in play".to_string(),
                ))
            }
            RoundStatus::Starting => {
                return Err(GameError::InvalidState("round is already starting".to_string()))
            }
            RoundStatus::Finished => {
                return Err(GameError::InvalidState(
                    "round is finished; archive it before starting a new one".to_string(),
                ))
            }
            RoundStatus::Ready => words.random_answer(params.answer_list, &mut self.rng),
        };
        self.start_with_answer(answer, start_time);
        Ok(())
    }

    /// Directly fix the answer and enter Starting. Callers are expected to
    /// have verified the round is Ready.
    pub fn start_with_answer(&mut self, answer: String, start_time: u64) {
        self.word_length = answer.chars().count();
        self.answer = Some(answer);
        self.status = RoundStatus::Starting;
        self.start_time = Some(start_time);
        for player in &mut self.players {
            player.board = Some(Board::new(
                self.guess_time_limit_ms,
                self.max_guesses,
                start_time,
            ));
        }
    }

    /// Countdown elapsed. Returns false when the round is no longer
    /// Starting (stale timer).
    pub fn begin_playing(&mut self) -> bool {
        if self.status == RoundStatus::Starting {
            self.status = RoundStatus::Playing;
            true
        } else {
            false
        }
    }

    // Play -------------------------------------------------------------------

    pub fn play_guess(
        &mut self,
        alias: &str,
        guess: &str,
        guess_number: usize,
        schedule: &PointSchedule,
        now: u64,
    ) -> Result<(), GameError> {
        if self.status != RoundStatus::Playing {
            return Err(GameError::InvalidState(
                "cannot play a guess when the round is not in play".to_string(),
            ));
        }
        let answer = self
            .answer
            .clone()
            .ok_or_else(|| GameError::InvalidState("round has no answer".to_string()))?;
        let index = self.player_index(alias)?;

        let server_next = match &self.players[index].board {
            Some(board) => board.rows().len() + 1,
            None => {
                return Err(GameError::InvalidState("player has no board yet".to_string()))
            }
        };
        if guess_number != server_next {
            return Err(GameError::GuessOutOfSync {
                client: guess_number,
                server: server_next,
            });
        }

        // Order among players reaching this guess count; irrelevant (None)
        // once a faster player already solved on fewer rows.
        let answer_already_found = self.players.iter().any(|p| {
            p.board
                .as_ref()
                .map(|b| b.status() == BoardStatus::Solved && b.rows().len() < server_next)
                .unwrap_or(false)
        });
        let played_order = if answer_already_found {
            None
        } else {
            let ahead = self
                .players
                .iter()
                .filter(|p| {
                    p.board
                        .as_ref()
                        .map(|b| b.rows().len() >= server_next)
                        .unwrap_or(false)
                })
                .count();
            Some(ahead + 1)
        };
        let solved_count = self.solved_count();
        let player_count = self.players.len();

        let board = self.board_mut(index)?;
        board.submit_guess(
            guess,
            &answer,
            played_order,
            Some(solved_count),
            player_count,
            Some(schedule),
            false,
            now,
        )?;

        self.recalculate_ranking();
        if self.all_boards_finished() {
            self.finish(now);
        }
        Ok(())
    }

    pub fn give_up(&mut self, alias: &str, now: u64) -> Result<(), GameError> {
        if self.status != RoundStatus::Playing {
            return Err(GameError::InvalidState(
                "cannot give up when the round is not in play".to_string(),
            ));
        }
        let index = self.player_index(alias)?;
        self.board_mut(index)?.give_up()?;
        if self.all_boards_finished() {
            self.finish(now);
        }
        Ok(())
    }

    /// Server-picked valid guess for a human player, at a point cost
    pub fn suggest_guess(
        &mut self,
        words: &WordCatalog,
        alias: &str,
        schedule: &PointSchedule,
    ) -> Result<Option<String>, GameError> {
        if self.status != RoundStatus::Playing {
            return Err(GameError::InvalidState(
                "cannot suggest a guess when the round is not in play".to_string(),
            ));
        }
        let index = self.player_index(alias)?;
        let candidates = self.suggestion_candidates(words, index)?;
        if candidates.is_empty() {
            return Ok(None);
        }
        let word = candidates
            .choose(&mut self.rng)
            .cloned()
            .unwrap_or_else(|| candidates[0].clone());

        let cost = schedule.suggested_guess_cost;
        if cost > 0 {
            self.board_mut(index)?.add_point_adjustment(PointAdjustment::new(
                PointAdjustmentReason::GuessSuggested,
                -cost,
            ));
            self.recalculate_ranking();
        }
        Ok(Some(word))
    }

    /// Valid guesses consistent with the board's knowledge, excluding the
    /// answer itself (suggestions never hand out the win)
    fn suggestion_candidates(
        &self,
        words: &WordCatalog,
        index: usize,
    ) -> Result<Vec<String>, GameError> {
        let answer = self
            .answer
            .as_deref()
            .ok_or_else(|| GameError::InvalidState("round has no answer".to_string()))?;
        let board = self.players[index]
            .board
            .as_ref()
            .ok_or_else(|| GameError::InvalidState("player has no board yet".to_string()))?;
        Ok(words
            .possible_valid_guesses(
                &board.correct_letters,
                &board.present_letters,
                &board.absent_letters,
                &board.present_letter_counts,
                self.word_length,
            )
            .into_iter()
            .filter(|w| *w != answer)
            .map(|w| w.to_string())
            .collect())
    }

    /// Deadline enforcement: every board behind its schedule gets a forced
    /// valid guess, or a consolation absent-letter reveal when no
    /// suggestion remains or the board is on its final row. Returns the
    /// impacted aliases.
    pub fn force_overdue_guesses(
        &mut self,
        words: &WordCatalog,
        schedule: &PointSchedule,
        now: u64,
    ) -> Vec<String> {
        if self.status != RoundStatus::Playing {
            return Vec::new();
        }
        let answer = match self.answer.clone() {
            Some(answer) => answer,
            None => return Vec::new(),
        };

        let overdue: Vec<usize> = self
            .players
            .iter()
            .enumerate()
            .filter(|(_, p)| {
                p.board
                    .as_ref()
                    .map(|b| b.guess_timer_elapsed(now))
                    .unwrap_or(false)
            })
            .map(|(i, _)| i)
            .collect();

        let mut impacted = Vec::new();
        for index in overdue {
            let suggestion = match self.suggestion_candidates(words, index) {
                Ok(candidates) => candidates.choose(&mut self.rng).cloned(),
                Err(_) => None,
            };
            let player_count = self.players.len();
            let cost = schedule.suggested_guess_cost;

            let alias = self.players[index].alias.clone();
            let board = match self.players[index].board.as_mut() {
                Some(board) => board,
                None => continue,
            };

            // Forcing never fills the final row: the last guess stays the
            // player's own.
            if board.rows().len() + 1 < board.max_guesses() {
                if let Some(word) = suggestion {
                    if cost != 0 {
                        board.add_point_adjustment(PointAdjustment::new(
                            PointAdjustmentReason::GuessSuggested,
                            -cost,
                        ));
                    }
                    if let Err(error) = board.submit_guess(
                        &word,
                        &answer,
                        None,
                        None,
                        player_count,
                        None,
                        true,
                        now,
                    ) {
                        tracing::warn!(alias = %alias, error = %error, "forced guess rejected");
                    }
                    impacted.push(alias);
                    continue;
                }
            }
            self.reveal_absent_inner(index, schedule);
            impacted.push(alias);
        }

        if !impacted.is_empty() {
            self.recalculate_ranking();
        }
        impacted
    }

    pub fn reveal_absent_letter(
        &mut self,
        alias: &str,
        schedule: &PointSchedule,
    ) -> Result<(), GameError> {
        if self.status != RoundStatus::Playing {
            return Err(GameError::InvalidState(
                "cannot reveal a letter when the round is not in play".to_string(),
            ));
        }
        let index = self.player_index(alias)?;
        self.reveal_absent_inner(index, schedule);
        self.recalculate_ranking();
        Ok(())
    }

    fn reveal_absent_inner(&mut self, index: usize, schedule: &PointSchedule) {
        let answer = self.answer.clone().unwrap_or_default();
        let remaining: Vec<char> = match self.players[index].board.as_ref() {
            Some(board) => ALPHABET
                .iter()
                .copied()
                .filter(|c| !board.absent_letters.contains(c) && !answer.contains(*c))
                .collect(),
            None => return,
        };
        if remaining.is_empty() {
            return;
        }
        let letter = match remaining.choose(&mut self.rng) {
            Some(letter) => *letter,
            None => return,
        };
        if let Some(board) = self.players[index].board.as_mut() {
            board.reveal_absent_letter(letter);
            let cost = schedule.revealed_absent_cost;
            if cost != 0 {
                board.add_point_adjustment(PointAdjustment::new(
                    PointAdjustmentReason::AbsentLetterRevealed,
                    -cost,
                ));
            }
        }
    }

    pub fn reveal_present_letter(
        &mut self,
        alias: &str,
        schedule: &PointSchedule,
    ) -> Result<(), GameError> {
        if self.status != RoundStatus::Playing {
            return Err(GameError::InvalidState(
                "cannot reveal a letter when the round is not in play".to_string(),
            ));
        }
        let index = self.player_index(alias)?;
        let answer = self.answer.clone().unwrap_or_default();

        // Answer letters minus the multiplicity already known present.
        let remaining: Vec<char> = match self.players[index].board.as_ref() {
            Some(board) => {
                let mut pool: Vec<char> = answer.chars().collect();
                for (&letter, &count) in &board.present_letter_counts {
                    for _ in 0..count {
                        if let Some(pos) = pool.iter().position(|&c| c == letter) {
                            pool.remove(pos);
                        }
                    }
                }
                pool
            }
            None => return Ok(()),
        };
        if remaining.is_empty() {
            return Ok(());
        }
        let letter = match remaining.choose(&mut self.rng) {
            Some(letter) => *letter,
            None => return Ok(()),
        };
        if let Some(board) = self.players[index].board.as_mut() {
            board.reveal_present_letter(letter);
            let cost = schedule.revealed_present_cost;
            if cost != 0 {
                board.add_point_adjustment(PointAdjustment::new(
                    PointAdjustmentReason::PresentLetterRevealed,
                    -cost,
                ));
            }
        }
        self.recalculate_ranking();
        Ok(())
    }

    /// Plan a bot's next move: the word, its expected guess number and how
    /// long the bot should pretend to think first.
    pub fn bot_next_move(
        &mut self,
        words: &WordCatalog,
        alias: &str,
    ) -> Result<(String, usize, Duration), GameError> {
        if self.status != RoundStatus::Playing {
            return Err(GameError::InvalidState(
                "cannot plan a bot move when the round is not in play".to_string(),
            ));
        }
        let index = self.player_index(alias)?;
        let answer = self
            .answer
            .clone()
            .ok_or_else(|| GameError::InvalidState("round has no answer".to_string()))?;
        let brain = self.players[index]
            .bot
            .clone()
            .ok_or_else(|| GameError::InvalidState("player is not a bot".to_string()))?;
        let board = self.players[index]
            .board
            .as_ref()
            .ok_or_else(|| GameError::InvalidState("player has no board yet".to_string()))?;

        let guess_number = board.rows().len() + 1;
        let is_opening = board.rows().is_empty();
        let word = if is_opening {
            bot::opening_word(words, self.word_length, &mut self.rng)
                .ok_or_else(|| GameError::InvalidState("no words available".to_string()))?
        } else {
            let board = self.players[index]
                .board
                .as_ref()
                .ok_or_else(|| GameError::InvalidState("player has no board yet".to_string()))?;
            bot::select_word(words, board, &answer, &mut self.rng)
        };
        let delay = brain.think_delay(self.guess_time_limit_ms, is_opening);
        Ok((word, guess_number, delay))
    }

    // Ranking / finish -------------------------------------------------------

    fn solved_count(&self) -> usize {
        self.players
            .iter()
            .filter(|p| {
                p.board
                    .as_ref()
                    .map(|b| b.status() == BoardStatus::Solved)
                    .unwrap_or(false)
            })
            .count()
    }

    fn all_boards_finished(&self) -> bool {
        self.players
            .iter()
            .all(|p| p.board.as_ref().map(|b| b.is_finished()).unwrap_or(false))
    }

    /// Recompute board-level ranks across the round. Runs after every
    /// point-affecting event; ranking is derived state and never sticky.
    pub fn recalculate_ranking(&mut self) {
        let points: Vec<Option<i32>> = self
            .players
            .iter()
            .map(|p| p.board.as_ref().map(|b| b.points()))
            .collect();
        for (index, player) in self.players.iter_mut().enumerate() {
            let Some(board) = player.board.as_mut() else {
                continue;
            };
            let Some(mine) = points[index] else { continue };
            let rank = points
                .iter()
                .filter(|p| matches!(p, Some(other) if *other > mine))
                .count()
                + 1;
            let joint = points
                .iter()
                .filter(|p| matches!(p, Some(other) if *other == mine))
                .count()
                > 1;
            board.set_rank(rank, joint);
        }
    }

    /// Close the round: fold board points into cumulative player points
    /// and fix final ranks (ties share a rank).
    pub fn finish(&mut self, now: u64) {
        self.status = RoundStatus::Finished;
        self.end_time = Some(now);

        for player in &mut self.players {
            player.points += player.board.as_ref().map(|b| b.points()).unwrap_or(0);
        }

        let totals: Vec<i32> = self.players.iter().map(|p| p.points).collect();
        for (index, player) in self.players.iter_mut().enumerate() {
            let mine = totals[index];
            player.rank = totals.iter().filter(|&&p| p > mine).count() + 1;
            player.is_joint_rank = totals.iter().filter(|&&p| p == mine).count() > 1;
        }
    }

    // Deadlines --------------------------------------------------------------

    /// Earliest deadline strictly after `now` across unfinished boards;
    /// boards with staggered schedules (late joiners) each contribute
    /// their own. Boards already behind are handled when that next
    /// deadline fires.
    pub fn next_deadline_after(&self, now: u64) -> Option<u64> {
        if self.status != RoundStatus::Playing {
            return None;
        }
        self.players
            .iter()
            .filter(|p| {
                p.board
                    .as_ref()
                    .map(|b| !b.is_finished())
                    .unwrap_or(false)
            })
            .flat_map(|p| p.board.as_ref().map(|b| b.deadlines()).unwrap_or(&[]))
            .copied()
            .filter(|&d| d > now)
            .min()
    }

    /// Apply a new guess time limit to every live board, re-anchoring
    /// remaining deadlines at `now`
    pub fn reanchor_deadlines(&mut self, guess_time_limit_ms: u64, now: u64) {
        self.guess_time_limit_ms = guess_time_limit_ms;
        for player in &mut self.players {
            if let Some(board) = player.board.as_mut() {
                if !board.is_finished() {
                    board.reanchor_deadlines(guess_time_limit_ms, now);
                }
            }
        }
    }

    // Projections ------------------------------------------------------------

    pub fn view(&self, now: u64) -> RoundStateView {
        RoundStateView {
            status: self.status,
            players: self.players.iter().map(|p| p.view(now)).collect(),
            word_length: self.word_length,
            max_guesses: self.max_guesses,
            answer: self.answer.clone(),
            start_time: self.start_time,
            end_time: self.end_time,
            round_number: self.round_number,
        }
    }

    pub fn mask(&self, now: u64) -> MaskedRoundStateView {
        MaskedRoundStateView {
            status: self.status,
            players: self.players.iter().map(|p| p.mask(now)).collect(),
            word_length: self.word_length,
            max_guesses: self.max_guesses,
            start_time: self.start_time,
            end_time: self.end_time,
            round_number: self.round_number,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params() -> GameParameters {
        GameParameters::default()
    }

    fn conn() -> Uuid {
        Uuid::new_v4()
    }

    fn playing_round(aliases: &[&str], answer: &str) -> RoundState {
        let mut round = RoundState::new(&params(), 7);
        for alias in aliases {
            round.register_player(alias, conn(), 0).unwrap();
            round.toggle_ready(alias, true).unwrap();
        }
        assert_eq!(round.status(), RoundStatus::Ready);
        round.start_with_answer(answer.to_string(), 1_000);
        assert!(round.begin_playing());
        round
    }

    #[test]
    fn status_walks_forward_through_the_machine() {
        let mut round = RoundState::new(&params(), 1);
        assert_eq!(round.status(), RoundStatus::Waiting);

        round.register_player("ann", conn(), 0).unwrap();
        round.toggle_ready("ann", true).unwrap();
        assert_eq!(round.status(), RoundStatus::Ready);

        round.start_with_answer("BLAME".to_string(), 1_000);
        assert_eq!(round.status(), RoundStatus::Starting);

        assert!(round.begin_playing());
        assert_eq!(round.status(), RoundStatus::Playing);

        round
            .play_guess("ann", "BLAME", 1, &PointSchedule::default(), 2_000)
            .unwrap();
        assert_eq!(round.status(), RoundStatus::Finished);
    }

    #[test]
    fn ready_regresses_to_waiting_on_new_joiner_and_disconnect() {
        let mut round = RoundState::new(&params(), 1);
        round.register_player("ann", conn(), 0).unwrap();
        round.toggle_ready("ann", true).unwrap();
        assert_eq!(round.status(), RoundStatus::Ready);

        round.register_player("ben", conn(), 0).unwrap();
        assert_eq!(round.status(), RoundStatus::Waiting);

        round.toggle_ready("ben", true).unwrap();
        assert_eq!(round.status(), RoundStatus::Ready);

        round.mark_disconnected("ben");
        assert_eq!(round.status(), RoundStatus::Waiting);
    }

    #[test]
    fn disconnected_players_do_not_block_ready() {
        let mut round = RoundState::new(&params(), 1);
        round.register_player("ann", conn(), 0).unwrap();
        round.register_player("ben", conn(), 0).unwrap();
        round.mark_disconnected("ben");
        round.toggle_ready("ann", true).unwrap();
        assert_eq!(round.status(), RoundStatus::Ready);
    }

    #[test]
    fn bots_never_block_ready() {
        let mut round = RoundState::new(&params(), 1);
        round.register_player("ann", conn(), 0).unwrap();
        round.register_bot("Lexi".to_string(), BotBrain {
            personality: None,
            ability: 0.5,
        }, 0);
        round.toggle_ready("ann", true).unwrap();
        assert_eq!(round.status(), RoundStatus::Ready);
    }

    #[test]
    fn start_vote_fails_outside_ready() {
        let words = WordCatalog::new();
        let mut round = RoundState::new(&params(), 1);
        round.register_player("ann", conn(), 0).unwrap();
        assert!(matches!(
            round.start_new(&words, &params(), 1_000),
            Err(GameError::InvalidState(_))
        ));

        round.toggle_ready("ann", true).unwrap();
        round.start_new(&words, &params(), 1_000).unwrap();
        assert!(matches!(
            round.start_new(&words, &params(), 2_000),
            Err(GameError::InvalidState(_))
        ));
    }

    #[test]
    fn starting_fixes_answer_and_allocates_boards() {
        let words = WordCatalog::new();
        let mut round = RoundState::new(&params(), 42);
        round.register_player("ann", conn(), 0).unwrap();
        round.register_player("ben", conn(), 0).unwrap();
        for alias in ["ann", "ben"] {
            round.toggle_ready(alias, true).unwrap();
        }
        round.start_new(&words, &params(), 5_000).unwrap();

        let answer = round.answer().unwrap().to_string();
        assert_eq!(answer.len(), round.word_length());
        assert!(round.players().iter().all(|p| p.board.is_some()));
        assert_eq!(
            round.players()[0].board.as_ref().unwrap().deadlines()[0],
            5_000 + 30_000
        );
    }

    #[test]
    fn stale_guess_number_is_rejected() {
        let mut round = playing_round(&["ann"], "BLAME");
        let schedule = PointSchedule::default();
        round.play_guess("ann", "CRANE", 1, &schedule, 2_000).unwrap();
        assert_eq!(
            round.play_guess("ann", "TOAST", 1, &schedule, 3_000),
            Err(GameError::GuessOutOfSync { client: 1, server: 2 })
        );
    }

    #[test]
    fn two_player_round_ranks_solver_first() {
        let mut round = playing_round(&["ann", "ben"], "BLAME");
        let schedule = PointSchedule::default();

        round.play_guess("ann", "CRANE", 1, &schedule, 2_000).unwrap();
        round.play_guess("ben", "TOAST", 1, &schedule, 2_100).unwrap();
        round.play_guess("ann", "FLAME", 2, &schedule, 3_000).unwrap();
        round.play_guess("ann", "BLAME", 3, &schedule, 4_000).unwrap();

        let ann_board = round.player("ann").unwrap().board.as_ref().unwrap();
        assert_eq!(ann_board.status(), BoardStatus::Solved);
        assert_eq!(ann_board.solved_order(), Some(1));

        for n in 2..=6 {
            round.play_guess("ben", "TOAST", n, &schedule, 4_000 + n as u64).unwrap();
        }
        assert_eq!(round.status(), RoundStatus::Finished);

        let ann = round.player("ann").unwrap();
        let ben = round.player("ben").unwrap();
        assert_eq!(ann.rank, 1);
        assert_eq!(ben.rank, 2);
        assert!(!ann.is_joint_rank);
        assert!(!ben.is_joint_rank);
        assert!(ann.points > ben.points);
    }

    #[test]
    fn played_order_is_none_once_a_faster_player_solved() {
        let mut round = playing_round(&["ann", "ben"], "BLAME");
        let schedule = PointSchedule::default();

        round.play_guess("ann", "BLAME", 1, &schedule, 2_000).unwrap();
        round.play_guess("ben", "CRANE", 1, &schedule, 2_500).unwrap();
        let ben_board = round.player("ben").unwrap().board.as_ref().unwrap();
        assert_eq!(ben_board.rows()[0].played_order, Some(2));

        round.play_guess("ben", "TOAST", 2, &schedule, 3_000).unwrap();
        let ben_board = round.player("ben").unwrap().board.as_ref().unwrap();
        assert_eq!(ben_board.rows()[1].played_order, None);
    }

    #[test]
    fn overdue_board_gets_a_forced_row() {
        let words = WordCatalog::new();
        let schedule = PointSchedule::default();
        let mut round = playing_round(&["ann", "ben"], "BLAME");

        // ann keeps up, ben misses the first deadline (start 1s + 30s).
        round.play_guess("ann", "CRANE", 1, &schedule, 20_000).unwrap();
        let impacted = round.force_overdue_guesses(&words, &schedule, 31_500);
        assert_eq!(impacted, vec!["ben".to_string()]);

        let ben_board = round.player("ben").unwrap().board.as_ref().unwrap();
        assert_eq!(ben_board.rows().len(), 1);
        assert!(ben_board.rows()[0].was_forced);
        assert_eq!(ben_board.rows()[0].played_order, None);
        // Suggested-guess cost folded into the forced row.
        assert_eq!(ben_board.rows()[0].points_awarded, -50);
        assert_ne!(ben_board.rows()[0].word(), "BLAME");
    }

    #[test]
    fn forced_move_on_final_row_reveals_a_letter_instead() {
        let words = WordCatalog::new();
        let schedule = PointSchedule::default();
        let mut round = playing_round(&["ann"], "BLAME");

        for n in 1..=5 {
            round
                .play_guess("ann", "TOAST", n, &schedule, 1_500 + n as u64)
                .unwrap();
        }
        let before = round.player("ann").unwrap().board.as_ref().unwrap().clone();
        assert_eq!(before.rows().len(), 5);

        let impacted = round.force_overdue_guesses(&words, &schedule, 1_000 + 6 * 30_000);
        assert_eq!(impacted, vec!["ann".to_string()]);

        let board = round.player("ann").unwrap().board.as_ref().unwrap();
        // No forced sixth row; one extra absent letter instead.
        assert_eq!(board.rows().len(), 5);
        assert_eq!(
            board.absent_letters.len(),
            before.absent_letters.len() + 1
        );
        // Consolation reveal never leaks an answer letter.
        for letter in "BLAME".chars() {
            assert_eq!(
                board.absent_letters.contains(&letter),
                before.absent_letters.contains(&letter)
            );
        }
    }

    #[test]
    fn ready_toggle_fails_mid_round() {
        let mut round = playing_round(&["ann"], "BLAME");
        assert!(matches!(
            round.toggle_ready("ann", false),
            Err(GameError::InvalidState(_))
        ));
    }

    #[test]
    fn taken_alias_rejected_only_while_connected() {
        let mut round = RoundState::new(&params(), 1);
        let first = conn();
        round.register_player("ann", first, 0).unwrap();
        assert_eq!(
            round.register_player("ann", conn(), 0),
            Err(GameError::AliasTaken("ann".to_string()))
        );

        // Same session re-registering is fine.
        round.register_player("ann", first, 0).unwrap();

        // After a disconnect the alias can be claimed from a new session.
        round.mark_disconnected("ann");
        round.register_player("ann", conn(), 0).unwrap();
        assert!(round.player("ann").unwrap().is_connected);
    }

    #[test]
    fn late_joiner_gets_board_anchored_at_join_time() {
        let mut round = playing_round(&["ann"], "BLAME");
        round.register_player("ben", conn(), 50_000).unwrap();
        let board = round.player("ben").unwrap().board.as_ref().unwrap();
        assert_eq!(board.deadlines()[0], 50_000 + 30_000);
        // The sweep still targets ann's earlier schedule, not just ben's.
        assert_eq!(round.next_deadline_after(2_000), Some(31_000));
        // Between ann's first and second deadlines, ben's staggered first
        // deadline is the next stop.
        assert_eq!(round.next_deadline_after(61_000), Some(80_000));
    }

    #[test]
    fn removing_last_unfinished_player_finishes_the_round() {
        let mut round = playing_round(&["ann", "ben"], "BLAME");
        let schedule = PointSchedule::default();
        round.play_guess("ann", "BLAME", 1, &schedule, 2_000).unwrap();
        assert_eq!(round.status(), RoundStatus::Playing);

        round.remove_player("ben", 3_000).unwrap();
        assert_eq!(round.status(), RoundStatus::Finished);
        assert_eq!(round.player("ann").unwrap().rank, 1);
    }

    #[test]
    fn next_round_carries_points_and_resets_boards() {
        let mut round = playing_round(&["ann"], "BLAME");
        let schedule = PointSchedule::default();
        round.play_guess("ann", "BLAME", 1, &schedule, 2_000).unwrap();
        let carried = round.player("ann").unwrap().points;
        assert!(carried > 0);

        let next = round.next_round(&params(), 99);
        assert_eq!(next.status(), RoundStatus::Ready);
        assert_eq!(next.round_number(), 2);
        let ann = next.player("ann").unwrap();
        assert_eq!(ann.points, carried);
        assert!(ann.board.is_none());
        assert!(!ann.ready);
    }

    #[test]
    fn masked_round_hides_the_answer() {
        let mut round = playing_round(&["ann"], "BLAME");
        let schedule = PointSchedule::default();
        round.play_guess("ann", "CRANE", 1, &schedule, 2_000).unwrap();

        let masked = serde_json::to_string(&round.mask(2_000)).unwrap();
        assert!(!masked.contains("BLAME"));
        assert!(!masked.contains("CRANE"));
        assert!(!masked.contains("answer"));

        let full = serde_json::to_string(&round.view(2_000)).unwrap();
        assert!(full.contains("BLAME"));
    }

    #[test]
    fn suggestion_never_returns_the_answer_and_charges() {
        let words = WordCatalog::new();
        let schedule = PointSchedule::default();
        let mut round = playing_round(&["ann"], "BLAME");
        for _ in 0..10 {
            if let Some(word) = round.suggest_guess(&words, "ann", &schedule).unwrap() {
                assert_ne!(word, "BLAME");
            }
        }
        assert!(round.player("ann").unwrap().board.as_ref().unwrap().points() < 0);
    }

    #[test]
    fn reveal_present_letter_comes_from_the_answer() {
        let schedule = PointSchedule::default();
        let mut round = playing_round(&["ann"], "BLAME");
        round.reveal_present_letter("ann", &schedule).unwrap();
        let board = round.player("ann").unwrap().board.as_ref().unwrap();
        let revealed: Vec<char> = board.present_letter_counts.keys().copied().collect();
        assert_eq!(revealed.len(), 1);
        assert!("BLAME".contains(revealed[0]));
        assert_eq!(board.points(), -schedule.revealed_present_cost);
    }
}
