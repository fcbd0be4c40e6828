//! Per-player puzzle state: tiles, rows, letter knowledge, deadlines

use std::collections::{HashMap, HashSet};

use serde::Serialize;

use crate::game::error::GameError;
use crate::game::scoring::PointSchedule;
use crate::util::hash::hint_hash;
use crate::ws::protocol::{
    BoardView, MaskedBoardView, MaskedRowView, MaskedTileView, PointAdjustmentView, RowView,
    TileView,
};

pub const ALPHABET: &[char] = &[
    'A', 'B', 'C', 'D', 'E', 'F', 'G', 'H', 'I', 'J', 'K', 'L', 'M', 'N', 'O', 'P', 'Q', 'R',
    'S', 'T', 'U', 'V', 'W', 'X', 'Y', 'Z',
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TileStatus {
    Correct,
    Present,
    Absent,
}

impl TileStatus {
    fn key(&self) -> &'static str {
        match self {
            TileStatus::Correct => "correct",
            TileStatus::Present => "present",
            TileStatus::Absent => "absent",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum BoardStatus {
    Playing,
    Solved,
    Failed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum HardModeError {
    AbsentLetterPlayed,
    PresentLetterPlayedInSamePlace,
    CorrectLetterMissed,
    PresentLetterMissed,
}

impl HardModeError {
    pub fn name(&self) -> &'static str {
        match self {
            HardModeError::AbsentLetterPlayed => "AbsentLetterPlayed",
            HardModeError::PresentLetterPlayedInSamePlace => "PresentLetterPlayedInSamePlace",
            HardModeError::CorrectLetterMissed => "CorrectLetterMissed",
            HardModeError::PresentLetterMissed => "PresentLetterMissed",
        }
    }
}

/// A letter plus the position it relates to. Position is `None` for
/// knowledge without positional information (e.g. a revealed present
/// letter).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct LetterSlot {
    pub letter: char,
    pub position: Option<usize>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tile {
    pub letter: char,
    pub position: usize,
    pub status: TileStatus,
}

impl Tile {
    fn slot(&self) -> LetterSlot {
        LetterSlot {
            letter: self.letter,
            position: Some(self.position),
        }
    }

    /// Identity hint for client caches. Absent tiles hash without the
    /// position: an absent letter is absent everywhere.
    pub fn status_hash(&self) -> String {
        match self.status {
            TileStatus::Absent => hint_hash(&format!("{}:absent", self.letter)),
            status => hint_hash(&format!("{}:{}:{}", self.letter, status.key(), self.position)),
        }
    }

    pub fn view(&self) -> TileView {
        TileView {
            letter: self.letter,
            position: self.position,
            status: self.status,
            status_hash: self.status_hash(),
        }
    }

    pub fn mask(&self) -> MaskedTileView {
        MaskedTileView {
            position: self.position,
            status: self.status,
            status_hash: self.status_hash(),
        }
    }
}

/// A guess that contradicted previously revealed letter knowledge
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TileError {
    pub slot: Option<LetterSlot>,
    pub error: HardModeError,
}

impl TileError {
    pub fn describe(&self) -> String {
        match self.slot {
            Some(slot) => format!("{} ({})", self.error.name(), slot.letter),
            None => self.error.name().to_string(),
        }
    }

    /// Description safe to show opponents (no letter identity)
    pub fn masked_describe(&self) -> String {
        self.error.name().to_string()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PointAdjustmentReason {
    GuessSuggested,
    AbsentLetterRevealed,
    PresentLetterRevealed,
    CorrectSolutionOrder,
    CorrectSolutionGuessNumber,
    ValidGuessOrder,
    HardModeError,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PointAdjustment {
    pub reason: PointAdjustmentReason,
    pub points: i32,
    pub description: Option<String>,
    pub masked_description: Option<String>,
}

impl PointAdjustment {
    pub fn new(reason: PointAdjustmentReason, points: i32) -> Self {
        Self {
            reason,
            points,
            description: None,
            masked_description: None,
        }
    }

    pub fn with_description(
        reason: PointAdjustmentReason,
        points: i32,
        description: String,
    ) -> Self {
        Self {
            reason,
            points,
            description: Some(description),
            masked_description: None,
        }
    }

    pub fn with_masked_description(
        reason: PointAdjustmentReason,
        points: i32,
        description: String,
        masked_description: String,
    ) -> Self {
        Self {
            reason,
            points,
            description: Some(description),
            masked_description: Some(masked_description),
        }
    }

    pub fn view(&self) -> PointAdjustmentView {
        PointAdjustmentView {
            reason: self.reason,
            points: self.points,
            description: self.description.clone(),
        }
    }

    pub fn mask(&self) -> PointAdjustmentView {
        PointAdjustmentView {
            reason: self.reason,
            points: self.points,
            description: self.masked_description.clone(),
        }
    }
}

/// One submitted guess. Immutable once created, except that scoring may
/// append adjustments before the round moves on.
#[derive(Debug, Clone)]
pub struct Row {
    pub tiles: Vec<Tile>,
    pub is_correct: bool,
    pub errors: Vec<TileError>,
    pub played_at: u64,
    /// None once the answer was already found by a faster player
    pub played_order: Option<usize>,
    pub adjustments: Vec<PointAdjustment>,
    pub points_awarded: i32,
    pub guess_number: usize,
    pub was_forced: bool,
}

impl Row {
    /// Classify `guess` against `answer`. Repeated letters resolve left to
    /// right: a letter is Present only while the answer still has
    /// unconsumed occurrences beyond exact matches.
    pub fn new(
        guess: &str,
        answer: &str,
        played_order: Option<usize>,
        guess_number: usize,
        pending_adjustments: Vec<PointAdjustment>,
        was_forced: bool,
        now: u64,
    ) -> Self {
        let guess_chars: Vec<char> = guess.chars().collect();
        let answer_chars: Vec<char> = answer.chars().collect();

        let correct: Vec<char> = guess_chars
            .iter()
            .zip(&answer_chars)
            .filter(|(g, a)| g == a)
            .map(|(g, _)| *g)
            .collect();
        let mut present: Vec<char> = Vec::new();

        let tiles: Vec<Tile> = guess_chars
            .iter()
            .enumerate()
            .map(|(i, &c)| {
                let status = if c == answer_chars[i] {
                    TileStatus::Correct
                } else if answer_chars.contains(&c) {
                    let answer_count = answer_chars.iter().filter(|&&a| a == c).count();
                    let consumed = present.iter().filter(|&&p| p == c).count()
                        + correct.iter().filter(|&&p| p == c).count();
                    if answer_count > consumed {
                        present.push(c);
                        TileStatus::Present
                    } else {
                        TileStatus::Absent
                    }
                } else {
                    TileStatus::Absent
                };
                Tile {
                    letter: c,
                    position: i,
                    status,
                }
            })
            .collect();

        let points_awarded = pending_adjustments.iter().map(|a| a.points).sum();

        Self {
            tiles,
            is_correct: guess == answer,
            errors: Vec::new(),
            played_at: now,
            played_order,
            adjustments: pending_adjustments,
            points_awarded,
            guess_number,
            was_forced,
        }
    }

    pub fn word(&self) -> String {
        self.tiles.iter().map(|t| t.letter).collect()
    }

    pub fn word_hash(&self) -> String {
        hint_hash(&self.word())
    }

    pub fn add_adjustments(&mut self, adjustments: Vec<PointAdjustment>) {
        self.adjustments.extend(adjustments);
        self.points_awarded = self.adjustments.iter().map(|a| a.points).sum();
    }

    pub fn view(&self) -> RowView {
        RowView {
            tiles: self.tiles.iter().map(Tile::view).collect(),
            is_correct: self.is_correct,
            errors: self.errors.iter().map(TileError::describe).collect(),
            played_at: self.played_at,
            guess_number: self.guess_number,
            played_order: self.played_order,
            points_awarded: self.points_awarded,
            adjustments: self.adjustments.iter().map(PointAdjustment::view).collect(),
            was_forced: self.was_forced,
            word_hash: self.word_hash(),
        }
    }

    pub fn mask(&self) -> MaskedRowView {
        MaskedRowView {
            tiles: self.tiles.iter().map(Tile::mask).collect(),
            is_correct: self.is_correct,
            played_at: self.played_at,
            guess_number: self.guess_number,
            played_order: self.played_order,
            points_awarded: self.points_awarded,
            adjustments: self.adjustments.iter().map(PointAdjustment::mask).collect(),
            was_forced: self.was_forced,
            word_hash: self.word_hash(),
        }
    }
}

/// One player's puzzle instance for one round
#[derive(Debug, Clone)]
pub struct Board {
    rows: Vec<Row>,
    pending_adjustments: Vec<PointAdjustment>,

    pub correct_letters: HashSet<LetterSlot>,
    pub present_letters: HashSet<LetterSlot>,
    pub absent_letters: HashSet<char>,
    /// Minimum multiplicity known present, per letter
    pub present_letter_counts: HashMap<char, usize>,
    letter_statuses: HashMap<char, TileStatus>,

    status: BoardStatus,
    solved_order: Option<usize>,
    points: i32,
    rank: usize,
    is_joint_rank: bool,

    started_at: u64,
    completion_ms: Option<u64>,
    guess_time_limit_ms: u64,
    max_guesses: usize,
    deadlines: Vec<u64>,
}

impl Board {
    pub fn new(guess_time_limit_ms: u64, max_guesses: usize, started_at: u64) -> Self {
        let deadlines = (1..=max_guesses as u64)
            .map(|k| started_at + k * guess_time_limit_ms)
            .collect();
        Self {
            rows: Vec::new(),
            pending_adjustments: Vec::new(),
            correct_letters: HashSet::new(),
            present_letters: HashSet::new(),
            absent_letters: HashSet::new(),
            present_letter_counts: HashMap::new(),
            letter_statuses: HashMap::new(),
            status: BoardStatus::Playing,
            solved_order: None,
            points: 0,
            rank: 1,
            is_joint_rank: true,
            started_at,
            completion_ms: None,
            guess_time_limit_ms,
            max_guesses,
            deadlines,
        }
    }

    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    pub fn status(&self) -> BoardStatus {
        self.status
    }

    pub fn is_finished(&self) -> bool {
        matches!(self.status, BoardStatus::Solved | BoardStatus::Failed)
    }

    pub fn points(&self) -> i32 {
        self.points
    }

    pub fn solved_order(&self) -> Option<usize> {
        self.solved_order
    }

    pub fn max_guesses(&self) -> usize {
        self.max_guesses
    }

    pub fn set_rank(&mut self, rank: usize, is_joint: bool) {
        self.rank = rank;
        self.is_joint_rank = is_joint;
    }

    /// Classify a guess and fold it into the board. Returns the hard-mode
    /// errors the new row commits against prior knowledge.
    #[allow(clippy::too_many_arguments)]
    pub fn submit_guess(
        &mut self,
        guess: &str,
        answer: &str,
        played_order: Option<usize>,
        solved_count: Option<usize>,
        player_count: usize,
        schedule: Option<&PointSchedule>,
        was_forced: bool,
        now: u64,
    ) -> Result<Vec<TileError>, GameError> {
        if self.status != BoardStatus::Playing || self.rows.len() >= self.max_guesses {
            return Err(GameError::BoardComplete);
        }
        let guess = guess.to_uppercase();
        if guess.chars().count() != answer.chars().count() {
            return Err(GameError::WrongLength(answer.chars().count()));
        }

        let guess_number = self.rows.len() + 1;
        let mut row = Row::new(
            &guess,
            answer,
            played_order,
            guess_number,
            std::mem::take(&mut self.pending_adjustments),
            was_forced,
            now,
        );
        let errors = self.row_errors(&row);
        row.errors = errors.clone();

        let mut row_present_letters: Vec<char> = Vec::new();
        for tile in &row.tiles {
            match tile.status {
                TileStatus::Correct => {
                    self.correct_letters.insert(tile.slot());
                    row_present_letters.push(tile.letter);
                    self.letter_statuses.insert(tile.letter, TileStatus::Correct);
                }
                TileStatus::Present => {
                    self.present_letters.insert(tile.slot());
                    row_present_letters.push(tile.letter);
                    self.letter_statuses
                        .entry(tile.letter)
                        .or_insert(TileStatus::Present);
                }
                TileStatus::Absent => {
                    self.absent_letters.insert(tile.letter);
                    self.letter_statuses
                        .entry(tile.letter)
                        .or_insert(TileStatus::Absent);
                }
            }
        }

        for &letter in &row_present_letters {
            let seen = row_present_letters.iter().filter(|&&l| l == letter).count();
            let entry = self.present_letter_counts.entry(letter).or_insert(0);
            *entry = (*entry).max(seen);
        }

        if row.is_correct {
            self.status = BoardStatus::Solved;
            self.solved_order = solved_count.map(|count| count + 1);
            self.completion_ms = Some(now.saturating_sub(self.started_at));
        } else if guess_number == self.max_guesses {
            self.status = BoardStatus::Failed;
        }

        if let Some(schedule) = schedule {
            let adjustments = schedule.points_for_guess(&row, self.solved_order, player_count);
            row.add_adjustments(adjustments);
        }

        self.rows.push(row);
        self.recalculate_points();

        Ok(errors)
    }

    pub fn give_up(&mut self) -> Result<(), GameError> {
        if self.status != BoardStatus::Playing {
            return Err(GameError::InvalidState(format!(
                "cannot give up while status is {:?}",
                self.status
            )));
        }
        self.status = BoardStatus::Failed;
        Ok(())
    }

    pub fn add_point_adjustment(&mut self, adjustment: PointAdjustment) {
        self.pending_adjustments.push(adjustment);
        self.recalculate_points();
    }

    pub fn reveal_absent_letter(&mut self, letter: char) {
        self.absent_letters.insert(letter);
        self.letter_statuses.insert(letter, TileStatus::Absent);
    }

    pub fn reveal_present_letter(&mut self, letter: char) {
        self.present_letters.insert(LetterSlot {
            letter,
            position: None,
        });
        *self.present_letter_counts.entry(letter).or_insert(0) += 1;
        self.letter_statuses.entry(letter).or_insert(TileStatus::Present);
    }

    fn recalculate_points(&mut self) {
        let pending: i32 = self.pending_adjustments.iter().map(|a| a.points).sum();
        self.points = self.rows.iter().map(|r| r.points_awarded).sum::<i32>() + pending;
    }

    /// Compare a new row against accumulated knowledge before that
    /// knowledge absorbs the row.
    fn row_errors(&self, row: &Row) -> Vec<TileError> {
        let mut errors = Vec::new();

        for tile in &row.tiles {
            if tile.status == TileStatus::Correct {
                continue;
            }
            if self.present_letters.contains(&tile.slot()) {
                errors.push(TileError {
                    slot: Some(tile.slot()),
                    error: HardModeError::PresentLetterPlayedInSamePlace,
                });
            }
            if tile.status == TileStatus::Absent && self.absent_letters.contains(&tile.letter) {
                errors.push(TileError {
                    slot: Some(tile.slot()),
                    error: HardModeError::AbsentLetterPlayed,
                });
            }
            if let Some(&known) = self
                .correct_letters
                .iter()
                .find(|slot| slot.position == Some(tile.position))
            {
                errors.push(TileError {
                    slot: Some(known),
                    error: HardModeError::CorrectLetterMissed,
                });
            }
        }

        for (&letter, &minimum) in &self.present_letter_counts {
            let played = row.tiles.iter().filter(|t| t.letter == letter).count();
            if played < minimum {
                let shortfall = minimum - played;
                // Missed correct letters of this letter are already flagged
                // above; don't penalize the same missing instance twice.
                let already_flagged = errors
                    .iter()
                    .filter(|e| e.error == HardModeError::CorrectLetterMissed)
                    .filter(|e| e.slot.map(|s| s.letter) == Some(letter))
                    .count();
                for _ in 0..shortfall.saturating_sub(already_flagged) {
                    errors.push(TileError {
                        slot: Some(LetterSlot {
                            letter,
                            position: None,
                        }),
                        error: HardModeError::PresentLetterMissed,
                    });
                }
            }
        }

        errors
    }

    // Deadline schedule -----------------------------------------------------

    pub fn deadlines(&self) -> &[u64] {
        &self.deadlines
    }

    /// How many guesses the schedule expects to have been played by `now`
    pub fn current_expected_guess_count(&self, now: u64) -> usize {
        self.deadlines.iter().filter(|&&d| d <= now).count()
    }

    /// Deadline for the next unplayed row, if any remain
    pub fn next_guess_deadline(&self) -> Option<u64> {
        if self.is_finished() {
            return None;
        }
        self.deadlines.get(self.rows.len()).copied()
    }

    /// Whether this board is behind its schedule and due a forced move
    pub fn guess_timer_elapsed(&self, now: u64) -> bool {
        self.status == BoardStatus::Playing
            && self.rows.len() < self.current_expected_guess_count(now)
    }

    /// Re-anchor remaining deadlines after a time-limit change; played rows
    /// keep their historical deadlines.
    pub fn reanchor_deadlines(&mut self, guess_time_limit_ms: u64, now: u64) {
        self.guess_time_limit_ms = guess_time_limit_ms;
        let played = self.rows.len();
        for (offset, deadline) in self.deadlines.iter_mut().skip(played).enumerate() {
            *deadline = now + (offset as u64 + 1) * guess_time_limit_ms;
        }
    }

    // Projections -----------------------------------------------------------

    pub fn view(&self, now: u64) -> BoardView {
        BoardView {
            rows: self.rows.iter().map(Row::view).collect(),
            status: self.status,
            solved_order: self.solved_order,
            points: self.points,
            current_row_points: self.pending_adjustments.iter().map(|a| a.points).sum(),
            rank: self.rank,
            is_joint_rank: self.is_joint_rank,
            completion_ms: self.completion_ms,
            correct_letters: self.correct_letters.iter().copied().collect(),
            present_letters: self.present_letters.iter().copied().collect(),
            absent_letters: self.absent_letters.iter().copied().collect(),
            present_letter_counts: self.present_letter_counts.clone(),
            letter_statuses: self.letter_statuses.clone(),
            deadlines: self.deadlines.clone(),
            next_guess_deadline: self.next_guess_deadline(),
            current_expected_guess_count: self.current_expected_guess_count(now),
            guess_time_limit_ms: self.guess_time_limit_ms,
        }
    }

    /// Reduced view for opponents and spectators: no letters, no letter
    /// knowledge, only identity hashes.
    pub fn mask(&self, now: u64) -> MaskedBoardView {
        MaskedBoardView {
            rows: self.rows.iter().map(Row::mask).collect(),
            status: self.status,
            solved_order: self.solved_order,
            points: self.points,
            current_row_points: self.pending_adjustments.iter().map(|a| a.points).sum(),
            rank: self.rank,
            is_joint_rank: self.is_joint_rank,
            completion_ms: self.completion_ms,
            deadlines: self.deadlines.clone(),
            next_guess_deadline: self.next_guess_deadline(),
            current_expected_guess_count: self.current_expected_guess_count(now),
            guess_time_limit_ms: self.guess_time_limit_ms,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const LIMIT_MS: u64 = 30_000;

    fn board() -> Board {
        Board::new(LIMIT_MS, 6, 0)
    }

    fn statuses(guess: &str, answer: &str) -> Vec<TileStatus> {
        Row::new(guess, answer, Some(1), 1, Vec::new(), false, 0)
            .tiles
            .iter()
            .map(|t| t.status)
            .collect()
    }

    #[test]
    fn tile_classification_matches_known_cases() {
        use TileStatus::{Absent as A, Correct as C, Present as P};
        let cases: &[(&str, &str, [TileStatus; 5])] = &[
            ("WRONG", "BLAME", [A, A, A, A, A]),
            ("SLIME", "BLAME", [A, C, A, C, C]),
            ("FALSE", "BLAME", [A, P, P, A, C]),
            ("ALARM", "BLAME", [A, C, C, A, P]),
            ("BLAME", "BLAME", [C, C, C, C, C]),
            ("LIMES", "SLIME", [P, P, P, P, P]),
            ("AMAZE", "BLAST", [A, A, C, A, A]),
            ("ALTAR", "BLAST", [P, C, P, A, A]),
        ];
        for (guess, answer, expected) in cases {
            assert_eq!(
                statuses(guess, answer),
                expected.to_vec(),
                "{guess} vs {answer}"
            );
        }
    }

    #[test]
    fn correct_or_present_count_is_bounded_by_answer_multiplicity() {
        let pairs = [
            ("ALARM", "BLAME"),
            ("AABBB", "ABABA"),
            ("EERIE", "SIEGE"),
            ("LLAMA", "ALTAR"),
        ];
        for (guess, answer) in pairs {
            let row = Row::new(guess, answer, Some(1), 1, Vec::new(), false, 0);
            for letter in ALPHABET {
                let in_answer = answer.chars().filter(|c| c == letter).count();
                let in_guess = guess.chars().filter(|c| c == letter).count();
                let marked = row
                    .tiles
                    .iter()
                    .filter(|t| t.letter == *letter && t.status != TileStatus::Absent)
                    .count();
                assert_eq!(
                    marked,
                    in_answer.min(in_guess),
                    "{guess} vs {answer}, letter {letter}"
                );
            }
        }
    }

    fn error_counts(errors: &[TileError]) -> HashMap<HardModeError, usize> {
        let mut counts = HashMap::new();
        for e in errors {
            *counts.entry(e.error).or_insert(0) += 1;
        }
        counts
    }

    fn assert_errors(answer: &str, guesses: &[&str], expected: &[HardModeError]) {
        let mut board = board();
        let mut last = Vec::new();
        for guess in guesses {
            last = board
                .submit_guess(guess, answer, Some(1), Some(0), 1, None, false, 0)
                .unwrap();
        }
        let actual = error_counts(&last);
        let mut wanted: HashMap<HardModeError, usize> = HashMap::new();
        for e in expected {
            *wanted.entry(*e).or_insert(0) += 1;
        }
        assert_eq!(actual, wanted, "{answer} after {guesses:?}");
    }

    #[test]
    fn second_guess_hard_mode_errors() {
        use HardModeError::*;
        assert_errors("ABCDE", &["FGHIJ", "JKLMN"], &[AbsentLetterPlayed]);
        assert_errors("ABCDE", &["AFGHI", "JKLMN"], &[CorrectLetterMissed]);
        assert_errors("ABCDE", &["FGHIA", "JKLMN"], &[PresentLetterMissed]);
        assert_errors("ABCDE", &["FGHIA", "JKLMA"], &[PresentLetterPlayedInSamePlace]);
        assert_errors("ABCDE", &["AGAIJ", "AKLMA"], &[AbsentLetterPlayed]);
        assert_errors("AACDE", &["AGAIJ", "AKLMA"], &[]);
        assert_errors("AACDE", &["AGAIJ", "AACDE"], &[]);
        assert_errors(
            "ABCDE",
            &["JBDCB", "JDDFG"],
            &[
                AbsentLetterPlayed,
                CorrectLetterMissed,
                PresentLetterPlayedInSamePlace,
                PresentLetterMissed,
            ],
        );
        assert_errors(
            "ABCDE",
            &["AGABJ", "AKLBA"],
            &[AbsentLetterPlayed, PresentLetterPlayedInSamePlace],
        );
        assert_errors("LUPUS", &["BLUSH", "LUSTY"], &[]);
        assert_errors("ABBBB", &["CAACC", "DDDDA"], &[]);
        assert_errors("ABBBB", &["CAACC", "DDDAA"], &[AbsentLetterPlayed]);
        assert_errors("AABBB", &["ACACC", "ADDDD"], &[PresentLetterMissed]);
        assert_errors("AABBB", &["CCAAC", "DDDDA"], &[PresentLetterMissed]);
        assert_errors("AABBB", &["AACCC", "ADDDA"], &[CorrectLetterMissed]);
        assert_errors("AABBB", &["AACCC", "ADDDD"], &[CorrectLetterMissed]);
    }

    #[test]
    fn third_guess_hard_mode_errors() {
        use HardModeError::*;
        assert_errors("LUPUS", &["SOLVE", "BLUSH", "LUSTY"], &[]);
        assert_errors("ABBBB", &["CAACC", "DDDAD", "EEEEA"], &[]);
        assert_errors("ABBBB", &["CAACC", "DDDAD", "AEEEA"], &[AbsentLetterPlayed]);
        assert_errors("AABBB", &["ACACC", "ADDAD", "AEEEA"], &[]);
    }

    #[test]
    fn first_guess_never_errors() {
        let mut b = board();
        let errors = b
            .submit_guess("FGHIJ", "ABCDE", Some(1), Some(0), 1, None, false, 0)
            .unwrap();
        assert!(errors.is_empty());
    }

    #[test]
    fn solving_sets_status_and_order() {
        let mut b = board();
        b.submit_guess("CRANE", "BLAME", Some(1), Some(0), 2, None, false, 500)
            .unwrap();
        b.submit_guess("BLAME", "BLAME", Some(1), Some(1), 2, None, false, 1_500)
            .unwrap();
        assert_eq!(b.status(), BoardStatus::Solved);
        assert_eq!(b.solved_order(), Some(2));
        assert_eq!(b.rows().len(), 2);
        assert!(b.is_finished());
    }

    #[test]
    fn exhausting_guesses_fails_the_board() {
        let mut b = board();
        for _ in 0..6 {
            b.submit_guess("WRONG", "BLAME", Some(1), Some(0), 1, None, false, 0)
                .unwrap();
        }
        assert_eq!(b.status(), BoardStatus::Failed);
    }

    #[test]
    fn submit_after_finish_fails_without_mutation() {
        let mut b = board();
        b.submit_guess("BLAME", "BLAME", Some(1), Some(0), 1, None, false, 0)
            .unwrap();
        let before = b.rows().len();
        assert_eq!(
            b.submit_guess("CRANE", "BLAME", Some(1), Some(1), 1, None, false, 0),
            Err(GameError::BoardComplete)
        );
        assert_eq!(b.rows().len(), before);

        let mut failed = board();
        failed.give_up().unwrap();
        assert_eq!(
            failed.submit_guess("CRANE", "BLAME", Some(1), Some(0), 1, None, false, 0),
            Err(GameError::BoardComplete)
        );
    }

    #[test]
    fn wrong_length_guess_is_rejected() {
        let mut b = board();
        assert_eq!(
            b.submit_guess("GOLD", "ABODE", Some(1), Some(0), 1, None, false, 0),
            Err(GameError::WrongLength(5))
        );
        assert!(b.rows().is_empty());
    }

    #[test]
    fn give_up_only_from_playing() {
        let mut b = board();
        b.give_up().unwrap();
        assert_eq!(b.status(), BoardStatus::Failed);
        assert!(matches!(b.give_up(), Err(GameError::InvalidState(_))));
    }

    #[test]
    fn pending_adjustments_fold_into_next_row() {
        let mut b = board();
        b.add_point_adjustment(PointAdjustment::new(
            PointAdjustmentReason::GuessSuggested,
            -50,
        ));
        assert_eq!(b.points(), -50);
        b.submit_guess("CRANE", "BLAME", Some(1), Some(0), 1, None, false, 0)
            .unwrap();
        assert_eq!(b.rows()[0].points_awarded, -50);
        assert_eq!(b.points(), -50);
        // The pending bucket is empty again.
        b.submit_guess("TOAST", "BLAME", None, Some(0), 1, None, false, 0)
            .unwrap();
        assert_eq!(b.rows()[1].points_awarded, 0);
    }

    #[test]
    fn masking_is_idempotent_and_hides_letters() {
        let mut b = board();
        b.submit_guess("ALARM", "BLAME", Some(1), Some(0), 2, None, false, 0)
            .unwrap();
        let first = b.mask(1_000);
        let second = b.mask(1_000);
        assert_eq!(first, second);

        let json = serde_json::to_string(&first).unwrap();
        assert!(!json.contains("\"letter\""));
        assert!(!json.contains("BLAME"));

        // Matching tiles still expose a stable identity hash.
        let full = b.view(1_000);
        assert_eq!(first.rows[0].tiles[1].status_hash, full.rows[0].tiles[1].status_hash);
    }

    #[test]
    fn deadline_schedule_tracks_expected_guesses() {
        let b = Board::new(LIMIT_MS, 6, 10_000);
        assert_eq!(b.deadlines().len(), 6);
        assert_eq!(b.deadlines()[0], 40_000);
        assert_eq!(b.current_expected_guess_count(39_999), 0);
        assert_eq!(b.current_expected_guess_count(40_000), 1);
        assert_eq!(b.current_expected_guess_count(100_000), 3);
        assert!(!b.guess_timer_elapsed(39_999));
        assert!(b.guess_timer_elapsed(40_000));
    }

    #[test]
    fn playing_keeps_up_with_the_schedule() {
        let mut b = Board::new(LIMIT_MS, 6, 0);
        b.submit_guess("CRANE", "BLAME", Some(1), Some(0), 1, None, false, 25_000)
            .unwrap();
        assert!(!b.guess_timer_elapsed(31_000));
        assert_eq!(b.next_guess_deadline(), Some(60_000));
    }

    #[test]
    fn reanchor_reschedules_only_future_deadlines() {
        let mut b = Board::new(LIMIT_MS, 6, 0);
        b.submit_guess("CRANE", "BLAME", Some(1), Some(0), 1, None, false, 10_000)
            .unwrap();
        b.reanchor_deadlines(10_000, 50_000);
        assert_eq!(b.deadlines()[0], 30_000);
        assert_eq!(b.deadlines()[1], 60_000);
        assert_eq!(b.deadlines()[2], 70_000);
        assert_eq!(b.next_guess_deadline(), Some(60_000));
    }

    #[test]
    fn revealed_letters_join_knowledge() {
        let mut b = board();
        b.reveal_absent_letter('Q');
        assert!(b.absent_letters.contains(&'Q'));
        b.reveal_present_letter('A');
        assert_eq!(b.present_letter_counts.get(&'A'), Some(&1));
        assert!(b.present_letters.contains(&LetterSlot {
            letter: 'A',
            position: None
        }));
    }
}
