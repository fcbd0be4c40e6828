//! Point schedule and score computation
//!
//! Scoring is pure: a row is scored exactly once at submission time and
//! never rewritten by later rows or other players. Ranking is derived
//! elsewhere and always recomputed.

use serde::Serialize;

use crate::game::board::{HardModeError, PointAdjustment, PointAdjustmentReason, Row};

/// How order-based awards scale with the number of competitors
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PointScaleType {
    /// Direct table lookup by 1-based order; 0 beyond the table
    Fixed,
    /// Base points scaled by how many players finished ahead
    Dynamic,
}

/// Configurable point tables and costs
#[derive(Debug, Clone, Serialize)]
pub struct PointSchedule {
    pub scale_type: PointScaleType,

    /// Points by order of submitting a valid guess, one table per guess
    /// number (fixed mode)
    pub valid_guess_order_points: Vec<Vec<i32>>,

    /// Base points for the first valid guess, by guess number (dynamic mode)
    pub first_valid_guess_points: Vec<i32>,

    /// Points by order of reaching the correct answer (fixed mode)
    pub correct_order_points: Vec<i32>,

    /// Base points for solving first (dynamic mode)
    pub first_correct_points: i32,

    /// Points for which guess number solved the puzzle
    pub solution_guess_number_points: Vec<i32>,

    /// Penalty deltas (negative) for contradicting known letters
    pub hard_mode_penalties: HardModePenalties,

    pub suggested_guess_cost: i32,
    pub revealed_absent_cost: i32,
    pub revealed_present_cost: i32,
}

#[derive(Debug, Clone, Serialize)]
pub struct HardModePenalties {
    pub absent_letter_played: i32,
    pub present_letter_played_in_same_place: i32,
    pub correct_letter_missed: i32,
    pub present_letter_missed: i32,
}

impl HardModePenalties {
    pub fn penalty(&self, error: HardModeError) -> i32 {
        match error {
            HardModeError::AbsentLetterPlayed => self.absent_letter_played,
            HardModeError::PresentLetterPlayedInSamePlace => {
                self.present_letter_played_in_same_place
            }
            HardModeError::CorrectLetterMissed => self.correct_letter_missed,
            HardModeError::PresentLetterMissed => self.present_letter_missed,
        }
    }
}

impl Default for PointSchedule {
    fn default() -> Self {
        Self {
            scale_type: PointScaleType::Dynamic,
            valid_guess_order_points: vec![
                vec![0],
                vec![20, 15, 10, 5, 0],
                vec![20, 15, 10, 5, 0],
                vec![20, 15, 10, 5, 0],
                vec![0],
                vec![0],
            ],
            first_valid_guess_points: vec![0, 20, 20, 20, 0, 0],
            correct_order_points: vec![200, 150, 100, 50, 20, 10],
            first_correct_points: 200,
            solution_guess_number_points: vec![250, 200, 150, 100, 80, 50],
            hard_mode_penalties: HardModePenalties {
                absent_letter_played: -5,
                present_letter_played_in_same_place: -10,
                correct_letter_missed: -10,
                present_letter_missed: -10,
            },
            suggested_guess_cost: 50,
            revealed_absent_cost: 10,
            revealed_present_cost: 100,
        }
    }
}

impl PointSchedule {
    /// Score a freshly played row. `solved_order` is the board's 1-based
    /// finish order when this row solved the puzzle.
    pub fn points_for_guess(
        &self,
        row: &Row,
        solved_order: Option<usize>,
        player_count: usize,
    ) -> Vec<PointAdjustment> {
        let mut adjustments = Vec::new();

        if row.is_correct {
            if let Some(order) = solved_order {
                let solution_points = clamped_lookup(
                    &self.solution_guess_number_points,
                    row.guess_number,
                );
                if solution_points != 0 {
                    adjustments.push(PointAdjustment::with_description(
                        PointAdjustmentReason::CorrectSolutionGuessNumber,
                        solution_points,
                        format!("Solved in {} guesses", row.guess_number),
                    ));
                }

                let order_points = self.order_points_for_solve(order, player_count);
                if order_points != 0 {
                    adjustments.push(PointAdjustment::with_description(
                        PointAdjustmentReason::CorrectSolutionOrder,
                        order_points,
                        format!("Solved {}", ordinal(order)),
                    ));
                }
            }
        }

        for error in &row.errors {
            let points = self.hard_mode_penalties.penalty(error.error);
            adjustments.push(PointAdjustment::with_masked_description(
                PointAdjustmentReason::HardModeError,
                points,
                error.describe(),
                error.masked_describe(),
            ));
        }

        if row.errors.is_empty() {
            if let Some(order) = row.played_order {
                let points = self.order_points_for_valid_guess(row.guess_number, order, player_count);
                if points != 0 {
                    adjustments.push(PointAdjustment::with_description(
                        PointAdjustmentReason::ValidGuessOrder,
                        points,
                        format!("Made {} guess {}", ordinal(row.guess_number), ordinal(order)),
                    ));
                }
            }
        }

        adjustments
    }

    fn order_points_for_valid_guess(
        &self,
        guess_number: usize,
        played_order: usize,
        player_count: usize,
    ) -> i32 {
        match self.scale_type {
            PointScaleType::Fixed => {
                let table = clamped_row(&self.valid_guess_order_points, guess_number);
                table.get(played_order - 1).copied().unwrap_or(0)
            }
            PointScaleType::Dynamic => {
                let base = clamped_lookup(&self.first_valid_guess_points, guess_number);
                scale(base, played_order, player_count)
            }
        }
    }

    fn order_points_for_solve(&self, solved_order: usize, player_count: usize) -> i32 {
        match self.scale_type {
            PointScaleType::Fixed => self
                .correct_order_points
                .get(solved_order - 1)
                .copied()
                .unwrap_or(0),
            PointScaleType::Dynamic => scale(self.first_correct_points, solved_order, player_count),
        }
    }

    /// Share of the base award for finishing `order` of `player_count`:
    /// 1st gets 100%, last gets 0%, a lone player always gets 100%.
    pub fn max_point_ratio(order: usize, player_count: usize) -> f64 {
        if player_count <= 1 {
            return 1.0;
        }
        (player_count - order) as f64 / (player_count - 1) as f64
    }
}

fn scale(base: i32, order: usize, player_count: usize) -> i32 {
    (base as f64 * PointSchedule::max_point_ratio(order, player_count)).round() as i32
}

/// Lookup by 1-based guess number, clamping to the final entry
fn clamped_lookup(table: &[i32], guess_number: usize) -> i32 {
    table
        .get(guess_number - 1)
        .or_else(|| table.last())
        .copied()
        .unwrap_or(0)
}

fn clamped_row<'a>(table: &'a [Vec<i32>], guess_number: usize) -> &'a [i32] {
    table
        .get(guess_number - 1)
        .or_else(|| table.last())
        .map(|row| row.as_slice())
        .unwrap_or(&[])
}

/// 1 -> "1st", 2 -> "2nd", 11 -> "11th"
fn ordinal(n: usize) -> String {
    let suffix = match (n % 10, n % 100) {
        (1, 11) | (2, 12) | (3, 13) => "th",
        (1, _) => "st",
        (2, _) => "nd",
        (3, _) => "rd",
        _ => "th",
    };
    format!("{n}{suffix}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::board::Row;

    fn row(guess: &str, answer: &str, played_order: Option<usize>, guess_number: usize) -> Row {
        Row::new(guess, answer, played_order, guess_number, Vec::new(), false, 0)
    }

    #[test]
    fn ratio_is_full_for_first_and_zero_for_last() {
        for player_count in 2..=8 {
            assert_eq!(PointSchedule::max_point_ratio(1, player_count), 1.0);
            assert_eq!(PointSchedule::max_point_ratio(player_count, player_count), 0.0);
        }
    }

    #[test]
    fn ratio_is_full_for_lone_player() {
        assert_eq!(PointSchedule::max_point_ratio(1, 1), 1.0);
    }

    #[test]
    fn ratio_interpolates_between_orders() {
        assert_eq!(PointSchedule::max_point_ratio(2, 3), 0.5);
        assert_eq!(PointSchedule::max_point_ratio(2, 5), 0.75);
        assert_eq!(PointSchedule::max_point_ratio(3, 5), 0.5);
        assert_eq!(PointSchedule::max_point_ratio(4, 5), 0.25);
    }

    #[test]
    fn solving_awards_guess_number_and_order_points() {
        let schedule = PointSchedule::default();
        let solved = row("BLAME", "BLAME", Some(1), 3);
        let adjustments = schedule.points_for_guess(&solved, Some(1), 2);

        let solution: i32 = adjustments
            .iter()
            .filter(|a| a.reason == PointAdjustmentReason::CorrectSolutionGuessNumber)
            .map(|a| a.points)
            .sum();
        assert_eq!(solution, 150);

        let order: i32 = adjustments
            .iter()
            .filter(|a| a.reason == PointAdjustmentReason::CorrectSolutionOrder)
            .map(|a| a.points)
            .sum();
        assert_eq!(order, 200);
    }

    #[test]
    fn solution_guess_number_clamps_to_last_entry() {
        let schedule = PointSchedule::default();
        let solved = row("BLAME", "BLAME", Some(1), 9);
        let adjustments = schedule.points_for_guess(&solved, Some(1), 1);
        let solution: i32 = adjustments
            .iter()
            .filter(|a| a.reason == PointAdjustmentReason::CorrectSolutionGuessNumber)
            .map(|a| a.points)
            .sum();
        assert_eq!(solution, 50);
    }

    #[test]
    fn fixed_order_lookup_is_zero_beyond_table() {
        let schedule = PointSchedule {
            scale_type: PointScaleType::Fixed,
            ..PointSchedule::default()
        };
        assert_eq!(schedule.order_points_for_solve(6, 8), 10);
        assert_eq!(schedule.order_points_for_solve(7, 8), 0);
        assert_eq!(schedule.order_points_for_valid_guess(2, 2, 8), 15);
        assert_eq!(schedule.order_points_for_valid_guess(2, 6, 8), 0);
    }

    #[test]
    fn hard_mode_errors_penalize_and_suppress_order_points() {
        let schedule = PointSchedule::default();
        // Second guess replays B, known absent from guessing BOOST vs FLAME.
        let mut board = crate::game::board::Board::new(30_000, 6, 0);
        board
            .submit_guess("BOOST", "FLAME", Some(1), Some(0), 2, None, false, 0)
            .unwrap();
        let errors = board
            .submit_guess("BENCH", "FLAME", Some(1), Some(0), 2, None, false, 0)
            .unwrap();
        assert_eq!(errors.len(), 1);

        let mut scored = row("BENCH", "FLAME", Some(1), 2);
        scored.errors = errors;
        let adjustments = schedule.points_for_guess(&scored, None, 2);
        assert_eq!(adjustments.len(), 1);
        assert_eq!(adjustments[0].reason, PointAdjustmentReason::HardModeError);
        assert_eq!(adjustments[0].points, -5);
    }

    #[test]
    fn clean_guess_earns_order_points() {
        let schedule = PointSchedule::default();
        let second_guess = row("CRANE", "BLAME", Some(1), 2);
        let adjustments = schedule.points_for_guess(&second_guess, None, 2);
        assert_eq!(adjustments.len(), 1);
        assert_eq!(adjustments[0].reason, PointAdjustmentReason::ValidGuessOrder);
        // First of two players, dynamic scale: full 20-point base.
        assert_eq!(adjustments[0].points, 20);
    }

    #[test]
    fn ordinals() {
        assert_eq!(ordinal(1), "1st");
        assert_eq!(ordinal(2), "2nd");
        assert_eq!(ordinal(3), "3rd");
        assert_eq!(ordinal(4), "4th");
        assert_eq!(ordinal(11), "11th");
        assert_eq!(ordinal(21), "21st");
    }
}
