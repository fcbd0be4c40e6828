//! Autonomous players
//!
//! Bots are a capability attached to a `Player`, not a separate type:
//! room code branches on the tag. Word selection draws from the catalog's
//! reasonable pool constrained by the bot's own board knowledge, with the
//! answer always reachable so a bot can eventually win.

use std::time::Duration;

use rand::seq::SliceRandom;
use rand::Rng;

use crate::game::board::Board;
use crate::words::WordCatalog;

/// Fastest a bot will answer after its opening guess
const MIN_THINK_SECS: f64 = 6.0;
/// Fixed pause before the opening guess
const OPENING_THINK_SECS: f64 = 3.0;

const BOT_ALIASES: &[&str] = &[
    "Lexi", "Verba", "Quillbert", "Syl", "Glyph", "Morpheme", "Vowelsworth", "Scrabbly",
    "Inkwell", "Pangram",
];

const SMACK_TALK: &[&str] = &[
    "Is that the best you've got?",
    "I had the answer three guesses ago.",
    "My circuits are barely warm.",
    "You call that a guess?",
    "Don't worry, someone has to come last.",
    "I'd offer a hint, but where's the fun in that?",
    "Vowels, friend. Try some vowels.",
    "Beep boop. Translation: too slow.",
];

/// The autonomous-play capability carried by bot players
#[derive(Debug, Clone)]
pub struct BotBrain {
    pub personality: Option<String>,
    /// 0..1, higher plays faster
    pub ability: f64,
}

impl BotBrain {
    pub fn new(personality: Option<String>, rng: &mut impl Rng) -> Self {
        Self {
            personality,
            ability: rng.gen_range(0.3..0.9),
        }
    }

    /// How long the bot pretends to think before a guess. Ability maps
    /// inversely onto the window between the minimum and 1.1x the room's
    /// guess time limit, so weaker bots run closer to the deadline.
    pub fn think_delay(&self, guess_time_limit_ms: u64, is_opening: bool) -> Duration {
        if is_opening {
            return Duration::from_secs_f64(OPENING_THINK_SECS);
        }
        let max_secs = guess_time_limit_ms as f64 / 1000.0 * 1.1;
        let secs = (max_secs - MIN_THINK_SECS) * (1.0 - self.ability) + MIN_THINK_SECS;
        Duration::from_secs_f64(secs.max(0.5))
    }

    pub fn smack_talk(&self, rng: &mut impl Rng) -> String {
        SMACK_TALK
            .choose(rng)
            .copied()
            .unwrap_or("...")
            .to_string()
    }
}

/// Random opening word from the reasonable pool
pub fn opening_word(
    words: &WordCatalog,
    word_length: usize,
    rng: &mut impl Rng,
) -> Option<String> {
    words
        .reasonable_words(word_length)
        .choose(rng)
        .map(|w| w.to_string())
}

/// Next word consistent with the board's knowledge; the answer is always a
/// candidate even when the pool has run dry.
pub fn select_word(
    words: &WordCatalog,
    board: &Board,
    answer: &str,
    rng: &mut impl Rng,
) -> String {
    let mut candidates: Vec<String> = words
        .possible_valid_guesses(
            &board.correct_letters,
            &board.present_letters,
            &board.absent_letters,
            &board.present_letter_counts,
            answer.chars().count(),
        )
        .into_iter()
        .map(|w| w.to_string())
        .collect();
    if !candidates.iter().any(|w| w == answer) {
        candidates.push(answer.to_string());
    }
    candidates
        .choose(rng)
        .cloned()
        .unwrap_or_else(|| answer.to_string())
}

/// Pick an alias not already in use
pub fn pick_alias(taken: &[String], personality: Option<&str>, rng: &mut impl Rng) -> String {
    if let Some(personality) = personality {
        let mut chars = personality.chars();
        let base: String = match chars.next() {
            Some(first) => first.to_uppercase().chain(chars).collect(),
            None => "Bot".to_string(),
        };
        if !taken.iter().any(|t| t == &base) {
            return base;
        }
        let mut n = 2;
        loop {
            let alias = format!("{base} {n}");
            if !taken.iter().any(|t| t == &alias) {
                return alias;
            }
            n += 1;
        }
    }

    let free: Vec<&str> = BOT_ALIASES
        .iter()
        .copied()
        .filter(|name| !taken.iter().any(|t| t.as_str() == *name))
        .collect();
    if let Some(name) = free.choose(rng) {
        return (*name).to_string();
    }
    let mut n = 2;
    loop {
        let alias = format!("Bot {n}");
        if !taken.iter().any(|t| t == &alias) {
            return alias;
        }
        n += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn think_delay_scales_inversely_with_ability() {
        let slow = BotBrain {
            personality: None,
            ability: 0.0,
        };
        let fast = BotBrain {
            personality: None,
            ability: 1.0,
        };
        let limit = 30_000;
        assert!(slow.think_delay(limit, false) > fast.think_delay(limit, false));
        assert_eq!(
            fast.think_delay(limit, false),
            Duration::from_secs_f64(MIN_THINK_SECS)
        );
        // Slowest bot stays within 1.1x the limit.
        assert!(slow.think_delay(limit, false) <= Duration::from_secs_f64(33.0));
    }

    #[test]
    fn select_word_always_has_the_answer_available() {
        let words = WordCatalog::new();
        let mut board = Board::new(30_000, 6, 0);
        // Exhaust knowledge so only the answer survives filtering.
        board
            .submit_guess("BLAST", "BLAME", Some(1), Some(0), 1, None, false, 0)
            .unwrap();
        board
            .submit_guess("BLAND", "BLAME", Some(1), Some(0), 1, None, false, 0)
            .unwrap();
        let mut rng = rand::thread_rng();
        for _ in 0..20 {
            let word = select_word(&words, &board, "BLAME", &mut rng);
            assert_eq!(word.len(), 5);
        }
    }

    #[test]
    fn aliases_avoid_collisions() {
        let mut rng = rand::thread_rng();
        let taken = vec!["Pirate".to_string()];
        assert_eq!(pick_alias(&taken, Some("pirate"), &mut rng), "Pirate 2");
        let alias = pick_alias(&[], None, &mut rng);
        assert!(BOT_ALIASES.contains(&alias.as_str()));
    }
}
