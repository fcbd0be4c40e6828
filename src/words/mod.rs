//! Word catalog - answer pools, accepted-guess dictionary and
//! constraint-aware candidate filtering

mod lists;

use std::collections::{HashMap, HashSet};

use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::game::board::LetterSlot;

/// Which answer pool a room draws from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AnswerListType {
    FourLetter,
    FiveLetter,
    /// Classic daily-puzzle pool (stricter subset of the five-letter list)
    FiveLetterWordle,
    SixLetter,
    /// Any length, any pool
    Random,
}

impl AnswerListType {
    /// Word length implied by the pool, if it implies one
    pub fn word_length(&self) -> Option<usize> {
        match self {
            AnswerListType::FourLetter => Some(4),
            AnswerListType::FiveLetter | AnswerListType::FiveLetterWordle => Some(5),
            AnswerListType::SixLetter => Some(6),
            AnswerListType::Random => None,
        }
    }
}

/// Immutable word-list lookup
pub struct WordCatalog {
    answers: HashMap<usize, Vec<&'static str>>,
    accepted: HashMap<usize, HashSet<&'static str>>,
    wordle_answers: Vec<&'static str>,
}

impl WordCatalog {
    pub fn new() -> Self {
        let mut answers: HashMap<usize, Vec<&'static str>> = HashMap::new();
        answers.insert(4, lists::ANSWERS_4.to_vec());
        answers.insert(5, lists::ANSWERS_5.to_vec());
        answers.insert(6, lists::ANSWERS_6.to_vec());

        let mut accepted: HashMap<usize, HashSet<&'static str>> = HashMap::new();
        for (&length, pool) in &answers {
            accepted.insert(length, pool.iter().copied().collect());
        }
        for &word in lists::DICTIONARY_4 {
            accepted.get_mut(&4).expect("length 4 pool").insert(word);
        }
        for &word in lists::DICTIONARY_5.iter().chain(lists::WORDLE_ANSWERS_5) {
            accepted.get_mut(&5).expect("length 5 pool").insert(word);
        }
        for &word in lists::DICTIONARY_6 {
            accepted.get_mut(&6).expect("length 6 pool").insert(word);
        }

        Self {
            answers,
            accepted,
            wordle_answers: lists::WORDLE_ANSWERS_5.to_vec(),
        }
    }

    /// Whether a guess counts as a real word (input must be uppercase)
    pub fn is_accepted(&self, word: &str) -> bool {
        self.accepted
            .get(&word.chars().count())
            .map(|set| set.contains(word))
            .unwrap_or(false)
    }

    /// Draw a round answer from the configured pool
    pub fn random_answer(&self, list: AnswerListType, rng: &mut impl Rng) -> String {
        let pool: Vec<&'static str> = match list {
            AnswerListType::FourLetter => self.answers[&4].clone(),
            AnswerListType::FiveLetter => self.answers[&5].clone(),
            AnswerListType::FiveLetterWordle => self.wordle_answers.clone(),
            AnswerListType::SixLetter => self.answers[&6].clone(),
            AnswerListType::Random => self
                .answers
                .values()
                .flat_map(|v| v.iter().copied())
                .collect(),
        };

        pool.choose(rng).expect("answer pools are non-empty").to_string()
    }

    /// The curated pool bots and suggestions draw from
    pub fn reasonable_words(&self, length: usize) -> &[&'static str] {
        self.answers.get(&length).map(|v| v.as_slice()).unwrap_or(&[])
    }

    /// All words from the reasonable pool consistent with accumulated
    /// letter knowledge.
    ///
    /// A letter that is known present in some count is removed from the
    /// absent set first - this handles the case where only a surplus
    /// instance of the letter was marked absent.
    pub fn possible_valid_guesses(
        &self,
        correct: &HashSet<LetterSlot>,
        present: &HashSet<LetterSlot>,
        absent: &HashSet<char>,
        present_counts: &HashMap<char, usize>,
        length: usize,
    ) -> Vec<&'static str> {
        let present_unknown: HashSet<char> = present_counts
            .iter()
            .filter(|(letter, &count)| {
                count > correct.iter().filter(|slot| slot.letter == **letter).count()
            })
            .map(|(letter, _)| *letter)
            .collect();
        let absent: HashSet<char> = absent
            .iter()
            .copied()
            .filter(|letter| !present_unknown.contains(letter))
            .collect();

        let correct_at: Vec<Option<char>> = (0..length)
            .map(|i| {
                correct
                    .iter()
                    .find(|slot| slot.position == Some(i))
                    .map(|slot| slot.letter)
            })
            .collect();
        let banned_at: Vec<Vec<char>> = (0..length)
            .map(|i| {
                present
                    .iter()
                    .filter(|slot| slot.position == Some(i))
                    .map(|slot| slot.letter)
                    .collect()
            })
            .collect();

        let positions_ok = |word: &str| {
            word.chars().enumerate().all(|(i, c)| match correct_at[i] {
                Some(required) => c == required,
                None => !absent.contains(&c) && !banned_at[i].contains(&c),
            })
        };

        let counts_ok = |word: &str| {
            present_counts.iter().all(|(&letter, &minimum)| {
                let count = word.chars().filter(|&c| c == letter).count();
                count >= minimum && !(absent.contains(&letter) && count > minimum)
            })
        };

        self.reasonable_words(length)
            .iter()
            .copied()
            .filter(|word| positions_ok(word) && counts_ok(word))
            .collect()
    }
}

impl Default for WordCatalog {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn slot(letter: char, position: Option<usize>) -> LetterSlot {
        LetterSlot { letter, position }
    }

    #[test]
    fn accepts_words_of_known_lengths() {
        let catalog = WordCatalog::new();
        assert!(catalog.is_accepted("BLAME"));
        assert!(catalog.is_accepted("LUPUS"));
        assert!(catalog.is_accepted("GOLD"));
        assert!(catalog.is_accepted("PUZZLE"));
        assert!(!catalog.is_accepted("QZXWV"));
        assert!(!catalog.is_accepted("ABC"));
    }

    #[test]
    fn random_answer_matches_list_length() {
        let catalog = WordCatalog::new();
        let mut rng = rand::thread_rng();
        assert_eq!(catalog.random_answer(AnswerListType::FourLetter, &mut rng).len(), 4);
        assert_eq!(catalog.random_answer(AnswerListType::FiveLetterWordle, &mut rng).len(), 5);
        assert_eq!(catalog.random_answer(AnswerListType::SixLetter, &mut rng).len(), 6);
    }

    #[test]
    fn correct_letter_pins_position() {
        let catalog = WordCatalog::new();
        let correct = [slot('B', Some(0))].into_iter().collect();
        let candidates = catalog.possible_valid_guesses(
            &correct,
            &HashSet::new(),
            &HashSet::new(),
            &HashMap::new(),
            5,
        );
        assert!(!candidates.is_empty());
        assert!(candidates.iter().all(|w| w.starts_with('B')));
    }

    #[test]
    fn absent_letter_is_excluded() {
        let catalog = WordCatalog::new();
        let absent = ['E'].into_iter().collect();
        let candidates = catalog.possible_valid_guesses(
            &HashSet::new(),
            &HashSet::new(),
            &absent,
            &HashMap::new(),
            5,
        );
        assert!(!candidates.is_empty());
        assert!(candidates.iter().all(|w| !w.contains('E')));
    }

    #[test]
    fn present_letter_required_but_not_in_same_place() {
        let catalog = WordCatalog::new();
        let present = [slot('A', Some(0))].into_iter().collect();
        let counts = [('A', 1)].into_iter().collect();
        let candidates = catalog.possible_valid_guesses(
            &HashSet::new(),
            &present,
            &HashSet::new(),
            &counts,
            5,
        );
        assert!(!candidates.is_empty());
        for word in &candidates {
            assert!(word.contains('A'), "{word} must contain A");
            assert!(!word.starts_with('A'), "{word} must not start with A");
        }
    }

    #[test]
    fn known_count_with_surplus_absent_caps_multiplicity() {
        // One A confirmed correct, a second A came back absent: candidates
        // must contain exactly one A.
        let catalog = WordCatalog::new();
        let correct = [slot('A', Some(2))].into_iter().collect();
        let absent = ['A'].into_iter().collect();
        let counts = [('A', 1)].into_iter().collect();
        let candidates =
            catalog.possible_valid_guesses(&correct, &HashSet::new(), &absent, &counts, 5);
        for word in &candidates {
            assert_eq!(word.chars().filter(|&c| c == 'A').count(), 1, "{word}");
            assert_eq!(word.chars().nth(2), Some('A'), "{word}");
        }
    }

    #[test]
    fn present_letter_survives_stale_absent_mark() {
        // A letter marked absent once but later known present in count 1
        // must not be filtered out entirely.
        let catalog = WordCatalog::new();
        let absent = ['A'].into_iter().collect();
        let counts = [('A', 1)].into_iter().collect();
        let candidates = catalog.possible_valid_guesses(
            &HashSet::new(),
            &HashSet::new(),
            &absent,
            &counts,
            5,
        );
        assert!(!candidates.is_empty());
        assert!(candidates.iter().all(|w| w.contains('A')));
    }
}
