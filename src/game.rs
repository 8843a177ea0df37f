use std::collections::BTreeSet;
use std::error::Error;
use std::fmt;

use crate::puzzle::{random_seed, word_index};

pub const WORD_LENGTH: usize = 5;
pub const MAX_GUESSES: usize = 6;

/// Per-character result of comparing a guess against the target.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Feedback {
    /// Right letter, right position.
    Exact,
    /// Letter occurs somewhere else in the target.
    PositionDifferent,
    /// Letter does not occur in the target.
    Noop,
}

/// A submitted word together with its per-position feedback.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Guess {
    pub letters: [char; WORD_LENGTH],
    pub feedback: [Feedback; WORD_LENGTH],
}

impl Guess {
    pub fn word(&self) -> String {
        self.letters.iter().collect()
    }

    pub fn is_all_exact(&self) -> bool {
        self.feedback.iter().all(|f| matches!(f, Feedback::Exact))
    }
}

/// Compare `guess` against `target` position by position.
///
/// Each position is classified independently: a letter that occurs anywhere
/// in the target is reported as `PositionDifferent` even when every
/// occurrence of it is already claimed by an exact match elsewhere. Repeated
/// guess letters are not deducted against the target's letter count, so a
/// letter the target holds once can be flagged on more than one position.
pub fn evaluate(target: &str, guess: &str) -> Guess {
    debug_assert_eq!(target.chars().count(), WORD_LENGTH);
    debug_assert_eq!(guess.chars().count(), WORD_LENGTH);

    let target_chars: Vec<char> = target.chars().collect();
    let mut letters = [' '; WORD_LENGTH];
    let mut feedback = [Feedback::Noop; WORD_LENGTH];

    for (i, ch) in guess.chars().take(WORD_LENGTH).enumerate() {
        letters[i] = ch;
        feedback[i] = if target_chars[i] == ch {
            Feedback::Exact
        } else if target_chars.contains(&ch) {
            Feedback::PositionDifferent
        } else {
            Feedback::Noop
        };
    }

    Guess { letters, feedback }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Completion {
    InProgress,
    Solved,
    Exhausted,
}

/// Completion is derived from the history alone: solved when the latest
/// guess is all-exact, exhausted when the turn limit is reached unsolved.
pub fn derive_completion(history: &[Guess]) -> Completion {
    match history.last() {
        Some(last) if last.is_all_exact() => Completion::Solved,
        _ if history.len() >= MAX_GUESSES => Completion::Exhausted,
        _ => Completion::InProgress,
    }
}

/// Letters still worth typing: the alphabet minus every letter a past guess
/// has proven absent from the target.
pub fn derive_usable_chars(history: &[Guess]) -> BTreeSet<char> {
    let mut chars: BTreeSet<char> = ('a'..='z').collect();
    for guess in history {
        for (ch, fb) in guess.letters.iter().zip(&guess.feedback) {
            match fb {
                Feedback::Noop => {
                    chars.remove(ch);
                }
                Feedback::Exact | Feedback::PositionDifferent => {}
            }
        }
    }
    chars
}

#[derive(Debug, PartialEq, Eq)]
pub enum GameError {
    EmptyWordList,
}

impl fmt::Display for GameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyWordList => {
                write!(f, "cannot pick a target word from an empty word list")
            }
        }
    }
}

impl Error for GameError {}

#[derive(Debug, PartialEq, Eq)]
pub enum GuessError {
    WrongLength(usize),
    NotInWordList,
    Finished,
}

impl fmt::Display for GuessError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::WrongLength(len) => {
                write!(f, "Please enter exactly {WORD_LENGTH} letters (got {len}).")
            }
            Self::NotInWordList => write!(f, "Not in word list."),
            Self::Finished => write!(f, "The puzzle is already finished."),
        }
    }
}

impl Error for GuessError {}

/// One puzzle instance: a seed, the target word it selects, and the guesses
/// made so far. A new seed means a new `Game`; nothing carries over.
#[derive(Debug)]
pub struct Game<'a> {
    words: &'a [String],
    seed: String,
    target: &'a str,
    history: Vec<Guess>,
}

impl<'a> Game<'a> {
    pub fn new(seed: impl Into<String>, words: &'a [String]) -> Result<Self, GameError> {
        if words.is_empty() {
            return Err(GameError::EmptyWordList);
        }
        let seed = seed.into();
        let target = words[word_index(&seed, words.len())].as_str();
        Ok(Self {
            words,
            seed,
            target,
            history: Vec::new(),
        })
    }

    /// Fresh puzzle with a generated seed over the same word list.
    pub fn with_random_seed(words: &'a [String]) -> Result<Self, GameError> {
        Self::new(random_seed(), words)
    }

    pub fn seed(&self) -> &str {
        &self.seed
    }

    pub fn target(&self) -> &str {
        self.target
    }

    pub fn guesses(&self) -> &[Guess] {
        &self.history
    }

    pub fn completion(&self) -> Completion {
        derive_completion(&self.history)
    }

    pub fn usable_chars(&self) -> BTreeSet<char> {
        derive_usable_chars(&self.history)
    }

    /// Validate and evaluate one submission.
    ///
    /// A rejected submission leaves the history untouched.
    pub fn submit(&mut self, input: &str) -> Result<Guess, GuessError> {
        if self.completion() != Completion::InProgress {
            return Err(GuessError::Finished);
        }
        let len = input.chars().count();
        if len != WORD_LENGTH {
            return Err(GuessError::WrongLength(len));
        }
        if !self.words.iter().any(|w| w == input) {
            return Err(GuessError::NotInWordList);
        }
        let guess = evaluate(self.target, input);
        self.history.push(guess.clone());
        Ok(guess)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(list: &[&str]) -> Vec<String> {
        list.iter().map(|w| w.to_string()).collect()
    }

    #[test]
    fn test_evaluate_all_exact() {
        let guess = evaluate("apple", "apple");
        assert!(guess.feedback.iter().all(|f| *f == Feedback::Exact));
        assert!(guess.is_all_exact());
    }

    #[test]
    fn test_evaluate_all_position_different() {
        // Every letter of "plaep" occurs in "apple", none in place
        let guess = evaluate("apple", "plaep");
        assert!(
            guess
                .feedback
                .iter()
                .all(|f| *f == Feedback::PositionDifferent)
        );
    }

    #[test]
    fn test_evaluate_all_noop() {
        let guess = evaluate("apple", "zzzzz");
        assert!(guess.feedback.iter().all(|f| *f == Feedback::Noop));
        assert!(!guess.is_all_exact());
    }

    #[test]
    fn test_evaluate_mixed() {
        // a and n line up, k and l occur elsewhere, e lines up
        let guess = evaluate("angle", "ankle");
        assert_eq!(
            guess.feedback,
            [
                Feedback::Exact,
                Feedback::Exact,
                Feedback::PositionDifferent,
                Feedback::PositionDifferent,
                Feedback::Exact,
            ]
        );
    }

    #[test]
    fn test_evaluate_no_duplicate_accounting() {
        // "apple" holds a single l, yet both l's in "llama" are flagged as
        // present; classic Wordle would gray the second one out.
        let guess = evaluate("apple", "llama");
        assert_eq!(guess.feedback[0], Feedback::PositionDifferent);
        assert_eq!(guess.feedback[1], Feedback::PositionDifferent);
        assert_eq!(guess.feedback[2], Feedback::PositionDifferent);
        assert_eq!(guess.feedback[3], Feedback::Noop);
        assert_eq!(guess.feedback[4], Feedback::PositionDifferent);
    }

    #[test]
    fn test_completion_empty_history() {
        assert_eq!(derive_completion(&[]), Completion::InProgress);
    }

    #[test]
    fn test_completion_solved_on_last_guess() {
        let history = vec![evaluate("apple", "zzzzz"), evaluate("apple", "apple")];
        assert_eq!(derive_completion(&history), Completion::Solved);
    }

    #[test]
    fn test_completion_exhausted_after_six_misses() {
        let history = vec![evaluate("apple", "zzzzz"); MAX_GUESSES];
        assert_eq!(derive_completion(&history), Completion::Exhausted);
    }

    #[test]
    fn test_completion_solved_wins_over_exhausted() {
        let mut history = vec![evaluate("apple", "zzzzz"); MAX_GUESSES - 1];
        history.push(evaluate("apple", "apple"));
        assert_eq!(derive_completion(&history), Completion::Solved);
    }

    #[test]
    fn test_usable_chars_full_alphabet_at_start() {
        assert_eq!(derive_usable_chars(&[]).len(), 26);
    }

    #[test]
    fn test_usable_chars_removes_noop_letters_permanently() {
        let list = words(&["apple", "angle", "ankle"]);
        let mut game = Game::new("a", &list).unwrap();
        game.submit("apple").unwrap(); // target "angle": p -> Noop
        let usable = game.usable_chars();
        assert!(!usable.contains(&'p'));
        assert!(usable.contains(&'a'));

        // Still gone after a later guess that never mentions p
        game.submit("ankle").unwrap();
        assert!(!game.usable_chars().contains(&'p'));
    }

    #[test]
    fn test_new_rejects_empty_word_list() {
        let empty: Vec<String> = Vec::new();
        assert_eq!(Game::new("a", &empty).unwrap_err(), GameError::EmptyWordList);
    }

    #[test]
    fn test_target_selection_deterministic() {
        let list = words(&["apple", "angle", "ankle"]);
        // abs(hash("a")) % 3 == 1
        let game = Game::new("a", &list).unwrap();
        assert_eq!(game.target(), "angle");
        let again = Game::new("a", &list).unwrap();
        assert_eq!(again.target(), game.target());
    }

    #[test]
    fn test_submit_rejects_wrong_length() {
        let list = words(&["apple", "angle", "ankle"]);
        let mut game = Game::new("a", &list).unwrap();
        assert_eq!(game.submit("ant").unwrap_err(), GuessError::WrongLength(3));
        assert_eq!(
            game.submit("anklet").unwrap_err(),
            GuessError::WrongLength(6)
        );
        assert!(game.guesses().is_empty());
    }

    #[test]
    fn test_submit_rejects_words_outside_list() {
        let list = words(&["apple", "angle", "ankle"]);
        let mut game = Game::new("a", &list).unwrap();
        assert_eq!(game.submit("zebra").unwrap_err(), GuessError::NotInWordList);
        assert!(game.guesses().is_empty());
    }

    #[test]
    fn test_submit_is_case_sensitive() {
        let list = words(&["apple", "angle", "ankle"]);
        let mut game = Game::new("a", &list).unwrap();
        assert_eq!(game.submit("APPLE").unwrap_err(), GuessError::NotInWordList);
    }

    #[test]
    fn test_submit_appends_in_order() {
        let list = words(&["apple", "angle", "ankle"]);
        let mut game = Game::new("a", &list).unwrap();
        game.submit("apple").unwrap();
        game.submit("ankle").unwrap();
        let played: Vec<String> = game.guesses().iter().map(Guess::word).collect();
        assert_eq!(played, ["apple", "ankle"]);
    }

    #[test]
    fn test_submit_rejected_after_solve() {
        let list = words(&["apple", "angle", "ankle"]);
        let mut game = Game::new("a", &list).unwrap();
        game.submit("angle").unwrap();
        assert_eq!(game.completion(), Completion::Solved);
        assert_eq!(game.submit("ankle").unwrap_err(), GuessError::Finished);
        assert_eq!(game.guesses().len(), 1);
    }

    #[test]
    fn test_submit_rejected_after_exhaustion() {
        let list = words(&["apple", "angle", "ankle"]);
        let mut game = Game::new("a", &list).unwrap();
        for _ in 0..MAX_GUESSES {
            game.submit("apple").unwrap();
        }
        assert_eq!(game.completion(), Completion::Exhausted);
        assert_eq!(game.submit("angle").unwrap_err(), GuessError::Finished);
        assert_eq!(game.guesses().len(), MAX_GUESSES);
    }

    #[test]
    fn test_new_seed_starts_with_empty_history() {
        let list = words(&["apple", "angle", "ankle"]);
        let mut game = Game::new("a", &list).unwrap();
        game.submit("apple").unwrap();
        assert_eq!(game.guesses().len(), 1);

        // A seed change is a new game value; its history starts empty.
        let game = Game::new("b", &list).unwrap();
        assert!(game.guesses().is_empty());
    }
}
