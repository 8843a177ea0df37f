// Library interface for word-game
// This allows integration tests to drive the game and play loop directly

pub mod cli;
pub mod game;
pub mod hash;
pub mod logging;
pub mod puzzle;
pub mod share;
pub mod tui;
pub mod wordlist;

// Re-export the pieces callers and tests reach for most
pub use game::{Completion, Feedback, Game, GameError, Guess, GuessError, evaluate};
pub use hash::seed_hash;
pub use puzzle::{random_seed, word_index};
pub use share::share_grid;
pub use wordlist::{load_words_from_file, load_words_from_str};
