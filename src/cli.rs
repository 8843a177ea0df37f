use clap::Parser;
use std::io::BufRead;

use crate::game::{Completion, Feedback, Game, Guess, MAX_GUESSES};
use crate::share::share_grid;

/// Word game CLI options
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Path to a newline-delimited word list file
    #[arg(short = 'i', long = "input")]
    pub wordlist_path: Option<String>,

    /// Seed for the puzzle; share it to share the puzzle. Omit for a random one
    #[arg(short = 's', long = "seed")]
    pub seed: Option<String>,

    /// Play in the full-screen terminal UI
    #[arg(long = "tui")]
    pub tui: bool,
}

#[must_use]
pub fn parse_cli() -> Cli {
    Cli::parse()
}

pub enum GuessInput {
    Word(String),
    Exit,
    NewGame,
}

/// Prompt for and read one line of input. Returns `None` when the reader is
/// exhausted, which ends the session the same way `exit` does.
pub fn read_guess<R: BufRead>(reader: &mut R) -> Option<GuessInput> {
    println!("\nEnter your guess (5 letters, 'new' for a new puzzle, 'exit' to quit):");
    let mut input = String::new();
    match reader.read_line(&mut input) {
        Ok(0) | Err(_) => return None,
        Ok(_) => {}
    }
    let input = input.trim().to_lowercase();

    match input.as_str() {
        "exit" => Some(GuessInput::Exit),
        "new" => Some(GuessInput::NewGame),
        _ => Some(GuessInput::Word(input)),
    }
}

fn render_guess(guess: &Guess) -> String {
    let mut row = String::new();
    for (ch, fb) in guess.letters.iter().zip(&guess.feedback) {
        // Background colors: green / yellow / bright black
        let color = match fb {
            Feedback::Exact => 42,
            Feedback::PositionDifferent => 43,
            Feedback::Noop => 100,
        };
        row.push_str(&format!("\x1b[{color}m {ch} \x1b[0m"));
    }
    row
}

fn display_board(game: &Game) {
    for guess in game.guesses() {
        println!("{}", render_guess(guess));
    }
}

fn display_usable_chars(game: &Game) {
    let chars: Vec<String> = game.usable_chars().iter().map(char::to_string).collect();
    println!("Usable letters: {}", chars.join(" "));
}

fn display_result(game: &Game) {
    match game.completion() {
        Completion::Solved => {
            println!("Solved in {}/{MAX_GUESSES}.", game.guesses().len());
        }
        Completion::Exhausted => {
            println!("Out of guesses. The word was '{}'.", game.target());
        }
        Completion::InProgress => {}
    }
    println!("{}", share_grid(game.guesses()));
    println!("Type 'new' for another puzzle, or 'exit' to quit.");
}

fn announce_puzzle(game: &Game, word_count: usize) {
    println!("Seed: {}", game.seed());
    println!("Guess the 5-letter word. You have {MAX_GUESSES} tries ({word_count} words loaded).");
}

/// Line-based game loop: runs until the player exits or the reader runs dry.
pub fn play_loop<R: BufRead>(words: &[String], initial_seed: String, mut reader: R) {
    let mut game = match Game::new(initial_seed, words) {
        Ok(game) => game,
        Err(e) => {
            eprintln!("{e}");
            return;
        }
    };
    announce_puzzle(&game, words.len());

    loop {
        let input = match read_guess(&mut reader) {
            Some(input) => input,
            None => break,
        };

        match input {
            GuessInput::Exit => {
                println!("Exiting.");
                break;
            }
            GuessInput::NewGame => {
                game = match Game::with_random_seed(words) {
                    Ok(game) => game,
                    Err(e) => {
                        eprintln!("{e}");
                        return;
                    }
                };
                println!("New puzzle started.");
                announce_puzzle(&game, words.len());
            }
            GuessInput::Word(word) => match game.submit(&word) {
                Ok(_) => {
                    display_board(&game);
                    match game.completion() {
                        Completion::InProgress => display_usable_chars(&game),
                        Completion::Solved | Completion::Exhausted => display_result(&game),
                    }
                }
                Err(e) => println!("{e}"),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn words(list: &[&str]) -> Vec<String> {
        list.iter().map(|w| w.to_string()).collect()
    }

    #[test]
    fn test_cli_structure() {
        let cli = Cli {
            wordlist_path: Some("/path/to/words.txt".to_string()),
            seed: Some("3f2a1b".to_string()),
            tui: false,
        };
        assert_eq!(cli.wordlist_path.as_deref(), Some("/path/to/words.txt"));
        assert_eq!(cli.seed.as_deref(), Some("3f2a1b"));
        assert!(!cli.tui);
    }

    #[test]
    fn test_read_guess_word() {
        let mut reader = Cursor::new("angle\n");
        match read_guess(&mut reader) {
            Some(GuessInput::Word(word)) => assert_eq!(word, "angle"),
            _ => panic!("Expected a word"),
        }
    }

    #[test]
    fn test_read_guess_lowercases_input() {
        let mut reader = Cursor::new("ANGLE\n");
        match read_guess(&mut reader) {
            Some(GuessInput::Word(word)) => assert_eq!(word, "angle"),
            _ => panic!("Expected a word"),
        }
    }

    #[test]
    fn test_read_guess_trims_whitespace() {
        let mut reader = Cursor::new("  angle  \n");
        match read_guess(&mut reader) {
            Some(GuessInput::Word(word)) => assert_eq!(word, "angle"),
            _ => panic!("Expected a word"),
        }
    }

    #[test]
    fn test_read_guess_exit() {
        let mut reader = Cursor::new("exit\n");
        assert!(matches!(read_guess(&mut reader), Some(GuessInput::Exit)));
    }

    #[test]
    fn test_read_guess_exit_case_insensitive() {
        let mut reader = Cursor::new("EXIT\n");
        assert!(matches!(read_guess(&mut reader), Some(GuessInput::Exit)));
    }

    #[test]
    fn test_read_guess_new_game() {
        let mut reader = Cursor::new("new\n");
        assert!(matches!(read_guess(&mut reader), Some(GuessInput::NewGame)));
    }

    #[test]
    fn test_read_guess_eof() {
        let mut reader = Cursor::new("");
        assert!(read_guess(&mut reader).is_none());
    }

    #[test]
    fn test_render_guess_contains_letters() {
        let guess = crate::game::evaluate("angle", "ankle");
        let row = render_guess(&guess);
        for ch in ['a', 'n', 'k', 'l', 'e'] {
            assert!(row.contains(ch));
        }
    }

    #[test]
    fn test_play_loop_immediate_exit() {
        let list = words(&["apple", "angle", "ankle"]);
        let reader = Cursor::new("exit\n");

        // Should exit gracefully without panicking
        play_loop(&list, "a".to_string(), reader);
    }

    #[test]
    fn test_play_loop_terminates_on_eof() {
        let list = words(&["apple", "angle", "ankle"]);
        let reader = Cursor::new("apple\n");

        play_loop(&list, "a".to_string(), reader);
    }

    #[test]
    fn test_play_loop_rejects_then_exits() {
        let list = words(&["apple", "angle", "ankle"]);
        let reader = Cursor::new("zzzzz\nabc\nexit\n");

        // Invalid guesses are rejected without ending the session
        play_loop(&list, "a".to_string(), reader);
    }

    #[test]
    fn test_play_loop_solve_then_exit() {
        // Seed "a" picks "angle" from this list
        let list = words(&["apple", "angle", "ankle"]);
        let reader = Cursor::new("ankle\nangle\nexit\n");

        play_loop(&list, "a".to_string(), reader);
    }

    #[test]
    fn test_play_loop_new_puzzle_command() {
        let list = words(&["apple", "angle", "ankle"]);
        let reader = Cursor::new("new\nexit\n");

        play_loop(&list, "a".to_string(), reader);
    }

    #[test]
    fn test_play_loop_empty_word_list_returns() {
        let empty: Vec<String> = Vec::new();
        let reader = Cursor::new("exit\n");

        // Reports the construction error and returns without reading input
        play_loop(&empty, "a".to_string(), reader);
    }
}
