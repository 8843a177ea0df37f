use std::io;

use word_game::cli::{parse_cli, play_loop};
use word_game::logging;
use word_game::puzzle::random_seed;
use word_game::tui::run_tui;
use word_game::wordlist::{EMBEDDED_WORDS, load_words_from_file, load_words_from_str};

fn main() {
    logging::init();
    let cli = parse_cli();

    let words = match &cli.wordlist_path {
        Some(path) => match load_words_from_file(path) {
            Ok(words) => words,
            Err(e) => {
                eprintln!("Failed to load word list from '{path}': {e}");
                return;
            }
        },
        None => load_words_from_str(EMBEDDED_WORDS),
    };
    if words.is_empty() {
        eprintln!("Word list has no playable words (need 5-letter entries).");
        return;
    }

    // An empty seed counts as absent; always start from a playable puzzle
    let seed = cli
        .seed
        .clone()
        .filter(|s| !s.is_empty())
        .unwrap_or_else(random_seed);

    if cli.tui {
        if let Err(e) = run_tui(&words, seed) {
            eprintln!("Terminal UI error: {e}");
        }
    } else {
        let stdin = io::stdin();
        play_loop(&words, seed, stdin.lock());
    }
}
