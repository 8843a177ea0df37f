use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

use crate::game::WORD_LENGTH;

/// Default word list compiled into the binary so the game is playable with
/// no arguments.
pub const EMBEDDED_WORDS: &str = include_str!("resources/words.txt");

fn playable(word: &str) -> bool {
    word.len() == WORD_LENGTH && word.chars().all(|c| c.is_ascii_lowercase())
}

/// Parse a newline-separated word list, keeping only five-letter ASCII
/// words. Entries are lowercased; the puzzle's word universe is lowercase.
pub fn load_words_from_str(data: &str) -> Vec<String> {
    data.lines()
        .map(|line| line.trim().to_lowercase())
        .filter(|word| playable(word))
        .collect()
}

/// Load and filter a word list from a file.
pub fn load_words_from_file<P: AsRef<Path>>(path: P) -> io::Result<Vec<String>> {
    let file = File::open(path)?;
    let reader = BufReader::new(file);
    let mut words = Vec::new();
    for line in reader.lines() {
        let word = line?.trim().to_lowercase();
        if playable(&word) {
            words.push(word);
        }
    }
    Ok(words)
}

/// The embedded default list, parsed.
pub fn embedded_words() -> Vec<String> {
    load_words_from_str(EMBEDDED_WORDS)
}
