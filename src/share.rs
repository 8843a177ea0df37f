use crate::game::{Feedback, Guess};

fn symbol(feedback: Feedback) -> char {
    match feedback {
        Feedback::Noop => '⬜',
        Feedback::PositionDifferent => '🟨',
        Feedback::Exact => '🟩',
    }
}

/// Plain-text result block: one line per guess in the order they were
/// played, one symbol per position. Meant for pasting somewhere, not for
/// parsing back.
pub fn share_grid(guesses: &[Guess]) -> String {
    guesses
        .iter()
        .map(|g| g.feedback.iter().copied().map(symbol).collect::<String>())
        .collect::<Vec<_>>()
        .join("\n")
}
