//! Curriculum catalog: which qualification levels exist, which examination
//! boards run each level, and which subjects are taught.
//!
//! Route parameters arrive as raw strings, so every query here takes `&str`
//! and answers with a plain `bool`, an empty slice, or `None`. Turning a
//! negative answer into a not-found page is the caller's job.
mod table;

use serde::Serialize;

pub use table::{Board, BoardOffering, Level, Subject};

/// One addressable `/learn/{level}/{board}/{subject}` page.
#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Combination {
    pub level: Level,
    pub board: Board,
    pub subject: Subject,
}

pub fn levels() -> impl Iterator<Item = Level> {
    table::COMPATIBILITY.iter().map(|entry| entry.level)
}

pub fn is_valid_level(level: &str) -> bool {
    Level::from_id(level).is_some()
}

/// Boards offered under `level`, with their per-level descriptions.
/// Unknown levels have no offerings.
pub fn offerings_for_level(level: &str) -> &'static [BoardOffering] {
    Level::from_id(level)
        .and_then(|level| {
            table::COMPATIBILITY
                .iter()
                .find(|entry| entry.level == level)
        })
        .map(|entry| entry.boards)
        .unwrap_or(&[])
}

pub fn boards_for_level(level: &str) -> Vec<Board> {
    offerings_for_level(level)
        .iter()
        .map(|offering| offering.board)
        .collect()
}

pub fn is_valid_combination(level: &str, board: &str) -> bool {
    offerings_for_level(level)
        .iter()
        .any(|offering| offering.board.id() == board)
}

pub fn is_valid_subject(subject: &str) -> bool {
    Subject::from_id(subject).is_some()
}

/// Looks up a full `(level, board, subject)` triple, `None` if any part is
/// unknown or the board does not run that level.
pub fn combination(level: &str, board: &str, subject: &str) -> Option<Combination> {
    let offering = offerings_for_level(level)
        .iter()
        .find(|offering| offering.board.id() == board)?;

    Some(Combination {
        level: Level::from_id(level)?,
        board: offering.board,
        subject: Subject::from_id(subject)?,
    })
}

/// Every valid combination in declaration order: levels, then each level's
/// boards, then subjects.
pub fn enumerate_all_combinations() -> Vec<Combination> {
    table::COMPATIBILITY
        .iter()
        .flat_map(|entry| {
            entry.boards.iter().flat_map(move |offering| {
                Subject::ALL.into_iter().map(move |subject| Combination {
                    level: entry.level,
                    board: offering.board,
                    subject,
                })
            })
        })
        .collect()
}
