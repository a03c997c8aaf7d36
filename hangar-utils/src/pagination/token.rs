//! Navigation custom ID encoding and parsing.
//!
//! Navigation buttons carry the id of the interaction that started the search
//! (`previous:<origin>` / `next:<origin>`), so a click resolves to the session
//! of the message it was made on.

use super::page::Direction;

const PREVIOUS: &str = "previous";
const NEXT: &str = "next";

/// Parsed navigation button press.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavToken {
    pub direction: Direction,
    /// Origin interaction id, absent on bare `previous`/`next` ids.
    pub origin: Option<u64>,
}

/// Build the custom ID for a navigation button.
pub fn build_nav_custom_id(direction: Direction, origin: u64) -> String {
    format!("{}:{origin}", direction_segment(direction))
}

/// Parse a navigation custom ID.
///
/// Returns `None` when the id is not a navigation id at all, which makes it
/// a vehicle identifier. An unreadable origin still counts as navigation.
pub fn parse_nav_custom_id(custom_id: &str) -> Option<NavToken> {
    let (head, origin) = match custom_id.split_once(':') {
        Some((head, tail)) => (head, tail.parse::<u64>().ok()),
        None => (custom_id, None),
    };

    let direction = match head {
        PREVIOUS => Direction::Previous,
        NEXT => Direction::Next,
        _ => return None,
    };

    Some(NavToken { direction, origin })
}

fn direction_segment(direction: Direction) -> &'static str {
    match direction {
        Direction::Previous => PREVIOUS,
        Direction::Next => NEXT,
    }
}
