//! Facing directions for directional sprite sheets.

use serde::{Deserialize, Serialize};

/// The four facing directions a character animation can have.
///
/// Serialized with capitalized names ("Down", "Left", ...) to match the
/// atlas document format consumed by the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    Down,
    Left,
    Right,
    Up,
}

impl Direction {
    /// Row order in a directional sprite sheet: row 0 (top) is Down,
    /// then Left, Right, Up.
    pub const ROW_ORDER: [Direction; 4] = [
        Direction::Down,
        Direction::Left,
        Direction::Right,
        Direction::Up,
    ];

    /// Map a sheet row index to its direction. Returns `None` for rows
    /// beyond the four supported directions.
    pub fn from_row(row: usize) -> Option<Self> {
        Self::ROW_ORDER.get(row).copied()
    }

    /// Parse from string (case-insensitive).
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "down" => Some(Direction::Down),
            "left" => Some(Direction::Left),
            "right" => Some(Direction::Right),
            "up" => Some(Direction::Up),
            _ => None,
        }
    }
}

impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Direction::Down => write!(f, "Down"),
            Direction::Left => write!(f, "Left"),
            Direction::Right => write!(f, "Right"),
            Direction::Up => write!(f, "Up"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_row_order() {
        assert_eq!(Direction::from_row(0), Some(Direction::Down));
        assert_eq!(Direction::from_row(1), Some(Direction::Left));
        assert_eq!(Direction::from_row(2), Some(Direction::Right));
        assert_eq!(Direction::from_row(3), Some(Direction::Up));
        assert_eq!(Direction::from_row(4), None);
    }

    #[test]
    fn test_from_str() {
        assert_eq!(Direction::from_str("down"), Some(Direction::Down));
        assert_eq!(Direction::from_str("UP"), Some(Direction::Up));
        assert_eq!(Direction::from_str("north"), None);
    }

    #[test]
    fn test_serde_names() {
        let json = serde_json::to_string(&Direction::Down).unwrap();
        assert_eq!(json, "\"Down\"");
    }
}
