//! Status line messages

use crate::board::Square;
use crate::networking::MoveToken;
use std::fmt;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum StatusMessage {
    #[default]
    YourMove,
    Selected(Square),
    Trying(MoveToken),
    InvalidMove,
    GameOver(String),
    OpponentPlayed(String),
    GameReset,
    /// Another move is still waiting for the authority
    Busy,
    Error(String),
}

impl fmt::Display for StatusMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StatusMessage::YourMove => write!(f, "Your move"),
            StatusMessage::Selected(square) => write!(f, "Selected {}", square),
            StatusMessage::Trying(token) => write!(f, "Trying {}", token),
            StatusMessage::InvalidMove => write!(f, "Invalid move!"),
            StatusMessage::GameOver(reason) if reason.is_empty() => write!(f, "Game over"),
            StatusMessage::GameOver(reason) => write!(f, "Game over: {}", reason),
            StatusMessage::OpponentPlayed(notation) => write!(f, "AI played {}", notation),
            StatusMessage::GameReset => write!(f, "Game reset"),
            StatusMessage::Busy => write!(f, "Waiting for the previous move"),
            StatusMessage::Error(message) => write!(f, "Error: {}", message),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_text() {
        let e2 = Square::parse("e2").unwrap();
        assert_eq!(StatusMessage::default().to_string(), "Your move");
        assert_eq!(StatusMessage::Selected(e2).to_string(), "Selected e2");
        assert_eq!(
            StatusMessage::Trying(MoveToken::parse("e2e4").unwrap()).to_string(),
            "Trying e2e4"
        );
        assert_eq!(StatusMessage::InvalidMove.to_string(), "Invalid move!");
        assert_eq!(StatusMessage::GameOver("1-0".into()).to_string(), "Game over: 1-0");
        assert_eq!(StatusMessage::OpponentPlayed("e7e5".into()).to_string(), "AI played e7e5");
    }
}
