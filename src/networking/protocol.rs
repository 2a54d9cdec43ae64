//! Move-authority protocol types
//!
//! # Move Tokens
//!
//! `<origin><dest>` or `<origin><dest><promotion>`, e.g. `e2e4`, `e7e8q`. The
//! promotion letter is one of `q r b n`.
//!
//! # Reply Grammar
//!
//! | Reply                 | Human move                | Opponent move                  |
//! |-----------------------|---------------------------|--------------------------------|
//! | `invalid`             | [`MoveResult::Invalid`]   | protocol violation             |
//! | `game_over<sep>reason`| [`MoveResult::GameOver`]  | [`MoveResult::GameOverAfterOpponent`] |
//! | any other non-empty   | [`MoveResult::Accepted`]  | [`MoveResult::OpponentMove`]   |
//! | empty                 | protocol violation        | protocol violation             |
//!
//! Replies are parsed once here; everything downstream matches on the variant.

use crate::board::{PromotionChoice, Square};
use crate::networking::{AuthorityError, AuthorityResult};
use serde::{Deserialize, Serialize};
use std::fmt;

const INVALID_REPLY: &str = "invalid";
const GAME_OVER_PREFIX: &str = "game_over";

/// Candidate move produced by a gesture
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveRequest {
    pub origin: Square,
    pub dest: Square,
    pub promotion: Option<PromotionChoice>,
}

impl MoveRequest {
    pub fn new(origin: Square, dest: Square) -> Self {
        Self {
            origin,
            dest,
            promotion: None,
        }
    }

    pub fn with_promotion(mut self, choice: PromotionChoice) -> Self {
        self.promotion = Some(choice);
        self
    }

    pub fn token(&self) -> MoveToken {
        let mut token = format!("{}{}", self.origin, self.dest);
        if let Some(choice) = self.promotion {
            token.push(choice.letter());
        }
        MoveToken(token)
    }
}

/// Wire form of a move, validated against the token grammar
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct MoveToken(String);

impl MoveToken {
    pub fn parse(token: &str) -> AuthorityResult<Self> {
        Self::to_request(token).map(|request| request.token())
    }

    /// Decode a token back into the request it encodes
    pub fn to_request(token: &str) -> AuthorityResult<MoveRequest> {
        let malformed = || AuthorityError::MalformedToken {
            token: token.to_string(),
        };
        if !token.is_ascii() || !(4..=5).contains(&token.len()) {
            return Err(malformed());
        }
        let origin = Square::parse(&token[0..2]).map_err(|_| malformed())?;
        let dest = Square::parse(&token[2..4]).map_err(|_| malformed())?;
        let mut request = MoveRequest::new(origin, dest);
        if let Some(letter) = token[4..].chars().next() {
            let choice = PromotionChoice::from_letter(letter).ok_or_else(malformed)?;
            request = request.with_promotion(choice);
        }
        Ok(request)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for MoveToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Authoritative verdict on a submitted or requested move
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoveResult {
    /// Human move applied; opponent to play
    Accepted,
    /// Human move rejected; nothing changed
    Invalid,
    /// Human move ended the game
    GameOver(String),
    /// Opponent replied with this move
    OpponentMove(String),
    /// Game ended on the opponent's turn
    GameOverAfterOpponent(String),
}

impl MoveResult {
    /// Interpret the reply to a human move submission
    pub fn from_human_reply(reply: &str) -> AuthorityResult<Self> {
        let reply = reply.trim();
        if reply.is_empty() {
            return Err(violation("submit human move", reply));
        }
        if reply == INVALID_REPLY {
            return Ok(MoveResult::Invalid);
        }
        if let Some(reason) = game_over_reason(reply) {
            return Ok(MoveResult::GameOver(reason));
        }
        Ok(MoveResult::Accepted)
    }

    /// Interpret the reply to an opponent move request
    pub fn from_opponent_reply(reply: &str) -> AuthorityResult<Self> {
        let reply = reply.trim();
        if reply.is_empty() || reply == INVALID_REPLY {
            return Err(violation("request opponent move", reply));
        }
        if let Some(reason) = game_over_reason(reply) {
            return Ok(MoveResult::GameOverAfterOpponent(reason));
        }
        Ok(MoveResult::OpponentMove(reply.to_string()))
    }

    pub fn is_terminal(&self) -> bool {
        matches!(
            self,
            MoveResult::GameOver(_) | MoveResult::GameOverAfterOpponent(_)
        )
    }
}

fn game_over_reason(reply: &str) -> Option<String> {
    reply.strip_prefix(GAME_OVER_PREFIX).map(|rest| {
        rest.trim_start_matches(|c: char| c == ':' || c.is_whitespace())
            .trim_end()
            .to_string()
    })
}

fn violation(operation: &'static str, reply: &str) -> AuthorityError {
    AuthorityError::ProtocolViolation {
        operation,
        reply: reply.to_string(),
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatCounts {
    pub wins: u32,
    pub losses: u32,
    pub draws: u32,
    pub total: u32,
}

/// One finished game as reported by the authority
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecentGame {
    /// End time, epoch seconds
    pub ts: i64,
    /// "1-0", "0-1" or "1/2-1/2"
    pub result: String,
    pub moves: u32,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Statistics {
    pub counts: StatCounts,
    /// Oldest first, as sent by the authority
    #[serde(default, alias = "recentGames")]
    pub recent_games: Vec<RecentGame>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sq(name: &str) -> Square {
        Square::parse(name).unwrap()
    }

    #[test]
    fn test_token_from_request() {
        let plain = MoveRequest::new(sq("e2"), sq("e4"));
        assert_eq!(plain.token().as_str(), "e2e4");

        let promo = MoveRequest::new(sq("e7"), sq("e8")).with_promotion(PromotionChoice::Queen);
        assert_eq!(promo.token().to_string(), "e7e8q");
    }

    #[test]
    fn test_token_grammar() {
        assert!(MoveToken::parse("e2e4").is_ok());
        assert!(MoveToken::parse("a7a8n").is_ok());
        for bad in ["", "e2", "e2e", "e2e9", "e7e8k", "e7e8qq", "e2-e4", "é2e4"] {
            assert!(MoveToken::parse(bad).is_err(), "{bad:?} should be rejected");
        }
        let request = MoveToken::to_request("b2b1r").unwrap();
        assert_eq!(request.promotion, Some(PromotionChoice::Rook));
    }

    #[test]
    fn test_human_reply_grammar() {
        assert_eq!(MoveResult::from_human_reply("ok").unwrap(), MoveResult::Accepted);
        assert_eq!(MoveResult::from_human_reply("e2e4").unwrap(), MoveResult::Accepted);
        assert_eq!(MoveResult::from_human_reply("invalid").unwrap(), MoveResult::Invalid);
        assert_eq!(
            MoveResult::from_human_reply("game_over:1-0").unwrap(),
            MoveResult::GameOver("1-0".to_string())
        );
        assert_eq!(
            MoveResult::from_human_reply("game_over checkmate").unwrap(),
            MoveResult::GameOver("checkmate".to_string())
        );
        assert!(MoveResult::from_human_reply("  ").is_err());
    }

    #[test]
    fn test_opponent_reply_grammar() {
        assert_eq!(
            MoveResult::from_opponent_reply("e7e5").unwrap(),
            MoveResult::OpponentMove("e7e5".to_string())
        );
        assert_eq!(
            MoveResult::from_opponent_reply("game_over:1/2-1/2").unwrap(),
            MoveResult::GameOverAfterOpponent("1/2-1/2".to_string())
        );
        assert!(matches!(
            MoveResult::from_opponent_reply("invalid"),
            Err(AuthorityError::ProtocolViolation { .. })
        ));
    }

    #[test]
    fn test_statistics_accepts_both_spellings() {
        let snake: Statistics = serde_json::from_str(
            r#"{"counts":{"wins":1,"losses":2,"draws":0,"total":3},
                "recent_games":[{"ts":0,"result":"1-0","moves":40}],
                "recent_training":[]}"#,
        )
        .unwrap();
        let camel: Statistics = serde_json::from_str(
            r#"{"counts":{"wins":1,"losses":2,"draws":0,"total":3},
                "recentGames":[{"ts":0,"result":"1-0","moves":40}]}"#,
        )
        .unwrap();
        assert_eq!(snake, camel);
        assert_eq!(snake.recent_games[0].moves, 40);
    }
}
