//! Position and the placement-field codec
//!
//! A position description is the space-separated record the move authority
//! returns ("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1"). Only
//! the first field, the piece placement, is consumed here: ranks separated by
//! `/`, rank 8 first, digits counting empty squares.
//!
//! [`PositionCodec::parse`] is lenient. Malformed input yields an incomplete
//! mapping and a `warn!` per skipped token; callers must not rely on it to
//! reject anything. [`PositionCodec::parse_strict`] is the rejecting variant.

use crate::board::{BoardError, BoardResult, Piece, Square};
use std::collections::BTreeMap;
use tracing::warn;

/// Standard starting position description
pub const START_POSITION: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

/// Square-to-piece mapping for one authoritative game state
///
/// Built once by the codec and then only read; a refresh replaces the whole
/// value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Position {
    pieces: BTreeMap<Square, Piece>,
}

impl Position {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn from_pieces(pieces: impl IntoIterator<Item = (Square, Piece)>) -> Self {
        Self {
            pieces: pieces.into_iter().collect(),
        }
    }

    pub fn piece_at(&self, square: Square) -> Option<Piece> {
        self.pieces.get(&square).copied()
    }

    pub fn len(&self) -> usize {
        self.pieces.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pieces.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Square, Piece)> + '_ {
        self.pieces.iter().map(|(sq, piece)| (*sq, *piece))
    }
}

/// Parser/serializer for the placement field
pub struct PositionCodec;

impl PositionCodec {
    /// Lenient parse; never fails
    pub fn parse(description: &str) -> Position {
        let placement = description.split_whitespace().next().unwrap_or("");
        let mut pieces = BTreeMap::new();

        for (row, rank_text) in placement.split('/').enumerate() {
            if row >= 8 {
                warn!("[CODEC] Ignoring extra rank '{}' in '{}'", rank_text, placement);
                continue;
            }
            let rank = 7 - row as u8;
            let mut file: u32 = 0;

            for ch in rank_text.chars() {
                if let Some(empty) = ch.to_digit(10) {
                    file += empty;
                    continue;
                }
                let square = u8::try_from(file).ok().and_then(|f| Square::new(f, rank));
                file += 1;

                let Some(square) = square else {
                    warn!("[CODEC] Token '{}' runs past the h-file on rank {}", ch, rank + 1);
                    continue;
                };
                match Piece::from_code(ch) {
                    Ok(piece) => {
                        pieces.insert(square, piece);
                    }
                    Err(e) => warn!("[CODEC] Skipping {} at {}: {}", ch, square, e),
                }
            }
        }

        Position { pieces }
    }

    /// Parse that rejects anything the lenient parser would truncate
    pub fn parse_strict(description: &str) -> BoardResult<Position> {
        let placement = description
            .split_whitespace()
            .next()
            .ok_or_else(|| malformed("empty description".to_string()))?;
        let rows: Vec<&str> = placement.split('/').collect();
        if rows.len() != 8 {
            return Err(malformed(format!("expected 8 ranks, found {}", rows.len())));
        }

        let mut pieces = BTreeMap::new();
        for (row, rank_text) in rows.iter().enumerate() {
            let rank = 7 - row as u8;
            let mut file: u8 = 0;
            for ch in rank_text.chars() {
                match ch.to_digit(10) {
                    Some(empty @ 1..=8) => file += empty as u8,
                    Some(_) => return Err(malformed(format!("bad run length '{}'", ch))),
                    None => {
                        let piece = Piece::from_code(ch)?;
                        let square = Square::new(file, rank).ok_or_else(|| {
                            malformed(format!("rank {} is wider than 8 files", rank + 1))
                        })?;
                        pieces.insert(square, piece);
                        file += 1;
                    }
                }
                if file > 8 {
                    return Err(malformed(format!("rank {} is wider than 8 files", rank + 1)));
                }
            }
            if file != 8 {
                return Err(malformed(format!("rank {} covers {} files", rank + 1, file)));
            }
        }

        Ok(Position { pieces })
    }

    /// Placement field for `position`, rank 8 first
    pub fn serialize(position: &Position) -> String {
        let mut out = String::with_capacity(72);
        for rank in (0..8u8).rev() {
            let mut empty = 0;
            for file in 0..8u8 {
                let piece = Square::new(file, rank).and_then(|sq| position.piece_at(sq));
                match piece {
                    Some(piece) => {
                        if empty > 0 {
                            out.push(char::from(b'0' + empty));
                            empty = 0;
                        }
                        out.push(piece.code());
                    }
                    None => empty += 1,
                }
            }
            if empty > 0 {
                out.push(char::from(b'0' + empty));
            }
            if rank > 0 {
                out.push('/');
            }
        }
        out
    }
}

fn malformed(message: String) -> BoardError {
    BoardError::MalformedPlacement { message }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sq(name: &str) -> Square {
        Square::parse(name).unwrap()
    }

    #[test]
    fn test_start_position_parses() {
        let position = PositionCodec::parse(START_POSITION);
        assert_eq!(position.len(), 32);

        let back_rank = "rnbqkbnr";
        for (file, code) in back_rank.chars().enumerate() {
            let file = file as u8;
            assert_eq!(position.piece_at(Square::new(file, 7).unwrap()).unwrap().code(), code);
            assert_eq!(
                position.piece_at(Square::new(file, 0).unwrap()).unwrap().code(),
                code.to_ascii_uppercase()
            );
            assert_eq!(position.piece_at(Square::new(file, 6).unwrap()).unwrap().code(), 'p');
            assert_eq!(position.piece_at(Square::new(file, 1).unwrap()).unwrap().code(), 'P');
            for rank in 2..6 {
                assert!(position.piece_at(Square::new(file, rank).unwrap()).is_none());
            }
        }
    }

    #[test]
    fn test_metadata_fields_ignored() {
        let position = PositionCodec::parse("8/8/8/8/4P3/8/8/8 b - e3 0 1");
        assert_eq!(position.len(), 1);
        assert_eq!(position.piece_at(sq("e4")).unwrap().code(), 'P');
    }

    #[test]
    fn test_lenient_parse_drops_bad_tokens() {
        // unknown letter, overlong rank, a ninth rank
        let position = PositionCodec::parse("x7/ppppppppp/8/8/8/8/8/7K/8");
        assert!(position.piece_at(sq("a8")).is_none());
        assert_eq!(position.piece_at(sq("h7")).unwrap().code(), 'p');
        assert_eq!(position.piece_at(sq("h1")).unwrap().code(), 'K');
        assert_eq!(position.len(), 9);
    }

    #[test]
    fn test_lenient_parse_of_garbage_is_partial() {
        assert!(PositionCodec::parse("").is_empty());
        let position = PositionCodec::parse("4k");
        assert_eq!(position.len(), 1);
        assert_eq!(position.piece_at(sq("e8")).unwrap().code(), 'k');
    }

    #[test]
    fn test_strict_parse_rejects_what_lenient_truncates() {
        assert!(PositionCodec::parse_strict(START_POSITION).is_ok());
        for bad in [
            "",
            "4k",
            "x7/8/8/8/8/8/8/8",
            "ppppppppp/8/8/8/8/8/8/8",
            "7/8/8/8/8/8/8/8",
            "8/8/8/8/8/8/8/8/8",
            "09/8/8/8/8/8/8/8",
        ] {
            assert!(PositionCodec::parse_strict(bad).is_err(), "{bad:?} should fail");
        }
    }

    #[test]
    fn test_serialize_matches_placement_field() {
        let position = PositionCodec::parse(START_POSITION);
        assert_eq!(
            PositionCodec::serialize(&position),
            "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR"
        );

        let sparse = "r3k2r/8/8/3pP3/8/8/8/R3K2R";
        assert_eq!(PositionCodec::serialize(&PositionCodec::parse(sparse)), sparse);
        assert_eq!(PositionCodec::serialize(&Position::empty()), "8/8/8/8/8/8/8/8");
    }
}
