//! Piece codes
//!
//! A piece is a single character: the letter encodes the type
//! (`p n b r q k`), upper case is White and lower case is Black. Tokens are
//! drawn from images addressed by color prefix and lowercase letter, e.g.
//! `assets/pieces/wq.png`.

use crate::board::{BoardError, BoardResult};
use std::fmt;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum PieceColor {
    #[default]
    White,
    Black,
}

impl PieceColor {
    /// Asset prefix: "w" or "b"
    pub fn prefix(self) -> char {
        match self {
            PieceColor::White => 'w',
            PieceColor::Black => 'b',
        }
    }

    /// Rank index (0-based) a pawn of this color promotes on
    pub fn promotion_rank(self) -> u8 {
        match self {
            PieceColor::White => 7,
            PieceColor::Black => 0,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum PieceType {
    #[default]
    King,
    Queen,
    Bishop,
    Knight,
    Rook,
    Pawn,
}

impl PieceType {
    pub fn letter(self) -> char {
        match self {
            PieceType::King => 'k',
            PieceType::Queen => 'q',
            PieceType::Bishop => 'b',
            PieceType::Knight => 'n',
            PieceType::Rook => 'r',
            PieceType::Pawn => 'p',
        }
    }

    fn from_letter(letter: char) -> Option<Self> {
        Some(match letter {
            'k' => PieceType::King,
            'q' => PieceType::Queen,
            'b' => PieceType::Bishop,
            'n' => PieceType::Knight,
            'r' => PieceType::Rook,
            'p' => PieceType::Pawn,
            _ => return None,
        })
    }
}

/// A validated piece code
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Piece {
    code: char,
}

impl Piece {
    pub fn from_code(code: char) -> BoardResult<Self> {
        PieceType::from_letter(code.to_ascii_lowercase())
            .map(|_| Self { code })
            .ok_or(BoardError::InvalidPiece { code })
    }

    pub fn new(color: PieceColor, piece_type: PieceType) -> Self {
        let letter = piece_type.letter();
        let code = match color {
            PieceColor::White => letter.to_ascii_uppercase(),
            PieceColor::Black => letter,
        };
        Self { code }
    }

    pub fn code(self) -> char {
        self.code
    }

    pub fn color(self) -> PieceColor {
        if self.code.is_ascii_uppercase() {
            PieceColor::White
        } else {
            PieceColor::Black
        }
    }

    pub fn piece_type(self) -> PieceType {
        // `from_code` only admits known letters
        PieceType::from_letter(self.code.to_ascii_lowercase()).unwrap_or_default()
    }

    pub fn is_pawn(self) -> bool {
        self.piece_type() == PieceType::Pawn
    }

    /// Image address of this piece under `root`
    pub fn asset(self, root: &str) -> String {
        asset_address(root, self.color(), self.piece_type().letter())
    }
}

impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code)
    }
}

/// `<root>/<w|b><letter>.png`
pub fn asset_address(root: &str, color: PieceColor, letter: char) -> String {
    let root = root.trim_end_matches('/');
    if root.is_empty() {
        format!("{}{}.png", color.prefix(), letter)
    } else {
        format!("{}/{}{}.png", root, color.prefix(), letter)
    }
}

/// Piece a pawn may become on its last rank
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum PromotionChoice {
    #[default]
    Queen,
    Rook,
    Bishop,
    Knight,
}

impl PromotionChoice {
    /// Picker order: queen, rook, bishop, knight
    pub const ALL: [PromotionChoice; 4] = [
        PromotionChoice::Queen,
        PromotionChoice::Rook,
        PromotionChoice::Bishop,
        PromotionChoice::Knight,
    ];

    /// Move-token suffix
    pub fn letter(self) -> char {
        self.piece_type().letter()
    }

    pub fn from_letter(letter: char) -> Option<Self> {
        Some(match letter {
            'q' => PromotionChoice::Queen,
            'r' => PromotionChoice::Rook,
            'b' => PromotionChoice::Bishop,
            'n' => PromotionChoice::Knight,
            _ => return None,
        })
    }

    pub fn piece_type(self) -> PieceType {
        match self {
            PromotionChoice::Queen => PieceType::Queen,
            PromotionChoice::Rook => PieceType::Rook,
            PromotionChoice::Bishop => PieceType::Bishop,
            PromotionChoice::Knight => PieceType::Knight,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            PromotionChoice::Queen => "Queen",
            PromotionChoice::Rook => "Rook",
            PromotionChoice::Bishop => "Bishop",
            PromotionChoice::Knight => "Knight",
        }
    }
}
