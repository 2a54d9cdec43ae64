//! Square identifiers
//!
//! A square is addressed by file letter + rank digit ("e4"). Internally the
//! file and rank are stored as 0-based indices, rank 0 being rank 1.

use crate::board::{BoardError, BoardResult};
use std::fmt;
use std::str::FromStr;

/// File letters in board order
pub const FILES: &str = "abcdefgh";

/// Light/dark classification of a square
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Shade {
    Light,
    Dark,
}

/// One of the 64 board cells
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Square {
    rank: u8,
    file: u8,
}

impl Square {
    /// Build a square from 0-based file and rank indices
    pub fn new(file: u8, rank: u8) -> Option<Self> {
        (file < 8 && rank < 8).then_some(Self { rank, file })
    }

    /// Parse a square name such as "e4"
    pub fn parse(name: &str) -> BoardResult<Self> {
        let invalid = || BoardError::InvalidSquare {
            name: name.to_string(),
        };
        let mut chars = name.chars();
        let (Some(file), Some(rank), None) = (chars.next(), chars.next(), chars.next()) else {
            return Err(invalid());
        };
        let file = FILES.find(file).ok_or_else(invalid)?;
        let rank = rank.to_digit(10).filter(|r| (1..=8).contains(r)).ok_or_else(invalid)?;
        Ok(Self {
            file: file as u8,
            rank: rank as u8 - 1,
        })
    }

    /// 0-based file index (a = 0)
    pub fn file(self) -> u8 {
        self.file
    }

    /// 0-based rank index (rank 1 = 0)
    pub fn rank(self) -> u8 {
        self.rank
    }

    /// Rank as printed on the board, 1..=8
    pub fn rank_number(self) -> u8 {
        self.rank + 1
    }

    pub fn file_char(self) -> char {
        FILES.as_bytes()[self.file as usize] as char
    }

    pub fn rank_char(self) -> char {
        (b'1' + self.rank) as char
    }

    /// Dense index `rank * 8 + file`
    pub fn index(self) -> usize {
        self.rank as usize * 8 + self.file as usize
    }

    pub fn from_index(index: usize) -> Option<Self> {
        (index < 64).then(|| Self {
            rank: (index / 8) as u8,
            file: (index % 8) as u8,
        })
    }

    /// `(rank + file) mod 2`; even squares are light
    pub fn shade(self) -> Shade {
        if (self.rank + self.file) % 2 == 0 {
            Shade::Light
        } else {
            Shade::Dark
        }
    }

    /// All squares in display order: rank 8 first, a-file to h-file
    pub fn all() -> impl Iterator<Item = Square> {
        (0..8u8)
            .rev()
            .flat_map(|rank| (0..8u8).map(move |file| Square { rank, file }))
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.file_char(), self.rank_char())
    }
}

impl FromStr for Square {
    type Err = BoardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Square::parse(s)
    }
}
