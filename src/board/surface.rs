//! Board surface - the scene model a front end draws
//!
//! Owns the 64 square cells (shade, coordinate labels, optional piece token)
//! and repaints them from a [`Position`].
//!
//! # Rendering Model
//!
//! [`BoardSurface::render`] is a full repaint: every cell is cleared, then one
//! visible token is placed per mapped square. What is on screen therefore
//! depends only on the last position rendered, never on earlier frames.
//!
//! Tokens can be hidden without removal ([`BoardSurface::suppress`]) while a
//! drag or a submission is in progress, and shown again with
//! [`BoardSurface::restore`]. After a successful refresh the surface bumps a
//! pulse counter that front ends may use for a fade effect.

use crate::board::{BoardLayout, Piece, Position, Rect, Shade, Square};
use std::fmt;
use tracing::{debug, trace};

/// Visual representation of a piece on a square
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PieceToken {
    pub piece: Piece,
    /// Image address, `<root>/<w|b><letter>.png`
    pub asset: String,
    pub visible: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SquareCell {
    pub square: Square,
    pub shade: Shade,
    /// Rank digit drawn on the a-file
    pub rank_label: Option<char>,
    /// File letter drawn on rank 1
    pub file_label: Option<char>,
    pub token: Option<PieceToken>,
}

#[derive(Debug, Clone)]
pub struct BoardSurface {
    layout: BoardLayout,
    asset_root: String,
    /// Indexed by [`Square::index`]
    cells: Vec<SquareCell>,
    pulse_generation: u64,
}

impl Default for BoardSurface {
    fn default() -> Self {
        Self::new(BoardLayout::default(), "assets/pieces")
    }
}

impl BoardSurface {
    /// Build the empty 8x8 grid
    pub fn new(layout: BoardLayout, asset_root: impl Into<String>) -> Self {
        let cells = (0..64)
            .filter_map(Square::from_index)
            .map(|square| SquareCell {
                square,
                shade: square.shade(),
                rank_label: (square.file() == 0).then(|| square.rank_char()),
                file_label: (square.rank() == 0).then(|| square.file_char()),
                token: None,
            })
            .collect();

        Self {
            layout,
            asset_root: asset_root.into(),
            cells,
            pulse_generation: 0,
        }
    }

    pub fn layout(&self) -> &BoardLayout {
        &self.layout
    }

    pub fn asset_root(&self) -> &str {
        &self.asset_root
    }

    /// Clear every cell, then place one token per mapped square
    pub fn render(&mut self, position: &Position) {
        for cell in &mut self.cells {
            cell.token = None;
        }
        for (square, piece) in position.iter() {
            self.cells[square.index()].token = Some(PieceToken {
                piece,
                asset: piece.asset(&self.asset_root),
                visible: true,
            });
        }
        debug!("[SURFACE] Rendered {} pieces", position.len());
    }

    /// Cosmetic redraw signal after a refresh
    pub fn pulse(&mut self) {
        self.pulse_generation = self.pulse_generation.wrapping_add(1);
        trace!("[SURFACE] Pulse {}", self.pulse_generation);
    }

    pub fn pulse_generation(&self) -> u64 {
        self.pulse_generation
    }

    pub fn cell(&self, square: Square) -> &SquareCell {
        &self.cells[square.index()]
    }

    /// Cells in display order, rank 8 first
    pub fn cells(&self) -> impl Iterator<Item = &SquareCell> {
        Square::all().map(move |sq| &self.cells[sq.index()])
    }

    pub fn token(&self, square: Square) -> Option<&PieceToken> {
        self.cells[square.index()].token.as_ref()
    }

    pub fn occupied_count(&self) -> usize {
        self.cells.iter().filter(|c| c.token.is_some()).count()
    }

    /// Hide the token on `square`; false if the square is empty
    pub fn suppress(&mut self, square: Square) -> bool {
        self.set_visible(square, false)
    }

    /// Show the token on `square` again; false if the square is empty
    pub fn restore(&mut self, square: Square) -> bool {
        self.set_visible(square, true)
    }

    fn set_visible(&mut self, square: Square, visible: bool) -> bool {
        match self.cells[square.index()].token.as_mut() {
            Some(token) => {
                token.visible = visible;
                true
            }
            None => false,
        }
    }

    pub fn square_at(&self, x: f32, y: f32) -> Option<Square> {
        self.layout.square_at(x, y)
    }

    pub fn square_rect(&self, square: Square) -> Rect {
        self.layout.square_rect(square)
    }
}

/// Text board: hidden tokens print as `_`, empty squares as `.`
impl fmt::Display for BoardSurface {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for rank in (0..8u8).rev() {
            write!(f, "{} ", rank + 1)?;
            for file in 0..8u8 {
                let Some(square) = Square::new(file, rank) else {
                    continue;
                };
                let glyph = match self.token(square) {
                    Some(token) if token.visible => token.piece.code(),
                    Some(_) => '_',
                    None => '.',
                };
                write!(f, " {}", glyph)?;
            }
            writeln!(f)?;
        }
        write!(f, "   a b c d e f g h")
    }
}
