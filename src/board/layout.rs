//! Board geometry in pointer coordinates
//!
//! The grid is drawn with rank 8 on the top row and the a-file on the left;
//! pointer y grows downwards. Hit-testing is the inverse of [`BoardLayout::square_rect`].

use crate::board::Square;
use crate::core::LayoutSettings;

/// Axis-aligned rectangle in pointer coordinates
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    /// Half-open containment: left/top edges inside, right/bottom outside
    pub fn contains(&self, x: f32, y: f32) -> bool {
        x >= self.x && x < self.x + self.width && y >= self.y && y < self.y + self.height
    }

    pub fn center(&self) -> (f32, f32) {
        (self.x + self.width / 2.0, self.y + self.height / 2.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoardLayout {
    origin_x: f32,
    origin_y: f32,
    square_size: f32,
}

impl Default for BoardLayout {
    fn default() -> Self {
        Self::from(LayoutSettings::default())
    }
}

impl From<LayoutSettings> for BoardLayout {
    fn from(settings: LayoutSettings) -> Self {
        Self::new(settings.origin_x, settings.origin_y, settings.square_size)
    }
}

impl BoardLayout {
    /// Non-positive or non-finite square sizes fall back to 1.0
    pub fn new(origin_x: f32, origin_y: f32, square_size: f32) -> Self {
        let square_size = if square_size.is_finite() && square_size > 0.0 {
            square_size
        } else {
            1.0
        };
        Self {
            origin_x,
            origin_y,
            square_size,
        }
    }

    pub fn square_size(&self) -> f32 {
        self.square_size
    }

    /// Whole-board bounds
    pub fn bounds(&self) -> Rect {
        Rect {
            x: self.origin_x,
            y: self.origin_y,
            width: self.square_size * 8.0,
            height: self.square_size * 8.0,
        }
    }

    pub fn square_rect(&self, square: Square) -> Rect {
        let row = 7 - square.rank();
        Rect {
            x: self.origin_x + square.file() as f32 * self.square_size,
            y: self.origin_y + row as f32 * self.square_size,
            width: self.square_size,
            height: self.square_size,
        }
    }

    /// Square under the pointer, `None` outside the grid
    pub fn square_at(&self, x: f32, y: f32) -> Option<Square> {
        if !self.bounds().contains(x, y) {
            return None;
        }
        let file = ((x - self.origin_x) / self.square_size).floor() as i32;
        let row = ((y - self.origin_y) / self.square_size).floor() as i32;
        if !(0..8).contains(&file) || !(0..8).contains(&row) {
            return None;
        }
        Square::new(file as u8, 7 - row as u8)
    }
}
