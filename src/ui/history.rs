//! Move list view
//!
//! The authority returns one notation per ply, white first. The view groups
//! them into numbered rows of (white, black); a trailing white move leaves the
//! black column empty.

use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveRow {
    pub number: usize,
    pub white: String,
    pub black: String,
}

impl fmt::Display for MoveRow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.black.is_empty() {
            write!(f, "{}. {}", self.number, self.white)
        } else {
            write!(f, "{}. {} {}", self.number, self.white, self.black)
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MoveListView {
    rows: Vec<MoveRow>,
}

impl MoveListView {
    pub fn from_notations(notations: &[String]) -> Self {
        let rows = notations
            .chunks(2)
            .enumerate()
            .map(|(i, pair)| MoveRow {
                number: i + 1,
                white: pair[0].clone(),
                black: pair.get(1).cloned().unwrap_or_default(),
            })
            .collect();
        Self { rows }
    }

    pub fn update(&mut self, notations: &[String]) {
        *self = Self::from_notations(notations);
    }

    pub fn rows(&self) -> &[MoveRow] {
        &self.rows
    }

    /// Most recent row; the list scrolls to it
    pub fn last(&self) -> Option<&MoveRow> {
        self.rows.last()
    }

    pub fn ply_count(&self) -> usize {
        self.rows
            .iter()
            .map(|row| if row.black.is_empty() { 1 } else { 2 })
            .sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn notations(moves: &[&str]) -> Vec<String> {
        moves.iter().map(|m| m.to_string()).collect()
    }

    #[test]
    fn test_rows_pair_white_and_black() {
        let view = MoveListView::from_notations(&notations(&["e4", "e5", "Nf3", "Nc6", "Bb5"]));
        assert_eq!(view.rows().len(), 3);
        assert_eq!(view.rows()[0].to_string(), "1. e4 e5");
        assert_eq!(view.rows()[1].to_string(), "2. Nf3 Nc6");
        assert_eq!(view.last().unwrap().to_string(), "3. Bb5");
        assert_eq!(view.ply_count(), 5);
    }

    #[test]
    fn test_empty_history() {
        let mut view = MoveListView::from_notations(&notations(&["d4"]));
        view.update(&[]);
        assert!(view.rows().is_empty());
        assert_eq!(view.ply_count(), 0);
    }
}
