//! Statistics panel
//!
//! Shows the win/loss/draw counters and the recent games, newest first, each
//! as `YYYY-MM-DD HH:MM:SS - result (N moves)` in UTC.

use crate::networking::{RecentGame, StatCounts, Statistics};
use chrono::DateTime;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StatsPanel {
    pub counts: StatCounts,
    /// Formatted lines, newest first
    pub recent: Vec<String>,
}

impl StatsPanel {
    pub fn update(&mut self, stats: &Statistics) {
        self.counts = stats.counts;
        self.recent = stats.recent_games.iter().rev().map(format_recent_game).collect();
    }

    pub fn summary(&self) -> String {
        format!(
            "W {} / L {} / D {} (total {})",
            self.counts.wins, self.counts.losses, self.counts.draws, self.counts.total
        )
    }
}

pub fn format_recent_game(game: &RecentGame) -> String {
    let when = DateTime::from_timestamp(game.ts, 0)
        .map(|dt| dt.format("%Y-%m-%d %H:%M:%S").to_string())
        .unwrap_or_else(|| game.ts.to_string());
    format!("{} - {} ({} moves)", when, game.result, game.moves)
}
