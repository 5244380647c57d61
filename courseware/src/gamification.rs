//! Badges, points, and the leaderboard.

#[cfg(test)]
#[path = "gamification_test.rs"]
mod gamification_test;

use serde::{Deserialize, Serialize};

use crate::forum::Author;
use crate::numbers;
use crate::progress::progress_percentage;

/// Default number of leaderboard rows requested.
pub const LEADERBOARD_LIMIT: usize = 50;

/// A badge definition.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Badge {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub icon: Option<String>,
    #[serde(default, deserialize_with = "numbers::i64_or_zero")]
    pub points: i64,
}

/// A badge earned by a user, with the badge row embedded.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct UserBadge {
    #[serde(default)]
    pub id: Option<String>,
    pub user_id: String,
    pub badge_id: String,
    #[serde(default)]
    pub achieved_at: Option<String>,
    #[serde(default, alias = "badges")]
    pub badge: Option<Badge>,
}

/// One leaderboard row.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LeaderboardEntry {
    pub user_id: String,
    #[serde(default, deserialize_with = "numbers::i64_or_zero")]
    pub total_points: i64,
    #[serde(default, deserialize_with = "numbers::i64_or_zero")]
    pub courses_completed: i64,
    #[serde(default, deserialize_with = "numbers::i64_or_zero")]
    pub streak_days: i64,
    #[serde(default, deserialize_with = "numbers::opt_i64")]
    pub rank: Option<i64>,
    #[serde(default, alias = "users")]
    pub user: Option<Author>,
}

/// Fill missing ranks from list position (1-based). The list is expected in
/// descending point order, as the backend returns it.
#[must_use]
pub fn assign_ranks(mut entries: Vec<LeaderboardEntry>) -> Vec<LeaderboardEntry> {
    for (index, entry) in entries.iter_mut().enumerate() {
        if entry.rank.is_none() {
            entry.rank = Some(i64::try_from(index + 1).unwrap_or(i64::MAX));
        }
    }
    entries
}

/// Medal glyph for the podium, plain `#n` otherwise.
#[must_use]
pub fn rank_label(rank: i64) -> String {
    match rank {
        1 => "🥇".to_owned(),
        2 => "🥈".to_owned(),
        3 => "🥉".to_owned(),
        n => format!("#{n}"),
    }
}

/// Response of `GET /api/gamification/user-stats/{user_id}`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GamificationStats {
    #[serde(default, deserialize_with = "numbers::i64_or_zero")]
    pub total_points: i64,
    #[serde(default, deserialize_with = "numbers::i64_or_zero")]
    pub courses_completed: i64,
    #[serde(default, deserialize_with = "numbers::i64_or_zero")]
    pub streak_days: i64,
    #[serde(default, deserialize_with = "numbers::opt_i64")]
    pub rank: Option<i64>,
    #[serde(default, deserialize_with = "numbers::i64_or_zero")]
    pub badges_earned: i64,
    #[serde(default, deserialize_with = "numbers::i64_or_zero")]
    pub total_badges: i64,
}

impl GamificationStats {
    /// Share of available badges earned, `0..=100`.
    #[must_use]
    pub fn badge_completion(&self) -> u8 {
        let earned = usize::try_from(self.badges_earned.max(0)).unwrap_or(0);
        let total = usize::try_from(self.total_badges.max(0)).unwrap_or(0);
        progress_percentage(earned, total)
    }
}

/// Whether `badge_id` is among the earned badges.
#[must_use]
pub fn has_badge(earned: &[UserBadge], badge_id: &str) -> bool {
    earned.iter().any(|b| b.badge_id == badge_id)
}

/// Response of `POST /api/gamification/award-badge`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BadgeAward {
    #[serde(default, deserialize_with = "numbers::string_or_empty")]
    pub message: String,
    /// `false` when the user already held the badge.
    #[serde(default)]
    pub awarded: bool,
}

impl BadgeAward {
    /// Notice shown to the admin after an award attempt.
    #[must_use]
    pub fn notice(&self, badge: &str, recipient: &str) -> String {
        if self.awarded {
            format!("Awarded \"{badge}\" to {recipient}.")
        } else {
            format!("{recipient} already has \"{badge}\".")
        }
    }
}
