//! Quest reward calculation and the undo token.

use super::types::{Difficulty, Quest};
use crate::bosses::Boss;
use crate::character::player::Player;
use crate::character::rank::Rank;
use crate::character::stats::StatType;
use crate::core::balance::{quest_gold, quest_xp, stat_xp, streak_multiplier};
use crate::core::constants::CRITICAL_REWARD_MULTIPLIER;
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Raw reward amounts before they are applied to a player.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct QuestRewards {
    pub xp: u64,
    pub gold: u64,
    pub stat_xp: u64,
    pub multiplier: f64,
    pub critical: bool,
}

/// Computes rewards for a difficulty at a streak length.
///
/// The streak multiplier scales all three rewards, a critical doubles them,
/// and optional quests never grant gold.
pub fn calculate_rewards(
    difficulty: Difficulty,
    optional: bool,
    streak_days: u32,
    critical: bool,
) -> QuestRewards {
    let multiplier = streak_multiplier(streak_days);
    let crit = if critical {
        CRITICAL_REWARD_MULTIPLIER
    } else {
        1
    };

    let gold = if optional {
        0
    } else {
        (quest_gold(difficulty) as f64 * multiplier).floor() as u64 * crit
    };

    QuestRewards {
        xp: quest_xp(difficulty, multiplier) * crit,
        gold,
        stat_xp: (stat_xp(difficulty) as f64 * multiplier).floor() as u64 * crit,
        multiplier,
        critical,
    }
}

/// Rolls for a critical success. Out-of-range chances are clamped.
pub fn roll_critical<R: Rng + ?Sized>(rng: &mut R, chance: f64) -> bool {
    let chance = if chance.is_finite() {
        chance.clamp(0.0, 1.0)
    } else {
        0.0
    };
    rng.gen_bool(chance)
}

/// What a completion handed out, for display by the host.
#[derive(Debug, Clone, PartialEq)]
pub struct RewardBreakdown {
    pub quest_id: String,
    pub xp_awarded: u64,
    pub gold_awarded: u64,
    pub stat: StatType,
    pub stat_xp_awarded: u64,
    pub stat_points_gained: u32,
    pub was_critical: bool,
    pub streak_multiplier: f64,
    pub levels_gained: u32,
    pub level_after: u32,
    pub rank_before: Rank,
    pub rank_after: Rank,
    pub boss_id: Option<String>,
    pub boss_damage: u64,
    pub boss_defeated: bool,
}

impl RewardBreakdown {
    pub fn ranked_up(&self) -> bool {
        self.rank_after > self.rank_before
    }
}

/// Everything needed to reverse one completion exactly.
///
/// Holds the pre-completion player, quest and linked boss.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct UndoToken {
    pub quest_id: String,
    pub player_before: Player,
    pub quest_before: Quest,
    pub boss_before: Option<Boss>,
}
