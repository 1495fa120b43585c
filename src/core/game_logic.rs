//! State transitions.
//!
//! Every transition takes the current snapshot and returns a new one plus a
//! report. Nothing here mutates the caller's state, touches the disk or
//! reads the clock; randomness comes in through `rng`.

use super::balance::{boss_damage, penalty_damage};
use super::config::EngineConfig;
use super::error::Declined;
use super::game_state::GameState;
use crate::character::penalty::{apply_death_penalty, DeathReport};
use crate::character::stats::StatType;
use crate::metrics::{progress_fraction, MetricSnapshot};
use crate::quests::{
    calculate_rewards, roll_critical, QuestStatus, RewardBreakdown, TrackingType, UndoToken,
};
use rand::Rng;
use tracing::{debug, info, warn};

/// Completes a quest and grants its rewards.
///
/// Declines if the quest is unknown or already completed. On success the
/// returned state holds an undo token for this completion.
pub fn complete_quest<R: Rng + ?Sized>(
    state: &GameState,
    quest_id: &str,
    config: &EngineConfig,
    rng: &mut R,
) -> Result<(GameState, RewardBreakdown), Declined> {
    let quest = state.quest(quest_id).ok_or_else(|| {
        warn!(quest_id, "completion declined: unknown quest");
        Declined::UnknownQuest(quest_id.to_string())
    })?;
    if quest.is_completed() {
        warn!(quest_id, "completion declined: already completed");
        return Err(Declined::AlreadyCompleted(quest_id.to_string()));
    }

    // Boss links are weak: a dangling id simply deals no damage.
    let linked_boss = quest.boss_id.as_deref().and_then(|id| state.boss(id));
    let token = UndoToken {
        quest_id: quest.id.clone(),
        player_before: state.player.clone(),
        quest_before: quest.clone(),
        boss_before: linked_boss.cloned(),
    };

    let difficulty = quest.difficulty;
    let stat = quest.stat;
    let boss_id = linked_boss.map(|b| b.id.clone());

    let critical = roll_critical(rng, config.crit_chance);
    let rewards = calculate_rewards(
        difficulty,
        quest.optional,
        state.player.current_streak,
        critical,
    );

    let mut next = state.clone();
    let level_before = next.player.level;
    let rank_before = next.player.rank();

    let levels_gained = next.player.gain_xp(rewards.xp);
    next.player.gold = next.player.gold.saturating_add(rewards.gold);
    let stat_points_gained = next
        .player
        .stats
        .get_mut(stat)
        .gain_experience(rewards.stat_xp);

    let mut damage_dealt = 0;
    let mut boss_defeated = false;
    if let Some(id) = boss_id.as_deref() {
        if let Some(boss) = next.boss_mut(id) {
            if !boss.defeated {
                damage_dealt = boss.take_damage(boss_damage(difficulty, level_before));
                boss_defeated = boss.defeated;
            }
        }
    }

    if let Some(quest) = next.quest_mut(quest_id) {
        quest.status = QuestStatus::Completed;
        quest.progress = 1.0;
        quest.times_completed = quest.times_completed.saturating_add(1);
    }
    next.last_completion = Some(token);

    let breakdown = RewardBreakdown {
        quest_id: quest_id.to_string(),
        xp_awarded: rewards.xp,
        gold_awarded: rewards.gold,
        stat,
        stat_xp_awarded: rewards.stat_xp,
        stat_points_gained,
        was_critical: critical,
        streak_multiplier: rewards.multiplier,
        levels_gained,
        level_after: next.player.level,
        rank_before,
        rank_after: next.player.rank(),
        boss_id,
        boss_damage: damage_dealt,
        boss_defeated,
    };

    debug!(
        quest_id,
        xp = breakdown.xp_awarded,
        gold = breakdown.gold_awarded,
        stat_xp = breakdown.stat_xp_awarded,
        critical,
        "quest completed"
    );
    if levels_gained > 0 {
        info!(
            from = level_before,
            to = breakdown.level_after,
            rank = %breakdown.rank_after,
            "level up"
        );
    }
    if boss_defeated {
        info!(boss_id = ?breakdown.boss_id, "boss defeated");
    }

    Ok((next, breakdown))
}

/// Reverses the most recent completion exactly.
///
/// Returns the new state and the id of the quest that was reopened.
pub fn undo_last_completion(state: &GameState) -> Result<(GameState, String), Declined> {
    let Some(token) = state.last_completion.as_ref() else {
        warn!("undo declined: nothing to undo");
        return Err(Declined::NothingToUndo);
    };

    let mut next = state.clone();
    next.player = token.player_before.clone();

    let quest = next
        .quest_mut(&token.quest_id)
        .ok_or_else(|| Declined::UnknownQuest(token.quest_id.clone()))?;
    *quest = token.quest_before.clone();

    if let Some(boss_before) = &token.boss_before {
        let boss = next
            .boss_mut(&boss_before.id)
            .ok_or_else(|| Declined::UnknownBoss(boss_before.id.clone()))?;
        *boss = boss_before.clone();
    }

    next.last_completion = None;
    debug!(quest_id = %token.quest_id, "completion undone");
    Ok((next, token.quest_id.clone()))
}

/// Adds training XP to a stat. Returns the base points gained.
pub fn train_stat(state: &GameState, stat: StatType, amount: u64) -> (GameState, u32) {
    let mut next = state.clone();
    let gained = next.player.stats.get_mut(stat).gain_experience(amount);
    next.last_completion = None;
    debug!(stat = stat.abbrev(), amount, gained, "stat trained");
    (next, gained)
}

/// Lowers player HP. Whenever HP ends at zero the death penalty runs as part
/// of the same transition and its report is returned, including for a
/// snapshot that arrives already at zero HP.
pub fn apply_damage(
    state: &GameState,
    amount: u32,
    config: &EngineConfig,
) -> (GameState, Option<DeathReport>) {
    let mut next = state.clone();
    next.last_completion = None;

    if !next.player.take_damage(amount) {
        return (next, None);
    }

    let report = apply_death_penalty(&mut next.player, config.penalties_enabled);
    info!(
        outcome = ?report.outcome,
        rank_before = %report.rank_before,
        rank_after = %report.rank_after,
        gold_lost = report.gold_lost,
        "player died"
    );
    (next, Some(report))
}

/// Result of folding a metric snapshot into the state.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MetricSync {
    /// Pending automatic quests whose progress reached 1.0.
    pub ready_quests: Vec<String>,
    /// Dynamic bosses whose HP changed.
    pub bosses_updated: Vec<String>,
    /// Dynamic bosses that reached zero HP in this sync.
    pub bosses_defeated: Vec<String>,
}

/// Updates automatic quest progress and dynamic boss HP from `snapshot`.
///
/// Ready quests are reported, not completed: the host completes them through
/// `complete_quest` so rewards and undo behave the same as manual completions.
/// The undo slot survives unless something actually changed.
pub fn sync_metrics(state: &GameState, snapshot: &MetricSnapshot) -> (GameState, MetricSync) {
    let mut next = state.clone();
    let mut sync = MetricSync::default();
    let mut changed = false;

    for quest in next.quests.iter_mut() {
        let TrackingType::Automatic { metric, target } = quest.tracking else {
            continue;
        };
        if quest.is_completed() {
            continue;
        }
        let Some(value) = snapshot.get(metric) else {
            continue;
        };

        let progress = progress_fraction(value, target);
        if progress != quest.progress {
            quest.progress = progress;
            changed = true;
        }
        if progress >= 1.0 {
            sync.ready_quests.push(quest.id.clone());
        }
    }

    for boss in next.bosses.iter_mut().filter(|b| b.is_dynamic()) {
        let was_defeated = boss.defeated;
        if boss.recompute_from_metrics(snapshot) {
            changed = true;
            sync.bosses_updated.push(boss.id.clone());
            if boss.defeated && !was_defeated {
                sync.bosses_defeated.push(boss.id.clone());
            }
        }
    }

    if changed {
        next.last_completion = None;
    }
    (next, sync)
}

#[derive(Debug, Clone, PartialEq)]
pub struct DayReport {
    pub completed: Vec<String>,
    /// Non-optional quests left incomplete.
    pub missed: Vec<String>,
    pub streak_before: u32,
    pub streak_after: u32,
    pub hp_damage: u32,
    pub death: Option<DeathReport>,
}

impl DayReport {
    pub fn streak_kept(&self) -> bool {
        self.streak_after > self.streak_before
    }
}

/// Closes out a day: settles the streak, charges HP for missed quests and
/// reopens every quest.
///
/// A day qualifies for the streak when no non-optional quest was missed and
/// at least one quest was completed.
pub fn end_day(state: &GameState, config: &EngineConfig, now: i64) -> (GameState, DayReport) {
    let completed: Vec<String> = state
        .quests
        .iter()
        .filter(|q| q.is_completed())
        .map(|q| q.id.clone())
        .collect();
    let missed: Vec<String> = state
        .quests
        .iter()
        .filter(|q| q.penalty_eligible() && !q.is_completed())
        .map(|q| q.id.clone())
        .collect();

    let streak_before = state.player.current_streak;
    let qualifies = missed.is_empty() && !completed.is_empty();

    let hp_damage = penalty_damage(missed.len().min(u32::MAX as usize) as u32);
    let (mut next, death) = apply_damage(state, hp_damage, config);

    if qualifies {
        next.player.current_streak = streak_before.saturating_add(1);
        next.player.best_streak = next.player.best_streak.max(next.player.current_streak);
    } else {
        next.player.current_streak = 0;
    }

    for quest in next.quests.iter_mut() {
        quest.reset();
    }
    next.last_reset = now;
    next.last_completion = None;

    let report = DayReport {
        completed,
        missed,
        streak_before,
        streak_after: next.player.current_streak,
        hp_damage,
        death,
    };
    info!(
        completed = report.completed.len(),
        missed = report.missed.len(),
        streak = report.streak_after,
        hp_damage,
        died = report.death.is_some(),
        "day ended"
    );
    (next, report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bosses::Boss;
    use crate::character::rank::Rank;
    use crate::metrics::MetricKind;
    use crate::quests::{Difficulty, Quest};
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn no_crit() -> EngineConfig {
        EngineConfig {
            crit_chance: 0.0,
            ..Default::default()
        }
    }

    fn always_crit() -> EngineConfig {
        EngineConfig {
            crit_chance: 1.0,
            ..Default::default()
        }
    }

    fn create_test_rng() -> ChaCha8Rng {
        ChaCha8Rng::seed_from_u64(12345)
    }

    fn state_with(quests: Vec<Quest>) -> GameState {
        let mut state = GameState::new("Test Hunter".to_string(), 0);
        for quest in quests {
            state.add_quest(quest).unwrap();
        }
        state
    }

    #[test]
    fn test_complete_normal_quest() {
        let quest = Quest::new("Push-ups", Difficulty::Normal, StatType::Strength);
        let id = quest.id.clone();
        let state = state_with(vec![quest]);

        let (next, breakdown) =
            complete_quest(&state, &id, &no_crit(), &mut create_test_rng()).unwrap();

        assert_eq!(breakdown.xp_awarded, 30);
        assert_eq!(breakdown.gold_awarded, 5);
        assert_eq!(breakdown.stat_xp_awarded, 10);
        assert!(!breakdown.was_critical);
        assert_eq!(next.player.gold, 5);
        assert_eq!(next.player.current_xp, 30);
        assert_eq!(next.player.total_xp, 30);
        assert_eq!(next.player.stats.get(StatType::Strength).experience, 10);
        assert!(next.quest(&id).unwrap().is_completed());
        assert_eq!(next.quest(&id).unwrap().times_completed, 1);
        assert!(next.can_undo());

        // Input snapshot untouched
        assert_eq!(state.player.gold, 0);
        assert!(!state.quest(&id).unwrap().is_completed());
    }

    #[test]
    fn test_complete_twice_is_declined() {
        let quest = Quest::new("Journal", Difficulty::Easy, StatType::Intelligence);
        let id = quest.id.clone();
        let state = state_with(vec![quest]);
        let mut rng = create_test_rng();

        let (next, _) = complete_quest(&state, &id, &no_crit(), &mut rng).unwrap();
        let err = complete_quest(&next, &id, &no_crit(), &mut rng).unwrap_err();
        assert_eq!(err, Declined::AlreadyCompleted(id));
    }

    #[test]
    fn test_complete_unknown_quest_is_declined() {
        let state = state_with(vec![]);
        let err = complete_quest(&state, "nope", &no_crit(), &mut create_test_rng()).unwrap_err();
        assert_eq!(err.code(), "unknown_quest");
    }

    #[test]
    fn test_critical_completion_doubles_rewards() {
        let quest = Quest::new("Deadlift", Difficulty::Hard, StatType::Strength);
        let id = quest.id.clone();
        let state = state_with(vec![quest]);

        let (_, breakdown) =
            complete_quest(&state, &id, &always_crit(), &mut create_test_rng()).unwrap();
        assert!(breakdown.was_critical);
        assert_eq!(breakdown.xp_awarded, 120);
        assert_eq!(breakdown.gold_awarded, 20);
        assert_eq!(breakdown.stat_xp_awarded, 40);
    }

    #[test]
    fn test_optional_quest_keeps_gold() {
        let quest = Quest::new("Stretch", Difficulty::Legendary, StatType::Agility).optional();
        let id = quest.id.clone();
        let mut state = state_with(vec![quest]);
        state.player.gold = 77;

        let (next, breakdown) =
            complete_quest(&state, &id, &always_crit(), &mut create_test_rng()).unwrap();
        assert_eq!(breakdown.gold_awarded, 0);
        assert_eq!(next.player.gold, 77);
        assert_eq!(breakdown.xp_awarded, 400);
    }

    #[test]
    fn test_streak_multiplier_applies() {
        let quest = Quest::new("Run", Difficulty::Normal, StatType::Vitality);
        let id = quest.id.clone();
        let mut state = state_with(vec![quest]);
        state.player.current_streak = 20;

        let (_, breakdown) =
            complete_quest(&state, &id, &no_crit(), &mut create_test_rng()).unwrap();
        assert_eq!(breakdown.streak_multiplier, 2.0);
        assert_eq!(breakdown.xp_awarded, 60);
        assert_eq!(breakdown.gold_awarded, 10);
        assert_eq!(breakdown.stat_xp_awarded, 20);
    }

    #[test]
    fn test_completion_level_up_and_rank_change() {
        let quest = Quest::new("Raid", Difficulty::Legendary, StatType::Strength);
        let id = quest.id.clone();
        let mut state = state_with(vec![quest]);
        state.player.level = 9;
        state.player.current_xp = crate::core::balance::xp_required_for_level(10) - 1;

        let (next, breakdown) =
            complete_quest(&state, &id, &no_crit(), &mut create_test_rng()).unwrap();
        assert_eq!(breakdown.levels_gained, 1);
        assert_eq!(breakdown.level_after, 10);
        assert_eq!(breakdown.rank_before, Rank::E);
        assert_eq!(breakdown.rank_after, Rank::D);
        assert!(breakdown.ranked_up());
        assert_eq!(next.rank(), Rank::D);
    }

    #[test]
    fn test_linked_boss_takes_damage_and_dies() {
        let mut state = state_with(vec![]);
        let boss = Boss::new_fixed("Couch Titan", 50);
        let boss_id = boss.id.clone();
        state.add_boss(boss).unwrap();

        let first = Quest::new("Pull-ups", Difficulty::Normal, StatType::Strength)
            .linked_to(&boss_id);
        let second = Quest::new("Sprints", Difficulty::Normal, StatType::Agility)
            .linked_to(&boss_id);
        let (first_id, second_id) = (first.id.clone(), second.id.clone());
        state.add_quest(first).unwrap();
        state.add_quest(second).unwrap();

        let mut rng = create_test_rng();
        let (state, breakdown) = complete_quest(&state, &first_id, &no_crit(), &mut rng).unwrap();
        assert_eq!(breakdown.boss_damage, 30);
        assert!(!breakdown.boss_defeated);
        assert_eq!(state.boss(&boss_id).unwrap().current_hp, 20);

        let (state, breakdown) = complete_quest(&state, &second_id, &no_crit(), &mut rng).unwrap();
        assert_eq!(breakdown.boss_damage, 20);
        assert!(breakdown.boss_defeated);
        assert_eq!(state.boss(&boss_id).unwrap().current_hp, 0);
        assert!(state.boss(&boss_id).unwrap().defeated);
    }

    #[test]
    fn test_dangling_boss_link_is_ignored() {
        let quest = Quest::new("Swim", Difficulty::Easy, StatType::Vitality).linked_to("gone");
        let id = quest.id.clone();
        let state = state_with(vec![quest]);

        let (_, breakdown) =
            complete_quest(&state, &id, &no_crit(), &mut create_test_rng()).unwrap();
        assert_eq!(breakdown.boss_id, None);
        assert_eq!(breakdown.boss_damage, 0);
    }

    #[test]
    fn test_undo_restores_exact_state() {
        let mut state = state_with(vec![]);
        let boss = Boss::new_fixed("Clutter Hydra", 1_000);
        let boss_id = boss.id.clone();
        state.add_boss(boss).unwrap();
        let quest =
            Quest::new("Declutter", Difficulty::Extreme, StatType::Perception).linked_to(&boss_id);
        let id = quest.id.clone();
        state.add_quest(quest).unwrap();
        state.player.gold = 12;
        state.player.current_streak = 3;

        let (completed, _) =
            complete_quest(&state, &id, &always_crit(), &mut create_test_rng()).unwrap();
        let (undone, reopened) = undo_last_completion(&completed).unwrap();

        assert_eq!(reopened, id);
        assert_eq!(undone, state);
    }

    #[test]
    fn test_undo_is_single_level() {
        let a = Quest::new("A", Difficulty::Easy, StatType::Strength);
        let b = Quest::new("B", Difficulty::Easy, StatType::Strength);
        let (a_id, b_id) = (a.id.clone(), b.id.clone());
        let state = state_with(vec![a, b]);
        let mut rng = create_test_rng();

        let (state, _) = complete_quest(&state, &a_id, &no_crit(), &mut rng).unwrap();
        let (state, _) = complete_quest(&state, &b_id, &no_crit(), &mut rng).unwrap();
        let (state, reopened) = undo_last_completion(&state).unwrap();
        assert_eq!(reopened, b_id);
        assert!(state.quest(&a_id).unwrap().is_completed());
        assert_eq!(undo_last_completion(&state), Err(Declined::NothingToUndo));
    }

    #[test]
    fn test_other_transitions_clear_undo() {
        let a = Quest::new("Yoga", Difficulty::Easy, StatType::Agility);
        let b = Quest::new("Walk", Difficulty::Easy, StatType::Vitality);
        let (a_id, b_id) = (a.id.clone(), b.id.clone());
        let state = state_with(vec![a, b]);
        let mut rng = create_test_rng();

        let (state, _) = complete_quest(&state, &a_id, &no_crit(), &mut rng).unwrap();
        let (state, gained) = train_stat(&state, StatType::Agility, 100);
        assert_eq!(gained, 1);
        assert!(!state.can_undo());

        let (state, _) = complete_quest(&state, &b_id, &no_crit(), &mut rng).unwrap();
        let (state, death) = apply_damage(&state, 10, &EngineConfig::default());
        assert!(death.is_none());
        assert_eq!(state.player.current_hp, 90);
        assert!(!state.can_undo());
    }

    #[test]
    fn test_apply_damage_to_zero_triggers_death() {
        let mut state = state_with(vec![]);
        state.player.level = 30;
        state.player.gold = 100;

        let (next, death) = apply_damage(&state, 1_000, &EngineConfig::default());
        let death = death.expect("lethal damage should kill");
        assert_eq!(death.rank_before, Rank::C);
        assert_eq!(death.rank_after, Rank::D);
        assert_eq!(next.player.gold, 80);
        assert_eq!(next.player.current_hp, next.player.max_hp);
    }

    #[test]
    fn test_apply_damage_without_penalties() {
        let mut state = state_with(vec![]);
        state.player.level = 30;
        state.player.gold = 100;
        let config = EngineConfig::default().without_penalties();

        let (next, death) = apply_damage(&state, 100, &config);
        assert!(death.is_some());
        assert_eq!(next.player.gold, 100);
        assert_eq!(next.player.level, 30);
        assert_eq!(next.player.current_hp, 100);
    }

    #[test]
    fn test_zero_damage_is_noop_on_hp() {
        let state = state_with(vec![]);
        let (next, death) = apply_damage(&state, 0, &EngineConfig::default());
        assert!(death.is_none());
        assert_eq!(next.player, state.player);
    }

    #[test]
    fn test_zero_damage_on_dead_snapshot_runs_death() {
        let mut state = state_with(vec![]);
        state.player.current_hp = 0;
        state.player.gold = 10;

        let (next, death) = apply_damage(&state, 0, &EngineConfig::default());
        let death = death.expect("a snapshot at 0 HP must die");
        assert_eq!(death.gold_lost, 2);
        assert_eq!(next.player.current_hp, next.player.max_hp);
        assert_eq!(next.player.death_count, 1);
    }

    #[test]
    fn test_end_day_without_misses_settles_dead_snapshot() {
        let quest = Quest::new("Q", Difficulty::Easy, StatType::Strength);
        let id = quest.id.clone();
        let state = state_with(vec![quest]);
        let (mut state, _) =
            complete_quest(&state, &id, &no_crit(), &mut create_test_rng()).unwrap();
        state.player.current_hp = 0;

        let (next, report) = end_day(&state, &EngineConfig::default(), 1);
        assert_eq!(report.hp_damage, 0);
        assert!(report.death.is_some());
        assert!(report.streak_kept());
        assert_eq!(next.player.current_hp, next.player.max_hp);
    }

    #[test]
    fn test_sync_metrics_updates_progress_and_reports_ready() {
        let steps = Quest::new("10k steps", Difficulty::Normal, StatType::Vitality)
            .tracked(MetricKind::Steps, 10_000.0);
        let sleep = Quest::new("Sleep 8h", Difficulty::Easy, StatType::Willpower)
            .tracked(MetricKind::SleepHours, 8.0);
        let manual = Quest::new("Read", Difficulty::Easy, StatType::Intelligence);
        let (steps_id, sleep_id, manual_id) =
            (steps.id.clone(), sleep.id.clone(), manual.id.clone());
        let state = state_with(vec![steps, sleep, manual]);

        let snapshot = MetricSnapshot::new()
            .with(MetricKind::Steps, 12_000.0)
            .with(MetricKind::SleepHours, 6.0);
        let (next, sync) = sync_metrics(&state, &snapshot);

        assert_eq!(sync.ready_quests, vec![steps_id.clone()]);
        assert_eq!(next.quest(&steps_id).unwrap().progress, 1.0);
        assert_eq!(next.quest(&sleep_id).unwrap().progress, 0.75);
        assert_eq!(next.quest(&manual_id).unwrap().progress, 0.0);
        // Reported, not completed
        assert!(!next.quest(&steps_id).unwrap().is_completed());
    }

    #[test]
    fn test_sync_metrics_dynamic_boss() {
        let mut state = state_with(vec![]);
        let boss = Boss::new_dynamic("Step Colossus", MetricKind::Steps, 100_000.0);
        let boss_id = boss.id.clone();
        state.add_boss(boss).unwrap();

        let (state, sync) = sync_metrics(
            &state,
            &MetricSnapshot::new().with(MetricKind::Steps, 25_000.0),
        );
        assert_eq!(sync.bosses_updated, vec![boss_id.clone()]);
        assert!(sync.bosses_defeated.is_empty());
        assert_eq!(state.boss(&boss_id).unwrap().current_hp, 75_000);

        let (state, sync) = sync_metrics(
            &state,
            &MetricSnapshot::new().with(MetricKind::Steps, 100_000.0),
        );
        assert_eq!(sync.bosses_defeated, vec![boss_id.clone()]);
        assert!(state.boss(&boss_id).unwrap().defeated);
    }

    #[test]
    fn test_sync_without_changes_keeps_undo() {
        let quest = Quest::new("Plank", Difficulty::Easy, StatType::Strength);
        let id = quest.id.clone();
        let state = state_with(vec![quest]);
        let (state, _) = complete_quest(&state, &id, &no_crit(), &mut create_test_rng()).unwrap();

        let (state, sync) = sync_metrics(&state, &MetricSnapshot::new());
        assert_eq!(sync, MetricSync::default());
        assert!(state.can_undo());
    }

    #[test]
    fn test_end_day_qualifying() {
        let required = Quest::new("Run", Difficulty::Normal, StatType::Vitality);
        let optional = Quest::new("Stretch", Difficulty::Easy, StatType::Agility).optional();
        let id = required.id.clone();
        let mut state = state_with(vec![required, optional]);
        state.player.current_streak = 4;
        state.player.best_streak = 4;

        let (state, _) = complete_quest(&state, &id, &no_crit(), &mut create_test_rng()).unwrap();
        let (next, report) = end_day(&state, &EngineConfig::default(), 86_400);

        assert!(report.missed.is_empty());
        assert!(report.streak_kept());
        assert_eq!(next.player.current_streak, 5);
        assert_eq!(next.player.best_streak, 5);
        assert_eq!(report.hp_damage, 0);
        assert_eq!(next.last_reset, 86_400);
        assert!(next.quests.iter().all(|q| !q.is_completed()));
        assert!(!next.can_undo());
    }

    #[test]
    fn test_end_day_missed_quests_cost_hp_and_streak() {
        let a = Quest::new("A", Difficulty::Normal, StatType::Strength);
        let b = Quest::new("B", Difficulty::Normal, StatType::Strength);
        let c = Quest::new("C", Difficulty::Normal, StatType::Strength).optional();
        let a_id = a.id.clone();
        let mut state = state_with(vec![a, b, c]);
        state.player.current_streak = 9;
        state.player.best_streak = 12;

        let (state, _) = complete_quest(&state, &a_id, &no_crit(), &mut create_test_rng()).unwrap();
        let (next, report) = end_day(&state, &EngineConfig::default(), 1);

        assert_eq!(report.missed.len(), 1);
        assert_eq!(report.hp_damage, 5);
        assert_eq!(next.player.current_hp, 95);
        assert_eq!(next.player.current_streak, 0);
        assert_eq!(next.player.best_streak, 12);
        assert!(report.death.is_none());
    }

    #[test]
    fn test_end_day_only_optional_missed_is_free() {
        let optional = Quest::new("Bonus", Difficulty::Hard, StatType::Strength).optional();
        let state = state_with(vec![optional]);

        let (next, report) = end_day(&state, &EngineConfig::default(), 1);
        assert!(report.missed.is_empty());
        assert_eq!(report.hp_damage, 0);
        assert_eq!(next.player.current_hp, 100);
        // Nothing completed, so the day does not count toward the streak
        assert_eq!(next.player.current_streak, 0);
    }

    #[test]
    fn test_end_day_can_kill() {
        let quests: Vec<Quest> = (0..4)
            .map(|i| Quest::new(format!("Q{}", i), Difficulty::Easy, StatType::Strength))
            .collect();
        let mut state = state_with(quests);
        state.player.current_hp = 20;
        state.player.level = 12;
        state.player.gold = 50;

        let (next, report) = end_day(&state, &EngineConfig::default(), 1);
        assert_eq!(report.hp_damage, 20);
        let death = report.death.expect("20 damage at 20 HP should kill");
        assert_eq!(death.rank_before, Rank::D);
        assert_eq!(next.player.level, 1);
        assert_eq!(next.player.gold, 40);
        assert_eq!(next.player.current_hp, 100);
    }
}
