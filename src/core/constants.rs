// XP curve: floor(level * XP_CURVE_BASE * XP_CURVE_GROWTH^(level / XP_CURVE_GROWTH_PERIOD))
pub const XP_CURVE_BASE: f64 = 100.0;
pub const XP_CURVE_GROWTH: f64 = 1.5;
pub const XP_CURVE_GROWTH_PERIOD: f64 = 10.0;

// Player
pub const STARTING_LEVEL: u32 = 1;
// Highest reachable level. The curve stays inside u64 up to here (level 816 would not).
pub const MAX_LEVEL: u32 = 800;
pub const BASE_MAX_HP: u32 = 100;

// Stats
pub const NUM_STATS: usize = 6;
pub const BASE_STAT_VALUE: u32 = 10;
pub const MIN_STAT_BASE: u32 = 1;
pub const STAT_VALUE_CAP: u32 = 999;
pub const STAT_XP_PER_POINT: u64 = 100;

// Quest rewards, indexed by Difficulty::index()
// (trivial, easy, normal, hard, extreme, legendary)
pub const QUEST_XP_TABLE: [u64; 6] = [5, 15, 30, 60, 100, 200];
pub const QUEST_GOLD_TABLE: [u64; 6] = [1, 3, 5, 10, 20, 50];
pub const STAT_XP_TABLE: [u64; 6] = [2, 5, 10, 20, 35, 60];

// Streak multiplier: min(1 + days * STREAK_BONUS_PER_DAY, STREAK_MULTIPLIER_CAP)
pub const STREAK_BONUS_PER_DAY: f64 = 0.05;
pub const STREAK_MULTIPLIER_CAP: f64 = 2.0;

// Critical success
pub const CRITICAL_SUCCESS_CHANCE: f64 = 0.10;
pub const CRITICAL_REWARD_MULTIPLIER: u64 = 2;

// Boss damage: quest_xp * (1 + level / BOSS_DAMAGE_LEVEL_DIVISOR)
pub const BOSS_DAMAGE_LEVEL_DIVISOR: f64 = 100.0;

// HP damage per missed non-optional quest at day end
pub const HP_DAMAGE_PER_MISSED_QUEST: u32 = 5;

// Death penalty
pub const DEATH_GOLD_LOSS_PERCENT: u64 = 20;

// Stat loss on death, percent of base, indexed by Rank::index() of the rank held at death
// (E, D, C, B, A, S, SS, SSS, Monarch)
pub const DEATH_STAT_LOSS_PERCENT: [u32; 9] = [2, 3, 5, 7, 10, 12, 15, 18, 20];

// Persistence
pub const SETTINGS_FILE_NAME: &str = "settings.json";
pub const SAVE_FILE_NAME: &str = "questline.dat";
pub const SAVE_VERSION_MAGIC: u64 = 0x5155_4553_544C_0001;
