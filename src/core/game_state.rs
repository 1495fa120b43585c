use super::constants::BASE_MAX_HP;
use super::error::Declined;
use crate::bosses::Boss;
use crate::character::player::Player;
use crate::character::rank::Rank;
use crate::quests::{Quest, UndoToken};
use serde::{Deserialize, Serialize};

/// The snapshot a host holds: one player and everything they track.
///
/// Engine transitions in `game_logic` take `&GameState` and return a new one.
/// The `add_*`/`remove_*` editing methods mutate in place and clear the undo slot.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GameState {
    pub player: Player,
    pub quests: Vec<Quest>,
    pub bosses: Vec<Boss>,
    /// The single most recent completion, while it is still undoable.
    #[serde(default)]
    pub last_completion: Option<UndoToken>,
    pub last_reset: i64,
}

impl GameState {
    /// Creates a new game state with default values
    pub fn new(player_name: String, current_time: i64) -> Self {
        Self::with_max_hp(player_name, current_time, BASE_MAX_HP)
    }

    pub fn with_max_hp(player_name: String, current_time: i64, max_hp: u32) -> Self {
        Self {
            player: Player::new(player_name, current_time, max_hp),
            quests: Vec::new(),
            bosses: Vec::new(),
            last_completion: None,
            last_reset: current_time,
        }
    }

    pub fn rank(&self) -> Rank {
        self.player.rank()
    }

    pub fn quest(&self, id: &str) -> Option<&Quest> {
        self.quests.iter().find(|q| q.id == id)
    }

    pub(crate) fn quest_mut(&mut self, id: &str) -> Option<&mut Quest> {
        self.quests.iter_mut().find(|q| q.id == id)
    }

    pub fn boss(&self, id: &str) -> Option<&Boss> {
        self.bosses.iter().find(|b| b.id == id)
    }

    pub(crate) fn boss_mut(&mut self, id: &str) -> Option<&mut Boss> {
        self.bosses.iter_mut().find(|b| b.id == id)
    }

    pub fn can_undo(&self) -> bool {
        self.last_completion.is_some()
    }

    pub fn add_quest(&mut self, quest: Quest) -> Result<(), Declined> {
        if self.quest(&quest.id).is_some() {
            return Err(Declined::DuplicateId(quest.id));
        }
        self.last_completion = None;
        self.quests.push(quest);
        Ok(())
    }

    /// Replaces a quest's definition, keeping its id.
    pub fn update_quest(&mut self, quest: Quest) -> Result<(), Declined> {
        let slot = self
            .quest_mut(&quest.id)
            .ok_or_else(|| Declined::UnknownQuest(quest.id.clone()))?;
        *slot = quest;
        self.last_completion = None;
        Ok(())
    }

    pub fn remove_quest(&mut self, id: &str) -> Result<Quest, Declined> {
        let index = self
            .quests
            .iter()
            .position(|q| q.id == id)
            .ok_or_else(|| Declined::UnknownQuest(id.to_string()))?;
        self.last_completion = None;
        Ok(self.quests.remove(index))
    }

    pub fn add_boss(&mut self, boss: Boss) -> Result<(), Declined> {
        if self.boss(&boss.id).is_some() {
            return Err(Declined::DuplicateId(boss.id));
        }
        self.last_completion = None;
        self.bosses.push(boss);
        Ok(())
    }

    /// Removes a boss and detaches every quest that linked to it.
    pub fn remove_boss(&mut self, id: &str) -> Result<Boss, Declined> {
        let index = self
            .bosses
            .iter()
            .position(|b| b.id == id)
            .ok_or_else(|| Declined::UnknownBoss(id.to_string()))?;
        for quest in self.quests.iter_mut() {
            if quest.boss_id.as_deref() == Some(id) {
                quest.boss_id = None;
            }
        }
        self.last_completion = None;
        Ok(self.bosses.remove(index))
    }
}
