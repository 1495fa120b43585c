use serde::{Deserialize, Serialize};
use std::fmt;

/// Hunter rank, derived from level. Never stored on the player.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Rank {
    E,
    D,
    C,
    B,
    A,
    S,
    SS,
    SSS,
    Monarch,
}

/// A rank threshold: the minimum level that grants the rank.
#[derive(Debug, Clone, Copy)]
pub struct RankThreshold {
    pub rank: Rank,
    pub min_level: u32,
    pub title: &'static str,
}

/// Ordered lowest to highest.
pub static RANK_THRESHOLDS: [RankThreshold; 9] = [
    RankThreshold {
        rank: Rank::E,
        min_level: 1,
        title: "Awakened Novice",
    },
    RankThreshold {
        rank: Rank::D,
        min_level: 10,
        title: "Apprentice Hunter",
    },
    RankThreshold {
        rank: Rank::C,
        min_level: 25,
        title: "Seasoned Hunter",
    },
    RankThreshold {
        rank: Rank::B,
        min_level: 50,
        title: "Veteran Hunter",
    },
    RankThreshold {
        rank: Rank::A,
        min_level: 75,
        title: "Elite Hunter",
    },
    RankThreshold {
        rank: Rank::S,
        min_level: 100,
        title: "National Hunter",
    },
    RankThreshold {
        rank: Rank::SS,
        min_level: 150,
        title: "Shadow Sovereign",
    },
    RankThreshold {
        rank: Rank::SSS,
        min_level: 200,
        title: "Ruler's Chosen",
    },
    RankThreshold {
        rank: Rank::Monarch,
        min_level: 300,
        title: "Monarch",
    },
];

impl Rank {
    pub fn all() -> [Rank; 9] {
        [
            Rank::E,
            Rank::D,
            Rank::C,
            Rank::B,
            Rank::A,
            Rank::S,
            Rank::SS,
            Rank::SSS,
            Rank::Monarch,
        ]
    }

    pub fn index(&self) -> usize {
        match self {
            Rank::E => 0,
            Rank::D => 1,
            Rank::C => 2,
            Rank::B => 3,
            Rank::A => 4,
            Rank::S => 5,
            Rank::SS => 6,
            Rank::SSS => 7,
            Rank::Monarch => 8,
        }
    }

    /// Highest rank whose minimum level is at or below `level`.
    pub fn for_level(level: u32) -> Rank {
        RANK_THRESHOLDS
            .iter()
            .rev()
            .find(|t| t.min_level <= level)
            .map(|t| t.rank)
            .unwrap_or(Rank::E)
    }

    pub fn threshold(&self) -> &'static RankThreshold {
        &RANK_THRESHOLDS[self.index()]
    }

    pub fn min_level(&self) -> u32 {
        self.threshold().min_level
    }

    pub fn title(&self) -> &'static str {
        self.threshold().title
    }

    /// The rank one tier down, or `None` at E.
    pub fn lower(&self) -> Option<Rank> {
        self.index().checked_sub(1).map(|i| Rank::all()[i])
    }

    pub fn higher(&self) -> Option<Rank> {
        Rank::all().get(self.index() + 1).copied()
    }

    pub fn abbrev(&self) -> &'static str {
        match self {
            Rank::E => "E",
            Rank::D => "D",
            Rank::C => "C",
            Rank::B => "B",
            Rank::A => "A",
            Rank::S => "S",
            Rank::SS => "SS",
            Rank::SSS => "SSS",
            Rank::Monarch => "Monarch",
        }
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.abbrev())
    }
}
