use thiserror::Error;

/// An engine operation the caller asked for but that could not apply.
///
/// Declines never leave partial state behind; the caller keeps its snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Declined {
    #[error("quest {0} is already completed")]
    AlreadyCompleted(String),

    #[error("no completion to undo")]
    NothingToUndo,

    #[error("unknown quest {0}")]
    UnknownQuest(String),

    #[error("unknown boss {0}")]
    UnknownBoss(String),

    #[error("id {0} is already in use")]
    DuplicateId(String),
}

impl Declined {
    /// Stable reason code for hosts that map declines to their own messages.
    pub fn code(&self) -> &'static str {
        match self {
            Declined::AlreadyCompleted(_) => "already_completed",
            Declined::NothingToUndo => "nothing_to_undo",
            Declined::UnknownQuest(_) => "unknown_quest",
            Declined::UnknownBoss(_) => "unknown_boss",
            Declined::DuplicateId(_) => "duplicate_id",
        }
    }
}
