//! Game phases and events

use serde::{Deserialize, Serialize};

use super::actor::{Actor, ActorId};

/// Top-level mode of the game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Attract mode: world runs, bird flies itself, nothing scores
    Demo,
    /// Active gameplay
    Playing,
    /// Run ended, world frozen for observation
    GameOver,
}

impl GamePhase {
    /// Whether player intents are honored
    pub fn accepts_input(&self) -> bool {
        matches!(self, GamePhase::Playing)
    }

    /// Whether the world still advances and accepts changes
    pub fn is_running(&self) -> bool {
        !matches!(self, GamePhase::GameOver)
    }
}

/// Things that happened during an update, for audio/UI collaborators
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum GameEvent {
    PhaseChanged { from: GamePhase, to: GamePhase },
    Pooped { poop: ActorId, poops_left: u32 },
    NpcSpawned { npc: ActorId },
    /// Actor left the world, by a hit or by leaving the field
    Removed { actor: Actor },
    Scored { score: u32 },
    GameOver { score: u32 },
}
