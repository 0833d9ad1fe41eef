//! Poop Bird - rules and simulation core of a side-scrolling arcade game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (physics world, actors, scoring, game phases)
//! - `tuning`: Data-driven game balance
//! - `error`: Errors surfaced by the simulation entry points
//!
//! The world never moves a camera. Everything except the bird streams left at
//! the shared scroll speed, and a fixed set of ground segments is recycled to
//! fake an endless floor.

pub mod error;
pub mod sim;
pub mod tuning;

pub use error::SimError;
pub use sim::{GameEvent, GameLogic, GamePhase};
pub use tuning::Tuning;

/// Game configuration constants
pub mod consts {
    /// Fixed simulation timestep (60 Hz)
    pub const SIM_DT: f32 = 1.0 / 60.0;
    /// Maximum substeps per frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 8;

    /// Gravity (meters/s², y points up)
    pub const GRAVITY: f32 = -9.8;

    /// Visible field in meters, origin at bottom-left
    pub const VIEW_WIDTH: f32 = 16.0;
    pub const VIEW_HEIGHT: f32 = 9.0;

    /// Scroll speed (meters/s leftward)
    pub const INITIAL_SCROLL_SPEED: f32 = 3.0;
    pub const MAX_SCROLL_SPEED: f32 = 9.0;
    pub const SPEED_UP_AMOUNT: f32 = 0.25;
    pub const SPEED_UP_INTERVAL: f32 = 10.0;

    /// Bird defaults
    pub const BIRD_X: f32 = 4.0;
    pub const BIRD_START_HEIGHT: f32 = 5.0;
    pub const BIRD_RADIUS: f32 = 0.4;
    /// Upward acceleration while flying, must beat gravity
    pub const BIRD_FLIGHT_ACCEL: f32 = 18.0;

    /// Poop defaults
    pub const POOP_RADIUS: f32 = 0.15;
    /// Cooldown between poops (seconds)
    pub const POOP_DURATION: f32 = 0.35;
    pub const MAX_POOPS: u32 = 5;
    pub const POOP_DOWNWARD_VELOCITY: f32 = 2.0;
    /// One charge comes back every this many seconds (0 disables)
    pub const POOP_REGEN_INTERVAL: f32 = 2.0;

    /// Ground defaults
    pub const NUM_GROUNDS: usize = 6;
    pub const GROUND_WIDTH: f32 = 4.0;
    pub const GROUND_HEIGHT: f32 = 1.0;
    /// How far the ground protrudes from the bottom of the screen
    pub const GROUND_OFFSET: f32 = 0.75;
    /// Segments are recycled once this far past the left edge
    pub const RECYCLE_MARGIN: f32 = 0.5;

    /// NPC defaults
    pub const NPC_HALF_WIDTH: f32 = 0.35;
    pub const NPC_HALF_HEIGHT: f32 = 0.5;
    pub const SPAWN_INTERVAL: f32 = 2.5;
    pub const SPAWN_JITTER: f32 = 1.0;
    pub const SPAWN_MARGIN: f32 = 1.0;

    /// Demo autopilot keeps the bird around this height
    pub const DEMO_HOVER_HEIGHT: f32 = 5.5;
}
