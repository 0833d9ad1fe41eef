//! Data-driven game balance
//!
//! Read once when the game logic is constructed. Every field has a default
//! from [`crate::consts`], so partial JSON documents are fine.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::error::SimError;

/// Game balance and world geometry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    // === World ===
    pub gravity: f32,
    pub view_width: f32,
    pub view_height: f32,

    // === Scrolling ===
    pub initial_scroll_speed: f32,
    pub max_scroll_speed: f32,
    /// Added to the scroll speed every `speed_up_interval` seconds of play
    pub speed_up_amount: f32,
    pub speed_up_interval: f32,

    // === Bird ===
    pub bird_x: f32,
    pub bird_start_height: f32,
    pub bird_radius: f32,
    pub bird_flight_accel: f32,

    // === Poop ===
    pub poop_radius: f32,
    /// Minimum seconds between two poops
    pub poop_duration: f32,
    pub max_poops: u32,
    pub poop_downward_velocity: f32,
    /// Seconds per regenerated charge (0 disables regeneration)
    pub poop_regen_interval: f32,

    // === Ground ===
    pub num_grounds: usize,
    pub ground_width: f32,
    pub ground_height: f32,
    pub ground_offset: f32,
    pub recycle_margin: f32,

    // === NPCs ===
    pub npc_half_width: f32,
    pub npc_half_height: f32,
    pub spawn_interval: f32,
    /// Spawn interval varies by up to ± half of this
    pub spawn_jitter: f32,
    pub spawn_margin: f32,

    // === Misc ===
    pub seed: u64,
    pub demo_hover_height: f32,
    pub debug_draw: bool,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            gravity: GRAVITY,
            view_width: VIEW_WIDTH,
            view_height: VIEW_HEIGHT,

            initial_scroll_speed: INITIAL_SCROLL_SPEED,
            max_scroll_speed: MAX_SCROLL_SPEED,
            speed_up_amount: SPEED_UP_AMOUNT,
            speed_up_interval: SPEED_UP_INTERVAL,

            bird_x: BIRD_X,
            bird_start_height: BIRD_START_HEIGHT,
            bird_radius: BIRD_RADIUS,
            bird_flight_accel: BIRD_FLIGHT_ACCEL,

            poop_radius: POOP_RADIUS,
            poop_duration: POOP_DURATION,
            max_poops: MAX_POOPS,
            poop_downward_velocity: POOP_DOWNWARD_VELOCITY,
            poop_regen_interval: POOP_REGEN_INTERVAL,

            num_grounds: NUM_GROUNDS,
            ground_width: GROUND_WIDTH,
            ground_height: GROUND_HEIGHT,
            ground_offset: GROUND_OFFSET,
            recycle_margin: RECYCLE_MARGIN,

            npc_half_width: NPC_HALF_WIDTH,
            npc_half_height: NPC_HALF_HEIGHT,
            spawn_interval: SPAWN_INTERVAL,
            spawn_jitter: SPAWN_JITTER,
            spawn_margin: SPAWN_MARGIN,

            seed: 0x5EED,
            demo_hover_height: DEMO_HOVER_HEIGHT,
            debug_draw: cfg!(debug_assertions),
        }
    }
}

impl Tuning {
    /// Parse from JSON and validate
    pub fn from_json(json: &str) -> Result<Self, SimError> {
        let tuning: Tuning = serde_json::from_str(json)?;
        tuning.validate()?;
        Ok(tuning)
    }

    /// Reject values that cannot describe a playable world
    pub fn validate(&self) -> Result<(), SimError> {
        let positive = [
            ("view_width", self.view_width),
            ("view_height", self.view_height),
            ("bird_radius", self.bird_radius),
            ("poop_radius", self.poop_radius),
            ("ground_width", self.ground_width),
            ("ground_height", self.ground_height),
            ("npc_half_width", self.npc_half_width),
            ("npc_half_height", self.npc_half_height),
        ];
        for (name, value) in positive {
            if !(value.is_finite() && value > 0.0) {
                return Err(SimError::InvalidTuning(format!("{name} must be positive")));
            }
        }

        let non_negative = [
            ("initial_scroll_speed", self.initial_scroll_speed),
            ("poop_duration", self.poop_duration),
            ("poop_regen_interval", self.poop_regen_interval),
            ("spawn_jitter", self.spawn_jitter),
            ("recycle_margin", self.recycle_margin),
            ("speed_up_interval", self.speed_up_interval),
        ];
        for (name, value) in non_negative {
            if !(value.is_finite() && value >= 0.0) {
                return Err(SimError::InvalidTuning(format!("{name} must not be negative")));
            }
        }

        if self.max_poops == 0 {
            return Err(SimError::InvalidTuning("max_poops must be at least 1".into()));
        }
        if !(self.spawn_interval.is_finite() && self.spawn_interval > 0.0) {
            return Err(SimError::InvalidTuning("spawn_interval must be positive".into()));
        }
        if self.max_scroll_speed < self.initial_scroll_speed {
            return Err(SimError::InvalidTuning(
                "max_scroll_speed is below initial_scroll_speed".into(),
            ));
        }

        // Recycling must happen before the strip's right end comes into view
        let needed = self.view_width + self.ground_width + self.recycle_margin;
        if self.strip_width() < needed {
            return Err(SimError::InvalidTuning(format!(
                "{} grounds of width {} cannot cover {needed}",
                self.num_grounds, self.ground_width
            )));
        }
        Ok(())
    }

    /// Total width of the ground strip
    pub fn strip_width(&self) -> f32 {
        self.num_grounds as f32 * self.ground_width
    }

    /// Height of the walkable ground surface
    pub fn ground_top(&self) -> f32 {
        self.ground_offset
    }

    /// Where the bird is (re)spawned
    pub fn bird_start(&self) -> Vec2 {
        Vec2::new(self.bird_x, self.bird_start_height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        assert!(Tuning::default().validate().is_ok());
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let tuning = Tuning::from_json(r#"{ "max_poops": 3, "seed": 7 }"#).unwrap();
        assert_eq!(tuning.max_poops, 3);
        assert_eq!(tuning.seed, 7);
        assert_eq!(tuning.ground_width, GROUND_WIDTH);
    }

    #[test]
    fn test_too_few_grounds_rejected() {
        let tuning = Tuning {
            num_grounds: 2,
            ..Default::default()
        };
        assert!(matches!(tuning.validate(), Err(SimError::InvalidTuning(_))));
    }

    #[test]
    fn test_zero_poops_rejected() {
        let result = Tuning::from_json(r#"{ "max_poops": 0 }"#);
        assert!(matches!(result, Err(SimError::InvalidTuning(_))));
    }

    #[test]
    fn test_bad_json_rejected() {
        let result = Tuning::from_json("{ not json");
        assert!(matches!(result, Err(SimError::TuningParse(_))));
    }
}
