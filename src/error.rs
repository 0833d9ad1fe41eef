//! Errors surfaced by the simulation entry points
//!
//! Gameplay misuse (pooping without charge, flying while in demo) is a no-op,
//! not an error. Only calls that cannot produce a meaningful frame end up here.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum SimError {
    /// `update` or a transition was called before `init`
    #[error("game logic used before init")]
    NotInitialized,

    /// Time step was negative, NaN or infinite
    #[error("invalid time step: {0}")]
    InvalidTimeStep(f32),

    /// Tuning values that cannot describe a playable world
    #[error("invalid tuning: {0}")]
    InvalidTuning(String),

    /// Tuning JSON failed to parse
    #[error("failed to parse tuning")]
    TuningParse(#[from] serde_json::Error),
}

/// Reject negative, NaN and infinite time steps
pub fn check_dt(dt: f32) -> Result<f32, SimError> {
    if dt.is_finite() && dt >= 0.0 {
        Ok(dt)
    } else {
        Err(SimError::InvalidTimeStep(dt))
    }
}
