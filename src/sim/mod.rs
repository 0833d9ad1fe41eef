//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Caller supplied timestep, validated before use
//! - Seeded RNG only
//! - Stable iteration order (by actor and body id)
//! - No rendering or platform dependencies

pub mod actor;
pub mod bird;
pub mod collision;
pub mod contact;
pub mod debug_draw;
pub mod ground;
pub mod logic;
pub mod physics;
pub mod registry;
pub mod scroll;
pub mod spawner;
pub mod state;

pub use actor::{Actor, ActorId, ActorKind, BodyKind, PhysicalDesc, Shape};
pub use collision::{CollisionResult, collide};
pub use debug_draw::{DebugDraw, DebugVertex, LineBuffer};
pub use logic::{GameLogic, VisibleActor};
pub use physics::{BodyDef, BodyHandle, BodyView, Contact, PhysicsWorld, SimpleWorld};
pub use registry::BodyRegistry;
pub use state::{GameEvent, GamePhase};
