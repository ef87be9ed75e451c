//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only
//! - Seeded RNG only
//! - Stable iteration order (by entity ID)
//! - No rendering or platform dependencies

pub mod collision;
pub mod spawn;
pub mod state;
pub mod tick;

pub use collision::{Aabb, find_hazard_hit};
pub use spawn::{fill_ahead, recycle_below, spawn_initial_batch, spawn_obstacle_at};
pub use state::{Ball, GameEvent, GamePhase, GameState, Motion, Obstacle, ObstacleColor};
pub use tick::{TickInput, tick};
