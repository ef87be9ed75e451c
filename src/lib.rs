//! Skyfall - an endless falling-ball dodge game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (physics, spawning, collisions, game state)
//! - `renderer`: WebGPU 3D rendering pipeline with a chase camera
//! - `audio`: Web Audio background music (wasm only)
//! - `settings`: Quality presets and preferences

#[cfg(target_arch = "wasm32")]
pub mod audio;
pub mod renderer;
pub mod settings;
pub mod sim;

pub use settings::{QualityPreset, Settings};

/// Game configuration constants
///
/// Velocities and accelerations are per simulation tick, not per second:
/// the sim runs a fixed 60 Hz step and the tuning matches that step.
pub mod consts {
    /// Fixed simulation timestep (60 Hz)
    pub const SIM_DT: f32 = 1.0 / 60.0;
    /// Maximum substeps per frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 4;

    /// Ball
    pub const BALL_RADIUS: f32 = 0.3;
    pub const BALL_START_Y: f32 = -2.0;
    /// Downward acceleration applied to vertical velocity each tick
    pub const GRAVITY: f32 = -0.01;
    /// Upward velocity set by a flap/jump
    pub const JUMP_VELOCITY: f32 = 0.2;
    /// Falling below this y ends the run
    pub const FLOOR_Y: f32 = -6.0;

    /// Obstacle streaming
    pub const OBSTACLE_SPACING: f32 = 4.0;
    pub const INITIAL_BATCH: u32 = 5;
    pub const INITIAL_BASE_Y: f32 = 2.0;
    pub const BATCH_SIZE: u32 = 3;
    /// Obstacles must exist this far above the ball
    pub const SPAWN_LOOKAHEAD: f32 = 10.0;
    /// Obstacles this far below the ball are recycled
    pub const DESPAWN_MARGIN: f32 = 10.0;

    /// Obstacle kinematics (per tick)
    pub const OBSTACLE_SPEED_MIN: f32 = 0.02;
    pub const OBSTACLE_SPEED_MAX: f32 = 0.05;
    /// Spawn x range for non-pillar obstacles: [-SPAWN_HALF_RANGE, SPAWN_HALF_RANGE)
    pub const SPAWN_HALF_RANGE: f32 = 4.0;
    /// HorizontalBounce reflects at |x| > this
    pub const BOUNCE_BOUND: f32 = 5.0;
    pub const CIRCULAR_RADIUS: f32 = 3.0;
    pub const ZIGZAG_X_AMPLITUDE: f32 = 2.0;
    pub const ZIGZAG_Y_AMPLITUDE: f32 = 1.0;
    /// Rotating pillars spawn at x = +/- this
    pub const PILLAR_X: f32 = 4.0;
    pub const PILLAR_HEIGHT: f32 = 4.0;
    pub const PILLAR_RADIUS: f32 = 0.1;

    /// Obstacle box dimensions (width, height, depth)
    pub const BOX_WIDTH: f32 = 1.5;
    pub const ZIGZAG_BOX_WIDTH: f32 = 1.2;
    pub const BOX_HEIGHT: f32 = 0.5;
    pub const BOX_DEPTH: f32 = 0.5;

    /// Chase camera anchor offset from the ball (up, behind)
    pub const CAMERA_OFFSET: [f32; 3] = [0.0, 1.0, 5.0];
}
