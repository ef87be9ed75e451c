//! Game state and core simulation types

use glam::Vec3;
use rand::SeedableRng;
use rand_pcg::Pcg32;

use crate::consts::*;

/// Current phase of a session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GamePhase {
    /// Before the first flap (and after a reset)
    Idle,
    /// Active gameplay
    Running,
    /// Run ended; frozen until reset
    GameOver,
}

/// Fixed color palette for obstacles. The player's ball is always blue;
/// a blue obstacle is safe to touch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ObstacleColor {
    Red,
    Green,
    Yellow,
    Blue,
}

/// The player color. Obstacles sharing it do not end the run.
pub const PLAYER_COLOR: ObstacleColor = ObstacleColor::Blue;

impl ObstacleColor {
    pub const PALETTE: [ObstacleColor; 4] = [
        ObstacleColor::Red,
        ObstacleColor::Green,
        ObstacleColor::Yellow,
        ObstacleColor::Blue,
    ];

    pub fn rgba(self) -> [f32; 4] {
        match self {
            ObstacleColor::Red => [1.0, 0.1, 0.1, 1.0],
            ObstacleColor::Green => [0.1, 1.0, 0.1, 1.0],
            ObstacleColor::Yellow => [1.0, 1.0, 0.1, 1.0],
            ObstacleColor::Blue => [0.1, 0.1, 1.0, 1.0],
        }
    }
}

/// Per-kind obstacle kinematics. Each variant carries only the parameters
/// its motion needs; phases accumulate per tick, never from wall clock.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Motion {
    /// Linear horizontal motion, reflecting at the arena bounds
    HorizontalBounce { vel: f32 },
    /// x follows a cosine around a fixed origin; y pinned to spawn height
    Circular {
        origin_x: f32,
        spawn_y: f32,
        phase: f32,
        speed: f32,
    },
    /// Stationary pillar spinning about z; rotation is visual only
    Rotating { angle: f32, speed: f32 },
    /// x follows a sine; y oscillates with a half-frequency sine above spawn
    Zigzag {
        origin_x: f32,
        spawn_y: f32,
        phase: f32,
        speed: f32,
    },
}

/// An obstacle entity. The obstacle list exclusively owns these; the
/// renderer derives presentation from the same record each frame.
#[derive(Debug, Clone, PartialEq)]
pub struct Obstacle {
    pub id: u32,
    pub pos: Vec3,
    pub color: ObstacleColor,
    pub motion: Motion,
}

impl Obstacle {
    /// Half extents of the collision box. Pillars use their unrotated
    /// extents: the spin angle never affects collision geometry.
    pub fn half_extents(&self) -> Vec3 {
        match self.motion {
            Motion::Rotating { .. } => {
                Vec3::new(PILLAR_RADIUS, PILLAR_HEIGHT / 2.0, PILLAR_RADIUS)
            }
            Motion::Zigzag { .. } => {
                Vec3::new(ZIGZAG_BOX_WIDTH / 2.0, BOX_HEIGHT / 2.0, BOX_DEPTH / 2.0)
            }
            _ => Vec3::new(BOX_WIDTH / 2.0, BOX_HEIGHT / 2.0, BOX_DEPTH / 2.0),
        }
    }

    /// Visual rotation about z (pillars only)
    pub fn rotation_z(&self) -> f32 {
        match self.motion {
            Motion::Rotating { angle, .. } => angle,
            _ => 0.0,
        }
    }
}

/// The player's ball. Gravity only acts vertically; there is no
/// horizontal ball motion in this game.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ball {
    pub pos: Vec3,
    pub vel_y: f32,
}

impl Ball {
    pub fn new() -> Self {
        Self {
            pos: Vec3::new(0.0, BALL_START_Y, 0.0),
            vel_y: 0.0,
        }
    }
}

impl Default for Ball {
    fn default() -> Self {
        Self::new()
    }
}

/// One-shot events emitted by the sim, drained by the frontend each frame
/// to drive audio and HUD transitions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    /// Run started from Idle
    Started,
    /// Flap impulse applied mid-run
    Jumped,
    /// Run ended (collision or floor)
    GameOver,
    /// Session reset to Idle
    Reset,
}

/// Complete session state, owned by the caller and passed into `tick`.
/// Multiple independent sessions can coexist.
#[derive(Debug, Clone)]
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u64,
    /// Seeded RNG; the only randomness source in the sim
    pub rng: Pcg32,
    pub phase: GamePhase,
    pub ball: Ball,
    /// Live obstacles, ascending spawn order (ids are monotonic)
    pub obstacles: Vec<Obstacle>,
    /// Highest y already populated with obstacles; monotonically increases
    pub spawn_frontier: f32,
    /// Total ticks since session creation
    pub time_ticks: u64,
    /// Ticks spent in Running this run; elapsed seconds = run_ticks * SIM_DT
    pub run_ticks: u64,
    /// Chase camera holder; the renderer offsets its eye from this
    pub camera_anchor: Vec3,
    /// Pending one-shot events (drained by the frontend)
    pub events: Vec<GameEvent>,
    next_id: u32,
}

impl GameState {
    /// Create a new session with the given seed and the initial obstacle batch
    pub fn new(seed: u64) -> Self {
        let mut state = Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
            phase: GamePhase::Idle,
            ball: Ball::new(),
            obstacles: Vec::new(),
            spawn_frontier: 0.0,
            time_ticks: 0,
            run_ticks: 0,
            camera_anchor: Vec3::ZERO,
            events: Vec::new(),
            next_id: 1,
        };
        super::spawn::spawn_initial_batch(&mut state);
        state
    }

    /// Allocate a new entity ID
    pub fn next_entity_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    /// Net vertical distance traveled this run
    pub fn distance(&self) -> f32 {
        self.ball.pos.y - BALL_START_Y
    }

    /// Elapsed run time in seconds
    pub fn elapsed_secs(&self) -> f32 {
        self.run_ticks as f32 * SIM_DT
    }

    /// Clear obstacles, regenerate the initial batch, return ball and
    /// camera to their origins, and go back to Idle. The RNG stream
    /// continues; the seed identifies the session, not each run.
    pub fn reset(&mut self) {
        self.ball = Ball::new();
        self.camera_anchor = Vec3::ZERO;
        self.obstacles.clear();
        self.spawn_frontier = 0.0;
        super::spawn::spawn_initial_batch(self);
        self.run_ticks = 0;
        self.phase = GamePhase::Idle;
        self.events.push(GameEvent::Reset);
    }

    /// Take pending events for the frontend to act on
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_session_has_initial_batch() {
        let state = GameState::new(7);
        assert_eq!(state.phase, GamePhase::Idle);
        assert_eq!(state.obstacles.len(), INITIAL_BATCH as usize);
        assert_eq!(
            state.spawn_frontier,
            INITIAL_BATCH as f32 * OBSTACLE_SPACING + INITIAL_BASE_Y
        );
        assert_eq!(state.ball.pos.y, BALL_START_Y);
        assert_eq!(state.distance(), 0.0);
    }

    #[test]
    fn test_pillar_half_extents_ignore_rotation() {
        let mut obs = Obstacle {
            id: 1,
            pos: Vec3::new(PILLAR_X, 10.0, 0.0),
            color: ObstacleColor::Red,
            motion: Motion::Rotating {
                angle: 0.0,
                speed: 0.03,
            },
        };
        let before = obs.half_extents();
        obs.motion = Motion::Rotating {
            angle: 1.3,
            speed: 0.03,
        };
        assert_eq!(obs.half_extents(), before);
        assert_eq!(obs.rotation_z(), 1.3);
    }
}
