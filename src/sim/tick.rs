//! Fixed timestep simulation tick
//!
//! One call advances exactly one 60 Hz step. Gameplay constants are tuned
//! per tick; the frontend's accumulator loop keeps real time and sim time
//! in lockstep regardless of display refresh.

use glam::Vec3;

use super::collision::find_hazard_hit;
use super::spawn::{fill_ahead, recycle_below};
use super::state::{GameEvent, GamePhase, GameState, Motion, Obstacle};
use crate::consts::*;

/// Input commands for a single tick
#[derive(Debug, Clone, Copy, Default)]
pub struct TickInput {
    /// Start-or-jump (Space / click). From Idle starts the run, from
    /// Running flaps, from GameOver resets and starts a new run.
    pub activate: bool,
    /// Explicit reset to Idle (restart button)
    pub reset: bool,
}

/// Advance the game state by one fixed timestep.
///
/// While running, the update order is strict: physics, collision, spawn,
/// per-obstacle motion, recycling, camera follow. In Idle and GameOver
/// only inputs are processed; the world stays frozen.
pub fn tick(state: &mut GameState, input: &TickInput) {
    state.time_ticks += 1;

    if input.reset {
        state.reset();
        return;
    }

    if input.activate {
        match state.phase {
            GamePhase::Idle => start_run(state),
            GamePhase::Running => {
                state.ball.vel_y = JUMP_VELOCITY;
                state.events.push(GameEvent::Jumped);
            }
            // Starting straight from GameOver is not allowed; reset first
            GamePhase::GameOver => {
                state.reset();
                start_run(state);
            }
        }
    }

    if state.phase != GamePhase::Running {
        return;
    }

    state.run_ticks += 1;

    // Semi-implicit Euler: velocity updates first, position uses it
    state.ball.vel_y += GRAVITY;
    state.ball.pos.y += state.ball.vel_y;

    if state.ball.pos.y < FLOOR_Y {
        end_run(state);
        return;
    }

    if find_hazard_hit(state).is_some() {
        end_run(state);
        return;
    }

    fill_ahead(state);

    for obs in &mut state.obstacles {
        update_motion(obs);
    }

    recycle_below(state);

    state.camera_anchor = state.ball.pos + Vec3::from(CAMERA_OFFSET);
}

fn start_run(state: &mut GameState) {
    state.phase = GamePhase::Running;
    state.ball.vel_y = JUMP_VELOCITY;
    state.run_ticks = 0;
    state.events.push(GameEvent::Started);
}

/// Freeze the session. Elapsed ticks and distance stay in place for the
/// HUD; the phase guard keeps this from firing twice.
fn end_run(state: &mut GameState) {
    state.phase = GamePhase::GameOver;
    state.events.push(GameEvent::GameOver);
}

/// Advance one obstacle's phase-driven motion by one tick
fn update_motion(obs: &mut Obstacle) {
    match &mut obs.motion {
        Motion::HorizontalBounce { vel } => {
            obs.pos.x += *vel;
            if obs.pos.x > BOUNCE_BOUND || obs.pos.x < -BOUNCE_BOUND {
                *vel = -*vel;
            }
        }
        Motion::Circular {
            origin_x,
            spawn_y,
            phase,
            speed,
        } => {
            *phase += *speed;
            obs.pos.x = *origin_x + phase.cos() * CIRCULAR_RADIUS;
            obs.pos.y = *spawn_y;
        }
        Motion::Rotating { angle, speed } => {
            *angle += *speed;
        }
        Motion::Zigzag {
            origin_x,
            spawn_y,
            phase,
            speed,
        } => {
            *phase += *speed;
            obs.pos.x = *origin_x + phase.sin() * ZIGZAG_X_AMPLITUDE;
            obs.pos.y = *spawn_y + (*phase * 0.5).sin().abs() * ZIGZAG_Y_AMPLITUDE;
        }
    }
}
