//! Obstacle generation and infinite-world streaming
//!
//! Spawns batches ahead of the ball's leading edge and recycles obstacles
//! that have fallen behind. All randomness comes from the session RNG.

use glam::Vec3;
use rand::Rng;

use super::state::{GameState, Motion, Obstacle, ObstacleColor};
use crate::consts::*;

/// Generate one obstacle at the given height and append it to the live set.
///
/// Kind and color are uniform over their fixed sets; speed is uniform in
/// the per-tick speed range. Pillars spawn at one of the two horizontal
/// extremes, everything else at a uniform x in the spawn range.
pub fn spawn_obstacle_at(state: &mut GameState, y: f32) {
    let speed = state
        .rng
        .random_range(OBSTACLE_SPEED_MIN..OBSTACLE_SPEED_MAX);
    let kind = state.rng.random_range(0..4u32);
    let color = ObstacleColor::PALETTE[state.rng.random_range(0..ObstacleColor::PALETTE.len())];

    let (x, motion) = match kind {
        0 => (
            state.rng.random_range(-SPAWN_HALF_RANGE..SPAWN_HALF_RANGE),
            Motion::HorizontalBounce { vel: speed },
        ),
        1 => {
            let x = state.rng.random_range(-SPAWN_HALF_RANGE..SPAWN_HALF_RANGE);
            (
                x,
                Motion::Circular {
                    origin_x: x,
                    spawn_y: y,
                    phase: 0.0,
                    speed,
                },
            )
        }
        2 => {
            let x = if state.rng.random_bool(0.5) {
                -PILLAR_X
            } else {
                PILLAR_X
            };
            (x, Motion::Rotating { angle: 0.0, speed })
        }
        _ => {
            let x = state.rng.random_range(-SPAWN_HALF_RANGE..SPAWN_HALF_RANGE);
            (
                x,
                Motion::Zigzag {
                    origin_x: x,
                    spawn_y: y,
                    phase: 0.0,
                    speed,
                },
            )
        }
    };

    let id = state.next_entity_id();
    state.obstacles.push(Obstacle {
        id,
        pos: Vec3::new(x, y, 0.0),
        color,
        motion,
    });
}

/// Populate the opening stretch and set the frontier above it
pub fn spawn_initial_batch(state: &mut GameState) {
    for i in 0..INITIAL_BATCH {
        spawn_obstacle_at(state, i as f32 * OBSTACLE_SPACING + INITIAL_BASE_Y);
    }
    state.spawn_frontier = INITIAL_BATCH as f32 * OBSTACLE_SPACING + INITIAL_BASE_Y;
}

/// Spawn batches until the frontier clears the ball's lookahead margin.
/// Bounded frame deltas keep this loop short; it guarantees the ball never
/// outruns generation.
pub fn fill_ahead(state: &mut GameState) {
    while state.ball.pos.y + SPAWN_LOOKAHEAD > state.spawn_frontier {
        for i in 0..BATCH_SIZE {
            let y = state.spawn_frontier + i as f32 * OBSTACLE_SPACING;
            spawn_obstacle_at(state, y);
        }
        state.spawn_frontier += BATCH_SIZE as f32 * OBSTACLE_SPACING;
    }
}

/// Drop obstacles that have fallen far enough behind the ball
pub fn recycle_below(state: &mut GameState) {
    let limit = state.ball.pos.y - DESPAWN_MARGIN;
    state.obstacles.retain(|obs| obs.pos.y >= limit);
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_initial_batch_heights() {
        let state = GameState::new(1);
        for (i, obs) in state.obstacles.iter().enumerate() {
            assert_eq!(obs.pos.y, i as f32 * OBSTACLE_SPACING + INITIAL_BASE_Y);
        }
        assert_eq!(state.spawn_frontier, 22.0);
    }

    #[test]
    fn test_speed_and_x_in_range() {
        let mut state = GameState::new(42);
        for i in 0..200 {
            spawn_obstacle_at(&mut state, i as f32);
        }
        for obs in &state.obstacles {
            let speed = match obs.motion {
                Motion::HorizontalBounce { vel } => vel,
                Motion::Circular { speed, .. } => speed,
                Motion::Rotating { speed, .. } => speed,
                Motion::Zigzag { speed, .. } => speed,
            };
            assert!((OBSTACLE_SPEED_MIN..OBSTACLE_SPEED_MAX).contains(&speed));
            match obs.motion {
                Motion::Rotating { .. } => {
                    assert!(obs.pos.x == PILLAR_X || obs.pos.x == -PILLAR_X);
                }
                _ => {
                    assert!(obs.pos.x >= -SPAWN_HALF_RANGE && obs.pos.x < SPAWN_HALF_RANGE);
                }
            }
        }
    }

    #[test]
    fn test_all_kinds_and_colors_appear() {
        let mut state = GameState::new(9);
        for i in 0..400 {
            spawn_obstacle_at(&mut state, i as f32);
        }
        let mut bounce = 0;
        let mut circular = 0;
        let mut rotating = 0;
        let mut zigzag = 0;
        let mut safe = 0;
        for obs in &state.obstacles {
            match obs.motion {
                Motion::HorizontalBounce { .. } => bounce += 1,
                Motion::Circular { .. } => circular += 1,
                Motion::Rotating { .. } => rotating += 1,
                Motion::Zigzag { .. } => zigzag += 1,
            }
            if obs.color == super::super::state::PLAYER_COLOR {
                safe += 1;
            }
        }
        assert!(bounce > 0 && circular > 0 && rotating > 0 && zigzag > 0);
        // Safe (player-colored) obstacles must be reachable
        assert!(safe > 0);
    }

    #[test]
    fn test_fill_ahead_covers_lookahead() {
        let mut state = GameState::new(3);
        state.ball.pos.y = 100.0;
        fill_ahead(&mut state);
        assert!(state.spawn_frontier >= state.ball.pos.y + SPAWN_LOOKAHEAD);
    }

    #[test]
    fn test_recycle_below_margin() {
        let mut state = GameState::new(5);
        state.ball.pos.y = 40.0;
        // Everything from the initial batch (y in [2, 18]) is behind
        recycle_below(&mut state);
        assert!(state.obstacles.is_empty());

        state.ball.pos.y = 20.0;
        spawn_obstacle_at(&mut state, 9.9); // just below the margin
        spawn_obstacle_at(&mut state, 10.0); // exactly at the margin
        recycle_below(&mut state);
        assert_eq!(state.obstacles.len(), 1);
        assert_eq!(state.obstacles[0].pos.y, 10.0);
    }

    proptest! {
        #[test]
        fn prop_frontier_always_covers_ball(seed in 0u64..1000, ball_y in -6.0f32..500.0) {
            let mut state = GameState::new(seed);
            state.ball.pos.y = ball_y;
            fill_ahead(&mut state);
            prop_assert!(state.spawn_frontier >= state.ball.pos.y + SPAWN_LOOKAHEAD);
        }

        #[test]
        fn prop_recycle_leaves_nothing_behind(seed in 0u64..1000, ball_y in -6.0f32..500.0) {
            let mut state = GameState::new(seed);
            state.ball.pos.y = ball_y;
            fill_ahead(&mut state);
            recycle_below(&mut state);
            for obs in &state.obstacles {
                prop_assert!(obs.pos.y >= ball_y - DESPAWN_MARGIN);
            }
        }
    }
}
