//! Axis-aligned bounding box collision detection
//!
//! One full scan over the live obstacle set per tick. No spatial
//! acceleration: the live set stays small thanks to recycling.

use glam::Vec3;

use super::state::{Ball, GameState, Obstacle, PLAYER_COLOR};
use crate::consts::BALL_RADIUS;

/// Axis-aligned bounding box in world space
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    pub min: Vec3,
    pub max: Vec3,
}

impl Aabb {
    pub fn from_center_half_extents(center: Vec3, half: Vec3) -> Self {
        Self {
            min: center - half,
            max: center + half,
        }
    }

    /// Inclusive intersection test (touching boxes intersect)
    pub fn intersects(&self, other: &Aabb) -> bool {
        self.min.x <= other.max.x
            && self.max.x >= other.min.x
            && self.min.y <= other.max.y
            && self.max.y >= other.min.y
            && self.min.z <= other.max.z
            && self.max.z >= other.min.z
    }
}

/// Bounding box of the ball (cube around the sphere)
pub fn ball_aabb(ball: &Ball) -> Aabb {
    Aabb::from_center_half_extents(ball.pos, Vec3::splat(BALL_RADIUS))
}

/// Bounding box of an obstacle from its current position
pub fn obstacle_aabb(obs: &Obstacle) -> Aabb {
    Aabb::from_center_half_extents(obs.pos, obs.half_extents())
}

/// Scan the live set for a hazardous intersection with the ball.
/// Obstacles sharing the player's color are safe and skipped.
/// Returns the id of the first hazardous hit.
pub fn find_hazard_hit(state: &GameState) -> Option<u32> {
    let ball_box = ball_aabb(&state.ball);
    state
        .obstacles
        .iter()
        .find(|obs| obs.color != PLAYER_COLOR && ball_box.intersects(&obstacle_aabb(obs)))
        .map(|obs| obs.id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::state::{Motion, ObstacleColor};

    fn obstacle_at(pos: Vec3, color: ObstacleColor) -> Obstacle {
        Obstacle {
            id: 1,
            pos,
            color,
            motion: Motion::HorizontalBounce { vel: 0.03 },
        }
    }

    #[test]
    fn test_aabb_intersects() {
        let a = Aabb::from_center_half_extents(Vec3::ZERO, Vec3::splat(1.0));
        let b = Aabb::from_center_half_extents(Vec3::new(1.5, 0.0, 0.0), Vec3::splat(1.0));
        let c = Aabb::from_center_half_extents(Vec3::new(3.0, 0.0, 0.0), Vec3::splat(0.5));
        assert!(a.intersects(&b));
        assert!(b.intersects(&a));
        assert!(!a.intersects(&c));

        // Touching faces count as intersecting
        let d = Aabb::from_center_half_extents(Vec3::new(2.0, 0.0, 0.0), Vec3::splat(1.0));
        assert!(a.intersects(&d));
    }

    #[test]
    fn test_hazard_hit_detected() {
        let mut state = GameState::new(1);
        state.obstacles.clear();
        state
            .obstacles
            .push(obstacle_at(state.ball.pos, ObstacleColor::Red));
        assert_eq!(find_hazard_hit(&state), Some(1));
    }

    #[test]
    fn test_safe_color_ignored() {
        let mut state = GameState::new(1);
        state.obstacles.clear();
        state
            .obstacles
            .push(obstacle_at(state.ball.pos, ObstacleColor::Blue));
        assert_eq!(find_hazard_hit(&state), None);
    }

    #[test]
    fn test_distant_obstacle_misses() {
        let mut state = GameState::new(1);
        state.obstacles.clear();
        state.obstacles.push(obstacle_at(
            state.ball.pos + Vec3::new(0.0, 5.0, 0.0),
            ObstacleColor::Red,
        ));
        assert_eq!(find_hazard_hit(&state), None);
    }

    #[test]
    fn test_vertical_overlap_boundary() {
        let mut state = GameState::new(1);
        state.obstacles.clear();
        // Box half height 0.25, ball radius 0.3: centers separate at 0.55
        let y = state.ball.pos.y + BALL_RADIUS + 0.25 - 0.01;
        state.obstacles.push(obstacle_at(
            Vec3::new(state.ball.pos.x, y, 0.0),
            ObstacleColor::Red,
        ));
        assert_eq!(find_hazard_hit(&state), Some(1));

        state.obstacles[0].pos.y += 0.02;
        assert_eq!(find_hazard_hit(&state), None);
    }
}
