//! Dot/obstacle overlap test
//!
//! Deliberately a ground-band approximation, not a full AABB test: the
//! obstacle's top edge is only compared against the dot's bottom, so any
//! obstacle whose x-range overlaps the dot kills it unless the dot's
//! bottom is above the obstacle's top. This is the shipped play-feel;
//! do not tighten it.

use super::state::{Dot, Obstacle};

/// True iff the dot overlaps the obstacle.
///
/// All three must hold: the dot's right edge passes the obstacle's left,
/// the dot's left edge has not cleared the obstacle's right, and the
/// dot's bottom is below the obstacle's top.
pub fn dot_hits_obstacle(dot: &Dot, obs: &Obstacle) -> bool {
    dot.x + dot.radius > obs.x
        && dot.x - dot.radius < obs.x + obs.width
        && dot.y + dot.radius > obs.y
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dot(x: f32, y: f32, radius: f32) -> Dot {
        Dot {
            x,
            y,
            vy: 0.0,
            radius,
            on_ground: false,
        }
    }

    fn obstacle(x: f32, y: f32, width: f32, height: f32) -> Obstacle {
        Obstacle {
            x,
            y,
            width,
            height,
        }
    }

    #[test]
    fn test_overlapping_band_hits() {
        // 65 > 55, 35 < 75, 115 > 90
        let d = dot(50.0, 100.0, 15.0);
        let o = obstacle(55.0, 90.0, 20.0, 30.0);
        assert!(dot_hits_obstacle(&d, &o));
    }

    #[test]
    fn test_obstacle_ahead_misses() {
        // 65 > 100 fails
        let d = dot(50.0, 100.0, 15.0);
        let o = obstacle(100.0, 90.0, 20.0, 30.0);
        assert!(!dot_hits_obstacle(&d, &o));
    }

    #[test]
    fn test_obstacle_behind_misses() {
        let d = dot(50.0, 100.0, 15.0);
        let o = obstacle(10.0, 90.0, 20.0, 30.0);
        assert!(!dot_hits_obstacle(&d, &o));
    }

    #[test]
    fn test_high_jump_clears_short_obstacle() {
        // Bottom of the dot at 85, obstacle top at 90: airborne clearance
        let d = dot(50.0, 70.0, 15.0);
        let o = obstacle(55.0, 90.0, 20.0, 30.0);
        assert!(!dot_hits_obstacle(&d, &o));
    }

    #[test]
    fn test_band_test_ignores_obstacle_top_when_low() {
        // Dot bottom barely past the obstacle top still registers, even
        // though a strict AABB would also compare the dot's top edge
        let d = dot(50.0, 70.0, 15.0);
        let o = obstacle(55.0, 84.9, 20.0, 40.0);
        assert!(dot_hits_obstacle(&d, &o));
    }

    #[test]
    fn test_touching_edges_do_not_hit() {
        // Strict inequalities: exact contact is not a collision
        let d = dot(50.0, 100.0, 15.0);
        assert!(!dot_hits_obstacle(&d, &obstacle(65.0, 90.0, 20.0, 30.0)));
        assert!(!dot_hits_obstacle(&d, &obstacle(15.0, 90.0, 20.0, 30.0)));
        assert!(!dot_hits_obstacle(&d, &obstacle(55.0, 115.0, 20.0, 30.0)));
    }
}
