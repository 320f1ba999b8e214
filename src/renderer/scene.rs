//! Frame geometry built from the current game state
//!
//! Pure read of [`GameState`]; no simulation mutation happens here. The
//! background fill comes from the render pass clear color, so the vertex
//! list starts with the stars.

use glam::Vec2;

use super::shapes::{circle, rect};
use super::vertex::{Vertex, colors};
use crate::sim::{GameState, GameStatus};

/// Segments used for the dot circle
const DOT_SEGMENTS: u32 = 32;
/// Star quad edge length in pixels
const STAR_SIZE: f32 = 2.0;

/// Build the vertex list for one frame: stars, dot, obstacles, and the
/// dimming overlay once the game is over.
pub fn build_frame(state: &GameState) -> Vec<Vertex> {
    let mut vertices =
        Vec::with_capacity(state.stars.len() * 6 + (DOT_SEGMENTS * 3) as usize + 64);

    for star in &state.stars {
        let mut color = colors::STAR;
        color[3] = star.alpha;
        vertices.extend(rect(star.pos.x, star.pos.y, STAR_SIZE, STAR_SIZE, color));
    }

    vertices.extend(circle(
        Vec2::new(state.dot.x, state.dot.y),
        state.dot.radius,
        colors::DOT,
        DOT_SEGMENTS,
    ));

    for obs in &state.obstacles {
        vertices.extend(rect(obs.x, obs.y, obs.width, obs.height, colors::OBSTACLE));
    }

    if state.status == GameStatus::Over {
        vertices.extend(rect(
            0.0,
            0.0,
            state.surface.width,
            state.surface.height,
            colors::GAME_OVER_OVERLAY,
        ));
    }

    vertices
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::Obstacle;
    use crate::tuning::Tunables;

    fn state() -> GameState {
        GameState::new(3, 800.0, 600.0, Tunables::default())
    }

    #[test]
    fn test_running_frame_has_stars_and_dot() {
        let s = state();
        let v = build_frame(&s);
        let expected = s.stars.len() * 6 + (DOT_SEGMENTS * 3) as usize;
        assert_eq!(v.len(), expected);
    }

    #[test]
    fn test_obstacles_add_quads() {
        let mut s = state();
        s.obstacles.push(Obstacle {
            x: 300.0,
            y: 560.0,
            width: 30.0,
            height: 30.0,
        });
        let base = build_frame(&state()).len();
        assert_eq!(build_frame(&s).len(), base + 6);
    }

    #[test]
    fn test_game_over_adds_full_surface_overlay() {
        let mut s = state();
        s.status = GameStatus::Over;
        let v = build_frame(&s);
        let overlay = &v[v.len() - 6..];
        assert!(overlay.iter().all(|v| v.color == colors::GAME_OVER_OVERLAY));
        assert!(overlay.iter().any(|v| v.position == [800.0, 600.0]));
    }
}
