//! Game state and core simulation types
//!
//! One explicit state value owns everything that changes between frames.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use crate::tuning::Tunables;

/// Whether the run is still going
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    /// Active gameplay
    Running,
    /// Terminal: a collision ended the run; only a full restart leaves this
    Over,
}

/// Drawable surface dimensions in pixels
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SurfaceSize {
    pub width: f32,
    pub height: f32,
}

/// The player-controlled dot
///
/// `x` never changes; gravity and jumps act on `y` only.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Dot {
    pub x: f32,
    pub y: f32,
    /// Vertical velocity (px/frame, negative = upward)
    pub vy: f32,
    pub radius: f32,
    pub on_ground: bool,
}

impl Dot {
    /// Apply one frame of gravity and clamp to the ground line.
    ///
    /// Per-frame fixed increments, not delta-time scaled.
    pub fn integrate(&mut self, gravity: f32, ground_y: f32) {
        self.vy += gravity;
        self.y += self.vy;

        if self.y >= ground_y {
            self.y = ground_y;
            self.vy = 0.0;
            self.on_ground = true;
        } else {
            self.on_ground = false;
        }
    }

    /// Start a jump if grounded; airborne requests are ignored (no air or
    /// queued jumps).
    pub fn request_jump(&mut self, jump_velocity: f32) {
        if self.on_ground {
            self.vy = jump_velocity;
            self.on_ground = false;
        }
    }
}

/// An axis-aligned rectangle scrolling in from the right, resting on the
/// ground line (`y + height == surface.height - ground_margin`)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Obstacle {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Obstacle {
    /// Right edge; the obstacle is pruned once this goes below zero.
    pub fn right(&self) -> f32 {
        self.x + self.width
    }
}

/// A decorative background star; generated per surface size, never moves
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Star {
    pub pos: Vec2,
    pub alpha: f32,
}

/// Complete game state, advanced once per rendered frame by [`tick`]
///
/// [`tick`]: super::tick::tick
#[derive(Debug, Clone)]
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u64,
    /// RNG for obstacle dimensions and the star field
    pub rng: Pcg32,
    pub tunables: Tunables,
    pub surface: SurfaceSize,
    pub dot: Dot,
    /// Active obstacles in spawn order
    pub obstacles: Vec<Obstacle>,
    /// Cosmetic star field, regenerated only on resize
    pub stars: Vec<Star>,
    /// +1 per obstacle that fully exits the left edge; never decremented
    pub score: u32,
    pub status: GameStatus,
    /// Frame timestamp of the most recent spawn (ms)
    pub last_spawn_ms: f64,
    /// Frames advanced so far
    pub frame_count: u64,
}

impl GameState {
    /// Create a fresh state with the dot resting on the ground.
    pub fn new(seed: u64, width: f32, height: f32, tunables: Tunables) -> Self {
        let surface = SurfaceSize { width, height };
        let mut state = Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
            dot: Dot {
                x: tunables.dot_x,
                y: 0.0,
                vy: 0.0,
                radius: tunables.dot_radius,
                on_ground: true,
            },
            tunables,
            surface,
            obstacles: Vec::new(),
            stars: Vec::new(),
            score: 0,
            status: GameStatus::Running,
            last_spawn_ms: 0.0,
            frame_count: 0,
        };
        state.dot.y = state.ground_y();
        state.regenerate_stars();
        state
    }

    /// Ground line for the dot's center. Clamped so degenerate surface
    /// sizes never produce a negative ground.
    pub fn ground_y(&self) -> f32 {
        (self.surface.height - self.dot.radius - self.tunables.ground_margin).max(0.0)
    }

    /// Apply a new surface size: recompute the ground line, snap the dot
    /// onto it, re-seat obstacles, and rebuild the star field.
    ///
    /// Mid-air state is intentionally not preserved across a resize.
    pub fn resize(&mut self, width: f32, height: f32) {
        self.surface = SurfaceSize { width, height };

        self.dot.y = self.ground_y();
        self.dot.vy = 0.0;
        self.dot.on_ground = true;

        let ground_line = self.surface.height - self.tunables.ground_margin;
        for obs in &mut self.obstacles {
            obs.y = ground_line - obs.height;
        }

        self.regenerate_stars();
    }

    /// Rebuild the star field for the current surface. Empty when the
    /// surface has no area.
    fn regenerate_stars(&mut self) {
        self.stars.clear();
        if self.surface.width <= 0.0 || self.surface.height <= 0.0 {
            return;
        }
        for _ in 0..self.tunables.star_count {
            self.stars.push(Star {
                pos: Vec2::new(
                    self.rng.random_range(0.0..self.surface.width),
                    self.rng.random_range(0.0..self.surface.height),
                ),
                alpha: self.rng.random_range(0.5..1.0),
            });
        }
    }
}
