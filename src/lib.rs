//! Galaxy Dash - jump a golden dot over scrolling obstacles
//!
//! Core modules:
//! - `sim`: Deterministic simulation (physics, obstacles, collisions, score)
//! - `renderer`: WebGPU rendering pipeline
//! - `tuning`: Data-driven overrides for the gameplay constants

pub mod renderer;
pub mod sim;
pub mod tuning;

pub use tuning::Tunables;

/// Game configuration constants
///
/// These are the shipped defaults; `Tunables` can override any of them.
pub mod consts {
    /// Downward acceleration applied to the dot every frame (px/frame²)
    pub const GRAVITY: f32 = 0.6;
    /// Vertical velocity set on jump (negative = upward, px/frame)
    pub const JUMP_VELOCITY: f32 = -12.0;
    /// Leftward obstacle movement per frame (px/frame)
    pub const OBSTACLE_SPEED: f32 = 4.0;
    /// Minimum wall-clock time between obstacle spawns (ms)
    pub const SPAWN_INTERVAL_MS: f64 = 1500.0;

    /// Obstacle width is uniform in [min, min + range)
    pub const OBSTACLE_WIDTH_MIN: f32 = 20.0;
    pub const OBSTACLE_WIDTH_RANGE: f32 = 30.0;
    /// Obstacle height is uniform in [min, min + range)
    pub const OBSTACLE_HEIGHT_MIN: f32 = 20.0;
    pub const OBSTACLE_HEIGHT_RANGE: f32 = 40.0;

    /// Dot radius (px)
    pub const DOT_RADIUS: f32 = 15.0;
    /// Fixed horizontal position of the dot (px from the left edge)
    pub const DOT_X: f32 = 50.0;
    /// Gap between the ground line and the bottom of the surface (px)
    pub const GROUND_MARGIN: f32 = 10.0;

    /// Number of background stars generated per surface size
    pub const STAR_COUNT: usize = 200;
}
