//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One tick per rendered frame, fixed per-frame increments
//! - Seeded RNG only
//! - No rendering or platform dependencies

pub mod collision;
pub mod state;
pub mod tick;

pub use collision::dot_hits_obstacle;
pub use state::{Dot, GameState, GameStatus, Obstacle, Star, SurfaceSize};
pub use tick::{TickInput, tick};
