//! Dog Jump - simulation core of a 2D endless jumper
//!
//! Core modules:
//! - `sim`: Deterministic simulation (physics, platforms, character, world)
//! - `config`: World configuration and validation
//! - `input`: Accelerometer sample register
//! - `visual`: Interface to the external rendering backend
//!
//! Rendering, asset loading and the driver loop live outside this crate.

pub mod config;
pub mod input;
pub mod sim;
pub mod visual;

pub use config::{ConfigError, Viewport, WorldConfig};
pub use glam::{Vec2, Vec3};
pub use input::Accelerometer;
pub use sim::World;

/// Game tuning constants
pub mod consts {
    /// Nominal frame step used by the headless driver (the sim itself is per-call)
    pub const FRAME_DT: f32 = 1.0 / 60.0;

    /// Logical world width; height is derived from the device aspect ratio
    pub const WORLD_WIDTH: f32 = 100.0;
    /// Width of the dirt wall on each side
    pub const BORDER_WIDTH: f32 = 15.0;
    /// Dirt border tile edge length
    pub const BORDER_TILE: f32 = 7.5;

    /// Platform pool
    pub const PLATFORM_COUNT: usize = 30;
    pub const PLATFORM_WIDTH: f32 = 15.0;
    pub const PLATFORM_HEIGHT: f32 = 5.0;

    /// Vertical spacing between generated platforms
    pub const MIN_STEP: f32 = 5.0;
    pub const MAX_STEP: f32 = 23.0;
    /// Height of the canonical first platform
    pub const START_STEP: f32 = 14.0;
    /// Max step the generator starts from
    pub const INITIAL_MAX_STEP: f32 = 14.0;
    /// Difficulty ramp per placed platform
    pub const STEP_INCREMENT: f32 = 0.5;
    /// Offset added to the placed height before handing it to the next placement
    pub const HANDOFF_OFFSET: f32 = 5.0;

    /// Patrol speed range for moving platforms (units/frame)
    pub const PATROL_MIN_SPEED: f32 = 0.05;
    pub const PATROL_MAX_SPEED: f32 = 0.4;

    /// Bounce animation
    pub const BOUNCE_SPEED: f32 = 1.1;
    pub const BOUNCE_DEPTH: f32 = 2.5;

    /// Platforms below `bottom - RECYCLE_MARGIN` get recycled
    pub const RECYCLE_MARGIN: f32 = 2.5;

    /// Character defaults
    pub const CHARACTER_SIZE: f32 = 25.0;
    pub const CHARACTER_X_PADDING: f32 = 5.0;
    pub const CHARACTER_START_Y: f32 = -45.0;
    pub const CHARACTER_MAX_VX: f32 = 100.0;
    pub const CHARACTER_MAX_VY: f32 = 1000.0;
    /// Downward gravity (scaled by mass)
    pub const GRAVITY: f32 = 0.1;
    /// Base jump velocity, horizontal speed is added on top
    pub const JUMP_SPEED: f32 = 3.0;
    /// Above this height the world scrolls instead of the character
    pub const SCROLL_CEILING: f32 = 20.0;
    /// Absolute cap on the character height
    pub const HARD_CEILING: f32 = 30.0;
    /// Upward kick when falling off the bottom
    pub const DEATH_BOUNCE: f32 = 5.0;
    /// Where a dead character is parked
    pub const DEAD_PARK_Y: f32 = -100.0;
    /// Sprite inset used when clamping to the walls
    pub const EDGE_INSET: f32 = 2.0;

    /// Tilt control
    pub const TILT_TIME_CONSTANT: f32 = 0.3;
    pub const TILT_SENSITIVITY: f32 = 5000.0;
    pub const FACING_THRESHOLD: f32 = 30.0;

    /// Platform motion while the death sequence plays
    pub const ENDING_RISE_SPEED: f32 = 3.5;
    pub const ENDING_RISE_FORCE: f32 = 0.3;

    /// Accelerometer
    pub const SENSOR_INTERVAL_MS: u32 = 20;
    pub const SENSOR_ALPHA: f32 = 0.1;
}
