//! Renderer interface
//!
//! The simulation never draws. It asks the backend for a handle per entity,
//! then pushes the intended visual state (position, facing, animation) after
//! each frame. Textures and sprite sheets belong to the backend.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Opaque handle issued by the backend
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct VisualHandle(pub u32);

/// Sprite sheets the core can ask for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SpriteSheet {
    Jump,
    Dead,
}

/// How the backend should play the current sheet
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Playback {
    /// Hold the first frame
    Stopped,
    Forward,
    Reverse,
}

/// Animation state of an entity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Look {
    pub sheet: SpriteSheet,
    pub playback: Playback,
    /// Bumped whenever playback must restart from frame 0
    pub restarts: u32,
}

impl Default for Look {
    fn default() -> Self {
        Self {
            sheet: SpriteSheet::Jump,
            playback: Playback::Stopped,
            restarts: 0,
        }
    }
}

/// Horizontal flip
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Facing {
    #[default]
    Right,
    Left,
}

/// What the backend should build for an entity
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum VisualDescriptor {
    /// Animated player sprite
    Character { size: Vec2 },
    /// Three-tile platform (left, middle, right)
    Platform { size: Vec2 },
    /// Dirt walls tiled down both sides of the field
    Border { tile: f32, rows: u32 },
}

/// The rendering collaborator
pub trait VisualBackend {
    fn attach_visual(&mut self, descriptor: &VisualDescriptor) -> VisualHandle;
    fn set_visual_position(&mut self, handle: VisualHandle, position: Vec2);
    fn set_visual_facing(&mut self, handle: VisualHandle, facing: Facing);
    fn set_visual_animation(&mut self, handle: VisualHandle, look: Look);
}
