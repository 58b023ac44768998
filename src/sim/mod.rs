//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One `World::update` call per frame, fixed-step integration
//! - Seeded RNG only
//! - Stable iteration order (registration order, platform pool order)
//! - No rendering or platform dependencies

pub mod body;
pub mod bounds;
pub mod character;
pub mod entity;
pub mod events;
pub mod field;
pub mod platform;
pub mod world;

pub use body::PhysicsBody;
pub use bounds::{BoundingBox, contains_point};
pub use character::{Character, CharacterPhase, LifeState};
pub use entity::{Entity, Tag};
pub use events::{GameEvent, GameEvents};
pub use field::PlatformField;
pub use platform::{GenerationContext, Platform};
pub use world::{Decoration, EntityId, World};
