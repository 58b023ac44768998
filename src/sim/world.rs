//! The scene: owns every entity and ticks them once per frame
//!
//! Entities are a closed set of kinds. The character is registered before
//! any platform and `add` only appends decorations, so registration order
//! always updates the character before the platforms move.

use glam::Vec2;

use super::character::Character;
use super::entity::{Entity, Tag};
use super::events::GameEvents;
use super::field::PlatformField;
use crate::config::{ConfigError, Viewport, WorldConfig};
use crate::consts::*;
use crate::input::Accelerometer;
use crate::visual::{VisualBackend, VisualDescriptor};

/// Reference to a registered entity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntityId {
    Character,
    Platform(usize),
    Decoration(usize),
}

/// Non-simulated scenery
#[derive(Debug, Clone)]
pub struct Decoration {
    pub entity: Entity,
    pub descriptor: VisualDescriptor,
}

impl Decoration {
    /// Dirt walls down both sides of the field
    pub fn dirt_border(viewport: &Viewport) -> Self {
        let rows = (viewport.height / BORDER_TILE).ceil() as u32;
        Self {
            entity: Entity::new(Tag::Decoration, Vec2::new(viewport.width, viewport.height)),
            descriptor: VisualDescriptor::Border {
                tile: BORDER_TILE,
                rows,
            },
        }
    }
}

/// Scene root: viewport, character, platform pool and decorations
pub struct World {
    viewport: Viewport,
    character: Character,
    field: PlatformField,
    decorations: Vec<Decoration>,
    order: Vec<EntityId>,
}

impl World {
    /// Build the scene: border, character, then the platform pool
    pub fn new(config: &WorldConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let viewport = config.viewport();

        let mut world = Self {
            viewport,
            character: Character::new(Accelerometer::new()),
            field: PlatformField::new(config.platform_count, viewport, config.seed),
            decorations: Vec::new(),
            order: Vec::new(),
        };

        world.add(Decoration::dirt_border(&viewport));
        world.order.push(EntityId::Character);
        world
            .order
            .extend((0..world.field.len()).map(EntityId::Platform));

        log::info!(
            "World {}x{:.1} with {} platforms (seed {})",
            viewport.width,
            viewport.height,
            world.field.len(),
            config.seed
        );
        Ok(world)
    }

    /// Register a decoration for update and visual composition
    pub fn add(&mut self, decoration: Decoration) -> EntityId {
        let id = EntityId::Decoration(self.decorations.len());
        self.decorations.push(decoration);
        self.order.push(id);
        id
    }

    /// All registered entities with `tag`, in registration order
    pub fn objects_by_tag(&self, tag: Tag) -> Vec<EntityId> {
        self.order
            .iter()
            .copied()
            .filter(|&id| self.entity(id).is_some_and(|e| e.tag == tag))
            .collect()
    }

    pub fn entity(&self, id: EntityId) -> Option<&Entity> {
        match id {
            EntityId::Character => Some(&self.character.entity),
            EntityId::Platform(i) => self.field.get(i).map(|p| &p.entity),
            EntityId::Decoration(i) => self.decorations.get(i).map(|d| &d.entity),
        }
    }

    fn entity_mut(&mut self, id: EntityId) -> Option<&mut Entity> {
        match id {
            EntityId::Character => Some(&mut self.character.entity),
            EntityId::Platform(i) => self.field.get_mut(i).map(|p| &mut p.entity),
            EntityId::Decoration(i) => self.decorations.get_mut(i).map(|d| &mut d.entity),
        }
    }

    /// Advance one frame, every entity once in registration order
    pub fn update(&mut self, dt: f32, events: &mut impl GameEvents) {
        for &id in &self.order {
            match id {
                EntityId::Character => self.character.update(dt, &mut self.field, events),
                EntityId::Platform(i) => self.field.update_one(i, dt),
                EntityId::Decoration(_) => {}
            }
        }
    }

    /// New session on the same pool
    pub fn restart(&mut self) {
        self.field.generate();
        self.character.reset();
        self.character.accelerometer().clear();
        log::info!("World restarted");
    }

    /// Push a raw sensor sample (filtered into the shared register)
    pub fn set_accelerometer_sample(&self, x: f32, y: f32, z: f32) {
        self.character.accelerometer().push_sample(x, y, z);
    }

    /// Handle the sensor callback can write into from any thread
    pub fn accelerometer(&self) -> Accelerometer {
        self.character.accelerometer().clone()
    }

    /// Ask the backend for a visual per entity
    pub fn attach_visuals(&mut self, backend: &mut impl VisualBackend) {
        for id in self.order.clone() {
            let descriptor = self.descriptor(id);
            if let Some(entity) = self.entity_mut(id) {
                entity.visual = Some(backend.attach_visual(&descriptor));
            }
        }
    }

    /// Push positions, facing and animation changes to the backend
    pub fn sync_visuals(&mut self, backend: &mut impl VisualBackend) {
        for &id in &self.order {
            let Some(entity) = self.entity(id) else {
                continue;
            };
            if let Some(handle) = entity.visual {
                backend.set_visual_position(handle, entity.position());
            }
        }

        if let Some(handle) = self.character.entity.visual {
            backend.set_visual_facing(handle, self.character.facing());
            if let Some(look) = self.character.take_look_change() {
                backend.set_visual_animation(handle, look);
            }
        }
    }

    fn descriptor(&self, id: EntityId) -> VisualDescriptor {
        match id {
            EntityId::Character => VisualDescriptor::Character {
                size: self.character.entity.size,
            },
            EntityId::Platform(_) => VisualDescriptor::Platform {
                size: Vec2::new(PLATFORM_WIDTH, PLATFORM_HEIGHT),
            },
            EntityId::Decoration(i) => self
                .decorations
                .get(i)
                .map(|d| d.descriptor)
                .unwrap_or(VisualDescriptor::Border {
                    tile: BORDER_TILE,
                    rows: 0,
                }),
        }
    }

    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    pub fn character(&self) -> &Character {
        &self.character
    }

    pub fn character_mut(&mut self) -> &mut Character {
        &mut self.character
    }

    pub fn field(&self) -> &PlatformField {
        &self.field
    }

    pub fn field_mut(&mut self) -> &mut PlatformField {
        &mut self.field
    }

    pub fn score(&self) -> f32 {
        self.character.score()
    }

    pub fn is_game_over(&self) -> bool {
        self.character.game_ended()
    }
}
