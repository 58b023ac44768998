//! Shared entity data: body, tag, visual extent and handle

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::body::PhysicsBody;
use super::bounds::BoundingBox;
use crate::visual::VisualHandle;

/// Lookup tag
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Tag {
    Player,
    Platform,
    Decoration,
}

impl Tag {
    pub fn as_str(&self) -> &'static str {
        match self {
            Tag::Player => "player",
            Tag::Platform => "platform",
            Tag::Decoration => "decoration",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "player" => Some(Tag::Player),
            "platform" => Some(Tag::Platform),
            "decoration" => Some(Tag::Decoration),
            _ => None,
        }
    }
}

/// Common part of every entity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Entity {
    pub tag: Tag,
    pub body: PhysicsBody,
    /// Visual extent (world units)
    pub size: Vec2,
    /// Inset applied to each side of the bounding box
    pub padding: Vec2,
    /// Set once the backend has attached a visual
    #[serde(skip)]
    pub visual: Option<VisualHandle>,
}

impl Entity {
    pub fn new(tag: Tag, size: Vec2) -> Self {
        Self {
            tag,
            body: PhysicsBody::default(),
            size,
            padding: Vec2::ZERO,
            visual: None,
        }
    }

    pub fn with_padding(mut self, padding: Vec2) -> Self {
        self.padding = padding;
        self
    }

    pub fn with_body(mut self, body: PhysicsBody) -> Self {
        self.body = body;
        self
    }

    pub fn position(&self) -> Vec2 {
        self.body.position
    }

    pub fn bounding_box(&self) -> BoundingBox {
        BoundingBox::from_extent(self.body.position, self.size, self.padding)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tag_round_trips_names() {
        for tag in [Tag::Player, Tag::Platform, Tag::Decoration] {
            assert_eq!(Tag::from_str(tag.as_str()), Some(tag));
        }
        assert_eq!(Tag::from_str("PLATFORM"), Some(Tag::Platform));
        assert_eq!(Tag::from_str("dog"), None);
    }

    #[test]
    fn test_bounding_box_tracks_position() {
        let mut entity = Entity::new(Tag::Platform, Vec2::new(15.0, 5.0));
        entity.body.position = Vec2::new(0.0, 10.0);
        let bbox = entity.bounding_box();
        assert_eq!(bbox.x, -7.5);
        assert_eq!(bbox.y, 12.5);
        assert_eq!(bbox.width, 15.0);
        assert_eq!(bbox.height, 5.0);
    }
}
