//! Landing-detection boxes
//!
//! Boxes are derived on demand from an entity's position and visual size.
//! `(x, y)` is the top-left corner: `y` is the top edge and `height` extends
//! downward, even though world Y grows upward.

use glam::Vec2;

/// Axis-aligned box anchored at its top-left corner
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingBox {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl BoundingBox {
    /// Box for a visual of `size` centered at `position`, shrunk by `padding`
    /// on each side.
    ///
    /// Note the top edge adds the vertical padding instead of subtracting it.
    pub fn from_extent(position: Vec2, size: Vec2, padding: Vec2) -> Self {
        Self {
            width: size.x - padding.x * 2.0,
            height: size.y - padding.y * 2.0,
            x: position.x - size.x / 2.0 + padding.x,
            y: position.y + size.y / 2.0 + padding.y,
        }
    }

    pub fn top_left(&self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }

    pub fn bottom_left(&self) -> Vec2 {
        Vec2::new(self.x, self.y - self.height)
    }

    pub fn bottom_right(&self) -> Vec2 {
        Vec2::new(self.x + self.width, self.y - self.height)
    }
}

/// Inclusive containment test
pub fn contains_point(bbox: &BoundingBox, point: Vec2) -> bool {
    let ix = bbox.x;
    let iy = bbox.y;
    let ax = bbox.x + bbox.width;
    let ay = bbox.y - bbox.height;

    !(point.x < ix.min(ax) || point.x > ix.max(ax) || point.y < iy.min(ay) || point.y > iy.max(ay))
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_box_from_extent() {
        let bbox = BoundingBox::from_extent(Vec2::new(10.0, 20.0), Vec2::new(25.0, 25.0), Vec2::new(5.0, 0.0));
        assert_eq!(bbox.width, 15.0);
        assert_eq!(bbox.height, 25.0);
        assert_eq!(bbox.x, 2.5);
        assert_eq!(bbox.y, 32.5);
        assert_eq!(bbox.bottom_left(), Vec2::new(2.5, 7.5));
        assert_eq!(bbox.bottom_right(), Vec2::new(17.5, 7.5));
    }

    #[test]
    fn test_vertical_padding_raises_top() {
        let bbox = BoundingBox::from_extent(Vec2::ZERO, Vec2::new(10.0, 10.0), Vec2::new(0.0, 1.0));
        assert_eq!(bbox.height, 8.0);
        assert_eq!(bbox.y, 6.0);
    }

    #[test]
    fn test_contains_point() {
        let bbox = BoundingBox { x: 0.0, y: 5.0, width: 15.0, height: 5.0 };
        assert!(contains_point(&bbox, Vec2::new(7.5, 2.5)));
        assert!(contains_point(&bbox, Vec2::new(0.0, 0.0)));
        assert!(contains_point(&bbox, Vec2::new(15.0, 5.0)));
        assert!(!contains_point(&bbox, Vec2::new(7.5, 5.1)));
        assert!(!contains_point(&bbox, Vec2::new(7.5, -0.1)));
        assert!(!contains_point(&bbox, Vec2::new(-0.1, 2.0)));
        assert!(!contains_point(&bbox, Vec2::new(15.1, 2.0)));
    }

    #[test]
    fn test_contains_point_negative_extent() {
        // Shrunk past zero: the min/max normalisation still applies
        let bbox = BoundingBox { x: 10.0, y: 0.0, width: -4.0, height: -2.0 };
        assert!(contains_point(&bbox, Vec2::new(8.0, 1.0)));
        assert!(!contains_point(&bbox, Vec2::new(8.0, -1.0)));
    }

    proptest! {
        #[test]
        fn prop_box_contains_own_corners(
            x in -100.0f32..100.0,
            y in -100.0f32..100.0,
            w in 0.0f32..50.0,
            h in 0.0f32..50.0,
        ) {
            let bbox = BoundingBox { x, y, width: w, height: h };
            prop_assert!(contains_point(&bbox, bbox.top_left()));
            prop_assert!(contains_point(&bbox, bbox.bottom_right()));
            prop_assert!(contains_point(&bbox, bbox.bottom_left()));
        }
    }
}
