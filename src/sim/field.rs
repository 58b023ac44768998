//! Platform pool and procedural generator
//!
//! Owns every platform plus the seeded RNG and the generation context that
//! successive placements thread through. The pool never grows or shrinks.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;

use super::bounds::contains_point;
use super::platform::{GenerationContext, Platform};
use crate::config::Viewport;
use crate::consts::*;

/// Fixed pool of platforms plus the generator state they share
pub struct PlatformField {
    platforms: Vec<Platform>,
    context: GenerationContext,
    rng: Pcg32,
    viewport: Viewport,
}

impl PlatformField {
    /// Build a pool of `count` platforms and lay out the initial field
    pub fn new(count: usize, viewport: Viewport, seed: u64) -> Self {
        let mut field = Self {
            platforms: (0..count).map(|_| Platform::new()).collect(),
            context: GenerationContext::default(),
            rng: Pcg32::seed_from_u64(seed),
            viewport,
        };
        field.generate();
        field
    }

    /// Place every platform from scratch, each building on the last
    pub fn generate(&mut self) {
        let mut ctx = GenerationContext::default();
        for platform in &mut self.platforms {
            ctx = platform.reset(ctx, &self.viewport, &mut self.rng);
        }
        self.context = ctx;
        log::debug!(
            "Generated {} platforms (min_y={}, max_step={})",
            self.platforms.len(),
            ctx.min_y,
            ctx.max_step
        );
    }

    /// Move platform `index` above the field using the shared context
    pub fn recycle(&mut self, index: usize) {
        if let Some(platform) = self.platforms.get_mut(index) {
            self.context = platform.reset(self.context, &self.viewport, &mut self.rng);
            log::debug!(
                "Recycled platform {} to y={:.2} (max_step={})",
                index,
                platform.position().y,
                self.context.max_step
            );
        }
    }

    /// Shift the field down by `delta`. Platforms that fall past the recycle
    /// line are recycled instead; bounces on shifted platforms are cancelled.
    ///
    /// Returns how many platforms were recycled.
    pub fn scroll(&mut self, delta: f32) -> usize {
        let recycle_line = self.viewport.bottom() - RECYCLE_MARGIN;
        let mut recycled = 0;
        for index in 0..self.platforms.len() {
            let Some(platform) = self.platforms.get_mut(index) else {
                continue;
            };
            let shifted = platform.position().y - delta;
            if shifted < recycle_line {
                self.recycle(index);
                recycled += 1;
            } else {
                platform.cancel_bounce();
                platform.entity.body.position.y = shifted;
            }
        }
        recycled
    }

    /// Push every platform upward while the character falls out of the world
    pub fn rise(&mut self) {
        for platform in &mut self.platforms {
            platform.entity.body.velocity.y = ENDING_RISE_SPEED;
            platform.entity.body.apply_force(Vec2::new(0.0, ENDING_RISE_FORCE));
        }
    }

    /// Index of the first platform (in pool order) whose box contains any of
    /// `points`
    pub fn first_containing(&self, points: &[Vec2]) -> Option<usize> {
        self.platforms.iter().position(|platform| {
            let bbox = platform.entity.bounding_box();
            points.iter().any(|&p| contains_point(&bbox, p))
        })
    }

    /// Step platform `index` (bounce script and patrol)
    pub fn update_one(&mut self, index: usize, dt: f32) {
        if let Some(platform) = self.platforms.get_mut(index) {
            platform.update(dt, &self.viewport);
        }
    }

    pub fn context(&self) -> GenerationContext {
        self.context
    }

    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    pub fn len(&self) -> usize {
        self.platforms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.platforms.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Platform> {
        self.platforms.get(index)
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut Platform> {
        self.platforms.get_mut(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Platform> {
        self.platforms.iter()
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut Platform> {
        self.platforms.iter_mut()
    }
}
