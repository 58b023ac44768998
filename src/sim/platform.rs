//! Jump platforms
//!
//! A fixed pool of platforms is built once and recycled forever: `reset`
//! moves a platform above the current field instead of spawning a new one.

use glam::Vec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::entity::{Entity, Tag};
use crate::config::Viewport;
use crate::consts::*;

/// Running state threaded through successive `reset` calls
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GenerationContext {
    /// Height (above the field bottom) the next placement builds on; negative
    /// means nothing has been placed yet
    pub min_y: f32,
    /// Current upper bound on the vertical step
    pub max_step: f32,
}

impl Default for GenerationContext {
    fn default() -> Self {
        Self {
            min_y: -1.0,
            max_step: INITIAL_MAX_STEP,
        }
    }
}

impl GenerationContext {
    /// Max step forced into `[MIN_STEP + STEP_INCREMENT, MAX_STEP]` so the
    /// step range is never empty
    fn sanitized_max_step(&self) -> f32 {
        debug_assert!(
            self.max_step >= MIN_STEP,
            "max step {} below MIN_STEP",
            self.max_step
        );
        let clamped = self.max_step.clamp(MIN_STEP + STEP_INCREMENT, MAX_STEP);
        if clamped != self.max_step {
            log::warn!("Clamped generation max step {} -> {}", self.max_step, clamped);
        }
        clamped
    }
}

/// A platform the character can land on
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Platform {
    pub entity: Entity,
    /// Patrols horizontally
    pub is_moving: bool,
    /// Bounce animation in progress
    pub should_bounce: bool,
    /// Y where the current bounce started
    pub bounce_start: f32,
}

impl Default for Platform {
    fn default() -> Self {
        Self::new()
    }
}

impl Platform {
    pub fn new() -> Self {
        Self {
            entity: Entity::new(Tag::Platform, Vec2::new(PLATFORM_WIDTH, PLATFORM_HEIGHT)),
            is_moving: false,
            should_bounce: false,
            bounce_start: 0.0,
        }
    }

    pub fn position(&self) -> Vec2 {
        self.entity.body.position
    }

    /// Start the landing bounce from the current height
    pub fn bounce(&mut self) {
        self.should_bounce = true;
        self.bounce_start = self.entity.body.position.y;
    }

    /// Abort a bounce in progress (the platform is scrolling away)
    pub fn cancel_bounce(&mut self) {
        if self.should_bounce {
            self.should_bounce = false;
            self.entity.body.velocity.y = 0.0;
        }
    }

    /// Integrate, then run the bounce script and patrol reflection
    pub fn update(&mut self, dt: f32, viewport: &Viewport) {
        let body = &mut self.entity.body;
        body.update(dt);

        if self.should_bounce {
            if body.velocity.y == 0.0 {
                body.velocity.y = -BOUNCE_SPEED;
            }

            if body.velocity.y < 0.0 && body.position.y < self.bounce_start - BOUNCE_DEPTH {
                body.velocity.y = -body.velocity.y;
            } else if body.velocity.y > 0.0 && body.position.y >= self.bounce_start {
                body.velocity.y = 0.0;
                self.should_bounce = false;
            }
        }

        if self.is_moving {
            let max_x = patrol_limit(viewport);
            if body.position.x > max_x {
                body.position.x = max_x;
                body.velocity.x = -body.velocity.x;
            } else if body.position.x < -max_x {
                body.position.x = -max_x;
                body.velocity.x = -body.velocity.x;
            }
        }
    }

    /// Recycle this platform above the field.
    ///
    /// Returns the context for the next placement. Its `min_y` is the placed
    /// height plus `HANDOFF_OFFSET`, not the placed height itself.
    pub fn reset(
        &mut self,
        ctx: GenerationContext,
        viewport: &Viewport,
        rng: &mut impl Rng,
    ) -> GenerationContext {
        let mut max_step = ctx.max_step;
        let first = ctx.min_y < 0.0;

        let y = if first {
            START_STEP
        } else {
            max_step = ctx.sanitized_max_step();
            let step = MIN_STEP + rng.random_range(0.0..max_step - MIN_STEP);
            if max_step < MAX_STEP {
                max_step = (max_step + STEP_INCREMENT).min(MAX_STEP);
            }
            ctx.min_y + step
        };

        let x = if first {
            0.0
        } else {
            let limit = viewport.half_width() - BORDER_WIDTH - self.entity.size.x / 2.0;
            rng.random_range(-limit..limit)
        };

        let body = &mut self.entity.body;
        body.reset(Vec2::new(x, viewport.bottom() + y + self.entity.size.y / 2.0));
        self.should_bounce = false;

        self.is_moving = rng.random_bool(0.5);
        if self.is_moving {
            let speed = rng.random_range(PATROL_MIN_SPEED..PATROL_MAX_SPEED);
            body.velocity.x = if rng.random_bool(0.5) { speed } else { -speed };
        }

        GenerationContext {
            min_y: y + HANDOFF_OFFSET,
            max_step,
        }
    }
}

/// Patrol reflects at +/- this x
fn patrol_limit(viewport: &Viewport) -> f32 {
    viewport.half_width() - BORDER_WIDTH - BORDER_TILE
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    fn viewport() -> Viewport {
        Viewport::new(100.0, 100.0)
    }

    #[test]
    fn test_first_reset_is_canonical() {
        let mut rng = Pcg32::seed_from_u64(1);
        for _ in 0..20 {
            let mut platform = Platform::new();
            let next = platform.reset(GenerationContext::default(), &viewport(), &mut rng);

            assert_eq!(next.min_y - HANDOFF_OFFSET, START_STEP);
            assert_eq!(next.max_step, INITIAL_MAX_STEP);
            assert_eq!(platform.position().x, 0.0);
            assert_eq!(platform.position().y, -50.0 + START_STEP + PLATFORM_HEIGHT / 2.0);
            assert_eq!(platform.entity.body.velocity.y, 0.0);
        }
    }

    #[test]
    fn test_reset_steps_up_and_ramps() {
        let mut rng = Pcg32::seed_from_u64(2);
        let mut platform = Platform::new();
        let ctx = GenerationContext { min_y: 19.0, max_step: 14.0 };
        let next = platform.reset(ctx, &viewport(), &mut rng);

        let placed = next.min_y - HANDOFF_OFFSET;
        assert!(placed >= 19.0 + MIN_STEP && placed < 19.0 + 14.0);
        assert_eq!(next.max_step, 14.5);

        let limit = 50.0 - BORDER_WIDTH - PLATFORM_WIDTH / 2.0;
        assert!(platform.position().x.abs() <= limit);
    }

    #[test]
    fn test_reset_sets_patrol_speed() {
        let mut rng = Pcg32::seed_from_u64(3);
        let mut platform = Platform::new();
        let mut ctx = GenerationContext::default();
        let mut saw_moving = false;
        let mut saw_still = false;
        for _ in 0..50 {
            ctx = platform.reset(ctx, &viewport(), &mut rng);
            let vx = platform.entity.body.velocity.x;
            if platform.is_moving {
                saw_moving = true;
                assert!(vx.abs() >= PATROL_MIN_SPEED && vx.abs() < PATROL_MAX_SPEED);
            } else {
                saw_still = true;
                assert_eq!(vx, 0.0);
            }
        }
        assert!(saw_moving && saw_still);
    }

    #[test]
    fn test_reset_clears_bounce() {
        let mut rng = Pcg32::seed_from_u64(4);
        let mut platform = Platform::new();
        platform.bounce();
        platform.entity.body.velocity.y = -1.1;
        platform.reset(GenerationContext::default(), &viewport(), &mut rng);
        assert!(!platform.should_bounce);
        assert_eq!(platform.entity.body.velocity.y, 0.0);
    }

    #[test]
    fn test_bounce_sequence() {
        let mut platform = Platform::new();
        platform.bounce();
        assert!(platform.should_bounce);
        assert_eq!(platform.bounce_start, 0.0);

        platform.update(1.0 / 60.0, &viewport());
        assert_eq!(platform.entity.body.velocity.y, -BOUNCE_SPEED);

        let mut flipped = false;
        for _ in 0..20 {
            let was_descending = platform.entity.body.velocity.y < 0.0;
            platform.update(1.0 / 60.0, &viewport());
            let vy = platform.entity.body.velocity.y;
            if was_descending && vy > 0.0 {
                assert!(platform.position().y < -BOUNCE_DEPTH);
                assert!(!flipped, "flipped twice");
                flipped = true;
            }
            if !platform.should_bounce {
                break;
            }
        }

        assert!(flipped);
        assert!(!platform.should_bounce);
        assert_eq!(platform.entity.body.velocity.y, 0.0);
        assert!(platform.position().y >= 0.0);
    }

    #[test]
    fn test_cancel_bounce() {
        let mut platform = Platform::new();
        platform.bounce();
        platform.update(1.0 / 60.0, &viewport());
        platform.cancel_bounce();
        assert!(!platform.should_bounce);
        assert_eq!(platform.entity.body.velocity.y, 0.0);
    }

    #[test]
    fn test_patrol_reflects_at_walls() {
        let mut platform = Platform::new();
        platform.is_moving = true;
        platform.entity.body.position.x = 27.4;
        platform.entity.body.velocity.x = 0.4;

        platform.update(1.0 / 60.0, &viewport());
        assert_eq!(platform.position().x, 27.5);
        assert_eq!(platform.entity.body.velocity.x, -0.4);

        platform.entity.body.position.x = -27.3;
        platform.update(1.0 / 60.0, &viewport());
        assert_eq!(platform.position().x, -27.5);
        assert_eq!(platform.entity.body.velocity.x, 0.4);
    }

    #[test]
    fn test_stationary_platform_ignores_walls() {
        let mut platform = Platform::new();
        platform.entity.body.position.x = 40.0;
        platform.update(1.0 / 60.0, &viewport());
        assert_eq!(platform.position().x, 40.0);
    }

    #[test]
    fn test_oversized_max_step_is_clamped() {
        let mut rng = Pcg32::seed_from_u64(5);
        let mut platform = Platform::new();
        for _ in 0..200 {
            let ctx = GenerationContext { min_y: 10.0, max_step: 40.0 };
            let next = platform.reset(ctx, &viewport(), &mut rng);

            let step = next.min_y - HANDOFF_OFFSET - 10.0;
            assert!(step >= MIN_STEP && step < MAX_STEP, "step {step}");
            assert_eq!(next.max_step, MAX_STEP);
        }
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "below MIN_STEP")]
    fn test_undersized_max_step_asserts_in_debug() {
        let mut rng = Pcg32::seed_from_u64(6);
        let ctx = GenerationContext { min_y: 10.0, max_step: 3.0 };
        Platform::new().reset(ctx, &viewport(), &mut rng);
    }

    #[test]
    #[cfg(not(debug_assertions))]
    fn test_undersized_max_step_is_clamped_in_release() {
        let mut rng = Pcg32::seed_from_u64(6);
        let ctx = GenerationContext { min_y: 10.0, max_step: 3.0 };
        let next = Platform::new().reset(ctx, &viewport(), &mut rng);

        let step = next.min_y - HANDOFF_OFFSET - 10.0;
        assert!(step >= MIN_STEP && step < MIN_STEP + STEP_INCREMENT, "step {step}");
        assert_eq!(next.max_step, MIN_STEP + 2.0 * STEP_INCREMENT);
    }

    proptest! {
        #[test]
        fn prop_max_step_capped(seed in any::<u64>(), calls in 1usize..200) {
            let mut rng = Pcg32::seed_from_u64(seed);
            let mut platform = Platform::new();
            let mut ctx = GenerationContext::default();
            let mut last_min_y = ctx.min_y;
            for _ in 0..calls {
                ctx = platform.reset(ctx, &viewport(), &mut rng);
                prop_assert!(ctx.max_step <= MAX_STEP);
                prop_assert!(ctx.min_y > last_min_y);
                last_min_y = ctx.min_y;
            }
        }
    }
}
