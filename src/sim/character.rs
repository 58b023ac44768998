//! The player character
//!
//! Falls under gravity, bounces off platforms, steers by tilt. When it climbs
//! past the scroll ceiling the world moves down instead, and the distance
//! scrolled is the score. Falling out of the bottom runs a two-stage death
//! sequence: `Ending` on the first crossing, `Ended` on the second.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::body::PhysicsBody;
use super::entity::{Entity, Tag};
use super::events::GameEvents;
use super::field::PlatformField;
use crate::config::Viewport;
use crate::consts::*;
use crate::input::Accelerometer;
use crate::visual::{Facing, Look, Playback, SpriteSheet};

/// Session lifecycle; `Ending` lasts until the character drops out again
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LifeState {
    Playing,
    /// Fell past the bottom once; falling-off animation is playing
    Ending,
    /// Game over, character parked off screen
    Ended,
}

/// Observable movement phase
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CharacterPhase {
    Falling,
    Jumping,
    /// Touched a platform this frame
    Landed,
    Dying,
    Dead,
}

/// The jumping dog: a player entity with steering, score and life state
pub struct Character {
    pub entity: Entity,
    /// Tilt steering; off until the first landing
    pub controls_enabled: bool,
    /// Gravity applies; off once dead
    pub is_falling: bool,
    life: LifeState,
    landed: bool,
    score: f32,
    facing: Facing,
    look: Look,
    look_changed: bool,
    accelerometer: Accelerometer,
}

impl Character {
    pub fn new(accelerometer: Accelerometer) -> Self {
        let body = PhysicsBody::default().with_velocity_bounds(
            Vec2::new(-CHARACTER_MAX_VX, -CHARACTER_MAX_VY),
            Vec2::new(CHARACTER_MAX_VX, CHARACTER_MAX_VY),
        );
        let entity = Entity::new(Tag::Player, Vec2::splat(CHARACTER_SIZE))
            .with_padding(Vec2::new(CHARACTER_X_PADDING, 0.0))
            .with_body(body);

        let mut character = Self {
            entity,
            controls_enabled: false,
            is_falling: true,
            life: LifeState::Playing,
            landed: false,
            score: 0.0,
            facing: Facing::Right,
            look: Look::default(),
            look_changed: true,
            accelerometer,
        };
        character.reset();
        character
    }

    /// Back to the start state for a new session
    pub fn reset(&mut self) {
        self.entity.body.reset(Vec2::new(0.0, CHARACTER_START_Y));
        self.controls_enabled = false;
        self.is_falling = true;
        self.life = LifeState::Playing;
        self.landed = false;
        self.score = 0.0;
        self.set_look(SpriteSheet::Jump, Playback::Stopped, true);
    }

    pub fn position(&self) -> Vec2 {
        self.entity.body.position
    }

    pub fn life(&self) -> LifeState {
        self.life
    }

    pub fn game_is_ending(&self) -> bool {
        self.life == LifeState::Ending
    }

    pub fn game_ended(&self) -> bool {
        self.life == LifeState::Ended
    }

    pub fn score(&self) -> f32 {
        self.score
    }

    pub fn facing(&self) -> Facing {
        self.facing
    }

    pub fn look(&self) -> Look {
        self.look
    }

    pub fn accelerometer(&self) -> &Accelerometer {
        &self.accelerometer
    }

    pub fn phase(&self) -> CharacterPhase {
        match self.life {
            LifeState::Ended => CharacterPhase::Dead,
            LifeState::Ending => CharacterPhase::Dying,
            LifeState::Playing if self.landed => CharacterPhase::Landed,
            LifeState::Playing if self.entity.body.velocity.y > 0.0 => CharacterPhase::Jumping,
            LifeState::Playing => CharacterPhase::Falling,
        }
    }

    /// Look to hand to the renderer, if it changed since the last call
    pub fn take_look_change(&mut self) -> Option<Look> {
        std::mem::take(&mut self.look_changed).then_some(self.look)
    }

    /// Launch upward; faster horizontal motion jumps higher
    pub fn jump(&mut self) {
        let body = &mut self.entity.body;
        body.velocity.y = JUMP_SPEED + body.velocity.x.abs();
        self.controls_enabled = true;
        self.set_look(SpriteSheet::Jump, Playback::Forward, true);
    }

    /// One frame. Reads platform state before the platforms move.
    pub fn update(&mut self, dt: f32, field: &mut PlatformField, events: &mut impl GameEvents) {
        self.landed = false;
        if self.life == LifeState::Ended {
            return;
        }
        let viewport = *field.viewport();

        if self.controls_enabled {
            self.steer(dt);
        }

        if self.is_falling {
            self.entity.body.apply_gravity(-GRAVITY);
        } else {
            self.entity.body.velocity.y = 0.0;
        }

        self.entity.body.update(dt);
        self.clamp_to_walls(&viewport);
        self.check_platforms(field, &viewport, events);
        self.scroll_world(field, events);

        let body = &mut self.entity.body;
        if body.position.y > HARD_CEILING {
            body.position.y = HARD_CEILING;
        }

        if body.velocity.y < 0.0 && self.life == LifeState::Playing {
            self.set_look(self.look.sheet, Playback::Reverse, false);
        }
    }

    /// Low-pass the tilt reading into horizontal velocity. The blend factor
    /// depends on `dt` so the response is frame-rate independent.
    fn steer(&mut self, dt: f32) {
        let tilt = self.accelerometer.latest().x;
        let body = &mut self.entity.body;
        let alpha = dt / (TILT_TIME_CONSTANT + dt);
        let smoothed = alpha * tilt * TILT_SENSITIVITY + (1.0 - alpha) * body.velocity.x;
        body.velocity.x = smoothed * dt;

        if smoothed > FACING_THRESHOLD {
            self.facing = Facing::Right;
        } else if smoothed < -FACING_THRESHOLD {
            self.facing = Facing::Left;
        }
    }

    fn clamp_to_walls(&mut self, viewport: &Viewport) {
        let wall = viewport.half_width() - BORDER_WIDTH;
        let limit = wall - (self.entity.size.x / 2.0 - EDGE_INSET);
        let body = &mut self.entity.body;
        body.position.x = body.position.x.clamp(-limit, limit);
    }

    /// Landing on the first platform hit (pool order), otherwise the
    /// bottom-of-world check
    fn check_platforms(
        &mut self,
        field: &mut PlatformField,
        viewport: &Viewport,
        events: &mut impl GameEvents,
    ) {
        if self.entity.body.velocity.y < 0.0 && self.life == LifeState::Playing {
            let bbox = self.entity.bounding_box();
            let feet = [bbox.bottom_left(), bbox.bottom_right()];
            let hit = field
                .first_containing(&feet)
                .and_then(|index| field.get_mut(index).map(|platform| (index, platform)));
            if let Some((index, platform)) = hit {
                self.entity.body.position.y =
                    platform.entity.bounding_box().y + self.entity.size.y / 2.0;
                self.jump();
                platform.bounce();
                self.landed = true;
                log::debug!("Landed on platform {} at y={:.2}", index, self.position().y);
                return;
            }
        }

        let bottom = viewport.bottom();
        if self.life != LifeState::Ended && self.entity.bounding_box().y < bottom {
            if self.life == LifeState::Ending {
                self.life = LifeState::Ended;
                self.is_falling = false;
                self.controls_enabled = false;
                self.entity.body.reset(Vec2::new(self.position().x, DEAD_PARK_Y));
                log::info!("Game over, score {:.0}", self.score);
                events.on_game_ended();
            } else {
                self.life = LifeState::Ending;
                self.entity.body.velocity.y = DEATH_BOUNCE;
                self.entity.body.position.y = bottom + self.entity.size.y / 2.0;
                self.set_look(SpriteSheet::Dead, Playback::Stopped, true);
                log::debug!("Fell off the bottom, ending");
            }
        }
    }

    /// Keep the character under the scroll ceiling by moving the world
    fn scroll_world(&mut self, field: &mut PlatformField, events: &mut impl GameEvents) {
        match self.life {
            LifeState::Playing if self.entity.body.position.y > SCROLL_CEILING => {
                let delta = self.entity.body.position.y - SCROLL_CEILING;
                self.entity.body.position.y = SCROLL_CEILING;
                field.scroll(delta);
                self.score += delta;
                events.on_score_changed(delta);
            }
            LifeState::Ending => field.rise(),
            _ => {}
        }
    }

    fn set_look(&mut self, sheet: SpriteSheet, playback: Playback, restart: bool) {
        if !restart && self.look.sheet == sheet && self.look.playback == playback {
            return;
        }
        self.look.sheet = sheet;
        self.look.playback = playback;
        if restart {
            self.look.restarts = self.look.restarts.wrapping_add(1);
        }
        self.look_changed = true;
    }
}
