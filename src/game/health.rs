//! Health Component
//!
//! Hit points, death, and a timed invincibility window. Embedded by value
//! in the actors that can be hurt.
//!
//! Two states only: alive and dead. Dead is terminal; nothing here brings
//! an actor back except an explicit `reset_health` on respawn.

use log::{info, warn};
use macroquad::color::{GREEN, LIGHTGRAY};
use macroquad::math::Vec2;

use crate::platform::Canvas;

pub const DEFAULT_MAX_HEALTH: f32 = 100.0;

/// Health bar geometry, relative to the owner's position
const BAR_WIDTH: f32 = 50.0;
const BAR_HEIGHT: f32 = 5.0;
const BAR_OFFSET_Y: f32 = 30.0;

#[derive(Debug, Clone, PartialEq)]
pub struct HealthComponent {
    max_health: f32,
    /// Always within `0..=max_health`
    current_health: f32,
    /// Mirrors `current_health <= 0`
    is_dead: bool,
    /// Seconds of invincibility left, never negative
    invincibility_remaining: f32,
}

impl HealthComponent {
    pub fn new() -> Self {
        Self::with_max(DEFAULT_MAX_HEALTH)
    }

    /// Full health at `max`. A non-positive `max` falls back to the default.
    pub fn with_max(max: f32) -> Self {
        let mut health = Self {
            max_health: DEFAULT_MAX_HEALTH,
            current_health: DEFAULT_MAX_HEALTH,
            is_dead: false,
            invincibility_remaining: 0.0,
        };
        health.set_max_health(max);
        health.reset_health();
        health
    }

    /// Apply damage. Returns true only if this hit killed the owner.
    ///
    /// Negative amounts are rejected, and damage taken while invincible is
    /// ignored. Neither touches state.
    pub fn take_damage(&mut self, amount: f32) -> bool {
        if amount.is_nan() || amount < 0.0 {
            warn!("take_damage called with negative amount {}, ignoring", amount);
            return false;
        }

        if self.is_invincible() {
            info!("damage of {} ignored due to invincibility", amount);
            return false;
        }

        if self.is_dead {
            return false;
        }

        self.current_health = (self.current_health - amount).max(0.0);
        info!(
            "took {} damage ({}/{})",
            amount, self.current_health, self.max_health
        );

        if self.current_health <= 0.0 {
            self.current_health = 0.0;
            self.is_dead = true;
            info!("entity died");
            return true;
        }
        false
    }

    /// Restore health up to the max. Returns false if rejected (owner is
    /// dead or the amount is negative).
    pub fn heal(&mut self, amount: f32) -> bool {
        if self.is_dead {
            warn!("heal called on dead entity, ignoring");
            return false;
        }
        if amount.is_nan() || amount < 0.0 {
            warn!("heal called with negative amount {}, ignoring", amount);
            return false;
        }

        self.current_health = (self.current_health + amount).min(self.max_health);
        info!(
            "healed for {} ({}/{})",
            amount, self.current_health, self.max_health
        );
        true
    }

    /// Ignore all damage for `duration` seconds, replacing any window
    /// already running.
    pub fn set_invincibility(&mut self, duration: f32) {
        if duration.is_nan() || duration < 0.0 {
            warn!("set_invincibility called with negative duration {}, ignoring", duration);
            return;
        }
        self.invincibility_remaining = duration;
        info!("entity is now invincible for {} seconds", duration);
    }

    /// Count the invincibility window down. Call once per tick.
    pub fn update(&mut self, delta_time: f32) {
        if delta_time.is_nan() || delta_time < 0.0 {
            warn!("health update called with invalid delta time {}, ignoring", delta_time);
            return;
        }
        if self.invincibility_remaining > 0.0 {
            self.invincibility_remaining = (self.invincibility_remaining - delta_time).max(0.0);
            if self.invincibility_remaining == 0.0 {
                info!("entity is no longer invincible");
            }
        }
    }

    /// Change the max. Current health is clamped down if it no longer fits.
    pub fn set_max_health(&mut self, new_max: f32) {
        if new_max.is_nan() || new_max <= 0.0 {
            warn!("set_max_health called with non-positive value {}, ignoring", new_max);
            return;
        }
        self.max_health = new_max;
        if self.current_health > self.max_health {
            self.current_health = self.max_health;
        }
    }

    /// Back to full health, alive, not invincible. Used on (re)spawn.
    pub fn reset_health(&mut self) {
        self.current_health = self.max_health;
        self.is_dead = false;
        self.invincibility_remaining = 0.0;
    }

    /// Health bar above `position`, shown only while alive and hurt.
    pub fn draw_debug(&self, canvas: &mut dyn Canvas, position: Vec2) {
        if self.is_dead || self.current_health >= self.max_health {
            return;
        }

        let x = position.x - BAR_WIDTH / 2.0;
        let y = position.y - BAR_OFFSET_Y;
        canvas.draw_rectangle(x, y, BAR_WIDTH, BAR_HEIGHT, LIGHTGRAY);
        canvas.draw_rectangle(x, y, BAR_WIDTH * self.health_percentage(), BAR_HEIGHT, GREEN);
    }

    pub fn current_health(&self) -> f32 {
        self.current_health
    }

    pub fn max_health(&self) -> f32 {
        self.max_health
    }

    /// `current / max`, in `0.0..=1.0`
    pub fn health_percentage(&self) -> f32 {
        self.current_health / self.max_health
    }

    pub fn is_dead(&self) -> bool {
        self.is_dead
    }

    pub fn is_invincible(&self) -> bool {
        self.invincibility_remaining > 0.0
    }

    pub fn invincibility_remaining(&self) -> f32 {
        self.invincibility_remaining
    }
}

impl Default for HealthComponent {
    fn default() -> Self {
        Self::new()
    }
}
