//! Player actor
//!
//! Keyboard-driven, axis-aligned movement at a fixed speed, clamped to the
//! play area per axis. Movement is applied directly to the transform and
//! does not go through `MovementComponent`.
//!
//! Death freezes the player in place. There is no respawn or game-over;
//! the dead marker stays on screen.

use log::{info, warn};
use macroquad::color::{Color, BLUE, DARKGRAY, GOLD, RED, YELLOW};
use macroquad::math::Vec2;

use super::actor::{ActorKind, Behavior, RenderContext, SpawnContext, Spawnable, TickContext};
use super::health::HealthComponent;
use super::transform::Transform;
use crate::config::{GameConfig, PlayerSettings};
use crate::platform::Action;

const BODY_RADIUS: f32 = 20.0;
const INVINCIBLE_RING_RADIUS: f32 = 25.0;
const DEAD_CROSS_HALF: f32 = 15.0;
const LABEL_SIZE: f32 = 10.0;

/// Health fraction above which the player is drawn in the "healthy" color
const HIGH_HEALTH: f32 = 0.7;
/// Health fraction above which the player is drawn in the "hurt" color
const MEDIUM_HEALTH: f32 = 0.3;

pub struct Player {
    settings: PlayerSettings,
    health: HealthComponent,
}

impl Player {
    pub fn new(settings: PlayerSettings) -> Self {
        let health = HealthComponent::with_max(settings.max_health);
        info!("player created with {} max health", health.max_health());
        Self { settings, health }
    }

    /// Returns true if this hit killed the player.
    pub fn take_damage(&mut self, amount: f32) -> bool {
        let died = self.health.take_damage(amount);
        if died {
            warn!("player died");
        }
        died
    }

    pub fn heal(&mut self, amount: f32) -> bool {
        self.health.heal(amount)
    }

    pub fn health(&self) -> &HealthComponent {
        &self.health
    }

    pub fn health_mut(&mut self) -> &mut HealthComponent {
        &mut self.health
    }

    pub fn speed(&self) -> f32 {
        self.settings.speed
    }

    fn body_color(&self) -> Color {
        let percent = self.health.health_percentage();
        if percent > HIGH_HEALTH {
            BLUE
        } else if percent > MEDIUM_HEALTH {
            YELLOW
        } else {
            RED
        }
    }
}

impl Behavior for Player {
    fn on_spawn(&mut self, transform: &mut Transform, ctx: &mut SpawnContext<'_>) {
        transform.position = ctx.area.center();
        self.health.reset_health();
    }

    fn on_tick(&mut self, transform: &mut Transform, delta_time: f32, ctx: &mut TickContext<'_>) {
        self.health.update(delta_time);
        if self.health.is_dead() {
            return;
        }

        let input = ctx.input;
        let step = self.settings.speed * delta_time;
        let mut offset = Vec2::ZERO;
        if input.action_down(Action::MoveRight) {
            offset.x += step;
        }
        if input.action_down(Action::MoveLeft) {
            offset.x -= step;
        }
        if input.action_down(Action::MoveDown) {
            offset.y += step;
        }
        if input.action_down(Action::MoveUp) {
            offset.y -= step;
        }
        transform.translate(offset);

        transform.position.x = transform.position.x.clamp(0.0, ctx.area.width);
        transform.position.y = transform.position.y.clamp(0.0, ctx.area.height);

        if input.action_pressed(Action::DebugDamage) {
            let amount = self.settings.debug_damage;
            self.take_damage(amount);
            info!("debug: player took {} damage", amount);
        }
        if input.action_pressed(Action::DebugHeal) {
            let amount = self.settings.debug_heal;
            if self.heal(amount) {
                info!("debug: player healed for {}", amount);
            }
        }
    }

    fn on_render(&self, transform: &Transform, ctx: &mut RenderContext<'_>) {
        let pos = transform.position;

        if self.health.is_dead() {
            let d = DEAD_CROSS_HALF;
            ctx.canvas.draw_line(
                Vec2::new(pos.x - d, pos.y - d),
                Vec2::new(pos.x + d, pos.y + d),
                2.0,
                DARKGRAY,
            );
            ctx.canvas.draw_line(
                Vec2::new(pos.x - d, pos.y + d),
                Vec2::new(pos.x + d, pos.y - d),
                2.0,
                DARKGRAY,
            );
            return;
        }

        ctx.canvas.draw_circle(pos.x, pos.y, BODY_RADIUS, self.body_color());
        ctx.canvas.draw_text(ctx.name, pos.x - 30.0, pos.y - 40.0, LABEL_SIZE, DARKGRAY);
        self.health.draw_debug(ctx.canvas, pos);

        if self.health.is_invincible() {
            ctx.canvas.draw_circle_lines(pos.x, pos.y, INVINCIBLE_RING_RADIUS, 2.0, GOLD);
        }
    }
}

impl Spawnable for Player {
    fn create(config: &GameConfig) -> Self {
        Player::new(config.player.clone())
    }

    fn default_name(config: &GameConfig) -> String {
        config.player.name.clone()
    }

    fn into_kind(self) -> ActorKind {
        ActorKind::Player(self)
    }
}
