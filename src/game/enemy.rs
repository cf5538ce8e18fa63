//! Enemy actor
//!
//! Spawns somewhere random inside the play area and chases a target actor
//! through its `MovementComponent`. Holds the target as an `ActorId`, never
//! a reference, so a despawned target just shows up as `TargetStatus::Gone`
//! and the enemy goes back to idling.

use log::{debug, info};
use macroquad::color::{Color, DARKGRAY, GOLD, MAROON, ORANGE, PINK, RED};
use macroquad::math::Vec2;

use super::actor::{ActorKind, Behavior, RenderContext, SpawnContext, Spawnable, TargetStatus, TickContext};
use super::arena::ActorId;
use super::health::HealthComponent;
use super::movement::MovementComponent;
use super::transform::Transform;
use crate::config::{EnemySettings, GameConfig};

const BODY_SIZE: f32 = 30.0;
const INVINCIBLE_OUTLINE_RADIUS: f32 = 24.0;
const DEAD_CROSS_HALF: f32 = 12.0;

const HIGH_HEALTH: f32 = 0.7;
const MEDIUM_HEALTH: f32 = 0.3;

pub struct Enemy {
    settings: EnemySettings,
    health: HealthComponent,
    movement: MovementComponent,
    target: Option<ActorId>,
    /// Within `attack_range` of the target as of the last tick
    in_range: bool,
}

impl Enemy {
    pub fn new(settings: EnemySettings) -> Self {
        let health = HealthComponent::with_max(settings.max_health);
        let movement = MovementComponent::new(settings.speed);
        Self {
            settings,
            health,
            movement,
            target: None,
            in_range: false,
        }
    }

    pub fn set_target(&mut self, target: ActorId) {
        self.target = Some(target);
        self.in_range = false;
    }

    pub fn clear_target(&mut self) {
        self.target = None;
        self.in_range = false;
        self.movement.stop();
    }

    /// Returns true if this hit killed the enemy. A hit that doesn't kill
    /// opens a short invincibility window so one burst only lands once.
    pub fn take_damage(&mut self, amount: f32) -> bool {
        let was_invincible = self.health.is_invincible();
        let died = self.health.take_damage(amount);
        if died {
            info!("enemy died");
            self.movement.stop();
        } else if !was_invincible && !self.health.is_dead() && amount >= 0.0 {
            self.health.set_invincibility(self.settings.hit_invincibility);
        }
        died
    }

    pub fn health(&self) -> &HealthComponent {
        &self.health
    }

    pub fn health_mut(&mut self) -> &mut HealthComponent {
        &mut self.health
    }

    pub fn movement(&self) -> &MovementComponent {
        &self.movement
    }

    pub fn movement_mut(&mut self) -> &mut MovementComponent {
        &mut self.movement
    }

    pub fn in_range(&self) -> bool {
        self.in_range
    }

    fn body_color(&self) -> Color {
        let percent = self.health.health_percentage();
        if percent > HIGH_HEALTH {
            RED
        } else if percent > MEDIUM_HEALTH {
            ORANGE
        } else {
            MAROON
        }
    }
}

impl Behavior for Enemy {
    fn on_spawn(&mut self, transform: &mut Transform, ctx: &mut SpawnContext<'_>) {
        let margin = self.settings.spawn_margin.round() as i32;
        let max_x = ctx.area.width as i32 - margin;
        let max_y = ctx.area.height as i32 - margin;
        transform.position = Vec2::new(
            ctx.random.range_i32(margin, max_x) as f32,
            ctx.random.range_i32(margin, max_y) as f32,
        );
    }

    fn on_tick(&mut self, transform: &mut Transform, delta_time: f32, ctx: &mut TickContext<'_>) {
        self.health.update(delta_time);
        self.movement.update(delta_time);
        if self.health.is_dead() {
            return;
        }

        let target_pos = match ctx.target {
            TargetStatus::At(pos) => pos,
            TargetStatus::Gone => {
                debug!("enemy target is gone, idling");
                self.clear_target();
                return;
            }
            TargetStatus::None => return,
        };

        let distance = transform.position.distance(target_pos);
        if distance > self.settings.attack_range {
            self.in_range = false;
            transform.position = self.movement.move_toward(transform.position, target_pos, delta_time);
        } else {
            if !self.in_range {
                debug!("enemy in range of target ({:.1} units)", distance);
            }
            self.in_range = true;
            self.movement.stop();
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

        if self.settings.draw_target_lines {
            if let TargetStatus::At(target_pos) = ctx.target {
                ctx.canvas.draw_line(pos, target_pos, 1.0, PINK);
            }
        }

        let half = BODY_SIZE / 2.0;
        ctx.canvas.draw_rectangle(pos.x - half, pos.y - half, BODY_SIZE, BODY_SIZE, self.body_color());
        self.health.draw_debug(ctx.canvas, pos);

        if self.health.is_invincible() {
            ctx.canvas.draw_circle_lines(pos.x, pos.y, INVINCIBLE_OUTLINE_RADIUS, 2.0, GOLD);
        }
    }

    fn target(&self) -> Option<ActorId> {
        self.target
    }
}

impl Spawnable for Enemy {
    fn create(config: &GameConfig) -> Self {
        Enemy::new(config.enemy.clone())
    }

    fn default_name(config: &GameConfig) -> String {
        config.enemy.name.clone()
    }

    fn into_kind(self) -> ActorKind {
        ActorKind::Enemy(self)
    }
}
