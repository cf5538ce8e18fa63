//! Game Mode
//!
//! The application context for one run: owns the platform, the config and
//! every actor, and drives the per-frame passes. The host calls, in order:
//!
//! 1. `handle_input()` - pause toggle
//! 2. `update(dt)` - ticks active actors unless paused
//! 3. `draw()` - renders active actors, then the pause overlay
//!
//! or just `frame()`, which does all three with the platform's frame time.
//! Pausing freezes ticking only; the scene keeps rendering.

use log::{info, warn};
use macroquad::color::RED;
use macroquad::math::Vec2;

use super::actor::{Actor, SpawnContext, Spawnable, TargetStatus, TickContext};
use super::arena::{ActorArena, ActorId};
use super::enemy::Enemy;
use super::player::Player;
use crate::config::GameConfig;
use crate::platform::{Action, Platform};

const PAUSE_TEXT: &str = "PAUSED";
const PAUSE_FONT_SIZE: f32 = 40.0;

pub struct GameMode<P: Platform> {
    platform: P,
    config: GameConfig,
    actors: ActorArena,
    /// Unpaused seconds since construction
    elapsed_time: f32,
    is_paused: bool,
    current_level: Option<String>,
}

impl<P: Platform> GameMode<P> {
    pub fn new(platform: P, config: GameConfig) -> Self {
        Self {
            platform,
            config,
            actors: ActorArena::new(),
            elapsed_time: 0.0,
            is_paused: false,
            current_level: None,
        }
    }

    // =========================================================================
    // Actor management
    // =========================================================================

    /// Build a `T`, place it at `position`, take ownership, then run its
    /// spawn hook. The hook sees the initial position and may override it.
    pub fn spawn_actor<T: Spawnable>(&mut self, position: Vec2) -> ActorId {
        let mut actor = Actor::new(T::default_name(&self.config), T::create(&self.config).into_kind());
        actor.set_position(position);

        let id = self.actors.insert(actor);
        let area = self.config.play_area();
        if let Some(actor) = self.actors.get_mut(id) {
            let mut ctx = SpawnContext {
                random: &mut self.platform,
                area,
            };
            actor.spawn(&mut ctx);
        }
        id
    }

    /// Destroy one actor. Returns false for stale or unknown ids.
    pub fn despawn_actor(&mut self, id: ActorId) -> bool {
        self.actors.remove(id).is_some()
    }

    /// Populate the default scene: one player in the middle and
    /// `enemy.count` enemies hunting it. Returns the player's id.
    pub fn spawn_default_actors(&mut self) -> ActorId {
        let player = self.spawn_actor::<Player>(self.config.play_area().center());
        for _ in 0..self.config.enemy.count {
            let enemy = self.spawn_actor::<Enemy>(Vec2::ZERO);
            if let Some(enemy) = self.enemy_mut(enemy) {
                enemy.set_target(player);
            }
        }
        player
    }

    /// Destroy every actor. Outstanding ids stop resolving.
    pub fn clear_actors(&mut self) {
        if !self.actors.is_empty() {
            info!("clearing {} actors", self.actors.len());
        }
        self.actors.clear();
    }

    /// Drop the current scene and remember the level name. Populating the
    /// new level is up to the caller.
    pub fn load_level(&mut self, name: &str) {
        info!("loading level '{}'", name);
        self.clear_actors();
        self.current_level = Some(name.to_string());
    }

    // =========================================================================
    // Frame passes
    // =========================================================================

    pub fn handle_input(&mut self) {
        if self.platform.action_pressed(Action::TogglePause) {
            self.set_paused(!self.is_paused);
        }
    }

    /// Tick every active actor in spawn order. No-op while paused.
    pub fn update(&mut self, delta_time: f32) {
        if self.is_paused {
            return;
        }
        if delta_time.is_nan() || delta_time < 0.0 {
            warn!("update called with invalid delta time {}, ignoring", delta_time);
            return;
        }

        self.elapsed_time += delta_time;
        let area = self.config.play_area();

        for i in 0..self.actors.len() {
            let id = self.actors.ids()[i];
            let Some(actor) = self.actors.get(id) else { continue };
            if !actor.is_active() {
                continue;
            }

            let target = resolve_target(&self.actors, actor.target());
            if let Some(actor) = self.actors.get_mut(id) {
                let mut ctx = TickContext {
                    input: &self.platform,
                    area,
                    target,
                };
                actor.tick(delta_time, &mut ctx);
            }
        }
    }

    /// Render every active actor in spawn order, then the pause overlay.
    pub fn draw(&mut self) {
        for (_, actor) in self.actors.iter() {
            if !actor.is_active() {
                continue;
            }
            let target = resolve_target(&self.actors, actor.target());
            actor.render(&mut self.platform, target);
        }

        if self.is_paused {
            let center = self.config.play_area().center();
            self.platform.draw_text(
                PAUSE_TEXT,
                center.x - 50.0,
                center.y - PAUSE_FONT_SIZE / 2.0,
                PAUSE_FONT_SIZE,
                RED,
            );
        }
    }

    /// One full frame using the platform's elapsed frame time.
    pub fn frame(&mut self) {
        let delta_time = self.platform.frame_time();
        self.handle_input();
        self.update(delta_time);
        self.draw();
    }

    // =========================================================================
    // Lookups
    // =========================================================================

    pub fn actor(&self, id: ActorId) -> Option<&Actor> {
        self.actors.get(id)
    }

    pub fn actor_mut(&mut self, id: ActorId) -> Option<&mut Actor> {
        self.actors.get_mut(id)
    }

    pub fn player_mut(&mut self, id: ActorId) -> Option<&mut Player> {
        self.actors.get_mut(id).and_then(Actor::as_player_mut)
    }

    pub fn enemy_mut(&mut self, id: ActorId) -> Option<&mut Enemy> {
        self.actors.get_mut(id).and_then(Actor::as_enemy_mut)
    }

    /// Where `id` is right now, or that it's gone.
    pub fn target_status(&self, id: ActorId) -> TargetStatus {
        resolve_target(&self.actors, Some(id))
    }

    pub fn actor_ids(&self) -> &[ActorId] {
        self.actors.ids()
    }

    pub fn actor_count(&self) -> usize {
        self.actors.len()
    }

    pub fn elapsed_time(&self) -> f32 {
        self.elapsed_time
    }

    pub fn is_paused(&self) -> bool {
        self.is_paused
    }

    pub fn set_paused(&mut self, paused: bool) {
        if paused != self.is_paused {
            info!("game {}", if paused { "paused" } else { "resumed" });
        }
        self.is_paused = paused;
    }

    pub fn current_level(&self) -> Option<&str> {
        self.current_level.as_deref()
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn platform(&self) -> &P {
        &self.platform
    }

    pub fn platform_mut(&mut self) -> &mut P {
        &mut self.platform
    }
}

impl<P: Platform> Drop for GameMode<P> {
    fn drop(&mut self) {
        self.clear_actors();
    }
}

fn resolve_target(actors: &ActorArena, target: Option<ActorId>) -> TargetStatus {
    match target {
        None => TargetStatus::None,
        Some(id) => match actors.get(id) {
            Some(actor) => TargetStatus::At(actor.position()),
            None => TargetStatus::Gone,
        },
    }
}
