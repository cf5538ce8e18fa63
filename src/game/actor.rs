//! Actors
//!
//! An actor is a positioned thing the `GameMode` ticks and renders every
//! frame. The set of kinds is closed (`ActorKind`): a plain `Marker`, the
//! `Player`, and `Enemy`. Each kind implements `Behavior`, the three
//! lifecycle hooks:
//! - `on_spawn`: once, right after the initial position is set
//! - `on_tick`: every frame while active
//! - `on_render`: every frame while active
//!
//! The shared record (`Actor`) owns the transform, the active flag and the
//! name. Hooks get the transform passed in rather than owning it.

use log::info;
use macroquad::color::RED;
use macroquad::math::Vec2;

use super::enemy::Enemy;
use super::arena::ActorId;
use super::player::Player;
use super::transform::Transform;
use crate::config::{GameConfig, PlayArea};
use crate::platform::{Canvas, Input, Random};

/// Where an actor's back-reference points this frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TargetStatus {
    /// No target assigned
    None,
    /// Target was despawned since it was assigned
    Gone,
    At(Vec2),
}

pub struct SpawnContext<'a> {
    pub random: &'a mut dyn Random,
    pub area: PlayArea,
}

pub struct TickContext<'a> {
    pub input: &'a dyn Input,
    pub area: PlayArea,
    pub target: TargetStatus,
}

pub struct RenderContext<'a> {
    pub canvas: &'a mut dyn Canvas,
    pub name: &'a str,
    pub target: TargetStatus,
}

/// Per-kind lifecycle hooks. Everything defaults to a no-op.
pub trait Behavior {
    fn on_spawn(&mut self, _transform: &mut Transform, _ctx: &mut SpawnContext<'_>) {}

    fn on_tick(&mut self, _transform: &mut Transform, _delta_time: f32, _ctx: &mut TickContext<'_>) {}

    fn on_render(&self, _transform: &Transform, _ctx: &mut RenderContext<'_>) {}

    /// The actor this one is tracking, if any.
    fn target(&self) -> Option<ActorId> {
        None
    }
}

/// Something `GameMode::spawn_actor` knows how to build.
pub trait Spawnable: Behavior + Sized {
    fn create(config: &GameConfig) -> Self;
    fn default_name(config: &GameConfig) -> String;
    fn into_kind(self) -> ActorKind;
}

/// The generic base actor: no logic, draws a fixed-size marker.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Marker;

const MARKER_SIZE: f32 = 20.0;

impl Behavior for Marker {
    fn on_render(&self, transform: &Transform, ctx: &mut RenderContext<'_>) {
        let half = MARKER_SIZE / 2.0;
        ctx.canvas.draw_rectangle(
            transform.position.x - half,
            transform.position.y - half,
            MARKER_SIZE,
            MARKER_SIZE,
            RED,
        );
    }
}

impl Spawnable for Marker {
    fn create(_config: &GameConfig) -> Self {
        Marker
    }

    fn default_name(_config: &GameConfig) -> String {
        "Actor".to_string()
    }

    fn into_kind(self) -> ActorKind {
        ActorKind::Marker(self)
    }
}

pub enum ActorKind {
    Marker(Marker),
    Player(Player),
    Enemy(Enemy),
}

impl ActorKind {
    pub fn behavior(&self) -> &dyn Behavior {
        match self {
            ActorKind::Marker(marker) => marker,
            ActorKind::Player(player) => player,
            ActorKind::Enemy(enemy) => enemy,
        }
    }

    pub fn behavior_mut(&mut self) -> &mut dyn Behavior {
        match self {
            ActorKind::Marker(marker) => marker,
            ActorKind::Player(player) => player,
            ActorKind::Enemy(enemy) => enemy,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ActorKind::Marker(_) => "marker",
            ActorKind::Player(_) => "player",
            ActorKind::Enemy(_) => "enemy",
        }
    }
}

/// One entry in the `GameMode`'s collection.
pub struct Actor {
    transform: Transform,
    active: bool,
    name: String,
    kind: ActorKind,
}

impl Actor {
    pub fn new(name: impl Into<String>, kind: ActorKind) -> Self {
        Self {
            transform: Transform::default(),
            active: true,
            name: name.into(),
            kind,
        }
    }

    /// Run the spawn hook. `GameMode::spawn_actor` does this exactly once
    /// per actor; code outside the crate can't call it again:
    ///
    /// ```compile_fail
    /// use pocket_arena::game::actor::{Actor, SpawnContext};
    ///
    /// fn respawn(actor: &mut Actor, ctx: &mut SpawnContext<'_>) {
    ///     actor.spawn(ctx);
    /// }
    /// ```
    pub(crate) fn spawn(&mut self, ctx: &mut SpawnContext<'_>) {
        self.kind.behavior_mut().on_spawn(&mut self.transform, ctx);
        info!(
            "spawned {} '{}' at ({}, {})",
            self.kind.label(),
            self.name,
            self.transform.position.x,
            self.transform.position.y
        );
    }

    /// ```compile_fail
    /// use pocket_arena::game::actor::{Actor, TickContext};
    ///
    /// fn drive(actor: &mut Actor, ctx: &mut TickContext<'_>) {
    ///     actor.tick(1.0, ctx);
    /// }
    /// ```
    pub(crate) fn tick(&mut self, delta_time: f32, ctx: &mut TickContext<'_>) {
        self.kind.behavior_mut().on_tick(&mut self.transform, delta_time, ctx);
    }

    /// Inactive actors draw nothing at all.
    pub fn render(&self, canvas: &mut dyn Canvas, target: TargetStatus) {
        if !self.active {
            return;
        }
        let mut ctx = RenderContext {
            canvas,
            name: &self.name,
            target,
        };
        self.kind.behavior().on_render(&self.transform, &mut ctx);
    }

    pub fn target(&self) -> Option<ActorId> {
        self.kind.behavior().target()
    }

    pub fn position(&self) -> Vec2 {
        self.transform.position
    }

    pub fn set_position(&mut self, position: Vec2) {
        self.transform.position = position;
    }

    pub fn transform(&self) -> &Transform {
        &self.transform
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn set_active(&mut self, active: bool) {
        self.active = active;
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    pub fn kind(&self) -> &ActorKind {
        &self.kind
    }

    pub fn kind_mut(&mut self) -> &mut ActorKind {
        &mut self.kind
    }

    pub fn as_player(&self) -> Option<&Player> {
        match &self.kind {
            ActorKind::Player(player) => Some(player),
            _ => None,
        }
    }

    pub fn as_player_mut(&mut self) -> Option<&mut Player> {
        match &mut self.kind {
            ActorKind::Player(player) => Some(player),
            _ => None,
        }
    }

    pub fn as_enemy(&self) -> Option<&Enemy> {
        match &self.kind {
            ActorKind::Enemy(enemy) => Some(enemy),
            _ => None,
        }
    }

    pub fn as_enemy_mut(&mut self) -> Option<&mut Enemy> {
        match &mut self.kind {
            ActorKind::Enemy(enemy) => Some(enemy),
            _ => None,
        }
    }
}

impl Drop for Actor {
    fn drop(&mut self) {
        info!("{} '{}' destroyed", self.kind.label(), self.name);
    }
}
