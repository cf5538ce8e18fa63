//! Game Core
//!
//! A tiny actor framework for a single-screen 2D arena:
//! - Actor: positioned entity with spawn / tick / render hooks
//! - Player, Enemy: the concrete actor kinds
//! - HealthComponent, MovementComponent: composable per-actor state
//! - GameMode: owns every actor and runs the frame passes
//!
//! Actors refer to each other through generational `ActorId`s, never
//! references, so removing an actor can't leave anything dangling.
//! Everything runs on the one frame-loop thread.

pub mod actor;
pub mod arena;
pub mod enemy;
pub mod health;
pub mod mode;
pub mod movement;
pub mod player;
pub mod transform;

pub use actor::{Actor, ActorKind, Behavior, Marker, Spawnable, TargetStatus};
pub use arena::ActorId;
pub use enemy::Enemy;
pub use health::HealthComponent;
pub use mode::GameMode;
pub use movement::MovementComponent;
pub use player::Player;
pub use transform::Transform;
