//! Movement Component
//!
//! Velocity integration for two styles of motion:
//! - direction-driven (input-style, normalized so diagonals aren't faster)
//! - seek-driven (move toward a point, stop on arrival)
//!
//! Plus a timed speed boost that always reverts to the pre-boost speed.
//! The component never owns a position; callers pass theirs in and get
//! the new one back.

use log::{info, warn};
use macroquad::math::Vec2;

pub const DEFAULT_SPEED: f32 = 100.0;

/// Directions shorter than this count as "no input"
const DIRECTION_EPSILON: f32 = 0.1;
/// Distance at which a seek counts as arrived
const ARRIVAL_DISTANCE: f32 = 1.0;

#[derive(Debug, Clone, PartialEq)]
pub struct MovementComponent {
    /// Units per second, never above `max_speed`
    speed: f32,
    max_speed: f32,
    velocity: Vec2,
    /// Last requested direction
    move_direction: Vec2,
    is_moving: bool,

    is_boosted: bool,
    /// Speed to restore when the boost expires
    original_speed: f32,
    boost_remaining: f32,
}

impl MovementComponent {
    /// Max speed starts equal to `speed`. Non-positive speeds fall back to
    /// the default.
    pub fn new(speed: f32) -> Self {
        let speed = if speed.is_nan() || speed <= 0.0 {
            warn!("movement speed {} is not positive, using {}", speed, DEFAULT_SPEED);
            DEFAULT_SPEED
        } else {
            speed
        };

        Self {
            speed,
            max_speed: speed,
            velocity: Vec2::ZERO,
            move_direction: Vec2::ZERO,
            is_moving: false,
            is_boosted: false,
            original_speed: speed,
            boost_remaining: 0.0,
        }
    }

    /// Raise the cap (boosts need headroom above the resting speed).
    pub fn with_max_speed(mut self, max_speed: f32) -> Self {
        self.set_max_speed(max_speed);
        self
    }

    /// Move along `direction` for one step and return the new position.
    ///
    /// A near-zero direction stops the component and leaves the position
    /// where it was.
    pub fn move_in_direction(&mut self, direction: Vec2, delta_time: f32, current_pos: Vec2) -> Vec2 {
        self.move_direction = direction;

        let length = direction.length();
        if length > DIRECTION_EPSILON {
            self.is_moving = true;
            self.velocity = direction / length * self.speed;
            current_pos + self.velocity * delta_time
        } else {
            self.is_moving = false;
            self.velocity = Vec2::ZERO;
            current_pos
        }
    }

    /// Step toward `target_pos` and return the new position.
    ///
    /// Within `ARRIVAL_DISTANCE` the component stops without moving. A step
    /// that ends farther from the target than it started (i.e. it jumped
    /// past) lands exactly on the target instead. That guard is only
    /// approximate for very large `speed * delta_time`.
    pub fn move_toward(&mut self, current_pos: Vec2, target_pos: Vec2, delta_time: f32) -> Vec2 {
        let offset = target_pos - current_pos;
        let distance = offset.length();

        if distance <= ARRIVAL_DISTANCE {
            self.stop();
            return current_pos;
        }

        self.is_moving = true;
        let direction = offset / distance;
        self.move_direction = direction;
        self.velocity = direction * self.speed;

        let new_pos = current_pos + self.velocity * delta_time;
        if new_pos.distance(target_pos) > distance {
            self.velocity = Vec2::ZERO;
            self.is_moving = false;
            return target_pos;
        }
        new_pos
    }

    /// Zero velocity and direction. Position is the caller's business.
    pub fn stop(&mut self) {
        self.velocity = Vec2::ZERO;
        self.move_direction = Vec2::ZERO;
        self.is_moving = false;
    }

    /// Multiply the pre-boost speed by `multiplier` for `duration` seconds,
    /// capped at `max_speed`.
    ///
    /// Calling again while boosted refreshes the timer and reapplies the
    /// multiplier to the original speed; boosts never compound.
    pub fn temporary_boost(&mut self, multiplier: f32, duration: f32) {
        if multiplier.is_nan() || multiplier <= 0.0 {
            warn!("boost multiplier {} is not positive, ignoring", multiplier);
            return;
        }
        if duration.is_nan() || duration < 0.0 {
            warn!("boost duration {} is negative, ignoring", duration);
            return;
        }

        if !self.is_boosted {
            self.original_speed = self.speed;
            self.is_boosted = true;
        }

        self.speed = (self.original_speed * multiplier).min(self.max_speed);
        self.boost_remaining = duration;
        info!("speed boosted to {} for {} seconds", self.speed, duration);
    }

    /// Advance the boost timer. Call once per tick.
    pub fn update(&mut self, delta_time: f32) {
        if !self.is_boosted {
            return;
        }
        if delta_time.is_nan() || delta_time < 0.0 {
            warn!("movement update called with invalid delta time {}, ignoring", delta_time);
            return;
        }

        self.boost_remaining -= delta_time;
        if self.boost_remaining <= 0.0 {
            self.boost_remaining = 0.0;
            self.speed = self.original_speed;
            self.is_boosted = false;
            info!("speed boost expired, back to {}", self.speed);
        }
    }

    /// Rejects non-positive values; clamps to `max_speed`.
    pub fn set_speed(&mut self, new_speed: f32) {
        if new_speed.is_nan() || new_speed <= 0.0 {
            warn!("set_speed called with non-positive value {}, ignoring", new_speed);
            return;
        }
        self.speed = new_speed.min(self.max_speed);
    }

    /// Rejects non-positive values; pulls the current speed down if needed.
    pub fn set_max_speed(&mut self, new_max: f32) {
        if new_max.is_nan() || new_max <= 0.0 {
            warn!("set_max_speed called with non-positive value {}, ignoring", new_max);
            return;
        }
        self.max_speed = new_max;
        self.speed = self.speed.min(new_max);
        self.original_speed = self.original_speed.min(new_max);
    }

    pub fn speed(&self) -> f32 {
        self.speed
    }

    pub fn max_speed(&self) -> f32 {
        self.max_speed
    }

    pub fn velocity(&self) -> Vec2 {
        self.velocity
    }

    pub fn move_direction(&self) -> Vec2 {
        self.move_direction
    }

    pub fn is_moving(&self) -> bool {
        self.is_moving
    }

    pub fn is_boosted(&self) -> bool {
        self.is_boosted
    }

    pub fn boost_remaining(&self) -> f32 {
        self.boost_remaining
    }

    pub fn speed_percent(&self) -> f32 {
        self.speed / self.max_speed
    }
}

impl Default for MovementComponent {
    fn default() -> Self {
        Self::new(DEFAULT_SPEED)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: Vec2, b: Vec2) -> bool {
        a.distance(b) < 1e-4
    }

    #[test]
    fn test_move_in_direction_integrates() {
        let mut movement = MovementComponent::new(100.0);

        let pos = movement.move_in_direction(Vec2::new(1.0, 0.0), 0.1, Vec2::ZERO);
        assert!(approx(pos, Vec2::new(10.0, 0.0)));
        assert!(movement.is_moving());
        assert!(approx(movement.velocity(), Vec2::new(100.0, 0.0)));
    }

    #[test]
    fn test_diagonal_is_normalized() {
        let mut movement = MovementComponent::new(100.0);

        let pos = movement.move_in_direction(Vec2::new(1.0, 1.0), 1.0, Vec2::ZERO);
        assert!((pos.length() - 100.0).abs() < 1e-3);
    }

    #[test]
    fn test_zero_direction_stays_put() {
        let mut movement = MovementComponent::new(100.0);
        movement.move_in_direction(Vec2::new(0.0, 1.0), 0.1, Vec2::ZERO);

        let start = Vec2::new(42.0, 7.0);
        let pos = movement.move_in_direction(Vec2::ZERO, 0.1, start);
        assert_eq!(pos, start);
        assert!(!movement.is_moving());
        assert_eq!(movement.velocity(), Vec2::ZERO);

        // Below the epsilon counts as zero too
        let pos = movement.move_in_direction(Vec2::new(0.05, 0.05), 0.1, start);
        assert_eq!(pos, start);
        assert!(!movement.is_moving());
    }

    #[test]
    fn test_move_toward_steps_closer() {
        let mut movement = MovementComponent::new(50.0);

        let pos = movement.move_toward(Vec2::ZERO, Vec2::new(100.0, 0.0), 0.5);
        assert!(approx(pos, Vec2::new(25.0, 0.0)));
        assert!(movement.is_moving());
        assert!(approx(movement.move_direction(), Vec2::new(1.0, 0.0)));
    }

    #[test]
    fn test_move_toward_at_target_stops() {
        let mut movement = MovementComponent::new(50.0);
        let here = Vec2::new(3.0, 4.0);

        let pos = movement.move_toward(here, here, 0.1);
        assert_eq!(pos, here);
        assert!(!movement.is_moving());
        assert_eq!(movement.velocity(), Vec2::ZERO);

        // Within the arrival distance also counts
        let pos = movement.move_toward(here, here + Vec2::new(0.5, 0.0), 0.1);
        assert_eq!(pos, here);
        assert!(!movement.is_moving());
    }

    #[test]
    fn test_move_toward_overshoot_snaps_to_target() {
        let mut movement = MovementComponent::new(100.0);
        let target = Vec2::new(10.0, 0.0);

        // One second at 100 u/s would land at x=100, well past the target
        let pos = movement.move_toward(Vec2::ZERO, target, 1.0);
        assert_eq!(pos, target);
        assert!(!movement.is_moving());
        assert_eq!(movement.velocity(), Vec2::ZERO);
    }

    #[test]
    fn test_stop_is_idempotent() {
        let mut movement = MovementComponent::new(100.0);
        movement.move_in_direction(Vec2::new(1.0, 0.0), 0.1, Vec2::ZERO);

        movement.stop();
        let once = movement.clone();
        movement.stop();

        assert_eq!(movement, once);
        assert_eq!(movement.velocity(), Vec2::ZERO);
        assert_eq!(movement.move_direction(), Vec2::ZERO);
        assert!(!movement.is_moving());
    }

    #[test]
    fn test_boost_capped_by_max_speed() {
        let mut movement = MovementComponent::new(100.0);

        // Default max equals the resting speed, so a boost has no headroom
        movement.temporary_boost(2.0, 1.0);
        assert_eq!(movement.speed(), 100.0);
        assert!(movement.is_boosted());

        let mut movement = MovementComponent::new(100.0).with_max_speed(150.0);
        movement.temporary_boost(2.0, 1.0);
        assert_eq!(movement.speed(), 150.0);
    }

    #[test]
    fn test_boost_expires_and_restores() {
        let mut movement = MovementComponent::new(100.0).with_max_speed(500.0);
        movement.temporary_boost(2.0, 1.0);
        assert_eq!(movement.speed(), 200.0);

        movement.update(0.6);
        assert!(movement.is_boosted());
        assert_eq!(movement.speed(), 200.0);

        movement.update(0.6);
        assert!(!movement.is_boosted());
        assert_eq!(movement.speed(), 100.0);
    }

    #[test]
    fn test_boost_refresh_does_not_compound() {
        let mut movement = MovementComponent::new(100.0).with_max_speed(1000.0);
        movement.temporary_boost(2.0, 1.0);
        movement.update(0.5);
        movement.temporary_boost(3.0, 1.0);

        assert_eq!(movement.speed(), 300.0);
        assert_eq!(movement.boost_remaining(), 1.0);

        movement.update(1.5);
        assert_eq!(movement.speed(), 100.0);
    }

    #[test]
    fn test_boost_timer_ignores_invalid_delta() {
        let mut movement = MovementComponent::new(100.0).with_max_speed(500.0);
        movement.temporary_boost(2.0, 1.0);

        movement.update(f32::NAN);
        movement.update(-5.0);
        assert_eq!(movement.boost_remaining(), 1.0);
        assert_eq!(movement.speed(), 200.0);

        // Still expires on schedule afterwards
        movement.update(1.0);
        assert!(!movement.is_boosted());
        assert_eq!(movement.speed(), 100.0);
    }

    #[test]
    fn test_invalid_boost_rejected() {
        let mut movement = MovementComponent::new(100.0).with_max_speed(500.0);
        movement.temporary_boost(0.0, 1.0);
        movement.temporary_boost(2.0, -1.0);
        assert!(!movement.is_boosted());
        assert_eq!(movement.speed(), 100.0);
    }

    #[test]
    fn test_speed_setters_reject_non_positive() {
        let mut movement = MovementComponent::new(100.0).with_max_speed(300.0);

        movement.set_speed(0.0);
        movement.set_speed(-50.0);
        assert_eq!(movement.speed(), 100.0);

        movement.set_speed(1000.0);
        assert_eq!(movement.speed(), 300.0);

        movement.set_max_speed(-1.0);
        assert_eq!(movement.max_speed(), 300.0);

        movement.set_max_speed(50.0);
        assert_eq!(movement.speed(), 50.0);
        assert_eq!(movement.speed_percent(), 1.0);
    }

    #[test]
    fn test_new_rejects_non_positive_speed() {
        let movement = MovementComponent::new(0.0);
        assert_eq!(movement.speed(), DEFAULT_SPEED);
        assert_eq!(movement.max_speed(), DEFAULT_SPEED);
    }
}
