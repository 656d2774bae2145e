//! Vertical motion: jump impulse and gravity.

use crate::config::MovementConfig;

/// Gravity acceleration in meters per second squared (negative = down)
pub const GRAVITY: f32 = -9.81;

/// Jump apex height in meters
pub const JUMP_HEIGHT: f32 = 1.5;

/// Vertical velocity held while grounded, keeps the body seated
pub const GROUNDED_VELOCITY: f32 = -2.0;

/// Integrates vertical velocity across ticks.
#[derive(Debug, Clone)]
pub struct VerticalIntegrator {
    gravity: f32,
    jump_height: f32,
    grounded_velocity: f32,
    velocity: f32,
}

impl VerticalIntegrator {
    pub fn new(config: &MovementConfig) -> Self {
        Self {
            gravity: config.gravity,
            jump_height: config.jump_height,
            grounded_velocity: config.grounded_velocity,
            velocity: 0.0,
        }
    }

    #[inline]
    pub fn velocity(&self) -> f32 {
        self.velocity
    }

    /// Launch speed that reaches `jump_height` under constant gravity.
    pub fn jump_velocity(&self) -> f32 {
        (self.jump_height * -2.0 * self.gravity).sqrt()
    }

    /// Seat on the ground if grounded and not rising.
    ///
    /// Runs before the jump so a jump this tick overrides it.
    pub fn settle(&mut self, grounded: bool) {
        if grounded && self.velocity < 0.0 {
            self.velocity = self.grounded_velocity;
        }
    }

    /// Apply the jump impulse.
    pub fn jump(&mut self) {
        self.velocity = self.jump_velocity();
    }

    /// Accumulate gravity for one tick unless seated on the ground.
    pub fn integrate(&mut self, dt: f32, grounded: bool) -> f32 {
        if !(grounded && self.velocity <= self.grounded_velocity) {
            self.velocity += self.gravity * dt;
        }
        self.velocity
    }

    /// Zero vertical velocity (teleport, respawn).
    pub fn reset(&mut self) {
        self.velocity = 0.0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DT: f32 = 0.016;

    fn integrator() -> VerticalIntegrator {
        VerticalIntegrator::new(&MovementConfig::default())
    }

    #[test]
    fn test_jump_velocity() {
        let v = integrator();
        // sqrt(1.5 * 2 * 9.81)
        assert!((v.jump_velocity() - 5.4249).abs() < 0.001);
    }

    #[test]
    fn test_reset_clears_velocity() {
        let mut v = integrator();
        v.jump();
        v.integrate(DT, false);
        v.reset();
        assert_eq!(v.velocity(), 0.0);
    }

    #[test]
    fn test_grounded_clamp() {
        let mut v = integrator();
        v.integrate(DT, false);
        assert!(v.velocity() < 0.0);

        v.settle(true);
        assert_eq!(v.velocity(), GROUNDED_VELOCITY);

        // Stays seated while grounded
        for _ in 0..100 {
            v.settle(true);
            v.integrate(DT, true);
        }
        assert_eq!(v.velocity(), GROUNDED_VELOCITY);
    }

    #[test]
    fn test_falls_when_airborne() {
        let mut v = integrator();
        for _ in 0..10 {
            v.settle(false);
            v.integrate(DT, false);
        }
        assert!((v.velocity() - GRAVITY * DT * 10.0).abs() < 0.001);
    }

    #[test]
    fn test_jump_reaches_apex() {
        let mut v = integrator();
        v.jump();
        let mut height = 0.0;
        let mut apex: f32 = 0.0;
        for _ in 0..1000 {
            let vy = v.integrate(0.001, false);
            height += vy * 0.001;
            apex = apex.max(height);
        }
        assert!((apex - JUMP_HEIGHT).abs() < 0.02);
    }

    #[test]
    fn test_jump_overrides_settle() {
        let mut v = integrator();
        v.settle(true);
        v.jump();
        let vy = v.integrate(DT, true);
        assert!(vy > 0.0);
    }
}
