/*
 * Fish Module
 *
 * This module defines the Fish struct and its steering behavior. Each fish
 * accumulates steering forces before integrating:
 * 1. Seek: arrival steering toward the current target point
 * 2. Avoidance: keep clear of neighboring fish
 * 3. Wiggle: sinusoidal perturbation that makes the body swim
 *
 * After integration the fish drags its segment chain behind it by asking the
 * tail segment to look at the new position.
 */

use nannou::prelude::*;
use rand::Rng;
use std::f32::consts::TAU;

use crate::chain::Chain;
use crate::config::{ConfigError, FishConfig};

#[derive(Clone)]
pub struct Fish {
    pub position: Point2,
    pub velocity: Vec2,
    pub acceleration: Vec2,
    pub target: Option<Point2>,
    pub length: f32,
    pub width: f32,
    pub max_movement_force: f32,
    pub max_movement_speed: f32,
    pub max_avoidance_force: f32,
    pub max_avoidance_speed: f32,
    pub wiggle_factor: f32,
    pub wiggle_phase: f32,
    pub chain: Chain,
}

impl Fish {
    // Validate the configuration, then build the fish and its chain once.
    // The chain is sized from the body length and width and never rebuilt.
    pub fn new(config: FishConfig) -> Result<Self, ConfigError> {
        config.validate()?;

        let chain = Chain::new(config.num_segments, config.length, config.width);

        Ok(Self {
            position: config.position,
            velocity: Vec2::ZERO,
            acceleration: Vec2::ZERO,
            target: None,
            length: config.length,
            width: config.width,
            max_movement_force: config.max_movement_force,
            max_movement_speed: config.max_movement_speed,
            max_avoidance_force: config.max_avoidance_force,
            max_avoidance_speed: config.max_avoidance_speed,
            wiggle_factor: config.wiggle_factor,
            wiggle_phase: 0.0,
            chain,
        })
    }

    // Set the movement target unconditionally
    pub fn set_target(&mut self, point: Point2) {
        self.target = Some(point);
    }

    // Apply a force to the fish
    pub fn apply_force(&mut self, force: Vec2) {
        self.acceleration += force;
    }

    // Arrival steering toward the current target. Desired speed is the
    // maximum beyond one body length and tapers linearly to zero inside it.
    // The target is cleared once the fish is within half its own length.
    pub fn seek(&mut self) {
        if let Some(target) = self.target {
            let offset = target - self.position;
            let distance = offset.length();

            let desired_speed = if distance < self.length {
                if distance < self.length / 2.0 {
                    self.target = None;
                }

                map_range(distance, 0.0, self.length, 0.0, self.max_movement_speed)
            } else {
                self.max_movement_speed
            };

            let desired = if distance > 0.0 {
                offset * (desired_speed / distance)
            } else {
                Vec2::ZERO
            };

            // Implement Reynolds: Steering = Desired - Velocity
            let mut force = desired - self.velocity;
            if force.length() > self.max_movement_force {
                force = force.normalize() * self.max_movement_force;
            }

            self.apply_force(force);
        }
    }

    // Separation from neighboring fish. A neighbor triggers when it is closer
    // than the mean of the two body widths; away-vectors are weighted by
    // inverse distance, averaged, scaled to the avoidance speed and clamped
    // to the avoidance force before the caller-supplied scale is applied.
    pub fn avoid(&mut self, neighbors: &[Fish], scale: f32) {
        let mut steering = Vec2::ZERO;
        let mut count = 0;

        for other in neighbors {
            let d = self.position.distance(other.position);
            let radius = (self.width + other.width) / 2.0;

            if d > 0.0 && d < radius {
                // Vector pointing away from the neighbor, weighted by distance
                let diff = (self.position - other.position).normalize() / d;
                steering += diff;
                count += 1;
            }
        }

        if count > 0 {
            steering /= count as f32;

            if steering.length() > 0.0 {
                // Implement Reynolds: Steering = Desired - Velocity
                steering = steering.normalize() * self.max_avoidance_speed - self.velocity;

                if steering.length() > self.max_avoidance_force {
                    steering = steering.normalize() * self.max_avoidance_force;
                }
            }
        }

        self.apply_force(steering * scale);
    }

    // Sinusoidal swim oscillation, only active while a target is set. The
    // force amplitude scales with the current speed ratio so a slow fish
    // barely wiggles. The phase advances by a pseudo-random increment and
    // wraps past a full cycle back to zero.
    pub fn wiggle(&mut self) {
        if let Some(target) = self.target {
            let offset = target - self.position;
            let angle =
                offset.y.atan2(offset.x) + (self.wiggle_phase.sin() - 0.5) * self.wiggle_factor;

            let force =
                vec2(angle.cos(), angle.sin()) * (self.velocity.length() / self.max_movement_speed);
            self.apply_force(force);

            let mut rng = rand::thread_rng();
            self.wiggle_phase += rng.gen_range(0.0..self.width / 2.0) / self.width;

            if self.wiggle_phase > TAU {
                self.wiggle_phase = 0.0;
            }
        }
    }

    // Integrate accumulated forces into velocity and position
    pub fn integrate(&mut self) {
        // Update velocity
        self.velocity += self.acceleration;

        // Limit speed
        if self.velocity.length() > self.max_movement_speed {
            self.velocity = self.velocity.normalize() * self.max_movement_speed;
        }

        // Update position
        self.position += self.velocity;

        // Reset acceleration
        self.acceleration = Vec2::ZERO;
    }

    // Run one frame: accumulate steering forces, integrate, then drag the
    // chain behind the new position.
    pub fn update(&mut self) {
        if self.target.is_some() {
            self.seek();
        }

        self.wiggle();
        self.integrate();

        self.chain.look_at(self.position);
        self.chain.update();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn test_fish() -> Fish {
        Fish::new(FishConfig::default()).unwrap()
    }

    #[test]
    fn velocity_never_exceeds_max_speed() {
        let mut fish = test_fish();

        fish.apply_force(vec2(1000.0, -500.0));
        fish.integrate();
        assert!(fish.velocity.length() <= fish.max_movement_speed + 1e-4);

        fish.apply_force(vec2(-0.01, 0.02));
        fish.integrate();
        assert!(fish.velocity.length() <= fish.max_movement_speed + 1e-4);
    }

    #[test]
    fn integrate_resets_acceleration() {
        let mut fish = test_fish();
        fish.apply_force(vec2(1.0, 2.0));
        fish.integrate();

        assert_eq!(fish.acceleration, Vec2::ZERO);
    }

    #[test]
    fn arrival_clears_target() {
        let mut fish = test_fish();
        fish.set_target(pt2(fish.length / 2.0 - 0.001, 0.0));
        fish.seek();

        assert!(fish.target.is_none());
    }

    #[test]
    fn seek_keeps_distant_target() {
        let mut fish = test_fish();
        fish.set_target(pt2(500.0, 0.0));
        fish.seek();

        assert!(fish.target.is_some());
        assert!(fish.acceleration.x > 0.0);
    }

    #[test]
    fn seek_force_clamped_to_max_movement_force() {
        let mut fish = test_fish();
        fish.set_target(pt2(500.0, 0.0));
        fish.seek();

        assert!(fish.acceleration.length() <= fish.max_movement_force + 1e-4);
    }

    #[test]
    fn avoidance_ignores_distant_neighbors() {
        let mut fish = test_fish();
        let mut other = test_fish();
        other.position = pt2(100.0, 0.0);

        fish.avoid(&[other], 1.0);

        assert_eq!(fish.acceleration, Vec2::ZERO);
    }

    #[test]
    fn avoidance_pushes_away_from_close_neighbors() {
        let mut fish = test_fish();
        let mut other = test_fish();
        other.position = pt2(10.0, 0.0);

        fish.avoid(&[other], 1.0);

        assert!(fish.acceleration.x < 0.0);
    }

    #[test]
    fn avoidance_force_respects_limit_before_scaling() {
        let mut fish = test_fish();
        let mut other = test_fish();
        other.position = pt2(1.0, 0.0);

        fish.avoid(&[other], 1.0);

        assert!(fish.acceleration.length() <= fish.max_avoidance_force + 1e-4);
    }

    #[test]
    fn avoidance_skips_self() {
        let mut fish = test_fish();
        let copy = fish.clone();

        // A neighbor at zero distance is the fish itself
        fish.avoid(&[copy], 1.0);

        assert_eq!(fish.acceleration, Vec2::ZERO);
    }

    #[test]
    fn wiggle_inert_without_target() {
        let mut fish = test_fish();
        fish.wiggle();

        assert_eq!(fish.acceleration, Vec2::ZERO);
        assert_eq!(fish.wiggle_phase, 0.0);
    }

    #[test]
    fn wiggle_phase_wraps_past_full_cycle() {
        let mut fish = test_fish();
        fish.set_target(pt2(100.0, 0.0));
        fish.wiggle_phase = TAU + 1.0;

        fish.wiggle();

        assert_eq!(fish.wiggle_phase, 0.0);
    }

    #[test]
    fn update_moves_toward_target() {
        let mut fish = Fish::new(FishConfig {
            max_movement_speed: 3.0,
            ..FishConfig::default()
        })
        .unwrap();

        fish.set_target(pt2(100.0, 0.0));
        fish.update();

        assert!(fish.velocity.x > 0.0);
        assert!(fish.position.x > 0.0);
    }

    #[test]
    fn update_drags_chain_behind_position() {
        let mut fish = test_fish();
        fish.set_target(pt2(100.0, 0.0));

        for _ in 0..10 {
            fish.update();
        }

        let tail = fish.chain.last_segment().unwrap();
        assert_relative_eq!(tail.anchor_end.x, fish.position.x, epsilon = 1e-3);
        assert_relative_eq!(tail.anchor_end.y, fish.position.y, epsilon = 1e-3);
    }

    #[test]
    fn chain_lengths_hold_after_many_updates() {
        let mut fish = test_fish();
        let segment_length = fish.length / fish.chain.len() as f32;
        fish.set_target(pt2(-200.0, 150.0));

        for _ in 0..50 {
            fish.update();
        }

        for segment in fish.chain.segments() {
            assert_relative_eq!(
                segment.anchor_start.distance(segment.anchor_end),
                segment_length,
                epsilon = 1e-2
            );
        }
    }

    #[test]
    fn rejects_malformed_config() {
        let config = FishConfig {
            length: 0.0,
            ..FishConfig::default()
        };

        assert!(Fish::new(config).is_err());
    }
}
