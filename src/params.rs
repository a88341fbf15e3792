/*
 * Simulation Parameters Module
 *
 * This module defines the SimulationParams struct that contains all the
 * adjustable parameters for the fish simulation. These parameters can be
 * modified through the UI. It also provides methods for parameter change
 * detection so the application knows when the school must be respawned.
 */

use crate::{FISH_SIZE, NUM_BACKGROUND_DOTS};

// Parameters for the simulation that can be adjusted via UI
pub struct SimulationParams {
    pub num_fish: usize,
    pub fish_size: f32,
    pub num_segments: usize,
    pub wiggle_factor: f32,
    pub num_background_dots: usize,
    pub show_debug: bool,
    pub pause_simulation: bool,

    // Internal state for tracking changes
    previous_values: Option<ParamSnapshot>,
}

// A snapshot of the parameters that are baked into a fish at construction
struct ParamSnapshot {
    num_fish: usize,
    fish_size: f32,
    num_segments: usize,
}

impl Default for SimulationParams {
    fn default() -> Self {
        Self {
            num_fish: 5,
            fish_size: FISH_SIZE,
            num_segments: 20,
            wiggle_factor: 0.5,
            num_background_dots: NUM_BACKGROUND_DOTS,
            show_debug: false,
            pause_simulation: false,
            // Initialize with no previous values
            previous_values: None,
        }
    }
}

impl SimulationParams {
    // Take a snapshot of current parameter values for change detection
    pub fn take_snapshot(&mut self) {
        self.previous_values = Some(ParamSnapshot {
            num_fish: self.num_fish,
            fish_size: self.fish_size,
            num_segments: self.num_segments,
        });
    }

    // Check whether any construction-time parameter changed since the last
    // snapshot, meaning the school must be respawned
    pub fn respawn_needed(&self) -> bool {
        match &self.previous_values {
            Some(prev) => {
                self.num_fish != prev.num_fish
                    || self.fish_size != prev.fish_size
                    || self.num_segments != prev.num_segments
            }
            None => false,
        }
    }

    // Get parameter ranges for UI sliders
    pub fn get_num_fish_range() -> std::ops::RangeInclusive<usize> {
        1..=30
    }

    pub fn get_fish_size_range() -> std::ops::RangeInclusive<f32> {
        20.0..=100.0
    }

    pub fn get_num_segments_range() -> std::ops::RangeInclusive<usize> {
        2..=50
    }

    pub fn get_wiggle_factor_range() -> std::ops::RangeInclusive<f32> {
        0.0..=2.0
    }

    pub fn get_background_dots_range() -> std::ops::RangeInclusive<usize> {
        0..=500
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_respawn_without_snapshot() {
        let params = SimulationParams::default();
        assert!(!params.respawn_needed());
    }

    #[test]
    fn respawn_when_fish_count_changes() {
        let mut params = SimulationParams::default();
        params.take_snapshot();
        params.num_fish += 1;

        assert!(params.respawn_needed());
    }

    #[test]
    fn no_respawn_for_live_parameters() {
        let mut params = SimulationParams::default();
        params.take_snapshot();
        params.wiggle_factor = 1.5;
        params.num_background_dots = 10;

        assert!(!params.respawn_needed());
    }
}
