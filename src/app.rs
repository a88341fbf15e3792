/*
 * Application Module
 *
 * This module defines the main application model and the per-frame logic for
 * the fish simulation. Each frame, idle fish pick a random point in the
 * window to swim toward, every fish accumulates avoidance against a snapshot
 * of the previous frame's school, and then integrates its motion and drags
 * its chain along.
 */

use log::info;
use nannou::prelude::*;
use nannou_egui::Egui;
use rand::Rng;

use crate::config::FishConfig;
use crate::debug::DebugInfo;
use crate::fish::Fish;
use crate::input;
use crate::params::SimulationParams;
use crate::renderer;
use crate::ui;

// Per-fish avoidance weighting across the school
const AVOIDANCE_SCALE_MIN: f32 = 3.0;
const AVOIDANCE_SCALE_MAX: f32 = 10.0;

// Random size spread added on top of the configured fish size
const SIZE_JITTER: f32 = 10.0;

// Body length relative to the configured size
const LENGTH_FACTOR: f32 = 3.5;

// Main model for the application
pub struct Model {
    pub fish: Vec<Fish>,
    pub params: SimulationParams,
    pub egui: Egui,
    pub debug_info: DebugInfo,
    pub window_width: f32,
    pub window_height: f32,
}

// Initialize the model
pub fn model(app: &App) -> Model {
    // Get the primary monitor's dimensions
    let monitor = app.primary_monitor().expect("Failed to get primary monitor");
    let monitor_size = monitor.size();

    // Calculate window size based on monitor size (80% of monitor size)
    let window_width = monitor_size.width as f32 * 0.8;
    let window_height = monitor_size.height as f32 * 0.8;

    // Create the main window with dynamic size
    let window_id = app
        .new_window()
        .title("Articulated Fish Simulation")
        .size(window_width as u32, window_height as u32)
        .view(renderer::view)
        .mouse_moved(input::mouse_moved)
        .resized(input::resized)
        .raw_event(input::raw_window_event)
        .build()
        .unwrap();

    // Get the window
    let window = app.window(window_id).unwrap();

    // Create the UI
    let egui = Egui::from_window(&window);

    // Create simulation parameters
    let params = SimulationParams::default();

    // Create the school
    let fish = spawn_school(&params, window_width, window_height);
    info!(
        "spawned {} fish in a {:.0}x{:.0} window",
        fish.len(),
        window_width,
        window_height
    );

    Model {
        fish,
        params,
        egui,
        debug_info: DebugInfo::default(),
        window_width,
        window_height,
    }
}

// Update the model
pub fn update(app: &App, model: &mut Model, update: Update) {
    // Update debug info
    model.debug_info.fps = app.fps();
    model.debug_info.frame_time = update.since_last;

    // Update UI and check whether the school must be respawned
    let (should_respawn, params_changed) =
        ui::update_ui(&mut model.egui, &mut model.params, &model.debug_info);

    if should_respawn || params_changed {
        reset_school(model);
    }

    // Wiggle factor applies to live fish without a respawn
    for fish in &mut model.fish {
        fish.wiggle_factor = model.params.wiggle_factor;
    }

    // Only update fish if simulation is not paused
    if !model.params.pause_simulation {
        let mut rng = rand::thread_rng();
        let half_width = model.window_width / 2.0;
        let half_height = model.window_height / 2.0;

        // Clone so avoidance reads the previous frame's positions
        let school = model.fish.clone();
        let count = model.fish.len();

        for (i, fish) in model.fish.iter_mut().enumerate() {
            // Idle fish pick a random point in the window to swim toward
            if fish.target.is_none() {
                fish.set_target(pt2(
                    rng.gen_range(-half_width..half_width),
                    rng.gen_range(-half_height..half_height),
                ));
            }

            fish.avoid(
                &school,
                spread(i, count, AVOIDANCE_SCALE_MIN, AVOIDANCE_SCALE_MAX),
            );
            fish.update();
        }
    }
}

// Respawn the school from the current parameters
pub fn reset_school(model: &mut Model) {
    model.fish = spawn_school(&model.params, model.window_width, model.window_height);
    info!("respawned school with {} fish", model.fish.len());
}

// Build a school of fish with randomized positions and sizes. Movement
// limits are spread across the school so the fish do not move in lockstep.
fn spawn_school(params: &SimulationParams, window_width: f32, window_height: f32) -> Vec<Fish> {
    let mut rng = rand::thread_rng();
    let count = params.num_fish;

    (0..count)
        .map(|i| {
            let size = params.fish_size + rng.gen_range(0.0..SIZE_JITTER);

            let config = FishConfig {
                position: pt2(
                    rng.gen_range(-window_width / 2.0..window_width / 2.0),
                    rng.gen_range(-window_height / 2.0..window_height / 2.0),
                ),
                length: size * LENGTH_FACTOR,
                width: size,
                num_segments: params.num_segments,
                max_movement_force: spread(i, count, 0.1, 0.2),
                max_movement_speed: spread(i, count, 2.0, 3.0),
                max_avoidance_force: 10.0,
                max_avoidance_speed: spread(i, count, 8.0, 10.0),
                wiggle_factor: params.wiggle_factor,
            };

            Fish::new(config).expect("UI slider ranges keep the fish configuration valid")
        })
        .collect()
}

// Interpolate a per-fish value across the school
fn spread(i: usize, count: usize, min: f32, max: f32) -> f32 {
    if count > 1 {
        map_range(i as f32, 0.0, (count - 1) as f32, min, max)
    } else {
        max
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spread_interpolates_across_the_school() {
        assert_eq!(spread(0, 3, 2.0, 3.0), 2.0);
        assert_eq!(spread(2, 3, 2.0, 3.0), 3.0);
    }

    #[test]
    fn spread_handles_a_single_fish() {
        let value = spread(0, 1, 2.0, 3.0);
        assert!(value.is_finite());
        assert_eq!(value, 3.0);
    }

    #[test]
    fn spawned_school_matches_parameters() {
        let params = SimulationParams::default();
        let school = spawn_school(&params, 800.0, 600.0);

        assert_eq!(school.len(), params.num_fish);
        for fish in &school {
            assert_eq!(fish.chain.len(), params.num_segments);
            assert!(fish.position.x.abs() <= 400.0);
            assert!(fish.position.y.abs() <= 300.0);
        }
    }
}
