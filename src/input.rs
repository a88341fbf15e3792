/*
 * Input Module
 *
 * This module handles user input events for the fish simulation. Pointer
 * movement retargets every fish to the cursor, and window resizes update the
 * stored viewport dimensions without touching simulation state.
 */

use nannou::prelude::*;

use crate::app::Model;

// Mouse moved event handler: every fish chases the cursor
pub fn mouse_moved(_app: &App, model: &mut Model, pos: Point2) {
    for fish in &mut model.fish {
        fish.set_target(pos);
    }
}

// Window resized event handler. Only the stored viewport dimensions change;
// fish keep their positions and velocities.
pub fn resized(_app: &App, model: &mut Model, dim: Vec2) {
    model.window_width = dim.x;
    model.window_height = dim.y;
}

// Handle raw window events for egui
pub fn raw_window_event(_app: &App, model: &mut Model, event: &nannou::winit::event::WindowEvent) {
    model.egui.handle_raw_event(event);
}
