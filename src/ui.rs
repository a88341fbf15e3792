/*
 * UI Module
 *
 * This module contains functions for creating and updating the user interface
 * using nannou_egui. It provides controls for adjusting simulation parameters.
 * Parameter change detection is handled by the SimulationParams struct.
 */

use nannou_egui::{egui, Egui};

use crate::debug::DebugInfo;
use crate::params::SimulationParams;

// Update the UI and return whether the school should be respawned explicitly
// and whether a construction-time parameter changed
pub fn update_ui(
    egui: &mut Egui,
    params: &mut SimulationParams,
    debug_info: &DebugInfo,
) -> (bool, bool) {
    let mut should_respawn = false;

    // Take a snapshot of current parameter values for change detection
    params.take_snapshot();

    let ctx = egui.begin_frame();

    egui::Window::new("Simulation Controls")
        .default_pos([10.0, 10.0])
        .show(&ctx, |ui| {
            ui.collapsing("School", |ui| {
                ui.add(
                    egui::Slider::new(&mut params.num_fish, SimulationParams::get_num_fish_range())
                        .text("Number of Fish"),
                );
                ui.add(
                    egui::Slider::new(&mut params.fish_size, SimulationParams::get_fish_size_range())
                        .text("Fish Size"),
                );
                ui.add(
                    egui::Slider::new(
                        &mut params.num_segments,
                        SimulationParams::get_num_segments_range(),
                    )
                    .text("Tail Segments"),
                );

                if ui.button("Respawn School").clicked() {
                    should_respawn = true;
                }
            });

            ui.collapsing("Motion", |ui| {
                ui.add(
                    egui::Slider::new(
                        &mut params.wiggle_factor,
                        SimulationParams::get_wiggle_factor_range(),
                    )
                    .text("Wiggle Factor"),
                );
            });

            ui.collapsing("Background", |ui| {
                ui.add(
                    egui::Slider::new(
                        &mut params.num_background_dots,
                        SimulationParams::get_background_dots_range(),
                    )
                    .text("Noise Segments"),
                );
            });

            ui.separator();

            ui.label(format!("FPS: {:.1}", debug_info.fps));
            ui.label(format!(
                "Frame time: {:.2} ms",
                debug_info.frame_time.as_secs_f64() * 1000.0
            ));

            ui.checkbox(&mut params.show_debug, "Show Debug Info");
            ui.checkbox(&mut params.pause_simulation, "Pause Simulation");
        });

    (should_respawn, params.respawn_needed())
}

// Draw debug information on the screen
pub fn draw_debug_info(
    draw: &nannou::Draw,
    debug_info: &DebugInfo,
    window_rect: nannou::geom::Rect,
    fish_count: usize,
) {
    let margin = 20.0;
    let line_height = 20.0;

    let text_x = window_rect.left() + margin;
    let text_y = window_rect.top() - margin;

    // Draw each line of text
    let debug_texts = [
        format!("FPS: {:.1}", debug_info.fps),
        format!(
            "Frame time: {:.2} ms",
            debug_info.frame_time.as_secs_f64() * 1000.0
        ),
        format!("Fish: {}", fish_count),
        format!("Window: {:.0}x{:.0}", window_rect.w(), window_rect.h()),
    ];

    for (i, text) in debug_texts.iter().enumerate() {
        let y = text_y - (i as f32 * line_height);

        // Position the text with a fixed offset from the left edge
        draw.text(text)
            .x_y(text_x + 70.0, y)
            .color(nannou::color::WHITE)
            .font_size(14);
    }
}
