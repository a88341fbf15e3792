/*
 * Renderer Module
 *
 * This module handles the rendering of the fish simulation. It fills the
 * background, scatters short glitch-noise strokes behind the school, and
 * strokes every fish chain as a run of tapering line segments.
 */

use nannou::prelude::*;
use rand::Rng;
use std::f32::consts::TAU;

use crate::app::Model;
use crate::ui;

// Length range of the background noise strokes
const NOISE_LENGTH_MIN: f32 = 2.0;
const NOISE_LENGTH_MAX: f32 = 7.0;

// Render the model
pub fn view(app: &App, model: &Model, frame: Frame) {
    // Begin drawing
    let draw = app.draw();

    // Clear the background
    draw.background().color(BLACK);

    let window_rect = app.window_rect();

    // Scatter short noise strokes across the background
    let mut rng = rand::thread_rng();
    for _ in 0..model.params.num_background_dots {
        let start = pt2(
            rng.gen_range(window_rect.left()..window_rect.right()),
            rng.gen_range(window_rect.bottom()..window_rect.top()),
        );
        let theta = rng.gen_range(0.0..TAU);
        let length = rng.gen_range(NOISE_LENGTH_MIN..NOISE_LENGTH_MAX);
        let end = start + vec2(theta.cos(), theta.sin()) * length;

        draw.line()
            .start(start)
            .end(end)
            .weight(rng.gen_range(0.1..2.0))
            .color(hsva(
                1.0,
                rng.gen_range(0.95..1.0),
                rng.gen_range(0.9..0.95),
                rng.gen_range(0.75..0.85),
            ));
    }

    // Stroke each fish chain head to tail
    for fish in &model.fish {
        for segment in fish.chain.segments() {
            draw.line()
                .start(segment.anchor_start)
                .end(segment.anchor_end)
                .weight(segment.width)
                .color(segment.color);
        }
    }

    // Draw debug visualization if enabled
    if model.params.show_debug {
        if let Some(first_fish) = model.fish.first() {
            // Separation radius
            draw.ellipse()
                .xy(first_fish.position)
                .radius(first_fish.width)
                .no_fill()
                .stroke(RED)
                .stroke_weight(1.0);

            // Velocity vector
            draw.arrow()
                .start(first_fish.position)
                .end(first_fish.position + first_fish.velocity * 5.0)
                .color(YELLOW)
                .stroke_weight(2.0);

            // Current target
            if let Some(target) = first_fish.target {
                draw.ellipse().xy(target).radius(4.0).color(GREEN);
            }
        }

        ui::draw_debug_info(&draw, &model.debug_info, window_rect, model.fish.len());
    }

    // Finish drawing
    draw.to_frame(app, &frame).unwrap();

    // Draw the egui UI
    model.egui.draw_to_frame(&frame).unwrap();
}
