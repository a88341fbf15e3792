/*
 * Articulated Fish Simulation
 *
 * This application animates a school of articulated fish. Each fish steers
 * toward a target point, avoids its neighbors, and wiggles as it swims.
 * A fish body is rendered as a chain of tapering line segments whose tail
 * follows the head through inverse-kinematic look-at propagation.
 *
 * The simulation includes interactive sliders to adjust parameters in
 * real-time and displays debug information about the current state.
 */

use fishtank::app;

fn main() {
    env_logger::init();

    nannou::app(app::model)
        .update(app::update)
        .run();
}
