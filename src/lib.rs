/*
 * Articulated Fish Simulation - Module Definitions
 *
 * This file defines the module structure for the fish simulation application.
 * It organizes the code into logical components for better maintainability.
 */

// Re-export key components for easier access
pub use chain::{Chain, Segment};
pub use config::{ConfigError, FishConfig};
pub use debug::DebugInfo;
pub use fish::Fish;
pub use params::SimulationParams;
pub use app::Model;

// Define modules
pub mod app;
pub mod chain;
pub mod config;
pub mod debug;
pub mod fish;
pub mod input;
pub mod params;
pub mod renderer;
pub mod ui;

// Constants
pub const FISH_SIZE: f32 = 50.0;
pub const NUM_BACKGROUND_DOTS: usize = 100;
