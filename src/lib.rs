//! Library exports for the sketchboard drawing engine.
//!
//! Exposes the drawing surface, action history, and input state machine so
//! front ends (and the bundled demo binary) can drive a full editing session
//! through one [`input::CanvasState`] instance.

pub mod config;
pub mod draw;
pub mod export;
pub mod input;
pub mod util;

pub use config::Config;
