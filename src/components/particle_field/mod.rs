//! Ambient particle background rendered on a canvas.
//!
//! A fire-and-forget decorative layer: a blueprint grid plus a
//! device-capability-scaled set of drifting particles, animated via
//! `requestAnimationFrame` at a throttled 30 fps cadence. The loop only runs
//! while the canvas is actually in the viewport (an intersection observer
//! pauses it off-screen), honors the reduced-motion preference, and degrades
//! to nothing when the 2D context is unavailable.

mod component;
mod config;
mod particles;
mod render;
pub mod theme;

pub use component::ParticleBackground;
pub use config::FieldConfig;
pub use particles::{DeviceProfile, Particle, ParticleField};
