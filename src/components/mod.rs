//! UI building blocks: scroll-driven hooks and the particle canvas.

pub mod motion;
pub mod particle_field;
