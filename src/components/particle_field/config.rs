//! Tunable parameters for the particle field.
//!
//! The device heuristics (mobile width cutoff, low-end core count) are
//! configuration, not hard-coded literals, so they can be tuned without
//! touching the animation state machine. A page can override any field by
//! embedding JSON in a `<script id="motion-config">` element; see
//! [`crate::load_field_config`].

use serde::Deserialize;

/// Particle field configuration, with production defaults.
#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct FieldConfig {
	/// Viewports narrower than this are treated as mobile devices.
	pub mobile_width_px: f64,
	/// At or below this many logical cores, the device counts as low-end.
	pub low_end_cores: u32,
	/// Particle count on mobile viewports.
	pub mobile_count: usize,
	/// Particle count on low-end devices.
	pub low_end_count: usize,
	/// Particle count everywhere else.
	pub full_count: usize,
	/// Grid line spacing in pixels.
	pub grid_spacing: f64,
	/// Target frame rate for the render loop.
	pub target_fps: f64,
	/// Fraction of the canvas that must be visible for the loop to run.
	pub visibility_threshold: f64,
}

impl Default for FieldConfig {
	fn default() -> Self {
		Self {
			mobile_width_px: 768.0,
			low_end_cores: 4,
			mobile_count: 30,
			low_end_count: 50,
			full_count: 100,
			grid_spacing: 30.0,
			target_fps: 30.0,
			visibility_threshold: 0.1,
		}
	}
}

impl FieldConfig {
	/// Minimum elapsed time between drawn frames, in milliseconds.
	pub fn frame_interval_ms(&self) -> f64 {
		1000.0 / self.target_fps
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn thirty_fps_interval() {
		let interval = FieldConfig::default().frame_interval_ms();
		assert!((interval - 1000.0 / 30.0).abs() < 1e-9);
	}

	#[test]
	fn partial_json_override_keeps_defaults() {
		let config: FieldConfig = serde_json::from_str(r#"{ "full_count": 64 }"#).unwrap();
		assert_eq!(config.full_count, 64);
		assert_eq!(config.mobile_count, 30);
		assert_eq!(config.mobile_width_px, 768.0);
	}
}
