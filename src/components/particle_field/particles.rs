//! Particle simulation: spawning, drift, and boundary reflection.
//!
//! Pure state with no DOM types. The component layer samples the environment
//! into a [`DeviceProfile`], builds a [`ParticleField`], and steps it once
//! per drawn frame; drawing itself lives in `render`.

use std::f64::consts::{PI, TAU};

use super::config::FieldConfig;

/// A single drifting particle.
#[derive(Clone, Debug)]
pub struct Particle {
	pub x: f64,
	pub y: f64,
	pub radius: f64,
	pub speed: f64,
	/// Direction of travel in radians.
	pub angle: f64,
	/// Per-particle alpha applied to the shared base hue.
	pub alpha: f64,
}

impl Particle {
	/// Advance one frame and reflect off the field boundaries.
	///
	/// Crossing a horizontal bound flips the angle to `π − angle`, a vertical
	/// bound to `−angle`. The position itself is never clamped back inside;
	/// the particle renders out of bounds for that frame and its reflected
	/// drift carries it back in.
	pub fn advance(&mut self, width: f64, height: f64) {
		self.x += self.angle.cos() * self.speed;
		self.y += self.angle.sin() * self.speed;

		if self.x < 0.0 || self.x > width {
			self.angle = PI - self.angle;
		}
		if self.y < 0.0 || self.y > height {
			self.angle = -self.angle;
		}
	}
}

/// Environment sample feeding the particle-count heuristic.
#[derive(Clone, Copy, Debug)]
pub struct DeviceProfile {
	/// OS/browser reduced-motion preference.
	pub reduced_motion: bool,
	/// Viewport width in logical pixels.
	pub viewport_width: f64,
	/// Reported logical CPU core count.
	pub logical_cores: u32,
}

impl DeviceProfile {
	/// How many particles this device should animate.
	///
	/// Reduced motion wins over everything and means no motion at all; below
	/// that, narrow viewports and low core counts get smaller batches.
	pub fn particle_count(&self, config: &FieldConfig) -> usize {
		if self.reduced_motion {
			0
		} else if self.viewport_width < config.mobile_width_px {
			config.mobile_count
		} else if self.logical_cores <= config.low_end_cores {
			config.low_end_count
		} else {
			config.full_count
		}
	}
}

/// The full particle batch plus the bounds it drifts within.
#[derive(Clone, Debug)]
pub struct ParticleField {
	particles: Vec<Particle>,
	width: f64,
	height: f64,
}

impl ParticleField {
	/// Spawn `count` particles scattered across the given bounds.
	///
	/// Positions are uniform within bounds, radius in `[0.5, 2.5]`, speed in
	/// `[0.1, 0.6]`, angle in `[0, 2π)`, alpha in `[0.1, 0.5]`. Uses a
	/// deterministic index hash rather than a RNG so a given canvas size
	/// always produces the same field.
	pub fn new(count: usize, width: f64, height: f64) -> Self {
		let mut particles = Vec::with_capacity(count);

		for i in 0..count {
			let seed = i as f64;
			particles.push(Particle {
				x: Self::pseudo_random(seed * 1.1) * width,
				y: Self::pseudo_random(seed * 2.3) * height,
				radius: 0.5 + Self::pseudo_random(seed * 3.7) * 2.0,
				speed: 0.1 + Self::pseudo_random(seed * 4.1) * 0.5,
				angle: Self::pseudo_random(seed * 5.3) * TAU,
				alpha: 0.1 + Self::pseudo_random(seed * 6.7) * 0.4,
			});
		}

		Self {
			particles,
			width,
			height,
		}
	}

	/// Simple deterministic pseudo-random function in `[0, 1)`.
	fn pseudo_random(seed: f64) -> f64 {
		let x = (seed * 12.9898 + seed * 78.233).sin() * 43758.5453;
		x - x.floor()
	}

	/// Advance every particle one frame, in insertion order.
	pub fn step(&mut self) {
		for p in &mut self.particles {
			p.advance(self.width, self.height);
		}
	}

	/// Update the bounds after a window resize.
	///
	/// Positions are deliberately not renormalized; particles left outside
	/// the new bounds drift back in via boundary reflection.
	pub fn resize(&mut self, width: f64, height: f64) {
		self.width = width;
		self.height = height;
	}

	pub fn particles(&self) -> &[Particle] {
		&self.particles
	}

	pub fn width(&self) -> f64 {
		self.width
	}

	pub fn height(&self) -> f64 {
		self.height
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn profile(reduced_motion: bool, viewport_width: f64, logical_cores: u32) -> DeviceProfile {
		DeviceProfile {
			reduced_motion,
			viewport_width,
			logical_cores,
		}
	}

	#[test]
	fn particle_count_heuristics() {
		let config = FieldConfig::default();

		assert_eq!(profile(false, 500.0, 8).particle_count(&config), 30);
		assert_eq!(profile(false, 768.0, 4).particle_count(&config), 50);
		assert_eq!(profile(false, 1920.0, 2).particle_count(&config), 50);
		assert_eq!(profile(false, 768.0, 8).particle_count(&config), 100);
		assert_eq!(profile(false, 1920.0, 16).particle_count(&config), 100);
	}

	#[test]
	fn reduced_motion_means_no_particles() {
		let config = FieldConfig::default();
		assert_eq!(profile(true, 500.0, 8).particle_count(&config), 0);
		assert_eq!(profile(true, 1920.0, 16).particle_count(&config), 0);
	}

	#[test]
	fn spawn_respects_bounds_and_ranges() {
		let field = ParticleField::new(100, 1280.0, 720.0);
		assert_eq!(field.particles().len(), 100);

		for p in field.particles() {
			assert!((0.0..=1280.0).contains(&p.x));
			assert!((0.0..=720.0).contains(&p.y));
			assert!((0.5..=2.5).contains(&p.radius));
			assert!((0.1..=0.6).contains(&p.speed));
			assert!((0.0..TAU).contains(&p.angle));
			assert!((0.1..=0.5).contains(&p.alpha));
		}
	}

	#[test]
	fn spawn_is_deterministic() {
		let a = ParticleField::new(10, 800.0, 600.0);
		let b = ParticleField::new(10, 800.0, 600.0);
		for (pa, pb) in a.particles().iter().zip(b.particles()) {
			assert_eq!(pa.x, pb.x);
			assert_eq!(pa.angle, pb.angle);
		}
	}

	#[test]
	fn reflects_off_right_edge_without_clamping() {
		let mut p = Particle {
			x: 99.5,
			y: 50.0,
			radius: 1.0,
			speed: 1.0,
			angle: 0.0,
			alpha: 0.3,
		};
		p.advance(100.0, 100.0);

		// Past the edge this frame; angle mirrored for the next one.
		assert!(p.x > 100.0);
		assert!((p.angle - PI).abs() < 1e-12);

		let x_before = p.x;
		p.advance(100.0, 100.0);
		assert!(p.x < x_before);
	}

	#[test]
	fn reflects_off_vertical_edges() {
		let mut p = Particle {
			x: 50.0,
			y: 0.3,
			radius: 1.0,
			speed: 1.0,
			angle: -PI / 2.0,
			alpha: 0.3,
		};
		p.advance(100.0, 100.0);

		assert!(p.y < 0.0);
		assert!((p.angle - PI / 2.0).abs() < 1e-12);

		p.advance(100.0, 100.0);
		assert!(p.y > -0.1);
	}

	#[test]
	fn resize_keeps_positions() {
		let mut field = ParticleField::new(20, 1600.0, 900.0);
		let before: Vec<(f64, f64)> = field.particles().iter().map(|p| (p.x, p.y)).collect();

		field.resize(800.0, 450.0);

		assert_eq!(field.width(), 800.0);
		assert_eq!(field.height(), 450.0);
		for (p, (x, y)) in field.particles().iter().zip(before) {
			assert_eq!(p.x, x);
			assert_eq!(p.y, y);
		}
	}
}
