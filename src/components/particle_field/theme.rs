//! Fixed colors for the particle canvas.

/// RGBA color representation.
#[derive(Clone, Copy, Debug)]
pub struct Color {
	pub r: u8,
	pub g: u8,
	pub b: u8,
	pub a: f64,
}

impl Color {
	pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
		Self { r, g, b, a: 1.0 }
	}

	pub const fn rgba(r: u8, g: u8, b: u8, a: f64) -> Self {
		Self { r, g, b, a }
	}

	pub fn with_alpha(self, a: f64) -> Self {
		Self { a, ..self }
	}

	pub fn to_css(self) -> String {
		if (self.a - 1.0).abs() < 0.001 {
			format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
		} else {
			format!("rgba({}, {}, {}, {})", self.r, self.g, self.b, self.a)
		}
	}
}

/// Low-opacity stroke for the blueprint grid lines.
pub const GRID_LINE: Color = Color::rgba(0, 87, 146, 0.1);

/// Base particle hue; per-particle alpha is applied at draw time.
pub const PARTICLE_BASE: Color = Color::rgb(97, 218, 251);

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn css_serialization() {
		assert_eq!(Color::rgb(97, 218, 251).to_css(), "#61dafb");
		assert_eq!(
			Color::rgb(97, 218, 251).with_alpha(0.25).to_css(),
			"rgba(97, 218, 251, 0.25)"
		);
	}
}
