//! Canvas drawing for the particle field.
//!
//! One pass per frame, back to front: clear, blueprint grid, then particles.

use std::f64::consts::PI;

use web_sys::CanvasRenderingContext2d;

use super::config::FieldConfig;
use super::particles::ParticleField;
use super::theme;

/// Draws one complete frame of the field.
pub fn render(field: &ParticleField, ctx: &CanvasRenderingContext2d, config: &FieldConfig) {
	let (width, height) = (field.width(), field.height());

	ctx.clear_rect(0.0, 0.0, width, height);
	draw_grid(ctx, config, width, height);
	draw_particles(field, ctx);
}

fn draw_grid(ctx: &CanvasRenderingContext2d, config: &FieldConfig, width: f64, height: f64) {
	ctx.set_stroke_style_str(&theme::GRID_LINE.to_css());
	ctx.set_line_width(1.0);

	let mut x = 0.0;
	while x < width {
		ctx.begin_path();
		ctx.move_to(x, 0.0);
		ctx.line_to(x, height);
		ctx.stroke();
		x += config.grid_spacing;
	}

	let mut y = 0.0;
	while y < height {
		ctx.begin_path();
		ctx.move_to(0.0, y);
		ctx.line_to(width, y);
		ctx.stroke();
		y += config.grid_spacing;
	}
}

fn draw_particles(field: &ParticleField, ctx: &CanvasRenderingContext2d) {
	for p in field.particles() {
		ctx.begin_path();
		let _ = ctx.arc(p.x, p.y, p.radius, 0.0, PI * 2.0);
		ctx.set_fill_style_str(&theme::PARTICLE_BASE.with_alpha(p.alpha).to_css());
		ctx.fill();
	}
}
