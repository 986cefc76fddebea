//! Canvas rendering for the background.
//!
//! Each frame is painted from scratch in three passes:
//! 1. Burst glow (gradient disc, then a shadow-blurred core)
//! 2. Particles in the accent color
//! 3. Proximity edges, recolored where a burst is passing through
//!
//! Any failing canvas call aborts the frame with an error.

use std::f64::consts::PI;

use web_sys::CanvasRenderingContext2d;

use super::burst::Burst;
use super::config::EdgeConfig;
use super::error::Result;
use super::particles::Particle;
use super::simulation::Simulation;
use super::theme::{self, BURST_CORE};

/// How to stroke one proximity edge.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum EdgeStroke {
	/// Accent-colored hairline.
	Plain { alpha: f64 },
	/// Yellow-orange gradient for edges touched by a burst.
	Charged { alpha: f64 },
}

/// Opacity from linear distance falloff; zero at or beyond the threshold.
pub fn edge_alpha(dist_sq: f64, config: &EdgeConfig) -> f64 {
	let threshold = config.distance;
	if threshold <= 0.0 || dist_sq >= threshold * threshold {
		return 0.0;
	}
	(threshold - dist_sq.sqrt()) / threshold * config.max_alpha
}

pub fn edge_stroke(a: &Particle, b: &Particle, dist_sq: f64, config: &EdgeConfig) -> EdgeStroke {
	let base = edge_alpha(dist_sq, config);
	let charge = a.charge.max(b.charge);
	if (a.charged || b.charged) && charge > 0.0 {
		EdgeStroke::Charged {
			alpha: base.max(charge * 0.9),
		}
	} else {
		EdgeStroke::Plain { alpha: base }
	}
}

/// Every unordered pair closer than `distance`, with its squared distance.
pub fn edges(
	particles: &[Particle],
	distance: f64,
) -> impl Iterator<Item = (&Particle, &Particle, f64)> {
	let limit_sq = distance * distance;
	particles.iter().enumerate().flat_map(move |(i, a)| {
		particles[i + 1..].iter().filter_map(move |b| {
			let (dx, dy) = (b.x - a.x, b.y - a.y);
			let dist_sq = dx * dx + dy * dy;
			(dist_sq < limit_sq).then_some((a, b, dist_sq))
		})
	})
}

/// Paints simulation state onto a 2D context.
pub struct Renderer {
	accent: String,
}

impl Renderer {
	/// `accent` is resolved once at activation and never re-queried.
	pub fn new(accent: String) -> Self {
		Self { accent }
	}

	pub fn draw(&self, ctx: &CanvasRenderingContext2d, sim: &Simulation) -> Result<()> {
		ctx.clear_rect(0.0, 0.0, sim.bounds.width, sim.bounds.height);

		if let Some(burst) = sim.burst.as_ref().filter(|b| b.active) {
			draw_burst(ctx, burst)?;
		}
		self.draw_particles(ctx, &sim.particles)?;
		self.draw_edges(ctx, &sim.particles, &sim.config.edge)
	}

	fn draw_particles(&self, ctx: &CanvasRenderingContext2d, particles: &[Particle]) -> Result<()> {
		ctx.set_global_alpha(1.0);
		ctx.set_fill_style_str(&self.accent);
		for p in particles {
			ctx.begin_path();
			ctx.arc(p.x, p.y, p.radius, 0.0, PI * 2.0)?;
			ctx.fill();
		}
		Ok(())
	}

	fn draw_edges(
		&self,
		ctx: &CanvasRenderingContext2d,
		particles: &[Particle],
		config: &EdgeConfig,
	) -> Result<()> {
		for (a, b, dist_sq) in edges(particles, config.distance) {
			match edge_stroke(a, b, dist_sq, config) {
				EdgeStroke::Plain { alpha } => {
					ctx.set_stroke_style_str(&self.accent);
					ctx.set_global_alpha(alpha);
					ctx.set_line_width(1.0);
					stroke_line(ctx, a, b);
				}
				EdgeStroke::Charged { alpha } => {
					ctx.save();
					let gradient = ctx.create_linear_gradient(a.x, a.y, b.x, b.y);
					for (offset, color) in theme::charged_edge_stops(alpha) {
						gradient.add_color_stop(offset as f32, &color.to_css())?;
					}
					#[allow(deprecated)]
					ctx.set_stroke_style(&gradient);
					ctx.set_global_alpha(alpha);
					ctx.set_line_width(2.0);
					ctx.set_shadow_blur(8.0);
					ctx.set_shadow_color(&BURST_CORE.with_alpha(alpha * 0.4).to_css());
					stroke_line(ctx, a, b);
					ctx.restore();
				}
			}
		}
		ctx.set_global_alpha(1.0);
		Ok(())
	}
}

fn stroke_line(ctx: &CanvasRenderingContext2d, a: &Particle, b: &Particle) {
	ctx.begin_path();
	ctx.move_to(a.x, a.y);
	ctx.line_to(b.x, b.y);
	ctx.stroke();
}

fn draw_burst(ctx: &CanvasRenderingContext2d, burst: &Burst) -> Result<()> {
	let alpha = burst.fade();
	ctx.save();

	let (x, y) = (burst.x, burst.y);
	let gradient = ctx.create_radial_gradient(x, y, 0.0, x, y, burst.size * 3.0)?;
	for (offset, color) in theme::burst_glow_stops(alpha) {
		gradient.add_color_stop(offset as f32, &color.to_css())?;
	}

	#[allow(deprecated)]
	ctx.set_fill_style(&gradient);
	ctx.set_global_alpha(alpha);
	ctx.begin_path();
	ctx.arc(burst.x, burst.y, burst.size * 1.5, 0.0, PI * 2.0)?;
	ctx.fill();

	// Soft glow pass
	ctx.set_shadow_blur(20.0);
	ctx.set_shadow_color(&BURST_CORE.with_alpha(alpha).to_css());
	ctx.begin_path();
	ctx.arc(burst.x, burst.y, burst.size, 0.0, PI * 2.0)?;
	ctx.fill();

	ctx.restore();
	Ok(())
}
