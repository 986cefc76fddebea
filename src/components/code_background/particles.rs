//! Particle field: plain particle data and the per-frame update rule.

use super::burst::Burst;
use super::config::{FieldConfig, PointerConfig};
use super::rng::FieldRng;

/// Drawable area in surface coordinates.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Bounds {
	pub width: f64,
	pub height: f64,
}

impl Bounds {
	pub fn new(width: f64, height: f64) -> Self {
		Self { width, height }
	}

	#[cfg(test)]
	pub fn contains(&self, x: f64, y: f64) -> bool {
		(0.0..=self.width).contains(&x) && (0.0..=self.height).contains(&y)
	}
}

/// Last known pointer position in surface coordinates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Pointer {
	pub x: f64,
	pub y: f64,
}

/// A single simulated point.
#[derive(Clone, Debug)]
pub struct Particle {
	pub x: f64,
	pub y: f64,
	pub vx: f64,
	pub vy: f64,
	pub radius: f64,
	/// Set when the current burst pushed this particle during the last update.
	pub charged: bool,
	/// Burst influence in [0, 1], reset every frame.
	pub charge: f64,
}

impl Particle {
	pub fn new(x: f64, y: f64, vx: f64, vy: f64, radius: f64) -> Self {
		Self {
			x,
			y,
			vx,
			vy,
			radius,
			charged: false,
			charge: 0.0,
		}
	}
}

/// Scatters `config.count` particles uniformly over `bounds`.
pub fn initialize(config: &FieldConfig, bounds: Bounds, rng: &mut FieldRng) -> Vec<Particle> {
	(0..config.count)
		.map(|_| {
			Particle::new(
				rng.range(0.0, bounds.width),
				rng.range(0.0, bounds.height),
				rng.range(-config.max_speed, config.max_speed),
				rng.range(-config.max_speed, config.max_speed),
				rng.range(config.radius_min, config.radius_max),
			)
		})
		.collect()
}

/// Acceleration toward the pointer, or `None` when out of range.
pub fn pointer_pull(p: &Particle, pointer: Pointer, config: &PointerConfig) -> Option<(f64, f64)> {
	let (dx, dy) = (pointer.x - p.x, pointer.y - p.y);
	let dist_sq = dx * dx + dy * dy;
	if dist_sq <= 0.0 || dist_sq >= config.radius * config.radius {
		return None;
	}
	let dist = dist_sq.sqrt();
	let force = (config.falloff / (dist + 1.0)).min(config.force_cap) * config.strength;
	Some((dx / dist * force, dy / dist * force))
}

/// Advances one particle by a single frame.
///
/// `pointer` is `None` when tracking is disabled or no pointer has been seen.
/// Forces are accumulated into velocity, then damped, integrated, and
/// reflected off the bounds. The position is clamped so it never leaves
/// `bounds`, even when a single step would tunnel past an edge.
pub fn update_particle(
	p: &mut Particle,
	pointer: Option<Pointer>,
	burst: Option<&Burst>,
	bounds: Bounds,
	field: &FieldConfig,
	pointer_config: &PointerConfig,
) {
	p.charged = false;
	p.charge = 0.0;

	if let Some((ax, ay)) = pointer.and_then(|ptr| pointer_pull(p, ptr, pointer_config)) {
		p.vx += ax;
		p.vy += ay;
	}

	if let Some(burst) = burst.filter(|b| b.active) {
		let (dx, dy) = (p.x - burst.x, p.y - burst.y);
		let dist_sq = dx * dx + dy * dy;
		if dist_sq > 0.0 && dist_sq < burst.radius * burst.radius {
			let dist = dist_sq.sqrt();
			let falloff = 1.0 - dist / burst.radius;
			let force = burst.current_force() * falloff;
			p.vx += dx / dist * force;
			p.vy += dy / dist * force;
			p.charged = true;
			p.charge = burst.fade() * falloff;
		}
	}

	p.vx *= field.damping;
	p.vy *= field.damping;
	p.x += p.vx;
	p.y += p.vy;

	if p.x < 0.0 || p.x > bounds.width {
		p.vx = -p.vx;
	}
	if p.y < 0.0 || p.y > bounds.height {
		p.vy = -p.vy;
	}
	p.x = p.x.clamp(0.0, bounds.width.max(0.0));
	p.y = p.y.clamp(0.0, bounds.height.max(0.0));
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::components::code_background::config::BurstConfig;

	const BOUNDS: Bounds = Bounds {
		width: 800.0,
		height: 600.0,
	};

	fn still(x: f64, y: f64) -> Particle {
		Particle::new(x, y, 0.0, 0.0, 2.0)
	}

	fn step(p: &mut Particle, pointer: Option<Pointer>, burst: Option<&Burst>) {
		let (field, pointer_config) = (FieldConfig::default(), PointerConfig::default());
		update_particle(p, pointer, burst, BOUNDS, &field, &pointer_config);
	}

	#[test]
	fn initialize_scatters_within_ranges() {
		let config = FieldConfig::default();
		let mut rng = FieldRng::new(1);
		let particles = initialize(&config, BOUNDS, &mut rng);
		assert_eq!(particles.len(), 300);
		for p in &particles {
			assert!(BOUNDS.contains(p.x, p.y));
			assert!(p.vx.abs() <= 0.15 && p.vy.abs() <= 0.15);
			assert!((1.0..3.0).contains(&p.radius));
			assert!(!p.charged);
		}
	}

	#[test]
	fn pointer_within_range_pulls_toward_it() {
		let mut p = still(350.0, 300.0);
		let field = FieldConfig::default();
		update_particle(
			&mut p,
			Some(Pointer { x: 400.0, y: 300.0 }),
			None,
			BOUNDS,
			&field,
			&PointerConfig::default(),
		);
		// min(100/51, 2) * 0.013, then damped once
		let expected = (100.0_f64 / 51.0).min(2.0) * 0.013 * 0.99;
		assert!((p.vx - expected).abs() < 1e-12);
		assert_eq!(p.vy, 0.0);
		assert!(p.x > 350.0);
	}

	#[test]
	fn attraction_grows_velocity_toward_pointer() {
		let mut p = Particle::new(350.0, 300.0, 0.1, 0.0, 2.0);
		let before = p.vx;
		update_particle(
			&mut p,
			Some(Pointer { x: 400.0, y: 300.0 }),
			None,
			BOUNDS,
			&FieldConfig::default(),
			&PointerConfig::default(),
		);
		assert!(p.vx > before);
	}

	#[test]
	fn pointer_out_of_range_only_damps() {
		let mut p = Particle::new(100.0, 300.0, 0.1, 0.0, 2.0);
		update_particle(
			&mut p,
			Some(Pointer { x: 400.0, y: 300.0 }),
			None,
			BOUNDS,
			&FieldConfig::default(),
			&PointerConfig::default(),
		);
		assert!((p.vx - 0.099).abs() < 1e-12);
	}

	#[test]
	fn no_pointer_means_no_pull() {
		let mut p = Particle::new(350.0, 300.0, 0.1, 0.0, 2.0);
		step(&mut p, None, None);
		assert!(p.vx < 0.1);
	}

	#[test]
	fn pointer_on_top_of_particle_is_ignored() {
		let p = still(400.0, 300.0);
		let pull = pointer_pull(&p, Pointer { x: 400.0, y: 300.0 }, &PointerConfig::default());
		assert!(pull.is_none());
	}

	#[test]
	fn burst_pushes_outward_and_charges() {
		let burst = Burst::spawn(300.0, 300.0, &BurstConfig::default());
		let mut p = still(330.0, 300.0);
		step(&mut p, None, Some(&burst));
		assert!(p.vx > 0.0);
		assert!(p.charged);
		assert!((p.charge - 0.8).abs() < 1e-12);
	}

	#[test]
	fn charge_resets_when_burst_is_gone() {
		let mut p = still(330.0, 300.0);
		p.charged = true;
		p.charge = 0.5;
		step(&mut p, None, None);
		assert!(!p.charged);
		assert_eq!(p.charge, 0.0);
	}

	#[test]
	fn inactive_burst_has_no_effect() {
		let mut burst = Burst::spawn(300.0, 300.0, &BurstConfig::default());
		burst.active = false;
		let mut p = still(330.0, 300.0);
		step(&mut p, None, Some(&burst));
		assert_eq!(p.vx, 0.0);
		assert!(!p.charged);
	}

	#[test]
	fn reflects_and_clamps_at_edges() {
		let mut p = Particle::new(799.5, 0.2, 2.0, -1.0, 2.0);
		step(&mut p, None, None);
		assert_eq!(p.x, 800.0);
		assert_eq!(p.y, 0.0);
		assert!(p.vx < 0.0);
		assert!(p.vy > 0.0);
	}

	#[test]
	fn fast_particles_never_leave_bounds() {
		let mut rng = FieldRng::new(99);
		let field = FieldConfig::default();
		let mut particles: Vec<Particle> = (0..50)
			.map(|_| {
				Particle::new(
					rng.range(0.0, 800.0),
					rng.range(0.0, 600.0),
					rng.range(-900.0, 900.0),
					rng.range(-900.0, 900.0),
					1.0,
				)
			})
			.collect();
		let pointer = Some(Pointer { x: 10.0, y: 590.0 });
		for _ in 0..200 {
			for p in &mut particles {
				update_particle(p, pointer, None, BOUNDS, &field, &PointerConfig::default());
				assert!(BOUNDS.contains(p.x, p.y), "({}, {}) escaped", p.x, p.y);
			}
		}
	}
}
