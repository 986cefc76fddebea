//! Simulation state advanced once per animation frame.
//!
//! Holds everything the frame loop mutates: the particle field, the current
//! burst, the last pointer position, and the running flag checked at the
//! start of every tick.

use super::burst::{Burst, SpawnGate, advance_burst};
use super::config::BackgroundConfig;
use super::environment::Environment;
use super::particles::{self, Bounds, Particle, Pointer, update_particle};
use super::rng::FieldRng;

pub struct Simulation {
	pub particles: Vec<Particle>,
	pub burst: Option<Burst>,
	pub pointer: Option<Pointer>,
	pub running: bool,
	pub bounds: Bounds,
	pub config: BackgroundConfig,
	pointer_tracking: bool,
	gate: SpawnGate,
	rng: FieldRng,
	frames: u64,
}

impl Simulation {
	pub fn new(config: BackgroundConfig, env: Environment, bounds: Bounds, seed: u32) -> Self {
		let mut rng = FieldRng::new(seed);
		let particles = particles::initialize(&config.field, bounds, &mut rng);
		Self {
			particles,
			burst: None,
			pointer: None,
			running: true,
			bounds,
			gate: SpawnGate::new(config.burst.interval_ms),
			pointer_tracking: env.pointer_tracking(),
			config,
			rng,
			frames: 0,
		}
	}

	pub fn frames(&self) -> u64 {
		self.frames
	}

	/// Records a pointer position. Ignored when tracking is disabled.
	pub fn set_pointer(&mut self, x: f64, y: f64) {
		if self.pointer_tracking {
			self.pointer = Some(Pointer { x, y });
		}
	}

	pub fn resize(&mut self, bounds: Bounds) {
		self.bounds = bounds;
	}

	/// Advances one frame: spawn check, burst aging, then every particle.
	pub fn step(&mut self, now: f64) {
		if let Some(burst) =
			self.gate
				.try_spawn(now, self.bounds, &mut self.rng, &self.config.burst)
		{
			self.burst = Some(burst);
		}

		if let Some(burst) = self.burst.as_mut() {
			advance_burst(burst);
			if !burst.active {
				self.burst = None;
			}
		}

		let pointer = if self.pointer_tracking {
			self.pointer
		} else {
			None
		};
		for p in &mut self.particles {
			update_particle(
				p,
				pointer,
				self.burst.as_ref(),
				self.bounds,
				&self.config.field,
				&self.config.pointer,
			);
		}
		self.frames += 1;
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn sim(env: Environment) -> Simulation {
		Simulation::new(BackgroundConfig::default(), env, Bounds::new(800.0, 600.0), 11)
	}

	#[test]
	fn first_step_spawns_and_ages_a_burst() {
		let mut s = sim(Environment::default());
		s.step(0.0);
		let burst = s.burst.as_ref().expect("burst spawned on first tick");
		assert_eq!(burst.age, 1);
	}

	#[test]
	fn burst_cleared_after_lifetime() {
		let mut s = sim(Environment::default());
		for frame in 0..60 {
			s.step(frame as f64 * 16.0);
		}
		assert!(s.burst.is_none());
		assert!(s.particles.iter().all(|p| !p.charged));
	}

	#[test]
	fn pointer_ignored_without_tracking() {
		let mut s = sim(Environment {
			prefers_reduced_motion: true,
			..Default::default()
		});
		s.set_pointer(400.0, 300.0);
		assert!(s.pointer.is_none());
	}

	#[test]
	fn shrinking_bounds_pulls_particles_in() {
		let mut s = sim(Environment::default());
		s.resize(Bounds::new(100.0, 50.0));
		s.step(0.0);
		assert!(s.particles.iter().all(|p| s.bounds.contains(p.x, p.y)));
	}
}
