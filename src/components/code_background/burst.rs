//! Burst emitter: a short-lived radial push that fades out over its lifetime.

use super::config::BurstConfig;
use super::particles::Bounds;
use super::rng::FieldRng;

/// One transient outward impulse.
#[derive(Clone, Debug)]
pub struct Burst {
	pub x: f64,
	pub y: f64,
	/// Frames elapsed since spawn.
	pub age: u32,
	pub lifetime: u32,
	pub radius: f64,
	pub base_force: f64,
	/// Radius of the glowing core.
	pub size: f64,
	pub active: bool,
}

impl Burst {
	pub fn spawn(x: f64, y: f64, config: &BurstConfig) -> Self {
		Self {
			x,
			y,
			age: 0,
			lifetime: config.lifetime,
			radius: config.radius,
			base_force: config.force,
			size: config.size,
			active: true,
		}
	}

	/// 1.0 at spawn, 0.0 once the lifetime is used up.
	pub fn fade(&self) -> f64 {
		if self.lifetime == 0 {
			return 0.0;
		}
		(1.0 - self.age as f64 / self.lifetime as f64).max(0.0)
	}

	pub fn current_force(&self) -> f64 {
		self.base_force * self.fade()
	}
}

/// Ages a burst by one frame, deactivating it at the end of its lifetime.
pub fn advance_burst(burst: &mut Burst) {
	burst.age = burst.age.saturating_add(1);
	if burst.age >= burst.lifetime {
		burst.active = false;
	}
}

/// Wall-clock gate deciding when the next burst may spawn.
///
/// The gate only looks at elapsed time. A spawn replaces whatever burst is
/// current, and a long stall between checks still yields a single spawn.
#[derive(Clone, Debug)]
pub struct SpawnGate {
	last_spawn: Option<f64>,
	interval_ms: f64,
}

impl SpawnGate {
	pub fn new(interval_ms: f64) -> Self {
		Self {
			last_spawn: None,
			interval_ms,
		}
	}

	/// Spawns a burst at a random point in `bounds` if the gate is open at `now`.
	pub fn try_spawn(
		&mut self,
		now: f64,
		bounds: Bounds,
		rng: &mut FieldRng,
		config: &BurstConfig,
	) -> Option<Burst> {
		let open = match self.last_spawn {
			None => true,
			Some(last) => now - last >= self.interval_ms,
		};
		if !open {
			return None;
		}
		self.last_spawn = Some(now);
		Some(Burst::spawn(
			rng.range(0.0, bounds.width),
			rng.range(0.0, bounds.height),
			config,
		))
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	const BOUNDS: Bounds = Bounds {
		width: 800.0,
		height: 600.0,
	};

	#[test]
	fn fade_runs_from_one_to_zero() {
		let mut burst = Burst::spawn(10.0, 10.0, &BurstConfig::default());
		assert_eq!(burst.fade(), 1.0);
		assert_eq!(burst.current_force(), 0.5);

		let mut previous = burst.current_force();
		for _ in 0..burst.lifetime {
			advance_burst(&mut burst);
			assert!(burst.current_force() <= previous);
			previous = burst.current_force();
		}
		assert_eq!(burst.age, burst.lifetime);
		assert_eq!(burst.fade(), 0.0);
		assert_eq!(burst.current_force(), 0.0);
		assert!(!burst.active);
	}

	#[test]
	fn stays_active_until_last_frame() {
		let mut burst = Burst::spawn(0.0, 0.0, &BurstConfig::default());
		for _ in 0..59 {
			advance_burst(&mut burst);
		}
		assert!(burst.active);
		advance_burst(&mut burst);
		assert!(!burst.active);
	}

	#[test]
	fn first_check_spawns_inside_bounds() {
		let mut gate = SpawnGate::new(10_000.0);
		let mut rng = FieldRng::new(3);
		let burst = gate
			.try_spawn(16.0, BOUNDS, &mut rng, &BurstConfig::default())
			.expect("first check spawns");
		assert!(BOUNDS.contains(burst.x, burst.y));
		assert_eq!(gate.last_spawn, Some(16.0));
	}

	#[test]
	fn gate_holds_within_interval() {
		let config = BurstConfig::default();
		let mut gate = SpawnGate::new(config.interval_ms);
		let mut rng = FieldRng::new(3);
		assert!(gate.try_spawn(1000.0, BOUNDS, &mut rng, &config).is_some());
		assert!(gate.try_spawn(1016.0, BOUNDS, &mut rng, &config).is_none());
		assert!(gate.try_spawn(10_999.0, BOUNDS, &mut rng, &config).is_none());
		assert!(gate.try_spawn(11_000.0, BOUNDS, &mut rng, &config).is_some());
		assert!(gate.try_spawn(11_001.0, BOUNDS, &mut rng, &config).is_none());
	}

	#[test]
	fn long_stall_spawns_once() {
		let config = BurstConfig::default();
		let mut gate = SpawnGate::new(config.interval_ms);
		let mut rng = FieldRng::new(5);
		gate.try_spawn(0.0, BOUNDS, &mut rng, &config);
		assert!(gate.try_spawn(45_000.0, BOUNDS, &mut rng, &config).is_some());
		assert!(gate.try_spawn(45_016.0, BOUNDS, &mut rng, &config).is_none());
		assert_eq!(gate.last_spawn, Some(45_000.0));
	}
}
