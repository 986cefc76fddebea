//! Activation and teardown of the background.
//!
//! [`Controller`] owns the simulation and every browser resource it acquires
//! (listeners, the pending frame, the pending resize timer). The browser side
//! is reached only through [`Host`], so the whole lifecycle can be driven by a
//! fake host in tests.

use log::{debug, info, warn};

use super::config::BackgroundConfig;
use super::environment::Environment;
use super::error::Result;
use super::particles::Bounds;
use super::simulation::Simulation;

/// Handle returned by the frame and timer primitives.
pub type Handle = i32;

/// Where a pointer-move listener is attached.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ListenerTarget {
	Window,
	Document,
	Container,
	Surface,
}

/// Pointer moves are observed on every target so content layered above the
/// canvas cannot swallow them.
pub const POINTER_TARGETS: [ListenerTarget; 4] = [
	ListenerTarget::Window,
	ListenerTarget::Document,
	ListenerTarget::Container,
	ListenerTarget::Surface,
];

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Listener {
	/// Capture-phase, passive `mousemove`.
	PointerMove(ListenerTarget),
	/// Passive window `resize`.
	Resize,
}

/// Browser services used by the controller.
pub trait Host {
	fn attach(&mut self, listener: Listener) -> Result<()>;
	/// Must be a no-op for listeners that were never attached.
	fn detach(&mut self, listener: Listener);
	fn request_frame(&mut self) -> Result<Handle>;
	fn cancel_frame(&mut self, handle: Handle);
	fn start_resize_timer(&mut self, delay_ms: i32) -> Result<Handle>;
	fn cancel_resize_timer(&mut self, handle: Handle);
	/// Resizes the surface to its container, returning the new bounds.
	fn resize_surface(&mut self) -> Option<Bounds>;
	fn bounds(&self) -> Bounds;
	fn now(&self) -> f64;
	fn draw(&mut self, sim: &Simulation) -> Result<()>;
}

pub struct Controller<H: Host> {
	host: H,
	sim: Simulation,
	attached: Vec<Listener>,
	pending_frame: Option<Handle>,
	pending_resize: Option<Handle>,
}

impl<H: Host> Controller<H> {
	/// Sizes the surface, allocates the field, attaches listeners and
	/// requests the first frame.
	///
	/// Listener failures are logged and skipped; whatever was attached is
	/// released by [`Controller::deactivate`].
	pub fn activate(mut host: H, env: Environment, config: BackgroundConfig, seed: u32) -> Self {
		let bounds = host.resize_surface().unwrap_or_else(|| host.bounds());
		let sim = Simulation::new(config, env, bounds, seed);

		let mut controller = Self {
			host,
			sim,
			attached: Vec::new(),
			pending_frame: None,
			pending_resize: None,
		};

		if env.pointer_tracking() {
			for target in POINTER_TARGETS {
				controller.attach(Listener::PointerMove(target));
			}
		}
		controller.attach(Listener::Resize);

		info!(
			"code-background: {} particles on {}x{}, pointer tracking {}",
			controller.sim.particles.len(),
			bounds.width,
			bounds.height,
			if env.pointer_tracking() { "on" } else { "off" }
		);

		controller.schedule_frame();
		controller
	}

	fn attach(&mut self, listener: Listener) {
		match self.host.attach(listener) {
			Ok(()) => self.attached.push(listener),
			Err(e) => warn!("code-background: could not attach {:?}: {}", listener, e),
		}
	}

	fn schedule_frame(&mut self) {
		match self.host.request_frame() {
			Ok(handle) => self.pending_frame = Some(handle),
			Err(e) => {
				warn!("code-background: could not schedule frame: {}", e);
				self.sim.running = false;
			}
		}
	}

	/// One tick of the frame loop.
	pub fn on_frame(&mut self) {
		self.pending_frame = None;
		if !self.sim.running {
			return;
		}

		let now = self.host.now();
		self.sim.step(now);

		if let Err(e) = self.host.draw(&self.sim) {
			warn!("code-background: draw failed, stopping: {}", e);
			self.sim.running = false;
			return;
		}

		self.schedule_frame();
	}

	pub fn on_pointer_move(&mut self, x: f64, y: f64) {
		self.sim.set_pointer(x, y);
	}

	/// Restarts the debounce timer; only the trailing signal resizes.
	pub fn on_resize_signal(&mut self) {
		if !self.sim.running {
			return;
		}
		if let Some(handle) = self.pending_resize.take() {
			self.host.cancel_resize_timer(handle);
		}
		let delay = self.sim.config.surface.resize_debounce_ms;
		match self.host.start_resize_timer(delay) {
			Ok(handle) => self.pending_resize = Some(handle),
			Err(e) => warn!("code-background: could not start resize timer: {}", e),
		}
	}

	pub fn on_resize_elapsed(&mut self) {
		self.pending_resize = None;
		if let Some(bounds) = self.host.resize_surface() {
			self.sim.resize(bounds);
		}
	}

	/// Stops the loop and releases every timer, listener and frame.
	///
	/// Safe to call any number of times.
	pub fn deactivate(&mut self) {
		self.sim.running = false;

		if let Some(handle) = self.pending_resize.take() {
			self.host.cancel_resize_timer(handle);
		}
		for listener in self.attached.drain(..) {
			self.host.detach(listener);
		}
		if let Some(handle) = self.pending_frame.take() {
			self.host.cancel_frame(handle);
			debug!("code-background: deactivated after {} frames", self.sim.frames());
		}
	}
}

impl<H: Host> Drop for Controller<H> {
	fn drop(&mut self) {
		self.deactivate();
	}
}
