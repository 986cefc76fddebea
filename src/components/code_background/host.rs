//! Browser implementation of [`Host`], plus activation against a real canvas.
//!
//! Callbacks handed to the browser hold only a `Weak` reference to the
//! controller, so dropping the controller releases the closures along with it.

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use wasm_bindgen::prelude::*;
use web_sys::{
	AddEventListenerOptions, Document, EventTarget, HtmlCanvasElement, MouseEvent, Window,
};

use super::config::load_config;
use super::environment::{Clock, Environment, FrameScheduler};
use super::error::{BackgroundError, Result};
use super::lifecycle::{Controller, Handle, Host, Listener, ListenerTarget};
use super::particles::Bounds;
use super::render::Renderer;
use super::simulation::Simulation;
use super::surface::Surface;
use super::theme::resolve_accent;

pub type BrowserController = Controller<BrowserHost>;

pub struct BrowserHost {
	window: Window,
	document: Document,
	surface: Surface,
	renderer: Renderer,
	clock: Clock,
	scheduler: FrameScheduler,
	on_pointer: Closure<dyn FnMut(MouseEvent)>,
	on_resize: Closure<dyn FnMut()>,
	on_resize_elapsed: Closure<dyn FnMut()>,
	on_frame: Closure<dyn FnMut()>,
}

/// Starts the background on `canvas`.
///
/// Fails without side effects when there is no window, no container, or no
/// 2D context; the caller logs and leaves the page without animation.
pub fn activate(canvas: HtmlCanvasElement) -> Result<Rc<RefCell<BrowserController>>> {
	let window = web_sys::window().ok_or(BackgroundError::NoWindow)?;
	let document = window.document().ok_or(BackgroundError::NoWindow)?;
	let surface = Surface::mount(canvas)?;

	let env = Environment::detect(&window);
	let config = load_config(&window);
	let accent = resolve_accent(
		&window,
		&config.surface.accent_property,
		&config.surface.accent_fallback,
	);
	let clock = Clock::resolve(&window);
	let scheduler = FrameScheduler::resolve(&window);
	let seed = js_sys::Date::now() as u64 as u32;

	Ok(Rc::new_cyclic(|weak: &Weak<RefCell<BrowserController>>| {
		let host = BrowserHost {
			on_pointer: pointer_callback(weak.clone(), surface.canvas().clone()),
			on_resize: callback(weak.clone(), BrowserController::on_resize_signal),
			on_resize_elapsed: callback(weak.clone(), BrowserController::on_resize_elapsed),
			on_frame: callback(weak.clone(), BrowserController::on_frame),
			window,
			document,
			surface,
			renderer: Renderer::new(accent),
			clock,
			scheduler,
		};
		RefCell::new(Controller::activate(host, env, config, seed))
	}))
}

fn callback(
	weak: Weak<RefCell<BrowserController>>,
	handler: fn(&mut BrowserController),
) -> Closure<dyn FnMut()> {
	Closure::new(move || {
		if let Some(controller) = weak.upgrade() {
			if let Ok(mut c) = controller.try_borrow_mut() {
				handler(&mut *c);
			}
		}
	})
}

fn pointer_callback(
	weak: Weak<RefCell<BrowserController>>,
	canvas: HtmlCanvasElement,
) -> Closure<dyn FnMut(MouseEvent)> {
	Closure::new(move |ev: MouseEvent| {
		let Some(controller) = weak.upgrade() else {
			return;
		};
		let rect = canvas.get_bounding_client_rect();
		let (x, y) = (
			ev.client_x() as f64 - rect.left(),
			ev.client_y() as f64 - rect.top(),
		);
		if let Ok(mut c) = controller.try_borrow_mut() {
			c.on_pointer_move(x, y);
		}
	})
}

impl BrowserHost {
	fn target(&self, target: ListenerTarget) -> &EventTarget {
		match target {
			ListenerTarget::Window => &self.window,
			ListenerTarget::Document => &self.document,
			ListenerTarget::Container => self.surface.container(),
			ListenerTarget::Surface => self.surface.canvas(),
		}
	}
}

impl Host for BrowserHost {
	fn attach(&mut self, listener: Listener) -> Result<()> {
		let options = AddEventListenerOptions::new();
		options.set_passive(true);
		match listener {
			Listener::PointerMove(target) => {
				options.set_capture(true);
				self.target(target)
					.add_event_listener_with_callback_and_add_event_listener_options(
						"mousemove",
						self.on_pointer.as_ref().unchecked_ref(),
						&options,
					)?;
			}
			Listener::Resize => {
				self.window
					.add_event_listener_with_callback_and_add_event_listener_options(
						"resize",
						self.on_resize.as_ref().unchecked_ref(),
						&options,
					)?;
			}
		}
		Ok(())
	}

	fn detach(&mut self, listener: Listener) {
		match listener {
			Listener::PointerMove(target) => {
				let _ = self.target(target).remove_event_listener_with_callback_and_bool(
					"mousemove",
					self.on_pointer.as_ref().unchecked_ref(),
					true,
				);
			}
			Listener::Resize => {
				let _ = self.window.remove_event_listener_with_callback(
					"resize",
					self.on_resize.as_ref().unchecked_ref(),
				);
			}
		}
	}

	fn request_frame(&mut self) -> Result<Handle> {
		let cb = self.on_frame.as_ref().unchecked_ref();
		let handle = match self.scheduler {
			FrameScheduler::AnimationFrame => self.window.request_animation_frame(cb)?,
			FrameScheduler::Timeout => {
				let timeout = FrameScheduler::TIMEOUT_MS;
				self.window
					.set_timeout_with_callback_and_timeout_and_arguments_0(cb, timeout)?
			}
		};
		Ok(handle)
	}

	fn cancel_frame(&mut self, handle: Handle) {
		match self.scheduler {
			FrameScheduler::AnimationFrame => {
				let _ = self.window.cancel_animation_frame(handle);
			}
			FrameScheduler::Timeout => self.window.clear_timeout_with_handle(handle),
		}
	}

	fn start_resize_timer(&mut self, delay_ms: i32) -> Result<Handle> {
		Ok(self.window.set_timeout_with_callback_and_timeout_and_arguments_0(
			self.on_resize_elapsed.as_ref().unchecked_ref(),
			delay_ms,
		)?)
	}

	fn cancel_resize_timer(&mut self, handle: Handle) {
		self.window.clear_timeout_with_handle(handle);
	}

	fn resize_surface(&mut self) -> Option<Bounds> {
		self.surface.resize()
	}

	fn bounds(&self) -> Bounds {
		self.surface.bounds()
	}

	fn now(&self) -> f64 {
		self.clock.now()
	}

	fn draw(&mut self, sim: &Simulation) -> Result<()> {
		self.surface.ensure_attached()?;
		self.renderer.draw(self.surface.context(), sim)
	}
}
