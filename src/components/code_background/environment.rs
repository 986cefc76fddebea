//! Capability and preference probes, resolved once per activation.
//!
//! Each probe answers conservatively when the probe itself fails: a browser
//! that cannot tell us whether it is touch-primary is treated as one, and a
//! failed reduced-motion query is treated as a request for reduced motion.

use js_sys::Reflect;
use wasm_bindgen::JsValue;
use web_sys::{Performance, Window};

const MOBILE_AGENTS: [&str; 8] = [
	"Android",
	"webOS",
	"iPhone",
	"iPad",
	"iPod",
	"BlackBerry",
	"IEMobile",
	"Opera Mini",
];

/// Snapshot of the capability flags that shape the simulation.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Environment {
	pub is_touch_primary: bool,
	pub prefers_reduced_motion: bool,
}

impl Environment {
	/// Whether pointer listeners are attached and attraction is applied.
	pub fn pointer_tracking(&self) -> bool {
		!self.is_touch_primary && !self.prefers_reduced_motion
	}

	pub fn detect(window: &Window) -> Self {
		let agent_is_mobile = window
			.navigator()
			.user_agent()
			.map(|ua| is_mobile_user_agent(&ua))
			.unwrap_or(true);
		let has_touch_events = has_property(window, "ontouchstart");
		let touch_points = window.navigator().max_touch_points() > 0;
		let coarse_pointer = media_matches(window, "(pointer: coarse)");

		Self {
			is_touch_primary: agent_is_mobile || has_touch_events || touch_points || coarse_pointer,
			prefers_reduced_motion: media_matches(window, "(prefers-reduced-motion: reduce)"),
		}
	}
}

pub fn is_mobile_user_agent(user_agent: &str) -> bool {
	let lower = user_agent.to_ascii_lowercase();
	MOBILE_AGENTS
		.iter()
		.any(|agent| lower.contains(&agent.to_ascii_lowercase()))
}

fn has_property(window: &Window, name: &str) -> bool {
	Reflect::has(window.as_ref(), &JsValue::from_str(name)).unwrap_or(true)
}

fn media_matches(window: &Window, query: &str) -> bool {
	match window.match_media(query) {
		Ok(Some(list)) => list.matches(),
		_ => true,
	}
}

/// Monotonic-ish millisecond clock.
#[derive(Clone, Debug)]
pub enum Clock {
	Performance(Performance),
	Date,
}

impl Clock {
	pub fn resolve(window: &Window) -> Self {
		window.performance().map_or(Clock::Date, Clock::Performance)
	}

	pub fn now(&self) -> f64 {
		match self {
			Clock::Performance(p) => p.now(),
			Clock::Date => js_sys::Date::now(),
		}
	}
}

/// Primitive used to schedule the next frame, paired with its cancellation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FrameScheduler {
	AnimationFrame,
	/// `setTimeout` at roughly 60 fps.
	Timeout,
}

impl FrameScheduler {
	pub const TIMEOUT_MS: i32 = 1000 / 60;

	pub fn resolve(window: &Window) -> Self {
		if has_property(window, "requestAnimationFrame")
			&& has_property(window, "cancelAnimationFrame")
		{
			FrameScheduler::AnimationFrame
		} else {
			FrameScheduler::Timeout
		}
	}
}
