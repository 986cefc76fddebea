//! Leptos component hosting the background canvas.
//!
//! The canvas fills its `.code-background` container. Once the canvas is
//! mounted the controller is activated, and it is deactivated when the
//! component's owner is cleaned up (e.g. navigating to a route without it).

use std::cell::RefCell;
use std::rc::Rc;

use leptos::prelude::*;
use log::warn;
use web_sys::HtmlCanvasElement;

use super::host::{self, BrowserController};

/// Decorative particle background. Takes no props.
///
/// Any failure to start (no 2D context, detached canvas) leaves the page
/// rendering normally without the animation.
#[component]
pub fn CodeBackground() -> impl IntoView {
	let canvas_ref = NodeRef::<leptos::html::Canvas>::new();
	let controller: StoredValue<Option<Rc<RefCell<BrowserController>>>, LocalStorage> =
		StoredValue::new_local(None);

	Effect::new(move |_| {
		let Some(canvas) = canvas_ref.get() else {
			return;
		};
		if controller.with_value(|c| c.is_some()) {
			return;
		}
		let canvas: HtmlCanvasElement = canvas.into();
		match host::activate(canvas) {
			Ok(c) => controller.set_value(Some(c)),
			Err(e) => warn!("code-background: animation disabled: {}", e),
		}
	});

	on_cleanup(move || {
		if let Some(c) = controller.try_update_value(Option::take).flatten() {
			c.borrow_mut().deactivate();
		}
	});

	view! {
		<div class="code-background">
			<canvas node_ref=canvas_ref class="code-canvas" />
			<div class="code-overlay"></div>
		</div>
	}
}
