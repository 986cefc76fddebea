//! Canvas surface sized to its container.

use log::debug;
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, Element, HtmlCanvasElement};

use super::error::{BackgroundError, Result};
use super::particles::Bounds;

pub struct Surface {
	canvas: HtmlCanvasElement,
	container: Element,
	ctx: CanvasRenderingContext2d,
}

impl Surface {
	/// Binds to `canvas` and its parent, failing when no 2D context is available.
	pub fn mount(canvas: HtmlCanvasElement) -> Result<Self> {
		let container = canvas.parent_element().ok_or(BackgroundError::NoContainer)?;
		let ctx = canvas
			.get_context("2d")?
			.ok_or(BackgroundError::NoContext)?
			.dyn_into::<CanvasRenderingContext2d>()
			.map_err(|_| BackgroundError::NoContext)?;
		Ok(Self {
			canvas,
			container,
			ctx,
		})
	}

	pub fn canvas(&self) -> &HtmlCanvasElement {
		&self.canvas
	}

	pub fn container(&self) -> &Element {
		&self.container
	}

	pub fn context(&self) -> &CanvasRenderingContext2d {
		&self.ctx
	}

	pub fn bounds(&self) -> Bounds {
		Bounds::new(self.canvas.width() as f64, self.canvas.height() as f64)
	}

	/// Matches the backing store to the container's layout box.
	///
	/// Returns the new bounds, or `None` when the container has no area yet.
	/// Resizing clears the canvas; the next frame repaints it.
	pub fn resize(&self) -> Option<Bounds> {
		let (w, h) = (self.container.client_width(), self.container.client_height());
		if w <= 0 || h <= 0 {
			return None;
		}
		self.canvas.set_width(w as u32);
		self.canvas.set_height(h as u32);
		debug!("code-background: surface resized to {}x{}", w, h);
		Some(self.bounds())
	}

	pub fn ensure_attached(&self) -> Result<()> {
		if self.canvas.is_connected() {
			Ok(())
		} else {
			Err(BackgroundError::SurfaceDetached)
		}
	}
}
