//! Error type for the background subsystem.
//!
//! None of these reach the page: the component logs them and carries on
//! without the animation.

use thiserror::Error;
use wasm_bindgen::JsValue;

#[derive(Debug, Error)]
pub enum BackgroundError {
	#[error("no browser window")]
	NoWindow,

	#[error("canvas has no container element")]
	NoContainer,

	#[error("2d drawing context unavailable")]
	NoContext,

	#[error("canvas was detached from the document")]
	SurfaceDetached,

	#[error("browser error: {0}")]
	Js(String),
}

impl From<JsValue> for BackgroundError {
	fn from(value: JsValue) -> Self {
		BackgroundError::Js(
			value
				.as_string()
				.unwrap_or_else(|| format!("{:?}", value)),
		)
	}
}

pub type Result<T> = std::result::Result<T, BackgroundError>;
