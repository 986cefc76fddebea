//! Colors for the background: the page accent and the burst palette.

use log::warn;
use web_sys::Window;

/// RGBA color representation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Color {
	pub r: u8,
	pub g: u8,
	pub b: u8,
	pub a: f64,
}

impl Color {
	pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
		Self { r, g, b, a: 1.0 }
	}

	pub fn with_alpha(self, a: f64) -> Self {
		Self {
			a: a.clamp(0.0, 1.0),
			..self
		}
	}

	pub fn to_css(self) -> String {
		format!("rgba({}, {}, {}, {})", self.r, self.g, self.b, self.a)
	}
}

/// Neon yellow at the center of a burst.
pub const BURST_CORE: Color = Color::rgb(255, 255, 0);
/// Bright yellow ring.
pub const BURST_INNER: Color = Color::rgb(255, 200, 0);
/// Orange ring.
pub const BURST_OUTER: Color = Color::rgb(255, 140, 0);
/// Darker orange at the burst edge.
pub const BURST_EDGE: Color = Color::rgb(255, 80, 0);

/// Gradient stops for the burst glow at a given fade alpha.
pub fn burst_glow_stops(alpha: f64) -> [(f64, Color); 4] {
	[
		(0.0, BURST_CORE.with_alpha(alpha)),
		(0.3, BURST_INNER.with_alpha(alpha)),
		(0.6, BURST_OUTER.with_alpha(alpha * 0.9)),
		(1.0, BURST_EDGE.with_alpha(alpha * 0.5)),
	]
}

/// Gradient stops for an edge touched by a burst.
pub fn charged_edge_stops(alpha: f64) -> [(f64, Color); 3] {
	[
		(0.0, BURST_CORE.with_alpha(alpha)),
		(0.5, BURST_INNER.with_alpha(alpha)),
		(1.0, BURST_OUTER.with_alpha(alpha)),
	]
}

/// Picks the accent from a computed custom property value.
pub fn accent_or_fallback(value: Option<String>, fallback: &str) -> String {
	value
		.map(|v| v.trim().to_string())
		.filter(|v| !v.is_empty())
		.unwrap_or_else(|| fallback.to_string())
}

/// Reads the page's accent color once from the root element's computed style.
pub fn resolve_accent(window: &Window, property: &str, fallback: &str) -> String {
	let value = window
		.document()
		.and_then(|d| d.document_element())
		.and_then(|root| window.get_computed_style(&root).ok().flatten())
		.and_then(|style| style.get_property_value(property).ok());

	if value.is_none() {
		warn!("code-background: could not read {}, using {}", property, fallback);
	}
	accent_or_fallback(value, fallback)
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn css_includes_alpha() {
		assert_eq!(BURST_INNER.with_alpha(0.5).to_css(), "rgba(255, 200, 0, 0.5)");
	}

	#[test]
	fn alpha_is_clamped() {
		assert_eq!(BURST_CORE.with_alpha(1.7).a, 1.0);
		assert_eq!(BURST_CORE.with_alpha(-0.2).a, 0.0);
	}

	#[test]
	fn glow_stops_fade_outward() {
		let stops = burst_glow_stops(0.8);
		assert_eq!(stops[0].1.a, 0.8);
		assert!((stops[2].1.a - 0.72).abs() < 1e-9);
		assert!((stops[3].1.a - 0.4).abs() < 1e-9);
		assert_eq!(stops[3].0, 1.0);
	}

	#[test]
	fn accent_trims_and_falls_back() {
		assert_eq!(accent_or_fallback(Some("  #ff0000 ".into()), "#818cf8"), "#ff0000");
		assert_eq!(accent_or_fallback(Some("   ".into()), "#818cf8"), "#818cf8");
		assert_eq!(accent_or_fallback(None, "#818cf8"), "#818cf8");
	}
}
