//! Tuning constants for the background, optionally overridden from the page.
//!
//! Every field has a default, so a page can override a single value:
//!
//! ```html
//! <script id="background-config" type="application/json">
//!   { "burst": { "interval_ms": 5000 } }
//! </script>
//! ```

use log::{info, warn};
use serde::Deserialize;
use wasm_bindgen::JsCast;
use web_sys::{HtmlScriptElement, Window};

/// Id of the optional JSON script element carrying overrides.
const CONFIG_ELEMENT_ID: &str = "background-config";

/// Particle field parameters.
#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct FieldConfig {
	/// Number of particles allocated at activation
	pub count: usize,
	/// Initial velocity components are drawn from [-max_speed, max_speed)
	pub max_speed: f64,
	/// Minimum particle radius
	pub radius_min: f64,
	/// Maximum particle radius
	pub radius_max: f64,
	/// Per-frame velocity multiplier
	pub damping: f64,
}

impl Default for FieldConfig {
	fn default() -> Self {
		Self {
			count: 300,
			max_speed: 0.15,
			radius_min: 1.0,
			radius_max: 3.0,
			damping: 0.99,
		}
	}
}

/// Pointer attraction parameters.
#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct PointerConfig {
	/// Particles further than this from the pointer are unaffected
	pub radius: f64,
	/// Numerator of the inverse-distance falloff
	pub falloff: f64,
	/// Upper bound of the falloff term
	pub force_cap: f64,
	/// Final scale applied to the capped force
	pub strength: f64,
}

impl Default for PointerConfig {
	fn default() -> Self {
		Self {
			radius: 200.0,
			falloff: 100.0,
			force_cap: 2.0,
			strength: 0.013,
		}
	}
}

/// Burst emitter parameters.
#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct BurstConfig {
	/// Minimum wall-clock time between spawns
	pub interval_ms: f64,
	/// Lifetime in frames
	pub lifetime: u32,
	/// Influence radius
	pub radius: f64,
	/// Repulsion at age zero
	pub force: f64,
	/// Radius of the glowing core
	pub size: f64,
}

impl Default for BurstConfig {
	fn default() -> Self {
		Self {
			interval_ms: 10_000.0,
			lifetime: 60,
			radius: 150.0,
			force: 0.5,
			size: 8.0,
		}
	}
}

/// Proximity edge parameters.
#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct EdgeConfig {
	/// Particles closer than this are connected
	pub distance: f64,
	/// Opacity of an edge between coincident particles
	pub max_alpha: f64,
}

impl Default for EdgeConfig {
	fn default() -> Self {
		Self {
			distance: 150.0,
			max_alpha: 0.7,
		}
	}
}

/// Surface and theme integration.
#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct SurfaceConfig {
	/// Quiet period before a resize is applied
	pub resize_debounce_ms: i32,
	/// CSS custom property holding the accent color
	pub accent_property: String,
	/// Used when the custom property is missing or empty
	pub accent_fallback: String,
}

impl Default for SurfaceConfig {
	fn default() -> Self {
		Self {
			resize_debounce_ms: 100,
			accent_property: "--primary-color".into(),
			accent_fallback: "#818cf8".into(),
		}
	}
}

/// Complete background configuration.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default)]
pub struct BackgroundConfig {
	/// Particle count, speed and size
	pub field: FieldConfig,
	/// Pointer attraction
	pub pointer: PointerConfig,
	/// Burst timing and strength
	pub burst: BurstConfig,
	/// Proximity edges
	pub edge: EdgeConfig,
	/// Resize debounce and accent color
	pub surface: SurfaceConfig,
}

impl BackgroundConfig {
	/// Parses overrides; missing fields keep their defaults.
	pub fn from_json(text: &str) -> Result<Self, serde_json::Error> {
		serde_json::from_str(text)
	}
}

/// Reads overrides from the `background-config` script element, if present.
pub fn load_config(window: &Window) -> BackgroundConfig {
	let Some(text) = window
		.document()
		.and_then(|d| d.get_element_by_id(CONFIG_ELEMENT_ID))
		.and_then(|e| e.dyn_into::<HtmlScriptElement>().ok())
		.and_then(|s| s.text().ok())
	else {
		return BackgroundConfig::default();
	};

	match BackgroundConfig::from_json(&text) {
		Ok(config) => {
			info!("code-background: loaded config overrides");
			config
		}
		Err(e) => {
			warn!("code-background: failed to parse config, using defaults: {}", e);
			BackgroundConfig::default()
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn defaults_match_documented_constants() {
		let config = BackgroundConfig::default();
		assert_eq!(config.field.count, 300);
		assert_eq!(config.burst.lifetime, 60);
		assert_eq!(config.burst.interval_ms, 10_000.0);
		assert_eq!(config.edge.distance, 150.0);
		assert_eq!(config.surface.resize_debounce_ms, 100);
		assert_eq!(config.surface.accent_fallback, "#818cf8");
	}

	#[test]
	fn partial_override_keeps_other_defaults() {
		let json = r#"{ "burst": { "interval_ms": 5000 }, "field": { "count": 50 } }"#;
		let config = BackgroundConfig::from_json(json).unwrap();
		assert_eq!(config.burst.interval_ms, 5000.0);
		assert_eq!(config.burst.lifetime, 60);
		assert_eq!(config.field.count, 50);
		assert_eq!(config.field.damping, 0.99);
		assert_eq!(config.pointer.radius, 200.0);
	}

	#[test]
	fn empty_object_is_default() {
		let config = BackgroundConfig::from_json("{}").unwrap();
		assert_eq!(config.edge.max_alpha, 0.7);
	}

	#[test]
	fn malformed_json_is_an_error() {
		assert!(BackgroundConfig::from_json("{ field: ").is_err());
	}

	#[test]
	fn overrides_parse_through_crate_root() {
		let config = crate::BackgroundConfig::from_json(r#"{ "edge": { "distance": 90 } }"#).unwrap();
		let edge: &crate::components::code_background::EdgeConfig = &config.edge;
		assert_eq!(edge.distance, 90.0);
	}
}
