//! Animated particle background.
//!
//! Renders a field of drifting particles on an HTML canvas with:
//! - Attraction toward the mouse pointer (desktop, motion allowed)
//! - A periodic radial burst that pushes nearby particles away
//! - Proximity edges between nearby particles, lit up by bursts
//! - Debounced resizing and full teardown of listeners, timers and frames
//!
//! # Example
//!
//! ```ignore
//! use code_background::CodeBackground;
//!
//! view! {
//!     <main>
//!         <CodeBackground />
//!         <section class="hero">"..."</section>
//!     </main>
//! }
//! ```

mod burst;
mod component;
mod config;
mod environment;
mod error;
mod host;
mod lifecycle;
mod particles;
mod render;
mod rng;
mod simulation;
mod surface;
mod theme;

pub use component::CodeBackground;
pub use config::{
	BackgroundConfig, BurstConfig, EdgeConfig, FieldConfig, PointerConfig, SurfaceConfig,
};
