//! code-background: animated particle canvas for the portfolio site.
//!
//! This crate provides a WASM-based background component that renders a
//! drifting particle field with pointer attraction, periodic bursts and
//! proximity edges, and tears everything down cleanly on unmount.

use leptos::prelude::*;
use leptos_meta::*;
use log::{Level, info};

pub mod components;

pub use components::code_background::{BackgroundConfig, CodeBackground};

/// Initialize logging and panic hooks for the WASM target.
pub fn init_logging() {
	let _ = console_log::init_with_level(Level::Debug);
	console_error_panic_hook::set_once();
	info!("code-background: logging initialized");
}

/// Demo page hosting the background behind a hero caption.
#[component]
pub fn App() -> impl IntoView {
	provide_meta_context();

	view! {
		<Html attr:lang="en" attr:dir="ltr" attr:data-theme="dark" />
		<Title text="Portfolio" />
		<Meta charset="UTF-8" />
		<Meta name="viewport" content="width=device-width, initial-scale=1.0" />

		<div class="fullscreen-background">
			<CodeBackground />
			<section class="hero">
				<h1>"Hi, I'm a frontend developer"</h1>
				<p class="subtitle">"Move the pointer to pull the particles."</p>
			</section>
		</div>
	}
}
