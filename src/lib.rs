//! scroll-motion: scroll-driven animation primitives for a Leptos portfolio site.
//!
//! This crate provides the animation core behind a single-page portfolio:
//! visibility-gated entrance animations, a throttled scroll-progress meter,
//! smooth section navigation, and a device-adaptive canvas particle
//! background. The page chrome itself is a thin view layer over these
//! primitives.

use leptos::prelude::*;
use leptos_meta::*;
use log::{Level, info, warn};
use wasm_bindgen::JsCast;
use web_sys::HtmlScriptElement;

pub mod components;
pub mod env;

pub use components::motion::{
	HEADER_OFFSET_PX, ScrollAnimation, ScrollAnimationOptions, ScrollDirection, scroll_progress,
	scroll_to_section, scroll_to_top, use_scroll_animation, use_scroll_progress, use_smooth_scroll,
};
pub use components::particle_field::{FieldConfig, ParticleBackground};

/// Initialize logging and panic hooks for the WASM target.
pub fn init_logging() {
	let _ = console_log::init_with_level(Level::Debug);
	console_error_panic_hook::set_once();
	info!("scroll-motion: logging initialized");
}

/// Load particle field overrides from a script element with id="motion-config".
/// Expected format: JSON with any subset of [`FieldConfig`] fields.
/// A missing element means defaults; malformed JSON is logged and ignored.
pub fn load_field_config() -> FieldConfig {
	let Some(script) = env::window()
		.and_then(|w| w.document())
		.and_then(|d| d.get_element_by_id("motion-config"))
		.and_then(|e| e.dyn_into::<HtmlScriptElement>().ok())
	else {
		return FieldConfig::default();
	};
	let Ok(json_text) = script.text() else {
		return FieldConfig::default();
	};

	match serde_json::from_str::<FieldConfig>(&json_text) {
		Ok(config) => {
			info!("scroll-motion: loaded field config overrides");
			config
		}
		Err(e) => {
			warn!("scroll-motion: failed to parse motion config: {}", e);
			FieldConfig::default()
		}
	}
}

/// Fixed progress bar across the top of the page, scaled by scroll progress.
#[component]
fn ScrollProgressBar() -> impl IntoView {
	let progress = use_scroll_progress();

	view! {
		<div
			class="scroll-progress-bar"
			style:transform=move || format!("scaleX({})", progress.get() / 100.0)
		/>
	}
}

/// Navigation bar with smooth-scrolling section links.
#[component]
fn SiteNav() -> impl IntoView {
	let scroll_to = use_smooth_scroll();

	view! {
		<nav class="site-nav">
			{["about", "skills", "projects", "contact"]
				.into_iter()
				.map(|section| {
					let scroll_to = scroll_to.clone();
					view! {
						<button on:click=move |_| scroll_to(section)>{section}</button>
					}
				})
				.collect_view()}
		</nav>
	}
}

/// A page section that fades in the first time it scrolls into view.
#[component]
fn RevealSection(
	#[prop(into)] id: String,
	#[prop(into)] title: String,
	children: Children,
) -> impl IntoView {
	let section_ref = NodeRef::<leptos::html::Section>::new();
	let animation = use_scroll_animation(section_ref, ScrollAnimationOptions::default());

	view! {
		<section
			id=id
			node_ref=section_ref
			class=move || {
				if animation.is_visible.get() { "section is-visible" } else { "section" }
			}
		>
			<h2>{title}</h2>
			{children()}
		</section>
	}
}

/// Back-to-top button with a ring that fills as the page scrolls.
#[component]
fn BackToTop() -> impl IntoView {
	let progress = use_scroll_progress();
	let circumference = 2.0 * std::f64::consts::PI * 24.0;

	view! {
		<Show when={move || progress.get() > 5.0}>
			<button class="back-to-top" aria-label="Back to top" on:click=move |_| scroll_to_top()>
				<svg viewBox="0 0 56 56">
					<circle
						cx="28"
						cy="28"
						r="24"
						fill="none"
						stroke="rgba(0, 87, 146, 0.2)"
						stroke-width="3"
					/>
					<circle
						cx="28"
						cy="28"
						r="24"
						fill="none"
						stroke="#61dafb"
						stroke-width="3"
						stroke-dasharray=circumference.to_string()
						stroke-dashoffset=move || {
							format!("{}", circumference * (1.0 - progress.get() / 100.0))
						}
					/>
				</svg>
				"↑"
			</button>
		</Show>
	}
}

/// Main application component: page chrome composed over the animation core.
#[component]
pub fn App() -> impl IntoView {
	provide_meta_context();

	let config = load_field_config();

	view! {
		<Html attr:lang="en" attr:dir="ltr" attr:data-theme="dark" />
		<Title text="Karisa Mkala | Portfolio" />
		<Meta charset="UTF-8" />
		<Meta name="viewport" content="width=device-width, initial-scale=1.0" />

		<ScrollProgressBar />
		<ParticleBackground config=config />
		<SiteNav />
		<main>
			<RevealSection id="about" title="About">
				<p>"Engineer and designer building fast, accessible web experiences."</p>
			</RevealSection>
			<RevealSection id="skills" title="Skills">
				<p>"Rust, WebAssembly, Leptos, canvas rendering, systems design."</p>
			</RevealSection>
			<RevealSection id="projects" title="Projects">
				<p>"Selected case studies and open-source work."</p>
			</RevealSection>
			<RevealSection id="contact" title="Contact">
				<p>"Say hello — the inbox is always open."</p>
			</RevealSection>
		</main>
		<BackToTop />
	}
}
