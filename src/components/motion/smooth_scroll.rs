//! Smooth scrolling to named page sections.

use wasm_bindgen::JsCast;
use web_sys::{HtmlElement, ScrollBehavior, ScrollToOptions};

use crate::env;

/// Vertical clearance for the fixed navigation header.
pub const HEADER_OFFSET_PX: f64 = 80.0;

/// Smoothly scrolls the viewport so the element with `section_id` sits just
/// below the fixed header. An unknown id is a silent no-op.
pub fn scroll_to_section(section_id: &str) {
	let Some(document) = env::window().and_then(|w| w.document()) else {
		return;
	};
	let Some(element) = document.get_element_by_id(section_id) else {
		return;
	};
	let Ok(element) = element.dyn_into::<HtmlElement>() else {
		return;
	};
	scroll_to(f64::from(element.offset_top()) - HEADER_OFFSET_PX);
}

/// Smoothly scrolls back to the very top of the page.
pub fn scroll_to_top() {
	scroll_to(0.0);
}

fn scroll_to(top: f64) {
	let Some(window) = env::window() else {
		return;
	};
	let options = ScrollToOptions::new();
	options.set_top(top);
	options.set_behavior(ScrollBehavior::Smooth);
	window.scroll_to_with_scroll_to_options(&options);
}

/// Hook-shaped wrapper over [`scroll_to_section`] for use in view callbacks.
pub fn use_smooth_scroll() -> impl Fn(&str) + Clone {
	|section_id: &str| scroll_to_section(section_id)
}
