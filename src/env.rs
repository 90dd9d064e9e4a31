//! Read-only browser environment queries.
//!
//! Everything the animation primitives need from the page is funneled through
//! this module: viewport geometry, scroll offset, device capability hints and
//! the reduced-motion accessibility preference. Each query degrades to a safe
//! default when the underlying API is unavailable, so callers never have to
//! handle a missing browser feature themselves. The actual math over these
//! values lives in pure functions elsewhere, which is what keeps the core
//! unit-testable without a DOM.

use web_sys::Window;

/// Media query string for the OS-level reduced motion preference.
const REDUCED_MOTION_QUERY: &str = "(prefers-reduced-motion: reduce)";

/// The global window, if we are running in a browser context.
pub fn window() -> Option<Window> {
	web_sys::window()
}

/// Current viewport size in logical pixels. Falls back to zero when the
/// window reports nothing useful.
pub fn viewport_size() -> (f64, f64) {
	let Some(window) = window() else {
		return (0.0, 0.0);
	};
	let w = window
		.inner_width()
		.ok()
		.and_then(|v| v.as_f64())
		.unwrap_or(0.0);
	let h = window
		.inner_height()
		.ok()
		.and_then(|v| v.as_f64())
		.unwrap_or(0.0);
	(w, h)
}

/// Vertical scroll offset of the viewport.
pub fn scroll_y() -> f64 {
	window().and_then(|w| w.scroll_y().ok()).unwrap_or(0.0)
}

/// Full scrollable height of the document.
pub fn document_height() -> f64 {
	window()
		.and_then(|w| w.document())
		.and_then(|d| d.document_element())
		.map(|e| f64::from(e.scroll_height()))
		.unwrap_or(0.0)
}

/// Reported logical CPU core count, as a coarse capability hint.
pub fn logical_cores() -> u32 {
	window()
		.map(|w| w.navigator().hardware_concurrency() as u32)
		.filter(|&c| c > 0)
		.unwrap_or(1)
}

/// Whether the OS/browser asks for animations to be minimized.
/// A missing `matchMedia` implementation reads as "no preference".
pub fn prefers_reduced_motion() -> bool {
	window()
		.and_then(|w| w.match_media(REDUCED_MOTION_QUERY).ok())
		.flatten()
		.map(|mql| mql.matches())
		.unwrap_or(false)
}
