//! Page scroll progress as a percentage.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use leptos::prelude::*;
use wasm_bindgen::prelude::*;
use web_sys::AddEventListenerOptions;

use crate::env;

/// Scroll progress in `[0, 100]` for the given scroll offset and geometry.
///
/// A document no taller than the viewport has no scrollable distance; that
/// case yields `0.0` rather than dividing by a non-positive denominator.
pub fn scroll_progress(scroll_top: f64, document_height: f64, viewport_height: f64) -> f64 {
	let scrollable = document_height - viewport_height;
	if scrollable <= 0.0 {
		return 0.0;
	}
	(scroll_top / scrollable * 100.0).clamp(0.0, 100.0)
}

fn current_progress() -> f64 {
	let (_, viewport_height) = env::viewport_size();
	scroll_progress(env::scroll_y(), env::document_height(), viewport_height)
}

/// Tracks how far down the page the user has scrolled, as a reactive value
/// in `[0, 100]`.
///
/// Recomputed on scroll and resize, coalesced to at most one sample per
/// animation frame. Listeners are removed on unmount.
pub fn use_scroll_progress() -> ReadSignal<f64> {
	let (progress, set_progress) = signal(0.0);

	let event_cb: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
	let frame_cb: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
	let pending_frame: Rc<Cell<Option<i32>>> = Rc::new(Cell::new(None));

	let (event_cb_init, frame_cb_init, pending_init) =
		(event_cb.clone(), frame_cb.clone(), pending_frame.clone());

	Effect::new(move |_| {
		if event_cb_init.borrow().is_some() {
			return;
		}
		let Some(window) = env::window() else {
			return;
		};

		let ticking = Rc::new(Cell::new(false));

		let (ticking_frame, pending_frame_inner) = (ticking.clone(), pending_init.clone());
		*frame_cb_init.borrow_mut() = Some(Closure::new(move || {
			ticking_frame.set(false);
			pending_frame_inner.set(None);
			set_progress.set(current_progress());
		}));

		let (frame_cb_event, pending_event) = (frame_cb_init.clone(), pending_init.clone());
		let on_event = Closure::<dyn FnMut()>::new(move || {
			// A pending recomputation is never scheduled twice.
			if ticking.get() {
				return;
			}
			ticking.set(true);
			if let (Some(win), Some(cb)) = (env::window(), frame_cb_event.borrow().as_ref()) {
				pending_event.set(win.request_animation_frame(cb.as_ref().unchecked_ref()).ok());
			}
		});

		let listener_opts = AddEventListenerOptions::new();
		listener_opts.set_passive(true);
		for event in ["scroll", "resize"] {
			let _ = window.add_event_listener_with_callback_and_add_event_listener_options(
				event,
				on_event.as_ref().unchecked_ref(),
				&listener_opts,
			);
		}
		*event_cb_init.borrow_mut() = Some(on_event);

		set_progress.set(current_progress());
	});

	// `on_cleanup` requires `Send + Sync`; the captured `Rc`s never leave the
	// single-threaded wasm main thread, so `SendWrapper` is sound here.
	let cleanup = send_wrapper::SendWrapper::new(move || {
		if let Some(cb) = event_cb.borrow_mut().take() {
			if let Some(window) = env::window() {
				for event in ["scroll", "resize"] {
					let _ = window
						.remove_event_listener_with_callback(event, cb.as_ref().unchecked_ref());
				}
			}
		}
		if let Some(id) = pending_frame.take() {
			if let Some(window) = env::window() {
				let _ = window.cancel_animation_frame(id);
			}
		}
		frame_cb.borrow_mut().take();
	});
	on_cleanup(move || cleanup.take()());

	progress
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn halfway_through_a_tall_page() {
		// 2000px document in an 800px viewport, scrolled to 600px.
		assert_eq!(scroll_progress(600.0, 2000.0, 800.0), 50.0);
	}

	#[test]
	fn clamps_at_both_boundaries() {
		assert_eq!(scroll_progress(-50.0, 2000.0, 800.0), 0.0);
		assert_eq!(scroll_progress(0.0, 2000.0, 800.0), 0.0);
		assert_eq!(scroll_progress(1200.0, 2000.0, 800.0), 100.0);
		assert_eq!(scroll_progress(5000.0, 2000.0, 800.0), 100.0);
	}

	#[test]
	fn degenerate_geometry_yields_zero_not_nan() {
		assert_eq!(scroll_progress(0.0, 800.0, 800.0), 0.0);
		assert_eq!(scroll_progress(300.0, 800.0, 800.0), 0.0);
		assert_eq!(scroll_progress(300.0, 600.0, 800.0), 0.0);
		assert!(scroll_progress(300.0, 800.0, 800.0).is_finite());
	}

	#[test]
	fn monotonic_in_scroll_offset() {
		let mut last = 0.0;
		for step in 0..=24 {
			let progress = scroll_progress(f64::from(step) * 50.0, 2000.0, 800.0);
			assert!(progress >= last, "progress regressed at step {step}");
			last = progress;
		}
		assert_eq!(last, 100.0);
	}
}
