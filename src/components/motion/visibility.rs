//! Viewport-visibility trigger for entrance animations.
//!
//! Wraps an `IntersectionObserver` around a `NodeRef` target and exposes the
//! result as reactive signals. The transition logic itself lives in
//! [`VisibilityState`], a plain struct with no DOM types, so the trigger-once
//! latch can be exercised without a browser.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use leptos::html::ElementType;
use leptos::prelude::*;
use wasm_bindgen::prelude::*;
use web_sys::{
	AddEventListenerOptions, IntersectionObserver, IntersectionObserverEntry,
	IntersectionObserverInit,
};

use crate::env;

/// Direction of the most recent scroll movement.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ScrollDirection {
	/// Scroll offset decreased since the last sample.
	Up,
	/// Scroll offset increased since the last sample.
	Down,
}

/// Configuration for [`use_scroll_animation`].
#[derive(Clone, Debug)]
pub struct ScrollAnimationOptions {
	/// Fraction of the element's area that must be visible to trigger.
	pub threshold: f64,
	/// Expansion/contraction of the viewport test box (CSS margin syntax).
	pub root_margin: String,
	/// Once visible, stay visible forever.
	pub trigger_once: bool,
	/// Also report the latest scroll direction via a throttled listener.
	pub track_direction: bool,
}

impl Default for ScrollAnimationOptions {
	fn default() -> Self {
		Self {
			threshold: 0.1,
			root_margin: "0px".to_string(),
			trigger_once: true,
			track_direction: false,
		}
	}
}

/// Reactive output of [`use_scroll_animation`].
#[derive(Clone, Copy, Debug)]
pub struct ScrollAnimation {
	/// Whether the target is (or, with `trigger_once`, has ever been) visible.
	pub is_visible: ReadSignal<bool>,
	/// True once any intersection has occurred.
	pub has_animated: ReadSignal<bool>,
	/// Latest scroll direction, when `track_direction` is enabled.
	pub direction: ReadSignal<Option<ScrollDirection>>,
}

/// Visibility transitions, independent of the DOM.
///
/// With `trigger_once`, visibility latches: once an intersection has been
/// seen, later exit events are ignored. Without it, visibility tracks the
/// latest intersection event exactly.
#[derive(Clone, Copy, Debug)]
pub struct VisibilityState {
	trigger_once: bool,
	visible: bool,
	animated: bool,
}

impl VisibilityState {
	/// New state; nothing seen yet.
	pub fn new(trigger_once: bool) -> Self {
		Self {
			trigger_once,
			visible: false,
			animated: false,
		}
	}

	/// Force the terminal "already animated" state (reduced motion).
	pub fn force_visible(&mut self) {
		self.visible = true;
		self.animated = true;
	}

	/// Apply one intersection event.
	pub fn on_intersection(&mut self, intersecting: bool) {
		if intersecting {
			self.visible = true;
			self.animated = true;
		} else if !self.trigger_once {
			self.visible = false;
		}
	}

	/// Current visibility.
	pub fn is_visible(&self) -> bool {
		self.visible
	}

	/// Whether any intersection has ever occurred.
	pub fn has_animated(&self) -> bool {
		self.animated
	}
}

/// Scroll direction from two consecutive scroll offsets. Equal offsets give
/// no direction.
pub(crate) fn direction_between(previous: f64, current: f64) -> Option<ScrollDirection> {
	if current > previous {
		Some(ScrollDirection::Down)
	} else if current < previous {
		Some(ScrollDirection::Up)
	} else {
		None
	}
}

/// Observes when `target` enters the viewport and exposes visibility signals
/// for gating entrance animations.
///
/// Under a reduced-motion preference the observer is skipped entirely and
/// both signals report true immediately, so no content stays hidden waiting
/// for an animation that will never run. If the target ref is not yet
/// attached when the effect first runs, setup is retried once it populates.
pub fn use_scroll_animation<E>(
	target: NodeRef<E>,
	options: ScrollAnimationOptions,
) -> ScrollAnimation
where
	E: ElementType + 'static,
	E::Output: JsCast + Clone + 'static,
{
	let (is_visible, set_is_visible) = signal(false);
	let (has_animated, set_has_animated) = signal(false);
	let (direction, set_direction) = signal(None::<ScrollDirection>);

	let state = Rc::new(RefCell::new(VisibilityState::new(options.trigger_once)));
	let observer: Rc<RefCell<Option<IntersectionObserver>>> = Rc::new(RefCell::new(None));
	let observer_cb: Rc<RefCell<Option<Closure<dyn FnMut(js_sys::Array)>>>> =
		Rc::new(RefCell::new(None));
	let scroll_cb: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
	let frame_cb: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
	let pending_frame: Rc<Cell<Option<i32>>> = Rc::new(Cell::new(None));

	let (state_init, observer_init, observer_cb_init) =
		(state.clone(), observer.clone(), observer_cb.clone());
	let (scroll_cb_init, frame_cb_init, pending_init) =
		(scroll_cb.clone(), frame_cb.clone(), pending_frame.clone());

	Effect::new(move |_| {
		let Some(element) = target.get() else {
			return;
		};
		// The ref signal fires again once populated; never register twice.
		if observer_init.borrow().is_some() {
			return;
		}
		let Ok(element) = element.dyn_into::<web_sys::Element>() else {
			return;
		};

		if env::prefers_reduced_motion() {
			state_init.borrow_mut().force_visible();
			set_is_visible.set(true);
			set_has_animated.set(true);
			return;
		}

		let entry_state = state_init.clone();
		let cb = Closure::<dyn FnMut(js_sys::Array)>::new(move |entries: js_sys::Array| {
			let Ok(entry) = entries.get(0).dyn_into::<IntersectionObserverEntry>() else {
				return;
			};
			let mut s = entry_state.borrow_mut();
			s.on_intersection(entry.is_intersecting());
			set_is_visible.set(s.is_visible());
			set_has_animated.set(s.has_animated());
		});

		let init = IntersectionObserverInit::new();
		init.set_threshold(&JsValue::from(options.threshold));
		init.set_root_margin(&options.root_margin);
		let Ok(obs) = IntersectionObserver::new_with_options(cb.as_ref().unchecked_ref(), &init)
		else {
			return;
		};
		obs.observe(&element);
		*observer_init.borrow_mut() = Some(obs);
		*observer_cb_init.borrow_mut() = Some(cb);

		if !options.track_direction {
			return;
		}

		let Some(window) = env::window() else {
			return;
		};
		let prev_y = Rc::new(Cell::new(env::scroll_y()));
		let ticking = Rc::new(Cell::new(false));

		let (ticking_frame, pending_frame_inner) = (ticking.clone(), pending_init.clone());
		*frame_cb_init.borrow_mut() = Some(Closure::new(move || {
			ticking_frame.set(false);
			pending_frame_inner.set(None);
			let y = env::scroll_y();
			if let Some(dir) = direction_between(prev_y.get(), y) {
				set_direction.set(Some(dir));
			}
			prev_y.set(y);
		}));

		let (frame_cb_scroll, pending_scroll) = (frame_cb_init.clone(), pending_init.clone());
		let scroll = Closure::<dyn FnMut()>::new(move || {
			// Coalesce bursts of scroll events to one sample per frame.
			if ticking.get() {
				return;
			}
			ticking.set(true);
			if let (Some(win), Some(cb)) = (env::window(), frame_cb_scroll.borrow().as_ref()) {
				pending_scroll.set(win.request_animation_frame(cb.as_ref().unchecked_ref()).ok());
			}
		});

		let listener_opts = AddEventListenerOptions::new();
		listener_opts.set_passive(true);
		let _ = window.add_event_listener_with_callback_and_add_event_listener_options(
			"scroll",
			scroll.as_ref().unchecked_ref(),
			&listener_opts,
		);
		*scroll_cb_init.borrow_mut() = Some(scroll);
	});

	// `on_cleanup` requires `Send + Sync`; the captured `Rc`s never leave the
	// single-threaded wasm main thread, so `SendWrapper` is sound here.
	let cleanup = send_wrapper::SendWrapper::new(move || {
		if let Some(obs) = observer.borrow_mut().take() {
			obs.disconnect();
		}
		observer_cb.borrow_mut().take();
		if let Some(cb) = scroll_cb.borrow_mut().take() {
			if let Some(window) = env::window() {
				let _ = window
					.remove_event_listener_with_callback("scroll", cb.as_ref().unchecked_ref());
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

	ScrollAnimation {
		is_visible,
		has_animated,
		direction,
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn trigger_once_latches_visibility() {
		let mut state = VisibilityState::new(true);
		assert!(!state.is_visible());

		state.on_intersection(true);
		assert!(state.is_visible());
		assert!(state.has_animated());

		// Exit events must not clear the latch.
		state.on_intersection(false);
		assert!(state.is_visible());
		assert!(state.has_animated());

		state.on_intersection(false);
		assert!(state.is_visible());
	}

	#[test]
	fn retriggerable_tracks_latest_event() {
		let mut state = VisibilityState::new(false);

		state.on_intersection(true);
		assert!(state.is_visible());

		state.on_intersection(false);
		assert!(!state.is_visible());
		// Has-animated still remembers the first entry.
		assert!(state.has_animated());

		state.on_intersection(true);
		assert!(state.is_visible());
	}

	#[test]
	fn reduced_motion_forces_terminal_state() {
		let mut state = VisibilityState::new(true);
		state.force_visible();
		assert!(state.is_visible());
		assert!(state.has_animated());

		state.on_intersection(false);
		assert!(state.is_visible());
	}

	#[test]
	fn direction_from_offset_deltas() {
		assert_eq!(direction_between(0.0, 120.0), Some(ScrollDirection::Down));
		assert_eq!(direction_between(120.0, 40.0), Some(ScrollDirection::Up));
		assert_eq!(direction_between(50.0, 50.0), None);
	}
}
