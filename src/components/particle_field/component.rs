//! Leptos component wrapping the particle canvas.
//!
//! The component creates a canvas element, watches it with an intersection
//! observer, and runs the render loop via `requestAnimationFrame` only while
//! the canvas is in view. Each time visibility flips on, the particle batch
//! is rebuilt from a fresh environment sample; flipping off cancels the
//! pending frame and detaches the resize listener. Unmount releases
//! everything, so no callback can fire against a detached canvas.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use leptos::prelude::*;
use log::warn;
use wasm_bindgen::prelude::*;
use web_sys::{
	CanvasRenderingContext2d, HtmlCanvasElement, IntersectionObserver, IntersectionObserverEntry,
	IntersectionObserverInit,
};

use super::config::FieldConfig;
use super::particles::{DeviceProfile, ParticleField};
use super::render;
use crate::env;

/// Registrations owned by a running animation loop.
struct LoopHandles {
	pending_frame: Cell<Option<i32>>,
	frame_cb: RefCell<Option<Closure<dyn FnMut(f64)>>>,
	resize_cb: RefCell<Option<Closure<dyn FnMut()>>>,
}

impl LoopHandles {
	fn new() -> Self {
		Self {
			pending_frame: Cell::new(None),
			frame_cb: RefCell::new(None),
			resize_cb: RefCell::new(None),
		}
	}

	/// Request the next frame for the stored callback.
	fn schedule(&self) {
		if let (Some(window), Some(cb)) = (env::window(), self.frame_cb.borrow().as_ref()) {
			self.pending_frame
				.set(window.request_animation_frame(cb.as_ref().unchecked_ref()).ok());
		}
	}

	/// Release everything a loop start acquired. Idempotent, safe in any
	/// state: cancels the pending frame, drops the frame closure, and
	/// detaches the resize listener.
	fn stop(&self) {
		let window = env::window();
		if let Some(id) = self.pending_frame.take() {
			if let Some(ref win) = window {
				let _ = win.cancel_animation_frame(id);
			}
		}
		self.frame_cb.borrow_mut().take();
		if let Some(cb) = self.resize_cb.borrow_mut().take() {
			if let Some(ref win) = window {
				let _ = win
					.remove_event_listener_with_callback("resize", cb.as_ref().unchecked_ref());
			}
		}
	}
}

fn context_2d(canvas: &HtmlCanvasElement) -> Option<CanvasRenderingContext2d> {
	canvas
		.get_context("2d")
		.ok()
		.flatten()
		.and_then(|obj| obj.dyn_into().ok())
}

/// Ambient animated background: a blueprint grid plus drifting particles,
/// sized to the viewport and layered behind the page content.
///
/// The particle count adapts to the device (viewport width, core count,
/// reduced-motion preference), the loop is throttled to the configured
/// frame rate, and animation pauses entirely while the canvas is scrolled
/// out of view.
#[component]
pub fn ParticleBackground(#[prop(default = FieldConfig::default())] config: FieldConfig) -> impl IntoView {
	let canvas_ref = NodeRef::<leptos::html::Canvas>::new();
	let (in_view, set_in_view) = signal(false);

	let handles = Rc::new(LoopHandles::new());
	let observer: Rc<RefCell<Option<IntersectionObserver>>> = Rc::new(RefCell::new(None));
	let observer_cb: Rc<RefCell<Option<Closure<dyn FnMut(js_sys::Array)>>>> =
		Rc::new(RefCell::new(None));

	// Observing: flip `in_view` as the canvas crosses the visibility threshold.
	let (observer_init, observer_cb_init) = (observer.clone(), observer_cb.clone());
	let threshold = config.visibility_threshold;
	Effect::new(move |_| {
		let Some(canvas) = canvas_ref.get() else {
			return;
		};
		if observer_init.borrow().is_some() {
			return;
		}
		let canvas: HtmlCanvasElement = canvas.into();

		let cb = Closure::<dyn FnMut(js_sys::Array)>::new(move |entries: js_sys::Array| {
			if let Ok(entry) = entries.get(0).dyn_into::<IntersectionObserverEntry>() {
				set_in_view.set(entry.is_intersecting());
			}
		});
		let init = IntersectionObserverInit::new();
		init.set_threshold(&JsValue::from(threshold));
		match IntersectionObserver::new_with_options(cb.as_ref().unchecked_ref(), &init) {
			Ok(obs) => {
				obs.observe(&canvas);
				*observer_init.borrow_mut() = Some(obs);
				*observer_cb_init.borrow_mut() = Some(cb);
			}
			Err(_) => {
				warn!("particle background: intersection observer unavailable, canvas stays static");
			}
		}
	});

	// Animating: start the loop when visible, tear it down when not.
	let handles_anim = handles.clone();
	let config_anim = config;
	Effect::new(move |_| {
		handles_anim.stop();
		if !in_view.get() {
			return;
		}

		let Some(canvas) = canvas_ref.get_untracked() else {
			return;
		};
		let canvas: HtmlCanvasElement = canvas.into();
		let Some(ctx) = context_2d(&canvas) else {
			warn!("particle background: no 2d context, skipping effect");
			return;
		};
		let Some(window) = env::window() else {
			return;
		};

		let (w, h) = env::viewport_size();
		canvas.set_width(w as u32);
		canvas.set_height(h as u32);

		let profile = DeviceProfile {
			reduced_motion: env::prefers_reduced_motion(),
			viewport_width: w,
			logical_cores: env::logical_cores(),
		};
		let count = profile.particle_count(&config_anim);
		let field = Rc::new(RefCell::new(ParticleField::new(count, w, h)));

		// Reduced motion: one static grid frame, no loop.
		if count == 0 {
			render::render(&field.borrow(), &ctx, &config_anim);
			return;
		}

		let (field_resize, canvas_resize) = (field.clone(), canvas.clone());
		*handles_anim.resize_cb.borrow_mut() = Some(Closure::new(move || {
			let (nw, nh) = env::viewport_size();
			canvas_resize.set_width(nw as u32);
			canvas_resize.set_height(nh as u32);
			field_resize.borrow_mut().resize(nw, nh);
		}));
		if let Some(ref cb) = *handles_anim.resize_cb.borrow() {
			let _ = window.add_event_listener_with_callback("resize", cb.as_ref().unchecked_ref());
		}

		let frame_interval = config_anim.frame_interval_ms();
		let last_drawn = Cell::new(0.0_f64);
		let (handles_frame, config_frame) = (handles_anim.clone(), config_anim.clone());
		*handles_anim.frame_cb.borrow_mut() = Some(Closure::new(move |now: f64| {
			handles_frame.pending_frame.set(None);
			// Frames arriving faster than the target cadence are skipped, not queued.
			if now - last_drawn.get() >= frame_interval {
				last_drawn.set(now);
				let mut field = field.borrow_mut();
				field.step();
				render::render(&field, &ctx, &config_frame);
			}
			handles_frame.schedule();
		}));
		handles_anim.schedule();
	});

	// `on_cleanup` requires `Send + Sync`; the captured `Rc`s never leave the
	// single-threaded wasm main thread, so `SendWrapper` is sound here.
	let cleanup = send_wrapper::SendWrapper::new(move || {
		handles.stop();
		if let Some(obs) = observer.borrow_mut().take() {
			obs.disconnect();
		}
		observer_cb.borrow_mut().take();
	});
	on_cleanup(move || cleanup.take()());

	view! {
		<canvas
			node_ref=canvas_ref
			class="particle-background"
			aria-hidden="true"
			style="position: absolute; inset: 0; z-index: 0;"
		/>
	}
}
