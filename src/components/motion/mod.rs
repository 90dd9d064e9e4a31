//! Scroll-driven animation hooks.
//!
//! Three independent primitives, each observing the shared viewport state
//! without mutating it:
//!
//! - [`use_scroll_animation`]: gates one-shot entrance animations on element
//!   visibility, via an intersection observer.
//! - [`use_scroll_progress`]: how far down the page the user has scrolled,
//!   as a percentage, coalesced to animation-frame cadence.
//! - [`use_smooth_scroll`]: smooth-scrolls to a named section, compensating
//!   for the fixed header.
//!
//! Every hook releases its observers and listeners on unmount; no callback
//! fires after the owning view is gone.

mod progress;
mod smooth_scroll;
mod visibility;

pub use progress::{scroll_progress, use_scroll_progress};
pub use smooth_scroll::{HEADER_OFFSET_PX, scroll_to_section, scroll_to_top, use_smooth_scroll};
pub use visibility::{
	ScrollAnimation, ScrollAnimationOptions, ScrollDirection, use_scroll_animation,
};
