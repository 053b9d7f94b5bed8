//! Scroll-driven per-character text scatter effects.
//!
//! This crate re-exports the two halves:
//! - [`scatter`]: the headless engine (seeds, interpolation policies, per-frame transforms)
//! - [`adapter`]: host integration (progress sources, translation cycling, mounts)
//!
//! ```
//! use scroll_scatter::{ScatterOptions, ScatterText};
//!
//! let mut text = ScatterText::new(ScatterOptions::new("Hi there")).unwrap();
//! text.set_progress(0.5);
//! assert!(text.is_settled());
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

pub use scatter;
pub use scatter::*;
pub use scatter_adapter as adapter;
