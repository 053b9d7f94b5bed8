//! Adapter utilities for the `scatter` crate.
//!
//! The `scatter` crate is UI-agnostic and focuses on the per-character math and state. This
//! crate provides small, framework-neutral pieces an adapter needs around it:
//!
//! - Scroll progress measurement (`ScrollOffsets`, `ViewportProgress`) behind the
//!   `ProgressSource` contract
//! - The translation cycler (`TranslationTable`, `TranslationCycler`)
//! - A `Controller` composing both, and a `Mount` tying it to a progress source with scoped
//!   teardown
//!
//! This crate is intentionally framework-agnostic (no DOM/egui bindings).
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

mod controller;
mod cycler;
mod mount;
mod offsets;
mod source;
mod table;


pub use controller::{Controller, ControllerOptions, Frame};
pub use cycler::{DEFAULT_CYCLE_PERIOD_MS, TranslationCycler};
pub use mount::Mount;
pub use offsets::{Edge, Region, ScrollOffset, ScrollOffsets};
pub use source::{ProgressListener, ProgressSource, SubscriptionId, ViewportProgress};
pub use table::{Translation, TranslationTable};
