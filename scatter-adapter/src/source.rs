use alloc::boxed::Box;
use alloc::vec::Vec;
use core::fmt;

use scatter::ScrollProgress;

use crate::{Region, ScrollOffsets};

/// A callback receiving every progress change.
pub type ProgressListener = Box<dyn FnMut(ScrollProgress)>;

/// Identifies one listener registered on a [`ProgressSource`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SubscriptionId(u64);

/// Something that observes a tracked region and reports its normalized scroll progress.
///
/// Listeners are called synchronously, in subscription order, whenever the progress changes.
/// Implementations should not call listeners for updates that leave progress unchanged.
pub trait ProgressSource {
    fn subscribe(&mut self, listener: ProgressListener) -> SubscriptionId;

    /// Removes a listener. Returns `false` when `id` is not (or no longer) subscribed.
    fn unsubscribe(&mut self, id: SubscriptionId) -> bool;

    /// The most recently reported progress.
    fn progress(&self) -> ScrollProgress;
}

/// A [`ProgressSource`] for one tracked region, fed by the host's layout/scroll events.
///
/// Hosts either report raw geometry via [`ViewportProgress::on_layout`], or (when their platform
/// already computes a normalized value) via [`ViewportProgress::set_progress`].
pub struct ViewportProgress {
    offsets: ScrollOffsets,
    progress: ScrollProgress,
    listeners: Vec<(SubscriptionId, ProgressListener)>,
    next_id: u64,
}

impl ViewportProgress {
    pub fn new(offsets: ScrollOffsets) -> Self {
        Self {
            offsets,
            progress: ScrollProgress::START,
            listeners: Vec::new(),
            next_id: 0,
        }
    }

    pub fn offsets(&self) -> ScrollOffsets {
        self.offsets
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }

    /// Call this on every scroll/resize event with the region's current geometry.
    pub fn on_layout(&mut self, region: Region, viewport_size: f32) {
        let progress = self.offsets.progress(region, viewport_size);
        self.publish(progress);
    }

    /// Reports an already-normalized progress value. Out-of-range values are clamped.
    pub fn set_progress(&mut self, progress: f32) {
        self.publish(ScrollProgress::new(progress));
    }

    fn publish(&mut self, progress: ScrollProgress) {
        if self.progress == progress {
            return;
        }
        atrace!(
            progress = progress.get(),
            listeners = self.listeners.len(),
            "ViewportProgress::publish"
        );
        self.progress = progress;
        for (_, listener) in &mut self.listeners {
            listener(progress);
        }
    }
}

impl Default for ViewportProgress {
    fn default() -> Self {
        Self::new(ScrollOffsets::default())
    }
}

impl ProgressSource for ViewportProgress {
    fn subscribe(&mut self, listener: ProgressListener) -> SubscriptionId {
        let id = SubscriptionId(self.next_id);
        self.next_id = self.next_id.wrapping_add(1);
        self.listeners.push((id, listener));
        adebug!(id = id.0, "ViewportProgress::subscribe");
        id
    }

    fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let Some(pos) = self.listeners.iter().position(|(i, _)| *i == id) else {
            return false;
        };
        self.listeners.remove(pos);
        adebug!(id = id.0, "ViewportProgress::unsubscribe");
        true
    }

    fn progress(&self) -> ScrollProgress {
        self.progress
    }
}

impl fmt::Debug for ViewportProgress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ViewportProgress")
            .field("offsets", &self.offsets)
            .field("progress", &self.progress)
            .field("listeners", &self.listeners.len())
            .finish()
    }
}
