use alloc::boxed::Box;
use alloc::rc::Rc;
use core::cell::{Cell, RefCell};

use scatter::ScrollProgress;

use crate::{Controller, Frame, ProgressSource, SubscriptionId};

/// A [`Controller`] attached to a [`ProgressSource`] for the lifetime of one mount.
///
/// Attaching registers a single listener on the source and starts the cycler. Teardown (explicit
/// via [`Mount::unmount`], or on drop) cancels the cycler and removes the listener, so repeated
/// mount/unmount cycles leave nothing running behind.
///
/// The listener only records the latest progress; transforms are recomputed in one pass when the
/// adapter calls [`Mount::tick`].
pub struct Mount<S: ProgressSource> {
    source: Rc<RefCell<S>>,
    subscription: Option<SubscriptionId>,
    latest: Rc<Cell<ScrollProgress>>,
    controller: Controller,
}

impl<S: ProgressSource> Mount<S> {
    pub fn attach(source: Rc<RefCell<S>>, mut controller: Controller, now_ms: u64) -> Self {
        let latest = Rc::new(Cell::new(controller.text().progress()));
        let subscription = match source.try_borrow_mut() {
            Ok(mut s) => {
                latest.set(s.progress());
                let sink = Rc::clone(&latest);
                Some(s.subscribe(Box::new(move |p: ScrollProgress| sink.set(p))))
            }
            Err(_) => {
                awarn!("Mount::attach: progress source is busy, mounting without scroll updates");
                None
            }
        };

        controller.on_progress(latest.get());
        controller.start(now_ms);
        adebug!(subscribed = subscription.is_some(), now_ms, "Mount::attach");

        Self {
            source,
            subscription,
            latest,
            controller,
        }
    }

    pub fn controller(&self) -> &Controller {
        &self.controller
    }

    pub fn controller_mut(&mut self) -> &mut Controller {
        &mut self.controller
    }

    pub fn is_subscribed(&self) -> bool {
        self.subscription.is_some()
    }

    /// Applies the latest reported progress and advances the cycler.
    ///
    /// Returns `true` when either changed.
    pub fn tick(&mut self, now_ms: u64) -> bool {
        let progress = self.latest.get();
        let moved = self.controller.text().progress() != progress;
        self.controller.on_progress(progress);
        let cycled = self.controller.tick(now_ms);
        moved || cycled
    }

    pub fn frame(&self) -> Frame {
        self.controller.frame()
    }

    /// Tears the mount down now rather than at drop.
    pub fn unmount(mut self) {
        self.teardown();
    }

    fn teardown(&mut self) {
        self.controller.teardown();
        let Some(id) = self.subscription.take() else {
            return;
        };
        match self.source.try_borrow_mut() {
            Ok(mut s) => {
                if !s.unsubscribe(id) {
                    awarn!(?id, "Mount: listener was already gone at teardown");
                }
            }
            Err(_) => {
                awarn!(?id, "Mount: progress source is busy at teardown, listener not removed");
            }
        }
        adebug!("Mount::teardown");
    }
}

impl<S: ProgressSource> Drop for Mount<S> {
    fn drop(&mut self) {
        self.teardown();
    }
}
