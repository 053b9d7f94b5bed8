use alloc::sync::Arc;
use alloc::vec::Vec;
use core::cell::Cell;
use core::fmt;

use rand::Rng;

use crate::glyph::segment;
use crate::{
    CharacterSeed, CharacterTransform, Glyph, GlyphFrame, InterpolationPolicy, Result,
    ScatterOptions, ScrollProgress,
};

/// A callback fired when the engine's progress or policy changes.
pub type OnChangeCallback = Arc<dyn Fn(&ScatterText) + Send + Sync>;

/// A headless scroll-driven text scatter engine: one instance per mount.
///
/// The text is segmented and seeded exactly once, at construction. After that the only mutable
/// input is the scroll progress (plus the policy), and every character's transform is a pure
/// function of `(progress, seed, policy)`. Nothing accumulates between frames.
///
/// This type does not hold any UI objects. Your adapter feeds it progress values and renders
/// through [`ScatterText::for_each_transform`] or [`ScatterText::frame`].
#[derive(Clone)]
pub struct ScatterText {
    options: ScatterOptions,
    glyphs: Vec<Glyph>,
    seeds: Vec<CharacterSeed>,
    progress: ScrollProgress,
    on_change: Option<OnChangeCallback>,

    notify_depth: Cell<usize>,
    notify_pending: Cell<bool>,
}

impl ScatterText {
    /// Creates an engine, drawing seeds from the thread-local RNG.
    #[cfg(feature = "std")]
    pub fn new(options: ScatterOptions) -> Result<Self> {
        Self::with_rng(options, &mut rand::thread_rng())
    }

    /// Creates an engine, drawing one seed per glyph from `rng`.
    pub fn with_rng<R: Rng + ?Sized>(options: ScatterOptions, rng: &mut R) -> Result<Self> {
        options.validate()?;
        let glyphs = segment(&options.text);
        let seeds = options.seed_range.generate(glyphs.len(), rng);
        Ok(Self::from_parts(options, glyphs, seeds))
    }

    /// Creates an engine with caller-provided seeds.
    ///
    /// Glyphs without a seed (when `seeds` is shorter than the text) use
    /// [`CharacterSeed::ZERO`], i.e. they are always settled. Extra seeds are dropped.
    pub fn with_seeds(options: ScatterOptions, mut seeds: Vec<CharacterSeed>) -> Result<Self> {
        options.validate()?;
        let glyphs = segment(&options.text);
        if seeds.len() < glyphs.len() {
            swarn!(
                seeds = seeds.len(),
                glyphs = glyphs.len(),
                "ScatterText: missing seeds, substituting zero offsets"
            );
        }
        seeds.truncate(glyphs.len());
        Ok(Self::from_parts(options, glyphs, seeds))
    }

    fn from_parts(
        options: ScatterOptions,
        glyphs: Vec<Glyph>,
        seeds: Vec<CharacterSeed>,
    ) -> Self {
        sdebug!(
            count = glyphs.len(),
            policy = options.policy.name(),
            "ScatterText::new"
        );
        Self {
            options,
            glyphs,
            seeds,
            progress: ScrollProgress::START,
            on_change: None,
            notify_depth: Cell::new(0),
            notify_pending: Cell::new(false),
        }
    }

    pub fn options(&self) -> &ScatterOptions {
        &self.options
    }

    pub fn text(&self) -> &str {
        &self.options.text
    }

    pub fn len(&self) -> usize {
        self.glyphs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.glyphs.is_empty()
    }

    pub fn glyphs(&self) -> &[Glyph] {
        &self.glyphs
    }

    pub fn seeds(&self) -> &[CharacterSeed] {
        &self.seeds
    }

    /// The seed for `index`, or [`CharacterSeed::ZERO`] when there is none.
    pub fn seed_at(&self, index: usize) -> CharacterSeed {
        self.seeds.get(index).copied().unwrap_or(CharacterSeed::ZERO)
    }

    pub fn policy(&self) -> InterpolationPolicy {
        self.options.policy
    }

    /// Switches the policy of a live mount. Seeds are kept.
    pub fn set_policy(&mut self, policy: InterpolationPolicy) -> Result<()> {
        policy.validate()?;
        if self.options.policy == policy {
            return Ok(());
        }
        sdebug!(policy = policy.name(), "ScatterText::set_policy");
        self.options.policy = policy;
        self.notify();
        Ok(())
    }

    pub fn progress(&self) -> ScrollProgress {
        self.progress
    }

    /// Applies a progress value from the host. Out-of-range values are clamped.
    pub fn set_progress(&mut self, progress: impl Into<ScrollProgress>) {
        let progress = progress.into();
        if self.progress == progress {
            return;
        }
        strace!(progress = progress.get(), "ScatterText::set_progress");
        self.progress = progress;
        self.notify();
    }

    pub fn set_on_change(
        &mut self,
        on_change: Option<impl Fn(&ScatterText) + Send + Sync + 'static>,
    ) {
        self.on_change = on_change.map(|f| Arc::new(f) as _);
    }

    fn notify_now(&self) {
        if let Some(cb) = &self.on_change {
            cb(self);
        }
    }

    fn notify(&self) {
        if self.notify_depth.get() > 0 {
            self.notify_pending.set(true);
            return;
        }
        self.notify_now();
    }

    /// Batches multiple updates into a single `on_change` notification.
    pub fn batch_update(&mut self, f: impl FnOnce(&mut Self)) {
        let depth = self.notify_depth.get();
        self.notify_depth.set(depth.saturating_add(1));

        f(self);

        let depth = self.notify_depth.get();
        debug_assert!(depth > 0, "notify_depth underflow");
        let next = depth.saturating_sub(1);
        self.notify_depth.set(next);

        if next == 0 && self.notify_pending.replace(false) {
            self.notify_now();
        }
    }

    /// The transform of the glyph at `index` for the current progress.
    pub fn transform_at(&self, index: usize) -> Option<CharacterTransform> {
        if index >= self.glyphs.len() {
            return None;
        }
        Some(self.options.policy.map(self.progress, self.seed_at(index)))
    }

    /// Visits every glyph in order with its current transform, without allocating.
    pub fn for_each_transform(&self, mut f: impl FnMut(usize, Glyph, CharacterTransform)) {
        let policy = self.options.policy;
        let progress = self.progress;
        for (i, &glyph) in self.glyphs.iter().enumerate() {
            f(i, glyph, policy.map(progress, self.seed_at(i)));
        }
    }

    /// Collects the current frame.
    pub fn frame(&self) -> Vec<GlyphFrame> {
        let mut out = Vec::with_capacity(self.glyphs.len());
        self.frame_into(&mut out);
        out
    }

    /// Like [`ScatterText::frame`], reusing `out`'s allocation.
    pub fn frame_into(&self, out: &mut Vec<GlyphFrame>) {
        out.clear();
        self.for_each_transform(|index, glyph, transform| {
            out.push(GlyphFrame {
                index,
                glyph,
                transform,
            });
        });
    }

    /// Whether every glyph is at rest (zero offset, full opacity) for the current progress.
    pub fn is_settled(&self) -> bool {
        let mut settled = true;
        self.for_each_transform(|_, _, t| settled &= t.is_settled());
        settled
    }
}

impl fmt::Debug for ScatterText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ScatterText")
            .field("options", &self.options)
            .field("seeds", &self.seeds.len())
            .field("progress", &self.progress)
            .field("on_change", &self.on_change.as_ref().map(|_| ".."))
            .finish()
    }
}
