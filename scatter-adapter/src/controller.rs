use alloc::sync::Arc;
use alloc::vec::Vec;

use rand::Rng;
use scatter::{GlyphFrame, Result, ScatterOptions, ScatterText, ScrollProgress};

use crate::{DEFAULT_CYCLE_PERIOD_MS, Translation, TranslationCycler, TranslationTable};

/// Configuration for a [`Controller`].
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ControllerOptions {
    pub scatter: ScatterOptions,
    pub table: TranslationTable,
    pub cycle_period_ms: u64,
}

impl ControllerOptions {
    /// Options with the built-in "Hello" table cycling once per second.
    pub fn new(scatter: ScatterOptions) -> Self {
        Self {
            scatter,
            table: TranslationTable::hello(),
            cycle_period_ms: DEFAULT_CYCLE_PERIOD_MS,
        }
    }

    pub fn with_table(mut self, table: TranslationTable) -> Self {
        self.table = table;
        self
    }

    pub fn with_cycle_period_ms(mut self, cycle_period_ms: u64) -> Self {
        self.cycle_period_ms = cycle_period_ms;
        self
    }
}

/// Everything the renderer needs for one frame.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Frame {
    pub glyphs: Vec<GlyphFrame>,
    pub greeting: Translation,
}

/// A framework-neutral controller that composes a [`ScatterText`] with a [`TranslationCycler`].
///
/// This type does not hold any UI objects. Adapters drive it by calling:
/// - `on_progress` when the scroll progress changes
/// - `tick(now_ms)` each frame/timer tick (for the translation cycler)
///
/// and render from `frame()`. The two inputs are independent: progress never touches the cycler
/// and ticking never touches character transforms.
#[derive(Clone, Debug)]
pub struct Controller {
    text: ScatterText,
    cycler: TranslationCycler,
}

impl Controller {
    #[cfg(feature = "std")]
    pub fn new(options: ControllerOptions) -> Result<Self> {
        Self::with_rng(options, &mut rand::thread_rng())
    }

    /// Validates everything up front, so a bad table or period fails here rather than in a
    /// timer callback.
    pub fn with_rng<R: Rng + ?Sized>(options: ControllerOptions, rng: &mut R) -> Result<Self> {
        let cycler = TranslationCycler::new(Arc::new(options.table), options.cycle_period_ms)?;
        let text = ScatterText::with_rng(options.scatter, rng)?;
        Ok(Self { text, cycler })
    }

    pub fn from_parts(text: ScatterText, cycler: TranslationCycler) -> Self {
        Self { text, cycler }
    }

    pub fn text(&self) -> &ScatterText {
        &self.text
    }

    pub fn text_mut(&mut self) -> &mut ScatterText {
        &mut self.text
    }

    pub fn cycler(&self) -> &TranslationCycler {
        &self.cycler
    }

    pub fn cycler_mut(&mut self) -> &mut TranslationCycler {
        &mut self.cycler
    }

    /// Call this when the progress source reports a change.
    pub fn on_progress(&mut self, progress: impl Into<ScrollProgress>) {
        self.text.set_progress(progress);
    }

    pub fn start(&mut self, now_ms: u64) {
        self.cycler.start(now_ms);
    }

    /// Advances the cycler. Returns `true` when the greeting index moved.
    pub fn tick(&mut self, now_ms: u64) -> bool {
        self.cycler.tick(now_ms)
    }

    /// Stops the cycler for good.
    pub fn teardown(&mut self) {
        self.cycler.cancel();
    }

    pub fn greeting(&self) -> &Translation {
        self.cycler.current()
    }

    pub fn frame(&self) -> Frame {
        Frame {
            glyphs: self.text.frame(),
            greeting: self.greeting().clone(),
        }
    }

    /// Like [`Controller::frame`], reusing `out`'s glyph buffer.
    pub fn frame_into(&self, out: &mut Frame) {
        self.text.frame_into(&mut out.glyphs);
        out.greeting.clone_from(self.greeting());
    }
}
