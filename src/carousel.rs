use std::time::Duration;

use crate::config::CarouselConfig;
use crate::timer::{FrameClock, Scheduler};
use crate::tree::ElementTree;

/// Wraps `index` back into `0..len` by a single step.
///
/// Anything at or past the end goes to the first slide and anything before the
/// start goes to the last one. This is not a modulo: callers only ever step by
/// one or jump to an explicit dot index. An empty collection yields 0.
pub fn normalize_index(index: isize, len: usize) -> usize {
    if index < 0 {
        len.saturating_sub(1)
    } else if index as usize >= len {
        0
    } else {
        index as usize
    }
}

/// Rotates the slides of an [`ElementTree`], on a timer or on demand.
///
/// The carousel owns only its index and its timer. Slides and dots are looked
/// up live on every call, so re-rendered markup is picked up without any
/// notification. Degenerate pages (no slides, fewer dots than slides) turn
/// operations into silent no-ops rather than errors.
#[derive(Debug)]
pub struct Carousel<T: ElementTree, S: Scheduler> {
    config: CarouselConfig,
    tree: T,
    scheduler: S,
    current: usize,
    timer: Option<S::Handle>,
    ready: bool,
    disposed: bool,
}

impl<T: ElementTree, S: Scheduler> Carousel<T, S> {
    /// Creates an idle carousel. Nothing is shown or scheduled until [`Carousel::on_ready`].
    pub fn new(config: CarouselConfig, tree: T, scheduler: S) -> Self {
        Self {
            config,
            tree,
            scheduler,
            current: 0,
            timer: None,
            ready: false,
            disposed: false,
        }
    }

    /// Page-ready hook. Shows the first slide and starts rotating; runs once.
    pub fn on_ready(&mut self) {
        if self.ready || self.disposed {
            return;
        }
        self.ready = true;

        let slides = self.slide_count();
        if slides == 0 {
            log::debug!("No '{}' elements found, carousel stays idle", self.config.slide_class());
            return;
        }
        log::debug!("Carousel ready with {} slides", slides);
        self.show_slide(self.current as isize);
        self.start_auto_slide();
    }

    /// Marks the slide at `index` (wrapped by one step) and its dot as active.
    pub fn show_slide(&mut self, index: isize) {
        if self.disposed {
            return;
        }
        let slide_class = self.config.slide_class().to_string();
        let dot_class = self.config.dot_class().to_string();
        let active = self.config.active_class.clone();

        let slides = self.tree.count_by_class(&slide_class);
        if slides == 0 {
            return;
        }
        let dots = self.tree.count_by_class(&dot_class);

        self.current = normalize_index(index, slides);

        for i in 0..slides {
            self.tree.remove_class(&slide_class, i, &active);
        }
        for i in 0..dots {
            self.tree.remove_class(&dot_class, i, &active);
        }

        self.tree.add_class(&slide_class, self.current, &active);
        if dots > self.current {
            self.tree.add_class(&dot_class, self.current, &active);
        }
        log::trace!("Showing slide {} of {}", self.current, slides);
    }

    /// Explicit navigation (a dot click). The automatic cadence restarts from zero.
    ///
    /// On a page without slides nothing is shown and no timer is started.
    pub fn go_to_slide(&mut self, index: isize) {
        if self.disposed || self.slide_count() == 0 {
            return;
        }
        self.show_slide(index);
        self.reset_auto_slide();
    }

    pub fn next_slide(&mut self) {
        self.show_slide(self.current as isize + 1);
    }

    pub fn previous_slide(&mut self) {
        self.show_slide(self.current as isize - 1);
    }

    /// Starts the repeating advance. Does nothing if a timer is already running.
    pub fn start_auto_slide(&mut self) {
        if self.disposed {
            return;
        }
        if self.timer.is_some() {
            log::debug!("Auto slide already running");
            return;
        }
        self.timer = Some(self.scheduler.start_repeating(self.config.auto_slide_delay));
    }

    pub fn stop_auto_slide(&mut self) {
        if let Some(handle) = self.timer.take() {
            self.scheduler.cancel(handle);
        }
    }

    pub fn reset_auto_slide(&mut self) {
        self.stop_auto_slide();
        self.start_auto_slide();
    }

    /// Tears the carousel down: cancels the timer and turns every later call,
    /// including a pending page-ready hook, into a no-op. The page is left as is.
    pub fn dispose(&mut self) {
        self.stop_auto_slide();
        self.disposed = true;
    }

    pub fn is_disposed(&self) -> bool {
        self.disposed
    }

    pub fn current_index(&self) -> usize {
        self.current
    }

    pub fn is_auto_sliding(&self) -> bool {
        self.timer.is_some()
    }

    pub fn is_ready(&self) -> bool {
        self.ready
    }

    pub fn timer(&self) -> Option<&S::Handle> {
        self.timer.as_ref()
    }

    pub fn config(&self) -> &CarouselConfig {
        &self.config
    }

    pub fn tree(&self) -> &T {
        &self.tree
    }

    pub fn tree_mut(&mut self) -> &mut T {
        &mut self.tree
    }

    pub fn scheduler(&self) -> &S {
        &self.scheduler
    }

    fn slide_count(&self) -> usize {
        self.tree.count_by_class(self.config.slide_class())
    }
}

impl<T: ElementTree> Carousel<T, FrameClock> {
    /// Feeds one frame of elapsed time to the auto-slide timer.
    pub fn advance(&mut self, dt: Duration) {
        for _ in 0..self.scheduler.advance(dt) {
            self.next_slide();
        }
    }
}

impl<T: ElementTree, S: Scheduler> Drop for Carousel<T, S> {
    fn drop(&mut self) {
        self.stop_auto_slide();
    }
}
