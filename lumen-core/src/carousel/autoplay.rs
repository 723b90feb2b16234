//! Autoplay timer bookkeeping
//!
//! The host owns the actual clock. This type only decides whether a timer
//! should be live and which one. Each start hands out a fresh generation;
//! a tick is honoured only if it carries the live generation, so a tick
//! queued before a stop or restart can never advance the carousel.

/// Identifies one live autoplay timer.
pub type Generation = u64;

#[derive(Debug, Clone, Default)]
pub struct Autoplay {
    enabled: bool,
    live: Option<Generation>,
    next_generation: Generation,
    /// Set while the pointer rests on the carousel.
    hovered: bool,
}

impl Autoplay {
    pub fn new(enabled: bool) -> Self {
        Self {
            enabled,
            ..Self::default()
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn is_live(&self) -> bool {
        self.live.is_some()
    }

    pub fn is_hovered(&self) -> bool {
        self.hovered
    }

    /// Generation of the live timer, if any. Hosts key their timer on this
    /// so a new generation replaces the old timer instead of adding one.
    pub fn live_generation(&self) -> Option<Generation> {
        self.live
    }

    /// Start a timer unless one is already live. Returns `true` when a new
    /// timer was started.
    pub fn start(&mut self) -> bool {
        if self.live.is_some() {
            return false;
        }
        let generation = self.next_generation;
        self.next_generation = self.next_generation.wrapping_add(1);
        self.live = Some(generation);
        log::trace!("autoplay started (generation {generation})");
        true
    }

    /// Cancel the live timer. Returns `false` when nothing was live.
    pub fn stop(&mut self) -> bool {
        match self.live.take() {
            Some(generation) => {
                log::trace!("autoplay stopped (generation {generation})");
                true
            }
            None => false,
        }
    }

    /// Replace the live timer with a fresh one so the next tick is a full
    /// interval away. Does nothing while no timer is live.
    pub fn restart(&mut self) {
        if self.stop() {
            self.start();
        }
    }

    /// Pointer entered the carousel.
    pub fn suspend(&mut self) {
        self.hovered = true;
        self.stop();
    }

    /// Pointer left the carousel. Resumes only if autoplay is enabled.
    pub fn resume(&mut self) {
        self.hovered = false;
        if self.enabled {
            self.start();
        }
    }

    /// Whether a tick from `generation` should advance the carousel.
    pub fn accept_tick(&self, generation: Generation) -> bool {
        self.live == Some(generation)
    }
}
