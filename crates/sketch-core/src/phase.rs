//! Explicit phase tracking for animated entities.
//!
//! Each entity carries exactly one [`PhaseMachine`] instead of a bundle of
//! loosely related flags. The allowed transitions are declared once per phase
//! enum through [`Phase::successors`], so an impossible combination such as
//! "rising and falling" cannot be represented.

use std::fmt::Debug;

pub trait Phase: Copy + Eq + Debug + 'static {
    /// Phases reachable from `self` in a single step.
    fn successors(self) -> &'static [Self];

    fn is_terminal(self) -> bool {
        self.successors().is_empty()
    }
}

#[derive(Clone, Debug)]
pub struct PhaseMachine<P: Phase> {
    current: P,
    ticks: u32,
    elapsed: f32,
}

impl<P: Phase> PhaseMachine<P> {
    pub fn new(initial: P) -> Self {
        Self {
            current: initial,
            ticks: 0,
            elapsed: 0.0,
        }
    }

    #[inline]
    pub fn current(&self) -> P {
        self.current
    }

    #[inline]
    pub fn is(&self, phase: P) -> bool {
        self.current == phase
    }

    /// Ticks spent in the current phase.
    #[inline]
    pub fn ticks(&self) -> u32 {
        self.ticks
    }

    /// Seconds spent in the current phase.
    #[inline]
    pub fn elapsed(&self) -> f32 {
        self.elapsed
    }

    pub fn tick(&mut self, dt_sec: f32) {
        self.ticks = self.ticks.saturating_add(1);
        self.elapsed += dt_sec;
    }

    /// Move to `next` if the transition table allows it, resetting the
    /// phase-local counters. Returns whether the transition happened.
    pub fn advance(&mut self, next: P) -> bool {
        if !self.current.successors().contains(&next) {
            log::warn!("[phase] refused {:?} -> {:?}", self.current, next);
            return false;
        }
        log::debug!("[phase] {:?} -> {:?}", self.current, next);
        self.current = next;
        self.ticks = 0;
        self.elapsed = 0.0;
        true
    }
}
