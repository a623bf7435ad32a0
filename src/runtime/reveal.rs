//! Scroll-reveal visibility engine.
//!
//! Tracks one [`RevealState`] per registered element and flips it to
//! `Revealed` the first time the host reports the element crossing the
//! visibility threshold. The engine is a pure mapping from element id to
//! state; detection is delegated to an [`IntersectionHost`] and presentation
//! to whoever consumes the ids returned by [`VisibilityObserver::record`].
//!
//! # Lifecycle
//!
//! ```text
//! new() ──▶ Idle ──observe()──▶ Observing ──disconnect()──▶ TornDown
//!                    │
//!                    └─(host unavailable)─▶ FailOpen ──disconnect()──▶ TornDown
//! ```
//!
//! Batches that arrive in `Idle`, `FailOpen` or `TornDown` are ignored.

use rustc_hash::FxHashMap;
use std::fmt;
use thiserror::Error;

/// Fraction of an element's area that must be visible to reveal it.
pub const DEFAULT_THRESHOLD: f64 = 0.1;

/// Hosts round intersection ratios, so a ratio reported just under the
/// threshold at the crossing callback still counts.
const RATIO_TOLERANCE: f64 = 1e-3;

/// Identity of a revealable element, assigned at render time in document
/// order and written to the page as `data-reveal="N"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ElementId(pub u32);

impl fmt::Display for ElementId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum RevealState {
    #[default]
    Pending,
    Revealed,
}

/// One entry of an intersection batch.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Intersection {
    pub id: ElementId,
    pub ratio: f64,
    pub is_intersecting: bool,
}

impl Intersection {
    pub const fn entering(id: ElementId, ratio: f64) -> Self {
        Self {
            id,
            ratio,
            is_intersecting: true,
        }
    }

    pub const fn leaving(id: ElementId) -> Self {
        Self {
            id,
            ratio: 0.0,
            is_intersecting: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ObserveError {
    #[error("intersection observation is not available in this environment")]
    Unavailable,

    #[error("failed to observe elements: {0}")]
    Host(String),
}

/// Capability: the environment's viewport-intersection primitive.
pub trait IntersectionHost {
    /// Start observing `targets`, reporting crossings of `threshold`.
    fn observe(&mut self, targets: &[ElementId], threshold: f64) -> Result<(), ObserveError>;

    /// Stop observing a single element.
    fn unobserve(&mut self, target: ElementId);

    /// Stop observing everything.
    fn disconnect(&mut self);
}

/// Where the observer is in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ObserverMode {
    Idle,
    Observing,
    /// The host could not observe; every element was revealed up front.
    FailOpen,
    TornDown,
}

/// Outcome of [`VisibilityObserver::observe`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Mount {
    Observing,
    /// Elements revealed immediately because observation failed.
    FailOpen(Vec<ElementId>),
}

pub struct VisibilityObserver {
    threshold: f64,
    states: FxHashMap<ElementId, RevealState>,
    mode: ObserverMode,
}

impl fmt::Debug for VisibilityObserver {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("VisibilityObserver")
            .field("threshold", &self.threshold)
            .field("mode", &self.mode)
            .field("registered", &self.states.len())
            .field("revealed", &self.revealed_count())
            .finish()
    }
}

impl Default for VisibilityObserver {
    fn default() -> Self {
        Self::new(DEFAULT_THRESHOLD)
    }
}

impl VisibilityObserver {
    /// Create an observer. The threshold is clamped to `[0, 1]`; NaN falls
    /// back to [`DEFAULT_THRESHOLD`].
    pub fn new(threshold: f64) -> Self {
        let threshold = if threshold.is_nan() {
            DEFAULT_THRESHOLD
        } else {
            threshold.clamp(0.0, 1.0)
        };
        Self {
            threshold,
            states: FxHashMap::default(),
            mode: ObserverMode::Idle,
        }
    }

    #[inline]
    pub const fn threshold(&self) -> f64 {
        self.threshold
    }

    #[inline]
    pub const fn mode(&self) -> ObserverMode {
        self.mode
    }

    /// Register `targets` and ask the host to observe them.
    ///
    /// If the host refuses, every target is revealed at once and returned so
    /// the page never hides content it cannot animate.
    pub fn observe<H: IntersectionHost + ?Sized>(
        &mut self,
        host: &mut H,
        targets: &[ElementId],
    ) -> Mount {
        if self.mode != ObserverMode::Idle {
            return Mount::Observing;
        }

        for &id in targets {
            self.states.entry(id).or_default();
        }

        match host.observe(targets, self.threshold) {
            Ok(()) => {
                self.mode = ObserverMode::Observing;
                Mount::Observing
            }
            Err(_) => {
                self.mode = ObserverMode::FailOpen;
                let mut ids: Vec<_> = self.states.keys().copied().collect();
                ids.sort_unstable();
                for id in &ids {
                    self.states.insert(*id, RevealState::Revealed);
                }
                Mount::FailOpen(ids)
            }
        }
    }

    /// Apply a batch of intersection entries.
    ///
    /// Returns the ids that transitioned to `Revealed` in this batch, each at
    /// most once, in the order the host reported them. Entries for unknown
    /// ids, already revealed ids, or elements leaving the viewport produce
    /// nothing.
    pub fn record(&mut self, batch: &[Intersection]) -> Vec<ElementId> {
        if self.mode != ObserverMode::Observing {
            return Vec::new();
        }

        let mut revealed = Vec::new();
        for entry in batch {
            if !self.crosses(entry) {
                continue;
            }
            if let Some(state) = self.states.get_mut(&entry.id)
                && *state == RevealState::Pending
            {
                *state = RevealState::Revealed;
                revealed.push(entry.id);
            }
        }
        revealed
    }

    /// Stop observing and drop every registration.
    ///
    /// Safe to call more than once; later batches are ignored.
    pub fn disconnect<H: IntersectionHost + ?Sized>(&mut self, host: &mut H) {
        if matches!(self.mode, ObserverMode::Observing | ObserverMode::FailOpen) {
            host.disconnect();
        }
        self.states.clear();
        self.mode = ObserverMode::TornDown;
    }

    pub fn state(&self, id: ElementId) -> Option<RevealState> {
        self.states.get(&id).copied()
    }

    pub fn is_revealed(&self, id: ElementId) -> bool {
        self.state(id) == Some(RevealState::Revealed)
    }

    pub fn registered(&self) -> usize {
        self.states.len()
    }

    pub fn revealed_count(&self) -> usize {
        self.states
            .values()
            .filter(|state| **state == RevealState::Revealed)
            .count()
    }

    pub fn pending_count(&self) -> usize {
        self.registered() - self.revealed_count()
    }

    fn crosses(&self, entry: &Intersection) -> bool {
        entry.is_intersecting && entry.ratio + RATIO_TOLERANCE >= self.threshold
    }
}

// ============================================================================
// Tests
// ============================================================================
