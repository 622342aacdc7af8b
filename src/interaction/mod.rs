//! Pointer tracking shared by the candlestick and line charts.
//!
//! Pan gestures and discrete touches drive the same state machine. Every
//! positional event recomputes the hovered index from scratch, so repeated or
//! dropped samples never leave stale state behind, and every terminal event
//! clears the state unconditionally.

use ordered_float::OrderedFloat;
use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::core::{CandleLayout, PixelPoint};

/// Input delivered by the host's gesture recognizer or touch handler.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum PointerEvent {
    PanBegin { x: f64 },
    PanChange { x: f64 },
    PanFinalize,
    TouchStart { x: f64 },
    TouchMove { x: f64 },
    TouchEnd,
    TouchCancel,
}

impl PointerEvent {
    /// Pointer x for positional events, `None` for terminal ones.
    #[must_use]
    pub fn pixel_x(self) -> Option<f64> {
        match self {
            Self::PanBegin { x }
            | Self::PanChange { x }
            | Self::TouchStart { x }
            | Self::TouchMove { x } => Some(x),
            Self::PanFinalize | Self::TouchEnd | Self::TouchCancel => None,
        }
    }

    #[must_use]
    pub fn is_terminal(self) -> bool {
        self.pixel_x().is_none()
    }
}

/// Hover state read by the overlay renderer.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PointerState {
    pub active: bool,
    pub pixel_x: f64,
    pub nearest_index: usize,
}

impl Default for PointerState {
    fn default() -> Self {
        Self::inactive()
    }
}

impl PointerState {
    #[must_use]
    pub const fn inactive() -> Self {
        Self {
            active: false,
            pixel_x: 0.0,
            nearest_index: 0,
        }
    }

    /// Index of the hovered sample while the pointer is down.
    #[must_use]
    pub fn hovered_index(self) -> Option<usize> {
        self.active.then_some(self.nearest_index)
    }
}

/// Maps a pointer x coordinate to a data index.
///
/// Returns `None` when there is nothing to hover (empty series).
pub trait IndexResolver {
    fn resolve_index(&self, pixel_x: f64) -> Option<usize>;
}

impl IndexResolver for CandleLayout {
    fn resolve_index(&self, pixel_x: f64) -> Option<usize> {
        self.slot_index_at(pixel_x)
    }
}

/// Nearest projected point by horizontal distance.
///
/// This is a linear scan per event, which is fine for a few hundred points.
/// The x projection of an ascending series is sorted, so a binary search can
/// replace it for much longer series without changing results.
#[derive(Debug, Clone, Copy)]
pub struct NearestPointResolver<'a> {
    points: &'a [PixelPoint],
}

impl<'a> NearestPointResolver<'a> {
    #[must_use]
    pub fn new(points: &'a [PixelPoint]) -> Self {
        Self { points }
    }
}

impl IndexResolver for NearestPointResolver<'_> {
    fn resolve_index(&self, pixel_x: f64) -> Option<usize> {
        // `min_by_key` keeps the first of equal minima, so ties go to the
        // earlier point.
        self.points
            .iter()
            .enumerate()
            .min_by_key(|(_, point)| OrderedFloat((point.x - pixel_x).abs()))
            .map(|(index, _)| index)
    }
}

/// Single-writer owner of [`PointerState`].
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PointerTracker {
    state: PointerState,
}

impl PointerTracker {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn state(&self) -> PointerState {
        self.state
    }

    /// Pure transition: the next state depends only on `event` and `resolver`.
    #[must_use]
    pub fn transition(event: PointerEvent, resolver: &impl IndexResolver) -> PointerState {
        let Some(pixel_x) = event.pixel_x() else {
            return PointerState::inactive();
        };
        match resolver.resolve_index(pixel_x) {
            Some(nearest_index) => PointerState {
                active: true,
                pixel_x,
                nearest_index,
            },
            None => PointerState::inactive(),
        }
    }

    /// Applies `event` and returns the new state.
    pub fn handle_event(
        &mut self,
        event: PointerEvent,
        resolver: &impl IndexResolver,
    ) -> PointerState {
        let next = Self::transition(event, resolver);
        trace!(
            ?event,
            active = next.active,
            nearest_index = next.nearest_index,
            "pointer transition"
        );
        self.state = next;
        next
    }

    /// Clears hover state, e.g. after the data set was replaced.
    pub fn reset(&mut self) {
        self.state = PointerState::inactive();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nearest_point_prefers_earlier_on_tie() {
        let points = [PixelPoint::new(0.0, 0.0), PixelPoint::new(10.0, 0.0)];
        let resolver = NearestPointResolver::new(&points);
        assert_eq!(resolver.resolve_index(5.0), Some(0));
        assert_eq!(resolver.resolve_index(5.1), Some(1));
    }

    #[test]
    fn empty_points_resolve_to_none() {
        let resolver = NearestPointResolver::new(&[]);
        assert_eq!(resolver.resolve_index(5.0), None);
        assert_eq!(
            PointerTracker::transition(PointerEvent::TouchStart { x: 5.0 }, &resolver),
            PointerState::inactive()
        );
    }
}
