use crate::coords::{NORMALIZED_RANGE, Rect, Vec2, Viewport, square_to_disc};
use crate::error::EngineError;
use crate::paint::{Rgb, polar_from};

use super::notifier::{BoundaryNotifier, NoopNotifier};

/// Marker: the sample fell outside the normalized square and was clamped.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq, Hash)]
pub struct BoundaryEvent;

/// Result of processing one pointer sample.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct TrackpadSample {
    /// Cursor position on the disc, in screen space.
    pub cursor: Vec2,
    /// Wheel color for the raw (unclamped) pointer position.
    pub color: Rgb,
    /// Present when the sample was clamped and the notifier fired.
    pub boundary: Option<BoundaryEvent>,
}

impl TrackpadSample {
    #[inline]
    pub fn clamped(&self) -> bool {
        self.boundary.is_some()
    }
}

/// Coordinator settings.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct CoordinatorConfig {
    /// Wheel radius for [`InputCoordinator::process_frame`].
    /// `None` uses the frame's shorter side.
    pub radius: Option<f64>,
}

impl CoordinatorConfig {
    pub fn radius(mut self, r: f64) -> Self {
        self.radius = Some(r);
        self
    }
}

/// Sequences normalization, clamping, the disc warp and the color wheel for
/// one pointer sample at a time.
///
/// Holds no per-sample state; the notifier is the only stateful piece and is
/// owned by whoever builds the coordinator.
#[derive(Debug, Default)]
pub struct InputCoordinator<N = NoopNotifier> {
    notifier: N,
    config: CoordinatorConfig,
}

impl<N: BoundaryNotifier> InputCoordinator<N> {
    pub fn new(notifier: N) -> Self {
        Self::with_config(notifier, CoordinatorConfig::default())
    }

    pub fn with_config(notifier: N, config: CoordinatorConfig) -> Self {
        Self { notifier, config }
    }

    pub fn notifier(&self) -> &N {
        &self.notifier
    }

    /// Processes a pointer sample given in the same screen space as `frame`.
    ///
    /// The cursor comes from the clamped point; the color comes from the raw
    /// one, so hue and saturation keep tracking a pointer dragged past the
    /// edge while the cursor stays on the circle.
    pub fn process_input(
        &self,
        point: Vec2,
        frame: Rect,
        radius: f64,
    ) -> Result<TrackpadSample, EngineError> {
        let (local_cursor, boundary) = self.map_cursor(frame.to_local(point), frame.size)?;
        let cursor = frame.from_local(local_cursor);
        let color = self.color_at(point, frame, radius);

        log::trace!(
            "sample ({}, {}) -> cursor ({:.3}, {:.3}) color {color}",
            point.x, point.y, cursor.x, cursor.y
        );

        Ok(TrackpadSample { cursor, color, boundary })
    }

    /// [`process_input`](Self::process_input) with the configured radius,
    /// falling back to the frame's shorter side.
    pub fn process_frame(&self, point: Vec2, frame: Rect) -> Result<TrackpadSample, EngineError> {
        let radius = self.config.radius.unwrap_or_else(|| frame.min_extent());
        self.process_input(point, frame, radius)
    }

    /// Maps a viewport-local screen point onto the inscribed disc.
    ///
    /// Points outside the viewport are clamped to the square's edge first and
    /// the notifier fires once, however many axes were out of range.
    pub fn map_cursor(
        &self,
        point: Vec2,
        viewport: Viewport,
    ) -> Result<(Vec2, Option<BoundaryEvent>), EngineError> {
        let normalized = viewport.to_normalized(point)?;

        let boundary = if in_square(normalized) {
            None
        } else {
            log::debug!(
                "normalized ({:.3}, {:.3}) outside square; clamping",
                normalized.x, normalized.y
            );
            self.notifier.notify_boundary_exceeded();
            Some(BoundaryEvent)
        };
        let square = Vec2::new(clamp_axis(normalized.x), clamp_axis(normalized.y));

        let cursor = viewport.to_screen(square_to_disc(square))?;
        Ok((cursor, boundary))
    }

    /// Wheel color for `point` about the center of `frame`. Never notifies.
    pub fn color_at(&self, point: Vec2, frame: Rect, radius: f64) -> Rgb {
        polar_from(frame.center(), point, radius).color()
    }
}

#[inline]
fn in_square(p: Vec2) -> bool {
    NORMALIZED_RANGE.contains(&p.x) && NORMALIZED_RANGE.contains(&p.y)
}

/// Clamps one normalized axis onto the square. NaN goes to the upper edge so
/// the cursor stays finite.
#[inline]
fn clamp_axis(v: f64) -> f64 {
    let (lo, hi) = (*NORMALIZED_RANGE.start(), *NORMALIZED_RANGE.end());
    if v.is_nan() { hi } else { v.clamp(lo, hi) }
}
