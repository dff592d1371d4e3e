/// Geometry of the anchor section read from the DOM on a single frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AnchorMetrics {
    /// Top edge relative to the viewport; negative once scrolled past.
    pub top: f64,
    pub height: f64,
    pub viewport_height: f64,
}

/// How far the viewport has travelled through the anchor, in `[0, 1]`.
pub fn compute_progress(metrics: AnchorMetrics) -> f64 {
    let scrolled = -metrics.top;
    let range = metrics.height - metrics.viewport_height;
    if !(range > 0.0) {
        // Anchor fits inside the viewport, so there is no range to travel.
        return if scrolled >= 0.0 { 1.0 } else { 0.0 };
    }
    let progress = scrolled / range;
    if progress.is_nan() {
        0.0
    } else {
        progress.clamp(0.0, 1.0)
    }
}

/// Per-instance progress state with animation frame coalescing.
///
/// Scroll and resize handlers call [`ProgressTracker::request_frame`]; only
/// the first call after a completed frame asks the caller to schedule one.
/// The frame callback then calls [`ProgressTracker::on_frame`].
#[derive(Debug, Default)]
pub struct ProgressTracker {
    progress: f64,
    scheduled: bool,
}

impl ProgressTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn progress(&self) -> f64 {
        self.progress
    }

    pub fn is_scheduled(&self) -> bool {
        self.scheduled
    }

    /// Returns `true` when the caller must schedule a frame.
    pub fn request_frame(&mut self) -> bool {
        if self.scheduled {
            return false;
        }
        self.scheduled = true;
        true
    }

    /// Scheduling failed or the frame was cancelled before it ran.
    pub fn cancel_frame(&mut self) {
        self.scheduled = false;
    }

    /// Runs the coalesced recompute. A missing anchor keeps the last value.
    pub fn on_frame(&mut self, anchor: Option<AnchorMetrics>) -> f64 {
        self.scheduled = false;
        if let Some(metrics) = anchor {
            self.progress = compute_progress(metrics);
        }
        self.progress
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn metrics(top: f64, height: f64, viewport_height: f64) -> AnchorMetrics {
        AnchorMetrics { top, height, viewport_height }
    }

    #[test]
    fn progress_follows_scroll_through_anchor() {
        assert_eq!(compute_progress(metrics(0.0, 1900.0, 900.0)), 0.0);
        assert_eq!(compute_progress(metrics(-500.0, 1900.0, 900.0)), 0.5);
        assert_eq!(compute_progress(metrics(-1000.0, 1900.0, 900.0)), 1.0);
    }

    #[test]
    fn progress_is_clamped() {
        assert_eq!(compute_progress(metrics(300.0, 1900.0, 900.0)), 0.0);
        assert_eq!(compute_progress(metrics(-4000.0, 1900.0, 900.0)), 1.0);
    }

    #[test]
    fn short_anchor_never_yields_nan() {
        assert_eq!(compute_progress(metrics(10.0, 900.0, 900.0)), 0.0);
        assert_eq!(compute_progress(metrics(0.0, 900.0, 900.0)), 1.0);
        assert_eq!(compute_progress(metrics(-20.0, 400.0, 900.0)), 1.0);
    }

    #[test]
    fn only_one_frame_is_pending_at_a_time() {
        let mut tracker = ProgressTracker::new();
        assert!(tracker.request_frame());
        for _ in 0..50 {
            assert!(!tracker.request_frame());
        }
        tracker.on_frame(Some(metrics(-250.0, 1900.0, 900.0)));
        assert!(!tracker.is_scheduled());
        assert!(tracker.request_frame());
    }

    #[test]
    fn missing_anchor_keeps_last_progress() {
        let mut tracker = ProgressTracker::new();
        tracker.request_frame();
        assert_eq!(tracker.on_frame(Some(metrics(-250.0, 1900.0, 900.0))), 0.25);
        tracker.request_frame();
        assert_eq!(tracker.on_frame(None), 0.25);
        assert!(!tracker.is_scheduled());
    }

    #[test]
    fn cancelled_frame_can_be_rescheduled() {
        let mut tracker = ProgressTracker::new();
        assert!(tracker.request_frame());
        tracker.cancel_frame();
        assert!(tracker.request_frame());
    }
}
