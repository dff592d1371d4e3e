//! Desktop layout: cards fan out from a cascaded stack into a row as the
//! anchor section scrolls by.
//!
//! Every function here is a pure function of `(index, count, progress,
//! config)`, so rendering the same inputs twice always yields the same
//! layout.

use crate::config::GalleryConfig;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Pose {
    pub x: f64,
    pub y: f64,
    /// Degrees.
    pub rotation: f64,
    pub scale: f64,
}

impl Pose {
    pub fn lerp(self, to: Pose, t: f64) -> Pose {
        Pose {
            x: lerp(self.x, to.x, t),
            y: lerp(self.y, to.y, t),
            rotation: lerp(self.rotation, to.rotation, t),
            scale: lerp(self.scale, to.scale, t),
        }
    }

    pub fn to_css_transform(&self) -> String {
        format!(
            "translate3d({:.2}px, {:.2}px, 0) rotate({:.3}deg) scale({:.4})",
            self.x, self.y, self.rotation, self.scale
        )
    }
}

fn lerp(from: f64, to: f64, t: f64) -> f64 {
    from + (to - from) * t
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LayoutPhase {
    /// Absolutely positioned, transform interpolated from progress.
    Interpolating,
    /// Normal left-to-right flow, final pose.
    Settled,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ItemLayout {
    pub pose: Pose,
    pub z_index: i32,
    pub phase: LayoutPhase,
}

pub fn phase(progress: f64, config: &GalleryConfig) -> LayoutPhase {
    if progress >= config.settle_threshold {
        LayoutPhase::Settled
    } else {
        LayoutPhase::Interpolating
    }
}

fn center_index(count: usize, config: &GalleryConfig) -> usize {
    let last = count.saturating_sub(1);
    config.center_index.unwrap_or(last / 2).min(last)
}

fn tilt(index: usize, config: &GalleryConfig) -> f64 {
    if index % 2 == 0 {
        -config.tilt_deg
    } else {
        config.tilt_deg
    }
}

/// Resting pose at progress 0: a diagonal cascade centered on x = 0.
pub fn stacked_pose(index: usize, count: usize, config: &GalleryConfig) -> Pose {
    let cascade_width = count.saturating_sub(1) as f64 * config.stack_step;
    let offset = index as f64 * config.stack_step;
    Pose {
        x: offset - cascade_width / 2.0,
        y: offset,
        rotation: tilt(index, config),
        scale: config.stacked_scale,
    }
}

/// Final pose at progress 1: a row with the center item at x = 0.
pub fn expanded_pose(index: usize, count: usize, config: &GalleryConfig) -> Pose {
    let center = center_index(count, config) as f64;
    Pose {
        x: (index as f64 - center) * config.spacing,
        y: 0.0,
        rotation: 0.0,
        scale: 1.0,
    }
}

/// Interpolated pose, ignoring the settle threshold.
pub fn pose_at(index: usize, count: usize, progress: f64, config: &GalleryConfig) -> Pose {
    let t = progress.clamp(0.0, 1.0);
    stacked_pose(index, count, config).lerp(expanded_pose(index, count, config), t)
}

/// Earlier items sit on top while stacked.
pub fn z_index(index: usize, count: usize, config: &GalleryConfig) -> i32 {
    let above = count.saturating_sub(index) as i32;
    above.clamp(1, config.max_z_index.max(1))
}

pub fn item_layout(index: usize, count: usize, progress: f64, config: &GalleryConfig) -> ItemLayout {
    let phase = phase(progress, config);
    let pose = match phase {
        LayoutPhase::Interpolating => pose_at(index, count, progress, config),
        LayoutPhase::Settled => expanded_pose(index, count, config),
    };
    ItemLayout {
        pose,
        z_index: z_index(index, count, config),
        phase,
    }
}

pub fn layout(count: usize, progress: f64, config: &GalleryConfig) -> Vec<ItemLayout> {
    (0..count)
        .map(|index| item_layout(index, count, progress, config))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gallery::progress::{compute_progress, AnchorMetrics};
    use crate::gallery::viewport::ViewportMode;

    const N: usize = 7;
    const SAMPLES: [f64; 5] = [0.0, 0.25, 0.5, 0.75, 0.94];

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn stacked_group_is_horizontally_centered() {
        let config = GalleryConfig::default();
        let sum: f64 = (0..N).map(|i| item_layout(i, N, 0.0, &config).pose.x).sum();
        assert!(close(sum / N as f64, 0.0));
    }

    #[test]
    fn stacked_pose_cascades() {
        let config = GalleryConfig::default();
        let first = stacked_pose(0, N, &config);
        let last = stacked_pose(N - 1, N, &config);
        assert!(close(first.x, -36.0));
        assert!(close(last.x, 36.0));
        assert!(close(last.y, 72.0));
        assert!(close(first.rotation, -2.0));
        assert!(close(stacked_pose(1, N, &config).rotation, 2.0));
        assert!(close(first.scale, 0.8));
    }

    #[test]
    fn pose_is_linear_in_progress() {
        let config = GalleryConfig::default();
        for i in 0..N {
            let from = stacked_pose(i, N, &config);
            let to = expanded_pose(i, N, &config);
            for p in SAMPLES {
                let pose = item_layout(i, N, p, &config).pose;
                assert!(close(pose.x, from.x + (to.x - from.x) * p));
                assert!(close(pose.y, from.y * (1.0 - p)));
                assert!(close(pose.rotation, (1.0 - p) * from.rotation));
                assert!(close(pose.scale, 0.8 + 0.2 * p));
            }
        }
    }

    #[test]
    fn pose_approaches_expanded_monotonically() {
        let config = GalleryConfig::default();
        for i in 0..N {
            let target = expanded_pose(i, N, &config);
            let mut last_dx = f64::INFINITY;
            let mut last_rot = f64::INFINITY;
            let mut last_scale_gap = f64::INFINITY;
            for p in SAMPLES {
                let pose = item_layout(i, N, p, &config).pose;
                let dx = (pose.x - target.x).abs() + (pose.y - target.y).abs();
                assert!(dx <= last_dx, "item {i} moved away at p={p}");
                assert!(pose.rotation.abs() <= last_rot);
                assert!((1.0 - pose.scale) <= last_scale_gap);
                last_dx = dx;
                last_rot = pose.rotation.abs();
                last_scale_gap = 1.0 - pose.scale;
            }
        }
    }

    #[test]
    fn no_jumps_below_settle_threshold() {
        let config = GalleryConfig::default();
        let step = 0.001;
        for i in 0..N {
            let mut p = 0.0;
            let mut previous = item_layout(i, N, p, &config).pose;
            while p + step < config.settle_threshold {
                p += step;
                let pose = item_layout(i, N, p, &config).pose;
                assert!((pose.x - previous.x).abs() <= config.spacing * 3.0 * step + 1e-9);
                assert!((pose.y - previous.y).abs() <= config.stack_step * N as f64 * step + 1e-9);
                previous = pose;
            }
        }
    }

    #[test]
    fn settled_layout_is_idempotent() {
        let config = GalleryConfig::default();
        let at_threshold = layout(N, 0.95, &config);
        assert!(at_threshold.iter().all(|item| item.phase == LayoutPhase::Settled));
        assert_eq!(at_threshold, layout(N, 0.99, &config));
        assert_eq!(at_threshold, layout(N, 1.0, &config));
        assert_eq!(layout(N, 0.97, &config), layout(N, 0.97, &config));
        assert_eq!(phase(0.94, &config), LayoutPhase::Interpolating);
    }

    #[test]
    fn z_index_keeps_early_items_on_top() {
        let config = GalleryConfig::default();
        let z: Vec<i32> = (0..N).map(|i| z_index(i, N, &config)).collect();
        assert_eq!(z, vec![5, 5, 5, 4, 3, 2, 1]);
        assert_eq!(z_index(0, 1, &config), 1);
    }

    #[test]
    fn center_defaults_to_middle_item() {
        let config = GalleryConfig::default();
        assert!(close(expanded_pose(3, 7, &config).x, 0.0));
        assert!(close(expanded_pose(0, 1, &config).x, 0.0));
        let pinned = GalleryConfig { center_index: Some(10), ..GalleryConfig::default() };
        assert!(close(expanded_pose(6, 7, &pinned).x, 0.0));
    }

    #[test]
    fn css_transform_formats_pose() {
        let pose = Pose { x: -36.0, y: 0.0, rotation: -2.0, scale: 0.8 };
        assert_eq!(
            pose.to_css_transform(),
            "translate3d(-36.00px, 0.00px, 0) rotate(-2.000deg) scale(0.8000)"
        );
    }

    #[test]
    fn desktop_scroll_scenario_pivots_on_center_item() {
        let config = GalleryConfig::default();
        let (width, height) = (1440.0, 900.0);
        assert_eq!(ViewportMode::classify(width, height), ViewportMode::Desktop);

        let anchor_height = 2400.0;
        let mut previous_spread = -1.0;
        for step in 0..=30 {
            let scrolled = step as f64 * 50.0;
            let progress = compute_progress(AnchorMetrics {
                top: -scrolled,
                height: anchor_height,
                viewport_height: height,
            });
            let items = layout(N, progress, &config);

            assert!(items[3].pose.x.abs() < 1e-9, "pivot drifted at p={progress}");
            assert!(close(items[0].pose.x, -items[6].pose.x));
            assert!(close(items[1].pose.x, -items[5].pose.x));

            let spread = items[6].pose.x - items[0].pose.x;
            assert!(spread >= previous_spread);
            previous_spread = spread;
        }
        assert!(close(previous_spread, 6.0 * config.spacing));
    }
}
