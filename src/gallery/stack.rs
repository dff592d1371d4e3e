//! Drag-to-reorder card stack used by the gallery on phones.
//!
//! Index 0 of [`StackOrder`] is the back of the pile and the last index is
//! the card on top. Only the top card can be dragged. Releasing it past the
//! sensitivity threshold moves it to index 0; anything less settles it back
//! to exactly zero offset.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::config::StackConfig;

// Pointer travel below this still counts as a tap.
const TAP_SLOP: f64 = 4.0;
// Pointer travel mapped onto the full drag rotation range.
const ROTATION_TRAVEL: f64 = 100.0;

/// Source of the small per-card tilt applied when random rotation is on.
pub trait TiltSource {
    /// A value in `[-max, max]` degrees.
    fn next_tilt(&mut self, max: f64) -> f64;
}

pub struct SeededTilt {
    rng: StdRng,
}

impl SeededTilt {
    pub fn new(seed: u64) -> Self {
        Self { rng: StdRng::seed_from_u64(seed) }
    }
}

impl TiltSource for SeededTilt {
    fn next_tilt(&mut self, max: f64) -> f64 {
        if max <= 0.0 {
            return 0.0;
        }
        self.rng.gen_range(-max..=max)
    }
}

/// Back-to-front order of card ids.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StackOrder {
    ids: Vec<u32>,
}

impl StackOrder {
    pub fn new(ids: Vec<u32>) -> Self {
        Self { ids }
    }

    pub fn ids(&self) -> &[u32] {
        &self.ids
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn position(&self, id: u32) -> Option<usize> {
        self.ids.iter().position(|&candidate| candidate == id)
    }

    pub fn top(&self) -> Option<u32> {
        self.ids.last().copied()
    }

    /// Moves `id` to the back of the pile. Unknown ids leave the order as is.
    pub fn send_to_back(&mut self, id: u32) -> bool {
        let Some(index) = self.position(id) else {
            return false;
        };
        let card = self.ids.remove(index);
        self.ids.insert(0, card);
        true
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Offset {
    pub x: f64,
    pub y: f64,
}

impl Offset {
    pub const ZERO: Offset = Offset { x: 0.0, y: 0.0 };

    fn exceeds(&self, threshold: f64) -> bool {
        self.x.abs() > threshold || self.y.abs() > threshold
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
struct ActiveDrag {
    card: u32,
    origin: (f64, f64),
    /// Raw pointer travel since the press.
    travel: Offset,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ReleaseOutcome {
    /// No drag was in progress.
    Idle,
    SentToBack(u32),
    SettledBack(u32),
}

/// Everything needed to draw one card.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CardPose {
    pub offset: Offset,
    pub rotate_x: f64,
    pub rotate_y: f64,
    pub rotate_z: f64,
    pub scale: f64,
    pub z_index: i32,
    pub draggable: bool,
}

impl CardPose {
    pub fn drag_transform(&self) -> String {
        format!(
            "translate3d({:.2}px, {:.2}px, 0) rotateX({:.2}deg) rotateY({:.2}deg)",
            self.offset.x, self.offset.y, self.rotate_x, self.rotate_y
        )
    }

    pub fn rest_transform(&self) -> String {
        format!("rotateZ({:.3}deg) scale({:.4})", self.rotate_z, self.scale)
    }
}

#[derive(Debug)]
pub struct CardStack {
    order: StackOrder,
    tilts: Vec<(u32, f64)>,
    drag: Option<ActiveDrag>,
    suppress_tap: bool,
    config: StackConfig,
}

impl CardStack {
    pub fn new(ids: Vec<u32>, config: StackConfig, tilt: &mut dyn TiltSource) -> Self {
        let tilts = ids
            .iter()
            .map(|&id| {
                let degrees = if config.random_rotation {
                    tilt.next_tilt(config.max_random_tilt)
                } else {
                    0.0
                };
                (id, degrees)
            })
            .collect();
        Self {
            order: StackOrder::new(ids),
            tilts,
            drag: None,
            suppress_tap: false,
            config,
        }
    }

    pub fn order(&self) -> &StackOrder {
        &self.order
    }

    pub fn dragging(&self) -> Option<u32> {
        self.drag.map(|drag| drag.card)
    }

    pub fn send_to_back(&mut self, id: u32) -> bool {
        self.order.send_to_back(id)
    }

    /// Starts a drag. Only the top card is accepted, and only one at a time.
    pub fn press(&mut self, id: u32, x: f64, y: f64) -> bool {
        if self.drag.is_some() || self.order.top() != Some(id) {
            return false;
        }
        self.suppress_tap = false;
        self.drag = Some(ActiveDrag {
            card: id,
            origin: (x, y),
            travel: Offset::ZERO,
        });
        true
    }

    pub fn drag_to(&mut self, x: f64, y: f64) {
        if let Some(drag) = self.drag.as_mut() {
            drag.travel = Offset {
                x: x - drag.origin.0,
                y: y - drag.origin.1,
            };
        }
    }

    pub fn release(&mut self) -> ReleaseOutcome {
        let Some(drag) = self.drag.take() else {
            return ReleaseOutcome::Idle;
        };
        self.suppress_tap = drag.travel.exceeds(TAP_SLOP);
        if drag.travel.exceeds(self.config.sensitivity) {
            self.suppress_tap = true;
            self.order.send_to_back(drag.card);
            ReleaseOutcome::SentToBack(drag.card)
        } else {
            ReleaseOutcome::SettledBack(drag.card)
        }
    }

    /// Pointer left the page mid drag; the card settles without reordering.
    pub fn cancel(&mut self) {
        self.drag = None;
        self.suppress_tap = false;
    }

    /// Click handler. Sends the card back when click-to-send is enabled and
    /// the click did not finish a drag.
    pub fn tap(&mut self, id: u32) -> bool {
        let suppressed = std::mem::take(&mut self.suppress_tap);
        if !self.config.send_to_back_on_click || suppressed {
            return false;
        }
        self.order.send_to_back(id)
    }

    fn tilt_of(&self, id: u32) -> f64 {
        self.tilts
            .iter()
            .find(|(candidate, _)| *candidate == id)
            .map_or(0.0, |(_, degrees)| *degrees)
    }

    pub fn pose(&self, id: u32) -> Option<CardPose> {
        let index = self.order.position(id)?;
        let count = self.order.len() as f64;
        let position = index as f64;

        let offset = match self.drag {
            Some(drag) if drag.card == id => Offset {
                x: drag.travel.x * self.config.elastic,
                y: drag.travel.y * self.config.elastic,
            },
            _ => Offset::ZERO,
        };
        let max = self.config.max_drag_rotation;
        let per_px = max / ROTATION_TRAVEL;

        Some(CardPose {
            offset,
            rotate_x: (-offset.y * per_px).clamp(-max, max),
            rotate_y: (offset.x * per_px).clamp(-max, max),
            rotate_z: (count - position - 1.0) * self.config.rotation_step + self.tilt_of(id),
            scale: 1.0 + position * self.config.scale_step - count * self.config.scale_step,
            z_index: index as i32 + 1,
            draggable: self.order.top() == Some(id),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    struct FixedTilt(f64);

    impl TiltSource for FixedTilt {
        fn next_tilt(&mut self, _max: f64) -> f64 {
            self.0
        }
    }

    fn stack(config: StackConfig) -> CardStack {
        CardStack::new((1..=7).collect(), config, &mut FixedTilt(0.0))
    }

    fn sorted(ids: &[u32]) -> Vec<u32> {
        let mut ids = ids.to_vec();
        ids.sort_unstable();
        ids
    }

    #[test]
    fn send_to_back_moves_card_to_head() {
        let mut order = StackOrder::new(vec![1, 2, 3, 4]);
        assert!(order.send_to_back(3));
        assert_eq!(order.ids(), &[3, 1, 2, 4]);
        assert!(order.send_to_back(4));
        assert_eq!(order.ids(), &[4, 3, 1, 2]);
        assert_eq!(order.top(), Some(2));
    }

    #[test]
    fn send_to_back_ignores_unknown_ids() {
        let mut order = StackOrder::new(vec![1, 2, 3]);
        assert!(!order.send_to_back(9));
        assert_eq!(order.ids(), &[1, 2, 3]);
    }

    #[test]
    fn only_top_card_can_be_pressed() {
        let mut stack = stack(StackConfig::default());
        assert!(!stack.press(3, 0.0, 0.0));
        assert!(stack.press(7, 0.0, 0.0));
        // Second concurrent drag is refused.
        assert!(!stack.press(7, 5.0, 5.0));
        assert_eq!(stack.dragging(), Some(7));
    }

    #[test]
    fn short_drag_settles_at_exact_origin() {
        let mut stack = stack(StackConfig::default());
        stack.press(7, 100.0, 100.0);
        stack.drag_to(250.0, 37.0);
        let mid = stack.pose(7).unwrap();
        assert!((mid.offset.x - 90.0).abs() < 1e-9);
        assert_eq!(stack.release(), ReleaseOutcome::SettledBack(7));
        assert_eq!(stack.pose(7).unwrap().offset, Offset::ZERO);
        assert_eq!(stack.order().ids(), &[1, 2, 3, 4, 5, 6, 7]);
    }

    #[test]
    fn long_drag_sends_card_back() {
        let mut stack = stack(StackConfig::default());
        stack.press(7, 0.0, 0.0);
        stack.drag_to(0.0, -201.0);
        assert_eq!(stack.release(), ReleaseOutcome::SentToBack(7));
        assert_eq!(stack.order().ids(), &[7, 1, 2, 3, 4, 5, 6]);
        assert_eq!(stack.order().top(), Some(6));
        // The click that trails the pointerup must not reorder again.
        assert!(!stack.tap(7));
    }

    #[test]
    fn gallery_settings_drive_the_drag() {
        let mut gallery = stack(StackConfig::gallery());
        gallery.press(7, 0.0, 0.0);
        gallery.drag_to(190.0, 0.0);
        assert!((gallery.pose(7).unwrap().offset.x - 114.0).abs() < 1e-9);
        // 190 px clears the gallery's 180 px threshold but not the default 200.
        assert_eq!(gallery.release(), ReleaseOutcome::SentToBack(7));

        let mut plain = stack(StackConfig::default());
        plain.press(7, 0.0, 0.0);
        plain.drag_to(190.0, 0.0);
        assert_eq!(plain.release(), ReleaseOutcome::SettledBack(7));
    }

    #[test]
    fn release_without_drag_is_idle() {
        let mut stack = stack(StackConfig::default());
        assert_eq!(stack.release(), ReleaseOutcome::Idle);
    }

    #[test]
    fn tap_respects_click_setting() {
        let mut off = stack(StackConfig::default());
        assert!(!off.tap(7));
        assert_eq!(off.order().ids(), &[1, 2, 3, 4, 5, 6, 7]);

        let mut on = stack(StackConfig { send_to_back_on_click: true, ..StackConfig::default() });
        on.press(7, 10.0, 10.0);
        on.release();
        assert!(on.tap(7));
        assert_eq!(on.order().ids(), &[7, 1, 2, 3, 4, 5, 6]);
    }

    #[test]
    fn tap_after_small_drag_is_ignored() {
        let mut stack = stack(StackConfig { send_to_back_on_click: true, ..StackConfig::default() });
        stack.press(7, 0.0, 0.0);
        stack.drag_to(40.0, 0.0);
        stack.release();
        assert!(!stack.tap(7));
        assert_eq!(stack.order().top(), Some(7));
    }

    #[test]
    fn drag_rotation_is_bounded() {
        let mut stack = stack(StackConfig::default());
        stack.press(7, 0.0, 0.0);
        stack.drag_to(1000.0, -1000.0);
        let pose = stack.pose(7).unwrap();
        assert_eq!(pose.rotate_y, 60.0);
        assert_eq!(pose.rotate_x, 60.0);
        stack.cancel();
        assert_eq!(stack.pose(7).unwrap().rotate_x, 0.0);
    }

    #[test]
    fn rest_pose_depends_on_position() {
        let stack = stack(StackConfig::default());
        let top = stack.pose(7).unwrap();
        let bottom = stack.pose(1).unwrap();
        assert!(top.draggable);
        assert!(!bottom.draggable);
        assert!(top.rotate_z.abs() < 1e-9);
        assert!((bottom.rotate_z - 24.0).abs() < 1e-9);
        assert!((top.scale - 0.94).abs() < 1e-9);
        assert!((bottom.scale - 0.58).abs() < 1e-9);
        assert_eq!(top.z_index, 7);
    }

    #[test]
    fn tilt_only_applies_with_random_rotation() {
        let config = StackConfig { random_rotation: true, ..StackConfig::default() };
        let tilted = CardStack::new(vec![1, 2], config, &mut FixedTilt(3.0));
        assert!((tilted.pose(2).unwrap().rotate_z - 3.0).abs() < 1e-9);

        let flat = CardStack::new(vec![1, 2], StackConfig::default(), &mut FixedTilt(3.0));
        assert_eq!(flat.pose(2).unwrap().rotate_z, 0.0);
    }

    #[test]
    fn seeded_tilt_is_reproducible_and_bounded() {
        let mut a = SeededTilt::new(42);
        let mut b = SeededTilt::new(42);
        for _ in 0..100 {
            let tilt = a.next_tilt(5.0);
            assert_eq!(tilt, b.next_tilt(5.0));
            assert!((-5.0..=5.0).contains(&tilt));
        }
    }

    #[test]
    fn tilt_survives_reordering() {
        let config = StackConfig { random_rotation: true, ..StackConfig::default() };
        let mut stack = CardStack::new((1..=4).collect(), config, &mut SeededTilt::new(7));
        let before = stack.pose(4).unwrap().rotate_z;
        stack.send_to_back(4);
        // Back of a four card pile adds three rotation steps.
        let after = stack.pose(4).unwrap().rotate_z;
        assert!((after - before - 12.0).abs() < 1e-9);
    }

    fn order_and_member() -> impl Strategy<Value = (Vec<u32>, usize)> {
        prop::collection::hash_set(0u32..1000, 1..30)
            .prop_map(|set| set.into_iter().collect::<Vec<_>>())
            .prop_flat_map(|ids| {
                let len = ids.len();
                (Just(ids), 0..len)
            })
    }

    proptest! {
        #[test]
        fn send_to_back_preserves_membership((ids, pick) in order_and_member()) {
            let mut order = StackOrder::new(ids.clone());
            let id = ids[pick];
            prop_assert!(order.send_to_back(id));
            prop_assert_eq!(order.len(), ids.len());
            prop_assert_eq!(sorted(order.ids()), sorted(&ids));
            prop_assert_eq!(order.ids()[0], id);
            // Everything else keeps its relative order.
            let rest: Vec<u32> = ids.iter().copied().filter(|&other| other != id).collect();
            prop_assert_eq!(&order.ids()[1..], rest.as_slice());
        }

        #[test]
        fn send_to_back_non_member_is_noop(
            ids in prop::collection::vec(0u32..100, 0..20),
            stranger in 100u32..200,
        ) {
            let mut order = StackOrder::new(ids.clone());
            prop_assert!(!order.send_to_back(stranger));
            prop_assert_eq!(order.ids(), ids.as_slice());
        }

        #[test]
        fn release_outcome_matches_threshold(dx in -400.0f64..400.0, dy in -400.0f64..400.0) {
            let config = StackConfig::gallery();
            let sensitivity = config.sensitivity;
            let mut stack = CardStack::new((1..=7).collect(), config, &mut FixedTilt(0.0));
            let before = stack.order().clone();

            stack.press(7, 500.0, 500.0);
            stack.drag_to(500.0 + dx, 500.0 + dy);
            let outcome = stack.release();

            if dx.abs() > sensitivity || dy.abs() > sensitivity {
                prop_assert_eq!(outcome, ReleaseOutcome::SentToBack(7));
                let mut expected = before.clone();
                expected.send_to_back(7);
                prop_assert_eq!(stack.order(), &expected);
            } else {
                prop_assert_eq!(outcome, ReleaseOutcome::SettledBack(7));
                prop_assert_eq!(stack.order(), &before);
            }
            prop_assert_eq!(stack.pose(7).unwrap().offset, Offset::ZERO);
        }
    }
}
